// src/cli.rs
use std::ffi::OsString;
use std::io::{self, Write};
use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Result, WrapErr, eyre};

use crate::{
    config::{
        consts::*,
        options::{ExportFormat, ExportOptions, MatchScope, SourceKind, SourceOptions},
    },
    detail::CompanyDetail,
    error::DirectoryError,
    export, format,
    log::{self as logging, LogTarget},
    progress::Progress,
    record::Directory,
    routing::{self, Route},
    search::{self, FilterView, Query},
    sources,
};

#[derive(Parser, Debug)]
#[command(name = "cli", version, about = "smallcap.ai company directory")]
pub struct Cli {
    /// Which spreadsheet export to read
    #[arg(long, value_enum, default_value_t = Source::Json, global = true)]
    source: Source,

    #[arg(long, default_value = SHEET_ID, global = true)]
    sheet_id: String,

    #[arg(long, default_value = TAB_ID, global = true)]
    tab_id: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = TIMEOUT_SECS, global = true)]
    timeout: u64,

    /// More log output on stderr (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Source {
    Json,
    Csv,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutFormat {
    Table,
    Csv,
    Tsv,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List companies, optionally searched and filtered
    List(ListArgs),
    /// Show one company. Accepts a plain name or an encoded route like /Acme%20Corp
    Show {
        name: String,
        /// Print every non-empty column as-is instead of the grouped view
        #[arg(long)]
        raw: bool,
    },
    /// Distinct values of a column (e.g. Exchange, Sector)
    Facets { column: String },
    /// Print the detail-page route for a company name
    Route { name: String },
}

#[derive(Args, Debug)]
struct ListArgs {
    /// Case-insensitive text search
    #[arg(short, long, default_value = "")]
    search: String,

    /// Search every column instead of name / industry / headquarters
    #[arg(long)]
    all_fields: bool,

    #[arg(long, default_value = "")]
    exchange: String,

    #[arg(long, default_value = "")]
    sector: String,

    #[arg(long, default_value = "")]
    industry: String,

    /// Extra exact-match filter, COLUMN=VALUE (repeatable)
    #[arg(long = "facet", value_parser = parse_facet)]
    facets: Vec<(String, String)>,

    #[arg(long, value_enum, default_value_t = OutFormat::Table)]
    format: OutFormat,

    /// Omit the header line for csv/tsv
    #[arg(long)]
    no_headers: bool,
}

fn parse_facet(s: &str) -> Result<(String, String), String> {
    let (col, val) = s
        .split_once('=')
        .ok_or_else(|| format!("expected COLUMN=VALUE, got {s:?}"))?;
    Ok((s!(col.trim()), s!(val.trim())))
}

impl Cli {
    fn source_options(&self) -> SourceOptions {
        SourceOptions {
            kind: match self.source {
                Source::Json => SourceKind::JsonTable,
                Source::Csv => SourceKind::Csv,
            },
            sheet_id: self.sheet_id.clone(),
            tab_id: self.tab_id.clone(),
            timeout: Duration::from_secs(self.timeout),
        }
    }
}

/// Progress lines on stderr, only with -v.
struct CliProgress {
    verbose: bool,
}

impl Progress for CliProgress {
    fn begin(&mut self, url: &str) {
        if self.verbose { eprintln!("Fetching {url}"); }
    }
    fn log(&mut self, msg: &str) {
        if self.verbose { eprintln!("{msg}"); }
    }
    fn fetched(&mut self, bytes: usize) {
        if self.verbose { eprintln!("Received {bytes} bytes"); }
    }
    fn parsed(&mut self, rows: usize, columns: usize) {
        if self.verbose { eprintln!("Loaded {rows} companies ({columns} columns)"); }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(LogTarget::Stderr, logging::level_from_verbosity(cli.verbose));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&cli, &mut out)
}

/// Parse `args` (program name first) and run against `out`. No logger setup.
pub fn run_with<I, T>(args: I, out: &mut impl Write) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)?;
    execute(&cli, out)
}

fn execute(cli: &Cli, out: &mut impl Write) -> Result<()> {
    match &cli.command {
        Command::Route { name } => writeln!(out, "{}", routing::company_path(name))?,
        Command::List(args) => list(out, &fetch(cli)?, args)?,
        Command::Show { name, raw } => show(out, &fetch(cli)?, name, *raw)?,
        Command::Facets { column } => {
            for v in search::facet_values(&fetch(cli)?.records, column) {
                writeln!(out, "{v}")?;
            }
        }
    }
    Ok(())
}

/// One blocking load, errors worded for the user.
fn fetch(cli: &Cli) -> Result<Directory> {
    let opts = cli.source_options();
    let mut progress = CliProgress { verbose: cli.verbose > 0 };
    sources::load(&opts, Some(&mut progress))
        .map_err(DirectoryError::from)
        .map_err(|e| eyre!("{}: {}", e.user_message(), e))
}

fn list(out: &mut impl Write, dir: &Directory, args: &ListArgs) -> Result<()> {
    let scope = if args.all_fields { MatchScope::AllFields } else { MatchScope::Listed };
    let mut query = Query::new(&args.search)
        .scope(scope)
        .facet(COL_EXCHANGE, &args.exchange)
        .facet(COL_SECTOR, &args.sector)
        .facet(COL_INDUSTRY, &args.industry);
    for (col, val) in &args.facets {
        query = query.facet(col, val);
    }

    let view = FilterView::apply(dir, &query);
    logf!("List: {} of {} companies match", view.len(), dir.row_count());

    match args.format {
        OutFormat::Table => write_cards_table(out, &view)?,
        OutFormat::Csv | OutFormat::Tsv => {
            let opts = ExportOptions {
                format: if matches!(args.format, OutFormat::Csv) { ExportFormat::Csv } else { ExportFormat::Tsv },
                include_headers: !args.no_headers,
            };
            export::write_table(&mut *out, &dir.columns, view.records(), &opts)
                .wrap_err("writing export")?;
        }
    }
    Ok(())
}

const TABLE_COLUMNS: &[&str] = &[COL_NAME, COL_INDUSTRY, COL_EXCHANGE, COL_HEADQUARTERS, COL_VALUATION, COL_WEBSITE];

fn write_cards_table(out: &mut impl Write, view: &FilterView<'_>) -> Result<()> {
    if view.is_empty() {
        writeln!(out, "No companies match your search criteria")?;
        return Ok(());
    }

    let cells: Vec<Vec<String>> = view
        .records()
        .map(|rec| {
            TABLE_COLUMNS
                .iter()
                .map(|&col| match col {
                    COL_VALUATION => format::currency(rec.get(col)),
                    COL_WEBSITE => s!(format::website_label(rec.get(col))),
                    COL_EXCHANGE => s!(rec.non_empty(col).unwrap_or("")),
                    _ => s!(format::or_na(rec.get(col))),
                })
                .collect()
        })
        .collect();

    let widths: Vec<usize> = TABLE_COLUMNS
        .iter()
        .enumerate()
        .map(|(i, h)| {
            cells.iter().map(|r| r[i].chars().count()).chain([h.chars().count()]).max().unwrap_or(0)
        })
        .collect();

    let line = |row: &[&str]| {
        row.iter()
            .zip(&widths)
            .map(|(c, &w)| format!("{c:<w$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    writeln!(out, "{}", line(TABLE_COLUMNS))?;
    for row in &cells {
        let refs: Vec<&str> = row.iter().map(String::as_str).collect();
        writeln!(out, "{}", line(&refs))?;
    }
    writeln!(out, "\n{} companies found", view.len())?;
    Ok(())
}

fn show(out: &mut impl Write, dir: &Directory, name: &str, raw: bool) -> Result<()> {
    let found = if name.starts_with('/') {
        match Route::parse(name) {
            Route::Company(decoded) => routing::find_company(dir, &decoded),
            other => return Err(eyre!("{} is not a company route", other.path())),
        }
    } else {
        routing::find_company(dir, name)
    };
    let rec = found.map_err(|e| eyre!("{}: {}", e.user_message(), e))?;

    if raw {
        for (label, value) in rec.iter().filter(|(_, v)| !v.trim().is_empty()) {
            writeln!(out, "{label}: {value}")?;
        }
        return Ok(());
    }

    let d = CompanyDetail::from_record(rec);

    writeln!(out, "{}", d.name)?;
    if let Some(industry) = &d.industry { writeln!(out, "  {industry}")?; }
    if let Some(ticker) = &d.ticker { writeln!(out, "  {ticker}")?; }
    writeln!(out, "  Website: {}", d.website_label())?;

    if let Some(desc) = &d.description {
        writeln!(out, "\nAbout\n  {desc}")?;
    }

    for section in d.sections.iter().filter(|s| !s.is_empty()) {
        writeln!(out, "\n{}", section.title())?;
        for (label, value) in &section.fields {
            writeln!(out, "  {label}: {value}")?;
        }
    }

    if d.has_people() {
        writeln!(out, "\nPeople")?;
        if !d.founders.is_empty() {
            for f in &d.founders {
                writeln!(
                    out,
                    "  {}: {}",
                    format::or_na(f.name.as_deref()),
                    f.linkedin.as_deref().unwrap_or(format::NO_LINKEDIN)
                )?;
            }
        } else if let Some(text) = &d.founders_text {
            writeln!(out, "  {COL_FOUNDERS}: {text}")?;
        }
        if let Some(contacts) = &d.key_contacts {
            writeln!(out, "  {COL_KEY_CONTACTS}: {contacts}")?;
        }
    }

    if !d.social.is_empty() {
        writeln!(out, "\nConnect")?;
        if let Some(url) = &d.social.linkedin { writeln!(out, "  LinkedIn: {url}")?; }
        if let Some(url) = &d.social.twitter { writeln!(out, "  Twitter: {url}")?; }
    }
    Ok(())
}
