// tests/load.rs
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::{Duration, Instant};

use smallcap_dir::error::FetchError;
use smallcap_dir::load::{LoadState, Loader};
use smallcap_dir::progress::Progress;
use smallcap_dir::record::Directory;

struct Quiet;
impl Progress for Quiet {}

fn named(name: &str) -> Directory {
    Directory::new(vec!["Company Name".into()], vec![[("Company Name", name)].into_iter().collect()])
}

fn ready_name(loader: &Loader) -> Option<String> {
    loader.state().directory().map(|d| d.records[0].name().to_string())
}

/// Poll until `done` holds or a few seconds pass.
fn poll_until(loader: &mut Loader, done: impl Fn(&Loader) -> bool) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while !done(&*loader) {
        assert!(Instant::now() < deadline, "loader did not settle in time");
        loader.poll();
        thread::sleep(Duration::from_millis(5));
    }
}

#[test]
fn new_loader_is_loading() {
    let loader = Loader::default();
    assert!(loader.state().is_loading());
    assert_eq!(loader.generation(), 0);
}

#[test]
fn settle_installs_ready_directory() {
    let mut loader = Loader::default();
    loader.settle(Ok(Directory::new(vec!["Company Name".into()], Vec::new())));
    let dir = loader.state().directory().map(Arc::clone).unwrap();
    assert_eq!(dir.column_count(), 1);
    // Nothing in flight
    assert!(!loader.poll());
}

#[test]
fn failure_keeps_the_reason() {
    let state = LoadState::from_result(Err(FetchError::Shape("missing `table`".into())));
    match state {
        LoadState::Failed(reason) => assert!(reason.contains("missing `table`"), "{reason}"),
        other => panic!("expected failure, got {other:?}"),
    }
}

#[test]
fn worker_result_reaches_poll() {
    let mut loader = Loader::default();
    loader.start(|_| Quiet, |_| Ok(named("Acme")));
    assert!(loader.state().is_loading());
    poll_until(&mut loader, |l| !l.state().is_loading());
    assert_eq!(ready_name(&loader).as_deref(), Some("Acme"));
}

#[test]
fn worker_failure_becomes_failed_state() {
    let mut loader = Loader::default();
    loader.start(|_| Quiet, |_| Err(FetchError::Upstream("Sheet is private".into())));
    poll_until(&mut loader, |l| !l.state().is_loading());
    assert!(matches!(loader.state(), LoadState::Failed(r) if r.contains("Sheet is private")));
}

#[test]
fn superseded_load_finishing_last_is_dropped() {
    let mut loader = Loader::default();
    let (gate_tx, gate_rx) = mpsc::channel::<()>();

    // First visit: held until the gate opens.
    loader.start(|_| Quiet, move |_| {
        let _ = gate_rx.recv();
        Ok(named("Old Visit"))
    });
    // Second visit finishes first.
    loader.start(|_| Quiet, |_| Ok(named("New Visit")));
    assert_eq!(loader.generation(), 2);

    poll_until(&mut loader, |l| !l.state().is_loading());
    assert_eq!(ready_name(&loader).as_deref(), Some("New Visit"));

    // Now let the stale one land.
    gate_tx.send(()).unwrap();
    poll_until(&mut loader, |l| l.dropped() == 1);
    assert_eq!(ready_name(&loader).as_deref(), Some("New Visit"));
    assert!(!loader.poll());
}

#[test]
fn settle_supersedes_a_load_in_flight() {
    let mut loader = Loader::default();
    let (gate_tx, gate_rx) = mpsc::channel::<()>();
    loader.start(|_| Quiet, move |_| {
        let _ = gate_rx.recv();
        Ok(named("Late"))
    });
    loader.settle(Ok(named("Settled")));

    gate_tx.send(()).unwrap();
    poll_until(&mut loader, |l| l.dropped() == 1);
    assert_eq!(ready_name(&loader).as_deref(), Some("Settled"));
}
