// src/gui/components/mod.rs
pub mod company_table;
pub mod filter_bar;
pub mod nav_bar;
pub mod panels;
pub mod status_bar;
