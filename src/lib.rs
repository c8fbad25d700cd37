// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;
pub mod progress;

pub mod record;
pub mod sources;

pub mod detail;
pub mod export;
pub mod extract;
pub mod format;
pub mod load;
pub mod routing;
pub mod search;

pub mod gui;

#[cfg(feature = "cli")]
pub mod cli;
