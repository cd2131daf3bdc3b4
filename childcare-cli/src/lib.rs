//! Command-line adapter around `childcare-core`: reads household figures from
//! arguments or CSV, evaluates them and prints plain-text reports.

pub mod cli;
pub mod config;
pub mod csv_loader;
pub mod logging;
pub mod render;
pub mod utils;
