pub mod args;
pub mod commands;
mod config;
mod error;
mod ledger;
pub mod model;
mod registry;
mod report;
mod store;
#[cfg(test)]
mod test;
mod utils;

pub use config::Config;
pub use error::Error;
pub use error::Result;
pub use ledger::ExpenseLedger;
pub use registry::{AddOutcome, ProjectRegistry};
pub use report::Report;
pub use store::{TableRecord, TableStore};
