//! `familyvault` - In-memory records for family members, assets, and documents
//!
//! This library provides the record types, creation functions that announce
//! each new record, and a summary report over all records. Nothing is
//! persisted; records live only as long as the caller holds them.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod demo;
pub mod error;
pub mod factory;
pub mod logging;
pub mod record;
pub mod report;
pub mod vault;

pub use config::Config;
pub use error::{Error, Result};
pub use factory::{add_asset, add_document, add_family_member, RecordFactory};
pub use logging::init_logging;
pub use record::{Asset, Document, Member, Record};
pub use report::{generate_summary, write_summary, ReportFormat, Summary};
pub use vault::Vault;
