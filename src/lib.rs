// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod crm;
pub mod error;
pub mod exporter;
pub mod models;
pub mod runner;
pub mod utils;

pub use config::{ApiConfig, Config, OutputConfig, SearchConfig};
pub use crm::{CompanySearchClient, CredentialStatus, SearchPayload, SearchResponse};
pub use error::{Result, SearchError};
pub use exporter::CsvExporter;
pub use models::CompanyRecord;
pub use runner::{MalformedPolicy, SearchOutcome, SearchRunner, SearchStats};
