// file: src/crm/mod.rs
// description: CRM search API module exports
// reference: internal module structure

pub mod client;
pub mod request;
pub mod response;

pub use client::{CompanySearchClient, CredentialStatus};
pub use request::SearchPayload;
pub use response::{SearchHit, SearchResponse};
