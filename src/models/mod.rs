// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod company;

pub use company::CompanyRecord;
