// file: src/utils/mod.rs
// description: utility module exports
// reference: internal module structure

pub mod logging;
