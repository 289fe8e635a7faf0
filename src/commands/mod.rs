//! Command implementations for the `nrc` CLI

pub mod convert;
pub mod info;
