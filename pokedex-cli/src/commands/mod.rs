pub(crate) mod build;
pub(crate) mod config;
pub(crate) mod types;
