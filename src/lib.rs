pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod output;
pub mod platform;
pub mod profile;
pub mod query;

pub use error::{Error, Result};
