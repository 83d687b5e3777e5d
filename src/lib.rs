pub mod config;
pub mod entry;
pub mod error;
pub mod git;
pub mod tagger;
pub mod ui;
pub mod versions_file;

pub use error::{BatchTagError, Result};
