pub mod catalog;
pub mod cli;
pub mod config;
pub mod contact;
pub mod error;
pub mod io;
pub mod query;
pub mod view;

pub use error::{FolioError, Result};
