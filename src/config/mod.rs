//! Configuration for the `pxb` command line
//!
//! Provides types, discovery and parsing for `pixelbrawl.toml`.

pub mod loader;
pub mod schema;

pub use loader::*;
pub use schema::*;
