//! Configuration loading and schema definitions
//!
//! Settings shared by the api client, the search layer and the binary.

mod loader;
mod schema;

pub use loader::Config;
pub use schema::*;
