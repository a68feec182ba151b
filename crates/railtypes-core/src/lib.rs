//! # railtypes-core
//!
//! The in-memory model of a Rails `db/schema.rb` file: an ordered set of
//! tables, each holding an ordered set of typed columns.
//!
//! Names and type tokens are validated newtypes, so a [`types::Schema`] can
//! only ever hold values the schema dialect could have produced.

pub mod error;
pub mod types;

pub use error::SchemaError;
