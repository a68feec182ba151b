//! # railtypes-dsl
//!
//! Reads the `create_table` / `t.<type>` subset of a Rails `db/schema.rb`
//! and writes TypeScript interfaces for it.
//!
//! This crate provides:
//! - A line classifier that recognizes table and column declarations
//! - A schema builder that folds classified lines into a `Schema`
//! - An emitter that renders one `interface` block per table
//!
//! Lines that declare neither a table nor a column are skipped silently.
//!
//! # Example
//!
//! ```
//! use railtypes_dsl::{emit, parse};
//!
//! let source = r#"
//! ActiveRecord::Schema.define(version: 2024_01_01_000000) do
//!   create_table "user_accounts", force: :cascade do |t|
//!     t.string "email", null: false
//!     t.boolean "admin"
//!   end
//! end
//! "#;
//!
//! let schema = parse(source).expect("parse failed");
//! assert_eq!(schema.len(), 1);
//!
//! let ts = emit(&schema);
//! assert_eq!(
//!     ts,
//!     "interface IUserAccounts {\n\tid: integer\n\temail: string\n\tadmin: boolean\n}"
//! );
//! ```

pub mod classifier;
pub mod emitter;
pub mod error;
mod lexer;
pub mod parser;
pub mod token;

pub use classifier::{classify, LineKind};
pub use emitter::{emit, emit_table, interface_name, target_type};
pub use error::{DslError, Span};
pub use parser::{parse, SchemaBuilder, UnboundColumnPolicy};
