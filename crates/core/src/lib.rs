//! Schema Args Core Library
//!
//! A small, schema-driven command-line argument parser. A compact schema
//! string declares single-letter flags and the kind of value each carries;
//! the parser validates an argument vector against it and exposes typed
//! getters for the result.
//!
//! # Schema Format
//!
//! Declarations are separated by commas:
//!
//! - `l` is a boolean flag, set by `-l`
//! - `p#` is an integer flag, set by `-p 8080`
//! - `d*` is a string flag, set by `-d /var/log`
//!
//! Several flags may share one marker: `-lp 8080` sets `l` and reads `p`
//! from the next argument.
//!
//! # Errors
//!
//! A malformed schema fails construction with an [`error::Error`]. Bad user
//! input does not; it leaves the [`Args`] invalid with a message describing
//! the first problem.
//!
//! # Examples
//!
//! ```
//! use schema_args_core::Args;
//!
//! let args = Args::new("l,p#,d*", &["-l", "-x"])?;
//! assert!(!args.is_valid());
//! assert_eq!(args.error_message(), "Argument(s) -x unexpected.");
//! assert!(args.get_boolean('l'));
//! # Ok::<(), schema_args_core::error::Error>(())
//! ```

pub mod args;
pub mod config;
pub mod error;
pub mod report;
mod scan;
pub mod schema;
pub mod value;

pub use args::Args;
pub use scan::MARKER;
