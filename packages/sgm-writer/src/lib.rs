//! SGM writer - Convert plain-text MT output into SGML evaluation sets.
//!
//! Scorers such as TER and METEOR read hypotheses and references as SGML
//! `<tstset>` / `<srcset>` / `<refset>` files. This crate wraps every line
//! of a plain-text file in a numbered `<seg>` element and writes the three
//! sets into an output directory.
//!
//! # Example
//!
//! ```
//! use sgm_writer::{SetKind, SysId};
//!
//! assert_eq!(SetKind::Reference.footer(), "</refset>");
//! assert_eq!(SysId::Index(2).to_string(), "2");
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Output file names and fixed attribute values
//! - [`types`]: Set kinds and document ids
//! - [`error`]: Error types and Result alias
//! - [`sgm`]: Line-to-segment writers
//! - [`convert`]: Writes the test, source and reference sets
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod sgm;
pub mod types;

pub use convert::{convert, ConvertRequest, ConvertSummary};

pub use config::OutputPaths;
pub use error::{Result, SgmError};
pub use types::{SetKind, SysId};
