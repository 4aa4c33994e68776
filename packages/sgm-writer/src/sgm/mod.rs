//! SGML set generation for hypothesis, source and reference files.

mod writer;

pub use writer::{write_ref_sgm, write_sgm};
