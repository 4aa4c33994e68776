//! Conversion service that writes the test, source and reference sets.

use std::fs;
use std::path::PathBuf;

use crate::config::{is_known_language, OutputPaths};
use crate::error::{Result, SgmError};
use crate::sgm::{write_ref_sgm, write_sgm};
use crate::types::SetKind;

/// Inputs of a single conversion run.
#[derive(Debug, Clone)]
pub struct ConvertRequest {
    /// Target language code. Recorded only; never validated.
    pub lang: String,
    /// Hypothesis file, one translation per line.
    pub hyps: PathBuf,
    /// Directory receiving `hyps`, `src` and `ref`.
    pub out_dir: PathBuf,
    /// Reference files, line-aligned with `hyps`. The first one also fills the source set.
    pub refs: Vec<PathBuf>,
}

/// What a conversion wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertSummary {
    pub paths: OutputPaths,
    /// Segments in the hypothesis set.
    pub hyp_segments: usize,
    /// Segments in the source set, i.e. lines of the first reference.
    pub src_segments: usize,
    /// Segments per reference document, in argument order.
    pub ref_segments: Vec<usize>,
}

/// Convert plain-text hypotheses and references into SGML sets.
///
/// Writes, in order:
/// 1. `hyps`: the hypothesis file as a `<tstset>`
/// 2. `src`: the first reference as a `<srcset>`
/// 3. `ref`: every reference as a `<refset>` document, `sysid` 1..N
///
/// The output directory is created when missing. The first error aborts
/// the remaining writes.
pub fn convert(request: &ConvertRequest) -> Result<ConvertSummary> {
    let first_ref = request.refs.first().ok_or(SgmError::NoReferences)?;

    if !is_known_language(&request.lang) {
        tracing::debug!(lang = %request.lang, "Language not in METEOR's list, continuing");
    }

    fs::create_dir_all(&request.out_dir).map_err(|source| SgmError::CreateDir {
        path: request.out_dir.clone(),
        source,
    })?;
    let paths = OutputPaths::new(&request.out_dir);

    let test = SetKind::Test;
    let hyp_segments = write_sgm(&request.hyps, &paths.hyps, &test.header(), &test.footer())?;

    let source = SetKind::Source;
    let src_segments = write_sgm(first_ref, &paths.src, &source.header(), &source.footer())?;
    tracing::info!(segments = src_segments, "Source length");

    let reference = SetKind::Reference;
    let ref_segments = write_ref_sgm(
        &request.refs,
        &paths.refs,
        &reference.header(),
        &reference.footer(),
    )?;

    for (path, &count) in request.refs.iter().zip(&ref_segments) {
        if count != hyp_segments {
            tracing::warn!(
                reference = %path.display(),
                reference_lines = count,
                hypothesis_lines = hyp_segments,
                "Reference is not line-aligned with the hypothesis"
            );
        }
    }

    Ok(ConvertSummary {
        paths,
        hyp_segments,
        src_segments,
        ref_segments,
    })
}
