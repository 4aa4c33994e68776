//! Configuration constants and output path resolution for the SGM writer.

use std::path::{Path, PathBuf};

/// File name of the hypothesis test set inside the output directory.
pub const HYPS_FILE_NAME: &str = "hyps";

/// File name of the source set inside the output directory.
pub const SRC_FILE_NAME: &str = "src";

/// File name of the reference set inside the output directory.
pub const REF_FILE_NAME: &str = "ref";

/// Placeholder used for every set and document attribute that scorers ignore.
pub const ANY: &str = "any";

/// Exit status for usage errors and failed runs.
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Language codes METEOR ships resources for.
///
/// Shown in the usage text only. Any other code is accepted as well.
pub const METEOR_LANGUAGES: &[&str] = &[
    "en", "cz", "de", "es", "fr", "ar", "da", "fi", "hu", "it", "nl", "no", "pt", "ro", "ru",
    "se", "tr", "other",
];

/// Check whether `lang` is one of [`METEOR_LANGUAGES`].
///
/// # Examples
/// ```
/// use sgm_writer::config::is_known_language;
///
/// assert!(is_known_language("en"));
/// assert!(!is_known_language("klingon"));
/// ```
pub fn is_known_language(lang: &str) -> bool {
    METEOR_LANGUAGES.contains(&lang)
}

/// The three fixed output files of a conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub hyps: PathBuf,
    pub src: PathBuf,
    pub refs: PathBuf,
}

impl OutputPaths {
    /// Resolve the output files inside `out_dir`.
    pub fn new(out_dir: &Path) -> Self {
        Self {
            hyps: out_dir.join(HYPS_FILE_NAME),
            src: out_dir.join(SRC_FILE_NAME),
            refs: out_dir.join(REF_FILE_NAME),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_paths() {
        let paths = OutputPaths::new(Path::new("work"));
        assert_eq!(paths.hyps, Path::new("work").join("hyps"));
        assert_eq!(paths.src, Path::new("work").join("src"));
        assert_eq!(paths.refs, Path::new("work").join("ref"));
    }

    #[test]
    fn test_is_known_language() {
        assert!(is_known_language("de"));
        assert!(is_known_language("other"));
        assert!(!is_known_language("EN"));
        assert!(!is_known_language(""));
    }
}
