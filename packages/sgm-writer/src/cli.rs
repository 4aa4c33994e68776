//! Command-line interface for the SGM writer.

use std::path::PathBuf;
use std::sync::LazyLock;

use clap::error::ErrorKind;
use clap::Parser;
use console::style;

use crate::config::METEOR_LANGUAGES;
use crate::convert::{convert, ConvertRequest, ConvertSummary};
use crate::error::{Result, SgmError};

static LANGS_HELP: LazyLock<String> =
    LazyLock::new(|| format!("langs: {}", METEOR_LANGUAGES.join(" ")));

/// Write SGML test, source and reference sets for TER/METEOR scoring.
///
/// The first reference file doubles as the source set.
#[derive(Debug, Parser)]
#[command(name = "write-sgm")]
#[command(version, about, long_about = None, after_help = LANGS_HELP.as_str())]
pub struct Cli {
    /// Target language code (not validated)
    pub lang: String,

    /// Hypothesis file, one translation per line
    #[arg(allow_hyphen_values = true)]
    pub hyps: PathBuf,

    /// Output directory for `hyps`, `src` and `ref` (created if missing)
    #[arg(allow_hyphen_values = true)]
    pub out_dir: PathBuf,

    /// Reference files, line-aligned with the hypotheses
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    pub refs: Vec<PathBuf>,
}

impl From<Cli> for ConvertRequest {
    fn from(cli: Cli) -> Self {
        Self {
            lang: cli.lang,
            hyps: cli.hyps,
            out_dir: cli.out_dir,
            refs: cli.refs,
        }
    }
}

/// Parse arguments from the process command line.
///
/// `--help` and `--version` become [`SgmError::Info`], any other parse
/// failure [`SgmError::Usage`]; both hold the rendered text.
pub fn parse_args() -> Result<Cli> {
    parse_args_from(std::env::args_os())
}

/// Parse arguments from `args`, the first being the program name.
pub fn parse_args_from<I, T>(args: I) -> Result<Cli>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => SgmError::Info(e.render().to_string()),
        _ => SgmError::Usage(e.render().to_string()),
    })
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = parse_args()?;
    let summary = convert(&cli.into())?;
    print_summary(&summary);
    Ok(())
}

fn print_summary(summary: &ConvertSummary) {
    println!(
        "{} {} ({} segments)",
        style("Wrote").green().bold(),
        summary.paths.hyps.display(),
        summary.hyp_segments
    );
    println!(
        "{} {} ({} segments)",
        style("Wrote").green().bold(),
        summary.paths.src.display(),
        summary.src_segments
    );
    println!(
        "{} {} ({} documents, {} segments)",
        style("Wrote").green().bold(),
        summary.paths.refs.display(),
        summary.ref_segments.len(),
        summary.ref_segments.iter().sum::<usize>()
    );
}
