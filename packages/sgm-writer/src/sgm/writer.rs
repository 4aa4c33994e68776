//! Line-to-segment SGML writer.
//!
//! Every input line becomes one `<seg>` element. Lines are split on `\n`
//! and stripped of surrounding C `isspace` whitespace (space, `\t`, `\n`,
//! `\x0B`, `\x0C`, `\r`); the remaining bytes are
//! copied verbatim, without escaping and without requiring UTF-8.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::config::ANY;
use crate::error::{Result, SgmError};
use crate::types::SysId;

/// Write a set holding a single `sysid="any"` document built from `in_file`.
///
/// The input is opened before the output is created, so a missing input
/// leaves any existing `out_sgm` untouched.
///
/// # Arguments
/// * `in_file` - Plain-text file, one segment per line
/// * `out_sgm` - Output file, created or truncated
/// * `header` - Opening set line, e.g. from [`SetKind::header`](crate::SetKind::header)
/// * `footer` - Closing set line
///
/// # Returns
/// Number of lines read from `in_file`
pub fn write_sgm(in_file: &Path, out_sgm: &Path, header: &str, footer: &str) -> Result<usize> {
    let reader = BufReader::new(File::open(in_file).map_err(SgmError::read(in_file))?);
    let mut out = BufWriter::new(File::create(out_sgm).map_err(SgmError::write(out_sgm))?);

    writeln!(out, "{header}").map_err(SgmError::write(out_sgm))?;
    let count = write_document(reader, &mut out, SysId::Any, in_file, out_sgm)?;
    writeln!(out, "{footer}").map_err(SgmError::write(out_sgm))?;
    out.flush().map_err(SgmError::write(out_sgm))?;

    tracing::debug!(path = %out_sgm.display(), segments = count, "Wrote SGM set");
    Ok(count)
}

/// Write a set holding one document per file in `in_files`.
///
/// Documents get `sysid` 1, 2, ... in the order the files are given.
/// Inputs are opened one at a time; if one fails, the output is left
/// holding the documents written so far.
///
/// # Returns
/// Line count of each input, in input order
pub fn write_ref_sgm<P: AsRef<Path>>(
    in_files: &[P],
    out_sgm: &Path,
    header: &str,
    footer: &str,
) -> Result<Vec<usize>> {
    let mut out = BufWriter::new(File::create(out_sgm).map_err(SgmError::write(out_sgm))?);
    writeln!(out, "{header}").map_err(SgmError::write(out_sgm))?;

    let mut counts = Vec::with_capacity(in_files.len());
    for (i, in_file) in in_files.iter().enumerate() {
        let in_file = in_file.as_ref();
        let reader = BufReader::new(File::open(in_file).map_err(SgmError::read(in_file))?);
        counts.push(write_document(
            reader,
            &mut out,
            SysId::Index(i + 1),
            in_file,
            out_sgm,
        )?);
    }

    writeln!(out, "{footer}").map_err(SgmError::write(out_sgm))?;
    out.flush().map_err(SgmError::write(out_sgm))?;

    tracing::debug!(
        path = %out_sgm.display(),
        documents = counts.len(),
        segments = counts.iter().sum::<usize>(),
        "Wrote SGM set"
    );
    Ok(counts)
}

/// Write one `<doc>` element with a `<seg>` per line of `reader`.
///
/// `source` and `target` only label errors.
fn write_document<R: BufRead, W: Write>(
    reader: R,
    out: &mut W,
    sysid: SysId,
    source: &Path,
    target: &Path,
) -> Result<usize> {
    writeln!(out, "<doc sysid=\"{sysid}\" docid=\"{ANY}\">").map_err(SgmError::write(target))?;

    let mut count = 0;
    for line in reader.split(b'\n') {
        let line = line.map_err(SgmError::read(source))?;
        count += 1;
        write_segment(out, count, strip_line(&line)).map_err(SgmError::write(target))?;
    }

    writeln!(out, "</doc>").map_err(SgmError::write(target))?;
    Ok(count)
}

/// Strip leading and trailing whitespace, vertical tab included.
fn strip_line(line: &[u8]) -> &[u8] {
    let is_space = |b: &u8| matches!(b, b' ' | b'\t' | b'\n' | b'\x0B' | b'\x0C' | b'\r');
    match line.iter().position(|b| !is_space(b)) {
        Some(start) => {
            let end = line.iter().rposition(|b| !is_space(b)).map_or(start, |i| i + 1);
            &line[start..end]
        }
        None => &[],
    }
}

fn write_segment<W: Write>(out: &mut W, id: usize, text: &[u8]) -> std::io::Result<()> {
    write!(out, "<seg id=\"{id}\"> ")?;
    out.write_all(text)?;
    out.write_all(b" </seg>\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SetKind;
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn render(input: &[u8], sysid: SysId) -> (String, usize) {
        let mut out = Vec::new();
        let count = write_document(
            Cursor::new(input),
            &mut out,
            sysid,
            Path::new("in"),
            Path::new("out"),
        )
        .unwrap();
        (String::from_utf8(out).unwrap(), count)
    }

    #[test]
    fn test_document_numbers_segments_in_order() {
        let (doc, count) = render(b"one\ntwo\nthree\n", SysId::Any);
        assert_eq!(count, 3);
        assert_eq!(
            doc,
            "<doc sysid=\"any\" docid=\"any\">\n\
             <seg id=\"1\"> one </seg>\n\
             <seg id=\"2\"> two </seg>\n\
             <seg id=\"3\"> three </seg>\n\
             </doc>\n"
        );
    }

    #[test]
    fn test_document_strips_surrounding_whitespace() {
        let (doc, _) = render(b"  padded\t\r\n\tinner  space kept \n", SysId::Index(2));
        assert_eq!(
            doc,
            "<doc sysid=\"2\" docid=\"any\">\n\
             <seg id=\"1\"> padded </seg>\n\
             <seg id=\"2\"> inner  space kept </seg>\n\
             </doc>\n"
        );
    }

    #[test]
    fn test_document_strips_vertical_tab_and_form_feed() {
        let (doc, _) = render(b"\x0bword\x0b\n\x0c\x0b mid\x0bdle \x0c\n\x0b\x0c\n", SysId::Any);
        assert_eq!(
            doc,
            "<doc sysid=\"any\" docid=\"any\">\n\
             <seg id=\"1\"> word </seg>\n\
             <seg id=\"2\"> mid\u{b}dle </seg>\n\
             <seg id=\"3\">  </seg>\n\
             </doc>\n"
        );
    }

    #[test]
    fn test_strip_line() {
        assert_eq!(strip_line(b" \t\x0ba b\x0c\r"), b"a b");
        assert_eq!(strip_line(b"\x0b\x0c"), b"");
        assert_eq!(strip_line(b""), b"");
        assert_eq!(strip_line(b"x"), b"x");
    }

    #[test]
    fn test_document_last_line_without_newline() {
        let (doc, count) = render(b"a\nb", SysId::Any);
        assert_eq!(count, 2);
        assert!(doc.contains("<seg id=\"2\"> b </seg>\n"));
    }

    #[test]
    fn test_document_blank_lines_give_empty_segments() {
        let (doc, count) = render(b"a\n\n   \nb\n", SysId::Any);
        assert_eq!(count, 4);
        assert!(doc.contains("<seg id=\"2\">  </seg>\n"));
        assert!(doc.contains("<seg id=\"3\">  </seg>\n"));
        assert!(doc.contains("<seg id=\"4\"> b </seg>\n"));
    }

    #[test]
    fn test_document_empty_input() {
        let (doc, count) = render(b"", SysId::Any);
        assert_eq!(count, 0);
        assert_eq!(doc, "<doc sysid=\"any\" docid=\"any\">\n</doc>\n");
    }

    #[test]
    fn test_markup_is_not_escaped() {
        let (doc, _) = render(b"a < b && c > d\n", SysId::Any);
        assert!(doc.contains("<seg id=\"1\"> a < b && c > d </seg>"));
    }

    #[test]
    fn test_non_utf8_bytes_pass_through() {
        let mut out = Vec::new();
        write_document(
            Cursor::new(b"caf\xe9\n".to_vec()),
            &mut out,
            SysId::Any,
            Path::new("in"),
            Path::new("out"),
        )
        .unwrap();
        assert!(out
            .windows(b"caf\xe9 </seg>".len())
            .any(|w| w == b"caf\xe9 </seg>"));
    }

    #[test]
    fn test_write_sgm() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("hyps.txt");
        let output = dir.path().join("hyps");
        fs::write(&input, "hello world\nfoo bar\n").unwrap();

        let kind = SetKind::Test;
        let count = write_sgm(&input, &output, &kind.header(), &kind.footer()).unwrap();

        assert_eq!(count, 2);
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "<tstset trglang=\"any\" setid=\"any\" srclang=\"any\">\n\
             <doc sysid=\"any\" docid=\"any\">\n\
             <seg id=\"1\"> hello world </seg>\n\
             <seg id=\"2\"> foo bar </seg>\n\
             </doc>\n\
             </tstset>\n"
        );
    }

    #[test]
    fn test_write_sgm_missing_input_keeps_output() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("src");
        fs::write(&output, "previous").unwrap();

        let err = write_sgm(&dir.path().join("missing.txt"), &output, "<a>", "</a>").unwrap_err();

        assert!(matches!(err, SgmError::Read { .. }));
        assert_eq!(fs::read_to_string(&output).unwrap(), "previous");
    }

    #[test]
    fn test_write_sgm_unwritable_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.txt");
        fs::write(&input, "x\n").unwrap();

        let err = write_sgm(&input, &dir.path().join("no/such/dir/out"), "<a>", "</a>").unwrap_err();

        assert!(matches!(err, SgmError::Write { .. }));
    }

    #[test]
    fn test_write_ref_sgm_restarts_numbering_per_document() {
        let dir = tempdir().unwrap();
        let ref1 = dir.path().join("ref1.txt");
        let ref2 = dir.path().join("ref2.txt");
        let output = dir.path().join("ref");
        fs::write(&ref1, "a\nb\n").unwrap();
        fs::write(&ref2, "c\n").unwrap();

        let kind = SetKind::Reference;
        let counts = write_ref_sgm(&[&ref1, &ref2], &output, &kind.header(), &kind.footer()).unwrap();

        assert_eq!(counts, vec![2, 1]);
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "<refset trglang=\"any\" setid=\"any\" srclang=\"any\">\n\
             <doc sysid=\"1\" docid=\"any\">\n\
             <seg id=\"1\"> a </seg>\n\
             <seg id=\"2\"> b </seg>\n\
             </doc>\n\
             <doc sysid=\"2\" docid=\"any\">\n\
             <seg id=\"1\"> c </seg>\n\
             </doc>\n\
             </refset>\n"
        );
    }

    #[test]
    fn test_write_ref_sgm_missing_input_truncates() {
        let dir = tempdir().unwrap();
        let ref1 = dir.path().join("ref1.txt");
        let output = dir.path().join("ref");
        fs::write(&ref1, "a\n").unwrap();

        let err = write_ref_sgm(
            &[ref1.clone(), dir.path().join("missing.txt")],
            &output,
            "<refset>",
            "</refset>",
        )
        .unwrap_err();

        assert!(matches!(err, SgmError::Read { ref path, .. } if path.ends_with("missing.txt")));
        let partial = fs::read_to_string(&output).unwrap();
        assert!(partial.contains("<doc sysid=\"1\" docid=\"any\">"));
        assert!(!partial.contains("</refset>"));
    }
}
