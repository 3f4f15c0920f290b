//! FASTA serialization with fixed-width line wrapping

use crate::error::Result;
use crate::pipeline::just_the_name;
use crate::types::Contig;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Width of wrapped sequence lines
const LINE_WIDTH: usize = 70;

/// Write one sequence as 70-character lines, each newline-terminated
///
/// The final chunk may be shorter; an empty sequence writes nothing.
fn write_wrapped<W: Write>(out: &mut W, sequence: &str) -> Result<()> {
    for chunk in sequence.as_bytes().chunks(LINE_WIDTH) {
        out.write_all(chunk)?;
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// Serialize contigs to a FASTA file, in input order
///
/// Each contig is written as a `>` + name header line followed by its
/// sequence wrapped at 70 characters. Headers are written verbatim and
/// never wrapped.
///
/// # Examples
///
/// ```no_run
/// use fastakit::{write_contigs_to_file, Contig};
///
/// let contigs = vec![Contig::new("seq1".to_string(), "GATTACA".to_string())];
/// write_contigs_to_file("out.fa", &contigs)?;
/// # Ok::<(), fastakit::FastakitError>(())
/// ```
pub fn write_contigs_to_file<P: AsRef<Path>>(out_filename: P, contigs: &[Contig]) -> Result<()> {
    let path = out_filename.as_ref();
    let mut out = BufWriter::new(File::create(path)?);
    for contig in contigs {
        writeln!(out, ">{}", contig.name)?;
        write_wrapped(&mut out, &contig.sequence)?;
    }
    out.flush()?;

    let total_bases: usize = contigs.iter().map(|c| c.sequence.len()).sum();
    log::info!(
        "done writing {} contigs and {} bp to {}",
        contigs.len(),
        total_bases,
        path.display()
    );
    Ok(())
}

/// Write a complete FASTA file from a single pre-joined content string
///
/// `content` may be a plain sequence or a blob with embedded `>header`
/// lines separated by newlines. When it does not already start with a
/// header, one is synthesized: `header` if given, otherwise `>` + the
/// output file's base name (directory and extensions stripped).
///
/// Embedded header lines are written verbatim; everything else is wrapped
/// at 70 characters. A header immediately followed by another header (or
/// by the end of the content) has no sequence of its own; it is logged as
/// a warning and processing continues.
///
/// # Examples
///
/// ```no_run
/// use fastakit::write_complete_fasta;
///
/// // Gets an auto-generated ">sample" header
/// write_complete_fasta("sample.fa", "GATTACAGATTACA", None)?;
/// # Ok::<(), fastakit::FastakitError>(())
/// ```
pub fn write_complete_fasta<P: AsRef<Path>>(
    file_path: P,
    content: &str,
    header: Option<&str>,
) -> Result<()> {
    let path = file_path.as_ref();
    let mut out = BufWriter::new(File::create(path)?);

    if content.starts_with('>') {
        write_fasta_lines(&mut out, content)?;
    } else {
        let header = match header {
            Some(h) => h.to_string(),
            None => format!(">{}", just_the_name(path)),
        };
        write_fasta_lines(&mut out, &format!("{}\n{}", header, content))?;
    }
    out.flush()?;
    Ok(())
}

/// Re-split joined content on embedded headers and write each piece
fn write_fasta_lines<W: Write>(out: &mut W, content: &str) -> Result<()> {
    let lines: Vec<&str> = content.split('\n').collect();
    for (index, line) in lines.iter().enumerate() {
        if line.starts_with('>') {
            let next = lines.get(index + 1);
            if next.map_or(true, |n| n.starts_with('>')) {
                log::warn!("orphaned header with no sequence: {}", line);
            }
            writeln!(out, "{}", line)?;
        } else if !line.is_empty() {
            write_wrapped(out, line)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_lines_to_string(content: &str) -> String {
        let mut buf = Vec::new();
        write_fasta_lines(&mut buf, content).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_wrap_75_characters_into_70_and_5() {
        let sequence = "A".repeat(75);
        let mut buf = Vec::new();
        write_wrapped(&mut buf, &sequence).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].len(), 70);
        assert_eq!(lines[1].len(), 5);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_wrap_exact_multiple_has_no_empty_line() {
        let sequence = "C".repeat(140);
        let mut buf = Vec::new();
        write_wrapped(&mut buf, &sequence).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(!text.contains("\n\n"));
    }

    #[test]
    fn test_headers_written_verbatim_never_wrapped() {
        let long_name = "n".repeat(100);
        let text = write_lines_to_string(&format!(">{}\nACGT", long_name));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], format!(">{}", long_name));
        assert_eq!(lines[1], "ACGT");
    }

    #[test]
    fn test_orphaned_header_is_kept() {
        // The orphan is warned about but still written
        let text = write_lines_to_string(">orphan\n>real\nACGT");
        assert_eq!(text, ">orphan\n>real\nACGT\n");
    }

    #[test]
    fn test_multiple_embedded_records() {
        let text = write_lines_to_string(">a\nAAAA\n>b\nCCCC");
        assert_eq!(text, ">a\nAAAA\n>b\nCCCC\n");
    }
}
