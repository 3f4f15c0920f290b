//! FASTA reading: whole-file parsing and streaming single-contig extraction

use crate::error::{FastakitError, Result};
use crate::types::Contig;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parse a FASTA file into contigs, in file order
///
/// Blank lines are skipped. Sequence lines are upper-cased and accumulated
/// per record, then joined once (linear in total sequence length). A header
/// line finalizes the previous record only if sequence content had
/// accumulated for it, so consecutive headers silently drop the earlier
/// name. Sequence lines before any header become a record with an empty
/// name; no format validation is performed.
///
/// A final record is always emitted after the last line, so a file ending
/// in a bare header yields a trailing contig with an empty sequence.
///
/// # Examples
///
/// ```no_run
/// use fastakit::read_contigs;
///
/// let contigs = read_contigs("assembly.fa")?;
/// println!("{} contigs", contigs.len());
/// # Ok::<(), fastakit::FastakitError>(())
/// ```
pub fn read_contigs<P: AsRef<Path>>(input_file_path: P) -> Result<Vec<Contig>> {
    let file = File::open(input_file_path)?;
    read_contigs_from_reader(BufReader::new(file))
}

/// Parse FASTA records from any buffered reader
///
/// This is the engine behind [`read_contigs`]; it is exposed for in-memory
/// sources and testing.
pub fn read_contigs_from_reader<R: BufRead>(reader: R) -> Result<Vec<Contig>> {
    let mut contigs = Vec::new();
    let mut current_name = String::new();
    let mut seq_collection: Vec<String> = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        if let Some(name) = line.strip_prefix('>') {
            // A second (or later) header finalizes the gathered sequence
            if !seq_collection.is_empty() {
                let sequence = seq_collection.concat();
                seq_collection.clear();
                contigs.push(Contig::new(std::mem::take(&mut current_name), sequence));
            }
            current_name = name.to_string();
        } else {
            seq_collection.push(line.to_uppercase());
        }
    }

    // The last contig is emitted unconditionally, empty sequence included
    contigs.push(Contig::new(current_name, seq_collection.concat()));
    Ok(contigs)
}

/// Scan a genome FASTA file for one named contig and return its sequence
///
/// The file is streamed line by line, so memory stays proportional to the
/// plucked contig rather than the whole genome. Header comparison is
/// case-insensitive against `>` + `chromosome_name` after trailing
/// whitespace is trimmed. Capture stops at the next header; contigs are
/// assumed contiguous and non-duplicated. The returned sequence is
/// upper-cased.
///
/// # Errors
///
/// Returns [`FastakitError::ContigNotFound`] when no header matches.
///
/// # Examples
///
/// ```no_run
/// use fastakit::pluck_contig;
///
/// let seq = pluck_contig("chr1", "genome.fa")?;
/// println!("chr1: {} bp", seq.len());
/// # Ok::<(), fastakit::FastakitError>(())
/// ```
pub fn pluck_contig<P: AsRef<Path>>(chromosome_name: &str, genome_source: P) -> Result<String> {
    let path = genome_source.as_ref();
    log::debug!("searching for >{} in {}", chromosome_name, path.display());
    let file = File::open(path)?;
    match scan_for_contig(BufReader::new(file), chromosome_name)? {
        Some(sequence) => Ok(sequence),
        None => Err(FastakitError::ContigNotFound {
            name: chromosome_name.to_string(),
            path: path.to_path_buf(),
        }),
    }
}

fn scan_for_contig<R: BufRead>(reader: R, chromosome_name: &str) -> Result<Option<String>> {
    let target = format!(">{}", chromosome_name).to_uppercase();
    let mut seq_collection: Vec<String> = Vec::new();
    let mut capturing = false;

    for line in reader.lines() {
        let line = line?;
        if line.starts_with('>') {
            let header = line.trim_end();
            if header.to_uppercase() == target {
                capturing = true;
                log::debug!("found {}", header);
            } else if capturing {
                // Reached the next contig: all sequence has been collected
                break;
            }
        } else if capturing {
            seq_collection.push(line.trim_end().to_uppercase());
        }
    }

    if seq_collection.is_empty() {
        return Ok(None);
    }
    Ok(Some(seq_collection.concat()))
}
