//! Common types used throughout fastakit

use std::fmt;

/// A named contig: one FASTA record
///
/// The sequence is stored upper-cased when produced by the parsers in
/// [`crate::io::fasta`]; callers building records by hand are responsible
/// for their own normalization.
#[derive(Clone, PartialEq, Eq)]
pub struct Contig {
    /// Contig name (without '>' prefix)
    pub name: String,
    /// Nucleotide sequence
    pub sequence: String,
}

impl Contig {
    /// Create a new contig
    pub fn new(name: String, sequence: String) -> Self {
        Self { name, sequence }
    }
}

impl fmt::Debug for Contig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "< \"{}\" {} nucleotides>", self.name, self.sequence.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_shows_name_and_length() {
        let contig = Contig::new("chrM".to_string(), "GATTACA".to_string());
        assert_eq!(format!("{:?}", contig), "< \"chrM\" 7 nucleotides>");
    }
}
