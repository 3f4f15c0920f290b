//! Reverse complement: eager helpers and a lazy view
//!
//! The complement table is deliberately narrow: A↔T, G↔C, and the
//! self-paired N and X. Lowercase bases and other IUPAC codes are not
//! mapped; sequences are expected to be upper-cased at parse time, and an
//! unmapped character is an error rather than a pass-through.
//!
//! # Examples
//!
//! ```
//! use fastakit::operations::sequence::reverse_complement;
//!
//! let rc = reverse_complement("ATGC")?;
//! assert_eq!(rc, "GCAT");
//! # Ok::<(), fastakit::FastakitError>(())
//! ```

use crate::error::{FastakitError, Result};

/// Complement a single base
///
/// A↔T, G↔C, N↔N, X↔X. Any other character (lowercase included) is a
/// [`FastakitError::UnknownBase`] error.
pub fn complement(base: char) -> Result<char> {
    match base {
        'A' => Ok('T'),
        'T' => Ok('A'),
        'G' => Ok('C'),
        'C' => Ok('G'),
        'N' => Ok('N'),
        'X' => Ok('X'),
        other => Err(FastakitError::UnknownBase(other)),
    }
}

/// Reverse complement a whole sequence
///
/// Fails on the first base outside the complement table.
pub fn reverse_complement(plus_strand: &str) -> Result<String> {
    plus_strand.chars().rev().map(complement).collect()
}

/// Lazy reverse-complement view over a borrowed sequence
///
/// Lets callers pull small reverse-complement sections out of large
/// chromosomes without materializing the reverse complement of the whole
/// sequence. In annotation mode the wrapped content is positional metadata
/// rather than bases: order is still reversed, but no base substitution is
/// applied.
///
/// # Examples
///
/// ```
/// use fastakit::ReverseComplement;
///
/// let view = ReverseComplement::new("AACCGGTT");
/// assert_eq!(view.get(0)?, 'A');            // complement of trailing T
/// assert_eq!(view.get_range(0, 4)?, "AACC");
/// # Ok::<(), fastakit::FastakitError>(())
/// ```
pub struct ReverseComplement<'a> {
    seq: &'a str,
    length: usize,
    annotation: bool,
}

#[allow(clippy::len_without_is_empty)]
impl<'a> ReverseComplement<'a> {
    /// Wrap a sequence in base mode (complement substitution applied)
    pub fn new(seq: &'a str) -> Self {
        Self { seq, length: seq.len(), annotation: false }
    }

    /// Wrap positional annotation content (reversal only, no substitution)
    pub fn annotation(seq: &'a str) -> Self {
        Self { seq, length: seq.len(), annotation: true }
    }

    /// Single reverse-strand base: complement of `seq[length - index - 1]`
    ///
    /// In annotation mode the character is returned unmodified.
    pub fn get(&self, index: usize) -> Result<char> {
        if index >= self.length {
            return Err(FastakitError::RangeOutOfBounds {
                begin: self.length as i64 - index as i64 - 1,
                end: self.length as i64 - index as i64,
                length: self.length,
            });
        }
        let letter = self.seq.as_bytes()[self.length - index - 1] as char;
        if self.annotation {
            Ok(letter)
        } else {
            complement(letter)
        }
    }

    /// Reverse-strand slice `[start, stop)`
    ///
    /// Maps to the plus-strand range `begin = length - stop`,
    /// `end = length - start` and fails when `begin < 0`, `end < 0`, or
    /// `end > length`.
    pub fn get_range(&self, start: usize, stop: usize) -> Result<String> {
        let begin = self.length as i64 - stop as i64;
        let end = self.length as i64 - start as i64;
        if begin < 0 || end < 0 || end > self.length as i64 {
            return Err(FastakitError::RangeOutOfBounds { begin, end, length: self.length });
        }
        if begin >= end {
            return Ok(String::new());
        }
        let piece = &self.seq[begin as usize..end as usize];
        if self.annotation {
            Ok(piece.chars().rev().collect())
        } else {
            reverse_complement(piece)
        }
    }

    /// Reports 0 regardless of the wrapped sequence's length
    ///
    /// Known quirk carried over from the original implementation: callers
    /// must track the source sequence's length themselves to determine the
    /// valid index range. Do not use this for bounds.
    pub fn len(&self) -> usize {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complement_pairs() {
        assert_eq!(complement('A').unwrap(), 'T');
        assert_eq!(complement('T').unwrap(), 'A');
        assert_eq!(complement('G').unwrap(), 'C');
        assert_eq!(complement('C').unwrap(), 'G');
        assert_eq!(complement('N').unwrap(), 'N');
        assert_eq!(complement('X').unwrap(), 'X');
    }

    #[test]
    fn test_complement_rejects_unmapped_bases() {
        assert!(matches!(complement('Q'), Err(FastakitError::UnknownBase('Q'))));
        // Lowercase is not in the table either
        assert!(matches!(complement('a'), Err(FastakitError::UnknownBase('a'))));
    }

    #[test]
    fn test_reverse_complement_is_involution() {
        let original = "GATTACANXGATTACA";
        let once = reverse_complement(original).unwrap();
        let twice = reverse_complement(&once).unwrap();
        assert_eq!(twice, original);
    }

    #[test]
    fn test_view_single_index() {
        let view = ReverseComplement::new("AACCGGTT");
        // Reverse strand reads TTGGCCAA, complemented to AACCGGTT reversed
        assert_eq!(view.get(0).unwrap(), 'A');
        assert_eq!(view.get(7).unwrap(), 'T');
    }

    #[test]
    fn test_view_annotation_mode_preserves_characters() {
        let view = ReverseComplement::annotation("123456");
        assert_eq!(view.get(0).unwrap(), '6');
        assert_eq!(view.get_range(0, 6).unwrap(), "654321");
    }

    #[test]
    fn test_view_full_slice_equals_reverse_complement() {
        let seq = "GATTACA";
        let view = ReverseComplement::new(seq);
        assert_eq!(view.get_range(0, seq.len()).unwrap(), reverse_complement(seq).unwrap());
    }

    #[test]
    fn test_view_partial_slice() {
        // seq = ACGTACGT, reverse complement = ACGTACGT
        let view = ReverseComplement::new("ACGTACGT");
        assert_eq!(view.get_range(2, 6).unwrap(), "GTAC");
    }

    #[test]
    fn test_view_range_out_of_bounds() {
        let view = ReverseComplement::new("ACGT");
        assert!(matches!(
            view.get_range(0, 5),
            Err(FastakitError::RangeOutOfBounds { .. })
        ));
        assert!(matches!(
            view.get_range(5, 4),
            Err(FastakitError::RangeOutOfBounds { .. })
        ));
    }

    // Known quirk: the view reports length 0, not the wrapped length.
    #[test]
    fn test_view_len_reports_zero() {
        let view = ReverseComplement::new("ACGTACGT");
        assert_eq!(view.len(), 0);
    }
}
