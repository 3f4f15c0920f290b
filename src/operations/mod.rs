//! Sequence manipulation primitives and assembly statistics
//!
//! - `sequence`: complement lookup, reverse complement, and the lazy
//!   [`ReverseComplement`] view for pulling small reverse-strand sections
//!   out of large chromosomes
//! - `stats`: N50/N90 computation over contig length distributions

pub mod sequence;
pub mod stats;

pub use sequence::{complement, reverse_complement, ReverseComplement};
pub use stats::{collect_n50_stats, scaffold_lengths_from_fasta, AssemblyStats};
