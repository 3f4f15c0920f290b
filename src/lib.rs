//! fastakit: FASTA manipulation and assembly statistics for pipeline tooling
//!
//! # Overview
//!
//! fastakit collects the small bioinformatics utilities that keep showing up
//! across projects: parsing FASTA files into named contigs, extracting a
//! single contig from a large genome without loading it whole, writing
//! line-wrapped FASTA back out, lazy reverse-complement access, and N50/N90
//! assembly statistics. A handful of pipeline helpers (command logging, path
//! management) round it out.
//!
//! # Quick Start
//!
//! ```no_run
//! use fastakit::{read_contigs, write_contigs_to_file};
//!
//! # fn main() -> fastakit::Result<()> {
//! let contigs = read_contigs("assembly.fa")?;
//! for contig in &contigs {
//!     println!("{}: {} bp", contig.name, contig.sequence.len());
//! }
//! write_contigs_to_file("copy.fa", &contigs)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`io`]: FASTA reading, single-contig extraction, and writing
//! - [`operations`]: reverse complement and assembly statistics
//! - [`pipeline`]: command logging and path helpers for surrounding tooling

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod io;
pub mod operations;
pub mod pipeline;
pub mod types;

// Re-export commonly used items
pub use error::{FastakitError, Result};
pub use io::fasta::{pluck_contig, read_contigs, write_complete_fasta, write_contigs_to_file};
pub use operations::{
    collect_n50_stats, complement, reverse_complement, scaffold_lengths_from_fasta, AssemblyStats,
    ReverseComplement,
};
pub use types::Contig;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
