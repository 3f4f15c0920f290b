//! FASTA format support: reading, single-contig extraction, and writing
//!
//! # Format
//!
//! FASTA records consist of a header line starting with '>' followed by one
//! or more sequence lines:
//!
//! ```text
//! >sequence1 description
//! GATTACAGATTACA
//! TGCATGCA
//! >sequence2
//! ACGTACGT
//! ```
//!
//! # Basic Usage
//!
//! ```no_run
//! use fastakit::io::fasta::{read_contigs, pluck_contig};
//!
//! // Parse a whole file into contigs
//! let contigs = read_contigs("assembly.fa")?;
//!
//! // Or stream a large genome looking for a single contig
//! let chr1 = pluck_contig("chr1", "genome.fa")?;
//! # Ok::<(), fastakit::FastakitError>(())
//! ```

mod reader;
mod writer;

pub use reader::{pluck_contig, read_contigs, read_contigs_from_reader};
pub use writer::{write_complete_fasta, write_contigs_to_file};
