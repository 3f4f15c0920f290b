//! I/O module: FASTA parsing and serialization

pub mod fasta;

pub use fasta::{pluck_contig, read_contigs, write_complete_fasta, write_contigs_to_file};
