//! Pipeline glue: command logging and path management
//!
//! These helpers support the shell pipelines that surround the FASTA core:
//! a per-day command log, output directory creation, stage-marker blanking,
//! and an mtime-aware recursive copy.

pub mod command;
pub mod paths;

pub use command::CommandLogger;
pub use paths::{
    copytree, delete_file_contents, just_the_name, make_output_dir_with_suffix,
    remove_extensions,
};
