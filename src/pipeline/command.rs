//! Shell command invocation with a per-day audit log

use crate::error::{FastakitError, Result};
use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

/// Appends every invoked command to a dated log file before running it
///
/// One log file per day across all jobs writing to the same output
/// directory. The directory and the date-derived file name are resolved
/// once at construction; there is no process-wide state.
///
/// # Examples
///
/// ```no_run
/// use fastakit::pipeline::CommandLogger;
///
/// let logger = CommandLogger::new("/data/run42");
/// let status = logger.call("samtools faidx genome.fa")?;
/// assert!(status.success());
/// # Ok::<(), fastakit::FastakitError>(())
/// ```
pub struct CommandLogger {
    output_dir: PathBuf,
    log_file_name: String,
}

impl CommandLogger {
    /// Create a logger writing to `output_dir`, named after today's date
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Self {
        let log_file_name = format!("WHAT_I_DID_{}.log", Local::now().format("%Y-%m-%d"));
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            log_file_name,
        }
    }

    /// Full path of the dated log file
    pub fn log_path(&self) -> PathBuf {
        self.output_dir.join(&self.log_file_name)
    }

    /// Append a command line to the log without executing it
    pub fn log_command(&self, command: &str) -> Result<()> {
        log::info!("{}", command);
        let mut log_file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.log_path())?;
        writeln!(log_file, "{}", command)?;
        Ok(())
    }

    /// Log a command, run it through the shell, and return its exit status
    pub fn call(&self, command: &str) -> Result<ExitStatus> {
        self.log_command(command)?;
        let status = Command::new("sh").arg("-c").arg(command).status()?;
        Ok(status)
    }

    /// Log a command, run it through the shell, and return captured stdout
    ///
    /// # Errors
    ///
    /// Returns [`FastakitError::CommandFailed`] on a non-zero exit.
    pub fn call_output(&self, command: &str) -> Result<Vec<u8>> {
        self.log_command(command)?;
        let output = Command::new("sh").arg("-c").arg(command).output()?;
        if !output.status.success() {
            return Err(FastakitError::CommandFailed {
                command: command.to_string(),
                code: output.status.code(),
            });
        }
        Ok(output.stdout)
    }
}
