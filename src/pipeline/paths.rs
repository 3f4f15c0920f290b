//! Path management helpers for pipeline stages

use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Strip up to two extensions from a path, keeping the directory
///
/// `genome.fa.gz` becomes `genome`; a single-extension name loses just
/// that one.
pub fn remove_extensions<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    let first = path.with_extension("");
    first.with_extension("")
}

/// Base name of a path with directory and extensions stripped
///
/// Used for synthesized FASTA headers: `/data/genome.fa.gz` → `genome`.
pub fn just_the_name<P: AsRef<Path>>(path: P) -> String {
    let base = match path.as_ref().file_name() {
        Some(name) => PathBuf::from(name),
        None => return String::new(),
    };
    remove_extensions(base).to_string_lossy().into_owned()
}

/// Create (if needed) and return the directory `base_path` + `suffix`
///
/// The suffix is appended to the path string itself, not joined as a new
/// component.
pub fn make_output_dir_with_suffix<P: AsRef<Path>>(base_path: P, suffix: &str) -> Result<PathBuf> {
    let mut dir = base_path.as_ref().as_os_str().to_os_string();
    dir.push(suffix);
    let output_dir = PathBuf::from(dir);
    log::info!("creating directory {}", output_dir.display());
    fs::create_dir_all(&output_dir)?;
    Ok(output_dir)
}

/// Blank a stage-marker file while keeping it in place
///
/// Pipeline stages use file presence to mark completed work; this frees
/// the space without deleting the marker. With `scratch_only` set, paths
/// whose name does not contain "scratch" are refused (logged, no-op).
/// A missing file is a no-op.
pub fn delete_file_contents<P: AsRef<Path>>(file_path: P, scratch_only: bool) -> Result<()> {
    let file_path = file_path.as_ref();
    if scratch_only && !file_path.to_string_lossy().contains("scratch") {
        log::error!(
            "not blanking {} because it's not in a scratch folder",
            file_path.display()
        );
        return Ok(());
    }
    if file_path.exists() {
        fs::write(file_path, "Contents deleted to save scratch space")?;
        log::info!("file contents deleted: {}", file_path.display());
    }
    Ok(())
}

/// Mirror a directory tree into `dst`, skipping up-to-date files
///
/// Directories are created as needed. A file is copied when the
/// destination is missing or more than one second older than the source;
/// newer destination copies are left alone.
pub fn copytree<P: AsRef<Path>, Q: AsRef<Path>>(src: P, dst: Q) -> Result<()> {
    let (src, dst) = (src.as_ref(), dst.as_ref());
    if !dst.exists() {
        fs::create_dir_all(dst)?;
    }
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let source = entry.path();
        let destination = dst.join(entry.file_name());
        if source.is_dir() {
            copytree(&source, &destination)?;
        } else if needs_copy(&source, &destination)? {
            fs::copy(&source, &destination)?;
        }
    }
    Ok(())
}

fn needs_copy(source: &Path, destination: &Path) -> Result<bool> {
    if !destination.exists() {
        return Ok(true);
    }
    let src_modified = fs::metadata(source)?.modified()?;
    let dst_modified = fs::metadata(destination)?.modified()?;
    // Copy only when the source is more than a second newer, same slack
    // as the filesystems this gets run on
    match src_modified.duration_since(dst_modified) {
        Ok(age_gap) => Ok(age_gap > Duration::from_secs(1)),
        Err(_) => Ok(false), // destination is newer
    }
}
