//! Assembly statistics: N50 and N90 over contig length distributions

use crate::error::{FastakitError, Result};
use crate::io::fasta::read_contigs;
use std::path::Path;

/// Computed N50/N90 snapshot for one assembly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssemblyStats {
    /// Length of the shortest contig among the largest contigs covering
    /// at least 50% of the total assembly length
    pub n50: u64,
    /// Same statistic at 90% coverage
    pub n90: u64,
    /// Sum of all contig lengths
    pub total_length: u64,
}

/// Compute N50/N90 statistics from an assembly's contig lengths
///
/// Lengths are sorted descending and cumulatively summed. N50 is the length
/// at the first rank whose cumulative sum reaches half the total; N90 uses
/// the `total * 9 / 10` target instead. Ties resolve to the first rank
/// reached scanning from the largest contig down.
///
/// # Errors
///
/// Returns [`FastakitError::EmptyAssembly`] for an empty length list; the
/// statistics are undefined without at least one contig.
///
/// # Examples
///
/// ```
/// use fastakit::collect_n50_stats;
///
/// let lengths = [100, 90, 80, 70, 60, 50, 40, 30, 20, 10];
/// let stats = collect_n50_stats(&lengths)?;
/// assert_eq!(stats.n50, 70);
/// assert_eq!(stats.total_length, 550);
/// # Ok::<(), fastakit::FastakitError>(())
/// ```
pub fn collect_n50_stats(scaffold_lengths: &[u64]) -> Result<AssemblyStats> {
    if scaffold_lengths.is_empty() {
        return Err(FastakitError::EmptyAssembly);
    }

    // Sort contigs longest to shortest
    let mut all_len = scaffold_lengths.to_vec();
    all_len.sort_unstable_by(|a, b| b.cmp(a));

    let total: u64 = all_len.iter().sum();
    let csum = cumulative_sum(&all_len);

    let halfway_point = total / 2;
    let n50 = all_len[first_index_reaching(&csum, halfway_point)];

    let n90_target = total * 9 / 10;
    let n90 = all_len[first_index_reaching(&csum, n90_target)];

    Ok(AssemblyStats { n50, n90, total_length: total })
}

/// Contig lengths of a FASTA file, in file order
pub fn scaffold_lengths_from_fasta<P: AsRef<Path>>(input_fasta_path: P) -> Result<Vec<u64>> {
    let contigs = read_contigs(input_fasta_path)?;
    Ok(contigs.iter().map(|c| c.sequence.len() as u64).collect())
}

fn cumulative_sum(numbers: &[u64]) -> Vec<u64> {
    let mut running_sums = Vec::with_capacity(numbers.len());
    let mut current_sum = 0u64;
    for &n in numbers {
        current_sum += n;
        running_sums.push(current_sum);
    }
    running_sums
}

/// First index whose cumulative sum reaches `target`
///
/// The last cumulative sum equals the total, so for any target at or below
/// the total a match exists; the fallback index is unreachable in practice.
fn first_index_reaching(csum: &[u64], target: u64) -> usize {
    csum.iter()
        .position(|&x| x >= target)
        .unwrap_or(csum.len() - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_n50_worked_example() {
        // total = 550, halfway = 275; cumulative sums 100, 190, 270, 340, ...
        // first >= 275 is 340 at rank 3
        let lengths = [100, 90, 80, 70, 60, 50, 40, 30, 20, 10];
        let stats = collect_n50_stats(&lengths).unwrap();
        assert_eq!(stats.n50, 70);
        assert_eq!(stats.total_length, 550);
    }

    #[test]
    fn test_n90_worked_example() {
        // target = 495; cumulative sums reach 520 at rank 7 (length 30)
        let lengths = [100, 90, 80, 70, 60, 50, 40, 30, 20, 10];
        let stats = collect_n50_stats(&lengths).unwrap();
        assert_eq!(stats.n90, 30);
    }

    #[test]
    fn test_input_order_is_irrelevant() {
        let lengths = [10, 70, 30, 100, 50, 90, 20, 80, 60, 40];
        let stats = collect_n50_stats(&lengths).unwrap();
        assert_eq!(stats.n50, 70);
        assert_eq!(stats.n90, 30);
    }

    #[test]
    fn test_single_contig() {
        let stats = collect_n50_stats(&[4242]).unwrap();
        assert_eq!(stats.n50, 4242);
        assert_eq!(stats.n90, 4242);
        assert_eq!(stats.total_length, 4242);
    }

    #[test]
    fn test_n50_is_a_value_from_the_input() {
        let lengths = [7, 11, 13, 17, 19, 23];
        let stats = collect_n50_stats(&lengths).unwrap();
        assert!(lengths.contains(&stats.n50));
        assert!(lengths.contains(&stats.n90));
    }

    #[test]
    fn test_covered_length_reaches_half_the_total() {
        let lengths = [5, 40, 40, 12, 3, 88, 61];
        let stats = collect_n50_stats(&lengths).unwrap();
        let total: u64 = lengths.iter().sum();
        let covered: u64 = lengths.iter().filter(|&&l| l >= stats.n50).sum();
        assert!(covered * 2 >= total);
    }

    #[test]
    fn test_empty_assembly_is_an_error() {
        assert!(matches!(collect_n50_stats(&[]), Err(FastakitError::EmptyAssembly)));
    }

    #[test]
    fn test_equal_lengths() {
        let stats = collect_n50_stats(&[100, 100, 100, 100]).unwrap();
        assert_eq!(stats.n50, 100);
        assert_eq!(stats.n90, 100);
        assert_eq!(stats.total_length, 400);
    }
}
