//! Recursive directory size aggregation on a bounded rayon pool.

use std::fs::{self, DirEntry};
use std::path::Path;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};
use tracing::debug;

/// Sums the sizes of every regular file below a directory.
///
/// This is best-effort by contract: a directory that cannot be read counts
/// as 0 bytes, as does any entry whose metadata cannot be read. Errors are
/// logged, never returned, so a partially inaccessible tree still gets a
/// size.
///
/// Sibling subdirectories are sized in parallel on a dedicated pool, so the
/// number of threads never exceeds the configured worker count no matter how
/// wide or deep the tree is. Symlinks are not followed.
pub struct SizeAggregator {
    pool: ThreadPool,
}

impl SizeAggregator {
    /// Create an aggregator backed by `workers` threads.
    ///
    /// `0` lets rayon pick one thread per logical CPU.
    pub fn new(workers: usize) -> Result<Self, ThreadPoolBuildError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("liberator-size-{}", i))
            .build()?;

        Ok(Self { pool })
    }

    /// Number of worker threads in the pool.
    pub fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Total size in bytes of all files below `path`.
    pub fn compute_size(&self, path: &Path) -> u64 {
        self.pool.install(|| directory_size(path))
    }
}

fn directory_size(path: &Path) -> u64 {
    let entries: Vec<DirEntry> = match fs::read_dir(path) {
        Ok(read_dir) => read_dir.filter_map(|e| e.ok()).collect(),
        Err(err) => {
            debug!(path = %path.display(), error = %err, "unreadable directory counted as empty");
            return 0;
        }
    };

    // Each child reports its own total; the parallel sum is the only
    // point where results meet.
    entries.into_par_iter().map(|entry| entry_size(&entry)).sum()
}

fn entry_size(entry: &DirEntry) -> u64 {
    match entry.file_type() {
        Ok(file_type) if file_type.is_dir() => directory_size(&entry.path()),
        Ok(_) => entry.metadata().map(|m| m.len()).unwrap_or(0),
        Err(_) => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn aggregator() -> SizeAggregator {
        SizeAggregator::new(2).unwrap()
    }

    #[test]
    fn test_worker_cap() {
        let agg = SizeAggregator::new(3).unwrap();
        assert_eq!(agg.workers(), 3);
    }

    #[test]
    fn test_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(aggregator().compute_size(temp_dir.path()), 0);
    }

    #[test]
    fn test_missing_directory_is_zero() {
        let size = aggregator().compute_size(Path::new("/nonexistent/path/that/does/not/exist"));
        assert_eq!(size, 0);
    }

    #[test]
    fn test_file_path_is_zero() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("plain.txt");
        fs::write(&file, "not a directory").unwrap();

        assert_eq!(aggregator().compute_size(&file), 0);
    }

    #[test]
    fn test_flat_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a"), vec![0u8; 10]).unwrap();
        fs::write(temp_dir.path().join("b"), vec![0u8; 20]).unwrap();

        assert_eq!(aggregator().compute_size(temp_dir.path()), 30);
    }

    #[test]
    fn test_nested_directories() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("top"), vec![0u8; 7]).unwrap();
        fs::create_dir_all(root.join("one/two/three")).unwrap();
        fs::write(root.join("one/first"), vec![0u8; 100]).unwrap();
        fs::write(root.join("one/two/second"), vec![0u8; 50]).unwrap();
        fs::write(root.join("one/two/three/third"), vec![0u8; 3]).unwrap();
        fs::create_dir(root.join("empty")).unwrap();

        assert_eq!(aggregator().compute_size(root), 160);
        assert_eq!(aggregator().compute_size(&root.join("one/two")), 53);
    }

    #[test]
    fn test_single_worker_matches_many() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        for i in 0..8 {
            let dir = root.join(format!("dir{}", i));
            fs::create_dir(&dir).unwrap();
            fs::write(dir.join("data"), vec![0u8; i * 11]).unwrap();
        }

        let single = SizeAggregator::new(1).unwrap().compute_size(root);
        let many = SizeAggregator::new(8).unwrap().compute_size(root);
        assert_eq!(single, many);
        assert_eq!(single, (0..8).map(|i| i as u64 * 11).sum::<u64>());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_cycle_terminates() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir(root.join("inner")).unwrap();
        fs::write(root.join("inner/file"), vec![0u8; 4]).unwrap();
        std::os::unix::fs::symlink(root, root.join("inner/loop")).unwrap();

        let link_len = fs::symlink_metadata(root.join("inner/loop")).unwrap().len();
        assert_eq!(aggregator().compute_size(root), 4 + link_len);
    }
}
