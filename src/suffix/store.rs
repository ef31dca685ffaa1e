use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use rand::Rng;

use super::list::SuffixSet;

/// Refresh the cached list every 30 days.
pub(crate) const REFRESH_TTL: Duration = Duration::from_secs(2_592_000);

/// A lock older than 24 hours belongs to a crashed refresher.
pub(crate) const LOCK_STALE_AFTER: Duration = Duration::from_secs(86_400);

/// On-disk cache of the public suffix list: one empty marker file per suffix
/// (file name = reversed labels), plus a lock directory used as an advisory
/// mutex for the refresh path. Reads never block.
#[derive(Debug)]
pub struct SuffixStore {
    list_dir: PathBuf,
    lock_dir: PathBuf,
    refresh_ttl: Duration,
}

impl SuffixStore {
    pub fn new(cache_dir: &Path) -> Self {
        Self::with_ttl(cache_dir, REFRESH_TTL)
    }

    /// Same store with a custom refresh TTL.
    pub fn with_ttl(cache_dir: &Path, refresh_ttl: Duration) -> Self {
        Self {
            list_dir: cache_dir.join("public_suffix_list"),
            lock_dir: cache_dir.join("public_suffix_list_lock"),
            refresh_ttl,
        }
    }

    /// A cached list exists and is younger than the TTL.
    pub(crate) fn is_fresh(&self) -> bool {
        let Ok(meta) = fs::metadata(&self.list_dir) else {
            return false;
        };
        let Ok(modified) = meta.modified() else {
            return false;
        };
        match SystemTime::now().duration_since(modified) {
            Ok(age) => age < self.refresh_ttl,
            // Clock skew put the mtime in the future; treat as fresh.
            Err(_) => true,
        }
    }

    /// Try to acquire the refresh lock. `create_dir` failing means another
    /// process holds it.
    pub(crate) fn try_lock(&self) -> bool {
        if let Some(parent) = self.lock_dir.parent() {
            let _ = fs::create_dir_all(parent);
        }
        fs::create_dir(&self.lock_dir).is_ok()
    }

    pub(crate) fn unlock(&self) {
        if let Err(err) = fs::remove_dir(&self.lock_dir) {
            tracing::debug!("failed to release suffix list lock: {err}");
        }
    }

    /// Clear a lock abandoned by a crashed refresher. Sampled at 1-in-101 so
    /// concurrent processes do not all race to remove it.
    pub(crate) fn repair_stale_lock(&self) {
        let Ok(meta) = fs::metadata(&self.lock_dir) else {
            return;
        };
        let Ok(modified) = meta.modified() else {
            return;
        };
        let stale = SystemTime::now()
            .duration_since(modified)
            .map(|age| age > LOCK_STALE_AFTER)
            .unwrap_or(false);
        if stale && rand::thread_rng().gen_range(0..=100) == 0 {
            tracing::warn!("removing abandoned suffix list lock");
            let _ = fs::remove_dir(&self.lock_dir);
        }
    }

    /// Replace the cached list with freshly parsed suffixes. The caller must
    /// hold the lock; delete-then-recreate also refreshes the directory mtime
    /// that [`SuffixStore::is_fresh`] checks.
    pub(crate) fn replace<I>(&self, suffixes: I) -> std::io::Result<()>
    where
        I: IntoIterator<Item = String>,
    {
        if self.list_dir.exists() {
            fs::remove_dir_all(&self.list_dir)?;
        }
        fs::create_dir_all(&self.list_dir)?;
        let mut count = 0usize;
        for suffix in suffixes {
            fs::File::create(self.list_dir.join(&suffix))?;
            count += 1;
        }
        tracing::debug!("suffix list cache rewritten with {count} entries");
        Ok(())
    }

    /// Read the cached markers into memory. Missing or unreadable cache
    /// yields an empty set.
    pub(crate) fn load(&self) -> SuffixSet {
        let mut entries = HashSet::new();
        let Ok(dir) = fs::read_dir(&self.list_dir) else {
            return SuffixSet::new(entries);
        };
        for entry in dir.flatten() {
            if let Some(name) = entry.file_name().to_str() {
                entries.insert(name.to_string());
            }
        }
        SuffixSet::new(entries)
    }
}
