//! Public suffix list cache and root-domain resolution.
//!
//! The public entry point is [`load_suffix_list`], which returns an in-memory
//! [`SuffixSet`] backed by an on-disk cache under the given directory. The
//! cache is refreshed from publicsuffix.org when it is absent or older than
//! 30 days; every failure path degrades to whatever copy is on disk (possibly
//! empty) instead of surfacing an error.

mod list;
mod source;
mod store;

pub use list::{SuffixSet, root_domain};
pub use source::{FetchError, FetchSuffixList, HttpSuffixSource};
pub use store::SuffixStore;

use std::path::Path;

use list::parse_line;

/// Load the suffix set, refreshing the on-disk cache when needed.
pub fn load_suffix_list(cache_dir: &Path) -> SuffixSet {
    let store = SuffixStore::new(cache_dir);
    match HttpSuffixSource::new() {
        Ok(source) => ensure_fresh(&store, &source),
        Err(err) => {
            tracing::warn!("suffix list source unavailable, using cached copy: {err}");
            store.load()
        }
    }
}

pub(crate) fn ensure_fresh<F>(store: &SuffixStore, source: &F) -> SuffixSet
where
    F: FetchSuffixList,
{
    if store.is_fresh() {
        return store.load();
    }

    if store.try_lock() {
        match source.fetch() {
            Ok(body) => {
                let suffixes = body.lines().filter_map(parse_line);
                if let Err(err) = store.replace(suffixes) {
                    tracing::warn!("failed to rewrite suffix list cache: {err}");
                }
            }
            Err(err) => {
                tracing::warn!("suffix list download failed, keeping cached copy: {err}");
            }
        }
        store.unlock();
    } else {
        // Another process is refreshing; serve whatever is on disk.
        store.repair_stale_lock();
    }

    store.load()
}
