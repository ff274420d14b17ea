//! Snapshot cache for composed sidebars.
//!
//! Keyed by `(firm type, language, flag bits)`. Values are `Arc` snapshots:
//! callers get a read-only shared view, so one caller can never corrupt a
//! cached value observed by another.

use fhub_domain::features::FeatureSet;
use fhub_domain::firm::FirmType;
use fhub_domain::navigation::SidebarConfig;
use moka::sync::Cache;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct SidebarCacheKey {
    firm_type: FirmType,
    language: String,
    flag_bits: u32,
}

/// Bounded cache of composed sidebars.
#[derive(Clone)]
pub struct SidebarCache {
    inner: Cache<SidebarCacheKey, Arc<SidebarConfig>>,
}

impl SidebarCache {
    /// Creates a cache bounded to `capacity` entries.
    #[must_use]
    pub fn new(capacity: u64) -> Self {
        Self { inner: Cache::new(capacity) }
    }

    /// Returns the cached snapshot for the key, composing and inserting it
    /// on a miss. Concurrent callers for the same key share one composition.
    pub fn get_or_compose(
        &self,
        firm_type: FirmType,
        language: &str,
        flags: FeatureSet,
        compose: impl FnOnce() -> SidebarConfig,
    ) -> Arc<SidebarConfig> {
        let key = SidebarCacheKey {
            firm_type,
            language: language.to_owned(),
            flag_bits: flags.bits(),
        };
        self.inner.get_with(key, || Arc::new(compose()))
    }

    /// Number of cached entries (approximate until pending tasks settle).
    #[must_use]
    pub fn len(&self) -> u64 {
        self.inner.run_pending_tasks();
        self.inner.entry_count()
    }
}

impl std::fmt::Debug for SidebarCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SidebarCache").field("entries", &self.inner.entry_count()).finish()
    }
}
