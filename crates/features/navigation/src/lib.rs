//! Navigation feature slice.
//!
//! Composes tier-gated sidebar configurations: the module catalog and tier
//! policy are built once at slice init from static declarations, after which
//! every composition is a pure function of `(firm type, language, flags)`.
//! A bounded snapshot cache fronts the composer; a fallback resolver repairs
//! or replaces remote payloads.

mod cache;
mod catalog;
mod composer;
mod error;
mod fallback;
mod policy;

pub use crate::cache::SidebarCache;
pub use crate::catalog::ModuleCatalog;
pub use crate::composer::ComposerEngine;
pub use crate::error::NavigationError;
pub use crate::fallback::{FallbackResolver, RemoteSidebarPayload, RemoteSections};
pub use crate::policy::{ModuleRule, TierPolicy, VisibilityEvaluator};

use fhub_domain::features::FeatureSet;
use fhub_domain::navigation::SidebarConfig;
use fhub_kernel::domain::registry::{FeatureSlice, InitializedSlice};
use serde::Deserialize;
use std::any::Any;
use std::sync::Arc;

/// Settings for the navigation slice, loadable via `fhub_kernel::config`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NavigationSettings {
    pub default_language: String,
    pub cache_capacity: u64,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            default_language: fhub_domain::constants::DEFAULT_LANGUAGE.to_owned(),
            cache_capacity: 128,
        }
    }
}

/// Navigation feature state.
#[derive(Debug, Clone)]
pub struct Navigation {
    inner: Arc<NavigationInner>,
}

#[derive(Debug)]
struct NavigationInner {
    catalog: ModuleCatalog,
    policy: TierPolicy,
    cache: SidebarCache,
    settings: NavigationSettings,
}

impl FeatureSlice for Navigation {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Navigation {
    fn new(settings: NavigationSettings) -> Self {
        let cache = SidebarCache::new(settings.cache_capacity);
        Self {
            inner: Arc::new(NavigationInner {
                catalog: ModuleCatalog::default(),
                policy: TierPolicy::default(),
                cache,
                settings,
            }),
        }
    }

    /// Cached sidebar for an externally supplied firm type string.
    ///
    /// # Errors
    /// Returns [`NavigationError::Validation`] for an unrecognized firm type.
    pub fn sidebar(
        &self,
        firm_type: &str,
        language: Option<&str>,
        flags: FeatureSet,
    ) -> Result<Arc<SidebarConfig>, NavigationError> {
        let language = language.unwrap_or(&self.inner.settings.default_language);
        let engine = ComposerEngine::new(&self.inner.catalog, &self.inner.policy);
        // Parse eagerly so the cache is only keyed by declared tiers.
        let parsed = fhub_domain::firm::FirmType::parse(firm_type).ok_or_else(|| {
            NavigationError::Validation {
                message: format!("Unrecognized firm type '{firm_type}'").into(),
                context: Some("Sidebar composition".into()),
            }
        })?;
        Ok(self.inner.cache.get_or_compose(parsed, language, flags, || {
            engine.compose_for_tier(parsed, language, flags)
        }))
    }

    /// Reconciles an optional remote payload; never fails.
    #[must_use]
    pub fn resolve_remote(
        &self,
        remote: Option<RemoteSidebarPayload>,
        flags: FeatureSet,
    ) -> SidebarConfig {
        let engine = ComposerEngine::new(&self.inner.catalog, &self.inner.policy);
        FallbackResolver::new(engine, &self.inner.settings.default_language)
            .resolve(remote, flags)
    }

    #[must_use]
    pub fn catalog(&self) -> &ModuleCatalog {
        &self.inner.catalog
    }

    #[must_use]
    pub fn policy(&self) -> &TierPolicy {
        &self.inner.policy
    }
}

/// Initialize the navigation feature.
///
/// # Errors
/// Currently infallible in practice; kept fallible so catalog/policy
/// validation failures surface here if the declarations ever move out of
/// the binary.
pub fn init(settings: NavigationSettings) -> Result<InitializedSlice, NavigationError> {
    tracing::info!(
        default_language = %settings.default_language,
        cache_capacity = settings.cache_capacity,
        "Navigation slice initialized"
    );

    let slice = Navigation::new(settings);
    Ok(InitializedSlice::new(slice))
}
