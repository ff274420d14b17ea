//! Deterministic sidebar composition.
//!
//! `compose_for_tier` is a pure function of `(tier, language, flags)`: no
//! hidden state, no I/O. The same inputs always produce an equivalent
//! structure, so it is safe to call concurrently without locking.

use crate::catalog::ModuleCatalog;
use crate::error::NavigationError;
use crate::policy::{TierPolicy, VisibilityEvaluator};
use fhub_domain::features::FeatureSet;
use fhub_domain::firm::FirmType;
use fhub_domain::navigation::{NavModule, SidebarConfig, SidebarSections};
use fxhash::FxHashSet;

/// Builds complete, ordered [`SidebarConfig`] values for a requested tier.
#[derive(Debug, Clone, Copy)]
pub struct ComposerEngine<'a> {
    catalog: &'a ModuleCatalog,
    policy: &'a TierPolicy,
}

impl<'a> ComposerEngine<'a> {
    #[must_use]
    pub const fn new(catalog: &'a ModuleCatalog, policy: &'a TierPolicy) -> Self {
        Self { catalog, policy }
    }

    /// String entry point for externally supplied tiers.
    ///
    /// # Errors
    /// Returns [`NavigationError::Validation`] for anything other than the
    /// three declared firm types; callers never get a silent default.
    pub fn compose(
        &self,
        firm_type: &str,
        language: &str,
        flags: FeatureSet,
    ) -> Result<SidebarConfig, NavigationError> {
        let firm_type = FirmType::parse(firm_type).ok_or_else(|| NavigationError::Validation {
            message: format!("Unrecognized firm type '{firm_type}'").into(),
            context: Some("Sidebar composition".into()),
        })?;
        Ok(self.compose_for_tier(firm_type, language, flags))
    }

    /// Composes the full sidebar for a tier.
    ///
    /// The `basic` and `other` sections are included verbatim. Modules are
    /// walked in catalog declaration order: a variant group contributes
    /// exactly the member the decision table selects for the tier (the
    /// non-selected member's general eligibility is never evaluated), every
    /// other module goes through the visibility predicate. The final module
    /// list is sorted by `order` ascending (stable, so declaration order
    /// breaks ties) and the `meta` counts are derived from the composed
    /// sections themselves.
    #[must_use]
    pub fn compose_for_tier(
        &self,
        firm_type: FirmType,
        language: &str,
        flags: FeatureSet,
    ) -> SidebarConfig {
        let evaluator = VisibilityEvaluator::new(self.policy);
        let mut modules: Vec<NavModule> = Vec::new();
        let mut resolved_groups: FxHashSet<&str> = FxHashSet::default();

        for module in self.catalog.modules() {
            let group = self.policy.rule(&module.id).and_then(|r| r.variant_group.as_deref());
            if let Some(group) = group {
                // Resolve each variant group once, at its first member's
                // declaration position.
                if !resolved_groups.insert(group) {
                    continue;
                }
                if let Some(selected) = self.policy.variant_selection(group, firm_type)
                    && let Some(selected) = self.catalog.module(selected)
                {
                    modules.push(selected.clone());
                }
            } else if evaluator.is_module_visible_for_tier(&module.id, firm_type, flags) {
                modules.push(module.clone());
            }
        }

        modules.sort_by_key(|m| m.order);

        let sections = SidebarSections {
            basic: self.catalog.basic_section(),
            modules: self.catalog.modules_section(modules),
            other: self.catalog.other_section(),
        };
        let meta = sections.compute_meta();

        SidebarConfig { firm_type, language: language.to_owned(), sections, meta }
    }
}
