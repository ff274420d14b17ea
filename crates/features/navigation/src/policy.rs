//! Tier eligibility tables and the visibility predicate.
//!
//! Access policy is data, not branching: each module id maps to a rule with
//! its permitted tiers, an optional mutually-exclusive variant group, and an
//! optional required feature flag. The variant decision table
//! (`group -> tier -> module id`) is derived from the same rules at
//! construction and validated for exclusivity and full tier coverage.

use crate::catalog::MODULE_DECLS;
use crate::error::NavigationError;
use fhub_domain::features::FeatureSet;
use fhub_domain::firm::FirmType;
use fxhash::FxHashMap;

/// Eligibility rule for a single module.
#[derive(Debug, Clone)]
pub struct ModuleRule {
    pub tiers: Vec<FirmType>,
    pub variant_group: Option<String>,
    /// When set, the module is optional and requires this flag to be enabled.
    pub required_flag: Option<FeatureSet>,
}

/// Static mapping `module id -> rule`, read-only after construction.
#[derive(Debug, Clone)]
pub struct TierPolicy {
    rules: FxHashMap<String, ModuleRule>,
    // group -> (tier -> selected module id)
    variants: FxHashMap<String, FxHashMap<FirmType, String>>,
}

impl TierPolicy {
    /// Builds the policy and derives the variant decision table.
    ///
    /// # Errors
    /// Returns a validation error when a variant group maps one tier to two
    /// modules, or leaves a tier without a selected member. Either defect
    /// would break the "exactly one variant per tier" guarantee.
    pub fn new(rules: FxHashMap<String, ModuleRule>) -> Result<Self, NavigationError> {
        let mut variants: FxHashMap<String, FxHashMap<FirmType, String>> = FxHashMap::default();

        for (id, rule) in &rules {
            let Some(group) = rule.variant_group.as_deref() else { continue };
            let table = variants.entry(group.to_owned()).or_default();
            for &tier in &rule.tiers {
                if let Some(previous) = table.insert(tier, id.clone()) {
                    return Err(NavigationError::Validation {
                        message: format!(
                            "Variant group '{group}' selects both '{previous}' and '{id}' for tier '{tier}'"
                        )
                        .into(),
                        context: Some("Tier policy construction".into()),
                    });
                }
            }
        }

        for (group, table) in &variants {
            for tier in FirmType::ALL {
                if !table.contains_key(&tier) {
                    return Err(NavigationError::Validation {
                        message: format!(
                            "Variant group '{group}' selects no module for tier '{tier}'"
                        )
                        .into(),
                        context: Some("Tier policy construction".into()),
                    });
                }
            }
        }

        Ok(Self { rules, variants })
    }

    /// Looks up the rule for a module id.
    #[must_use]
    pub fn rule(&self, module_id: &str) -> Option<&ModuleRule> {
        self.rules.get(module_id)
    }

    /// Resolves which member of a variant group is shown for a tier.
    #[must_use]
    pub fn variant_selection(&self, group: &str, firm_type: FirmType) -> Option<&str> {
        self.variants.get(group).and_then(|table| table.get(&firm_type)).map(String::as_str)
    }
}

impl Default for TierPolicy {
    /// The shipped policy, built from the catalog declarations so the two
    /// share one source of truth. The declarations are known-good, so the
    /// validation in [`TierPolicy::new`] cannot fail here.
    fn default() -> Self {
        let rules = MODULE_DECLS
            .iter()
            .map(|decl| {
                (
                    decl.id.to_owned(),
                    ModuleRule {
                        tiers: decl.tiers.to_vec(),
                        variant_group: decl.variant_group.map(str::to_owned),
                        required_flag: decl.required_flag,
                    },
                )
            })
            .collect();

        Self::new(rules).expect("shipped declarations are valid")
    }
}

/// Pure predicate deciding whether a module is shown to a given tier.
#[derive(Debug, Clone, Copy)]
pub struct VisibilityEvaluator<'a> {
    policy: &'a TierPolicy,
}

impl<'a> VisibilityEvaluator<'a> {
    #[must_use]
    pub const fn new(policy: &'a TierPolicy) -> Self {
        Self { policy }
    }

    /// Fail-closed visibility check.
    ///
    /// Unknown module ids are `false` rather than an error so undeclared
    /// modules can never leak into a composed sidebar. Optional modules
    /// additionally require their feature flag; an absent flag means hidden.
    #[must_use]
    pub fn is_module_visible_for_tier(
        &self,
        module_id: &str,
        firm_type: FirmType,
        flags: FeatureSet,
    ) -> bool {
        let Some(rule) = self.policy.rule(module_id) else {
            return false;
        };
        if !rule.tiers.contains(&firm_type) {
            return false;
        }
        rule.required_flag.is_none_or(|required| flags.contains(required))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fhub_domain::constants::{CLIENTS, GROWTH, HR};

    fn rule(tiers: &[FirmType], group: Option<&str>, flag: Option<FeatureSet>) -> ModuleRule {
        ModuleRule {
            tiers: tiers.to_vec(),
            variant_group: group.map(str::to_owned),
            required_flag: flag,
        }
    }

    #[test]
    fn default_policy_resolves_client_relations_variants() {
        let policy = TierPolicy::default();
        assert_eq!(policy.variant_selection("clientRelations", FirmType::Solo), Some(CLIENTS));
        assert_eq!(policy.variant_selection("clientRelations", FirmType::Small), Some(GROWTH));
        assert_eq!(policy.variant_selection("clientRelations", FirmType::Large), Some(GROWTH));
        assert_eq!(policy.variant_selection("unknownGroup", FirmType::Solo), None);
    }

    #[test]
    fn default_policy_covers_every_declared_module() {
        let policy = TierPolicy::default();
        for decl in MODULE_DECLS {
            let rule = policy.rule(decl.id);
            assert!(rule.is_some(), "no rule for declared module {}", decl.id);
        }
    }

    #[test]
    fn unknown_module_is_fail_closed() {
        let policy = TierPolicy::default();
        let evaluator = VisibilityEvaluator::new(&policy);
        for tier in FirmType::ALL {
            assert!(!evaluator.is_module_visible_for_tier("procurement", tier, FeatureSet::ALL));
        }
    }

    #[test]
    fn hr_visibility_follows_the_tier_table() {
        let policy = TierPolicy::default();
        let evaluator = VisibilityEvaluator::new(&policy);
        assert!(!evaluator.is_module_visible_for_tier(HR, FirmType::Solo, FeatureSet::empty()));
        assert!(evaluator.is_module_visible_for_tier(HR, FirmType::Small, FeatureSet::empty()));
        assert!(evaluator.is_module_visible_for_tier(HR, FirmType::Large, FeatureSet::empty()));
    }

    #[test]
    fn optional_module_requires_its_flag() {
        let mut rules = FxHashMap::default();
        rules.insert(
            "market".to_owned(),
            rule(&FirmType::ALL, None, Some(FeatureSet::MARKET)),
        );
        let policy = TierPolicy::new(rules).expect("valid policy");
        let evaluator = VisibilityEvaluator::new(&policy);

        assert!(!evaluator.is_module_visible_for_tier("market", FirmType::Solo, FeatureSet::empty()));
        assert!(evaluator.is_module_visible_for_tier("market", FirmType::Solo, FeatureSet::MARKET));
    }

    #[test]
    fn overlapping_variant_members_are_rejected() {
        let mut rules = FxHashMap::default();
        rules.insert("clients".to_owned(), rule(&FirmType::ALL, Some("clientRelations"), None));
        rules.insert(
            "growth".to_owned(),
            rule(&[FirmType::Small, FirmType::Large], Some("clientRelations"), None),
        );

        let err = TierPolicy::new(rules).unwrap_err();
        assert!(matches!(err, NavigationError::Validation { .. }));
    }

    #[test]
    fn uncovered_variant_tier_is_rejected() {
        let mut rules = FxHashMap::default();
        rules.insert(
            "clients".to_owned(),
            rule(&[FirmType::Solo], Some("clientRelations"), None),
        );
        rules.insert(
            "growth".to_owned(),
            rule(&[FirmType::Small], Some("clientRelations"), None),
        );

        let err = TierPolicy::new(rules).unwrap_err();
        assert!(matches!(err, NavigationError::Validation { .. }));
    }
}
