//! Reconciliation of remote sidebar payloads with the local composer.
//!
//! A remote configuration service may hand us a complete, partial, or no
//! payload at all. Nothing here errors back to the caller: an absent payload
//! falls back to the maximally restrictive solo composition, a partial one is
//! repaired from the local catalog, and inconsistent counts are recomputed
//! with a warning. Fetching (timeouts, retries) is the remote collaborator's
//! problem; this module only consumes already-resolved data.

use crate::composer::ComposerEngine;
use fhub_domain::features::FeatureSet;
use fhub_domain::firm::FirmType;
use fhub_domain::navigation::{
    NavItem, NavModule, NavSection, SidebarConfig, SidebarMeta, SidebarSections,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Wire shape of a remotely supplied sidebar configuration.
///
/// Mirrors [`SidebarConfig`] but tolerates missing sections and meta, which
/// the resolver repairs. Unknown extra fields are ignored for forward
/// compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteSidebarPayload {
    pub firm_type: FirmType,
    pub language: String,
    #[serde(default)]
    pub sections: RemoteSections,
    #[serde(default)]
    pub meta: Option<SidebarMeta>,
}

/// Sections of a remote payload; any of them may be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteSections {
    #[serde(default)]
    pub basic: Option<NavSection<NavItem>>,
    #[serde(default)]
    pub modules: Option<NavSection<NavModule>>,
    #[serde(default)]
    pub other: Option<NavSection<NavItem>>,
}

impl From<SidebarConfig> for RemoteSidebarPayload {
    fn from(config: SidebarConfig) -> Self {
        Self {
            firm_type: config.firm_type,
            language: config.language,
            sections: RemoteSections {
                basic: Some(config.sections.basic),
                modules: Some(config.sections.modules),
                other: Some(config.sections.other),
            },
            meta: Some(config.meta),
        }
    }
}

/// Substitutes or repairs remote configuration data with locally composed
/// defaults.
#[derive(Debug, Clone, Copy)]
pub struct FallbackResolver<'a> {
    engine: ComposerEngine<'a>,
    default_language: &'a str,
}

impl<'a> FallbackResolver<'a> {
    #[must_use]
    pub const fn new(engine: ComposerEngine<'a>, default_language: &'a str) -> Self {
        Self { engine, default_language }
    }

    /// Produces a complete sidebar no matter what the remote source supplied.
    ///
    /// With no payload this is exactly `compose_for_tier(solo)`, the
    /// always-safe default. With a payload, missing sections are substituted
    /// from the local catalog at the payload's tier and the meta counts are
    /// recomputed from the sections actually present.
    #[must_use]
    pub fn resolve(
        &self,
        remote: Option<RemoteSidebarPayload>,
        flags: FeatureSet,
    ) -> SidebarConfig {
        remote.map_or_else(
            || self.engine.compose_for_tier(FirmType::Solo, self.default_language, flags),
            |payload| self.normalize(payload, flags),
        )
    }

    fn normalize(&self, payload: RemoteSidebarPayload, flags: FeatureSet) -> SidebarConfig {
        let RemoteSidebarPayload { firm_type, language, sections, meta } = payload;

        let substitute = |section: &'static str| {
            warn!(%firm_type, section, "Remote sidebar payload missing section, substituting local catalog");
        };

        let sections = match (sections.basic, sections.modules, sections.other) {
            (Some(basic), Some(modules), Some(other)) => {
                SidebarSections { basic, modules, other }
            }
            (basic, modules, other) => {
                // At least one section is absent; compose locally once at the
                // payload's own tier and fill the gaps.
                let local = self.engine.compose_for_tier(firm_type, &language, flags).sections;
                SidebarSections {
                    basic: basic.unwrap_or_else(|| {
                        substitute("basic");
                        local.basic
                    }),
                    modules: modules.unwrap_or_else(|| {
                        substitute("modules");
                        local.modules
                    }),
                    other: other.unwrap_or_else(|| {
                        substitute("other");
                        local.other
                    }),
                }
            }
        };

        let computed = sections.compute_meta();
        match meta {
            Some(supplied) if supplied != computed => {
                warn!(
                    %firm_type,
                    ?supplied,
                    ?computed,
                    "Remote sidebar meta is inconsistent with its sections, recomputed locally"
                );
            }
            None => {
                warn!(%firm_type, "Remote sidebar payload has no meta, recomputed locally");
            }
            Some(_) => {}
        }

        SidebarConfig { firm_type, language, sections, meta: computed }
    }
}
