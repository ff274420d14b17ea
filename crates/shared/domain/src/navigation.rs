//! Navigation structures composed for the sidebar.
//!
//! The JSON field names are part of the downstream consumer contract and are
//! always camelCase (`firmType`, `labelAr`, `totalBaseItems`, ...). `path`
//! values are opaque route strings supplied by an external registry; nothing
//! here validates that a path resolves.

use crate::firm::FirmType;
use serde::{Deserialize, Serialize};

/// A single navigable leaf entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    pub id: String,
    pub label: String,
    pub label_ar: String,
    pub icon: String,
    pub path: String,
    pub order: u32,
}

/// A named group of navigation items representing a product area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavModule {
    pub id: String,
    pub label: String,
    pub label_ar: String,
    pub icon: String,
    pub order: u32,
    pub items: Vec<NavItem>,
    /// Visibility additionally requires a feature flag beyond tier eligibility.
    #[serde(default)]
    pub is_optional: bool,
}

/// A labelled grouping of items; the `modules` section holds [`NavModule`]s,
/// the `basic` and `other` sections hold plain [`NavItem`]s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavSection<T> {
    pub label: String,
    pub label_ar: String,
    pub items: Vec<T>,
}

/// The three fixed sections of a composed sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarSections {
    pub basic: NavSection<NavItem>,
    pub modules: NavSection<NavModule>,
    pub other: NavSection<NavItem>,
}

/// Aggregate counts over a composed sidebar.
///
/// Always derived from the sections actually present, never taken from an
/// independently supplied payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarMeta {
    pub total_base_items: usize,
    pub total_modules: usize,
    pub total_module_items: usize,
    pub total_items: usize,
}

/// The composed, normalized navigation structure returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarConfig {
    pub firm_type: FirmType,
    pub language: String,
    pub sections: SidebarSections,
    pub meta: SidebarMeta,
}

impl SidebarSections {
    /// Derives the aggregate counts from the sections themselves.
    #[must_use]
    pub fn compute_meta(&self) -> SidebarMeta {
        let total_base_items = self.basic.items.len();
        let total_modules = self.modules.items.len();
        let total_module_items = self.modules.items.iter().map(|m| m.items.len()).sum();
        SidebarMeta {
            total_base_items,
            total_modules,
            total_module_items,
            total_items: total_base_items + self.other.items.len() + total_module_items,
        }
    }
}
