//! Canonical module and item definitions.
//!
//! The catalog is populated once from the static declarations below and is
//! read-only afterwards. It is not filtered by tier; eligibility lives in
//! [`crate::policy`], which is built from the same declarations so the two
//! can never drift apart.

use fhub_domain::constants::{self, GROUP_CLIENT_RELATIONS};
use fhub_domain::features::FeatureSet;
use fhub_domain::firm::FirmType;
use fhub_domain::navigation::{NavItem, NavModule, NavSection};
use fxhash::FxHashMap;

pub(crate) struct ItemDecl {
    pub id: &'static str,
    pub label_ar: &'static str,
    pub icon: &'static str,
    pub path: &'static str,
    pub order: u32,
}

pub(crate) struct ModuleDecl {
    pub id: &'static str,
    pub label_ar: &'static str,
    pub icon: &'static str,
    pub order: u32,
    pub tiers: &'static [FirmType],
    pub variant_group: Option<&'static str>,
    /// Implies `is_optional`; visibility additionally requires this flag.
    pub required_flag: Option<FeatureSet>,
    pub items: &'static [ItemDecl],
}

use FirmType::{Large, Small, Solo};

const ALL_TIERS: &[FirmType] = &[Solo, Small, Large];

// `market` carries no required_flag: the legacy source hinted at a
// `marketEnabled` flag but never consulted it, and product has not confirmed
// the gating. The flag machinery stays available via `required_flag`.
pub(crate) static MODULE_DECLS: &[ModuleDecl] = &[
    ModuleDecl {
        id: constants::PRODUCTIVITY,
        label_ar: "الإنتاجية",
        icon: "check-square",
        order: 1,
        tiers: ALL_TIERS,
        variant_group: None,
        required_flag: None,
        items: &[
            ItemDecl { id: "tasks", label_ar: "المهام", icon: "list-checks", path: "/dashboard/tasks", order: 1 },
            ItemDecl { id: "reminders", label_ar: "التذكيرات", icon: "alarm-clock", path: "/dashboard/tasks/reminders", order: 2 },
            ItemDecl { id: "events", label_ar: "الأحداث", icon: "calendar-days", path: "/dashboard/tasks/events", order: 3 },
        ],
    },
    ModuleDecl {
        id: constants::LEGAL_WORK,
        label_ar: "الأعمال القانونية",
        icon: "scale",
        order: 2,
        tiers: ALL_TIERS,
        variant_group: None,
        required_flag: None,
        items: &[
            ItemDecl { id: "cases", label_ar: "القضايا", icon: "briefcase", path: "/dashboard/cases", order: 1 },
            ItemDecl { id: "hearings", label_ar: "الجلسات", icon: "gavel", path: "/dashboard/cases/hearings", order: 2 },
            ItemDecl { id: "consultations", label_ar: "الاستشارات", icon: "message-circle", path: "/dashboard/consultations", order: 3 },
        ],
    },
    ModuleDecl {
        id: constants::CLIENTS,
        label_ar: "العملاء",
        icon: "users",
        order: 3,
        tiers: &[Solo],
        variant_group: Some(GROUP_CLIENT_RELATIONS),
        required_flag: None,
        items: &[
            ItemDecl { id: "clients", label_ar: "العملاء", icon: "users", path: "/dashboard/clients", order: 1 },
            ItemDecl { id: "contacts", label_ar: "جهات الاتصال", icon: "contact", path: "/dashboard/contacts", order: 2 },
        ],
    },
    ModuleDecl {
        id: constants::GROWTH,
        label_ar: "النمو",
        icon: "trending-up",
        order: 3,
        tiers: &[Small, Large],
        variant_group: Some(GROUP_CLIENT_RELATIONS),
        required_flag: None,
        items: &[
            ItemDecl { id: "crm", label_ar: "إدارة العلاقات", icon: "handshake", path: "/dashboard/crm", order: 1 },
            ItemDecl { id: "leads", label_ar: "العملاء المحتملون", icon: "user-plus", path: "/dashboard/crm/leads", order: 2 },
            ItemDecl { id: "campaigns", label_ar: "الحملات", icon: "megaphone", path: "/dashboard/crm/campaigns", order: 3 },
        ],
    },
    ModuleDecl {
        id: constants::BILLING,
        label_ar: "الفوترة",
        icon: "receipt",
        order: 4,
        tiers: ALL_TIERS,
        variant_group: None,
        required_flag: None,
        items: &[
            ItemDecl { id: "invoices", label_ar: "الفواتير", icon: "file-text", path: "/dashboard/finance/invoices", order: 1 },
            ItemDecl { id: "payments", label_ar: "المدفوعات", icon: "credit-card", path: "/dashboard/finance/payments", order: 2 },
            ItemDecl { id: "quotations", label_ar: "عروض الأسعار", icon: "file-check", path: "/dashboard/finance/quotations", order: 3 },
        ],
    },
    ModuleDecl {
        id: constants::FINANCE,
        label_ar: "المالية",
        icon: "dollar-sign",
        order: 5,
        tiers: &[Large],
        variant_group: None,
        required_flag: None,
        items: &[
            ItemDecl { id: "accounts", label_ar: "الحسابات", icon: "landmark", path: "/dashboard/finance/accounts", order: 1 },
            ItemDecl { id: "expenses", label_ar: "المصروفات", icon: "wallet", path: "/dashboard/finance/expenses", order: 2 },
            ItemDecl { id: "financialReports", label_ar: "التقارير المالية", icon: "bar-chart", path: "/dashboard/finance/reports", order: 3 },
        ],
    },
    ModuleDecl {
        id: constants::HR,
        label_ar: "الموارد البشرية",
        icon: "user-cog",
        order: 6,
        tiers: &[Small, Large],
        variant_group: None,
        required_flag: None,
        items: &[
            ItemDecl { id: "employees", label_ar: "الموظفون", icon: "users", path: "/dashboard/hr/employees", order: 1 },
            ItemDecl { id: "attendance", label_ar: "الحضور", icon: "clock", path: "/dashboard/hr/attendance", order: 2 },
            ItemDecl { id: "payroll", label_ar: "الرواتب", icon: "banknote", path: "/dashboard/hr/payroll", order: 3 },
            ItemDecl { id: "leave", label_ar: "الإجازات", icon: "palmtree", path: "/dashboard/hr/leave", order: 4 },
        ],
    },
    ModuleDecl {
        id: constants::DOCUMENTS,
        label_ar: "المستندات",
        icon: "folder",
        order: 7,
        tiers: ALL_TIERS,
        variant_group: None,
        required_flag: None,
        items: &[
            ItemDecl { id: "files", label_ar: "الملفات", icon: "file", path: "/dashboard/documents", order: 1 },
            ItemDecl { id: "templates", label_ar: "القوالب", icon: "layout-template", path: "/dashboard/documents/templates", order: 2 },
        ],
    },
    ModuleDecl {
        id: constants::SAUDI_COMPLIANCE,
        label_ar: "الالتزام السعودي",
        icon: "shield-check",
        order: 8,
        tiers: &[Large],
        variant_group: None,
        required_flag: None,
        items: &[
            ItemDecl { id: "najiz", label_ar: "ناجز", icon: "building", path: "/dashboard/compliance/najiz", order: 1 },
            ItemDecl { id: "zatca", label_ar: "هيئة الزكاة والضريبة", icon: "percent", path: "/dashboard/compliance/zatca", order: 2 },
        ],
    },
    ModuleDecl {
        id: constants::OPERATIONS,
        label_ar: "العمليات",
        icon: "workflow",
        order: 9,
        tiers: &[Large],
        variant_group: None,
        required_flag: None,
        items: &[
            ItemDecl { id: "workflows", label_ar: "مسارات العمل", icon: "git-branch", path: "/dashboard/operations/workflows", order: 1 },
            ItemDecl { id: "approvals", label_ar: "الموافقات", icon: "check-circle", path: "/dashboard/operations/approvals", order: 2 },
        ],
    },
    ModuleDecl {
        id: constants::KNOWLEDGE_CENTER,
        label_ar: "مركز المعرفة",
        icon: "book-open",
        order: 10,
        tiers: ALL_TIERS,
        variant_group: None,
        required_flag: None,
        items: &[
            ItemDecl { id: "laws", label_ar: "الأنظمة", icon: "book", path: "/dashboard/knowledge/laws", order: 1 },
            ItemDecl { id: "judgments", label_ar: "الأحكام", icon: "scroll", path: "/dashboard/knowledge/judgments", order: 2 },
            ItemDecl { id: "forms", label_ar: "النماذج", icon: "clipboard", path: "/dashboard/knowledge/forms", order: 3 },
        ],
    },
    ModuleDecl {
        id: constants::MARKET,
        label_ar: "السوق",
        icon: "store",
        order: 11,
        tiers: ALL_TIERS,
        variant_group: None,
        required_flag: None,
        items: &[
            ItemDecl { id: "browseJobs", label_ar: "تصفح الأعمال", icon: "search", path: "/dashboard/jobs/browse", order: 1 },
            ItemDecl { id: "myServices", label_ar: "خدماتي", icon: "star", path: "/dashboard/jobs/my-services", order: 2 },
        ],
    },
];

static BASIC_ITEM_DECLS: &[ItemDecl] = &[
    ItemDecl { id: "dashboard", label_ar: "لوحة التحكم", icon: "layout-dashboard", path: "/dashboard", order: 1 },
    ItemDecl { id: "calendar", label_ar: "التقويم", icon: "calendar", path: "/dashboard/calendar", order: 2 },
    ItemDecl { id: "messages", label_ar: "الرسائل", icon: "message-square", path: "/dashboard/messages", order: 3 },
    ItemDecl { id: "notifications", label_ar: "الإشعارات", icon: "bell", path: "/dashboard/notifications", order: 4 },
];

static OTHER_ITEM_DECLS: &[ItemDecl] = &[
    ItemDecl { id: "settings", label_ar: "الإعدادات", icon: "settings", path: "/dashboard/settings", order: 1 },
    ItemDecl { id: "helpCenter", label_ar: "مركز المساعدة", icon: "life-buoy", path: "/dashboard/help", order: 2 },
];

fn build_item(decl: &ItemDecl) -> NavItem {
    NavItem {
        id: decl.id.to_owned(),
        label: format!("sidebar.{}", decl.id),
        label_ar: decl.label_ar.to_owned(),
        icon: decl.icon.to_owned(),
        path: decl.path.to_owned(),
        order: decl.order,
    }
}

fn build_module(decl: &ModuleDecl) -> NavModule {
    NavModule {
        id: decl.id.to_owned(),
        label: format!("sidebar.{}", decl.id),
        label_ar: decl.label_ar.to_owned(),
        icon: decl.icon.to_owned(),
        order: decl.order,
        items: decl.items.iter().map(build_item).collect(),
        is_optional: decl.required_flag.is_some(),
    }
}

/// Immutable registry of module and item definitions.
#[derive(Debug, Clone)]
pub struct ModuleCatalog {
    modules: Vec<NavModule>,
    index: FxHashMap<String, usize>,
    basic: NavSection<NavItem>,
    other: NavSection<NavItem>,
    modules_label: String,
    modules_label_ar: String,
}

impl ModuleCatalog {
    /// Builds a catalog from explicit definitions; module order is
    /// declaration order.
    #[must_use]
    pub fn new(
        modules: Vec<NavModule>,
        basic: NavSection<NavItem>,
        other: NavSection<NavItem>,
    ) -> Self {
        let index =
            modules.iter().enumerate().map(|(idx, m)| (m.id.clone(), idx)).collect();
        Self {
            modules,
            index,
            basic,
            other,
            modules_label: format!("sidebar.{}", constants::SECTION_MODULES),
            modules_label_ar: "الوحدات".to_owned(),
        }
    }

    /// Looks up a module definition; unknown ids are `None`, never a panic.
    #[must_use]
    pub fn module(&self, id: &str) -> Option<&NavModule> {
        self.index.get(id).and_then(|&idx| self.modules.get(idx))
    }

    /// All module definitions in declaration order, unfiltered by tier.
    #[must_use]
    pub fn modules(&self) -> &[NavModule] {
        &self.modules
    }

    /// The `basic` section verbatim; never tier-gated.
    #[must_use]
    pub fn basic_section(&self) -> NavSection<NavItem> {
        self.basic.clone()
    }

    /// The `other` section verbatim; never tier-gated.
    #[must_use]
    pub fn other_section(&self) -> NavSection<NavItem> {
        self.other.clone()
    }

    /// Wraps composed modules in the labelled `modules` section.
    #[must_use]
    pub fn modules_section(&self, items: Vec<NavModule>) -> NavSection<NavModule> {
        NavSection {
            label: self.modules_label.clone(),
            label_ar: self.modules_label_ar.clone(),
            items,
        }
    }
}

impl Default for ModuleCatalog {
    fn default() -> Self {
        Self::new(
            MODULE_DECLS.iter().map(build_module).collect(),
            NavSection {
                label: format!("sidebar.{}", constants::SECTION_BASIC),
                label_ar: "القائمة الرئيسية".to_owned(),
                items: BASIC_ITEM_DECLS.iter().map(build_item).collect(),
            },
            NavSection {
                label: format!("sidebar.{}", constants::SECTION_OTHER),
                label_ar: "أخرى".to_owned(),
                items: OTHER_ITEM_DECLS.iter().map(build_item).collect(),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_has_unique_module_ids() {
        let catalog = ModuleCatalog::default();
        let mut seen = fxhash::FxHashSet::default();
        for module in catalog.modules() {
            assert!(seen.insert(module.id.clone()), "duplicate module id {}", module.id);
        }
        assert_eq!(catalog.modules().len(), 12);
    }

    #[test]
    fn unknown_module_lookup_is_none() {
        let catalog = ModuleCatalog::default();
        assert!(catalog.module("procurement").is_none());
        assert!(catalog.module("").is_none());
    }

    #[test]
    fn item_ids_unique_within_each_collection() {
        let catalog = ModuleCatalog::default();
        for module in catalog.modules() {
            let mut seen = fxhash::FxHashSet::default();
            for item in &module.items {
                assert!(seen.insert(item.id.clone()), "duplicate item {} in {}", item.id, module.id);
            }
        }
    }
}
