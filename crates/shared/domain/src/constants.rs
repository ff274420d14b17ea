//! Canonical string identifiers shared between the catalog, policy, and tests.

// Firm types
pub const SOLO: &str = "solo";
pub const SMALL: &str = "small";
pub const LARGE: &str = "large";

// Sections
pub const SECTION_BASIC: &str = "basic";
pub const SECTION_MODULES: &str = "modules";
pub const SECTION_OTHER: &str = "other";

// Modules
pub const PRODUCTIVITY: &str = "productivity";
pub const LEGAL_WORK: &str = "legalWork";
pub const CLIENTS: &str = "clients";
pub const GROWTH: &str = "growth";
pub const BILLING: &str = "billing";
pub const FINANCE: &str = "finance";
pub const HR: &str = "hr";
pub const DOCUMENTS: &str = "documents";
pub const SAUDI_COMPLIANCE: &str = "saudiCompliance";
pub const OPERATIONS: &str = "operations";
pub const KNOWLEDGE_CENTER: &str = "knowledgeCenter";
pub const MARKET: &str = "market";

// Variant groups
pub const GROUP_CLIENT_RELATIONS: &str = "clientRelations";

// Default UI language for composed sidebars
pub const DEFAULT_LANGUAGE: &str = "ar";
