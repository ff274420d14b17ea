use crate::constants::{LARGE, SMALL, SOLO};
use serde::{Deserialize, Serialize};

/// Organization size category controlling navigation visibility.
///
/// Capability mostly grows with size (solo ⊂ small ⊂ large), but not strictly:
/// some modules are solo-only variants replaced by another module for larger
/// firms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirmType {
    Solo,
    Small,
    Large,
}

impl FirmType {
    /// All firm types in capability order.
    pub const ALL: [Self; 3] = [Self::Solo, Self::Small, Self::Large];

    /// Parses the canonical lowercase form; anything else is `None`.
    ///
    /// Callers that need a hard failure on unknown input wrap the `None`
    /// into their own validation error.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            SOLO => Some(Self::Solo),
            SMALL => Some(Self::Small),
            LARGE => Some(Self::Large),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Solo => SOLO,
            Self::Small => SMALL,
            Self::Large => LARGE,
        }
    }
}

impl std::fmt::Display for FirmType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
