//! Facade crate for `FirmHub` features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.

pub use fhub_domain as domain;
pub use fhub_kernel as kernel;
pub use fhub_logger as logger;

/// Feature registry for runtime introspection.
pub mod features {
    pub use fhub_navigation as navigation;

    /// Build-time enabled features.
    pub const ENABLED: &[&str] = &["navigation"];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all enabled features.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(
    navigation_settings: fhub_navigation::NavigationSettings,
) -> Result<Vec<domain::registry::InitializedSlice>, Box<dyn std::error::Error>> {
    let mut slices = Vec::new();

    // Navigation
    slices.push(features::navigation::init(navigation_settings)?);

    Ok(slices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_feature_is_enabled() {
        assert!(features::is_enabled("navigation"));
        assert!(!features::is_enabled("licensing"));
    }

    #[test]
    fn init_builds_every_enabled_slice() {
        let slices = init(fhub_navigation::NavigationSettings::default()).expect("init");
        assert_eq!(slices.len(), features::ENABLED.len());
    }
}
