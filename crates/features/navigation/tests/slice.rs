use fhub_domain::features::FeatureSet;
use fhub_navigation::{Navigation, NavigationError, NavigationSettings};

#[test]
fn init_registers_a_navigation_slice() {
    let slice = fhub_navigation::init(NavigationSettings::default()).expect("slice init");
    let navigation = slice.state_as::<Navigation>().expect("downcast navigation state");
    assert_eq!(navigation.catalog().modules().len(), 12);
}

#[test]
fn sidebar_uses_default_language_and_caches_snapshots() {
    let slice = fhub_navigation::init(NavigationSettings::default()).expect("slice init");
    let navigation = slice.state_as::<Navigation>().expect("downcast navigation state");

    let first = navigation.sidebar("large", None, FeatureSet::empty()).expect("compose");
    assert_eq!(first.language, "ar");
    assert_eq!(first.sections.modules.items.len(), 11);

    let second = navigation.sidebar("large", None, FeatureSet::empty()).expect("compose");
    assert!(std::sync::Arc::ptr_eq(&first, &second), "second call must be a cache hit");
}

#[test]
fn sidebar_rejects_unknown_firm_type() {
    let slice = fhub_navigation::init(NavigationSettings::default()).expect("slice init");
    let navigation = slice.state_as::<Navigation>().expect("downcast navigation state");

    let err = navigation.sidebar("mega", None, FeatureSet::empty()).unwrap_err();
    assert!(matches!(err, NavigationError::Validation { .. }));
}

#[test]
fn resolve_remote_without_payload_is_the_solo_default() {
    let slice = fhub_navigation::init(NavigationSettings::default()).expect("slice init");
    let navigation = slice.state_as::<Navigation>().expect("downcast navigation state");

    let resolved = navigation.resolve_remote(None, FeatureSet::empty());
    assert_eq!(resolved.firm_type, fhub_domain::firm::FirmType::Solo);
    assert_eq!(resolved.sections.modules.items.len(), 7);
}
