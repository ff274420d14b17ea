use fhub_domain::features::FeatureSet;

#[test]
fn flag_names_map_to_flags() {
    assert_eq!(FeatureSet::from("market"), FeatureSet::MARKET);
    assert_eq!(FeatureSet::from("all"), FeatureSet::ALL);
    assert_eq!(FeatureSet::from("*"), FeatureSet::ALL);
    assert_eq!(FeatureSet::from("unknownFlag"), FeatureSet::empty());
}

#[test]
fn feature_set_serializes_as_raw_bits() {
    let value = serde_json::to_value(FeatureSet::MARKET).unwrap();
    assert_eq!(value, serde_json::json!(FeatureSet::MARKET.bits()));

    let back: FeatureSet = serde_json::from_value(value).unwrap();
    assert_eq!(back, FeatureSet::MARKET);
}

#[test]
fn unknown_bits_are_retained_on_deserialize() {
    // Forward compatibility: a newer peer may send flags this build does not know.
    let back: FeatureSet = serde_json::from_value(serde_json::json!(u32::MAX)).unwrap();
    assert!(back.contains(FeatureSet::MARKET));
}
