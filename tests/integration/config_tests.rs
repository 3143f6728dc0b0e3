use jumbo::{
    components::{ConfigError, VariantType, VesselConfig, VesselSource},
    utils::errors::VesselError,
    vessel::create_vessel,
};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

use crate::common::{builtin_configs, write_file};

#[test]
fn test_every_builtin_class_creates_a_vessel() {
    for variant in VariantType::builtin() {
        let vessel = create_vessel(variant.class_name()).unwrap();
        assert_eq!(vessel.config().variant, variant);
    }
    for config in builtin_configs() {
        config.validate().unwrap();
    }
}

#[test]
fn test_yaml_file_round_trip() {
    let dir = tempdir().unwrap();
    let original = VesselConfig::from_programmed(VariantType::Supertanker);
    write_file(dir.path(), "tanker.yaml", &original.to_yaml_string().unwrap());

    let loaded = VesselConfig::new(VesselSource::File(dir.path().join("tanker.yaml"))).unwrap();
    assert_eq!(loaded, original);
}

#[test]
fn test_invalid_file_is_rejected() {
    let dir = tempdir().unwrap();
    let mut config = VesselConfig::from_programmed(VariantType::B747_400);
    config.gear.operating_speed = 0.0;
    write_file(dir.path(), "broken.yaml", &config.to_yaml_string().unwrap());

    let result = VesselConfig::from_file(dir.path().join("broken.yaml"));
    assert!(matches!(result, Err(ConfigError::ValidationError(_))));
}

#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();
    let result = VesselConfig::from_file(dir.path().join("nope.yaml"));
    assert!(matches!(result, Err(ConfigError::FileError(_))));
}

#[test]
fn test_unknown_class_name() {
    assert!(matches!(
        create_vessel("Boeing777"),
        Err(VesselError::UnknownClass(_))
    ));
}
