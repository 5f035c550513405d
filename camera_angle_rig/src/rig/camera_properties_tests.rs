/// Tests for CameraAngleProperties

use super::*;

#[test]
fn test_new_rejects_bad_distance() {
    for distance in [0.0, -1.0, f32::NAN, f32::INFINITY] {
        let result = CameraAngleProperties::new(ProjectionType::Isometric, ViewSlot::DEFAULT, distance);
        assert!(matches!(result, Err(Error::InvalidParameter(_))), "distance {}", distance);
    }
}

#[test]
fn test_from_config_uses_defaults() {
    let config = RigConfig {
        default_projection: ProjectionType::Trimetric,
        default_distance: 2.0,
        ..Default::default()
    };
    let props = CameraAngleProperties::from_config(&config);
    assert_eq!(props.projection(), ProjectionType::Trimetric);
    assert_eq!(props.slot(), ViewSlot::DEFAULT);
    assert_eq!(props.distance(), 2.0);
}

#[test]
fn test_slot_setters_validate_range() {
    let mut props = CameraAngleProperties::from_config(&RigConfig::default());

    props.set_horizontal_slot(8).unwrap();
    props.set_vertical_slot(1).unwrap();
    assert_eq!(props.slot(), ViewSlot::new(8, 1).unwrap());

    assert!(matches!(props.set_horizontal_slot(0), Err(Error::InvalidSlot { .. })));
    assert!(matches!(props.set_vertical_slot(6), Err(Error::InvalidSlot { .. })));
    assert_eq!(props.slot(), ViewSlot::new(8, 1).unwrap());
}

#[test]
fn test_set_distance_clamps() {
    let config = RigConfig::default();
    let mut props = CameraAngleProperties::from_config(&config);

    props.set_distance(2.5, &config).unwrap();
    assert_eq!(props.distance(), 2.5);

    props.set_distance(10.0, &config).unwrap();
    assert_eq!(props.distance(), config.max_distance);

    props.set_distance(0.05, &config).unwrap();
    assert_eq!(props.distance(), config.min_distance);
}

#[test]
fn test_set_distance_rejects_non_positive() {
    let config = RigConfig::default();
    let mut props = CameraAngleProperties::from_config(&config);

    assert!(props.set_distance(0.0, &config).is_err());
    assert!(props.set_distance(-3.0, &config).is_err());
    assert_eq!(props.distance(), config.default_distance);
}
