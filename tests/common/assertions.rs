use approx::assert_relative_eq;
use jumbo::{
    components::{GearStatus, TouchdownSet},
    host::HeadlessHost,
    vessel::Boeing747,
};

/// Assert that the gear reached a terminal state and the host has the matching contacts
#[track_caller]
pub fn assert_gear_settled(vessel: &Boeing747, host: &HeadlessHost, status: GearStatus) {
    let gear = vessel.gear();
    assert_eq!(gear.status, status, "gear status");
    match status {
        GearStatus::Down => {
            assert_relative_eq!(gear.fraction, 0.0);
            assert_eq!(vessel.touchdown_set(), Some(TouchdownSet::GearDown));
            assert_eq!(host.touchdown_points.len(), 14);
            assert!(host.nosewheel_steering, "steering should be on with the gear down");
        }
        GearStatus::Up => {
            assert_relative_eq!(gear.fraction, 1.0);
            assert_eq!(vessel.touchdown_set(), Some(TouchdownSet::GearUp));
            assert_eq!(host.touchdown_points.len(), 11);
            assert!(!host.nosewheel_steering, "steering should be off with the gear up");
        }
        moving => panic!("{moving:?} is not a terminal gear state"),
    }
}

/// Assert that no engine thruster group exists on the vessel or the host
#[track_caller]
pub fn assert_no_engine_groups(vessel: &Boeing747, host: &HeadlessHost) {
    assert!(!vessel.engines().has_groups(), "vessel still holds groups");
    assert_eq!(vessel.engines().power, 0.0);
    let water = vessel.handles().water_group.map_or(0, |_| 1);
    assert_eq!(host.group_count(), water, "host still has engine groups");
}

/// Assert that the skin's fuselage texture is painted on material slot 1
#[track_caller]
pub fn assert_skin_applied(host: &HeadlessHost, skin_dir: &str, skin: &str) {
    let expected = format!("{skin_dir}{skin}/Fuselage.dds");
    assert_eq!(host.mesh_texture(1), Some(expected.as_str()));
}
