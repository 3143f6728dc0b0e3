use approx::assert_relative_eq;
use bevy::prelude::*;
use jumbo::{
    components::{FlightConditions, GearStatus, Sound, VariantType, VesselConfig},
    host::{HeadlessHost, ThrusterGroupKind},
    plugins::VesselSpawn,
    vessel::Boeing747,
};

use crate::common::{assert_gear_settled, assert_no_engine_groups, TestAppBuilder, CTRL};

#[test]
fn test_vessel_spawned_through_creation_sequence() {
    let mut app = TestAppBuilder::new()
        .with_variant(VariantType::B747_400)
        .build();

    let (vessel, host) = app.vessel();
    assert!(host.visual().is_some());
    assert_eq!(vessel.visual(), host.visual());
    assert_eq!(host.thrusters.len(), 8);
    assert_eq!(host.airfoils.len(), 5);
    assert_eq!(host.sounds.len(), vessel.config().sounds.len());
    assert_gear_settled(vessel, host, GearStatus::Down);

    let name = app.query_single::<Name>().unwrap();
    assert_eq!(name.as_str(), "Boeing747_400");
}

#[test]
fn test_gear_key_cycles_gear() {
    let mut app = TestAppBuilder::new()
        .with_variant(VariantType::B747_8)
        .build();

    app.tap(KeyCode::KeyG, &[]);
    assert_eq!(app.vessel().0.gear().status, GearStatus::Stowing);

    app.run_seconds(17.5);
    let (vessel, host) = app.vessel();
    assert_gear_settled(vessel, host, GearStatus::Up);
    assert_eq!(host.played, vec![Sound::GearMovement]);
}

#[test]
fn test_engine_keys_need_ctrl() {
    let mut app = TestAppBuilder::new()
        .with_variant(VariantType::B747_400)
        .build();

    app.tap(KeyCode::KeyA, &[]);
    let (vessel, host) = app.vessel();
    assert!(!vessel.engines().running);
    assert_no_engine_groups(vessel, host);

    app.tap(KeyCode::KeyA, CTRL);
    let (vessel, host) = app.vessel();
    assert!(vessel.engines().running);
    assert_eq!(host.groups_of_kind(ThrusterGroupKind::Main).len(), 1);

    app.tap(KeyCode::KeyE, CTRL);
    let (vessel, host) = app.vessel();
    assert_no_engine_groups(vessel, host);
    assert_eq!(
        host.played,
        vec![Sound::EnginesStart, Sound::EnginesShutdown]
    );
}

#[test]
fn test_contrails_follow_flight_conditions() {
    let mut app = TestAppBuilder::new()
        .with_variant(VariantType::B747_400)
        .with_conditions(FlightConditions::cruise())
        .build();
    app.run_steps(2);
    assert_eq!(app.vessel().1.stream_levels(), vec![1.0; 4]);

    app.query_single_mut::<FlightConditions>().unwrap().mach = 0.3;
    app.run_steps(2);
    let (vessel, host) = app.vessel();
    assert_eq!(host.stream_levels(), vec![0.0; 4]);
    assert_relative_eq!(host.mach, 0.3);
    assert_eq!(vessel.engines().contrail_level, 0.0);
}

#[test]
fn test_scenario_applied_before_post_creation() {
    let spawn = VesselSpawn::new(VesselConfig::from_programmed(VariantType::B747_400))
        .with_scenario("STATUS Landed Earth\nGEAR 1 1.0000\nENGINES 1");
    let mut app = TestAppBuilder::new().with_vessel(spawn).build();
    app.run_steps(1);

    let (vessel, host) = app.vessel();
    assert_gear_settled(vessel, host, GearStatus::Up);
    assert_eq!(host.touchdown_updates, 1);
    assert!(vessel.engines().has_groups());
    assert_eq!(host.parsed_lines, vec!["STATUS Landed Earth".to_string()]);
}

#[test]
fn test_each_vessel_owns_its_host() {
    let mut app = TestAppBuilder::new()
        .with_variant(VariantType::B747_100)
        .with_variant(VariantType::Supertanker)
        .build();
    app.tap(KeyCode::KeyW, &[]);

    let world = app.app.world_mut();
    let mut query = world.query::<(&Boeing747, &HeadlessHost)>();
    for (vessel, host) in query.iter(world) {
        match vessel.config().variant {
            VariantType::Supertanker => {
                assert!(vessel.water_valve_open());
                assert_eq!(host.group_count(), 1);
            }
            _ => {
                assert!(!vessel.water_valve_open());
                assert_eq!(host.group_count(), 2);
            }
        }
    }
    assert_eq!(app.query_all::<Boeing747>().len(), 2);
}
