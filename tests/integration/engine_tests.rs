use approx::assert_relative_eq;
use jumbo::{
    components::Sound,
    host::{ThrusterGroupKind, VesselHost},
    utils::constants::VESSEL_TIMESTEP,
    vessel::{Key, VesselCallbacks},
};

use crate::common::{assert_no_engine_groups, created_vessel, press_ctrl, step};

#[test]
fn test_engines_on_off_on() {
    let (mut vessel, mut host) = created_vessel("Boeing747_400");
    assert_no_engine_groups(&vessel, &host);

    assert!(press_ctrl(&mut vessel, &mut host, Key::A));
    assert_eq!(host.played, vec![Sound::EnginesStart]);
    step(&mut vessel, &mut host, 1, VESSEL_TIMESTEP);
    assert_eq!(host.groups_of_kind(ThrusterGroupKind::Main).len(), 1);
    assert_eq!(host.groups_of_kind(ThrusterGroupKind::Retro).len(), 1);

    let main = vessel.engines().main_group.unwrap();
    host.set_thruster_group_level(main, 0.8);
    step(&mut vessel, &mut host, 1, VESSEL_TIMESTEP);
    assert_relative_eq!(vessel.engines().power, 0.8);

    assert!(press_ctrl(&mut vessel, &mut host, Key::E));
    assert_eq!(host.played.last(), Some(&Sound::EnginesShutdown));
    step(&mut vessel, &mut host, 1, VESSEL_TIMESTEP);
    assert_no_engine_groups(&vessel, &host);
    assert_eq!(host.deleted_groups, 2);

    assert!(press_ctrl(&mut vessel, &mut host, Key::A));
    step(&mut vessel, &mut host, 1, VESSEL_TIMESTEP);
    assert!(vessel.engines().has_groups());
    assert_eq!(host.group_count(), 2);
}

#[test]
fn test_retro_thrusters_run_at_quarter_thrust() {
    let (vessel, host) = created_vessel("Boeing747_8");
    let main = host.thrusters[&vessel.handles().main_thrusters[0]].max_thrust;
    let retro = host.thrusters[&vessel.handles().retro_thrusters[0]].max_thrust;
    assert_relative_eq!(retro, main / 4.0);
}

#[test]
fn test_groups_are_permanent_without_engine_control() {
    let (mut vessel, mut host) = created_vessel("Boeing747SP");
    assert_eq!(host.group_count(), 2);
    step(&mut vessel, &mut host, 10, VESSEL_TIMESTEP);
    assert_eq!(host.group_count(), 2);
    assert_eq!(host.deleted_groups, 0);
}

#[test]
fn test_fan_phase_drives_engine_animation() {
    let (mut vessel, mut host) = created_vessel("Boeing747_400");
    let fans = vessel.handles().animations.engines.unwrap();
    vessel.pre_step(&mut host, 0.0, 0.1, 51_544.5);
    assert_relative_eq!(host.animation(fans).unwrap().state, 0.25, epsilon = 1e-12);
    assert_relative_eq!(vessel.engines().fan_phase, 0.25, epsilon = 1e-12);
}

#[test]
fn test_contrail_band() {
    let (mut vessel, mut host) = created_vessel("Boeing747_400");
    host.mach = 0.85;
    host.altitude = 11_000.0;
    step(&mut vessel, &mut host, 1, VESSEL_TIMESTEP);
    assert_eq!(host.stream_levels(), vec![1.0; 4]);

    host.altitude = 16_000.0;
    step(&mut vessel, &mut host, 1, VESSEL_TIMESTEP);
    assert_eq!(host.stream_levels(), vec![0.0; 4]);

    host.altitude = 11_000.0;
    host.mach = 0.4;
    step(&mut vessel, &mut host, 1, VESSEL_TIMESTEP);
    assert_eq!(host.stream_levels(), vec![0.0; 4]);
}

#[test]
fn test_contrail_band_is_open_ended_for_the_classic() {
    let (mut vessel, mut host) = created_vessel("Boeing747_100");
    host.mach = 0.85;
    host.altitude = 16_000.0;
    step(&mut vessel, &mut host, 1, VESSEL_TIMESTEP);
    assert_eq!(host.stream_levels(), vec![1.0; 4]);
}

#[test]
fn test_water_discharge_valve() {
    let (mut vessel, mut host) = created_vessel("Boeing747_Supertanker");
    let group = vessel.handles().water_group.unwrap();
    assert_eq!(host.exhaust_stream_count(), vessel.handles().water_exhaust.len());

    assert!(crate::common::press(&mut vessel, &mut host, Key::W));
    assert_relative_eq!(host.thruster_group_level(group), 1.0);
    assert!(crate::common::press(&mut vessel, &mut host, Key::W));
    assert_relative_eq!(host.thruster_group_level(group), 0.0);
    assert!(!vessel.water_valve_open());
}
