use approx::assert_relative_eq;
use jumbo::{
    components::{GearStatus, Sound, TouchdownSet},
    utils::constants::VESSEL_TIMESTEP,
    vessel::Key,
};

use crate::common::{assert_gear_settled, created_vessel, press, step};

// Full travel at 0.06/s takes 16.7 s
const FULL_TRAVEL_STEPS: usize = 2100;

#[test]
fn test_gear_starts_down() {
    let (vessel, host) = created_vessel("Boeing747_400");
    assert_gear_settled(&vessel, &host, GearStatus::Down);
    assert_eq!(host.touchdown_updates, 1);
}

#[test]
fn test_gear_retract_and_extend_cycle() {
    let (mut vessel, mut host) = created_vessel("Boeing747_400");

    assert!(press(&mut vessel, &mut host, Key::G));
    assert_eq!(vessel.gear().status, GearStatus::Stowing);
    assert_eq!(host.played, vec![Sound::GearMovement]);

    step(&mut vessel, &mut host, FULL_TRAVEL_STEPS, VESSEL_TIMESTEP);
    assert_gear_settled(&vessel, &host, GearStatus::Up);
    assert_eq!(host.touchdown_updates, 2);

    let gear_anim = vessel.handles().animations.gear.unwrap();
    assert_relative_eq!(host.animation(gear_anim).unwrap().state, 1.0);

    assert!(press(&mut vessel, &mut host, Key::G));
    assert_eq!(vessel.gear().status, GearStatus::Deploying);
    step(&mut vessel, &mut host, FULL_TRAVEL_STEPS, VESSEL_TIMESTEP);
    assert_gear_settled(&vessel, &host, GearStatus::Down);
    assert_eq!(host.touchdown_updates, 3);
    assert_relative_eq!(host.animation(gear_anim).unwrap().state, 0.0);
}

#[test]
fn test_gear_reverses_mid_travel() {
    let (mut vessel, mut host) = created_vessel("Boeing747_8");
    press(&mut vessel, &mut host, Key::G);
    step(&mut vessel, &mut host, 1000, VESSEL_TIMESTEP);
    assert_eq!(vessel.gear().status, GearStatus::Stowing);
    assert_relative_eq!(vessel.gear().fraction, 0.5, epsilon = 1e-9);
    assert_eq!(vessel.touchdown_set(), Some(TouchdownSet::GearUp));

    press(&mut vessel, &mut host, Key::G);
    step(&mut vessel, &mut host, 1, VESSEL_TIMESTEP);
    assert_eq!(vessel.gear().status, GearStatus::Deploying);
    assert!(vessel.gear().fraction < 0.5);
    assert_eq!(vessel.touchdown_set(), Some(TouchdownSet::GearDown));
    assert_eq!(host.touchdown_points.len(), 14);
}

#[test]
fn test_fraction_stays_in_bounds_with_large_steps() {
    let (mut vessel, mut host) = created_vessel("Boeing747_100");
    press(&mut vessel, &mut host, Key::G);
    for _ in 0..10 {
        step(&mut vessel, &mut host, 1, 7.5);
        let fraction = vessel.gear().fraction;
        assert!((0.0..=1.0).contains(&fraction), "fraction {fraction}");
    }
    assert_gear_settled(&vessel, &host, GearStatus::Up);
}

#[test]
fn test_supertanker_gear_is_silent() {
    let (mut vessel, mut host) = created_vessel("Boeing747_Supertanker");
    assert!(press(&mut vessel, &mut host, Key::G));
    assert!(host.played.is_empty());
}
