use approx::assert_relative_eq;
use jumbo::{
    components::GearStatus,
    host::HeadlessHost,
    vessel::{Key, VesselCallbacks},
};
use pretty_assertions::assert_eq;

use crate::common::{created_on, created_vessel, press, press_ctrl, saved_lines};

#[test]
fn test_save_order() {
    let (mut vessel, mut host) = created_vessel("Boeing747_400");
    press_ctrl(&mut vessel, &mut host, Key::A);
    vessel.load_state(&mut host, "SKIN KLM");
    assert_eq!(
        saved_lines(&vessel, &host),
        vec![
            "STATUS Landed Earth".to_string(),
            "GEAR 0 0.0000".to_string(),
            "SKIN KLM".to_string(),
            "ENGINES 1".to_string(),
        ]
    );
}

#[test]
fn test_gear_and_engines_round_trip() {
    let (mut vessel, mut host) = created_vessel("Boeing747_8");
    vessel.load_state(&mut host, "GEAR 3 0.4321\nENGINES 1");
    let lines = saved_lines(&vessel, &host);

    let (mut restored, mut restored_host) = created_vessel("Boeing747_8");
    restored.load_state(&mut restored_host, &lines.join("\n"));
    assert_eq!(restored.gear().status, GearStatus::Stowing);
    assert_relative_eq!(restored.gear().fraction, 0.4321);
    assert!(restored.engines().running);
    assert_eq!(saved_lines(&restored, &restored_host), lines);
}

#[test]
fn test_loaded_fraction_drives_gear_animation() {
    let (mut vessel, mut host) = created_vessel("Boeing747_400");
    vessel.load_state(&mut host, "gear 2 0.7500");
    let gear_anim = vessel.handles().animations.gear.unwrap();
    assert_relative_eq!(host.animation(gear_anim).unwrap().state, 0.75);
}

#[test]
fn test_unknown_lines_reach_host_parser() {
    let (mut vessel, mut host) = created_vessel("Boeing747_400");
    vessel.load_state(
        &mut host,
        "STATUS Landed Earth\nGEAR 1 1.0000\n\nRPOS 0 0 0\nAFCMODE 7",
    );
    assert_eq!(
        host.parsed_lines,
        vec![
            "STATUS Landed Earth".to_string(),
            "RPOS 0 0 0".to_string(),
            "AFCMODE 7".to_string(),
        ]
    );
}

#[test]
fn test_variant_specific_keys_fall_through() {
    let (mut vessel, mut host) = created_vessel("Boeing747_Supertanker");
    vessel.load_state(&mut host, "SKIN Evergreen");
    assert_eq!(host.parsed_lines, vec!["SKIN Evergreen".to_string()]);

    let (mut vessel, mut host) = created_vessel("Boeing747SP");
    vessel.load_state(&mut host, "ENGINES 1");
    assert!(!vessel.engines().running);
    assert_eq!(host.parsed_lines, vec!["ENGINES 1".to_string()]);
}

#[test]
fn test_classic_saves_gear_only() {
    let (mut vessel, mut host) = created_vessel("Boeing747_100");
    press(&mut vessel, &mut host, Key::G);
    assert_eq!(
        saved_lines(&vessel, &host),
        vec!["STATUS Landed Earth".to_string(), "GEAR 3 0.0000".to_string()]
    );
}

#[test]
fn test_malformed_lines_are_dropped() {
    let (mut vessel, mut host) = created_vessel("Boeing747_400");
    vessel.load_state(&mut host, "GEAR 2 0.5\nGEAR x 0.1\nENGINES on");
    assert_eq!(vessel.gear().status, GearStatus::Deploying);
    assert_relative_eq!(vessel.gear().fraction, 0.5);
    assert!(!vessel.engines().running);
    assert!(host.parsed_lines.is_empty());
}

#[test]
fn test_scenario_skin_loads_textures() {
    let host = HeadlessHost::new();
    let (mut vessel, mut host) = created_on("Boeing747_8", host);
    vessel.load_state(&mut host, "SKIN Cargolux");
    let visual = host.create_visual();
    vessel.visual_created(&mut host, visual, 1);
    assert_eq!(
        host.mesh_texture(1),
        Some("Boeing_747/B747_8/Skins/Cargolux/Fuselage.dds")
    );
}
