use jumbo::{host::HeadlessHost, vessel::{Key, VesselCallbacks}};
use tempfile::tempdir;

use crate::common::{
    assert_skin_applied, created_on, press, saved_lines, visible_vessel, write_file,
    TANKER_SKINS,
};

const TANKER_DIR: &str = "Boeing_747/B747_Supertanker/Skins/";

#[test]
fn test_next_skin_cycles_and_wraps() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "B747ST_skins.txt", TANKER_SKINS);
    let host = HeadlessHost::new().with_root_dir(dir.path());
    let (mut vessel, mut host) = visible_vessel("Boeing747_Supertanker", host);

    assert!(press(&mut vessel, &mut host, Key::V));
    assert_skin_applied(&host, TANKER_DIR, "Evergreen");
    assert!(press(&mut vessel, &mut host, Key::V));
    assert_skin_applied(&host, TANKER_DIR, "Global");
    assert!(press(&mut vessel, &mut host, Key::V));
    assert_skin_applied(&host, TANKER_DIR, "Evergreen");
    assert_eq!(vessel.livery().unwrap().index, 1);
}

#[test]
fn test_engine_texture_uses_variant_slot() {
    let host = HeadlessHost::new().with_file("B747ST_skins.txt", TANKER_SKINS);
    let (mut vessel, mut host) = visible_vessel("Boeing747_Supertanker", host);
    press(&mut vessel, &mut host, Key::V);
    assert_eq!(
        host.mesh_texture(4),
        Some("Boeing_747/B747_Supertanker/Skins/Evergreen/ENG1.dds")
    );
    assert_eq!(
        host.mesh_texture(9),
        Some("Boeing_747/B747_Supertanker/Skins/Evergreen/Left_wing.dds")
    );
}

#[test]
fn test_missing_texture_keeps_previous_slot() {
    let host = HeadlessHost::new().with_file("B747ST_skins.txt", TANKER_SKINS);
    let (mut vessel, mut host) = visible_vessel("Boeing747_Supertanker", host);
    host.missing_textures
        .insert(format!("{TANKER_DIR}Global/Fuselage.dds"));

    press(&mut vessel, &mut host, Key::V);
    press(&mut vessel, &mut host, Key::V);
    assert_skin_applied(&host, TANKER_DIR, "Evergreen");
    assert_eq!(
        host.mesh_texture(2),
        Some("Boeing_747/B747_Supertanker/Skins/Global/Vertical_stabilizer.dds")
    );
}

#[test]
fn test_missing_skin_list_still_advances() {
    let (mut vessel, mut host) = visible_vessel("Boeing747_Supertanker", HeadlessHost::new());
    assert!(press(&mut vessel, &mut host, Key::V));
    assert_eq!(host.mesh_texture(1), None);
    assert_eq!(vessel.livery().unwrap().index, 1);
    assert_eq!(vessel.livery().unwrap().skin_name, None);
}

#[test]
fn test_skin_loaded_before_visual_is_applied_on_creation() {
    let host = HeadlessHost::new().with_file("B747ST_skins.txt", TANKER_SKINS);
    let (mut vessel, mut host) = created_on("Boeing747_Supertanker", host);
    press(&mut vessel, &mut host, Key::V);
    assert_eq!(host.mesh_texture(1), None);

    let visual = host.create_visual();
    vessel.visual_created(&mut host, visual, 1);
    assert_skin_applied(&host, TANKER_DIR, "Evergreen");
}

#[test]
fn test_visual_recreation_reapplies_textures() {
    let host = HeadlessHost::new().with_file("B747ST_skins.txt", TANKER_SKINS);
    let (mut vessel, mut host) = visible_vessel("Boeing747_Supertanker", host);
    press(&mut vessel, &mut host, Key::V);

    let visual = host.destroy_visual().unwrap();
    vessel.visual_destroyed(&mut host, visual, 0);
    assert_eq!(vessel.visual(), None);

    // Cycling without a visual loads but paints nothing
    press(&mut vessel, &mut host, Key::V);
    assert_eq!(host.mesh_texture(1), None);

    let visual = host.create_visual();
    vessel.visual_created(&mut host, visual, 1);
    assert_skin_applied(&host, TANKER_DIR, "Global");
}

#[test]
fn test_selected_skin_is_saved_when_persisted() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "B747400_skins.txt", "SKIN1=Boeing_House\nSKIN2=Lufthansa\n");
    let host = HeadlessHost::new().with_root_dir(dir.path());
    let (mut vessel, mut host) = visible_vessel("Boeing747_400", host);
    assert!(!saved_lines(&vessel, &host).iter().any(|l| l.starts_with("SKIN")));

    press(&mut vessel, &mut host, Key::V);
    assert!(saved_lines(&vessel, &host).contains(&"SKIN Boeing_House".to_string()));
}

#[test]
fn test_tanker_skin_is_not_saved() {
    let host = HeadlessHost::new().with_file("B747ST_skins.txt", TANKER_SKINS);
    let (mut vessel, mut host) = visible_vessel("Boeing747_Supertanker", host);
    press(&mut vessel, &mut host, Key::V);
    assert!(!saved_lines(&vessel, &host).iter().any(|l| l.starts_with("SKIN")));
}
