use std::fs;
use std::path::Path;

use bevy::prelude::*;
use jumbo::{
    components::{VariantType, VesselConfig},
    host::{HeadlessHost, ScenarioWriter},
    vessel::{create_vessel, Boeing747, Key, KeyModifiers, VesselCallbacks},
};

pub const CTRL: &[KeyCode] = &[KeyCode::ControlLeft];

/// Skin list with the supertanker's two liveries.
pub const TANKER_SKINS: &str = "; Global SuperTanker liveries\nSKIN1 = Evergreen\nSKIN2 = Global\n";

/// Writes `contents` to `name` under `dir`.
pub fn write_file(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).expect("failed to write fixture");
}

/// A vessel that went through class caps and post creation on a fresh host.
pub fn created_vessel(class_name: &str) -> (Boeing747, HeadlessHost) {
    created_on(class_name, HeadlessHost::new())
}

pub fn created_on(class_name: &str, mut host: HeadlessHost) -> (Boeing747, HeadlessHost) {
    let mut vessel = create_vessel(class_name).expect("unknown class");
    vessel.set_class_caps(&mut host);
    vessel.post_creation(&mut host);
    (vessel, host)
}

/// Same as [`created_on`] with the visual already created.
pub fn visible_vessel(class_name: &str, host: HeadlessHost) -> (Boeing747, HeadlessHost) {
    let (mut vessel, mut host) = created_on(class_name, host);
    let visual = host.create_visual();
    vessel.visual_created(&mut host, visual, 1);
    (vessel, host)
}

pub fn press(vessel: &mut Boeing747, host: &mut HeadlessHost, key: Key) -> bool {
    vessel.consume_buffered_key(host, key, true, KeyModifiers::NONE)
}

pub fn press_ctrl(vessel: &mut Boeing747, host: &mut HeadlessHost, key: Key) -> bool {
    vessel.consume_buffered_key(host, key, true, KeyModifiers::CTRL)
}

/// Runs `steps` pre/post step pairs of `dt` seconds.
pub fn step(vessel: &mut Boeing747, host: &mut HeadlessHost, steps: usize, dt: f64) {
    for i in 0..steps {
        let simt = i as f64 * dt;
        vessel.pre_step(host, simt, dt, 51_544.5);
        vessel.post_step(host, simt, dt, 51_544.5);
    }
}

pub fn saved_lines(vessel: &Boeing747, host: &HeadlessHost) -> Vec<String> {
    let mut writer = ScenarioWriter::new();
    vessel.save_state(host, &mut writer);
    writer.lines().to_vec()
}

pub fn builtin_configs() -> Vec<VesselConfig> {
    VariantType::builtin()
        .into_iter()
        .map(VesselConfig::from_programmed)
        .collect()
}
