//! The seam between a vessel and the simulator that hosts it.
//!
//! Every factory or mutator call a vessel makes goes through [`VesselHost`]. A real
//! simulator implements it over its own API; [`HeadlessHost`] implements it in memory
//! and records every call.

mod handles;
mod headless;
mod specs;

use std::io;

use nalgebra::Vector3;

use crate::components::{
    BeaconSpec, ControlSurfaceSpec, LightSpec, MeshVisibility, ParticleStreamSpec, RotationSpec,
    Sound, SoundSpec, TouchdownPoint,
};

pub use handles::*;
pub use headless::{HeadlessAnimation, HeadlessHost, HeadlessThrusterGroup};
pub use specs::{AirfoilSpec, ThrusterGroupKind, ThrusterSpec};

/// Line-oriented scenario output for one vessel block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScenarioWriter {
    lines: Vec<String>,
}

impl ScenarioWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_string(&mut self, key: &str, value: &str) {
        self.lines.push(format!("{key} {value}"));
    }

    pub fn write_int(&mut self, key: &str, value: i64) {
        self.lines.push(format!("{key} {value}"));
    }

    /// Appends a line verbatim.
    pub fn write_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The block as it would appear in a scenario file.
    pub fn to_block(&self) -> String {
        self.lines.join("\n")
    }
}

/// Factory and mutator calls a vessel makes on its host.
///
/// Factories that can fail return `Option`; the vessel treats `None` as "resource not
/// available" and carries on without it.
pub trait VesselHost {
    fn set_size(&mut self, size: f64);
    fn set_empty_mass(&mut self, mass: f64);
    fn set_cross_sections(&mut self, cross_sections: Vector3<f64>);
    fn set_pmi(&mut self, pmi: Vector3<f64>);
    fn set_max_wheelbrake_force(&mut self, force: f64);
    fn set_rot_drag(&mut self, drag: Vector3<f64>);

    fn create_propellant_resource(&mut self, mass: f64) -> PropellantHandle;
    fn create_thruster(&mut self, spec: &ThrusterSpec) -> ThrusterHandle;
    fn create_thruster_group(
        &mut self,
        thrusters: &[ThrusterHandle],
        kind: ThrusterGroupKind,
    ) -> ThrusterGroupHandle;
    fn delete_thruster_group(&mut self, group: ThrusterGroupHandle);
    fn thruster_group_level(&self, group: ThrusterGroupHandle) -> f64;
    fn set_thruster_group_level(&mut self, group: ThrusterGroupHandle, level: f64);

    /// A free particle stream whose level the vessel sets every step.
    fn add_particle_stream(
        &mut self,
        spec: &ParticleStreamSpec,
        position: Vector3<f64>,
        direction: Vector3<f64>,
    ) -> ParticleStreamHandle;
    fn set_particle_stream_level(&mut self, stream: ParticleStreamHandle, level: f64);
    /// A particle stream that follows the level of a thruster.
    fn add_exhaust_stream(
        &mut self,
        thruster: ThrusterHandle,
        position: Vector3<f64>,
        spec: &ParticleStreamSpec,
    ) -> ParticleStreamHandle;

    fn create_airfoil(&mut self, spec: &AirfoilSpec) -> AirfoilHandle;
    fn create_control_surface(
        &mut self,
        spec: &ControlSurfaceSpec,
        animation: Option<AnimationHandle>,
    ) -> ControlSurfaceHandle;

    fn create_animation(&mut self, initial_state: f64) -> AnimationHandle;
    fn add_animation_component(
        &mut self,
        animation: AnimationHandle,
        start: f64,
        end: f64,
        rotation: &RotationSpec,
    );
    fn set_animation(&mut self, animation: AnimationHandle, state: f64);

    fn add_beacon(&mut self, spec: &BeaconSpec) -> BeaconHandle;
    fn set_beacon_active(&mut self, beacon: BeaconHandle, active: bool);
    fn add_light(&mut self, spec: &LightSpec) -> LightHandle;
    fn delete_light(&mut self, light: LightHandle);

    fn load_mesh(&mut self, name: &str) -> Option<MeshHandle>;
    /// Attaches a mesh and returns its index.
    fn add_mesh(&mut self, mesh: MeshHandle, visibility: MeshVisibility) -> u32;
    /// The device mesh of mesh `index` in `visual`, if the visual is alive.
    fn device_mesh(&mut self, visual: VisualHandle, index: u32) -> Option<DevMeshHandle>;
    fn load_texture(&mut self, path: &str) -> Option<TextureHandle>;
    /// Replaces the texture of one material slot; returns whether the host accepted it.
    fn set_texture(&mut self, mesh: DevMeshHandle, material: u32, texture: TextureHandle) -> bool;

    fn set_touchdown_points(&mut self, points: &[TouchdownPoint]);
    fn set_nosewheel_steering(&mut self, enabled: bool);
    fn set_wheelbrake_level(&mut self, level: f64, permanent: bool);

    fn load_sound(&mut self, spec: &SoundSpec) -> bool;
    fn play_sound(&mut self, sound: Sound);

    /// Reads a text file relative to the host root directory.
    fn read_root_file(&self, path: &str) -> io::Result<String>;

    fn mach(&self) -> f64;
    /// Altitude above mean radius (m).
    fn altitude(&self) -> f64;
    fn groundspeed(&self) -> f64;

    /// Generic parser for scenario lines the vessel does not recognise.
    fn parse_scenario_line(&mut self, line: &str);
    /// Writes the host-managed part of the vessel state.
    fn save_default_state(&self, writer: &mut ScenarioWriter);
}
