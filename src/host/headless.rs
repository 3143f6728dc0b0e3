use std::collections::{BTreeMap, HashMap, HashSet};
use std::io;
use std::path::PathBuf;

use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{
    AnimationComponentSpec, BeaconSpec, ControlSurfaceSpec, LightSpec, MeshVisibility,
    ParticleStreamSpec, RotationSpec, Sound, SoundSpec, TouchdownPoint,
};
use crate::host::{
    AirfoilHandle, AirfoilSpec, AnimationHandle, BeaconHandle, ControlSurfaceHandle,
    DevMeshHandle, LightHandle, MeshHandle, ParticleStreamHandle, PropellantHandle,
    ScenarioWriter, TextureHandle, ThrusterGroupHandle, ThrusterGroupKind, ThrusterHandle,
    ThrusterSpec, VesselHost, VisualHandle,
};

#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessAnimation {
    pub state: f64,
    pub components: Vec<AnimationComponentSpec>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessThrusterGroup {
    pub kind: ThrusterGroupKind,
    pub thrusters: Vec<ThrusterHandle>,
    pub level: f64,
}

#[derive(Debug, Clone, PartialEq)]
struct HeadlessStream {
    spec: ParticleStreamSpec,
    level: f64,
    exhaust_of: Option<ThrusterHandle>,
}

/// An in-memory host that records every call made on it.
///
/// Flight conditions are plain fields, files can be registered up front or read from a
/// root directory, and every texture loads unless it was marked missing.
#[derive(Component, Debug, Default)]
pub struct HeadlessHost {
    next_id: u64,

    pub size: f64,
    pub empty_mass: f64,
    pub cross_sections: Vector3<f64>,
    pub pmi: Vector3<f64>,
    pub max_wheelbrake_force: f64,
    pub rot_drag: Vector3<f64>,

    pub propellants: Vec<f64>,
    pub thrusters: BTreeMap<ThrusterHandle, ThrusterSpec>,
    groups: BTreeMap<ThrusterGroupHandle, HeadlessThrusterGroup>,
    pub deleted_groups: usize,
    streams: BTreeMap<ParticleStreamHandle, HeadlessStream>,
    pub airfoils: Vec<AirfoilSpec>,
    pub control_surfaces: Vec<(ControlSurfaceSpec, Option<AnimationHandle>)>,
    animations: BTreeMap<AnimationHandle, HeadlessAnimation>,

    beacons: BTreeMap<BeaconHandle, (BeaconSpec, bool)>,
    lights: BTreeMap<LightHandle, LightSpec>,
    pub lights_created: usize,
    pub lights_deleted: usize,

    pub meshes: Vec<(String, MeshVisibility)>,
    mesh_names: HashMap<MeshHandle, String>,
    pub missing_meshes: HashSet<String>,
    visual: Option<VisualHandle>,
    textures: HashMap<String, TextureHandle>,
    pub missing_textures: HashSet<String>,
    applied_textures: BTreeMap<(DevMeshHandle, u32), TextureHandle>,

    pub touchdown_points: Vec<TouchdownPoint>,
    pub touchdown_updates: usize,
    pub nosewheel_steering: bool,
    pub wheelbrake_level: f64,

    pub sounds: Vec<SoundSpec>,
    pub played: Vec<Sound>,

    files: HashMap<String, String>,
    pub root_dir: Option<PathBuf>,

    pub mach: f64,
    pub altitude: f64,
    pub groundspeed: f64,

    pub parsed_lines: Vec<String>,
    pub default_state: Vec<String>,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self {
            default_state: vec!["STATUS Landed Earth".to_string()],
            ..Default::default()
        }
    }

    /// Resolves root-relative files against `root` when they were not registered.
    pub fn with_root_dir(mut self, root: impl Into<PathBuf>) -> Self {
        self.root_dir = Some(root.into());
        self
    }

    /// Registers a root-relative text file.
    pub fn with_file(mut self, path: &str, contents: &str) -> Self {
        self.add_file(path, contents);
        self
    }

    pub fn add_file(&mut self, path: &str, contents: &str) {
        self.files.insert(normalize(path), contents.to_string());
    }

    fn next(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Creates a new visual, replacing any previous one.
    pub fn create_visual(&mut self) -> VisualHandle {
        let visual = VisualHandle(self.next());
        self.visual = Some(visual);
        visual
    }

    /// Drops the current visual together with every texture applied to it.
    pub fn destroy_visual(&mut self) -> Option<VisualHandle> {
        self.applied_textures.clear();
        self.visual.take()
    }

    pub fn visual(&self) -> Option<VisualHandle> {
        self.visual
    }

    pub fn group(&self, group: ThrusterGroupHandle) -> Option<&HeadlessThrusterGroup> {
        self.groups.get(&group)
    }

    /// Live groups of one kind.
    pub fn groups_of_kind(&self, kind: ThrusterGroupKind) -> Vec<ThrusterGroupHandle> {
        self.groups
            .iter()
            .filter(|(_, g)| g.kind == kind)
            .map(|(h, _)| *h)
            .collect()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn animation(&self, animation: AnimationHandle) -> Option<&HeadlessAnimation> {
        self.animations.get(&animation)
    }

    pub fn animation_count(&self) -> usize {
        self.animations.len()
    }

    pub fn beacon_count(&self) -> usize {
        self.beacons.len()
    }

    pub fn active_beacons(&self) -> usize {
        self.beacons.values().filter(|(_, active)| *active).count()
    }

    pub fn live_lights(&self) -> usize {
        self.lights.len()
    }

    pub fn stream_count(&self) -> usize {
        self.streams.len()
    }

    pub fn exhaust_stream_count(&self) -> usize {
        self.streams
            .values()
            .filter(|s| s.exhaust_of.is_some())
            .count()
    }

    /// Levels of the free (non-exhaust) particle streams.
    pub fn stream_levels(&self) -> Vec<f64> {
        self.streams
            .values()
            .filter(|s| s.exhaust_of.is_none())
            .map(|s| s.level)
            .collect()
    }

    /// Path of the texture currently applied to `material` of the exterior mesh.
    pub fn mesh_texture(&self, material: u32) -> Option<&str> {
        let texture = self.applied_textures.get(&(DevMeshHandle(0), material))?;
        self.textures
            .iter()
            .find(|(_, handle)| *handle == texture)
            .map(|(path, _)| path.as_str())
    }
}

fn normalize(path: &str) -> String {
    path.replace('\\', "/")
}

impl VesselHost for HeadlessHost {
    fn set_size(&mut self, size: f64) {
        self.size = size;
    }

    fn set_empty_mass(&mut self, mass: f64) {
        self.empty_mass = mass;
    }

    fn set_cross_sections(&mut self, cross_sections: Vector3<f64>) {
        self.cross_sections = cross_sections;
    }

    fn set_pmi(&mut self, pmi: Vector3<f64>) {
        self.pmi = pmi;
    }

    fn set_max_wheelbrake_force(&mut self, force: f64) {
        self.max_wheelbrake_force = force;
    }

    fn set_rot_drag(&mut self, drag: Vector3<f64>) {
        self.rot_drag = drag;
    }

    fn create_propellant_resource(&mut self, mass: f64) -> PropellantHandle {
        self.propellants.push(mass);
        PropellantHandle(self.propellants.len() as u64 - 1)
    }

    fn create_thruster(&mut self, spec: &ThrusterSpec) -> ThrusterHandle {
        let handle = ThrusterHandle(self.next());
        self.thrusters.insert(handle, spec.clone());
        handle
    }

    fn create_thruster_group(
        &mut self,
        thrusters: &[ThrusterHandle],
        kind: ThrusterGroupKind,
    ) -> ThrusterGroupHandle {
        let handle = ThrusterGroupHandle(self.next());
        self.groups.insert(
            handle,
            HeadlessThrusterGroup {
                kind,
                thrusters: thrusters.to_vec(),
                level: 0.0,
            },
        );
        handle
    }

    fn delete_thruster_group(&mut self, group: ThrusterGroupHandle) {
        if self.groups.remove(&group).is_some() {
            self.deleted_groups += 1;
        } else {
            warn!("Deleting unknown thruster group {:?}", group);
        }
    }

    fn thruster_group_level(&self, group: ThrusterGroupHandle) -> f64 {
        self.groups.get(&group).map_or(0.0, |g| g.level)
    }

    fn set_thruster_group_level(&mut self, group: ThrusterGroupHandle, level: f64) {
        if let Some(g) = self.groups.get_mut(&group) {
            g.level = level.clamp(0.0, 1.0);
        }
    }

    fn add_particle_stream(
        &mut self,
        spec: &ParticleStreamSpec,
        _position: Vector3<f64>,
        _direction: Vector3<f64>,
    ) -> ParticleStreamHandle {
        let handle = ParticleStreamHandle(self.next());
        self.streams.insert(
            handle,
            HeadlessStream {
                spec: *spec,
                level: 0.0,
                exhaust_of: None,
            },
        );
        handle
    }

    fn set_particle_stream_level(&mut self, stream: ParticleStreamHandle, level: f64) {
        if let Some(s) = self.streams.get_mut(&stream) {
            s.level = level;
        }
    }

    fn add_exhaust_stream(
        &mut self,
        thruster: ThrusterHandle,
        _position: Vector3<f64>,
        spec: &ParticleStreamSpec,
    ) -> ParticleStreamHandle {
        let handle = ParticleStreamHandle(self.next());
        self.streams.insert(
            handle,
            HeadlessStream {
                spec: *spec,
                level: 0.0,
                exhaust_of: Some(thruster),
            },
        );
        handle
    }

    fn create_airfoil(&mut self, spec: &AirfoilSpec) -> AirfoilHandle {
        self.airfoils.push(spec.clone());
        AirfoilHandle(self.next())
    }

    fn create_control_surface(
        &mut self,
        spec: &ControlSurfaceSpec,
        animation: Option<AnimationHandle>,
    ) -> ControlSurfaceHandle {
        self.control_surfaces.push((spec.clone(), animation));
        ControlSurfaceHandle(self.next())
    }

    fn create_animation(&mut self, initial_state: f64) -> AnimationHandle {
        let handle = AnimationHandle(self.next());
        self.animations.insert(
            handle,
            HeadlessAnimation {
                state: initial_state,
                components: Vec::new(),
            },
        );
        handle
    }

    fn add_animation_component(
        &mut self,
        animation: AnimationHandle,
        start: f64,
        end: f64,
        rotation: &RotationSpec,
    ) {
        if let Some(a) = self.animations.get_mut(&animation) {
            a.components.push(AnimationComponentSpec {
                start,
                end,
                rotation: rotation.clone(),
            });
        }
    }

    fn set_animation(&mut self, animation: AnimationHandle, state: f64) {
        if let Some(a) = self.animations.get_mut(&animation) {
            a.state = state;
        }
    }

    fn add_beacon(&mut self, spec: &BeaconSpec) -> BeaconHandle {
        let handle = BeaconHandle(self.next());
        self.beacons.insert(handle, (spec.clone(), false));
        handle
    }

    fn set_beacon_active(&mut self, beacon: BeaconHandle, active: bool) {
        if let Some((_, flag)) = self.beacons.get_mut(&beacon) {
            *flag = active;
        }
    }

    fn add_light(&mut self, spec: &LightSpec) -> LightHandle {
        let handle = LightHandle(self.next());
        self.lights.insert(handle, spec.clone());
        self.lights_created += 1;
        handle
    }

    fn delete_light(&mut self, light: LightHandle) {
        if self.lights.remove(&light).is_some() {
            self.lights_deleted += 1;
        }
    }

    fn load_mesh(&mut self, name: &str) -> Option<MeshHandle> {
        if self.missing_meshes.contains(name) {
            return None;
        }
        let handle = MeshHandle(self.next());
        self.mesh_names.insert(handle, name.to_string());
        Some(handle)
    }

    fn add_mesh(&mut self, mesh: MeshHandle, visibility: MeshVisibility) -> u32 {
        let name = self.mesh_names.get(&mesh).cloned().unwrap_or_default();
        self.meshes.push((name, visibility));
        self.meshes.len() as u32 - 1
    }

    fn device_mesh(&mut self, visual: VisualHandle, index: u32) -> Option<DevMeshHandle> {
        if self.visual == Some(visual) && (index as usize) < self.meshes.len() {
            Some(DevMeshHandle(index as u64))
        } else {
            None
        }
    }

    fn load_texture(&mut self, path: &str) -> Option<TextureHandle> {
        let path = normalize(path);
        if self.missing_textures.contains(&path) {
            return None;
        }
        if let Some(handle) = self.textures.get(&path) {
            return Some(*handle);
        }
        let handle = TextureHandle(self.next());
        self.textures.insert(path, handle);
        Some(handle)
    }

    fn set_texture(&mut self, mesh: DevMeshHandle, material: u32, texture: TextureHandle) -> bool {
        self.applied_textures.insert((mesh, material), texture);
        true
    }

    fn set_touchdown_points(&mut self, points: &[TouchdownPoint]) {
        self.touchdown_points = points.to_vec();
        self.touchdown_updates += 1;
    }

    fn set_nosewheel_steering(&mut self, enabled: bool) {
        self.nosewheel_steering = enabled;
    }

    fn set_wheelbrake_level(&mut self, level: f64, _permanent: bool) {
        self.wheelbrake_level = level;
    }

    fn load_sound(&mut self, spec: &SoundSpec) -> bool {
        self.sounds.push(spec.clone());
        true
    }

    fn play_sound(&mut self, sound: Sound) {
        self.played.push(sound);
    }

    fn read_root_file(&self, path: &str) -> io::Result<String> {
        let key = normalize(path);
        if let Some(contents) = self.files.get(&key) {
            return Ok(contents.clone());
        }
        match &self.root_dir {
            Some(root) => std::fs::read_to_string(root.join(key)),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{path} not found"),
            )),
        }
    }

    fn mach(&self) -> f64 {
        self.mach
    }

    fn altitude(&self) -> f64 {
        self.altitude
    }

    fn groundspeed(&self) -> f64 {
        self.groundspeed
    }

    fn parse_scenario_line(&mut self, line: &str) {
        self.parsed_lines.push(line.to_string());
    }

    fn save_default_state(&self, writer: &mut ScenarioWriter) {
        for line in &self.default_state {
            writer.write_line(line);
        }
    }
}
