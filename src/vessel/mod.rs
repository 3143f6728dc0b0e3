//! The 747 vessel: one implementation of the host callbacks, driven by a
//! [`VesselConfig`].

pub mod caps;
pub mod input;
pub mod scenario;

use bevy::prelude::*;

use crate::components::{
    EngineState, GroupSync, LandingGear, LightingState, LiveryState, Sound,
    TouchdownSet, VariantType, VesselConfig,
};
use crate::host::{
    AirfoilHandle, ControlSurfaceHandle, DevMeshHandle, MeshHandle, ParticleStreamHandle,
    PropellantHandle, ScenarioWriter, ThrusterGroupHandle, ThrusterGroupKind, ThrusterHandle,
    VesselHost, VisualHandle,
};
use crate::utils::errors::VesselError;

pub use caps::AnimationHandles;
pub use input::{Key, KeyCommand, KeyModifiers};
pub use scenario::{ScenarioError, ScenarioKeys, ScenarioLine};

/// Lifecycle callbacks the host invokes on a vessel.
pub trait VesselCallbacks {
    fn set_class_caps(&mut self, host: &mut dyn VesselHost);
    fn post_creation(&mut self, host: &mut dyn VesselHost);
    fn pre_step(&mut self, host: &mut dyn VesselHost, simt: f64, simdt: f64, mjd: f64);
    fn post_step(&mut self, host: &mut dyn VesselHost, simt: f64, simdt: f64, mjd: f64);
    /// Returns whether the key was consumed.
    fn consume_buffered_key(
        &mut self,
        host: &mut dyn VesselHost,
        key: Key,
        down: bool,
        modifiers: KeyModifiers,
    ) -> bool;
    fn load_state(&mut self, host: &mut dyn VesselHost, block: &str);
    fn save_state(&self, host: &dyn VesselHost, writer: &mut ScenarioWriter);
    fn visual_created(&mut self, host: &mut dyn VesselHost, visual: VisualHandle, refcount: i32);
    fn visual_destroyed(&mut self, host: &mut dyn VesselHost, visual: VisualHandle, refcount: i32);
}

/// Host resources registered at class-caps time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VesselHandles {
    pub fuel: Option<PropellantHandle>,
    pub main_thrusters: Vec<ThrusterHandle>,
    pub retro_thrusters: Vec<ThrusterHandle>,
    pub water: Option<PropellantHandle>,
    pub water_thrusters: Vec<ThrusterHandle>,
    pub water_group: Option<ThrusterGroupHandle>,
    pub water_exhaust: Vec<ParticleStreamHandle>,
    pub contrails: Vec<ParticleStreamHandle>,
    pub airfoils: Vec<AirfoilHandle>,
    pub control_surfaces: Vec<ControlSurfaceHandle>,
    pub animations: AnimationHandles,
    pub meshes: Vec<(MeshHandle, u32)>,
    /// Index of the exterior mesh, the one liveries are painted on.
    pub exterior_mesh: Option<u32>,
}

/// A Boeing 747 of any variant.
#[derive(Component, Debug, Clone)]
pub struct Boeing747 {
    config: VesselConfig,
    handles: VesselHandles,
    gear: LandingGear,
    engines: EngineState,
    livery: Option<LiveryState>,
    lighting: LightingState,
    parking_brake: bool,
    water_valve_open: bool,
    applied_touchdown: Option<TouchdownSet>,
    visual: Option<VisualHandle>,
    exterior_devmesh: Option<DevMeshHandle>,
}

/// Resolves a host class name to a vessel with the built-in configuration.
pub fn create_vessel(class_name: &str) -> Result<Boeing747, VesselError> {
    let variant = VariantType::from_class_name(class_name)
        .ok_or_else(|| VesselError::UnknownClass(class_name.to_string()))?;
    let config = VesselConfig::from_programmed(variant);
    config.validate()?;
    info!("Creating vessel of class {}", config.name);
    Ok(Boeing747::new(config))
}

impl Boeing747 {
    pub fn new(config: VesselConfig) -> Self {
        let livery = config
            .livery
            .as_ref()
            .map(|livery| LiveryState::new(livery.surfaces.len()));
        Self {
            gear: LandingGear::new(config.gear.operating_speed),
            config,
            handles: VesselHandles::default(),
            engines: EngineState::default(),
            livery,
            lighting: LightingState::default(),
            parking_brake: false,
            water_valve_open: false,
            applied_touchdown: None,
            visual: None,
            exterior_devmesh: None,
        }
    }

    pub fn config(&self) -> &VesselConfig {
        &self.config
    }

    pub fn handles(&self) -> &VesselHandles {
        &self.handles
    }

    pub fn gear(&self) -> &LandingGear {
        &self.gear
    }

    pub fn engines(&self) -> &EngineState {
        &self.engines
    }

    pub fn livery(&self) -> Option<&LiveryState> {
        self.livery.as_ref()
    }

    pub fn lighting(&self) -> &LightingState {
        &self.lighting
    }

    pub fn parking_brake(&self) -> bool {
        self.parking_brake
    }

    pub fn water_valve_open(&self) -> bool {
        self.water_valve_open
    }

    pub fn visual(&self) -> Option<VisualHandle> {
        self.visual
    }

    pub fn touchdown_set(&self) -> Option<TouchdownSet> {
        self.applied_touchdown
    }

    fn scenario_keys(&self) -> ScenarioKeys {
        ScenarioKeys {
            skin: self.config.livery.as_ref().is_some_and(|l| l.persist),
            engines: self.config.features.engine_control,
        }
    }

    fn has_sound(&self, sound: Sound) -> bool {
        self.config.sounds.iter().any(|s| s.sound == sound)
    }

    /// Hands the contact set to the host if it differs from the one last applied.
    /// Nosewheel steering follows the set.
    fn apply_touchdown_set(&mut self, host: &mut dyn VesselHost, set: TouchdownSet) {
        if self.applied_touchdown == Some(set) {
            return;
        }
        let points = match set {
            TouchdownSet::GearDown => &self.config.gear.down_points,
            TouchdownSet::GearUp => &self.config.gear.up_points,
        };
        host.set_touchdown_points(points);
        host.set_nosewheel_steering(set == TouchdownSet::GearDown);
        self.applied_touchdown = Some(set);
        debug!("{}: touchdown set {:?}", self.config.name, set);
    }

    fn animate_gear(&self, host: &mut dyn VesselHost) {
        if let Some(animation) = self.handles.animations.gear {
            host.set_animation(animation, self.gear.fraction);
        }
    }

    fn apply_livery(&self, host: &mut dyn VesselHost) -> usize {
        match (&self.livery, &self.config.livery, self.exterior_devmesh) {
            (Some(state), Some(config), Some(mesh)) => state.apply(host, config, mesh),
            _ => 0,
        }
    }

    fn toggle_gear(&mut self, host: &mut dyn VesselHost) {
        let status = self.gear.toggle();
        if self.has_sound(Sound::GearMovement) {
            host.play_sound(Sound::GearMovement);
        }
        info!("{}: gear {:?}", self.config.name, status);
    }

    fn toggle_parking_brake(&mut self, host: &mut dyn VesselHost) {
        self.parking_brake = !self.parking_brake;
        let level = if self.parking_brake { 1.0 } else { 0.0 };
        host.set_wheelbrake_level(level, true);
        info!("{}: parking brake {}", self.config.name, on_off(self.parking_brake));
    }

    fn toggle_water_discharge(&mut self, host: &mut dyn VesselHost) {
        let Some(group) = self.handles.water_group else {
            return;
        };
        self.water_valve_open = !self.water_valve_open;
        let level = if self.water_valve_open { 1.0 } else { 0.0 };
        host.set_thruster_group_level(group, level);
        info!("{}: water valve {}", self.config.name, on_off(self.water_valve_open));
    }

    fn start_engines(&mut self, host: &mut dyn VesselHost) {
        if self.engines.start() {
            info!("{}: engines starting", self.config.name);
        }
        host.play_sound(Sound::EnginesStart);
    }

    fn stop_engines(&mut self, host: &mut dyn VesselHost) {
        if self.engines.stop() {
            info!("{}: engines shutting down", self.config.name);
        }
        host.play_sound(Sound::EnginesShutdown);
    }

    /// Loads the next skin of the list and paints it if the visual exists.
    fn next_skin(&mut self, host: &mut dyn VesselHost) {
        let (Some(state), Some(config)) = (self.livery.as_mut(), self.config.livery.as_ref())
        else {
            return;
        };
        let index = state.wrap_index(config.skin_count);
        match LiveryState::read_skin_name(&*host, config, index) {
            Ok(name) => {
                state.load_skin(host, config, &name);
                info!("{}: skin {} ({})", self.config.name, index + 1, name);
            }
            Err(err) => warn!("{}: {}", self.config.name, err),
        }
        state.index += 1;
        self.apply_livery(host);
    }

    fn sync_engine_groups(&mut self, host: &mut dyn VesselHost) {
        match self.engines.group_sync() {
            GroupSync::Create => {
                self.engines.main_group = Some(
                    host.create_thruster_group(&self.handles.main_thrusters, ThrusterGroupKind::Main),
                );
                self.engines.retro_group = Some(host.create_thruster_group(
                    &self.handles.retro_thrusters,
                    ThrusterGroupKind::Retro,
                ));
                debug!("{}: thruster groups created", self.config.name);
            }
            GroupSync::Delete => {
                let (main, retro) = self.engines.take_groups();
                for group in main.into_iter().chain(retro) {
                    host.delete_thruster_group(group);
                }
                debug!("{}: thruster groups deleted", self.config.name);
            }
            GroupSync::Keep => {}
        }
    }

    fn load_line(&mut self, host: &mut dyn VesselHost, line: &str) {
        match scenario::parse_line(line, self.scenario_keys()) {
            Ok(ScenarioLine::Gear { status, fraction }) => {
                self.gear.restore(status, fraction);
                self.animate_gear(host);
            }
            Ok(ScenarioLine::Engines(running)) => self.engines.running = running,
            Ok(ScenarioLine::Skin(name)) => {
                if let (Some(state), Some(config)) =
                    (self.livery.as_mut(), self.config.livery.as_ref())
                {
                    state.load_skin(host, config, name);
                }
                self.apply_livery(host);
            }
            Ok(ScenarioLine::Other(line)) => host.parse_scenario_line(line),
            Err(err) => warn!("{}: ignoring scenario line: {}", self.config.name, err),
        }
    }
}

fn on_off(on: bool) -> &'static str {
    if on {
        "on"
    } else {
        "off"
    }
}

impl VesselCallbacks for Boeing747 {
    fn set_class_caps(&mut self, host: &mut dyn VesselHost) {
        self.register_class_caps(host);
    }

    fn post_creation(&mut self, host: &mut dyn VesselHost) {
        let set = self.gear.resting_touchdown_set();
        self.apply_touchdown_set(host, set);
        self.animate_gear(host);

        for spec in &self.config.sounds {
            if !host.load_sound(spec) {
                warn!("{}: sound {} could not be loaded", self.config.name, spec.file);
            }
        }
    }

    fn pre_step(&mut self, host: &mut dyn VesselHost, _simt: f64, simdt: f64, _mjd: f64) {
        let phase = self
            .engines
            .advance_fans(simdt, self.config.propulsion.fan_rotation_speed);
        if let Some(animation) = self.handles.animations.engines {
            host.set_animation(animation, phase);
        }
    }

    fn post_step(&mut self, host: &mut dyn VesselHost, _simt: f64, simdt: f64, _mjd: f64) {
        if self.gear.status.is_moving() {
            self.gear.step(simdt);
            self.animate_gear(host);
            let set = self.gear.touchdown_set();
            self.apply_touchdown_set(host, set);
            if !self.gear.status.is_moving() {
                info!("{}: gear {:?}", self.config.name, self.gear.status);
            }
        }

        let level =
            self.engines
                .update_contrail(&self.config.propulsion.contrail, host.mach(), host.altitude());
        for stream in &self.handles.contrails {
            host.set_particle_stream_level(*stream, level);
        }

        if self.config.features.engine_control {
            self.sync_engine_groups(host);
        }
        self.engines.power = self
            .engines
            .main_group
            .map(|group| host.thruster_group_level(group))
            .unwrap_or(0.0);
    }

    fn consume_buffered_key(
        &mut self,
        host: &mut dyn VesselHost,
        key: Key,
        down: bool,
        modifiers: KeyModifiers,
    ) -> bool {
        if !down {
            return false;
        }
        let Some(command) = KeyCommand::decode(key, modifiers) else {
            return false;
        };
        let features = self.config.features;
        match command {
            KeyCommand::ToggleGear => self.toggle_gear(host),
            KeyCommand::ToggleParkingBrake if features.parking_brake => {
                self.toggle_parking_brake(host)
            }
            KeyCommand::ToggleWaterDischarge if self.handles.water_group.is_some() => {
                self.toggle_water_discharge(host)
            }
            KeyCommand::ToggleLights => match &self.config.lighting {
                Some(config) => {
                    let on = self.lighting.toggle_lights(host, config);
                    info!("{}: lights {}", self.config.name, on_off(on));
                }
                None => return false,
            },
            KeyCommand::ToggleBeacons if self.config.lighting.is_some() => {
                let on = self.lighting.toggle_beacons(host);
                info!("{}: beacons {}", self.config.name, on_off(on));
            }
            KeyCommand::NextSkin if self.livery.is_some() => self.next_skin(host),
            KeyCommand::StartEngines if features.engine_control => self.start_engines(host),
            KeyCommand::StopEngines if features.engine_control => self.stop_engines(host),
            _ => return false,
        }
        true
    }

    fn load_state(&mut self, host: &mut dyn VesselHost, block: &str) {
        for line in block.lines().filter(|l| !l.trim().is_empty()) {
            self.load_line(host, line);
        }
    }

    fn save_state(&self, host: &dyn VesselHost, writer: &mut ScenarioWriter) {
        host.save_default_state(writer);
        writer.write_string(
            scenario::GEAR_KEY,
            &scenario::format_gear(self.gear.status, self.gear.fraction),
        );
        if self.scenario_keys().skin {
            if let Some(name) = self.livery.as_ref().and_then(|l| l.skin_name.as_deref()) {
                writer.write_string(scenario::SKIN_KEY, name);
            }
        }
        if self.config.features.engine_control {
            writer.write_int(scenario::ENGINES_KEY, i64::from(self.engines.running));
        }
    }

    fn visual_created(&mut self, host: &mut dyn VesselHost, visual: VisualHandle, _refcount: i32) {
        self.visual = Some(visual);
        self.exterior_devmesh = self
            .handles
            .exterior_mesh
            .and_then(|index| host.device_mesh(visual, index));
        let applied = self.apply_livery(host);
        debug!("{}: visual created, {} textures applied", self.config.name, applied);
    }

    fn visual_destroyed(&mut self, _host: &mut dyn VesselHost, visual: VisualHandle, _refcount: i32) {
        if self.visual == Some(visual) {
            self.visual = None;
            self.exterior_devmesh = None;
        }
    }
}
