use std::path::PathBuf;

use bevy::prelude::*;

use crate::components::{FlightConditions, VesselConfig};
use crate::host::HeadlessHost;
use crate::systems::{
    clear_buffered_keys_system, flight_conditions_system, vessel_keyboard_system,
    vessel_post_step_system, vessel_pre_step_system, SimulationClock,
};
use crate::utils::constants::VESSEL_TIMESTEP;
use crate::vessel::{Boeing747, VesselCallbacks};

/// Vessel update stages. Input runs in `Update`, the step stages in `FixedUpdate`.
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum VesselStepSet {
    Input,
    Conditions,
    PreStep,
    PostStep,
}

/// One vessel to create at startup.
#[derive(Debug, Clone)]
pub struct VesselSpawn {
    pub config: VesselConfig,
    /// Scenario block loaded between class caps and post creation.
    pub scenario: Option<String>,
    pub conditions: FlightConditions,
    /// Directory the host reads skin lists from.
    pub root_dir: Option<PathBuf>,
}

impl VesselSpawn {
    pub fn new(config: VesselConfig) -> Self {
        Self {
            config,
            scenario: None,
            conditions: FlightConditions::parked(),
            root_dir: None,
        }
    }

    pub fn with_scenario(mut self, block: impl Into<String>) -> Self {
        self.scenario = Some(block.into());
        self
    }

    pub fn with_conditions(mut self, conditions: FlightConditions) -> Self {
        self.conditions = conditions;
        self
    }

    pub fn with_root_dir(mut self, root: impl Into<PathBuf>) -> Self {
        self.root_dir = Some(root.into());
        self
    }
}

/// Creates vessels at startup and drives their callbacks.
pub struct VesselPlugin {
    vessels: Vec<VesselSpawn>,
    timestep: f64,
}

impl Default for VesselPlugin {
    fn default() -> Self {
        Self {
            vessels: Vec::new(),
            timestep: VESSEL_TIMESTEP,
        }
    }
}

impl VesselPlugin {
    pub fn new(vessels: Vec<VesselSpawn>) -> Self {
        Self {
            vessels,
            ..Default::default()
        }
    }

    pub fn with_timestep(mut self, timestep: f64) -> Self {
        self.timestep = timestep;
        self
    }

    /// Runs the creation sequence of one vessel on a fresh host and spawns the entity.
    fn spawn_vessel(commands: &mut Commands, spawn: &VesselSpawn) {
        let mut host = HeadlessHost::new();
        if let Some(root) = &spawn.root_dir {
            host = host.with_root_dir(root.clone());
        }
        host.mach = spawn.conditions.mach;
        host.altitude = spawn.conditions.altitude;
        host.groundspeed = spawn.conditions.groundspeed;

        let mut vessel = Boeing747::new(spawn.config.clone());
        vessel.set_class_caps(&mut host);
        if let Some(block) = &spawn.scenario {
            vessel.load_state(&mut host, block);
        }
        vessel.post_creation(&mut host);
        let visual = host.create_visual();
        vessel.visual_created(&mut host, visual, 1);

        info!("Spawned vessel {}", spawn.config.name);
        commands.spawn((
            vessel,
            host,
            spawn.conditions,
            Name::new(spawn.config.name.clone()),
        ));
    }

    fn setup_vessels(mut commands: Commands, vessels: &[VesselSpawn]) {
        for spawn in vessels {
            Self::spawn_vessel(&mut commands, spawn);
        }
    }
}

impl Plugin for VesselPlugin {
    fn build(&self, app: &mut App) {
        let vessels = self.vessels.clone();

        if !app.world().contains_resource::<ButtonInput<KeyCode>>() {
            app.init_resource::<ButtonInput<KeyCode>>()
                .add_systems(Last, clear_buffered_keys_system);
        }

        app.init_resource::<SimulationClock>()
            .add_systems(Startup, move |commands: Commands| {
                Self::setup_vessels(commands, &vessels)
            })
            .configure_sets(
                FixedUpdate,
                (
                    VesselStepSet::Conditions,
                    VesselStepSet::PreStep,
                    VesselStepSet::PostStep,
                )
                    .chain(),
            )
            .add_systems(Update, vessel_keyboard_system.in_set(VesselStepSet::Input))
            .add_systems(
                FixedUpdate,
                (
                    flight_conditions_system.in_set(VesselStepSet::Conditions),
                    vessel_pre_step_system.in_set(VesselStepSet::PreStep),
                    vessel_post_step_system.in_set(VesselStepSet::PostStep),
                ),
            );

        app.insert_resource(Time::<Fixed>::from_seconds(self.timestep));
    }
}
