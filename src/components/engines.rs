use bevy::prelude::*;

use crate::components::ContrailConfig;
use crate::host::ThrusterGroupHandle;

/// Engine on/off state and the thruster groups that exist while the engines run.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct EngineState {
    pub running: bool,
    pub main_group: Option<ThrusterGroupHandle>,
    pub retro_group: Option<ThrusterGroupHandle>,
    /// Main group level as of the last step, 0 while stopped.
    pub power: f64,
    /// Fan animation phase in [0, 1].
    pub fan_phase: f64,
    /// Contrail stream level as of the last step.
    pub contrail_level: f64,
}

/// What a post-step must do to bring the thruster groups in line with `running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupSync {
    Create,
    Delete,
    Keep,
}

impl EngineState {
    /// Marks the engines running. Returns `false` if they already were.
    pub fn start(&mut self) -> bool {
        !std::mem::replace(&mut self.running, true)
    }

    /// Marks the engines stopped. Returns `false` if they already were.
    pub fn stop(&mut self) -> bool {
        std::mem::replace(&mut self.running, false)
    }

    pub fn has_groups(&self) -> bool {
        self.main_group.is_some() || self.retro_group.is_some()
    }

    pub fn group_sync(&self) -> GroupSync {
        match (self.running, self.has_groups()) {
            (true, false) => GroupSync::Create,
            (false, true) => GroupSync::Delete,
            _ => GroupSync::Keep,
        }
    }

    /// Forgets both groups and zeroes the power. The caller deletes them on the host.
    pub fn take_groups(&mut self) -> (Option<ThrusterGroupHandle>, Option<ThrusterGroupHandle>) {
        self.power = 0.0;
        (self.main_group.take(), self.retro_group.take())
    }

    /// Advances the fan phase; it wraps to 0 on the step after it passes 1.
    pub fn advance_fans(&mut self, dt: f64, rotation_speed: f64) -> f64 {
        let da = dt * rotation_speed * 0.1 + self.power * 0.1;
        if self.fan_phase < 1.0 {
            self.fan_phase += da;
        } else {
            self.fan_phase = 0.0;
        }
        self.fan_phase
    }

    pub fn update_contrail(&mut self, contrail: &ContrailConfig, mach: f64, altitude: f64) -> f64 {
        self.contrail_level = if contrail.is_active(mach, altitude) {
            1.0
        } else {
            0.0
        };
        self.contrail_level
    }
}
