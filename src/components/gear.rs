use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Landing gear status. The integer values are what scenarios persist.
///
/// `Deploying` lowers the deployment fraction toward 0 and settles `Down`; `Stowing`
/// raises it toward 1 and settles `Up`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GearStatus {
    Down = 0,
    Up = 1,
    Deploying = 2,
    Stowing = 3,
}

impl GearStatus {
    pub fn from_index(index: i64) -> Option<Self> {
        match index {
            0 => Some(Self::Down),
            1 => Some(Self::Up),
            2 => Some(Self::Deploying),
            3 => Some(Self::Stowing),
            _ => None,
        }
    }

    pub fn index(self) -> i64 {
        self as i64
    }

    pub fn is_moving(self) -> bool {
        matches!(self, Self::Deploying | Self::Stowing)
    }
}

/// Which touchdown set the host should be using.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchdownSet {
    GearDown,
    GearUp,
}

/// Gear position state machine.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct LandingGear {
    pub status: GearStatus,
    /// Deployment fraction in [0, 1]; 0 when `Down`, 1 when `Up`.
    pub fraction: f64,
    /// Fraction of full travel per second.
    pub operating_speed: f64,
}

impl LandingGear {
    pub fn new(operating_speed: f64) -> Self {
        Self {
            status: GearStatus::Down,
            fraction: 0.0,
            operating_speed,
        }
    }

    /// Reverses the commanded direction and returns the new status.
    pub fn toggle(&mut self) -> GearStatus {
        self.status = match self.status {
            GearStatus::Down | GearStatus::Deploying => GearStatus::Stowing,
            GearStatus::Up | GearStatus::Stowing => GearStatus::Deploying,
        };
        self.status
    }

    /// Advances the gear by `dt` seconds. Returns whether the fraction changed.
    pub fn step(&mut self, dt: f64) -> bool {
        let da = self.operating_speed * dt.max(0.0);
        match self.status {
            GearStatus::Deploying => {
                self.fraction -= da;
                if self.fraction <= 0.0 {
                    self.fraction = 0.0;
                    self.status = GearStatus::Down;
                }
                true
            }
            GearStatus::Stowing => {
                self.fraction += da;
                if self.fraction >= 1.0 {
                    self.fraction = 1.0;
                    self.status = GearStatus::Up;
                }
                true
            }
            GearStatus::Down | GearStatus::Up => false,
        }
    }

    /// Restores a persisted state; the fraction is clamped into [0, 1].
    pub fn restore(&mut self, status: GearStatus, fraction: f64) {
        self.status = status;
        self.fraction = fraction.clamp(0.0, 1.0);
    }

    /// Contact set matching the direction of travel.
    pub fn touchdown_set(&self) -> TouchdownSet {
        match self.status {
            GearStatus::Down | GearStatus::Deploying => TouchdownSet::GearDown,
            GearStatus::Up | GearStatus::Stowing => TouchdownSet::GearUp,
        }
    }

    /// Contact set for a vessel at rest: fully retracted gear means belly contact.
    pub fn resting_touchdown_set(&self) -> TouchdownSet {
        if self.fraction == 1.0 {
            TouchdownSet::GearUp
        } else {
            TouchdownSet::GearDown
        }
    }
}
