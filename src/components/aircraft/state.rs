use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Flight condition of a vessel as reported by its host.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FlightConditions {
    /// Free-stream Mach number.
    pub mach: f64,
    /// Altitude above mean radius (m).
    pub altitude: f64,
    /// Ground speed (m/s).
    pub groundspeed: f64,
}

impl FlightConditions {
    pub fn new(mach: f64, altitude: f64, groundspeed: f64) -> Self {
        Self {
            mach,
            altitude,
            groundspeed,
        }
    }

    /// Parked on the ground.
    pub fn parked() -> Self {
        Self::default()
    }

    /// A typical long-haul cruise: Mach 0.85 at 11 km.
    pub fn cruise() -> Self {
        Self::new(0.85, 11_000.0, 250.0)
    }
}
