use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::aircraft::config::ConfigError;

/// RGBA colour, components in [0, 1] except where the host accepts overdrive.
pub type Colour4 = [f64; 4];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BeaconShape {
    Compact,
    Diffuse,
    Star,
}

/// A flashing beacon. Beacons are registered once and only their active flag changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeaconSpec {
    pub shape: BeaconShape,
    pub position: Vector3<f64>,
    pub colour: [f64; 3],
    pub size: f64,
    pub falloff: f64,
    /// Flash period (s).
    pub period: f64,
    /// Flash duration (s).
    pub duration: f64,
    /// Phase offset (s).
    pub tofs: f64,
}

impl BeaconSpec {
    pub fn star(position: Vector3<f64>, colour: [f64; 3]) -> Self {
        Self {
            shape: BeaconShape::Star,
            position,
            colour,
            size: 1.0,
            falloff: 0.4,
            period: 1.0,
            duration: 0.1,
            tofs: 0.2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LightVisibility {
    External,
    Cockpit,
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LightKind {
    Spot {
        direction: Vector3<f64>,
        /// Inner cone angle (rad).
        umbra: f64,
        /// Outer cone angle (rad).
        penumbra: f64,
    },
    Point,
}

/// A light emitter created when the lights are switched on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightSpec {
    pub kind: LightKind,
    pub position: Vector3<f64>,
    /// Range (m).
    pub range: f64,
    /// Constant, linear and quadratic attenuation.
    pub attenuation: [f64; 3],
    pub diffuse: Colour4,
    pub specular: Colour4,
    pub ambient: Colour4,
    pub visibility: LightVisibility,
}

const LANDING_DIFFUSE: Colour4 = [0.9, 0.8, 1.0, 0.0];
const LANDING_SPECULAR: Colour4 = [1.9, 0.8, 1.0, 0.0];
const COCKPIT_COLOUR: Colour4 = [1.0, 0.508, 0.1, 0.0];
const CABIN_COLOUR: Colour4 = [1.0, 1.0, 1.0, 0.0];

impl LightSpec {
    pub fn landing(position: Vector3<f64>) -> Self {
        Self {
            kind: LightKind::Spot {
                direction: Vector3::new(0.0, 0.0, 1.0),
                umbra: 25f64.to_radians(),
                penumbra: 45f64.to_radians(),
            },
            position,
            range: 100_000.0,
            attenuation: [1e-3, 0.0, 2e-3],
            diffuse: LANDING_DIFFUSE,
            specular: LANDING_SPECULAR,
            ambient: [0.0; 4],
            visibility: LightVisibility::External,
        }
    }

    pub fn cockpit(position: Vector3<f64>) -> Self {
        Self {
            kind: LightKind::Point,
            position,
            range: 1.0,
            attenuation: [0.15, 0.0, 0.15],
            diffuse: COCKPIT_COLOUR,
            specular: COCKPIT_COLOUR,
            ambient: COCKPIT_COLOUR,
            visibility: LightVisibility::Cockpit,
        }
    }

    pub fn cabin(position: Vector3<f64>) -> Self {
        Self {
            kind: LightKind::Point,
            position,
            range: 1.0,
            attenuation: [0.5, 0.0, 0.5],
            diffuse: CABIN_COLOUR,
            specular: CABIN_COLOUR,
            ambient: CABIN_COLOUR,
            visibility: LightVisibility::Cockpit,
        }
    }
}

/// Beacons and switchable light emitters of one variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightingConfig {
    pub beacons: Vec<BeaconSpec>,
    pub lights: Vec<LightSpec>,
}

const GREEN: [f64; 3] = [0.0, 1.0, 0.0];
const RED: [f64; 3] = [1.0, 0.0, 0.0];
const WHITE: [f64; 3] = [1.0, 1.0, 1.0];

impl LightingConfig {
    /// Two green (right wing, upper deck), two red (left wing, belly) and one white
    /// (APU) beacon.
    fn beacons_747() -> Vec<BeaconSpec> {
        vec![
            BeaconSpec::star(Vector3::new(32.3, 1.2, -12.5), GREEN),
            BeaconSpec::star(Vector3::new(0.0, 6.6, 18.0), GREEN),
            BeaconSpec::star(Vector3::new(-32.3, 1.2, -12.5), RED),
            BeaconSpec::star(Vector3::new(0.0, -4.0, 2.0), RED),
            BeaconSpec::star(Vector3::new(0.0, 3.2, -36.5), WHITE),
        ]
    }

    fn landing_lights() -> Vec<LightSpec> {
        [
            Vector3::new(-4.2, -2.2, 14.0),
            Vector3::new(4.2, -2.2, 14.0),
            Vector3::new(-9.5, -1.6, 1.5),
            Vector3::new(9.5, -1.6, 1.5),
        ]
        .into_iter()
        .map(LightSpec::landing)
        .collect()
    }

    fn cockpit_lights() -> Vec<LightSpec> {
        vec![
            LightSpec::cockpit(Vector3::new(-0.6, 4.6, 29.6)),
            LightSpec::cockpit(Vector3::new(0.6, 4.6, 29.6)),
        ]
    }

    /// Twelve lamps in two rows along the first-class cabin.
    fn cabin_lights() -> Vec<LightSpec> {
        (0..12)
            .map(|i| {
                let side = if i % 2 == 0 { -1.2 } else { 1.2 };
                let row = (i / 2) as f64;
                LightSpec::cabin(Vector3::new(side, 2.4, 26.0 - 1.5 * row))
            })
            .collect()
    }

    pub fn b747_sp() -> Self {
        Self {
            beacons: Self::beacons_747(),
            lights: Self::landing_lights(),
        }
    }

    /// Landing, cockpit and first-class cabin lights.
    pub fn b747_full() -> Self {
        let mut lights = Self::landing_lights();
        lights.extend(Self::cockpit_lights());
        lights.extend(Self::cabin_lights());
        Self {
            beacons: Self::beacons_747(),
            lights,
        }
    }

    pub fn b747_supertanker() -> Self {
        let mut lights = Self::landing_lights();
        lights.extend(Self::cockpit_lights());
        Self {
            beacons: Self::beacons_747(),
            lights,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for light in &self.lights {
            if light.range <= 0.0 {
                return Err(ConfigError::ValidationError(
                    "light range must be positive".to_string(),
                ));
            }
        }
        Ok(())
    }
}
