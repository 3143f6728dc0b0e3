use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::aircraft::config::ConfigError;
use crate::utils::{MAX_WHEELBRAKE_FORCE, ROT_DRAG};

/// Physical parameters handed to the host at class-caps time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MassModel {
    /// Mean radius of the vessel (m).
    pub size: f64,
    /// Empty mass (kg).
    pub empty_mass: f64,
    /// Fuel capacity of the main propellant resource (kg).
    pub fuel_mass: f64,
    /// Cross sections projected along x, y and z (m²).
    pub cross_sections: Vector3<f64>,
    /// Principal moments of inertia, mass-normalised (m²).
    pub pmi: Vector3<f64>,
    /// Maximum wheel-brake force (N).
    #[serde(default = "default_wheelbrake_force")]
    pub max_wheelbrake_force: f64,
    /// Rotational drag coefficients.
    #[serde(default = "default_rot_drag")]
    pub rot_drag: Vector3<f64>,
}

fn default_wheelbrake_force() -> f64 {
    MAX_WHEELBRAKE_FORCE
}

fn default_rot_drag() -> Vector3<f64> {
    Vector3::new(ROT_DRAG[0], ROT_DRAG[1], ROT_DRAG[2])
}

impl MassModel {
    /// Creates a mass model with the wheel-brake force and rotational drag shared by
    /// every 747.
    ///
    /// # Arguments
    /// * `size` - Mean radius (m).
    /// * `empty_mass` - Empty mass (kg).
    /// * `fuel_mass` - Fuel capacity (kg).
    /// * `cross_sections` - Cross sections (m²).
    /// * `pmi` - Principal moments of inertia (m²).
    pub fn new(
        size: f64,
        empty_mass: f64,
        fuel_mass: f64,
        cross_sections: Vector3<f64>,
        pmi: Vector3<f64>,
    ) -> Self {
        Self {
            size,
            empty_mass,
            fuel_mass,
            cross_sections,
            pmi,
            max_wheelbrake_force: default_wheelbrake_force(),
            rot_drag: default_rot_drag(),
        }
    }

    pub fn b747_100() -> Self {
        Self::new(
            22.8,
            171_840.0,
            168_260.0,
            Vector3::new(496.48, 953.27, 135.78),
            Vector3::new(363.91, 396.64, 128.02),
        )
    }

    pub fn b747_sp() -> Self {
        Self::new(
            25.0,
            147_540.0,
            190_630.0,
            Vector3::new(401.28, 868.57, 134.25),
            Vector3::new(204.50, 244.01, 135.71),
        )
    }

    pub fn b747_400() -> Self {
        Self::new(
            25.0,
            183_523.0,
            213_370.0,
            Vector3::new(491.82, 959.88, 132.38),
            Vector3::new(303.08, 338.21, 131.21),
        )
    }

    /// The 747-8 is the 747-400 airframe stretched by 5.6 m; sections and inertia are
    /// scaled from the -400 by the length ratio.
    pub fn b747_8() -> Self {
        Self::new(
            27.0,
            220_128.0,
            194_700.0,
            Vector3::new(531.17, 1036.67, 142.97),
            Vector3::new(327.33, 365.27, 141.71),
        )
    }

    pub fn b747_supertanker() -> Self {
        Self::new(
            22.8,
            178_840.0,
            168_260.0,
            Vector3::new(496.48, 953.27, 135.78),
            Vector3::new(363.91, 396.64, 128.02),
        )
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size <= 0.0 || self.empty_mass <= 0.0 {
            return Err(ConfigError::ValidationError(
                "size and empty mass must be positive".to_string(),
            ));
        }
        if self.fuel_mass < 0.0 {
            return Err(ConfigError::ValidationError(
                "fuel mass cannot be negative".to_string(),
            ));
        }
        Ok(())
    }
}
