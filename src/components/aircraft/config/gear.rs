use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::aircraft::config::ConfigError;
use crate::utils::LANDING_GEAR_OPERATING_SPEED;

/// A ground-contact vertex handed to the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchdownPoint {
    pub position: Vector3<f64>,
    /// Suspension stiffness (N/m).
    pub stiffness: f64,
    /// Suspension damping (N s/m).
    pub damping: f64,
    /// Lateral friction coefficient.
    pub mu: f64,
    /// Longitudinal friction coefficient, defaults to `mu`.
    #[serde(default)]
    pub mu_lng: Option<f64>,
}

impl TouchdownPoint {
    pub fn wheel(position: Vector3<f64>, mu: f64, mu_lng: f64) -> Self {
        Self {
            position,
            stiffness: 5e6,
            damping: 5e5,
            mu,
            mu_lng: Some(mu_lng),
        }
    }

    pub fn hull(position: Vector3<f64>) -> Self {
        Self {
            position,
            stiffness: 5e6,
            damping: 5e6,
            mu: 3.0,
            mu_lng: None,
        }
    }

    pub fn longitudinal_friction(&self) -> f64 {
        self.mu_lng.unwrap_or(self.mu)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GearConfig {
    /// Fraction of full travel per second.
    pub operating_speed: f64,
    /// Contact set used while the gear is down or deploying.
    pub down_points: Vec<TouchdownPoint>,
    /// Contact set used while the gear is up or stowing.
    pub up_points: Vec<TouchdownPoint>,
}

impl GearConfig {
    /// Three wheel contacts followed by eleven airframe contacts. The gear-up set is
    /// the airframe contacts alone.
    pub fn boeing_747() -> Self {
        let wheels = [
            TouchdownPoint::wheel(Vector3::new(0.0, -7.2, 25.0), 1.6, 0.1),
            TouchdownPoint::wheel(Vector3::new(-5.5, -7.2, -3.0), 3.0, 0.2),
            TouchdownPoint::wheel(Vector3::new(5.5, -7.2, -3.0), 3.0, 0.2),
        ];
        let hull: Vec<TouchdownPoint> = [
            Vector3::new(0.0, -1.5, 35.0),
            Vector3::new(0.0, 2.0, -35.0),
            Vector3::new(-32.0, 1.0, -12.0),
            Vector3::new(32.0, 1.0, -12.0),
            Vector3::new(0.0, -3.8, 15.0),
            Vector3::new(0.0, -3.8, -10.0),
            Vector3::new(0.0, 13.0, -33.0),
            Vector3::new(-11.0, 2.0, -33.0),
            Vector3::new(11.0, 2.0, -33.0),
            Vector3::new(0.0, 4.5, 28.0),
            Vector3::new(0.0, -2.5, -25.0),
        ]
        .into_iter()
        .map(TouchdownPoint::hull)
        .collect();

        let mut down_points = wheels.to_vec();
        down_points.extend(hull.iter().copied());

        Self {
            operating_speed: LANDING_GEAR_OPERATING_SPEED,
            down_points,
            up_points: hull,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.operating_speed <= 0.0 {
            return Err(ConfigError::ValidationError(
                "gear operating speed must be positive".to_string(),
            ));
        }
        if self.down_points.len() < 3 || self.up_points.len() < 3 {
            return Err(ConfigError::ValidationError(
                "each touchdown set needs at least three points".to_string(),
            ));
        }
        Ok(())
    }
}
