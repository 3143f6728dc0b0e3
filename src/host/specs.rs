use nalgebra::Vector3;

use crate::components::{LiftOrientation, LiftingSurface};
use crate::host::PropellantHandle;
use crate::systems::aerodynamics::AirfoilModel;

/// Arguments of a thruster factory call.
#[derive(Debug, Clone, PartialEq)]
pub struct ThrusterSpec {
    pub position: Vector3<f64>,
    /// Thrust direction, unit length.
    pub direction: Vector3<f64>,
    /// Maximum thrust (N).
    pub max_thrust: f64,
    pub propellant: PropellantHandle,
    /// Specific impulse (m/s).
    pub isp: f64,
}

/// Standard group slot a thruster group is registered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThrusterGroupKind {
    Main,
    Retro,
    User,
}

/// Arguments of an airfoil factory call. The host evaluates `model` whenever it needs
/// the coefficients of this surface.
#[derive(Debug, Clone, PartialEq)]
pub struct AirfoilSpec {
    pub name: String,
    pub orientation: LiftOrientation,
    pub reference: Vector3<f64>,
    pub chord: f64,
    pub area: f64,
    pub aspect_ratio: f64,
    pub model: AirfoilModel,
}

impl AirfoilSpec {
    pub fn from_surface(surface: &LiftingSurface, model: AirfoilModel) -> Self {
        Self {
            name: surface.name.clone(),
            orientation: surface.orientation,
            reference: surface.reference,
            chord: surface.chord,
            area: surface.area,
            aspect_ratio: surface.aspect_ratio,
            model,
        }
    }
}
