use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::aircraft::config::ConfigError;

/// Which coefficient model a surface uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LiftOrientation {
    /// Lift perpendicular to the wing plane, driven by angle of attack.
    Vertical,
    /// Side force, driven by sideslip.
    Horizontal,
}

/// One airfoil registered with the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiftingSurface {
    pub name: String,
    pub orientation: LiftOrientation,
    /// Centre of pressure relative to the vessel origin (m).
    pub reference: Vector3<f64>,
    /// Chord length (m).
    pub chord: f64,
    /// Area passed to the host (m²).
    pub area: f64,
    pub aspect_ratio: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlSurfaceKind {
    Aileron,
    Elevator,
    ElevatorTrim,
    Rudder,
}

/// Animation channel a control surface deflects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlChannel {
    LeftAileron,
    RightAileron,
    Elevator,
    ElevatorTrim,
    Rudder,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlSurfaceSpec {
    pub kind: ControlSurfaceKind,
    /// Surface area (m²).
    pub area: f64,
    /// Lift coefficient change per unit deflection.
    pub dcl: f64,
    pub reference: Vector3<f64>,
    /// Deflection delay (s).
    #[serde(default = "default_delay")]
    pub delay: f64,
    pub channel: ControlChannel,
}

fn default_delay() -> f64 {
    1.0
}

/// Airfoils and control surfaces of the airframe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftGeometry {
    pub surfaces: Vec<LiftingSurface>,
    pub control_surfaces: Vec<ControlSurfaceSpec>,
}

const WING_CHORD: f64 = 7.65;
const WING_AREA: f64 = 511.0;
const WING_ASPECT: f64 = 7.0;
const FIN_CHORD: f64 = 8.2;
const FIN_AREA: f64 = 61.4473;
const FIN_ASPECT: f64 = 6.1156;
const STAB_CHORD: f64 = 3.59;
const STAB_AREA: f64 = 39.0753;
const STAB_ASPECT: f64 = 2.0;

const AILERON_AREA: f64 = 8.3696;
const ELEVATOR_AREA: f64 = 14.4997 * 2.0;
const RUDDER_AREA: f64 = 20.6937;
const CONTROL_DCL: f64 = 1.7;

impl LiftingSurface {
    pub fn new(
        name: &str,
        orientation: LiftOrientation,
        reference: Vector3<f64>,
        chord: f64,
        area: f64,
        aspect_ratio: f64,
    ) -> Self {
        Self {
            name: name.to_string(),
            orientation,
            reference,
            chord,
            area,
            aspect_ratio,
        }
    }
}

impl ControlSurfaceSpec {
    pub fn new(
        kind: ControlSurfaceKind,
        area: f64,
        reference: Vector3<f64>,
        channel: ControlChannel,
    ) -> Self {
        Self {
            kind,
            area,
            dcl: CONTROL_DCL,
            reference,
            delay: default_delay(),
            channel,
        }
    }
}

impl AircraftGeometry {
    pub fn new(surfaces: Vec<LiftingSurface>, control_surfaces: Vec<ControlSurfaceSpec>) -> Self {
        Self {
            surfaces,
            control_surfaces,
        }
    }

    /// Airframe shared by all 747 variants: two wings, two stabilizers and the fin,
    /// plus ailerons, elevators, elevator trim and rudder.
    ///
    /// The wing area is handed to the host four times over, which is what the flight
    /// model was tuned against.
    pub fn boeing_747() -> Self {
        let left_wing = Vector3::new(-15.0, 0.0, -3.0);
        let right_wing = Vector3::new(15.0, 0.0, -3.0);
        let left_stab = Vector3::new(-7.5, 1.5, -30.0);
        let right_stab = Vector3::new(7.5, 1.5, -30.0);
        let fin = Vector3::new(0.0, 8.0, -30.0);
        let left_aileron = Vector3::new(-25.0, 0.5, -10.0);
        let right_aileron = Vector3::new(25.0, 0.5, -10.0);
        let left_elevator = Vector3::new(-5.0, 1.5, -32.0);
        let right_elevator = Vector3::new(5.0, 1.5, -32.0);

        let surfaces = vec![
            LiftingSurface::new(
                "left_wing",
                LiftOrientation::Vertical,
                left_wing,
                WING_CHORD,
                WING_AREA * 4.0,
                WING_ASPECT,
            ),
            LiftingSurface::new(
                "right_wing",
                LiftOrientation::Vertical,
                right_wing,
                WING_CHORD,
                WING_AREA * 4.0,
                WING_ASPECT,
            ),
            LiftingSurface::new(
                "left_stabilizer",
                LiftOrientation::Vertical,
                left_stab,
                STAB_CHORD,
                STAB_AREA,
                STAB_ASPECT,
            ),
            LiftingSurface::new(
                "right_stabilizer",
                LiftOrientation::Vertical,
                right_stab,
                STAB_CHORD,
                STAB_AREA,
                STAB_ASPECT,
            ),
            LiftingSurface::new(
                "fin",
                LiftOrientation::Horizontal,
                fin,
                FIN_CHORD,
                FIN_AREA,
                FIN_ASPECT,
            ),
        ];

        use ControlChannel as Ch;
        use ControlSurfaceKind as Kind;
        let control_surfaces = vec![
            ControlSurfaceSpec::new(Kind::Aileron, AILERON_AREA, left_aileron, Ch::LeftAileron),
            ControlSurfaceSpec::new(Kind::Aileron, AILERON_AREA, right_aileron, Ch::RightAileron),
            ControlSurfaceSpec::new(Kind::Elevator, ELEVATOR_AREA, left_elevator, Ch::Elevator),
            ControlSurfaceSpec::new(Kind::Elevator, ELEVATOR_AREA, right_elevator, Ch::Elevator),
            ControlSurfaceSpec::new(
                Kind::ElevatorTrim,
                ELEVATOR_AREA,
                left_elevator,
                Ch::ElevatorTrim,
            ),
            ControlSurfaceSpec::new(
                Kind::ElevatorTrim,
                ELEVATOR_AREA,
                right_elevator,
                Ch::ElevatorTrim,
            ),
            ControlSurfaceSpec::new(Kind::Rudder, RUDDER_AREA, fin, Ch::Rudder),
        ];

        Self::new(surfaces, control_surfaces)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.surfaces.is_empty() {
            return Err(ConfigError::ValidationError(
                "at least one lifting surface is required".to_string(),
            ));
        }
        for surface in &self.surfaces {
            if surface.chord <= 0.0 || surface.area <= 0.0 || surface.aspect_ratio <= 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "surface '{}' needs positive chord, area and aspect ratio",
                    surface.name
                )));
            }
        }
        Ok(())
    }
}
