use serde::{Deserialize, Serialize};

use crate::components::aircraft::config::ConfigError;
use crate::utils::{WAVE_DRAG_CMAX, WAVE_DRAG_M1, WAVE_DRAG_M2, WAVE_DRAG_M3};

/// Breakpoint table for one lift-generating surface.
///
/// Angles are stored in degrees so that YAML files stay readable; lookups convert the
/// incoming angle instead of the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoefficientTable {
    /// Breakpoints (deg), strictly increasing.
    pub angles_deg: Vec<f64>,
    /// Lift coefficient at each breakpoint.
    pub cl: Vec<f64>,
    /// Moment coefficient at each breakpoint.
    pub cm: Vec<f64>,
}

/// Profile drag `base + sin2_factor * sin²(angle)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileDrag {
    pub base: f64,
    pub sin2_factor: f64,
}

/// Transonic wave drag parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveDragParams {
    /// Mach number where wave drag starts.
    pub m1: f64,
    /// Mach number where wave drag peaks.
    pub m2: f64,
    /// Mach number where the supersonic decay starts.
    pub m3: f64,
    /// Peak wave drag coefficient.
    pub cmax: f64,
}

impl Default for WaveDragParams {
    fn default() -> Self {
        Self {
            m1: WAVE_DRAG_M1,
            m2: WAVE_DRAG_M2,
            m3: WAVE_DRAG_M3,
            cmax: WAVE_DRAG_CMAX,
        }
    }
}

/// Everything needed to turn an angle and a Mach number into lift, moment and drag
/// coefficients, except the aspect ratio which belongs to the surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiftModel {
    pub table: CoefficientTable,
    pub profile_drag: ProfileDrag,
    /// Oswald span efficiency used for induced drag.
    pub span_efficiency: f64,
    #[serde(default)]
    pub wave_drag: WaveDragParams,
}

/// Coefficient models for the two airfoil orientations of the airframe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftAeroCoefficients {
    /// Wings and horizontal stabilizers, indexed by angle of attack.
    pub vertical: LiftModel,
    /// Fin and fuselage side force, indexed by sideslip angle.
    pub horizontal: LiftModel,
}

impl CoefficientTable {
    pub fn new(angles_deg: Vec<f64>, cl: Vec<f64>, cm: Vec<f64>) -> Self {
        Self { angles_deg, cl, cm }
    }

    /// Checks the shape of the table; `name` only feeds the error message.
    pub fn validate(&self, name: &str) -> Result<(), ConfigError> {
        if self.angles_deg.len() < 2 {
            return Err(ConfigError::ValidationError(format!(
                "{name}: coefficient table needs at least two breakpoints"
            )));
        }
        if self.cl.len() != self.angles_deg.len() || self.cm.len() != self.angles_deg.len() {
            return Err(ConfigError::ValidationError(format!(
                "{name}: expected {} CL/CM values, got {}/{}",
                self.angles_deg.len(),
                self.cl.len(),
                self.cm.len()
            )));
        }
        if self.angles_deg.windows(2).any(|w| w[1] <= w[0]) {
            return Err(ConfigError::ValidationError(format!(
                "{name}: breakpoints must be strictly increasing"
            )));
        }
        Ok(())
    }
}

impl LiftModel {
    /// Lift curve of the 747 wing and stabilizer, indexed by angle of attack.
    pub fn vertical_747() -> Self {
        Self {
            table: CoefficientTable::new(
                vec![-180.0, -60.0, -30.0, -15.0, 0.0, 15.0, 30.0, 60.0, 180.0],
                vec![0.0, -0.56, -0.56, -0.16, 0.15, 0.46, 0.56, 0.56, 0.0],
                vec![0.0; 9],
            ),
            profile_drag: ProfileDrag {
                base: 0.015,
                sin2_factor: 0.4,
            },
            span_efficiency: 0.7,
            wave_drag: WaveDragParams::default(),
        }
    }

    /// Side-force curve of the 747 fin, indexed by sideslip angle.
    pub fn horizontal_747() -> Self {
        Self {
            table: CoefficientTable::new(
                vec![-180.0, -135.0, -90.0, -45.0, 45.0, 90.0, 135.0, 180.0],
                vec![0.0, 0.3, 0.0, -0.3, 0.3, 0.0, -0.3, 0.0],
                vec![0.0; 8],
            ),
            profile_drag: ProfileDrag {
                base: 0.015,
                sin2_factor: 0.0,
            },
            span_efficiency: 0.6,
            wave_drag: WaveDragParams::default(),
        }
    }

    pub fn validate(&self, name: &str) -> Result<(), ConfigError> {
        self.table.validate(name)?;
        if self.span_efficiency <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "{name}: span efficiency must be positive"
            )));
        }
        let w = &self.wave_drag;
        if !(w.m1 < w.m2 && w.m2 <= w.m3 && w.m3 > 1.0) {
            return Err(ConfigError::ValidationError(format!(
                "{name}: wave drag Mach numbers must satisfy m1 < m2 <= m3 and m3 > 1"
            )));
        }
        Ok(())
    }
}

impl AircraftAeroCoefficients {
    pub fn new(vertical: LiftModel, horizontal: LiftModel) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }

    /// Every 747 variant shares the same tabulated curves.
    pub fn boeing_747() -> Self {
        Self::new(LiftModel::vertical_747(), LiftModel::horizontal_747())
    }
}
