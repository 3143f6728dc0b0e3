use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::components::{LiftModel, WaveDragParams};
use crate::utils::{interpolate_clamped, rad_to_deg};

/// Coefficients returned to the host for one airfoil evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AeroCoefficients {
    /// Lift coefficient.
    pub cl: f64,
    /// Moment coefficient.
    pub cm: f64,
    /// Total drag coefficient.
    pub cd: f64,
}

/// Lift-induced drag `cl² / (π A e)`.
pub fn induced_drag(cl: f64, aspect_ratio: f64, span_efficiency: f64) -> f64 {
    cl * cl / (PI * aspect_ratio * span_efficiency)
}

/// Transonic wave drag.
///
/// Zero below `m1`, rising linearly to `cmax` at `m2`, flat until `m3` and decaying as
/// `cmax * sqrt((m3² - 1) / (M² - 1))` beyond.
pub fn wave_drag(mach: f64, params: &WaveDragParams) -> f64 {
    let WaveDragParams { m1, m2, m3, cmax } = *params;
    if mach < m1 {
        0.0
    } else if mach < m2 {
        cmax * (mach - m1) / (m2 - m1)
    } else if mach < m3 {
        cmax
    } else {
        cmax * ((m3 * m3 - 1.0) / (mach * mach - 1.0)).sqrt()
    }
}

/// A lift model bound to the aspect ratio of the surface it is attached to.
///
/// This is what the host calls back into whenever it needs the coefficients of an
/// airfoil; evaluation has no side effects.
#[derive(Debug, Clone, PartialEq)]
pub struct AirfoilModel {
    pub lift: LiftModel,
    pub aspect_ratio: f64,
}

impl AirfoilModel {
    pub fn new(lift: LiftModel, aspect_ratio: f64) -> Self {
        Self { lift, aspect_ratio }
    }

    /// Evaluates the model.
    ///
    /// # Arguments
    /// * `angle` - Angle of attack or sideslip (rad). Values outside the table take the
    ///             nearest edge value.
    /// * `mach` - Free-stream Mach number.
    pub fn coefficients(&self, angle: f64, mach: f64) -> AeroCoefficients {
        let table = &self.lift.table;
        let angle_deg = rad_to_deg(angle);
        let cl = interpolate_clamped(&table.angles_deg, &table.cl, angle_deg);
        let cm = interpolate_clamped(&table.angles_deg, &table.cm, angle_deg);

        let sin = angle.sin();
        let profile =
            self.lift.profile_drag.base + self.lift.profile_drag.sin2_factor * sin * sin;
        let cd = profile
            + induced_drag(cl, self.aspect_ratio, self.lift.span_efficiency)
            + wave_drag(mach, &self.lift.wave_drag);

        AeroCoefficients { cl, cm, cd }
    }
}

/// Wing and stabilizer coefficients of the 747 at angle of attack `aoa`.
pub fn vertical_lift_coefficients(aoa: f64, mach: f64, aspect_ratio: f64) -> AeroCoefficients {
    AirfoilModel::new(LiftModel::vertical_747(), aspect_ratio).coefficients(aoa, mach)
}

/// Fin coefficients of the 747 at sideslip `beta`.
pub fn horizontal_lift_coefficients(
    beta: f64,
    mach: f64,
    aspect_ratio: f64,
) -> AeroCoefficients {
    AirfoilModel::new(LiftModel::horizontal_747(), aspect_ratio).coefficients(beta, mach)
}
