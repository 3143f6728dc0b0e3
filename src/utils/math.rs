use std::f64::consts::PI;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Piecewise-linear lookup of `x` over the breakpoints `xs` with values `ys`.
///
/// Inputs below the first breakpoint return the first value and inputs above the
/// last breakpoint return the last value; there is no extrapolation. `xs` must be
/// strictly increasing and the same length as `ys`.
pub fn interpolate_clamped(xs: &[f64], ys: &[f64], x: f64) -> f64 {
    debug_assert_eq!(xs.len(), ys.len());
    let n = xs.len().min(ys.len());
    if n == 0 {
        return 0.0;
    }
    if n == 1 || x <= xs[0] {
        return ys[0];
    }
    if x >= xs[n - 1] {
        return ys[n - 1];
    }

    // First segment whose upper breakpoint is not below x.
    let mut i = 0;
    while i < n - 2 && xs[i + 1] < x {
        i += 1;
    }
    let f = (x - xs[i]) / (xs[i + 1] - xs[i]);
    ys[i] + (ys[i + 1] - ys[i]) * f
}
