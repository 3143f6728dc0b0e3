// Landing gear
pub const LANDING_GEAR_OPERATING_SPEED: f64 = 0.06; // fraction per second

// Engines
pub const ENGINE_ROTATION_SPEED: f64 = 25.0;
pub const ENGINE_ROTATION_SPEED_SP: f64 = 10.0;
pub const RETRO_THRUST_RATIO: f64 = 0.25;

// Contrails
pub const CONTRAIL_MIN_MACH: f64 = 0.5;
pub const CONTRAIL_MIN_ALTITUDE: f64 = 10_000.0; // m
pub const CONTRAIL_MAX_ALTITUDE: f64 = 15_000.0; // m

// Wheel brakes and rotational drag shared by every airframe
pub const MAX_WHEELBRAKE_FORCE: f64 = 89e3; // N
pub const ROT_DRAG: [f64; 3] = [10.0, 10.0, 2.5];

// Wave drag onset (M1, M2, M3, cmax)
pub const WAVE_DRAG_M1: f64 = 0.75;
pub const WAVE_DRAG_M2: f64 = 1.0;
pub const WAVE_DRAG_M3: f64 = 1.1;
pub const WAVE_DRAG_CMAX: f64 = 0.04;

// Fixed step used by the bevy adapter
pub const VESSEL_TIMESTEP: f64 = 1.0 / 120.0;
