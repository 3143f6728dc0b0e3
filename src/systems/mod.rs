pub mod aerodynamics;
pub mod vessel;

pub use aerodynamics::{horizontal_lift_coefficients, vertical_lift_coefficients, AirfoilModel};
pub use vessel::{
    clear_buffered_keys_system, flight_conditions_system, vessel_keyboard_system,
    vessel_post_step_system, vessel_pre_step_system, SimulationClock,
};
