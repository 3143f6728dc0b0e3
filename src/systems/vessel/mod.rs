mod conditions;
mod keyboard;
mod step;

pub use conditions::flight_conditions_system;
pub use keyboard::{clear_buffered_keys_system, key_from_code, modifiers_from_input, vessel_keyboard_system};
pub use step::{vessel_post_step_system, vessel_pre_step_system, SimulationClock};
