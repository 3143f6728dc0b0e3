pub mod aircraft;
pub mod engines;
pub mod gear;
pub mod lighting;
pub mod livery;

pub use aircraft::config::*;
pub use aircraft::FlightConditions;
pub use engines::{EngineState, GroupSync};
pub use gear::{GearStatus, LandingGear, TouchdownSet};
pub use lighting::LightingState;
pub use livery::{LiveryError, LiveryState, SkinList};
