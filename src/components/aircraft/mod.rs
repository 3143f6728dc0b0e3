pub mod config;
pub mod state;

pub use state::FlightConditions;
