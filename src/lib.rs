pub mod components;
pub mod host;
pub mod plugins;
pub mod systems;
pub mod utils;
pub mod vessel;
