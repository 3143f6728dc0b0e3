mod aero_coef;
mod aircraft;
mod animation;
mod assets;
mod gear;
mod geometry;
mod lighting;
mod livery;
mod loader;
mod mass;
mod propulsion;

pub use aero_coef::{
    AircraftAeroCoefficients, CoefficientTable, LiftModel, ProfileDrag, WaveDragParams,
};
pub use aircraft::{Features, VariantType, VesselConfig, VesselSource};
pub use animation::{
    AnimationChannelSpec, AnimationComponentSpec, AnimationConfig, RotationSpec,
};
pub use assets::{MeshSpec, MeshVisibility, Playback, Sound, SoundSpec};
pub use gear::{GearConfig, TouchdownPoint};
pub use geometry::{
    AircraftGeometry, ControlChannel, ControlSurfaceKind, ControlSurfaceSpec, LiftOrientation,
    LiftingSurface,
};
pub use lighting::{
    BeaconShape, BeaconSpec, Colour4, LightKind, LightSpec, LightVisibility, LightingConfig,
};
pub use livery::{LiveryConfig, LiverySurface};
pub use loader::ConfigError;
pub use mass::MassModel;
pub use propulsion::{
    AtmosphereMap, ContrailConfig, LevelMap, ParticleLightType, ParticleStreamSpec,
    PropulsionConfig, WaterDischargeConfig,
};
