//! Opaque identifiers of host-owned resources.
//!
//! The vessel never looks inside a handle; it only stores what a host factory returned
//! and passes it back to later host calls.

macro_rules! host_handles {
    ($($(#[$meta:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
            pub struct $name(pub u64);
        )*
    };
}

host_handles! {
    /// A single thruster.
    ThrusterHandle,
    /// A logical group of thrusters driven by one level.
    ThrusterGroupHandle,
    /// A propellant tank.
    PropellantHandle,
    AirfoilHandle,
    ControlSurfaceHandle,
    /// An animation channel; its state is a value in [0, 1].
    AnimationHandle,
    /// A mesh template loaded by the host.
    MeshHandle,
    /// The per-visual instance of a mesh that textures are applied to.
    DevMeshHandle,
    TextureHandle,
    BeaconHandle,
    /// A dynamically created light emitter.
    LightHandle,
    ParticleStreamHandle,
    /// The renderable instance of the vessel.
    VisualHandle,
}
