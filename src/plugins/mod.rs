mod vessel;

pub use vessel::{VesselPlugin, VesselSpawn, VesselStepSet};
