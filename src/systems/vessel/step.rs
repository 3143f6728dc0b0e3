use bevy::prelude::*;

use crate::host::HeadlessHost;
use crate::vessel::{Boeing747, VesselCallbacks};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Simulation date at the start of the run.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct SimulationClock {
    /// Modified Julian Date at simulation time zero.
    pub start_mjd: f64,
}

impl Default for SimulationClock {
    fn default() -> Self {
        // J2000
        Self {
            start_mjd: 51_544.5,
        }
    }
}

impl SimulationClock {
    pub fn mjd(&self, simt: f64) -> f64 {
        self.start_mjd + simt / SECONDS_PER_DAY
    }
}

pub fn vessel_pre_step_system(
    time: Res<Time>,
    clock: Res<SimulationClock>,
    mut query: Query<(&mut Boeing747, &mut HeadlessHost)>,
) {
    let simt = time.elapsed_secs_f64();
    let simdt = time.delta_secs_f64();
    for (mut vessel, mut host) in query.iter_mut() {
        vessel.pre_step(&mut *host, simt, simdt, clock.mjd(simt));
    }
}

pub fn vessel_post_step_system(
    time: Res<Time>,
    clock: Res<SimulationClock>,
    mut query: Query<(&mut Boeing747, &mut HeadlessHost)>,
) {
    let simt = time.elapsed_secs_f64();
    let simdt = time.delta_secs_f64();
    for (mut vessel, mut host) in query.iter_mut() {
        vessel.post_step(&mut *host, simt, simdt, clock.mjd(simt));
    }
}
