use bevy::prelude::*;

use crate::components::LightingConfig;
use crate::host::{BeaconHandle, LightHandle, VesselHost};

/// Beacon and light-emitter state. Beacons persist and flip; emitters exist only while
/// the lights are on.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct LightingState {
    pub beacons: Vec<BeaconHandle>,
    pub beacons_on: bool,
    pub lights: Vec<LightHandle>,
    pub lights_on: bool,
}

impl LightingState {
    /// Registers every beacon, inactive.
    pub fn register_beacons<H: VesselHost + ?Sized>(
        &mut self,
        host: &mut H,
        config: &LightingConfig,
    ) {
        self.beacons = config.beacons.iter().map(|b| host.add_beacon(b)).collect();
        self.beacons_on = false;
    }

    /// Flips the active flag of every beacon. Returns the new state.
    pub fn toggle_beacons<H: VesselHost + ?Sized>(&mut self, host: &mut H) -> bool {
        self.beacons_on = !self.beacons_on;
        for beacon in &self.beacons {
            host.set_beacon_active(*beacon, self.beacons_on);
        }
        self.beacons_on
    }

    /// Creates every configured emitter when off, deletes every created emitter when on.
    /// Returns the new state.
    pub fn toggle_lights<H: VesselHost + ?Sized>(
        &mut self,
        host: &mut H,
        config: &LightingConfig,
    ) -> bool {
        if self.lights_on {
            for light in self.lights.drain(..) {
                host.delete_light(light);
            }
            self.lights_on = false;
        } else {
            self.lights = config.lights.iter().map(|l| host.add_light(l)).collect();
            self.lights_on = true;
        }
        self.lights_on
    }
}
