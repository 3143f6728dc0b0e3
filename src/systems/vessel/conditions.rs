use bevy::prelude::*;

use crate::components::FlightConditions;
use crate::host::HeadlessHost;

/// Copies each vessel's flight conditions into its host before the step callbacks read them.
pub fn flight_conditions_system(mut query: Query<(&FlightConditions, &mut HeadlessHost)>) {
    for (conditions, mut host) in query.iter_mut() {
        host.mach = conditions.mach;
        host.altitude = conditions.altitude;
        host.groundspeed = conditions.groundspeed;
    }
}
