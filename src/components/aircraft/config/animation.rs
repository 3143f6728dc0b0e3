use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Rotation of a set of mesh groups about an axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RotationSpec {
    /// Mesh index, in the order meshes are added.
    pub mesh: u32,
    pub groups: Vec<u32>,
    pub reference: Vector3<f64>,
    pub axis: Vector3<f64>,
    /// Full-travel rotation (rad).
    pub angle: f64,
}

/// A rotation mapped onto a sub-range of the channel state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationComponentSpec {
    pub start: f64,
    pub end: f64,
    pub rotation: RotationSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationChannelSpec {
    /// State the host renders before the first update.
    pub initial_state: f64,
    pub components: Vec<AnimationComponentSpec>,
}

/// Every animation channel the vessel drives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    pub gear: AnimationChannelSpec,
    pub engines: AnimationChannelSpec,
    pub elevator: AnimationChannelSpec,
    pub elevator_trim: AnimationChannelSpec,
    pub rudder: AnimationChannelSpec,
    pub left_aileron: AnimationChannelSpec,
    pub right_aileron: AnimationChannelSpec,
}

const EXTERIOR: u32 = 0;
const COCKPIT: u32 = 1;

fn rotate(mesh: u32, group: u32, reference: [f64; 3], axis: [f64; 3], deg: f64) -> RotationSpec {
    RotationSpec {
        mesh,
        groups: vec![group],
        reference: Vector3::from(reference),
        axis: Vector3::from(axis),
        angle: deg.to_radians(),
    }
}

fn component(start: f64, end: f64, rotation: RotationSpec) -> AnimationComponentSpec {
    AnimationComponentSpec {
        start,
        end,
        rotation,
    }
}

fn channel(initial_state: f64, components: Vec<AnimationComponentSpec>) -> AnimationChannelSpec {
    AnimationChannelSpec {
        initial_state,
        components,
    }
}

impl AnimationConfig {
    /// Exterior animations shared by every 747. With `cockpit` set the gear lever,
    /// yoke columns and yokes of the virtual cockpit mesh are added to their channels.
    pub fn boeing_747(cockpit: bool) -> Self {
        const X: [f64; 3] = [1.0, 0.0, 0.0];
        const Y: [f64; 3] = [0.0, 1.0, 0.0];
        const Z: [f64; 3] = [0.0, 0.0, 1.0];

        let mut gear = channel(
            0.0,
            vec![
                component(0.0, 0.25, rotate(EXTERIOR, 10, [0.0, -3.0, 24.6], X, -110.0)),
                component(0.0, 0.5, rotate(EXTERIOR, 11, [-0.9, -3.4, 24.6], Z, 90.0)),
                component(0.0, 0.5, rotate(EXTERIOR, 12, [0.9, -3.4, 24.6], Z, -90.0)),
                component(0.0, 0.5, rotate(EXTERIOR, 13, [-5.5, -3.0, -3.0], Z, 90.0)),
                component(0.0, 0.5, rotate(EXTERIOR, 14, [-5.5, -5.0, -3.0], Z, -90.0)),
                component(0.0, 0.5, rotate(EXTERIOR, 15, [5.5, -3.0, -3.0], Z, -90.0)),
                component(0.0, 0.5, rotate(EXTERIOR, 16, [5.5, -5.0, -3.0], Z, 90.0)),
                component(0.0, 0.5, rotate(EXTERIOR, 17, [-1.8, -3.2, -6.0], X, -180.0)),
                component(0.0, 0.5, rotate(EXTERIOR, 18, [1.8, -3.2, -6.0], X, -180.0)),
                component(0.25, 0.5, rotate(EXTERIOR, 19, [-2.6, -3.6, -6.0], Z, 90.0)),
                component(0.5, 1.0, rotate(EXTERIOR, 20, [-2.6, -3.6, -8.0], Z, 90.0)),
                component(0.25, 0.5, rotate(EXTERIOR, 21, [2.6, -3.6, -6.0], Z, -90.0)),
                component(0.5, 1.0, rotate(EXTERIOR, 22, [2.6, -3.6, -8.0], Z, -90.0)),
            ],
        );

        let engines = channel(
            0.0,
            [
                (30, [-21.1, -1.9, 0.6]),
                (31, [-12.1, -3.2, 6.2]),
                (32, [12.1, -3.2, 6.2]),
                (33, [21.1, -1.9, 0.6]),
            ]
            .into_iter()
            .map(|(group, pos)| component(0.0, 1.0, rotate(EXTERIOR, group, pos, Z, 360.0)))
            .collect(),
        );

        let mut elevator = channel(
            0.5,
            vec![
                component(0.0, 1.0, rotate(EXTERIOR, 40, [-5.0, 1.5, -32.0], X, 45.0)),
                component(0.0, 1.0, rotate(EXTERIOR, 41, [5.0, 1.5, -32.0], X, 45.0)),
            ],
        );

        let elevator_trim = channel(
            0.5,
            vec![
                component(0.0, 1.0, rotate(EXTERIOR, 42, [-5.0, 1.5, -32.5], X, 22.5)),
                component(0.0, 1.0, rotate(EXTERIOR, 43, [5.0, 1.5, -32.5], X, 22.5)),
            ],
        );

        let rudder = channel(
            0.5,
            vec![component(
                0.0,
                1.0,
                rotate(EXTERIOR, 44, [0.0, 8.0, -33.0], Y, 22.5),
            )],
        );

        let mut left_aileron = channel(
            0.5,
            vec![component(
                0.0,
                1.0,
                rotate(EXTERIOR, 45, [-25.0, 0.5, -11.0], X, -45.0),
            )],
        );

        let right_aileron = channel(
            0.5,
            vec![component(
                0.0,
                1.0,
                rotate(EXTERIOR, 46, [25.0, 0.5, -11.0], X, 45.0),
            )],
        );

        if cockpit {
            gear.components.push(component(
                0.0,
                0.1,
                rotate(COCKPIT, 5, [0.3, 3.9, 30.2], X, 90.0),
            ));
            elevator.components.push(component(
                0.0,
                1.0,
                rotate(COCKPIT, 6, [-0.55, 3.3, 30.0], X, 20.0),
            ));
            elevator.components.push(component(
                0.0,
                1.0,
                rotate(COCKPIT, 7, [0.55, 3.3, 30.0], X, 20.0),
            ));
            left_aileron.components.push(component(
                0.0,
                1.0,
                rotate(COCKPIT, 8, [-0.55, 3.7, 30.2], Z, 70.0),
            ));
            left_aileron.components.push(component(
                0.0,
                1.0,
                rotate(COCKPIT, 9, [0.55, 3.7, 30.2], Z, 70.0),
            ));
        }

        Self {
            gear,
            engines,
            elevator,
            elevator_trim,
            rudder,
            left_aileron,
            right_aileron,
        }
    }
}
