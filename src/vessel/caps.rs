use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{AnimationChannelSpec, ControlChannel, LiftOrientation, MeshVisibility};
use crate::host::{
    AirfoilSpec, AnimationHandle, ThrusterGroupKind, ThrusterHandle, ThrusterSpec, VesselHost,
};
use crate::systems::aerodynamics::AirfoilModel;
use crate::vessel::Boeing747;

/// Animation channels created at class-caps time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnimationHandles {
    pub gear: Option<AnimationHandle>,
    pub engines: Option<AnimationHandle>,
    pub elevator: Option<AnimationHandle>,
    pub elevator_trim: Option<AnimationHandle>,
    pub rudder: Option<AnimationHandle>,
    pub left_aileron: Option<AnimationHandle>,
    pub right_aileron: Option<AnimationHandle>,
}

impl AnimationHandles {
    pub fn for_channel(&self, channel: ControlChannel) -> Option<AnimationHandle> {
        match channel {
            ControlChannel::LeftAileron => self.left_aileron,
            ControlChannel::RightAileron => self.right_aileron,
            ControlChannel::Elevator => self.elevator,
            ControlChannel::ElevatorTrim => self.elevator_trim,
            ControlChannel::Rudder => self.rudder,
        }
    }
}

fn create_channel(host: &mut dyn VesselHost, spec: &AnimationChannelSpec) -> AnimationHandle {
    let animation = host.create_animation(spec.initial_state);
    for component in &spec.components {
        host.add_animation_component(animation, component.start, component.end, &component.rotation);
    }
    animation
}

impl Boeing747 {
    /// Registers every host resource the vessel needs, in host order: animations,
    /// physical parameters, propellant and thrusters, particle streams, airfoils,
    /// control surfaces, beacons and meshes.
    pub(crate) fn register_class_caps(&mut self, host: &mut dyn VesselHost) {
        self.define_animations(host);
        self.define_physics(host);
        self.define_thrusters(host);
        self.define_water_discharge(host);
        self.define_contrails(host);
        self.define_airfoils(host);
        self.define_control_surfaces(host);

        if let Some(lighting) = &self.config.lighting {
            self.lighting.register_beacons(host, lighting);
        }

        self.define_meshes(host);
        info!(
            "{}: class caps registered ({} thrusters, {} airfoils)",
            self.config.name,
            self.handles.main_thrusters.len() + self.handles.retro_thrusters.len(),
            self.handles.airfoils.len()
        );
    }

    fn define_animations(&mut self, host: &mut dyn VesselHost) {
        let animations = &self.config.animations;
        self.handles.animations = AnimationHandles {
            gear: Some(create_channel(host, &animations.gear)),
            engines: Some(create_channel(host, &animations.engines)),
            elevator: Some(create_channel(host, &animations.elevator)),
            elevator_trim: Some(create_channel(host, &animations.elevator_trim)),
            rudder: Some(create_channel(host, &animations.rudder)),
            left_aileron: Some(create_channel(host, &animations.left_aileron)),
            right_aileron: Some(create_channel(host, &animations.right_aileron)),
        };
    }

    fn define_physics(&self, host: &mut dyn VesselHost) {
        let mass = &self.config.mass;
        host.set_size(mass.size);
        host.set_empty_mass(mass.empty_mass);
        host.set_cross_sections(mass.cross_sections);
        host.set_pmi(mass.pmi);
        host.set_max_wheelbrake_force(mass.max_wheelbrake_force);
        host.set_rot_drag(mass.rot_drag);
    }

    fn define_thrusters(&mut self, host: &mut dyn VesselHost) {
        let propulsion = &self.config.propulsion;
        let fuel = host.create_propellant_resource(self.config.mass.fuel_mass);
        self.handles.fuel = Some(fuel);

        let thruster = |position: Vector3<f64>, direction: Vector3<f64>, max_thrust: f64| {
            ThrusterSpec {
                position,
                direction,
                max_thrust,
                propellant: fuel,
                isp: propulsion.isp,
            }
        };
        let forward = Vector3::new(0.0, 0.0, 1.0);

        self.handles.main_thrusters = propulsion
            .engines
            .iter()
            .map(|pos| host.create_thruster(&thruster(*pos, forward, propulsion.max_thrust)))
            .collect();
        self.handles.retro_thrusters = propulsion
            .engines
            .iter()
            .map(|pos| host.create_thruster(&thruster(*pos, -forward, propulsion.retro_thrust())))
            .collect();

        if !self.config.features.engine_control {
            self.engines.main_group = Some(
                host.create_thruster_group(&self.handles.main_thrusters, ThrusterGroupKind::Main),
            );
            self.engines.retro_group = Some(
                host.create_thruster_group(&self.handles.retro_thrusters, ThrusterGroupKind::Retro),
            );
        }
    }

    fn define_water_discharge(&mut self, host: &mut dyn VesselHost) {
        let Some(water) = &self.config.propulsion.water else {
            return;
        };
        let tank = host.create_propellant_resource(water.mass);
        let nozzles: Vec<ThrusterHandle> = water
            .nozzles
            .iter()
            .map(|pos| {
                host.create_thruster(&ThrusterSpec {
                    position: *pos,
                    direction: water.direction,
                    max_thrust: water.max_thrust,
                    propellant: tank,
                    isp: water.isp,
                })
            })
            .collect();
        self.handles.water_group =
            Some(host.create_thruster_group(&nozzles, ThrusterGroupKind::User));
        self.handles.water_exhaust = nozzles
            .iter()
            .zip(&water.nozzles)
            .map(|(thruster, pos)| host.add_exhaust_stream(*thruster, *pos, &water.exhaust))
            .collect();
        self.handles.water = Some(tank);
        self.handles.water_thrusters = nozzles;
    }

    fn define_contrails(&mut self, host: &mut dyn VesselHost) {
        let propulsion = &self.config.propulsion;
        let aft = Vector3::new(0.0, 0.0, -1.0);
        self.handles.contrails = propulsion
            .engines
            .iter()
            .map(|pos| host.add_particle_stream(&propulsion.contrail.stream, *pos, aft))
            .collect();
    }

    fn define_airfoils(&mut self, host: &mut dyn VesselHost) {
        let aero = &self.config.aero_coef;
        self.handles.airfoils = self
            .config
            .geometry
            .surfaces
            .iter()
            .map(|surface| {
                let lift = match surface.orientation {
                    LiftOrientation::Vertical => aero.vertical.clone(),
                    LiftOrientation::Horizontal => aero.horizontal.clone(),
                };
                let model = AirfoilModel::new(lift, surface.aspect_ratio);
                host.create_airfoil(&AirfoilSpec::from_surface(surface, model))
            })
            .collect();
    }

    fn define_control_surfaces(&mut self, host: &mut dyn VesselHost) {
        let animations = self.handles.animations;
        self.handles.control_surfaces = self
            .config
            .geometry
            .control_surfaces
            .iter()
            .map(|spec| host.create_control_surface(spec, animations.for_channel(spec.channel)))
            .collect();
    }

    fn define_meshes(&mut self, host: &mut dyn VesselHost) {
        self.handles.meshes.clear();
        self.handles.exterior_mesh = None;
        for (i, spec) in self.config.meshes.iter().enumerate() {
            match host.load_mesh(&spec.name) {
                Some(mesh) => {
                    let index = host.add_mesh(mesh, spec.visibility);
                    if i == 0 && spec.visibility != MeshVisibility::VirtualCockpit {
                        self.handles.exterior_mesh = Some(index);
                    }
                    self.handles.meshes.push((mesh, index));
                }
                None => warn!("{}: mesh {} could not be loaded", self.config.name, spec.name),
            }
        }
    }
}
