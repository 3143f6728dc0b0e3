use std::time::Duration;

use bevy::{prelude::*, time::TimeUpdateStrategy};
use jumbo::{
    components::{FlightConditions, VariantType, VesselConfig},
    host::HeadlessHost,
    plugins::{VesselPlugin, VesselSpawn},
    utils::constants::VESSEL_TIMESTEP,
    vessel::Boeing747,
};

// Builder for creating a test application with customizable configuration
pub struct TestAppBuilder {
    vessels: Vec<VesselSpawn>,
    time_step: f64,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            vessels: Vec::new(),
            time_step: VESSEL_TIMESTEP,
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_variant(self, variant: VariantType) -> Self {
        self.with_vessel(VesselSpawn::new(VesselConfig::from_programmed(variant)))
    }

    pub fn with_vessel(mut self, spawn: VesselSpawn) -> Self {
        self.vessels.push(spawn);
        self
    }

    pub fn with_conditions(mut self, conditions: FlightConditions) -> Self {
        if let Some(last) = self.vessels.pop() {
            self.vessels.push(last.with_conditions(conditions));
        }
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();

        // One fixed step per update
        app.add_plugins(MinimalPlugins)
            .add_plugins(VesselPlugin::new(self.vessels).with_timestep(self.time_step))
            .insert_resource(TimeUpdateStrategy::ManualDuration(
                Duration::from_secs_f64(self.time_step),
            ));

        // Run an initial update to initialize everything
        app.update();

        TestApp {
            app,
            time_step: self.time_step,
        }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
    pub time_step: f64,
}

impl TestApp {
    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.app.update();
        }
    }

    /// Runs enough fixed steps to cover `seconds` of simulation time.
    pub fn run_seconds(&mut self, seconds: f64) {
        let steps = (seconds / self.time_step).ceil() as usize;
        self.run_steps(steps);
    }

    pub fn run_frame(&mut self) {
        self.app.update();
    }

    /// Presses and releases a key over two frames, holding `modifiers` down meanwhile.
    pub fn tap(&mut self, key: KeyCode, modifiers: &[KeyCode]) {
        {
            let mut keyboard = self.app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
            for modifier in modifiers {
                keyboard.press(*modifier);
            }
            keyboard.press(key);
        }
        self.app.update();
        {
            let mut keyboard = self.app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
            keyboard.release(key);
            for modifier in modifiers {
                keyboard.release(*modifier);
            }
        }
        self.app.update();
    }

    pub fn query_single<T: Component>(&mut self) -> Option<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.get_single(world).ok()
    }

    pub fn query_single_mut<T: Component>(&mut self) -> Option<Mut<T>> {
        let world = self.app.world_mut();
        let mut query = world.query::<&mut T>();
        query.get_single_mut(world).ok()
    }

    pub fn query_all<T: Component>(&mut self) -> Vec<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.iter(world).collect()
    }

    /// The single vessel and its host.
    pub fn vessel(&mut self) -> (&Boeing747, &HeadlessHost) {
        let world = self.app.world_mut();
        let mut query = world.query::<(&Boeing747, &HeadlessHost)>();
        match query.get_single(world) {
            Ok(pair) => pair,
            Err(err) => panic!("expected exactly one vessel: {err}"),
        }
    }
}
