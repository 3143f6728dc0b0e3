use std::env;
use std::path::PathBuf;
use std::time::Duration;

use bevy::{log::LogPlugin, prelude::*, time::TimeUpdateStrategy};

use jumbo::{
    components::{FlightConditions, VariantType, VesselConfig, VesselSource},
    host::{HeadlessHost, ScenarioWriter},
    plugins::{VesselPlugin, VesselSpawn},
    utils::constants::VESSEL_TIMESTEP,
    vessel::{Boeing747, Key, KeyModifiers, VesselCallbacks},
};

const DEFAULT_STEPS: usize = 1200;

/// Resolves the first argument to a config: a built-in class name or a YAML file.
fn load_config(arg: Option<&str>) -> Result<VesselConfig, Box<dyn std::error::Error>> {
    let source = match arg {
        None => VesselSource::Programmed(VariantType::B747_400),
        Some(arg) if arg.ends_with(".yaml") || arg.ends_with(".yml") => {
            VesselSource::File(PathBuf::from(arg))
        }
        Some(arg) => VesselSource::Programmed(
            VariantType::from_class_name(arg).unwrap_or_else(|| VariantType::Custom(arg.into())),
        ),
    };
    let config = VesselConfig::new(source)?;
    config.validate()?;
    Ok(config)
}

/// Sends one key-down to every vessel, as the host would from its input queue.
fn press(app: &mut App, key: Key, modifiers: KeyModifiers) {
    let world = app.world_mut();
    let mut query = world.query::<(&mut Boeing747, &mut HeadlessHost)>();
    for (mut vessel, mut host) in query.iter_mut(world) {
        vessel.consume_buffered_key(&mut *host, key, true, modifiers);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    let config = load_config(args.first().map(String::as_str))?;
    let steps = match args.get(1) {
        Some(steps) => steps.parse()?,
        None => DEFAULT_STEPS,
    };

    let spawn = VesselSpawn::new(config)
        .with_conditions(FlightConditions::cruise())
        .with_root_dir(env::current_dir()?);

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()))
        .add_plugins(VesselPlugin::new(vec![spawn]))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            VESSEL_TIMESTEP,
        )));
    app.update();

    press(&mut app, Key::A, KeyModifiers::CTRL);
    press(&mut app, Key::G, KeyModifiers::NONE);
    press(&mut app, Key::B, KeyModifiers::NONE);
    for _ in 0..steps {
        app.update();
    }

    let world = app.world_mut();
    let mut query = world.query::<(&Boeing747, &HeadlessHost)>();
    for (vessel, host) in query.iter(world) {
        let mut writer = ScenarioWriter::new();
        vessel.save_state(host, &mut writer);
        println!("BEGIN {}", vessel.config().name);
        println!("{}", writer.to_block());
        println!("END");
    }
    Ok(())
}
