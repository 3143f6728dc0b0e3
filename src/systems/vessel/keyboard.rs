use bevy::prelude::*;

use crate::host::HeadlessHost;
use crate::vessel::{Boeing747, Key, KeyModifiers, VesselCallbacks};

/// Maps a physical key to the vessel key set; anything unbound maps to `Key::Other`.
pub fn key_from_code(code: KeyCode) -> Key {
    match code {
        KeyCode::KeyG => Key::G,
        KeyCode::KeyW => Key::W,
        KeyCode::KeyF => Key::F,
        KeyCode::KeyB => Key::B,
        KeyCode::KeyV => Key::V,
        KeyCode::KeyA => Key::A,
        KeyCode::KeyE => Key::E,
        KeyCode::NumpadEnter => Key::NumpadEnter,
        _ => Key::Other,
    }
}

pub fn modifiers_from_input(keyboard: &ButtonInput<KeyCode>) -> KeyModifiers {
    KeyModifiers {
        ctrl: keyboard.any_pressed([KeyCode::ControlLeft, KeyCode::ControlRight]),
        shift: keyboard.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]),
        alt: keyboard.any_pressed([KeyCode::AltLeft, KeyCode::AltRight]),
    }
}

/// Forwards this frame's key presses and releases to every vessel as buffered keys.
pub fn vessel_keyboard_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut query: Query<(&mut Boeing747, &mut HeadlessHost, Option<&Name>)>,
) {
    let modifiers = modifiers_from_input(&keyboard);
    let events: Vec<(Key, bool)> = keyboard
        .get_just_pressed()
        .map(|code| (key_from_code(*code), true))
        .chain(
            keyboard
                .get_just_released()
                .map(|code| (key_from_code(*code), false)),
        )
        .filter(|(key, _)| *key != Key::Other)
        .collect();
    if events.is_empty() {
        return;
    }

    for (mut vessel, mut host, name) in query.iter_mut() {
        for (key, down) in &events {
            if vessel.consume_buffered_key(&mut *host, *key, *down, modifiers) {
                debug!("{:?} consumed {:?}", name.map(|n| n.as_str()), key);
            }
        }
    }
}

/// Clears the pressed/released edges when no input plugin does it.
pub fn clear_buffered_keys_system(mut keyboard: ResMut<ButtonInput<KeyCode>>) {
    keyboard.clear();
}
