/// Keys the vessel reacts to. Everything else maps to `Other` and is not consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    G,
    W,
    F,
    B,
    V,
    A,
    E,
    NumpadEnter,
    Other,
}

/// Modifier state sampled with a buffered key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyModifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyModifiers {
    pub const NONE: Self = Self {
        ctrl: false,
        shift: false,
        alt: false,
    };

    pub const CTRL: Self = Self {
        ctrl: true,
        shift: false,
        alt: false,
    };
}

/// What a buffered key asks the vessel to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCommand {
    ToggleGear,
    ToggleParkingBrake,
    ToggleWaterDischarge,
    ToggleLights,
    ToggleBeacons,
    NextSkin,
    StartEngines,
    StopEngines,
}

impl KeyCommand {
    /// Decodes a key-down event. Plain letter keys ignore modifiers except that
    /// Ctrl+A and Ctrl+E are engine commands.
    pub fn decode(key: Key, modifiers: KeyModifiers) -> Option<Self> {
        match key {
            Key::G => Some(Self::ToggleGear),
            Key::NumpadEnter => Some(Self::ToggleParkingBrake),
            Key::W => Some(Self::ToggleWaterDischarge),
            Key::F => Some(Self::ToggleLights),
            Key::B => Some(Self::ToggleBeacons),
            Key::V => Some(Self::NextSkin),
            Key::A if modifiers.ctrl => Some(Self::StartEngines),
            Key::E if modifiers.ctrl => Some(Self::StopEngines),
            _ => None,
        }
    }
}
