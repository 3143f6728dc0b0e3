use serde::{Deserialize, Serialize};

/// When the host renders a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeshVisibility {
    External,
    VirtualCockpit,
    Always,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeshSpec {
    /// Mesh name, relative to the host mesh directory.
    pub name: String,
    pub visibility: MeshVisibility,
}

impl MeshSpec {
    pub fn new(name: &str, visibility: MeshVisibility) -> Self {
        Self {
            name: name.to_string(),
            visibility,
        }
    }

    pub fn exterior(name: &str) -> Self {
        Self::new(name, MeshVisibility::External)
    }

    pub fn cockpit() -> Self {
        Self::new("Boeing747/Boeing_747_cockpit", MeshVisibility::VirtualCockpit)
    }

    pub fn first_class() -> Self {
        Self::new(
            "Boeing747/Boeing_747_first_class",
            MeshVisibility::VirtualCockpit,
        )
    }
}

/// Sound slots the vessel plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sound {
    EnginesStart,
    EnginesShutdown,
    MainEngines,
    RetroEngines,
    CabinAmbiance,
    GearMovement,
}

/// Where a sound can be heard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Playback {
    BothViewFar,
    BothViewMedium,
    InternalOnly,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundSpec {
    pub sound: Sound,
    pub file: String,
    pub playback: Playback,
}

impl SoundSpec {
    pub fn new(sound: Sound, file: &str, playback: Playback) -> Self {
        Self {
            sound,
            file: file.to_string(),
            playback,
        }
    }

    /// Engine, cabin and (optionally) gear sounds of the 747 sound pack.
    pub fn boeing_747_bank(gear_sound: bool) -> Vec<Self> {
        let mut bank = vec![
            Self::new(
                Sound::EnginesStart,
                "XRSound/Boeing747/747_APU_Start.wav",
                Playback::BothViewFar,
            ),
            Self::new(
                Sound::EnginesShutdown,
                "XRSound/Boeing747/747_APU_Shutdown.wav",
                Playback::BothViewFar,
            ),
            Self::new(
                Sound::MainEngines,
                "XRSound/Boeing747/roar.wav",
                Playback::BothViewFar,
            ),
            Self::new(
                Sound::RetroEngines,
                "XRSound/Boeing747/roar.wav",
                Playback::BothViewFar,
            ),
            Self::new(
                Sound::CabinAmbiance,
                "XRSound/Boeing747/747_cabin_ambiance.wav",
                Playback::InternalOnly,
            ),
        ];
        if gear_sound {
            bank.push(Self::new(
                Sound::GearMovement,
                "XRSound/Default/Gear Whine.wav",
                Playback::BothViewMedium,
            ));
        }
        bank
    }
}
