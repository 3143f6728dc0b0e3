use bevy::prelude::*;
use core::fmt::Debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::components::aircraft::config::{
    AircraftAeroCoefficients, AircraftGeometry, AnimationConfig, ConfigError, GearConfig,
    LightingConfig, LiveryConfig, MassModel, MeshSpec, MeshVisibility, PropulsionConfig, SoundSpec,
};

/// Optional behaviours that are not implied by another config section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Features {
    /// NumpadEnter toggles the wheel brakes.
    #[serde(default)]
    pub parking_brake: bool,
    /// Engines are started and stopped by key and persisted; without it the thruster
    /// groups exist for the whole life of the vessel.
    #[serde(default)]
    pub engine_control: bool,
}

/// The full vessel configuration: every per-variant constant and feature flag.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselConfig {
    /// Name of the vessel, defaults to the variant name.
    pub name: String,
    /// Which 747 this is, or `Custom` for file-defined vessels.
    pub variant: VariantType,
    pub mass: MassModel,
    pub geometry: AircraftGeometry,
    pub aero_coef: AircraftAeroCoefficients,
    pub propulsion: PropulsionConfig,
    pub gear: GearConfig,
    pub animations: AnimationConfig,
    /// Meshes in the order they are added; index 0 is the textured exterior.
    pub meshes: Vec<MeshSpec>,
    #[serde(default)]
    pub livery: Option<LiveryConfig>,
    #[serde(default)]
    pub lighting: Option<LightingConfig>,
    #[serde(default)]
    pub sounds: Vec<SoundSpec>,
    #[serde(default)]
    pub features: Features,
}

impl Default for VesselConfig {
    /// The 747-400 is the default, being the variant with every feature but water.
    fn default() -> Self {
        Self::from_programmed(VariantType::B747_400)
    }
}

impl VesselConfig {
    /// Creates a new vessel configuration from a given source.
    ///
    /// # Arguments
    /// * `source` - A `VesselSource` specifying if the configuration is built in
    ///              (`Programmed`) or loaded from a YAML file (`File`).
    ///
    /// # Returns
    /// A `Result` containing the new configuration or an error if the file fails to load
    /// or validate.
    pub fn new(source: VesselSource) -> Result<Self, ConfigError> {
        match source {
            VesselSource::Programmed(variant) => Ok(Self::from_programmed(variant)),
            VesselSource::File(path) => Self::from_file(path),
        }
    }

    /// Creates the configuration of a built-in variant.
    ///
    /// `Custom` variants start from the 747-400 and only take the name.
    pub fn from_programmed(variant: VariantType) -> Self {
        match variant {
            VariantType::B747_100 => Self {
                name: "Boeing747_100".to_string(),
                variant: VariantType::B747_100,
                mass: MassModel::b747_100(),
                geometry: AircraftGeometry::boeing_747(),
                aero_coef: AircraftAeroCoefficients::boeing_747(),
                propulsion: PropulsionConfig::b747_100(),
                gear: GearConfig::boeing_747(),
                animations: AnimationConfig::boeing_747(false),
                meshes: vec![MeshSpec::exterior("Boeing747/Boeing_747_100")],
                livery: None,
                lighting: None,
                sounds: Vec::new(),
                features: Features::default(),
            },
            VariantType::B747SP => Self {
                name: "Boeing747SP".to_string(),
                variant: VariantType::B747SP,
                mass: MassModel::b747_sp(),
                geometry: AircraftGeometry::boeing_747(),
                aero_coef: AircraftAeroCoefficients::boeing_747(),
                propulsion: PropulsionConfig::b747_sp(),
                gear: GearConfig::boeing_747(),
                animations: AnimationConfig::boeing_747(false),
                meshes: vec![MeshSpec::exterior("Boeing747/Boeing_747SP")],
                livery: Some(LiveryConfig::b747_sp()),
                lighting: Some(LightingConfig::b747_sp()),
                sounds: Vec::new(),
                features: Features {
                    parking_brake: true,
                    engine_control: false,
                },
            },
            VariantType::B747_400 => Self {
                name: "Boeing747_400".to_string(),
                variant: VariantType::B747_400,
                mass: MassModel::b747_400(),
                geometry: AircraftGeometry::boeing_747(),
                aero_coef: AircraftAeroCoefficients::boeing_747(),
                propulsion: PropulsionConfig::b747_400(),
                gear: GearConfig::boeing_747(),
                animations: AnimationConfig::boeing_747(true),
                meshes: vec![
                    MeshSpec::exterior("Boeing747/Boeing_747_400"),
                    MeshSpec::cockpit(),
                    MeshSpec::first_class(),
                ],
                livery: Some(LiveryConfig::b747_400()),
                lighting: Some(LightingConfig::b747_full()),
                sounds: SoundSpec::boeing_747_bank(true),
                features: Features {
                    parking_brake: true,
                    engine_control: true,
                },
            },
            VariantType::B747_8 => Self {
                name: "Boeing747_8".to_string(),
                variant: VariantType::B747_8,
                mass: MassModel::b747_8(),
                geometry: AircraftGeometry::boeing_747(),
                aero_coef: AircraftAeroCoefficients::boeing_747(),
                propulsion: PropulsionConfig::b747_8(),
                gear: GearConfig::boeing_747(),
                animations: AnimationConfig::boeing_747(true),
                meshes: vec![
                    MeshSpec::exterior("Boeing747/Boeing_747_8"),
                    MeshSpec::cockpit(),
                    MeshSpec::first_class(),
                ],
                livery: Some(LiveryConfig::b747_8()),
                lighting: Some(LightingConfig::b747_full()),
                sounds: SoundSpec::boeing_747_bank(true),
                features: Features {
                    parking_brake: true,
                    engine_control: true,
                },
            },
            VariantType::Supertanker => Self {
                name: "Boeing747_Supertanker".to_string(),
                variant: VariantType::Supertanker,
                mass: MassModel::b747_supertanker(),
                geometry: AircraftGeometry::boeing_747(),
                aero_coef: AircraftAeroCoefficients::boeing_747(),
                propulsion: PropulsionConfig::b747_supertanker(),
                gear: GearConfig::boeing_747(),
                animations: AnimationConfig::boeing_747(true),
                meshes: vec![
                    MeshSpec::exterior("Boeing747/Boeing_747_Supertanker"),
                    MeshSpec::cockpit(),
                ],
                livery: Some(LiveryConfig::b747_supertanker()),
                lighting: Some(LightingConfig::b747_supertanker()),
                sounds: SoundSpec::boeing_747_bank(false),
                features: Features {
                    parking_brake: true,
                    engine_control: true,
                },
            },
            VariantType::Custom(name) => Self {
                name: name.clone(),
                variant: VariantType::Custom(name),
                ..Self::from_programmed(VariantType::B747_400)
            },
        }
    }

    /// Creates a vessel configuration by reading a YAML file.
    ///
    /// # Arguments
    /// * `path` - Path to the YAML configuration file.
    ///
    /// # Returns
    /// A `Result` containing the validated configuration.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file_contents = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&file_contents)?;
        info!("Loaded vessel config '{}' from {}", config.name, path.display());
        Ok(config)
    }

    /// Whether the virtual cockpit mesh is part of this vessel.
    pub fn has_cockpit(&self) -> bool {
        self.meshes
            .iter()
            .any(|m| m.visibility == MeshVisibility::VirtualCockpit)
    }
}

/// Where a vessel configuration comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VesselSource {
    Programmed(VariantType),
    File(PathBuf),
}

/// The 747 variants the crate knows about.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VariantType {
    B747_100,
    B747SP,
    B747_400,
    B747_8,
    Supertanker,
    Custom(String),
}

impl VariantType {
    /// Resolves a host vessel class name such as `Boeing747_400`.
    pub fn from_class_name(class_name: &str) -> Option<Self> {
        let normalized = class_name.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "boeing747_100" | "b747_100" => Some(Self::B747_100),
            "boeing747sp" | "boeing747_sp" | "b747sp" => Some(Self::B747SP),
            "boeing747_400" | "b747_400" => Some(Self::B747_400),
            "boeing747_8" | "b747_8" => Some(Self::B747_8),
            "boeing747_supertanker" | "b747_supertanker" | "b747st" => Some(Self::Supertanker),
            _ => None,
        }
    }

    /// Host class name of the variant.
    pub fn class_name(&self) -> &str {
        match self {
            Self::B747_100 => "Boeing747_100",
            Self::B747SP => "Boeing747SP",
            Self::B747_400 => "Boeing747_400",
            Self::B747_8 => "Boeing747_8",
            Self::Supertanker => "Boeing747_Supertanker",
            Self::Custom(name) => name,
        }
    }

    /// All built-in variants.
    pub fn builtin() -> [VariantType; 5] {
        [
            Self::B747_100,
            Self::B747SP,
            Self::B747_400,
            Self::B747_8,
            Self::Supertanker,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_name_resolution() {
        assert_eq!(
            VariantType::from_class_name("Boeing747_8"),
            Some(VariantType::B747_8)
        );
        assert_eq!(
            VariantType::from_class_name("boeing747sp"),
            Some(VariantType::B747SP)
        );
        assert_eq!(
            VariantType::from_class_name("B747-400"),
            Some(VariantType::B747_400)
        );
        assert_eq!(VariantType::from_class_name("DeltaGlider"), None);
    }

    #[test]
    fn test_class_names_round_trip() {
        for variant in VariantType::builtin() {
            assert_eq!(
                VariantType::from_class_name(variant.class_name()),
                Some(variant)
            );
        }
    }

    #[test]
    fn test_feature_matrix() {
        let b100 = VesselConfig::from_programmed(VariantType::B747_100);
        assert!(b100.livery.is_none());
        assert!(b100.lighting.is_none());
        assert!(!b100.features.engine_control);
        assert!(!b100.features.parking_brake);

        let sp = VesselConfig::from_programmed(VariantType::B747SP);
        assert!(sp.features.parking_brake);
        assert!(!sp.features.engine_control);
        assert_eq!(sp.livery.as_ref().map(|l| l.persist), Some(false));

        let b8 = VesselConfig::from_programmed(VariantType::B747_8);
        assert!(b8.features.engine_control);
        assert_eq!(b8.livery.as_ref().map(|l| l.skin_count), Some(15));
        assert!(b8.has_cockpit());

        let st = VesselConfig::from_programmed(VariantType::Supertanker);
        assert!(st.propulsion.water.is_some());
        assert_eq!(st.livery.as_ref().map(|l| l.skin_count), Some(2));
    }

    #[test]
    fn test_custom_variant_keeps_name() {
        let config = VesselConfig::from_programmed(VariantType::Custom("Cargo".to_string()));
        assert_eq!(config.name, "Cargo");
        assert_eq!(config.variant.class_name(), "Cargo");
    }
}
