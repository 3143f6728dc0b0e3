use serde::{Deserialize, Serialize};

use crate::components::aircraft::config::ConfigError;

/// One textured part of the airframe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiverySurface {
    /// Appended to `<skin_dir><skin_name>` to form the texture path.
    pub suffix: String,
    /// Material slot of the exterior mesh the texture replaces.
    pub material: u32,
}

impl LiverySurface {
    pub fn new(suffix: &str, material: u32) -> Self {
        Self {
            suffix: suffix.to_string(),
            material,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveryConfig {
    /// Skin-list file, relative to the host root directory.
    pub skin_list_file: String,
    /// Directory prefix of every skin, relative to the host texture directory.
    pub skin_dir: String,
    /// Number of `SKIN<n>` entries cycled through.
    pub skin_count: usize,
    pub surfaces: Vec<LiverySurface>,
    /// Whether the selected skin is written to and read from scenarios.
    #[serde(default)]
    pub persist: bool,
}

impl LiveryConfig {
    fn slots_8_400() -> Vec<LiverySurface> {
        vec![
            LiverySurface::new("/Fuselage.dds", 1),
            LiverySurface::new("/Vertical_stabilizer.dds", 2),
            LiverySurface::new("/Right_wing.dds", 3),
            LiverySurface::new("/Left_wing.dds", 8),
            LiverySurface::new("/ENG1.dds", 9),
        ]
    }

    fn slots_sp_tanker() -> Vec<LiverySurface> {
        vec![
            LiverySurface::new("/Fuselage.dds", 1),
            LiverySurface::new("/Vertical_stabilizer.dds", 2),
            LiverySurface::new("/Right_wing.dds", 3),
            LiverySurface::new("/ENG1.dds", 4),
            LiverySurface::new("/Left_wing.dds", 9),
        ]
    }

    pub fn b747_8() -> Self {
        Self {
            skin_list_file: "B7478_skins.txt".to_string(),
            skin_dir: "Boeing_747/B747_8/Skins/".to_string(),
            skin_count: 15,
            surfaces: Self::slots_8_400(),
            persist: true,
        }
    }

    pub fn b747_400() -> Self {
        Self {
            skin_list_file: "B747400_skins.txt".to_string(),
            skin_dir: "Boeing_747/B747_400/Skins/".to_string(),
            skin_count: 15,
            surfaces: Self::slots_8_400(),
            persist: true,
        }
    }

    pub fn b747_sp() -> Self {
        Self {
            skin_list_file: "skins.txt".to_string(),
            skin_dir: "Boeing_747/B747SP/Skins/".to_string(),
            skin_count: 2,
            surfaces: Self::slots_sp_tanker(),
            persist: false,
        }
    }

    pub fn b747_supertanker() -> Self {
        Self {
            skin_list_file: "B747ST_skins.txt".to_string(),
            skin_dir: "Boeing_747/B747_Supertanker/Skins/".to_string(),
            skin_count: 2,
            surfaces: Self::slots_sp_tanker(),
            persist: false,
        }
    }

    /// Texture path of one surface for the named skin.
    pub fn texture_path(&self, skin_name: &str, surface: &LiverySurface) -> String {
        format!("{}{}{}", self.skin_dir, skin_name, surface.suffix)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.skin_count == 0 {
            return Err(ConfigError::ValidationError(
                "livery needs at least one skin".to_string(),
            ));
        }
        if self.surfaces.is_empty() {
            return Err(ConfigError::ValidationError(
                "livery needs at least one surface".to_string(),
            ));
        }
        Ok(())
    }
}
