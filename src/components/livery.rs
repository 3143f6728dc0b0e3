use bevy::prelude::*;
use thiserror::Error;

use crate::components::LiveryConfig;
use crate::host::{DevMeshHandle, TextureHandle, VesselHost};

#[derive(Error, Debug)]
pub enum LiveryError {
    #[error("Failed to read skin list {path}: {source}")]
    SkinList {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Skin list {path} has no entry {key}")]
    MissingKey { path: String, key: String },
    #[error("Skin index {index} is out of range for {count} skins")]
    IndexOutOfRange { index: usize, count: usize },
}

/// Parsed `KEY = value` skin-list file.
///
/// Keys are matched case-insensitively, `;` starts a comment and lines without `=` are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkinList {
    entries: Vec<(String, String)>,
}

impl SkinList {
    pub fn parse(contents: &str) -> Self {
        let entries = contents
            .lines()
            .filter_map(|line| {
                let line = line.split(';').next().unwrap_or_default();
                let (key, value) = line.split_once('=')?;
                let key = key.trim();
                if key.is_empty() {
                    return None;
                }
                Some((key.to_ascii_uppercase(), value.trim().to_string()))
            })
            .collect();
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        let key = key.to_ascii_uppercase();
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Key of the zero-based skin index, `SKIN1` for index 0.
    pub fn key_for(index: usize) -> String {
        format!("SKIN{}", index + 1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Current skin selection and the textures loaded for it, one slot per livery surface.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct LiveryState {
    /// Index of the next skin to load.
    pub index: usize,
    /// Name of the skin currently shown, if one was selected.
    pub skin_name: Option<String>,
    pub textures: Vec<Option<TextureHandle>>,
}

impl LiveryState {
    pub fn new(surface_count: usize) -> Self {
        Self {
            index: 0,
            skin_name: None,
            textures: vec![None; surface_count],
        }
    }

    /// Index to load on the next cycle, wrapping to 0 once `count` is reached.
    pub fn wrap_index(&mut self, count: usize) -> usize {
        if self.index >= count {
            self.index = 0;
        }
        self.index
    }

    /// Reads the name of skin `index` from the skin-list file.
    pub fn read_skin_name<H: VesselHost + ?Sized>(
        host: &H,
        config: &LiveryConfig,
        index: usize,
    ) -> Result<String, LiveryError> {
        if index >= config.skin_count {
            return Err(LiveryError::IndexOutOfRange {
                index,
                count: config.skin_count,
            });
        }
        let contents =
            host.read_root_file(&config.skin_list_file)
                .map_err(|source| LiveryError::SkinList {
                    path: config.skin_list_file.clone(),
                    source,
                })?;
        let key = SkinList::key_for(index);
        SkinList::parse(&contents)
            .get(&key)
            .map(str::to_string)
            .ok_or(LiveryError::MissingKey {
                path: config.skin_list_file.clone(),
                key,
            })
    }

    /// Loads every surface texture of `skin_name`. Slots whose texture fails to load
    /// keep their previous texture. Returns the number of textures loaded.
    pub fn load_skin<H: VesselHost + ?Sized>(
        &mut self,
        host: &mut H,
        config: &LiveryConfig,
        skin_name: &str,
    ) -> usize {
        self.textures.resize(config.surfaces.len(), None);
        let mut loaded = 0;
        for (slot, surface) in self.textures.iter_mut().zip(&config.surfaces) {
            let path = config.texture_path(skin_name, surface);
            match host.load_texture(&path) {
                Some(texture) => {
                    *slot = Some(texture);
                    loaded += 1;
                }
                None => warn!("Texture {} could not be loaded", path),
            }
        }
        self.skin_name = Some(skin_name.to_string());
        loaded
    }

    /// Applies every loaded texture to its material slot of `mesh`.
    pub fn apply<H: VesselHost + ?Sized>(
        &self,
        host: &mut H,
        config: &LiveryConfig,
        mesh: DevMeshHandle,
    ) -> usize {
        self.textures
            .iter()
            .zip(&config.surfaces)
            .filter_map(|(texture, surface)| texture.map(|t| (t, surface.material)))
            .filter(|(texture, material)| host.set_texture(mesh, *material, *texture))
            .count()
    }
}
