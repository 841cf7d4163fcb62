//! Loaded textures keyed by string IDs.
//!
//! Textures must be created and dropped on the thread that owns the raylib
//! window, so the store is inserted as a non-send resource next to the raylib
//! handle and read by the renderer through `NonSend<TextureStore>`.
use raylib::prelude::{RaylibHandle, RaylibThread, Texture2D};
use rustc_hash::FxHashMap;

#[derive(Default)]
pub struct TextureStore {
    map: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, texture: Texture2D) {
        self.map.insert(key.into(), texture);
    }

    pub fn get(&self, key: &str) -> Option<&Texture2D> {
        self.map.get(key)
    }

    /// Load `path` under `key`. Failures are logged and the key is left empty;
    /// the renderer skips sprites whose texture is missing.
    pub fn load(
        &mut self,
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        key: &str,
        path: &str,
    ) -> Result<(), String> {
        let texture = rl
            .load_texture(thread, path)
            .map_err(|e| format!("Failed to load texture '{}' from {}: {}", key, path, e))?;
        log::info!("Loaded texture '{}' ({}x{})", key, texture.width, texture.height);
        self.insert(key, texture);
        Ok(())
    }
}
