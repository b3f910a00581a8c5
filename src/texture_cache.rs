use std::collections::HashMap;
use std::path::Path;

use raylib::core::texture::Texture2D;
use raylib::prelude::*;

/// Owns every GPU texture for the session, keyed by path. Models reference
/// these textures, so the cache must outlive them.
pub struct TextureCache {
    pub map: HashMap<String, Texture2D>,
}

impl TextureCache {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Loads and caches the texture at `path`. A missing or unreadable file
    /// is logged and yields `None`; callers render untextured in that case.
    pub fn load(
        &mut self,
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        path: &Path,
    ) -> Option<&Texture2D> {
        let key = path.to_string_lossy().to_string();
        if !self.map.contains_key(&key) {
            match rl.load_texture(thread, &key) {
                Ok(t) => {
                    t.set_texture_filter(thread, TextureFilter::TEXTURE_FILTER_POINT);
                    t.set_texture_wrap(thread, TextureWrap::TEXTURE_WRAP_REPEAT);
                    self.map.insert(key.clone(), t);
                }
                Err(e) => {
                    log::warn!("texture {} failed to load: {}", key, e);
                    return None;
                }
            }
        }
        self.map.get(&key)
    }
}
