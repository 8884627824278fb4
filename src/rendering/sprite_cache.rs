// src/rendering/sprite_cache.rs

use crate::model::Species;
use gtk4::cairo::ImageSurface;
use std::collections::HashMap;

/// One shaded sphere sprite per species, rendered lazily on first use and
/// reused every frame after. Three entries at most, so no eviction logic.
pub struct SpriteCache {
    cache: HashMap<Species, ImageSurface>,
}

impl SpriteCache {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    pub fn get_or_insert<F>(&mut self, species: Species, create: F) -> ImageSurface
    where
        F: FnOnce() -> ImageSurface,
    {
        self.cache.entry(species).or_insert_with(create).clone()
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl Default for SpriteCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gtk4::cairo::Format;

    fn dummy_surface() -> ImageSurface {
        ImageSurface::create(Format::ARgb32, 4, 4).unwrap()
    }

    #[test]
    fn test_create_runs_once_per_species() {
        let mut cache = SpriteCache::new();
        let mut created = 0;

        for _ in 0..3 {
            cache.get_or_insert(Species::Na, || {
                created += 1;
                dummy_surface()
            });
        }
        assert_eq!(created, 1);
        assert_eq!(cache.len(), 1);

        cache.get_or_insert(Species::Cl, || {
            created += 1;
            dummy_surface()
        });
        assert_eq!(created, 2);
        assert_eq!(cache.len(), 2);
    }
}
