// src/state.rs

use crate::rendering::scene::RetainedScene;
use crate::rendering::sprite_cache::SpriteCache;
use crate::session::{ModelKind, ModelSession};

/// Orbit state of the viewport. Rotations are radians, pan is pixels,
/// zoom is a factor on the fitted scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub rot_x: f64,
    pub rot_y: f64,
    pub zoom: f64,
    pub pan_x: f64,
    pub pan_y: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            rot_x: 0.0,
            rot_y: 0.0,
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
        }
    }
}

impl ViewState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

pub struct AppState {
    pub session: ModelSession,
    pub scene: RetainedScene,
    pub view: ViewState,
    pub sprites: SpriteCache,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            session: ModelSession::new(),
            scene: RetainedScene::new(),
            view: ViewState::default(),
            sprites: SpriteCache::new(),
        }
    }

    /// Swap the displayed model and restore its default framing.
    pub fn activate(&mut self, kind: ModelKind) {
        self.session.activate(kind, &mut self.scene);
        self.view.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activate_resets_the_view() {
        let mut state = AppState::new();
        state.view.rot_x = 1.0;
        state.view.zoom = 3.0;

        state.activate(ModelKind::Molecule);
        assert_eq!(state.view, ViewState::default());
        assert_eq!(state.session.current(), Some(ModelKind::Molecule));
        assert!(!state.scene.is_empty());
    }
}
