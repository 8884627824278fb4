pub mod painter;
pub mod primitives;
pub mod scene;
pub mod sprite_cache;

// Re-export the draw-callback entry points for the rest of the app
pub use painter::{draw_scene, paint_background};
pub use scene::project;
