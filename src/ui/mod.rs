pub mod interactions;
pub mod legend;
pub mod menu;

// Re-exports
pub use interactions::setup_interactions;
pub use legend::ModelPanel;
pub use menu::build_menu_and_actions;
