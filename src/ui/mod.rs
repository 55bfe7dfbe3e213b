// ============================================================================
// Module : ui
// ============================================================================
// Gère toute l'interface utilisateur (Terminal User Interface)
// ============================================================================

pub mod events;    // Gestion des événements clavier
pub mod view;      // Construction des lignes à afficher (pur, sans terminal)
pub mod dashboard; // Rendu ratatui de l'interface principale

// Re-exports pour simplifier les imports
pub use events::{Event, EventHandler};
pub use dashboard::render;
pub use view::{View, ViewLine};
