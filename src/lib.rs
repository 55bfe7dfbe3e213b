// ============================================================================
// LazyWealth - Library
// ============================================================================
// Expose les modules publics pour le binaire et les tests
// ============================================================================

pub mod api;       // API randomuser.me
pub mod config;    // Configuration (variables d'environnement)
pub mod models;    // Structures de données
pub mod app;       // État de l'application
pub mod ui;        // Interface utilisateur
