// ============================================================================
// Module : api
// ============================================================================
// Ce module contient le client de l'API qui génère des utilisateurs
// aléatoires (randomuser.me)
// ============================================================================

pub mod randomuser; // Client API randomuser.me

// Re-export des éléments principaux
pub use randomuser::{random_money, RandomUserClient};
