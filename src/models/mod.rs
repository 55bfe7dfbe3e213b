// ============================================================================
// Module : models
// ============================================================================
// Ce module contient toutes les structures de données de l'application
//
// CONCEPT RUST : Modules et visibilité
// - "pub mod" : déclare un sous-module publique (accessible depuis l'extérieur)
// - Sans "pub", le module serait privé au crate
// ============================================================================

pub mod money;       // Formatage monétaire (fichier money.rs)
pub mod user_record; // Un utilisateur et sa fortune (fichier user_record.rs)
pub mod wealth_list; // Liste des utilisateurs et transformations (fichier wealth_list.rs)

// Re-export des structures principales pour simplifier les imports
// Au lieu de : use lazywealth::models::wealth_list::WealthList;
// On peut faire : use lazywealth::models::WealthList;
pub use money::format_money;
pub use user_record::{UserRecord, MILLIONAIRE_THRESHOLD};
pub use wealth_list::WealthList;
