// ============================================================================
// Structure : UserRecord
// ============================================================================
// Une personne de la liste : un nom et une fortune
//
// CONCEPTS RUST :
// 1. Value object : pas de setter, on crée un nouveau record pour "modifier"
// 2. f64 : montant en dollars (précision au centime non requise)
// ============================================================================

use crate::models::format_money;

/// Seuil strict au-delà duquel un utilisateur est millionnaire
pub const MILLIONAIRE_THRESHOLD: f64 = 1_000_000.0;

/// Un utilisateur et sa fortune
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    /// Nom complet (ex: "Jane Doe")
    pub name: String,

    /// Fortune en dollars (toujours >= 0)
    pub money: f64,
}

impl UserRecord {
    /// Crée un nouveau record
    pub fn new(name: impl Into<String>, money: f64) -> Self {
        Self {
            name: name.into(),
            money,
        }
    }

    /// Retourne une copie du record avec la fortune multipliée par 2
    ///
    /// CONCEPT RUST : Struct update syntax
    /// - `..self.clone()` recopie les champs non mentionnés
    pub fn with_doubled_money(&self) -> Self {
        Self {
            money: self.money * 2.0,
            ..self.clone()
        }
    }

    /// Vrai si la fortune dépasse strictement un million
    pub fn is_millionaire(&self) -> bool {
        self.money > MILLIONAIRE_THRESHOLD
    }

    /// Fortune formatée pour l'affichage ("$1,234.00")
    pub fn formatted_money(&self) -> String {
        format_money(self.money)
    }
}
