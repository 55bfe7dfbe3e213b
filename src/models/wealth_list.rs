// ============================================================================
// Structure : WealthList
// ============================================================================
// Liste ordonnée des utilisateurs et de leur fortune
//
// CONCEPTS RUST :
// 1. Newtype pattern : Vec<UserRecord> enveloppé dans une struct
// 2. Transformations pures : chaque opération retourne une NOUVELLE liste
//    (map / filter / sum avec les itérateurs), l'appelant réassigne
// 3. Tri stable : sort_by garde l'ordre relatif des égalités
//
// L'ordre d'insertion est l'ordre d'affichage, sauf après un tri explicite.
// La liste ne grandit que par push_user() et ne rétrécit que par millionaires().
// ============================================================================

use crate::models::UserRecord;

/// Liste des utilisateurs affichés
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WealthList {
    users: Vec<UserRecord>,
}

impl WealthList {
    /// Crée une liste vide
    pub fn new() -> Self {
        Self::default()
    }

    /// Ajoute un utilisateur en fin de liste
    pub fn push_user(&mut self, user: UserRecord) {
        self.users.push(user);
    }

    /// Nouvelle liste où chaque fortune est doublée
    ///
    /// CONCEPT RUST : Iterator map + collect
    /// - La longueur et l'ordre sont préservés
    pub fn doubled(&self) -> WealthList {
        self.users.iter().map(UserRecord::with_doubled_money).collect()
    }

    /// Nouvelle liste triée par fortune décroissante
    ///
    /// CONCEPT RUST : sort_by avec f64::total_cmp
    /// - f64 n'implémente pas Ord (à cause de NaN)
    /// - total_cmp() fournit un ordre total
    /// - sort_by() est stable : à fortune égale, l'ordre précédent est conservé
    pub fn sorted_by_wealth_desc(&self) -> WealthList {
        let mut users = self.users.clone();
        users.sort_by(|a, b| b.money.total_cmp(&a.money));
        Self { users }
    }

    /// Nouvelle liste ne gardant que les millionnaires (fortune > 1 000 000)
    pub fn millionaires(&self) -> WealthList {
        self.users
            .iter()
            .filter(|user| user.is_millionaire())
            .cloned()
            .collect()
    }

    /// Somme des fortunes de la liste
    pub fn total_wealth(&self) -> f64 {
        self.users.iter().map(|user| user.money).sum()
    }

    /// Accès en lecture aux utilisateurs
    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    /// Retourne un utilisateur par index
    pub fn get(&self, index: usize) -> Option<&UserRecord> {
        self.users.get(index)
    }

    /// Itérateur sur les utilisateurs
    pub fn iter(&self) -> std::slice::Iter<'_, UserRecord> {
        self.users.iter()
    }

    /// Nombre d'utilisateurs
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Vérifie si la liste est vide
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

// ============================================================================
// Conversions
// ============================================================================
// CONCEPT RUST : FromIterator et From
// - FromIterator permet d'écrire iter.collect::<WealthList>()
// - From<Vec<_>> permet WealthList::from(vec![...])
// ============================================================================

impl FromIterator<UserRecord> for WealthList {
    fn from_iter<I: IntoIterator<Item = UserRecord>>(iter: I) -> Self {
        Self {
            users: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<UserRecord>> for WealthList {
    fn from(users: Vec<UserRecord>) -> Self {
        Self { users }
    }
}

impl<'a> IntoIterator for &'a WealthList {
    type Item = &'a UserRecord;
    type IntoIter = std::slice::Iter<'a, UserRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.users.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> WealthList {
        WealthList::from(vec![
            UserRecord::new("Alice Martin", 300_000.0),
            UserRecord::new("Bob Durand", 1_500_000.0),
            UserRecord::new("Chloé Bernard", 1_000_000.0),
            UserRecord::new("David Petit", 750_000.0),
        ])
    }

    #[test]
    fn test_push_user_appends_in_order() {
        let mut list = WealthList::new();
        assert!(list.is_empty());

        list.push_user(UserRecord::new("A", 1.0));
        list.push_user(UserRecord::new("B", 2.0));

        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0).unwrap().name, "A");
        assert_eq!(list.get(1).unwrap().name, "B");
    }

    #[test]
    fn test_doubled_preserves_length_and_order() {
        let list = sample();
        let doubled = list.doubled();

        assert_eq!(doubled.len(), list.len());
        for (before, after) in list.iter().zip(doubled.iter()) {
            assert_eq!(after.name, before.name);
            assert_eq!(after.money, 2.0 * before.money);
        }
    }

    #[test]
    fn test_sorted_by_wealth_desc_is_non_increasing() {
        let sorted = sample().sorted_by_wealth_desc();

        assert_eq!(sorted.len(), 4);
        assert!(sorted
            .users()
            .windows(2)
            .all(|pair| pair[0].money >= pair[1].money));
        assert_eq!(sorted.get(0).unwrap().name, "Bob Durand");
    }

    #[test]
    fn test_sorted_by_wealth_desc_keeps_ties_in_prior_order() {
        let list = WealthList::from(vec![
            UserRecord::new("First", 10.0),
            UserRecord::new("Rich", 50.0),
            UserRecord::new("Second", 10.0),
        ]);

        let sorted = list.sorted_by_wealth_desc();
        let names: Vec<&str> = sorted.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Rich", "First", "Second"]);
    }

    #[test]
    fn test_millionaires_excludes_exact_million() {
        let rich = sample().millionaires();

        assert_eq!(rich.len(), 1);
        assert_eq!(rich.get(0).unwrap().name, "Bob Durand");
        assert!(rich.iter().all(|u| u.money > 1_000_000.0));
    }

    #[test]
    fn test_millionaires_on_empty_list() {
        assert!(WealthList::new().millionaires().is_empty());
    }

    #[test]
    fn test_total_wealth() {
        assert_eq!(sample().total_wealth(), 3_550_000.0);
        assert_eq!(WealthList::new().total_wealth(), 0.0);
    }

    #[test]
    fn test_transformations_leave_source_untouched() {
        let list = sample();
        let _ = list.doubled();
        let _ = list.sorted_by_wealth_desc();
        let _ = list.millionaires();

        assert_eq!(list, sample());
    }
}
