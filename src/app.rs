// ============================================================================
// Structure : App
// ============================================================================
// Gère l'état de l'application TUI
//
// CONCEPTS RUST :
// 1. State Management : tout l'état dans une seule structure
// 2. Ownership : l'event loop possède App et le passe explicitement
//    (&mut App) aux handlers et (&App) au rendu, pas d'état global
// 3. Réassignation explicite : self.list = self.list.doubled()
//
// PATTERN : "transformation puis rendu"
// - Chaque action transforme la WealthList (fonction pure)
// - Puis la vue est reconstruite explicitement (refresh_view)
// ============================================================================

use chrono::{DateTime, Local};

use crate::models::{UserRecord, WealthList};
use crate::ui::view::{self, View};

/// Durée d'affichage d'un message de statut
const STATUS_TTL_SECS: i64 = 8;

/// Gravité d'un message de statut
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// Message affiché dans le footer (ex: erreur de chargement)
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    pub at: DateTime<Local>,
}

impl StatusMessage {
    /// Texte horodaté : "[14:32:07] message"
    pub fn display(&self) -> String {
        format!("[{}] {}", self.at.format("%H:%M:%S"), self.text)
    }
}

/// État principal de l'application
pub struct App {
    /// Indique si l'application doit continuer à tourner
    pub running: bool,

    /// Liste des utilisateurs (source de vérité)
    pub list: WealthList,

    /// Vue affichée, reconstruite après chaque transformation
    /// CONCEPT : la vue peut contenir des lignes de total en plus de la liste
    pub view: View,

    /// Index de la personne surlignée dans la vue
    pub selected_index: usize,

    /// Two-step quit : première pression de 'q' arme la confirmation
    pub confirm_quit: bool,

    /// Nombre de requêtes d'ajout en cours dans le worker
    pub pending_fetches: usize,

    /// Dernier message de statut (None si rien à afficher)
    pub status: Option<StatusMessage>,
}

impl App {
    /// Crée une App avec une liste vide
    pub fn new() -> Self {
        Self::with_users(WealthList::new())
    }

    /// Crée une App avec des utilisateurs préchargés
    pub fn with_users(list: WealthList) -> Self {
        let view = view::render(&list);
        Self {
            running: true,
            list,
            view,
            selected_index: 0,
            confirm_quit: false,
            pending_fetches: 0,
            status: None,
        }
    }

    // ========================================================================
    // Opérations sur la liste
    // ========================================================================

    /// Ajoute un utilisateur en fin de liste puis re-rend
    pub fn add_user(&mut self, user: UserRecord) {
        self.list.push_user(user);
        self.refresh_view();
    }

    /// Double la fortune de tout le monde puis re-rend
    pub fn double_money(&mut self) {
        self.list = self.list.doubled();
        self.refresh_view();
    }

    /// Trie par fortune décroissante puis re-rend
    pub fn sort_by_richest(&mut self) {
        self.list = self.list.sorted_by_wealth_desc();
        self.refresh_view();
    }

    /// Ne garde que les millionnaires puis re-rend
    pub fn show_millionaires(&mut self) {
        self.list = self.list.millionaires();
        self.refresh_view();
    }

    /// Calcule la fortune totale et ajoute une ligne de total à la vue
    ///
    /// CONCEPT : pas de refresh_view() ici
    /// - Les lignes déjà affichées restent (y compris les totaux précédents)
    pub fn calculate_wealth(&mut self) -> f64 {
        let total = self.list.total_wealth();
        self.view.append_total(total);
        total
    }

    /// Reconstruit la vue depuis la liste
    ///
    /// Ajuste aussi la sélection si la liste a rétréci
    pub fn refresh_view(&mut self) {
        self.view = view::render(&self.list);
        let max_index = self.list.len().saturating_sub(1);
        self.selected_index = self.selected_index.min(max_index);
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Remonte la sélection (saturating_sub : ne descend pas sous 0)
    pub fn navigate_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Descend la sélection, bornée au dernier utilisateur
    pub fn navigate_down(&mut self) {
        let max_index = self.list.len().saturating_sub(1);
        self.selected_index = (self.selected_index + 1).min(max_index);
    }

    /// Utilisateur surligné
    pub fn selected_user(&self) -> Option<&UserRecord> {
        self.list.get(self.selected_index)
    }

    // ========================================================================
    // Cycle de vie
    // ========================================================================

    /// Quitte l'application
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Vérifie si l'application doit continuer
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Arme la confirmation de quit
    pub fn request_quit(&mut self) {
        self.confirm_quit = true;
    }

    /// Annule la confirmation de quit
    pub fn cancel_quit(&mut self) {
        self.confirm_quit = false;
    }

    /// Vérifie si on attend la confirmation de quit
    pub fn is_awaiting_quit_confirmation(&self) -> bool {
        self.confirm_quit
    }

    /// Tick : appelé à chaque itération de la boucle
    ///
    /// Efface le message de statut une fois expiré
    pub fn tick(&mut self) {
        self.tick_at(Local::now());
    }

    /// Variante de tick() avec une horloge explicite (testable)
    pub fn tick_at(&mut self, now: DateTime<Local>) {
        let expired = self
            .status
            .as_ref()
            .map(|status| now - status.at >= chrono::Duration::seconds(STATUS_TTL_SECS))
            .unwrap_or(false);

        if expired {
            self.status = None;
        }
    }

    // ========================================================================
    // Chargement en arrière-plan
    // ========================================================================

    /// Une requête d'ajout part vers le worker
    pub fn start_fetch(&mut self) {
        self.pending_fetches += 1;
    }

    /// Une requête d'ajout est terminée (succès ou échec)
    pub fn finish_fetch(&mut self) {
        self.pending_fetches = self.pending_fetches.saturating_sub(1);
    }

    /// Vérifie si des requêtes sont en cours
    pub fn is_loading(&self) -> bool {
        self.pending_fetches > 0
    }

    // ========================================================================
    // Messages de statut
    // ========================================================================

    /// Affiche un message d'information
    pub fn set_info(&mut self, text: impl Into<String>) {
        self.set_status(text.into(), StatusKind::Info);
    }

    /// Affiche un message d'erreur
    pub fn set_error(&mut self, text: impl Into<String>) {
        self.set_status(text.into(), StatusKind::Error);
    }

    fn set_status(&mut self, text: String, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text,
            kind,
            at: Local::now(),
        });
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================
