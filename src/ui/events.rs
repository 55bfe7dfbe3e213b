// ============================================================================
// Gestion des événements
// ============================================================================
// Gère les événements clavier et les ticks de l'application
//
// CONCEPTS RUST :
// 1. Enums avec variants : représenter différents types d'événements
// 2. Non-blocking I/O : poll avec timeout
// 3. Error handling avec Result
// ============================================================================

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind};

/// Événements de l'application
#[derive(Debug, Clone)]
pub enum Event {
    /// Touche pressée
    Key(KeyEvent),

    /// Tick régulier (rafraîchissement, expiration des messages)
    Tick,
}

/// Gestionnaire d'événements
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    /// Crée un gestionnaire avec un tick de 250ms
    pub fn new() -> Self {
        Self {
            tick_rate: Duration::from_millis(250),
        }
    }

    /// Lit le prochain événement (bloquant avec timeout)
    ///
    /// CONCEPT : Non-blocking I/O avec timeout
    /// - poll(timeout) attend au plus tick_rate
    /// - Si pas d'événement, retourne Ok(Event::Tick)
    /// - Le timeout permet de traiter les résultats du worker régulièrement
    pub fn next(&self) -> Result<Event> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                // Sur certains OS, on reçoit Press ET Release
                // On ne garde que Press pour éviter les doublons
                CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Ok(Event::Key(key)),

                // Release, resize, souris : rien à faire
                _ => Ok(Event::Tick),
            }
        } else {
            Ok(Event::Tick)
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Helpers : identifier la touche pressée
// ============================================================================

/// Vrai si l'événement est l'une des touches (insensible à la casse)
fn is_char_event(event: &Event, c: char) -> bool {
    if let Event::Key(key) = event {
        matches!(key.code, KeyCode::Char(k) if k.eq_ignore_ascii_case(&c))
    } else {
        false
    }
}

/// 'q' : quitter
pub fn is_quit_event(event: &Event) -> bool {
    is_char_event(event, 'q')
}

/// 'a' : ajouter un utilisateur aléatoire
pub fn is_add_user_event(event: &Event) -> bool {
    is_char_event(event, 'a')
}

/// 'd' : doubler la fortune de tout le monde
pub fn is_double_event(event: &Event) -> bool {
    is_char_event(event, 'd')
}

/// 's' : trier par fortune décroissante
pub fn is_sort_event(event: &Event) -> bool {
    is_char_event(event, 's')
}

/// 'm' : n'afficher que les millionnaires
pub fn is_millionaires_event(event: &Event) -> bool {
    is_char_event(event, 'm')
}

/// 'w' : calculer la fortune totale
pub fn is_wealth_event(event: &Event) -> bool {
    is_char_event(event, 'w')
}

/// Flèche vers le haut ou 'k' (vim)
pub fn is_up_event(event: &Event) -> bool {
    if let Event::Key(key) = event {
        matches!(key.code, KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K'))
    } else {
        false
    }
}

/// Flèche vers le bas ou 'j' (vim)
pub fn is_down_event(event: &Event) -> bool {
    if let Event::Key(key) = event {
        matches!(key.code, KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J'))
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::empty()))
    }

    #[test]
    fn test_is_quit_event() {
        assert!(is_quit_event(&key(KeyCode::Char('q'))));
        assert!(is_quit_event(&key(KeyCode::Char('Q'))));
        assert!(!is_quit_event(&key(KeyCode::Char('a'))));
        assert!(!is_quit_event(&Event::Tick));
    }

    #[test]
    fn test_action_keys() {
        assert!(is_add_user_event(&key(KeyCode::Char('a'))));
        assert!(is_double_event(&key(KeyCode::Char('d'))));
        assert!(is_sort_event(&key(KeyCode::Char('S'))));
        assert!(is_millionaires_event(&key(KeyCode::Char('m'))));
        assert!(is_wealth_event(&key(KeyCode::Char('w'))));
        assert!(!is_wealth_event(&key(KeyCode::Enter)));
    }

    #[test]
    fn test_navigation_keys() {
        assert!(is_up_event(&key(KeyCode::Up)));
        assert!(is_up_event(&key(KeyCode::Char('k'))));
        assert!(is_down_event(&key(KeyCode::Down)));
        assert!(is_down_event(&key(KeyCode::Char('j'))));
        assert!(!is_down_event(&Event::Tick));
    }
}
