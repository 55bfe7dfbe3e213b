// ============================================================================
// Dashboard - Rendu de l'interface principale
// ============================================================================
// Dessine l'interface TUI en utilisant les widgets de ratatui
//
// CONCEPTS RATATUI :
// 1. Frame : surface de dessin
// 2. Widgets : composants UI (Block, Paragraph, List)
// 3. Layout : découpage de l'espace en zones
// 4. ListState : sélection + scrolling automatique d'une List
//
// Ce module ne fait que dessiner app.view : la construction des lignes
// (en-tête, personnes, totaux) est faite par ui::view.
// ============================================================================

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::{App, StatusKind};
use crate::models::MILLIONAIRE_THRESHOLD;
use crate::ui::view::ViewLine;

/// Dessine l'interface complète
///
/// # Arguments
/// * `frame` - Surface de dessin ratatui
/// * `app` - État de l'application (lecture seule)
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = create_layout(frame.size());

    render_header(frame, chunks[0]);
    render_main_content(frame, app, chunks[1]);
    render_footer(frame, app, chunks[2]);
}

/// Crée le layout principal (header, content, footer)
fn create_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header : 3 lignes
            Constraint::Min(0),    // Content : tout le reste
            Constraint::Length(4), // Footer : 2 lignes de texte + bordures
        ])
        .split(area)
        .to_vec()
}

/// Dessine le header avec le titre
fn render_header(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" LazyWealth ")
        .title_alignment(Alignment::Center);

    let text = Line::from(Span::styled(
        "💰 Who's the richest?",
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    ));

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

/// Dessine la vue : en-tête, une ligne par personne, lignes de total
///
/// CONCEPT RATATUI : render_stateful_widget
/// - ListState garde l'index sélectionné
/// - ratatui fait défiler la liste pour que la sélection reste visible
fn render_main_content(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" 👥 Users ({}) ", app.list.len()));

    let mut items: Vec<ListItem> = app
        .view
        .lines()
        .iter()
        .map(|line| ListItem::new(format!(" {}", line.text())).style(line_style(line)))
        .collect();

    // Liste vide : l'en-tête reste affiché, l'indication vient juste dessous
    if app.list.is_empty() {
        let hint = if app.is_loading() {
            "Chargement des utilisateurs..."
        } else {
            "Liste vide : appuyez sur [a] pour ajouter un utilisateur"
        };
        let position = items.len().min(1);
        items.insert(
            position,
            ListItem::new(format!(" {}", hint)).style(Style::default().fg(Color::Gray)),
        );
    }

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .add_modifier(Modifier::BOLD)
            .add_modifier(Modifier::REVERSED),
    );

    // La ligne 0 de la vue est l'en-tête : la personne i est à la ligne i + 1
    let mut state = ListState::default();
    if !app.list.is_empty() {
        state = state.with_selected(Some(app.selected_index + 1));
    }

    frame.render_stateful_widget(list, area, &mut state);
}

/// Style d'une ligne selon son type
fn line_style(line: &ViewLine) -> Style {
    match line {
        ViewLine::Header => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
            .add_modifier(Modifier::UNDERLINED),
        ViewLine::Person { money, .. } if *money > MILLIONAIRE_THRESHOLD => {
            Style::default().fg(Color::Green)
        }
        ViewLine::Person { .. } => Style::default().fg(Color::White),
        ViewLine::Total(_) => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    }
}

/// Dessine le footer : raccourcis (ou confirmation) puis statut
fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let shortcuts = if app.is_awaiting_quit_confirmation() {
        Line::from(vec![
            Span::styled(
                "⚠  Appuyez sur ",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "[q]",
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD)
                    .add_modifier(Modifier::SLOW_BLINK),
            ),
            Span::styled(
                " à nouveau pour quitter, ou n'importe quelle autre touche pour annuler ⚠",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
        ])
    } else {
        Line::from(vec![
            Span::styled("[a]", key_style.fg(Color::Green)),
            Span::raw(" Add user  "),
            Span::styled("[d]", key_style),
            Span::raw(" Double  "),
            Span::styled("[s]", key_style),
            Span::raw(" Sort  "),
            Span::styled("[m]", key_style),
            Span::raw(" Millionaires  "),
            Span::styled("[w]", key_style),
            Span::raw(" Total  "),
            Span::styled("[↑↓ / j k]", key_style),
            Span::raw(" Move  "),
            Span::styled("[q]", key_style.fg(Color::Red)),
            Span::raw(" Quit"),
        ])
    };

    let paragraph = Paragraph::new(vec![shortcuts, status_line(app)])
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

/// Ligne de statut : chargement en cours, sinon dernier message
fn status_line(app: &App) -> Line<'static> {
    if app.is_loading() {
        return Line::from(Span::styled(
            format!("⏳ Fetching {} user(s)...", app.pending_fetches),
            Style::default().fg(Color::Yellow),
        ));
    }

    match &app.status {
        Some(status) => {
            let color = match status.kind {
                StatusKind::Info => Color::Gray,
                StatusKind::Error => Color::Red,
            };
            Line::from(Span::styled(status.display(), Style::default().fg(color)))
        }
        None => Line::from(""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{UserRecord, WealthList};
    use ratatui::{backend::TestBackend, Terminal};

    /// Dessine l'app dans un terminal virtuel et retourne son contenu texte
    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();

        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_rows_and_total() {
        let mut app = App::with_users(WealthList::from(vec![
            UserRecord::new("Jane Doe", 500_000.0),
            UserRecord::new("John Smith", 2_000_000.0),
        ]));
        app.calculate_wealth();

        let screen = draw(&app);
        assert!(screen.contains("Person"));
        assert!(screen.contains("Jane Doe"));
        assert!(screen.contains("$2,000,000.00"));
        assert!(screen.contains("Total wealth: $2,500,000.00"));
    }

    #[test]
    fn test_render_empty_list_keeps_header() {
        let screen = draw(&App::new());
        assert!(screen.contains("Person"));
        assert!(screen.contains("Wealth"));
        assert!(screen.contains("Liste vide"));

        // L'indication est sous l'en-tête
        let header_at = screen.find("Person").unwrap();
        let hint_at = screen.find("Liste vide").unwrap();
        assert!(header_at < hint_at);
    }

    #[test]
    fn test_render_empty_list_after_filter_shows_header_and_total() {
        let mut app = App::with_users(WealthList::from(vec![UserRecord::new("Jane Doe", 10.0)]));
        app.show_millionaires();
        app.calculate_wealth();

        let screen = draw(&app);
        assert!(screen.contains("Person"));
        assert!(screen.contains("Total wealth: $0.00"));
        assert!(!screen.contains("Jane Doe"));
    }

    #[test]
    fn test_render_loading_indicator() {
        let mut app = App::new();
        app.start_fetch();

        let screen = draw(&app);
        assert!(screen.contains("Fetching 1 user(s)..."));
    }

    #[test]
    fn test_render_error_status() {
        let mut app = App::new();
        app.set_error("Échec de l'ajout");

        let screen = draw(&app);
        assert!(screen.contains("Échec de l'ajout"));
    }
}
