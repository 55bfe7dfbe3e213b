// ============================================================================
// View : représentation affichable de la liste
// ============================================================================
// Sépare le "quoi afficher" (lignes de texte) du "comment dessiner" (ratatui)
//
// - render() reconstruit entièrement la vue à partir d'une WealthList
// - append_total() ajoute une ligne de total SANS effacer les lignes existantes
//
// CONCEPT RUST : Fonctions pures
// - render() ne dépend que de son argument
// - Testable sans terminal
// ============================================================================

use crate::models::{format_money, WealthList};

/// Une ligne de la vue
#[derive(Debug, Clone, PartialEq)]
pub enum ViewLine {
    /// En-tête des colonnes ("Person" / "Wealth")
    Header,

    /// Une personne et sa fortune
    Person { name: String, money: f64 },

    /// Ligne de total ajoutée par le calcul de fortune totale
    Total(f64),
}

impl ViewLine {
    /// Texte brut de la ligne, sans style
    pub fn text(&self) -> String {
        match self {
            ViewLine::Header => format!("{:<30} {:>18}", "Person", "Wealth"),
            ViewLine::Person { name, money } => {
                format!("{:<30} {:>18}", truncate(name, 30), format_money(*money))
            }
            ViewLine::Total(amount) => format!("Total wealth: {}", format_money(*amount)),
        }
    }
}

/// Vue complète : lignes dans l'ordre d'affichage
#[derive(Debug, Clone, Default, PartialEq)]
pub struct View {
    lines: Vec<ViewLine>,
}

impl View {
    /// Lignes de la vue
    pub fn lines(&self) -> &[ViewLine] {
        &self.lines
    }

    /// Nombre de lignes "personne"
    pub fn person_count(&self) -> usize {
        self.lines
            .iter()
            .filter(|line| matches!(line, ViewLine::Person { .. }))
            .count()
    }

    /// Lignes de total, dans l'ordre où elles ont été ajoutées
    pub fn totals(&self) -> Vec<f64> {
        self.lines
            .iter()
            .filter_map(|line| match line {
                ViewLine::Total(amount) => Some(*amount),
                _ => None,
            })
            .collect()
    }

    /// Ajoute une ligne de total à la fin, sans toucher au reste
    pub fn append_total(&mut self, amount: f64) {
        self.lines.push(ViewLine::Total(amount));
    }
}

/// Reconstruit la vue : un en-tête puis une ligne par personne
pub fn render(list: &WealthList) -> View {
    let lines = std::iter::once(ViewLine::Header)
        .chain(list.iter().map(|user| ViewLine::Person {
            name: user.name.clone(),
            money: user.money,
        }))
        .collect();

    View { lines }
}

/// Tronque un nom trop long avec une ellipse
fn truncate(name: &str, max: usize) -> String {
    if name.chars().count() <= max {
        name.to_string()
    } else {
        let truncated: String = name.chars().take(max - 1).collect();
        format!("{}…", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRecord;

    fn list() -> WealthList {
        WealthList::from(vec![
            UserRecord::new("Jane Doe", 1234567.5),
            UserRecord::new("John Smith", 42.0),
        ])
    }

    #[test]
    fn test_render_header_then_rows() {
        let view = render(&list());

        assert_eq!(view.lines().len(), 3);
        assert_eq!(view.lines()[0], ViewLine::Header);
        assert_eq!(
            view.lines()[1],
            ViewLine::Person {
                name: "Jane Doe".to_string(),
                money: 1234567.5
            }
        );
        assert_eq!(view.person_count(), 2);
        assert!(view.totals().is_empty());
    }

    #[test]
    fn test_render_empty_list_has_only_header() {
        let view = render(&WealthList::new());
        assert_eq!(view.lines(), &[ViewLine::Header]);
    }

    #[test]
    fn test_person_line_text_uses_currency_format() {
        let view = render(&list());
        let text = view.lines()[1].text();

        assert!(text.starts_with("Jane Doe"));
        assert!(text.ends_with("$1,234,567.50"));
    }

    #[test]
    fn test_append_total_keeps_rows() {
        let mut view = render(&list());
        view.append_total(1234609.5);
        view.append_total(1234609.5);

        assert_eq!(view.person_count(), 2);
        assert_eq!(view.totals(), vec![1234609.5, 1234609.5]);
        assert_eq!(
            view.lines().last().unwrap().text(),
            "Total wealth: $1,234,609.50"
        );
    }

    #[test]
    fn test_render_clears_previous_totals() {
        let mut view = render(&list());
        view.append_total(1.0);

        let view = render(&list());
        assert!(view.totals().is_empty());
    }

    #[test]
    fn test_truncate_long_name() {
        let long = "Maximilian Alexander Fitzgerald-Worthington";
        let truncated = truncate(long, 30);
        assert_eq!(truncated.chars().count(), 30);
        assert!(truncated.ends_with('…'));
        assert_eq!(truncate("Short", 30), "Short");
    }
}
