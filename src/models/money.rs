// ============================================================================
// Formatage monétaire
// ============================================================================
// Convertit un montant f64 en chaîne affichable : "$1,234,567.50"
//
// CONCEPTS RUST :
// 1. format! avec précision ({:.2}) pour arrondir à deux décimales
// 2. Manipulation de String caractère par caractère
// ============================================================================

/// Formate un montant en dollars avec séparateurs de milliers
///
/// Format : `$` + partie entière groupée par 3 avec des virgules + 2 décimales
///
/// # Exemple
/// ```
/// use lazywealth::models::format_money;
/// assert_eq!(format_money(1234567.5), "$1,234,567.50");
/// ```
pub fn format_money(amount: f64) -> String {
    // Doubler trop souvent finit en infini : pas de "$inf.00"
    if amount.is_nan() {
        return "$NaN".to_string();
    }
    if amount.is_infinite() {
        return if amount > 0.0 { "$∞".to_string() } else { "-$∞".to_string() };
    }

    // Arrondi d'abord, puis on découpe : évite "999.999" -> "$999.1,000"
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, dec_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };

    format!("{}${}.{}", sign, group_thousands(int_part), dec_part)
}

/// Insère une virgule toutes les 3 chiffres en partant de la droite
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money_millions() {
        assert_eq!(format_money(1234567.5), "$1,234,567.50");
    }

    #[test]
    fn test_format_money_small_amounts() {
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(7.0), "$7.00");
        assert_eq!(format_money(999.0), "$999.00");
    }

    #[test]
    fn test_format_money_group_boundaries() {
        assert_eq!(format_money(1000.0), "$1,000.00");
        assert_eq!(format_money(100000.0), "$100,000.00");
        assert_eq!(format_money(1000000.0), "$1,000,000.00");
    }

    #[test]
    fn test_format_money_rounding_carries_into_integer_part() {
        assert_eq!(format_money(999.999), "$1,000.00");
    }

    #[test]
    fn test_format_money_non_finite() {
        assert_eq!(format_money(f64::INFINITY), "$∞");
        assert_eq!(format_money(f64::NEG_INFINITY), "-$∞");
        assert_eq!(format_money(f64::NAN), "$NaN");
    }

    #[test]
    fn test_format_money_after_overflowing_double() {
        let overflowed = f64::MAX * 2.0;
        assert_eq!(format_money(overflowed), "$∞");
        // Le plus grand fini reste formaté normalement
        assert!(format_money(f64::MAX).starts_with("$179,769,313"));
    }

    #[test]
    fn test_format_money_negative() {
        assert_eq!(format_money(-1.0), "-$1.00");
        assert_eq!(format_money(-0.001), "$0.00");
    }
}
