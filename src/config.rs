// ============================================================================
// Configuration
// ============================================================================
// Paramètres de l'application lus depuis les variables d'environnement
//
// Variables reconnues :
// - LAZYWEALTH_API_URL           : URL de l'API (défaut : https://randomuser.me/api)
// - LAZYWEALTH_INITIAL_USERS     : utilisateurs chargés au démarrage (défaut : 2)
// - LAZYWEALTH_HTTP_TIMEOUT_SECS : timeout des requêtes HTTP (défaut : 10)
// - LAZYWEALTH_LOG_DIR           : répertoire des logs
//
// Une valeur invalide est ignorée au profit du défaut. Les avertissements
// sont retournés à l'appelant : la config est lue AVANT que le logging soit
// initialisé (il a besoin de log_dir), main les logge ensuite.
// ============================================================================

use std::path::PathBuf;
use std::time::Duration;

/// URL par défaut de l'API randomuser.me
pub const DEFAULT_API_URL: &str = "https://randomuser.me/api";

/// Nombre d'utilisateurs chargés au démarrage
pub const DEFAULT_INITIAL_USERS: usize = 2;

/// Timeout HTTP par défaut, en secondes
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Configuration de l'application
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// URL de l'API qui génère des utilisateurs aléatoires
    pub api_url: String,

    /// Nombre d'utilisateurs à charger avant de lancer le TUI
    pub initial_users: usize,

    /// Timeout appliqué à chaque requête HTTP
    pub http_timeout: Duration,

    /// Répertoire des fichiers de logs
    pub log_dir: PathBuf,
}

impl Config {
    /// Construit la configuration depuis l'environnement du process
    ///
    /// Retourne aussi les avertissements sur les valeurs ignorées
    pub fn from_env() -> (Self, Vec<String>) {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Construit la configuration depuis une fonction de lookup
    ///
    /// CONCEPT RUST : Closure en paramètre générique
    /// - `F: Fn(&str) -> Option<String>` : n'importe quelle source clé/valeur
    /// - from_env() passe std::env::var, les tests passent une HashMap
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let mut warnings = Vec::new();

        let api_url = lookup("LAZYWEALTH_API_URL")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.api_url);

        let initial_users = parse_or_default(
            "LAZYWEALTH_INITIAL_USERS",
            lookup("LAZYWEALTH_INITIAL_USERS"),
            defaults.initial_users,
            &mut warnings,
        );

        let http_timeout = match parse_or_default(
            "LAZYWEALTH_HTTP_TIMEOUT_SECS",
            lookup("LAZYWEALTH_HTTP_TIMEOUT_SECS"),
            DEFAULT_HTTP_TIMEOUT_SECS,
            &mut warnings,
        ) {
            0 => {
                warnings.push("LAZYWEALTH_HTTP_TIMEOUT_SECS must be > 0, using default".to_string());
                defaults.http_timeout
            }
            secs => Duration::from_secs(secs),
        };

        let log_dir = lookup("LAZYWEALTH_LOG_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.log_dir);

        let config = Self {
            api_url,
            initial_users,
            http_timeout,
            log_dir,
        };

        (config, warnings)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            initial_users: DEFAULT_INITIAL_USERS,
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            log_dir: default_log_dir(),
        }
    }
}

/// Répertoire de logs par défaut
///
/// - Linux/WSL : ~/.local/share/lazywealth/logs
/// - macOS : ~/Library/Application Support/lazywealth/logs
/// - Windows : C:\Users\<user>\AppData\Local\lazywealth\logs
/// - Sinon : ./logs
fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("lazywealth").join("logs"))
        .unwrap_or_else(|| PathBuf::from("./logs"))
}

/// Parse une valeur numérique, retombe sur le défaut si absente ou invalide
fn parse_or_default<T>(key: &str, raw: Option<String>, default: T, warnings: &mut Vec<String>) -> T
where
    T: std::str::FromStr + Copy,
{
    match raw {
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            warnings.push(format!("{}: invalid value {:?}, using default", key, value));
            default
        }),
        None => default,
    }
}
