// ============================================================================
// LazyWealth - Liste de fortunes interactive
// ============================================================================
// Programme TUI qui récupère des utilisateurs aléatoires (randomuser.me),
// leur attribue une fortune, et permet de la doubler, trier, filtrer, sommer
//
// CONCEPTS RUST CLÉS :
// 1. Terminal raw mode : contrôle total du terminal
// 2. Event loop : boucle qui gère événements et rendering
// 3. Worker thread + channels : appels réseau sans bloquer l'UI
// 4. Ownership : l'event loop possède l'App, pas de Mutex
// ============================================================================

use std::io;
use std::path::Path;
use std::sync::mpsc;

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, error, info, warn};

use lazywealth::api::RandomUserClient;
use lazywealth::app::App;
use lazywealth::config::Config;
use lazywealth::models::{format_money, UserRecord, WealthList};
use lazywealth::ui::{events::EventHandler, render};

// ============================================================================
// AppCommand / AppResult : protocole avec le worker thread
// ============================================================================
// CONCEPT RUST : Command pattern avec channels
// - L'event loop envoie des commandes au worker
// - Le worker exécute les appels réseau et renvoie un résultat explicite
// - Seul l'event loop modifie la liste
// ============================================================================

/// Commandes envoyées au worker thread
#[derive(Debug, Clone, PartialEq)]
enum AppCommand {
    /// Récupérer un utilisateur aléatoire
    FetchUser,
}

/// Résultats renvoyés par le worker thread
#[derive(Debug)]
enum AppResult {
    /// Utilisateur récupéré avec succès
    UserFetched(UserRecord),

    /// Erreur lors de la récupération
    FetchError { error: String },
}

// ============================================================================
// Initialisation du logging
// ============================================================================
// CONCEPT : Logging dans une app TUI
// - Les println! ne fonctionnent pas une fois le TUI lancé
// - On log vers un fichier à la place, avec rotation quotidienne
// ============================================================================

/// Initialise le système de logging vers fichier
///
/// # Utilisation
/// ```bash
/// # Voir les logs en temps réel
/// tail -f ~/.local/share/lazywealth/logs/lazywealth.log
///
/// # Contrôler le niveau de log
/// RUST_LOG=debug cargo run
/// RUST_LOG=lazywealth=trace cargo run
/// ```
fn init_logging(log_dir: &Path) -> Result<()> {
    use tracing_appender::rolling::{RollingFileAppender, Rotation};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    std::fs::create_dir_all(log_dir).context("Échec de la création du répertoire de logs")?;

    // Nouveau fichier chaque jour : lazywealth.log.2024-01-15
    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, "lazywealth.log");

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false) // Pas de codes couleur dans le fichier
                .with_target(true)
                .with_thread_ids(true) // Distingue l'UI du worker
                .with_line_number(true),
        )
        .with(
            // Par défaut : debug pour lazywealth, info pour les dépendances
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lazywealth=debug,info".into()),
        )
        .try_init()
        .context("Échec de l'initialisation du subscriber tracing")?;

    info!(?log_dir, "Logging initialisé");
    Ok(())
}

// ============================================================================
// Point d'entrée du programme
// ============================================================================

fn main() -> Result<()> {
    // Le logging a besoin de log_dir : on lit la config d'abord, mais ses
    // avertissements ne sont loggés qu'une fois le subscriber installé
    let (config, config_warnings) = Config::from_env();

    // Si le logging échoue, on continue quand même
    init_logging(&config.log_dir).unwrap_or_else(|e| {
        eprintln!("⚠️  Warning: Failed to initialize logging: {:#}", e);
        eprintln!("   Continuing without logging...");
        for warning in &config_warnings {
            eprintln!("⚠️  Config: {}", warning);
        }
    });

    log_config_warnings(&config_warnings);
    info!(?config, "LazyWealth starting up");

    let client = RandomUserClient::new(config.api_url.clone(), config.http_timeout)?;

    // Préchargement des premiers utilisateurs, avant le passage en mode TUI
    println!("👥 Chargement des utilisateurs...\n");
    let runtime = tokio::runtime::Runtime::new().context("Échec de la création du runtime tokio")?;
    let users = runtime.block_on(load_initial_users(&client, config.initial_users));
    info!(users = users.len(), "Initial users loaded");
    println!("✅ {} utilisateur(s) chargé(s) !\n", users.len());

    debug!("Setting up terminal");
    let mut terminal = setup_terminal()?;

    // L'App appartient à l'event loop : passée en &mut, jamais partagée
    let mut app = App::with_users(users);

    let (command_tx, command_rx) = mpsc::channel::<AppCommand>();
    let (result_tx, result_rx) = mpsc::channel::<AppResult>();

    info!("Spawning background worker thread");
    spawn_background_worker(command_rx, result_tx, client);

    let events = EventHandler::new();

    info!("Starting event loop");
    let result = run(&mut terminal, &mut app, &events, &command_tx, &result_rx);

    // Restaure le terminal (même en cas d'erreur)
    debug!("Restoring terminal");
    restore_terminal(&mut terminal)?;

    match &result {
        Ok(_) => info!("Application exited normally"),
        Err(e) => error!(error = ?e, "Application exited with error"),
    }

    result
}

/// Logge les valeurs de configuration ignorées
fn log_config_warnings(warnings: &[String]) {
    for warning in warnings {
        warn!(warning = %warning, "Invalid configuration value ignored");
    }
}

// ============================================================================
// Chargement initial
// ============================================================================

/// Récupère `count` utilisateurs aléatoires
///
/// Un échec n'arrête pas le chargement : l'utilisateur manquant est
/// simplement absent de la liste (et l'erreur est loggée).
async fn load_initial_users(client: &RandomUserClient, count: usize) -> WealthList {
    let mut list = WealthList::new();

    for i in 0..count {
        debug!(progress = i + 1, total = count, "Fetching initial user");
        println!("  [{}/{}] Chargement d'un utilisateur...", i + 1, count);

        match client.fetch_random_user().await {
            Ok(user) => {
                println!("    ✓ {} ({})", user.name, format_money(user.money));
                list.push_user(user);
            }
            Err(e) => {
                error!(error = ?e, "Failed to fetch initial user");
                println!("    ✗ {:#}", e);
            }
        }
    }

    list
}

// ============================================================================
// Background Worker Thread
// ============================================================================
// CONCEPT RUST : Thread + runtime tokio dédié
// - Reçoit des AppCommand via command_rx
// - Envoie des AppResult via result_tx
// - S'arrête quand command_tx est droppé (fin de l'event loop)
// ============================================================================

/// Worker thread qui exécute les appels réseau en arrière-plan
fn spawn_background_worker(
    command_rx: mpsc::Receiver<AppCommand>,
    result_tx: mpsc::Sender<AppResult>,
    client: RandomUserClient,
) {
    std::thread::spawn(move || {
        let runtime = match tokio::runtime::Runtime::new() {
            Ok(runtime) => runtime,
            Err(e) => {
                // result_tx est droppé : l'event loop verra Disconnected
                error!(error = ?e, "Failed to create worker tokio runtime");
                return;
            }
        };

        while let Ok(command) = command_rx.recv() {
            info!(?command, "Worker received command");

            match command {
                AppCommand::FetchUser => {
                    let result = match runtime.block_on(client.fetch_random_user()) {
                        Ok(user) => AppResult::UserFetched(user),
                        Err(e) => {
                            error!(error = ?e, "Failed to fetch random user");
                            AppResult::FetchError {
                                error: format!("{:#}", e),
                            }
                        }
                    };

                    if result_tx.send(result).is_err() {
                        break;
                    }
                }
            }
        }

        info!("Worker thread exiting (channel closed)");
    });
}

// ============================================================================
// Event Loop Principal
// ============================================================================
// À chaque itération :
//   0. Appliquer les résultats du worker
//   1. Dessiner l'interface
//   2. Traiter l'événement clavier
//   3. Mettre à jour l'état (tick)
// ============================================================================

/// Exécute la boucle principale de l'application
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
    command_tx: &mpsc::Sender<AppCommand>,
    result_rx: &mpsc::Receiver<AppResult>,
) -> Result<()> {
    let mut worker_alive = true;

    while app.is_running() {
        // 0. RÉSULTATS : non-bloquant, on vide tout ce qui est arrivé
        loop {
            match result_rx.try_recv() {
                Ok(result) => apply_result(app, result),
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    if worker_alive {
                        error!("Worker thread disconnected!");
                        app.pending_fetches = 0;
                        app.set_error("Worker arrêté : ajout d'utilisateurs indisponible");
                        worker_alive = false;
                    }
                    break;
                }
            }
        }

        // 1. RENDER
        terminal.draw(|frame| render(frame, app))?;

        // 2. INPUT
        match events.next() {
            Ok(event) => handle_event(app, event, command_tx),
            Err(e) => warn!(error = ?e, "Failed to read terminal event"),
        }

        // 3. UPDATE
        app.tick();
    }

    Ok(())
}

/// Applique un résultat du worker à l'état
fn apply_result(app: &mut App, result: AppResult) {
    app.finish_fetch();

    match result {
        AppResult::UserFetched(user) => {
            info!(name = %user.name, money = user.money, "Adding user to list");
            app.set_info(format!("Ajouté : {}", user.name));
            app.add_user(user);
        }
        AppResult::FetchError { error } => {
            error!(error = %error, "Failed to add user");
            app.set_error(format!("Échec de l'ajout : {}", error));
        }
    }
}

// ============================================================================
// Gestion des événements
// ============================================================================

/// Traite un événement et met à jour l'état de l'application
fn handle_event(app: &mut App, event: lazywealth::ui::events::Event, command_tx: &mpsc::Sender<AppCommand>) {
    use lazywealth::ui::events::{
        is_add_user_event, is_double_event, is_down_event, is_millionaires_event, is_quit_event,
        is_sort_event, is_up_event, is_wealth_event, Event,
    };

    // Toute touche autre que 'q' annule une demande de quit en attente
    if matches!(event, Event::Key(_)) && !is_quit_event(&event) {
        app.cancel_quit();
    }

    match event {
        Event::Key(_) if is_quit_event(&event) => {
            if app.is_awaiting_quit_confirmation() {
                info!("User confirmed quit");
                app.quit();
            } else {
                info!("User requested quit (awaiting confirmation)");
                app.request_quit();
            }
        }

        Event::Key(_) if is_add_user_event(&event) => {
            info!("User requested a new random user");
            match command_tx.send(AppCommand::FetchUser) {
                Ok(()) => app.start_fetch(),
                Err(_) => {
                    error!("Cannot reach worker thread");
                    app.set_error("Worker arrêté : ajout d'utilisateurs indisponible");
                }
            }
        }

        Event::Key(_) if is_double_event(&event) => {
            info!(users = app.list.len(), "User doubled money");
            app.double_money();
        }

        Event::Key(_) if is_sort_event(&event) => {
            info!(users = app.list.len(), "User sorted by richest");
            app.sort_by_richest();
        }

        Event::Key(_) if is_millionaires_event(&event) => {
            app.show_millionaires();
            info!(remaining = app.list.len(), "User filtered millionaires");
        }

        Event::Key(_) if is_wealth_event(&event) => {
            let total = app.calculate_wealth();
            info!(total, "User calculated total wealth");
        }

        Event::Key(_) if is_up_event(&event) => {
            debug!("User navigated up");
            app.navigate_up();
        }

        Event::Key(_) if is_down_event(&event) => {
            debug!("User navigated down");
            app.navigate_down();
        }

        // Tick ou autre touche : rien à faire
        _ => {}
    }
}

// ============================================================================
// Setup et restauration du terminal
// ============================================================================
// IMPORTANT : Toujours restaurer le terminal avant de quitter !
// ============================================================================

/// Configure le terminal en mode TUI (raw mode + alternate screen)
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(|e| e.into())
}

/// Restaure le terminal à son état normal
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use lazywealth::ui::events::Event;

    fn key(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::empty()))
    }

    fn app_with_two_users() -> App {
        App::with_users(WealthList::from(vec![
            UserRecord::new("Jane Doe", 500_000.0),
            UserRecord::new("John Smith", 2_000_000.0),
        ]))
    }

    #[test]
    fn test_add_key_sends_fetch_command() {
        let (tx, rx) = mpsc::channel();
        let mut app = App::new();

        handle_event(&mut app, key('a'), &tx);

        assert_eq!(rx.try_recv().unwrap(), AppCommand::FetchUser);
        assert!(app.is_loading());
    }

    #[test]
    fn test_add_key_with_dead_worker_sets_error() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let mut app = App::new();

        handle_event(&mut app, key('a'), &tx);

        assert!(!app.is_loading());
        assert!(app.status.is_some());
    }

    #[test]
    fn test_filter_then_total_via_keys() {
        let (tx, _rx) = mpsc::channel();
        let mut app = app_with_two_users();

        handle_event(&mut app, key('m'), &tx);
        handle_event(&mut app, key('w'), &tx);

        assert_eq!(app.list.len(), 1);
        assert_eq!(app.view.totals(), vec![2_000_000.0]);
        assert_eq!(app.view.person_count(), 1);
    }

    #[test]
    fn test_double_and_sort_keys() {
        let (tx, _rx) = mpsc::channel();
        let mut app = app_with_two_users();

        handle_event(&mut app, key('d'), &tx);
        handle_event(&mut app, key('s'), &tx);

        assert_eq!(app.list.get(0).unwrap().money, 4_000_000.0);
        assert_eq!(app.list.get(1).unwrap().money, 1_000_000.0);
    }

    #[test]
    fn test_quit_requires_two_presses() {
        let (tx, _rx) = mpsc::channel();
        let mut app = App::new();

        handle_event(&mut app, key('q'), &tx);
        assert!(app.is_running());

        // Une autre touche annule
        handle_event(&mut app, key('s'), &tx);
        handle_event(&mut app, key('q'), &tx);
        assert!(app.is_running());

        handle_event(&mut app, key('q'), &tx);
        assert!(!app.is_running());
    }

    /// Writer qui accumule la sortie du subscriber en mémoire
    struct CapturedLogs(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_config_warnings_reach_the_subscriber() {
        let logs = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let writer_logs = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || CapturedLogs(writer_logs.clone()))
            .finish();

        let (_, warnings) = Config::from_lookup(|key| {
            (key == "LAZYWEALTH_INITIAL_USERS").then(|| "two".to_string())
        });
        assert_eq!(warnings.len(), 1);

        // Les avertissements sont émis après l'installation du subscriber
        tracing::subscriber::with_default(subscriber, || log_config_warnings(&warnings));

        let output = String::from_utf8(logs.lock().unwrap().clone()).unwrap();
        assert!(output.contains("WARN"));
        assert!(output.contains("LAZYWEALTH_INITIAL_USERS"));
    }

    #[test]
    fn test_apply_result_user_fetched() {
        let mut app = App::new();
        app.start_fetch();

        apply_result(&mut app, AppResult::UserFetched(UserRecord::new("Jane Doe", 12.0)));

        assert!(!app.is_loading());
        assert_eq!(app.list.len(), 1);
        assert_eq!(app.view.person_count(), 1);
    }

    #[test]
    fn test_apply_result_error_leaves_list_untouched() {
        let mut app = app_with_two_users();
        app.start_fetch();

        apply_result(
            &mut app,
            AppResult::FetchError {
                error: "timeout".to_string(),
            },
        );

        assert!(!app.is_loading());
        assert_eq!(app.list.len(), 2);
        let status = app.status.as_ref().unwrap();
        assert!(status.text.contains("timeout"));
    }
}
