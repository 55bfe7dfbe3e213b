// ============================================================================
// API Client : randomuser.me
// ============================================================================
// Récupère un utilisateur aléatoire et lui attribue une fortune aléatoire
//
// CONCEPTS RUST :
// 1. async/await : l'appel réseau ne bloque pas le thread
// 2. Result<T, E> : l'appelant décide quoi faire d'un échec
// 3. Serde : désérialisation JSON automatique
// 4. Générique sur Rng : tirage déterministe possible dans les tests
// ============================================================================

use std::time::Duration;

use anyhow::{Context, Result};
use rand::Rng;
use serde::Deserialize;
use tracing::{debug, error, info, instrument};

use crate::models::UserRecord;

/// Borne haute (exclue) de la fortune tirée au hasard
pub const MAX_RANDOM_MONEY: u32 = 1_000_000;

// ============================================================================
// Structures pour parser la réponse JSON de randomuser.me
// ============================================================================
// La réponse contient beaucoup de champs (email, location, picture...),
// serde ignore ceux qu'on ne déclare pas.
//
// Exemple :
// {"results":[{"gender":"female","name":{"title":"Ms","first":"Jane","last":"Doe"}, ...}],
//  "info":{"seed":"...","results":1,"page":1,"version":"1.4"}}
// ============================================================================

/// Réponse complète de l'API
#[derive(Debug, Deserialize)]
struct RandomUserResponse {
    results: Vec<RandomUser>,
}

#[derive(Debug, Deserialize)]
struct RandomUser {
    name: RandomUserName,
}

#[derive(Debug, Deserialize)]
struct RandomUserName {
    first: String,
    last: String,
}

// ============================================================================
// Client
// ============================================================================

/// Client HTTP pour l'API randomuser.me
///
/// CONCEPT RUST : Réutilisation du client reqwest
/// - reqwest::Client garde un pool de connexions
/// - On le construit une fois et on le réutilise pour chaque ajout
#[derive(Debug, Clone)]
pub struct RandomUserClient {
    http: reqwest::Client,
    api_url: String,
}

impl RandomUserClient {
    /// Crée un client pour l'URL donnée avec un timeout par requête
    pub fn new(api_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("lazywealth/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .context("Échec de la création du client HTTP")?;

        Ok(Self {
            http,
            api_url: api_url.into(),
        })
    }

    /// URL interrogée par le client
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Récupère un utilisateur aléatoire avec une fortune dans [0, 1 000 000)
    ///
    /// # Retourne
    /// * `Ok(UserRecord)` - "Prénom Nom" et fortune aléatoire
    /// * `Err(_)` - erreur réseau, statut HTTP non-2xx, JSON invalide, ou
    ///   liste de résultats vide
    #[instrument(skip(self), fields(url = %self.api_url))]
    pub async fn fetch_random_user(&self) -> Result<UserRecord> {
        debug!("Sending HTTP request to random user API");
        let response = self
            .http
            .get(&self.api_url)
            .send()
            .await
            .context("Échec de la requête HTTP vers l'API randomuser")?;

        let status = response.status();
        debug!(status = %status, "Received HTTP response");

        if !status.is_success() {
            error!(status = %status, "Random user API returned error status");
            anyhow::bail!("L'API randomuser a retourné une erreur : HTTP {}", status);
        }

        let body = response
            .text()
            .await
            .context("Échec de la lecture de la réponse randomuser")?;

        let name = parse_user_name(&body)?;
        let user = UserRecord::new(name, random_money(&mut rand::thread_rng()));

        info!(name = %user.name, money = user.money, "Fetched random user");
        Ok(user)
    }
}

/// Extrait "Prénom Nom" du premier résultat de la réponse JSON
fn parse_user_name(body: &str) -> Result<String> {
    let response: RandomUserResponse =
        serde_json::from_str(body).context("Échec du parsing JSON de la réponse randomuser")?;

    let user = response
        .results
        .into_iter()
        .next()
        .context("Aucun utilisateur retourné par l'API randomuser")?;

    Ok(format!("{} {}", user.name.first, user.name.last))
}

/// Tire une fortune entière dans [0, MAX_RANDOM_MONEY)
///
/// CONCEPT RUST : Générique sur le trait Rng
/// - En production : rand::thread_rng()
/// - En test : StdRng::seed_from_u64() pour un résultat reproductible
pub fn random_money<R: Rng>(rng: &mut R) -> f64 {
    f64::from(rng.gen_range(0..MAX_RANDOM_MONEY))
}

// ============================================================================
// Tests unitaires
// ============================================================================
