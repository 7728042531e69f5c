// src/bin/serveur.rs
//
// Serveur HTTP de la calculatrice (natif seulement).
//
//   serveur [--config chemin.toml]
//
// CALCULATRICE_PORT remplace le port de la config.
// RUST_LOG règle la verbosité (défaut : calculatrice_historique=info,tower_http=debug,warn).

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    natif::lancer().await
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Pas de serveur en wasm32 : seule l’UI est servie.
}

#[cfg(not(target_arch = "wasm32"))]
mod natif {
    use std::sync::Arc;
    use std::time::Duration;

    use anyhow::Context;
    use tracing_subscriber::EnvFilter;

    use calculatrice_historique::api::{construire_routeur, EtatApi};
    use calculatrice_historique::config::ConfigServeur;

    pub async fn lancer() -> anyhow::Result<()> {
        let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("calculatrice_historique=info,serveur=info,tower_http=debug,warn")
        });
        tracing_subscriber::fmt().with_env_filter(filtre).init();

        let args: Vec<String> = std::env::args().collect();

        let mut config = match get_arg(&args, "--config") {
            Some(chemin) => ConfigServeur::depuis_fichier(&chemin).unwrap_or_else(|e| {
                tracing::warn!(chemin = %chemin, erreur = %e, "config illisible, valeurs par défaut");
                ConfigServeur::default()
            }),
            None => ConfigServeur::default(),
        };
        config.appliquer_env();

        let etat = EtatApi::depuis_config(&config).context("ouverture de l’historique")?;
        let delai = Duration::from_secs(config.delais.requete_secondes);
        let routeur = construire_routeur(Arc::new(etat), delai);

        let adresse = config.adresse();
        tracing::info!(
            adresse = %adresse,
            historique = ?config.historique.backend,
            evaluateur = ?config.evaluateur.genre,
            delai_s = config.delais.requete_secondes,
            "serveur de calcul démarré"
        );

        let ecoute = tokio::net::TcpListener::bind(&adresse)
            .await
            .with_context(|| format!("écoute sur {adresse}"))?;

        axum::serve(ecoute, routeur)
            .with_graceful_shutdown(arret())
            .await
            .context("serveur HTTP")?;

        tracing::info!("serveur arrêté");
        Ok(())
    }

    /// Valeur d’un argument `--drapeau valeur`.
    fn get_arg(args: &[String], drapeau: &str) -> Option<String> {
        args.iter()
            .position(|a| a == drapeau)
            .and_then(|i| args.get(i + 1).cloned())
    }

    async fn arret() {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(erreur = %e, "signal d’arrêt indisponible");
            std::future::pending::<()>().await;
        }
    }
}
