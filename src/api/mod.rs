//! API HTTP de la calculatrice — assemble les routes dans un routeur axum.
//!
//! L’API n’appelle le noyau qu’à travers `Evaluateur` et ne persiste qu’à
//! travers `StockageHistorique` ; les deux sont choisis à la construction.

pub mod reponses;
pub mod routes;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::{Backend, ConfigServeur, GenreEvaluateur};
use crate::historique::{ErreurStockage, HistoriqueMemoire, HistoriqueSqlite, StockageHistorique};
use crate::noyau::{Evaluateur, EvaluateurArithmetique, EvaluateurIncremental};

/// État partagé par tous les handlers via `State<Arc<EtatApi>>`.
pub struct EtatApi {
    pub evaluateur: Arc<dyn Evaluateur>,
    pub stockage: Arc<dyn StockageHistorique>,
}

impl EtatApi {
    pub fn new(evaluateur: Arc<dyn Evaluateur>, stockage: Arc<dyn StockageHistorique>) -> Self {
        Self {
            evaluateur,
            stockage,
        }
    }

    /// Variantes choisies par la configuration.
    pub fn depuis_config(config: &ConfigServeur) -> Result<Self, ErreurStockage> {
        let evaluateur: Arc<dyn Evaluateur> = match config.evaluateur.genre {
            GenreEvaluateur::Arithmetique => Arc::new(EvaluateurArithmetique),
            GenreEvaluateur::Incremental => Arc::new(EvaluateurIncremental::default()),
        };

        let stockage: Arc<dyn StockageHistorique> = match config.historique.backend {
            Backend::Memoire => Arc::new(HistoriqueMemoire::new()),
            Backend::Sqlite => Arc::new(HistoriqueSqlite::ouvrir(&config.historique.chemin)?),
        };

        Ok(Self::new(evaluateur, stockage))
    }
}

/// Routeur complet : routes + trace des requêtes + délai par requête (408).
pub fn construire_routeur(etat: Arc<EtatApi>, delai: Duration) -> Router {
    Router::new()
        .merge(routes::routes())
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(delai))
        .with_state(etat)
}
