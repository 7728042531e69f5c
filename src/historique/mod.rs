//! Historique des calculs réussis.
//!
//! Contrat de stockage partagé par le serveur HTTP et l’UI :
//! - `enregistrer` ajoute une paire (expression, résultat)
//! - `historique` rend toutes les paires, dans l’ordre d’insertion
//!
//! Backends :
//! - memoire.rs : `Mutex<Vec<Calcul>>` (natif + wasm)
//! - sqlite.rs  : table `history` via rusqlite (natif seulement)

pub mod memoire;
#[cfg(not(target_arch = "wasm32"))]
pub mod sqlite;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use memoire::HistoriqueMemoire;
#[cfg(not(target_arch = "wasm32"))]
pub use sqlite::HistoriqueSqlite;

/// Une ligne d’historique. Noms JSON alignés sur l’API (`Expression`, `Result`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calcul {
    #[serde(rename = "Expression")]
    pub expression: String,
    #[serde(rename = "Result")]
    pub resultat: String,
}

impl Calcul {
    pub fn new(expression: impl Into<String>, resultat: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            resultat: resultat.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ErreurStockage {
    #[cfg(not(target_arch = "wasm32"))]
    #[error("base d’historique : {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("répertoire d’historique : {0}")]
    Io(#[from] std::io::Error),

    #[error("verrou d’historique empoisonné")]
    Verrou,
}

pub trait StockageHistorique: Send + Sync {
    fn enregistrer(&self, calcul: Calcul) -> Result<(), ErreurStockage>;

    fn historique(&self) -> Result<Vec<Calcul>, ErreurStockage>;
}
