// src/historique/memoire.rs

use std::sync::Mutex;

use super::{Calcul, ErreurStockage, StockageHistorique};

/// Historique volatil : une liste protégée par un verrou.
#[derive(Debug, Default)]
pub struct HistoriqueMemoire {
    calculs: Mutex<Vec<Calcul>>,
}

impl HistoriqueMemoire {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StockageHistorique for HistoriqueMemoire {
    fn enregistrer(&self, calcul: Calcul) -> Result<(), ErreurStockage> {
        let mut guard = self.calculs.lock().map_err(|_| ErreurStockage::Verrou)?;
        guard.push(calcul);
        Ok(())
    }

    fn historique(&self) -> Result<Vec<Calcul>, ErreurStockage> {
        let guard = self.calculs.lock().map_err(|_| ErreurStockage::Verrou)?;
        Ok(guard.clone())
    }
}
