//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur) et
//! les collaborateurs choisis à la construction (évaluateur + historique).
//!
//! Contrats :
//! - L’évaluation passe UNIQUEMENT par `Evaluateur` (aucun parsing ici).
//! - Seuls les succès sont enregistrés dans l’historique.
//! - Actions déterministes, sans effet de bord caché.

use std::sync::Arc;

use crate::historique::{Calcul, HistoriqueMemoire, StockageHistorique};
use crate::noyau::{Evaluateur, EvaluateurArithmetique};

pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String, // dernier résultat formaté
    pub erreur: String,   // message d’erreur (si validation/éval échoue)

    // --- collaborateurs ---
    evaluateur: Arc<dyn Evaluateur>,
    stockage: Arc<dyn StockageHistorique>,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(
            Arc::new(EvaluateurArithmetique),
            Arc::new(HistoriqueMemoire::new()),
        )
    }
}

impl AppCalc {
    pub fn new(evaluateur: Arc<dyn Evaluateur>, stockage: Arc<dyn StockageHistorique>) -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            evaluateur,
            stockage,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }

    /* ------------------------ Actions “boutons” ------------------------ */

    /// AC : remise à zéro (entrée + résultat + erreur). L’historique reste.
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
    }

    /// C : effacer seulement l’entrée (sans toucher au résultat).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.focus_entree = true;
    }

    /// DEL : retire le dernier caractère.
    pub fn backspace_entree(&mut self) {
        self.entree.pop();
        self.focus_entree = true;
    }

    /// Choix UX : on CONSERVE le dernier résultat pour ne pas “effacer l’écran” sur une faute.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.focus_entree = true;
    }

    pub fn set_resultat(&mut self, resultat: impl Into<String>) {
        self.erreur.clear();
        self.resultat = resultat.into();
        self.focus_entree = true;
    }

    /* ------------------------ Évaluation + historique ------------------------ */

    /// `=` / Enter : évalue l’entrée, enregistre le couple en cas de succès.
    pub fn evaluer_entree(&mut self) {
        let expression = self.entree.clone();

        match self.evaluateur.evaluer(&expression) {
            Ok(resultat) => {
                if let Err(e) = self
                    .stockage
                    .enregistrer(Calcul::new(expression, resultat.clone()))
                {
                    tracing::warn!(erreur = %e, "historique non enregistré");
                }
                self.set_resultat(resultat);
            }
            Err(e) => self.set_erreur(e.to_string()),
        }
    }

    /// Historique complet (vide si le stockage est indisponible).
    pub fn historique(&self) -> Vec<Calcul> {
        self.stockage.historique().unwrap_or_else(|e| {
            tracing::warn!(erreur = %e, "historique illisible");
            Vec::new()
        })
    }

    /// Recharge dans l’entrée l’expression d’une ligne d’historique.
    pub fn rappeler(&mut self, calcul: &Calcul) {
        self.entree = calcul.expression.clone();
        self.focus_entree = true;
    }
}
