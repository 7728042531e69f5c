// src/noyau/erreur.rs
//
// Classification des échecs du noyau.
// Toutes déterministes (fonction de l’entrée seule) : jamais de nouvel essai.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurEval {
    /// Entrée vide, ou réduite à un saut de ligne.
    #[error("Entrée vide")]
    EntreeVide,

    /// Fourre-tout syntaxique : caractère, parenthèses, adjacence, littéral.
    #[error("expression invalide : {0}")]
    Syntaxe(String),

    /// Le membre droit d’une division vaut exactement zéro.
    #[error("division par zéro : résultat ambigu")]
    DivisionParZero,
}

impl ErreurEval {
    pub(crate) fn syntaxe(motif: impl Into<String>) -> Self {
        Self::Syntaxe(motif.into())
    }
}
