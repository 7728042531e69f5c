// src/noyau/evaluateur.rs
//
// Capacité “évaluer une expression”, avec plusieurs variantes choisies
// par l’appelant à la construction (serveur HTTP, UI, tests).

use std::sync::atomic::{AtomicI64, Ordering};

use super::erreur::ErreurEval;
use super::eval::eval_expression;

/// Contrat unique exposé aux collaborateurs : texte -> texte (ou erreur).
pub trait Evaluateur: Send + Sync {
    fn evaluer(&self, expression: &str) -> Result<String, ErreurEval>;
}

/// Évaluateur réel : validation -> évaluation récursive -> format %g.
#[derive(Clone, Copy, Debug, Default)]
pub struct EvaluateurArithmetique;

impl Evaluateur for EvaluateurArithmetique {
    fn evaluer(&self, expression: &str) -> Result<String, ErreurEval> {
        eval_expression(expression)
    }
}

/// Bouchon à compteur : ignore l’expression, rend 0, 1, 2, …
///
/// N’échoue jamais. Compteur atomique : partageable entre requêtes.
#[derive(Debug, Default)]
pub struct EvaluateurIncremental {
    courant: AtomicI64,
}

impl EvaluateurIncremental {
    pub fn depuis(depart: i64) -> Self {
        Self {
            courant: AtomicI64::new(depart),
        }
    }

    /// Prochaine valeur rendue (sans la consommer).
    pub fn courant(&self) -> i64 {
        self.courant.load(Ordering::SeqCst)
    }
}

impl Evaluateur for EvaluateurIncremental {
    fn evaluer(&self, _expression: &str) -> Result<String, ErreurEval> {
        Ok(self.courant.fetch_add(1, Ordering::SeqCst).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn arithmetique_delegue_au_noyau() {
        let ev = EvaluateurArithmetique;
        assert_eq!(ev.evaluer("2+3*4"), Ok("14".to_string()));
        assert_eq!(ev.evaluer("5/0"), Err(ErreurEval::DivisionParZero));
    }

    #[test]
    fn incremental_ignore_l_entree() {
        let ev = EvaluateurIncremental::default();
        assert_eq!(ev.evaluer("n’importe quoi").as_deref(), Ok("0"));
        assert_eq!(ev.evaluer("").as_deref(), Ok("1"));
        assert_eq!(ev.evaluer("5/0").as_deref(), Ok("2"));
        assert_eq!(ev.courant(), 3);
    }

    #[test]
    fn incremental_depart_choisi() {
        let ev = EvaluateurIncremental::depuis(41);
        assert_eq!(ev.evaluer("x").as_deref(), Ok("41"));
        assert_eq!(ev.evaluer("x").as_deref(), Ok("42"));
    }

    #[test]
    fn variantes_interchangeables() {
        let variantes: Vec<Arc<dyn Evaluateur>> = vec![
            Arc::new(EvaluateurArithmetique),
            Arc::new(EvaluateurIncremental::depuis(7)),
        ];
        let sorties: Vec<String> = variantes
            .iter()
            .map(|ev| ev.evaluer("1+1").unwrap_or_default())
            .collect();
        assert_eq!(sorties, vec!["2".to_string(), "7".to_string()]);
    }
}
