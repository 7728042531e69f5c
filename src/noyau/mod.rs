//! Noyau arithmétique
//!
//! Organisation interne :
//! - caracteres.rs : classes de caractères partagées + opérateurs
//! - validation.rs : balayage syntaxique unique (garde-barrière)
//! - eval.rs       : évaluation récursive sur bornes + réduction par précédence
//! - format.rs     : rendu %g (10 chiffres significatifs)
//! - erreur.rs     : EntreeVide / Syntaxe / DivisionParZero
//! - evaluateur.rs : capacité `Evaluateur` et ses variantes

pub mod caracteres;
pub mod erreur;
pub mod eval;
pub mod evaluateur;
pub mod format;
pub mod validation;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurEval;
pub use eval::eval_expression;
pub use evaluateur::{Evaluateur, EvaluateurArithmetique, EvaluateurIncremental};
