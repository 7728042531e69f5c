//! Calculatrice historique
//!
//! - noyau      : validation + évaluation récursive + rendu %g (pur, sans état)
//! - historique : contrat de stockage + backends mémoire / SQLite
//! - api        : POST /calculate, GET /history (axum, natif seulement)
//! - config     : configuration TOML du serveur (natif seulement)
//! - app        : calculatrice egui (natif + web)

#![forbid(unsafe_code)]

pub mod app;
pub mod historique;
pub mod noyau;

#[cfg(not(target_arch = "wasm32"))]
pub mod api;
#[cfg(not(target_arch = "wasm32"))]
pub mod config;

pub use noyau::{eval_expression, ErreurEval, Evaluateur};
