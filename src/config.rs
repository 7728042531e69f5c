//! Configuration du serveur : écoute, délais, backend d’historique, évaluateur.
//!
//! Chargée depuis un fichier TOML ; toute clé absente prend sa valeur par défaut.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Variable d’environnement qui remplace le port du fichier.
pub const ENV_PORT: &str = "CALCULATRICE_PORT";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigServeur {
    #[serde(default)]
    pub serveur: Ecoute,
    #[serde(default)]
    pub delais: Delais,
    #[serde(default)]
    pub historique: ConfigHistorique,
    #[serde(default)]
    pub evaluateur: ConfigEvaluateur,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ecoute {
    #[serde(default = "hote_defaut")]
    pub hote: String,
    #[serde(default = "port_defaut")]
    pub port: u16,
}

/// Délai de lecture + écriture d’une requête.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Delais {
    #[serde(default = "requete_defaut")]
    pub requete_secondes: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Memoire,
    Sqlite,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigHistorique {
    #[serde(default)]
    pub backend: Backend,
    #[serde(default = "chemin_defaut")]
    pub chemin: PathBuf,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenreEvaluateur {
    #[default]
    Arithmetique,
    Incremental,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigEvaluateur {
    #[serde(default)]
    pub genre: GenreEvaluateur,
}

fn hote_defaut() -> String {
    "0.0.0.0".to_string()
}

fn port_defaut() -> u16 {
    8081
}

fn requete_defaut() -> u64 {
    10
}

fn chemin_defaut() -> PathBuf {
    PathBuf::from("calculatrice.db")
}

impl Default for Ecoute {
    fn default() -> Self {
        Self {
            hote: hote_defaut(),
            port: port_defaut(),
        }
    }
}

impl Default for Delais {
    fn default() -> Self {
        Self {
            requete_secondes: requete_defaut(),
        }
    }
}

impl Default for ConfigHistorique {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            chemin: chemin_defaut(),
        }
    }
}

impl ConfigServeur {
    pub fn depuis_fichier(chemin: impl AsRef<Path>) -> Result<Self> {
        let chemin = chemin.as_ref();
        let contenu = std::fs::read_to_string(chemin)
            .with_context(|| format!("lecture de la config {}", chemin.display()))?;
        Self::depuis_toml(&contenu)
            .with_context(|| format!("analyse de la config {}", chemin.display()))
    }

    pub fn depuis_toml(contenu: &str) -> Result<Self> {
        Ok(toml::from_str(contenu)?)
    }

    /// Applique `CALCULATRICE_PORT` si la variable est présente et valide.
    pub fn appliquer_env(&mut self) {
        if let Some(port) = std::env::var(ENV_PORT).ok().and_then(|p| p.parse().ok()) {
            self.serveur.port = port;
        }
    }

    pub fn adresse(&self) -> String {
        format!("{}:{}", self.serveur.hote, self.serveur.port)
    }
}
