//! Corps JSON de l’API. Noms de champs en majuscule initiale (`Expression`,
//! `Result`, `Error`), comme les clients existants les attendent.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequeteCalcul {
    #[serde(default, rename = "Expression", alias = "expression")]
    pub expression: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReponseResultat {
    #[serde(rename = "Result")]
    pub resultat: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReponseErreur {
    #[serde(rename = "Error")]
    pub erreur: String,
}

impl ReponseErreur {
    pub fn new(erreur: impl Into<String>) -> Self {
        Self {
            erreur: erreur.into(),
        }
    }
}

/// Corps JSON + statut (Content-Type posé par `Json`).
pub fn json<T: Serialize>(statut: StatusCode, corps: T) -> Response {
    (statut, Json(corps)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requete_noms_tolerants() {
        let a: RequeteCalcul = serde_json::from_str(r#"{"Expression":"1+1"}"#).unwrap();
        let b: RequeteCalcul = serde_json::from_str(r#"{"expression":"1+1"}"#).unwrap();
        assert_eq!(a.expression, "1+1");
        assert_eq!(b.expression, "1+1");
    }

    #[test]
    fn requete_champ_absent_vide() {
        let r: RequeteCalcul = serde_json::from_str(r#"{"autre":3}"#).unwrap();
        assert!(r.expression.is_empty());
    }

    #[test]
    fn reponses_serialisees() {
        let ok = serde_json::to_string(&ReponseResultat {
            resultat: "14".into(),
        })
        .unwrap();
        assert_eq!(ok, r#"{"Result":"14"}"#);

        let err = serde_json::to_string(&ReponseErreur::new("Entrée vide")).unwrap();
        assert_eq!(err, r#"{"Error":"Entrée vide"}"#);
    }
}
