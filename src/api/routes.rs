//! POST /calculate et GET /history.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;

use super::reponses::{json, ReponseErreur, ReponseResultat, RequeteCalcul};
use super::EtatApi;
use crate::historique::Calcul;

pub fn routes() -> Router<Arc<EtatApi>> {
    Router::new()
        .route("/calculate", post(calculer))
        .route("/history", get(historique))
}

/// Évalue l’expression reçue ; n’enregistre que les succès.
///
/// - corps illisible        -> 400 + `Error`
/// - erreur d’évaluation    -> 200 + `Error` (faute de l’utilisateur, pas du serveur)
/// - échec de stockage      -> 500, corps vide
///
/// Évaluation et stockage (verrou, SQLite) tournent hors des fils de l’exécuteur.
async fn calculer(State(etat): State<Arc<EtatApi>>, corps: Bytes) -> Response {
    let requete: RequeteCalcul = match serde_json::from_slice(&corps) {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!(erreur = %e, "requête /calculate illisible");
            return json(
                StatusCode::BAD_REQUEST,
                ReponseErreur::new(format!("Requête invalide : {e}")),
            );
        }
    };

    let evaluation = {
        let etat = Arc::clone(&etat);
        let expression = requete.expression.clone();
        hors_executeur(move || etat.evaluateur.evaluer(&expression)).await
    };
    let resultat = match evaluation {
        Ok(Ok(r)) => r,
        Ok(Err(e)) => {
            tracing::debug!(expression = %requete.expression, erreur = %e, "évaluation refusée");
            return json(StatusCode::OK, ReponseErreur::new(e.to_string()));
        }
        Err(statut) => return statut.into_response(),
    };

    let calcul = Calcul::new(requete.expression, resultat.clone());
    match hors_executeur(move || etat.stockage.enregistrer(calcul)).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => {
            tracing::error!(erreur = %e, "enregistrement de l’historique impossible");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
        Err(statut) => return statut.into_response(),
    }

    tracing::info!(resultat = %resultat, "calcul enregistré");
    json(StatusCode::OK, ReponseResultat { resultat })
}

async fn historique(State(etat): State<Arc<EtatApi>>) -> Response {
    match hors_executeur(move || etat.stockage.historique()).await {
        Ok(Ok(calculs)) => json(StatusCode::OK, calculs),
        Ok(Err(e)) => {
            tracing::error!(erreur = %e, "lecture de l’historique impossible");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
        Err(statut) => statut.into_response(),
    }
}

/// Lance un travail bloquant sur le pool dédié de tokio ; une tâche avortée donne un 500.
async fn hors_executeur<F, T>(travail: F) -> Result<T, StatusCode>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(travail).await.map_err(|e| {
        tracing::error!(erreur = %e, "tâche bloquante interrompue");
        StatusCode::INTERNAL_SERVER_ERROR
    })
}
