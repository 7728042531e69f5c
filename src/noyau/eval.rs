//! Noyau — évaluation (pipeline réel)
//!
//! saut final retiré -> validation -> évaluation récursive sur bornes [g, d)
//!        -> réduction par précédence -> format %g (10 chiffres significatifs)
//!
//! L’évaluation récursive suppose une entrée déjà validée : elle ne revérifie
//! ni l’alphabet ni l’adjacence, seulement ce qu’elle doit lire elle-même.

use super::caracteres::{est_litteral, est_operateur, sans_saut_final, Operateur};
use super::erreur::ErreurEval;
use super::format::format_g10;
use super::validation::valider;

/// API publique : évalue une expression et retourne le résultat formaté.
pub fn eval_expression(expr_str: &str) -> Result<String, ErreurEval> {
    let s = sans_saut_final(expr_str);

    // 1) Validation (court-circuite sur entrée vide)
    valider(s)?;

    // 2) Évaluation récursive sur toute l’expression
    let valeur = evaluer(s, 0, s.len())?;

    // 3) Rendu
    let rendu = format_g10(valeur);
    tracing::debug!(expression = %s, resultat = %rendu, "expression évaluée");
    Ok(rendu)
}

/// Évalue la sous-expression `[gauche, droite)`.
///
/// Chaque `(` ouvre un cadre sur une pile explicite, refermé à sa `)` :
/// la profondeur d’imbrication ne coûte que du tas, jamais la pile d’appel.
/// Travail linéaire en la longueur de la borne.
pub fn evaluer(expr: &str, gauche: usize, droite: usize) -> Result<f64, ErreurEval> {
    let octets = expr.as_bytes();
    verifier_bornes(octets, gauche, droite)?;
    let appariement = Appariement::calculer(octets, gauche, droite);

    let mut pile: Vec<Cadre> = Vec::new();
    let mut cadre = Cadre::new(false, droite);
    let mut pos = gauche;

    loop {
        let (mut valeur, mut fin) = match lire_terme(expr, pos, cadre.droite, &appariement)? {
            Terme::Nombre(v, fin) => (v, fin),
            Terme::Groupe {
                negatif,
                interieur,
                fermante,
            } => {
                verifier_bornes(octets, interieur, fermante)?;
                pile.push(std::mem::replace(&mut cadre, Cadre::new(negatif, fermante)));
                pos = interieur;
                continue;
            }
        };

        // Terme complet : on le range, puis on referme les cadres qu’il termine.
        loop {
            cadre.valeurs.push(valeur);
            if fin < cadre.droite {
                break;
            }

            let v = cadre.reduire()?;
            let Some(parent) = pile.pop() else {
                return Ok(v);
            };
            let ferme = std::mem::replace(&mut cadre, parent);

            let apres = ferme.droite + 1;
            if apres < cadre.droite && !est_operateur(octets[apres]) {
                return Err(ErreurEval::syntaxe(format!(
                    "opérateur attendu après ')' (position {apres})"
                )));
            }
            valeur = if ferme.negatif { -v } else { v };
            fin = apres;
        }

        let op = Operateur::depuis_octet(octets[fin]).ok_or_else(|| {
            ErreurEval::syntaxe(format!(
                "opérateur attendu, trouvé '{}' (position {fin})",
                octets[fin] as char
            ))
        })?;
        cadre.operateurs.push(op);
        pos = fin + 1;
    }
}

/// Bornes non vides ; seul `-` (signe) peut ouvrir une borne, rien ne peut la fermer.
fn verifier_bornes(octets: &[u8], gauche: usize, droite: usize) -> Result<(), ErreurEval> {
    if gauche >= droite || droite > octets.len() {
        return Err(ErreurEval::syntaxe(format!(
            "sous-expression vide (bornes {gauche}..{droite})"
        )));
    }

    let premier = octets[gauche];
    if est_operateur(premier) && premier != b'-' {
        return Err(ErreurEval::syntaxe(format!(
            "opérateur '{}' en tête (position {gauche})",
            premier as char
        )));
    }
    let dernier = octets[droite - 1];
    if est_operateur(dernier) {
        return Err(ErreurEval::syntaxe(format!(
            "opérateur '{}' en fin (position {})",
            dernier as char,
            droite - 1
        )));
    }
    Ok(())
}

/// Sous-expression en cours : termes lus, opérateurs lus, signe du groupe.
struct Cadre {
    valeurs: Vec<f64>,
    operateurs: Vec<Operateur>,
    negatif: bool,
    /// Borne droite exclusive (position de la `)`, ou fin de l’expression).
    droite: usize,
}

impl Cadre {
    fn new(negatif: bool, droite: usize) -> Self {
        Self {
            valeurs: Vec::new(),
            operateurs: Vec::new(),
            negatif,
            droite,
        }
    }

    fn reduire(&self) -> Result<f64, ErreurEval> {
        if self.valeurs.len() != self.operateurs.len() + 1 {
            return Err(ErreurEval::syntaxe("termes et opérateurs incohérents"));
        }
        reduire(&self.valeurs, &self.operateurs)
    }
}

/// `)` associée à chaque `(` de la borne, calculée en une seule passe.
struct Appariement {
    origine: usize,
    fermantes: Vec<Option<usize>>,
}

impl Appariement {
    fn calculer(octets: &[u8], gauche: usize, droite: usize) -> Self {
        let mut fermantes = vec![None; droite - gauche];
        let mut ouvertes: Vec<usize> = Vec::new();
        for (i, &c) in octets[gauche..droite].iter().enumerate() {
            match c {
                b'(' => ouvertes.push(i),
                b')' => {
                    if let Some(o) = ouvertes.pop() {
                        fermantes[o] = Some(gauche + i);
                    }
                }
                _ => {}
            }
        }
        Self {
            origine: gauche,
            fermantes,
        }
    }

    fn fermante(&self, ouvrante: usize) -> Option<usize> {
        ouvrante
            .checked_sub(self.origine)
            .and_then(|i| self.fermantes.get(i).copied().flatten())
    }
}

/// Ce que `lire_terme` trouve en tête de terme.
#[derive(Debug, PartialEq)]
enum Terme {
    /// Littéral signé et indice juste après.
    Nombre(f64, usize),
    /// Groupe parenthésé : signe, début de l’intérieur, position de la `)`.
    Groupe {
        negatif: bool,
        interieur: usize,
        fermante: usize,
    },
}

/// Lit un terme (signe éventuel + nombre ou parenthèse) à partir de `debut`.
fn lire_terme(
    expr: &str,
    debut: usize,
    droite: usize,
    appariement: &Appariement,
) -> Result<Terme, ErreurEval> {
    let octets = expr.as_bytes();

    let (negatif, pos) = match octets.get(debut) {
        Some(b'-') if debut < droite => (true, debut + 1),
        _ => (false, debut),
    };
    if pos >= droite {
        return Err(ErreurEval::syntaxe(format!(
            "terme manquant (position {pos})"
        )));
    }

    if octets[pos] == b'(' {
        let fermante = appariement
            .fermante(pos)
            .filter(|&f| f < droite)
            .ok_or_else(|| ErreurEval::syntaxe(format!("'(' sans ')' (position {pos})")))?;
        return Ok(Terme::Groupe {
            negatif,
            interieur: pos + 1,
            fermante,
        });
    }

    let fin = octets[pos..droite]
        .iter()
        .position(|&c| !est_litteral(c))
        .map_or(droite, |n| pos + n);
    let magnitude = lire_nombre(expr, pos, fin)?;
    Ok(Terme::Nombre(if negatif { -magnitude } else { magnitude }, fin))
}

/// Littéral décimal standard : `12`, `1.5`, `.5`, `5.` ; refuse `1.2.3`, `.`, vide.
fn lire_nombre(expr: &str, debut: usize, fin: usize) -> Result<f64, ErreurEval> {
    let texte = &expr[debut..fin];
    texte.parse::<f64>().map_err(|_| {
        if texte.is_empty() {
            ErreurEval::syntaxe(format!("nombre attendu (position {debut})"))
        } else {
            ErreurEval::syntaxe(format!("nombre invalide '{texte}' (position {debut})"))
        }
    })
}

/// Réduction par précédence, en une passe gauche -> droite.
///
/// Chaque groupe multiplicatif (`*`, `/`) est replié dans une valeur courante,
/// puis versé dans le total avec l’opérateur additif qui le précède.
/// Invariant : `valeurs.len() == operateurs.len() + 1`.
pub fn reduire(valeurs: &[f64], operateurs: &[Operateur]) -> Result<f64, ErreurEval> {
    if valeurs.len() != operateurs.len() + 1 {
        return Err(ErreurEval::syntaxe("termes et opérateurs incohérents"));
    }

    let mut total: Option<f64> = None;
    let mut additif = Operateur::Plus;
    let mut i = 0;

    while i < valeurs.len() {
        let mut courant = valeurs[i];

        while let Some(&op) = operateurs.get(i).filter(|op| op.est_multiplicatif()) {
            let droite = valeurs[i + 1];
            courant = match op {
                Operateur::Fois => courant * droite,
                _ => {
                    if droite == 0.0 {
                        return Err(ErreurEval::DivisionParZero);
                    }
                    courant / droite
                }
            };
            i += 1;
        }

        total = Some(match total {
            None => courant,
            Some(t) if additif == Operateur::Moins => t - courant,
            Some(t) => t + courant,
        });

        if let Some(&op) = operateurs.get(i) {
            additif = op;
        }
        i += 1;
    }

    total.ok_or_else(|| ErreurEval::syntaxe("aucun terme"))
}
