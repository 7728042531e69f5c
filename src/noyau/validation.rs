// src/noyau/validation.rs
//
// Garde-barrière syntaxique : un seul balayage gauche -> droite.
// Aucune construction de valeurs ici, on ne fait que filtrer le flux.

use super::caracteres::{est_admis, est_chiffre, est_operateur};
use super::erreur::ErreurEval;

/// Valide une expression déjà débarrassée de son saut de ligne final.
///
/// Règles :
/// - alphabet : chiffres, `.`, `(`, `)`, `+ - * /`
/// - pas deux opérateurs consécutifs (donc `3*-2` refusé)
/// - pas de chiffre juste avant `(` (pas de multiplication implicite `2(3)`)
/// - pas de chiffre ni de `(` juste après `)`
/// - équilibre des parenthèses jamais négatif, nul à la fin
pub fn valider(expr: &str) -> Result<(), ErreurEval> {
    let octets = expr.as_bytes();
    if octets.is_empty() {
        return Err(ErreurEval::EntreeVide);
    }

    let mut equilibre: i64 = 0;
    let mut precedent: Option<u8> = None;

    for (i, &c) in octets.iter().enumerate() {
        if !est_admis(c) {
            // position en caractères, pas en octets (entrée arbitraire)
            let car = expr[i..].chars().next().unwrap_or('?');
            return Err(ErreurEval::syntaxe(format!(
                "caractère inattendu '{car}' (position {i})"
            )));
        }

        if let Some(p) = precedent {
            if est_operateur(p) && est_operateur(c) {
                return Err(ErreurEval::syntaxe(format!(
                    "opérateurs consécutifs (position {i})"
                )));
            }
            if c == b'(' && est_chiffre(p) {
                return Err(ErreurEval::syntaxe(format!(
                    "chiffre collé à '(' (position {i})"
                )));
            }
            if p == b')' && (est_chiffre(c) || c == b'(') {
                return Err(ErreurEval::syntaxe(format!(
                    "')' suivie de '{}' (position {i})",
                    c as char
                )));
            }
        }

        match c {
            b'(' => equilibre += 1,
            b')' => {
                equilibre -= 1;
                if equilibre < 0 {
                    return Err(ErreurEval::syntaxe(format!(
                        "')' sans '(' (position {i})"
                    )));
                }
            }
            _ => {}
        }

        precedent = Some(c);
    }

    if equilibre != 0 {
        return Err(ErreurEval::syntaxe("parenthèses non fermées"));
    }

    Ok(())
}
