//! Tests scientifiques (campagne) : propriétés du noyau, cas limites.
//!
//! - précédence et associativité
//! - frontière du moins unaire (`-5+3` accepté, `3*-2` refusé)
//! - classification des erreurs (vide / syntaxe / division par zéro)
//! - déterminisme (même entrée => même sortie, octet pour octet)

use std::time::{Duration, Instant};

use super::{eval_expression, ErreurEval};

fn eval_ok(expr: &str) -> String {
    eval_expression(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_eq_expr(expr: &str, attendu: &str) {
    assert_eq!(eval_ok(expr), attendu, "expr={expr:?}");
}

fn assert_syntaxe(expr: &str) {
    match eval_expression(expr) {
        Err(ErreurEval::Syntaxe(_)) => {}
        autre => panic!("expr={expr:?} : syntaxe attendue, obtenu {autre:?}"),
    }
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Précédence ------------------------ */

#[test]
fn sci_precedence_de_reference() {
    assert_eq_expr("2+3*4", "14");
    assert_eq_expr("(2+3)*4", "20");
}

#[test]
fn sci_precedence_melangee() {
    assert_eq_expr("1+2*3-4/2", "5");
    assert_eq_expr("2*3/4*8", "12");
    assert_eq_expr("1-2*3+4", "-1");
    assert_eq_expr("(1-2)*(3+4)", "-7");
}

/* ------------------------ Moins unaire (frontière conservée) ------------------------ */

#[test]
fn sci_moins_unaire_en_tete_seulement() {
    assert_eq_expr("-5+3", "-2");
    assert_eq_expr("(-5)*(-3)", "15");
    assert_syntaxe("3*-2");
    assert_syntaxe("3/-2");
    assert_syntaxe("3--2");
}

/* ------------------------ Erreurs ------------------------ */

#[test]
fn sci_parentheses_desequilibrees() {
    assert_syntaxe("(1+2");
    assert_syntaxe("1+2)");
    assert_syntaxe("((1+2)");
    assert_syntaxe("(1+2))");
}

#[test]
fn sci_operateurs_consecutifs() {
    assert_syntaxe("1+*2");
    assert_syntaxe("1*/2");
    assert_syntaxe("1++2");
}

#[test]
fn sci_division_par_zero() {
    for e in ["5/0", "5/(2-2)", "1/0.0", "(1+1)/(0*3)", "-(4/(1-1))"] {
        assert_eq!(
            eval_expression(e),
            Err(ErreurEval::DivisionParZero),
            "expr={e:?}"
        );
    }
}

#[test]
fn sci_entree_vide() {
    assert_eq!(eval_expression(""), Err(ErreurEval::EntreeVide));
    assert_eq!(eval_expression("\n"), Err(ErreurEval::EntreeVide));
}

#[test]
fn sci_operateur_en_bord() {
    assert_syntaxe("+1");
    assert_syntaxe("*1");
    assert_syntaxe("1+");
    assert_syntaxe("-");
    assert_syntaxe("(1)-");
}

/* ------------------------ Rendu ------------------------ */

#[test]
fn sci_rendu_decimal() {
    assert_eq_expr("1.5+2.5", "4");
    assert_eq_expr("1/3", "0.3333333333");
    assert_eq_expr("10/4", "2.5");
    assert_eq_expr("99999*100000", "9999900000");
    assert_eq_expr("99999*1000000", "9.9999e+10");
    assert_eq_expr("1/100000", "1e-05");
}

/* ------------------------ Déterminisme ------------------------ */

#[test]
fn sci_idempotence() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    for e in ["2+3*4", "(1.25-3)/7", "-(((2)))*8/3", "0.1+0.2"] {
        let premiere = eval_ok(e);
        for _ in 0..50 {
            budget(t0, max);
            assert_eq!(eval_ok(e), premiere, "expr={e:?}");
        }
    }
}

/* ------------------------ Stress borné ------------------------ */

#[test]
fn sci_longue_somme() {
    let expr = vec!["1"; 2000].join("+");
    assert_eq_expr(&expr, "2000");
}

#[test]
fn sci_imbrication_profonde_bornee() {
    let n = 200;
    let expr = format!("{}7{}", "(".repeat(n), ")".repeat(n));
    assert_eq_expr(&expr, "7");
}

#[test]
fn sci_imbrication_tres_profonde() {
    let n = 100_000;
    let expr = format!("{}7{}", "(".repeat(n), ")".repeat(n));
    assert_eq_expr(&expr, "7");

    // signe à chaque niveau : (-1)^n * 7
    let signes = format!("{}7{}", "-(".repeat(n + 1), ")".repeat(n + 1));
    assert_eq_expr(&signes, "-7");
}

#[test]
fn sci_imbrication_profonde_temps_lineaire() {
    // ~1 Mo : un rebalayage par niveau serait quadratique
    let n = 500_000;
    let expr = format!("{}1+2{}*3", "(".repeat(n), ")".repeat(n));
    let t0 = Instant::now();
    assert_eq_expr(&expr, "9");
    budget(t0, Duration::from_secs(10));

    let t0 = Instant::now();
    assert_syntaxe(&format!("{}1+{}", "(".repeat(n), ")".repeat(n)));
    budget(t0, Duration::from_secs(10));
}
