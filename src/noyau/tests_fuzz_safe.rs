//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - expressions bien formées => jamais d’erreur de syntaxe
//!   (seule la division par zéro est tolérée)
//! - bruit aléatoire => jamais de panique, toujours une erreur classée

use std::time::{Duration, Instant};

use super::{eval_expression, ErreurEval};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    let entier = rng.pick(1000);
    match rng.pick(4) {
        0 => format!("{entier}.{}", rng.pick(100)),
        1 => format!(".{}", rng.pick(10)),
        _ => format!("{entier}"),
    }
}

fn gen_op(rng: &mut Rng) -> char {
    ['+', '-', '*', '/'][rng.pick(4) as usize]
}

/// Terme bien formé : nombre ou (sous-expression), signe seulement sous parenthèses.
fn gen_terme(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 || rng.pick(3) == 0 {
        return gen_nombre(rng);
    }
    let inner = gen_expr(rng, depth - 1);
    // pas de "(--" : le signe ne se double pas
    if rng.coin() && !inner.starts_with('-') {
        format!("(-{inner})")
    } else {
        format!("({inner})")
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    let n = 1 + rng.pick(4) as usize;
    let mut s = String::new();
    if rng.pick(4) == 0 {
        s.push('-');
    }
    s.push_str(&gen_terme(rng, depth));
    for _ in 1..n {
        s.push(gen_op(rng));
        s.push_str(&gen_terme(rng, depth));
    }
    s
}

fn gen_bruit(rng: &mut Rng) -> String {
    const ALPHABET: &[u8] = b"0123456789.()+-*/ x";
    let n = rng.pick(12) as usize;
    (0..n)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize] as char)
        .collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_bien_forme_jamais_syntaxe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        match eval_expression(&expr) {
            Ok(_) => seen_ok += 1,
            Err(ErreurEval::DivisionParZero) => {}
            Err(e) => panic!("erreur non attendue: expr={expr:?} err={e}"),
        }
    }

    assert!(seen_ok > 100, "trop peu de succès: {seen_ok}");
}

#[test]
fn fuzz_safe_determinisme() {
    let mut a = Rng::new(0xBADC0DE_u64);
    let mut b = Rng::new(0xBADC0DE_u64);

    for _ in 0..100 {
        let ea = gen_expr(&mut a, 3);
        let eb = gen_expr(&mut b, 3);
        assert_eq!(ea, eb);
        assert_eq!(eval_expression(&ea), eval_expression(&eb), "expr={ea:?}");
    }
}

#[test]
fn fuzz_safe_bruit_classe_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let mut rng = Rng::new(0x5EED_u64);
    let mut seen_err = 0usize;

    for _ in 0..500 {
        budget(t0, max);

        let expr = gen_bruit(&mut rng);
        match eval_expression(&expr) {
            Ok(r) => assert!(!r.is_empty(), "expr={expr:?}"),
            Err(ErreurEval::EntreeVide) => assert!(expr.is_empty(), "expr={expr:?}"),
            Err(_) => seen_err += 1,
        }
    }

    assert!(seen_err > 0, "aucune erreur vue: bruit trop “sage”");
}
