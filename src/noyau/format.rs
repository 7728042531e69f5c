// src/noyau/format.rs
//
// Rendu “général” (à la %g) avec un budget fixe de chiffres significatifs.

/// Budget de chiffres significatifs du rendu.
pub const CHIFFRES_SIGNIFICATIFS: usize = 10;

/// Formate comme `%.10g` : notation fixe ou exponentielle selon l’exposant,
/// zéros de queue et point final superflus retirés. `4.0` -> `4`.
pub fn format_g10(x: f64) -> String {
    format_general(x, CHIFFRES_SIGNIFICATIFS)
}

/// `%.{p}g` générique (p >= 1).
pub fn format_general(x: f64, p: usize) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }

    let p = p.max(1);
    let signe = if x.is_sign_negative() { "-" } else { "" };
    let a = x.abs();

    // L’exposant se lit APRÈS arrondi à p chiffres (9.9999999999 -> 1e1).
    let sci = format!("{:.*e}", p - 1, a);
    let (mantisse, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exp < -4 || exp >= p as i32 {
        let m = sans_zeros_de_queue(mantisse);
        let es = if exp < 0 { '-' } else { '+' };
        return format!("{signe}{m}e{es}{:02}", exp.unsigned_abs());
    }

    let decimales = (p as i32 - 1 - exp).max(0) as usize;
    let fixe = format!("{:.*}", decimales, a);
    format!("{signe}{}", sans_zeros_de_queue(&fixe))
}

fn sans_zeros_de_queue(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
