// src/noyau/caracteres.rs
//
// Classes de caractères partagées par la validation et l’évaluation.
// Le noyau travaille octet par octet : tout caractère admis est ASCII.

/// Opérateur binaire (ou signe, pour `-` en tête de terme).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    pub fn depuis_octet(c: u8) -> Option<Self> {
        match c {
            b'+' => Some(Self::Plus),
            b'-' => Some(Self::Moins),
            b'*' => Some(Self::Fois),
            b'/' => Some(Self::Divise),
            _ => None,
        }
    }

    /// `*` et `/` passent avant `+` et `-`.
    pub fn est_multiplicatif(self) -> bool {
        matches!(self, Self::Fois | Self::Divise)
    }
}

pub fn est_chiffre(c: u8) -> bool {
    c.is_ascii_digit()
}

pub fn est_point(c: u8) -> bool {
    c == b'.'
}

/// Caractère d’un littéral numérique (chiffre ou point décimal).
pub fn est_litteral(c: u8) -> bool {
    est_chiffre(c) || est_point(c)
}

pub fn est_operateur(c: u8) -> bool {
    Operateur::depuis_octet(c).is_some()
}

pub fn est_parenthese(c: u8) -> bool {
    c == b'(' || c == b')'
}

/// Alphabet complet admis par la validation.
pub fn est_admis(c: u8) -> bool {
    est_litteral(c) || est_parenthese(c) || est_operateur(c)
}

/// Retire UN saut de ligne final (et rien d’autre).
pub fn sans_saut_final(s: &str) -> &str {
    s.strip_suffix('\n').unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_admis() {
        for c in b"0123456789.()+-*/" {
            assert!(est_admis(*c), "{}", *c as char);
        }
        for c in b" xe,^\t\r" {
            assert!(!est_admis(*c), "{}", *c as char);
        }
    }

    #[test]
    fn un_seul_saut_retire() {
        assert_eq!(sans_saut_final("1+2\n"), "1+2");
        assert_eq!(sans_saut_final("1+2\n\n"), "1+2\n");
        assert_eq!(sans_saut_final("\n"), "");
        assert_eq!(sans_saut_final("1+2\r\n"), "1+2\r");
    }
}
