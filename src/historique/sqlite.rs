//! Historique persistant (table relationnelle `history`) via SQLite.
//!
//! Une seule connexion, sérialisée par un `Mutex` : rusqlite n’est pas `Sync`.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::{params, Connection, OpenFlags};

use super::{Calcul, ErreurStockage, StockageHistorique};

const SCHEMA_SQL: &str = "
    CREATE TABLE IF NOT EXISTS history (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        expression  TEXT NOT NULL,
        result      TEXT NOT NULL
    );
";

pub struct HistoriqueSqlite {
    conn: Mutex<Connection>,
}

impl HistoriqueSqlite {
    /// Ouvre (ou crée) la base au chemin donné, répertoires parents compris.
    pub fn ouvrir(chemin: impl AsRef<Path>) -> Result<Self, ErreurStockage> {
        let chemin = chemin.as_ref();

        if let Some(parent) = chemin.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open_with_flags(
            chemin,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        tracing::info!(chemin = %chemin.display(), "historique SQLite ouvert");
        Self::avec_schema(conn)
    }

    /// Base éphémère (tests, démo).
    pub fn en_memoire() -> Result<Self, ErreurStockage> {
        Self::avec_schema(Connection::open_in_memory()?)
    }

    fn avec_schema(conn: Connection) -> Result<Self, ErreurStockage> {
        conn.execute_batch(SCHEMA_SQL)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

impl StockageHistorique for HistoriqueSqlite {
    fn enregistrer(&self, calcul: Calcul) -> Result<(), ErreurStockage> {
        let conn = self.conn.lock().map_err(|_| ErreurStockage::Verrou)?;
        conn.execute(
            "INSERT INTO history (expression, result) VALUES (?1, ?2)",
            params![calcul.expression, calcul.resultat],
        )?;
        Ok(())
    }

    fn historique(&self) -> Result<Vec<Calcul>, ErreurStockage> {
        let conn = self.conn.lock().map_err(|_| ErreurStockage::Verrou)?;
        let mut stmt = conn.prepare("SELECT expression, result FROM history ORDER BY id")?;

        let lignes = stmt.query_map([], |row| {
            Ok(Calcul {
                expression: row.get(0)?,
                resultat: row.get(1)?,
            })
        })?;

        let mut calculs = Vec::new();
        for ligne in lignes {
            calculs.push(ligne?);
        }
        Ok(calculs)
    }
}
