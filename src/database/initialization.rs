use crate::database::Database;

pub const DATABASE_VERSION: u16 = 1;

impl Database {
    pub fn initialize(&self) -> rusqlite::Result<()> {
        self.execute(
            "CREATE TABLE IF NOT EXISTS settings (
                id INTEGER PRIMARY KEY CHECK (id = 1),
                last_wallet_adapter TEXT,
                database_version INTEGER NOT NULL
            )",
            [],
        )?;

        self.execute(
            "INSERT OR IGNORE INTO settings (id, last_wallet_adapter, database_version)
             VALUES (1, NULL, ?)",
            [DATABASE_VERSION],
        )?;

        self.execute(
            "CREATE TABLE IF NOT EXISTS mint (
                mint TEXT NOT NULL,
                cluster TEXT NOT NULL,
                name TEXT NOT NULL,
                symbol TEXT NOT NULL,
                decimals INTEGER NOT NULL,
                authority TEXT NOT NULL,
                created_at INTEGER NOT NULL,
                PRIMARY KEY (mint, cluster),
                UNIQUE (cluster, symbol)
            )",
            [],
        )?;

        self.execute(
            "CREATE INDEX IF NOT EXISTS idx_mint_cluster ON mint (cluster)",
            [],
        )?;

        Ok(())
    }

    pub fn database_version(&self) -> rusqlite::Result<u16> {
        self.connection().query_row(
            "SELECT database_version FROM settings WHERE id = 1",
            [],
            |row| row.get(0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_is_idempotent() {
        let db = Database::open_in_memory().unwrap();
        db.initialize().unwrap();
        db.initialize().unwrap();
        assert_eq!(db.database_version().unwrap(), DATABASE_VERSION);
    }
}
