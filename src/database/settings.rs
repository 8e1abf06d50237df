use crate::database::Database;
use crate::wallet::WalletAdapterKind;
use rusqlite::{OptionalExtension, Result, params};

impl Database {
    /// Remembers the adapter the user last connected with, for auto-connect.
    pub fn set_last_wallet_adapter(&self, kind: WalletAdapterKind) -> Result<()> {
        self.execute(
            "UPDATE settings SET last_wallet_adapter = ? WHERE id = 1",
            params![kind.as_setting_str()],
        )?;
        Ok(())
    }

    pub fn clear_last_wallet_adapter(&self) -> Result<()> {
        self.execute(
            "UPDATE settings SET last_wallet_adapter = NULL WHERE id = 1",
            [],
        )?;
        Ok(())
    }

    /// Unknown adapter names are treated as absent.
    pub fn get_last_wallet_adapter(&self) -> Result<Option<WalletAdapterKind>> {
        let value: Option<Option<String>> = self
            .connection()
            .query_row(
                "SELECT last_wallet_adapter FROM settings WHERE id = 1",
                [],
                |row| row.get(0),
            )
            .optional()?;

        Ok(value
            .flatten()
            .and_then(|name| WalletAdapterKind::from_setting_str(&name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_adapter_round_trip() {
        let db = Database::open_in_memory().unwrap();
        db.initialize().unwrap();
        assert_eq!(db.get_last_wallet_adapter().unwrap(), None);

        db.set_last_wallet_adapter(WalletAdapterKind::SeedPhrase)
            .unwrap();
        assert_eq!(
            db.get_last_wallet_adapter().unwrap(),
            Some(WalletAdapterKind::SeedPhrase)
        );

        db.clear_last_wallet_adapter().unwrap();
        assert_eq!(db.get_last_wallet_adapter().unwrap(), None);
    }

    #[test]
    fn unknown_adapter_is_ignored() {
        let db = Database::open_in_memory().unwrap();
        db.initialize().unwrap();
        db.execute(
            "UPDATE settings SET last_wallet_adapter = 'ledger' WHERE id = 1",
            [],
        )
        .unwrap();
        assert_eq!(db.get_last_wallet_adapter().unwrap(), None);
    }
}
