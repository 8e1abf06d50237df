use crate::database::Database;
use crate::model::cluster::Cluster;
use crate::model::mint::MintRecord;
use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{Result, params};
use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

fn parse_column<T: FromStr>(index: usize, value: String) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    T::from_str(&value)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}

impl Database {
    /// Records a created mint. Fails on a duplicate symbol within the cluster.
    pub fn insert_mint(&self, record: &MintRecord) -> Result<()> {
        self.execute(
            "INSERT INTO mint (mint, cluster, name, symbol, decimals, authority, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
            params![
                record.mint.to_string(),
                record.cluster.as_str(),
                record.name,
                record.symbol,
                record.decimals,
                record.authority.to_string(),
                record.created_at.timestamp(),
            ],
        )?;
        Ok(())
    }

    /// Mints registered on `cluster`, oldest first.
    pub fn get_mints(&self, cluster: Cluster) -> Result<Vec<MintRecord>> {
        let conn = self.connection();
        let mut stmt = conn.prepare(
            "SELECT mint, name, symbol, decimals, authority, created_at
             FROM mint WHERE cluster = ? ORDER BY created_at, rowid",
        )?;

        let rows = stmt.query_map(params![cluster.as_str()], |row| {
            let created_at: i64 = row.get(5)?;
            Ok(MintRecord {
                mint: parse_column::<Pubkey>(0, row.get(0)?)?,
                name: row.get(1)?,
                symbol: row.get(2)?,
                decimals: row.get(3)?,
                authority: parse_column::<Pubkey>(4, row.get(4)?)?,
                cluster,
                created_at: DateTime::<Utc>::from_timestamp(created_at, 0).unwrap_or_default(),
            })
        })?;

        rows.collect()
    }
}
