//! SQLite 기반 상태 저장소
//!
//! 체인 상태와 플레이어 통계를 JSON 블롭으로 저장합니다.

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};

use crate::game::ChainState;
use crate::stats::PlayerStats;

use super::{GameStore, StoreError};

/// SQLite 상태 저장소
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// 파일 경로로 저장소 열기 (없으면 생성)
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        log::debug!("상태 저장소 열기: {}", path.as_ref().display());
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// 메모리 저장소 열기 (테스트용)
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    fn initialize_schema(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS chain_states (
                surface_id INTEGER PRIMARY KEY,
                state TEXT NOT NULL
            );
            CREATE TABLE IF NOT EXISTS player_stats (
                player_id INTEGER PRIMARY KEY,
                stats TEXT NOT NULL
            );",
        )?;
        Ok(())
    }
}

impl GameStore for SqliteStore {
    fn load_chain(&self, surface_id: u64) -> Result<Option<ChainState>, StoreError> {
        let json: Option<String> = self
            .conn
            .query_row(
                "SELECT state FROM chain_states WHERE surface_id = ?1",
                params![surface_id as i64],
                |row| row.get(0),
            )
            .optional()?;
        match json {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    fn save_chain(&self, state: &ChainState) -> Result<(), StoreError> {
        let json = serde_json::to_string(state)?;
        self.conn.execute(
            "INSERT INTO chain_states (surface_id, state) VALUES (?1, ?2)
             ON CONFLICT (surface_id) DO UPDATE SET state = excluded.state",
            params![state.surface_id as i64, json],
        )?;
        Ok(())
    }

    fn load_stats(&self, player_id: u64) -> Result<Option<PlayerStats>, StoreError> {
        let json: Option<String> = self
            .conn
            .query_row(
                "SELECT stats FROM player_stats WHERE player_id = ?1",
                params![player_id as i64],
                |row| row.get(0),
            )
            .optional()?;
        match json {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    fn save_stats(&self, stats: &PlayerStats) -> Result<(), StoreError> {
        let json = serde_json::to_string(stats)?;
        self.conn.execute(
            "INSERT INTO player_stats (player_id, stats) VALUES (?1, ?2)
             ON CONFLICT (player_id) DO UPDATE SET stats = excluded.stats",
            params![stats.player_id as i64, json],
        )?;
        Ok(())
    }
}
