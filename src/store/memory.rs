//! 메모리 기반 상태 저장소 (테스트/단일 프로세스용)

use std::collections::HashMap;
use std::sync::Mutex;

use crate::game::ChainState;
use crate::stats::PlayerStats;

use super::{GameStore, StoreError};

/// 메모리 상태 저장소
#[derive(Default)]
pub struct MemoryStore {
    chains: Mutex<HashMap<u64, ChainState>>,
    stats: Mutex<HashMap<u64, PlayerStats>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameStore for MemoryStore {
    fn load_chain(&self, surface_id: u64) -> Result<Option<ChainState>, StoreError> {
        let chains = self.chains.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(chains.get(&surface_id).cloned())
    }

    fn save_chain(&self, state: &ChainState) -> Result<(), StoreError> {
        let mut chains = self.chains.lock().map_err(|_| StoreError::Poisoned)?;
        chains.insert(state.surface_id, state.clone());
        Ok(())
    }

    fn load_stats(&self, player_id: u64) -> Result<Option<PlayerStats>, StoreError> {
        let stats = self.stats.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(stats.get(&player_id).cloned())
    }

    fn save_stats(&self, stats: &PlayerStats) -> Result<(), StoreError> {
        let mut map = self.stats.lock().map_err(|_| StoreError::Poisoned)?;
        map.insert(stats.player_id, stats.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_round_trip() {
        let store = MemoryStore::new();
        assert!(store.load_chain(1).unwrap().is_none());

        let mut state = ChainState::new(1);
        state.initialize("사과", 100);
        store.save_chain(&state).unwrap();

        assert_eq!(store.load_chain(1).unwrap(), Some(state));
        assert!(store.load_chain(2).unwrap().is_none());
    }

    #[test]
    fn test_stats_round_trip() {
        let store = MemoryStore::new();
        let mut stats = PlayerStats::new(9);
        stats.record_play("사과");
        store.save_stats(&stats).unwrap();

        assert_eq!(store.load_stats(9).unwrap(), Some(stats));
    }

    #[test]
    fn test_load_or_create() {
        let store = MemoryStore::new();
        // 지연 생성: 조회만으로는 저장되지 않음
        let state = store.load_or_create_chain(5).unwrap();
        assert_eq!(state.surface_id, 5);
        assert!(store.load_chain(5).unwrap().is_none());

        let stats = store.load_or_create_stats(9).unwrap();
        assert_eq!(stats.player_id, 9);
        assert!(store.load_stats(9).unwrap().is_none());
    }
}
