//! 게임 상태 영속 계층
//!
//! 체인 상태와 플레이어 통계를 키-값으로 읽고 쓰는 [`GameStore`]
//! 트레이트와 메모리/SQLite 구현, 표면 단위 직렬화 잠금을 제공합니다.

mod locks;
mod memory;
mod sqlite;

pub use locks::SurfaceLocks;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use thiserror::Error;

use crate::game::ChainState;
use crate::stats::PlayerStats;

/// 상태 저장소 에러
///
/// 연결 실패 등 하부 오류는 가공 없이 그대로 전달한다. 재시도/백오프는
/// 저장소 구현의 몫이다.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("상태 저장소 오류: {0}")]
    Storage(#[from] rusqlite::Error),
    #[error("상태 직렬화 오류: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("상태 저장소 잠금이 오염되었습니다")]
    Poisoned,
}

/// 체인 상태와 플레이어 통계의 키-값 저장소
pub trait GameStore {
    /// 표면 id로 체인 상태 조회 (없으면 None)
    fn load_chain(&self, surface_id: u64) -> Result<Option<ChainState>, StoreError>;

    /// 체인 상태 저장 (있으면 덮어씀)
    fn save_chain(&self, state: &ChainState) -> Result<(), StoreError>;

    /// 플레이어 id로 통계 조회 (없으면 None)
    fn load_stats(&self, player_id: u64) -> Result<Option<PlayerStats>, StoreError>;

    /// 플레이어 통계 저장 (있으면 덮어씀)
    fn save_stats(&self, stats: &PlayerStats) -> Result<(), StoreError>;

    /// 체인 상태 조회, 없으면 빈 상태 반환 (저장은 하지 않음)
    fn load_or_create_chain(&self, surface_id: u64) -> Result<ChainState, StoreError> {
        Ok(self
            .load_chain(surface_id)?
            .unwrap_or_else(|| ChainState::new(surface_id)))
    }

    /// 플레이어 통계 조회, 없으면 빈 통계 반환 (저장은 하지 않음)
    fn load_or_create_stats(&self, player_id: u64) -> Result<PlayerStats, StoreError> {
        Ok(self
            .load_stats(player_id)?
            .unwrap_or_else(|| PlayerStats::new(player_id)))
    }
}
