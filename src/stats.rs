//! 플레이어 단어 사용 통계와 경험치

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 통계 갱신 에러
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    /// 음수 경험치 적립 시도
    #[error("경험치 적립량은 음수가 될 수 없습니다: {0}")]
    InvalidAmount(i64),
}

/// 플레이어별 누적 통계
///
/// 첫 플레이 때 지연 생성되며 모든 필드는 증가만 한다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub player_id: u64,
    /// 표제어 -> 사용 횟수
    word_counts: HashMap<String, u64>,
    total_words: u64,
    experience: u64,
}

impl PlayerStats {
    pub fn new(player_id: u64) -> Self {
        Self {
            player_id,
            word_counts: HashMap::new(),
            total_words: 0,
            experience: 0,
        }
    }

    /// 수락된 수 하나를 기록
    ///
    /// 수락된 수마다 정확히 한 번 호출해야 한다. 두 번 부르면 두 번
    /// 집계된다.
    pub fn record_play(&mut self, word: &str) {
        *self.word_counts.entry(word.to_string()).or_insert(0) += 1;
        self.total_words += 1;
    }

    /// 경험치 적립 (음수는 `InvalidAmount`)
    pub fn add_experience(&mut self, amount: i64) -> Result<(), StatsError> {
        if amount < 0 {
            return Err(StatsError::InvalidAmount(amount));
        }
        self.experience += amount as u64;
        Ok(())
    }

    /// 특정 단어의 사용 횟수
    pub fn word_count(&self, word: &str) -> u64 {
        self.word_counts.get(word).copied().unwrap_or(0)
    }

    /// 지금까지 플레이한 단어 수
    pub fn total_words(&self) -> u64 {
        self.total_words
    }

    /// 누적 경험치
    pub fn experience(&self) -> u64 {
        self.experience
    }

    /// 사용 횟수 상위 단어를 최대 `count`개
    ///
    /// 사용 횟수 내림차순, 동률은 표제어 오름차순.
    pub fn top_words(&self, count: usize) -> Vec<(String, u64)> {
        let mut entries: Vec<(String, u64)> = self
            .word_counts
            .iter()
            .map(|(word, &uses)| (word.clone(), uses))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries.truncate(count);
        entries
    }
}
