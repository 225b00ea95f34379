//! 게임 설정 로드/저장 (JSON)

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 설정 파일 에러
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("설정 파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// 게임 규칙 튜닝 값
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// 수로 인정되는 최소 글자 수
    #[serde(default = "default_min_word_len")]
    pub min_word_len: usize,
    /// 시작 단어가 갖춰야 하는 최소 이어지는 표제어 수
    #[serde(default = "default_start_min_continuations")]
    pub start_min_continuations: usize,
    /// 시작 단어 재추출 한도
    #[serde(default = "default_start_max_attempts")]
    pub start_max_attempts: usize,
    /// 자동완성 질의 최대 결과 수
    #[serde(default = "default_autocomplete_limit")]
    pub autocomplete_limit: usize,
    /// 연결 단어 질의 최대 결과 수
    #[serde(default = "default_linkable_limit")]
    pub linkable_limit: usize,
    /// 수락된 수마다 적립되는 경험치
    #[serde(default = "default_xp_per_word")]
    pub xp_per_word: u64,
}

fn default_min_word_len() -> usize {
    2
}

fn default_start_min_continuations() -> usize {
    5
}

fn default_start_max_attempts() -> usize {
    100
}

fn default_autocomplete_limit() -> usize {
    15
}

fn default_linkable_limit() -> usize {
    10
}

fn default_xp_per_word() -> u64 {
    10
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_word_len: default_min_word_len(),
            start_min_continuations: default_start_min_continuations(),
            start_max_attempts: default_start_max_attempts(),
            autocomplete_limit: default_autocomplete_limit(),
            linkable_limit: default_linkable_limit(),
            xp_per_word: default_xp_per_word(),
        }
    }
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config(path: &Path) -> GameConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파싱 실패, 기본값 사용: {}", e);
            GameConfig::default()
        }),
        Err(_) => GameConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(path: &Path, config: &GameConfig) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}
