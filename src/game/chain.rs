//! 게임 체인 상태

use serde::{Deserialize, Serialize};

/// 단어가 플레이된 위치를 가리키는 불투명 외부 참조 (메시지 ID 등)
pub type ExternalRef = u64;

/// 체인에 기록된 단어 하나
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainEntry {
    pub word: String,
    /// 단어가 처음 사용된 위치의 외부 참조 (그대로 보존됨)
    pub reference: ExternalRef,
}

/// 한 플레이 표면에 묶인 게임 상태
///
/// 불변식: 체인 안에 같은 표제어가 두 번 나타나지 않는다.
/// 불변식: 첫 항목 이후의 모든 항목은 직전 항목과 연결 규칙을 만족한다.
/// 불변식은 `GameEngine`을 통한 변경에서만 보장된다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainState {
    /// 묶인 표면 식별자
    pub surface_id: u64,
    /// 플레이 순서대로의 체인
    chain: Vec<ChainEntry>,
    /// 지금까지 도달한 최장 콤보 (단조 증가)
    best_combo: usize,
}

impl ChainState {
    /// 표면에 묶인 빈 상태 생성 (라운드 시작 전)
    pub fn new(surface_id: u64) -> Self {
        Self {
            surface_id,
            chain: Vec::new(),
            best_combo: 0,
        }
    }

    /// 체인을 시작 단어 하나로 재설정
    ///
    /// 최고 콤보는 절대 초기화되지 않는다.
    pub fn initialize(&mut self, word: impl Into<String>, reference: ExternalRef) {
        self.chain.clear();
        self.chain.push(ChainEntry {
            word: word.into(),
            reference,
        });
        self.update_best_combo();
    }

    /// 검증을 마친 단어를 체인 끝에 추가
    ///
    /// 최고 콤보 갱신은 추가와 같은 변경 안에서 일어난다.
    pub(crate) fn push(&mut self, word: impl Into<String>, reference: ExternalRef) {
        self.chain.push(ChainEntry {
            word: word.into(),
            reference,
        });
        self.update_best_combo();
    }

    fn update_best_combo(&mut self) {
        if self.chain.len() > self.best_combo {
            self.best_combo = self.chain.len();
        }
    }

    /// 라운드가 진행 중인지 (체인이 비어 있지 않은지)
    pub fn is_active(&self) -> bool {
        !self.chain.is_empty()
    }

    /// 현재 콤보 길이 (체인 길이)
    pub fn combo(&self) -> usize {
        self.chain.len()
    }

    /// 최고 콤보
    pub fn best_combo(&self) -> usize {
        self.best_combo
    }

    /// 체인 항목 (플레이 순서)
    pub fn entries(&self) -> &[ChainEntry] {
        &self.chain
    }

    /// 마지막으로 플레이된 단어
    pub fn last_word(&self) -> Option<&str> {
        self.chain.last().map(|entry| entry.word.as_str())
    }

    /// 체인에서 단어 검색 (중복 사용 판정용)
    pub fn find(&self, word: &str) -> Option<&ChainEntry> {
        self.chain.iter().find(|entry| entry.word == word)
    }

    /// 체인에 기록된 표제어 목록 (연결 단어 질의의 제외 목록)
    pub fn words(&self) -> Vec<String> {
        self.chain.iter().map(|entry| entry.word.clone()).collect()
    }
}
