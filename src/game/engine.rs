//! 끝말잇기 게임 엔진
//!
//! 수 검증, 게임 오버 판정, 시작 단어 선정을 담당합니다. 엔진 자체는
//! 내부 상태가 없으며 외부에서 전달된 `ChainState`에 대해 동작합니다.

use thiserror::Error;

use crate::config::GameConfig;
use crate::corpus::{Corpus, CorpusError, Word};
use crate::hangul::alternate_initial;
use crate::stats::{PlayerStats, StatsError};

use super::chain::{ChainState, ExternalRef};

/// 엔진 수준 실패 (게임 규칙에 따른 거절과 구별됨)
#[derive(Debug, Error)]
pub enum EngineError {
    /// 진행 중인 라운드가 없는 상태에서 수를 검증함
    #[error("진행 중인 라운드가 없습니다")]
    NoActiveRound,
    /// 시작 단어 탐색이 재시도 예산을 소진함
    #[error("시작 단어를 찾지 못했습니다 ({attempts}회 시도)")]
    NoValidStartWord { attempts: usize },
    #[error(transparent)]
    Corpus(#[from] CorpusError),
    #[error(transparent)]
    Stats(#[from] StatsError),
}

/// 수 거절 사유
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// 최소 길이 미달
    TooShort,
    /// 첫 글자가 연결 규칙에 맞지 않음
    LinkMismatch {
        expected: char,
        /// 두음법칙으로 허용되는 대체 글자
        alternate: Option<char>,
    },
    /// 이미 체인에 있는 단어 (처음 사용된 위치의 참조를 그대로 전달)
    AlreadyUsed { reference: ExternalRef },
    /// 사전에 없는 단어
    WordNotFound,
}

/// 게임 진행 이벤트
///
/// 표시 계층이 사용자 메시지로 렌더링하는 판정 결과.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// 새 라운드 시작 (시작 단어의 첫 동형어 레코드)
    RoundStarted { word: Word },
    /// 수 수락
    Accepted {
        word: Word,
        combo: usize,
        best_combo: usize,
    },
    /// 수 거절
    Rejected { reason: RejectReason },
    /// 더 이상 이을 수 있는 단어가 없음
    GameOver { final_combo: usize },
}

/// 끝말잇기 게임 엔진
///
/// 사전과 설정을 소유하고, 호출자가 전달한 체인 상태를 검증/변경한다.
/// 같은 표면에 대한 fetch-검증-저장 순환은 트랜잭션이 아니므로 호출자가
/// 표면 단위로 직렬화해야 한다 ([`crate::store::SurfaceLocks`] 참고).
pub struct GameEngine<C: Corpus> {
    corpus: C,
    config: GameConfig,
}

impl<C: Corpus> GameEngine<C> {
    pub fn new(corpus: C, config: GameConfig) -> Self {
        Self { corpus, config }
    }

    pub fn corpus(&self) -> &C {
        &self.corpus
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// 후보 단어를 검증하고, 통과하면 체인에 기록
    ///
    /// 검사는 순서대로 진행되며 첫 실패에서 멈춘다:
    /// 길이 -> 연결 글자 -> 중복 -> 사전 존재.
    /// 수락 시 첫 동형어 레코드와 갱신된 콤보를 담은 `Accepted`를 반환한다.
    pub fn validate_move(
        &self,
        state: &mut ChainState,
        candidate: &str,
        reference: ExternalRef,
    ) -> Result<GameEvent, EngineError> {
        let last_char = match state.last_word().and_then(|word| word.chars().last()) {
            Some(c) => c,
            None => return Err(EngineError::NoActiveRound),
        };

        // 1. 최소 길이 (빈 입력은 항상 차단)
        if candidate.chars().count() < self.config.min_word_len.max(1) {
            return Ok(GameEvent::Rejected {
                reason: RejectReason::TooShort,
            });
        }

        // 2. 연결 글자 (두음법칙 대체 허용)
        let alternate = alternate_initial(last_char).unwrap_or(None);
        match candidate.chars().next() {
            Some(first) if first == last_char || Some(first) == alternate => {}
            _ => {
                return Ok(GameEvent::Rejected {
                    reason: RejectReason::LinkMismatch {
                        expected: last_char,
                        alternate,
                    },
                })
            }
        }

        // 3. 중복 사용 (처음 사용된 위치의 참조를 사유에 포함)
        if let Some(entry) = state.find(candidate) {
            return Ok(GameEvent::Rejected {
                reason: RejectReason::AlreadyUsed {
                    reference: entry.reference,
                },
            });
        }

        // 4. 사전 존재
        if !self.corpus.exists(candidate)? {
            return Ok(GameEvent::Rejected {
                reason: RejectReason::WordNotFound,
            });
        }

        // 표시용 첫 동형어 레코드
        let mut definitions = self.corpus.definitions(candidate)?;
        if definitions.is_empty() {
            return Ok(GameEvent::Rejected {
                reason: RejectReason::WordNotFound,
            });
        }
        let word = definitions.swap_remove(0);

        state.push(candidate, reference);
        Ok(GameEvent::Accepted {
            word,
            combo: state.combo(),
            best_combo: state.best_combo(),
        })
    }

    /// 현재 체인이 계속 진행 가능한지 판정
    ///
    /// 마지막 글자 또는 그 두음법칙 대체 글자로 시작하는 미사용 단어가
    /// 사전에 남아 있으면 true. 라운드가 없으면 false.
    pub fn is_alive(&self, state: &ChainState) -> Result<bool, EngineError> {
        let last_char = match state.last_word().and_then(|word| word.chars().last()) {
            Some(c) => c,
            None => return Ok(false),
        };
        let used = state.words();

        if !self
            .corpus
            .linkable(last_char, &used, self.config.linkable_limit)?
            .is_empty()
        {
            return Ok(true);
        }
        if let Some(alternate) = alternate_initial(last_char).unwrap_or(None) {
            if !self
                .corpus
                .linkable(alternate, &used, self.config.linkable_limit)?
                .is_empty()
            {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// 새 라운드의 시작 단어 선정
    ///
    /// 3글자 이상이고 이어지는 표제어 수가 설정 임계값 이상인 단어가 나올
    /// 때까지 재추출한다. 재시도 한도를 넘기면 `NoValidStartWord`.
    pub fn pick_starting_word(&self) -> Result<Word, EngineError> {
        let limit = self
            .config
            .autocomplete_limit
            .max(self.config.start_min_continuations);

        for _ in 0..self.config.start_max_attempts {
            let candidate = self.corpus.random_word()?;
            if candidate.chars().count() <= 2 {
                continue;
            }
            if self.corpus.autocomplete(&candidate, limit)?.len()
                < self.config.start_min_continuations
            {
                continue;
            }
            let mut definitions = self.corpus.definitions(&candidate)?;
            if definitions.is_empty() {
                continue;
            }
            return Ok(definitions.swap_remove(0));
        }
        Err(EngineError::NoValidStartWord {
            attempts: self.config.start_max_attempts,
        })
    }

    /// 체인을 시작 단어 하나로 재설정하고 라운드 시작 이벤트 반환
    ///
    /// 최고 콤보는 유지된다.
    pub fn reinitialize(
        &self,
        state: &mut ChainState,
        word: Word,
        reference: ExternalRef,
    ) -> GameEvent {
        state.initialize(word.text.clone(), reference);
        GameEvent::RoundStarted { word }
    }

    /// 한 수의 전체 처리: 검증 -> 통계 적립 -> 게임 오버 판정
    ///
    /// 수락 시 플레이어 통계에 사용 횟수와 설정된 경험치를 적립한다.
    /// 이어갈 단어가 없으면 `GameOver` 이벤트가 뒤따른다. 새 라운드
    /// 재시드는 표시 계층이 새 메시지 참조를 확보한 뒤
    /// `pick_starting_word` + `reinitialize`로 이어서 수행한다.
    pub fn submit(
        &self,
        state: &mut ChainState,
        stats: &mut PlayerStats,
        candidate: &str,
        reference: ExternalRef,
    ) -> Result<Vec<GameEvent>, EngineError> {
        let outcome = self.validate_move(state, candidate, reference)?;
        let mut events = Vec::with_capacity(2);
        match outcome {
            accepted @ GameEvent::Accepted { .. } => {
                stats.record_play(candidate);
                stats.add_experience(self.config.xp_per_word as i64)?;
                events.push(accepted);

                if !self.is_alive(state)? {
                    log::debug!(
                        "표면 {} 게임 오버 (최종 콤보 {})",
                        state.surface_id,
                        state.combo()
                    );
                    events.push(GameEvent::GameOver {
                        final_combo: state.combo(),
                    });
                }
            }
            rejected => events.push(rejected),
        }
        Ok(events)
    }
}
