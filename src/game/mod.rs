//! 끝말잇기 게임 상태 기계
//!
//! 체인 상태(`ChainState`)와 게임 엔진(`GameEngine`)을 제공합니다.
//! 엔진은 사전(`Corpus`)과 설정을 받아 수 검증, 게임 오버 판정, 시작
//! 단어 선정을 수행하고, 판정 결과를 [`GameEvent`]로 돌려줍니다.
//! 사용자 메시지 렌더링은 이 크레이트를 소비하는 표시 계층의 몫입니다.
//!
//! # 사용 예시
//!
//! ```
//! use kkeutmal::config::GameConfig;
//! use kkeutmal::corpus::{MemoryCorpus, Word};
//! use kkeutmal::game::{ChainState, GameEngine, GameEvent};
//!
//! let mut corpus = MemoryCorpus::with_seed(7);
//! corpus.insert(Word::new("사과"));
//! corpus.insert(Word::new("과일"));
//!
//! let engine = GameEngine::new(corpus, GameConfig::default());
//! let mut state = ChainState::new(1);
//! state.initialize("사과", 100);
//!
//! let event = engine.validate_move(&mut state, "과일", 101).unwrap();
//! assert!(matches!(event, GameEvent::Accepted { combo: 2, .. }));
//! ```

mod chain;
mod engine;

pub use chain::{ChainEntry, ChainState, ExternalRef};
pub use engine::{EngineError, GameEngine, GameEvent, RejectReason};
