//! 사전 질의 계층
//!
//! 끝말잇기 판정에 필요한 다섯 가지 사전 연산을 `Corpus` 트레이트로
//! 정의합니다. 두 구현을 제공합니다:
//!
//! - [`MemoryCorpus`]: 정렬 색인 + 시드 고정 RNG. 결정적이어서 테스트
//!   픽스처와 내장 용도로 적합합니다.
//! - [`SqliteCorpus`]: SQLite 영속 저장소. 사전 덤프를 [`load_dictionary`]로
//!   적재해 사용합니다.
//!
//! 모든 질의 입력은 저장소 질의 언어에 특수 의미를 갖는 문자가 끼어들지
//! 않도록 [`sanitize_input`]을 거칩니다.

mod loader;
mod memory;
mod sqlite;
mod word;

pub use loader::{load_dictionary, normalize_headword, parse_dictionary};
pub use memory::MemoryCorpus;
pub use sqlite::SqliteCorpus;
pub use word::{Sense, Word};

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

/// 사전 질의 에러
///
/// 저장소 연결 실패 등 하부 오류는 가공 없이 그대로 전달한다.
/// 재시도/백오프는 이 계층의 몫이 아니다.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// 저장소(SQLite) 오류
    #[error("사전 저장소 오류: {0}")]
    Storage(#[from] rusqlite::Error),
    /// 단어 레코드 직렬화/역직렬화 오류
    #[error("사전 데이터 직렬화 오류: {0}")]
    Serialization(#[from] serde_json::Error),
    /// 빈 사전에서 무작위 추출 시도
    #[error("사전에 단어가 없습니다")]
    EmptyCorpus,
    /// 사전 덤프 형식 오류
    #[error("사전 덤프 형식 오류: {0}")]
    Format(String),
}

lazy_static! {
    static ref NON_WORD: Regex = Regex::new(r"[^\w\s]").unwrap();
}

/// 질의 문자열에서 단어 문자와 공백 이외를 제거
///
/// LIKE 패턴 등 질의 언어에 특수 의미를 갖는 문자의 주입을 차단한다.
pub fn sanitize_input(input: &str) -> String {
    NON_WORD.replace_all(input, "").into_owned()
}

/// 끝말잇기 사전 질의 인터페이스
///
/// 구현체는 정렬 순서와 중복 제거 보장을 동일하게 제공해야 한다.
/// 사전은 읽기 전용 자원으로, 여러 게임 라운드에서 조율 없이 동시에
/// 질의해도 안전하다.
pub trait Corpus {
    /// 단어 존재 여부
    fn exists(&self, word: &str) -> Result<bool, CorpusError>;

    /// 동형어 번호 순으로 정렬된 단어 레코드 (없으면 빈 벡터)
    fn definitions(&self, word: &str) -> Result<Vec<Word>, CorpusError>;

    /// 접두사로 시작하는 서로 다른 표제어를 사전순으로 최대 `limit`개
    fn autocomplete(&self, prefix: &str, limit: usize) -> Result<Vec<String>, CorpusError>;

    /// `start`로 시작하고 `excluding`에 없는 표제어를 사전순으로 최대 `limit`개
    fn linkable(
        &self,
        start: char,
        excluding: &[String],
        limit: usize,
    ) -> Result<Vec<String>, CorpusError>;

    /// 균등 추출한 무작위 표제어 (빈 사전이면 `EmptyCorpus`)
    fn random_word(&self) -> Result<String, CorpusError>;
}
