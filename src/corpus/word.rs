//! 사전 단어 모델

use std::fmt;

use serde::{Deserialize, Serialize};

/// 단어의 뜻풀이 하나 (정의 + 용례)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sense {
    pub definition: String,
    #[serde(default)]
    pub examples: Vec<String>,
}

/// 사전 단어 레코드
///
/// (표제어, 동형어 번호) 쌍으로 식별된다. 동형어 번호는 같은 표기의
/// 서로 다른 단어를 구별하며 없을 수 있다. 로드 이후에는 불변.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub text: String,
    #[serde(default)]
    pub word_number: Option<u32>,
    /// 발음 변이형 (순서 유지)
    #[serde(default)]
    pub pronunciations: Vec<String>,
    /// 품사
    #[serde(default)]
    pub word_type: Option<String>,
    /// 어휘 단위 (단어/구/관용구 등)
    #[serde(default)]
    pub word_unit: Option<String>,
    /// 뜻풀이 목록 (순서 유지)
    #[serde(default)]
    pub senses: Vec<Sense>,
    /// 관련 어휘 참조
    #[serde(default)]
    pub related_words: Vec<String>,
}

impl Word {
    /// 표제어만으로 빈 레코드 생성
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            word_number: None,
            pronunciations: Vec::new(),
            word_type: None,
            word_unit: None,
            senses: Vec::new(),
            related_words: Vec::new(),
        }
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)?;
        if let Some(number) = self.word_number {
            write!(f, "({})", number)?;
        }
        if !self.pronunciations.is_empty() {
            write!(f, " [{}]", self.pronunciations.join(", "))?;
        }
        if let Some(ref word_type) = self.word_type {
            write!(f, " {}", word_type)?;
        }
        if let Some(ref word_unit) = self.word_unit {
            write!(f, " {}", word_unit)?;
        }
        for (i, sense) in self.senses.iter().enumerate() {
            write!(f, "\n    {}. {}", i + 1, sense.definition)?;
            if !sense.examples.is_empty() {
                write!(f, " (예: {})", sense.examples.join(" / "))?;
            }
        }
        Ok(())
    }
}
