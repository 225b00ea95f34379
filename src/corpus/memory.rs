//! 메모리 기반 사전
//!
//! 정렬 색인(`BTreeMap`) 위에서 동작하는 결정적 사전 구현입니다.
//! 시드를 고정하면 무작위 추출까지 재현되므로 테스트 픽스처로 쓰입니다.

use std::collections::{BTreeMap, HashSet};
use std::sync::Mutex;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::{sanitize_input, Corpus, CorpusError, Word};

/// 메모리 사전
pub struct MemoryCorpus {
    /// 표제어 -> 동형어 레코드 (번호 순)
    words: BTreeMap<String, Vec<Word>>,
    /// 무작위 추출용 RNG
    rng: Mutex<ChaCha8Rng>,
}

impl MemoryCorpus {
    /// 비결정적 시드로 빈 사전 생성
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// 시드를 고정한 빈 사전 생성 (무작위 추출 재현용)
    pub fn with_seed(seed: u64) -> Self {
        Self {
            words: BTreeMap::new(),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// 단어 레코드 추가 (같은 표제어의 동형어는 번호 순으로 유지)
    pub fn insert(&mut self, word: Word) {
        let records = self.words.entry(word.text.clone()).or_default();
        records.push(word);
        records.sort_by_key(|w| w.word_number.unwrap_or(0));
    }

    /// 서로 다른 표제어 수
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for MemoryCorpus {
    fn default() -> Self {
        Self::new()
    }
}

impl Corpus for MemoryCorpus {
    fn exists(&self, word: &str) -> Result<bool, CorpusError> {
        Ok(self.words.contains_key(sanitize_input(word).as_str()))
    }

    fn definitions(&self, word: &str) -> Result<Vec<Word>, CorpusError> {
        Ok(self
            .words
            .get(sanitize_input(word).as_str())
            .cloned()
            .unwrap_or_default())
    }

    fn autocomplete(&self, prefix: &str, limit: usize) -> Result<Vec<String>, CorpusError> {
        let prefix = sanitize_input(prefix);
        Ok(self
            .words
            .range(prefix.clone()..)
            .take_while(|(text, _)| text.starts_with(&prefix))
            .take(limit)
            .map(|(text, _)| text.clone())
            .collect())
    }

    fn linkable(
        &self,
        start: char,
        excluding: &[String],
        limit: usize,
    ) -> Result<Vec<String>, CorpusError> {
        let prefix = sanitize_input(&start.to_string());
        if prefix.is_empty() {
            return Ok(Vec::new());
        }
        let excluded: HashSet<&str> = excluding.iter().map(String::as_str).collect();
        Ok(self
            .words
            .range(prefix.clone()..)
            .take_while(|(text, _)| text.starts_with(&prefix))
            .filter(|(text, _)| !excluded.contains(text.as_str()))
            .take(limit)
            .map(|(text, _)| text.clone())
            .collect())
    }

    fn random_word(&self) -> Result<String, CorpusError> {
        if self.words.is_empty() {
            return Err(CorpusError::EmptyCorpus);
        }
        let index = {
            let mut rng = match self.rng.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            rng.gen_range(0..self.words.len())
        };
        // index는 len 미만이므로 nth는 항상 Some
        self.words
            .keys()
            .nth(index)
            .cloned()
            .ok_or(CorpusError::EmptyCorpus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> MemoryCorpus {
        let mut corpus = MemoryCorpus::with_seed(42);
        for text in ["사과", "사다리", "사슴", "과일", "과자", "일몰"] {
            corpus.insert(Word::new(text));
        }
        corpus
    }

    #[test]
    fn test_exists() {
        let corpus = fixture();
        assert!(corpus.exists("사과").unwrap());
        assert!(!corpus.exists("없는단어").unwrap());
    }

    #[test]
    fn test_definitions_homograph_order() {
        let mut corpus = MemoryCorpus::with_seed(1);
        corpus.insert(Word {
            word_number: Some(2),
            ..Word::new("사과")
        });
        corpus.insert(Word {
            word_number: Some(1),
            ..Word::new("사과")
        });

        let definitions = corpus.definitions("사과").unwrap();
        assert_eq!(definitions.len(), 2);
        assert_eq!(definitions[0].word_number, Some(1));
        assert_eq!(definitions[1].word_number, Some(2));

        assert!(corpus.definitions("없는단어").unwrap().is_empty());
    }

    #[test]
    fn test_autocomplete_sorted_and_limited() {
        let corpus = fixture();
        assert_eq!(
            corpus.autocomplete("사", 15).unwrap(),
            vec!["사과", "사다리", "사슴"]
        );
        assert_eq!(corpus.autocomplete("사", 2).unwrap(), vec!["사과", "사다리"]);
        assert!(corpus.autocomplete("없", 15).unwrap().is_empty());
    }

    #[test]
    fn test_autocomplete_distinct_homographs() {
        let mut corpus = MemoryCorpus::with_seed(1);
        corpus.insert(Word {
            word_number: Some(1),
            ..Word::new("사과")
        });
        corpus.insert(Word {
            word_number: Some(2),
            ..Word::new("사과")
        });
        // 동형어가 여러 개여도 표제어는 한 번만
        assert_eq!(corpus.autocomplete("사과", 15).unwrap(), vec!["사과"]);
    }

    #[test]
    fn test_linkable_excludes_used_words() {
        let corpus = fixture();
        assert_eq!(corpus.linkable('과', &[], 10).unwrap(), vec!["과일", "과자"]);

        let used = vec!["과일".to_string()];
        assert_eq!(corpus.linkable('과', &used, 10).unwrap(), vec!["과자"]);

        let all_used = vec!["과일".to_string(), "과자".to_string()];
        assert!(corpus.linkable('과', &all_used, 10).unwrap().is_empty());
    }

    #[test]
    fn test_random_word_deterministic_with_seed() {
        let corpus_a = fixture();
        let corpus_b = fixture();
        let first: Vec<String> = (0..5).map(|_| corpus_a.random_word().unwrap()).collect();
        let second: Vec<String> = (0..5).map(|_| corpus_b.random_word().unwrap()).collect();
        // 같은 시드 -> 같은 추출 순서
        assert_eq!(first, second);
        for word in &first {
            assert!(corpus_a.exists(word).unwrap());
        }
    }

    #[test]
    fn test_random_word_empty_corpus() {
        let corpus = MemoryCorpus::with_seed(0);
        assert!(matches!(
            corpus.random_word(),
            Err(CorpusError::EmptyCorpus)
        ));
    }
}
