//! SQLite 기반 사전 저장소
//!
//! DISTINCT/LIKE/ORDER BY/LIMIT 조합으로 접두사 질의를, `ORDER BY RANDOM()`으로
//! 무작위 추출을 구현합니다.

use std::collections::HashSet;
use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};

use super::{sanitize_input, Corpus, CorpusError, Word};

/// LIKE 패턴 이스케이프
///
/// `sanitize_input`이 `%`는 걸러내지만 `_`는 단어 문자라 남는다.
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// SQLite 사전
pub struct SqliteCorpus {
    conn: Connection,
}

impl SqliteCorpus {
    /// 파일 경로로 사전 열기 (없으면 생성)
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
        log::debug!("사전 저장소 열기: {}", path.as_ref().display());
        let conn = Connection::open(path)?;
        let corpus = Self { conn };
        corpus.initialize_schema()?;
        Ok(corpus)
    }

    /// 메모리 사전 열기 (테스트용)
    pub fn open_in_memory() -> Result<Self, CorpusError> {
        let conn = Connection::open_in_memory()?;
        let corpus = Self { conn };
        corpus.initialize_schema()?;
        Ok(corpus)
    }

    fn initialize_schema(&self) -> Result<(), CorpusError> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS words (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                word TEXT NOT NULL,
                word_number INTEGER,
                pronunciations TEXT NOT NULL DEFAULT '[]',
                word_type TEXT,
                word_unit TEXT,
                senses TEXT NOT NULL DEFAULT '[]',
                related_words TEXT NOT NULL DEFAULT '[]',
                UNIQUE (word, word_number)
            );
            CREATE INDEX IF NOT EXISTS idx_words_word ON words (word);",
        )?;
        Ok(())
    }

    /// 단어 레코드 일괄 삽입 (같은 표제어+번호는 갱신)
    pub fn insert_words(&mut self, words: &[Word]) -> Result<usize, CorpusError> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO words
                     (word, word_number, pronunciations, word_type, word_unit, senses, related_words)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                 ON CONFLICT (word, word_number) DO UPDATE SET
                     pronunciations = excluded.pronunciations,
                     word_type = excluded.word_type,
                     word_unit = excluded.word_unit,
                     senses = excluded.senses,
                     related_words = excluded.related_words",
            )?;
            for word in words {
                stmt.execute(params![
                    word.text,
                    word.word_number,
                    serde_json::to_string(&word.pronunciations)?,
                    word.word_type,
                    word.word_unit,
                    serde_json::to_string(&word.senses)?,
                    serde_json::to_string(&word.related_words)?,
                ])?;
            }
        }
        tx.commit()?;
        Ok(words.len())
    }
}

impl Corpus for SqliteCorpus {
    fn exists(&self, word: &str) -> Result<bool, CorpusError> {
        let found: bool = self.conn.query_row(
            "SELECT EXISTS (SELECT 1 FROM words WHERE word = ?1)",
            params![sanitize_input(word)],
            |row| row.get(0),
        )?;
        Ok(found)
    }

    fn definitions(&self, word: &str) -> Result<Vec<Word>, CorpusError> {
        let mut stmt = self.conn.prepare(
            "SELECT word, word_number, pronunciations, word_type, word_unit, senses, related_words
             FROM words WHERE word = ?1
             ORDER BY word_number",
        )?;
        let rows = stmt.query_map(params![sanitize_input(word)], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, Option<u32>>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, Option<String>>(3)?,
                row.get::<_, Option<String>>(4)?,
                row.get::<_, String>(5)?,
                row.get::<_, String>(6)?,
            ))
        })?;

        let mut words = Vec::new();
        for row in rows {
            let (text, word_number, pronunciations, word_type, word_unit, senses, related_words) =
                row?;
            words.push(Word {
                text,
                word_number,
                pronunciations: serde_json::from_str(&pronunciations)?,
                word_type,
                word_unit,
                senses: serde_json::from_str(&senses)?,
                related_words: serde_json::from_str(&related_words)?,
            });
        }
        Ok(words)
    }

    fn autocomplete(&self, prefix: &str, limit: usize) -> Result<Vec<String>, CorpusError> {
        let pattern = format!("{}%", escape_like(&sanitize_input(prefix)));
        let mut stmt = self.conn.prepare(&format!(
            "SELECT DISTINCT word FROM words
             WHERE word LIKE ?1 ESCAPE '\\'
             ORDER BY word LIMIT {}",
            limit
        ))?;
        let rows = stmt.query_map(params![pattern], |row| row.get::<_, String>(0))?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    fn linkable(
        &self,
        start: char,
        excluding: &[String],
        limit: usize,
    ) -> Result<Vec<String>, CorpusError> {
        let sanitized = sanitize_input(&start.to_string());
        if sanitized.is_empty() {
            return Ok(Vec::new());
        }
        let pattern = format!("{}%", escape_like(&sanitized));
        // 제외 목록만큼 넉넉히 읽어온 뒤 걸러낸다
        let mut stmt = self.conn.prepare(&format!(
            "SELECT DISTINCT word FROM words
             WHERE word LIKE ?1 ESCAPE '\\'
             ORDER BY word LIMIT {}",
            limit + excluding.len()
        ))?;
        let excluded: HashSet<&str> = excluding.iter().map(String::as_str).collect();
        let rows = stmt.query_map(params![pattern], |row| row.get::<_, String>(0))?;

        let mut words = Vec::new();
        for row in rows {
            if words.len() >= limit {
                break;
            }
            let word = row?;
            if excluded.contains(word.as_str()) {
                continue;
            }
            words.push(word);
        }
        Ok(words)
    }

    fn random_word(&self) -> Result<String, CorpusError> {
        self.conn
            .query_row("SELECT word FROM words ORDER BY RANDOM() LIMIT 1", [], |row| {
                row.get(0)
            })
            .optional()?
            .ok_or(CorpusError::EmptyCorpus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Sense;

    fn fixture() -> SqliteCorpus {
        let mut corpus = SqliteCorpus::open_in_memory().unwrap();
        let words: Vec<Word> = ["사과", "사다리", "사슴", "과일", "과자", "일몰"]
            .iter()
            .map(|&text| Word::new(text))
            .collect();
        corpus.insert_words(&words).unwrap();
        corpus
    }

    #[test]
    fn test_exists() {
        let corpus = fixture();
        assert!(corpus.exists("사과").unwrap());
        assert!(!corpus.exists("없는단어").unwrap());
    }

    #[test]
    fn test_definitions_round_trip() {
        let mut corpus = SqliteCorpus::open_in_memory().unwrap();
        let word = Word {
            text: "사과".to_string(),
            word_number: Some(1),
            pronunciations: vec!["사과".to_string()],
            word_type: Some("명사".to_string()),
            word_unit: Some("단어".to_string()),
            senses: vec![Sense {
                definition: "사과나무의 열매.".to_string(),
                examples: vec!["사과가 익었다.".to_string()],
            }],
            related_words: vec!["능금".to_string()],
        };
        corpus.insert_words(std::slice::from_ref(&word)).unwrap();

        let definitions = corpus.definitions("사과").unwrap();
        assert_eq!(definitions, vec![word]);
    }

    #[test]
    fn test_definitions_homograph_order() {
        let mut corpus = SqliteCorpus::open_in_memory().unwrap();
        let second = Word {
            word_number: Some(2),
            ..Word::new("사과")
        };
        let first = Word {
            word_number: Some(1),
            ..Word::new("사과")
        };
        corpus.insert_words(&[second, first]).unwrap();

        let numbers: Vec<Option<u32>> = corpus
            .definitions("사과")
            .unwrap()
            .iter()
            .map(|w| w.word_number)
            .collect();
        assert_eq!(numbers, vec![Some(1), Some(2)]);
    }

    #[test]
    fn test_insert_words_upsert() {
        let mut corpus = SqliteCorpus::open_in_memory().unwrap();
        let word = Word {
            word_number: Some(1),
            word_type: Some("명사".to_string()),
            ..Word::new("사과")
        };
        corpus.insert_words(std::slice::from_ref(&word)).unwrap();

        let updated = Word {
            word_type: Some("감탄사".to_string()),
            ..word
        };
        corpus.insert_words(std::slice::from_ref(&updated)).unwrap();

        let definitions = corpus.definitions("사과").unwrap();
        assert_eq!(definitions.len(), 1);
        assert_eq!(definitions[0].word_type.as_deref(), Some("감탄사"));
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
    fn test_autocomplete_sanitizes_pattern() {
        let corpus = fixture();
        // `%`가 살아남으면 전체 표제어가 매칭되므로 제거되어야 함
        assert_eq!(corpus.autocomplete("%", 15).unwrap().len(), 6);
        assert_eq!(corpus.autocomplete("사%", 15).unwrap().len(), 3);
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
    fn test_random_word_from_corpus() {
        let corpus = fixture();
        let word = corpus.random_word().unwrap();
        assert!(corpus.exists(&word).unwrap());
    }

    #[test]
    fn test_random_word_empty_corpus() {
        let corpus = SqliteCorpus::open_in_memory().unwrap();
        assert!(matches!(
            corpus.random_word(),
            Err(CorpusError::EmptyCorpus)
        ));
    }
}
