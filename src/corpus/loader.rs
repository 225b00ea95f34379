//! 사전 덤프 적재기
//!
//! 우리말샘 내려받기 형식(`channel.item[].word_info`)의 JSON을 단어
//! 레코드로 변환하고 SQLite 사전에 일괄 적재합니다.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

use super::{CorpusError, Sense, SqliteCorpus, Word};

/// 일괄 적재 배치 크기
const BATCH_SIZE: usize = 500;

lazy_static! {
    static ref TRAILING_DIGITS: Regex = Regex::new(r"(\d+)$").unwrap();
    static ref BRACKETED: Regex = Regex::new(r"\([^)]*\)|\[[^\]]*\]").unwrap();
}

/// 표제어 정규화
///
/// 말미 숫자는 동형어 번호로 분리하고, 붙임표/어깨점/공백/괄호 구간을
/// 제거한다. 예: "덮-밥" -> ("덮밥", None), "사과01" -> ("사과", Some(1)).
pub fn normalize_headword(raw: &str) -> (String, Option<u32>) {
    let (stem, number) = match TRAILING_DIGITS.find(raw) {
        Some(m) => (&raw[..m.start()], m.as_str().parse().ok()),
        None => (raw, None),
    };
    let stripped = BRACKETED.replace_all(stem, "");
    let text: String = stripped
        .chars()
        .filter(|c| !matches!(c, '-' | '^' | ' '))
        .collect();
    (text, number)
}

/// 사전 덤프 JSON을 단어 레코드 목록으로 파싱
pub fn parse_dictionary(json: &str) -> Result<Vec<Word>, CorpusError> {
    let value: Value = serde_json::from_str(json)?;
    let items = value
        .get("channel")
        .and_then(|channel| channel.get("item"))
        .and_then(Value::as_array)
        .ok_or_else(|| CorpusError::Format("channel.item 배열이 없습니다".into()))?;

    let mut words = Vec::with_capacity(items.len());
    for item in items {
        let info = item
            .get("word_info")
            .ok_or_else(|| CorpusError::Format("word_info 필드가 없습니다".into()))?;
        words.push(parse_word_info(info)?);
    }
    Ok(words)
}

/// 파싱한 사전 덤프를 SQLite 사전에 일괄 적재
///
/// 적재한 레코드 수를 반환한다.
pub fn load_dictionary(corpus: &mut SqliteCorpus, json: &str) -> Result<usize, CorpusError> {
    let words = parse_dictionary(json)?;
    let mut loaded = 0;
    for batch in words.chunks(BATCH_SIZE) {
        loaded += corpus.insert_words(batch)?;
        log::debug!("단어 {}개 적재", loaded);
    }
    log::info!("사전 적재 완료: {}개", loaded);
    Ok(loaded)
}

fn parse_word_info(info: &Value) -> Result<Word, CorpusError> {
    let raw = info
        .get("word")
        .and_then(Value::as_str)
        .ok_or_else(|| CorpusError::Format("word 필드가 없습니다".into()))?;
    let (text, word_number) = normalize_headword(raw);

    // pronunciation_info는 배열과 단일 객체 형태가 모두 존재함
    let pronunciations = match info.get("pronunciation_info") {
        Some(Value::Array(list)) => list
            .iter()
            .filter_map(|p| p.get("pronunciation").and_then(Value::as_str))
            .map(str::to_string)
            .collect(),
        Some(Value::Object(object)) => object
            .get("pronunciation")
            .and_then(Value::as_str)
            .map(str::to_string)
            .into_iter()
            .collect(),
        _ => Vec::new(),
    };

    let word_type = info
        .get("word_type")
        .and_then(Value::as_str)
        .map(str::to_string);
    let word_unit = info
        .get("word_unit")
        .and_then(Value::as_str)
        .map(str::to_string);

    // pos_info[].comm_pattern_info[].sense_info[] 순서대로 뜻풀이 수집
    let mut senses = Vec::new();
    if let Some(pos_list) = info.get("pos_info").and_then(Value::as_array) {
        for pos in pos_list {
            if let Some(patterns) = pos.get("comm_pattern_info").and_then(Value::as_array) {
                for pattern in patterns {
                    if let Some(sense_list) = pattern.get("sense_info").and_then(Value::as_array) {
                        for sense in sense_list {
                            senses.push(parse_sense(sense));
                        }
                    }
                }
            }
        }
    }

    let related_words = match info.get("relation_info").and_then(Value::as_array) {
        Some(list) => list
            .iter()
            .filter_map(|relation| relation.get("word").and_then(Value::as_str))
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    };

    Ok(Word {
        text,
        word_number,
        pronunciations,
        word_type,
        word_unit,
        senses,
        related_words,
    })
}

fn parse_sense(sense: &Value) -> Sense {
    let definition = sense
        .get("definition")
        .and_then(Value::as_str)
        .unwrap_or("뜻풀이 없음")
        .to_string();
    let examples = sense
        .get("example_info")
        .and_then(Value::as_array)
        .map(|list| {
            list.iter()
                .filter_map(|example| example.get("example").and_then(Value::as_str))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();
    Sense {
        definition,
        examples,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Corpus;

    fn sample_dump() -> &'static str {
        r#"{
            "channel": {
                "item": [
                    {
                        "word_info": {
                            "word": "사과01",
                            "pronunciation_info": [{"pronunciation": "사과"}],
                            "word_type": "일반어",
                            "word_unit": "단어",
                            "pos_info": [{
                                "comm_pattern_info": [{
                                    "sense_info": [{
                                        "definition": "사과나무의 열매.",
                                        "example_info": [{"example": "사과가 익었다."}]
                                    }]
                                }]
                            }],
                            "relation_info": [{"word": "능금", "type": "비슷한말"}]
                        }
                    },
                    {
                        "word_info": {
                            "word": "덮-밥"
                        }
                    }
                ]
            }
        }"#
    }

    #[test]
    fn test_normalize_headword() {
        assert_eq!(normalize_headword("사과01"), ("사과".to_string(), Some(1)));
        assert_eq!(normalize_headword("덮-밥"), ("덮밥".to_string(), None));
        assert_eq!(normalize_headword("김^밥"), ("김밥".to_string(), None));
        assert_eq!(
            normalize_headword("가다(멀리)"),
            ("가다".to_string(), None)
        );
        assert_eq!(normalize_headword("사과"), ("사과".to_string(), None));
    }

    #[test]
    fn test_parse_dictionary() {
        let words = parse_dictionary(sample_dump()).unwrap();
        assert_eq!(words.len(), 2);

        let apple = &words[0];
        assert_eq!(apple.text, "사과");
        assert_eq!(apple.word_number, Some(1));
        assert_eq!(apple.pronunciations, vec!["사과"]);
        assert_eq!(apple.word_type.as_deref(), Some("일반어"));
        assert_eq!(apple.senses.len(), 1);
        assert_eq!(apple.senses[0].definition, "사과나무의 열매.");
        assert_eq!(apple.senses[0].examples, vec!["사과가 익었다."]);
        assert_eq!(apple.related_words, vec!["능금"]);

        assert_eq!(words[1].text, "덮밥");
        assert!(words[1].senses.is_empty());
    }

    #[test]
    fn test_parse_dictionary_bad_shape() {
        assert!(matches!(
            parse_dictionary(r#"{"channel": {}}"#),
            Err(CorpusError::Format(_))
        ));
        assert!(matches!(
            parse_dictionary(r#"{"channel": {"item": [{}]}}"#),
            Err(CorpusError::Format(_))
        ));
    }

    #[test]
    fn test_load_dictionary_into_sqlite() {
        let mut corpus = SqliteCorpus::open_in_memory().unwrap();
        let loaded = load_dictionary(&mut corpus, sample_dump()).unwrap();
        assert_eq!(loaded, 2);
        assert!(corpus.exists("사과").unwrap());
        assert!(corpus.exists("덮밥").unwrap());
    }
}
