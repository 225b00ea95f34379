//! 끝말잇기 두음법칙과 조사 선택

use super::syllable::{compose, decompose, is_syllable, HangulError};

/// ㄴ/ㄹ 초성에 두음법칙이 적용되는 중성 (ㅣ 계열)
const YOTIZED_VOWELS: [char; 7] = ['ㅣ', 'ㅑ', 'ㅕ', 'ㅛ', 'ㅠ', 'ㅖ', 'ㅒ'];
/// ㄹ 초성이 ㄴ으로 바뀌는 중성
const PLAIN_VOWELS: [char; 4] = ['ㅏ', 'ㅗ', 'ㅜ', 'ㅡ'];

/// 두음법칙을 적용한 대체 음절 계산
///
/// - 초성 ㄴ/ㄹ + ㅣ 계열 중성 -> 초성 ㅇ (예: 니 -> 이, 량 -> 양)
/// - 초성 ㄹ + ㅏ/ㅗ/ㅜ/ㅡ -> 초성 ㄴ (예: 라 -> 나, 록 -> 녹)
///
/// 적용 결과가 원래 음절과 같으면 대체 음절이 없는 것이므로 `None`.
pub fn alternate_initial(c: char) -> Result<Option<char>, HangulError> {
    let (cho, jung, jong) = decompose(c)?;

    let replaced = if (cho == 'ㄴ' || cho == 'ㄹ') && YOTIZED_VOWELS.contains(&jung) {
        'ㅇ'
    } else if cho == 'ㄹ' && PLAIN_VOWELS.contains(&jung) {
        'ㄴ'
    } else {
        cho
    };

    let result = compose(replaced, jung, jong)?;
    if result == c {
        Ok(None)
    } else {
        Ok(Some(result))
    }
}

/// 방향/수단 조사 선택: 종성이 ㄹ이거나 없으면 "로", 그 외에는 "으로"
pub fn connecting_particle(c: char) -> Result<&'static str, HangulError> {
    let (_, _, jong) = decompose(c)?;
    match jong {
        None | Some('ㄹ') => Ok("로"),
        Some(_) => Ok("으로"),
    }
}

/// 목적격 조사 선택: 종성이 없으면 "를", 있으면 "을"
pub fn object_particle(c: char) -> Result<&'static str, HangulError> {
    let (_, _, jong) = decompose(c)?;
    if jong.is_none() {
        Ok("를")
    } else {
        Ok("을")
    }
}

/// 마지막 음절에 두음법칙 대체가 있으면 "단어(대체)" 형태로 표기
///
/// 대체가 없거나 마지막 글자가 한글 음절이 아니면 단어 그대로 반환.
pub fn word_with_alternate(word: &str) -> String {
    let last = match word.chars().last() {
        Some(c) if is_syllable(c) => c,
        _ => return word.to_string(),
    };
    match alternate_initial(last) {
        Ok(Some(alt)) => format!("{}({})", word, alt),
        _ => word.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternate_initial_nieun() {
        // ㄴ + ㅣ 계열 -> ㅇ
        assert_eq!(alternate_initial('니'), Ok(Some('이')));
        assert_eq!(alternate_initial('녀'), Ok(Some('여')));
    }

    #[test]
    fn test_alternate_initial_rieul() {
        // ㄹ + ㅣ 계열 -> ㅇ
        assert_eq!(alternate_initial('량'), Ok(Some('양')));
        assert_eq!(alternate_initial('리'), Ok(Some('이')));
        // ㄹ + ㅏ/ㅗ/ㅜ/ㅡ -> ㄴ
        assert_eq!(alternate_initial('라'), Ok(Some('나')));
        assert_eq!(alternate_initial('록'), Ok(Some('녹')));
        assert_eq!(alternate_initial('름'), Ok(Some('늠')));
    }

    #[test]
    fn test_alternate_initial_none() {
        // 두음법칙 미적용 음절은 None
        assert_eq!(alternate_initial('가'), Ok(None));
        assert_eq!(alternate_initial('일'), Ok(None));
        // ㄹ + ㅓ 는 어느 조에도 해당하지 않음
        assert_eq!(alternate_initial('러'), Ok(None));
    }

    #[test]
    fn test_alternate_initial_invalid() {
        assert_eq!(
            alternate_initial('a'),
            Err(HangulError::InvalidSyllable('a'))
        );
    }

    #[test]
    fn test_connecting_particle() {
        // 종성 ㄹ -> 로
        assert_eq!(connecting_particle('물'), Ok("로"));
        // 종성 없음 -> 로
        assert_eq!(connecting_particle('바'), Ok("로"));
        // 그 외 종성 -> 으로
        assert_eq!(connecting_particle('밥'), Ok("으로"));
    }

    #[test]
    fn test_object_particle() {
        assert_eq!(object_particle('과'), Ok("를"));
        assert_eq!(object_particle('일'), Ok("을"));
    }

    #[test]
    fn test_word_with_alternate() {
        assert_eq!(word_with_alternate("백로"), "백로(노)");
        assert_eq!(word_with_alternate("기량"), "기량(양)");
        assert_eq!(word_with_alternate("사과"), "사과");
        assert_eq!(word_with_alternate(""), "");
    }
}
