//! 완성형 한글 음절 분해/조합

use thiserror::Error;

/// 한글 음절 시작 코드포인트 (가)
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 마지막 코드포인트 (힣)
const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 초성 자모 (19개)
#[rustfmt::skip]
pub const CHOSEONG: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ',
    'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 중성 자모 (21개)
#[rustfmt::skip]
pub const JUNGSEONG: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ',
    'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ',
    'ㅣ',
];

/// 종성 자모 (28개, 첫 칸은 종성 없음)
#[rustfmt::skip]
pub const JONGSEONG: [Option<char>; 28] = [
    None,      Some('ㄱ'), Some('ㄲ'), Some('ㄳ'), Some('ㄴ'), Some('ㄵ'),
    Some('ㄶ'), Some('ㄷ'), Some('ㄹ'), Some('ㄺ'), Some('ㄻ'), Some('ㄼ'),
    Some('ㄽ'), Some('ㄾ'), Some('ㄿ'), Some('ㅀ'), Some('ㅁ'), Some('ㅂ'),
    Some('ㅄ'), Some('ㅅ'), Some('ㅆ'), Some('ㅇ'), Some('ㅈ'), Some('ㅊ'),
    Some('ㅋ'), Some('ㅌ'), Some('ㅍ'), Some('ㅎ'),
];

/// 음절 분해/조합 에러
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HangulError {
    /// 완성형 한글 음절(가-힣)이 아닌 문자
    #[error("한글 음절이 아닙니다: {0:?}")]
    InvalidSyllable(char),
    /// 자모 테이블에 없는 문자
    #[error("유효하지 않은 자모입니다: {0:?}")]
    InvalidJamo(char),
}

/// 문자가 완성형 한글 음절(가-힣)인지 확인
pub fn is_syllable(c: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&(c as u32))
}

/// 완성형 한글 음절을 (초성, 중성, 종성)으로 분해
///
/// 종성이 없으면 세 번째 값은 `None`.
/// 음절 블록 밖의 문자는 `InvalidSyllable` 에러.
pub fn decompose(c: char) -> Result<(char, char, Option<char>), HangulError> {
    if !is_syllable(c) {
        return Err(HangulError::InvalidSyllable(c));
    }
    let offset = c as u32 - HANGUL_SYLLABLE_BASE;
    let cho = (offset / 588) as usize;
    let jung = ((offset % 588) / 28) as usize;
    let jong = (offset % 28) as usize;
    Ok((CHOSEONG[cho], JUNGSEONG[jung], JONGSEONG[jong]))
}

/// 초성/중성/종성 자모로 완성형 한글 음절 조합
///
/// `decompose`의 정확한 역연산. 테이블에 없는 자모는 `InvalidJamo` 에러.
pub fn compose(cho: char, jung: char, jong: Option<char>) -> Result<char, HangulError> {
    let cho_index = CHOSEONG
        .iter()
        .position(|&j| j == cho)
        .ok_or(HangulError::InvalidJamo(cho))? as u32;
    let jung_index = JUNGSEONG
        .iter()
        .position(|&j| j == jung)
        .ok_or(HangulError::InvalidJamo(jung))? as u32;
    let jong_index = match jong {
        None => 0,
        Some(j) => JONGSEONG
            .iter()
            .position(|&s| s == Some(j))
            .ok_or(HangulError::InvalidJamo(j))? as u32,
    };
    let code = HANGUL_SYLLABLE_BASE + cho_index * 588 + jung_index * 28 + jong_index;
    // 테이블 인덱스를 통과한 조합은 항상 음절 블록 안에 떨어짐
    char::from_u32(code).ok_or(HangulError::InvalidJamo(cho))
}
