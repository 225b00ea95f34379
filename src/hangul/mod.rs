//! 한글 음절 음운 처리
//!
//! 완성형 음절의 분해/조합, 끝말잇기 두음법칙, 조사 선택을 제공합니다.
//! 모두 순수 함수이며 외부 의존성이 없습니다.

mod initial_sound;
mod syllable;

pub use initial_sound::{
    alternate_initial, connecting_particle, object_particle, word_with_alternate,
};
pub use syllable::{compose, decompose, is_syllable, HangulError, CHOSEONG, JONGSEONG, JUNGSEONG};
