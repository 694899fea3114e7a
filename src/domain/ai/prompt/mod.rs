//! AI 프롬프트 모듈
//!
//! ## 구조
//! - `builder`: 역할/배경/지시사항/출력 형식 섹션을 조립하는 `PromptBuilder`

mod builder;

pub use builder::PromptBuilder;
