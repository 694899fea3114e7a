//! 프롬프트 엔지니어링 실습
//!
//! 모든 실습은 같은 흐름을 따릅니다: 입력 수집 → 기본 프롬프트 → 향상된 프롬프트 →
//! 두 프롬프트의 응답 비교 → (선택) Markdown 저장.
//! 각 실습은 질문 목록과 두 프롬프트를 만드는 방법만 정의합니다.

pub mod catalog;
pub mod display;
pub mod dto;
pub mod input;
pub mod report;
pub mod runner;

pub use dto::{Answers, ExerciseMeta, ExerciseOutcome, Question};
pub use input::{ConsoleInput, InputSource, ScriptedInput};
pub use runner::{ExerciseRunner, RunOptions};

use crate::utils::error::AppError;

/// 실습 하나의 정의
pub trait Exercise: Send + Sync {
    fn meta(&self) -> ExerciseMeta;

    /// 학습자에게 물을 질문 (순서대로)
    fn questions(&self) -> Vec<Question>;

    /// 비교용 한 문장짜리 프롬프트
    fn basic_prompt(&self, answers: &Answers) -> Result<String, AppError>;

    /// `PromptBuilder`로 조립한 구조화된 프롬프트
    fn enhanced_prompt(&self, answers: &Answers) -> Result<String, AppError>;
}
