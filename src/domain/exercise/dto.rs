use serde::Serialize;

use crate::utils::error::AppError;

/// 실습 메타데이터
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseMeta {
    /// 챕터 코드 (예: `1.1.1`)
    pub code: &'static str,
    /// 챕터 번호 규칙을 따르는 파일명 (예: `1.1.1_role_assignment`)
    pub file_stem: &'static str,
    pub title: &'static str,
    /// 다루는 프롬프트 기법
    pub technique: &'static str,
    /// 결과 저장 시 기본 파일명
    pub default_output: &'static str,
    pub temperature: f32,
}

/// 학습자에게 묻는 질문 하나
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Question {
    pub key: &'static str,
    pub prompt: &'static str,
    pub default: Option<&'static str>,
}

impl Question {
    pub const fn required(key: &'static str, prompt: &'static str) -> Self {
        Self {
            key,
            prompt,
            default: None,
        }
    }

    pub const fn with_default(key: &'static str, prompt: &'static str, default: &'static str) -> Self {
        Self {
            key,
            prompt,
            default: Some(default),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub key: String,
    pub label: String,
    pub value: String,
}

/// 질문 순서대로 모은 답변
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    entries: Vec<Answer>,
}

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    /// 같은 키가 있으면 값을 바꿉니다.
    pub fn insert(&mut self, question: &Question, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|a| a.key == question.key) {
            Some(existing) => existing.value = value,
            None => self.entries.push(Answer {
                key: question.key.to_string(),
                label: question.prompt.to_string(),
                value,
            }),
        }
    }

    pub fn get(&self, key: &str) -> Result<&str, AppError> {
        self.entries
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.value.as_str())
            .ok_or_else(|| AppError::input(format!("'{}' 항목의 답변이 없습니다", key)))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Answer> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// 한 번의 실습 실행 결과
#[derive(Debug, Clone)]
pub struct ExerciseOutcome {
    pub answers: Answers,
    pub basic_prompt: String,
    pub enhanced_prompt: String,
    pub basic_response: String,
    pub enhanced_response: String,
}
