//! 학습자 입력 수집
//!
//! 콘솔 입력(`dialoguer`)과 미리 주어진 답변(`--answer key=value`) 두 가지 방식을 지원합니다.

use std::collections::HashMap;
use std::io;

use dialoguer::{theme::ColorfulTheme, Confirm, Input};

use super::dto::Question;
use crate::utils::error::AppError;

/// 입력 방식 인터페이스
pub trait InputSource {
    /// 실습 질문 하나에 대한 답변
    fn ask(&mut self, question: &Question) -> Result<String, AppError>;

    /// 예/아니오 확인
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, AppError>;

    /// 자유 입력 (기본값 있음)
    fn ask_text(&mut self, message: &str, default: &str) -> Result<String, AppError>;
}

/// 터미널에서 직접 입력받습니다.
pub struct ConsoleInput {
    theme: ColorfulTheme,
}

impl ConsoleInput {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for ConsoleInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for ConsoleInput {
    fn ask(&mut self, question: &Question) -> Result<String, AppError> {
        let mut input = Input::<String>::with_theme(&self.theme);
        input = input.with_prompt(question.prompt);
        if let Some(default) = question.default {
            input = input.default(default.to_string());
        }

        let value = input.interact_text().map_err(map_dialoguer_error)?;
        Ok(value.trim().to_string())
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, AppError> {
        Confirm::with_theme(&self.theme)
            .with_prompt(message)
            .default(default)
            .interact()
            .map_err(map_dialoguer_error)
    }

    fn ask_text(&mut self, message: &str, default: &str) -> Result<String, AppError> {
        let value: String = Input::with_theme(&self.theme)
            .with_prompt(message)
            .default(default.to_string())
            .interact_text()
            .map_err(map_dialoguer_error)?;
        Ok(value.trim().to_string())
    }
}

/// Ctrl+C는 `Interrupted`로, 나머지 입출력 실패는 입력 오류로 변환합니다.
fn map_dialoguer_error(error: dialoguer::Error) -> AppError {
    match error {
        dialoguer::Error::IO(e) if e.kind() == io::ErrorKind::Interrupted => AppError::Interrupted,
        dialoguer::Error::IO(e) => AppError::input(format!("터미널 입력을 읽을 수 없습니다: {}", e)),
    }
}

/// 미리 주어진 답변으로 실행합니다. 없는 항목은 질문의 기본값을 씁니다.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    answers: HashMap<String, String>,
    confirm: bool,
    text: Option<String>,
}

impl ScriptedInput {
    pub fn new(answers: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            ..Self::default()
        }
    }

    /// 모든 확인 질문에 대한 답
    pub fn with_confirm(mut self, confirm: bool) -> Self {
        self.confirm = confirm;
        self
    }

    /// 자유 입력 질문에 대한 답. 없으면 기본값을 씁니다.
    pub fn with_text(mut self, text: Option<String>) -> Self {
        self.text = text;
        self
    }
}

impl InputSource for ScriptedInput {
    fn ask(&mut self, question: &Question) -> Result<String, AppError> {
        let value = self
            .answers
            .get(question.key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .or_else(|| question.default.map(str::to_string));

        value.ok_or_else(|| {
            AppError::input(format!(
                "'{}' 항목의 답변이 필요합니다 (--answer {}=...)",
                question.key, question.key
            ))
        })
    }

    fn confirm(&mut self, _message: &str, _default: bool) -> Result<bool, AppError> {
        Ok(self.confirm)
    }

    fn ask_text(&mut self, _message: &str, default: &str) -> Result<String, AppError> {
        Ok(self.text.clone().unwrap_or_else(|| default.to_string()))
    }
}

/// `key=value` 형식의 명령행 인자를 파싱합니다.
pub fn parse_answer_arg(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("'{}': key=value 형식이어야 합니다", raw))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(format!("'{}': 키가 비어 있습니다", raw));
    }
    Ok((key.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOPIC: Question = Question::required("topic", "주제");
    const LEVEL: Question = Question::with_default("level", "수준", "초급");

    #[test]
    fn scripted_input_should_return_provided_answer() {
        let mut input = ScriptedInput::new([("topic".to_string(), " 광합성 ".to_string())]);
        assert_eq!(input.ask(&TOPIC).unwrap(), "광합성");
    }

    #[test]
    fn scripted_input_should_fall_back_to_default() {
        let mut input = ScriptedInput::new([]);
        assert_eq!(input.ask(&LEVEL).unwrap(), "초급");
    }

    #[test]
    fn scripted_input_should_treat_blank_answer_as_missing() {
        let mut input = ScriptedInput::new([("level".to_string(), "  ".to_string())]);
        assert_eq!(input.ask(&LEVEL).unwrap(), "초급");
    }

    #[test]
    fn scripted_input_should_fail_for_missing_required_answer() {
        // Arrange
        let mut input = ScriptedInput::new([]);

        // Act
        let result = input.ask(&TOPIC);

        // Assert
        match result {
            Err(AppError::Input(msg)) => assert!(msg.contains("--answer topic=")),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn scripted_input_should_answer_confirm_and_text() {
        let mut input = ScriptedInput::new([])
            .with_confirm(true)
            .with_text(Some("my_report".to_string()));

        assert!(input.confirm("저장할까요?", false).unwrap());
        assert_eq!(input.ask_text("파일명", "default").unwrap(), "my_report");
    }

    #[test]
    fn scripted_input_should_use_text_default() {
        let mut input = ScriptedInput::new([]);
        assert_eq!(input.ask_text("파일명", "default").unwrap(), "default");
        assert!(!input.confirm("저장할까요?", true).unwrap());
    }

    #[test]
    fn should_parse_answer_arg() {
        assert_eq!(
            parse_answer_arg("topic=광합성=빛").unwrap(),
            ("topic".to_string(), "광합성=빛".to_string())
        );
    }

    #[test]
    fn should_reject_malformed_answer_arg() {
        assert!(parse_answer_arg("topic").is_err());
        assert!(parse_answer_arg("=value").is_err());
    }

    #[test]
    fn should_map_interrupted_io_error() {
        let error = dialoguer::Error::IO(io::Error::new(io::ErrorKind::Interrupted, "read interrupted"));
        assert!(matches!(map_dialoguer_error(error), AppError::Interrupted));
    }
}
