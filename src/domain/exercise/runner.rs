use super::display;
use super::dto::{Answers, ExerciseOutcome};
use super::input::InputSource;
use super::Exercise;
use crate::domain::ai::{retry::with_retry, AiClient};
use crate::utils::error::AppError;

/// 실행 옵션
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// 실습 기본값 대신 사용할 temperature
    pub temperature: Option<f32>,
    /// 일시적 오류 시 지수 백오프 재시도
    pub retry: bool,
}

/// 입력 수집 → 기본 프롬프트 → 향상된 프롬프트 → API 호출 순서로 실습을 진행합니다.
pub struct ExerciseRunner {
    client: AiClient,
    options: RunOptions,
}

impl ExerciseRunner {
    pub fn new(client: AiClient, options: RunOptions) -> Self {
        Self { client, options }
    }

    pub async fn run(
        &self,
        exercise: &dyn Exercise,
        input: &mut dyn InputSource,
    ) -> Result<ExerciseOutcome, AppError> {
        let meta = exercise.meta();
        display::print_header(&meta);

        // 1. 입력 수집
        let answers = collect_answers(exercise, input)?;
        tracing::info!(exercise = meta.code, answers = answers.len(), "입력 수집 완료");

        // 2. 프롬프트 생성
        let basic_prompt = exercise.basic_prompt(&answers)?;
        let enhanced_prompt = exercise.enhanced_prompt(&answers)?;
        let temperature = self.options.temperature.unwrap_or(meta.temperature);

        // 3. API 호출
        display::print_progress("기본 프롬프트로 응답을 생성하는 중...");
        let basic_response = self.complete(&basic_prompt, temperature).await?;

        display::print_progress("향상된 프롬프트로 응답을 생성하는 중...");
        let enhanced_response = self.complete(&enhanced_prompt, temperature).await?;

        // 4. 결과 출력
        display::print_section("기본 프롬프트", &basic_prompt);
        display::print_section("기본 프롬프트 응답", &basic_response);
        display::print_section("향상된 프롬프트", &enhanced_prompt);
        display::print_section("향상된 프롬프트 응답", &enhanced_response);

        tracing::info!(exercise = meta.code, temperature, "실습 완료");

        Ok(ExerciseOutcome {
            answers,
            basic_prompt,
            enhanced_prompt,
            basic_response,
            enhanced_response,
        })
    }

    async fn complete(&self, prompt: &str, temperature: f32) -> Result<String, AppError> {
        if self.options.retry {
            with_retry(|| self.client.get_completion(prompt, temperature)).await
        } else {
            self.client.get_completion(prompt, temperature).await
        }
    }
}

/// 질문 순서대로 답변을 모읍니다.
pub fn collect_answers(
    exercise: &dyn Exercise,
    input: &mut dyn InputSource,
) -> Result<Answers, AppError> {
    let mut answers = Answers::new();
    for question in exercise.questions() {
        let value = input.ask(&question)?;
        answers.insert(&question, value);
    }
    Ok(answers)
}
