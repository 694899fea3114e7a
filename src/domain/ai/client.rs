use std::sync::{Arc, LazyLock};

use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use regex::Regex;

use crate::config::AppConfig;
use crate::utils::error::AppError;

/// 헬스체크용 프롬프트
const HEALTH_CHECK_PROMPT: &str = "Respond with exactly 'ok'";

/// 메시지 안의 HTTP 상태 코드 (다른 숫자의 일부는 제외)
static STATUS_CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(40[13]|429|5\d\d)\b").expect("valid regex"));

/// HTTP 상태 코드 분류. 분류 대상이 아니면 `None`.
fn classify_status(status: u16) -> Option<AppError> {
    match status {
        401 => Some(AppError::InvalidApiKey),
        403 => Some(AppError::PermissionDenied),
        429 => Some(AppError::QuotaExceeded),
        500..=599 => Some(AppError::AiTemporaryError),
        _ => None,
    }
}

/// 공급자 에러 메시지를 세분화된 AppError로 변환
///
/// Gemini는 OpenAI 호환 엔드포인트에서도 자체 상태 문자열
/// (`API_KEY_INVALID`, `PERMISSION_DENIED`, `RESOURCE_EXHAUSTED`)을 메시지에 담아 보냅니다.
pub(crate) fn classify_message(message: &str) -> AppError {
    let lower = message.to_lowercase();

    if lower.contains("api key not valid")
        || lower.contains("api_key_invalid")
        || lower.contains("invalid api key")
        || lower.contains("invalid_api_key")
        || lower.contains("incorrect api key")
    {
        return AppError::InvalidApiKey;
    }
    if lower.contains("permission_denied") || lower.contains("permission denied") {
        return AppError::PermissionDenied;
    }
    if lower.contains("resource_exhausted")
        || lower.contains("quota")
        || lower.contains("rate limit")
        || lower.contains("rate_limit")
    {
        return AppError::QuotaExceeded;
    }
    if lower.contains("timed out")
        || lower.contains("deadline_exceeded")
        || lower.contains("unavailable")
        || lower.contains("server error")
        || lower.contains("server_error")
    {
        return AppError::AiTemporaryError;
    }

    STATUS_CODE_PATTERN
        .captures(&lower)
        .and_then(|caps| caps[1].parse::<u16>().ok())
        .and_then(classify_status)
        .unwrap_or_else(|| AppError::AiError(message.to_string()))
}

/// OpenAI 호환 클라이언트 에러를 AppError로 변환
fn classify_openai_error(error: OpenAIError) -> AppError {
    match &error {
        OpenAIError::ApiError(api_err) => {
            // 코드는 상태 번호("429")이거나 식별자("invalid_api_key")
            let err_code = api_err.code.as_deref().unwrap_or("");
            let err_type = api_err.r#type.as_deref().unwrap_or("");

            match err_code.parse::<u16>().ok().and_then(classify_status) {
                Some(classified) => classified,
                None => {
                    let combined = format!("{} {} {}", err_type, err_code, api_err.message);
                    match classify_message(&combined) {
                        AppError::AiError(_) => AppError::AiError(api_err.message.clone()),
                        classified => classified,
                    }
                }
            }
        }
        OpenAIError::Reqwest(req_err) => {
            if req_err.is_timeout() || req_err.is_connect() {
                return AppError::AiTemporaryError;
            }
            req_err
                .status()
                .and_then(|status| classify_status(status.as_u16()))
                .unwrap_or_else(|| classify_message(&req_err.to_string()))
        }
        _ => classify_message(&error.to_string()),
    }
}

/// AI 클라이언트 인터페이스
///
/// 실습 실행기와 테스트에서 실제 API 대신 Mock 객체로 대체할 수 있습니다.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait AiClientTrait: Send + Sync {
    /// 프롬프트 하나를 보내고 응답 텍스트를 받습니다.
    ///
    /// `temperature`는 관례상 0.0~1.0이지만 검증하지 않고 그대로 전달합니다.
    async fn get_completion(&self, prompt: &str, temperature: f32) -> Result<String, AppError>;

    /// 최소한의 텍스트 생성으로 연결 상태를 확인합니다.
    async fn health_check(&self) -> Result<String, AppError>;
}

/// Arc로 래핑된 AiClient (Clone 지원)
pub type AiClient = Arc<dyn AiClientTrait>;

/// Gemini (OpenAI 호환 엔드포인트) 클라이언트 구현체
#[derive(Clone)]
pub struct GeminiClient {
    client: Client<OpenAIConfig>,
    model: String,
    timeout: std::time::Duration,
}

impl GeminiClient {
    pub fn new(api_key: &str, config: &AppConfig) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(&config.api_base);
        Self {
            client: Client::with_config(openai_config),
            model: config.model.clone(),
            timeout: config.request_timeout,
        }
    }

    /// 설정의 API 키로 클라이언트를 만듭니다. 키가 없으면 `MissingApiKey`.
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let api_key = config.api_key.as_deref().ok_or(AppError::MissingApiKey)?;
        Ok(Self::new(api_key, config))
    }

    /// 사용하는 모델 이름
    pub fn model(&self) -> &str {
        &self.model
    }

    async fn send(&self, prompt: &str, temperature: f32) -> Result<String, AppError> {
        let messages = vec![build_user_message(prompt)?];

        let request = CreateChatCompletionRequestArgs::default()
            .model(self.model.as_str())
            .messages(messages)
            .temperature(temperature)
            .build()
            .map_err(|e| AppError::internal(e.to_string()))?;

        tracing::debug!(model = %self.model, prompt_chars = prompt.chars().count(), "AI 요청 전송");

        let response = tokio::time::timeout(self.timeout, self.client.chat().create(request))
            .await
            .map_err(|_| AppError::AiTemporaryError)? // 타임아웃
            .map_err(classify_openai_error)?;

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .filter(|text| !text.trim().is_empty())
            .ok_or(AppError::EmptyCompletion)?;

        tracing::debug!(response_chars = content.chars().count(), "AI 응답 수신");
        Ok(content)
    }
}

#[async_trait::async_trait]
impl AiClientTrait for GeminiClient {
    async fn get_completion(&self, prompt: &str, temperature: f32) -> Result<String, AppError> {
        self.send(prompt, temperature).await
    }

    async fn health_check(&self) -> Result<String, AppError> {
        self.send(HEALTH_CHECK_PROMPT, 0.0).await
    }
}

/// 사용자 메시지 빌더 헬퍼 함수 (crate 내부용)
pub(crate) fn build_user_message(content: &str) -> Result<ChatCompletionRequestMessage, AppError> {
    Ok(ChatCompletionRequestMessage::User(
        ChatCompletionRequestUserMessageArgs::default()
            .content(content)
            .build()
            .map_err(|e| AppError::internal(e.to_string()))?,
    ))
}
