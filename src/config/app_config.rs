use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Gemini OpenAI 호환 엔드포인트
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// 애플리케이션 설정
///
/// 프로세스 시작 시 한 번 만들어 AI 클라이언트와 저장 로직에 넘겨줍니다.
#[derive(Debug, Clone)]
pub struct AppConfig {
    // AI Service
    pub api_key: Option<String>,
    pub api_base: String,
    pub model: String,
    pub request_timeout: Duration,

    // Output
    pub results_dir: PathBuf,
    pub log_dir: PathBuf,
}

impl AppConfig {
    /// 환경 변수에서 설정 로드
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 조회 함수로 설정 로드
    ///
    /// API 키가 없어도 에러가 아닙니다. AI 호출이 필요한 명령에서 `MissingApiKey`로 실패합니다.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("GEMINI_API_KEY")
            .or_else(|| lookup("GOOGLE_API_KEY"))
            .filter(|key| !key.trim().is_empty());

        let api_base = lookup("AI_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        if !api_base.starts_with("http://") && !api_base.starts_with("https://") {
            return Err(ConfigError::InvalidApiBase(api_base));
        }

        let model = lookup("AI_MODEL")
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let timeout_secs = match lookup("AI_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidTimeout)?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let results_dir = lookup("RESULTS_DIR").unwrap_or_else(|| "results".to_string());
        let log_dir = lookup("LOG_DIR").unwrap_or_else(|| "logs".to_string());

        Ok(Self {
            api_key,
            api_base: api_base.trim_end_matches('/').to_string(),
            model,
            request_timeout: Duration::from_secs(timeout_secs),
            results_dir: PathBuf::from(results_dir),
            log_dir: PathBuf::from(log_dir),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid AI_API_BASE (must start with http:// or https://): {0}")]
    InvalidApiBase(String),
    #[error("Invalid AI_TIMEOUT_SECS (must be a positive integer)")]
    InvalidTimeout,
}
