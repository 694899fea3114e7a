use std::path::PathBuf;

use crate::config::ConfigError;

/// 애플리케이션 전역 에러 타입
///
/// 모든 에러는 해당 실행을 종료시킵니다. 재시도는 호출자가
/// [`with_retry`](crate::domain::ai::retry::with_retry)로 감쌀 때만 일어납니다.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),

    #[error("GEMINI_API_KEY 환경 변수가 설정되지 않았습니다")]
    MissingApiKey,

    #[error("API 키 형식이 올바르지 않습니다: {0}")]
    MalformedApiKey(String),

    #[error("유효하지 않은 API 키입니다")]
    InvalidApiKey,

    #[error("API 접근 권한이 없습니다")]
    PermissionDenied,

    #[error("API 사용 한도를 초과했습니다")]
    QuotaExceeded,

    #[error("AI 서비스에 일시적인 문제가 발생했습니다")]
    AiTemporaryError,

    #[error("AI API 호출 실패: {0}")]
    AiError(String),

    #[error("AI 응답이 비어 있습니다")]
    EmptyCompletion,

    #[error("파일 처리 실패 ({path}): {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("입력 오류: {0}")]
    Input(String),

    #[error("존재하지 않는 실습입니다: {0}")]
    UnknownExercise(String),

    #[error("사용자가 실행을 중단했습니다")]
    Interrupted,

    #[error("내부 에러: {0}")]
    Internal(String),
}

impl AppError {
    /// 에러 코드 반환
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Config(_) => "CONFIG_001",
            AppError::MissingApiKey => "AI_001",
            AppError::MalformedApiKey(_) => "AI_002",
            AppError::InvalidApiKey => "AI_003",
            AppError::PermissionDenied => "AI_004",
            AppError::QuotaExceeded => "AI_005",
            AppError::AiTemporaryError => "AI_006",
            AppError::AiError(_) => "AI_007",
            AppError::EmptyCompletion => "AI_008",
            AppError::Io { .. } => "FILE_001",
            AppError::Input(_) => "INPUT_001",
            AppError::UnknownExercise(_) => "INPUT_002",
            AppError::Interrupted => "COMMON499",
            AppError::Internal(_) => "COMMON500",
        }
    }

    /// 사용자에게 보여줄 해결 방법
    pub fn hint(&self) -> &'static str {
        match self {
            AppError::MissingApiKey => {
                ".env 파일 또는 환경 변수에 GEMINI_API_KEY를 설정하세요."
            }
            AppError::MalformedApiKey(_) => {
                "API 키 앞뒤의 따옴표나 공백을 제거하고 전체 키를 복사했는지 확인하세요."
            }
            AppError::InvalidApiKey => {
                "Google AI Studio에서 API 키를 다시 발급받아 GEMINI_API_KEY에 설정하세요."
            }
            AppError::PermissionDenied => {
                "해당 모델에 대한 접근 권한과 API 활성화 여부를 확인하세요."
            }
            AppError::QuotaExceeded => "잠시 후 다시 시도하거나 사용량 한도를 확인하세요.",
            AppError::AiTemporaryError | AppError::AiError(_) | AppError::EmptyCompletion => {
                "API 키와 네트워크 연결을 확인하세요."
            }
            AppError::Io { .. } => "저장 경로의 쓰기 권한을 확인하세요.",
            AppError::UnknownExercise(_) => "`prompt-course list`로 실습 목록을 확인하세요.",
            _ => "",
        }
    }

    /// 파일 입출력 에러 생성
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn input(msg: impl Into<String>) -> Self {
        AppError::Input(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
