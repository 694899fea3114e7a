use backoff::{future::retry, ExponentialBackoff};
use std::future::Future;
use std::time::Duration;

use crate::utils::error::AppError;

/// 재시도 가능한 에러인지 판단
///
/// 일시적 오류와 분당 호출 한도 초과만 재시도합니다.
/// 키 오류, 권한 오류, 입력 오류 등은 즉시 실패합니다.
fn is_retryable_error(error: &AppError) -> bool {
    matches!(error, AppError::AiTemporaryError | AppError::QuotaExceeded)
}

/// 지수 백오프 설정 생성
fn create_backoff() -> ExponentialBackoff {
    ExponentialBackoff {
        initial_interval: Duration::from_millis(500),
        max_interval: Duration::from_secs(10),
        max_elapsed_time: Some(Duration::from_secs(30)),
        multiplier: 2.0,
        ..Default::default()
    }
}

/// 재시도 로직을 적용한 비동기 작업 실행
///
/// 기본 실행은 한 번만 시도합니다. `--retry` 옵션을 준 경우에만 이 래퍼를 씁니다.
pub async fn with_retry<F, Fut, T>(operation: F) -> Result<T, AppError>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let backoff = create_backoff();

    retry(backoff, || async {
        match operation().await {
            Ok(result) => Ok(result),
            Err(e) => {
                if is_retryable_error(&e) {
                    tracing::warn!(error = %e, "Retryable error, will retry...");
                    Err(backoff::Error::transient(e))
                } else {
                    tracing::error!(error = %e, "Permanent error, not retrying");
                    Err(backoff::Error::permanent(e))
                }
            }
        }
    })
    .await
}
