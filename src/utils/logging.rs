//! 로깅 초기화 모듈
//!
//! 일별 로그 파일에는 JSON 형식으로, 터미널(stderr)에는 경고 이상만 간결하게 출력합니다.
//! 실습 결과가 출력되는 stdout은 로그로 어지럽히지 않습니다.

use std::path::Path;

use tracing_appender::rolling;
use tracing_subscriber::{
    filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

/// 로깅 시스템을 초기화합니다.
///
/// 환경 변수 `RUST_LOG`로 로그 레벨을 설정할 수 있으며 기본값은 `info,prompt_course=debug`입니다.
/// 파일명 형식: `prompt-course.log.YYYY-MM-DD`
///
/// 반환되는 `WorkerGuard`를 main에서 유지해야 종료 시 버퍼링된 로그가 손실되지 않습니다.
pub fn init_logging(log_dir: &Path) -> tracing_appender::non_blocking::WorkerGuard {
    let file_appender = rolling::daily(log_dir, "prompt-course.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .compact()
        .without_time()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(LevelFilter::WARN);

    let file_layer = fmt::layer()
        .json()
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_current_span(true)
        .flatten_event(false)
        .with_ansi(false)
        .with_writer(non_blocking);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,prompt_course=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .or_else(|err| {
            // Detect "already initialized" via source downcasting
            use std::error::Error;
            if err
                .source()
                .and_then(|s| s.downcast_ref::<tracing::dispatcher::SetGlobalDefaultError>())
                .is_some()
            {
                return Ok(());
            }
            eprintln!("Failed to initialize tracing: {}", err);
            Err(err)
        })
        .ok(); // 로깅 초기화 실패가 실습 실행을 막지 않도록 무시

    guard
}
