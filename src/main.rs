use std::io;
use std::process::ExitCode;

use clap::Parser;
use prompt_course::cli::{self, Cli};
use prompt_course::config::AppConfig;
use prompt_course::shutdown::{run_until_interrupted, InterruptSignal};
use prompt_course::utils::error::AppError;
use prompt_course::utils::logging::init_logging;

#[tokio::main]
async fn main() -> ExitCode {
    // 1. 환경변수 로드
    dotenvy::dotenv().ok();

    // 2. 인자 파싱
    let cli = Cli::parse();

    // 3. 설정 로드
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            cli::report_error(&AppError::from(e), &mut io::stderr());
            return ExitCode::from(cli::EXIT_FAILURE);
        }
    };

    // 4. 로깅 초기화 (guard는 main이 끝날 때까지 유지)
    let _guard = init_logging(&config.log_dir);
    tracing::debug!(
        model = %config.model,
        api_base = %config.api_base,
        has_api_key = config.api_key.is_some(),
        "설정 로드 완료"
    );

    // 5. 시그널 핸들러는 명령보다 먼저 등록 (콘솔 입력이 첫 poll에서 블로킹됨)
    let interrupt = InterruptSignal::install();

    // 6. 명령 실행 (Ctrl+C 시 중단)
    let result = run_until_interrupted(cli::run(cli, &config), interrupt.recv()).await;

    ExitCode::from(cli::finish(result, &mut io::stdout(), &mut io::stderr()))
}
