use std::future::Future;

use tokio::signal;

use crate::utils::error::AppError;

/// 실행 중단 시그널 (SIGINT, SIGTERM)
///
/// `install()`이 반환되는 시점에 이미 핸들러가 등록되어 있습니다.
/// 콘솔 입력처럼 첫 poll에서 스레드를 막는 명령과 함께 쓰더라도
/// Ctrl+C가 기본 동작(프로세스 종료)으로 처리되지 않습니다.
pub struct InterruptSignal {
    #[cfg(unix)]
    interrupt: Option<signal::unix::Signal>,
    #[cfg(unix)]
    terminate: Option<signal::unix::Signal>,
}

impl InterruptSignal {
    /// 시그널 핸들러 등록. tokio 런타임 안에서 호출해야 합니다.
    ///
    /// 등록에 실패한 시그널은 경고만 남기고 무시합니다.
    pub fn install() -> Self {
        #[cfg(unix)]
        {
            use signal::unix::{signal, SignalKind};

            let interrupt = signal(SignalKind::interrupt())
                .map_err(|e| tracing::warn!(error = %e, "Failed to install SIGINT handler"))
                .ok();
            let terminate = signal(SignalKind::terminate())
                .map_err(|e| tracing::warn!(error = %e, "Failed to install SIGTERM handler"))
                .ok();
            Self {
                interrupt,
                terminate,
            }
        }

        #[cfg(not(unix))]
        {
            Self {}
        }
    }

    /// 시그널을 받을 때까지 대기합니다.
    #[cfg(unix)]
    pub async fn recv(self) {
        let Self {
            mut interrupt,
            mut terminate,
        } = self;

        let ctrl_c = async {
            match interrupt.as_mut() {
                Some(stream) => {
                    stream.recv().await;
                }
                None => std::future::pending::<()>().await,
            }
        };
        let term = async {
            match terminate.as_mut() {
                Some(stream) => {
                    stream.recv().await;
                }
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            _ = ctrl_c => {
                tracing::info!("Received Ctrl+C signal");
            },
            _ = term => {
                tracing::info!("Received SIGTERM signal");
            },
        }
    }

    #[cfg(not(unix))]
    pub async fn recv(self) {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
        tracing::info!("Received Ctrl+C signal");
    }
}

/// 명령을 실행하되 `interrupt`가 먼저 끝나면 `AppError::Interrupted`를 반환합니다.
///
/// 중단 future를 항상 먼저 poll합니다.
pub async fn run_until_interrupted<F, I, T>(command: F, interrupt: I) -> Result<T, AppError>
where
    F: Future<Output = Result<T, AppError>>,
    I: Future<Output = ()>,
{
    tokio::select! {
        biased;
        _ = interrupt => Err(AppError::Interrupted),
        result = command => result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::timeout;

    #[cfg(unix)]
    #[tokio::test]
    async fn install_should_catch_sigint_before_first_poll() {
        // Arrange
        let signal = InterruptSignal::install();

        // Act: 아직 recv()를 poll하지 않은 상태에서 SIGINT 전송
        let status = std::process::Command::new("kill")
            .args(["-INT", &std::process::id().to_string()])
            .status()
            .unwrap();

        // Assert: 프로세스가 살아 있고 시그널이 전달됨
        assert!(status.success());
        let received = timeout(Duration::from_secs(5), signal.recv()).await;
        assert!(received.is_ok(), "SIGINT should be delivered to the installed handler");
    }

    #[tokio::test]
    async fn should_report_interrupt_without_polling_command() {
        // Arrange: 첫 poll에서 막히는 명령을 흉내 내기 위해 poll되면 실패하는 future 사용
        let command = async {
            if true {
                panic!("command must not be polled once interrupted");
            }
            Ok::<(), AppError>(())
        };

        // Act
        let result = run_until_interrupted(command, std::future::ready(())).await;

        // Assert
        assert!(matches!(result, Err(AppError::Interrupted)));
    }

    #[tokio::test]
    async fn should_return_command_result_when_not_interrupted() {
        let result =
            run_until_interrupted(async { Ok::<_, AppError>(42) }, std::future::pending()).await;

        assert_eq!(result.unwrap(), 42);
    }

    #[tokio::test]
    async fn should_propagate_command_error() {
        let result = run_until_interrupted(
            async { Err::<(), _>(AppError::InvalidApiKey) },
            std::future::pending(),
        )
        .await;

        assert!(matches!(result, Err(AppError::InvalidApiKey)));
    }
}
