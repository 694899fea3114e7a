//! 명령행 인터페이스
//!
//! ## 명령
//! - `list`: 실습 목록
//! - `run`: 실습 실행 후 결과 저장
//! - `check`: API 키와 연결 점검
//! - `path`: 파일 경로에서 결과 저장 디렉토리 추론

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use console::style;

use crate::config::AppConfig;
use crate::domain::ai::api_key::{check_api_key, mask_api_key};
use crate::domain::ai::{AiClient, AiClientTrait, GeminiClient};
use crate::domain::exercise::input::parse_answer_arg;
use crate::domain::exercise::{
    catalog, display, report, ConsoleInput, ExerciseMeta, ExerciseRunner, InputSource, RunOptions,
    ScriptedInput,
};
use crate::utils::chapter::{get_chapter_save_path, infer_chapter_dir};
use crate::utils::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "prompt-course",
    version,
    about = "기본 프롬프트와 향상된 프롬프트를 비교하는 프롬프트 엔지니어링 실습"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 실습 목록 출력
    List {
        /// JSON으로 출력
        #[arg(long)]
        json: bool,
    },

    /// 실습 실행
    Run(RunArgs),

    /// API 키 형식과 연결 상태 점검
    Check,

    /// 파일 경로에서 결과 저장 디렉토리 추론
    Path {
        /// 실습 파일 경로 (예: exercises/part1/1.1/1.1.1_role_assignment)
        file: PathBuf,

        /// 디렉토리까지 생성
        #[arg(long)]
        create: bool,
    },
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// 챕터 코드(1.1.1) 또는 파일명(1.1.1_role_assignment)
    pub exercise: String,

    /// 질문에 대한 답 (반복 가능). 지정하면 비대화형으로 실행합니다.
    #[arg(short, long = "answer", value_name = "KEY=VALUE", value_parser = parse_answer_arg)]
    pub answers: Vec<(String, String)>,

    /// 질문하지 않고 --answer 값과 기본값만 사용
    #[arg(long)]
    pub non_interactive: bool,

    /// 확인 없이 결과 저장
    #[arg(long)]
    pub save: bool,

    /// 저장할 파일명 (.md 생략 가능)
    #[arg(short, long, value_name = "NAME")]
    pub output: Option<String>,

    /// 실습 기본값 대신 사용할 temperature (0.0 ~ 2.0)
    #[arg(short, long, value_parser = parse_temperature)]
    pub temperature: Option<f32>,

    /// 일시적 오류 시 재시도
    #[arg(long)]
    pub retry: bool,
}

impl RunArgs {
    fn is_interactive(&self) -> bool {
        !self.non_interactive && self.answers.is_empty() && console::user_attended()
    }
}

fn parse_temperature(raw: &str) -> Result<f32, String> {
    let value: f32 = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{}': 숫자가 아닙니다", raw))?;
    if !(0.0..=2.0).contains(&value) {
        return Err(format!("{}: 0.0 ~ 2.0 범위여야 합니다", value));
    }
    Ok(value)
}

/// 명령 실행
pub async fn run(cli: Cli, config: &AppConfig) -> Result<(), AppError> {
    match cli.command {
        Commands::List { json } => list_exercises(json),
        Commands::Run(args) => run_exercise(args, config).await,
        Commands::Check => check_connection(config).await,
        Commands::Path { file, create } => show_save_path(&file, config, create),
    }
}

/// 정상 종료 코드
pub const EXIT_SUCCESS: u8 = 0;
/// 에러 종료 코드
pub const EXIT_FAILURE: u8 = 1;

/// 실행 결과를 출력하고 종료 코드를 정합니다.
///
/// 학습자 중단은 실패가 아니므로 안내 메시지와 함께 0을 반환합니다.
pub fn finish(result: Result<(), AppError>, out: &mut impl Write, err: &mut impl Write) -> u8 {
    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(AppError::Interrupted) => {
            tracing::info!("사용자가 실행을 중단했습니다");
            writeln!(out).ok();
            writeln!(out, "{}", style(INTERRUPTED_MESSAGE).yellow()).ok();
            EXIT_SUCCESS
        }
        Err(e) => {
            tracing::info!(code = e.error_code(), error = %e, "명령 실행 실패");
            report_error(&e, err);
            EXIT_FAILURE
        }
    }
}

const INTERRUPTED_MESSAGE: &str = "실습을 중단했습니다. 다음에 다시 만나요!";

/// `[코드] 메시지`와 도움말 출력
pub fn report_error(error: &AppError, err: &mut impl Write) {
    writeln!(
        err,
        "{} {}",
        style(format!("[{}]", error.error_code())).red().bold(),
        error
    )
    .ok();
    let hint = error.hint();
    if !hint.is_empty() {
        writeln!(err, "{} {}", style("도움말:").yellow(), hint).ok();
    }
}

fn list_exercises(json: bool) -> Result<(), AppError> {
    let metas: Vec<ExerciseMeta> = catalog::all().iter().map(|e| e.meta()).collect();

    if json {
        let body = serde_json::to_string_pretty(&metas)
            .map_err(|e| AppError::internal(format!("실습 목록 직렬화 실패: {}", e)))?;
        println!("{}", body);
        return Ok(());
    }

    println!("{}", style("실습 목록").bold());
    for meta in &metas {
        println!(
            "  {:<7} {:<32} {}",
            style(meta.code).cyan(),
            meta.file_stem,
            style(meta.technique).dim()
        );
    }
    println!();
    println!("실행: prompt-course run <코드>");
    Ok(())
}

async fn run_exercise(args: RunArgs, config: &AppConfig) -> Result<(), AppError> {
    let exercise =
        catalog::find(&args.exercise).ok_or_else(|| AppError::UnknownExercise(args.exercise.clone()))?;
    let meta = exercise.meta();

    let api_key = check_api_key(config.api_key.as_deref())?;
    let client: AiClient = Arc::new(GeminiClient::new(api_key, config));
    let runner = ExerciseRunner::new(
        client,
        RunOptions {
            temperature: args.temperature,
            retry: args.retry,
        },
    );

    let mut input: Box<dyn InputSource> = if args.is_interactive() {
        Box::new(ConsoleInput::new())
    } else {
        Box::new(
            ScriptedInput::new(args.answers.iter().cloned())
                .with_confirm(args.save)
                .with_text(args.output.clone()),
        )
    };

    tracing::info!(exercise = meta.code, model = %config.model, "실습 시작");
    let outcome = runner.run(exercise.as_ref(), input.as_mut()).await?;

    println!();
    let save = args.save || input.confirm("결과를 파일로 저장하시겠습니까?", true)?;
    if !save {
        return Ok(());
    }

    let file_name = match args.output {
        Some(name) => name,
        None => input.ask_text("저장할 파일명", meta.default_output)?,
    };
    let path = report::save_report(&meta, &outcome, &config.results_dir, &file_name)?;
    display::print_saved(&path);
    Ok(())
}

async fn check_connection(config: &AppConfig) -> Result<(), AppError> {
    println!("{}", style("API 연결 점검").bold());
    println!("  엔드포인트: {}", config.api_base);
    println!("  모델: {}", config.model);

    let api_key = check_api_key(config.api_key.as_deref())?;
    println!(
        "  API 키: {} ({}자)",
        mask_api_key(api_key),
        api_key.chars().count()
    );

    let client = GeminiClient::new(api_key, config);
    let reply = client.health_check().await?;

    println!();
    println!("{} {}", style("✓ 연결 성공").green().bold(), style(reply.trim()).dim());
    Ok(())
}

fn show_save_path(file: &std::path::Path, config: &AppConfig, create: bool) -> Result<(), AppError> {
    let chapter = infer_chapter_dir(file);
    let path = if create {
        get_chapter_save_path(file, &config.results_dir)?
    } else {
        config.results_dir.join(chapter.relative_path())
    };

    println!("챕터: {}", chapter);
    println!("저장 경로: {}", path.display());
    Ok(())
}
