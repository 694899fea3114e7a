//! 실습 결과 Markdown 보고서

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use super::dto::{ExerciseMeta, ExerciseOutcome};
use crate::utils::chapter::get_chapter_save_path;
use crate::utils::error::AppError;
use crate::utils::file_handler::{ensure_markdown_extension, save_markdown};

/// 기본 프롬프트와 향상된 프롬프트의 결과를 비교하는 본문 생성 (제목 제외)
pub fn render_report(
    meta: &ExerciseMeta,
    outcome: &ExerciseOutcome,
    generated_at: DateTime<Local>,
) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "> 실습 {} · {} · {}\n\n",
        meta.code,
        meta.technique,
        generated_at.format("%Y-%m-%d %H:%M:%S")
    ));

    out.push_str("## 입력\n\n");
    for answer in outcome.answers.iter() {
        out.push_str(&format!("- **{}**: {}\n", answer.label, answer.value));
    }

    out.push_str("\n## 기본 프롬프트\n\n");
    out.push_str(&fenced(&outcome.basic_prompt));
    out.push_str("\n### 응답\n\n");
    out.push_str(outcome.basic_response.trim_end());

    out.push_str("\n\n## 향상된 프롬프트\n\n");
    out.push_str(&fenced(&outcome.enhanced_prompt));
    out.push_str("\n### 응답\n\n");
    out.push_str(outcome.enhanced_response.trim_end());
    out.push('\n');

    out
}

/// 챕터 디렉토리에 보고서를 저장하고 경로를 반환합니다.
///
/// 같은 이름의 파일이 있으면 덮어씁니다.
pub fn save_report(
    meta: &ExerciseMeta,
    outcome: &ExerciseOutcome,
    results_root: &Path,
    file_name: &str,
) -> Result<PathBuf, AppError> {
    let file_name = ensure_markdown_extension(file_name);
    if file_name == ".md" || file_name.contains(['/', '\\']) {
        return Err(AppError::input(format!(
            "파일명으로 사용할 수 없습니다: '{}'",
            file_name
        )));
    }

    let dir = get_chapter_save_path(Path::new(meta.file_stem), results_root)?;
    let path = dir.join(file_name);

    let body = render_report(meta, outcome, Local::now());
    save_markdown(&body, &path, Some(meta.title))?;
    Ok(path)
}

fn fenced(text: &str) -> String {
    format!("```text\n{}\n```\n", text.trim_end())
}
