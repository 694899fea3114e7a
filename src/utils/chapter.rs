//! 챕터 번호 기반 저장 경로 추론
//!
//! `1.1.1_name` 형태의 파일명이나 `exercises/part1/1.1/...` 형태의 경로에서
//! `results/part1/1.1/1.1.1/` 저장 디렉토리를 만들어 냅니다.
//! 패턴은 순서대로 시도하며 처음 일치한 것을 사용합니다.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::utils::error::AppError;

/// 어떤 패턴에도 맞지 않을 때 사용하는 디렉토리 이름
pub const UNKNOWN_DIR: &str = "unknown";

static FILE_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.(\d+)(?:\.(\d+))?_").expect("valid regex"));

static EXERCISE_PATH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|/)exercises/part(\d+)/(\d+\.\d+)(?:/(\d+\.\d+\.\d+))?(?:/|$)").expect("valid regex")
});

static BARE_DIR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.(\d+)(?:\.(\d+))?$").expect("valid regex"));

/// 추론된 챕터 디렉토리
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChapterDir {
    /// `part{part}/{chapter}[/{section}]`
    Chapter {
        part: String,
        chapter: String,
        section: Option<String>,
    },
    Unknown,
}

impl ChapterDir {
    /// 결과 루트 기준 상대 경로
    pub fn relative_path(&self) -> PathBuf {
        match self {
            ChapterDir::Chapter {
                part,
                chapter,
                section,
            } => {
                let mut path = PathBuf::from(format!("part{}", part));
                path.push(chapter);
                if let Some(section) = section {
                    path.push(section);
                }
                path
            }
            ChapterDir::Unknown => PathBuf::from(UNKNOWN_DIR),
        }
    }

    fn from_numbers(part: &str, minor: &str, sub: Option<&str>) -> Self {
        let chapter = format!("{}.{}", part, minor);
        let section = sub.map(|sub| format!("{}.{}", chapter, sub));
        ChapterDir::Chapter {
            part: part.to_string(),
            chapter,
            section,
        }
    }
}

impl fmt::Display for ChapterDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.relative_path().display())
    }
}

/// 파일 경로에서 챕터 디렉토리를 추론합니다. 파일 시스템은 건드리지 않습니다.
pub fn infer_chapter_dir(file_path: &Path) -> ChapterDir {
    let normalized = file_path.to_string_lossy().replace('\\', "/");
    let file_name = normalized
        .rsplit_once('/')
        .map_or(normalized.as_str(), |(_, name)| name);

    // 디렉토리 자체가 넘어와도 추론되도록 전체 경로를 검사
    let inferred = match_file_name(file_name)
        .or_else(|| match_exercise_path(&normalized))
        .or_else(|| match_bare_dir(&normalized));

    match inferred {
        Some(chapter_dir) => chapter_dir,
        None => {
            tracing::warn!(
                path = %file_path.display(),
                "챕터 번호를 찾지 못해 '{}' 디렉토리를 사용합니다",
                UNKNOWN_DIR
            );
            ChapterDir::Unknown
        }
    }
}

/// 저장 디렉토리를 추론하고 없으면 생성한 뒤 경로를 반환합니다.
pub fn get_chapter_save_path(file_path: &Path, results_root: &Path) -> Result<PathBuf, AppError> {
    let dir = results_root.join(infer_chapter_dir(file_path).relative_path());
    fs::create_dir_all(&dir).map_err(|e| AppError::io(&dir, e))?;
    Ok(dir)
}

fn match_file_name(file_name: &str) -> Option<ChapterDir> {
    let caps = FILE_NAME_PATTERN.captures(file_name)?;
    Some(ChapterDir::from_numbers(
        &caps[1],
        &caps[2],
        caps.get(3).map(|m| m.as_str()),
    ))
}

fn match_exercise_path(path: &str) -> Option<ChapterDir> {
    let caps = EXERCISE_PATH_PATTERN.captures(path)?;
    Some(ChapterDir::Chapter {
        part: caps[1].to_string(),
        chapter: caps[2].to_string(),
        section: caps.get(3).map(|m| m.as_str().to_string()),
    })
}

fn match_bare_dir(path: &str) -> Option<ChapterDir> {
    path.split('/').rev().find_map(|component| {
        let caps = BARE_DIR_PATTERN.captures(component)?;
        Some(ChapterDir::from_numbers(
            &caps[1],
            &caps[2],
            caps.get(3).map(|m| m.as_str()),
        ))
    })
}
