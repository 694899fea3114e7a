/// 챕터 경로 추론과 Markdown 저장 통합 테스트
use std::fs;
use std::path::{Path, PathBuf};

use prompt_course::domain::ai::PromptBuilder;
use prompt_course::utils::chapter::{get_chapter_save_path, infer_chapter_dir, ChapterDir};
use prompt_course::utils::file_handler::save_markdown;

#[test]
fn should_resolve_section_directory_from_exercise_file() {
    // Arrange
    let results = tempfile::tempdir().unwrap();
    let file = Path::new("exercises/part1/1.1/1.1.1_role_assignment.rs");

    // Act
    let dir = get_chapter_save_path(file, results.path()).unwrap();

    // Assert
    assert_eq!(dir, results.path().join("part1").join("1.1").join("1.1.1"));
    assert!(dir.is_dir());
}

#[test]
fn should_resolve_chapter_directory_from_directory_path() {
    let results = tempfile::tempdir().unwrap();

    let dir = get_chapter_save_path(Path::new("exercises/part1/1.1/notes.md"), results.path())
        .unwrap();

    assert_eq!(dir, results.path().join("part1").join("1.1"));
}

#[test]
fn should_fall_back_to_unknown_directory() {
    // Arrange
    let results = tempfile::tempdir().unwrap();

    // Act
    let inferred = infer_chapter_dir(Path::new("scratch/notes.py"));
    let dir = get_chapter_save_path(Path::new("scratch/notes.py"), results.path()).unwrap();

    // Assert
    assert_eq!(inferred, ChapterDir::Unknown);
    assert_eq!(dir, results.path().join("unknown"));
    assert!(dir.is_dir());
}

#[test]
fn repeated_resolution_should_be_idempotent() {
    let results = tempfile::tempdir().unwrap();
    let file = Path::new("1.2.1_chain_of_thought");

    let first = get_chapter_save_path(file, results.path()).unwrap();
    let second = get_chapter_save_path(file, results.path()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn reviewer_prompt_should_be_saved_under_chapter_directory() {
    // Arrange
    let results = tempfile::tempdir().unwrap();
    let mut builder = PromptBuilder::new();
    builder
        .add_role("Reviewer", "a senior editor")
        .add_context("Topic: X")
        .add_instructions(["Do A", "Do B"])
        .add_format_instructions("Use Markdown");
    let prompt = builder.build();

    // Act
    let dir = get_chapter_save_path(
        Path::new("exercises/part1/1.1/1.1.1_role_assignment"),
        results.path(),
    )
    .unwrap();
    let path: PathBuf = dir.join("reviewer.md");
    save_markdown(&prompt, &path, Some("Reviewer Prompt")).unwrap();

    // Assert
    let saved = fs::read_to_string(&path).unwrap();
    assert_eq!(saved, format!("# Reviewer Prompt\n\n{}", prompt));
    assert!(saved.contains("당신은 Reviewer입니다. a senior editor"));
    assert!(saved.contains("## 지시사항\n1. Do A\n2. Do B"));
}

#[test]
fn later_save_should_overwrite_same_name() {
    let results = tempfile::tempdir().unwrap();
    let path = results.path().join("part2").join("2.1").join("result.md");

    save_markdown("first", &path, None).unwrap();
    save_markdown("second", &path, None).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "second");
}
