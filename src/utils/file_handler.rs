//! 결과 파일 저장
//!
//! 잠금이나 원자적 쓰기는 하지 않습니다. 같은 경로에 다시 쓰면 덮어씁니다.

use std::fs;
use std::path::Path;

use crate::utils::error::AppError;

/// Markdown 파일 저장
///
/// `title`이 있으면 `# {title}` 제목과 빈 줄을 앞에 붙입니다.
/// 상위 디렉토리가 없으면 만듭니다.
pub fn save_markdown(content: &str, path: &Path, title: Option<&str>) -> Result<(), AppError> {
    let body = match title {
        Some(title) => format!("# {}\n\n{}", title, content),
        None => content.to_string(),
    };
    save_text(&body, path)
}

/// UTF-8 텍스트 파일 저장
pub fn save_text(content: &str, path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| AppError::io(parent, e))?;
    }

    fs::write(path, content).map_err(|e| AppError::io(path, e))?;
    tracing::info!(path = %path.display(), bytes = content.len(), "파일 저장 완료");
    Ok(())
}

/// 확장자가 없는 파일명에 `.md`를 붙입니다.
pub fn ensure_markdown_extension(file_name: &str) -> String {
    let trimmed = file_name.trim();
    if Path::new(trimmed).extension().is_some() {
        trimmed.to_string()
    } else {
        format!("{}.md", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn should_prepend_title_heading() {
        // Arrange
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.md");

        // Act
        save_markdown("본문 내용", &path, Some("X")).unwrap();

        // Assert
        let written = fs::read_to_string(&path).unwrap();
        let mut lines = written.lines();
        assert_eq!(lines.next(), Some("# X"));
        assert_eq!(lines.next(), Some(""));
        assert_eq!(written, "# X\n\n본문 내용");
    }

    #[test]
    fn should_write_content_verbatim_without_title() {
        // Arrange
        let dir = tempdir().unwrap();
        let path = dir.path().join("plain.md");
        let content = "첫 줄\n\n- 항목\n";

        // Act
        save_markdown(content, &path, None).unwrap();

        // Assert
        assert_eq!(fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn should_create_missing_parent_directories() {
        // Arrange
        let dir = tempdir().unwrap();
        let path = dir.path().join("part1").join("1.1").join("1.1.1").join("out.md");

        // Act
        save_text("hello", &path).unwrap();

        // Assert
        assert!(path.exists());
    }

    #[test]
    fn should_overwrite_existing_file() {
        // Arrange
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.md");
        save_text("first", &path).unwrap();

        // Act
        save_text("second", &path).unwrap();

        // Assert
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn should_return_io_error_when_parent_is_a_file() {
        // Arrange
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        // Act
        let result = save_text("x", &blocker.join("out.md"));

        // Assert
        assert!(matches!(result, Err(AppError::Io { .. })));
    }

    #[test]
    fn should_append_markdown_extension_only_when_missing() {
        assert_eq!(ensure_markdown_extension("report"), "report.md");
        assert_eq!(ensure_markdown_extension(" report "), "report.md");
        assert_eq!(ensure_markdown_extension("report.md"), "report.md");
        assert_eq!(ensure_markdown_extension("notes.txt"), "notes.txt");
    }
}
