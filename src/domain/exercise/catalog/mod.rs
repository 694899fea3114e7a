//! 실습 목록
//!
//! ## 구조
//! - `role`: 1.1.1 역할 부여
//! - `context`: 1.1.2 맥락 제공
//! - `reasoning`: 1.2.1 단계적 사고, 1.2.2 다각도 분석
//! - `career`: 2.1.1 계열별 전공 탐색

mod career;
mod context;
mod reasoning;
mod role;

pub use career::{MajorCategory, MajorExploration};
pub use context::ContextFraming;
pub use reasoning::{ChainOfThought, MultiPerspective};
pub use role::RoleAssignment;

use super::Exercise;

/// 챕터 순서대로 모든 실습
pub fn all() -> Vec<Box<dyn Exercise>> {
    vec![
        Box::new(RoleAssignment),
        Box::new(ContextFraming),
        Box::new(ChainOfThought),
        Box::new(MultiPerspective),
        Box::new(MajorExploration),
    ]
}

/// 챕터 코드(`1.1.1`) 또는 파일명(`1.1.1_role_assignment`)으로 실습을 찾습니다.
pub fn find(id: &str) -> Option<Box<dyn Exercise>> {
    let id = id.trim();
    all().into_iter().find(|exercise| {
        let meta = exercise.meta();
        meta.code == id || meta.file_stem == id
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::path::Path;

    use crate::utils::chapter::{infer_chapter_dir, ChapterDir};

    #[test]
    fn should_find_by_code_and_file_stem() {
        assert_eq!(find("1.2.1").unwrap().meta().file_stem, "1.2.1_chain_of_thought");
        assert_eq!(find("1.2.2_multi_perspective").unwrap().meta().code, "1.2.2");
        assert!(find("9.9.9").is_none());
    }

    #[test]
    fn codes_should_be_unique() {
        let codes: HashSet<&str> = all().iter().map(|e| e.meta().code).collect();
        assert_eq!(codes.len(), all().len());
    }

    #[test]
    fn file_stems_should_follow_chapter_convention() {
        for exercise in all() {
            let meta = exercise.meta();
            let inferred = infer_chapter_dir(Path::new(meta.file_stem));

            assert_ne!(inferred, ChapterDir::Unknown, "{}", meta.file_stem);
            assert!(inferred.relative_path().ends_with(meta.code));
            assert!(meta.file_stem.starts_with(&format!("{}_", meta.code)));
        }
    }

    #[test]
    fn every_exercise_should_have_at_least_one_required_question() {
        for exercise in all() {
            assert!(exercise.questions().iter().any(|q| q.default.is_none()));
        }
    }
}
