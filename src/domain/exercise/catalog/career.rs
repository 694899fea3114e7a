//! 2.1.1 계열별 전공 탐색
//!
//! 학습자가 고른 계열 번호(1~4)에 따라 지시사항 묶음이 달라집니다.

use std::fmt;
use std::str::FromStr;

use crate::domain::ai::PromptBuilder;
use crate::domain::exercise::{Answers, Exercise, ExerciseMeta, Question};
use crate::utils::error::AppError;

/// 관심 계열
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MajorCategory {
    Humanities,
    Science,
    Engineering,
    Arts,
}

impl MajorCategory {
    pub fn label(self) -> &'static str {
        match self {
            MajorCategory::Humanities => "인문사회",
            MajorCategory::Science => "자연과학",
            MajorCategory::Engineering => "공학",
            MajorCategory::Arts => "예체능",
        }
    }

    /// 계열별 지시사항
    pub fn instructions(self) -> &'static [&'static str] {
        match self {
            MajorCategory::Humanities => &[
                "독서, 토론, 글쓰기 경험과 연결되는 전공을 우선 고려하세요",
                "졸업 후 진출 분야를 공공, 기업, 연구 영역으로 나누어 설명하세요",
                "고등학교에서 준비할 수 있는 탐구 활동 주제를 제안하세요",
            ],
            MajorCategory::Science => &[
                "수학과 과학 과목 중 어떤 과목이 특히 중요한지 밝히세요",
                "실험과 연구 중심 진로와 산업계 진로를 구분해 설명하세요",
                "관련 과학 탐구 대회나 실험 활동을 제안하세요",
            ],
            MajorCategory::Engineering => &[
                "전공별로 다루는 핵심 기술과 실제 제품 사례를 연결하세요",
                "프로그래밍이나 제작 경험을 쌓을 수 있는 프로젝트를 제안하세요",
                "산업 전망과 필요한 자격증을 함께 설명하세요",
            ],
            MajorCategory::Arts => &[
                "실기 준비 과정과 포트폴리오 구성 방법을 설명하세요",
                "전공별 입시 전형의 특징을 비교하세요",
                "창작 활동을 진로로 이어 가는 다양한 방법을 소개하세요",
            ],
        }
    }
}

impl fmt::Display for MajorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MajorCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" | "인문" | "인문사회" => Ok(MajorCategory::Humanities),
            "2" | "자연" | "자연과학" => Ok(MajorCategory::Science),
            "3" | "공학" => Ok(MajorCategory::Engineering),
            "4" | "예체능" => Ok(MajorCategory::Arts),
            other => Err(AppError::input(format!(
                "계열은 1~4 중 하나여야 합니다: '{}'",
                other
            ))),
        }
    }
}

pub struct MajorExploration;

impl Exercise for MajorExploration {
    fn meta(&self) -> ExerciseMeta {
        ExerciseMeta {
            code: "2.1.1",
            file_stem: "2.1.1_major_exploration",
            title: "계열별 전공 탐색 실습",
            technique: "조건별 지시사항 (Conditional Instructions)",
            default_output: "major_exploration_result",
            temperature: 0.7,
        }
    }

    fn questions(&self) -> Vec<Question> {
        vec![
            Question::required(
                "major_category",
                "관심 계열 (1: 인문사회, 2: 자연과학, 3: 공학, 4: 예체능)",
            ),
            Question::required("interest", "좋아하는 활동이나 관심 분야"),
            Question::with_default("grade", "현재 학년", "고등학교 2학년"),
        ]
    }

    fn basic_prompt(&self, answers: &Answers) -> Result<String, AppError> {
        Ok(format!(
            "{}에 관심 있는 학생에게 맞는 전공을 추천해주세요.",
            answers.get("interest")?
        ))
    }

    fn enhanced_prompt(&self, answers: &Answers) -> Result<String, AppError> {
        let category: MajorCategory = answers.get("major_category")?.parse()?;

        let mut builder = PromptBuilder::new();
        builder
            .add_role(
                "진로 상담 교사",
                "학생의 관심사를 구체적인 전공과 진로로 연결하는 데 익숙합니다.",
            )
            .add_context(format!(
                "학년: {}\n관심 계열: {}\n관심 분야: {}",
                answers.get("grade")?,
                category,
                answers.get("interest")?
            ))
            .add_instructions(["관심 분야와 연결되는 전공 3개를 추천하고 각각의 이유를 설명하세요"])
            .add_instructions(category.instructions().iter().copied())
            .add_format_instructions("전공마다 '추천 이유 / 배우는 내용 / 준비 방법' 소제목을 사용하세요.");
        Ok(builder.build())
    }
}
