//! 1.2 사고 과정 유도: 단계적 사고, 다각도 분석

use crate::domain::ai::PromptBuilder;
use crate::domain::exercise::{Answers, Exercise, ExerciseMeta, Question};
use crate::utils::error::AppError;

/// 1.2.1 단계적 사고 (Chain of Thought)
pub struct ChainOfThought;

impl Exercise for ChainOfThought {
    fn meta(&self) -> ExerciseMeta {
        ExerciseMeta {
            code: "1.2.1",
            file_stem: "1.2.1_chain_of_thought",
            title: "단계적 사고 실습",
            technique: "단계적 사고 (Chain of Thought)",
            default_output: "chain_of_thought_result",
            temperature: 0.3,
        }
    }

    fn questions(&self) -> Vec<Question> {
        vec![
            Question::required("problem", "풀고 싶은 문제"),
            Question::with_default("level", "풀이를 읽을 사람의 수준", "중학생"),
        ]
    }

    fn basic_prompt(&self, answers: &Answers) -> Result<String, AppError> {
        Ok(format!("{} 답을 알려주세요.", answers.get("problem")?))
    }

    fn enhanced_prompt(&self, answers: &Answers) -> Result<String, AppError> {
        let mut builder = PromptBuilder::new();
        builder
            .add_role("수학 교사", "풀이 과정을 생략하지 않고 논리적으로 설명합니다.")
            .add_context(format!(
                "문제: {}\n독자 수준: {}",
                answers.get("problem")?,
                answers.get("level")?
            ))
            .add_instructions([
                "문제에서 주어진 조건과 구해야 할 것을 먼저 정리하세요",
                "한 단계씩 생각하며 풀이하고, 각 단계에서 사용한 근거를 적으세요",
                "계산 결과는 다른 방법으로 한 번 더 검산하세요",
                "마지막에 최종 답을 명확히 제시하세요",
            ])
            .add_format_instructions("'단계 1', '단계 2' 형식으로 작성하고 마지막 줄은 '최종 답:'으로 시작하세요.");
        Ok(builder.build())
    }
}

/// 1.2.2 다각도 분석
pub struct MultiPerspective;

const DEFAULT_PERSPECTIVES: &str = "경제적, 사회적, 환경적";

impl MultiPerspective {
    /// 쉼표로 구분된 관점 목록. 비어 있으면 기본 관점을 씁니다.
    fn perspectives(raw: &str) -> Vec<String> {
        let parsed: Vec<String> = raw
            .split([',', '、'])
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();

        if parsed.is_empty() {
            Self::perspectives(DEFAULT_PERSPECTIVES)
        } else {
            parsed
        }
    }
}

impl Exercise for MultiPerspective {
    fn meta(&self) -> ExerciseMeta {
        ExerciseMeta {
            code: "1.2.2",
            file_stem: "1.2.2_multi_perspective",
            title: "다각도 분석 실습",
            technique: "다각도 분석 (Multi-Perspective)",
            default_output: "multi_perspective_result",
            temperature: 0.7,
        }
    }

    fn questions(&self) -> Vec<Question> {
        vec![
            Question::required("issue", "분석할 사회 이슈나 결정 사항"),
            Question::with_default(
                "perspectives",
                "분석할 관점 (쉼표로 구분)",
                DEFAULT_PERSPECTIVES,
            ),
        ]
    }

    fn basic_prompt(&self, answers: &Answers) -> Result<String, AppError> {
        Ok(format!("{}에 대해 분석해주세요.", answers.get("issue")?))
    }

    fn enhanced_prompt(&self, answers: &Answers) -> Result<String, AppError> {
        let perspectives = Self::perspectives(answers.get("perspectives")?);

        let mut instructions: Vec<String> = perspectives
            .iter()
            .map(|p| format!("{} 관점에서 기대 효과와 우려 사항을 각각 분석하세요", p))
            .collect();
        instructions.push("관점 사이에서 충돌하는 지점을 정리하세요".to_string());
        instructions.push("모든 관점을 고려한 균형 잡힌 결론을 제시하세요".to_string());

        let mut builder = PromptBuilder::new();
        builder
            .add_role("정책 분석가", "한쪽에 치우치지 않고 여러 이해관계를 비교합니다.")
            .add_context(format!(
                "분석 대상: {}\n관점: {}",
                answers.get("issue")?,
                perspectives.join(", ")
            ))
            .add_instructions(instructions)
            .add_format_instructions("관점별 분석은 '관점 | 기대 효과 | 우려 사항' 표로 정리하고, 결론은 3문장 이내로 작성하세요.");
        Ok(builder.build())
    }
}
