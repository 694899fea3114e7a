//! 1.1.1 역할 부여

use crate::domain::ai::PromptBuilder;
use crate::domain::exercise::{Answers, Exercise, ExerciseMeta, Question};
use crate::utils::error::AppError;

pub struct RoleAssignment;

impl Exercise for RoleAssignment {
    fn meta(&self) -> ExerciseMeta {
        ExerciseMeta {
            code: "1.1.1",
            file_stem: "1.1.1_role_assignment",
            title: "역할 부여 실습",
            technique: "역할 부여 (Role Prompting)",
            default_output: "role_assignment_result",
            temperature: 0.7,
        }
    }

    fn questions(&self) -> Vec<Question> {
        vec![
            Question::required("topic", "설명을 듣고 싶은 주제"),
            Question::with_default("audience", "설명을 들을 대상", "고등학생"),
            Question::with_default("expert", "역할을 맡길 전문가", "20년 경력의 과학 교사"),
        ]
    }

    fn basic_prompt(&self, answers: &Answers) -> Result<String, AppError> {
        Ok(format!("{}에 대해 설명해주세요.", answers.get("topic")?))
    }

    fn enhanced_prompt(&self, answers: &Answers) -> Result<String, AppError> {
        let topic = answers.get("topic")?;
        let audience = answers.get("audience")?;

        let mut builder = PromptBuilder::new();
        builder
            .add_role(
                answers.get("expert")?,
                format!("{}의 눈높이에 맞춰 어려운 개념을 쉽게 풀어 설명하는 데 능숙합니다.", audience),
            )
            .add_context(format!("설명 주제: {}\n대상: {}", topic, audience))
            .add_instructions([
                "핵심 개념을 한 문장으로 먼저 정의하세요".to_string(),
                format!("{}이(가) 일상에서 접할 수 있는 비유를 하나 이상 사용하세요", audience),
                "흔히 하는 오해 한 가지를 짚어 바로잡으세요".to_string(),
                "마지막에 이해를 확인할 수 있는 질문 2개를 제시하세요".to_string(),
            ])
            .add_format_instructions("마크다운 소제목과 글머리표를 사용하고 800자 이내로 작성하세요.");
        Ok(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::exercise::ScriptedInput;
    use crate::domain::exercise::runner::collect_answers;

    #[test]
    fn should_build_prompts_from_answers() {
        // Arrange
        let mut input = ScriptedInput::new([("topic".to_string(), "블랙홀".to_string())]);
        let answers = collect_answers(&RoleAssignment, &mut input).unwrap();

        // Act
        let basic = RoleAssignment.basic_prompt(&answers).unwrap();
        let enhanced = RoleAssignment.enhanced_prompt(&answers).unwrap();

        // Assert
        assert_eq!(basic, "블랙홀에 대해 설명해주세요.");
        assert!(enhanced.starts_with("당신은 20년 경력의 과학 교사입니다."));
        assert!(enhanced.contains("설명 주제: 블랙홀"));
        assert!(enhanced.contains("고등학생이(가) 일상에서"));
    }
}
