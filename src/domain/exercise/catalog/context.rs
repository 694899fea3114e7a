//! 1.1.2 맥락 제공

use crate::domain::ai::PromptBuilder;
use crate::domain::exercise::{Answers, Exercise, ExerciseMeta, Question};
use crate::utils::error::AppError;

pub struct ContextFraming;

impl Exercise for ContextFraming {
    fn meta(&self) -> ExerciseMeta {
        ExerciseMeta {
            code: "1.1.2",
            file_stem: "1.1.2_context_framing",
            title: "맥락 제공 실습",
            technique: "맥락 제공 (Context Framing)",
            default_output: "context_framing_result",
            temperature: 0.7,
        }
    }

    fn questions(&self) -> Vec<Question> {
        vec![
            Question::required("goal", "도움을 받고 싶은 일 (예: 발표 자료 구성)"),
            Question::required("situation", "현재 상황"),
            Question::with_default("constraints", "지켜야 할 제약 조건", "없음"),
        ]
    }

    fn basic_prompt(&self, answers: &Answers) -> Result<String, AppError> {
        Ok(format!("{}을(를) 도와주세요.", answers.get("goal")?))
    }

    fn enhanced_prompt(&self, answers: &Answers) -> Result<String, AppError> {
        let goal = answers.get("goal")?;
        let constraints = answers.get("constraints")?;

        let mut context = format!("현재 상황: {}\n목표: {}", answers.get("situation")?, goal);
        if constraints != "없음" {
            context.push_str(&format!("\n제약 조건: {}", constraints));
        }

        let mut builder = PromptBuilder::new();
        builder
            .add_role("실무 컨설턴트", "상황을 빠르게 파악하고 바로 실행할 수 있는 조언을 제공합니다.")
            .add_context(context)
            .add_instructions([
                "상황에서 가장 중요한 문제를 한 문장으로 요약하세요",
                "목표 달성을 위한 단계별 실행 계획을 제시하세요",
                "제약 조건을 벗어나는 제안은 하지 마세요",
                "예상되는 위험 요소와 대응 방법을 함께 적으세요",
            ])
            .add_format_instructions("요약, 실행 계획, 위험 요소 순서의 마크다운 소제목으로 작성하세요.");
        Ok(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::exercise::runner::collect_answers;
    use crate::domain::exercise::ScriptedInput;

    fn answers(constraints: Option<&str>) -> Answers {
        let mut pairs = vec![
            ("goal".to_string(), "발표 자료 구성".to_string()),
            ("situation".to_string(), "내일 팀 회의".to_string()),
        ];
        if let Some(c) = constraints {
            pairs.push(("constraints".to_string(), c.to_string()));
        }
        collect_answers(&ContextFraming, &mut ScriptedInput::new(pairs)).unwrap()
    }

    #[test]
    fn should_include_constraints_when_given() {
        let prompt = ContextFraming
            .enhanced_prompt(&answers(Some("슬라이드 10장 이내")))
            .unwrap();
        assert!(prompt.contains("제약 조건: 슬라이드 10장 이내"));
    }

    #[test]
    fn should_skip_constraints_line_by_default() {
        let prompt = ContextFraming.enhanced_prompt(&answers(None)).unwrap();

        assert!(prompt.contains("현재 상황: 내일 팀 회의\n목표: 발표 자료 구성"));
        assert!(!prompt.contains("제약 조건:"));
    }
}
