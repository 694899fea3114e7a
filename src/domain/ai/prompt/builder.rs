//! 향상된 프롬프트 조립기
//!
//! 역할, 배경 정보, 지시사항, 출력 형식을 모아 하나의 프롬프트 문자열로 만듭니다.
//! 호출 순서와 관계없이 항상 역할 → 배경 정보 → 지시사항 → 출력 형식 순서로 출력합니다.

const CONTEXT_HEADING: &str = "## 배경 정보";
const INSTRUCTIONS_HEADING: &str = "## 지시사항";
const FORMAT_HEADING: &str = "## 출력 형식";

#[derive(Debug, Clone, PartialEq, Eq)]
struct Role {
    name: String,
    description: String,
}

/// 프롬프트 섹션 누적기
#[derive(Debug, Clone, Default)]
pub struct PromptBuilder {
    role: Option<Role>,
    context: Option<String>,
    instructions: Vec<String>,
    format_instructions: Option<String>,
}

impl PromptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 역할 지정. 다시 호출하면 덮어씁니다.
    pub fn add_role(&mut self, name: impl Into<String>, description: impl Into<String>) -> &mut Self {
        self.role = Some(Role {
            name: name.into(),
            description: description.into(),
        });
        self
    }

    /// 배경 정보 지정. 다시 호출하면 덮어씁니다.
    pub fn add_context(&mut self, context: impl Into<String>) -> &mut Self {
        self.context = Some(context.into());
        self
    }

    /// 지시사항 추가. 여러 번 호출하면 순서대로 이어 붙입니다.
    pub fn add_instructions<I, S>(&mut self, instructions: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.instructions
            .extend(instructions.into_iter().map(Into::into));
        self
    }

    /// 출력 형식 지정. 다시 호출하면 덮어씁니다.
    pub fn add_format_instructions(&mut self, format: impl Into<String>) -> &mut Self {
        self.format_instructions = Some(format.into());
        self
    }

    /// 채워진 섹션만 고정된 순서로 빈 줄을 사이에 두고 이어 붙입니다.
    pub fn build(&self) -> String {
        let mut sections: Vec<String> = Vec::with_capacity(4);

        if let Some(role) = &self.role {
            sections.push(render_role(role));
        }

        if let Some(context) = &self.context {
            sections.push(format!("{}\n{}", CONTEXT_HEADING, context));
        }

        if !self.instructions.is_empty() {
            let numbered = self
                .instructions
                .iter()
                .enumerate()
                .map(|(i, instruction)| format!("{}. {}", i + 1, instruction))
                .collect::<Vec<_>>()
                .join("\n");
            sections.push(format!("{}\n{}", INSTRUCTIONS_HEADING, numbered));
        }

        if let Some(format) = &self.format_instructions {
            sections.push(format!("{}\n{}", FORMAT_HEADING, format));
        }

        sections.join("\n\n")
    }
}

fn render_role(role: &Role) -> String {
    if role.description.trim().is_empty() {
        format!("당신은 {}입니다.", role.name)
    } else {
        format!("당신은 {}입니다. {}", role.name, role.description)
    }
}
