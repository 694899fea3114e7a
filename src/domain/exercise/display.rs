//! 실습 진행 상황 터미널 출력

use console::style;

use super::dto::ExerciseMeta;

const RULE_WIDTH: usize = 60;

pub fn print_header(meta: &ExerciseMeta) {
    println!("{}", style("=".repeat(RULE_WIDTH)).dim());
    println!(
        "{} {}",
        style(format!("[{}]", meta.code)).cyan().bold(),
        style(meta.title).bold()
    );
    println!("{} {}", style("기법:").dim(), meta.technique);
    println!("{}", style("=".repeat(RULE_WIDTH)).dim());
    println!();
}

pub fn print_progress(message: &str) {
    println!("{} {}", style("▶").yellow(), message);
}

pub fn print_section(label: &str, body: &str) {
    println!();
    println!("{}", style(format!("── {} ", label)).green().bold());
    println!("{}", body);
}

pub fn print_saved(path: &std::path::Path) {
    println!();
    println!(
        "{} {}",
        style("결과가 저장되었습니다:").green(),
        style(path.display()).underlined()
    );
}
