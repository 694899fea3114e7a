//! API 키 형식 점검
//!
//! 네트워크 호출 전에 흔한 설정 실수(따옴표 포함, 공백, 잘린 키)를 잡아냅니다.

use std::fmt;

use crate::utils::error::AppError;

/// 이보다 짧은 키는 잘렸거나 잘못 복사된 것으로 봅니다.
pub const MIN_KEY_LEN: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIssue {
    Quoted,
    ContainsWhitespace,
    TooShort(usize),
}

impl fmt::Display for KeyIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyIssue::Quoted => write!(f, "키 앞뒤에 따옴표가 포함되어 있습니다"),
            KeyIssue::ContainsWhitespace => write!(f, "키에 공백 문자가 포함되어 있습니다"),
            KeyIssue::TooShort(len) => {
                write!(f, "키 길이가 {}자로 너무 짧습니다 (최소 {}자)", len, MIN_KEY_LEN)
            }
        }
    }
}

/// 키에서 발견된 모든 문제를 반환합니다.
pub fn inspect_api_key(key: &str) -> Vec<KeyIssue> {
    let mut issues = Vec::new();

    let quoted = ['"', '\''].iter().any(|q| key.starts_with(*q) || key.ends_with(*q));
    if quoted {
        issues.push(KeyIssue::Quoted);
    }

    if key.chars().any(char::is_whitespace) {
        issues.push(KeyIssue::ContainsWhitespace);
    }

    let len = key.chars().count();
    if len < MIN_KEY_LEN {
        issues.push(KeyIssue::TooShort(len));
    }

    issues
}

/// 키가 있고 형식 문제가 없으면 그대로 돌려줍니다.
pub fn check_api_key(key: Option<&str>) -> Result<&str, AppError> {
    let key = key
        .filter(|k| !k.trim().is_empty())
        .ok_or(AppError::MissingApiKey)?;

    match inspect_api_key(key).first() {
        Some(issue) => Err(AppError::MalformedApiKey(issue.to_string())),
        None => Ok(key),
    }
}

/// 화면 출력용으로 키 앞 4자와 뒤 4자만 남깁니다.
pub fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}{}", head, "*".repeat(chars.len() - 8), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_KEY: &str = "AIzaSyA1234567890abcdefghijklmnopqrstu";

    #[test]
    fn should_accept_well_formed_key() {
        assert_eq!(check_api_key(Some(VALID_KEY)).unwrap(), VALID_KEY);
        assert!(inspect_api_key(VALID_KEY).is_empty());
    }

    #[test]
    fn should_report_missing_key() {
        assert!(matches!(check_api_key(None), Err(AppError::MissingApiKey)));
        assert!(matches!(check_api_key(Some("  ")), Err(AppError::MissingApiKey)));
    }

    #[test]
    fn should_detect_quotes() {
        let quoted = format!("\"{}\"", VALID_KEY);
        assert_eq!(inspect_api_key(&quoted), vec![KeyIssue::Quoted]);
    }

    #[test]
    fn should_detect_whitespace() {
        let spaced = format!("{} ", VALID_KEY);
        assert!(inspect_api_key(&spaced).contains(&KeyIssue::ContainsWhitespace));
    }

    #[test]
    fn should_detect_short_key() {
        // Act
        let result = check_api_key(Some("AIza123"));

        // Assert
        match result {
            Err(AppError::MalformedApiKey(msg)) => assert!(msg.contains("7자")),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn should_mask_middle_of_key() {
        let masked = mask_api_key(VALID_KEY);

        assert!(masked.starts_with("AIza"));
        assert!(masked.ends_with("rstu"));
        assert_eq!(masked.chars().count(), VALID_KEY.chars().count());
        assert!(!masked.contains("1234"));
    }

    #[test]
    fn should_mask_short_key_entirely() {
        assert_eq!(mask_api_key("abc"), "***");
    }
}
