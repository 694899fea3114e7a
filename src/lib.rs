//! 프롬프트 엔지니어링 실습 과정
//!
//! ## 구조
//! - `config`: 환경 변수 기반 설정
//! - `domain::ai`: 프롬프트 빌더, AI 클라이언트, 재시도
//! - `domain::exercise`: 실습 목록과 실행기, 결과 보고서
//! - `utils`: 에러, 로깅, 파일 저장, 챕터 경로 추론
//! - `cli`: 명령행 인터페이스

pub mod cli;
pub mod config;
pub mod domain;
pub mod shutdown;
pub mod utils;
