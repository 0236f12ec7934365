//! 공통 유틸리티 함수 모듈
//!
//! - [`string_utils`] - 쿼리 문자열 정리, 정규식 이스케이프, 검색어 매칭
//! - [`display_terminal`] - 기동 시 터미널 출력

pub mod display_terminal;
pub mod string_utils;
