//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 설정값 검증, URL 경로 세그먼트 인코딩
//! - [`display_terminal`] - 운영자용 결과 출력
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::encode_path_segment;
//! use crate::utils::display_terminal::print_outcome;
//!
//! assert_eq!(encode_path_segment("a@b.com"), "a@b.com");
//! print_outcome(&outcome, "NaveIDPriests");
//! ```

pub mod string_utils;
pub mod display_terminal;
