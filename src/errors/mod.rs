//! 에러 타입 모듈
//!
//! - [`errors`] - `AppError`, `AppResult`, `ErrorContext`

pub mod errors;
