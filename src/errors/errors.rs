//! 시더 전역에서 사용하는 에러 시스템
//!
//! `thiserror` 기반의 단일 에러 타입으로 설정, 검증, 전송 계층 오류를 표현합니다.
//! Firestore가 요청을 거부한 경우(HTTP 200 이외의 응답)는 에러가 아니라
//! [`SeedOutcome::Rejected`](crate::services::seed::SeedOutcome) 결과값으로 다룹니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::errors::{AppError, ErrorContext};
//!
//! fn parse_timeout(raw: &str) -> Result<u64, AppError> {
//!     raw.parse::<u64>().context("FIRESTORE_TIMEOUT_SECS 파싱 실패")
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 프로그램 경계(`main`)까지 전파되어 오류 메시지 출력 후 종료 코드 1로 이어집니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 설정값 누락 또는 잘못된 설정
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 레코드 필드 검증 실패
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 네트워크, DNS, TLS, 타임아웃 등 요청 자체가 완료되지 못한 경우
    #[error("Transport error: {0}")]
    TransportError(String),

    /// JSON 직렬화/역직렬화 실패
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl AppError {
    /// 에러 종류를 나타내는 짧은 라벨
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::ConfigError(_) => "config",
            AppError::ValidationError(_) => "validation",
            AppError::TransportError(_) => "transport",
            AppError::SerializationError(_) => "serialization",
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::SerializationError(e.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::ValidationError(e.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 설정 에러로 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::ConfigError(format!("{}: {}", msg, e)))
    }
}
