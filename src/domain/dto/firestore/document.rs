//! Firestore REST 문서 DTO
//!
//! Firestore REST API가 사용하는 타입 태그 기반 JSON 구조를 정의합니다.
//!
//! ```json
//! { "fields": {
//!     "email":     { "stringValue": "a@b.com" },
//!     "createdAt": { "timestampValue": "2026-10-18T09:30:00Z" }
//! } }
//! ```

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::errors::AppError;

/// `timestampValue` 직렬화 형식 (UTC, 초 단위)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Firestore 타입 태그가 붙은 필드 값
///
/// 외부 태그 enum이므로 `{"stringValue": "..."}` 형태로 직렬화됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FirestoreValue {
    #[serde(rename = "stringValue")]
    String(String),
    #[serde(rename = "timestampValue")]
    Timestamp(String),
}

impl FirestoreValue {
    pub fn string(value: impl Into<String>) -> Self {
        FirestoreValue::String(value.into())
    }

    /// UTC 시각을 `%Y-%m-%dT%H:%M:%SZ` 문자열로 태깅합니다.
    pub fn timestamp(value: &DateTime<Utc>) -> Self {
        FirestoreValue::Timestamp(format_timestamp(value))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FirestoreValue::String(s) => Some(s),
            FirestoreValue::Timestamp(_) => None,
        }
    }

    /// `timestampValue`를 파싱합니다.
    ///
    /// Firestore는 응답에서 소수점 초(`...:00.123456Z`)를 붙여 돌려주기도 하므로
    /// RFC 3339 전체를 허용합니다.
    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            FirestoreValue::Timestamp(raw) => parse_timestamp(raw).ok(),
            FirestoreValue::String(_) => None,
        }
    }
}

/// PATCH 요청 본문 및 응답의 `fields` 부분
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FirestoreDocument {
    pub fields: BTreeMap<String, FirestoreValue>,
}

impl FirestoreDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// 필드를 추가한 문서를 반환합니다.
    pub fn with_field(mut self, name: &str, value: FirestoreValue) -> Self {
        self.fields.insert(name.to_string(), value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&FirestoreValue> {
        self.fields.get(name)
    }
}

/// 성공 응답 본문
///
/// `name`은 `projects/<p>/databases/(default)/documents/<collection>/<id>` 형식의
/// 정규 문서 식별자입니다.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirestoreDocumentResponse {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub fields: Option<BTreeMap<String, FirestoreValue>>,
    #[serde(default)]
    pub create_time: Option<String>,
    #[serde(default)]
    pub update_time: Option<String>,
}

pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}

pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, AppError> {
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT) {
        return Ok(naive.and_utc());
    }

    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| AppError::SerializationError(format!("잘못된 timestampValue '{}': {}", raw, e)))
}
