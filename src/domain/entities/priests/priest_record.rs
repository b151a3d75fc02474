//! PriestRecord Entity Implementation
//!
//! `NaveIDPriests` 컬렉션에 저장되는 사제 레코드입니다.
//! 이메일이 문서 ID이자 필드 값이며, 매 실행마다 문서 전체를 덮어씁니다.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::dto::firestore::{FirestoreDocument, FirestoreValue};
use crate::errors::errors::AppError;

/// Firestore 필드명
pub mod field {
    pub const EMAIL: &str = "email";
    pub const DISPLAY_NAME: &str = "displayName";
    pub const DIOCESE: &str = "diocese";
    pub const STATUS: &str = "status";
    pub const CREATED_AT: &str = "createdAt";
}

/// 사제 레코드 엔티티
///
/// 모든 필드는 필수이며, `created_at`은 초 단위로 절삭된 UTC 시각입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PriestRecord {
    /// 사제 이메일 (문서 ID)
    #[validate(email(message = "유효한 이메일 주소가 아닙니다"))]
    pub email: String,

    /// 표시 이름
    #[validate(length(min = 1, message = "표시 이름은 비어 있을 수 없습니다"))]
    pub display_name: String,

    /// 소속 교구
    #[validate(length(min = 1, message = "교구는 비어 있을 수 없습니다"))]
    pub diocese: String,

    /// 계정 상태 (현재 사용하는 값은 "active")
    #[validate(length(min = 1, message = "상태는 비어 있을 수 없습니다"))]
    pub status: String,

    /// 생성 시각
    pub created_at: DateTime<Utc>,
}

impl PriestRecord {
    /// 현재 시각으로 `created_at`을 채워 새 레코드를 생성합니다.
    pub fn new(email: &str, display_name: &str, diocese: &str, status: &str) -> Self {
        Self::with_created_at(email, display_name, diocese, status, Utc::now())
    }

    /// 지정한 생성 시각으로 레코드를 생성합니다. 초 미만은 버립니다.
    pub fn with_created_at(
        email: &str,
        display_name: &str,
        diocese: &str,
        status: &str,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            email: email.to_string(),
            display_name: display_name.to_string(),
            diocese: diocese.to_string(),
            status: status.to_string(),
            created_at: created_at.trunc_subsecs(0),
        }
    }

    /// Firestore PATCH 요청 본문으로 변환합니다.
    pub fn to_document(&self) -> FirestoreDocument {
        FirestoreDocument::new()
            .with_field(field::EMAIL, FirestoreValue::string(&self.email))
            .with_field(field::DISPLAY_NAME, FirestoreValue::string(&self.display_name))
            .with_field(field::DIOCESE, FirestoreValue::string(&self.diocese))
            .with_field(field::STATUS, FirestoreValue::string(&self.status))
            .with_field(field::CREATED_AT, FirestoreValue::timestamp(&self.created_at))
    }

    /// 저장된 Firestore 문서에서 레코드를 복원합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::SerializationError` - 필드가 없거나 타입 태그가 다른 경우
    pub fn from_document(document: &FirestoreDocument) -> Result<Self, AppError> {
        let string_field = |name: &str| -> Result<String, AppError> {
            document
                .get(name)
                .and_then(FirestoreValue::as_str)
                .map(str::to_string)
                .ok_or_else(|| AppError::SerializationError(format!("stringValue 필드 누락: {}", name)))
        };

        let created_at = document
            .get(field::CREATED_AT)
            .and_then(FirestoreValue::as_timestamp)
            .ok_or_else(|| {
                AppError::SerializationError(format!("timestampValue 필드 누락: {}", field::CREATED_AT))
            })?;

        Ok(Self {
            email: string_field(field::EMAIL)?,
            display_name: string_field(field::DISPLAY_NAME)?,
            diocese: string_field(field::DIOCESE)?,
            status: string_field(field::STATUS)?,
            created_at: created_at.trunc_subsecs(0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn sample() -> PriestRecord {
        let created_at = Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap();
        PriestRecord::with_created_at("a@b.com", "Oliver Olsen", "Diocese of Philadelphia", "active", created_at)
    }

    #[test]
    fn test_to_document_contains_all_five_fields() {
        let value = serde_json::to_value(sample().to_document()).unwrap();

        assert_eq!(
            value,
            json!({
                "fields": {
                    "email": { "stringValue": "a@b.com" },
                    "displayName": { "stringValue": "Oliver Olsen" },
                    "diocese": { "stringValue": "Diocese of Philadelphia" },
                    "status": { "stringValue": "active" },
                    "createdAt": { "timestampValue": "2026-10-18T09:30:00Z" }
                }
            })
        );
    }

    #[test]
    fn test_from_document_restores_record() {
        let record = sample();
        assert_eq!(PriestRecord::from_document(&record.to_document()).unwrap(), record);
    }

    #[test]
    fn test_from_document_missing_field() {
        let mut document = sample().to_document();
        document.fields.remove(field::DIOCESE);

        let err = PriestRecord::from_document(&document).unwrap_err();
        assert!(err.to_string().contains("diocese"));
    }

    #[test]
    fn test_new_truncates_to_seconds() {
        let record = PriestRecord::new("a@b.com", "n", "d", "active");

        assert_eq!(record.created_at.timestamp_subsec_nanos(), 0);
        assert!((Utc::now() - record.created_at).num_seconds() <= 2);
    }

    #[test]
    fn test_validation() {
        assert!(sample().validate().is_ok());

        let mut bad_email = sample();
        bad_email.email = "not-an-email".to_string();
        assert!(bad_email.validate().is_err());

        let mut blank = sample();
        blank.diocese = String::new();
        assert!(blank.validate().is_err());
    }
}
