//! # 시드 서비스 구현
//!
//! 레코드 생성 → upsert 요청 → 결과 분기의 단일 흐름을 담당합니다.
//!
//! ```text
//! seed(email, display_name, diocese, status)
//!     │
//!     ├─ PriestRecord::new (createdAt = now, 초 단위)
//!     ├─ validate()
//!     ├─ PriestRepository::upsert ──► DocumentStore (PATCH)
//!     │
//!     ├─ 200       → SeedOutcome::Seeded  { document_name, record }
//!     └─ 그 외 코드 → SeedOutcome::Rejected { status, body }
//! ```
//!
//! 저장소 거부는 에러가 아니라 결과값입니다. `Err`는 검증 실패와 전송 실패뿐이며,
//! 재시도는 하지 않습니다.

use std::sync::Arc;

use log::{info, warn};
use serde::Serialize;
use validator::Validate;

use crate::db::{DocumentPath, DocumentStore, StoreResponse};
use crate::domain::dto::firestore::{FirestoreDocument, FirestoreDocumentResponse};
use crate::domain::entities::priests::PriestRecord;
use crate::errors::errors::AppResult;
use crate::repositories::priests::PriestRepository;

/// 응답에 `name`이 없을 때 출력하는 문서 이름
pub const UNKNOWN_DOCUMENT_NAME: &str = "unknown";

/// 권한 거부로 분류되는 상태 코드
pub const STATUS_PERMISSION_DENIED: u16 = 403;

/// upsert 성공 결과
#[derive(Debug, Clone, PartialEq)]
pub struct SeededDocument {
    /// Firestore 정규 문서 이름 (`projects/.../documents/<collection>/<id>`)
    pub document_name: String,
    /// 기록한 레코드
    pub record: PriestRecord,
}

/// 저장소가 200 이외의 코드로 응답한 경우
#[derive(Debug, Clone, PartialEq)]
pub struct StoreRejection {
    pub status: u16,
    pub body: String,
}

impl StoreRejection {
    pub fn is_permission_denied(&self) -> bool {
        self.status == STATUS_PERMISSION_DENIED
    }
}

impl From<StoreResponse> for StoreRejection {
    fn from(response: StoreResponse) -> Self {
        Self {
            status: response.status,
            body: response.body,
        }
    }
}

/// 시딩 결과
#[derive(Debug, Clone, PartialEq)]
pub enum SeedOutcome {
    Seeded(SeededDocument),
    Rejected(StoreRejection),
}

impl SeedOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SeedOutcome::Seeded(_))
    }
}

/// `--dry-run` 결과: 보낼 주소와 본문
#[derive(Debug, Clone, Serialize)]
pub struct SeedPreview {
    #[serde(skip)]
    pub path: DocumentPath,
    #[serde(skip)]
    pub record: PriestRecord,
    pub body: FirestoreDocument,
}

/// 사제 레코드 시드 서비스
pub struct SeedService<S: DocumentStore> {
    repo: PriestRepository<S>,
}

impl<S: DocumentStore> SeedService<S> {
    pub fn new(store: Arc<S>, collection: &str) -> Self {
        Self {
            repo: PriestRepository::new(store, collection),
        }
    }

    pub fn collection(&self) -> &str {
        self.repo.collection()
    }

    /// 레코드를 만들어 upsert합니다. `createdAt`은 호출 시각입니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(SeedOutcome::Seeded)` - 저장소가 200으로 응답
    /// * `Ok(SeedOutcome::Rejected)` - 저장소가 그 외 코드로 응답 (코드와 본문 그대로)
    /// * `Err(AppError::ValidationError)` - 이메일 형식 오류 또는 빈 필드
    /// * `Err(AppError::TransportError)` - 네트워크 오류
    pub async fn seed(&self, email: &str, display_name: &str, diocese: &str, status: &str) -> AppResult<SeedOutcome> {
        let record = PriestRecord::new(email, display_name, diocese, status);
        self.seed_record(record).await
    }

    /// 이미 만들어진 레코드를 upsert합니다.
    pub async fn seed_record(&self, record: PriestRecord) -> AppResult<SeedOutcome> {
        record.validate()?;

        let response = self.repo.upsert(&record).await?;

        if !response.is_ok() {
            warn!("❌ {}/{} 쓰기 거부됨: {}", self.collection(), record.email, response.status);
            return Ok(SeedOutcome::Rejected(response.into()));
        }

        let document_name = extract_document_name(&response.body, &record);
        info!("✅ 문서 기록 완료: {}", document_name);

        Ok(SeedOutcome::Seeded(SeededDocument { document_name, record }))
    }

    /// 요청을 보내지 않고 주소와 본문만 만듭니다.
    pub fn preview(&self, email: &str, display_name: &str, diocese: &str, status: &str) -> AppResult<SeedPreview> {
        let record = PriestRecord::new(email, display_name, diocese, status);
        record.validate()?;

        Ok(SeedPreview {
            path: self.repo.path_for(&record),
            body: record.to_document(),
            record,
        })
    }
}

/// 성공 응답 본문에서 문서 이름을 꺼냅니다.
///
/// 본문이 JSON이 아니거나 `name`이 없으면 [`UNKNOWN_DOCUMENT_NAME`].
/// 응답에 담긴 필드가 보낸 레코드와 다르면 경고만 남깁니다.
fn extract_document_name(body: &str, sent: &PriestRecord) -> String {
    let name = match serde_json::from_str::<FirestoreDocumentResponse>(body) {
        Ok(response) => {
            if let Some(fields) = response.fields {
                let echoed = FirestoreDocument { fields };
                match PriestRecord::from_document(&echoed) {
                    Ok(stored) if &stored != sent => {
                        warn!("⚠️ 저장된 필드가 요청과 다릅니다: {:?}", stored)
                    }
                    Err(e) => warn!("⚠️ 응답 필드 해석 실패: {}", e),
                    _ => {}
                }
            }
            response.name
        }
        Err(e) => {
            warn!("⚠️ 응답 본문 파싱 실패: {}", e);
            serde_json::from_str::<serde_json::Value>(body)
                .ok()
                .and_then(|v| v.get("name").and_then(|n| n.as_str()).map(str::to_string))
        }
    };

    name.unwrap_or_else(|| UNKNOWN_DOCUMENT_NAME.to_string())
}
