//! Document Store Access Module
//!
//! 문서 저장소에 대한 전송 계층을 담당하는 모듈입니다.
//! 리포지토리는 [`DocumentStore`] trait에만 의존하므로, 실제 실행에서는
//! [`FirestoreRestClient`]를, 테스트에서는 메모리 기반 구현을 주입합니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::db::{DocumentPath, DocumentStore, FirestoreRestClient};
//!
//! let client = FirestoreRestClient::new(&config)?;
//! let path = DocumentPath::new("NaveIDPriests", "a@b.com");
//! let response = client.upsert(&path, &record.to_document()).await?;
//! println!("{} {}", response.status, response.body);
//! ```

pub mod firestore_client;

pub use firestore_client::FirestoreRestClient;

use async_trait::async_trait;

use crate::domain::dto::firestore::FirestoreDocument;
use crate::errors::errors::AppResult;
use crate::utils::string_utils::encode_path_segment;

/// Firestore가 성공으로 정의하는 상태 코드
pub const STATUS_OK: u16 = 200;

/// 컬렉션 + 문서 ID로 이루어진 문서 주소
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPath {
    pub collection: String,
    pub document_id: String,
}

impl DocumentPath {
    pub fn new(collection: &str, document_id: &str) -> Self {
        Self {
            collection: collection.to_string(),
            document_id: document_id.to_string(),
        }
    }

    /// `documents/` 아래 상대 경로 (`<collection>/<id>`)
    ///
    /// 문서 ID는 경로 세그먼트로 인코딩되지만 `@`는 그대로 유지됩니다.
    pub fn relative(&self) -> String {
        format!(
            "{}/{}",
            encode_path_segment(&self.collection),
            encode_path_segment(&self.document_id)
        )
    }
}

/// 전송에 성공한 요청의 원시 응답
///
/// 상태 코드가 200이 아니어도 전송 자체는 성공한 것이므로 이 타입으로 반환됩니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreResponse {
    pub status: u16,
    pub body: String,
}

impl StoreResponse {
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }
}

/// 문서 저장소 추상화
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// 문서를 생성하거나 전체 교체합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::TransportError` - 네트워크/DNS/TLS/타임아웃 실패
    async fn upsert(&self, path: &DocumentPath, document: &FirestoreDocument) -> AppResult<StoreResponse>;
}
