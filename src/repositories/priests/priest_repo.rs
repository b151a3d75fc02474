//! # 사제 레코드 리포지토리
//!
//! `NaveIDPriests` 컬렉션에 대한 데이터 액세스 계층입니다.
//! 제공하는 연산은 이메일을 문서 ID로 하는 upsert 하나뿐이며,
//! 읽기, 삭제, 목록, 일괄 처리는 의도적으로 없습니다.

use std::sync::Arc;

use log::info;

use crate::db::{DocumentPath, DocumentStore, StoreResponse};
use crate::domain::entities::priests::PriestRecord;
use crate::errors::errors::AppResult;

/// 사제 레코드 리포지토리
///
/// 저장소 구현은 [`DocumentStore`]로 주입받습니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let store = Arc::new(FirestoreRestClient::new(&config)?);
/// let repo = PriestRepository::new(store, &config.collection);
///
/// let response = repo.upsert(&record).await?;
/// ```
pub struct PriestRepository<S: DocumentStore> {
    store: Arc<S>,
    collection: String,
}

impl<S: DocumentStore> PriestRepository<S> {
    pub fn new(store: Arc<S>, collection: &str) -> Self {
        Self {
            store,
            collection: collection.to_string(),
        }
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// 레코드가 저장될 문서 주소 (`<collection>/<email>`)
    pub fn path_for(&self, record: &PriestRecord) -> DocumentPath {
        DocumentPath::new(&self.collection, &record.email)
    }

    /// 레코드를 생성하거나 전체 교체합니다.
    ///
    /// 사전 조회 없이 항상 다섯 필드 전체를 씁니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(StoreResponse)` - 저장소가 응답한 상태 코드와 본문 (200이 아닐 수 있음)
    /// * `Err(AppError::TransportError)` - 요청이 저장소에 도달하지 못한 경우
    pub async fn upsert(&self, record: &PriestRecord) -> AppResult<StoreResponse> {
        let path = self.path_for(record);
        info!("📝 {} upsert 요청", path.relative());

        self.store.upsert(&path, &record.to_document()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::firestore::FirestoreDocument;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingStore {
        calls: Mutex<Vec<(DocumentPath, FirestoreDocument)>>,
    }

    #[async_trait]
    impl DocumentStore for RecordingStore {
        async fn upsert(&self, path: &DocumentPath, document: &FirestoreDocument) -> AppResult<StoreResponse> {
            self.calls.lock().unwrap().push((path.clone(), document.clone()));
            Ok(StoreResponse { status: 200, body: "{}".to_string() })
        }
    }

    #[tokio::test]
    async fn test_upsert_addresses_document_by_email() {
        let store = Arc::new(RecordingStore::default());
        let repo = PriestRepository::new(store.clone(), "NaveIDPriests");
        let record = PriestRecord::new("a@b.com", "Oliver Olsen", "Diocese of Philadelphia", "active");

        let response = repo.upsert(&record).await.unwrap();

        assert!(response.is_ok());
        let calls = store.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0.relative(), "NaveIDPriests/a@b.com");
        assert_eq!(calls[0].1, record.to_document());
    }
}
