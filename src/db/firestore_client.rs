//! Firestore REST 클라이언트
//!
//! `PATCH .../documents/<collection>/<id>` 요청으로 문서를 upsert합니다.
//! `updateMask`를 지정하지 않으므로 Firestore는 문서를 생성하거나 전체 교체합니다.
//!
//! # 요청 형식
//!
//! ```text
//! PATCH https://firestore.googleapis.com/v1/projects/<project>/databases/(default)/documents/NaveIDPriests/a@b.com[?key=API_KEY]
//! Authorization: Bearer TOKEN      (선택)
//! Content-Type: application/json
//!
//! { "fields": { "email": { "stringValue": "a@b.com" }, ... } }
//! ```

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::config::{Credentials, SeedConfig};
use crate::db::{DocumentPath, DocumentStore, StoreResponse};
use crate::domain::dto::firestore::FirestoreDocument;
use crate::errors::errors::{AppError, AppResult, ErrorContext};

/// reqwest 기반 Firestore REST 클라이언트
#[derive(Debug, Clone)]
pub struct FirestoreRestClient {
    http: reqwest::Client,
    documents_base_url: String,
    credentials: Credentials,
}

impl FirestoreRestClient {
    /// 설정의 타임아웃과 자격 증명으로 클라이언트를 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigError` - HTTP 클라이언트 초기화 실패 (TLS 백엔드 등)
    pub fn new(config: &SeedConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("HTTP 클라이언트 생성 실패")?;

        Ok(Self {
            http,
            documents_base_url: config.documents_base_url(),
            credentials: config.credentials.clone(),
        })
    }

    /// 문서의 전체 URL (쿼리 파라미터 제외)
    pub fn document_url(&self, path: &DocumentPath) -> String {
        format!("{}/{}", self.documents_base_url, path.relative())
    }
}

#[async_trait]
impl DocumentStore for FirestoreRestClient {
    async fn upsert(&self, path: &DocumentPath, document: &FirestoreDocument) -> AppResult<StoreResponse> {
        let url = self.document_url(path);
        debug!("📤 PATCH {}", url);

        let mut request = self.http.patch(&url).json(document);

        if let Some(api_key) = &self.credentials.api_key {
            request = request.query(&[("key", api_key)]);
        }
        if let Some(token) = &self.credentials.bearer_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| transport_error("Firestore 요청 실패", e))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| transport_error("Firestore 응답 본문 읽기 실패", e))?;

        if status == crate::db::STATUS_OK {
            info!("📥 Firestore 응답 {} ({} bytes)", status, body.len());
        } else {
            warn!("📥 Firestore 응답 {}: {}", status, body);
        }

        Ok(StoreResponse { status, body })
    }
}

/// reqwest 에러를 전송 에러로 변환합니다.
///
/// reqwest는 에러 메시지에 요청 URL 전체를 넣는데, 여기에는 `?key=` API 키가 포함됩니다.
/// URL을 제거한 뒤 메시지를 만듭니다.
fn transport_error(context: &str, e: reqwest::Error) -> AppError {
    AppError::TransportError(format!("{}: {}", context, e.without_url()))
}
