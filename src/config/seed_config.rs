//! 시딩 대상 및 Firestore 접속 설정
//!
//! `CliArgs`로부터 한 번만 생성되어 스토어 클라이언트와 시더에 명시적으로 전달됩니다.

use std::fmt;
use std::time::Duration;

use log::warn;

use crate::config::cli_config::CliArgs;
use crate::errors::errors::AppError;
use crate::utils::string_utils::{
    clean_optional_string, encode_path_segment, trim_trailing_slash, validate_required_string,
};

/// Firestore REST API 기본 호스트
pub const DEFAULT_BASE_URL: &str = "https://firestore.googleapis.com";
/// 기본 컬렉션
pub const DEFAULT_COLLECTION: &str = "NaveIDPriests";
/// 기본 데이터베이스 ID
pub const DEFAULT_DATABASE: &str = "(default)";
/// 기본 계정 상태
pub const DEFAULT_STATUS: &str = "active";
/// 기본 요청 타임아웃(초)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// 요청에 첨부할 자격 증명
///
/// 둘 다 없으면 Firestore 보안 규칙에만 의존합니다.
/// `Debug` 출력에서는 값을 가립니다.
#[derive(Clone, Default, PartialEq)]
pub struct Credentials {
    /// `?key=` 쿼리 파라미터
    pub api_key: Option<String>,
    /// `Authorization: Bearer` 토큰
    pub bearer_token: Option<String>,
}

impl Credentials {
    pub fn is_empty(&self) -> bool {
        self.api_key.is_none() && self.bearer_token.is_none()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |value: &Option<String>| value.as_ref().map(|_| "***");

        f.debug_struct("Credentials")
            .field("api_key", &redact(&self.api_key))
            .field("bearer_token", &redact(&self.bearer_token))
            .finish()
    }
}

/// 시딩 대상 레코드의 입력값
#[derive(Debug, Clone, PartialEq)]
pub struct SeedTarget {
    pub email: String,
    pub display_name: String,
    pub diocese: String,
    pub status: String,
}

/// 프로세스 전역 설정
#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub project_id: String,
    pub database: String,
    pub collection: String,
    pub base_url: String,
    pub credentials: Credentials,
    pub timeout: Duration,
    pub target: SeedTarget,
    pub dry_run: bool,
}

impl SeedConfig {
    /// 명령행 인자를 검증하여 설정을 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigError` - 필수 값이 비어 있거나 타임아웃이 0인 경우
    pub fn from_args(args: CliArgs) -> Result<Self, AppError> {
        if args.timeout_secs == 0 {
            return Err(AppError::ConfigError(
                "timeout_secs는 1 이상이어야 합니다".to_string(),
            ));
        }

        let base_url = trim_trailing_slash(&validate_required_string(&args.base_url, "base_url")?);
        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            return Err(AppError::ConfigError(format!(
                "base_url은 http(s):// 로 시작해야 합니다: {}", base_url
            )));
        }

        let credentials = Credentials {
            api_key: clean_optional_string(args.api_key),
            bearer_token: clean_optional_string(args.bearer_token),
        };
        if credentials.is_empty() {
            warn!("⚠️ 자격 증명 없이 요청합니다. Firestore 보안 규칙이 쓰기를 허용해야 합니다");
        }

        Ok(Self {
            project_id: validate_required_string(&args.project_id, "project_id")?,
            database: validate_required_string(&args.database, "database")?,
            collection: validate_required_string(&args.collection, "collection")?,
            base_url,
            credentials,
            timeout: Duration::from_secs(args.timeout_secs),
            target: SeedTarget {
                email: validate_required_string(&args.email, "email")?,
                display_name: validate_required_string(&args.display_name, "display_name")?,
                diocese: validate_required_string(&args.diocese, "diocese")?,
                status: validate_required_string(&args.status, "status")?,
            },
            dry_run: args.dry_run,
        })
    }

    /// 문서 컬렉션들의 루트 URL
    ///
    /// `<base>/v1/projects/<project>/databases/<database>/documents`
    ///
    /// 프로젝트 ID와 데이터베이스 ID는 경로 세그먼트로 인코딩합니다.
    pub fn documents_base_url(&self) -> String {
        format!(
            "{}/v1/projects/{}/databases/{}/documents",
            self.base_url,
            encode_path_segment(&self.project_id),
            encode_path_segment(&self.database)
        )
    }
}
