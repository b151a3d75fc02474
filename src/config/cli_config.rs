//! 명령행 인자 정의
//!
//! 모든 옵션은 플래그 또는 환경 변수로 제공할 수 있습니다.
//! `.env` 파일에 값을 넣어두면 인자 없이 실행해도 시딩이 수행됩니다.

use clap::Parser;

use super::seed_config::{DEFAULT_BASE_URL, DEFAULT_COLLECTION, DEFAULT_DATABASE, DEFAULT_STATUS, DEFAULT_TIMEOUT_SECS};

/// NaveIDPriests 문서 시더 CLI
#[derive(Clone, Parser)]
#[command(name = "naveid_seeder", version, about = "Create or replace one NaveIDPriests document in Firestore")]
pub struct CliArgs {
    /// Firestore 프로젝트 ID
    #[arg(long, env = "FIRESTORE_PROJECT_ID")]
    pub project_id: String,

    /// 문서 ID로도 사용되는 사제 이메일
    #[arg(long, env = "SEED_EMAIL")]
    pub email: String,

    /// 표시 이름
    #[arg(long, env = "SEED_DISPLAY_NAME")]
    pub display_name: String,

    /// 소속 교구
    #[arg(long, env = "SEED_DIOCESE")]
    pub diocese: String,

    /// 계정 상태
    #[arg(long, env = "SEED_STATUS", default_value = DEFAULT_STATUS)]
    pub status: String,

    /// 대상 컬렉션
    #[arg(long, env = "FIRESTORE_COLLECTION", default_value = DEFAULT_COLLECTION)]
    pub collection: String,

    /// Firestore 데이터베이스 ID
    #[arg(long, env = "FIRESTORE_DATABASE", default_value = DEFAULT_DATABASE)]
    pub database: String,

    /// REST 엔드포인트 호스트 (에뮬레이터나 테스트 서버 지정용)
    #[arg(long, env = "FIRESTORE_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// `key` 쿼리 파라미터로 첨부할 API 키
    #[arg(long, env = "FIRESTORE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// `Authorization: Bearer` 헤더로 첨부할 액세스 토큰
    #[arg(long, env = "FIRESTORE_BEARER_TOKEN", hide_env_values = true)]
    pub bearer_token: Option<String>,

    /// 요청 타임아웃(초)
    #[arg(long, env = "FIRESTORE_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// 요청을 보내지 않고 URL과 본문만 출력
    #[arg(long)]
    pub dry_run: bool,
}
