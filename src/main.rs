//! NaveID 사제 레코드 시더
//!
//! `NaveIDPriests/<email>` 문서 하나를 Firestore REST API로 생성하거나 전체 교체합니다.
//! 값은 명령행 인자 또는 환경 변수(`.env` 포함)로 받습니다.
//!
//! # 종료 코드
//!
//! * `0` - 문서 기록 성공 (또는 `--dry-run`)
//! * `1` - 설정/검증 오류, 네트워크 오류, Firestore 거부
//!
//! 이전 스크립트는 실패해도 항상 0으로 종료했습니다. 자동화에서 실패를 감지할 수 있도록
//! 거부 응답도 1로 종료합니다.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use naveid_seeder::config::{CliArgs, SeedConfig};
use naveid_seeder::db::FirestoreRestClient;
use naveid_seeder::errors::errors::{AppError, AppResult};
use naveid_seeder::services::seed::SeedService;
use naveid_seeder::utils::display_terminal::{print_boxed_title, print_outcome, print_preview, print_step_start};

#[tokio::main]
async fn main() -> ExitCode {
    // 환경 설정 및 로깅 초기화
    let env_source = load_env_file();
    init_logging();
    info!("{}", env_source);

    let config = match SeedConfig::from_args(CliArgs::parse()) {
        Ok(config) => config,
        Err(e) => return fail(e),
    };

    match run(&config).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => fail(e),
    }
}

/// 시딩을 수행하고 결과를 출력합니다
///
/// # Returns
///
/// * `Ok(true)` - 문서 기록 성공 또는 dry-run
/// * `Ok(false)` - Firestore가 쓰기를 거부함 (출력 완료)
///
/// # Errors
///
/// * `AppError::ValidationError` - 레코드 검증 실패
/// * `AppError::TransportError` - 네트워크/DNS/TLS/타임아웃
async fn run(config: &SeedConfig) -> AppResult<bool> {
    let client = Arc::new(FirestoreRestClient::new(config)?);
    let service = SeedService::new(client.clone(), &config.collection);
    let target = &config.target;

    print_boxed_title("NaveID Seeder");

    if config.dry_run {
        let preview = service.preview(&target.email, &target.display_name, &target.diocese, &target.status)?;
        let body = serde_json::to_string_pretty(&preview.body)?;
        print_preview(&client.document_url(&preview.path), &body);
        return Ok(true);
    }

    print_step_start(&format!("Creating {}/{}...", config.collection, target.email));
    info!("🚀 {} 프로젝트에 시딩 시작", config.project_id);

    let outcome = service
        .seed(&target.email, &target.display_name, &target.diocese, &target.status)
        .await?;

    print_outcome(&outcome, service.collection());
    Ok(outcome.is_success())
}

/// 오류를 기록하고 실패 종료 코드를 돌려줍니다
fn fail(e: AppError) -> ExitCode {
    error!("시딩 실패 ({}): {}", e.kind(), e);
    eprintln!("❌ {}", e);
    ExitCode::FAILURE
}

/// 환경별 설정 파일을 로드합니다
///
/// 로거 초기화 전에 호출되므로 결과 메시지를 돌려주고, 호출자가 로깅합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타/미설정 - 기본 .env 파일 로드 (없어도 무시)
fn load_env_file() -> String {
    let profile = std::env::var("PROFILE").unwrap_or_default();

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => ".env.prod 파일 로드 됨".to_string(),
            Err(e) => format!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => ".env.dev 파일 로드 됨".to_string(),
            Err(e) => format!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => match dotenv() {
            Ok(path) => format!("{} 파일 로드 됨", path.display()),
            Err(_) => ".env 파일 없음, 환경 변수만 사용".to_string(),
        },
    }
}

/// 로깅 시스템을 초기화합니다
///
/// 로그는 stderr로 나가므로 stdout에는 결과 출력만 남습니다.
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info")
///
/// ```bash
/// RUST_LOG=naveid_seeder=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
}
