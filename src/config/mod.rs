//! # Configuration Module
//!
//! 시더의 설정 관리를 담당하는 모듈입니다.
//! 하드코딩된 상수 대신 명령행 인자와 환경 변수(`.env` 포함)로 값을 받습니다.
//!
//! ## 모듈 구성
//!
//! - [`cli_config`] - clap 기반 명령행/환경 변수 정의
//! - [`seed_config`] - 검증된 프로세스 전역 설정 객체
//!
//! ## 환경 변수 설정 가이드
//!
//! ### 필수 환경 변수
//!
//! ```bash
//! export FIRESTORE_PROJECT_ID="navefirebase"
//! export SEED_EMAIL="priest@example.com"
//! export SEED_DISPLAY_NAME="Oliver Olsen"
//! export SEED_DIOCESE="Diocese of Philadelphia"
//! ```
//!
//! ### 선택적 환경 변수
//!
//! ```bash
//! export SEED_STATUS="active"                 # 기본값 active
//! export FIRESTORE_COLLECTION="NaveIDPriests"
//! export FIRESTORE_DATABASE="(default)"
//! export FIRESTORE_BASE_URL="https://firestore.googleapis.com"
//! export FIRESTORE_API_KEY="..."              # ?key= 로 첨부
//! export FIRESTORE_BEARER_TOKEN="..."         # Authorization: Bearer
//! export FIRESTORE_TIMEOUT_SECS="30"
//! ```

pub mod cli_config;
pub mod seed_config;

pub use cli_config::*;
pub use seed_config::*;
