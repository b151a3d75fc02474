//! NaveID 사제 레코드 시더
//!
//! Firestore `NaveIDPriests` 컬렉션에 사제 문서 하나를 upsert하는 관리용 도구입니다.
//! 문서 ID는 이메일이며, 실행할 때마다 다섯 필드 전체를 덮어씁니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   main (CLI)    │ ← 인자/환경 변수, 출력, 종료 코드
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   SeedService   │ ← 레코드 생성, 검증, 결과 분류
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ PriestRepository│ ← 문서 주소와 와이어 형식
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  DocumentStore  │ ← FirestoreRestClient (PATCH)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use naveid_seeder::db::FirestoreRestClient;
//! use naveid_seeder::services::seed::SeedService;
//!
//! let client = Arc::new(FirestoreRestClient::new(&config)?);
//! let service = SeedService::new(client, &config.collection);
//! let outcome = service.seed("a@b.com", "Oliver Olsen", "Diocese of Philadelphia", "active").await?;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod errors;
