//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! # Features
//!
//! - 사제 레코드 생성 및 검증
//! - 이메일 주소를 문서 ID로 하는 단일 upsert
//! - 저장소 응답을 성공/거부 결과로 분류
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::seed::SeedService;
//!
//! let service = SeedService::new(store, &config.collection);
//! let outcome = service.seed(&t.email, &t.display_name, &t.diocese, &t.status).await?;
//! ```

pub mod seed;
