//! 사제 레코드 시딩 서비스 모듈
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::seed::{SeedOutcome, SeedService};
//!
//! let service = SeedService::new(store, "NaveIDPriests");
//! match service.seed("a@b.com", "Oliver Olsen", "Diocese of Philadelphia", "active").await? {
//!     SeedOutcome::Seeded(doc) => println!("{}", doc.document_name),
//!     SeedOutcome::Rejected(r) => println!("{} {}", r.status, r.body),
//! }
//! ```

pub mod seed_service;

pub use seed_service::*;
