//! # Domain Layer Module
//!
//! 시더의 도메인 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - PriestRecord
//! └── DTOs      - Firestore REST 문서 형식
//!      │
//!      ▼
//! Services (SeedService)
//!      │
//!      ▼
//! Repositories / DB (PriestRepository, FirestoreRestClient)
//! ```

pub mod dto;
pub mod entities;
