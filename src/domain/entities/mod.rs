//! # Domain Entities Module
//!
//! 시더가 쓰는 핵심 엔티티를 정의합니다.
//!
//! ```text
//! entities/
//! └── priests/
//!     └── priest_record.rs  ← PriestRecord (NaveIDPriests 문서)
//! ```
//!
//! 엔티티는 Firestore 문서와 1:1 대응하며, 문서 ID는 이메일입니다.
//! 저장은 항상 전체 교체(upsert)이고 병합이나 사전 조회는 하지 않습니다.

pub mod priests;
