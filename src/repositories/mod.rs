//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 리포지토리는 [`DocumentStore`](crate::db::DocumentStore) 구현을 주입받아
//! 엔티티를 문서 주소와 와이어 형식으로 옮기는 역할만 합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::priests::PriestRepository;
//!
//! let repo = PriestRepository::new(store, "NaveIDPriests");
//! let response = repo.upsert(&record).await?;
//! ```

pub mod priests;
