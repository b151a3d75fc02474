//! # Data Transfer Objects (DTO) Module
//!
//! 외부 시스템과 주고받는 와이어 형식을 정의합니다.
//!
//! - [`firestore`] - Firestore REST 문서 구조 (`fields` + 타입 태그)

pub mod firestore;
