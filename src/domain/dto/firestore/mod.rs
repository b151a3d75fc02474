//! Firestore REST API 요청/응답 DTO

pub mod document;

pub use document::*;
