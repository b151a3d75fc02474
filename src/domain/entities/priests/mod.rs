//! 사제 레코드 엔티티

pub mod priest_record;

pub use priest_record::*;
