//! # 문자열 유틸리티
//!
//! 설정값 검증과 URL 경로 구성에 사용하는 공통 문자열 함수들입니다.

use crate::errors::errors::AppError;

/// 필수 문자열 필드 검증 및 정리
///
/// 빈 문자열이나 공백만 있는 경우 ConfigError를 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 반환합니다.
///
/// # 인자
/// * `value` - 검증할 문자열
/// * `field_name` - 필드명 (에러 메시지용)
///
/// # 반환값
/// * `Ok(String)` - 정리된 유효한 문자열
/// * `Err(AppError)` - 빈 문자열이거나 공백만 있는 경우
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::validate_required_string;
///
/// assert_eq!(validate_required_string("  Hello  ", "diocese").unwrap(), "Hello");
/// assert!(validate_required_string("   ", "diocese").is_err());
/// ```
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ConfigError(
            format!("{}은(는) 필수입니다", field_name)
        ));
    }
    Ok(trimmed.to_string())
}

/// 선택적 문자열 정리
///
/// None 이거나 공백만 있는 경우 None을 반환합니다.
/// 빈 환경 변수(`FIRESTORE_API_KEY=`)를 미설정으로 취급할 때 사용합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// URL 경로 세그먼트 인코딩
///
/// RFC 3986 `pchar`에 해당하는 문자(비예약 문자, sub-delims, `:`, `@`)는 그대로 두고
/// 나머지(`/`, `?`, `#`, `%`, 공백, 비 ASCII 등)만 퍼센트 인코딩합니다.
/// 따라서 `a@b.com` 같은 일반적인 이메일은 그대로 경로에 들어갑니다.
///
/// # 예제
/// ```rust,ignore
/// assert_eq!(encode_path_segment("a@b.com"), "a@b.com");
/// assert_eq!(encode_path_segment("a/b@c.com"), "a%2Fb@c.com");
/// ```
pub fn encode_path_segment(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    let mut buf = [0u8; 4];

    for c in value.chars() {
        if is_pchar(c) {
            encoded.push(c);
        } else {
            encoded.push_str(&urlencoding::encode(c.encode_utf8(&mut buf)));
        }
    }

    encoded
}

fn is_pchar(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '-' | '.' | '_' | '~' | '!' | '$' | '&' | '\'' | '(' | ')' | '*' | '+' | ',' | ';' | '=' | ':' | '@'
        )
}

/// 끝의 `/` 문자들을 제거합니다.
pub fn trim_trailing_slash(value: &str) -> String {
    value.trim_end_matches('/').to_string()
}
