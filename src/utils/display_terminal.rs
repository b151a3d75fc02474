//! 터미널 출력 포맷팅 유틸리티
//!
//! 운영자에게 보여주는 표준 출력 텍스트를 만듭니다.
//! 로그(stderr)와 달리 이 모듈의 출력은 항상 stdout으로 나갑니다.
//! 텍스트 생성(`render_*`)과 출력(`print_*`)을 분리해 테스트에서 내용을 검증합니다.

use crate::domain::dto::firestore::format_timestamp;
use crate::services::seed::{SeedOutcome, SeededDocument, StoreRejection};

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// # Examples
///
/// ```rust,ignore
/// print_boxed_title("NaveID Seeder");
/// ```
///
/// Output:
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                  NaveID Seeder                   ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^50}║", title);
    println!("╚{}╝", border);
}

/// 진행 단계 시작을 표시합니다
///
/// Output:
/// ```text
/// → Creating NaveIDPriests/a@b.com...
/// ```
pub fn print_step_start(description: &str) {
    println!("→ {}", description);
}

/// 권한 거부 시 안내하는 Firestore 보안 규칙
pub fn permission_rule(collection: &str) -> String {
    format!("match /{}/{{doc}} {{ allow read, write: if true; }}", collection)
}

/// 시딩 결과를 출력용 줄 목록으로 만듭니다
pub fn render_outcome(outcome: &SeedOutcome, collection: &str) -> Vec<String> {
    match outcome {
        SeedOutcome::Seeded(doc) => render_seeded(doc),
        SeedOutcome::Rejected(rejection) => render_rejection(rejection, collection),
    }
}

fn render_seeded(doc: &SeededDocument) -> Vec<String> {
    let record = &doc.record;

    vec![
        format!("✅ Document created: {}", doc.document_name),
        format!("   Email:        {}", record.email),
        format!("   Status:       {}", record.status),
        format!("   Diocese:      {}", record.diocese),
        format!("   Display name: {}", record.display_name),
        format!("   Created at:   {}", format_timestamp(&record.created_at)),
        String::new(),
        "🎉 Done! NaveID will now show for this account in iOS Settings.".to_string(),
    ]
}

fn render_rejection(rejection: &StoreRejection, collection: &str) -> Vec<String> {
    let mut lines = vec![format!("❌ Error {}: {}", rejection.status, rejection.body)];

    if rejection.is_permission_denied() {
        lines.push(String::new());
        lines.push(format!("Firestore rules may be blocking writes to {}.", collection));
        lines.push("Add this rule in Firebase Console > Firestore > Rules:".to_string());
        lines.push(format!("  {}", permission_rule(collection)));
    }

    lines
}

/// 시딩 결과를 stdout에 출력합니다
pub fn print_outcome(outcome: &SeedOutcome, collection: &str) {
    for line in render_outcome(outcome, collection) {
        println!("{}", line);
    }
}

/// `--dry-run` 출력
pub fn render_preview(url: &str, body_json: &str) -> Vec<String> {
    let mut lines = vec![
        "🔎 Dry run: no request sent".to_string(),
        format!("PATCH {}", url),
    ];
    lines.extend(body_json.lines().map(str::to_string));
    lines
}

pub fn print_preview(url: &str, body_json: &str) {
    for line in render_preview(url, body_json) {
        println!("{}", line);
    }
}
