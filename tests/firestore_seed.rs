//! 로컬 actix-web 서버를 Firestore REST 엔드포인트로 띄우고
//! 실제 `FirestoreRestClient`로 시딩 전체 흐름을 검증합니다.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use chrono::Utc;
use clap::Parser;
use serde_json::{json, Value};

use naveid_seeder::config::{CliArgs, SeedConfig};
use naveid_seeder::db::FirestoreRestClient;
use naveid_seeder::domain::dto::firestore::{FirestoreDocument, FirestoreValue};
use naveid_seeder::domain::entities::priests::PriestRecord;
use naveid_seeder::services::seed::{SeedOutcome, SeedService};
use naveid_seeder::utils::display_terminal::render_outcome;

const RULE: &str = "match /NaveIDPriests/{doc} { allow read, write: if true; }";

/// 받은 요청을 기록하는 가짜 Firestore
#[derive(Default)]
struct FakeFirestore {
    /// 문서 이름 → 저장된 `fields`
    docs: Mutex<HashMap<String, Value>>,
    /// (method, path, query, authorization)
    requests: Mutex<Vec<(String, String, String, Option<String>)>>,
    /// 지정되면 항상 이 상태 코드와 본문으로 응답
    forced: Option<(u16, String)>,
}

async fn handle(req: HttpRequest, body: web::Json<Value>, state: web::Data<FakeFirestore>) -> HttpResponse {
    let path = req.uri().path().to_string();
    let authorization = req
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.requests.lock().unwrap().push((
        req.method().to_string(),
        path.clone(),
        req.query_string().to_string(),
        authorization,
    ));

    if let Some((status, text)) = &state.forced {
        return HttpResponse::build(StatusCode::from_u16(*status).unwrap()).body(text.clone());
    }

    let name = path.trim_start_matches("/v1/").to_string();
    let fields = body["fields"].clone();
    state.docs.lock().unwrap().insert(name.clone(), fields.clone());

    let now = Utc::now().to_rfc3339();
    HttpResponse::Ok().json(json!({
        "name": name,
        "fields": fields,
        "createTime": now,
        "updateTime": now,
    }))
}

async fn start_fake(state: web::Data<FakeFirestore>) -> (String, ServerHandle) {
    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .default_service(web::to(handle))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .unwrap();

    let addr = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();
    actix_web::rt::spawn(server);

    (format!("http://{}", addr), handle)
}

fn config(base_url: &str, email: &str, extra: &[&str]) -> SeedConfig {
    let mut argv = vec![
        "naveid_seeder",
        "--project-id", "p",
        "--email", email,
        "--display-name", "Oliver Olsen",
        "--diocese", "Diocese of Philadelphia",
        "--status", "active",
        "--collection", "NaveIDPriests",
        "--database", "(default)",
        "--base-url", base_url,
        "--timeout-secs", "5",
    ];
    argv.extend_from_slice(extra);

    SeedConfig::from_args(CliArgs::try_parse_from(argv).unwrap()).unwrap()
}

fn service(config: &SeedConfig) -> SeedService<FirestoreRestClient> {
    let client = Arc::new(FirestoreRestClient::new(config).unwrap());
    SeedService::new(client, &config.collection)
}

fn stored_fields(value: &Value) -> BTreeMap<String, FirestoreValue> {
    serde_json::from_value(value.clone()).unwrap()
}

#[actix_web::test]
async fn seed_stores_exactly_the_five_fields() {
    let state = web::Data::new(FakeFirestore::default());
    let (base_url, server) = start_fake(state.clone()).await;
    let config = config(&base_url, "a@b.com", &[]);
    let t = &config.target;

    let before = Utc::now();
    let outcome = service(&config)
        .seed(&t.email, &t.display_name, &t.diocese, &t.status)
        .await
        .unwrap();

    let doc = match outcome {
        SeedOutcome::Seeded(doc) => doc,
        other => panic!("Expected Seeded, got {:?}", other),
    };
    assert_eq!(doc.document_name, "projects/p/databases/(default)/documents/NaveIDPriests/a@b.com");

    let docs = state.docs.lock().unwrap();
    let fields = stored_fields(&docs[&doc.document_name]);
    assert_eq!(fields.len(), 5);
    assert_eq!(fields, doc.record.to_document().fields);

    let stored = PriestRecord::from_document(&FirestoreDocument { fields }).unwrap();
    assert_eq!(stored.email, "a@b.com");
    assert_eq!(stored.display_name, "Oliver Olsen");
    assert_eq!(stored.diocese, "Diocese of Philadelphia");
    assert_eq!(stored.status, "active");
    let drift = (stored.created_at - before).num_seconds().abs();
    assert!(drift <= 5, "createdAt drifted {}s", drift);

    server.stop(true).await;
}

#[actix_web::test]
async fn seed_uses_patch_and_verbatim_email_path() {
    let state = web::Data::new(FakeFirestore::default());
    let (base_url, server) = start_fake(state.clone()).await;
    let config = config(&base_url, "a@b.com", &[]);
    let t = &config.target;

    service(&config)
        .seed(&t.email, &t.display_name, &t.diocese, &t.status)
        .await
        .unwrap();

    let requests = state.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    let (method, path, query, authorization) = &requests[0];
    assert_eq!(method, "PATCH");
    assert_eq!(path, "/v1/projects/p/databases/(default)/documents/NaveIDPriests/a@b.com");
    assert!(path.ends_with("/NaveIDPriests/a@b.com"));
    assert!(query.is_empty());
    assert!(authorization.is_none());

    server.stop(true).await;
}

#[actix_web::test]
async fn seed_twice_converges_to_one_document() {
    let state = web::Data::new(FakeFirestore::default());
    let (base_url, server) = start_fake(state.clone()).await;
    let config = config(&base_url, "a@b.com", &[]);
    let service = service(&config);
    let record = PriestRecord::new("a@b.com", "Oliver Olsen", "Diocese of Philadelphia", "active");

    let first = service.seed_record(record.clone()).await.unwrap();
    let second = service.seed_record(record.clone()).await.unwrap();

    assert_eq!(first, second);
    let docs = state.docs.lock().unwrap();
    assert_eq!(docs.len(), 1);
    let fields = stored_fields(docs.values().next().unwrap());
    assert_eq!(fields, record.to_document().fields);

    server.stop(true).await;
}

#[actix_web::test]
async fn forbidden_response_reports_status_body_and_rule() {
    let body = r#"{"error":{"code":403,"message":"Missing or insufficient permissions.","status":"PERMISSION_DENIED"}}"#;
    let state = web::Data::new(FakeFirestore {
        forced: Some((403, body.to_string())),
        ..Default::default()
    });
    let (base_url, server) = start_fake(state.clone()).await;
    let config = config(&base_url, "a@b.com", &[]);
    let t = &config.target;

    let outcome = service(&config)
        .seed(&t.email, &t.display_name, &t.diocese, &t.status)
        .await
        .unwrap();
    let text = render_outcome(&outcome, &config.collection).join("\n");

    assert!(!outcome.is_success());
    assert!(text.contains("403"));
    assert!(text.contains(body));
    assert!(text.contains(RULE));
    assert!(state.docs.lock().unwrap().is_empty());

    server.stop(true).await;
}

#[actix_web::test]
async fn bad_request_reports_status_and_body_without_rule() {
    let body = r#"{"error":{"code":400,"message":"Invalid value at 'document.fields'","status":"INVALID_ARGUMENT"}}"#;
    let state = web::Data::new(FakeFirestore {
        forced: Some((400, body.to_string())),
        ..Default::default()
    });
    let (base_url, server) = start_fake(state.clone()).await;
    let config = config(&base_url, "a@b.com", &[]);
    let t = &config.target;

    let outcome = service(&config)
        .seed(&t.email, &t.display_name, &t.diocese, &t.status)
        .await
        .unwrap();
    let text = render_outcome(&outcome, &config.collection).join("\n");

    assert!(text.contains("400"));
    assert!(text.contains(body));
    assert!(!text.contains(RULE));

    server.stop(true).await;
}

#[actix_web::test]
async fn credentials_are_attached_when_configured() {
    let state = web::Data::new(FakeFirestore::default());
    let (base_url, server) = start_fake(state.clone()).await;
    let config = config(&base_url, "a@b.com", &["--api-key", "k123", "--bearer-token", "tok"]);
    let t = &config.target;

    service(&config)
        .seed(&t.email, &t.display_name, &t.diocese, &t.status)
        .await
        .unwrap();

    let requests = state.requests.lock().unwrap();
    let (_, _, query, authorization) = &requests[0];
    assert_eq!(query, "key=k123");
    assert_eq!(authorization.as_deref(), Some("Bearer tok"));

    server.stop(true).await;
}
