//! Integration tests: RestClient against an in-process fake backend.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, Query},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use every_circle::adapters::{RestClient, RestClientConfig};
use every_circle::application::{HydrateBusinessCardsHandler, HydrateBusinessCardsQuery};
use every_circle::domain::business::Business;
use every_circle::domain::foundation::{BusinessUid, ProfileUid, Visibility};
use every_circle::domain::profile::ImageUpload;
use every_circle::ports::{ApiError, BusinessApi, ProfileApi, SearchApi};

// ════════════════════════════════════════════════════════════════════════════
// Fake backend
// ════════════════════════════════════════════════════════════════════════════

fn stored_profile(uid: &str) -> Value {
    json!({
        "profile_uid": uid,
        "personal_info": {
            "profile_personal_first_name": "Jane",
            "profile_personal_last_name": "Doe",
            "profile_personal_tag_line": "Bookkeeping for small shops",
            "profile_personal_email": "jane@example.com",
            "profile_personal_email_is_public": "0",
            "profile_personal_phone_number_is_public": 1,
            "profile_personal_wishes_is_public": false,
            "profile_personal_template": "2"
        },
        "expertise_info": [
            {
                "profile_expertise_uid": "160-000001",
                "profile_expertise_title": "Tax prep",
                "profile_expertise_cost": "$40/hr",
                "profile_expertise_bounty": "10 total",
                "profile_expertise_is_public": "1"
            }
        ],
        "wishes_info": [
            {
                "profile_wish_uid": "170-000001",
                "profile_wish_title": "Logo design",
                "profile_wish_amount": "Free",
                "profile_wish_is_public": "0"
            }
        ],
        "business_info": [
            {
                "profile_business_uid": "180-000001",
                "profile_business_business_id": "200-000001",
                "profile_business_role": "Owner"
            },
            {
                "profile_business_uid": "180-000002",
                "profile_business_role": "Orphan link"
            }
        ]
    })
}

fn stored_business(uid: &str) -> Value {
    json!({
        "business_uid": uid,
        "business_name": format!("Business {}", uid),
        "business_tag_line": "Open late",
        "business_is_public": "1",
        "services": [
            { "bs_uid": "210-000001", "bs_service_name": "Espresso", "bs_cost": "$3" }
        ]
    })
}

async fn get_profile(Path(uid): Path<String>) -> impl IntoResponse {
    if uid == "110-missing" {
        return (StatusCode::NOT_FOUND, "no such profile").into_response();
    }
    Json(stored_profile(&uid)).into_response()
}

async fn put_profile(Path(uid): Path<String>, Json(mut body): Json<Value>) -> impl IntoResponse {
    if body["profile_uid"] != json!(uid) {
        return (StatusCode::UNPROCESSABLE_ENTITY, "uid mismatch").into_response();
    }
    if let Some(items) = body["expertise_info"].as_array_mut() {
        for (i, item) in items.iter_mut().enumerate() {
            let unsaved = item["profile_expertise_uid"]
                .as_str()
                .map_or(true, str::is_empty);
            if unsaved {
                item["profile_expertise_uid"] = json!(format!("160-00010{}", i));
            }
        }
    }
    Json(body).into_response()
}

async fn upload_image(Path(uid): Path<String>, headers: HeaderMap, body: Bytes) -> impl IntoResponse {
    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    if !content_type.starts_with("multipart/form-data") || body.is_empty() {
        return (StatusCode::BAD_REQUEST, "expected multipart").into_response();
    }
    Json(json!({ "image_url": format!("https://img.example.com/{}.png", uid) })).into_response()
}

async fn get_business(Path(uid): Path<String>) -> impl IntoResponse {
    match uid.as_str() {
        "200-000404" => (StatusCode::NOT_FOUND, "").into_response(),
        "200-000500" => (StatusCode::INTERNAL_SERVER_ERROR, "db down").into_response(),
        "200-000bad" => (StatusCode::OK, "<html>oops</html>").into_response(),
        _ => Json(stored_business(&uid)).into_response(),
    }
}

async fn create_business(Json(mut body): Json<Value>) -> Json<Value> {
    body["business_uid"] = json!("200-000777");
    Json(body)
}

async fn update_business(Path(uid): Path<String>, Json(body): Json<Value>) -> impl IntoResponse {
    if body["business_uid"] != json!(uid) {
        return (StatusCode::UNPROCESSABLE_ENTITY, "uid mismatch").into_response();
    }
    Json(body).into_response()
}

async fn search(
    Path(uid): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let query = params.get("query").cloned().unwrap_or_default();
    Json(json!([
        {
            "profile_uid": "110-000002",
            "profile_personal_first_name": "Sam",
            "profile_personal_last_name": "Lee",
            "degree": 1,
            "matched_expertise": [query]
        },
        { "profile_personal_first_name": format!("no uid, searched by {}", uid) }
    ]))
}

async fn spawn_backend() -> RestClient {
    let app = Router::new()
        .route("/profile/:uid", get(get_profile).put(put_profile))
        .route("/profile/:uid/image", post(upload_image))
        .route("/business", post(create_business))
        .route("/business/:uid", get(get_business).put(update_business))
        .route("/search/:uid", get(search));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    RestClient::new(RestClientConfig::new(format!("http://{}/", addr))).unwrap()
}

fn profile_uid(raw: &str) -> ProfileUid {
    ProfileUid::new(raw).unwrap()
}

// ════════════════════════════════════════════════════════════════════════════
// Profile
// ════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn fetch_profile_maps_wire_shape() {
    let client = spawn_backend().await;

    let profile = client.fetch_profile(&profile_uid("110-000001")).await.unwrap();

    assert_eq!(profile.personal.display_name(), "Jane Doe");
    assert_eq!(profile.personal.email_visibility, Visibility::Private);
    assert_eq!(profile.personal.phone_visibility, Visibility::Public);
    assert_eq!(profile.wishes.visibility, Visibility::Private);
    assert_eq!(profile.template.index(), 2);

    let expertise = &profile.expertise.entries[0];
    assert!(expertise.state.is_persisted());
    assert_eq!(expertise.cost.amount(), "40");
    assert_eq!(expertise.cost.unit(), "hr");
    assert_eq!(expertise.bounty.unit(), "total");
    assert!(profile.wishes.entries[0].amount.is_free());

    // Link without a business id is dropped
    assert_eq!(profile.businesses.len(), 1);
}

#[tokio::test]
async fn missing_profile_is_not_found() {
    let client = spawn_backend().await;

    let err = client
        .fetch_profile(&profile_uid("110-missing"))
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::NotFound(_)));
}

#[tokio::test]
async fn save_profile_returns_stored_ids() {
    let client = spawn_backend().await;
    let mut profile = client.fetch_profile(&profile_uid("110-000001")).await.unwrap();

    let draft = profile.expertise.add_draft();
    draft.title = "Payroll".to_string();
    draft.cost.set_amount_input("$55");
    draft.cost.mark_free();

    let saved = client.save_profile(&profile).await.unwrap();

    assert_eq!(saved.expertise.len(), 2);
    let new_entry = &saved.expertise.entries[1];
    assert_eq!(new_entry.state.id().unwrap().as_str(), "160-000101");
    assert_eq!(new_entry.cost.as_str(), "Free");
    assert_eq!(saved.expertise.entries[0].cost.as_str(), "$40/hr");
}

#[tokio::test]
async fn upload_profile_image_sends_multipart() {
    let client = spawn_backend().await;
    let image = ImageUpload::new("me.png", "image/png", vec![1, 2, 3], 1024).unwrap();

    let url = client
        .upload_profile_image(&profile_uid("110-000001"), &image)
        .await
        .unwrap();

    assert_eq!(url, "https://img.example.com/110-000001.png");
}

// ════════════════════════════════════════════════════════════════════════════
// Business
// ════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn business_errors_map_by_status() {
    let client = spawn_backend().await;

    let not_found = client
        .fetch_business(&BusinessUid::new("200-000404").unwrap())
        .await
        .unwrap_err();
    assert!(matches!(not_found, ApiError::NotFound(_)));

    let server = client
        .fetch_business(&BusinessUid::new("200-000500").unwrap())
        .await
        .unwrap_err();
    match server {
        ApiError::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "db down");
        }
        other => panic!("expected status error, got {:?}", other),
    }

    let malformed = client
        .fetch_business(&BusinessUid::new("200-000bad").unwrap())
        .await
        .unwrap_err();
    assert!(matches!(malformed, ApiError::Decode(_)));
}

#[tokio::test]
async fn create_then_update_business() {
    let client = spawn_backend().await;
    let mut business = Business::draft();
    business.name = "Circle Coffee".to_string();

    let created = client.create_business(&business).await.unwrap();
    assert_eq!(created.state.id().unwrap().as_str(), "200-000777");

    let mut edited = created.clone();
    edited.tag_line = "Now with pastries".to_string();
    let updated = client.update_business(&edited).await.unwrap();
    assert_eq!(updated.tag_line, "Now with pastries");
}

#[tokio::test]
async fn update_of_unsaved_business_is_rejected_locally() {
    let client = spawn_backend().await;

    let err = client.update_business(&Business::draft()).await.unwrap_err();

    assert!(matches!(err, ApiError::InvalidRequest(_)));
}

#[tokio::test]
async fn hydrate_cards_skips_failures() {
    let client: Arc<dyn BusinessApi> = Arc::new(spawn_backend().await);
    let handler = HydrateBusinessCardsHandler::new(client);

    let business_uids = ["200-000001", "200-000404", "200-000500", "200-000bad", "200-000002"]
        .iter()
        .map(|uid| BusinessUid::new(*uid).unwrap())
        .collect();
    let cards = handler
        .handle(HydrateBusinessCardsQuery { business_uids })
        .await;

    let names: Vec<&str> = cards.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Business 200-000001", "Business 200-000002"]);
}

// ════════════════════════════════════════════════════════════════════════════
// Search
// ════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn search_passes_query_and_drops_hits_without_uid() {
    let client = spawn_backend().await;

    let results = client
        .search(&profile_uid("110-000001"), "tax prep")
        .await
        .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Sam Lee");
    assert_eq!(results[0].degree, Some(1));
    assert_eq!(results[0].matched_expertise, vec!["tax prep".to_string()]);
}
