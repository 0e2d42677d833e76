mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{body_json, build_seeded_app, delete, get, post_json};

// ------ Listing and fetching ------

#[tokio::test]
async fn list_returns_seeded_pages_in_collection_order() {
    let app = build_seeded_app();
    let response = get(app, "/api/v1/pages").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let pages = json["data"].as_array().expect("data is an array");
    assert_eq!(pages.len(), 3);
    assert_eq!(pages[0]["id"], "LP001");
    assert_eq!(pages[0]["title"], "Riyadh Villa Launch Campaign");
    assert_eq!(pages[0]["status"], "Published");
    assert_eq!(pages[2]["id"], "LP003");
}

#[tokio::test]
async fn get_page_returns_the_full_aggregate() {
    let app = build_seeded_app();
    let response = get(app, "/api/v1/pages/LP001").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let page = &json["data"];
    assert_eq!(page["title"], "Riyadh Villa Launch Campaign");
    assert_eq!(page["created_at"], "2023-11-10");

    let content = page["content"].as_array().expect("content is an array");
    assert_eq!(content.len(), 2);
    assert_eq!(content[0]["type"], "hero");
    assert_eq!(content[0]["title"], "Luxury Villas in the Heart of Riyadh");
    assert_eq!(content[1]["type"], "gallery");
    assert_eq!(content[1]["images"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn get_missing_page_returns_404() {
    let app = build_seeded_app();
    let response = get(app, "/api/v1/pages/LP999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "LandingPage with id LP999 not found");
}

// ------ Saving ------

#[tokio::test]
async fn saving_a_new_page_assigns_the_next_id_and_prepends() {
    let app = build_seeded_app();

    let response = post_json(
        app.clone(),
        "/api/v1/pages",
        json!({
            "title": "Dammam Towers Pre-Sale",
            "status": "Draft",
            "content": [],
            "created_at": "2024-01-05",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], "LP004");

    let listing = body_json(get(app, "/api/v1/pages").await).await;
    let pages = listing["data"].as_array().unwrap();
    assert_eq!(pages.len(), 4);
    assert_eq!(pages[0]["id"], "LP004");
}

#[tokio::test]
async fn saving_an_existing_page_replaces_it_in_place() {
    let app = build_seeded_app();

    let page = body_json(get(app.clone(), "/api/v1/pages/LP002").await).await["data"].clone();
    let mut updated = page;
    updated["title"] = json!("Jeddah Waterfront Grand Opening");
    // Clients cannot rewrite the save date of a stored page.
    updated["created_at"] = json!("2030-01-01");

    let response = post_json(app.clone(), "/api/v1/pages", updated).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], "LP002");
    assert_eq!(json["data"]["title"], "Jeddah Waterfront Grand Opening");
    assert_eq!(json["data"]["created_at"], "2023-11-15");

    let listing = body_json(get(app, "/api/v1/pages").await).await;
    let pages = listing["data"].as_array().unwrap();
    assert_eq!(pages.len(), 3);
    assert_eq!(pages[1]["id"], "LP002");
    assert_eq!(pages[1]["title"], "Jeddah Waterfront Grand Opening");
}

// ------ Deletion ------

#[tokio::test]
async fn delete_removes_the_page() {
    let app = build_seeded_app();

    let response = delete(app.clone(), "/api/v1/pages/LP002").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app, "/api/v1/pages/LP002").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_missing_page_returns_404() {
    let app = build_seeded_app();
    let response = delete(app, "/api/v1/pages/LP999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn page_ids_are_not_reused_after_deletion() {
    let app = build_seeded_app();

    let draft = json!({
        "title": "Temporary Campaign",
        "status": "Draft",
        "content": [],
        "created_at": "2024-03-01",
    });

    let first = body_json(post_json(app.clone(), "/api/v1/pages", draft.clone()).await).await;
    assert_eq!(first["data"]["id"], "LP004");

    let response = delete(app.clone(), "/api/v1/pages/LP004").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let second = body_json(post_json(app, "/api/v1/pages", draft).await).await;
    assert_eq!(second["data"]["id"], "LP005");
}

// ------ Preview ------

#[tokio::test]
async fn preview_projects_the_page_for_display() {
    let app = build_seeded_app();
    let response = get(app, "/api/v1/pages/LP001/preview").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let preview = &json["data"];
    assert_eq!(preview["message"], "Previewing: Riyadh Villa Launch Campaign");
    assert_eq!(preview["status"], "Published");
    assert_eq!(preview["hero"]["title"], "Luxury Villas in the Heart of Riyadh");

    let blocks = preview["blocks"].as_array().expect("blocks is an array");
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0]["block_type"], "hero");
    assert_eq!(blocks[0]["detail"], "Discover your new home");
    assert_eq!(blocks[1]["block_type"], "gallery");
    assert_eq!(blocks[1]["detail"], "2 images");
}

#[tokio::test]
async fn preview_without_a_hero_omits_the_snippet() {
    let app = build_seeded_app();

    // Build a page whose only block is a contact form.
    let created = body_json(
        post_json(
            app.clone(),
            "/api/v1/pages",
            json!({
                "title": "Bare Inquiry Page",
                "status": "Draft",
                "content": [{
                    "id": "c1",
                    "type": "contact_form",
                    "title": "Talk to Us",
                    "button_text": "Send",
                }],
                "created_at": "2024-02-10",
            }),
        )
        .await,
    )
    .await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let json = body_json(get(app, &format!("/api/v1/pages/{id}/preview")).await).await;
    assert!(json["data"]["hero"].is_null());
    assert_eq!(json["data"]["blocks"][0]["detail"], "Send");
}

#[tokio::test]
async fn preview_missing_page_returns_404() {
    let app = build_seeded_app();
    let response = get(app, "/api/v1/pages/LP999/preview").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
