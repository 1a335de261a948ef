//! Integration tests for POST /api/pick.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use drafter_draft::domain::aggregates::TurnPolicy;
use drafter_draft::store::InMemoryDraftRepository;
use serde_json::json;

#[tokio::test]
async fn test_pick_consumes_duplicate_options_and_completes() {
    let app = common::build_test_app();
    common::create_draft(&app, &["Test_1", "Test_2"], &["Test_1", "Test_1"], 3).await;

    // First pick by Test_1.
    let (status, json) = common::post_json(
        app.clone(),
        "/api/pick",
        &json!({ "id": 0, "picker": "Test_1", "pick": "Test_1" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({
            "draft": {
                "drafters": ["Test_1", "Test_2"],
                "options": ["Test_1"],
                "picked": ["Test_1 Test_1 1"],
                "rounds": 3,
                "id": 0,
                "isComplete": false,
                "picker": "Test_2"
            }
        })
    );

    // Second pick wraps the turn, consumes a round and exhausts the options.
    let (status, json) = common::post_json(
        app.clone(),
        "/api/pick",
        &json!({ "id": 0, "picker": "Test_2", "pick": "Test_1" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({
            "draft": {
                "drafters": ["Test_1", "Test_2"],
                "options": [],
                "picked": ["Test_1 Test_1 1", "Test_2 Test_1 2"],
                "rounds": 2,
                "id": 0,
                "isComplete": true,
                "picker": "Test_1"
            }
        })
    );
}

#[tokio::test]
async fn test_pick_on_second_draft_leaves_first_untouched() {
    let app = common::build_test_app();
    common::create_draft(&app, &["Test_1", "Test_2"], &["Test_1", "Test_1"], 3).await;
    common::create_draft(&app, &["Henna", "Chung_2"], &["Fruits", "Candy"], 3).await;

    let (status, json) = common::post_json(
        app.clone(),
        "/api/pick",
        &json!({ "id": 1, "picker": "Henna", "pick": "Candy" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["draft"],
        json!({
            "drafters": ["Henna", "Chung_2"],
            "options": ["Fruits"],
            "picked": ["Henna Candy 1"],
            "rounds": 3,
            "id": 1,
            "isComplete": false,
            "picker": "Chung_2"
        })
    );

    let (_, first) = common::get_json(app, "/api/load?id=0").await;
    assert!(first["draft"]["picked"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_pick_rejects_missing_or_non_numeric_id() {
    let app = common::build_test_app();
    common::create_draft(&app, &["Henna", "Chung_2"], &["Fruits", "Candy"], 3).await;

    for body in [
        json!({ "id": null, "pick": "Candy" }),
        json!({ "pick": "Candy" }),
        json!({ "id": [32], "pick": "Candy" }),
        json!({ "id": "hi", "pick": "Candy" }),
        json!({ "id": -1, "pick": "Candy" }),
    ] {
        let (status, json) = common::post_json(app.clone(), "/api/pick", &body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "body = {body}");
        assert_eq!(json["error"], "invalid_input");
    }
}

#[tokio::test]
async fn test_pick_rejects_unknown_draft() {
    let app = common::build_test_app();
    common::create_draft(&app, &["Henna", "Chung_2"], &["Fruits", "Candy"], 3).await;

    for id in [6, 9] {
        let (status, json) = common::post_json(
            app.clone(),
            "/api/pick",
            &json!({ "id": id, "pick": "Candy" }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "draft_not_found");
    }
}

#[tokio::test]
async fn test_pick_rejects_missing_or_empty_pick() {
    let app = common::build_test_app();
    common::create_draft(&app, &["Henna", "Chung_2"], &["Fruits", "Candy"], 3).await;

    for body in [
        json!({ "id": 0 }),
        json!({ "id": 0, "pick": null }),
        json!({ "id": 0, "pick": "" }),
    ] {
        let (status, json) = common::post_json(app.clone(), "/api/pick", &body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "body = {body}");
        assert_eq!(json["error"], "invalid_input");
    }
}

#[tokio::test]
async fn test_pick_rejects_unknown_option_without_mutating() {
    let app = common::build_test_app();
    let created = common::create_draft(&app, &["Henna", "Chung_2"], &["Fruits", "Candy"], 3).await;

    for pick in ["DNE", "DNE_2", "candy"] {
        let (status, json) = common::post_json(
            app.clone(),
            "/api/pick",
            &json!({ "id": 0, "pick": pick }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "unknown_option");
    }

    let (_, loaded) = common::get_json(app, "/api/load?id=0").await;
    assert_eq!(loaded["draft"], created);
}

#[tokio::test]
async fn test_pick_after_rounds_exhausted_is_rejected() {
    let app = common::build_test_app();
    common::create_draft(&app, &["A", "B"], &["1", "2", "3", "4"], 1).await;

    for pick in ["1", "2"] {
        let (status, _) =
            common::post_json(app.clone(), "/api/pick", &json!({ "id": 0, "pick": pick })).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, json) =
        common::post_json(app.clone(), "/api/pick", &json!({ "id": 0, "pick": "3" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "draft_complete");

    let (_, loaded) = common::get_json(app, "/api/load?id=0").await;
    assert_eq!(loaded["draft"]["options"], json!(["3", "4"]));
    assert_eq!(loaded["draft"]["rounds"], 0);
    assert_eq!(loaded["draft"]["isComplete"], true);
}

#[tokio::test]
async fn test_open_policy_accepts_pick_from_any_claimed_name() {
    let app = common::build_test_app();
    common::create_draft(&app, &["A", "B"], &["X", "Y", "Z"], 2).await;

    let (status, json) = common::post_json(
        app,
        "/api/pick",
        &json!({ "id": 0, "picker": "Mallory", "pick": "X" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["draft"]["picked"], json!(["A X 1"]));
}

#[tokio::test]
async fn test_enforced_policy_requires_current_picker() {
    let app = common::build_test_app_with(
        Arc::new(InMemoryDraftRepository::new()),
        TurnPolicy::Enforced,
    );
    common::create_draft(&app, &["A", "B"], &["X", "Y", "Z"], 2).await;

    let (status, json) = common::post_json(
        app.clone(),
        "/api/pick",
        &json!({ "id": 0, "picker": "B", "pick": "X" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "not_your_turn");

    let (status, json) = common::post_json(
        app,
        "/api/pick",
        &json!({ "id": 0, "picker": "A", "pick": "X" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["draft"]["picker"], "B");
}
