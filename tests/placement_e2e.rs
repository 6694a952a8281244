use actix_web::{test, web, App};
use allotment::{
    api::{routes::configure, AppState},
    config::Config,
    error::json_config,
};

fn build_app(
    state: web::Data<AppState>,
) -> actix_web::App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .app_data(json_config())
        .configure(configure)
}

/// Garden with the canonical layout: a bed at (3,3), beds at (6,6) and (3,6),
/// and a background covering the whole plot. All beds are 2×2 cells.
fn seed_body() -> serde_json::Value {
    serde_json::json!({
        "name": "Allotment 12",
        "dimensions": { "width": 15.0, "height": 15.0 },
        "elements": [
            { "type": "raisedBed", "position": { "x": 3, "y": 3 }, "dimensions": { "width": 2, "height": 2 } },
            { "type": "raisedBed", "position": { "x": 6, "y": 6 }, "dimensions": { "width": 2, "height": 2 } },
            { "type": "flatBed", "x": 3, "y": 6, "width": 2, "height": 2 },
            { "type": "background", "position": { "x": 0, "y": 0 }, "dimensions": { "width": 50, "height": 50 } }
        ]
    })
}

/// Garden id and server-assigned element ids, in insertion order.
fn seeded_ids(body: &serde_json::Value) -> (String, Vec<String>) {
    let garden_id = body["payload"]["id"].as_str().unwrap().to_string();
    let ids = body["payload"]["elements"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_str().unwrap().to_string())
        .collect();
    (garden_id, ids)
}

fn drop_at(element_id: &str, x: f64, y: f64) -> serde_json::Value {
    serde_json::json!({ "elementId": element_id, "x": x, "y": y, "gridSize": 30 })
}

// ---------------------------------------------------------------------------
// Scenario 1: live drag preview never changes the garden
// ---------------------------------------------------------------------------
#[actix_web::test]
async fn scenario_check_reports_collision_without_moving() {
    let app = test::init_service(build_app(web::Data::new(AppState::new(Config::default())))).await;
    let req = test::TestRequest::post()
        .uri("/api/gardens")
        .set_json(seed_body())
        .to_request();
    let (garden_id, ids) = seeded_ids(&test::call_and_read_body_json(&app, req).await);

    let req = test::TestRequest::post()
        .uri(&format!("/api/gardens/{garden_id}/placement/check"))
        .set_json(drop_at(&ids[0], 150.0, 150.0))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["payload"]["collides"], true);
    assert_eq!(body["payload"]["collidingIds"], serde_json::json!([ids[1]]));
    assert!(body["payload"].get("gridPosition").is_none());

    let req = test::TestRequest::get()
        .uri(&format!("/api/gardens/{garden_id}"))
        .to_request();
    let garden: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(garden["payload"]["elements"][0]["position"]["x"], 3.0);
}

// ---------------------------------------------------------------------------
// Scenario 2: a free drop is accepted and snapped to the grid
// ---------------------------------------------------------------------------
#[actix_web::test]
async fn scenario_free_drop_moves_element() {
    let app = test::init_service(build_app(web::Data::new(AppState::new(Config::default())))).await;
    let req = test::TestRequest::post()
        .uri("/api/gardens")
        .set_json(seed_body())
        .to_request();
    let (garden_id, ids) = seeded_ids(&test::call_and_read_body_json(&app, req).await);

    let req = test::TestRequest::post()
        .uri(&format!("/api/gardens/{garden_id}/placement/move"))
        .set_json(drop_at(&ids[0], 242.0, 238.0))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["payload"]["gridPosition"], serde_json::json!({ "x": 8.0, "y": 8.0 }));

    let req = test::TestRequest::get()
        .uri(&format!("/api/gardens/{garden_id}"))
        .to_request();
    let garden: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        garden["payload"]["elements"][0]["position"],
        serde_json::json!({ "x": 8.0, "y": 8.0 })
    );
}

// ---------------------------------------------------------------------------
// Scenario 3: a colliding drop is refused with 409
// ---------------------------------------------------------------------------
#[actix_web::test]
async fn scenario_colliding_drop_is_refused() {
    let app = test::init_service(build_app(web::Data::new(AppState::new(Config::default())))).await;
    let req = test::TestRequest::post()
        .uri("/api/gardens")
        .set_json(seed_body())
        .to_request();
    let (garden_id, ids) = seeded_ids(&test::call_and_read_body_json(&app, req).await);

    let req = test::TestRequest::post()
        .uri(&format!("/api/gardens/{garden_id}/placement/move"))
        .set_json(drop_at(&ids[0], 150.0, 150.0))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 409);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(!body["error"].as_str().unwrap_or("").is_empty());
}

// ---------------------------------------------------------------------------
// Scenario 4: background and self never block a drop; edge contact is allowed
// ---------------------------------------------------------------------------
#[actix_web::test]
async fn scenario_background_self_and_adjacent_drops_are_allowed() {
    let app = test::init_service(build_app(web::Data::new(AppState::new(Config::default())))).await;
    let req = test::TestRequest::post()
        .uri("/api/gardens")
        .set_json(seed_body())
        .to_request();
    let (garden_id, ids) = seeded_ids(&test::call_and_read_body_json(&app, req).await);

    // (30, 30) sits on the background only; (90, 90) is the element's own cell;
    // (120, 120) touches the bed at (6, 6) at a corner and the one at (3, 6) along an edge.
    for (x, y) in [(30.0, 30.0), (90.0, 90.0), (120.0, 120.0)] {
        let req = test::TestRequest::post()
            .uri(&format!("/api/gardens/{garden_id}/placement/check"))
            .set_json(drop_at(&ids[0], x, y))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["payload"]["collides"], false, "drop at ({x}, {y}) must be free");
    }
}

// ---------------------------------------------------------------------------
// Scenario 5: unknown element or garden
// ---------------------------------------------------------------------------
#[actix_web::test]
async fn scenario_unknown_targets_return_404() {
    let app = test::init_service(build_app(web::Data::new(AppState::new(Config::default())))).await;
    let req = test::TestRequest::post()
        .uri("/api/gardens")
        .set_json(seed_body())
        .to_request();
    let (garden_id, _) = seeded_ids(&test::call_and_read_body_json(&app, req).await);

    let req = test::TestRequest::post()
        .uri(&format!("/api/gardens/{garden_id}/placement/check"))
        .set_json(drop_at("ghost", 0.0, 0.0))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 404);

    let req = test::TestRequest::post()
        .uri("/api/gardens/nope/placement/move")
        .set_json(drop_at("ghost", 0.0, 0.0))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 404);
}
