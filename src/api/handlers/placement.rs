use actix_web::{http::Method, post, web, HttpResponse};

use crate::{
    api::AppState,
    error::PlannerError,
    logic::{geometry::Point, placement::MoveOutcome},
    models::request::{
        link, ApiResponse, ErrorResponse, Links, PlacementApiResponse, PlacementRequest,
        PlacementResponse,
    },
};

fn placement_links(garden_id: &str) -> Links {
    let mut links = Links::new();
    links.insert(
        "check".into(),
        link(format!("/api/gardens/{garden_id}/placement/check"), Method::POST),
    );
    links.insert(
        "move".into(),
        link(format!("/api/gardens/{garden_id}/placement/move"), Method::POST),
    );
    links.insert("garden".into(), link(format!("/api/gardens/{garden_id}"), Method::GET));
    links
}

fn cell_size(state: &AppState, request: &PlacementRequest) -> f64 {
    request.grid_size.unwrap_or(state.config.grid_size)
}

/// POST /api/gardens/{id}/placement/check
/// Reports whether dropping an element at a pixel position would collide.
/// Nothing is stored, so clients may call it on every drag frame.
#[utoipa::path(
    post,
    path = "/api/gardens/{id}/placement/check",
    tag = "placement",
    params(("id" = String, Path, description = "Garden id")),
    request_body = PlacementRequest,
    responses(
        (status = 200, description = "Collision verdict", body = PlacementApiResponse),
        (status = 404, description = "Unknown garden or element", body = ErrorResponse),
    )
)]
#[post("/gardens/{id}/placement/check")]
pub async fn check_placement(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<PlacementRequest>,
) -> Result<HttpResponse, PlannerError> {
    let garden_id = path.into_inner();
    let request = body.into_inner();
    let outcome = state.store.check_placement(
        &garden_id,
        &request.element_id,
        Point::new(request.x, request.y),
        cell_size(&state, &request),
    )?;
    let response = match outcome {
        MoveOutcome::Accepted { grid_position } => PlacementResponse {
            element_id: request.element_id,
            collides: false,
            grid_position: Some(grid_position),
            colliding_ids: vec![],
        },
        MoveOutcome::Rejected { colliding } => PlacementResponse {
            element_id: request.element_id,
            collides: true,
            grid_position: None,
            colliding_ids: colliding,
        },
    };
    Ok(HttpResponse::Ok().json(ApiResponse::new(response, placement_links(&garden_id))))
}

/// POST /api/gardens/{id}/placement/move
/// Moves an element to the snapped grid cell under the drop point, unless it would overlap.
#[utoipa::path(
    post,
    path = "/api/gardens/{id}/placement/move",
    tag = "placement",
    params(("id" = String, Path, description = "Garden id")),
    request_body = PlacementRequest,
    responses(
        (status = 200, description = "Element moved", body = PlacementApiResponse),
        (status = 404, description = "Unknown garden or element", body = ErrorResponse),
        (status = 409, description = "Drop would overlap another element", body = ErrorResponse),
    )
)]
#[post("/gardens/{id}/placement/move")]
pub async fn move_element(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<PlacementRequest>,
) -> Result<HttpResponse, PlannerError> {
    let garden_id = path.into_inner();
    let request = body.into_inner();
    let grid_position = state.store.move_element(
        &garden_id,
        &request.element_id,
        Point::new(request.x, request.y),
        cell_size(&state, &request),
    )?;
    let response = PlacementResponse {
        element_id: request.element_id,
        collides: false,
        grid_position: Some(grid_position),
        colliding_ids: vec![],
    };
    Ok(HttpResponse::Ok().json(ApiResponse::new(response, placement_links(&garden_id))))
}
