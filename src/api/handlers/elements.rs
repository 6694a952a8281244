use actix_web::{delete, post, put, web, HttpResponse};
use log::debug;

use crate::{
    api::AppState,
    error::PlannerError,
    models::{
        element::GardenElement,
        request::{garden_links, ApiResponse, ErrorResponse, GardenApiResponse},
    },
};

/// POST /api/gardens/{id}/elements
/// Adds an element. Geometry may be nested or flat; a fresh id is assigned.
#[utoipa::path(
    post,
    path = "/api/gardens/{id}/elements",
    tag = "elements",
    params(("id" = String, Path, description = "Garden id")),
    request_body = GardenElement,
    responses(
        (status = 201, description = "Element added; the updated garden", body = GardenApiResponse),
        (status = 404, description = "Unknown garden", body = ErrorResponse),
    )
)]
#[post("/gardens/{id}/elements")]
pub async fn add_element(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<GardenElement>,
) -> Result<HttpResponse, PlannerError> {
    let (garden, element) = state.store.add_element(&path, body.into_inner())?;
    debug!("added {:?} '{}' to garden {}", element.kind, element.id, garden.id);
    let links = garden_links(&garden.id);
    Ok(HttpResponse::Created().json(ApiResponse::new(garden, links)))
}

/// PUT /api/gardens/{id}/elements/{element_id}
/// Merges the body into the stored element; its id never changes.
#[utoipa::path(
    put,
    path = "/api/gardens/{id}/elements/{element_id}",
    tag = "elements",
    params(
        ("id" = String, Path, description = "Garden id"),
        ("element_id" = String, Path, description = "Element id"),
    ),
    request_body(content = GardenElement, description = "Any subset of element fields"),
    responses(
        (status = 200, description = "The updated garden", body = GardenApiResponse),
        (status = 400, description = "Malformed element", body = ErrorResponse),
        (status = 404, description = "Unknown garden or element", body = ErrorResponse),
    )
)]
#[put("/gardens/{id}/elements/{element_id}")]
pub async fn update_element(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    body: web::Json<serde_json::Value>,
) -> Result<HttpResponse, PlannerError> {
    let (garden_id, element_id) = path.into_inner();
    let garden = state
        .store
        .update_element(&garden_id, &element_id, body.into_inner())?;
    let links = garden_links(&garden.id);
    Ok(HttpResponse::Ok().json(ApiResponse::new(garden, links)))
}

/// DELETE /api/gardens/{id}/elements/{element_id}
#[utoipa::path(
    delete,
    path = "/api/gardens/{id}/elements/{element_id}",
    tag = "elements",
    params(
        ("id" = String, Path, description = "Garden id"),
        ("element_id" = String, Path, description = "Element id"),
    ),
    responses(
        (status = 200, description = "The updated garden", body = GardenApiResponse),
        (status = 404, description = "Unknown garden or element", body = ErrorResponse),
    )
)]
#[delete("/gardens/{id}/elements/{element_id}")]
pub async fn delete_element(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, PlannerError> {
    let (garden_id, element_id) = path.into_inner();
    let garden = state.store.delete_element(&garden_id, &element_id)?;
    let links = garden_links(&garden.id);
    Ok(HttpResponse::Ok().json(ApiResponse::new(garden, links)))
}
