use actix_web::{delete, get, http::Method, post, put, web, HttpResponse};

use crate::{
    api::AppState,
    error::PlannerError,
    models::{
        garden::{GardenUpdate, NewGarden},
        request::{
            garden_links, link, ApiResponse, ErrorResponse, GardenApiResponse, GardenListResponse,
            Links, ListQuery, MessageResponse, PaginatedResponse, Pagination,
        },
    },
};

/// GET /api/gardens
/// Lists stored gardens, oldest first, one page at a time.
#[utoipa::path(
    get,
    path = "/api/gardens",
    tag = "gardens",
    params(ListQuery),
    responses((status = 200, description = "A page of gardens", body = GardenListResponse))
)]
#[get("/gardens")]
pub async fn list_gardens(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, PlannerError> {
    let gardens = state.store.list();
    let (pagination, range) = Pagination::for_query(&query, gardens.len());
    let mut links = Links::new();
    links.insert(
        "self".into(),
        link(
            format!(
                "/api/gardens?page={}&perPage={}",
                pagination.page, pagination.per_page
            ),
            Method::GET,
        ),
    );
    links.insert("create".into(), link("/api/gardens", Method::POST));
    let page = gardens[range].to_vec();
    Ok(HttpResponse::Ok().json(PaginatedResponse::new(page, links, pagination)))
}

/// POST /api/gardens
/// Creates a garden; elements in the body receive fresh ids.
#[utoipa::path(
    post,
    path = "/api/gardens",
    tag = "gardens",
    request_body = NewGarden,
    responses(
        (status = 201, description = "Garden created", body = GardenApiResponse),
        (status = 400, description = "Invalid garden", body = ErrorResponse),
    )
)]
#[post("/gardens")]
pub async fn create_garden(
    state: web::Data<AppState>,
    body: web::Json<NewGarden>,
) -> Result<HttpResponse, PlannerError> {
    let garden = state.store.create(body.into_inner())?;
    let links = garden_links(&garden.id);
    Ok(HttpResponse::Created().json(ApiResponse::new(garden, links)))
}

/// GET /api/gardens/{id}
#[utoipa::path(
    get,
    path = "/api/gardens/{id}",
    tag = "gardens",
    params(("id" = String, Path, description = "Garden id")),
    responses(
        (status = 200, description = "The garden", body = GardenApiResponse),
        (status = 404, description = "Unknown garden", body = ErrorResponse),
    )
)]
#[get("/gardens/{id}")]
pub async fn get_garden(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, PlannerError> {
    let garden = state.store.get(&path)?;
    let links = garden_links(&garden.id);
    Ok(HttpResponse::Ok().json(ApiResponse::new(garden, links)))
}

/// PUT /api/gardens/{id}
/// Partial update: fields missing from the body are left as they are.
#[utoipa::path(
    put,
    path = "/api/gardens/{id}",
    tag = "gardens",
    params(("id" = String, Path, description = "Garden id")),
    request_body = GardenUpdate,
    responses(
        (status = 200, description = "Updated garden", body = GardenApiResponse),
        (status = 400, description = "Invalid update", body = ErrorResponse),
        (status = 404, description = "Unknown garden", body = ErrorResponse),
    )
)]
#[put("/gardens/{id}")]
pub async fn update_garden(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<GardenUpdate>,
) -> Result<HttpResponse, PlannerError> {
    let garden = state.store.update(&path, body.into_inner())?;
    let links = garden_links(&garden.id);
    Ok(HttpResponse::Ok().json(ApiResponse::new(garden, links)))
}

/// DELETE /api/gardens/{id}
#[utoipa::path(
    delete,
    path = "/api/gardens/{id}",
    tag = "gardens",
    params(("id" = String, Path, description = "Garden id")),
    responses(
        (status = 200, description = "Garden removed", body = MessageResponse),
        (status = 404, description = "Unknown garden", body = ErrorResponse),
    )
)]
#[delete("/gardens/{id}")]
pub async fn delete_garden(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, PlannerError> {
    state.store.delete(&path)?;
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Garden removed".into(),
    }))
}
