use actix_web::{delete, get, http::Method, post, put, web, HttpResponse};
use log::debug;

use crate::{
    api::AppState,
    error::PlannerError,
    logic::filter::parse_month,
    models::{
        plant::{NewPlant, PlantQuery, PlantUpdate, SeasonResponse},
        request::{
            link, ApiResponse, CompanionsApiResponse, ErrorResponse, Links, ListQuery,
            MessageResponse, PaginatedResponse, Pagination, PlantApiResponse, PlantListResponse,
            SeasonApiResponse,
        },
    },
};

fn plant_links(id: &str) -> Links {
    let mut links = Links::new();
    links.insert("self".into(), link(format!("/api/plants/{id}"), Method::GET));
    links.insert(
        "companions".into(),
        link(format!("/api/plants/{id}/companions"), Method::GET),
    );
    links.insert("collection".into(), link("/api/plants", Method::GET));
    links
}

/// GET /api/plants
/// Lists public catalogue plants by name, filtered by keyword and type.
#[utoipa::path(
    get,
    path = "/api/plants",
    tag = "plants",
    params(PlantQuery),
    responses((status = 200, description = "A page of plants", body = PlantListResponse))
)]
#[get("/plants")]
pub async fn list_plants(
    state: web::Data<AppState>,
    query: web::Query<PlantQuery>,
) -> Result<HttpResponse, PlannerError> {
    let plants = state.plants.list(&query);
    let paging = ListQuery {
        page: query.page,
        per_page: query.per_page,
    };
    let (pagination, range) = Pagination::for_query(&paging, plants.len());
    let mut links = Links::new();
    links.insert(
        "self".into(),
        link(
            format!(
                "/api/plants?page={}&perPage={}",
                pagination.page, pagination.per_page
            ),
            Method::GET,
        ),
    );
    links.insert("create".into(), link("/api/plants", Method::POST));
    let page = plants[range].to_vec();
    Ok(HttpResponse::Ok().json(PaginatedResponse::new(page, links, pagination)))
}

/// GET /api/plants/season/{month}
/// Public plants that can be sown or harvested in the given month (1-12).
#[utoipa::path(
    get,
    path = "/api/plants/season/{month}",
    tag = "plants",
    params(("month" = String, Path, description = "Month number, 1 to 12")),
    responses(
        (status = 200, description = "Plants in season", body = SeasonApiResponse),
        (status = 400, description = "Month outside 1-12", body = ErrorResponse),
    )
)]
#[get("/plants/season/{month}")]
pub async fn plants_in_season(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, PlannerError> {
    let month = parse_month(&path)?;
    let plants = state.plants.in_season(month);
    debug!("{} plant(s) in season for month {month}", plants.len());
    let mut links = Links::new();
    links.insert(
        "self".into(),
        link(format!("/api/plants/season/{month}"), Method::GET),
    );
    links.insert("collection".into(), link("/api/plants", Method::GET));
    Ok(HttpResponse::Ok().json(ApiResponse::new(SeasonResponse { month, plants }, links)))
}

/// GET /api/plants/{id}
#[utoipa::path(
    get,
    path = "/api/plants/{id}",
    tag = "plants",
    params(("id" = String, Path, description = "Plant id")),
    responses(
        (status = 200, description = "The plant", body = PlantApiResponse),
        (status = 404, description = "Unknown plant", body = ErrorResponse),
    )
)]
#[get("/plants/{id}")]
pub async fn get_plant(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, PlannerError> {
    let plant = state.plants.get(&path)?;
    let links = plant_links(&plant.id);
    Ok(HttpResponse::Ok().json(ApiResponse::new(plant, links)))
}

/// GET /api/plants/{id}/companions
/// Good and bad companions of a plant, resolved against the catalogue.
#[utoipa::path(
    get,
    path = "/api/plants/{id}/companions",
    tag = "plants",
    params(("id" = String, Path, description = "Plant id")),
    responses(
        (status = 200, description = "Companion lists", body = CompanionsApiResponse),
        (status = 404, description = "Unknown plant", body = ErrorResponse),
    )
)]
#[get("/plants/{id}/companions")]
pub async fn get_companions(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, PlannerError> {
    let id = path.into_inner();
    let companions = state.plants.companions(&id)?;
    let mut links = Links::new();
    links.insert(
        "self".into(),
        link(format!("/api/plants/{id}/companions"), Method::GET),
    );
    links.insert("plant".into(), link(format!("/api/plants/{id}"), Method::GET));
    Ok(HttpResponse::Ok().json(ApiResponse::new(companions, links)))
}

/// POST /api/plants
#[utoipa::path(
    post,
    path = "/api/plants",
    tag = "plants",
    request_body = NewPlant,
    responses(
        (status = 201, description = "Plant created", body = PlantApiResponse),
        (status = 400, description = "Invalid plant", body = ErrorResponse),
    )
)]
#[post("/plants")]
pub async fn create_plant(
    state: web::Data<AppState>,
    body: web::Json<NewPlant>,
) -> Result<HttpResponse, PlannerError> {
    let plant = state.plants.create(body.into_inner())?;
    let links = plant_links(&plant.id);
    Ok(HttpResponse::Created().json(ApiResponse::new(plant, links)))
}

/// PUT /api/plants/{id}
/// Partial update: fields missing from the body are left as they are.
#[utoipa::path(
    put,
    path = "/api/plants/{id}",
    tag = "plants",
    params(("id" = String, Path, description = "Plant id")),
    request_body = PlantUpdate,
    responses(
        (status = 200, description = "Updated plant", body = PlantApiResponse),
        (status = 400, description = "Invalid update", body = ErrorResponse),
        (status = 404, description = "Unknown plant", body = ErrorResponse),
    )
)]
#[put("/plants/{id}")]
pub async fn update_plant(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<PlantUpdate>,
) -> Result<HttpResponse, PlannerError> {
    let plant = state.plants.update(&path, body.into_inner())?;
    let links = plant_links(&plant.id);
    Ok(HttpResponse::Ok().json(ApiResponse::new(plant, links)))
}

/// DELETE /api/plants/{id}
#[utoipa::path(
    delete,
    path = "/api/plants/{id}",
    tag = "plants",
    params(("id" = String, Path, description = "Plant id")),
    responses(
        (status = 200, description = "Plant removed", body = MessageResponse),
        (status = 404, description = "Unknown plant", body = ErrorResponse),
    )
)]
#[delete("/plants/{id}")]
pub async fn delete_plant(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, PlannerError> {
    state.plants.delete(&path)?;
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Plant removed".into(),
    }))
}
