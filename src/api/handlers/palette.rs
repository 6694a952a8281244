use actix_web::{get, HttpResponse, Responder};

use crate::logic::palette::{all_templates, ElementTemplate};

/// GET /api/palette
/// Returns the element templates offered by the canvas palette.
#[utoipa::path(
    get,
    path = "/api/palette",
    tag = "palette",
    responses((status = 200, description = "Element templates", body = [ElementTemplate]))
)]
#[get("/palette")]
pub async fn list_palette() -> impl Responder {
    HttpResponse::Ok().json(all_templates())
}
