use actix_web::{http::Method, post, web, HttpResponse};
use log::info;

use crate::{
    error::PlannerError,
    logic::alerts::derive_alerts,
    models::{
        request::{link, AlertsApiResponse, ApiResponse, ErrorResponse, Links},
        weather::{AlertsRequest, AlertsResponse},
    },
};

/// POST /api/weather/alerts
/// Derives frost, heat, drought, heavy-rain and wind alerts from forecast samples.
#[utoipa::path(
    post,
    path = "/api/weather/alerts",
    tag = "weather",
    request_body = AlertsRequest,
    responses(
        (status = 200, description = "Alerts for the location", body = AlertsApiResponse),
        (status = 400, description = "Missing location", body = ErrorResponse),
    )
)]
#[post("/weather/alerts")]
pub async fn post_alerts(body: web::Json<AlertsRequest>) -> Result<HttpResponse, PlannerError> {
    let request = body.into_inner();
    if request.location.trim().is_empty() {
        return Err(PlannerError::Validation(
            "Please provide a location parameter.".into(),
        ));
    }

    let alerts = derive_alerts(&request.forecast);
    info!(
        "{} alert(s) for '{}' over {} forecast sample(s)",
        alerts.len(),
        request.location,
        request.forecast.len()
    );

    let mut links = Links::new();
    links.insert("self".into(), link("/api/weather/alerts", Method::POST));
    Ok(HttpResponse::Ok().json(ApiResponse::new(
        AlertsResponse {
            location: request.location,
            alerts,
        },
        links,
    )))
}
