use std::collections::HashMap;

use actix_web::http::Method;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use utoipa::{IntoParams, ToSchema};

use crate::models::{
    garden::Garden,
    plant::{CompanionsResponse, Plant, SeasonResponse},
    weather::AlertsResponse,
    Position,
};

/// Serde adapter for `actix_web::http::Method` (serialises as its uppercase string).
mod method_serde {
    use actix_web::http::Method;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(method: &Method, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(method.as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Method, D::Error> {
        let s = String::deserialize(d)?;
        Method::from_bytes(s.as_bytes()).map_err(serde::de::Error::custom)
    }
}

/// A single HAL-style hyperlink.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Link {
    pub href: String,
    #[serde(with = "method_serde")]
    #[schema(value_type = String, example = "GET")]
    pub method: Method,
}

/// Map of relation name → link, serialised as the `_links` field in responses.
pub type Links = HashMap<String, Link>;

pub fn link(href: impl Into<String>, method: Method) -> Link {
    Link {
        href: href.into(),
        method,
    }
}

/// Standard links for a single garden resource.
pub fn garden_links(id: &str) -> Links {
    let mut links = Links::new();
    links.insert("self".into(), link(format!("/api/gardens/{id}"), Method::GET));
    links.insert(
        "elements".into(),
        link(format!("/api/gardens/{id}/elements"), Method::POST),
    );
    links.insert(
        "placement".into(),
        link(format!("/api/gardens/{id}/placement/check"), Method::POST),
    );
    links.insert("collection".into(), link("/api/gardens", Method::GET));
    links
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub total_pages: usize,
}

/// Generic single-item response envelope.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[aliases(
    GardenApiResponse = ApiResponse<Garden>,
    PlacementApiResponse = ApiResponse<PlacementResponse>,
    AlertsApiResponse = ApiResponse<AlertsResponse>,
    PlantApiResponse = ApiResponse<Plant>,
    CompanionsApiResponse = ApiResponse<CompanionsResponse>,
    SeasonApiResponse = ApiResponse<SeasonResponse>
)]
pub struct ApiResponse<T> {
    pub payload: T,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub errors: Vec<String>,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl<T> ApiResponse<T> {
    pub fn new(payload: T, links: Links) -> Self {
        Self {
            payload,
            errors: vec![],
            links,
        }
    }
}

/// Generic paginated list response envelope.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[aliases(
    GardenListResponse = PaginatedResponse<Garden>,
    PlantListResponse = PaginatedResponse<Plant>
)]
pub struct PaginatedResponse<T> {
    pub payload: Vec<T>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub errors: Vec<String>,
    #[serde(rename = "_links")]
    pub links: Links,
    pub pagination: Pagination,
}

impl<T> PaginatedResponse<T> {
    pub fn new(payload: Vec<T>, links: Links, pagination: Pagination) -> Self {
        Self {
            payload,
            errors: vec![],
            links,
            pagination,
        }
    }
}

pub const DEFAULT_PER_PAGE: usize = 20;

/// Query string of `GET /api/gardens`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// 1-based page number (default 1).
    pub page: Option<usize>,
    /// Items per page (default 20).
    pub per_page: Option<usize>,
}

impl Pagination {
    /// Clamps the requested page into range and returns it with the slice bounds.
    pub fn for_query(query: &ListQuery, total: usize) -> (Self, std::ops::Range<usize>) {
        let per_page = query.per_page.filter(|n| *n > 0).unwrap_or(DEFAULT_PER_PAGE);
        let total_pages = total.div_ceil(per_page).max(1);
        let page = query.page.unwrap_or(1).clamp(1, total_pages);
        let start = ((page - 1) * per_page).min(total);
        let end = (start + per_page).min(total);
        (
            Self {
                page,
                per_page,
                total,
                total_pages,
            },
            start..end,
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Proposed drop of an element at a pixel position on the canvas.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlacementRequest {
    pub element_id: String,
    /// Proposed top-left corner, in canvas pixels.
    pub x: f64,
    pub y: f64,
    /// Cell size in pixels; the server default applies when omitted.
    pub grid_size: Option<f64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlacementResponse {
    pub element_id: String,
    pub collides: bool,
    /// Snapped grid position the element would occupy; absent on collision.
    pub grid_position: Option<Position>,
    pub colliding_ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: Option<usize>, per_page: Option<usize>) -> ListQuery {
        ListQuery { page, per_page }
    }

    #[test]
    fn test_pagination_defaults() {
        let (p, range) = Pagination::for_query(&ListQuery::default(), 3);
        assert_eq!((p.page, p.per_page, p.total, p.total_pages), (1, DEFAULT_PER_PAGE, 3, 1));
        assert_eq!(range, 0..3);
    }

    #[test]
    fn test_pagination_last_partial_page() {
        let (p, range) = Pagination::for_query(&query(Some(3), Some(2)), 5);
        assert_eq!(p.total_pages, 3);
        assert_eq!(range, 4..5);
    }

    #[test]
    fn test_pagination_clamps_out_of_range_page() {
        let (p, range) = Pagination::for_query(&query(Some(9), Some(2)), 5);
        assert_eq!(p.page, 3);
        assert_eq!(range, 4..5);
        let (p, range) = Pagination::for_query(&query(Some(0), Some(0)), 0);
        assert_eq!((p.page, p.total_pages), (1, 1));
        assert_eq!(range, 0..0);
    }
}
