use utoipa::OpenApi;

use crate::{
    logic::palette::{ElementTemplate, PaletteCategory},
    models::{
        element::{ElementType, GardenElement, PlantDetails, PlantStatus, StructureDetails},
        garden::{Garden, GardenUpdate, NewGarden, PlotDimensions, WeatherData},
        plant::{
            CareInstructions, CompanionInfo, CompanionPlant, CompanionsResponse, GrowingInfo,
            MonthDay, NewPlant, Period, Plant, PlantImage, PlantType, PlantUpdate, Relationship,
            SeasonResponse, Spacing, SunRequirement, ValueRange, WateringNeeds,
        },
        request::{
            AlertsApiResponse, CompanionsApiResponse, ErrorResponse, GardenApiResponse,
            GardenListResponse, Link, MessageResponse, Pagination, PlacementApiResponse,
            PlacementRequest, PlacementResponse, PlantApiResponse, PlantListResponse,
            SeasonApiResponse,
        },
        weather::{Alert, AlertKind, AlertsRequest, AlertsResponse, ForecastSample, Severity},
        Dimensions, Position,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Allotment Planner API",
        description = "Garden layout planner: store garden plots and their elements, browse a plant catalogue, check and commit drag-and-drop placements on the layout grid, and derive gardening alerts from weather forecasts.",
        version = "1.0.0",
        license(name = "MIT"),
    ),
    paths(
        crate::api::handlers::gardens::list_gardens,
        crate::api::handlers::gardens::create_garden,
        crate::api::handlers::gardens::get_garden,
        crate::api::handlers::gardens::update_garden,
        crate::api::handlers::gardens::delete_garden,
        crate::api::handlers::elements::add_element,
        crate::api::handlers::elements::update_element,
        crate::api::handlers::elements::delete_element,
        crate::api::handlers::placement::check_placement,
        crate::api::handlers::placement::move_element,
        crate::api::handlers::plants::list_plants,
        crate::api::handlers::plants::plants_in_season,
        crate::api::handlers::plants::get_plant,
        crate::api::handlers::plants::get_companions,
        crate::api::handlers::plants::create_plant,
        crate::api::handlers::plants::update_plant,
        crate::api::handlers::plants::delete_plant,
        crate::api::handlers::palette::list_palette,
        crate::api::handlers::weather::post_alerts,
    ),
    components(
        schemas(
            // Geometry
            Position, Dimensions,
            // Elements
            ElementType, PlantStatus, PlantDetails, StructureDetails, GardenElement,
            // Gardens
            PlotDimensions, WeatherData, Garden, NewGarden, GardenUpdate,
            // Placement
            PlacementRequest, PlacementResponse,
            // Plant catalogue
            PlantType, SunRequirement, WateringNeeds, ValueRange, Spacing, GrowingInfo,
            MonthDay, Period, Relationship, CompanionPlant, CareInstructions, PlantImage,
            Plant, NewPlant, PlantUpdate, CompanionInfo, CompanionsResponse, SeasonResponse,
            // Palette
            PaletteCategory, ElementTemplate,
            // Weather
            ForecastSample, AlertsRequest, AlertKind, Severity, Alert, AlertsResponse,
            // Shared
            Link, Pagination, ErrorResponse, MessageResponse,
            // Concrete response envelopes (via #[aliases])
            GardenApiResponse,
            GardenListResponse,
            PlacementApiResponse,
            AlertsApiResponse,
            PlantApiResponse,
            PlantListResponse,
            CompanionsApiResponse,
            SeasonApiResponse,
        )
    ),
    tags(
        (name = "gardens",   description = "Garden plots and their metadata"),
        (name = "elements",  description = "Elements placed inside a garden"),
        (name = "placement", description = "Collision-checked drag and drop on the layout grid"),
        (name = "plants",    description = "Plant catalogue with seasons and companions"),
        (name = "palette",   description = "Element templates for the canvas palette"),
        (name = "weather",   description = "Gardening alerts derived from forecast data"),
    )
)]
pub struct ApiDoc;
