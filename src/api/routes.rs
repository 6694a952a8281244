use actix_web::web;

use crate::api::handlers::{
    elements::{add_element, delete_element, update_element},
    gardens::{create_garden, delete_garden, get_garden, list_gardens, update_garden},
    palette::list_palette,
    placement::{check_placement, move_element},
    plants::{
        create_plant, delete_plant, get_companions, get_plant, list_plants, plants_in_season,
        update_plant,
    },
    weather::post_alerts,
};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(list_gardens)
            .service(create_garden)
            .service(get_garden)
            .service(update_garden)
            .service(delete_garden)
            .service(add_element)
            .service(update_element)
            .service(delete_element)
            .service(check_placement)
            .service(move_element)
            .service(list_plants)
            .service(plants_in_season)
            .service(get_plant)
            .service(get_companions)
            .service(create_plant)
            .service(update_plant)
            .service(delete_plant)
            .service(list_palette)
            .service(post_alerts),
    );
}
