use actix_web::{HttpResponse, Responder, get, web};

use crate::repository::DieselRepository;
use crate::services::ServiceError;
use crate::services::crafts::show_craft;
use crate::services::main::show_index;
use crate::services::reports::show_reports;

#[get("/v1/crafts")]
pub async fn api_v1_crafts(repo: web::Data<DieselRepository>) -> impl Responder {
    match show_index(repo.get_ref()) {
        Ok(crafts) => HttpResponse::Ok().json(crafts),
        Err(_) => HttpResponse::InternalServerError().finish(),
    }
}

#[get("/v1/crafts/{craft_id}")]
pub async fn api_v1_craft(
    craft_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match show_craft(craft_id.into_inner(), repo.get_ref()) {
        Ok(craft) => HttpResponse::Ok().json(craft),
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(_) => HttpResponse::InternalServerError().finish(),
    }
}

#[get("/v1/reports")]
pub async fn api_v1_reports(repo: web::Data<DieselRepository>) -> impl Responder {
    match show_reports(repo.get_ref()) {
        Ok(summary) => HttpResponse::Ok().json(summary),
        Err(_) => HttpResponse::InternalServerError().finish(),
    }
}
