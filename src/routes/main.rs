use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::dto::crafts::CraftDto;
use crate::repository::DieselRepository;
use crate::routes::{base_context, render_template};
use crate::services::main::show_index as show_index_service;

#[get("/")]
pub async fn index(
    flash_messages: IncomingFlashMessages,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match show_index_service(repo.get_ref()) {
        Ok(crafts) => {
            let crafts: Vec<CraftDto> = crafts.into_iter().map(CraftDto::from).collect();
            let mut context = base_context(&flash_messages, "index");
            context.insert("title", "All Crafts");
            context.insert("crafts", &crafts);
            render_template(&tera, "main/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to render index page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
