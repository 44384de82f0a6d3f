use actix_web::http::header;
use actix_web::{HttpResponse, web};
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use tera::{Context, Tera};

pub mod api;
pub mod crafts;
pub mod main;
pub mod reports;

/// Register every HTML and JSON route of the service.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(main::index)
        .service(crafts::show_add_craft)
        .service(crafts::add_craft)
        .service(crafts::show_edit_craft)
        .service(crafts::update_craft)
        .service(crafts::delete_craft)
        .service(reports::show_reports)
        .service(
            web::scope("/api")
                .service(api::api_v1_crafts)
                .service(api::api_v1_craft)
                .service(api::api_v1_reports),
        );
}

pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            log::error!("Failed to render template '{template}': {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn base_context(flash_messages: &IncomingFlashMessages, current_page: &str) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_page", current_page);
    context
}

/// `303 See Other` so that a POST is followed by a GET.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}
