use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::repository::DieselRepository;
use crate::routes::{base_context, render_template};
use crate::services::reports::show_reports as show_reports_service;

#[get("/reports")]
pub async fn show_reports(
    flash_messages: IncomingFlashMessages,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match show_reports_service(repo.get_ref()) {
        Ok(summary) => {
            let mut context = base_context(&flash_messages, "reports");
            context.insert("title", "Detailed Reports");
            context.insert(
                "total_stock_value",
                &format!("{:.2}", summary.total_stock_value),
            );
            context.insert("summary", &summary);
            render_template(&tera, "reports/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to render reports page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
