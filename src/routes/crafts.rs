use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::dto::crafts::CraftDto;
use crate::forms::crafts::{CraftForm, CraftFormPayload};
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::crafts::{
    add_craft as add_craft_service, delete_craft as delete_craft_service,
    show_craft as show_craft_service, update_craft as update_craft_service,
};

fn render_craft_form(
    tera: &Tera,
    flash_messages: &IncomingFlashMessages,
    title: &str,
    action: &str,
    craft: Option<CraftDto>,
) -> HttpResponse {
    let mut context = base_context(flash_messages, "crafts");
    context.insert("title", title);
    context.insert("action", action);
    context.insert("craft", &craft);
    render_template(tera, "crafts/form.html", &context)
}

#[get("/crafts/add")]
pub async fn show_add_craft(
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    render_craft_form(&tera, &flash_messages, "Add New Craft", "/crafts/add", None)
}

#[post("/crafts/add")]
pub async fn add_craft(
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<CraftForm>,
) -> impl Responder {
    let payload: CraftFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => {
            FlashMessage::error(e.to_string()).send();
            return redirect("/crafts/add");
        }
    };

    match add_craft_service(payload, repo.get_ref()) {
        Ok(craft) => {
            FlashMessage::success(format!("Craft '{}' was successfully added!", craft.name)).send()
        }
        Err(ServiceError::Form(message)) | Err(ServiceError::TypeConstraint(message)) => {
            FlashMessage::error(message).send();
            return redirect("/crafts/add");
        }
        Err(err) => {
            log::error!("Failed to add craft: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    }

    redirect("/")
}

#[get("/crafts/{craft_id}/edit")]
pub async fn show_edit_craft(
    craft_id: web::Path<i32>,
    flash_messages: IncomingFlashMessages,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let craft_id = craft_id.into_inner();

    match show_craft_service(craft_id, repo.get_ref()) {
        Ok(craft) => render_craft_form(
            &tera,
            &flash_messages,
            "Edit Craft",
            &format!("/crafts/{craft_id}/edit"),
            Some(craft.into()),
        ),
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Failed to render edit form: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/crafts/{craft_id}/edit")]
pub async fn update_craft(
    craft_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<CraftForm>,
) -> impl Responder {
    let craft_id = craft_id.into_inner();
    let edit_url = format!("/crafts/{craft_id}/edit");

    let payload: CraftFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => {
            FlashMessage::error(e.to_string()).send();
            return redirect(&edit_url);
        }
    };

    match update_craft_service(craft_id, payload, repo.get_ref()) {
        Ok(craft) => {
            FlashMessage::success(format!("Craft '{}' was successfully updated!", craft.name))
                .send()
        }
        Err(ServiceError::NotFound) => FlashMessage::error("Craft not found.").send(),
        Err(ServiceError::Form(message)) | Err(ServiceError::TypeConstraint(message)) => {
            FlashMessage::error(message).send();
            return redirect(&edit_url);
        }
        Err(err) => {
            log::error!("Failed to update craft: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    }

    redirect("/")
}

#[post("/crafts/{craft_id}/delete")]
pub async fn delete_craft(
    craft_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match delete_craft_service(craft_id.into_inner(), repo.get_ref()) {
        Ok(craft) => {
            FlashMessage::success(format!("Craft '{}' was successfully deleted.", craft.name))
                .send()
        }
        Err(ServiceError::NotFound) => FlashMessage::error("Craft not found.").send(),
        Err(err) => {
            log::error!("Failed to delete craft: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    }

    redirect("/")
}
