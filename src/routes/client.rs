use actix_web::http::header;
use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use serde::Deserialize;

use crate::dto::client::ClientDto;
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;
use crate::repository::{ClientListQuery, DieselRepository, SortDirection, SortField};
use crate::services::{ServiceError, client as client_service};

#[derive(Deserialize)]
struct ClientListParams {
    #[serde(default)]
    page: usize,
    #[serde(default = "default_lines_per_page", rename = "linesPerPage")]
    lines_per_page: usize,
    #[serde(default)]
    direction: SortDirection,
    #[serde(default, rename = "orderBy")]
    order_by: SortField,
}

fn default_lines_per_page() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

#[get("/clients")]
pub async fn list_clients(
    params: web::Query<ClientListParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let params = params.into_inner();
    let query = ClientListQuery::new()
        .paginate(params.page, params.lines_per_page)
        .order_by(params.order_by)
        .direction(params.direction);

    match client_service::find_all_paged(repo.get_ref(), query) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => {
            log::error!("Failed to list clients: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/clients/{client_id}")]
pub async fn get_client(
    client_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match client_service::find_by_id(repo.get_ref(), client_id.into_inner()) {
        Ok(dto) => HttpResponse::Ok().json(dto),
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Failed to get client: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/clients")]
pub async fn create_client(
    web::Json(dto): web::Json<ClientDto>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match client_service::insert(repo.get_ref(), &dto) {
        Ok(created) => {
            let location = match created.id {
                Some(id) => format!("/clients/{id}"),
                None => "/clients".to_string(),
            };
            HttpResponse::Created()
                .insert_header((header::LOCATION, location))
                .json(created)
        }
        Err(err) => {
            log::error!("Failed to create client: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[put("/clients/{client_id}")]
pub async fn update_client(
    client_id: web::Path<i32>,
    web::Json(dto): web::Json<ClientDto>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match client_service::update(repo.get_ref(), client_id.into_inner(), &dto) {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Failed to update client: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[delete("/clients/{client_id}")]
pub async fn delete_client(
    client_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match client_service::delete(repo.get_ref(), client_id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(ServiceError::IntegrityViolation(message)) => {
            log::error!("Refusing to delete client: {message}");
            HttpResponse::Conflict().finish()
        }
        Err(err) => {
            log::error!("Failed to delete client: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
