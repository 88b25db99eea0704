use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::errors::responses::{
    BadRequestValidationResponse, ConflictResponse, InternalServerErrorResponse, NotFoundResponse,
};
use chrono::NaiveDate;
use database::{Page, PageRequest};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::{IntoParams, OpenApi};

use crate::error::ClientResult;
use crate::models::{Client, ClientFilter, CreateClient, UpdateClient};
use crate::repository::ClientRepository;
use crate::service::ClientService;

/// OpenAPI documentation for the Clients API
#[derive(OpenApi)]
#[openapi(
    paths(list_clients, register_client, get_client, update_client, delete_client),
    components(
        schemas(Client, CreateClient, UpdateClient, Page<Client>),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "clients", description = "Client registration endpoints")
    )
)]
pub struct ApiDoc;

/// Query parameters for the client listing
#[derive(Debug, Deserialize, IntoParams)]
pub struct ClientListParams {
    /// Page index, 0-based; negative values clamp to 0
    #[serde(default)]
    pub page: i64,
    /// Page size; values <= 0 fall back to 10
    #[serde(default)]
    pub lines_per_page: i64,
    /// Sort column: name, email, cpf, birth_date (default: name)
    #[serde(default)]
    pub order_by: String,
    /// Sort direction: asc or desc (default: asc)
    #[serde(default)]
    pub direction: String,
    /// Substring match on name
    pub name: Option<String>,
    /// Substring match on email
    pub email: Option<String>,
    /// Exact match on CPF
    pub cpf: Option<String>,
    /// Earliest birth date, inclusive
    pub birth_from: Option<NaiveDate>,
    /// Latest birth date, inclusive
    pub birth_to: Option<NaiveDate>,
}

/// Create the client router with all HTTP endpoints
pub fn router<R: ClientRepository + 'static>(service: ClientService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_clients).post(register_client))
        .route(
            "/{cpf}",
            get(get_client).put(update_client).delete(delete_client),
        )
        .with_state(shared_service)
}

/// List clients with optional filters
#[utoipa::path(
    get,
    path = "",
    tag = "clients",
    params(ClientListParams),
    responses(
        (status = 200, description = "Page of clients", body = Page<Client>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_clients<R: ClientRepository>(
    State(service): State<Arc<ClientService<R>>>,
    Query(params): Query<ClientListParams>,
) -> ClientResult<Json<Page<Client>>> {
    let page = PageRequest::new(
        params.page,
        params.lines_per_page,
        params.order_by,
        &params.direction,
    );
    let filter = ClientFilter {
        name: params.name,
        email: params.email,
        cpf: params.cpf,
        birth_from: params.birth_from,
        birth_to: params.birth_to,
    };

    let clients = service.find_page(filter, page).await?;
    Ok(Json(clients))
}

/// Register a new client
#[utoipa::path(
    post,
    path = "",
    tag = "clients",
    request_body = CreateClient,
    responses(
        (status = 201, description = "Client registered successfully", body = Client),
        (status = 400, response = BadRequestValidationResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn register_client<R: ClientRepository>(
    State(service): State<Arc<ClientService<R>>>,
    Json(input): Json<CreateClient>,
) -> ClientResult<impl IntoResponse> {
    let client = service.register_client(input).await?;
    Ok((StatusCode::CREATED, Json(client)))
}

/// Get a client by CPF
#[utoipa::path(
    get,
    path = "/{cpf}",
    tag = "clients",
    params(
        ("cpf" = String, Path, description = "Client CPF, any common format")
    ),
    responses(
        (status = 200, description = "Client found", body = Client),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_client<R: ClientRepository>(
    State(service): State<Arc<ClientService<R>>>,
    Path(cpf): Path<String>,
) -> ClientResult<Json<Client>> {
    let client = service.get_by_cpf(&cpf).await?;
    Ok(Json(client))
}

/// Update a client by CPF
#[utoipa::path(
    put,
    path = "/{cpf}",
    tag = "clients",
    params(
        ("cpf" = String, Path, description = "Client CPF, any common format")
    ),
    request_body = UpdateClient,
    responses(
        (status = 200, description = "Client updated successfully", body = Client),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_client<R: ClientRepository>(
    State(service): State<Arc<ClientService<R>>>,
    Path(cpf): Path<String>,
    Json(input): Json<UpdateClient>,
) -> ClientResult<Json<Client>> {
    let client = service.update_client(&cpf, input).await?;
    Ok(Json(client))
}

/// Delete a client by CPF
#[utoipa::path(
    delete,
    path = "/{cpf}",
    tag = "clients",
    params(
        ("cpf" = String, Path, description = "Client CPF, any common format")
    ),
    responses(
        (status = 204, description = "Client deleted successfully"),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_client<R: ClientRepository>(
    State(service): State<Arc<ClientService<R>>>,
    Path(cpf): Path<String>,
) -> ClientResult<impl IntoResponse> {
    service.delete_by_cpf(&cpf).await?;
    Ok(StatusCode::NO_CONTENT)
}
