//! User CRUD handlers: thin mappers from service outcomes to HTTP statuses.

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::errors::ApiError;
use crate::models::{CreateUserRequest, User, UserResponse};
use crate::services::UserService;

/// List all users. An empty store still yields 200 with an empty array.
pub async fn get_users(user_service: web::Data<UserService>) -> Result<HttpResponse, ApiError> {
    let users = user_service.get_all().await?;
    let response: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();

    Ok(HttpResponse::Ok().json(response))
}

/// Get a specific user by id. Absent records map to 404 with an empty body.
pub async fn get_user(
    user_service: web::Data<UserService>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    match user_service.get_by_id(id).await? {
        Some(user) => Ok(HttpResponse::Ok().json(UserResponse::from(user))),
        None => Ok(HttpResponse::NotFound().finish()),
    }
}

/// Create a user. The handler assigns the id; the service and repository
/// receive a fully-formed entity. A rejected write maps to 400.
pub async fn create_user(
    user_service: web::Data<UserService>,
    body: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, ApiError> {
    let user = User {
        id: Uuid::new_v4(),
        full_name: body.into_inner().full_name,
    };

    if user_service.create(user.clone()).await? {
        let location = format!("/api/users/{}", user.id);
        Ok(HttpResponse::Created()
            .insert_header(("Location", location))
            .json(UserResponse::from(user)))
    } else {
        Ok(HttpResponse::BadRequest().finish())
    }
}

/// Delete a user by id. A miss maps to 404 with an empty body.
pub async fn delete_user(
    user_service: web::Data<UserService>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    if user_service.delete_by_id(id).await? {
        Ok(HttpResponse::Ok().finish())
    } else {
        Ok(HttpResponse::NotFound().finish())
    }
}
