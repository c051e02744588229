use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::classes::models::{
    AddStudentToClassRequest, CreateSchoolClassRequest, PatchSchoolClassRequest,
    UpdateSchoolClassRequest,
};
use crate::modules::classes::services::SchoolClassService;

/// List all classes with member lists
/// GET /api/v1/classes
pub async fn list_classes(
    service: web::Data<Arc<SchoolClassService>>,
) -> Result<HttpResponse, AppError> {
    let classes = service.list_classes().await?;
    Ok(HttpResponse::Ok().json(classes))
}

/// Get class by ID, including members
/// GET /api/v1/classes/{id}
pub async fn get_class(
    service: web::Data<Arc<SchoolClassService>>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let result = service.get_class(path.into_inner()).await?;
    Ok(result.into_http_response())
}

/// Create a new class
/// POST /api/v1/classes
pub async fn create_class(
    service: web::Data<Arc<SchoolClassService>>,
    request: web::Json<CreateSchoolClassRequest>,
) -> Result<HttpResponse, AppError> {
    let result = service.create_class(request.into_inner()).await?;
    Ok(result.into_http_response())
}

/// Replace a class's fields
/// PUT /api/v1/classes/{id}
pub async fn update_class(
    service: web::Data<Arc<SchoolClassService>>,
    path: web::Path<i32>,
    request: web::Json<UpdateSchoolClassRequest>,
) -> Result<HttpResponse, AppError> {
    let result = service
        .update_class(path.into_inner(), request.into_inner())
        .await?;
    Ok(result.into_http_response())
}

/// Partially update a class (name or teacher)
/// PATCH /api/v1/classes/{id}
pub async fn patch_class(
    service: web::Data<Arc<SchoolClassService>>,
    path: web::Path<i32>,
    request: web::Json<PatchSchoolClassRequest>,
) -> Result<HttpResponse, AppError> {
    let result = service
        .patch_class(path.into_inner(), request.into_inner())
        .await?;
    Ok(result.into_http_response())
}

/// Delete a class; members are unassigned, never deleted
/// DELETE /api/v1/classes/{id}
pub async fn delete_class(
    service: web::Data<Arc<SchoolClassService>>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let result = service.delete_class(path.into_inner()).await?;
    Ok(result
        .map(|message| serde_json::json!({ "message": message }))
        .into_http_response())
}

/// Add a student to a class (legacy; prefer PATCH /api/v1/students/{id})
/// POST /api/v1/classes/{id}/students
pub async fn add_student_to_class(
    service: web::Data<Arc<SchoolClassService>>,
    path: web::Path<i32>,
    request: web::Json<AddStudentToClassRequest>,
) -> Result<HttpResponse, AppError> {
    let result = service
        .add_student_to_class(path.into_inner(), &request.student_id)
        .await?;
    Ok(result
        .map(|message| serde_json::json!({ "message": message }))
        .into_http_response())
}

/// Remove a student from a class (legacy)
/// DELETE /api/v1/classes/{id}/students/{student_id}
pub async fn remove_student_from_class(
    service: web::Data<Arc<SchoolClassService>>,
    path: web::Path<(i32, String)>,
) -> Result<HttpResponse, AppError> {
    let (class_id, student_id) = path.into_inner();
    let result = service
        .remove_student_from_class(class_id, &student_id)
        .await?;
    Ok(result
        .map(|message| serde_json::json!({ "message": message }))
        .into_http_response())
}

/// Configure class routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/classes")
            .route("", web::get().to(list_classes))
            .route("", web::post().to(create_class))
            .route("/{id}", web::get().to(get_class))
            .route("/{id}", web::put().to(update_class))
            .route("/{id}", web::patch().to(patch_class))
            .route("/{id}", web::delete().to(delete_class))
            .route("/{id}/students", web::post().to(add_student_to_class))
            .route(
                "/{id}/students/{student_id}",
                web::delete().to(remove_student_from_class),
            ),
    );
}
