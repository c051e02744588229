use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::students::models::{
    CreateStudentRequest, PatchStudentRequest, UpdateStudentRequest,
};
use crate::modules::students::services::StudentService;

/// List all students
/// GET /api/v1/students
pub async fn list_students(
    service: web::Data<Arc<StudentService>>,
) -> Result<HttpResponse, AppError> {
    let students = service.list_students().await?;
    Ok(HttpResponse::Ok().json(students))
}

/// Get student by ID
/// GET /api/v1/students/{id}
pub async fn get_student(
    service: web::Data<Arc<StudentService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let result = service.get_student(&path.into_inner()).await?;
    Ok(result.into_http_response())
}

/// Create a new student
/// POST /api/v1/students
pub async fn create_student(
    service: web::Data<Arc<StudentService>>,
    request: web::Json<CreateStudentRequest>,
) -> Result<HttpResponse, AppError> {
    let result = service.create_student(request.into_inner()).await?;
    Ok(result.into_http_response())
}

/// Replace a student's mutable fields
/// PUT /api/v1/students/{id}
pub async fn update_student(
    service: web::Data<Arc<StudentService>>,
    path: web::Path<String>,
    request: web::Json<UpdateStudentRequest>,
) -> Result<HttpResponse, AppError> {
    let result = service
        .update_student(&path.into_inner(), request.into_inner())
        .await?;
    Ok(result.into_http_response())
}

/// Partially update a student; also the assignment entry point
/// (`{"school_class_id": N}` assigns, `null`/`0` unassigns)
/// PATCH /api/v1/students/{id}
pub async fn patch_student(
    service: web::Data<Arc<StudentService>>,
    path: web::Path<String>,
    request: web::Json<PatchStudentRequest>,
) -> Result<HttpResponse, AppError> {
    let result = service
        .patch_student(&path.into_inner(), request.into_inner())
        .await?;
    Ok(result.into_http_response())
}

/// Delete a student
/// DELETE /api/v1/students/{id}
pub async fn delete_student(
    service: web::Data<Arc<StudentService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let result = service.delete_student(&path.into_inner()).await?;
    Ok(result
        .map(|message| serde_json::json!({ "message": message }))
        .into_http_response())
}

/// Configure student routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/students")
            .route("", web::get().to(list_students))
            .route("", web::post().to(create_student))
            .route("/{id}", web::get().to(get_student))
            .route("/{id}", web::put().to(update_student))
            .route("/{id}", web::patch().to(patch_student))
            .route("/{id}", web::delete().to(delete_student)),
    );
}
