// Integration tests for the student endpoints.
//
// Runs the real controllers, services, and repositories in-process over
// a fresh store per test.

use std::sync::Arc;

use actix_web::{test, web, App};
use serde_json::{json, Value};

use school_management::modules::classes::controllers::class_controller;
use school_management::modules::classes::repositories::InMemorySchoolClassRepository;
use school_management::modules::classes::services::SchoolClassService;
use school_management::modules::students::controllers::student_controller;
use school_management::modules::students::repositories::InMemoryStudentRepository;
use school_management::modules::students::services::StudentService;
use school_management::store::SchoolStore;

fn services() -> (
    web::Data<Arc<StudentService>>,
    web::Data<Arc<SchoolClassService>>,
) {
    let store = Arc::new(SchoolStore::new());
    let students = Arc::new(InMemoryStudentRepository::new(store.clone()));
    let classes = Arc::new(InMemorySchoolClassRepository::new(store));
    let student_service = Arc::new(StudentService::new(students.clone(), classes.clone()));
    let class_service = Arc::new(SchoolClassService::new(classes, students));
    (
        web::Data::new(student_service),
        web::Data::new(class_service),
    )
}

macro_rules! test_app {
    () => {{
        let (student_data, class_data) = services();
        test::init_service(
            App::new()
                .app_data(student_data)
                .app_data(class_data)
                .configure(student_controller::configure)
                .configure(class_controller::configure),
        )
        .await
    }};
}

fn john_doe() -> Value {
    json!({
        "student_id": "S001",
        "name": "John",
        "surname": "Doe",
        "date_of_birth": "2005-01-01",
        "city": "Warsaw",
        "street": "Main St",
        "postal_code": "00-001"
    })
}

#[actix_web::test]
async fn test_create_and_get_student() {
    let app = test_app!();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/students")
            .set_json(john_doe())
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 201);

    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["student_id"], "S001");
    assert_eq!(created["school_class_id"], Value::Null);
    assert_eq!(created["school_class_name"], Value::Null);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/students/S001")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);

    let found: Value = test::read_body_json(resp).await;
    assert_eq!(found["name"], "John");
    assert_eq!(found["surname"], "Doe");
    assert_eq!(found["date_of_birth"], "2005-01-01");
}

#[actix_web::test]
async fn test_duplicate_create_returns_409() {
    let app = test_app!();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/students")
            .set_json(john_doe())
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 201);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/students")
            .set_json(john_doe())
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 409);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Student with ID 'S001' already exists.");
}

#[actix_web::test]
async fn test_create_with_blank_name_returns_400() {
    let app = test_app!();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/students")
            .set_json(json!({
                "student_id": "S001",
                "name": "  ",
                "surname": "Doe",
                "date_of_birth": "2005-01-01"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_get_missing_student_returns_404() {
    let app = test_app!();

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/students/NONEXISTENT")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 404);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Student with ID 'NONEXISTENT' not found.");
}

#[actix_web::test]
async fn test_put_replaces_and_clears_omitted_optionals() {
    let app = test_app!();

    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/students")
            .set_json(john_doe())
            .to_request(),
    )
    .await;

    // full replace without address fields clears them
    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri("/api/v1/students/S001")
            .set_json(json!({
                "name": "Johnny",
                "surname": "Doe",
                "date_of_birth": "2005-06-15"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);

    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["name"], "Johnny");
    assert_eq!(updated["date_of_birth"], "2005-06-15");
    assert_eq!(updated["city"], Value::Null);
    assert_eq!(updated["street"], Value::Null);
    assert_eq!(updated["postal_code"], Value::Null);
}

#[actix_web::test]
async fn test_patch_city_only() {
    let app = test_app!();

    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/students")
            .set_json(john_doe())
            .to_request(),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::patch()
            .uri("/api/v1/students/S001")
            .set_json(json!({"city": "Krakow"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);

    let patched: Value = test::read_body_json(resp).await;
    assert_eq!(patched["city"], "Krakow");
    assert_eq!(patched["name"], "John");
    assert_eq!(patched["surname"], "Doe");
    assert_eq!(patched["street"], "Main St");
}

#[actix_web::test]
async fn test_delete_student_returns_confirmation() {
    let app = test_app!();

    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/students")
            .set_json(john_doe())
            .to_request(),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri("/api/v1/students/S001")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Student with ID 'S001' has been deleted.");

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/students/S001")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_list_students_includes_class_name() {
    let app = test_app!();

    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/classes")
            .set_json(json!({"name": "Class 5A", "leading_teacher": "Mrs. Smith"}))
            .to_request(),
    )
    .await;
    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/students")
            .set_json(john_doe())
            .to_request(),
    )
    .await;
    test::call_service(
        &app,
        test::TestRequest::patch()
            .uri("/api/v1/students/S001")
            .set_json(json!({"school_class_id": 1}))
            .to_request(),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v1/students").to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);

    let students: Value = test::read_body_json(resp).await;
    let students = students.as_array().unwrap();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0]["school_class_id"], 1);
    assert_eq!(students[0]["school_class_name"], "Class 5A");
}
