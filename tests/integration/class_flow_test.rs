// Integration tests for the school class endpoints.

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

#[actix_web::test]
async fn test_create_class_returns_201_with_zero_members() {
    let app = test_app!();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/classes")
            .set_json(json!({"name": "Class 5A", "leading_teacher": "Mrs. Smith"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 201);

    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["id"], 1);
    assert_eq!(created["name"], "Class 5A");
    assert_eq!(created["leading_teacher"], "Mrs. Smith");
    assert_eq!(created["student_count"], 0);
    assert_eq!(created["students"], json!([]));
}

#[actix_web::test]
async fn test_create_class_with_blank_teacher_returns_400() {
    let app = test_app!();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/classes")
            .set_json(json!({"name": "Class 5A", "leading_teacher": ""}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_get_missing_class_returns_404() {
    let app = test_app!();

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v1/classes/42").to_request(),
    )
    .await;
    assert_eq!(resp.status(), 404);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "School class with ID 42 not found.");
}

#[actix_web::test]
async fn test_put_class_recomputes_member_count() {
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
            .set_json(json!({
                "student_id": "S001",
                "name": "John",
                "surname": "Doe",
                "date_of_birth": "2005-01-01"
            }))
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
        test::TestRequest::put()
            .uri("/api/v1/classes/1")
            .set_json(json!({"name": "Class 6A", "leading_teacher": "Mr. Jones"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);

    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["name"], "Class 6A");
    assert_eq!(updated["leading_teacher"], "Mr. Jones");
    assert_eq!(updated["student_count"], 1);
    assert_eq!(updated["students"][0]["student_id"], "S001");
    assert_eq!(updated["students"][0]["school_class_name"], "Class 6A");
}

#[actix_web::test]
async fn test_patch_class_rejects_blank_name() {
    let app = test_app!();

    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/classes")
            .set_json(json!({"name": "Class 5A", "leading_teacher": "Mrs. Smith"}))
            .to_request(),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::patch()
            .uri("/api/v1/classes/1")
            .set_json(json!({"name": "   "}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Name is required.");
}

#[actix_web::test]
async fn test_list_classes_includes_members() {
    let app = test_app!();

    for (name, teacher) in [("Class 5A", "Mrs. Smith"), ("Class 5B", "Mr. Jones")] {
        test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/classes")
                .set_json(json!({"name": name, "leading_teacher": teacher}))
                .to_request(),
        )
        .await;
    }
    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/students")
            .set_json(json!({
                "student_id": "S001",
                "name": "John",
                "surname": "Doe",
                "date_of_birth": "2005-01-01"
            }))
            .to_request(),
    )
    .await;
    test::call_service(
        &app,
        test::TestRequest::patch()
            .uri("/api/v1/students/S001")
            .set_json(json!({"school_class_id": 2}))
            .to_request(),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v1/classes").to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);

    let classes: Value = test::read_body_json(resp).await;
    let classes = classes.as_array().unwrap();
    assert_eq!(classes.len(), 2);
    assert_eq!(classes[0]["student_count"], 0);
    assert_eq!(classes[1]["student_count"], 1);
    assert_eq!(classes[1]["students"][0]["student_id"], "S001");
}

#[actix_web::test]
async fn test_delete_missing_class_returns_404() {
    let app = test_app!();

    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri("/api/v1/classes/7")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_delete_class_with_members_nulls_every_assignment() {
    let app = test_app!();

    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/classes")
            .set_json(json!({"name": "Class 5A", "leading_teacher": "Mrs. Smith"}))
            .to_request(),
    )
    .await;

    for n in 0..3 {
        test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/students")
                .set_json(json!({
                    "student_id": format!("S{n:03}"),
                    "name": "John",
                    "surname": "Doe",
                    "date_of_birth": "2005-01-01"
                }))
                .to_request(),
        )
        .await;
        test::call_service(
            &app,
            test::TestRequest::patch()
                .uri(&format!("/api/v1/students/S{n:03}"))
                .set_json(json!({"school_class_id": 1}))
                .to_request(),
        )
        .await;
    }

    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri("/api/v1/classes/1")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "School class with ID 1 has been deleted.");

    for n in 0..3 {
        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri(&format!("/api/v1/students/S{n:03}"))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), 200);
        let student: Value = test::read_body_json(resp).await;
        assert_eq!(student["school_class_id"], Value::Null);
    }
}
