use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use school_management::config::Config;
use school_management::middleware::{ErrorHandler, RequestId};
use school_management::modules::classes::controllers::class_controller;
use school_management::modules::classes::repositories::{
    InMemorySchoolClassRepository, SchoolClassRepository,
};
use school_management::modules::classes::services::SchoolClassService;
use school_management::modules::health::controllers::health_controller;
use school_management::modules::students::controllers::student_controller;
use school_management::modules::students::repositories::{
    InMemoryStudentRepository, StudentRepository,
};
use school_management::modules::students::services::StudentService;
use school_management::store::SchoolStore;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "school_management=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    config.validate()?;

    tracing::info!("Starting School Management API");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Wire the store, repositories, and services
    let store = Arc::new(SchoolStore::new());
    let student_repo: Arc<dyn StudentRepository> =
        Arc::new(InMemoryStudentRepository::new(store.clone()));
    let class_repo: Arc<dyn SchoolClassRepository> =
        Arc::new(InMemorySchoolClassRepository::new(store.clone()));

    let student_service = Arc::new(StudentService::new(
        student_repo.clone(),
        class_repo.clone(),
    ));
    let class_service = Arc::new(SchoolClassService::new(class_repo, student_repo));

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(ErrorHandler)
            .wrap(RequestId)
            .wrap(Cors::permissive())
            .app_data(web::Data::new(store.clone()))
            .app_data(web::Data::new(student_service.clone()))
            .app_data(web::Data::new(class_service.clone()))
            .configure(student_controller::configure)
            .configure(class_controller::configure)
            .configure(health_controller::configure)
    })
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;
    Ok(())
}
