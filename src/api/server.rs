use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use std::net::SocketAddr;

use crate::domain::customer::CustomerService;
use crate::metrics::Metrics;

use super::customer_controller;

/// Start the HTTP server and run until shutdown
pub async fn start_server(addr: SocketAddr, service: CustomerService, metrics: Metrics) -> std::io::Result<()> {
    tracing::info!("🌐 Starting customer API on http://{}/api/v1/customers", addr);

    let service = web::Data::new(service);
    let metrics = web::Data::new(metrics);

    HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .app_data(metrics.clone())
            .configure(configure_app)
    })
    .bind(addr)?
    .run()
    .await
}

/// Every route the service exposes
pub fn configure_app(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_handler))
        .route("/metrics", web::get().to(metrics_handler))
        .configure(customer_controller::configure);
}

async fn metrics_handler(metrics: web::Data<Metrics>) -> impl Responder {
    match metrics.encode() {
        Ok(buffer) => HttpResponse::Ok()
            .content_type("text/plain; version=0.0.4")
            .body(buffer),
        Err(e) => {
            tracing::error!("Metrics encoding error: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

async fn health_handler(service: web::Data<CustomerService>) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "customer-api",
        "store": service.store_backend(),
        "checked_at": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryCustomerStore;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use serde_json::Value;
    use std::sync::Arc;

    macro_rules! test_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(CustomerService::new(Arc::new(
                        InMemoryCustomerStore::new(),
                    ))))
                    .app_data(web::Data::new(Metrics::new().unwrap()))
                    .configure(configure_app),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_health_reports_store_backend() {
        let app = test_app!();

        let req = test::TestRequest::get().uri("/health").to_request();
        let health: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(health["status"], "healthy");
        assert_eq!(health["service"], "customer-api");
        assert_eq!(health["store"], "memory");
        assert!(health["checked_at"].is_string());
    }

    #[actix_web::test]
    async fn test_metrics_reflect_requests() {
        let app = test_app!();

        let req = test::TestRequest::get().uri("/api/v1/customers/missing").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::get().uri("/metrics").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let text = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(text.contains("customer_api_requests_total{operation=\"get\",outcome=\"not_found\"} 1"));
    }
}
