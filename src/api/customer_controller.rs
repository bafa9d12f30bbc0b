use std::time::Instant;

use actix_web::{web, HttpResponse};

use crate::domain::customer::{CustomerError, CustomerRequestDto, CustomerResult, CustomerService};
use crate::metrics::Metrics;

// ============================================================================
// Customer Controller - /api/v1/customers
// ============================================================================
//
// POST   /api/v1/customers              → 201 + customer
// GET    /api/v1/customers/{id}         → 200 + customer
// GET    /api/v1/customers              → 200 + [customer]
// PUT    /api/v1/customers/{id}         → 200 + customer
// DELETE /api/v1/customers/{id}         → 204
// GET    /api/v1/customers/city/{city}  → 200 + [customer]
//
// ============================================================================

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/customers")
            .route("", web::post().to(create_customer))
            .route("", web::get().to(get_all_customers))
            .route("/city/{city}", web::get().to(get_customers_by_city))
            .route("/{id}", web::get().to(get_customer))
            .route("/{id}", web::put().to(update_customer))
            .route("/{id}", web::delete().to(delete_customer)),
    );
}

fn observe<T>(metrics: &Metrics, operation: &str, started: Instant, result: &CustomerResult<T>) {
    let outcome = match result {
        Ok(_) => "ok",
        Err(e) => e.kind(),
    };
    metrics.record(operation, outcome, started.elapsed());
}

async fn create_customer(
    service: web::Data<CustomerService>,
    metrics: web::Data<Metrics>,
    body: web::Json<CustomerRequestDto>,
) -> Result<HttpResponse, CustomerError> {
    let started = Instant::now();
    let result = service.create_customer(body.into_inner()).await;
    observe(&metrics, "create", started, &result);

    let customer = result?;
    metrics.customers_created.inc();
    Ok(HttpResponse::Created().json(customer))
}

async fn get_customer(
    service: web::Data<CustomerService>,
    metrics: web::Data<Metrics>,
    path: web::Path<String>,
) -> Result<HttpResponse, CustomerError> {
    let started = Instant::now();
    let result = service.get_customer_by_id(&path.into_inner()).await;
    observe(&metrics, "get", started, &result);

    Ok(HttpResponse::Ok().json(result?))
}

async fn get_all_customers(
    service: web::Data<CustomerService>,
    metrics: web::Data<Metrics>,
) -> Result<HttpResponse, CustomerError> {
    let started = Instant::now();
    let result = service.get_all_customers().await;
    observe(&metrics, "list", started, &result);

    Ok(HttpResponse::Ok().json(result?))
}

async fn update_customer(
    service: web::Data<CustomerService>,
    metrics: web::Data<Metrics>,
    path: web::Path<String>,
    body: web::Json<CustomerRequestDto>,
) -> Result<HttpResponse, CustomerError> {
    let started = Instant::now();
    let result = service
        .update_customer(&path.into_inner(), body.into_inner())
        .await;
    observe(&metrics, "update", started, &result);

    Ok(HttpResponse::Ok().json(result?))
}

async fn delete_customer(
    service: web::Data<CustomerService>,
    metrics: web::Data<Metrics>,
    path: web::Path<String>,
) -> Result<HttpResponse, CustomerError> {
    let started = Instant::now();
    let result = service.delete_customer(&path.into_inner()).await;
    observe(&metrics, "delete", started, &result);

    result?;
    Ok(HttpResponse::NoContent().finish())
}

async fn get_customers_by_city(
    service: web::Data<CustomerService>,
    metrics: web::Data<Metrics>,
    path: web::Path<String>,
) -> Result<HttpResponse, CustomerError> {
    let started = Instant::now();
    let result = service.get_customers_by_city(&path.into_inner()).await;
    observe(&metrics, "list_by_city", started, &result);

    Ok(HttpResponse::Ok().json(result?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::customer::CustomerResponseDto;
    use crate::store::InMemoryCustomerStore;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::{json, Value};
    use std::sync::Arc;

    macro_rules! test_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(CustomerService::new(Arc::new(
                        InMemoryCustomerStore::new(),
                    ))))
                    .app_data(web::Data::new(Metrics::new().unwrap()))
                    .configure(configure),
            )
            .await
        };
    }

    fn body(email: &str, city: &str) -> Value {
        json!({
            "firstname": "A",
            "lastname": "B",
            "email": email,
            "gender": "F",
            "city": city,
            "phone": "111"
        })
    }

    #[actix_web::test]
    async fn test_create_returns_201_with_generated_id() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/api/v1/customers")
            .set_json(body("a@x.com", "Leeds"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let created: CustomerResponseDto = test::read_body_json(resp).await;
        assert!(!created.id.is_empty());
        assert_eq!(created.email, "a@x.com");
        assert_eq!(created.city, "Leeds");

        let req = test::TestRequest::get().uri("/api/v1/customers").to_request();
        let all: Vec<CustomerResponseDto> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(all, vec![created]);
    }

    #[actix_web::test]
    async fn test_duplicate_email_returns_409() {
        let app = test_app!();

        for expected in [StatusCode::CREATED, StatusCode::CONFLICT] {
            let req = test::TestRequest::post()
                .uri("/api/v1/customers")
                .set_json(body("a@x.com", "Leeds"))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), expected);

            if expected == StatusCode::CONFLICT {
                let error: Value = test::read_body_json(resp).await;
                assert_eq!(error["error"], "Customer already exists with email: a@x.com");
            }
        }
    }

    #[actix_web::test]
    async fn test_get_unknown_returns_404() {
        let app = test_app!();

        let req = test::TestRequest::get().uri("/api/v1/customers/nope").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let error: Value = test::read_body_json(resp).await;
        assert_eq!(error["error"], "Customer not found with id: nope");
    }

    #[actix_web::test]
    async fn test_update_then_get() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/api/v1/customers")
            .set_json(body("a@x.com", "Leeds"))
            .to_request();
        let created: CustomerResponseDto = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/v1/customers/{}", created.id))
            .set_json(body("b@x.com", "York"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/customers/{}", created.id))
            .to_request();
        let fetched: CustomerResponseDto = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.email, "b@x.com");
        assert_eq!(fetched.city, "York");
    }

    #[actix_web::test]
    async fn test_update_unknown_returns_404() {
        let app = test_app!();

        let req = test::TestRequest::put()
            .uri("/api/v1/customers/nope")
            .set_json(body("a@x.com", "Leeds"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_delete_returns_204_then_404() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/api/v1/customers")
            .set_json(body("a@x.com", "Leeds"))
            .to_request();
        let created: CustomerResponseDto = test::call_and_read_body_json(&app, req).await;
        let uri = format!("/api/v1/customers/{}", created.id);

        let resp = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        let bytes = test::read_body(resp).await;
        assert!(bytes.is_empty());

        let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_list_by_city() {
        let app = test_app!();

        for (email, city) in [("a@x.com", "London"), ("b@x.com", "london"), ("c@x.com", "London")] {
            let req = test::TestRequest::post()
                .uri("/api/v1/customers")
                .set_json(body(email, city))
                .to_request();
            test::call_service(&app, req).await;
        }

        let req = test::TestRequest::get()
            .uri("/api/v1/customers/city/London")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let found: Vec<CustomerResponseDto> = test::read_body_json(resp).await;
        let mut emails: Vec<String> = found.into_iter().map(|c| c.email).collect();
        emails.sort();
        assert_eq!(emails, vec!["a@x.com", "c@x.com"]);

        let req = test::TestRequest::get()
            .uri("/api/v1/customers/city/Paris")
            .to_request();
        let none: Vec<CustomerResponseDto> = test::call_and_read_body_json(&app, req).await;
        assert!(none.is_empty());
    }

    #[actix_web::test]
    async fn test_malformed_body_returns_400() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/api/v1/customers")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
