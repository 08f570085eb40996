// ============================================================
// HTTP INTERFACE
// ============================================================
// Serve the dashboard and a JSON status surface

use actix_cors::Cors;
use actix_web::{dev::Server, get, web, App, HttpResponse, HttpServer, Responder};
use tracing::info;

use crate::application::use_cases::dashboard::DashboardUseCase;
use crate::infrastructure::config::Settings;
use crate::interfaces::html::render_dashboard;

pub struct HttpState {
    pub settings: Settings,
}

#[get("/")]
async fn dashboard(data: web::Data<HttpState>) -> impl Responder {
    // Fresh load+group+render pass per request; nothing is cached across
    // requests beyond the source file itself.
    let view = DashboardUseCase::new(data.settings.clone()).execute();
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_dashboard(&view))
}

#[get("/api/status")]
async fn api_status(data: web::Data<HttpState>) -> impl Responder {
    let view = DashboardUseCase::new(data.settings.clone()).execute();
    HttpResponse::Ok().json(view.status())
}

pub fn start_server(settings: Settings) -> std::io::Result<Server> {
    let bind = (settings.host.clone(), settings.port);
    info!(host = %settings.host, port = settings.port, "starting dashboard server");

    let state = web::Data::new(HttpState { settings });

    let server = HttpServer::new(move || {
        let cors = Cors::permissive(); // Allow all origins for local tool

        App::new()
            .wrap(cors)
            .app_data(state.clone())
            .service(dashboard)
            .service(api_status)
    })
    .bind(bind)?
    .run();

    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;
    use std::path::PathBuf;

    fn missing_source_state() -> web::Data<HttpState> {
        web::Data::new(HttpState {
            settings: Settings {
                source_path: PathBuf::from("/no/such/tileboard-source.txt"),
                ..Settings::default()
            },
        })
    }

    #[actix_web::test]
    async fn test_dashboard_serves_fallback_html() {
        let app = test::init_service(
            App::new()
                .app_data(missing_source_state())
                .service(dashboard),
        )
        .await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(body.contains("<h2>Other</h2>"));
        assert!(body.contains("SOPs"));
        assert!(body.contains("Jira Tickets"));
    }

    #[actix_web::test]
    async fn test_status_reports_fallback() {
        let app = test::init_service(
            App::new()
                .app_data(missing_source_state())
                .service(api_status),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/status").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["fallback_active"], true);
        assert_eq!(body["tile_count"], 2);
        assert_eq!(body["groups"][0]["tag"], "Other");
    }
}
