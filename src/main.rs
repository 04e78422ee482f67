pub mod modules;
pub use modules::auth;
pub use modules::topic_list;
pub mod health;
pub mod shared;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenVerifier};
use crate::auth::application::ports::outgoing::TokenVerifier;
use crate::shared::api::not_found_handler;
use crate::shared::config::SiteConfig;
use crate::topic_list::adapter::outgoing::{
    CategoryQueryPostgres, FeedTokenRedis, PrivilegeQueryPostgres, SortedTopicsPostgres,
    UserSettingsPostgres,
};
use crate::topic_list::application::domain::ListingPage;
use crate::topic_list::application::services::{GetTopicListService, TopicListPorts};
use crate::topic_list::application::topic_list_use_cases::TopicListUseCases;

use actix_web::{web, App, HttpServer};
use deadpool_redis::{Config, Runtime};

use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub topic_list: TopicListUseCases,
    pub site: Arc<SiteConfig>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let redis_url = env::var("REDIS_URL").expect("REDIS_URL is not set in .env file");

    let site = Arc::new(SiteConfig::from_env());
    if ListingPage::by_name(&site.home_page_route).is_none() {
        panic!(
            "HOME_PAGE_ROUTE must name a listing page, got {:?}",
            site.home_page_route
        );
    }

    let server_url = format!("{host}:{port}");
    info!("Server run on: {}{}", server_url, site.relative_path);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Redis connection
    let redis_pool = Config::from_url(&redis_url)
        .create_pool(Some(Runtime::Tokio1))
        .expect("Failed to create Redis pool");

    let redis_arc = Arc::new(redis_pool);

    // Listing collaborators, shared by every listing page
    let ports = TopicListPorts {
        settings: Arc::new(UserSettingsPostgres::new(
            Arc::clone(&db_arc),
            site.default_topics_per_page,
            site.max_topics_per_page,
        )),
        categories: Arc::new(CategoryQueryPostgres::new(Arc::clone(&db_arc))),
        feed_tokens: Arc::new(FeedTokenRedis::new(Arc::clone(&redis_arc))),
        privileges: Arc::new(PrivilegeQueryPostgres::new(Arc::clone(&db_arc))),
        topics: Arc::new(SortedTopicsPostgres::new(Arc::clone(&db_arc))),
    };

    let listing = |page: ListingPage| {
        Arc::new(GetTopicListService::new(
            page,
            Arc::clone(&site),
            ports.clone(),
        ))
    };

    let state = AppState {
        topic_list: TopicListUseCases {
            recent: listing(ListingPage::RECENT),
            popular: listing(ListingPage::POPULAR),
            top: listing(ListingPage::TOP),
        },
        site: Arc::clone(&site),
    };

    let token_verifier_arc: Arc<dyn TokenVerifier + Send + Sync> =
        Arc::new(JwtTokenVerifier::new(JwtConfig::from_env()));
    let relative_path = site.relative_path.clone();

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_verifier_arc)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(web::Data::new(Arc::clone(&redis_arc)))
            .service(
                web::scope(&relative_path)
                    .configure(init_routes)
                    .default_service(web::to(not_found_handler)),
            )
            .default_service(web::to(not_found_handler))
    })
    .bind(server_url)?
    .run()
    .await
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Listings
    cfg.service(crate::topic_list::adapter::incoming::web::routes::get_recent_handler);
    cfg.service(crate::topic_list::adapter::incoming::web::routes::get_popular_handler);
    cfg.service(crate::topic_list::adapter::incoming::web::routes::get_top_handler);
    cfg.service(crate::topic_list::adapter::incoming::web::routes::get_home_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}

#[cfg(test)]
mod app_tests {
    use super::*;
    use actix_web::{http::StatusCode, test};
    use serde_json::Value;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper as tokens;

    fn verifier_data() -> web::Data<Arc<dyn TokenVerifier + Send + Sync>> {
        let verifier: Arc<dyn TokenVerifier + Send + Sync> =
            Arc::new(JwtTokenVerifier::new(tokens::test_config()));
        web::Data::new(verifier)
    }

    #[actix_web::test]
    async fn routes_are_mounted_under_relative_path() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .app_data(verifier_data())
                .service(
                    web::scope("/forum")
                        .configure(init_routes)
                        .default_service(web::to(not_found_handler)),
                )
                .default_service(web::to(not_found_handler)),
        )
        .await;

        for (uri, template) in [
            ("/forum/recent", "recent"),
            ("/forum/api/popular", "popular"),
            ("/forum/top?term=daily", "top"),
            ("/forum/", "recent"),
        ] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let body: Value = test::call_and_read_body_json(&app, req).await;
            assert_eq!(body["data"]["template"], template, "uri {uri}");
        }

        let req = test::TestRequest::get().uri("/forum/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/forum/unread").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::get().uri("/recent").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
