use std::sync::Arc;

use actix_web::{
    get,
    http::header::{self, HeaderValue},
    routes, web, HttpRequest, HttpResponse, Responder,
};
use tracing::{error, warn};

use crate::{
    auth::application::domain::entities::Requester,
    shared::api::{not_found_response, ApiResponse},
    shared::web::{link_header, QueryParams},
    topic_list::application::ports::incoming::use_cases::{
        GetTopicListUseCase, TopicListRequest,
    },
    AppState,
};

#[routes]
#[get("/recent")]
#[get("/api/recent")]
pub async fn get_recent_handler(
    req: HttpRequest,
    requester: Requester,
    data: web::Data<AppState>,
) -> impl Responder {
    render_listing(&data.topic_list.recent, &req, requester).await
}

#[routes]
#[get("/popular")]
#[get("/api/popular")]
pub async fn get_popular_handler(
    req: HttpRequest,
    requester: Requester,
    data: web::Data<AppState>,
) -> impl Responder {
    render_listing(&data.topic_list.popular, &req, requester).await
}

#[routes]
#[get("/top")]
#[get("/api/top")]
pub async fn get_top_handler(
    req: HttpRequest,
    requester: Requester,
    data: web::Data<AppState>,
) -> impl Responder {
    render_listing(&data.topic_list.top, &req, requester).await
}

/// Serves whichever listing is configured as the home page.
#[get("/")]
pub async fn get_home_handler(
    req: HttpRequest,
    requester: Requester,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.topic_list.by_name(&data.site.home_page_route) {
        Some(use_case) => render_listing(use_case, &req, requester).await,
        None => {
            warn!(
                "Home page route {:?} is not a listing page",
                data.site.home_page_route
            );
            not_found_response()
        }
    }
}

async fn render_listing(
    use_case: &Arc<dyn GetTopicListUseCase + Send + Sync>,
    req: &HttpRequest,
    requester: Requester,
) -> HttpResponse {
    let original_url = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| req.path().to_string());

    let request = TopicListRequest {
        requester,
        original_url,
        query: QueryParams::parse(req.query_string()),
    };

    match use_case.execute(request).await {
        Ok(Some(page)) => {
            let link = link_header(&page.link_tags);
            let mut response = ApiResponse::success(page);

            if let Some(link) = link {
                match HeaderValue::from_str(&link) {
                    Ok(value) => {
                        response.headers_mut().insert(header::LINK, value);
                    }
                    Err(e) => warn!("Dropping unencodable Link header: {}", e),
                }
            }

            response
        }

        Ok(None) => not_found_response(),

        Err(e) => {
            error!("Failed to build topic list: {}", e);
            ApiResponse::internal_error()
        }
    }
}
