use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::get,
    Router,
};
use service::books::{BookStore, InMemoryBookStore};
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

use crate::errors::ApiError;

pub mod books;

/// Shared handler state. The store guards its own data.
#[derive(Clone)]
pub struct AppState {
    pub books: Arc<dyn BookStore>,
}

impl AppState {
    pub fn new(books: Arc<dyn BookStore>) -> Self {
        Self { books }
    }

    /// Fresh, empty process-wide collection.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryBookStore::new()))
    }
}

/// Catch-all for unknown paths and unsupported methods on known paths.
pub async fn not_found() -> ApiError {
    ApiError::UnmatchedRoute
}

/// Build the application router with book routes and request tracing.
///
/// No CORS layer: a preflight `OPTIONS` must reach the 404 fallback like any
/// other unsupported method.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // 集合路由：列表与创建；`get` 默认也接管 HEAD，这里显式交给 404
        .route(
            "/books",
            get(books::list_books)
                .head(not_found)
                .post(books::create_book)
                .fallback(not_found),
        )
        // 单本路由：GET 按名称，PUT/DELETE 按 id
        .route(
            "/books/:key",
            get(books::get_book)
                .head(not_found)
                .put(books::update_book)
                .delete(books::delete_book)
                .fallback(not_found),
        )
        // 其余路径一律 404 JSON
        .fallback(not_found)
        .with_state(state)
        // 请求体不设上限
        .layer(DefaultBodyLimit::disable())
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径等，日志级别为 INFO
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 请求到达时打点
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // 响应返回时打点，包含状态码与耗时
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 失败（5xx 等）时以 ERROR 记录
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
