//! Blog backend: post CRUD behind cookie sessions, plus signup/login/logout.

pub mod auth;
pub mod config;
pub mod db;
pub mod dto;
pub mod errors;
pub mod models;
pub mod routes;
pub mod sessions;
pub mod states;
pub mod store;

pub use states::AppState;

use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Build the router over an explicitly constructed application context.
pub fn app(state: AppState) -> Router {
    // Protected routes (session required)
    let protected = Router::new()
        .route("/posts", get(routes::list_posts))
        .route("/create", post(routes::create_post))
        .route(
            "/{id}/update",
            get(routes::edit_post).post(routes::update_post),
        )
        .route("/{id}/delete", delete(routes::delete_post))
        .route("/logout", get(routes::logout))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_session,
        ));

    // Public routes (no session required)
    let public = Router::new()
        .route("/health", get(routes::health_check))
        .route("/post/{id}", get(routes::get_post))
        .route("/signup", post(routes::signup))
        .route("/login", post(routes::login).get(routes::login_page));

    // Any origin may call the API
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    public.merge(protected).with_state(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors),
    )
}
