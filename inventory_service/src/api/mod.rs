use axum::{
    http::{header::CONTENT_TYPE, Method},
    middleware::from_fn_with_state,
    routing::{delete, get, IntoMakeService},
    Router,
};
use tower_cookies::CookieManagerLayer;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod auth;
pub mod context;
mod health;
mod home;
mod products;
mod summary;
mod swagger;

use context::AppState;

type Service = IntoMakeService<Router>;

pub fn service(app_state: AppState) -> Service {
    router(app_state).into_make_service()
}

fn router(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    // Every data route sits behind the session gate; login/logout and health
    // stay public.
    let gated = Router::new()
        .route("/", get(home::home_handler))
        .route("/get_summary", get(summary::get_summary_handler))
        .route(
            "/products",
            get(products::list_products::list_products_handler),
        )
        .route(
            "/add",
            get(products::create_product::add_form_handler)
                .post(products::create_product::create_product_handler),
        )
        .route(
            "/edit/{id}",
            get(products::update_product::edit_form_handler)
                .post(products::update_product::update_product_handler),
        )
        .route(
            "/delete/{id}",
            delete(products::delete_product::delete_product_handler),
        )
        .layer(from_fn_with_state(
            app_state.clone(),
            auth::middleware::require_session,
        ));

    Router::new()
        .merge(gated)
        .merge(auth::router())
        .with_state(app_state)
        .merge(health::router())
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", swagger::ApiDoc::openapi()))
        .layer(CookieManagerLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
