use model::product::{NewProduct, Product};
use model::response::GenericErrorResponse;
use model::summary::InventorySummary;
use utoipa::OpenApi;

use super::auth::login::{LoginFormResponse, LoginRequest};
use super::auth::{login, logout};
use super::home::HomeResponse;
use super::products::form::ProductForm;
use super::products::list_products::GetProductsResponse;
use super::products::{create_product, delete_product, list_products, update_product};
use super::{health, home, summary};

#[derive(OpenApi)]
#[openapi(
        paths(
            home::home_handler,
            summary::get_summary_handler,
            login::login_form_handler,
            login::login_handler,
            logout::logout_handler,
            list_products::list_products_handler,
            create_product::add_form_handler,
            create_product::create_product_handler,
            update_product::edit_form_handler,
            update_product::update_product_handler,
            delete_product::delete_product_handler,
            health::health_handler,
        ),
        components(
            schemas(
                Product,
                NewProduct,
                InventorySummary,
                ProductForm,
                GetProductsResponse,
                HomeResponse,
                LoginRequest,
                LoginFormResponse,
                GenericErrorResponse,
            ),
        ),
        tags(
            (name = "inventory service", description = "Inventory Service")
        )
    )]
pub struct ApiDoc;
