use model::product::{NewProduct, Product};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Product fields as they cross the form boundary: all text, with numeric
/// coercion deferred to [`ProductForm::into_new_product`]. Also serves as the
/// pre-fill payload for the add and edit form GETs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub company: String,
    pub category: String,
    #[serde(rename = "use")]
    pub intended_use: String,
    pub stock: String,
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ProductFormError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("{0} must be a number")]
    InvalidNumber(&'static str),
    #[error("stock cannot be negative")]
    NegativeStock,
}

impl ProductForm {
    /// Coerces the text fields to their stored types. All six fields are
    /// required; `price` and `stock` must parse, and `stock` must not be
    /// negative.
    pub fn into_new_product(self) -> Result<NewProduct, ProductFormError> {
        let required = [
            ("name", &self.name),
            ("price", &self.price),
            ("company", &self.company),
            ("category", &self.category),
            ("use", &self.intended_use),
            ("stock", &self.stock),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ProductFormError::MissingField(field));
            }
        }

        let price = self
            .price
            .trim()
            .parse::<f64>()
            .map_err(|_| ProductFormError::InvalidNumber("price"))?;
        let stock = self
            .stock
            .trim()
            .parse::<i64>()
            .map_err(|_| ProductFormError::InvalidNumber("stock"))?;
        if stock < 0 {
            return Err(ProductFormError::NegativeStock);
        }

        Ok(NewProduct {
            name: self.name,
            price,
            company: self.company,
            category: self.category,
            intended_use: self.intended_use,
            stock,
        })
    }
}

impl From<Product> for ProductForm {
    fn from(product: Product) -> Self {
        Self {
            name: product.name,
            price: product.price.to_string(),
            company: product.company,
            category: product.category,
            intended_use: product.intended_use,
            stock: product.stock.to_string(),
        }
    }
}
