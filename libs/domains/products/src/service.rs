//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ProductQuery, UpdateProduct};
use crate::repository::ProductRepository;

/// Product service providing business logic operations
///
/// Every operation addressing a single product resolves it first, so a
/// missing id surfaces as [`ProductError::NotFound`] before any write.
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List products, highest price first, at most 50
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.find_all(ProductQuery::default()).await
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: i32) -> ProductResult<Product> {
        self.find_or_not_found(id).await
    }

    /// Create a new product
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        let product = self.repository.create(input).await?;
        tracing::info!(product_id = product.id, "Product created");
        Ok(product)
    }

    /// Replace name, price and availability of an existing product
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: i32, input: UpdateProduct) -> ProductResult<Product> {
        let mut product = self.find_or_not_found(id).await?;
        product.apply_update(input);

        let product = self.repository.save(product).await?;
        tracing::info!(product_id = id, "Product updated");
        Ok(product)
    }

    /// Flip the availability flag
    #[instrument(skip(self))]
    pub async fn toggle_availability(&self, id: i32) -> ProductResult<Product> {
        let mut product = self.find_or_not_found(id).await?;
        product.toggle_availability();

        let product = self.repository.save(product).await?;
        tracing::info!(
            product_id = id,
            availability = product.availability,
            "Product availability toggled"
        );
        Ok(product)
    }

    /// Delete a product
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i32) -> ProductResult<()> {
        let product = self.find_or_not_found(id).await?;
        self.repository.destroy(product).await?;

        tracing::info!(product_id = id, "Product deleted");
        Ok(())
    }

    async fn find_or_not_found(&self, id: i32) -> ProductResult<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }
}
