//! HTTP client for network-based API calls

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::{ClientConfig, ClientError, ClientResult};
use shared::client::{LoginRequest, LoginResponse};
use shared::models::{
    Category, CenterProductWithProduct, DashboardStats, InventoryItem, InventoryItemCreate,
    InventoryQuantityUpdate, InventoryWithProduct, LoyaltyPoints, Notification, Order,
    OrderCreate, OrderFull, Product, ProductCreate, ProductUpdate, PurchasingCenter, Sale,
    SaleCreate, Store, SupplyOrder, SupplyOrderCreate, SupplyOrderStatusUpdate,
    SupplyOrderWithItems, UserCreate, UserPublic,
};

/// Error body returned by the server
#[derive(serde::Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP client for making network requests to the Connect server
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Make a GET request
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a PATCH request with JSON body
    async fn patch<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.patch(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            let message = serde_json::from_str::<ErrorBody>(&text)
                .map(|b| b.error)
                .unwrap_or(text);
            tracing::debug!(status = %status, message = %message, "API request failed");
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized(message)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(message)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(message)),
                StatusCode::CONFLICT => Err(ClientError::Conflict(message)),
                _ => Err(ClientError::Internal(message)),
            };
        }

        response.json().await.map_err(Into::into)
    }

    // ========== Auth API ==========

    /// Login with email and password
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<LoginResponse> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.post("/api/auth/login", &request).await
    }

    /// Register a new account
    pub async fn register(&self, user: &UserCreate) -> ClientResult<UserPublic> {
        self.post("/api/auth/register", user).await
    }

    // ========== User API ==========

    /// Get a user by id (password stripped)
    pub async fn user(&self, id: i64) -> ClientResult<UserPublic> {
        self.get(&format!("/api/users/{id}")).await
    }

    // ========== Store API ==========

    /// Get a store by id
    pub async fn store(&self, id: i64) -> ClientResult<Store> {
        self.get(&format!("/api/stores/{id}")).await
    }

    /// Stores owned by a manager
    pub async fn stores_by_manager(&self, manager_id: i64) -> ClientResult<Vec<Store>> {
        self.get(&format!("/api/stores/manager/{manager_id}")).await
    }

    /// Stores that have a product in stock
    pub async fn stores_with_product(&self, product_id: i64) -> ClientResult<Vec<Store>> {
        self.get(&format!("/api/stores/product/{product_id}")).await
    }

    // ========== Catalog API ==========

    /// All categories
    pub async fn categories(&self) -> ClientResult<Vec<Category>> {
        self.get("/api/categories").await
    }

    /// Products, optionally filtered by category
    pub async fn products(&self, category_id: Option<i64>) -> ClientResult<Vec<Product>> {
        match category_id {
            Some(id) => self.get(&format!("/api/products?categoryId={id}")).await,
            None => self.get("/api/products").await,
        }
    }

    /// Get a product by id
    pub async fn product(&self, id: i64) -> ClientResult<Product> {
        self.get(&format!("/api/products/{id}")).await
    }

    /// Create a product
    pub async fn create_product(&self, product: &ProductCreate) -> ClientResult<Product> {
        self.post("/api/products", product).await
    }

    /// Update a product (only supplied fields change)
    pub async fn update_product(&self, id: i64, update: &ProductUpdate) -> ClientResult<Product> {
        self.put(&format!("/api/products/{id}"), update).await
    }

    // ========== Inventory API ==========

    /// Inventory of a store, product detail attached
    pub async fn inventory(&self, store_id: i64) -> ClientResult<Vec<InventoryWithProduct>> {
        self.get(&format!("/api/inventory/{store_id}")).await
    }

    /// Create an inventory row for a (product, store) pair
    pub async fn create_inventory_item(
        &self,
        item: &InventoryItemCreate,
    ) -> ClientResult<InventoryItem> {
        self.post("/api/inventory", item).await
    }

    /// Set the stock quantity of an existing row
    pub async fn set_inventory_quantity(
        &self,
        product_id: i64,
        store_id: i64,
        update: &InventoryQuantityUpdate,
    ) -> ClientResult<InventoryItem> {
        self.put(&format!("/api/inventory/{product_id}/{store_id}"), update)
            .await
    }

    // ========== Order API ==========

    /// Orders filtered by store and/or customer
    pub async fn orders(
        &self,
        store_id: Option<i64>,
        customer_id: Option<i64>,
    ) -> ClientResult<Vec<Order>> {
        let mut params = Vec::new();
        if let Some(id) = store_id {
            params.push(format!("storeId={id}"));
        }
        if let Some(id) = customer_id {
            params.push(format!("customerId={id}"));
        }
        let query = if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        };
        self.get(&format!("/api/orders{query}")).await
    }

    /// Denormalized order detail
    pub async fn order(&self, id: i64) -> ClientResult<OrderFull> {
        self.get(&format!("/api/orders/{id}")).await
    }

    /// Place an order with its lines
    pub async fn create_order(&self, order: &OrderCreate) -> ClientResult<Order> {
        self.post("/api/orders", order).await
    }

    /// Advance an order's status
    pub async fn update_order_status(&self, id: i64, status: &str) -> ClientResult<Order> {
        self.put(
            &format!("/api/orders/{id}/status"),
            &serde_json::json!({ "status": status }),
        )
        .await
    }

    // ========== Sales API ==========

    /// Sales of a store within an inclusive date range (YYYY-MM-DD)
    pub async fn sales(
        &self,
        store_id: i64,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> ClientResult<Vec<Sale>> {
        let mut params = Vec::new();
        if let Some(date) = start_date {
            params.push(format!("startDate={date}"));
        }
        if let Some(date) = end_date {
            params.push(format!("endDate={date}"));
        }
        let query = if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        };
        self.get(&format!("/api/sales/{store_id}{query}")).await
    }

    /// Record a point-of-sale transaction
    pub async fn create_sale(&self, sale: &SaleCreate) -> ClientResult<Sale> {
        self.post("/api/sales", sale).await
    }

    // ========== Analytics API ==========

    /// Manager dashboard for a store
    pub async fn dashboard(&self, store_id: i64) -> ClientResult<DashboardStats> {
        self.get(&format!("/api/analytics/dashboard/{store_id}"))
            .await
    }

    // ========== Loyalty API ==========

    /// Loyalty account of a customer
    pub async fn loyalty(&self, customer_id: i64) -> ClientResult<LoyaltyPoints> {
        self.get(&format!("/api/loyalty/{customer_id}")).await
    }

    // ========== Notification API ==========

    /// Notifications of a user, newest first
    pub async fn notifications(&self, user_id: i64) -> ClientResult<Vec<Notification>> {
        self.get(&format!("/api/notifications/{user_id}")).await
    }

    /// Mark a notification as read
    pub async fn mark_notification_read(&self, id: i64) -> ClientResult<Notification> {
        self.put(
            &format!("/api/notifications/{id}/read"),
            &serde_json::json!({}),
        )
        .await
    }

    // ========== Supply Chain API ==========

    /// All active purchasing centers
    pub async fn purchasing_centers(&self) -> ClientResult<Vec<PurchasingCenter>> {
        self.get("/api/purchasing-centers").await
    }

    /// A center's catalog offers, product detail attached
    pub async fn center_products(
        &self,
        center_id: i64,
    ) -> ClientResult<Vec<CenterProductWithProduct>> {
        self.get(&format!("/api/center-products/{center_id}")).await
    }

    /// Supply orders of a store, lines attached
    pub async fn supply_orders(&self, store_id: i64) -> ClientResult<Vec<SupplyOrderWithItems>> {
        self.get(&format!("/api/supply-orders/{store_id}")).await
    }

    /// Place a supply order with its lines
    pub async fn create_supply_order(
        &self,
        order: &SupplyOrderCreate,
    ) -> ClientResult<SupplyOrderWithItems> {
        self.post("/api/supply-orders", order).await
    }

    /// Advance a supply order's status
    pub async fn update_supply_order_status(
        &self,
        id: i64,
        update: &SupplyOrderStatusUpdate,
    ) -> ClientResult<SupplyOrder> {
        self.patch(&format!("/api/supply-orders/{id}/status"), update)
            .await
    }
}
