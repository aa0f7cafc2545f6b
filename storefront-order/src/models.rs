use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::delivery::DeliveryService;
use crate::payment::PaymentProcessor;
use crate::{OrderError, OrderResult};

/// A customer's order for a single checkout pass
#[derive(Clone, Serialize)]
pub struct Order {
    id: u64,
    items: Vec<OrderItem>,
    total_price: f64,
    #[serde(skip)]
    payment_processor: Option<Arc<dyn PaymentProcessor>>,
    #[serde(skip)]
    delivery_service: Option<Arc<dyn DeliveryService>>,
}

impl Order {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            items: Vec::new(),
            total_price: 0.0,
            payment_processor: None,
            delivery_service: None,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn total_price(&self) -> f64 {
        self.total_price
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Add an item to the order and refresh the total
    pub fn add_item(&mut self, item: OrderItem) {
        self.items.push(item);
        self.recalculate_total();
    }

    pub fn set_payment_processor(&mut self, processor: Arc<dyn PaymentProcessor>) {
        self.payment_processor = Some(processor);
    }

    pub fn set_delivery_service(&mut self, service: Arc<dyn DeliveryService>) {
        self.delivery_service = Some(service);
    }

    pub fn payment_processor(&self) -> Option<&Arc<dyn PaymentProcessor>> {
        self.payment_processor.as_ref()
    }

    pub fn delivery_service(&self) -> Option<&Arc<dyn DeliveryService>> {
        self.delivery_service.as_ref()
    }

    // Always a full pass over the items, never an incremental update.
    fn recalculate_total(&mut self) {
        self.total_price = self.items.iter().map(OrderItem::line_total).sum();
    }
}

impl fmt::Debug for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Order")
            .field("id", &self.id)
            .field("items", &self.items)
            .field("total_price", &self.total_price)
            .field("payment_processor", &self.payment_processor.as_ref().map(|p| p.label()))
            .field("delivery_service", &self.delivery_service.as_ref().map(|d| d.label()))
            .finish()
    }
}

/// A single product line within an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    product_name: String,
    price: f64,
    quantity: u32,
}

impl OrderItem {
    pub fn new(product_name: impl Into<String>, price: f64, quantity: u32) -> Self {
        Self {
            product_name: product_name.into(),
            price,
            quantity,
        }
    }

    /// Like [`OrderItem::new`], but rejects negative or non-finite prices and zero quantities
    pub fn try_new(product_name: impl Into<String>, price: f64, quantity: u32) -> OrderResult<Self> {
        let product_name = product_name.into();

        if !price.is_finite() || price < 0.0 {
            return Err(OrderError::Validation(format!(
                "price of '{}' must be a non-negative number, got {}",
                product_name, price
            )));
        }

        if quantity == 0 {
            return Err(OrderError::Validation(format!(
                "quantity of '{}' must be positive",
                product_name
            )));
        }

        Ok(Self::new(product_name, price, quantity))
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}
