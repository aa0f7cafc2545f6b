use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::models::Order;
use crate::status::StatusSink;

/// Hands a paid order over to a delivery channel
pub trait DeliveryService: Send + Sync {
    fn deliver_order(&self, order: &Order, sink: &dyn StatusSink);

    fn label(&self) -> &'static str;
}

pub struct CourierDelivery;

impl DeliveryService for CourierDelivery {
    fn deliver_order(&self, order: &Order, sink: &dyn StatusSink) {
        sink.emit(&format!("Доставка заказа {} курьером.", order.id()));
    }

    fn label(&self) -> &'static str {
        "courier"
    }
}

pub struct PostDelivery;

impl DeliveryService for PostDelivery {
    fn deliver_order(&self, order: &Order, sink: &dyn StatusSink) {
        sink.emit(&format!("Доставка заказа {} почтой.", order.id()));
    }

    fn label(&self) -> &'static str {
        "post"
    }
}

pub struct PickUpPointDelivery;

impl DeliveryService for PickUpPointDelivery {
    fn deliver_order(&self, order: &Order, sink: &dyn StatusSink) {
        sink.emit(&format!("Доставка заказа {} в пункт выдачи.", order.id()));
    }

    fn label(&self) -> &'static str {
        "pick-up-point"
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum DeliveryMethod {
    #[default]
    Courier,
    Post,
    PickUpPoint,
}

impl DeliveryMethod {
    pub fn service(self) -> Arc<dyn DeliveryService> {
        match self {
            DeliveryMethod::Courier => Arc::new(CourierDelivery),
            DeliveryMethod::Post => Arc::new(PostDelivery),
            DeliveryMethod::PickUpPoint => Arc::new(PickUpPointDelivery),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::RecordingSink;

    #[test]
    fn test_delivery_lines() {
        let order = Order::new(5);
        let sink = RecordingSink::new();

        for method in [DeliveryMethod::Courier, DeliveryMethod::Post, DeliveryMethod::PickUpPoint] {
            method.service().deliver_order(&order, &sink);
        }

        assert_eq!(
            sink.lines(),
            vec![
                "Доставка заказа 5 курьером.".to_string(),
                "Доставка заказа 5 почтой.".to_string(),
                "Доставка заказа 5 в пункт выдачи.".to_string(),
            ]
        );
    }

    #[test]
    fn test_pick_up_point_from_config() {
        let method: DeliveryMethod = serde_json::from_str("\"pick-up-point\"").unwrap();
        assert_eq!(method, DeliveryMethod::PickUpPoint);
    }
}
