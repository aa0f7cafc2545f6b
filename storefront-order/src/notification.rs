use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::models::Order;
use crate::status::StatusSink;

/// Tells the customer about their order. Fire and forget: no delivery receipt.
pub trait NotificationService: Send + Sync {
    fn send_notification(&self, order: &Order, message: &str, sink: &dyn StatusSink);

    fn label(&self) -> &'static str;
}

pub struct EmailNotification;

impl NotificationService for EmailNotification {
    fn send_notification(&self, order: &Order, message: &str, sink: &dyn StatusSink) {
        sink.emit(&format!(
            "Отправка уведомления по email для заказа {}: {}",
            order.id(),
            message
        ));
    }

    fn label(&self) -> &'static str {
        "email"
    }
}

pub struct SmsNotification;

impl NotificationService for SmsNotification {
    fn send_notification(&self, order: &Order, message: &str, sink: &dyn StatusSink) {
        sink.emit(&format!("Отправка SMS-уведомления для заказа {}: {}", order.id(), message));
    }

    fn label(&self) -> &'static str {
        "sms"
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationChannel {
    #[default]
    Email,
    Sms,
}

impl NotificationChannel {
    pub fn service(self) -> Arc<dyn NotificationService> {
        match self {
            NotificationChannel::Email => Arc::new(EmailNotification),
            NotificationChannel::Sms => Arc::new(SmsNotification),
        }
    }
}
