use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::models::Order;
use crate::status::StatusSink;

/// Charges the customer for an order.
///
/// Returns `true` when the payment went through. Implementations only see the
/// order through a shared reference and never change it.
pub trait PaymentProcessor: Send + Sync {
    fn process_payment(&self, order: &Order, sink: &dyn StatusSink) -> bool;

    /// Short name used in logs
    fn label(&self) -> &'static str;
}

pub struct CreditCardProcessor;

impl PaymentProcessor for CreditCardProcessor {
    fn process_payment(&self, order: &Order, sink: &dyn StatusSink) -> bool {
        sink.emit(&format!(
            "Обработка оплаты кредитной картой для заказа {} на сумму {:?}",
            order.id(),
            order.total_price()
        ));
        true
    }

    fn label(&self) -> &'static str {
        "credit-card"
    }
}

pub struct PayPalProcessor;

impl PaymentProcessor for PayPalProcessor {
    fn process_payment(&self, order: &Order, sink: &dyn StatusSink) -> bool {
        sink.emit(&format!(
            "Обработка оплаты PayPal для заказа {} на сумму {:?}",
            order.id(),
            order.total_price()
        ));
        true
    }

    fn label(&self) -> &'static str {
        "paypal"
    }
}

pub struct BankTransferProcessor;

impl PaymentProcessor for BankTransferProcessor {
    fn process_payment(&self, order: &Order, sink: &dyn StatusSink) -> bool {
        sink.emit(&format!(
            "Обработка оплаты банковским переводом для заказа {} на сумму {:?}",
            order.id(),
            order.total_price()
        ));
        true
    }

    fn label(&self) -> &'static str {
        "bank-transfer"
    }
}

/// The payment options a storefront can be configured with
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    #[default]
    CreditCard,
    #[serde(rename = "paypal")]
    PayPal,
    BankTransfer,
}

impl PaymentMethod {
    pub fn processor(self) -> Arc<dyn PaymentProcessor> {
        match self {
            PaymentMethod::CreditCard => Arc::new(CreditCardProcessor),
            PaymentMethod::PayPal => Arc::new(PayPalProcessor),
            PaymentMethod::BankTransfer => Arc::new(BankTransferProcessor),
        }
    }
}
