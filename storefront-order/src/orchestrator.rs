use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::discount::DiscountCalculator;
use crate::models::Order;
use crate::notification::NotificationService;
use crate::status::StatusSink;
use crate::{OrderError, OrderResult};

/// Where an order stands within a checkout pass
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckoutState {
    Built,
    PaymentAttempted,
    Fulfilled,
    PaymentFailed,
}

/// Outcome of one checkout pass
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutReport {
    pub order_id: u64,
    pub total_price: f64,
    /// Informational only, never subtracted from the total
    pub discount: Option<f64>,
    pub state: CheckoutState,
    pub processed_at: DateTime<Utc>,
}

impl CheckoutReport {
    pub fn is_fulfilled(&self) -> bool {
        self.state == CheckoutState::Fulfilled
    }
}

/// Runs an order through discount, payment, delivery and notification
pub struct CheckoutOrchestrator {
    notifier: Arc<dyn NotificationService>,
    sink: Arc<dyn StatusSink>,
    discount: Option<DiscountCalculator>,
}

impl CheckoutOrchestrator {
    pub fn new(notifier: Arc<dyn NotificationService>, sink: Arc<dyn StatusSink>) -> Self {
        Self {
            notifier,
            sink,
            discount: Some(DiscountCalculator::new()),
        }
    }

    /// Skip the discount hook entirely
    pub fn without_discount(mut self) -> Self {
        self.discount = None;
        self
    }

    /// Process the order once.
    ///
    /// A declined payment is a normal outcome reported as
    /// [`CheckoutState::PaymentFailed`]. An error is only returned when the
    /// order has no payment processor or no delivery service attached.
    pub fn checkout(&self, order: &Order) -> OrderResult<CheckoutReport> {
        let run_id = Uuid::new_v4();
        let span = tracing::info_span!("checkout", %run_id, order_id = order.id());
        let _guard = span.enter();

        let processor = order.payment_processor().ok_or_else(|| {
            OrderError::Processing(format!("order {} has no payment processor", order.id()))
        })?;
        let delivery = order.delivery_service().ok_or_else(|| {
            OrderError::Processing(format!("order {} has no delivery service", order.id()))
        })?;

        if let Ok(snapshot) = serde_json::to_string(order) {
            tracing::debug!(%snapshot, "Order built");
        }

        let mut state = CheckoutState::Built;
        let total_price = order.total_price();

        let discount = self
            .discount
            .as_ref()
            .map(|calculator| calculator.calculate_discount(order, self.sink.as_ref()));

        tracing::info!(payment = processor.label(), total_price, "Processing payment");
        let approved = processor.process_payment(order, self.sink.as_ref());
        Self::transition(&mut state, CheckoutState::PaymentAttempted);

        if approved {
            self.sink.emit("Оплата прошла успешно.");
            Self::transition(&mut state, CheckoutState::Fulfilled);

            delivery.deliver_order(order, self.sink.as_ref());

            let message = format!("Ваш заказ {} был размещен.", order.id());
            self.notifier.send_notification(order, &message, self.sink.as_ref());
        } else {
            tracing::warn!(payment = processor.label(), "Payment declined");
            self.sink.emit("Оплата не прошла.");
            Self::transition(&mut state, CheckoutState::PaymentFailed);
        }

        Ok(CheckoutReport {
            order_id: order.id(),
            total_price,
            discount,
            state,
            processed_at: Utc::now(),
        })
    }

    fn transition(state: &mut CheckoutState, next: CheckoutState) {
        tracing::info!(from = ?state, to = ?next, "Checkout state changed");
        *state = next;
    }
}
