pub mod models;
pub mod status;
pub mod payment;
pub mod delivery;
pub mod notification;
pub mod discount;
pub mod orchestrator;

pub use models::{Order, OrderItem};
pub use status::{StatusSink, ConsoleSink, RecordingSink};
pub use payment::{PaymentProcessor, PaymentMethod};
pub use delivery::{DeliveryService, DeliveryMethod};
pub use notification::{NotificationService, NotificationChannel};
pub use discount::DiscountCalculator;
pub use orchestrator::{CheckoutOrchestrator, CheckoutReport, CheckoutState};

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Order processing failed: {0}")]
    Processing(String),
}

pub type OrderResult<T> = Result<T, OrderError>;
