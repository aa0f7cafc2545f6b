use serde::Deserialize;
use std::env;
use storefront_order::{DeliveryMethod, NotificationChannel, OrderItem, PaymentMethod};

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub checkout: CheckoutConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    /// Used when `RUST_LOG` is not set
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "storefront_app=info,storefront_order=info".to_string(),
        }
    }
}

/// The order and strategies a single run checks out
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CheckoutConfig {
    pub order_id: u64,
    pub payment: PaymentMethod,
    pub delivery: DeliveryMethod,
    pub notification: NotificationChannel,
    pub discount_hook: bool,
    pub items: Vec<ItemConfig>,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            order_id: 1,
            payment: PaymentMethod::CreditCard,
            delivery: DeliveryMethod::Courier,
            notification: NotificationChannel::Email,
            discount_hook: true,
            items: vec![
                ItemConfig {
                    name: "Товар A".to_string(),
                    price: 10.0,
                    quantity: 2,
                },
                ItemConfig {
                    name: "Товар B".to_string(),
                    price: 20.0,
                    quantity: 1,
                },
            ],
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ItemConfig {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl From<&ItemConfig> for OrderItem {
    fn from(item: &ItemConfig) -> Self {
        OrderItem::new(item.name.clone(), item.price, item.quantity)
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Every file is optional, the defaults reproduce the reference run
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `STOREFRONT_CHECKOUT__PAYMENT=paypal`
            .add_source(
                config::Environment::with_prefix("STOREFRONT")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        s.try_deserialize()
    }
}
