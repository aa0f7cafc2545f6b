use std::sync::Arc;
use storefront_order::{CheckoutOrchestrator, ConsoleSink, Order, OrderItem};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod app_config;

fn main() -> anyhow::Result<()> {
    let config = app_config::Config::load()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        // stdout carries the status lines
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let checkout = &config.checkout;
    tracing::info!(
        order_id = checkout.order_id,
        payment = ?checkout.payment,
        delivery = ?checkout.delivery,
        notification = ?checkout.notification,
        "Starting storefront checkout"
    );

    let mut order = Order::new(checkout.order_id);
    for item in &checkout.items {
        order.add_item(OrderItem::from(item));
    }
    order.set_payment_processor(checkout.payment.processor());
    order.set_delivery_service(checkout.delivery.service());

    let mut orchestrator =
        CheckoutOrchestrator::new(checkout.notification.service(), Arc::new(ConsoleSink));
    if !checkout.discount_hook {
        orchestrator = orchestrator.without_discount();
    }

    let report = orchestrator.checkout(&order)?;
    tracing::info!(state = ?report.state, total_price = report.total_price, "Checkout finished");

    Ok(())
}
