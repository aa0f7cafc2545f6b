use std::sync::Arc;

use storefront_order::{
    CheckoutOrchestrator, CheckoutState, DeliveryMethod, NotificationChannel, Order, OrderItem,
    PaymentMethod, RecordingSink,
};

#[test]
fn test_reference_checkout() {
    let mut order = Order::new(1);
    order.add_item(OrderItem::new("Товар A", 10.0, 2));
    order.add_item(OrderItem::new("Товар B", 20.0, 1));
    order.set_payment_processor(PaymentMethod::CreditCard.processor());
    order.set_delivery_service(DeliveryMethod::Courier.service());

    let sink = Arc::new(RecordingSink::new());
    let report = CheckoutOrchestrator::new(NotificationChannel::Email.service(), sink.clone())
        .checkout(&order)
        .unwrap();

    assert_eq!(report.order_id, 1);
    assert_eq!(report.total_price, 40.0);
    assert_eq!(report.state, CheckoutState::Fulfilled);

    assert_eq!(
        sink.lines(),
        vec![
            "Расчет скидки...".to_string(),
            "Обработка оплаты кредитной картой для заказа 1 на сумму 40.0".to_string(),
            "Оплата прошла успешно.".to_string(),
            "Доставка заказа 1 курьером.".to_string(),
            "Отправка уведомления по email для заказа 1: Ваш заказ 1 был размещен.".to_string(),
        ]
    );

    let lines = sink.lines();
    let deliveries = lines.iter().filter(|l| l.starts_with("Доставка заказа 1")).count();
    let notifications = lines.iter().filter(|l| l.contains("заказ 1")).filter(|l| l.starts_with("Отправка")).count();
    assert_eq!(deliveries, 1);
    assert_eq!(notifications, 1);
}

#[test]
fn test_same_strategies_serve_several_orders() {
    let processor = PaymentMethod::PayPal.processor();
    let delivery = DeliveryMethod::PickUpPoint.service();
    let sink = Arc::new(RecordingSink::new());
    let orchestrator = CheckoutOrchestrator::new(NotificationChannel::Sms.service(), sink.clone())
        .without_discount();

    for id in [10, 11] {
        let mut order = Order::new(id);
        order.add_item(OrderItem::new("book", 12.5, 2));
        order.set_payment_processor(processor.clone());
        order.set_delivery_service(delivery.clone());

        let report = orchestrator.checkout(&order).unwrap();
        assert!(report.is_fulfilled());
        assert_eq!(report.total_price, 25.0);
    }

    let lines = sink.lines();
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], "Обработка оплаты PayPal для заказа 10 на сумму 25.0");
    assert_eq!(lines[7], "Отправка SMS-уведомления для заказа 11: Ваш заказ 11 был размещен.");
}
