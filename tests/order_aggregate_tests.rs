//! End-to-end behavior of the order aggregate core: tier boundaries,
//! derived totals, lifecycle enforcement, notification ordering, and the
//! command-handler round trip.

use chrono::Utc;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use test_case::test_case;
use uuid::Uuid;

use order_domain::{
    discount_for, AddOrderItem, AggregateRoot, BranchId, CancelOrder, Cart, CreateOrder,
    CustomerId, DomainEntity, DomainError, InMemoryOrderRepository, MockEventPublisher,
    OrderCommandHandler, OrderEvent, OrderRepository, OrderStatus, ProductId, RemoveOrderItem,
    Sale, SaleKind, Validate,
};

fn new_sale() -> Sale {
    Sale::create(
        Utc::now(),
        CustomerId::new(),
        "C1",
        BranchId::new(),
        "B1",
    )
    .expect("valid header")
}

#[test_case(1, dec!(0.00) ; "quantity 1")]
#[test_case(3, dec!(0.00) ; "boundary 3 stays free")]
#[test_case(4, dec!(0.10) ; "boundary 4 enters ten percent")]
#[test_case(9, dec!(0.10) ; "boundary 9 stays ten percent")]
#[test_case(10, dec!(0.20) ; "boundary 10 enters twenty percent")]
#[test_case(20, dec!(0.20) ; "boundary 20 stays twenty percent")]
fn discount_boundaries(quantity: u32, expected: Decimal) {
    assert_eq!(discount_for(quantity).unwrap(), expected);
}

#[test]
fn quantity_21_fails_construction() {
    let mut sale = new_sale();
    let err = sale
        .add_item(ProductId::new(), "P1", 21, dec!(10.00))
        .unwrap_err();
    assert_eq!(err, DomainError::InvalidQuantity { quantity: 21 });
}

// Scenario A: two units at 10.00, no discount.
#[test]
fn scenario_a_plain_item() {
    let mut sale = new_sale();
    let total = sale
        .add_item(ProductId::new(), "P1", 2, dec!(10.00))
        .unwrap()
        .total_amount();

    assert_eq!(total, dec!(20.00));
    assert_eq!(sale.total_amount(), dec!(20.00));
}

// Scenario B: five units at 20.00 earn the 10% tier.
#[test]
fn scenario_b_ten_percent_tier() {
    let mut sale = new_sale();
    let item = sale
        .add_item(ProductId::new(), "P2", 5, dec!(20.00))
        .unwrap();

    assert_eq!(item.discount(), dec!(0.10));
    assert_eq!(item.total_amount(), dec!(90.00));
}

// Scenario C: fifteen units at 5.00 earn the 20% tier.
#[test]
fn scenario_c_twenty_percent_tier() {
    let mut sale = new_sale();
    let item = sale
        .add_item(ProductId::new(), "P3", 15, dec!(5.00))
        .unwrap();

    assert_eq!(item.discount(), dec!(0.20));
    assert_eq!(item.total_amount(), dec!(60.00));
}

// Scenario D: both items on one aggregate, then remove the first.
#[test]
fn scenario_d_aggregate_total_follows_items() {
    let mut sale = new_sale();
    let first = sale
        .add_item(ProductId::new(), "P2", 5, dec!(20.00))
        .unwrap()
        .id();
    sale.add_item(ProductId::new(), "P3", 15, dec!(5.00))
        .unwrap();
    assert_eq!(sale.total_amount(), dec!(150.00));

    sale.remove_item(first).unwrap();
    assert_eq!(sale.total_amount(), dec!(60.00));
    assert_eq!(sale.items().len(), 1);
}

// Scenario E: a cancelled aggregate rejects both mutations.
#[test]
fn scenario_e_cancelled_rejects_mutation() {
    let mut sale = new_sale();
    let item_id = sale
        .add_item(ProductId::new(), "P1", 2, dec!(10.00))
        .unwrap()
        .id();

    sale.cancel();
    assert_eq!(sale.status(), OrderStatus::Cancelled);

    let expected = DomainError::ModificationNotAllowed {
        kind: "sale",
        status: "Cancelled",
    };
    assert_eq!(
        sale.add_item(ProductId::new(), "P4", 1, dec!(1.00))
            .unwrap_err(),
        expected
    );
    assert_eq!(sale.remove_item(item_id).unwrap_err(), expected);
}

#[test]
fn status_never_returns_to_active() {
    let mut cart = Cart::create(
        Utc::now(),
        CustomerId::new(),
        "C1",
        BranchId::new(),
        "B1",
    )
    .unwrap();

    cart.cancel();
    cart.cancel();
    cart.cancel();
    assert_eq!(cart.status(), OrderStatus::Cancelled);
}

#[test]
fn removing_and_readding_gives_new_identity_same_amounts() {
    let mut sale = new_sale();
    let product_id = ProductId::new();

    let original = sale
        .add_item(product_id, "P2", 5, dec!(20.00))
        .unwrap()
        .clone();
    sale.remove_item(original.id()).unwrap();

    let readded = sale.add_item(product_id, "P2", 5, dec!(20.00)).unwrap();

    assert_ne!(readded.id(), original.id());
    assert_eq!(readded.discount(), original.discount());
    assert_eq!(readded.total_amount(), original.total_amount());
}

#[test]
fn notifications_are_queued_in_transition_order() {
    let mut sale = new_sale();
    let item_id = sale
        .add_item(ProductId::new(), "P1", 2, dec!(10.00))
        .unwrap()
        .id();
    sale.remove_item(item_id).unwrap();
    sale.cancel();

    let types: Vec<&str> = sale
        .take_events()
        .iter()
        .map(|e| match e {
            OrderEvent::Created(_) => "created",
            OrderEvent::Modified(_) => "modified",
            OrderEvent::ItemRemoved(_) => "item_removed",
            OrderEvent::Cancelled(_) => "cancelled",
        })
        .collect();

    assert_eq!(
        types,
        vec!["created", "modified", "item_removed", "modified", "cancelled"]
    );
    // The queue drains once
    assert!(sale.take_events().is_empty());
}

#[test]
fn validate_reports_pass_for_well_formed_aggregate() {
    let mut sale = new_sale();
    sale.add_item(ProductId::new(), "P1", 2, dec!(10.00))
        .unwrap();

    let report = sale.validate();
    assert!(report.is_valid());
    assert!(report.failures().is_empty());
}

#[test]
fn create_reports_every_failing_field() {
    let err = Sale::create(
        Utc::now() + chrono::Duration::days(1),
        CustomerId::from_uuid(Uuid::nil()),
        "",
        BranchId::from_uuid(Uuid::nil()),
        " ",
    )
    .unwrap_err();

    match err {
        DomainError::Validation(report) => {
            assert_eq!(report.failures().len(), 5);
        }
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[test]
fn handler_flow_matches_direct_aggregate_use() {
    let repository = InMemoryOrderRepository::new();
    let publisher = MockEventPublisher::new();
    let handler: OrderCommandHandler<SaleKind, _, _> =
        OrderCommandHandler::new(repository.clone(), publisher.clone());

    let order_id = handler
        .handle_create(CreateOrder {
            created_at: Utc::now(),
            customer_id: CustomerId::new(),
            customer_name: "C1".to_string(),
            branch_id: BranchId::new(),
            branch_name: "B1".to_string(),
        })
        .unwrap();

    let item_id = handler
        .handle_add_item(AddOrderItem {
            order_id: *order_id.as_uuid(),
            product_id: ProductId::new(),
            product_name: "P2".to_string(),
            quantity: 5,
            unit_price: dec!(20.00),
        })
        .unwrap();
    handler
        .handle_add_item(AddOrderItem {
            order_id: *order_id.as_uuid(),
            product_id: ProductId::new(),
            product_name: "P3".to_string(),
            quantity: 15,
            unit_price: dec!(5.00),
        })
        .unwrap();

    let stored = repository.get_by_id(order_id).unwrap().unwrap();
    assert_eq!(stored.total_amount(), dec!(150.00));
    assert_eq!(stored.version(), 2);

    handler
        .handle_remove_item(RemoveOrderItem {
            order_id: *order_id.as_uuid(),
            item_id: *item_id.as_uuid(),
        })
        .unwrap();
    let stored = repository.get_by_id(order_id).unwrap().unwrap();
    assert_eq!(stored.total_amount(), dec!(60.00));

    handler
        .handle_cancel(CancelOrder {
            order_id: *order_id.as_uuid(),
        })
        .unwrap();
    let stored = repository.get_by_id(order_id).unwrap().unwrap();
    assert_eq!(stored.status(), OrderStatus::Cancelled);

    let types: Vec<&str> = publisher
        .published_events()
        .iter()
        .map(|e| match e {
            OrderEvent::Created(_) => "created",
            OrderEvent::Modified(_) => "modified",
            OrderEvent::ItemRemoved(_) => "item_removed",
            OrderEvent::Cancelled(_) => "cancelled",
        })
        .collect();
    assert_eq!(
        types,
        vec![
            "created",
            "modified",
            "modified",
            "item_removed",
            "modified",
            "cancelled"
        ]
    );
}

proptest! {
    /// Line total always equals quantity * unit_price * (1 - discount),
    /// rounded to currency scale with banker's rounding.
    #[test]
    fn prop_line_total_formula(quantity in 1u32..=20, price_cents in 1i64..=100_000) {
        let unit_price = Decimal::new(price_cents, 2);
        let mut sale = new_sale();
        let item = sale
            .add_item(ProductId::new(), "P", quantity, unit_price)
            .unwrap();

        let discount = discount_for(quantity).unwrap();
        let expected = (Decimal::from(quantity) * unit_price * (Decimal::ONE - discount))
            .round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
        prop_assert_eq!(item.total_amount(), expected);
    }

    /// The aggregate total equals the sum of item totals after every add
    /// and after every remove.
    #[test]
    fn prop_aggregate_total_is_item_sum(
        lines in prop::collection::vec((1u32..=20, 1i64..=10_000), 1..=8),
        remove_index in 0usize..8,
    ) {
        let mut sale = new_sale();
        for (quantity, price_cents) in &lines {
            sale.add_item(ProductId::new(), "P", *quantity, Decimal::new(*price_cents, 2))
                .unwrap();
            let sum: Decimal = sale.items().iter().map(|i| i.total_amount()).sum();
            prop_assert_eq!(sale.total_amount(), sum);
        }

        let target = sale.items().get(remove_index % sale.items().len()).map(|i| i.id());
        if let Some(item_id) = target {
            sale.remove_item(item_id).unwrap();
            let sum: Decimal = sale.items().iter().map(|i| i.total_amount()).sum();
            prop_assert_eq!(sale.total_amount(), sum);
        }
    }
}
