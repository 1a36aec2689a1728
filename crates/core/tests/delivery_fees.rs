//! Integration tests for cart delivery fee calculation.

use rusty_money::{
    Money,
    iso::{Currency, DZD},
};
use testresult::TestResult;

use carriage::prelude::*;

fn dzd(minor: i64) -> Money<'static, Currency> {
    Money::from_minor(minor, DZD)
}

fn config() -> FeeConfig {
    FeeConfig::new(dzd(500), "Oran")
}

fn s1_free_from_2500() -> StorePolicy {
    StorePolicy::new("S1", "Store One", "Oran").with_free_delivery_from(dzd(2500))
}

#[tokio::test]
async fn subtotal_above_threshold_is_free() -> TestResult {
    let policies = InMemoryStorePolicies::with_policies([s1_free_from_2500()]);
    let routes = RouteTable::with_routes([FeeRoute::new("Oran", "Oran", dzd(400))])?;
    let cart = Cart::with_lines([CartLine::new("S1", dzd(1000), 3)?], DZD)?;

    let calculator = DeliveryFeeCalculator::new(config(), policies, routes);
    let breakdown = calculator.calculate(&cart, "Oran").await?;

    let s1 = breakdown.store(&StoreId::from("S1"));

    assert_eq!(breakdown.per_store().len(), 1);
    assert_eq!(s1.map(|entry| entry.fee), Some(dzd(0)));
    assert_eq!(s1.map(|entry| entry.free_delivery_applied), Some(true));
    assert_eq!(breakdown.total_fee(), dzd(0));

    Ok(())
}

#[tokio::test]
async fn subtotal_below_threshold_pays_exact_route() -> TestResult {
    let policies = InMemoryStorePolicies::with_policies([s1_free_from_2500()]);
    let routes = RouteTable::with_routes([FeeRoute::new("Oran", "Oran", dzd(400))])?;
    let cart = Cart::with_lines([CartLine::new("S1", dzd(500), 2)?], DZD)?;

    let calculator = DeliveryFeeCalculator::new(config(), policies, routes);
    let breakdown = calculator.calculate(&cart, "Oran").await?;

    let s1 = breakdown.store(&StoreId::from("S1"));

    assert_eq!(s1.map(|entry| entry.fee), Some(dzd(400)));
    assert_eq!(s1.map(|entry| entry.free_delivery_applied), Some(false));
    assert_eq!(breakdown.total_fee(), dzd(400));

    Ok(())
}

#[tokio::test]
async fn missing_exact_route_uses_wildcard() -> TestResult {
    let policies = InMemoryStorePolicies::with_policies([StorePolicy::new(
        "S2",
        "Store Two",
        "Alger",
    )]);
    let routes = RouteTable::with_routes([FeeRoute::wildcard("Alger", dzd(700))])?;
    let cart = Cart::with_lines([CartLine::new("S2", dzd(1000), 1)?], DZD)?;

    let calculator = DeliveryFeeCalculator::new(config(), policies, routes);
    let breakdown = calculator.calculate(&cart, "Oran").await?;

    assert_eq!(breakdown.total_fee(), dzd(700));
    assert!(breakdown.has_non_local_origin());

    Ok(())
}

#[tokio::test]
async fn no_route_at_all_uses_default_fee() -> TestResult {
    let policies = InMemoryStorePolicies::with_policies([StorePolicy::new(
        "S3",
        "Store Three",
        "Tlemcen",
    )]);
    let routes = RouteTable::with_routes([FeeRoute::wildcard("Alger", dzd(700))])?;
    let cart = Cart::with_lines([CartLine::new("S3", dzd(1000), 1)?], DZD)?;

    let calculator = DeliveryFeeCalculator::new(config(), policies, routes);
    let breakdown = calculator.calculate(&cart, "Oran").await?;

    assert_eq!(breakdown.total_fee(), dzd(500));

    Ok(())
}

#[tokio::test]
async fn empty_cart_charges_default_fee_with_no_stores() -> TestResult {
    let calculator =
        DeliveryFeeCalculator::new(config(), InMemoryStorePolicies::new(), RouteTable::new());

    let breakdown = calculator.calculate(&Cart::new(DZD), "Anywhere").await?;

    assert_eq!(breakdown.total_fee(), dzd(500));
    assert!(breakdown.per_store().is_empty());
    assert!(!breakdown.has_non_local_origin());

    Ok(())
}

#[tokio::test]
async fn qualifying_store_contributes_nothing_to_total() -> TestResult {
    let policies = InMemoryStorePolicies::with_policies([
        s1_free_from_2500(),
        StorePolicy::new("S2", "Store Two", "Alger"),
    ]);
    let routes = RouteTable::with_routes([
        FeeRoute::new("Oran", "Oran", dzd(400)),
        FeeRoute::wildcard("Alger", dzd(700)),
    ])?;
    let cart = Cart::with_lines(
        [
            CartLine::new("S1", dzd(1000), 3)?,
            CartLine::new("S2", dzd(200), 1)?,
        ],
        DZD,
    )?;

    let calculator = DeliveryFeeCalculator::new(config(), policies, routes);
    let breakdown = calculator.calculate(&cart, "Oran").await?;

    assert_eq!(breakdown.total_fee(), dzd(700));
    assert_eq!(
        breakdown.store(&StoreId::from("S2")).map(|entry| entry.fee),
        Some(dzd(700))
    );

    Ok(())
}

#[tokio::test]
async fn threshold_boundary_is_inclusive() -> TestResult {
    let routes = RouteTable::with_routes([FeeRoute::new("Oran", "Oran", dzd(400))])?;
    let calculator = DeliveryFeeCalculator::new(
        config(),
        InMemoryStorePolicies::with_policies([s1_free_from_2500()]),
        routes,
    );

    let at_threshold = Cart::with_lines([CartLine::new("S1", dzd(2500), 1)?], DZD)?;
    let below_threshold = Cart::with_lines([CartLine::new("S1", dzd(2499), 1)?], DZD)?;

    let at = calculator.calculate(&at_threshold, "Oran").await?;
    let below = calculator.calculate(&below_threshold, "Oran").await?;

    assert_eq!(at.total_fee(), dzd(0));
    assert!(at.per_store().iter().all(|entry| entry.free_delivery_applied));
    assert_eq!(below.total_fee(), dzd(400));
    assert!(below.per_store().iter().all(|entry| !entry.free_delivery_applied));

    Ok(())
}

#[tokio::test]
async fn subtotal_beyond_minor_unit_range_is_rejected() -> TestResult {
    let calculator = DeliveryFeeCalculator::new(
        config(),
        InMemoryStorePolicies::with_policies([s1_free_from_2500()]),
        RouteTable::with_routes([FeeRoute::new("Oran", "Oran", dzd(400))])?,
    );

    let half = i64::MAX / 2 + 1;
    let cart = Cart::with_lines(
        [CartLine::new("S1", dzd(half), 1)?, CartLine::new("S1", dzd(half), 1)?],
        DZD,
    )?;

    let result = calculator.calculate(&cart, "Oran").await;

    assert!(
        matches!(
            &result,
            Err(DeliveryFeeError::Cart(CartError::Overflow(store))) if store.as_str() == "S1"
        ),
        "expected subtotal overflow, got {result:?}"
    );

    Ok(())
}

#[tokio::test]
async fn lines_are_grouped_before_threshold_check() -> TestResult {
    let calculator = DeliveryFeeCalculator::new(
        config(),
        InMemoryStorePolicies::with_policies([s1_free_from_2500()]),
        RouteTable::with_routes([FeeRoute::new("Oran", "Oran", dzd(400))])?,
    );

    // Neither line reaches 2500 on its own; together they do.
    let cart = Cart::with_lines(
        [
            CartLine::new("S1", dzd(1500), 1)?,
            CartLine::new("S1", dzd(1000), 1)?,
        ],
        DZD,
    )?;

    let breakdown = calculator.calculate(&cart, "Oran").await?;

    assert_eq!(breakdown.per_store().len(), 1);
    assert_eq!(breakdown.total_fee(), dzd(0));

    Ok(())
}

#[tokio::test]
async fn repeated_lines_are_charged_once_per_store() -> TestResult {
    let calculator = DeliveryFeeCalculator::new(
        config(),
        InMemoryStorePolicies::with_policies([StorePolicy::new("S1", "Store One", "Oran")]),
        RouteTable::with_routes([FeeRoute::new("Oran", "Oran", dzd(400))])?,
    );

    let cart = Cart::with_lines(
        [
            CartLine::new("S1", dzd(100), 1)?,
            CartLine::new("S1", dzd(100), 1)?,
            CartLine::new("S1", dzd(100), 1)?,
        ],
        DZD,
    )?;

    let breakdown = calculator.calculate(&cart, "Oran").await?;

    assert_eq!(breakdown.total_fee(), dzd(400));

    Ok(())
}

#[tokio::test]
async fn recalculation_is_idempotent() -> TestResult {
    let calculator = DeliveryFeeCalculator::new(
        config(),
        InMemoryStorePolicies::with_policies([
            s1_free_from_2500(),
            StorePolicy::new("S2", "Store Two", "Alger"),
        ]),
        RouteTable::with_routes([FeeRoute::wildcard("Alger", dzd(700))])?,
    );
    let cart = Cart::with_lines(
        [
            CartLine::new("S2", dzd(300), 2)?,
            CartLine::new("S1", dzd(100), 1)?,
        ],
        DZD,
    )?;

    let first = calculator.calculate(&cart, "Oran").await?;
    let second = calculator.calculate(&cart, "Oran").await?;

    assert_eq!(first, second);
    assert!(first.per_store().iter().all(|entry| entry.fee.to_minor_units() >= 0));
    assert!(first.total_fee().to_minor_units() >= 0);

    Ok(())
}

#[tokio::test]
async fn unknown_store_defaults_to_canonical_city() -> TestResult {
    let calculator = DeliveryFeeCalculator::new(
        config(),
        InMemoryStorePolicies::new(),
        RouteTable::with_routes([FeeRoute::new("Oran", "Setif", dzd(650))])?,
    );
    let cart = Cart::with_lines([CartLine::new("S404", dzd(100_000), 1)?], DZD)?;

    let breakdown = calculator.calculate(&cart, "Setif").await?;
    let entry = breakdown.store(&StoreId::from("S404"));

    assert_eq!(entry.map(|e| e.origin_city.as_str()), Some("Oran"));
    assert_eq!(entry.map(|e| e.store_name.as_str()), Some("S404"));
    assert_eq!(entry.map(|e| e.free_delivery_applied), Some(false));
    assert_eq!(breakdown.total_fee(), dzd(650));
    assert!(!breakdown.has_non_local_origin());

    Ok(())
}

#[tokio::test]
async fn per_store_entries_follow_cart_order() -> TestResult {
    let calculator = DeliveryFeeCalculator::new(
        config(),
        InMemoryStorePolicies::with_policies([
            StorePolicy::new("A", "Alpha", "Oran"),
            StorePolicy::new("B", "Bravo", "Alger"),
            StorePolicy::new("C", "Charlie", "Tlemcen"),
        ]),
        RouteTable::new(),
    );
    let cart = Cart::with_lines(
        [
            CartLine::new("C", dzd(100), 1)?,
            CartLine::new("A", dzd(100), 1)?,
            CartLine::new("C", dzd(100), 1)?,
            CartLine::new("B", dzd(100), 1)?,
        ],
        DZD,
    )?;

    let breakdown = calculator.calculate(&cart, "Oran").await?;
    let order: Vec<&str> = breakdown
        .per_store()
        .iter()
        .map(|entry| entry.store.as_str())
        .collect();

    assert_eq!(order, ["C", "A", "B"]);
    assert_eq!(breakdown.total_fee(), dzd(1500));

    Ok(())
}
