use super::*;

fn storefront() -> &'static RouteTable {
    RouteTable::storefront()
}

// =============================================================
// Table contents
// =============================================================

#[test]
fn storefront_table_is_valid() {
    assert_eq!(storefront().validate(), Ok(()));
}

#[test]
fn storefront_table_declares_every_route_in_order() {
    let names: Vec<RouteName> = storefront().routes().iter().map(|r| r.name).collect();
    assert_eq!(names, RouteName::ALL.to_vec());
}

#[test]
fn storefront_auth_flags_match_gated_pages() {
    let gated: Vec<RouteName> = storefront()
        .routes()
        .iter()
        .filter(|r| r.requires_auth())
        .map(|r| r.name)
        .collect();
    assert_eq!(
        gated,
        vec![RouteName::Cart, RouteName::Orders, RouteName::OrderDetail, RouteName::OrderConfirm]
    );
}

// =============================================================
// Resolution
// =============================================================

#[test]
fn resolve_static_paths() {
    for (path, name) in [
        ("/", RouteName::Home),
        ("/login", RouteName::Login),
        ("/register", RouteName::Register),
        ("/products", RouteName::Products),
        ("/cart", RouteName::Cart),
        ("/orders", RouteName::Orders),
    ] {
        assert_eq!(storefront().resolve(path).map(|m| m.name()), Some(name), "{path}");
    }
}

#[test]
fn resolve_product_detail_extracts_id() {
    let matched = storefront().resolve("/products/7").unwrap();
    assert_eq!(matched.name(), RouteName::ProductDetail);
    assert_eq!(matched.params.get("id"), Some("7"));
}

#[test]
fn resolve_order_confirm_beats_order_detail() {
    let matched = storefront().resolve("/orders/confirm").unwrap();
    assert_eq!(matched.name(), RouteName::OrderConfirm);
    assert!(matched.params.is_empty());
}

#[test]
fn resolve_order_detail_for_numeric_id() {
    let matched = storefront().resolve("/orders/42").unwrap();
    assert_eq!(matched.name(), RouteName::OrderDetail);
    assert_eq!(matched.params.get("id"), Some("42"));
}

#[test]
fn resolve_keeps_query_and_fragment_in_full_path() {
    let matched = storefront().resolve("/orders?page=2#top").unwrap();
    assert_eq!(matched.name(), RouteName::Orders);
    assert_eq!(matched.full_path, "/orders?page=2#top");
}

#[test]
fn resolve_unknown_path_is_none() {
    assert!(storefront().resolve("/checkout").is_none());
    assert!(storefront().resolve("/products/7/reviews").is_none());
    assert!(storefront().resolve("//").is_none());
    assert!(storefront().resolve("//cart").is_none());
}

#[test]
fn resolve_equal_rank_prefers_first_declared() {
    let table = RouteTable::new(vec![
        RouteDef::new("/orders/:id", RouteName::OrderDetail, RouteMeta::AUTH),
        RouteDef::new("/orders/:key", RouteName::OrderConfirm, RouteMeta::AUTH),
    ]);
    assert_eq!(table.resolve("/orders/9").map(|m| m.name()), Some(RouteName::OrderDetail));
}

// =============================================================
// Named paths
// =============================================================

#[test]
fn path_for_static_and_root_routes() {
    assert_eq!(storefront().path_for(RouteName::Home, &[]), Ok("/".to_owned()));
    assert_eq!(storefront().path_for(RouteName::Cart, &[]), Ok("/cart".to_owned()));
}

#[test]
fn path_for_fills_and_encodes_params() {
    assert_eq!(
        storefront().path_for(RouteName::OrderDetail, &[("id", "42")]),
        Ok("/orders/42".to_owned())
    );
    assert_eq!(
        storefront().path_for(RouteName::ProductDetail, &[("id", "a/b")]),
        Ok("/products/a%2Fb".to_owned())
    );
}

#[test]
fn path_for_missing_param_errors() {
    assert_eq!(
        storefront().path_for(RouteName::ProductDetail, &[]),
        Err(RouteTableError::MissingParam { name: RouteName::ProductDetail, param: "id" })
    );
    assert_eq!(
        storefront().path_for(RouteName::ProductDetail, &[("id", "")]),
        Err(RouteTableError::MissingParam { name: RouteName::ProductDetail, param: "id" })
    );
}

#[test]
fn path_for_unknown_route_errors() {
    let table = RouteTable::new(vec![RouteDef::new("/", RouteName::Home, RouteMeta::PUBLIC)]);
    assert_eq!(
        table.path_for(RouteName::Cart, &[]),
        Err(RouteTableError::UnknownRoute { name: RouteName::Cart })
    );
}

// =============================================================
// Validation
// =============================================================

#[test]
fn validate_rejects_duplicate_name() {
    let table = RouteTable::new(vec![
        RouteDef::new("/cart", RouteName::Cart, RouteMeta::AUTH),
        RouteDef::new("/basket", RouteName::Cart, RouteMeta::AUTH),
    ]);
    assert_eq!(table.validate(), Err(RouteTableError::DuplicateName { name: RouteName::Cart }));
}

#[test]
fn validate_rejects_same_shape_patterns() {
    let table = RouteTable::new(vec![
        RouteDef::new("/orders/:id", RouteName::OrderDetail, RouteMeta::AUTH),
        RouteDef::new("/orders/:key", RouteName::OrderConfirm, RouteMeta::AUTH),
    ]);
    assert_eq!(table.validate(), Err(RouteTableError::DuplicatePattern { path: "/orders/:key" }));
}

#[test]
fn validate_rejects_relative_pattern() {
    let table = RouteTable::new(vec![RouteDef::new("cart", RouteName::Cart, RouteMeta::AUTH)]);
    assert_eq!(table.validate(), Err(RouteTableError::RelativePattern { path: "cart" }));
}

#[test]
fn validate_rejects_empty_and_repeated_params() {
    let empty = RouteTable::new(vec![RouteDef::new("/orders/:", RouteName::OrderDetail, RouteMeta::AUTH)]);
    assert_eq!(empty.validate(), Err(RouteTableError::EmptyParam { path: "/orders/:" }));

    let repeated =
        RouteTable::new(vec![RouteDef::new("/orders/:id/:id", RouteName::OrderDetail, RouteMeta::AUTH)]);
    assert_eq!(
        repeated.validate(),
        Err(RouteTableError::RepeatedParam { path: "/orders/:id/:id", param: "id" })
    );
}

#[test]
fn route_table_error_messages_name_the_route() {
    let err = RouteTableError::MissingParam { name: RouteName::OrderDetail, param: "id" };
    assert_eq!(err.to_string(), "missing parameter `id` for route order-detail");
}
