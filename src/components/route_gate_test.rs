use super::*;

#[test]
fn destination_uses_table_match_when_router_agrees() {
    let table = RouteTable::storefront();
    let to = destination(table, RouteName::OrderDetail, "/orders/42?tab=items").unwrap();
    assert_eq!(to.name(), RouteName::OrderDetail);
    assert_eq!(to.params.get("id"), Some("42"));
    assert_eq!(to.full_path, "/orders/42?tab=items");
}

#[test]
fn destination_falls_back_to_declared_route_on_disagreement() {
    let table = RouteTable::storefront();
    let to = destination(table, RouteName::Cart, "/basket").unwrap();
    assert_eq!(to.name(), RouteName::Cart);
    assert!(to.params.is_empty());
    assert_eq!(to.full_path, "/basket");
}

#[test]
fn destination_missing_from_table_is_none() {
    let table = RouteTable::new(Vec::new());
    assert!(destination(&table, RouteName::Home, "/").is_none());
}

#[test]
fn fresh_storage_snapshot_decides_gated_navigation() {
    let config = GuardConfig::default();
    let table = RouteTable::storefront();
    let to = destination(table, RouteName::Cart, "/cart").unwrap();

    let written_elsewhere = AuthState::load_with(&config.token_storage_key, |_| Some("tok-other-tab".to_owned()));
    assert_eq!(guard::before_each(&to, None, &written_elsewhere, &config), NavigationDecision::Proceed);

    let cleared_elsewhere = AuthState::load_with(&config.token_storage_key, |_| None);
    assert_eq!(
        guard::before_each(&to, None, &cleared_elsewhere, &config),
        NavigationDecision::RedirectToLogin {
            location: "/login?redirect=%2Fcart".to_owned(),
            message: config.login_required_message.clone(),
        }
    );
}
