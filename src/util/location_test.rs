use super::*;

#[test]
fn split_full_path_separates_query_and_fragment() {
    assert_eq!(split_full_path("/orders?page=2#top"), ("/orders", Some("page=2"), Some("top")));
    assert_eq!(split_full_path("/cart"), ("/cart", None, None));
    assert_eq!(split_full_path("/cart#x?y"), ("/cart", None, Some("x?y")));
}

#[test]
fn full_path_accepts_parts_with_or_without_markers() {
    assert_eq!(full_path("/orders", "?page=2", "#top"), "/orders?page=2#top");
    assert_eq!(full_path("/orders", "page=2", "top"), "/orders?page=2#top");
    assert_eq!(full_path("/cart", "", ""), "/cart");
    assert_eq!(full_path("", "?", "#"), "/");
}

#[test]
fn login_location_encodes_target() {
    assert_eq!(login_location("/login", "redirect", "/cart"), "/login?redirect=%2Fcart");
    assert_eq!(
        login_location("/login", "redirect", "/orders/42"),
        "/login?redirect=%2Forders%2F42"
    );
    assert_eq!(
        login_location("/login", "redirect", "/orders?page=2"),
        "/login?redirect=%2Forders%3Fpage%3D2"
    );
}

#[test]
fn login_location_target_survives_a_decode() {
    let location = login_location("/login", "redirect", "/orders?page=2#top");
    let (_, query, fragment) = split_full_path(&location);
    assert_eq!(fragment, None);
    let encoded = query.unwrap().strip_prefix("redirect=").unwrap();
    assert_eq!(urlencoding::decode(encoded).unwrap(), "/orders?page=2#top");
}

#[test]
fn sanitize_keeps_local_paths() {
    assert_eq!(sanitize_redirect_target(Some("/orders/42")), "/orders/42");
    assert_eq!(sanitize_redirect_target(Some("/orders?page=2")), "/orders?page=2");
}

#[test]
fn sanitize_rejects_foreign_or_missing_targets() {
    assert_eq!(sanitize_redirect_target(None), "/");
    assert_eq!(sanitize_redirect_target(Some("")), "/");
    assert_eq!(sanitize_redirect_target(Some("https://evil.example")), "/");
    assert_eq!(sanitize_redirect_target(Some("//evil.example")), "/");
    assert_eq!(sanitize_redirect_target(Some("/\\evil.example")), "/");
    assert_eq!(sanitize_redirect_target(Some("cart")), "/");
}
