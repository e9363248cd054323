use super::*;
use crate::net::auth_service::AuthFeed;
use crate::net::types::Identity;
use leptos_router::location::RequestUrl;

fn alice() -> Identity {
    Identity { uid: "u1".to_owned(), display_name: Some("Alice".to_owned()), email: None }
}

fn render_at(path: &str, feed: &AuthFeed) -> String {
    Owner::new().with(|| {
        provide_context(RequestUrl::new(path));
        provide_meta_context();
        let session = AuthSession::start(feed);
        let sign_out = feed.sign_out_action();
        view! { <AppShell session=session sign_out=sign_out /> }.to_html()
    })
}

// =============================================================================
// Loading gate
// =============================================================================

#[test]
fn loading_renders_only_the_placeholder() {
    let feed = AuthFeed::new();
    for path in ["/", "/privacy", "/menu", "/account", "/admin", "/nowhere"] {
        let html = render_at(path, &feed);
        assert!(html.contains("Loading..."), "{path}: {html}");
        assert!(!html.contains("site-header"), "{path}: {html}");
        assert!(!html.contains("app-main"), "{path}: {html}");
    }
}

#[test]
fn loading_hides_page_content() {
    let html = render_at("/privacy", &AuthFeed::new());
    assert!(!html.contains("Privacy Policy"));
}

// =============================================================================
// After the first auth delivery
// =============================================================================

#[test]
fn signed_out_chrome_route_renders_page_and_header() {
    let feed = AuthFeed::new();
    feed.publish(None);

    let html = render_at("/privacy", &feed);
    assert!(!html.contains("Loading..."));
    assert!(html.contains("Privacy Policy"));
    assert!(html.contains("site-header"));
    assert!(html.contains("Sign in"));
    assert!(html.contains("app-main--chrome"));
}

#[test]
fn signed_in_header_shows_label_and_sign_out() {
    let feed = AuthFeed::new();
    feed.publish(Some(alice()));

    let html = render_at("/menu", &feed);
    assert!(html.contains("Alice"));
    assert!(html.contains("Sign out"));
    assert!(html.contains("Garden Bowl"));
}

#[test]
fn portal_route_renders_without_chrome() {
    let feed = AuthFeed::new();
    feed.publish(Some(alice()));

    let html = render_at("/admin", &feed);
    assert!(html.contains("Menu copy"));
    assert!(html.contains("app-main--portal"));
    assert!(!html.contains("site-header"));
    assert!(!html.contains("site-footer"));
}

#[test]
fn login_page_renders_for_signed_out_visitor() {
    let feed = AuthFeed::new();
    feed.publish(None);

    let html = render_at("/login", &feed);
    assert!(html.contains("Continue to sign in"));
    assert!(!html.contains("site-header"));
}

#[test]
fn unknown_route_renders_not_found_after_auth() {
    let feed = AuthFeed::new();
    feed.publish(None);

    let html = render_at("/nowhere", &feed);
    assert!(html.contains("Page not found"));
    assert!(html.contains("site-header"));
}
