// src/tests/router_tests/terms_tests.rs

use crate::tests::utils::{body_string, get, get_htmx, get_with_headers, sample_app};

#[test]
fn terms_tab_is_the_default() {
    let app = sample_app(6);
    let body = body_string(get(&app, "/termos?tab=cookies"));

    assert!(body.contains("<html"));
    assert_eq!(body.matches(r#"class="tab-button active""#).count(), 1);
    assert!(body.contains(r#"aria-selected="true" href="/termos?tab=termos""#));
}

#[test]
fn tab_switch_swaps_panel_and_replaces_url() {
    let app = sample_app(6);
    let resp = get_htmx(&app, "/termos?ref=footer&tab=privacidade");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("HX-Replace-Url").unwrap(),
        "/termos?ref=footer&tab=privacidade"
    );
    assert!(resp.headers().get("HX-Push-Url").is_none());

    let body = body_string(resp);
    assert!(!body.contains("<html"), "Only the panel is swapped");
    assert_eq!(body.matches(r#"class="tab-content active""#).count(), 1);
    assert!(body.contains(r#"aria-selected="true" href="/termos?ref=footer&amp;tab=privacidade""#));
}

#[test]
fn history_restore_gets_the_full_page() {
    let app = sample_app(6);
    let resp = get_with_headers(
        &app,
        "/termos?tab=privacidade",
        &[("HX-Request", "true"), ("HX-History-Restore-Request", "true")],
    );
    assert!(resp.headers().get("HX-Replace-Url").is_none());

    let body = body_string(resp);
    assert!(body.contains("<html"));
    assert!(body.contains(r#"aria-selected="true" href="/termos?tab=privacidade""#));
}
