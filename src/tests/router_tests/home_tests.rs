// src/tests/router_tests/home_tests.rs

use crate::handlers::home::{lucky_with, EMPTY_SEARCH, LUCKY_SEARCHES};
use crate::respond;
use crate::tests::utils::{body_string, get, sample_app};
use astra::Body;
use http::{Method, Request};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn home_page_has_search_and_quick_filters() {
    let app = sample_app(6);
    let resp = get(&app, "/");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains(r#"action="/buscar""#));
    assert!(body.contains(r#"href="/imoveis?tipo=apartamento""#));
    assert!(body.contains(r#"href="/imoveis?tipo=studio""#));
    assert!(body.contains("rootMargin: '0px 0px -50px 0px'"));
    assert!(body.contains("feature-card"));
}

#[test]
fn search_redirects_with_trimmed_term() {
    let app = sample_app(6);
    let resp = get(&app, "/buscar?q=++Casa+Verde++");

    assert_eq!(resp.status(), 302);
    assert_eq!(
        resp.headers().get("Location").unwrap(),
        "/imoveis?search=Casa+Verde"
    );
}

#[test]
fn blank_search_alerts_and_stays_home() {
    let app = sample_app(6);
    let resp = get(&app, "/buscar?q=+++");

    assert_eq!(resp.status(), 200, "No navigation on an empty search");
    assert!(resp.headers().get("Location").is_none());

    let body = body_string(resp);
    assert!(body.contains(&format!("alert(\"{EMPTY_SEARCH}\")")));
}

#[test]
fn lucky_search_fills_the_box_and_navigates_after_a_delay() {
    let resp = lucky_with(&mut StdRng::seed_from_u64(42)).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    let picked = LUCKY_SEARCHES
        .iter()
        .find(|term| body.contains(&format!(r#"value="{term}""#)))
        .expect("one canned phrase is echoed in the search box");

    let target = crate::handlers::home::search_url(picked);
    assert!(body.contains(&format!(r#"content="0.5;url={target}""#)));
}

#[test]
fn unknown_path_is_served_as_not_found_page() {
    let app = sample_app(6);
    let req = Request::builder()
        .method(Method::GET)
        .uri("/nada")
        .body(Body::empty())
        .unwrap();

    let resp = respond(req, &app);
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Página não encontrada"));
}
