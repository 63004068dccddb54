// src/tests/router_tests/listings_tests.rs

use crate::handlers::listings::CONTACT_SOON;
use crate::tests::utils::{body_string, fixed_page_app, get, recording_app, sample_app};

#[test]
fn open_ended_price_and_minimum_bedrooms() {
    let (app, log) = recording_app(6, false);
    let body = body_string(get(&app, "/imoveis?preco=3000-%2B&quartos=3%2B"));

    assert_eq!(
        log.all(),
        vec!["list preco_min=3000&quartos=3&page=1&per_page=6".to_string()]
    );

    assert!(body.contains("Cobertura com Vista Panorâmica"));
    assert!(body.contains("Casa com Jardim na Zona Sul"));
    assert!(body.contains("Casa Térrea com Quintal"));
    assert!(!body.contains("Loft Industrial Reformado"));
    assert!(body.contains("3 imóveis encontrados"));
}

#[test]
fn closed_price_range_and_exact_bedrooms() {
    let app = sample_app(6);

    let body = body_string(get(&app, "/imoveis?preco=1000-2000"));
    assert!(body.contains("Studio Compacto e Funcional"));
    assert!(!body.contains("Apartamento Moderno no Centro"));

    let body = body_string(get(&app, "/imoveis?quartos=2"));
    assert!(body.contains("Apartamento Moderno no Centro"));
    assert!(!body.contains("Casa com Jardim na Zona Sul"));
}

#[test]
fn search_sets_the_results_title() {
    let app = sample_app(6);

    let body = body_string(get(&app, "/imoveis?search=loft"));
    assert!(body.contains("Resultados para &quot;loft&quot;"));
    assert!(body.contains("Loft Industrial Reformado"));

    let body = body_string(get(&app, "/imoveis"));
    assert!(body.contains("Imóveis Disponíveis"));
    assert!(body.contains("6 imóveis encontrados"));
}

#[test]
fn location_is_sent_as_search_without_free_text() {
    let (app, log) = recording_app(6, false);
    get(&app, "/imoveis?localizacao=Moema");
    assert_eq!(log.all(), vec!["list search=Moema&page=1&per_page=6".to_string()]);

    let (app, log) = recording_app(6, false);
    let body = body_string(get(&app, "/imoveis?search=casa&localizacao=Vila+Prudente"));
    assert_eq!(log.all(), vec!["list search=casa&page=1&per_page=6".to_string()]);
    assert!(body.contains("Casa Térrea com Quintal"));
    assert!(!body.contains("Casa com Jardim na Zona Sul"));
}

#[test]
fn pager_edges_are_disabled() {
    let app = sample_app(2);

    let first = body_string(get(&app, "/imoveis"));
    assert!(first.contains(r#"<button class="page-prev" disabled"#));
    assert!(first.contains(r#"<a class="page-next" href="/imoveis?page=2""#));

    let last = body_string(get(&app, "/imoveis?page=3"));
    assert!(last.contains(r#"<button class="page-next" disabled"#));
    assert!(last.contains(r#"<a class="page-prev" href="/imoveis?page=2""#));
}

#[test]
fn single_page_has_no_pager() {
    let app = sample_app(6);
    let body = body_string(get(&app, "/imoveis?page=abc"));
    assert!(body.contains(r#"<div class="pagination" id="pagination"></div>"#));
}

#[test]
fn no_match_shows_empty_state() {
    let app = sample_app(6);
    let body = body_string(get(&app, "/imoveis?tipo=castelo"));
    assert!(body.contains("Nenhum imóvel encontrado com os filtros aplicados."));
    assert!(body.contains("0 imóveis encontrados"));
}

#[test]
fn api_failure_renders_error_block_without_retry() {
    let (app, log) = recording_app(6, true);
    let resp = get(&app, "/imoveis?tipo=casa");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Erro ao carregar imóveis. Tente novamente."));
    assert_eq!(log.count("list"), 1);
}

#[test]
fn contact_button_returns_info_toast() {
    let app = sample_app(6);
    let body = body_string(get(&app, "/imoveis/contato?id=3"));
    assert!(body.contains(CONTACT_SOON));
    assert!(body.contains("notificacao-info"));
    assert!(!body.contains("<html"));
}

#[test]
fn count_leaves_out_rows_filtered_locally() {
    let app = fixed_page_app();
    let body = body_string(get(&app, "/imoveis?quartos=3%2B"));

    assert_eq!(body.matches(r#"class="imovel-card""#).count(), 2);
    assert!(!body.contains("Imóvel 1<"));
    assert!(body.contains("9 imóveis encontrados"));
    assert!(body.contains(r#"<a class="page-next" href="/imoveis?"#), "Later pages may still match");
}
