// src/tests/router_tests/detail_tests.rs

use crate::handlers::detail::{BOOKING_FAILED, BOOKING_OK, LOAD_FAILED, MISSING_ID, REQUIRED_FIELDS};
use crate::templates::layouts::desktop::REQUEST_LABEL_CSS;
use crate::tests::utils::{
    body_string, counting_maps_app, get, get_htmx, post_form, recording_app, sample_app,
};

const FULL_FORM: &str = "imovel_id=1&nome=Ana+Souza&email=ana%40example.com&telefone=11999990000\
                         &data_visita=2030-01-10&hora_visita=09%3A00&mensagem=";

#[test]
fn missing_id_shows_error_without_fetching() {
    let (app, log) = recording_app(6, false);

    for uri in ["/detalhes", "/detalhes?id=", "/detalhes?id=abc", "/detalhes?id=-1"] {
        let resp = get(&app, uri);
        assert_eq!(resp.status(), 400, "{uri}");
        let body = body_string(resp);
        assert!(body.contains(MISSING_ID));
        assert!(body.contains(r#"href="/imoveis""#));
    }

    assert!(log.all().is_empty(), "No API call for a missing id");
}

#[test]
fn unknown_listing_is_not_found() {
    let app = sample_app(6);
    let resp = get(&app, "/detalhes?id=999");
    assert_eq!(resp.status(), 404);

    let body = body_string(resp);
    assert!(body.contains(LOAD_FAILED));
    assert!(body.contains("Voltar para Imóveis"));
}

#[test]
fn transport_failure_is_bad_gateway() {
    let (app, _log) = recording_app(6, true);
    let resp = get(&app, "/detalhes?id=1");
    assert_eq!(resp.status(), 502);
    assert!(body_string(resp).contains(LOAD_FAILED));
}

#[test]
fn detail_page_renders_listing_and_defers_the_map() {
    let (app, maps) = counting_maps_app();
    let resp = get(&app, "/detalhes?id=1");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("<title>Apartamento Moderno no Centro - UrbanNest</title>"));
    assert!(body.contains("R$\u{a0}2.500,00/mês"));
    assert!(body.contains(">Disponível<"));
    assert!(body.contains(">Apartamento<"));
    assert!(body.contains("Rua das Flores, 123 - Centro, São Paulo - SP"));
    assert!(body.contains("Sem imagem disponível"));
    assert!(body.contains(r#"hx-sync="this:replace""#));

    assert!(body.contains(r#"hx-get="/detalhes/mapa?id=1" hx-trigger="load""#));
    assert!(body.contains("Carregando mapa..."));
    assert!(!body.contains("Google Maps API não configurada"));
    assert_eq!(maps.calls(), 0, "The page never waits on the map provider");
}

#[test]
fn map_fragment_falls_back_to_the_address() {
    let (app, maps) = counting_maps_app();
    let body = body_string(get_htmx(&app, "/detalhes/mapa?id=1"));

    assert!(!body.contains("<html"));
    assert!(body.contains("Mapa não disponível"));
    assert!(body.contains("Google Maps API não configurada"));
    assert!(body.contains("Rua das Flores, 123 - Centro, São Paulo - SP"));
    assert_eq!(maps.calls(), 1);
}

#[test]
fn map_fragment_for_unknown_listing_has_no_location() {
    let (app, maps) = counting_maps_app();
    let body = body_string(get_htmx(&app, "/detalhes/mapa?id=999"));

    assert!(body.contains("Localização não informada"));
    assert_eq!(maps.calls(), 0);
}

#[test]
fn booking_button_hides_idle_label_while_sending() {
    let app = sample_app(6);
    let body = body_string(get(&app, "/detalhes?id=1"));

    assert!(body.contains(r#"<span class="label-idle">"#));
    assert!(body.contains(r#"<span class="htmx-indicator">"#));
    assert!(body.contains(REQUEST_LABEL_CSS));
    assert!(REQUEST_LABEL_CSS.contains(".htmx-request .label-idle{display:none}"));
}

#[test]
fn slots_fragment_lists_free_times() {
    let app = sample_app(6);
    let body = body_string(get(&app, "/detalhes/horarios?imovel_id=1&data_visita=2030-01-10"));

    assert!(body.contains(r#"<option value="">Selecione um horário</option>"#));
    assert!(body.contains(r#"<option value="09:00">09:00</option>"#));
    assert!(body.contains(r#"<option value="18:00">18:00</option>"#));
    assert!(!body.contains("<html"));
}

#[test]
fn slots_fragment_reports_errors_and_waits_for_a_date() {
    let (app, log) = recording_app(6, false);

    let body = body_string(get(&app, "/detalhes/horarios?imovel_id=1&data_visita=10%2F01%2F2030"));
    assert!(body.contains("Erro ao carregar horários"));

    let body = body_string(get(&app, "/detalhes/horarios?imovel_id=1&data_visita="));
    assert!(body.contains("Selecione uma data primeiro"));
    assert_eq!(log.count("slots"), 1);
}

#[test]
fn blank_required_field_never_reaches_the_api() {
    let (app, log) = recording_app(6, false);
    let form = FULL_FORM.replace("nome=Ana+Souza", "nome=+++");

    let body = body_string(post_form(&app, "/detalhes/agendar", &form));

    assert!(body.contains(REQUIRED_FIELDS));
    assert!(body.contains(r#"hx-swap-oob="beforeend""#));
    assert!(body.contains(r#"id="nome" class="erro""#));
    assert!(body.contains(r#"value="ana@example.com""#), "Entered values are kept");
    assert!(log.all().is_empty(), "Validation failure makes no network call");
}

#[test]
fn successful_booking_resets_form_and_refreshes_slots() {
    let (app, log) = recording_app(6, false);

    let body = body_string(post_form(&app, "/detalhes/agendar", FULL_FORM));

    assert!(body.contains(BOOKING_OK));
    assert!(body.contains("notificacao-sucesso"));
    assert!(!body.contains("ana@example.com"), "Form is reset");
    assert!(body.contains(r#"value="2030-01-10""#), "Visit date is kept");
    assert!(!body.contains(r#"<option value="09:00">"#), "Booked slot is gone");
    assert!(body.contains(r#"<option value="10:00">10:00</option>"#));
    assert_eq!(log.all(), vec!["book 1 09:00".to_string(), "slots 1 2030-01-10".to_string()]);
}

#[test]
fn backend_error_message_is_shown() {
    let app = sample_app(6);
    post_form(&app, "/detalhes/agendar", FULL_FORM);

    let body = body_string(post_form(&app, "/detalhes/agendar", FULL_FORM));
    assert!(body.contains("Já existe um agendamento para este horário"));
    assert!(body.contains("notificacao-erro"));
    assert!(body.contains(r#"value="Ana Souza""#), "Values survive a rejected booking");
}

#[test]
fn transport_failure_uses_generic_message() {
    let (app, log) = recording_app(6, true);
    let body = body_string(post_form(&app, "/detalhes/agendar", FULL_FORM));

    assert!(body.contains(BOOKING_FAILED));
    assert_eq!(log.count("book"), 1, "Never retried");
}
