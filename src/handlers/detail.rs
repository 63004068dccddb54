// src/handlers/detail.rs

use crate::api::ApiError;
use crate::app::App;
use crate::domain::BookingForm;
use crate::errors::ServerError;
use crate::maps::{resolve_map, MapSection};
use crate::responses::{html_response, html_response_with_status, ResultResp};
use crate::templates::components::{toast_oob, Toast};
use crate::templates::pages::{
    booking_panel, detail_error_page, detail_page, map_section, slot_select, BookingPanel, DetailVm,
    SlotOptions,
};
use crate::urls::Query;
use maud::html;
use tracing::{error, info, warn};

pub const MISSING_ID: &str = "ID do imóvel não encontrado na URL";
pub const LOAD_FAILED: &str = "Erro ao carregar detalhes do imóvel";
pub const REQUIRED_FIELDS: &str = "Por favor, preencha todos os campos obrigatórios.";
pub const BOOKING_FAILED: &str = "Erro ao agendar visita. Tente novamente.";
pub const BOOKING_OK: &str = "Visita agendada com sucesso! Entraremos em contato em breve.";

/// Positive integer id, or `None`.
pub fn parse_id(raw: Option<&str>) -> Option<i64> {
    raw?.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// GET /detalhes?id=
pub fn show(app: &App, query: &Query) -> ResultResp {
    let Some(id) = parse_id(query.get("id")) else {
        warn!(raw = query.get("id").unwrap_or_default(), "detail page without a usable id");
        return html_response_with_status(400, detail_error_page(MISSING_ID), &[]);
    };

    let listing = match app.api.get_listing(id) {
        Ok(listing) => listing,
        Err(e) => {
            let status = match e {
                ApiError::Status { .. } => 404,
                _ => 502,
            };
            error!(listing_id = id, error = %e, "failed to load listing");
            return html_response_with_status(status, detail_error_page(LOAD_FAILED), &[]);
        }
    };

    let vm = DetailVm {
        booking: BookingPanel::empty(id, today()),
        listing: &listing,
    };

    html_response(detail_page(&vm))
}

/// GET /detalhes/mapa?id=
/// Requested by the map area once the page has rendered, so a slow map
/// provider never holds up the page itself.
pub fn map(app: &App, query: &Query) -> ResultResp {
    let id = parse_id(query.get("id"))
        .ok_or_else(|| ServerError::BadRequest(MISSING_ID.to_string()))?;

    let section = match app.api.get_listing(id) {
        Ok(listing) => resolve_map(app.maps.as_ref(), &listing),
        Err(e) => {
            error!(listing_id = id, error = %e, "failed to load listing for map");
            MapSection::NoLocation
        }
    };

    html_response(map_section(&section))
}

/// GET /detalhes/horarios?imovel_id=&data_visita=
/// Replaces the time select whenever the visit date changes.
pub fn slots(app: &App, query: &Query) -> ResultResp {
    let id = parse_id(query.get("imovel_id"));
    let date = query.get_non_empty("data_visita");
    let selected = query.get_non_empty("selecionado").map(str::to_string);

    let options = match (id, date) {
        (Some(id), Some(date)) => fetch_slots(app, id, date, selected),
        _ => SlotOptions::AwaitingDate,
    };

    html_response(slot_select(id.unwrap_or_default(), &options, ""))
}

fn fetch_slots(app: &App, id: i64, date: &str, selected: Option<String>) -> SlotOptions {
    match app.api.available_slots(id, date) {
        Ok(slots) => SlotOptions::from_slots(slots, selected),
        Err(e) => {
            error!(listing_id = id, date, error = %e, "failed to load available slots");
            SlotOptions::Failed
        }
    }
}

/// Slots for a re-rendered form that still carries a date: fetched by the
/// browser after the swap, so this request makes no extra API call.
fn deferred_slots(form: &BookingForm) -> SlotOptions {
    if form.date.is_empty() {
        SlotOptions::AwaitingDate
    } else {
        SlotOptions::Reload {
            date: form.date.clone(),
            selected: Some(form.time.clone()).filter(|t| !t.is_empty()),
        }
    }
}

/// POST /detalhes/agendar
pub fn book(app: &App, fields: &Query) -> ResultResp {
    let listing_id = parse_id(fields.get("imovel_id"))
        .ok_or_else(|| ServerError::BadRequest(MISSING_ID.to_string()))?;
    let form = BookingForm::from_fields(fields);

    let missing = form.missing_fields();
    if !missing.is_empty() {
        info!(listing_id, ?missing, "booking rejected, required fields blank");
        let panel = BookingPanel {
            listing_id,
            slots: deferred_slots(&form),
            form,
            missing,
            today: today(),
        };
        return booking_response(&panel, Toast::error(REQUIRED_FIELDS));
    }

    match app.api.create_booking(&form.to_request(listing_id)) {
        Ok(()) => {
            info!(listing_id, date = %form.date, time = %form.time, "visit booked");
            let reset = form.reset_keeping_date();
            let panel = BookingPanel {
                listing_id,
                slots: fetch_slots(app, listing_id, &reset.date, None),
                form: reset,
                missing: Vec::new(),
                today: today(),
            };
            booking_response(&panel, Toast::success(BOOKING_OK))
        }
        Err(e) => {
            error!(listing_id, error = %e, "booking failed");
            let message = e.user_message().unwrap_or(BOOKING_FAILED).to_string();
            let panel = BookingPanel {
                listing_id,
                slots: deferred_slots(&form),
                form,
                missing: Vec::new(),
                today: today(),
            };
            booking_response(&panel, Toast::error(message))
        }
    }
}

fn booking_response(panel: &BookingPanel, toast: Toast) -> ResultResp {
    html_response(html! {
        (booking_panel(panel))
        (toast_oob(&toast))
    })
}
