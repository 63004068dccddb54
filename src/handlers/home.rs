// src/handlers/home.rs

use crate::responses::{html_response, redirect_response, ResultResp};
use crate::templates::pages::{home_page, HomeVm};
use crate::urls::{with_query, Query};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

pub const EMPTY_SEARCH: &str = "Por favor, digite algo para buscar.";

pub const LUCKY_SEARCHES: [&str; 7] = [
    "Apartamento 2 quartos Centro",
    "Casa com jardim Zona Sul",
    "Loft moderno Vila Madalena",
    "Studio mobiliado Copacabana",
    "Cobertura com vista para o mar",
    "Casa térrea com quintal",
    "Apartamento novo Barra da Tijuca",
];

pub fn search_url(term: &str) -> String {
    with_query("/imoveis", &[("search", term)])
}

/// GET /
pub fn index(query: &Query) -> ResultResp {
    let vm = HomeVm {
        query: query.get("q").unwrap_or_default().to_string(),
        ..HomeVm::default()
    };
    html_response(home_page(&vm))
}

/// GET /buscar?q=
pub fn search(query: &Query) -> ResultResp {
    match query.get_non_empty("q") {
        Some(term) => redirect_response(&search_url(term)),
        None => html_response(home_page(&HomeVm {
            alert: Some(EMPTY_SEARCH.to_string()),
            ..HomeVm::default()
        })),
    }
}

/// GET /sorte
pub fn lucky() -> ResultResp {
    lucky_with(&mut rand::thread_rng())
}

pub fn lucky_with<R: Rng + ?Sized>(rng: &mut R) -> ResultResp {
    let term = LUCKY_SEARCHES
        .choose(rng)
        .copied()
        .unwrap_or(LUCKY_SEARCHES[0]);
    debug!(term, "lucky search");

    html_response(home_page(&HomeVm {
        query: term.to_string(),
        alert: None,
        redirect: Some(search_url(term)),
    }))
}
