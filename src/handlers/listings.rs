// src/handlers/listings.rs

use crate::api::ListingQuery;
use crate::app::App;
use crate::domain::{FilterState, Pager};
use crate::responses::{html_response, ResultResp};
use crate::templates::components::{toast, Toast};
use crate::templates::pages::{listings_page, ListingsVm, Results, View};
use crate::urls::Query;
use tracing::{error, info};

pub const CONTACT_SOON: &str = "Funcionalidade de contato será implementada em breve!";

/// `page` from the query string; anything that is not a positive number
/// means the first page.
fn requested_page(query: &Query) -> u32 {
    query
        .get_non_empty("page")
        .and_then(|p| p.parse::<u32>().ok())
        .filter(|p| *p > 0)
        .unwrap_or(1)
}

/// GET /imoveis
pub fn index(app: &App, query: &Query) -> ResultResp {
    let filters = FilterState::from_query(query);
    let page = requested_page(query);

    let request = ListingQuery {
        filters: filters.clone(),
        page,
        per_page: app.per_page,
    };

    let results = match app.api.list_listings(&request) {
        Ok(found) => {
            let fetched = found.listings.len();
            let listings: Vec<_> = found
                .listings
                .into_iter()
                .filter(|l| filters.retains(l))
                .collect();
            let dropped = (fetched - listings.len()) as u64;
            // Rows dropped here are known not to match; rows on other pages
            // are unknown, so the page count stays the backend's.
            let total = found.total.saturating_sub(dropped);
            info!(page, total, dropped, shown = listings.len(), "listings loaded");

            Results::Loaded {
                listings,
                total,
                pager: Pager::new(page, found.pages),
            }
        }
        Err(e) => {
            error!(error = %e, "failed to load listings");
            Results::Failed
        }
    };

    html_response(listings_page(&ListingsVm {
        filters,
        view: View::from_param(query.get("view")),
        results,
    }))
}

/// GET /imoveis/contato?id=
/// Appended to the toast stack by the card's contact button.
pub fn contact(query: &Query) -> ResultResp {
    info!(listing_id = query.get("id").unwrap_or_default(), "contact requested");
    html_response(toast(&Toast::info(CONTACT_SOON)))
}
