// src/handlers/terms.rs

use crate::domain::TermsTab;
use crate::responses::{html_response, html_response_with_headers, ResultResp};
use crate::templates::pages::{terms_page, terms_panel};
use crate::urls::Query;

/// GET /termos?tab=
///
/// A tab click is an htmx request: only the panel is swapped and the
/// address bar gets the new `tab` through `HX-Replace-Url`, so history is
/// replaced rather than pushed.
pub fn show(query: &Query, htmx: bool) -> ResultResp {
    let tab = TermsTab::from_query(query);

    if htmx {
        html_response_with_headers(
            terms_panel(tab, query),
            &[("HX-Replace-Url", tab.url(query))],
        )
    } else {
        html_response(terms_page(tab, query))
    }
}
