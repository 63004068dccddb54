use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use maud::Markup;

/// Normal 200 HTML response (full page or htmx fragment).
pub fn html_response(markup: Markup) -> ResultResp {
    html_response_with_headers(markup, &[])
}

pub fn html_response_with_headers(markup: Markup, headers: &[(&str, String)]) -> ResultResp {
    html_response_with_status(200, markup, headers)
}

/// Page rendered by the handler itself for a failure it recovered from.
pub fn html_response_with_status(
    status: u16,
    markup: Markup,
    headers: &[(&str, String)],
) -> ResultResp {
    let mut builder = ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref());

    for (name, value) in headers {
        builder = builder.header(*name, value.as_str());
    }

    builder
        .body(Body::from(markup.into_string()))
        .map_err(|_| ServerError::InternalError)
}

/// Plain navigation to another page.
pub fn redirect_response(location: &str) -> ResultResp {
    ResponseBuilder::new()
        .status(302)
        .header("Location", location)
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}
