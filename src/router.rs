use crate::app::App;
use crate::errors::ServerError;
use crate::handlers::{detail, home, listings, terms};
use crate::responses::ResultResp;
use crate::urls::Query;
use astra::Request;
use std::io::Read;

pub fn handle(req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let query = Query::parse(req.uri().query().unwrap_or_default());
    // A history restore wants the whole page back, not a fragment.
    let htmx = req.headers().contains_key("HX-Request")
        && !req.headers().contains_key("HX-History-Restore-Request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => home::index(&query),
        ("GET", "/buscar") => home::search(&query),
        ("GET", "/sorte") => home::lucky(),

        ("GET", "/imoveis") => listings::index(app, &query),
        ("GET", "/imoveis/contato") => listings::contact(&query),

        ("GET", "/detalhes") => detail::show(app, &query),
        ("GET", "/detalhes/mapa") => detail::map(app, &query),
        ("GET", "/detalhes/horarios") => detail::slots(app, &query),
        ("POST", "/detalhes/agendar") => {
            let form = parse_form(req)?;
            detail::book(app, &form)
        }

        ("GET", "/termos") => terms::show(&query, htmx),

        _ => Err(ServerError::NotFound),
    }
}

/// `application/x-www-form-urlencoded` body.
fn parse_form(req: Request) -> Result<Query, ServerError> {
    let mut body = String::new();
    req.into_body()
        .reader()
        .read_to_string(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("Unreadable form body: {e}")))?;

    Ok(Query::parse(&body))
}
