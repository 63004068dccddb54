use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Full error page for failures that escape a handler.
pub fn error_page(status: u16, message: &str) -> Markup {
    desktop_layout(
        &format!("Erro {status} - UrbanNest"),
        html! {
            main class="container" {
                h1 { "Erro " (status) }
                p { (message) }
                p { a href="/" { "← Voltar para o início" } }
            }
        },
    )
}

/// Inline notice used inside a content area (grid, detail loader).
pub fn notice_block(icon: &str, message: &str) -> Markup {
    html! {
        div class="loading" {
            i class={ "fas " (icon) } {}
            p { (message) }
        }
    }
}
