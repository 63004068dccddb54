use crate::domain::{Pager, PagerButton};
use maud::{html, Markup};

/// Numbered pager. Renders an empty container for a single page.
pub fn pagination(pager: Option<Pager>, page_url: impl Fn(u32) -> String) -> Markup {
    html! {
        div class="pagination" id="pagination" {
            @if let Some(pager) = pager {
                @for button in pager.buttons() {
                    @match button {
                        PagerButton::Previous { target: Some(page) } => {
                            a class="page-prev" href=(page_url(page)) aria-label="Página anterior" { i class="fas fa-chevron-left" {} }
                        }
                        PagerButton::Previous { target: None } => {
                            button class="page-prev" disabled aria-label="Página anterior" { i class="fas fa-chevron-left" {} }
                        }
                        PagerButton::Number { page, active: true } => {
                            button class="page-number active" aria-current="page" { (page) }
                        }
                        PagerButton::Number { page, active: false } => {
                            a class="page-number" href=(page_url(page)) { (page) }
                        }
                        PagerButton::Next { target: Some(page) } => {
                            a class="page-next" href=(page_url(page)) aria-label="Próxima página" { i class="fas fa-chevron-right" {} }
                        }
                        PagerButton::Next { target: None } => {
                            button class="page-next" disabled aria-label="Próxima página" { i class="fas fa-chevron-right" {} }
                        }
                    }
                }
            }
        }
    }
}
