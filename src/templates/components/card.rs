use crate::domain::Listing;
use crate::forms::format_brl;
use maud::{html, Markup};

pub fn detail_url(id: i64) -> String {
    format!("/detalhes?id={id}")
}

/// Grid card for one listing. Clicking anywhere opens the detail page.
pub fn listing_card(listing: &Listing) -> Markup {
    let detail = detail_url(listing.id);

    html! {
        div class="imovel-card" onclick=(format!("window.location.href='{detail}'")) {
            div class="imovel-image" {
                @if let Some(src) = &listing.main_image {
                    img src=(src) alt=(listing.title);
                } @else {
                    div class="placeholder" { i class="fas fa-home" {} }
                }
                div class="imovel-price" { (format_brl(listing.price)) "/mês" }
            }
            div class="imovel-content" {
                h3 class="imovel-title" { (listing.title) }
                div class="imovel-location" {
                    i class="fas fa-map-marker-alt" {}
                    " " (listing.address.formatted)
                }
                div class="imovel-details" {
                    div class="imovel-detail" { i class="fas fa-bed" {} " " (listing.bedrooms) " quartos" }
                    div class="imovel-detail" { i class="fas fa-bath" {} " " (listing.bathrooms) " banheiros" }
                    div class="imovel-detail" { i class="fas fa-ruler-combined" {} " " (listing.area) "m²" }
                }
                p class="imovel-description" { (listing.description.as_deref().unwrap_or_default()) }
                div class="imovel-actions" {
                    button
                        type="button"
                        class="btn-contact"
                        onclick="event.stopPropagation()"
                        hx-get=(format!("/imoveis/contato?id={}", listing.id))
                        hx-target="#toasts"
                        hx-swap="beforeend"
                    {
                        i class="fas fa-phone" {} " Contato"
                    }
                    a class="btn-details" href=(detail) onclick="event.stopPropagation()" { "Ver Detalhes" }
                }
            }
        }
    }
}
