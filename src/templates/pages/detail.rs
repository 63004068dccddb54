// templates/pages/detail.rs

use crate::domain::{BookingForm, Listing};
use crate::forms::{field_class, format_brl};
use crate::maps::MapSection;
use crate::templates::components::notice_block;
use crate::templates::desktop_layout;
use crate::urls::with_query;
use maud::{html, Markup};

/// Contents of the visit-time select.
#[derive(Debug, Clone, PartialEq)]
pub enum SlotOptions {
    /// No date picked yet.
    AwaitingDate,
    Available {
        slots: Vec<String>,
        selected: Option<String>,
    },
    NoneAvailable,
    Failed,
    /// Ask the browser to fetch the slots for `date` right after the swap.
    Reload {
        date: String,
        selected: Option<String>,
    },
}

impl SlotOptions {
    pub fn from_slots(slots: Vec<String>, selected: Option<String>) -> Self {
        if slots.is_empty() {
            SlotOptions::NoneAvailable
        } else {
            SlotOptions::Available { slots, selected }
        }
    }
}

/// The booking form as it should be rendered after a GET or a POST.
#[derive(Debug, Clone)]
pub struct BookingPanel {
    pub listing_id: i64,
    pub form: BookingForm,
    pub missing: Vec<&'static str>,
    pub slots: SlotOptions,
    /// Earliest selectable visit date, `YYYY-MM-DD`.
    pub today: String,
}

impl BookingPanel {
    pub fn empty(listing_id: i64, today: String) -> Self {
        Self {
            listing_id,
            form: BookingForm::default(),
            missing: Vec::new(),
            slots: SlotOptions::AwaitingDate,
            today,
        }
    }
}

pub struct DetailVm<'a> {
    pub listing: &'a Listing,
    pub booking: BookingPanel,
}

pub fn detail_page(vm: &DetailVm) -> Markup {
    let l = vm.listing;

    desktop_layout(
        &format!("{} - UrbanNest", l.title),
        html! {
            main class="container" id="imovelContainer" {
                nav class="breadcrumb" {
                    a href="/" { "Início" }
                    " / "
                    a href="/imoveis" { "Imóveis" }
                    " / "
                    span id="breadcrumbTitle" { (l.title) }
                }

                div class="detalhes-grid" {
                    div class="detalhes-main" {
                        (images(l))

                        div class="imovel-tags" {
                            span id="priceTag" class="price-tag" { (format_brl(l.price)) "/mês" }
                            span id="statusTag" class="status-tag" { (l.status_label()) }
                        }

                        h1 id="imovelTitulo" { (l.title) }
                        p id="imovelEndereco" class="endereco" {
                            i class="fas fa-map-marker-alt" {} " " (l.address.formatted)
                        }

                        div class="imovel-specs" {
                            div class="spec" { i class="fas fa-bed" {} span id="quartos" { (l.bedrooms) } " quartos" }
                            div class="spec" { i class="fas fa-bath" {} span id="banheiros" { (l.bathrooms) } " banheiros" }
                            div class="spec" { i class="fas fa-ruler-combined" {} span id="area" { (l.area) } " m²" }
                            div class="spec" { i class="fas fa-building" {} span id="tipo" { (l.kind_label()) } }
                        }

                        section class="descricao" {
                            h2 { "Descrição" }
                            p id="descricao" { (l.description_or_default()) }
                        }

                        section class="localizacao" {
                            h2 { "Localização" }
                            (map_loader(l))
                        }
                    }

                    aside class="detalhes-sidebar" {
                        h2 { "Agende uma visita" }
                        (booking_panel(&vm.booking))
                    }
                }
            }
        },
    )
}

fn images(l: &Listing) -> Markup {
    html! {
        div class="image-gallery" {
            div class="main-image" {
                @if let Some(src) = &l.main_image {
                    img id="mainImage" src=(src) alt=(l.title);
                } @else {
                    div class="image-placeholder" {
                        i class="fas fa-home" {}
                        p { "Sem imagem disponível" }
                    }
                }
            }

            @if let Some(gallery) = l.gallery() {
                div id="thumbnailGallery" class="thumbnail-gallery" {
                    @for (index, src) in gallery.iter().enumerate() {
                        div.thumbnail.active[index == 0]
                            onclick="var m=document.getElementById('mainImage');if(m){m.src=this.querySelector('img').src;}\
                                     document.querySelectorAll('.thumbnail').forEach(function(t){t.classList.remove('active');});\
                                     this.classList.add('active');"
                        {
                            img src=(src) alt=(format!("Imagem {}", index + 1));
                        }
                    }
                }
            }
        }
    }
}

pub fn map_url(listing_id: i64) -> String {
    format!("/detalhes/mapa?id={listing_id}")
}

/// Map area as first rendered. The provider is only asked once the page is
/// on screen, through the `load` request; a listing without coordinates
/// never makes that request.
fn map_loader(l: &Listing) -> Markup {
    if l.coordinates.pair().is_none() {
        return map_section(&MapSection::NoLocation);
    }

    html! {
        div id="mapArea" hx-get=(map_url(l.id)) hx-trigger="load" hx-swap="innerHTML" {
            div id="mapPlaceholder" class="map-placeholder" {
                i class="fas fa-spinner fa-spin" {}
                p { "Carregando mapa..." }
            }
        }
    }
}

/// Contents of the map area, also served alone as the map fragment.
pub fn map_section(map: &MapSection) -> Markup {
    html! {
        @match map {
            MapSection::Widget(widget) => {
                div id="map"
                    class="map"
                    data-lat=(widget.latitude)
                    data-lng=(widget.longitude)
                    data-zoom=(widget.zoom) {}
            }
            MapSection::Fallback { address, reason } => {
                div id="mapPlaceholder" class="map-placeholder" {
                    i class="fas fa-map-marked-alt" {}
                    p { "Mapa não disponível" }
                    small { (reason) }
                    div class="map-address" {
                        strong { "Endereço:" }
                        br;
                        (address)
                    }
                }
            }
            MapSection::NoLocation => {
                div id="mapPlaceholder" class="map-placeholder" {
                    i class="fas fa-map-marked-alt" {}
                    p { "Localização não informada" }
                }
            }
        }
    }
}

/// The booking form. Swapped as a whole after each submission.
pub fn booking_panel(panel: &BookingPanel) -> Markup {
    let f = &panel.form;
    let missing = &panel.missing;

    html! {
        form id="agendamentoForm"
            class="agendamento-form"
            hx-post="/detalhes/agendar"
            hx-target="this"
            hx-swap="outerHTML"
            hx-disabled-elt="find button[type='submit']"
        {
            input type="hidden" name="imovel_id" value=(panel.listing_id);

            label for="nome" { "Nome *" }
            input id="nome" class=(field_class("nome", missing)) type="text" name="nome" value=(f.name) required;

            label for="email" { "E-mail *" }
            input id="email" class=(field_class("email", missing)) type="email" name="email" value=(f.email) required;

            label for="telefone" { "Telefone *" }
            input id="telefone" class=(field_class("telefone", missing)) type="tel" name="telefone" value=(f.phone) required;

            label for="dataVisita" { "Data da visita *" }
            input
                id="dataVisita"
                class=(field_class("data_visita", missing))
                type="date"
                name="data_visita"
                min=(panel.today)
                value=(f.date)
                required
                hx-get="/detalhes/horarios"
                hx-trigger="change"
                hx-vals=(format!(r#"{{"imovel_id": "{}"}}"#, panel.listing_id))
                hx-target="#horaVisita"
                hx-swap="outerHTML"
                hx-sync="this:replace";

            label for="horaVisita" { "Horário *" }
            (slot_select(panel.listing_id, &panel.slots, field_class("hora_visita", missing)))

            label for="mensagem" { "Mensagem" }
            textarea id="mensagem" name="mensagem" rows="3" { (f.message) }

            button type="submit" class="btn-primary" {
                span class="label-idle" { i class="fas fa-calendar-check" {} " Agendar Visita" }
                span class="htmx-indicator" { i class="fas fa-spinner fa-spin" {} " Agendando..." }
            }
        }
    }
}

/// The visit-time select, also served alone as the availability fragment.
pub fn slot_select(listing_id: i64, slots: &SlotOptions, class: &str) -> Markup {
    html! {
        @match slots {
            SlotOptions::Reload { date, selected } => {
                select
                    id="horaVisita"
                    class=(class)
                    name="hora_visita"
                    required
                    hx-get=(slots_url(listing_id, date, selected.as_deref()))
                    hx-trigger="load"
                    hx-swap="outerHTML"
                {
                    option value="" { "Carregando..." }
                }
            }
            _ => {
                select id="horaVisita" class=(class) name="hora_visita" required {
                    @match slots {
                        SlotOptions::AwaitingDate => {
                            option value="" { "Selecione uma data primeiro" }
                        }
                        SlotOptions::Available { slots, selected } => {
                            option value="" { "Selecione um horário" }
                            @for slot in slots {
                                option value=(slot) selected[selected.as_deref() == Some(slot.as_str())] { (slot) }
                            }
                        }
                        SlotOptions::NoneAvailable => {
                            option value="" disabled selected { "Nenhum horário disponível" }
                        }
                        SlotOptions::Failed => {
                            option value="" { "Erro ao carregar horários" }
                        }
                        SlotOptions::Reload { .. } => {}
                    }
                }
            }
        }
    }
}

pub fn slots_url(listing_id: i64, date: &str, selected: Option<&str>) -> String {
    let id = listing_id.to_string();
    let mut pairs = vec![("imovel_id", id.as_str()), ("data_visita", date)];
    if let Some(time) = selected {
        pairs.push(("selecionado", time));
    }
    with_query("/detalhes/horarios", &pairs)
}

/// Shown instead of the page when there is nothing to display.
pub fn detail_error_page(message: &str) -> Markup {
    desktop_layout(
        "Imóvel - UrbanNest",
        html! {
            main class="container" id="loadingContainer" {
                (notice_block("fa-exclamation-triangle", message))
                a class="btn-primary" href="/imoveis" { "Voltar para Imóveis" }
            }
        },
    )
}
