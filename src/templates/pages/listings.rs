// templates/pages/listings.rs

use crate::domain::{FilterState, Listing, Pager};
use crate::templates::components::{listing_card, notice_block, pagination};
use crate::templates::desktop_layout;
use crate::urls::with_query;
use maud::{html, Markup};

const KIND_OPTIONS: [(&str, &str); 5] = [
    ("apartamento", "Apartamento"),
    ("casa", "Casa"),
    ("loft", "Loft"),
    ("studio", "Studio"),
    ("cobertura", "Cobertura"),
];

const PRICE_OPTIONS: [(&str, &str); 4] = [
    ("0-1000", "Até R$ 1.000"),
    ("1000-2000", "R$ 1.000 a R$ 2.000"),
    ("2000-3000", "R$ 2.000 a R$ 3.000"),
    ("3000-+", "Acima de R$ 3.000"),
];

const BEDROOM_OPTIONS: [(&str, &str); 4] = [
    ("1", "1 quarto"),
    ("2", "2 quartos"),
    ("3", "3 quartos"),
    ("3+", "3 ou mais"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Grid,
    List,
}

impl View {
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw {
            Some("list") => View::List,
            _ => View::Grid,
        }
    }

    fn param(&self) -> &'static str {
        match self {
            View::Grid => "grid",
            View::List => "list",
        }
    }
}

#[derive(Debug)]
pub enum Results {
    Loaded {
        listings: Vec<Listing>,
        total: u64,
        pager: Option<Pager>,
    },
    Failed,
}

#[derive(Debug)]
pub struct ListingsVm {
    pub filters: FilterState,
    pub view: View,
    pub results: Results,
}

impl ListingsVm {
    /// Listing URL with the current filters, a page and a view.
    fn url(&self, page: Option<u32>, view: View) -> String {
        let mut pairs = self.filters.to_query_pairs();
        if let Some(page) = page {
            pairs.push(("page", page.to_string()));
        }
        if view == View::List {
            pairs.push(("view", view.param().to_string()));
        }
        with_query("/imoveis", &pairs)
    }

    fn title(&self) -> String {
        match &self.filters.search {
            Some(search) => format!("Resultados para \"{search}\""),
            None => "Imóveis Disponíveis".to_string(),
        }
    }
}

pub fn listings_page(vm: &ListingsVm) -> Markup {
    desktop_layout(
        "Imóveis - UrbanNest",
        html! {
            main class="container" {
                (filter_form(vm))

                div class="results-header" {
                    div {
                        h1 id="resultsTitle" { (vm.title()) }
                        p id="resultsCount" {
                            @match &vm.results {
                                Results::Loaded { total, .. } => { (total) " imóveis encontrados" }
                                Results::Failed => {}
                            }
                        }
                    }
                    div class="view-toggle" {
                        @for view in [View::Grid, View::List] {
                            a.view-btn.active[view == vm.view]
                                data-view=(view.param())
                                href=(vm.url(None, view))
                            {
                                @match view {
                                    View::Grid => { i class="fas fa-th" {} }
                                    View::List => { i class="fas fa-list" {} }
                                }
                            }
                        }
                    }
                }

                div #imoveisGrid .imoveis-grid .list-view[vm.view == View::List] {
                    @match &vm.results {
                        Results::Failed => {
                            (notice_block("fa-exclamation-triangle", "Erro ao carregar imóveis. Tente novamente."))
                        }
                        Results::Loaded { listings, .. } if listings.is_empty() => {
                            (notice_block("fa-search", "Nenhum imóvel encontrado com os filtros aplicados."))
                        }
                        Results::Loaded { listings, .. } => {
                            @for listing in listings {
                                (listing_card(listing))
                            }
                        }
                    }
                }

                @match &vm.results {
                    Results::Loaded { pager, .. } => {
                        (pagination(*pager, |page| vm.url(Some(page), vm.view)))
                    }
                    Results::Failed => {}
                }
            }
        },
    )
}

/// Search bar and filters are one GET form, so "apply" is a plain submit.
fn filter_form(vm: &ListingsVm) -> Markup {
    let f = &vm.filters;
    let kind = f.kind.as_deref().unwrap_or_default();
    let price = f.price.map(|p| p.to_string()).unwrap_or_default();
    let bedrooms = f.bedrooms.map(|b| b.to_string()).unwrap_or_default();

    html! {
        form id="searchBarForm" class="filters" action="/imoveis" method="get" {
            div class="search-bar" {
                input
                    id="searchBarInput"
                    type="text"
                    name="search"
                    value=(f.search.as_deref().unwrap_or_default())
                    placeholder="Buscar imóveis...";
                button type="submit" { i class="fas fa-search" {} }
            }

            div class="filter-row" {
                select id="tipoFilter" name="tipo" {
                    option value="" { "Todos os tipos" }
                    @for (value, label) in KIND_OPTIONS {
                        option value=(value) selected[kind == value] { (label) }
                    }
                }
                select id="precoFilter" name="preco" {
                    option value="" { "Qualquer preço" }
                    @for (value, label) in PRICE_OPTIONS {
                        option value=(value) selected[price == value] { (label) }
                    }
                }
                select id="quartosFilter" name="quartos" {
                    option value="" { "Quartos" }
                    @for (value, label) in BEDROOM_OPTIONS {
                        option value=(value) selected[bedrooms == value] { (label) }
                    }
                }
                input
                    id="localizacaoFilter"
                    type="text"
                    name="localizacao"
                    value=(f.location.as_deref().unwrap_or_default())
                    placeholder="Bairro ou cidade";

                @if vm.view == View::List {
                    input type="hidden" name="view" value="list";
                }

                button id="aplicarFiltros" type="submit" class="btn-primary" { "Aplicar filtros" }
                a id="limparFiltros" class="btn-secondary" href="/imoveis" { "Limpar filtros" }
            }
        }
    }
}
