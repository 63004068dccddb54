// templates/pages/home.rs

use crate::templates::desktop_layout_with_head;
use maud::{html, Markup, PreEscaped};

pub const QUICK_FILTERS: [(&str, &str); 4] = [
    ("apartamento", "Apartamentos"),
    ("casa", "Casas"),
    ("loft", "Lofts"),
    ("studio", "Studios"),
];

const FEATURES: [(&str, &str, &str); 3] = [
    (
        "fa-search",
        "Busca inteligente",
        "Encontre o imóvel ideal com filtros por tipo, preço, quartos e localização.",
    ),
    (
        "fa-calendar-check",
        "Agende visitas",
        "Escolha um horário livre e marque sua visita direto pela página do imóvel.",
    ),
    (
        "fa-shield-alt",
        "Imóveis verificados",
        "Todos os anúncios são revisados pela nossa equipe antes de ir ao ar.",
    ),
];

/// Feature cards start hidden and fade in once, the first time they
/// enter the viewport.
const FADE_IN_SCRIPT: &str = r#"
document.addEventListener('DOMContentLoaded', function () {
  var observer = new IntersectionObserver(function (entries) {
    entries.forEach(function (entry) {
      if (entry.isIntersecting) {
        entry.target.style.opacity = '1';
        entry.target.style.transform = 'translateY(0)';
        observer.unobserve(entry.target);
      }
    });
  }, { threshold: 0.1, rootMargin: '0px 0px -50px 0px' });

  document.querySelectorAll('.feature-card').forEach(function (card) {
    card.style.opacity = '0';
    card.style.transform = 'translateY(20px)';
    card.style.transition = 'opacity 0.6s ease, transform 0.6s ease';
    observer.observe(card);
  });
});
"#;

/// Seconds the "lucky" phrase stays in the box before navigating.
pub const LUCKY_DELAY: &str = "0.5";

#[derive(Debug, Default)]
pub struct HomeVm {
    /// Echoed into the search box.
    pub query: String,
    /// Blocking browser alert shown on load.
    pub alert: Option<String>,
    /// Deferred navigation target.
    pub redirect: Option<String>,
}

pub fn home_page(vm: &HomeVm) -> Markup {
    let head = html! {
        @if let Some(target) = &vm.redirect {
            meta http-equiv="refresh" content=(format!("{LUCKY_DELAY};url={target}"));
        }
    };

    desktop_layout_with_head(
        "UrbanNest - Encontre seu próximo lar",
        head,
        html! {
            section class="hero" {
                h1 { "Encontre seu próximo lar" }
                p { "Apartamentos, casas e lofts para alugar nas melhores regiões." }

                form id="searchForm" class="search-form" action="/buscar" method="get" {
                    input
                        id="searchInput"
                        type="text"
                        name="q"
                        value=(vm.query)
                        placeholder="Busque por bairro, cidade ou tipo de imóvel";
                    button type="submit" class="btn-search" { i class="fas fa-search" {} " Buscar" }
                    a id="luckyBtn" class="btn-lucky" href="/sorte" { "Estou com sorte" }
                }

                div class="quick-filters" {
                    @for (value, label) in QUICK_FILTERS {
                        a class="filter-btn" data-filter=(value) href=(format!("/imoveis?tipo={value}")) { (label) }
                    }
                }
            }

            section class="features" {
                @for (icon, title, text) in FEATURES {
                    div class="feature-card" {
                        i class={ "fas " (icon) } {}
                        h3 { (title) }
                        p { (text) }
                    }
                }
            }

            script { (PreEscaped(FADE_IN_SCRIPT)) }

            @if let Some(message) = &vm.alert {
                script { (PreEscaped(alert_script(message))) }
            }
        },
    )
}

fn alert_script(message: &str) -> String {
    // JSON string literals are valid JS; "</" is split so the text cannot close the tag.
    let literal = serde_json::to_string(message)
        .unwrap_or_else(|_| "\"\"".to_string())
        .replace("</", "<\\/");
    format!("window.addEventListener('load', function () {{ alert({literal}); }});")
}
