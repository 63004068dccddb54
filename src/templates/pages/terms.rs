// templates/pages/terms.rs

use crate::domain::TermsTab;
use crate::templates::desktop_layout;
use crate::urls::Query;
use maud::{html, Markup};

pub fn terms_page(active: TermsTab, query: &Query) -> Markup {
    desktop_layout(
        "Termos e Privacidade - UrbanNest",
        html! {
            main class="container terms" {
                h1 { "Termos e Privacidade" }
                (terms_panel(active, query))
            }
        },
    )
}

/// Tab buttons plus both panes. Swapped as one unit, so exactly one
/// button/pane pair carries `active`.
pub fn terms_panel(active: TermsTab, query: &Query) -> Markup {
    html! {
        div id="terms-content" {
            div class="tab-buttons" role="tablist" {
                @for tab in TermsTab::ALL {
                    a.tab-button.active[tab == active]
                        role="tab"
                        aria-selected=(tab == active)
                        href=(tab.url(query))
                        hx-get=(tab.url(query))
                        hx-target="#terms-content"
                        hx-swap="outerHTML show:window:top"
                    {
                        (tab.label())
                    }
                }
            }

            @for tab in TermsTab::ALL {
                section.tab-content.active[tab == active] id=(tab.param()) role="tabpanel" hidden[tab != active] {
                    h2 { (tab.label()) }
                    (pane_body(tab))
                }
            }
        }
    }
}

fn pane_body(tab: TermsTab) -> Markup {
    match tab {
        TermsTab::Terms => html! {
            p {
                "Ao usar o UrbanNest você concorda com estes termos. A plataforma conecta "
                "interessados a imóveis para locação e não é parte dos contratos firmados."
            }
            h3 { "Anúncios" }
            p { "As informações dos imóveis são fornecidas pelos anunciantes e podem mudar sem aviso." }
            h3 { "Agendamentos" }
            p { "Visitas agendadas dependem da confirmação do anunciante. Compareça no horário marcado." }
        },
        TermsTab::Privacy => html! {
            p {
                "Coletamos apenas os dados informados nos formulários de contato e agendamento: "
                "nome, e-mail, telefone e mensagem."
            }
            h3 { "Uso dos dados" }
            p { "Os dados são usados para organizar visitas e responder contatos. Não vendemos suas informações." }
            h3 { "Seus direitos" }
            p { "Você pode pedir a correção ou exclusão dos seus dados a qualquer momento." }
        },
    }
}
