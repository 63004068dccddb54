use maud::{html, Markup, PreEscaped, DOCTYPE};

pub const SITE_NAME: &str = "UrbanNest";

/// A button shows either its idle label or its in-flight label, never both.
pub const REQUEST_LABEL_CSS: &str = ".htmx-indicator{display:none}\
.htmx-request .htmx-indicator,.htmx-request.htmx-indicator{display:inline}\
.htmx-request .label-idle{display:none}";

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    desktop_layout_with_head(title, html! {}, content)
}

/// Same layout, with extra tags appended to `<head>`.
pub fn desktop_layout_with_head(title: &str, head: Markup, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="icon" href="/static/favicon/favicon.ico";
                link rel="stylesheet" href="/static/styles.css";
                link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css";
                script src="https://unpkg.com/htmx.org@1.9.12" defer {}
                style { (PreEscaped(REQUEST_LABEL_CSS)) }
                (head)
            }
            body {
                header class="header" {
                    a href="/" class="logo" {
                        svg
                            xmlns="http://www.w3.org/2000/svg"
                            width="24"
                            height="24"
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="#524ed2"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            class="icon icon-tabler icon-tabler-home"
                        {
                            path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                            path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                            path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                            path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                        }
                        span { (SITE_NAME) }
                    }
                    nav {
                        ul {
                            li { a href="/" { "Início" } }
                            li { a href="/imoveis" { "Imóveis" } }
                            li { a href="/termos" { "Termos" } }
                        }
                    }
                }

                (content)

                // Toasts land here, from full renders or hx-swap-oob fragments.
                div id="toasts" {}

                footer class="footer" {
                    p { "© UrbanNest" }
                    a href="/termos?tab=termos" { "Termos de Uso" }
                    " · "
                    a href="/termos?tab=privacidade" { "Política de Privacidade" }
                }
            }
        }
    }
}
