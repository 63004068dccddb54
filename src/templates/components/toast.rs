use maud::{html, Markup, PreEscaped};

pub const DISMISS_AFTER_MS: u32 = 3000;
pub const SLIDE_OUT_MS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
    Warning,
}

impl ToastKind {
    pub fn css_suffix(&self) -> &'static str {
        match self {
            ToastKind::Info => "info",
            ToastKind::Success => "sucesso",
            ToastKind::Error => "erro",
            ToastKind::Warning => "aviso",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ToastKind::Info => "#2196F3",
            ToastKind::Success => "#4CAF50",
            ToastKind::Error => "#f44336",
            ToastKind::Warning => "#FF9800",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, message)
    }
}

/// A self-dismissing notification. Every toast carries its own timer.
pub fn toast(t: &Toast) -> Markup {
    let style = format!(
        "position: fixed; top: 20px; right: 20px; padding: 15px 20px; border-radius: 5px; \
         color: white; font-weight: 500; z-index: 10000; animation: slideIn 0.3s ease; \
         background-color: {};",
        t.kind.color()
    );
    let dismiss = format!(
        "(function(el){{setTimeout(function(){{el.style.animation='slideOut 0.3s ease';\
         setTimeout(function(){{if(el.parentNode){{el.parentNode.removeChild(el);}}}},{SLIDE_OUT_MS});}},{DISMISS_AFTER_MS});}})\
         (document.currentScript.parentElement);"
    );

    html! {
        div class={ "notificacao notificacao-" (t.kind.css_suffix()) } role="status" style=(style) {
            (t.message)
            script { (PreEscaped(dismiss)) }
        }
    }
}

/// Appends a toast to the page's stack from inside an htmx fragment.
pub fn toast_oob(t: &Toast) -> Markup {
    html! {
        div id="toasts" hx-swap-oob="beforeend" {
            (toast(t))
        }
    }
}
