// src/domain/terms.rs

use crate::urls::Query;

/// The two panes of the terms page. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermsTab {
    Terms,
    Privacy,
}

impl TermsTab {
    pub const ALL: [TermsTab; 2] = [TermsTab::Terms, TermsTab::Privacy];

    /// Only the known alternate value switches away from the default pane.
    pub fn from_query(query: &Query) -> Self {
        match query.get("tab") {
            Some("privacidade") => TermsTab::Privacy,
            _ => TermsTab::Terms,
        }
    }

    pub fn param(&self) -> &'static str {
        match self {
            TermsTab::Terms => "termos",
            TermsTab::Privacy => "privacidade",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TermsTab::Terms => "Termos de Uso",
            TermsTab::Privacy => "Política de Privacidade",
        }
    }

    /// The current URL with only `tab` rewritten.
    pub fn url(&self, current: &Query) -> String {
        format!("/termos?{}", current.with("tab", self.param()).to_query_string())
    }
}
