// src/domain/filters.rs

use crate::domain::listing::Listing;
use crate::urls::Query;
use std::fmt;

/// Price bounds parsed from a `"min-max"` select value. A max of `+` (or
/// nothing) leaves the range open-ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl PriceRange {
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        let (min, max) = raw.split_once('-').unwrap_or((raw, ""));
        let range = PriceRange {
            min: parse_bound(min),
            max: parse_bound(max),
        };

        if range.min.is_none() && range.max.is_none() {
            None
        } else {
            Some(range)
        }
    }

    pub fn contains(&self, price: f64) -> bool {
        self.min.map_or(true, |min| price >= min) && self.max.map_or(true, |max| price <= max)
    }
}

fn parse_bound(raw: &str) -> Option<f64> {
    let raw = raw.trim().trim_end_matches('+');
    if raw.is_empty() {
        return None;
    }
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(min) = self.min {
            write!(f, "{min}")?;
        }
        match self.max {
            Some(max) => write!(f, "-{max}"),
            None => write!(f, "-+"),
        }
    }
}

/// `"2"` means exactly two bedrooms, `"3+"` means three or more.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BedroomFilter {
    Exactly(u32),
    AtLeast(u32),
}

impl BedroomFilter {
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        match raw.strip_suffix('+') {
            Some(n) => n.trim().parse().ok().map(BedroomFilter::AtLeast),
            None => raw.parse().ok().map(BedroomFilter::Exactly),
        }
    }

    pub fn count(&self) -> u32 {
        match self {
            BedroomFilter::Exactly(n) | BedroomFilter::AtLeast(n) => *n,
        }
    }

    pub fn matches(&self, bedrooms: u32) -> bool {
        match self {
            BedroomFilter::Exactly(n) => bedrooms == *n,
            BedroomFilter::AtLeast(n) => bedrooms >= *n,
        }
    }
}

impl fmt::Display for BedroomFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BedroomFilter::Exactly(n) => write!(f, "{n}"),
            BedroomFilter::AtLeast(n) => write!(f, "{n}+"),
        }
    }
}

/// Filters for the listing page. Rebuilt from the query string on every
/// request and never stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub search: Option<String>,
    pub kind: Option<String>,
    pub price: Option<PriceRange>,
    pub bedrooms: Option<BedroomFilter>,
    pub location: Option<String>,
}

impl FilterState {
    pub fn from_query(params: &Query) -> Self {
        Self {
            search: params.get_non_empty("search").map(str::to_string),
            kind: params.get_non_empty("tipo").map(str::to_string),
            price: params.get_non_empty("preco").and_then(PriceRange::parse),
            bedrooms: params.get_non_empty("quartos").and_then(BedroomFilter::parse),
            location: params.get_non_empty("localizacao").map(str::to_string),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == FilterState::default()
    }

    /// Page-level query pairs, used to keep filters alive across
    /// pagination and view links.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(kind) = &self.kind {
            pairs.push(("tipo", kind.clone()));
        }
        if let Some(price) = &self.price {
            pairs.push(("preco", price.to_string()));
        }
        if let Some(bedrooms) = &self.bedrooms {
            pairs.push(("quartos", bedrooms.to_string()));
        }
        if let Some(location) = &self.location {
            pairs.push(("localizacao", location.clone()));
        }
        pairs
    }

    /// Query pairs for `GET /api/imoveis`.
    ///
    /// The API only knows exact bedroom counts and a single `search`, so the
    /// location goes out as `search` when there is no free text, and the
    /// rest is enforced by [`FilterState::retains`].
    pub fn api_pairs(&self, page: u32, per_page: u32) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        match (&self.search, &self.location) {
            (Some(search), _) => pairs.push(("search", search.clone())),
            (None, Some(location)) => pairs.push(("search", location.clone())),
            (None, None) => {}
        }

        if let Some(kind) = &self.kind {
            pairs.push(("tipo", kind.clone()));
        }

        if let Some(price) = &self.price {
            if let Some(min) = price.min {
                pairs.push(("preco_min", min.to_string()));
            }
            if let Some(max) = price.max {
                pairs.push(("preco_max", max.to_string()));
            }
        }

        if let Some(bedrooms) = &self.bedrooms {
            pairs.push(("quartos", bedrooms.count().to_string()));
        }

        pairs.push(("page", page.to_string()));
        pairs.push(("per_page", per_page.to_string()));
        pairs
    }

    /// Full client-side match, used when filtering an in-memory list.
    pub fn matches(&self, listing: &Listing) -> bool {
        if let Some(search) = &self.search {
            if !listing.search_text().contains(&search.to_lowercase()) {
                return false;
            }
        }

        if let Some(kind) = &self.kind {
            if &listing.kind != kind {
                return false;
            }
        }

        if let Some(price) = &self.price {
            if !price.contains(listing.price) {
                return false;
            }
        }

        self.retains(listing)
    }

    /// The part of the filter the API cannot express: "at least" bedroom
    /// counts and a location alongside a free-text search.
    pub fn retains(&self, listing: &Listing) -> bool {
        if let Some(bedrooms) = &self.bedrooms {
            if !bedrooms.matches(listing.bedrooms) {
                return false;
            }
        }

        if let Some(location) = &self.location {
            if !listing
                .address
                .formatted
                .to_lowercase()
                .contains(&location.to_lowercase())
            {
                return false;
            }
        }

        true
    }
}
