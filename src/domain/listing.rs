// src/domain/listing.rs

use serde::{Deserialize, Serialize};
use tracing::warn;

pub const STATUS_AVAILABLE: &str = "disponivel";

/// A property record as served by `/api/imoveis`. Read-only display data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: i64,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
    #[serde(rename = "tipo")]
    pub kind: String,
    #[serde(rename = "preco")]
    pub price: f64,
    #[serde(rename = "quartos")]
    pub bedrooms: u32,
    #[serde(rename = "banheiros")]
    pub bathrooms: u32,
    pub area: f64,
    #[serde(rename = "endereco", default)]
    pub address: Address,
    #[serde(rename = "coordenadas", default)]
    pub coordinates: Coordinates,
    #[serde(rename = "imagem_principal", default)]
    pub main_image: Option<String>,
    /// JSON-encoded array of image URLs, exactly as stored by the backend.
    #[serde(rename = "imagens_adicionais", default)]
    pub extra_images: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(rename = "destaque", default)]
    pub featured: bool,
}

fn default_status() -> String {
    STATUS_AVAILABLE.to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(rename = "rua", default)]
    pub street: String,
    #[serde(rename = "numero", default)]
    pub number: String,
    #[serde(rename = "bairro", default)]
    pub district: String,
    #[serde(rename = "cidade", default)]
    pub city: String,
    #[serde(rename = "estado", default)]
    pub state: String,
    #[serde(rename = "cep", default)]
    pub postcode: String,
    #[serde(rename = "completo", default)]
    pub formatted: String,
}

impl Address {
    pub fn new(
        street: &str,
        number: &str,
        district: &str,
        city: &str,
        state: &str,
        postcode: &str,
    ) -> Self {
        Self {
            street: street.to_string(),
            number: number.to_string(),
            district: district.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            postcode: postcode.to_string(),
            formatted: format!("{street}, {number} - {district}, {city} - {state}"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl Coordinates {
    pub fn pair(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some((lat, lng)),
            _ => None,
        }
    }
}

impl Listing {
    pub fn is_available(&self) -> bool {
        self.status == STATUS_AVAILABLE
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_available() {
            "Disponível"
        } else {
            "Indisponível"
        }
    }

    /// "apartamento" -> "Apartamento"
    pub fn kind_label(&self) -> String {
        let mut chars = self.kind.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn description_or_default(&self) -> &str {
        match self.description.as_deref() {
            Some(d) if !d.trim().is_empty() => d,
            _ => "Descrição não disponível.",
        }
    }

    /// Text the free-text search runs against.
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {}",
            self.title,
            self.address.formatted,
            self.description.as_deref().unwrap_or_default()
        )
        .to_lowercase()
    }

    /// Extra gallery images. A payload that is not a JSON array of strings
    /// is logged and treated as "no gallery".
    pub fn gallery(&self) -> Option<Vec<String>> {
        let raw = self.extra_images.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }

        match serde_json::from_str::<Vec<String>>(raw) {
            Ok(images) if !images.is_empty() => Some(images),
            Ok(_) => None,
            Err(e) => {
                warn!(listing_id = self.id, error = %e, "could not parse extra images");
                None
            }
        }
    }
}

/// One page of results from `/api/imoveis`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListingPage {
    #[serde(rename = "imoveis", default)]
    pub listings: Vec<Listing>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub pages: u32,
}
