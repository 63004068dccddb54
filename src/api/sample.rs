// sample.rs
use crate::api::{ApiError, ListingApi, ListingQuery};
use crate::domain::{paginate, Address, BookingRequest, Coordinates, Listing, ListingPage};
use chrono::{NaiveDate, NaiveTime};
use std::sync::Mutex;
use tracing::info;

/// Visits are offered on the hour from 09:00 to 18:00.
const FIRST_SLOT_HOUR: u32 = 9;
const LAST_SLOT_HOUR: u32 = 18;

/// In-memory stand-in for the listings API, seeded with the demo catalog.
/// Filtering and paging happen here, client side.
pub struct SampleCatalog {
    listings: Vec<Listing>,
    bookings: Mutex<Vec<BookingRequest>>,
}

impl SampleCatalog {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self {
            listings,
            bookings: Mutex::new(Vec::new()),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed_listings())
    }

    fn find(&self, id: i64) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }

    fn taken_slots(&self, listing_id: i64, date: &str) -> Result<Vec<String>, ApiError> {
        let bookings = self
            .bookings
            .lock()
            .map_err(|_| ApiError::Network("booking store poisoned".into()))?;

        Ok(bookings
            .iter()
            .filter(|b| b.imovel_id == listing_id && b.data_visita == date)
            .map(|b| b.hora_visita.clone())
            .collect())
    }
}

fn bad_request(msg: &str) -> ApiError {
    ApiError::Status {
        code: 400,
        message: Some(msg.to_string()),
    }
}

fn not_found() -> ApiError {
    ApiError::Status {
        code: 404,
        message: Some("Imóvel não encontrado".to_string()),
    }
}

impl ListingApi for SampleCatalog {
    fn list_listings(&self, query: &ListingQuery) -> Result<ListingPage, ApiError> {
        // Featured first, then newest (highest id) first.
        let mut matching: Vec<Listing> = self
            .listings
            .iter()
            .filter(|l| l.is_available() && query.filters.matches(l))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.featured.cmp(&a.featured).then(b.id.cmp(&a.id)));

        let page = paginate(&matching, query.page, query.per_page);

        Ok(ListingPage {
            listings: page.items,
            total: page.total as u64,
            pages: page.pages,
        })
    }

    fn get_listing(&self, id: i64) -> Result<Listing, ApiError> {
        self.find(id).cloned().ok_or_else(not_found)
    }

    fn available_slots(&self, listing_id: i64, date: &str) -> Result<Vec<String>, ApiError> {
        if self.find(listing_id).is_none() {
            return Err(not_found());
        }
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| bad_request("Formato de data inválido. Use YYYY-MM-DD"))?;

        let taken = self.taken_slots(listing_id, date)?;

        Ok((FIRST_SLOT_HOUR..=LAST_SLOT_HOUR)
            .map(|h| format!("{h:02}:00"))
            .filter(|slot| !taken.contains(slot))
            .collect())
    }

    fn create_booking(&self, booking: &BookingRequest) -> Result<(), ApiError> {
        if self.find(booking.imovel_id).is_none() {
            return Err(not_found());
        }

        let date_ok = NaiveDate::parse_from_str(&booking.data_visita, "%Y-%m-%d").is_ok();
        let time_ok = NaiveTime::parse_from_str(&booking.hora_visita, "%H:%M").is_ok();
        if !date_ok || !time_ok {
            return Err(bad_request(
                "Formato de data/hora inválido. Use YYYY-MM-DD para data e HH:MM para hora",
            ));
        }

        let mut bookings = self
            .bookings
            .lock()
            .map_err(|_| ApiError::Network("booking store poisoned".into()))?;

        let clash = bookings.iter().any(|b| {
            b.imovel_id == booking.imovel_id
                && b.data_visita == booking.data_visita
                && b.hora_visita == booking.hora_visita
        });
        if clash {
            return Err(ApiError::Status {
                code: 409,
                message: Some("Já existe um agendamento para este horário".to_string()),
            });
        }

        info!(
            imovel_id = booking.imovel_id,
            date = %booking.data_visita,
            time = %booking.hora_visita,
            "visit booked in sample catalog"
        );
        bookings.push(booking.clone());
        Ok(())
    }
}

#[allow(clippy::too_many_arguments)]
fn seed(
    id: i64,
    title: &str,
    description: &str,
    kind: &str,
    price: f64,
    bedrooms: u32,
    bathrooms: u32,
    area: f64,
    address: Address,
    featured: bool,
) -> Listing {
    Listing {
        id,
        title: title.to_string(),
        description: Some(description.to_string()),
        kind: kind.to_string(),
        price,
        bedrooms,
        bathrooms,
        area,
        address,
        coordinates: Coordinates {
            latitude: Some(-23.5505),
            longitude: Some(-46.6333),
        },
        main_image: None,
        extra_images: None,
        status: "disponivel".to_string(),
        featured,
    }
}

pub fn seed_listings() -> Vec<Listing> {
    vec![
        seed(
            1,
            "Apartamento Moderno no Centro",
            "Apartamento completamente reformado com acabamentos modernos, próximo ao metrô.",
            "apartamento",
            2500.0,
            2,
            2,
            80.0,
            Address::new("Rua das Flores", "123", "Centro", "São Paulo", "SP", "01234-567"),
            true,
        ),
        seed(
            2,
            "Casa com Jardim na Zona Sul",
            "Casa térrea com amplo jardim, ideal para famílias. Garagem para 2 carros.",
            "casa",
            4200.0,
            3,
            2,
            150.0,
            Address::new("Rua dos Jardins", "456", "Vila Madalena", "São Paulo", "SP", "05678-901"),
            false,
        ),
        seed(
            3,
            "Loft Industrial Reformado",
            "Loft com pé direito alto, estilo industrial, totalmente mobiliado.",
            "loft",
            3800.0,
            1,
            1,
            90.0,
            Address::new("Rua da Indústria", "789", "Bela Vista", "São Paulo", "SP", "01234-567"),
            true,
        ),
        seed(
            4,
            "Studio Compacto e Funcional",
            "Studio otimizado com móveis planejados, ideal para jovens profissionais.",
            "studio",
            1800.0,
            1,
            1,
            35.0,
            Address::new("Rua Compacta", "321", "Liberdade", "São Paulo", "SP", "01234-567"),
            false,
        ),
        seed(
            5,
            "Cobertura com Vista Panorâmica",
            "Cobertura duplex com terraço, churrasqueira e vista para a cidade.",
            "apartamento",
            8500.0,
            4,
            3,
            200.0,
            Address::new("Avenida Panorâmica", "1000", "Moema", "São Paulo", "SP", "04567-890"),
            true,
        ),
        seed(
            6,
            "Casa Térrea com Quintal",
            "Casa com quintal amplo, ideal para pets. Próxima a escolas e comércio.",
            "casa",
            3200.0,
            3,
            2,
            120.0,
            Address::new("Rua do Quintal", "654", "Vila Prudente", "São Paulo", "SP", "03456-789"),
            false,
        ),
    ]
}
