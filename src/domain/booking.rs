// src/domain/booking.rs

use crate::forms::missing_required;
use crate::urls::Query;
use serde::Serialize;

/// The booking form as submitted, field names matching the HTML inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub message: String,
}

/// JSON body for `POST /api/agendamentos`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingRequest {
    pub imovel_id: i64,
    pub nome_interessado: String,
    pub email: String,
    pub telefone: String,
    pub data_visita: String,
    pub hora_visita: String,
    pub mensagem: String,
}

fn field(fields: &Query, key: &str) -> String {
    fields.get(key).map(|v| v.trim().to_string()).unwrap_or_default()
}

impl BookingForm {
    pub fn from_fields(fields: &Query) -> Self {
        Self {
            name: field(fields, "nome"),
            email: field(fields, "email"),
            phone: field(fields, "telefone"),
            date: field(fields, "data_visita"),
            time: field(fields, "hora_visita"),
            message: field(fields, "mensagem"),
        }
    }

    /// Names of the required inputs left blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        missing_required(&[
            ("nome", self.name.as_str()),
            ("email", self.email.as_str()),
            ("telefone", self.phone.as_str()),
            ("data_visita", self.date.as_str()),
            ("hora_visita", self.time.as_str()),
        ])
    }

    pub fn to_request(&self, listing_id: i64) -> BookingRequest {
        BookingRequest {
            imovel_id: listing_id,
            nome_interessado: self.name.clone(),
            email: self.email.clone(),
            telefone: self.phone.clone(),
            data_visita: self.date.clone(),
            hora_visita: self.time.clone(),
            mensagem: self.message.clone(),
        }
    }

    /// What is left after a successful submission: an empty form that
    /// still remembers the visit date.
    pub fn reset_keeping_date(&self) -> Self {
        Self {
            date: self.date.clone(),
            ..Self::default()
        }
    }
}
