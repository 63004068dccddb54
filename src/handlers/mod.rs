//! One module per page. Handlers take the already-parsed query (or form
//! body) and the shared [`App`](crate::app::App), and return a response.

pub mod detail;
pub mod home;
pub mod listings;
pub mod terms;
