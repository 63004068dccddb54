pub mod detail;
pub mod home;
pub mod listings;
pub mod terms;

pub use detail::{
    booking_panel, detail_error_page, detail_page, map_section, slot_select, BookingPanel, DetailVm,
    SlotOptions,
};
pub use home::{home_page, HomeVm};
pub use listings::{listings_page, ListingsVm, Results, View};
pub use terms::{terms_page, terms_panel};
