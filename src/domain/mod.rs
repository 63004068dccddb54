pub mod booking;
pub mod filters;
pub mod listing;
pub mod pagination;
pub mod terms;

pub use booking::{BookingForm, BookingRequest};
pub use filters::{BedroomFilter, FilterState, PriceRange};
pub use listing::{Address, Coordinates, Listing, ListingPage};
pub use pagination::{paginate, Pager, PagerButton};
pub use terms::TermsTab;
