pub mod card;
pub mod error;
pub mod pagination;
pub mod toast;

pub use card::listing_card;
pub use error::{error_page, notice_block};
pub use pagination::pagination;
pub use toast::{toast, toast_oob, Toast, ToastKind};
