mod detail_tests;
mod home_tests;
mod listings_tests;
mod terms_tests;
