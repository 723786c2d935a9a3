mod api_tests;
mod detail_tests;
mod home_tests;
mod leads_tests;
mod properties_tests;
