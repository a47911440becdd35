//! Page components for the eSIM shop.

mod country_packages;
mod my_esims;
mod profile;
mod shop;

pub use country_packages::CountryPackages;
pub use my_esims::MyEsims;
pub use profile::Profile;
pub use shop::Shop;
