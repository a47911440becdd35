//! Country and package catalog
//!
//! Countries and packages are immutable value objects owned by the caller.
//! The catalog is loaded from JSON, either the bundled copy or a file the
//! user points at.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ShopError, ShopResult};

/// Catalog shipped with the application
const BUNDLED_CATALOG: &str = include_str!("../assets/catalog.json");

/// A price in minor units
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Price {
    pub amount_cents: u32,
    pub currency: String,
}

impl Price {
    pub fn new(amount_cents: u32, currency: impl Into<String>) -> Self {
        Self {
            amount_cents,
            currency: currency.into(),
        }
    }

    fn symbol(&self) -> Option<&'static str> {
        match self.currency.as_str() {
            "USD" => Some("$"),
            "EUR" => Some("€"),
            "GBP" => Some("£"),
            _ => None,
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let units = self.amount_cents / 100;
        let cents = self.amount_cents % 100;
        match self.symbol() {
            Some(symbol) => write!(f, "{}{}.{:02}", symbol, units, cents),
            None => write!(f, "{}.{:02} {}", units, cents, self.currency),
        }
    }
}

/// A destination country
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Country {
    /// ISO 3166-1 alpha-2 code, the identity key
    pub code: String,
    pub name: String,
    /// Flag image reference (emoji or URL)
    pub flag: String,
    pub region: String,
    #[serde(default)]
    pub starting_price: Option<Price>,
}

impl Country {
    /// Case-insensitive match on name or code
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self.name.to_lowercase().contains(&query)
            || self.code.to_lowercase() == query
    }
}

/// A data package for one country
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Package {
    /// Identity key
    pub id: String,
    pub country_code: String,
    pub name: String,
    pub data_gb: u32,
    pub validity_days: u32,
    pub price: Price,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub popular: bool,
}

impl Package {
    /// Short summary such as "5 GB · 30 days"
    pub fn allowance(&self) -> String {
        let days = if self.validity_days == 1 { "day" } else { "days" };
        format!("{} GB · {} {}", self.data_gb, self.validity_days, days)
    }
}

/// Countries and their packages
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Catalog {
    countries: Vec<Country>,
    packages: Vec<Package>,
}

impl Catalog {
    /// Build and validate a catalog
    pub fn new(countries: Vec<Country>, packages: Vec<Package>) -> ShopResult<Self> {
        let catalog = Self {
            countries,
            packages,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The catalog compiled into the binary
    pub fn bundled() -> ShopResult<Self> {
        Self::from_json(BUNDLED_CATALOG)
    }

    pub fn from_json(json: &str) -> ShopResult<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn load(path: &Path) -> ShopResult<Self> {
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        tracing::info!(
            path = %path.display(),
            countries = catalog.countries.len(),
            packages = catalog.packages.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    fn validate(&self) -> ShopResult<()> {
        let mut codes = HashSet::new();
        for country in &self.countries {
            if !codes.insert(country.code.as_str()) {
                return Err(ShopError::DuplicateCountry(country.code.clone()));
            }
        }
        let mut ids = HashSet::new();
        for package in &self.packages {
            if !ids.insert(package.id.as_str()) {
                return Err(ShopError::DuplicatePackage(package.id.clone()));
            }
            if !codes.contains(package.country_code.as_str()) {
                return Err(ShopError::OrphanPackage {
                    package: package.id.clone(),
                    country: package.country_code.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    /// Countries matching a search query, in catalog order
    pub fn search(&self, query: &str) -> Vec<&Country> {
        self.countries.iter().filter(|c| c.matches(query)).collect()
    }

    pub fn country(&self, code: &str) -> ShopResult<&Country> {
        self.countries
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(code))
            .ok_or_else(|| ShopError::UnknownCountry(code.to_string()))
    }

    /// Packages for a country, cheapest first
    pub fn packages_for(&self, code: &str) -> ShopResult<Vec<&Package>> {
        let country = self.country(code)?;
        let mut packages: Vec<&Package> = self
            .packages
            .iter()
            .filter(|p| p.country_code == country.code)
            .collect();
        packages.sort_by_key(|p| p.price.amount_cents);
        Ok(packages)
    }

    pub fn package(&self, id: &str) -> ShopResult<&Package> {
        self.packages
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| ShopError::UnknownPackage(id.to_string()))
    }
}
