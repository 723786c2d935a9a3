// src/domain/catalog.rs

use crate::domain::property::{City, ListingCategory, ListingStatus, Property};
use std::collections::HashSet;
use thiserror::Error;

pub const PROPERTY_TYPES: [&str; 5] = ["Apartment", "Villa", "Penthouse", "Townhouse", "Commercial"];

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("duplicate property id {0}")]
    DuplicateId(String),
    #[error("property {0} has no price")]
    ZeroPrice(String),
    #[error("property {0} has no image")]
    MissingImage(String),
}

/// The read-only, ordered set of listings every page works from.
#[derive(Debug, Clone)]
pub struct Catalog {
    properties: Vec<Property>,
}

impl Catalog {
    /// Validates the invariants the rest of the site leans on:
    /// unique ids, positive prices and at least one image.
    pub fn new(properties: Vec<Property>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for p in &properties {
            if !seen.insert(p.id.as_str()) {
                return Err(CatalogError::DuplicateId(p.id.clone()));
            }
            if p.price == 0 {
                return Err(CatalogError::ZeroPrice(p.id.clone()));
            }
            if p.image.is_empty() && p.images.is_empty() {
                return Err(CatalogError::MissingImage(p.id.clone()));
            }
        }
        Ok(Self { properties })
    }

    /// The hand-authored sample listings, run through the same checks as `new`.
    pub fn seeded() -> Result<Self, CatalogError> {
        Self::new(seed_properties())
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    pub fn in_city(&self, city: City) -> impl Iterator<Item = &Property> {
        self.properties.iter().filter(move |p| p.city == city)
    }

    /// The listing after `id` in catalog order, wrapping to the first.
    pub fn next_after(&self, id: &str) -> Option<&Property> {
        let idx = self.properties.iter().position(|p| p.id == id)?;
        self.properties
            .get(idx + 1)
            .or_else(|| self.properties.first())
    }

    /// Up to `limit` other listings in the same city, or the first
    /// `limit` other listings when the city has none.
    pub fn similar_to(&self, property: &Property, limit: usize) -> Vec<&Property> {
        let others: Vec<&Property> = self
            .properties
            .iter()
            .filter(|p| p.id != property.id)
            .collect();

        let same_city: Vec<&Property> = others
            .iter()
            .copied()
            .filter(|p| p.city == property.city)
            .take(limit)
            .collect();

        if same_city.is_empty() {
            others.into_iter().take(limit).collect()
        } else {
            same_city
        }
    }

    /// Images for the detail gallery: the listing's own images followed
    /// by the primary images of up to three other listings.
    pub fn showcase_images<'a>(&'a self, property: &'a Property) -> Vec<&'a str> {
        let mut images = property.gallery();
        images.extend(
            self.properties
                .iter()
                .filter(|p| p.id != property.id)
                .map(|p| p.image.as_str())
                .take(3),
        );
        images
    }
}

fn img(n: u8) -> String {
    format!("/static/img/property-{n}.jpg")
}

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn seed_properties() -> Vec<Property> {
    vec![
        Property {
            id: "1".into(),
            title: "The Residences at One Hyde Park".into(),
            location: "Knightsbridge, London".into(),
            city: City::London,
            kind: "Penthouse".into(),
            price: 12_500_000,
            bedrooms: 4,
            bathrooms: 5,
            area: 5200,
            roi: 5.2,
            status: ListingStatus::Ready,
            category: ListingCategory::Buy,
            image: img(1),
            images: vec![img(1), img(5)],
            description: "An extraordinary penthouse offering panoramic views across Hyde Park and the London skyline. Features include Italian marble throughout, bespoke joinery, and 24-hour concierge service.".into(),
            features: labels(&["Concierge", "Private Gym", "Wine Cellar", "Terrace", "Smart Home"]),
            developer: Some("Candy & Candy".into()),
            completion_date: None,
        },
        Property {
            id: "2".into(),
            title: "Palm Jumeirah Signature Villa".into(),
            location: "Palm Jumeirah, Dubai".into(),
            city: City::Dubai,
            kind: "Villa".into(),
            price: 8_750_000,
            bedrooms: 6,
            bathrooms: 7,
            area: 12000,
            roi: 7.8,
            status: ListingStatus::Ready,
            category: ListingCategory::Buy,
            image: img(2),
            images: vec![img(2), img(6)],
            description: "A magnificent beachfront villa on the iconic Palm Jumeirah with private beach access, infinity pool, and unobstructed sea views.".into(),
            features: labels(&["Private Beach", "Infinity Pool", "Staff Quarters", "Cinema Room"]),
            developer: Some("Nakheel".into()),
            completion_date: None,
        },
        Property {
            id: "3".into(),
            title: "DAMAC Towers — Paramount".into(),
            location: "Business Bay, Dubai".into(),
            city: City::Dubai,
            kind: "Apartment".into(),
            price: 2_400_000,
            bedrooms: 3,
            bathrooms: 4,
            area: 2800,
            roi: 9.1,
            status: ListingStatus::OffPlan,
            category: ListingCategory::Project,
            image: img(3),
            images: vec![img(3), img(1)],
            description: "Ultra-luxury branded residences by DAMAC in partnership with Paramount Hotels. Expected completion 2026 with premium amenities.".into(),
            features: labels(&["Branded Residences", "Rooftop Pool", "Spa", "Valet Parking"]),
            developer: Some("DAMAC Properties".into()),
            completion_date: Some("Q4 2026".into()),
        },
        Property {
            id: "4".into(),
            title: "Belgravia Georgian Townhouse".into(),
            location: "Belgravia, London".into(),
            city: City::London,
            kind: "Townhouse".into(),
            price: 18_000_000,
            bedrooms: 7,
            bathrooms: 6,
            area: 8500,
            roi: 3.8,
            status: ListingStatus::Ready,
            category: ListingCategory::Buy,
            image: img(4),
            images: vec![img(4), img(1)],
            description: "A meticulously restored Grade II listed Georgian townhouse in the heart of Belgravia. Features original period details with contemporary luxury finishes.".into(),
            features: labels(&["Garden", "Lift", "Staff Quarters", "Wine Cellar", "Garage"]),
            developer: None,
            completion_date: None,
        },
        Property {
            id: "5".into(),
            title: "Riyadh Gate Tower Residence".into(),
            location: "King Abdullah Financial District, Riyadh".into(),
            city: City::Riyadh,
            kind: "Apartment".into(),
            price: 1_800_000,
            bedrooms: 3,
            bathrooms: 3,
            area: 3200,
            roi: 8.5,
            status: ListingStatus::OffPlan,
            category: ListingCategory::Project,
            image: img(5),
            images: vec![img(5), img(3)],
            description: "Premium residences in Riyadh's prestigious financial district. Part of Saudi Vision 2030 development with world-class amenities.".into(),
            features: labels(&["Smart Home", "Concierge", "Business Lounge", "Rooftop Garden"]),
            developer: Some("ROSHN".into()),
            completion_date: Some("Q2 2027".into()),
        },
        Property {
            id: "6".into(),
            title: "Bosphorus Waterfront Estate".into(),
            location: "Bebek, Istanbul".into(),
            city: City::Turkey,
            kind: "Villa".into(),
            price: 5_600_000,
            bedrooms: 5,
            bathrooms: 5,
            area: 6800,
            roi: 6.4,
            status: ListingStatus::Ready,
            category: ListingCategory::Rent,
            image: img(6),
            images: vec![img(6), img(2)],
            description: "An exceptional waterfront estate on the European shores of the Bosphorus with private jetty, landscaped gardens, and breathtaking strait views.".into(),
            features: labels(&["Waterfront", "Private Jetty", "Garden", "Guest House", "Pool"]),
            developer: None,
            completion_date: None,
        },
    ]
}
