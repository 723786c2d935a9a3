// src/domain/property.rs

use serde::Serialize;
use std::fmt;

/// The markets the brokerage lists in. New York is a market without
/// seeded listings, so it never shows up in clusters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum City {
    London,
    Dubai,
    Riyadh,
    #[serde(rename = "New York")]
    NewYork,
    Turkey,
}

impl City {
    pub const ALL: [City; 5] = [
        City::London,
        City::Dubai,
        City::Riyadh,
        City::NewYork,
        City::Turkey,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            City::London => "London",
            City::Dubai => "Dubai",
            City::Riyadh => "Riyadh",
            City::NewYork => "New York",
            City::Turkey => "Turkey",
        }
    }

    /// Case-insensitive lookup by display name.
    pub fn parse(raw: &str) -> Option<City> {
        let raw = raw.trim();
        City::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(raw))
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListingStatus {
    Ready,
    OffPlan,
}

impl ListingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingStatus::Ready => "ready",
            ListingStatus::OffPlan => "off-plan",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingCategory {
    Buy,
    Rent,
    Project,
}

impl ListingCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingCategory::Buy => "buy",
            ListingCategory::Rent => "rent",
            ListingCategory::Project => "project",
        }
    }
}

/// A single listing. Prices are stored in whole US dollars.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    pub id: String,
    pub title: String,
    pub location: String,
    pub city: City,
    #[serde(rename = "type")]
    pub kind: String,
    pub price: u64,
    pub bedrooms: u32,
    pub bathrooms: u32,
    /// Square feet.
    pub area: u32,
    pub roi: f64,
    pub status: ListingStatus,
    pub category: ListingCategory,
    pub image: String,
    pub images: Vec<String>,
    pub description: String,
    pub features: Vec<String>,
    pub developer: Option<String>,
    pub completion_date: Option<String>,
}

impl Property {
    /// Gallery images, falling back to the primary image when none are listed.
    pub fn gallery(&self) -> Vec<&str> {
        if self.images.is_empty() {
            vec![self.image.as_str()]
        } else {
            self.images.iter().map(String::as_str).collect()
        }
    }

    pub fn is_off_plan(&self) -> bool {
        self.status == ListingStatus::OffPlan
    }

    /// Catalog ids are numeric strings; the site shows them zero-padded.
    pub fn display_id(&self) -> String {
        format!("{:0>6}", self.id)
    }

    /// Title cut to `max` characters with an ellipsis, for tight card layouts.
    pub fn short_title(&self, max: usize) -> String {
        if self.title.chars().count() > max {
            let cut: String = self.title.chars().take(max).collect();
            format!("{cut}…")
        } else {
            self.title.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Catalog;

    #[test]
    fn city_parse_is_case_insensitive() {
        assert_eq!(City::parse("dubai"), Some(City::Dubai));
        assert_eq!(City::parse(" NEW YORK "), Some(City::NewYork));
        assert_eq!(City::parse("Paris"), None);
    }

    #[test]
    fn gallery_falls_back_to_primary_image() {
        let catalog = Catalog::seeded().unwrap();
        let mut p = catalog.find("1").unwrap().clone();
        assert_eq!(p.gallery().len(), 2);

        p.images.clear();
        assert_eq!(p.gallery(), vec![p.image.as_str()]);
    }

    #[test]
    fn display_id_is_zero_padded() {
        let catalog = Catalog::seeded().unwrap();
        assert_eq!(catalog.find("4").unwrap().display_id(), "000004");
    }

    #[test]
    fn short_title_adds_ellipsis_only_when_needed() {
        let catalog = Catalog::seeded().unwrap();
        let p = catalog.find("1").unwrap();
        assert_eq!(p.short_title(20), "The Residences at On…");
        assert_eq!(p.short_title(200), p.title);
    }
}
