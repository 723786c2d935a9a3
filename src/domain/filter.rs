// src/domain/filter.rs

use crate::domain::property::{City, ListingCategory, Property};
use crate::request::QueryParams;

/// Listings priced at or above this count as ultra-premium.
pub const ULTRA_PREMIUM_MIN_PRICE: u64 = 5_000_000;
/// Ready listings at or above this ROI still count as investments.
pub const INVESTMENT_MIN_ROI: f64 = 7.0;

/// The status tabs above the listing column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusTab {
    #[default]
    All,
    ForSale,
    ForRent,
    UnderConstruction,
}

impl StatusTab {
    pub const ALL: [StatusTab; 4] = [
        StatusTab::All,
        StatusTab::ForSale,
        StatusTab::ForRent,
        StatusTab::UnderConstruction,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StatusTab::All => "All",
            StatusTab::ForSale => "For Sale",
            StatusTab::ForRent => "For Rent",
            StatusTab::UnderConstruction => "Under Construction",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            StatusTab::All => "all",
            StatusTab::ForSale => "for-sale",
            StatusTab::ForRent => "for-rent",
            StatusTab::UnderConstruction => "under-construction",
        }
    }

    pub fn parse(raw: &str) -> Option<StatusTab> {
        let raw = raw.trim();
        StatusTab::ALL
            .into_iter()
            .find(|t| t.slug().eq_ignore_ascii_case(raw) || t.label().eq_ignore_ascii_case(raw))
    }

    fn admits(&self, p: &Property) -> bool {
        match self {
            StatusTab::All => true,
            StatusTab::ForSale => p.category == ListingCategory::Buy,
            StatusTab::ForRent => p.category == ListingCategory::Rent,
            StatusTab::UnderConstruction => p.is_off_plan(),
        }
    }
}

pub struct Subtype {
    pub label: &'static str,
    pub desc: &'static str,
}

const fn sub(label: &'static str, desc: &'static str) -> Subtype {
    Subtype { label, desc }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterCategory {
    Residential,
    Investment,
    Commercial,
    UltraPremium,
}

impl FilterCategory {
    pub const ALL: [FilterCategory; 4] = [
        FilterCategory::Residential,
        FilterCategory::Investment,
        FilterCategory::Commercial,
        FilterCategory::UltraPremium,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FilterCategory::Residential => "Residential",
            FilterCategory::Investment => "Investment",
            FilterCategory::Commercial => "Commercial",
            FilterCategory::UltraPremium => "Ultra-Premium",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            FilterCategory::Residential => "residential",
            FilterCategory::Investment => "investment",
            FilterCategory::Commercial => "commercial",
            FilterCategory::UltraPremium => "ultra-premium",
        }
    }

    pub fn parse(raw: &str) -> Option<FilterCategory> {
        let raw = raw.trim();
        FilterCategory::ALL
            .into_iter()
            .find(|c| c.slug().eq_ignore_ascii_case(raw) || c.label().eq_ignore_ascii_case(raw))
    }

    pub fn desc(&self) -> &'static str {
        match self {
            FilterCategory::Residential => "Premium living spaces across global cities",
            FilterCategory::Investment => "High-yield assets & growth opportunities",
            FilterCategory::Commercial => "Business & retail opportunities",
            FilterCategory::UltraPremium => "The world's most exclusive properties",
        }
    }

    pub fn subtypes(&self) -> &'static [Subtype] {
        match self {
            FilterCategory::Residential => &RESIDENTIAL,
            FilterCategory::Investment => &INVESTMENT,
            FilterCategory::Commercial => &COMMERCIAL,
            FilterCategory::UltraPremium => &ULTRA_PREMIUM,
        }
    }

    /// The canonical label when `raw` names one of this category's subtypes.
    pub fn find_subtype(&self, raw: &str) -> Option<&'static str> {
        self.subtypes()
            .iter()
            .find(|s| s.label.eq_ignore_ascii_case(raw.trim()))
            .map(|s| s.label)
    }

    /// Category-level membership. Commercial admits nothing because the
    /// catalog carries no commercial stock.
    pub fn admits(&self, p: &Property) -> bool {
        match self {
            FilterCategory::Residential => true,
            FilterCategory::Investment => {
                p.is_off_plan() || p.category == ListingCategory::Rent || p.roi >= INVESTMENT_MIN_ROI
            }
            FilterCategory::Commercial => false,
            FilterCategory::UltraPremium => p.price >= ULTRA_PREMIUM_MIN_PRICE,
        }
    }
}

static RESIDENTIAL: [Subtype; 7] = [
    sub("Luxury Apartments", "High-end city living"),
    sub("Penthouses", "Top-floor exclusivity"),
    sub("Villas", "Spacious private estates"),
    sub("Townhouses", "Classic urban charm"),
    sub("Branded Residences", "Developer signature homes"),
    sub("Waterfront Homes", "Beachfront & marina living"),
    sub("Gated Community", "Secure family compounds"),
];

static INVESTMENT: [Subtype; 6] = [
    sub("Off-Plan Projects", "Early-stage pricing advantage"),
    sub("High-Yield Rentals", "Strong rental returns"),
    sub("Capital Appreciation", "Long-term value growth"),
    sub("Pre-Launch", "Exclusive first-mover access"),
    sub("Fractional Ownership", "Shared luxury investment"),
    sub("Holiday Homes", "Income + personal use"),
];

static COMMERCIAL: [Subtype; 6] = [
    sub("Office Spaces", "Grade A offices"),
    sub("Retail Units", "High-footfall locations"),
    sub("Mixed-Use", "Residential + commercial"),
    sub("Hospitality", "Hotels & serviced apartments"),
    sub("Warehouses", "Logistics & storage"),
    sub("Business Parks", "Corporate campuses"),
];

static ULTRA_PREMIUM: [Subtype; 4] = [
    sub("Signature Collection", "One-of-a-kind masterpieces"),
    sub("Private Estates", "Sprawling luxury compounds"),
    sub("Ultra-Luxury Mansions", "Landmark residences"),
    sub("Landmark Developments", "Iconic architectural projects"),
];

/// Everything the listing page narrows the catalog by.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Stored trimmed; `None` when blank.
    pub query: Option<String>,
    pub city: Option<City>,
    pub status: StatusTab,
    pub category: Option<FilterCategory>,
    pub subtype: Option<String>,
}

impl FilterCriteria {
    /// Reads `q`, `city`, `status`, `category` and `subtype`.
    /// Unrecognised values are dropped rather than rejected, and a
    /// subtype only sticks when it belongs to the chosen category.
    pub fn from_params(params: &QueryParams) -> Self {
        let category = params.get("category").and_then(FilterCategory::parse);
        let subtype = match (category, params.get("subtype")) {
            (Some(cat), Some(raw)) => cat.find_subtype(raw).map(str::to_string),
            _ => None,
        };

        Self {
            query: params
                .get("q")
                .map(str::trim)
                .filter(|q| !q.is_empty())
                .map(str::to_string),
            city: params.get("city").and_then(City::parse),
            status: params
                .get("status")
                .and_then(StatusTab::parse)
                .unwrap_or_default(),
            category,
            subtype,
        }
    }

    /// Query pairs that reproduce these criteria, for building links.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(q) = &self.query {
            pairs.push(("q", q.clone()));
        }
        if let Some(city) = self.city {
            pairs.push(("city", city.as_str().to_string()));
        }
        if self.status != StatusTab::All {
            pairs.push(("status", self.status.slug().to_string()));
        }
        if let Some(cat) = self.category {
            pairs.push(("category", cat.slug().to_string()));
        }
        if let Some(sub) = &self.subtype {
            pairs.push(("subtype", sub.clone()));
        }
        pairs
    }

    pub fn matches(&self, p: &Property) -> bool {
        if let Some(city) = self.city {
            if p.city != city {
                return false;
            }
        }

        if !self.status.admits(p) {
            return false;
        }

        if let Some(q) = &self.query {
            let q = q.to_lowercase();
            let hit = [&p.title, &p.location, &p.kind]
                .iter()
                .any(|field| field.to_lowercase().contains(&q));
            if !hit {
                return false;
            }
        }

        match (&self.subtype, self.category) {
            (Some(subtype), category) => {
                subtype_matches(subtype, p) || category.map_or(true, |c| c.admits(p))
            }
            (None, Some(category)) => category.admits(p),
            (None, None) => true,
        }
    }
}

/// Loose textual match: the first word of the subtype label against the
/// listing's type or title.
fn subtype_matches(subtype: &str, p: &Property) -> bool {
    let Some(word) = subtype.split_whitespace().next() else {
        return false;
    };
    let word = word.to_lowercase();
    p.kind.to_lowercase().contains(&word) || p.title.to_lowercase().contains(&word)
}

/// The listings that satisfy `criteria`, in their original order.
pub fn filter<'a, I>(properties: I, criteria: &FilterCriteria) -> Vec<&'a Property>
where
    I: IntoIterator<Item = &'a Property>,
{
    properties
        .into_iter()
        .filter(|p| criteria.matches(p))
        .collect()
}
