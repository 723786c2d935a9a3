// src/domain/clusters.rs

use crate::domain::property::{City, Property};
use rand::Rng;
use serde::Serialize;

pub const UNITS_SOLD_MIN: u32 = 60;
pub const UNITS_SOLD_MAX: u32 = 120;
/// Never advertise fewer than this many units as available.
pub const MIN_AVAILABLE_UNITS: u32 = 2;
const UNITS_PER_LISTING: u32 = 5;

/// Per-city market summary shown on the listing page.
///
/// `units_sold` is placeholder marketing copy with no data behind it;
/// it is drawn fresh on every aggregation and must not be read as a metric.
#[derive(Debug, Clone, Serialize)]
pub struct Cluster<'a> {
    pub city: City,
    pub name: String,
    pub units_sold: u32,
    pub available_units: u32,
    pub occupancy: u32,
    pub image: &'a str,
    pub properties: Vec<&'a Property>,
}

/// Groups listings by city in first-seen order and derives the summary
/// figures. The generator is injected so callers control the mock numbers.
pub fn aggregate<'a, R>(properties: &[&'a Property], rng: &mut R) -> Vec<Cluster<'a>>
where
    R: Rng,
{
    let mut groups: Vec<(City, Vec<&'a Property>)> = Vec::new();
    for &p in properties {
        match groups.iter_mut().find(|(city, _)| *city == p.city) {
            Some((_, members)) => members.push(p),
            None => groups.push((p.city, vec![p])),
        }
    }

    groups
        .into_iter()
        .map(|(city, members)| {
            let units_sold = rng.gen_range(UNITS_SOLD_MIN..UNITS_SOLD_MAX);
            let capacity = members.len() as u32 * UNITS_PER_LISTING;
            let available_units = capacity
                .saturating_sub(units_sold)
                .max(MIN_AVAILABLE_UNITS);
            let occupancy = units_sold * 100 / (units_sold + available_units);

            let first = members[0];
            Cluster {
                city,
                name: format!("{} {}", leading_words(&first.title, 2), city),
                units_sold,
                available_units,
                occupancy,
                image: first.image.as_str(),
                properties: members,
            }
        })
        .collect()
}

fn leading_words(text: &str, n: usize) -> String {
    text.split(' ').take(n).collect::<Vec<_>>().join(" ")
}
