// src/domain/selection.rs

use crate::domain::catalog::Catalog;
use crate::domain::filter::FilterCriteria;
use crate::domain::property::{City, Property};

/// Which listing drives the detail panel, which one is open in the modal,
/// and which gallery image is showing. The two listings are independent:
/// opening or closing the modal never touches the panel selection.
#[derive(Debug, Clone, Default)]
pub struct SelectionState<'a> {
    selected: Option<&'a Property>,
    image_index: usize,
    modal: Option<&'a Property>,
}

impl<'a> SelectionState<'a> {
    pub fn selected(&self) -> Option<&'a Property> {
        self.selected
    }

    pub fn modal(&self) -> Option<&'a Property> {
        self.modal
    }

    pub fn image_index(&self) -> usize {
        self.image_index
    }

    /// Selecting always restarts the gallery at the first image.
    pub fn select(&mut self, property: &'a Property) {
        self.selected = Some(property);
        self.image_index = 0;
    }

    /// Run after every filter pass: with nothing selected, fall back to
    /// the first visible listing.
    pub fn reconcile(&mut self, visible: &[&'a Property]) {
        if self.selected.is_none() {
            if let Some(&first) = visible.first() {
                self.select(first);
            }
        }
    }

    /// A globe pin narrows the listing to its city and selects the first
    /// catalog listing there.
    pub fn select_city_pin(&mut self, criteria: &mut FilterCriteria, catalog: &'a Catalog, city: City) {
        criteria.city = Some(city);
        if let Some(first) = catalog.in_city(city).next() {
            self.select(first);
        }
    }

    /// Out-of-range indexes and calls without a selection are ignored.
    pub fn set_image(&mut self, index: usize) {
        if let Some(p) = self.selected {
            if index < p.gallery().len() {
                self.image_index = index;
            }
        }
    }

    /// The image the detail panel should show.
    pub fn active_image(&self) -> Option<&'a str> {
        let p = self.selected?;
        let gallery = p.gallery();
        Some(gallery.get(self.image_index).copied().unwrap_or(p.image.as_str()))
    }

    pub fn open_modal(&mut self, property: &'a Property) {
        self.modal = Some(property);
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }
}

/// Carousel stepping that wraps at both ends.
pub fn prev_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if current == 0 || current >= len {
        len - 1
    } else {
        current - 1
    }
}

pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 || current + 1 >= len {
        0
    } else {
        current + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::filter::filter;

    #[test]
    fn reconcile_selects_first_visible_only_when_empty() {
        let catalog = Catalog::seeded().unwrap();
        let visible = filter(
            catalog.properties(),
            &FilterCriteria {
                city: Some(City::Dubai),
                ..FilterCriteria::default()
            },
        );

        let mut state = SelectionState::default();
        state.reconcile(&visible);
        assert_eq!(state.selected().unwrap().id, "2");

        // An existing selection survives a filter change, even when hidden.
        let mut state = SelectionState::default();
        state.select(catalog.find("5").unwrap());
        state.reconcile(&visible);
        assert_eq!(state.selected().unwrap().id, "5");
    }

    #[test]
    fn reconcile_on_empty_set_leaves_nothing_selected() {
        let mut state = SelectionState::default();
        state.reconcile(&[]);
        assert!(state.selected().is_none());
        assert!(state.active_image().is_none());
    }

    #[test]
    fn city_pin_sets_filter_and_selects_first_in_city() {
        let catalog = Catalog::seeded().unwrap();
        let mut criteria = FilterCriteria::default();
        let mut state = SelectionState::default();

        state.select_city_pin(&mut criteria, &catalog, City::Turkey);
        assert_eq!(criteria.city, Some(City::Turkey));
        assert_eq!(state.selected().unwrap().id, "6");
    }

    #[test]
    fn city_pin_without_listings_keeps_previous_selection() {
        let catalog = Catalog::seeded().unwrap();
        let mut criteria = FilterCriteria::default();
        let mut state = SelectionState::default();
        state.select(catalog.find("1").unwrap());

        state.select_city_pin(&mut criteria, &catalog, City::NewYork);
        assert_eq!(criteria.city, Some(City::NewYork));
        assert_eq!(state.selected().unwrap().id, "1");
    }

    #[test]
    fn modal_is_independent_of_selection() {
        let catalog = Catalog::seeded().unwrap();
        let mut state = SelectionState::default();
        state.select(catalog.find("1").unwrap());

        state.open_modal(catalog.find("3").unwrap());
        assert_eq!(state.selected().unwrap().id, "1");
        assert_eq!(state.modal().unwrap().id, "3");

        state.close_modal();
        assert!(state.modal().is_none());
        assert_eq!(state.selected().unwrap().id, "1");
    }

    #[test]
    fn image_index_resets_when_selection_changes() {
        let catalog = Catalog::seeded().unwrap();
        let mut state = SelectionState::default();
        state.select(catalog.find("1").unwrap());
        state.set_image(1);
        assert_eq!(state.image_index(), 1);
        assert_eq!(state.active_image(), Some("/static/img/property-5.jpg"));

        state.select(catalog.find("2").unwrap());
        assert_eq!(state.image_index(), 0);
        assert_eq!(state.active_image(), Some("/static/img/property-2.jpg"));
    }

    #[test]
    fn out_of_range_image_is_ignored() {
        let catalog = Catalog::seeded().unwrap();
        let mut state = SelectionState::default();
        state.set_image(1);
        assert_eq!(state.image_index(), 0);

        state.select(catalog.find("1").unwrap());
        state.set_image(9);
        assert_eq!(state.image_index(), 0);
    }

    #[test]
    fn carousel_wraps() {
        assert_eq!(prev_index(0, 3), 2);
        assert_eq!(prev_index(2, 3), 1);
        assert_eq!(next_index(2, 3), 0);
        assert_eq!(next_index(0, 3), 1);
        assert_eq!(next_index(0, 0), 0);
        assert_eq!(prev_index(0, 0), 0);
    }
}
