use crate::domain::content::COUNTRY_CHIPS;
use crate::domain::property::City;
use crate::domain::{FilterCategory, FilterCriteria, Preferences, StatusTab};
use maud::{html, Markup};

/// Listing state a filter change leaves alone, such as `selected` and `img`.
pub type Carried = [(&'static str, String)];

/// Link to the listing page showing `criteria`, keeping the `carried` pairs.
pub fn criteria_href(prefs: &Preferences, criteria: &FilterCriteria, carried: &Carried) -> String {
    let mut pairs = criteria.to_pairs();
    pairs.extend(carried.iter().cloned());
    prefs.link("/properties", pairs)
}

/// Free-text search; hidden fields keep the rest of the criteria.
pub fn search_bar(prefs: &Preferences, criteria: &FilterCriteria, carried: &Carried) -> Markup {
    html! {
        form class="search-bar" method="get" action="/properties" {
            input type="search" name="q" placeholder="Search by name, area or type..."
                value=(criteria.query.as_deref().unwrap_or(""));
            @for (key, value) in criteria.to_pairs() {
                @if key != "q" {
                    input type="hidden" name=(key) value=(value);
                }
            }
            @for (key, value) in carried.iter().cloned().chain(prefs.to_pairs()) {
                input type="hidden" name=(key) value=(value);
            }
            button type="submit" class="btn btn-primary" { (prefs.t("search.button")) }
        }
    }
}

pub fn country_chips(prefs: &Preferences, criteria: &FilterCriteria, carried: &Carried) -> Markup {
    html! {
        div class="chips" {
            @for (city, flag, label) in COUNTRY_CHIPS.iter() {
                @let next = FilterCriteria { city: *city, ..criteria.clone() };
                a href=(criteria_href(prefs, &next, carried))
                  class=(if criteria.city == *city { "chip active" } else { "chip" }) {
                    span class="flag" { (flag) } " " (label)
                }
            }
        }
    }
}

pub fn status_tabs(prefs: &Preferences, criteria: &FilterCriteria, carried: &Carried) -> Markup {
    html! {
        nav class="status-tabs" {
            @for tab in StatusTab::ALL {
                @let next = FilterCriteria { status: tab, ..criteria.clone() };
                a href=(criteria_href(prefs, &next, carried))
                  class=(if criteria.status == tab { "tab active" } else { "tab" }) {
                    (tab.label())
                }
            }
        }
    }
}

/// Category bar, plus the subtype list of the chosen category.
/// Picking the active category again clears it.
pub fn category_bar(prefs: &Preferences, criteria: &FilterCriteria, carried: &Carried) -> Markup {
    html! {
        div class="category-bar" {
            @for cat in FilterCategory::ALL {
                @let active = criteria.category == Some(cat);
                @let next = FilterCriteria {
                    category: if active { None } else { Some(cat) },
                    subtype: None,
                    ..criteria.clone()
                };
                a href=(criteria_href(prefs, &next, carried))
                  class=(if active { "category active" } else { "category" }) {
                    strong { (cat.label()) }
                    small { (cat.desc()) }
                }
            }
        }
        @if let Some(cat) = criteria.category {
            div class="subtypes" {
                @for sub in cat.subtypes() {
                    @let active = criteria.subtype.as_deref() == Some(sub.label);
                    @let next = FilterCriteria {
                        subtype: if active { None } else { Some(sub.label.to_string()) },
                        ..criteria.clone()
                    };
                    a href=(criteria_href(prefs, &next, carried))
                      class=(if active { "subtype active" } else { "subtype" }) {
                        strong { (sub.label) }
                        small { (sub.desc) }
                    }
                }
            }
        }
    }
}

/// City names for `<select>` options.
pub fn city_options(selected: Option<City>) -> Markup {
    html! {
        @for city in City::ALL {
            option value=(city) selected[selected == Some(city)] { (city) }
        }
    }
}
