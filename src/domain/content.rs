// src/domain/content.rs
//
// Static editorial content for the marketing sections.

use crate::domain::property::City;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventCategory {
    Exhibition,
    Seminar,
    Networking,
    Launch,
}

impl EventCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Exhibition => "Exhibition",
            EventCategory::Seminar => "Seminar",
            EventCategory::Networking => "Networking",
            EventCategory::Launch => "Launch",
        }
    }

    /// CSS modifier for the category badge.
    pub fn badge_class(&self) -> &'static str {
        match self {
            EventCategory::Exhibition => "badge-gold",
            EventCategory::Seminar => "badge-blue",
            EventCategory::Networking => "badge-emerald",
            EventCategory::Launch => "badge-purple",
        }
    }
}

#[derive(Debug)]
pub struct EventItem {
    pub id: u32,
    pub title: &'static str,
    /// Display form, e.g. "Mar 15, 2025".
    pub date: &'static str,
    pub time: &'static str,
    pub location: &'static str,
    pub city: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub category: EventCategory,
}

impl EventItem {
    pub fn date_parsed(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date, "%b %d, %Y").ok()
    }
}

pub static EVENTS: [EventItem; 4] = [
    EventItem {
        id: 1,
        title: "Dubai Luxury Property Expo 2025",
        date: "Mar 15, 2025",
        time: "10:00 AM – 6:00 PM",
        location: "Madinat Jumeirah Conference Centre",
        city: "Dubai",
        description: "Explore exclusive off-plan and ready properties from top developers across the UAE.",
        image: "https://images.unsplash.com/photo-1540575467063-178a50c2df87?w=600&q=80",
        category: EventCategory::Exhibition,
    },
    EventItem {
        id: 2,
        title: "London Investment Summit",
        date: "Apr 08, 2025",
        time: "2:00 PM – 7:00 PM",
        location: "The Savoy, Strand",
        city: "London",
        description: "An invite-only gathering for HNW investors exploring prime Central London opportunities.",
        image: "https://images.unsplash.com/photo-1505373877841-8d25f7d46678?w=600&q=80",
        category: EventCategory::Seminar,
    },
    EventItem {
        id: 3,
        title: "Istanbul New Developments Launch",
        date: "May 22, 2025",
        time: "11:00 AM – 4:00 PM",
        location: "Four Seasons Bosphorus",
        city: "Istanbul",
        description: "Be among the first to view pre-launch waterfront residences along the Bosphorus.",
        image: "https://images.unsplash.com/photo-1591115765373-5207764f72e7?w=600&q=80",
        category: EventCategory::Launch,
    },
    EventItem {
        id: 4,
        title: "Riyadh Real Estate Networking Night",
        date: "Jun 10, 2025",
        time: "7:00 PM – 10:00 PM",
        location: "Kingdom Centre, Sky Bridge Lounge",
        city: "Riyadh",
        description: "Connect with developers, investors, and advisors shaping Saudi Arabia's property market.",
        image: "https://images.unsplash.com/photo-1511578314322-379afb476865?w=600&q=80",
        category: EventCategory::Networking,
    },
];

/// Events ordered soonest first; undated entries go last.
pub fn upcoming_events() -> Vec<&'static EventItem> {
    let mut events: Vec<&EventItem> = EVENTS.iter().collect();
    events.sort_by_key(|e| (e.date_parsed().is_none(), e.date_parsed()));
    events
}

#[derive(Debug)]
pub struct BlogPost {
    pub id: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub category: &'static str,
    pub date: &'static str,
    pub image: &'static str,
}

pub static BLOG_POSTS: [BlogPost; 6] = [
    BlogPost {
        id: "1",
        title: "Top 5 Emerging Real Estate Markets in the UAE for 2025",
        excerpt: "Discover the fastest-growing neighborhoods offering high ROI and luxury living experiences.",
        category: "Market Insights",
        date: "Feb 12, 2025",
        image: "/static/img/property-1.jpg",
    },
    BlogPost {
        id: "2",
        title: "How to Secure Your First Investment Property Abroad",
        excerpt: "A step-by-step guide to navigating international real estate investments with confidence.",
        category: "Investment Guide",
        date: "Jan 28, 2025",
        image: "/static/img/property-2.jpg",
    },
    BlogPost {
        id: "3",
        title: "The Rise of Smart Homes: What Buyers Want in 2025",
        excerpt: "Explore the technology trends shaping modern luxury residences around the globe.",
        category: "Lifestyle",
        date: "Jan 15, 2025",
        image: "/static/img/property-3.jpg",
    },
    BlogPost {
        id: "4",
        title: "Dubai Marina vs Downtown: Where Should You Invest?",
        excerpt: "A comparative analysis of two of Dubai's most sought-after real estate destinations.",
        category: "Market Insights",
        date: "Dec 20, 2024",
        image: "/static/img/property-4.jpg",
    },
    BlogPost {
        id: "5",
        title: "Understanding Off-Plan Properties: Risks and Rewards",
        excerpt: "Everything you need to know before purchasing an off-plan property in the Middle East.",
        category: "Investment Guide",
        date: "Dec 05, 2024",
        image: "/static/img/property-5.jpg",
    },
    BlogPost {
        id: "6",
        title: "Interior Design Trends Defining Luxury Living",
        excerpt: "From biophilic design to minimalist aesthetics — what's trending in high-end homes.",
        category: "Lifestyle",
        date: "Nov 18, 2024",
        image: "/static/img/property-6.jpg",
    },
];

pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub avatar: &'static str,
    pub image_left: &'static str,
    pub image_right: &'static str,
}

pub static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "The entire process was flawless. Their attention to detail and understanding of modern aesthetics is second to none. We found our dream home faster than we ever thought possible.",
        name: "Ahmed Al Maktoum",
        role: "Property Investor, Dubai",
        avatar: "/static/img/client-dubai.jpg",
        image_left: "/static/img/property-1.jpg",
        image_right: "/static/img/property-2.jpg",
    },
    Testimonial {
        quote: "Kingdom International made our investment journey seamless. Their market knowledge across Dubai and London gave us unparalleled access to off-market opportunities.",
        name: "James Whitfield",
        role: "Private Equity Director, New York",
        avatar: "/static/img/client-newyork.jpg",
        image_left: "/static/img/property-3.jpg",
        image_right: "/static/img/property-1.jpg",
    },
    Testimonial {
        quote: "From initial consultation to closing, the team delivered exceptional service. Their discretion and professionalism set the standard in luxury real estate.",
        name: "Amira Johnson",
        role: "Family Office Manager, London",
        avatar: "/static/img/client-woman.jpg",
        image_left: "/static/img/property-2.jpg",
        image_right: "/static/img/property-3.jpg",
    },
];

pub struct Stat {
    pub value: u32,
    pub prefix: &'static str,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub static STATS: [Stat; 4] = [
    Stat { value: 2, prefix: "$", suffix: "B+", label: "Transaction Volume" },
    Stat { value: 5, prefix: "", suffix: "", label: "Global Markets" },
    Stat { value: 150, prefix: "", suffix: "+", label: "Exclusive Partnerships" },
    Stat { value: 98, prefix: "", suffix: "%", label: "Client Satisfaction" },
];

/// A market on the "global reach" map; x/y are percentages of the map image.
pub struct Market {
    pub name: &'static str,
    pub x: f32,
    pub y: f32,
    pub roi: &'static str,
    pub districts: &'static str,
    pub listings: u32,
}

pub static MARKETS: [Market; 5] = [
    Market { name: "London", x: 48.5, y: 24.0, roi: "4.2%", districts: "Mayfair, Knightsbridge, Belgravia", listings: 42 },
    Market { name: "Dubai", x: 61.5, y: 44.0, roi: "8.5%", districts: "Palm Jumeirah, Downtown, Marina", listings: 67 },
    Market { name: "Riyadh", x: 59.0, y: 42.0, roi: "7.9%", districts: "KAFD, DQ, Al Olaya", listings: 31 },
    Market { name: "New York", x: 25.0, y: 28.0, roi: "5.1%", districts: "Manhattan, Brooklyn, Tribeca", listings: 53 },
    Market { name: "Istanbul", x: 54.0, y: 27.0, roi: "6.8%", districts: "Bebek, Besiktas, Nisantasi", listings: 28 },
];

/// A selectable pin on the listing-page globe.
pub struct GlobePin {
    pub city: City,
    pub lat: f64,
    pub lng: f64,
    pub flag: &'static str,
}

pub static GLOBE_PINS: [GlobePin; 4] = [
    GlobePin { city: City::London, lat: 51.5, lng: -0.12, flag: "🇬🇧" },
    GlobePin { city: City::Dubai, lat: 25.2, lng: 55.27, flag: "🇦🇪" },
    GlobePin { city: City::Riyadh, lat: 24.7, lng: 46.7, flag: "🇸🇦" },
    GlobePin { city: City::Turkey, lat: 41.0, lng: 28.98, flag: "🇹🇷" },
];

/// Country chips above the listing column; `None` clears the city filter.
pub static COUNTRY_CHIPS: [(Option<City>, &str, &str); 5] = [
    (None, "🌍", "All"),
    (Some(City::Dubai), "🇦🇪", "UAE"),
    (Some(City::London), "🇬🇧", "UK"),
    (Some(City::Riyadh), "🇸🇦", "KSA"),
    (Some(City::Turkey), "🇹🇷", "Turkey"),
];

pub enum EbookPage {
    Contents { title: &'static str, entries: &'static [&'static str] },
    Chapter { chapter: &'static str, title: &'static str, text: &'static str },
}

pub static EBOOK_PAGES: [EbookPage; 4] = [
    EbookPage::Contents {
        title: "Table of Contents",
        entries: &[
            "Dubai Market Overview",
            "London Prime Hotspots",
            "Riyadh Vision 2030",
            "ROI Strategies",
            "Tax & Legal Guide",
        ],
    },
    EbookPage::Chapter {
        chapter: "Chapter 1",
        title: "Dubai Market Overview",
        text: "Dubai continues to dominate as the world's fastest-growing luxury real estate market with average ROI of 7-9%. Palm Jumeirah, Downtown Dubai, and Dubai Marina lead the premium segment with consistent capital appreciation.",
    },
    EbookPage::Chapter {
        chapter: "Chapter 2",
        title: "London Prime Hotspots",
        text: "Knightsbridge, Belgravia, and Mayfair remain the gold standard for ultra-high-net-worth investors. Post-Brexit adjustments have created unique entry points for international buyers seeking long-term value.",
    },
    EbookPage::Chapter {
        chapter: "Chapter 3",
        title: "Riyadh Vision 2030",
        text: "Saudi Arabia's ambitious development plans are creating unprecedented investment opportunities. The King Abdullah Financial District and NEOM project represent generational wealth-building potential.",
    },
];

/// Navbar entries: label, path and the status tab they open.
pub static NAV_MENU: [(&str, &str, Option<&str>); 8] = [
    ("Buy", "/properties", Some("for-sale")),
    ("Rent", "/properties", Some("for-rent")),
    ("Projects", "/properties", Some("under-construction")),
    ("Developers", "/", None),
    ("Areas", "/", None),
    ("Services", "/", None),
    ("Blogs", "/", None),
    ("More", "/", None),
];

pub static FOOTER_COLUMNS: [(&str, &[&str]); 6] = [
    ("Buy", &["Properties for Sale", "Guide to Buying", "Signature Collection", "Mortgages", "Property Management", "Legal Services", "Currency Exchange"]),
    ("Sell", &["List your Property", "Guide to Selling", "Book a Valuation"]),
    ("Off Plan", &["New Projects", "Guide to Buying Off Plan", "Best Communities", "Top Developers", "Upcoming Roadshows", "Branded Residences"]),
    ("Rent", &["Properties to Rent", "Guide to Renting", "Short Term Rentals", "Property Management"]),
    ("Services", &["Properties for Sale", "Leasing", "Mortgages", "Conveyancing", "Property Management", "Holiday Homes", "Currency Exchange"]),
    ("About", &["About Us", "Meet The Team", "Our Awards", "Careers", "Philanthropy", "News & Blog"]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_dates_parse() {
        for e in EVENTS.iter() {
            assert!(e.date_parsed().is_some(), "{} did not parse", e.date);
        }
    }

    #[test]
    fn upcoming_events_are_chronological() {
        let dates: Vec<NaiveDate> = upcoming_events()
            .iter()
            .filter_map(|e| e.date_parsed())
            .collect();
        assert_eq!(dates.len(), 4);
        assert!(dates.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn every_pin_city_has_a_chip() {
        for pin in GLOBE_PINS.iter() {
            assert!(COUNTRY_CHIPS.iter().any(|(city, _, _)| *city == Some(pin.city)));
        }
    }
}
