use crate::domain::clusters::Cluster;
use maud::{html, Markup};

pub fn cluster_card(cluster: &Cluster, href: &str) -> Markup {
    html! {
        article class="cluster-card" data-city=(cluster.city) {
            a href=(href) {
                img src=(cluster.image) alt=(cluster.name) loading="lazy";
                div class="cluster-body" {
                    h4 { (cluster.name) }
                    p class="cluster-count" {
                        (cluster.properties.len())
                        @if cluster.properties.len() == 1 { " listing" } @else { " listings" }
                    }
                    dl class="cluster-figures" {
                        dt { "Units sold" } dd { (cluster.units_sold) }
                        dt { "Available" } dd { (cluster.available_units) }
                        dt { "Occupancy" } dd { (cluster.occupancy) "%" }
                    }
                    div class="occupancy-bar" {
                        span style=(format!("width: {}%", cluster.occupancy)) {}
                    }
                }
            }
        }
    }
}
