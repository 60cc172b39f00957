//! The restaurant aggregate.
//!
//! [`Restaurant`] is the server-owned entity as it comes off the wire;
//! [`RestaurantDraft`] is the client-assembled payload for create/patch.
//! The two differ deliberately: the draft has no server-assigned fields
//! and carries tri-state slots (`location`, `featuredDish`) that can be
//! explicitly nulled on the wire.

mod catalog;
mod hours;
mod menu;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use catalog::{attribute_label, AttributeGroup, AttributeSpec, ATTRIBUTE_GROUPS, CATEGORIES, PRICE_TIERS};
pub use hours::{DayOfWeek, HourEntry, WeeklyHours};
pub use menu::{FeaturedDish, FeaturedDishField, MenuItem};

/// Optional contact details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contacts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// Optional postal address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Geographic coordinates. Both components are always finite; partial or
/// NaN coordinates never survive schema parsing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

/// Logo, cover, and gallery images. Every value is an absolute URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gallery: Option<Vec<String>>,
}

/// Social profile URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Socials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiktok: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
}

/// A restaurant profile as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    /// Server-assigned identifier.
    pub id: String,

    /// Opaque URL-safe identifier for public read URLs. Generated by the
    /// backend from `name` and regenerable on demand; never constructed
    /// client-side.
    pub slug: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Free string: a symbolic tier like `"$$"` or a textual numeric
    /// range like `"2000-3000"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contacts: Option<Contacts>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,

    /// Absent and `null` both mean "no location".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<WeeklyHours>,

    /// Boolean attributes keyed by attribute name; unknown keys allowed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<BTreeMap<String, bool>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<Media>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub socials: Option<Socials>,

    /// Lifecycle flag; profiles are created as drafts.
    #[serde(default)]
    pub is_published: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_items: Option<Vec<MenuItem>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_dish: Option<FeaturedDish>,

    /// The owning user.
    pub user_id: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client-assembled payload for create and patch operations.
///
/// Serialized and then run through [`crate::validation::clean`] before
/// transmission, so empty fields here simply fall away. `location` and
/// `featured_dish` use nested tri-states: outer `None` omits the field,
/// `Some(None)` / `Some(Clear)` emit an explicit `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantDraft {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contacts: Option<Contacts>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Option<Location>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<WeeklyHours>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<BTreeMap<String, bool>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<Media>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub socials: Option<Socials>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_items: Option<Vec<MenuItem>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_dish: Option<FeaturedDishField>,
}

impl RestaurantDraft {
    /// A fresh draft with the default weekly-hours template.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hours: Some(WeeklyHours::default_template()),
            ..Self::default()
        }
    }

    /// Inserts or replaces a menu item by id, preserving order for
    /// replacements and appending new items.
    pub fn upsert_menu_item(&mut self, item: MenuItem) {
        let items = self.menu_items.get_or_insert_with(Vec::new);
        match items.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => *existing = item,
            None => items.push(item),
        }
    }

    /// Removes a menu item by id.
    ///
    /// When the removed item is the featured dish, the featured-dish slot
    /// flips to `Clear` so the next payload instructs the backend to drop
    /// its copy as well.
    pub fn remove_menu_item(&mut self, id: &str) {
        if let Some(items) = self.menu_items.as_mut() {
            items.retain(|item| item.id != id);
        }
        let featured_removed = self
            .featured_dish
            .as_ref()
            .and_then(FeaturedDishField::menu_item_id)
            == Some(id);
        if featured_removed {
            self.featured_dish = Some(FeaturedDishField::Clear);
        }
    }

    /// Marks the menu item with the given id as the featured dish.
    /// Returns false (and changes nothing) when the id is unknown.
    pub fn feature_menu_item(&mut self, id: &str) -> bool {
        let Some(item) = self
            .menu_items
            .as_deref()
            .and_then(|items| items.iter().find(|item| item.id == id))
        else {
            return false;
        };
        self.featured_dish = Some(FeaturedDishField::Set(FeaturedDish::from_menu_item(item)));
        true
    }
}

/// Recognizes a `min-max` numeric price range encoded as text, e.g.
/// `"2000-3000"` or `"2000 - 3000¥"`. Purely informational: unparseable
/// values are not an error, the field stays a free string either way.
pub fn parse_price_bounds(price_range: &str) -> Option<(f64, f64)> {
    let (min_raw, max_raw) = price_range.split_once('-')?;
    let min = parse_price_number(min_raw)?;
    let max = parse_price_number(max_raw)?;
    Some((min, max))
}

fn parse_price_number(raw: &str) -> Option<f64> {
    let digits: String = raw
        .trim()
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}
