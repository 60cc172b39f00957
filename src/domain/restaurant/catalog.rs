//! Static catalogs the editor offers: categories, price tiers, and the
//! grouped boolean attributes. The attribute list is advisory; schemas
//! accept unknown keys as well.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Cuisine categories offered by the editor, `"Other"` last.
pub const CATEGORIES: [&str; 19] = [
    "Japanese",
    "Italian",
    "French",
    "Chinese",
    "Korean",
    "Thai",
    "Indian",
    "Mexican",
    "American",
    "Mediterranean",
    "Vietnamese",
    "Spanish",
    "Turkish",
    "Greek",
    "Cafe",
    "Bar",
    "Fast Food",
    "Bakery",
    "Other",
];

/// Symbolic price tiers. A free-form string is equally valid.
pub const PRICE_TIERS: [&str; 4] = ["$", "$$", "$$$", "$$$$"];

/// One recognized attribute: its wire key and display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeSpec {
    pub key: &'static str,
    pub label: &'static str,
}

/// A display grouping of recognized attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeGroup {
    pub key: &'static str,
    pub label: &'static str,
    pub items: &'static [AttributeSpec],
}

/// The five recognized attribute groups.
pub const ATTRIBUTE_GROUPS: [AttributeGroup; 5] = [
    AttributeGroup {
        key: "accessibility",
        label: "Accessibility",
        items: &[AttributeSpec {
            key: "wheelchairAccessible",
            label: "Wheelchair Accessible",
        }],
    },
    AttributeGroup {
        key: "amenities",
        label: "Amenities",
        items: &[
            AttributeSpec { key: "freeWifi", label: "Free WiFi" },
            AttributeSpec { key: "parking", label: "Parking Available" },
            AttributeSpec { key: "outdoorSeating", label: "Outdoor Seating" },
            AttributeSpec { key: "bar", label: "Bar" },
            AttributeSpec { key: "liveMusic", label: "Live Music" },
        ],
    },
    AttributeGroup {
        key: "payment",
        label: "Payment Methods",
        items: &[
            AttributeSpec { key: "creditCards", label: "Credit Cards Accepted" },
            AttributeSpec { key: "cashOnly", label: "Cash Only" },
        ],
    },
    AttributeGroup {
        key: "atmosphere",
        label: "Atmosphere",
        items: &[
            AttributeSpec { key: "familyFriendly", label: "Family Friendly" },
            AttributeSpec { key: "romantic", label: "Romantic" },
            AttributeSpec { key: "casual", label: "Casual" },
            AttributeSpec { key: "upscale", label: "Upscale" },
        ],
    },
    AttributeGroup {
        key: "services",
        label: "Services",
        items: &[
            AttributeSpec { key: "dineIn", label: "Dine-In" },
            AttributeSpec { key: "takeout", label: "Takeout" },
            AttributeSpec { key: "delivery", label: "Delivery" },
            AttributeSpec { key: "reservations", label: "Reservations" },
        ],
    },
];

static ATTRIBUTE_LABELS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    ATTRIBUTE_GROUPS
        .iter()
        .flat_map(|group| group.items.iter())
        .map(|spec| (spec.key, spec.label))
        .collect()
});

/// Display label for a recognized attribute key, if any.
pub fn attribute_label(key: &str) -> Option<&'static str> {
    ATTRIBUTE_LABELS.get(key).copied()
}
