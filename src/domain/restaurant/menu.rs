//! Menu items and the featured dish.

use serde::{Deserialize, Serialize};

/// One dish on the menu. Order within `menuItems` is meaningful.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Client-generated identifier, referenced by the featured dish.
    pub id: String,

    pub name: String,

    /// Kept as a string: menus carry prices like `"1200¥"` or `"8.50"`.
    pub price: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// A highlighted dish, denormalized from its menu item.
///
/// `menu_item_id` must resolve to an entry of the aggregate's `menuItems`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedDish {
    pub menu_item_id: String,
    pub name: String,
    pub price: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl FeaturedDish {
    /// Builds a featured dish from the menu item it highlights.
    pub fn from_menu_item(item: &MenuItem) -> Self {
        Self {
            menu_item_id: item.id.clone(),
            name: item.name.clone(),
            price: item.price.clone(),
            description: item.description.clone(),
            image_url: item.image_url.clone(),
        }
    }
}

/// Featured-dish slot in an outgoing payload.
///
/// Three states reach the wire differently: the field absent (no change),
/// JSON `null` (instruct the backend to clear), or a full value. The
/// absent case is the surrounding `Option`; this enum covers the other
/// two. `Clear` serializes as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeaturedDishField {
    Clear,
    Set(FeaturedDish),
}

impl FeaturedDishField {
    /// The referenced menu item id, when set.
    pub fn menu_item_id(&self) -> Option<&str> {
        match self {
            FeaturedDishField::Clear => None,
            FeaturedDishField::Set(dish) => Some(&dish.menu_item_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> MenuItem {
        MenuItem {
            id: "m1".to_string(),
            name: "Carbonara".to_string(),
            price: "1400¥".to_string(),
            description: None,
            category: Some("Pasta".to_string()),
            image_url: None,
        }
    }

    #[test]
    fn clear_serializes_as_null() {
        let value = serde_json::to_value(FeaturedDishField::Clear).unwrap();
        assert!(value.is_null());
    }

    #[test]
    fn set_serializes_as_object() {
        let field = FeaturedDishField::Set(FeaturedDish::from_menu_item(&item()));
        let value = serde_json::to_value(&field).unwrap();
        assert_eq!(value["menuItemId"], "m1");
        assert_eq!(value["price"], "1400¥");
    }

    #[test]
    fn null_deserializes_to_clear() {
        let field: FeaturedDishField = serde_json::from_value(serde_json::Value::Null).unwrap();
        assert_eq!(field, FeaturedDishField::Clear);
    }

    #[test]
    fn from_menu_item_copies_display_fields() {
        let dish = FeaturedDish::from_menu_item(&item());
        assert_eq!(dish.menu_item_id, "m1");
        assert_eq!(dish.name, "Carbonara");
        assert_eq!(dish.description, None);
    }
}
