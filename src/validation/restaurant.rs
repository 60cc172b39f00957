//! Restaurant form schema.
//!
//! Converts an untyped form payload into a [`RestaurantDraft`]. Rules are
//! applied per field and short-circuit within the field, while failures
//! across fields accumulate. Empty strings in optional fields coerce to
//! absent; a partially filled or non-finite location normalizes to
//! absent and is never emitted.

use std::collections::{BTreeMap, HashMap};

use serde_json::{Map, Value};

use crate::domain::restaurant::{
    Address, Contacts, DayOfWeek, FeaturedDish, FeaturedDishField, HourEntry, Location, Media,
    MenuItem, Socials, WeeklyHours,
};
use crate::domain::{FieldCode, FieldError, RestaurantDraft, ValidationErrors};

use super::{is_hh_mm, is_valid_email, is_valid_url, Schema};

impl Schema for RestaurantDraft {
    fn parse(input: &Value) -> Result<Self, ValidationErrors> {
        let Some(obj) = input.as_object() else {
            return Err(FieldError::invalid_type("", "an object").into());
        };

        let mut errors = Vec::new();

        let name = parse_name(obj, &mut errors);
        let description = parse_description(obj, &mut errors);
        let category = optional_string(obj, "category", &mut errors);
        let price_range = optional_string(obj, "priceRange", &mut errors);
        let contacts = parse_contacts(obj, &mut errors);
        let address = parse_address(obj, &mut errors);
        let location = parse_location(obj, &mut errors);
        let hours = parse_hours(obj, &mut errors);
        let attributes = parse_attributes(obj, &mut errors);
        let media = parse_media(obj, &mut errors);
        let socials = parse_socials(obj, &mut errors);
        let is_published = parse_is_published(obj, &mut errors);
        let menu_items = parse_menu_items(obj, &mut errors);
        let featured_dish = parse_featured_dish(obj, menu_items.as_deref(), &mut errors);

        if !errors.is_empty() {
            return Err(ValidationErrors::new(errors));
        }

        Ok(RestaurantDraft {
            // Errors were checked above; a missing name is in `errors`.
            name: name.unwrap_or_default(),
            description,
            category,
            price_range,
            contacts,
            address,
            location,
            hours,
            attributes,
            media,
            socials,
            is_published,
            menu_items,
            featured_dish,
        })
    }
}

fn parse_name(obj: &Map<String, Value>, errors: &mut Vec<FieldError>) -> Option<String> {
    match obj.get("name") {
        Some(Value::String(name)) if !name.is_empty() => Some(name.clone()),
        Some(Value::String(_)) | None | Some(Value::Null) => {
            errors.push(FieldError::required("name", "Restaurant name is required"));
            None
        }
        Some(_) => {
            errors.push(FieldError::invalid_type("name", "a string"));
            None
        }
    }
}

fn parse_description(obj: &Map<String, Value>, errors: &mut Vec<FieldError>) -> Option<String> {
    let description = optional_string_at(obj, "description", "description", errors)?;
    if description.chars().count() > 750 {
        errors.push(FieldError::new(
            "description",
            FieldCode::TooLong,
            "Description must be less than 750 characters",
        ));
        return None;
    }
    Some(description)
}

/// Reads an optional string field, coercing the empty string to absent.
/// `path` is the dotted error path; it differs from `key` inside nested
/// objects.
fn optional_string_at(
    obj: &Map<String, Value>,
    key: &str,
    path: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match obj.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.is_empty() => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(FieldError::invalid_type(path, "a string"));
            None
        }
    }
}

fn optional_string(
    obj: &Map<String, Value>,
    key: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    optional_string_at(obj, key, key, errors)
}

/// Like [`optional_string_at`], but validates non-empty values.
fn optional_checked_string(
    obj: &Map<String, Value>,
    path_prefix: &str,
    key: &str,
    check: impl Fn(&str) -> bool,
    code: FieldCode,
    message: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    let path = format!("{path_prefix}.{key}");
    let value = optional_string_at(obj, key, &path, errors)?;
    if !check(&value) {
        errors.push(FieldError::new(path, code, message));
        return None;
    }
    Some(value)
}

fn nested_object<'a>(
    obj: &'a Map<String, Value>,
    key: &str,
    errors: &mut Vec<FieldError>,
) -> Option<&'a Map<String, Value>> {
    match obj.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::Object(nested)) => Some(nested),
        Some(_) => {
            errors.push(FieldError::invalid_type(key, "an object"));
            None
        }
    }
}

fn parse_contacts(obj: &Map<String, Value>, errors: &mut Vec<FieldError>) -> Option<Contacts> {
    let nested = nested_object(obj, "contacts", errors)?;
    let phone = optional_string_at(nested, "phone", "contacts.phone", errors);
    let email = optional_checked_string(
        nested,
        "contacts",
        "email",
        is_valid_email,
        FieldCode::InvalidEmail,
        "Invalid email",
        errors,
    );
    let website = optional_checked_string(
        nested,
        "contacts",
        "website",
        is_valid_url,
        FieldCode::InvalidUrl,
        "Invalid URL",
        errors,
    );
    Some(Contacts { phone, email, website })
}

fn parse_address(obj: &Map<String, Value>, errors: &mut Vec<FieldError>) -> Option<Address> {
    let nested = nested_object(obj, "address", errors)?;
    Some(Address {
        street: optional_string_at(nested, "street", "address.street", errors),
        city: optional_string_at(nested, "city", "address.city", errors),
        zip: optional_string_at(nested, "zip", "address.zip", errors),
        country: optional_string_at(nested, "country", "address.country", errors),
    })
}

/// Location normalization: both coordinates finite numbers, or nothing.
/// NaN, null, and partially filled pairs all collapse to absent, so a
/// partial coordinate never reaches the wire.
fn parse_location(
    obj: &Map<String, Value>,
    errors: &mut Vec<FieldError>,
) -> Option<Option<Location>> {
    let nested = match obj.get("location") {
        None | Some(Value::Null) => return None,
        Some(Value::Object(nested)) => nested,
        Some(_) => {
            errors.push(FieldError::invalid_type("location", "an object or null"));
            return None;
        }
    };
    let lat = finite_number(nested.get("lat"));
    let lng = finite_number(nested.get("lng"));
    match (lat, lng) {
        (Some(lat), Some(lng)) => Some(Some(Location { lat, lng })),
        _ => None,
    }
}

fn finite_number(value: Option<&Value>) -> Option<f64> {
    value.and_then(Value::as_f64).filter(|n| n.is_finite())
}

fn parse_hours(obj: &Map<String, Value>, errors: &mut Vec<FieldError>) -> Option<WeeklyHours> {
    let nested = nested_object(obj, "hours", errors)?;

    let mut entries: HashMap<DayOfWeek, HourEntry> = HashMap::new();
    for day in DayOfWeek::ALL {
        if let Some(entry) = parse_hour_entry(nested, day, errors) {
            entries.insert(day, entry);
        }
    }
    if entries.len() != DayOfWeek::ALL.len() {
        return None;
    }

    let mut take = |day: DayOfWeek| entries.remove(&day).unwrap_or(HourEntry::Closed);
    Some(WeeklyHours {
        monday: take(DayOfWeek::Monday),
        tuesday: take(DayOfWeek::Tuesday),
        wednesday: take(DayOfWeek::Wednesday),
        thursday: take(DayOfWeek::Thursday),
        friday: take(DayOfWeek::Friday),
        saturday: take(DayOfWeek::Saturday),
        sunday: take(DayOfWeek::Sunday),
    })
}

fn parse_hour_entry(
    hours: &Map<String, Value>,
    day: DayOfWeek,
    errors: &mut Vec<FieldError>,
) -> Option<HourEntry> {
    let path = || format!("hours.{}", day.as_str());
    let Some(value) = hours.get(day.as_str()) else {
        errors.push(FieldError::required(path(), "Day entry is required"));
        return None;
    };
    let entry: HourEntry = match serde_json::from_value(value.clone()) {
        Ok(entry) => entry,
        Err(_) => {
            errors.push(FieldError::new(
                path(),
                FieldCode::InvalidFormat,
                "Expected {isOpen: false} or {isOpen: true, open, close}",
            ));
            return None;
        }
    };
    if let HourEntry::Open { open, close } = &entry {
        for (field, value) in [("open", open), ("close", close)] {
            if !is_hh_mm(value) {
                errors.push(FieldError::new(
                    format!("{}.{field}", path()),
                    FieldCode::InvalidFormat,
                    "Time must be in HH:MM format",
                ));
                return None;
            }
        }
    }
    Some(entry)
}

fn parse_attributes(
    obj: &Map<String, Value>,
    errors: &mut Vec<FieldError>,
) -> Option<BTreeMap<String, bool>> {
    let nested = nested_object(obj, "attributes", errors)?;
    let mut attributes = BTreeMap::new();
    for (key, value) in nested {
        match value {
            Value::Bool(flag) => {
                attributes.insert(key.clone(), *flag);
            }
            _ => errors.push(FieldError::invalid_type(format!("attributes.{key}"), "a boolean")),
        }
    }
    Some(attributes)
}

fn parse_media(obj: &Map<String, Value>, errors: &mut Vec<FieldError>) -> Option<Media> {
    let nested = nested_object(obj, "media", errors)?;
    let url_field = |key: &str, errors: &mut Vec<FieldError>| {
        optional_checked_string(
            nested,
            "media",
            key,
            is_valid_url,
            FieldCode::InvalidUrl,
            "Invalid URL",
            errors,
        )
    };
    let logo = url_field("logo", errors);
    let cover = url_field("cover", errors);

    let gallery = match nested.get("gallery") {
        None | Some(Value::Null) => None,
        Some(Value::Array(items)) => {
            let mut urls = Vec::with_capacity(items.len());
            let mut all_valid = true;
            for (index, item) in items.iter().enumerate() {
                match item.as_str().filter(|s| is_valid_url(s)) {
                    Some(url) => urls.push(url.to_string()),
                    None => {
                        errors.push(FieldError::new(
                            format!("media.gallery.{index}"),
                            FieldCode::InvalidUrl,
                            "Invalid URL",
                        ));
                        all_valid = false;
                    }
                }
            }
            all_valid.then_some(urls)
        }
        Some(_) => {
            errors.push(FieldError::invalid_type("media.gallery", "an array"));
            None
        }
    };

    Some(Media { logo, cover, gallery })
}

fn parse_socials(obj: &Map<String, Value>, errors: &mut Vec<FieldError>) -> Option<Socials> {
    let nested = nested_object(obj, "socials", errors)?;
    let url_field = |key: &str, errors: &mut Vec<FieldError>| {
        optional_checked_string(
            nested,
            "socials",
            key,
            is_valid_url,
            FieldCode::InvalidUrl,
            "Invalid URL",
            errors,
        )
    };
    Some(Socials {
        instagram: url_field("instagram", errors),
        facebook: url_field("facebook", errors),
        tiktok: url_field("tiktok", errors),
        youtube: url_field("youtube", errors),
    })
}

fn parse_is_published(obj: &Map<String, Value>, errors: &mut Vec<FieldError>) -> Option<bool> {
    match obj.get("isPublished") {
        None | Some(Value::Null) => None,
        Some(Value::Bool(flag)) => Some(*flag),
        Some(_) => {
            errors.push(FieldError::invalid_type("isPublished", "a boolean"));
            None
        }
    }
}

fn parse_menu_items(
    obj: &Map<String, Value>,
    errors: &mut Vec<FieldError>,
) -> Option<Vec<MenuItem>> {
    let items = match obj.get("menuItems") {
        None | Some(Value::Null) => return None,
        Some(Value::Array(items)) => items,
        Some(_) => {
            errors.push(FieldError::invalid_type("menuItems", "an array"));
            return None;
        }
    };

    let mut parsed = Vec::with_capacity(items.len());
    let mut all_valid = true;
    for (index, item) in items.iter().enumerate() {
        match parse_menu_item(item, index, errors) {
            Some(item) => parsed.push(item),
            None => all_valid = false,
        }
    }
    all_valid.then_some(parsed)
}

fn parse_menu_item(value: &Value, index: usize, errors: &mut Vec<FieldError>) -> Option<MenuItem> {
    let path = |field: &str| format!("menuItems.{index}.{field}");
    let Some(obj) = value.as_object() else {
        errors.push(FieldError::invalid_type(format!("menuItems.{index}"), "an object"));
        return None;
    };

    let mut required = |field: &str, message: &str| match obj.get(field).and_then(Value::as_str) {
        Some(s) if !s.is_empty() => Some(s.to_string()),
        _ => {
            errors.push(FieldError::required(path(field), message));
            None
        }
    };
    let id = required("id", "Menu item id is required");
    let name = required("name", "Dish name is required");
    let price = required("price", "Price is required");

    let optional = |field: &str| {
        obj.get(field)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    Some(MenuItem {
        id: id?,
        name: name?,
        price: price?,
        description: optional("description"),
        category: optional("category"),
        image_url: optional("imageUrl"),
    })
}

/// Featured dish: absent stays absent, explicit `null` requests a clear,
/// and an object must reference an existing menu item, from which the
/// denormalized copy is rebuilt.
fn parse_featured_dish(
    obj: &Map<String, Value>,
    menu_items: Option<&[MenuItem]>,
    errors: &mut Vec<FieldError>,
) -> Option<FeaturedDishField> {
    let value = match obj.get("featuredDish") {
        None => return None,
        Some(Value::Null) => return Some(FeaturedDishField::Clear),
        Some(value) => value,
    };
    let Some(menu_item_id) = value.get("menuItemId").and_then(Value::as_str) else {
        errors.push(FieldError::required(
            "featuredDish.menuItemId",
            "Featured dish must reference a menu item",
        ));
        return None;
    };
    let item = menu_items
        .unwrap_or(&[])
        .iter()
        .find(|item| item.id == menu_item_id);
    match item {
        Some(item) => Some(FeaturedDishField::Set(FeaturedDish::from_menu_item(item))),
        None => {
            errors.push(FieldError::new(
                "featuredDish.menuItemId",
                FieldCode::UnknownReference,
                format!("No menu item with id '{menu_item_id}'"),
            ));
            None
        }
    }
}
