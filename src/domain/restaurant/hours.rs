//! Weekly opening hours.
//!
//! Each day carries an [`HourEntry`]: either closed, or open with `HH:MM`
//! open/close times. On the wire the variant is discriminated by the
//! `isOpen` boolean, so (de)serialization goes through a wire struct.

use serde::{Deserialize, Serialize};

/// Days of the week, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// All days, Monday first.
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    /// Lowercase wire name, e.g. `"monday"`.
    pub fn as_str(self) -> &'static str {
        match self {
            DayOfWeek::Monday => "monday",
            DayOfWeek::Tuesday => "tuesday",
            DayOfWeek::Wednesday => "wednesday",
            DayOfWeek::Thursday => "thursday",
            DayOfWeek::Friday => "friday",
            DayOfWeek::Saturday => "saturday",
            DayOfWeek::Sunday => "sunday",
        }
    }
}

/// Opening record for one day.
///
/// A closed day carries no times. Time strings are `HH:MM`; whether close
/// falls after open is deliberately not checked anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HourEntryWire", into = "HourEntryWire")]
pub enum HourEntry {
    Closed,
    Open { open: String, close: String },
}

impl HourEntry {
    /// Convenience constructor for an open day.
    pub fn open(open: impl Into<String>, close: impl Into<String>) -> Self {
        HourEntry::Open {
            open: open.into(),
            close: close.into(),
        }
    }

    /// True when the day has opening times.
    pub fn is_open(&self) -> bool {
        matches!(self, HourEntry::Open { .. })
    }
}

/// Wire shape: `{isOpen: false}` or `{isOpen: true, open, close}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HourEntryWire {
    is_open: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    open: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    close: Option<String>,
}

impl TryFrom<HourEntryWire> for HourEntry {
    type Error = String;

    fn try_from(wire: HourEntryWire) -> Result<Self, Self::Error> {
        if !wire.is_open {
            return Ok(HourEntry::Closed);
        }
        match (wire.open, wire.close) {
            (Some(open), Some(close)) => Ok(HourEntry::Open { open, close }),
            _ => Err("open and close times are required when isOpen is true".to_string()),
        }
    }
}

impl From<HourEntry> for HourEntryWire {
    fn from(entry: HourEntry) -> Self {
        match entry {
            HourEntry::Closed => HourEntryWire {
                is_open: false,
                open: None,
                close: None,
            },
            HourEntry::Open { open, close } => HourEntryWire {
                is_open: true,
                open: Some(open),
                close: Some(close),
            },
        }
    }
}

/// Opening hours for every day of the week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyHours {
    pub monday: HourEntry,
    pub tuesday: HourEntry,
    pub wednesday: HourEntry,
    pub thursday: HourEntry,
    pub friday: HourEntry,
    pub saturday: HourEntry,
    pub sunday: HourEntry,
}

impl WeeklyHours {
    /// The editor's starting template: weekdays 09:00-22:00, Friday and
    /// Saturday open later into the evening, Sunday closed.
    pub fn default_template() -> Self {
        Self {
            monday: HourEntry::open("09:00", "22:00"),
            tuesday: HourEntry::open("09:00", "22:00"),
            wednesday: HourEntry::open("09:00", "22:00"),
            thursday: HourEntry::open("09:00", "22:00"),
            friday: HourEntry::open("09:00", "23:00"),
            saturday: HourEntry::open("10:00", "23:00"),
            sunday: HourEntry::Closed,
        }
    }

    /// The entry for a given day.
    pub fn entry(&self, day: DayOfWeek) -> &HourEntry {
        match day {
            DayOfWeek::Monday => &self.monday,
            DayOfWeek::Tuesday => &self.tuesday,
            DayOfWeek::Wednesday => &self.wednesday,
            DayOfWeek::Thursday => &self.thursday,
            DayOfWeek::Friday => &self.friday,
            DayOfWeek::Saturday => &self.saturday,
            DayOfWeek::Sunday => &self.sunday,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_day_serializes_without_times() {
        let value = serde_json::to_value(HourEntry::Closed).unwrap();
        assert_eq!(value, serde_json::json!({"isOpen": false}));
    }

    #[test]
    fn open_day_round_trips() {
        let entry = HourEntry::open("09:00", "22:00");
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"isOpen": true, "open": "09:00", "close": "22:00"})
        );
        let back: HourEntry = serde_json::from_value(value).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn open_without_times_is_rejected() {
        let result: Result<HourEntry, _> =
            serde_json::from_value(serde_json::json!({"isOpen": true, "open": "09:00"}));
        assert!(result.is_err());
    }

    #[test]
    fn closed_with_stray_times_is_closed() {
        let entry: HourEntry =
            serde_json::from_value(serde_json::json!({"isOpen": false, "open": "09:00", "close": "22:00"}))
                .unwrap();
        assert_eq!(entry, HourEntry::Closed);
    }

    #[test]
    fn template_has_sunday_closed() {
        let hours = WeeklyHours::default_template();
        assert!(!hours.entry(DayOfWeek::Sunday).is_open());
        assert!(hours.entry(DayOfWeek::Friday).is_open());
    }
}
