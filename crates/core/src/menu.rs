//! Weekly menu value types.
//!
//! A [`WeeklyMenu`] always carries all seven days. Days absent from an
//! incoming JSON document deserialize to an empty [`MenuItem`], so a partial
//! menu never leaves a day undefined.

use chrono::{Datelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// Day key used in menu documents (`"Monday"` .. `"Sunday"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
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
    /// All days in display order, Monday first.
    pub const ALL: [DayOfWeek; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    pub fn from_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => Self::Monday,
            Weekday::Tue => Self::Tuesday,
            Weekday::Wed => Self::Wednesday,
            Weekday::Thu => Self::Thursday,
            Weekday::Fri => Self::Friday,
            Weekday::Sat => Self::Saturday,
            Weekday::Sun => Self::Sunday,
        }
    }

    /// The UTC weekday of `at`.
    pub fn of(at: Timestamp) -> Self {
        Self::from_weekday(at.weekday())
    }
}

/// Items served at each meal of one day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(default)]
    pub breakfast: Vec<String>,
    #[serde(default)]
    pub lunch: Vec<String>,
    #[serde(default)]
    pub dinner: Vec<String>,
}

impl MenuItem {
    pub fn new(breakfast: &[&str], lunch: &[&str], dinner: &[&str]) -> Self {
        let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
        Self {
            breakfast: owned(breakfast),
            lunch: owned(lunch),
            dinner: owned(dinner),
        }
    }

    /// Drop blank entries and surrounding whitespace from every meal.
    pub fn normalized(self) -> Self {
        let clean = |items: Vec<String>| {
            items
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        };
        Self {
            breakfast: clean(self.breakfast),
            lunch: clean(self.lunch),
            dinner: clean(self.dinner),
        }
    }
}

/// The mess menu for a whole week, keyed by day name in JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WeeklyMenu {
    #[serde(default)]
    pub monday: MenuItem,
    #[serde(default)]
    pub tuesday: MenuItem,
    #[serde(default)]
    pub wednesday: MenuItem,
    #[serde(default)]
    pub thursday: MenuItem,
    #[serde(default)]
    pub friday: MenuItem,
    #[serde(default)]
    pub saturday: MenuItem,
    #[serde(default)]
    pub sunday: MenuItem,
}

impl WeeklyMenu {
    pub fn day(&self, day: DayOfWeek) -> &MenuItem {
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

    pub fn day_mut(&mut self, day: DayOfWeek) -> &mut MenuItem {
        match day {
            DayOfWeek::Monday => &mut self.monday,
            DayOfWeek::Tuesday => &mut self.tuesday,
            DayOfWeek::Wednesday => &mut self.wednesday,
            DayOfWeek::Thursday => &mut self.thursday,
            DayOfWeek::Friday => &mut self.friday,
            DayOfWeek::Saturday => &mut self.saturday,
            DayOfWeek::Sunday => &mut self.sunday,
        }
    }

    /// Normalize every day (see [`MenuItem::normalized`]).
    pub fn normalized(mut self) -> Self {
        for day in DayOfWeek::ALL {
            let item = std::mem::take(self.day_mut(day));
            *self.day_mut(day) = item.normalized();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn missing_days_deserialize_empty() {
        let menu: WeeklyMenu = serde_json::from_value(serde_json::json!({
            "Monday": { "breakfast": ["Poha"], "lunch": [], "dinner": ["Rice"] }
        }))
        .unwrap();

        assert_eq!(menu.monday.breakfast, vec!["Poha"]);
        assert_eq!(menu.sunday, MenuItem::default());
    }

    #[test]
    fn serializes_with_day_names() {
        let json = serde_json::to_value(WeeklyMenu::default()).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 7);
        assert!(obj.contains_key("Wednesday"));
    }

    #[test]
    fn weekday_of_timestamp() {
        // 2025-08-20 was a Wednesday.
        let at = chrono::Utc.with_ymd_and_hms(2025, 8, 20, 13, 0, 0).unwrap();
        assert_eq!(DayOfWeek::of(at), DayOfWeek::Wednesday);
    }

    #[test]
    fn normalized_trims_and_drops_blank_items() {
        let mut menu = WeeklyMenu::default();
        menu.friday = MenuItem {
            breakfast: vec!["  Dosa ".into(), "".into(), "   ".into()],
            lunch: vec![],
            dinner: vec!["Rice".into()],
        };

        let menu = menu.normalized();
        assert_eq!(menu.friday.breakfast, vec!["Dosa"]);
        assert_eq!(menu.friday.dinner, vec!["Rice"]);
    }
}
