use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    DayUse,
    #[default]
    Lodging,
}

impl ServiceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::DayUse => "day_use",
            ServiceType::Lodging => "lodging",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceType::DayUse => "Day Use",
            ServiceType::Lodging => "Hospedagem",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PetSize {
    #[default]
    Pequeno,
    Medio,
    Grande,
    Gigante,
}

impl PetSize {
    pub fn label(&self) -> &'static str {
        match self {
            PetSize::Pequeno => "Pequeno",
            PetSize::Medio => "Médio",
            PetSize::Grande => "Grande",
            PetSize::Gigante => "Gigante",
        }
    }
}

/// What the visitor has picked in the date picker so far.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DateSelection {
    #[default]
    Empty,
    Start { from: NaiveDate },
    Range { from: NaiveDate, to: NaiveDate },
}

impl DateSelection {
    /// Builds a selection from the picker's raw `from`/`to` values.
    pub fn from_parts(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        match (from, to) {
            (Some(from), Some(to)) => DateSelection::Range { from, to },
            (Some(from), None) => DateSelection::Start { from },
            (None, Some(to)) => DateSelection::Start { from: to },
            (None, None) => DateSelection::Empty,
        }
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        match *self {
            DateSelection::Empty => vec![],
            DateSelection::Start { from } => vec![from],
            DateSelection::Range { from, to } => vec![from, to],
        }
    }

    /// The entry/exit pair to check, if the selection is complete for `service`.
    pub fn window(&self, service: ServiceType) -> Option<StayWindow> {
        match (service, *self) {
            (_, DateSelection::Empty) => None,
            (ServiceType::DayUse, DateSelection::Start { from }) => Some(StayWindow::single(from)),
            (ServiceType::DayUse, DateSelection::Range { from, .. }) => {
                Some(StayWindow::single(from))
            }
            (ServiceType::Lodging, DateSelection::Start { .. }) => None,
            (ServiceType::Lodging, DateSelection::Range { from, to }) => {
                Some(StayWindow::new(from, to))
            }
        }
    }
}

/// Normalized stay period, `entry <= exit`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct StayWindow {
    pub entry: NaiveDate,
    pub exit: NaiveDate,
}

impl StayWindow {
    pub fn new(a: NaiveDate, b: NaiveDate) -> Self {
        if a <= b {
            Self { entry: a, exit: b }
        } else {
            Self { entry: b, exit: a }
        }
    }

    pub fn single(day: NaiveDate) -> Self {
        Self {
            entry: day,
            exit: day,
        }
    }

    pub fn nights(&self) -> i64 {
        (self.exit - self.entry).num_days()
    }
}

/// Tutor and pet details typed into the booking form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct BookingForm {
    pub tutor_name: String,
    pub phone: String,
    pub pet_name: String,
    pub breed: String,
    #[serde(default)]
    pub size: PetSize,
    #[serde(default)]
    pub vaccinated: bool,
    #[serde(default)]
    pub neutered: bool,
}

impl BookingForm {
    /// Names of required fields left blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("tutor_name", &self.tutor_name),
            ("phone", &self.phone),
            ("pet_name", &self.pet_name),
            ("breed", &self.breed),
        ]
        .into_iter()
        .filter(|(_, v)| v.trim().is_empty())
        .map(|(k, _)| k)
        .collect()
    }
}

/// A cleared request, ready to be turned into a message.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BookingRequest {
    pub service: ServiceType,
    pub window: StayWindow,
    pub form: BookingForm,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_lodging_needs_both_dates() {
        let start = DateSelection::from_parts(Some(d("2030-01-10")), None);
        assert_eq!(start.window(ServiceType::Lodging), None);

        let range = DateSelection::from_parts(Some(d("2030-01-10")), Some(d("2030-01-12")));
        let window = range.window(ServiceType::Lodging).unwrap();
        assert_eq!(window.entry, d("2030-01-10"));
        assert_eq!(window.exit, d("2030-01-12"));
        assert_eq!(window.nights(), 2);
    }

    #[test]
    fn test_day_use_uses_single_date() {
        let start = DateSelection::from_parts(Some(d("2030-01-10")), None);
        let window = start.window(ServiceType::DayUse).unwrap();
        assert_eq!(window.entry, window.exit);
    }

    #[test]
    fn test_window_swaps_reversed_range() {
        let window = StayWindow::new(d("2030-01-12"), d("2030-01-10"));
        assert_eq!(window.entry, d("2030-01-10"));
        assert_eq!(window.exit, d("2030-01-12"));
    }

    #[test]
    fn test_missing_fields() {
        let form = BookingForm {
            tutor_name: "Ana".to_string(),
            phone: "  ".to_string(),
            pet_name: "Thor".to_string(),
            breed: String::new(),
            ..Default::default()
        };
        assert_eq!(form.missing_fields(), vec!["phone", "breed"]);
    }

    #[test]
    fn test_service_type_serde() {
        let s: ServiceType = serde_json::from_str("\"day_use\"").unwrap();
        assert_eq!(s, ServiceType::DayUse);
        assert_eq!(serde_json::to_string(&PetSize::Medio).unwrap(), "\"medio\"");
    }
}
