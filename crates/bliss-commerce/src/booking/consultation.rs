//! Consultation types, consultants and time slots offered for bookings.

use serde::{Deserialize, Serialize};

use crate::ids::ConsultantId;

/// How the consultation takes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ConsultationType {
    #[default]
    Virtual,
    InStore,
    HomeVisit,
}

impl ConsultationType {
    pub const ALL: [ConsultationType; 3] = [
        ConsultationType::Virtual,
        ConsultationType::InStore,
        ConsultationType::HomeVisit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConsultationType::Virtual => "virtual",
            ConsultationType::InStore => "in-store",
            ConsultationType::HomeVisit => "home-visit",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ConsultationType::Virtual => "Virtual Consultation",
            ConsultationType::InStore => "In-Store Appointment",
            ConsultationType::HomeVisit => "Home Visit",
        }
    }

    /// Session length in minutes.
    pub fn duration_minutes(&self) -> u32 {
        match self {
            ConsultationType::Virtual => 30,
            ConsultationType::InStore => 60,
            ConsultationType::HomeVisit => 90,
        }
    }
}

/// A wedding consultant who can be booked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consultant {
    pub id: ConsultantId,
    pub name: String,
    pub specialty: String,
}

/// Bookable time slots, identical every day.
pub const TIME_SLOTS: &[&str] = &[
    "10:00 AM", "11:00 AM", "12:00 PM", "02:00 PM", "03:00 PM", "04:00 PM", "05:00 PM",
];

/// The consultant roster.
pub fn consultants() -> Vec<Consultant> {
    [
        ("cs_priya", "Priya Sharma", "Bridal styling"),
        ("cs_arjun", "Arjun Mehta", "Groom styling"),
        ("cs_kavya", "Kavya Iyer", "Jewelry curation"),
        ("cs_rohan", "Rohan Kapoor", "Decor & venues"),
    ]
    .into_iter()
    .map(|(id, name, specialty)| Consultant {
        id: ConsultantId::new(id),
        name: name.to_string(),
        specialty: specialty.to_string(),
    })
    .collect()
}

/// Find a consultant by id.
pub fn find_consultant(id: &ConsultantId) -> Option<Consultant> {
    consultants().into_iter().find(|c| &c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consultation_type_parse() {
        for t in ConsultationType::ALL {
            assert_eq!(ConsultationType::parse(t.as_str()), Some(t));
        }
        assert_eq!(ConsultationType::parse("carrier-pigeon"), None);
    }

    #[test]
    fn test_consultation_type_serde_matches_as_str() {
        let json = serde_json::to_string(&ConsultationType::InStore).unwrap();
        assert_eq!(json, "\"in-store\"");
    }

    #[test]
    fn test_find_consultant() {
        assert!(find_consultant(&ConsultantId::new("cs_kavya")).is_some());
        assert!(find_consultant(&ConsultantId::new("cs_nobody")).is_none());
    }
}
