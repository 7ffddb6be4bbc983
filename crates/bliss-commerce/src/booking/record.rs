//! Booking drafts and submitted booking records.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::booking::{find_consultant, ConsultationType, TIME_SLOTS};
use crate::error::CommerceError;
use crate::ids::{BookingId, ConsultantId, UserId};

/// Storage key for submitted bookings.
pub const BOOKINGS_KEY: &str = "bliss.bookings";
/// Storage key for a booking draft started while signed out.
pub const PENDING_BOOKING_KEY: &str = "bliss.pending_booking";

/// Denormalized copy of the signed-in user, frozen at submission time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSnapshot {
    pub uid: UserId,
    pub email: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// Booking form state before submission.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    pub consultation_type: ConsultationType,
    pub date: Option<NaiveDate>,
    pub time_slot: Option<String>,
    pub consultant_id: Option<ConsultantId>,
    pub special_request: String,
}

impl BookingDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of the fields still missing or invalid, in form order.
    pub fn missing_fields(&self, today: NaiveDate) -> Vec<&'static str> {
        let mut missing = Vec::new();
        match self.date {
            None => missing.push("date"),
            Some(date) if date < today => missing.push("date"),
            Some(_) => {}
        }
        match self.time_slot.as_deref() {
            Some(slot) if TIME_SLOTS.contains(&slot) => {}
            _ => missing.push("time slot"),
        }
        match &self.consultant_id {
            Some(id) if find_consultant(id).is_some() => {}
            _ => missing.push("consultant"),
        }
        missing
    }

    /// Turn the draft into a booking for `customer`.
    pub fn submit(&self, customer: CustomerSnapshot, today: NaiveDate) -> Result<Booking, CommerceError> {
        let missing = self.missing_fields(today);
        if !missing.is_empty() {
            return Err(CommerceError::BookingIncomplete(missing.join(", ")));
        }

        // missing_fields guarantees all three are present
        let (Some(date), Some(time_slot), Some(consultant_id)) =
            (self.date, self.time_slot.clone(), self.consultant_id.clone())
        else {
            return Err(CommerceError::BookingIncomplete("date, time slot, consultant".to_string()));
        };

        Ok(Booking {
            id: BookingId::generate(),
            consultation_type: self.consultation_type,
            date,
            time_slot,
            consultant_id,
            special_request: self.special_request.trim().to_string(),
            customer,
            created_at: Utc::now(),
        })
    }
}

/// A submitted booking. There is no update or delete path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: BookingId,
    pub consultation_type: ConsultationType,
    pub date: NaiveDate,
    pub time_slot: String,
    pub consultant_id: ConsultantId,
    pub special_request: String,
    pub customer: CustomerSnapshot,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Human-readable slot, e.g. "Sat, 14 Feb 2026 at 11:00 AM".
    pub fn when(&self) -> String {
        format!("{} at {}", self.date.format("%a, %d %b %Y"), self.time_slot)
    }

    pub fn consultant_name(&self) -> String {
        find_consultant(&self.consultant_id)
            .map(|c| c.name)
            .unwrap_or_else(|| self.consultant_id.to_string())
    }
}

#[cfg(feature = "storage")]
mod storage {
    use super::*;
    use bliss_cache::Cache;

    /// Append a booking to the persisted list.
    pub fn save_booking(cache: &Cache, booking: &Booking) -> Result<(), CommerceError> {
        let mut bookings: Vec<Booking> = cache.get_or_default(BOOKINGS_KEY)?;
        bookings.push(booking.clone());
        cache.set(BOOKINGS_KEY, &bookings)?;
        tracing::info!(booking = %booking.id, customer = %booking.customer.uid, "booking saved");
        Ok(())
    }

    /// All persisted bookings, oldest first.
    pub fn load_bookings(cache: &Cache) -> Result<Vec<Booking>, CommerceError> {
        Ok(cache.get_or_default(BOOKINGS_KEY)?)
    }

    /// Bookings made by one customer.
    pub fn bookings_for(cache: &Cache, uid: &UserId) -> Result<Vec<Booking>, CommerceError> {
        Ok(load_bookings(cache)?
            .into_iter()
            .filter(|b| &b.customer.uid == uid)
            .collect())
    }

    impl BookingDraft {
        /// Stash this draft so it survives the detour through sign-in.
        pub fn stash_pending(&self, cache: &Cache) -> Result<(), CommerceError> {
            cache.set(PENDING_BOOKING_KEY, self)?;
            Ok(())
        }

        /// Take the stashed draft, removing it from storage.
        pub fn take_pending(cache: &Cache) -> Result<Option<BookingDraft>, CommerceError> {
            Ok(cache.take(PENDING_BOOKING_KEY)?)
        }
    }
}

#[cfg(feature = "storage")]
pub use storage::{bookings_for, load_bookings, save_booking};

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 10).unwrap()
    }

    fn customer() -> CustomerSnapshot {
        CustomerSnapshot {
            uid: UserId::new("usr_1"),
            email: "asha@example.com".to_string(),
            display_name: "Asha".to_string(),
            phone_number: Some("+919876543210".to_string()),
        }
    }

    fn complete_draft() -> BookingDraft {
        BookingDraft {
            consultation_type: ConsultationType::InStore,
            date: NaiveDate::from_ymd_opt(2026, 2, 14),
            time_slot: Some("11:00 AM".to_string()),
            consultant_id: Some(ConsultantId::new("cs_priya")),
            special_request: "  Bring the red swatches  ".to_string(),
        }
    }

    #[test]
    fn test_empty_draft_reports_all_fields() {
        let draft = BookingDraft::new();
        assert_eq!(draft.missing_fields(today()), vec!["date", "time slot", "consultant"]);
    }

    #[test]
    fn test_past_date_and_unknown_slot_rejected() {
        let mut draft = complete_draft();
        draft.date = NaiveDate::from_ymd_opt(2026, 1, 1);
        draft.time_slot = Some("3:17 AM".to_string());
        assert_eq!(draft.missing_fields(today()), vec!["date", "time slot"]);
        assert!(matches!(
            draft.submit(customer(), today()),
            Err(CommerceError::BookingIncomplete(_))
        ));
    }

    #[test]
    fn test_submit_builds_booking() {
        let booking = complete_draft().submit(customer(), today()).unwrap();
        assert_eq!(booking.special_request, "Bring the red swatches");
        assert_eq!(booking.customer.display_name, "Asha");
        assert_eq!(booking.when(), "Sat, 14 Feb 2026 at 11:00 AM");
        assert_eq!(booking.consultant_name(), "Priya Sharma");
    }

    #[cfg(feature = "storage")]
    #[test]
    fn test_bookings_append_and_filter() {
        let cache = bliss_cache::Cache::in_memory();
        let first = complete_draft().submit(customer(), today()).unwrap();
        let mut other = customer();
        other.uid = UserId::new("usr_2");
        let second = complete_draft().submit(other, today()).unwrap();

        save_booking(&cache, &first).unwrap();
        save_booking(&cache, &second).unwrap();

        assert_eq!(load_bookings(&cache).unwrap().len(), 2);
        let mine = bookings_for(&cache, &UserId::new("usr_1")).unwrap();
        assert_eq!(mine, vec![first]);
    }

    #[cfg(feature = "storage")]
    #[test]
    fn test_pending_draft_is_one_shot() {
        let cache = bliss_cache::Cache::in_memory();
        complete_draft().stash_pending(&cache).unwrap();

        assert_eq!(BookingDraft::take_pending(&cache).unwrap(), Some(complete_draft()));
        assert_eq!(BookingDraft::take_pending(&cache).unwrap(), None);
    }
}
