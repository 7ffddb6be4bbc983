//! Consultation bookings.
//!
//! A [`BookingDraft`] is filled in by the wizard's booking step and turned
//! into a [`Booking`] once the visitor is signed in. Submitted bookings are
//! appended to local storage; nothing updates or deletes them.

mod consultation;
mod contact;
mod record;

pub use consultation::{consultants, find_consultant, Consultant, ConsultationType, TIME_SLOTS};
pub use contact::{ContactForm, CONTACT_FORM_KEY};
pub use record::{Booking, BookingDraft, CustomerSnapshot, BOOKINGS_KEY, PENDING_BOOKING_KEY};

#[cfg(feature = "storage")]
pub use record::{bookings_for, load_bookings, save_booking};
