//! Serialize the finalized event sequence as an iCalendar document.

mod ical;
pub use ical::IcalFeed;

/// Anything that can render itself as calendar text.
pub trait Emitter {
    fn generate(&self) -> String;
}
