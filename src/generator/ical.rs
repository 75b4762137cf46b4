//! The VCALENDAR writer.
//!
//! Field order and the CRLF line terminator are part of the contract
//! downstream consumers rely on. Start and end are the identical instant:
//! entries are point-in-time markers, not ranges. Printed calendars carry no
//! year, so emitted dates assume a fixed one.

use chrono::Utc;
use uuid::Uuid;

use super::Emitter;
use crate::CRLF;
use crate::event::NormalizedEvent;

const PRODID: &str = "-//Calsift//Activity Calendar to iCal//EN";
const CALNAME: &str = "Activity Calendar";
const UID_DOMAIN: &str = "calsift";
const ASSUMED_YEAR: u32 = 2025;

/// A calendar feed: the finalized events plus the caller-supplied timezone
/// identifier, echoed into the output unchanged.
pub struct IcalFeed<'a> {
    pub timezone: &'a str,
    pub events: &'a [NormalizedEvent],
}

impl<'a> IcalFeed<'a> {
    pub fn new(timezone: &'a str, events: &'a [NormalizedEvent]) -> Self {
        Self { timezone, events }
    }
}

impl Emitter for IcalFeed<'_> {
    fn generate(&self) -> String {
        let dtstamp = Utc::now().format("%Y%m%dT%H%M%SZ").to_string();
        let mut out: Vec<String> = vec![
            "BEGIN:VCALENDAR".to_owned(),
            "VERSION:2.0".to_owned(),
            "CALSCALE:GREGORIAN".to_owned(),
            format!("PRODID:{PRODID}"),
            format!("X-WR-CALNAME:{CALNAME}"),
            format!("X-WR-TIMEZONE:{}", self.timezone),
        ];

        for event in self.events {
            let date = format!("{ASSUMED_YEAR}{}{:02}", event.month, event.day);
            out.push("BEGIN:VEVENT".to_owned());
            out.push(format!("UID:{}@{UID_DOMAIN}", Uuid::new_v4().simple()));
            out.push(format!("DTSTAMP:{dtstamp}"));
            match event.hour {
                Some(hour) => {
                    let time = format!("{:02}{:02}00", hour, event.minute);
                    out.push(format!("DTSTART;TZID={}:{date}T{time}", self.timezone));
                    out.push(format!("DTEND;TZID={}:{date}T{time}", self.timezone));
                }
                None => {
                    out.push(format!("DTSTART;VALUE=DATE:{date}"));
                    out.push(format!("DTEND;VALUE=DATE:{date}"));
                }
            }
            out.push(format!("SUMMARY:{}", event.title));
            if let Some(location) = &event.location {
                out.push(format!("LOCATION:{location}"));
            }
            out.push("END:VEVENT".to_owned());
        }

        out.push("END:VCALENDAR".to_owned());
        out.join(CRLF) + CRLF
    }
}
