//! The time-meridiem grid layout ("February style").
//!
//! Pages in this layout print day-number headers between event lines, times
//! as an hour plus a single-letter meridiem (`9A`, `1:30`), and wrap long
//! titles onto an indented second line. The extractor walks the line
//! sequence with a [`ParseContext`], classifies every line into a
//! [`LineClass`] via ordered guards and applies the matching transition, so
//! the priority order is an explicit policy rather than regex fallthrough.

use lazy_static::lazy_static;
use regex::Regex;

use super::{Document, Harvest, LayoutStrategy};
use crate::event::RawEvent;
use crate::line::Line;

/// Indentation beyond this marks a wrapped continuation of the previous
/// event's title.
const CONTINUATION_INDENT: usize = 1;
/// Meridiem-shaped lines belong to the February grid of this layout.
const MERIDIEM_MONTH: &str = "02";
/// Month assumed until a meridiem line re-anchors the context.
const DEFAULT_MONTH: &str = "03";

/// Title keywords acting as a confidence co-signal for detection, so that
/// incidental digit-letter sequences in other layouts do not false-positive.
const TITLE_KEYWORDS: &[&str] = &[
    "BINGO",
    "EXERCISE",
    "DEVOTION",
    "GOOD NEWS",
    "MOVIE",
    "LUNCH",
    "CRAFT",
    "MUSIC",
];

lazy_static! {
    /// `9A Bingo`
    pub(crate) static ref TIMED: Regex = Regex::new(r"(?i)^(\d{1,2})(A|P)\s+(.+)$").unwrap();
    /// An hour+meridiem token anywhere in a line.
    pub(crate) static ref MERIDIEM_TOKEN: Regex = Regex::new(r"(?i)\b\d{1,2}[AP]\b").unwrap();
    /// Bare 1–2 digit day header.
    pub(crate) static ref DAY_ONLY: Regex = Regex::new(r"^(\d{1,2})$").unwrap();
    /// `3 9A Good News` — a printed day header sharing a line with the next
    /// day's first event.
    static ref DAY_TIMED: Regex = Regex::new(r"(?i)^(\d{1,2})\s+(\d{1,2})(A|P)\s+(.+)$").unwrap();
    /// `12 Lunch Outing` — a day header sharing a line with an all-day entry.
    static ref DAY_TEXT: Regex = Regex::new(r"^(\d{1,2})\s+(.+)$").unwrap();
    /// `1:30 Movie Night [MC] 6` — colon time, optional bracketed short
    /// code, optional trailing day number.
    static ref COLON_TIMED: Regex =
        Regex::new(r"^(\d{1,2}):(\d{2})\s+(.+?)(?:\s+\[(\w{2,3})\])?(?:\s+(\d{1,2}))?$").unwrap();
}

/// Strategy-local mutable state for one extraction pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseContext {
    pub day: Option<u32>,
    pub month: String,
}

impl Default for ParseContext {
    fn default() -> Self {
        Self {
            day: None,
            month: DEFAULT_MONTH.to_owned(),
        }
    }
}

/// Which rule fired for a line. Guards are evaluated in declaration order and
/// the first match wins; `Skip` covers lines matching no rule in the current
/// context, which are dropped without producing an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// Indented wrap of the previous event's title.
    Continuation(String),
    /// Combined day header and timed event; the event belongs to the day
    /// after the printed header.
    DayTimed { day: u32, hour: u32, title: String },
    /// Combined day header and all-day text; whether the text belongs to the
    /// printed day or the next depends on whether that day already has an
    /// event.
    DayAllDay { day: u32, title: String },
    /// Bare day header; sets the context day, emits nothing.
    DayHeader(u32),
    /// Timed event on the current context day.
    Timed { hour: u32, title: String },
    /// Colon-timed event, optionally re-anchoring the context day.
    ColonTimed {
        hour: u32,
        minute: u32,
        title: String,
        location: Option<String>,
        day: Option<u32>,
    },
    /// Any other line under a known day is an all-day event verbatim.
    AllDay(String),
    Skip,
}

/// Normalize a printed 1–12 hour plus meridiem letter to 24-hour form.
fn meridiem_hour(hour: u32, meridiem: &str) -> u32 {
    if meridiem.eq_ignore_ascii_case("P") {
        if hour < 12 { hour + 12 } else { hour }
    } else if hour == 12 {
        0
    } else {
        hour
    }
}

fn parse_num(capture: Option<regex::Match>) -> Option<u32> {
    capture.and_then(|m| m.as_str().parse().ok())
}

/// Classify one line against the context. Pure: the transition itself is
/// applied by the extractor's step.
pub fn classify_line(line: &Line, ctx: &ParseContext, has_last: bool) -> LineClass {
    if line.indent > CONTINUATION_INDENT && has_last {
        return LineClass::Continuation(line.text.clone());
    }

    if let Some(caps) = DAY_TIMED.captures(&line.text) {
        let day = parse_num(caps.get(1));
        let hour = parse_num(caps.get(2));
        if let (Some(day), Some(hour @ 1..=12)) = (day, hour) {
            return LineClass::DayTimed {
                day,
                hour: meridiem_hour(hour, &caps[3]),
                title: caps[4].trim().to_owned(),
            };
        }
    }

    if let Some(caps) = DAY_TEXT.captures(&line.text)
        && let Some(day) = parse_num(caps.get(1))
    {
        return LineClass::DayAllDay {
            day,
            title: caps[2].trim().to_owned(),
        };
    }

    if let Some(caps) = DAY_ONLY.captures(&line.text)
        && let Some(day) = parse_num(caps.get(1))
    {
        return LineClass::DayHeader(day);
    }

    if ctx.day.is_some()
        && let Some(caps) = TIMED.captures(&line.text)
        && let Some(hour @ 1..=12) = parse_num(caps.get(1))
    {
        return LineClass::Timed {
            hour: meridiem_hour(hour, &caps[2]),
            title: caps[3].trim().to_owned(),
        };
    }

    if let Some(caps) = COLON_TIMED.captures(&line.text) {
        let hour = parse_num(caps.get(1));
        let minute = parse_num(caps.get(2));
        let day = parse_num(caps.get(5));
        if let (Some(hour @ 0..=23), Some(minute @ 0..=59)) = (hour, minute)
            && (day.is_some() || ctx.day.is_some())
        {
            return LineClass::ColonTimed {
                hour,
                minute,
                title: caps[3].trim().to_owned(),
                location: caps.get(4).map(|m| m.as_str().to_owned()),
                day,
            };
        }
    }

    if ctx.day.is_some() {
        return LineClass::AllDay(line.text.clone());
    }

    LineClass::Skip
}

pub struct TimeMeridiem;

impl TimeMeridiem {
    /// Apply one classified line to the context and event list.
    fn step(ctx: &mut ParseContext, events: &mut Vec<RawEvent>, class: LineClass) {
        match class {
            LineClass::Continuation(text) => {
                if let Some(last) = events.last_mut() {
                    last.title.push(' ');
                    last.title.push_str(&text);
                }
            }
            LineClass::DayTimed { day, hour, title } => {
                // The printed header visually precedes the next day's first
                // event, hence the increment.
                ctx.month = MERIDIEM_MONTH.to_owned();
                ctx.day = Some(day + 1);
                events.push(RawEvent::timed(&ctx.month, ctx.day, title, hour, 0));
            }
            LineClass::DayAllDay { day, title } => {
                let taken = events.iter().any(|e| e.day == Some(day));
                ctx.day = Some(if taken { day + 1 } else { day });
                events.push(RawEvent::all_day(&ctx.month, ctx.day, title));
            }
            LineClass::DayHeader(day) => ctx.day = Some(day),
            LineClass::Timed { hour, title } => {
                ctx.month = MERIDIEM_MONTH.to_owned();
                events.push(RawEvent::timed(&ctx.month, ctx.day, title, hour, 0));
            }
            LineClass::ColonTimed {
                hour,
                minute,
                title,
                location,
                day,
            } => {
                if day.is_some() {
                    ctx.day = day;
                }
                let mut event = RawEvent::timed(&ctx.month, ctx.day, title, hour, minute);
                event.location = location;
                events.push(event);
            }
            LineClass::AllDay(title) => {
                events.push(RawEvent::all_day(&ctx.month, ctx.day, title));
            }
            LineClass::Skip => {}
        }
    }
}

impl LayoutStrategy for TimeMeridiem {
    fn name(&self) -> &'static str {
        "time-meridiem"
    }

    fn matches(&self, doc: &Document) -> bool {
        let shaped = doc.lines.iter().any(|l| TIMED.is_match(&l.text));
        let keyword = doc.lines.iter().any(|l| {
            let upper = l.text.to_uppercase();
            TITLE_KEYWORDS.iter().any(|kw| upper.contains(kw))
        });
        shaped && keyword
    }

    fn extract(&self, doc: &Document) -> Harvest {
        let mut ctx = ParseContext::default();
        let mut events = Vec::new();
        for line in &doc.lines {
            let class = classify_line(line, &ctx, !events.is_empty());
            Self::step(&mut ctx, &mut events, class);
        }
        Harvest {
            events,
            diagnostics: vec![],
        }
    }
}
