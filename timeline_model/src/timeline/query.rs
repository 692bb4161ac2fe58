//! Read-only projections over an ordered event sequence.
//!
//! Both filters are linear scans that preserve the relative order of the
//! source. They borrow the events and never fail; no match is an empty `Vec`.

use crate::events::{TimelineEvent, TimelineEventType};

/// Events whose type equals `event_type`.
pub fn filter_by_type<'a, I>(events: I, event_type: TimelineEventType) -> Vec<&'a TimelineEvent>
where
    I: IntoIterator<Item = &'a TimelineEvent>,
{
    events
        .into_iter()
        .filter(|event| event.event_type() == event_type)
        .collect()
}

/// Events whose timestamp lies in the inclusive range `[min, max]`.
///
/// An inverted range (`min > max`) matches nothing.
pub fn filter_by_timestamp<'a, I>(events: I, min: i64, max: i64) -> Vec<&'a TimelineEvent>
where
    I: IntoIterator<Item = &'a TimelineEvent>,
{
    events
        .into_iter()
        .filter(|event| (min..=max).contains(&event.timestamp()))
        .collect()
}
