//! Frames and the match timeline aggregate.

pub mod query;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::events::{TimelineEvent, TimelineEventType};
use crate::stats::ParticipantFrame;

/// One sampled frame: participant snapshots plus the events that happened
/// since the previous sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TimelineFrames {
    /// Participant id -> snapshot.
    pub participant_frames: BTreeMap<i32, ParticipantFrame>,

    /// Events in wire order.
    pub events: Vec<TimelineEvent>,

    /// Frame timestamp in milliseconds. Usually >= every contained event
    /// timestamp, but this is not checked.
    pub timestamp: i64,
}

impl TimelineFrames {
    pub fn participant_frame(&self, participant_id: i32) -> Option<&ParticipantFrame> {
        self.participant_frames.get(&participant_id)
    }

    /// Events of the given type, in original order.
    pub fn events_by_type(&self, event_type: TimelineEventType) -> Vec<&TimelineEvent> {
        query::filter_by_type(&self.events, event_type)
    }

    /// Events with `min <= timestamp <= max`, in original order.
    pub fn events_in_range(&self, min: i64, max: i64) -> Vec<&TimelineEvent> {
        query::filter_by_timestamp(&self.events, min, max)
    }
}

/// Static mapping of a match-local participant id to a player.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct TimelineParticipant {
    pub participant_id: i32,
    pub puuid: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TimelineInfo {
    pub end_of_game_result: String,
    /// Milliseconds between two frames.
    pub frame_interval: i64,
    pub game_id: i64,
    pub participants: Vec<TimelineParticipant>,
    pub frames: Vec<TimelineFrames>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct TimelineMetadata {
    pub data_version: String,
    pub match_id: String,
    /// Player identifiers, in participant order.
    pub participants: Vec<String>,
}

/// The root aggregate handed back to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MatchTimeline {
    pub info: TimelineInfo,
    pub metadata: TimelineMetadata,
}

impl MatchTimeline {
    /// All events, frame by frame, each frame in its own wire order.
    ///
    /// Not guaranteed to be globally sorted by timestamp.
    pub fn events(&self) -> impl Iterator<Item = &TimelineEvent> {
        self.info.frames.iter().flat_map(|frame| frame.events.iter())
    }

    pub fn events_by_type(&self, event_type: TimelineEventType) -> Vec<&TimelineEvent> {
        query::filter_by_type(self.events(), event_type)
    }

    pub fn events_in_range(&self, min: i64, max: i64) -> Vec<&TimelineEvent> {
        query::filter_by_timestamp(self.events(), min, max)
    }

    pub fn participant_puuid(&self, participant_id: i32) -> Option<&str> {
        self.info
            .participants
            .iter()
            .find(|p| p.participant_id == participant_id)
            .map(|p| p.puuid.as_str())
    }

    /// Participant ids referenced by events or participant frames that are
    /// missing from `info.participants`.
    ///
    /// Decoding never enforces this; the result is for callers that want to
    /// detect upstream drift themselves.
    pub fn undeclared_participant_ids(&self) -> BTreeSet<i32> {
        let declared: BTreeSet<i32> = self
            .info
            .participants
            .iter()
            .map(|p| p.participant_id)
            .collect();

        let from_frames = self
            .info
            .frames
            .iter()
            .flat_map(|frame| frame.participant_frames.keys().copied());
        let from_events = self.events().flat_map(|event| event.participant_ids());

        from_frames
            .chain(from_events)
            .filter(|id| *id != 0 && !declared.contains(id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level_up(timestamp: i64, participant_id: i32) -> TimelineEvent {
        TimelineEvent::LevelUp {
            timestamp,
            level: 2,
            participant_id,
        }
    }

    fn purchase(timestamp: i64, participant_id: i32) -> TimelineEvent {
        TimelineEvent::ItemPurchased {
            timestamp,
            item_id: 1055,
            participant_id,
        }
    }

    fn frame(timestamp: i64, events: Vec<TimelineEvent>) -> TimelineFrames {
        TimelineFrames {
            participant_frames: BTreeMap::new(),
            events,
            timestamp,
        }
    }

    #[test]
    fn test_events_by_type_keeps_order() {
        let frame = frame(
            60_000,
            vec![level_up(100, 1), purchase(200, 1), level_up(300, 2)],
        );

        let hits = frame.events_by_type(TimelineEventType::LevelUp);

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0], &level_up(100, 1));
        assert_eq!(hits[1], &level_up(300, 2));
    }

    #[test]
    fn test_events_in_range() {
        let frame = frame(
            60_000,
            vec![purchase(500, 1), purchase(1000, 1), purchase(1500, 1), purchase(2500, 1)],
        );

        let stamps: Vec<_> = frame
            .events_in_range(1000, 2000)
            .iter()
            .map(|e| e.timestamp())
            .collect();

        assert_eq!(stamps, vec![1000, 1500]);
    }

    #[test]
    fn test_timeline_queries_span_frames() {
        let timeline = MatchTimeline {
            info: TimelineInfo {
                frames: vec![
                    frame(0, vec![purchase(10, 1)]),
                    frame(60_000, vec![level_up(30_000, 1), purchase(45_000, 2)]),
                    frame(120_000, vec![level_up(70_000, 2)]),
                ],
                ..Default::default()
            },
            ..Default::default()
        };

        assert_eq!(timeline.events().count(), 4);
        assert_eq!(timeline.events_by_type(TimelineEventType::LevelUp).len(), 2);
        assert_eq!(timeline.events_by_type(TimelineEventType::ItemPurchased).len(), 2);
        assert_eq!(timeline.events_in_range(20, 50_000).len(), 2);
        assert!(timeline.events_by_type(TimelineEventType::GameEnd).is_empty());
    }

    #[test]
    fn test_participant_puuid() {
        let timeline = MatchTimeline {
            info: TimelineInfo {
                participants: vec![TimelineParticipant {
                    participant_id: 1,
                    puuid: "puuid-1".to_string(),
                }],
                ..Default::default()
            },
            ..Default::default()
        };

        assert_eq!(timeline.participant_puuid(1), Some("puuid-1"));
        assert_eq!(timeline.participant_puuid(2), None);
    }

    #[test]
    fn test_undeclared_participant_ids() {
        let mut first = frame(0, vec![level_up(10, 1), purchase(20, 11)]);
        first
            .participant_frames
            .insert(1, ParticipantFrame::default());
        first
            .participant_frames
            .insert(12, ParticipantFrame::default());

        let timeline = MatchTimeline {
            info: TimelineInfo {
                participants: vec![TimelineParticipant {
                    participant_id: 1,
                    puuid: "puuid-1".to_string(),
                }],
                frames: vec![first],
                ..Default::default()
            },
            ..Default::default()
        };

        let undeclared: Vec<_> = timeline.undeclared_participant_ids().into_iter().collect();
        assert_eq!(undeclared, vec![11, 12]);
    }
}
