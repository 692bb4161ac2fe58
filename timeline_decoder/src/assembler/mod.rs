//! Frame Assembler and timeline entry point.
//!
//! Assembly is a structural transform only:
//! 1. **Participants**: re-key `participantFrames` from string to integer ids
//!    and decode each snapshot
//! 2. **Events**: decode each event record, keeping wire order
//! 3. **Frames**: carry the frame timestamp through unchanged
//! 4. **Timeline**: combine metadata, participants and the ordered frames
//!
//! Nothing is reordered, filtered or validated. Frames are independent of
//! each other, so they can be decoded on the rayon pool; the collected
//! output keeps the input order.

mod participants;

pub use participants::*;

use rayon::prelude::*;
use serde_json::Value;
use std::collections::BTreeMap;
use timeline_model::{
    MatchTimeline, TimelineFrames, TimelineInfo, TimelineMetadata, TimelineParticipant,
};

use crate::config::DecoderConfig;
use crate::decode::decode_raw_event;
use crate::error::DecodeError;
use crate::property_bag::PropertyBag;

/// Assemble one frame record into [`TimelineFrames`].
///
/// Elements of `events` that are not objects cannot be kept as a record and
/// are skipped with a warning. Fails only on participant keys, and only when
/// `strict_participant_keys` is set.
pub fn assemble_frame(
    frame: PropertyBag<'_>,
    strict_participant_keys: bool,
) -> Result<TimelineFrames, DecodeError> {
    let participant_frames = match frame.get_object("participantFrames") {
        Some(raw) => rekey_participant_frames(raw, strict_participant_keys)?,
        None => BTreeMap::new(),
    };

    let raw_events = frame.get("events").and_then(Value::as_array);
    let mut events = Vec::with_capacity(raw_events.map_or(0, Vec::len));
    for (index, raw) in raw_events.into_iter().flatten().enumerate() {
        match PropertyBag::from_value(raw) {
            Some(body) => events.push(decode_raw_event(body)),
            None => tracing::warn!(index, "skipping timeline event that is not an object"),
        }
    }

    Ok(TimelineFrames {
        participant_frames,
        events,
        timestamp: frame.get_long("timestamp").unwrap_or(0),
    })
}

/// Decodes whole match-timeline documents.
#[derive(Debug, Clone, Default)]
pub struct TimelineDecoder {
    config: DecoderConfig,
}

impl TimelineDecoder {
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(DecoderConfig::default())
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Parse and decode a JSON document.
    pub fn decode_str(&self, json: &str) -> Result<MatchTimeline, DecodeError> {
        let document: Value = serde_json::from_str(json)?;
        self.decode_value(&document)
    }

    /// Decode an already-parsed document with `metadata` and `info` objects.
    pub fn decode_value(&self, document: &Value) -> Result<MatchTimeline, DecodeError> {
        let root = PropertyBag::from_value(document).ok_or(DecodeError::NotAnObject)?;
        let metadata = root
            .get_object("metadata")
            .ok_or(DecodeError::MissingSection("metadata"))?;
        let info = root
            .get_object("info")
            .ok_or(DecodeError::MissingSection("info"))?;

        let timeline = MatchTimeline {
            info: self.decode_info(info)?,
            metadata: decode_metadata(metadata),
        };

        tracing::debug!(
            match_id = %timeline.metadata.match_id,
            frames = timeline.info.frames.len(),
            events = timeline.events().count(),
            "assembled match timeline"
        );

        Ok(timeline)
    }

    /// Assemble a single frame with this decoder's participant-key policy.
    pub fn decode_frame(&self, frame: PropertyBag<'_>) -> Result<TimelineFrames, DecodeError> {
        assemble_frame(frame, self.config.strict_participant_keys)
    }

    fn decode_info(&self, info: PropertyBag<'_>) -> Result<TimelineInfo, DecodeError> {
        let participants = info
            .get_array::<PropertyBag>("participants")
            .unwrap_or_default()
            .into_iter()
            .map(|p| TimelineParticipant {
                participant_id: p.get_int("participantId").unwrap_or(0),
                puuid: p.get_string("puuid").unwrap_or_default().to_string(),
            })
            .collect();

        let raw_frames = info
            .get("frames")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();

        Ok(TimelineInfo {
            end_of_game_result: info.get_string("endOfGameResult").unwrap_or_default().to_string(),
            frame_interval: info.get_long("frameInterval").unwrap_or(0),
            game_id: info.get_long("gameId").unwrap_or(0),
            participants,
            frames: self.decode_frames(raw_frames)?,
        })
    }

    fn decode_frames(&self, raw: &[Value]) -> Result<Vec<TimelineFrames>, DecodeError> {
        if self.config.use_parallel(raw.len()) {
            raw.par_iter()
                .enumerate()
                .map(|(index, value)| self.decode_indexed_frame(index, value))
                .collect()
        } else {
            raw.iter()
                .enumerate()
                .map(|(index, value)| self.decode_indexed_frame(index, value))
                .collect()
        }
    }

    fn decode_indexed_frame(
        &self,
        index: usize,
        value: &Value,
    ) -> Result<TimelineFrames, DecodeError> {
        let frame = PropertyBag::from_value(value).ok_or(DecodeError::InvalidFrame { index })?;
        self.decode_frame(frame)
    }
}

fn decode_metadata(metadata: PropertyBag<'_>) -> TimelineMetadata {
    TimelineMetadata {
        data_version: metadata.get_string("dataVersion").unwrap_or_default().to_string(),
        match_id: metadata.get_string("matchId").unwrap_or_default().to_string(),
        participants: metadata.get_array::<String>("participants").unwrap_or_default(),
    }
}
