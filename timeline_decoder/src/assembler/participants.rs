//! Re-keying of participant frames from string ids to integer ids.

use serde_json::Value;
use std::collections::BTreeMap;
use timeline_model::ParticipantFrame;

use crate::decode::decode_participant_frame;
use crate::error::DecodeError;
use crate::property_bag::PropertyBag;

/// Decode a `{ "<id>": <participant frame>, .. }` object into an
/// integer-keyed map.
///
/// A body that is not an object decodes as an all-default frame. Keys that
/// do not parse as `i32`, or that parse to an id already seen, are errors in
/// strict mode and are skipped with a warning otherwise, so the first entry
/// in document order wins.
pub fn rekey_participant_frames(
    raw: PropertyBag<'_>,
    strict: bool,
) -> Result<BTreeMap<i32, ParticipantFrame>, DecodeError> {
    let mut frames = BTreeMap::new();

    for (key, value) in raw.entries() {
        let id = match key.parse::<i32>() {
            Ok(id) => id,
            Err(_) if strict => return Err(DecodeError::InvalidParticipantKey(key.to_string())),
            Err(_) => {
                tracing::warn!(key, "skipping participant frame with a non-integer key");
                continue;
            }
        };

        if frames.contains_key(&id) {
            if strict {
                return Err(DecodeError::DuplicateParticipantId(id));
            }
            tracing::warn!(key, id, "skipping participant frame for an id that is already present");
            continue;
        }

        frames.insert(id, decode_body(value));
    }

    Ok(frames)
}

fn decode_body(value: &Value) -> ParticipantFrame {
    PropertyBag::from_value(value)
        .map(decode_participant_frame)
        .unwrap_or_default()
}
