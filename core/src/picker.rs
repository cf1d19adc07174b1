// SPDX-FileCopyrightText: 2025-2026 Zig Team <dev@zig-app.com.br>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use jiff::{Unit, Zoned, ZonedRound};

use crate::draft::EventDraft;

/// The draft slot a date/time picker is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeSlot {
    /// Start of the event.
    Start,
    /// End of the event.
    End,
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "Start"),
            Self::End => write!(f, "End"),
        }
    }
}

/// Outcome of presenting a date/time picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pick {
    /// The user confirmed a date and time.
    Selected(Zoned),
    /// The picker was closed without a selection.
    Dismissed,
}

/// How picked times are adjusted before they reach the draft.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimeSnap {
    /// Keep the time exactly as picked.
    #[default]
    Exact,
    /// Round to the nearest :00 or :30, clearing seconds.
    HalfHour,
}

impl TimeSnap {
    /// Applies the policy to a picked time.
    #[must_use]
    pub fn apply(self, picked: Zoned) -> Zoned {
        match self {
            Self::Exact => picked,
            Self::HalfHour => round_to_half_hour(&picked),
        }
    }
}

/// Rounds to the nearest half hour. Quarter past and quarter to round up.
pub(crate) fn round_to_half_hour(t: &Zoned) -> Zoned {
    let round = ZonedRound::new().smallest(Unit::Minute).increment(30);
    match t.round(round) {
        Ok(rounded) => rounded,
        Err(e) => {
            tracing::warn!(%t, "failed to round picked time, keeping it as is: {e}");
            t.clone()
        }
    }
}

/// Writes a confirmed pick into the bound slot. Returns whether the slot changed.
pub(crate) fn apply_pick(draft: &mut EventDraft, slot: TimeSlot, pick: Pick, snap: TimeSnap) -> bool {
    let Pick::Selected(picked) = pick else {
        return false;
    };

    let picked = snap.apply(picked);
    let target = match slot {
        TimeSlot::Start => &mut draft.start,
        TimeSlot::End => &mut draft.end,
    };
    *target = picked;
    true
}
