// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! Volume contract bridged into the SCSI control plane.
//!
//! The playback engine itself lives outside this crate; the mode-page code
//! only reads and writes the per-target volume through [`AudioOutput`], once
//! per command, and never caches it.

use dashmap::DashMap;

/// Power-on volume: both channels at maximum, matching the port volumes
/// advertised by the audio control page template.
pub const DEFAULT_VOLUME_LEVEL: u16 = 0xFFFF;

/// Per-target volume state owned by the audio subsystem.
///
/// Both calls are synchronous and atomic from the caller's perspective; the
/// command sequencer guarantees at most one in-flight MODE SENSE/SELECT per
/// target, so no read-modify-write races originate here.
pub trait AudioOutput: Send + Sync {
    /// Current volume of the given target.
    fn get_volume(&self, target_id: u8) -> u16;
    /// Persists a new volume for the given target.
    fn set_volume(&self, target_id: u8, volume: u16);
}

/// In-process volume store keyed by SCSI bus address.
///
/// Targets that never saw a MODE SELECT report [`DEFAULT_VOLUME_LEVEL`].
#[derive(Debug, Default)]
pub struct SharedAudioState {
    volumes: DashMap<u8, u16>,
}

impl SharedAudioState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AudioOutput for SharedAudioState {
    fn get_volume(&self, target_id: u8) -> u16 {
        self.volumes
            .get(&target_id)
            .map(|v| *v)
            .unwrap_or(DEFAULT_VOLUME_LEVEL)
    }

    fn set_volume(&self, target_id: u8, volume: u16) {
        self.volumes.insert(target_id, volume);
    }
}
