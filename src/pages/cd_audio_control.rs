// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! CD Audio Control mode page (0x0E) — port-volume routing.
//!
//! The two port-volume slots double as one split 16-bit volume: the low byte
//! rides the port 0 volume slot (offset 9), the high byte the port 1 volume
//! slot (offset 11). That reuse is a convention inherited from the reference
//! device, kept for byte-exact host compatibility, and it is confined to
//! this file.

use thiserror::Error;
use tracing::debug;
use zerocopy::{
    FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned,
    byteorder::{BigEndian, U16},
};

use crate::{
    audio::{AudioOutput, DEFAULT_VOLUME_LEVEL},
    cfg::config::TargetConfig,
    pages::{ALL_PAGES, PageControl, PageSense, page_in},
};

pub const CD_AUDIO_CONTROL_PAGE_CODE: u8 = 0x0E;

/// Page length byte a MODE SELECT payload must declare (14 payload bytes).
pub const CD_AUDIO_CONTROL_PAGE_LEN: u8 = 0x0E;

pub(crate) const CD_AUDIO_CONTROL_PAGE: [u8; 16] = [
    0x0E, // page code
    0x0E, // page length
    0x04, // 'Immed' bit set, 'SOTC' bit not set
    0x00, // reserved
    0x00, // reserved
    0x80, // 1 LBAs/sec multip
    0x00, 0x4B, // 75 LBAs/sec
    0x01, 0xFF, // output port 0 active, max volume
    0x02, 0xFF, // output port 1 active, max volume
    0x00, 0x00, // output port 2 inactive
    0x00, 0x00, // output port 3 inactive
];

// Byte slots carrying the split 16-bit volume, relative to the page start.
const VOLUME_LO: usize = 9;
const VOLUME_HI: usize = 11;

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    /// Byte 2 of the audio control page.
    pub struct AudioControlFlags: u8 {
        /// Audio commands return before playback completes.
        const IMMED = 0x04;
        /// Stop On Track Crossing.
        const SOTC  = 0x02;
    }
}

/// Raw 16-byte view of the audio control page, as carried in MODE SENSE
/// parameter data and MODE SELECT payloads.
#[repr(C)]
#[derive(FromBytes, IntoBytes, KnownLayout, Immutable, Unaligned, Debug)]
pub struct CdAudioControlRaw {
    pub page_code: u8,
    pub page_length: u8,
    /// Immed/SOTC capability bits, see [`AudioControlFlags`].
    pub flags: u8,
    pub reserved: [u8; 2],
    /// Logical blocks per second multiplier.
    pub lba_per_sec_multiplier: u8,
    /// Logical blocks per second (75 for CD audio).
    pub lba_per_sec: U16<BigEndian>,
    /// Four output port controls: (channel selection, volume) pairs.
    pub ports: [PortControl; 4],
}

/// One output-port control pair.
#[repr(C)]
#[derive(FromBytes, IntoBytes, KnownLayout, Immutable, Unaligned, Debug)]
pub struct PortControl {
    pub selection: u8,
    pub volume: u8,
}

impl CdAudioControlRaw {
    #[inline]
    pub fn control_flags(&self) -> AudioControlFlags {
        AudioControlFlags::from_bits_truncate(self.flags)
    }

    /// The split 16-bit volume: high byte from the port 1 slot, low byte
    /// from the port 0 slot.
    #[inline]
    pub fn volume(&self) -> u16 {
        ((self.ports[1].volume as u16) << 8) | self.ports[0].volume as u16
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AudioPageError {
    #[error("CD audio control page: need ≥ {expected} bytes, got {got}")]
    Truncated { expected: usize, got: usize },
}

/// Parse an audio control page (needs ≥ 16 bytes).
#[inline]
pub fn parse_audio_control_zerocopy(
    buf: &[u8],
) -> Result<&CdAudioControlRaw, AudioPageError> {
    let (raw, _rest) =
        CdAudioControlRaw::ref_from_prefix(buf).map_err(|_| AudioPageError::Truncated {
            expected: CD_AUDIO_CONTROL_PAGE.len(),
            got: buf.len(),
        })?;
    Ok(raw)
}

/// Serve the CD Audio Control page into `out` during MODE SENSE.
///
/// Applies only to optical targets with audio output enabled, asked for page
/// 0x0E or the all-pages wildcard. After masking in the template the two
/// volume slots are overlaid per PC: live volume for Current, 0xFF for
/// Changeable (every bit host-settable), [`DEFAULT_VOLUME_LEVEL`] for
/// Default. PC=Saved reports [`PageSense::SavedNotSupported`] without
/// touching the buffer: this device keeps no saved parameters, and the
/// dispatcher answers with CHECK CONDITION, SAVING PARAMETERS NOT SUPPORTED.
pub fn sense(
    target: &TargetConfig,
    audio: &dyn AudioOutput,
    pc: PageControl,
    page_code: u8,
    out: &mut [u8],
) -> PageSense {
    if !target.audio_enabled() || !target.device_type.is_optical() {
        return PageSense::NotFound;
    }
    if page_code != CD_AUDIO_CONTROL_PAGE_CODE && page_code != ALL_PAGES {
        return PageSense::NotFound;
    }
    if out.len() < CD_AUDIO_CONTROL_PAGE.len() {
        return PageSense::NotFound;
    }
    if pc == PageControl::Saved {
        return PageSense::SavedNotSupported;
    }

    page_in(pc, out, &CD_AUDIO_CONTROL_PAGE);
    match pc {
        PageControl::Current => {
            let vol = audio.get_volume(target.target_id);
            out[VOLUME_LO] = (vol & 0xFF) as u8;
            out[VOLUME_HI] = (vol >> 8) as u8;
        },
        PageControl::Changeable => {
            // Both slots fully host-settable.
            out[VOLUME_LO] = 0xFF;
            out[VOLUME_HI] = 0xFF;
        },
        _ => {
            out[VOLUME_LO] = (DEFAULT_VOLUME_LEVEL & 0xFF) as u8;
            out[VOLUME_HI] = (DEFAULT_VOLUME_LEVEL >> 8) as u8;
        },
    }
    PageSense::Found(CD_AUDIO_CONTROL_PAGE.len())
}

/// Apply a MODE SELECT payload carrying the CD Audio Control page.
///
/// `data` starts at the page header; `declared_page_len` is the payload
/// length the initiator wrote into byte 1. Anything other than exactly 0x0E
/// (or a payload shorter than the full page) is rejected without side
/// effects. On success the reconstructed volume is pushed to the audio
/// subsystem — the only externally-visible mutation in this crate.
pub fn select(
    target: &TargetConfig,
    audio: &dyn AudioOutput,
    declared_page_len: u8,
    data: &[u8],
) -> bool {
    if !target.audio_enabled() || !target.device_type.is_optical() {
        return false;
    }
    if declared_page_len != CD_AUDIO_CONTROL_PAGE_LEN {
        return false;
    }
    let Ok(raw) = parse_audio_control_zerocopy(data) else {
        return false;
    };

    let vol = raw.volume();
    debug!(target_id = target.target_id, volume = vol, "CD audio control page volume");
    audio.set_volume(target.target_id, vol);
    true
}
