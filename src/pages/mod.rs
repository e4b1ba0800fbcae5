// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! CD-ROM specific mode pages served during MODE SENSE / MODE SELECT.
//!
//! Each provider is a stateless function: the dispatcher calls it once per
//! candidate page while assembling MODE SENSE parameter data, and the
//! acceptor once while applying a MODE SELECT payload. Device type, target
//! id and the output buffer are passed in explicitly; nothing is read from
//! ambient state.

/// CD Audio Control page (0x0E) provider and MODE SELECT acceptor.
pub mod cd_audio_control;
/// CD Parameters page (0x0D) provider.
pub mod cd_parameters;

/// "Return all supported pages" wildcard in a MODE SENSE page-code field.
pub const ALL_PAGES: u8 = 0x3F;

/// Page Control (PC) from MODE SENSE byte 2 (bits 7..6).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum PageControl {
    Current = 0b00,
    Changeable = 0b01,
    Default = 0b10,
    Saved = 0b11,
}

impl PageControl {
    /// Decode the PC field out of MODE SENSE CDB byte 2.
    #[inline]
    pub fn from_cdb_byte(b2: u8) -> Self {
        match b2 >> 6 {
            0b00 => PageControl::Current,
            0b01 => PageControl::Changeable,
            0b10 => PageControl::Default,
            _ => PageControl::Saved,
        }
    }
}

/// Outcome of one page provider during MODE SENSE data construction.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum PageSense {
    /// Page does not apply to this device or page-code request; the caller
    /// tries other providers or omits the page.
    NotFound,
    /// Page written into the buffer; length in bytes, header included.
    Found(usize),
    /// PC=Saved was requested and the device keeps no saved parameters.
    /// The caller is expected to terminate the command with CHECK CONDITION,
    /// SAVING PARAMETERS NOT SUPPORTED.
    SavedNotSupported,
}

impl PageSense {
    #[inline]
    pub fn is_found(self) -> bool {
        matches!(self, PageSense::Found(_))
    }

    #[inline]
    pub fn bytes_written(self) -> usize {
        match self {
            PageSense::Found(n) => n,
            _ => 0,
        }
    }
}

/// Copy `template` to the front of `out`; when the initiator asked for the
/// changeable-bits mask, blank everything after the two header bytes
/// (page code, page length). Host-settable fields are overlaid afterwards
/// by the owning provider.
///
/// Callers guarantee `out` holds at least `template.len()` bytes.
pub fn page_in(pc: PageControl, out: &mut [u8], template: &[u8]) {
    out[..template.len()].copy_from_slice(template);

    if pc == PageControl::Changeable {
        out[2..template.len()].fill(0);
    }
}
