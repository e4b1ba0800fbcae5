// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! CD Parameters mode page (0x0D) — static MSF timing constants.
//!
//! Nothing on this page is host-settable, so current, default and saved
//! values are identical; only the changeable-bits mask (all zero) differs.

use crate::{
    cfg::config::TargetConfig,
    pages::{ALL_PAGES, PageControl, PageSense, page_in},
};

pub const CD_PARAMETERS_PAGE_CODE: u8 = 0x0D;

pub(crate) const CD_PARAMETERS_PAGE: [u8; 8] = [
    0x0D, // page code
    0x06, // page length
    0x00, // reserved
    0x0D, // reserved, inactivity time 8 min
    0x00, 0x3C, // 60 seconds per MSF M unit
    0x00, 0x4B, // 75 frames per MSF S unit
];

/// Serve the CD Parameters page into `out` during MODE SENSE.
///
/// Applies only to optical targets asked for page 0x0D or the all-pages
/// wildcard; everything else reports [`PageSense::NotFound`].
pub fn sense(
    target: &TargetConfig,
    pc: PageControl,
    page_code: u8,
    out: &mut [u8],
) -> PageSense {
    if !target.device_type.is_optical() {
        return PageSense::NotFound;
    }
    if page_code != CD_PARAMETERS_PAGE_CODE && page_code != ALL_PAGES {
        return PageSense::NotFound;
    }
    if out.len() < CD_PARAMETERS_PAGE.len() {
        return PageSense::NotFound;
    }

    page_in(pc, out, &CD_PARAMETERS_PAGE);
    PageSense::Found(CD_PARAMETERS_PAGE.len())
}
