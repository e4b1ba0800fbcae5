// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use core::fmt;

use serde::{Deserialize, Serialize};

/// Boolean enumeration with string serialization support
///
/// Represents yes/no values with support for various string representations
/// including "Yes"/"No", "true"/"false", and "1"/"0".
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YesNo {
    #[serde(
        rename = "Yes",
        alias = "yes",
        alias = "YES",
        alias = "true",
        alias = "True",
        alias = "1"
    )]
    Yes,
    #[serde(
        rename = "No",
        alias = "no",
        alias = "NO",
        alias = "false",
        alias = "False",
        alias = "0"
    )]
    #[default]
    No,
}
impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            YesNo::Yes => "Yes",
            YesNo::No => "No",
        })
    }
}
impl From<bool> for YesNo {
    fn from(b: bool) -> Self {
        if b { YesNo::Yes } else { YesNo::No }
    }
}
impl YesNo {
    pub fn as_bool(self) -> bool {
        matches!(self, YesNo::Yes)
    }
}

/// Emulated peripheral device type enumeration
///
/// Classifies what kind of SCSI device a target presents to the initiator.
/// Only Optical targets expose the CD-ROM specific mode pages; every other
/// type makes those pages report "not applicable".
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceType {
    #[serde(
        rename = "Optical",
        alias = "optical",
        alias = "OPTICAL",
        alias = "CdRom",
        alias = "cdrom"
    )]
    Optical,
    #[serde(rename = "Disk", alias = "disk", alias = "DISK")]
    Disk,
    #[serde(rename = "Removable", alias = "removable", alias = "REMOVABLE")]
    Removable,
    #[serde(rename = "Tape", alias = "tape", alias = "TAPE")]
    Tape,
}
impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DeviceType::Optical => "Optical",
            DeviceType::Disk => "Disk",
            DeviceType::Removable => "Removable",
            DeviceType::Tape => "Tape",
        })
    }
}
impl DeviceType {
    pub fn is_optical(self) -> bool {
        matches!(self, DeviceType::Optical)
    }
}
