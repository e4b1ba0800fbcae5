// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use std::{collections::HashSet, fs, path::Path};

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

use crate::cfg::enums::{DeviceType, YesNo};

/// Highest SCSI bus address an emulated target may occupy.
pub const MAX_TARGET_ID: u8 = 7;

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Config {
    /// Per-target emulation settings, one entry per SCSI bus address.
    pub targets: Vec<TargetConfig>,
}

/// Settings for a single emulated target.
///
/// Device type and audio capability are read fresh on every mode-page call,
/// so reconfiguring a target between commands takes effect immediately.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct TargetConfig {
    #[serde(rename = "TargetId")]
    /// SCSI bus address of the target (0..=7).
    pub target_id: u8,

    #[serde(rename = "DeviceType")]
    /// Peripheral device type presented to the initiator.
    pub device_type: DeviceType,

    #[serde(default, rename = "AudioOutput")]
    /// Whether the target routes CD audio to an output device. Replaces the
    /// reference firmware's compile-time audio gate so both configurations
    /// are testable from a single build.
    pub audio_output: YesNo,
}

impl TargetConfig {
    /// True when the CD audio control page applies to this target.
    pub fn audio_enabled(&self) -> bool {
        self.audio_output.as_bool()
    }
}

impl Config {
    /// Loads the configuration from YAML, validates it, and returns the
    /// ready-to-use value.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let s = fs::read_to_string(path)?;
        let mut cfg: Config =
            serde_yaml::from_str(&s).context("failed to parse config YAML")?;
        cfg.validate_and_normalize()?;
        Ok(cfg)
    }

    /// Validates invariants and normalizes derived fields.
    pub fn validate_and_normalize(&mut self) -> Result<()> {
        ensure!(
            !self.targets.is_empty(),
            "at least one target must be configured"
        );

        let mut seen = HashSet::new();
        for target in &mut self.targets {
            ensure!(
                target.target_id <= MAX_TARGET_ID,
                "TargetId {} exceeds bus maximum {MAX_TARGET_ID}",
                target.target_id
            );
            ensure!(
                seen.insert(target.target_id),
                "duplicate TargetId {}",
                target.target_id
            );

            // Audio routing is only meaningful for optical targets.
            if target.audio_output.as_bool() && !target.device_type.is_optical() {
                target.audio_output = YesNo::No;
            }
        }

        Ok(())
    }

    /// Looks up a target by its SCSI bus address.
    pub fn target(&self, target_id: u8) -> Option<&TargetConfig> {
        self.targets.iter().find(|t| t.target_id == target_id)
    }
}
