//! This crate provides the CD-ROM mode-page engine of a SCSI target emulator.
// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

/// Volume contract bridged from the audio subsystem into the control plane.
pub mod audio;
/// Handles configuration, command-line parsing, and logging.
pub mod cfg;
/// MODE SENSE / MODE SELECT providers for the CD-ROM specific mode pages.
pub mod pages;
