// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use anyhow::{Context, Result};
use cdrom_target_rs::{
    audio::SharedAudioState,
    cfg::{
        cli::{config_path_from_args, resolve_config_path},
        config::Config,
        logger::init_logger,
    },
    pages::{ALL_PAGES, PageControl, cd_audio_control, cd_parameters},
};
use tracing::info;

/// Dumps the CD-ROM mode pages each configured target would answer to a
/// MODE SENSE with PC=Current and the all-pages wildcard.
fn main() -> Result<()> {
    let _init_logger = init_logger("tests/config_logger.yaml")?;

    let config = resolve_config_path(&config_path_from_args("tests/config.yaml"))
        .and_then(Config::load_from_file)
        .context("failed to resolve or load config")?;

    let audio = SharedAudioState::new();

    for target in &config.targets {
        let mut buf = [0u8; 64];
        let mut used = 0;

        used += cd_parameters::sense(
            target,
            PageControl::Current,
            ALL_PAGES,
            &mut buf[used..],
        )
        .bytes_written();
        used += cd_audio_control::sense(
            target,
            &audio,
            PageControl::Current,
            ALL_PAGES,
            &mut buf[used..],
        )
        .bytes_written();

        info!(
            target_id = target.target_id,
            device_type = %target.device_type,
            pages = %hex::encode_upper(&buf[..used]),
            "MODE SENSE page data"
        );
    }

    Ok(())
}
