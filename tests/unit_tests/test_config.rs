use anyhow::{Context, Result};
use cdrom_target_rs::cfg::{
    cli::resolve_config_path,
    config::Config,
    enums::{DeviceType, YesNo},
};

#[test]
fn test_load_and_normalize_config() -> Result<()> {
    let cfg = resolve_config_path("tests/config.yaml")
        .and_then(Config::load_from_file)
        .context("failed to resolve or load config")?;

    assert_eq!(cfg.targets.len(), 3);

    let t0 = cfg.target(0).context("target 0 missing")?;
    assert_eq!(t0.device_type, DeviceType::Optical);
    assert_eq!(t0.audio_output, YesNo::Yes);
    assert!(t0.audio_enabled());

    let t1 = cfg.target(1).context("target 1 missing")?;
    assert!(!t1.audio_enabled());

    // AudioOutput omitted in YAML defaults to No.
    let t2 = cfg.target(2).context("target 2 missing")?;
    assert_eq!(t2.device_type, DeviceType::Disk);
    assert_eq!(t2.audio_output, YesNo::No);

    assert!(cfg.target(7).is_none());
    Ok(())
}
