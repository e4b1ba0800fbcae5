use anyhow::Result;
use cdrom_target_rs::{
    cfg::{
        config::TargetConfig,
        enums::{DeviceType, YesNo},
    },
    pages::{
        ALL_PAGES, PageControl, PageSense,
        cd_parameters::{CD_PARAMETERS_PAGE_CODE, sense},
    },
};
use hex_literal::hex;

const EXPECTED_PAGE: [u8; 8] = hex!("0D06000D003C004B");

fn target(device_type: DeviceType) -> TargetConfig {
    TargetConfig {
        target_id: 0,
        device_type,
        audio_output: YesNo::No,
    }
}

#[test]
fn test_sense_current_exact_bytes() -> Result<()> {
    let target = target(DeviceType::Optical);
    let mut out = [0u8; 8];

    let res = sense(
        &target,
        PageControl::Current,
        CD_PARAMETERS_PAGE_CODE,
        &mut out,
    );

    assert_eq!(res, PageSense::Found(8), "page must be found with 8 bytes");
    assert_eq!(out, EXPECTED_PAGE, "CD Parameters page content mismatch");
    Ok(())
}

#[test]
fn test_sense_wildcard_matches_own_page_code() -> Result<()> {
    let target = target(DeviceType::Optical);
    let mut by_code = [0u8; 8];
    let mut by_wildcard = [0u8; 8];

    let r1 = sense(
        &target,
        PageControl::Current,
        CD_PARAMETERS_PAGE_CODE,
        &mut by_code,
    );
    let r2 = sense(&target, PageControl::Current, ALL_PAGES, &mut by_wildcard);

    assert_eq!(r1, r2);
    assert!(r1.is_found());
    assert_eq!(by_code, by_wildcard, "wildcard must yield identical bytes");
    Ok(())
}

#[test]
fn test_sense_other_page_codes_not_found() -> Result<()> {
    let target = target(DeviceType::Optical);
    let mut out = [0u8; 8];

    for page_code in [0x00, 0x0E, 0x1A, 0x3E] {
        let res = sense(&target, PageControl::Current, page_code, &mut out);
        assert_eq!(res, PageSense::NotFound, "page 0x{page_code:02X}");
    }
    Ok(())
}

#[test]
fn test_sense_changeable_masks_whole_payload() -> Result<()> {
    let target = target(DeviceType::Optical);
    let mut out = [0u8; 8];

    let res = sense(
        &target,
        PageControl::Changeable,
        CD_PARAMETERS_PAGE_CODE,
        &mut out,
    );

    assert_eq!(res, PageSense::Found(8));
    assert_eq!(&out[..2], &EXPECTED_PAGE[..2], "header survives masking");
    assert!(
        out[2..].iter().all(|&b| b == 0),
        "nothing on this page is host-settable"
    );
    Ok(())
}

#[test]
fn test_sense_static_constants_for_every_reporting_pc() -> Result<()> {
    let target = target(DeviceType::Optical);

    for pc in [PageControl::Current, PageControl::Default, PageControl::Saved] {
        let mut out = [0u8; 8];
        let res = sense(&target, pc, CD_PARAMETERS_PAGE_CODE, &mut out);
        assert_eq!(res, PageSense::Found(8), "{pc:?}");
        assert_eq!(out, EXPECTED_PAGE, "{pc:?} must report the fixed constants");
    }
    Ok(())
}

#[test]
fn test_sense_non_optical_never_applicable() -> Result<()> {
    for device_type in [DeviceType::Disk, DeviceType::Removable, DeviceType::Tape] {
        let target = target(device_type);
        for pc in [
            PageControl::Current,
            PageControl::Changeable,
            PageControl::Default,
            PageControl::Saved,
        ] {
            for page_code in [CD_PARAMETERS_PAGE_CODE, ALL_PAGES, 0x00] {
                let mut out = [0u8; 8];
                let res = sense(&target, pc, page_code, &mut out);
                assert_eq!(res, PageSense::NotFound, "{device_type:?} {pc:?}");
                assert!(out.iter().all(|&b| b == 0), "buffer must stay untouched");
            }
        }
    }
    Ok(())
}
