//! Capability-table integration tests
//!
//! Verifies every supported feature kind byte-for-byte against the
//! documented policy values, and the exact-size query contract.

use d3d11_inspect::inspection::records;
use d3d11_inspect::{DeviceInspection, DeviceProbe, Feature, FeatureError};

struct Probe {
    unified_memory: bool,
}

impl DeviceProbe for Probe {
    fn has_unified_memory(&self) -> bool {
        self.unified_memory
    }
}

fn inspection() -> DeviceInspection {
    let _ = env_logger::builder().is_test(true).try_init();
    DeviceInspection::new(&Probe {
        unified_memory: true,
    })
}

fn words(values: &[u32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

fn query(table: &DeviceInspection, feature: Feature, size: usize) -> Vec<u8> {
    let mut buf = vec![0u8; size];
    table
        .get_feature_data(feature, &mut buf)
        .unwrap_or_else(|e| panic!("query for {feature:?} failed: {e}"));
    buf
}

#[test]
fn every_supported_feature_matches_policy_bytes() {
    let table = inspection();

    let expected: &[(Feature, Vec<u8>)] = &[
        (Feature::Threading, words(&[1, 1])),
        (Feature::Doubles, words(&[0])),
        (Feature::D3D10XHardwareOptions, words(&[1])),
        (Feature::ArchitectureInfo, words(&[1])),
        (Feature::D3D9Options, words(&[1])),
        (
            Feature::ShaderMinPrecisionSupport,
            words(&[
                records::SHADER_MIN_PRECISION_16_BIT,
                records::SHADER_MIN_PRECISION_16_BIT,
            ]),
        ),
        (Feature::D3D9ShadowSupport, words(&[1])),
        (Feature::D3D11Options1, words(&[0, 0, 1, 1])),
        (Feature::D3D11Options2, words(&[1, 1, 1, 0, 0, 1, 1, 0])),
        (Feature::D3D11Options3, words(&[1])),
        (Feature::GpuVirtualAddressSupport, words(&[32, 40])),
        (Feature::D3D11Options5, words(&[0])),
        (Feature::ShaderCache, words(&[0x3])),
    ];

    for (feature, bytes) in expected {
        assert_eq!(
            &query(&table, *feature, bytes.len()),
            bytes,
            "record bytes for {feature:?}"
        );
    }
}

#[cfg(feature = "private-api")]
#[test]
fn d3d11_options_bytes_with_private_api() {
    let table = inspection();
    let expected = words(&[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 1]);
    assert_eq!(query(&table, Feature::D3D11Options, expected.len()), expected);
}

#[cfg(not(feature = "private-api"))]
#[test]
fn d3d11_options_bytes_without_private_api() {
    let table = inspection();
    let expected = words(&[0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 1]);
    assert_eq!(query(&table, Feature::D3D11Options, expected.len()), expected);
}

#[test]
fn wrong_sizes_fail_without_writing() {
    let table = inspection();

    for feature in [
        Feature::Threading,
        Feature::Doubles,
        Feature::D3D11Options,
        Feature::D3D11Options2,
        Feature::GpuVirtualAddressSupport,
    ] {
        // none of these sizes matches any record's fixed size
        for size in [0usize, 1, 3, 7, 57, 256] {
            let mut buf = vec![0x5au8; size];
            match table.get_feature_data(feature, &mut buf) {
                Err(FeatureError::SizeMismatch { provided, .. }) => {
                    assert_eq!(provided, size);
                    assert!(buf.iter().all(|&b| b == 0x5a), "buffer written on error");
                }
                other => panic!("expected size mismatch, got {other:?}"),
            }
        }
    }
}

#[test]
fn unsupported_kinds_fail_at_any_size() {
    let table = inspection();

    for feature in [
        Feature::FormatSupport,
        Feature::FormatSupport2,
        Feature::D3D9SimpleInstancingSupport,
        Feature::MarkerSupport,
        Feature::D3D9Options1,
        Feature::D3D11Options4,
    ] {
        for size in [0usize, 4, 64] {
            let mut buf = vec![0u8; size];
            assert!(matches!(
                table.get_feature_data(feature, &mut buf),
                Err(FeatureError::Unsupported(_))
            ));
        }
    }
}

#[test]
fn tbdr_flag_tracks_device_probe() {
    let discrete = DeviceInspection::new(&Probe {
        unified_memory: false,
    });
    assert_eq!(query(&discrete, Feature::ArchitectureInfo, 4), words(&[0]));

    // Options2 never reports UMA, whatever the probe says
    assert_eq!(
        query(&discrete, Feature::D3D11Options2, 32),
        words(&[1, 1, 1, 0, 0, 1, 1, 0])
    );
}

#[test]
fn linked_copy_family_fields_agree() {
    let options = *inspection().d3d11_options();
    assert_eq!(options.clear_view, options.copy_with_overlap);
    assert_eq!(options.clear_view, options.constant_buffer_partial_update);
    assert_eq!(options.clear_view, options.constant_buffer_offsetting);
    assert_eq!(
        options.clear_view,
        options.map_no_overwrite_on_dynamic_constant_buffer
    );
}
