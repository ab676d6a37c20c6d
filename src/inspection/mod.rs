//! Device capability table.
//!
//! Builds, once at device creation, the fixed set of D3D11 feature-support
//! records this translation layer reports, and answers typed queries against
//! it. One field (the tile-based-deferred-renderer flag) comes from a runtime
//! device property; every other field is a policy constant. The table is
//! immutable after construction and safe for unsynchronized concurrent reads.

pub mod records;

pub use records::*;

use crate::error::{FeatureError, FeatureResult};
use std::mem;

/// D3D11_FEATURE values, as consumed by the external feature-query contract.
///
/// Every value of the real enum is present; kinds without a record here take
/// the unsupported-feature error path.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Threading = 0,
    Doubles = 1,
    FormatSupport = 2,
    FormatSupport2 = 3,
    D3D10XHardwareOptions = 4,
    D3D11Options = 5,
    ArchitectureInfo = 6,
    D3D9Options = 7,
    ShaderMinPrecisionSupport = 8,
    D3D9ShadowSupport = 9,
    D3D11Options1 = 10,
    D3D9SimpleInstancingSupport = 11,
    MarkerSupport = 12,
    D3D9Options1 = 13,
    D3D11Options2 = 14,
    D3D11Options3 = 15,
    GpuVirtualAddressSupport = 16,
    D3D11Options4 = 17,
    ShaderCache = 18,
    D3D11Options5 = 19,
}

impl TryFrom<u32> for Feature {
    type Error = FeatureError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => Feature::Threading,
            1 => Feature::Doubles,
            2 => Feature::FormatSupport,
            3 => Feature::FormatSupport2,
            4 => Feature::D3D10XHardwareOptions,
            5 => Feature::D3D11Options,
            6 => Feature::ArchitectureInfo,
            7 => Feature::D3D9Options,
            8 => Feature::ShaderMinPrecisionSupport,
            9 => Feature::D3D9ShadowSupport,
            10 => Feature::D3D11Options1,
            11 => Feature::D3D9SimpleInstancingSupport,
            12 => Feature::MarkerSupport,
            13 => Feature::D3D9Options1,
            14 => Feature::D3D11Options2,
            15 => Feature::D3D11Options3,
            16 => Feature::GpuVirtualAddressSupport,
            17 => Feature::D3D11Options4,
            18 => Feature::ShaderCache,
            19 => Feature::D3D11Options5,
            other => {
                log::error!("Not supported feature: {}", other);
                return Err(FeatureError::Unsupported(other));
            }
        })
    }
}

/// Runtime properties of the rendering device the capability table is
/// built from. Implemented by the Metal device adapter in the wider layer.
pub trait DeviceProbe {
    /// Whether the device shares memory between CPU and GPU
    fn has_unified_memory(&self) -> bool;
}

/// ClearView, CopyWithOverlap, ConstantBufferPartialUpdate,
/// ConstantBufferOffsetting and MapNoOverwriteOnDynamicConstantBuffer are
/// contractually required to agree, so they all read this one constant.
const COPY_FAMILY_SUPPORTED: Bool32 = TRUE;

/// Needs MTLLogicOperation, which is private API.
#[cfg(feature = "private-api")]
const OUTPUT_MERGER_LOGIC_OP: Bool32 = TRUE;
#[cfg(not(feature = "private-api"))]
const OUTPUT_MERGER_LOGIC_OP: Bool32 = FALSE;

/// Immutable per-device table of feature-support records
#[derive(Debug, Clone)]
pub struct DeviceInspection {
    threading: Threading,
    doubles: Doubles,
    d3d10_options: D3D10XHardwareOptions,
    d3d11_options: D3D11Options,
    architecture_info: ArchitectureInfo,
    d3d9_options: D3D9Options,
    shader_min_precision: ShaderMinPrecisionSupport,
    d3d9_shadow: D3D9ShadowSupport,
    d3d11_options1: D3D11Options1,
    d3d11_options2: D3D11Options2,
    d3d11_options3: D3D11Options3,
    gpu_virtual_address: GpuVirtualAddressSupport,
    d3d11_options5: D3D11Options5,
    shader_cache: ShaderCache,
}

impl DeviceInspection {
    /// Populate every record from the device probe and the fixed policy
    /// constants. Runs once, alongside device creation.
    pub fn new(device: &dyn DeviceProbe) -> Self {
        Self {
            threading: Threading {
                driver_concurrent_creates: TRUE,
                driver_command_lists: TRUE,
            },
            // MSL has no double type (Metal Shading Language spec 2.1)
            doubles: Doubles {
                double_precision_float_shader_ops: FALSE,
            },
            d3d10_options: D3D10XHardwareOptions {
                compute_shaders_plus_raw_and_structured_buffers_via_shader_4_x: TRUE,
            },
            d3d11_options: D3D11Options {
                output_merger_logic_op: OUTPUT_MERGER_LOGIC_OP,
                uav_only_rendering_forced_sample_count: TRUE,
                discard_apis_seen_by_driver: TRUE,
                flags_for_update_and_copy_seen_by_driver: TRUE,
                clear_view: COPY_FAMILY_SUPPORTED,
                // Overlapping copies within one texture need special
                // handling in the blit path
                copy_with_overlap: COPY_FAMILY_SUPPORTED,
                constant_buffer_partial_update: COPY_FAMILY_SUPPORTED,
                constant_buffer_offsetting: COPY_FAMILY_SUPPORTED,
                map_no_overwrite_on_dynamic_constant_buffer: COPY_FAMILY_SUPPORTED,
                map_no_overwrite_on_dynamic_buffer_srv: TRUE,
                multisample_rtv_with_forced_sample_count_one: TRUE,
                sad4_shader_instructions: TRUE,
                extended_doubles_shader_instructions: FALSE,
                extended_resource_sharing: TRUE,
            },
            // TODO: make the TBDR flag configurable to fake non-TBDR hardware
            architecture_info: ArchitectureInfo {
                tile_based_deferred_renderer: if device.has_unified_memory() {
                    TRUE
                } else {
                    FALSE
                },
            },
            d3d9_options: D3D9Options {
                full_non_pow2_texture_support: TRUE,
            },
            shader_min_precision: ShaderMinPrecisionSupport {
                pixel_shader_min_precision: SHADER_MIN_PRECISION_16_BIT,
                all_other_shader_stages_min_precision: SHADER_MIN_PRECISION_16_BIT,
            },
            d3d9_shadow: D3D9ShadowSupport {
                supports_depth_as_texture_with_less_equal_comparison_filter: TRUE,
            },
            d3d11_options1: D3D11Options1 {
                tiled_resources_tier: TILED_RESOURCES_NOT_SUPPORTED,
                // Supported by the Apple10 family onwards; off until gated
                min_max_filtering: FALSE,
                clear_view_also_supports_depth_only_formats: TRUE,
                map_on_default_buffers: TRUE,
            },
            d3d11_options2: D3D11Options2 {
                ps_specified_stencil_ref_supported: TRUE,
                typed_uav_load_additional_formats: TRUE,
                rovs_supported: TRUE,
                conservative_rasterization_tier: CONSERVATIVE_RASTERIZATION_NOT_SUPPORTED,
                tiled_resources_tier: TILED_RESOURCES_NOT_SUPPORTED,
                map_on_default_textures: TRUE,
                standard_swizzle: TRUE,
                // Deliberately not reported even on unified-memory devices
                unified_memory_architecture: FALSE,
            },
            d3d11_options3: D3D11Options3 {
                vp_and_rt_array_index_from_any_shader_feeding_rasterizer: TRUE,
            },
            gpu_virtual_address: GpuVirtualAddressSupport {
                max_gpu_virtual_address_bits_per_resource: 32,
                max_gpu_virtual_address_bits_per_process: 40,
            },
            d3d11_options5: D3D11Options5 {
                shared_resource_tier: SHARED_RESOURCE_TIER_0,
            },
            shader_cache: ShaderCache {
                support_flags: SHADER_CACHE_SUPPORT_AUTOMATIC_DISK_CACHE
                    | SHADER_CACHE_SUPPORT_AUTOMATIC_INPROC_CACHE,
            },
        }
    }

    /// Copy the record for `feature` into `out`.
    ///
    /// `out.len()` must equal the record's fixed size exactly; on any error
    /// the buffer is left untouched. An unrecognized or unsupported feature
    /// kind is a terminal condition for this device, not a transient one.
    pub fn get_feature_data(&self, feature: Feature, out: &mut [u8]) -> FeatureResult<()> {
        match feature {
            Feature::Threading => copy_record(feature, &self.threading, out),
            Feature::Doubles => copy_record(feature, &self.doubles, out),
            Feature::D3D10XHardwareOptions => copy_record(feature, &self.d3d10_options, out),
            Feature::D3D11Options => copy_record(feature, &self.d3d11_options, out),
            Feature::ArchitectureInfo => copy_record(feature, &self.architecture_info, out),
            Feature::D3D9Options => copy_record(feature, &self.d3d9_options, out),
            Feature::ShaderMinPrecisionSupport => {
                copy_record(feature, &self.shader_min_precision, out)
            }
            Feature::D3D9ShadowSupport => copy_record(feature, &self.d3d9_shadow, out),
            Feature::D3D11Options1 => copy_record(feature, &self.d3d11_options1, out),
            Feature::D3D11Options2 => copy_record(feature, &self.d3d11_options2, out),
            Feature::D3D11Options3 => copy_record(feature, &self.d3d11_options3, out),
            Feature::GpuVirtualAddressSupport => {
                copy_record(feature, &self.gpu_virtual_address, out)
            }
            Feature::D3D11Options5 => copy_record(feature, &self.d3d11_options5, out),
            Feature::ShaderCache => copy_record(feature, &self.shader_cache, out),
            _ => {
                log::error!("Not supported feature: {:?}", feature);
                Err(FeatureError::Unsupported(feature as u32))
            }
        }
    }

    /// Raw-kind variant for callers holding an untyped `D3D11_FEATURE` value
    pub fn get_feature_data_raw(&self, feature: u32, out: &mut [u8]) -> FeatureResult<()> {
        self.get_feature_data(Feature::try_from(feature)?, out)
    }

    pub fn threading(&self) -> &Threading {
        &self.threading
    }

    pub fn doubles(&self) -> &Doubles {
        &self.doubles
    }

    pub fn d3d10_options(&self) -> &D3D10XHardwareOptions {
        &self.d3d10_options
    }

    pub fn d3d11_options(&self) -> &D3D11Options {
        &self.d3d11_options
    }

    pub fn architecture_info(&self) -> &ArchitectureInfo {
        &self.architecture_info
    }

    pub fn d3d9_options(&self) -> &D3D9Options {
        &self.d3d9_options
    }

    pub fn shader_min_precision(&self) -> &ShaderMinPrecisionSupport {
        &self.shader_min_precision
    }

    pub fn d3d9_shadow(&self) -> &D3D9ShadowSupport {
        &self.d3d9_shadow
    }

    pub fn d3d11_options1(&self) -> &D3D11Options1 {
        &self.d3d11_options1
    }

    pub fn d3d11_options2(&self) -> &D3D11Options2 {
        &self.d3d11_options2
    }

    pub fn d3d11_options3(&self) -> &D3D11Options3 {
        &self.d3d11_options3
    }

    pub fn gpu_virtual_address(&self) -> &GpuVirtualAddressSupport {
        &self.gpu_virtual_address
    }

    pub fn d3d11_options5(&self) -> &D3D11Options5 {
        &self.d3d11_options5
    }

    pub fn shader_cache(&self) -> &ShaderCache {
        &self.shader_cache
    }
}

/// Exact-size check and deterministic byte copy, shared by every feature kind
fn copy_record<T: FeatureRecord>(feature: Feature, record: &T, out: &mut [u8]) -> FeatureResult<()> {
    let expected = mem::size_of::<T>();
    if out.len() != expected {
        // Size mismatch is silent: callers are expected to pass the
        // contract-fixed size.
        return Err(FeatureError::SizeMismatch {
            feature,
            expected,
            provided: out.len(),
        });
    }
    out.copy_from_slice(record.as_bytes());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct UnifiedMemoryProbe(bool);

    impl DeviceProbe for UnifiedMemoryProbe {
        fn has_unified_memory(&self) -> bool {
            self.0
        }
    }

    fn inspection() -> DeviceInspection {
        DeviceInspection::new(&UnifiedMemoryProbe(true))
    }

    #[test]
    fn test_threading_record() {
        let mut buf = [0u8; mem::size_of::<Threading>()];
        inspection()
            .get_feature_data(Feature::Threading, &mut buf)
            .unwrap();
        assert_eq!(buf, [1, 0, 0, 0, 1, 0, 0, 0]);
    }

    #[test]
    fn test_doubles_not_supported() {
        let mut buf = [0xffu8; mem::size_of::<Doubles>()];
        inspection()
            .get_feature_data(Feature::Doubles, &mut buf)
            .unwrap();
        assert_eq!(buf, [0, 0, 0, 0]);
    }

    #[test]
    fn test_tbdr_flag_follows_probe() {
        let uma = DeviceInspection::new(&UnifiedMemoryProbe(true));
        assert_eq!(uma.architecture_info().tile_based_deferred_renderer, TRUE);

        let discrete = DeviceInspection::new(&UnifiedMemoryProbe(false));
        assert_eq!(
            discrete.architecture_info().tile_based_deferred_renderer,
            FALSE
        );

        // The UMA options2 field stays FALSE regardless of the probe
        assert_eq!(uma.d3d11_options2().unified_memory_architecture, FALSE);
    }

    #[test]
    fn test_copy_family_fields_agree() {
        let options = *inspection().d3d11_options();
        let family = [
            options.clear_view,
            options.copy_with_overlap,
            options.constant_buffer_partial_update,
            options.constant_buffer_offsetting,
            options.map_no_overwrite_on_dynamic_constant_buffer,
        ];
        assert!(family.iter().all(|&v| v == family[0]));
    }

    #[test]
    fn test_size_mismatch_leaves_buffer_untouched() {
        let mut buf = [0xabu8; 12];
        let err = inspection()
            .get_feature_data(Feature::Threading, &mut buf)
            .unwrap_err();
        assert!(matches!(
            err,
            FeatureError::SizeMismatch {
                expected: 8,
                provided: 12,
                ..
            }
        ));
        assert_eq!(buf, [0xab; 12]);
    }

    #[test]
    fn test_unsupported_feature() {
        let mut buf = [0u8; 64];
        for feature in [
            Feature::FormatSupport,
            Feature::FormatSupport2,
            Feature::MarkerSupport,
            Feature::D3D9Options1,
            Feature::D3D11Options4,
        ] {
            let err = inspection().get_feature_data(feature, &mut buf).unwrap_err();
            assert!(matches!(err, FeatureError::Unsupported(_)));
        }
    }

    #[test]
    fn test_unknown_raw_feature_value() {
        let mut buf = [0u8; 4];
        let err = inspection().get_feature_data_raw(99, &mut buf).unwrap_err();
        assert!(matches!(err, FeatureError::Unsupported(99)));
    }

    #[test]
    fn test_raw_dispatch_matches_typed() {
        let mut raw = [0u8; mem::size_of::<ShaderCache>()];
        inspection().get_feature_data_raw(18, &mut raw).unwrap();
        assert_eq!(raw, [3, 0, 0, 0]);
    }

    #[test]
    fn test_gpu_virtual_address_limits() {
        let table = inspection();
        let va = table.gpu_virtual_address();
        assert_eq!(va.max_gpu_virtual_address_bits_per_resource, 32);
        assert_eq!(va.max_gpu_virtual_address_bits_per_process, 40);
    }

    #[test]
    fn test_min_precision_is_16_bit() {
        let table = inspection();
        let precision = table.shader_min_precision();
        assert_eq!(
            precision.pixel_shader_min_precision,
            SHADER_MIN_PRECISION_16_BIT
        );
        assert_eq!(
            precision.all_other_shader_stages_min_precision,
            SHADER_MIN_PRECISION_16_BIT
        );
    }
}
