//! Fixed-layout D3D11 feature-data records.
//!
//! Every record mirrors the corresponding `D3D11_FEATURE_DATA_*` struct from
//! the Windows SDK headers byte-for-byte, including field order, because
//! callers may be preexisting binaries compiled against that layout. All
//! fields are 4 bytes wide, so the structs carry no padding and copying them
//! out as raw bytes is deterministic.

use std::mem;
use std::slice;

/// Win32-style 4-byte boolean as used by the D3D11 feature structs
pub type Bool32 = u32;

/// Win32 TRUE
pub const TRUE: Bool32 = 1;
/// Win32 FALSE
pub const FALSE: Bool32 = 0;

/// D3D11_TILED_RESOURCES_NOT_SUPPORTED
pub const TILED_RESOURCES_NOT_SUPPORTED: u32 = 0;
/// D3D11_CONSERVATIVE_RASTERIZATION_NOT_SUPPORTED
pub const CONSERVATIVE_RASTERIZATION_NOT_SUPPORTED: u32 = 0;
/// D3D11_SHARED_RESOURCE_TIER_0
pub const SHARED_RESOURCE_TIER_0: u32 = 0;
/// D3D11_SHADER_MIN_PRECISION_16_BIT
pub const SHADER_MIN_PRECISION_16_BIT: u32 = 0x2;
/// D3D11_SHADER_CACHE_SUPPORT_AUTOMATIC_INPROC_CACHE
pub const SHADER_CACHE_SUPPORT_AUTOMATIC_INPROC_CACHE: u32 = 0x1;
/// D3D11_SHADER_CACHE_SUPPORT_AUTOMATIC_DISK_CACHE
pub const SHADER_CACHE_SUPPORT_AUTOMATIC_DISK_CACHE: u32 = 0x2;

/// Byte view of a fixed-layout feature record.
///
/// Sound for the `#[repr(C)]` all-`u32` structs in this module only; do not
/// implement it for anything with padding.
pub(crate) trait FeatureRecord: Copy + 'static {
    fn as_bytes(&self) -> &[u8] {
        // Every implementor is repr(C) with exclusively 4-byte fields.
        unsafe { slice::from_raw_parts(self as *const Self as *const u8, mem::size_of::<Self>()) }
    }
}

/// D3D11_FEATURE_DATA_THREADING
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Threading {
    pub driver_concurrent_creates: Bool32,
    pub driver_command_lists: Bool32,
}

/// D3D11_FEATURE_DATA_DOUBLES
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Doubles {
    pub double_precision_float_shader_ops: Bool32,
}

/// D3D11_FEATURE_DATA_D3D10_X_HARDWARE_OPTIONS
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct D3D10XHardwareOptions {
    pub compute_shaders_plus_raw_and_structured_buffers_via_shader_4_x: Bool32,
}

/// D3D11_FEATURE_DATA_D3D11_OPTIONS
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct D3D11Options {
    pub output_merger_logic_op: Bool32,
    pub uav_only_rendering_forced_sample_count: Bool32,
    pub discard_apis_seen_by_driver: Bool32,
    pub flags_for_update_and_copy_seen_by_driver: Bool32,
    pub clear_view: Bool32,
    pub copy_with_overlap: Bool32,
    pub constant_buffer_partial_update: Bool32,
    pub constant_buffer_offsetting: Bool32,
    pub map_no_overwrite_on_dynamic_constant_buffer: Bool32,
    pub map_no_overwrite_on_dynamic_buffer_srv: Bool32,
    pub multisample_rtv_with_forced_sample_count_one: Bool32,
    pub sad4_shader_instructions: Bool32,
    pub extended_doubles_shader_instructions: Bool32,
    pub extended_resource_sharing: Bool32,
}

/// D3D11_FEATURE_DATA_ARCHITECTURE_INFO
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchitectureInfo {
    pub tile_based_deferred_renderer: Bool32,
}

/// D3D11_FEATURE_DATA_D3D9_OPTIONS
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct D3D9Options {
    pub full_non_pow2_texture_support: Bool32,
}

/// D3D11_FEATURE_DATA_SHADER_MIN_PRECISION_SUPPORT
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShaderMinPrecisionSupport {
    pub pixel_shader_min_precision: u32,
    pub all_other_shader_stages_min_precision: u32,
}

/// D3D11_FEATURE_DATA_D3D9_SHADOW_SUPPORT
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct D3D9ShadowSupport {
    pub supports_depth_as_texture_with_less_equal_comparison_filter: Bool32,
}

/// D3D11_FEATURE_DATA_D3D11_OPTIONS1
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct D3D11Options1 {
    pub tiled_resources_tier: u32,
    pub min_max_filtering: Bool32,
    pub clear_view_also_supports_depth_only_formats: Bool32,
    pub map_on_default_buffers: Bool32,
}

/// D3D11_FEATURE_DATA_D3D11_OPTIONS2
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct D3D11Options2 {
    pub ps_specified_stencil_ref_supported: Bool32,
    pub typed_uav_load_additional_formats: Bool32,
    pub rovs_supported: Bool32,
    pub conservative_rasterization_tier: u32,
    pub tiled_resources_tier: u32,
    pub map_on_default_textures: Bool32,
    pub standard_swizzle: Bool32,
    pub unified_memory_architecture: Bool32,
}

/// D3D11_FEATURE_DATA_D3D11_OPTIONS3
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct D3D11Options3 {
    pub vp_and_rt_array_index_from_any_shader_feeding_rasterizer: Bool32,
}

/// D3D11_FEATURE_DATA_GPU_VIRTUAL_ADDRESS_SUPPORT
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpuVirtualAddressSupport {
    pub max_gpu_virtual_address_bits_per_resource: u32,
    pub max_gpu_virtual_address_bits_per_process: u32,
}

/// D3D11_FEATURE_DATA_D3D11_OPTIONS5
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct D3D11Options5 {
    pub shared_resource_tier: u32,
}

/// D3D11_FEATURE_DATA_SHADER_CACHE
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShaderCache {
    pub support_flags: u32,
}

impl FeatureRecord for Threading {}
impl FeatureRecord for Doubles {}
impl FeatureRecord for D3D10XHardwareOptions {}
impl FeatureRecord for D3D11Options {}
impl FeatureRecord for ArchitectureInfo {}
impl FeatureRecord for D3D9Options {}
impl FeatureRecord for ShaderMinPrecisionSupport {}
impl FeatureRecord for D3D9ShadowSupport {}
impl FeatureRecord for D3D11Options1 {}
impl FeatureRecord for D3D11Options2 {}
impl FeatureRecord for D3D11Options3 {}
impl FeatureRecord for GpuVirtualAddressSupport {}
impl FeatureRecord for D3D11Options5 {}
impl FeatureRecord for ShaderCache {}
