//! Name tables for Vulkan enumerants that appear in profile documents.
//!
//! Profiles spell flag bits and formats by their API names
//! (`VK_FORMAT_FEATURE_SAMPLED_IMAGE_BIT`, `VK_FORMAT_R8G8B8A8_UNORM`), so the
//! loader needs a way back to the numeric values.

use ash::vk;

/// The named bits of one Vulkan flags type.
#[derive(Debug, PartialEq, Eq)]
pub struct FlagSet {
    /// API name of the flags type, e.g. `VkQueueFlags`.
    pub name: &'static str,
    pub bits: &'static [(&'static str, u64)],
}

impl FlagSet {
    /// Looks up a single bit by its API name.
    ///
    /// Vendor-suffixed aliases of promoted bits (`..._BIT_KHR`) resolve to the
    /// core bit.
    pub fn bit(&self, name: &str) -> Option<u64> {
        let exact = self
            .bits
            .iter()
            .find(|&&(bit_name, _)| bit_name == name)
            .map(|&(_, value)| value);
        if exact.is_some() {
            return exact;
        }
        let stripped = ["_KHR", "_EXT"]
            .iter()
            .find_map(|suffix| name.strip_suffix(suffix))?;
        self.bits
            .iter()
            .find(|&&(bit_name, _)| bit_name == stripped)
            .map(|&(_, value)| value)
    }

    /// Names of the bits set in `bits`, in table order.
    pub fn names(&self, bits: u64) -> Vec<&'static str> {
        self.bits
            .iter()
            .filter(|&&(_, value)| value != 0 && bits & value == value)
            .map(|&(name, _)| name)
            .collect()
    }
}

pub const FORMAT_FEATURE_FLAGS: FlagSet = FlagSet {
    name: "VkFormatFeatureFlags",
    bits: &[
        ("VK_FORMAT_FEATURE_SAMPLED_IMAGE_BIT", 0x0000_0001),
        ("VK_FORMAT_FEATURE_STORAGE_IMAGE_BIT", 0x0000_0002),
        ("VK_FORMAT_FEATURE_STORAGE_IMAGE_ATOMIC_BIT", 0x0000_0004),
        ("VK_FORMAT_FEATURE_UNIFORM_TEXEL_BUFFER_BIT", 0x0000_0008),
        ("VK_FORMAT_FEATURE_STORAGE_TEXEL_BUFFER_BIT", 0x0000_0010),
        ("VK_FORMAT_FEATURE_STORAGE_TEXEL_BUFFER_ATOMIC_BIT", 0x0000_0020),
        ("VK_FORMAT_FEATURE_VERTEX_BUFFER_BIT", 0x0000_0040),
        ("VK_FORMAT_FEATURE_COLOR_ATTACHMENT_BIT", 0x0000_0080),
        ("VK_FORMAT_FEATURE_COLOR_ATTACHMENT_BLEND_BIT", 0x0000_0100),
        ("VK_FORMAT_FEATURE_DEPTH_STENCIL_ATTACHMENT_BIT", 0x0000_0200),
        ("VK_FORMAT_FEATURE_BLIT_SRC_BIT", 0x0000_0400),
        ("VK_FORMAT_FEATURE_BLIT_DST_BIT", 0x0000_0800),
        ("VK_FORMAT_FEATURE_SAMPLED_IMAGE_FILTER_LINEAR_BIT", 0x0000_1000),
        ("VK_FORMAT_FEATURE_SAMPLED_IMAGE_FILTER_CUBIC_BIT_EXT", 0x0000_2000),
        ("VK_FORMAT_FEATURE_TRANSFER_SRC_BIT", 0x0000_4000),
        ("VK_FORMAT_FEATURE_TRANSFER_DST_BIT", 0x0000_8000),
        ("VK_FORMAT_FEATURE_SAMPLED_IMAGE_FILTER_MINMAX_BIT", 0x0001_0000),
        ("VK_FORMAT_FEATURE_MIDPOINT_CHROMA_SAMPLES_BIT", 0x0002_0000),
        (
            "VK_FORMAT_FEATURE_SAMPLED_IMAGE_YCBCR_CONVERSION_LINEAR_FILTER_BIT",
            0x0004_0000,
        ),
        (
            "VK_FORMAT_FEATURE_SAMPLED_IMAGE_YCBCR_CONVERSION_SEPARATE_RECONSTRUCTION_FILTER_BIT",
            0x0008_0000,
        ),
        (
            "VK_FORMAT_FEATURE_SAMPLED_IMAGE_YCBCR_CONVERSION_CHROMA_RECONSTRUCTION_EXPLICIT_BIT",
            0x0010_0000,
        ),
        (
            "VK_FORMAT_FEATURE_SAMPLED_IMAGE_YCBCR_CONVERSION_CHROMA_RECONSTRUCTION_EXPLICIT_FORCEABLE_BIT",
            0x0020_0000,
        ),
        ("VK_FORMAT_FEATURE_DISJOINT_BIT", 0x0040_0000),
        ("VK_FORMAT_FEATURE_COSITED_CHROMA_SAMPLES_BIT", 0x0080_0000),
    ],
};

pub const QUEUE_FLAGS: FlagSet = FlagSet {
    name: "VkQueueFlags",
    bits: &[
        ("VK_QUEUE_GRAPHICS_BIT", 0x01),
        ("VK_QUEUE_COMPUTE_BIT", 0x02),
        ("VK_QUEUE_TRANSFER_BIT", 0x04),
        ("VK_QUEUE_SPARSE_BINDING_BIT", 0x08),
        ("VK_QUEUE_PROTECTED_BIT", 0x10),
        ("VK_QUEUE_VIDEO_DECODE_BIT_KHR", 0x20),
        ("VK_QUEUE_VIDEO_ENCODE_BIT_KHR", 0x40),
        ("VK_QUEUE_OPTICAL_FLOW_BIT_NV", 0x100),
    ],
};

pub const SAMPLE_COUNT_FLAGS: FlagSet = FlagSet {
    name: "VkSampleCountFlags",
    bits: &[
        ("VK_SAMPLE_COUNT_1_BIT", 0x01),
        ("VK_SAMPLE_COUNT_2_BIT", 0x02),
        ("VK_SAMPLE_COUNT_4_BIT", 0x04),
        ("VK_SAMPLE_COUNT_8_BIT", 0x08),
        ("VK_SAMPLE_COUNT_16_BIT", 0x10),
        ("VK_SAMPLE_COUNT_32_BIT", 0x20),
        ("VK_SAMPLE_COUNT_64_BIT", 0x40),
    ],
};

pub const SHADER_STAGE_FLAGS: FlagSet = FlagSet {
    name: "VkShaderStageFlags",
    bits: &[
        ("VK_SHADER_STAGE_VERTEX_BIT", 0x0001),
        ("VK_SHADER_STAGE_TESSELLATION_CONTROL_BIT", 0x0002),
        ("VK_SHADER_STAGE_TESSELLATION_EVALUATION_BIT", 0x0004),
        ("VK_SHADER_STAGE_GEOMETRY_BIT", 0x0008),
        ("VK_SHADER_STAGE_FRAGMENT_BIT", 0x0010),
        ("VK_SHADER_STAGE_COMPUTE_BIT", 0x0020),
        ("VK_SHADER_STAGE_TASK_BIT_EXT", 0x0040),
        ("VK_SHADER_STAGE_MESH_BIT_EXT", 0x0080),
        ("VK_SHADER_STAGE_RAYGEN_BIT_KHR", 0x0100),
        ("VK_SHADER_STAGE_ANY_HIT_BIT_KHR", 0x0200),
        ("VK_SHADER_STAGE_CLOSEST_HIT_BIT_KHR", 0x0400),
        ("VK_SHADER_STAGE_MISS_BIT_KHR", 0x0800),
        ("VK_SHADER_STAGE_INTERSECTION_BIT_KHR", 0x1000),
        ("VK_SHADER_STAGE_CALLABLE_BIT_KHR", 0x2000),
    ],
};

pub const SUBGROUP_FEATURE_FLAGS: FlagSet = FlagSet {
    name: "VkSubgroupFeatureFlags",
    bits: &[
        ("VK_SUBGROUP_FEATURE_BASIC_BIT", 0x001),
        ("VK_SUBGROUP_FEATURE_VOTE_BIT", 0x002),
        ("VK_SUBGROUP_FEATURE_ARITHMETIC_BIT", 0x004),
        ("VK_SUBGROUP_FEATURE_BALLOT_BIT", 0x008),
        ("VK_SUBGROUP_FEATURE_SHUFFLE_BIT", 0x010),
        ("VK_SUBGROUP_FEATURE_SHUFFLE_RELATIVE_BIT", 0x020),
        ("VK_SUBGROUP_FEATURE_CLUSTERED_BIT", 0x040),
        ("VK_SUBGROUP_FEATURE_QUAD_BIT", 0x080),
        ("VK_SUBGROUP_FEATURE_PARTITIONED_BIT_NV", 0x100),
    ],
};

pub const RESOLVE_MODE_FLAGS: FlagSet = FlagSet {
    name: "VkResolveModeFlags",
    bits: &[
        ("VK_RESOLVE_MODE_SAMPLE_ZERO_BIT", 0x01),
        ("VK_RESOLVE_MODE_AVERAGE_BIT", 0x02),
        ("VK_RESOLVE_MODE_MIN_BIT", 0x04),
        ("VK_RESOLVE_MODE_MAX_BIT", 0x08),
    ],
};

macro_rules! formats {
    ($($format:ident),* $(,)?) => {
        static FORMATS: &[(&str, vk::Format)] = &[
            $((concat!("VK_FORMAT_", stringify!($format)), vk::Format::$format),)*
        ];
    };
}

formats! {
    UNDEFINED,
    R4G4_UNORM_PACK8,
    R4G4B4A4_UNORM_PACK16,
    B4G4R4A4_UNORM_PACK16,
    R5G6B5_UNORM_PACK16,
    B5G6R5_UNORM_PACK16,
    R5G5B5A1_UNORM_PACK16,
    B5G5R5A1_UNORM_PACK16,
    A1R5G5B5_UNORM_PACK16,
    R8_UNORM,
    R8_SNORM,
    R8_USCALED,
    R8_SSCALED,
    R8_UINT,
    R8_SINT,
    R8_SRGB,
    R8G8_UNORM,
    R8G8_SNORM,
    R8G8_USCALED,
    R8G8_SSCALED,
    R8G8_UINT,
    R8G8_SINT,
    R8G8_SRGB,
    R8G8B8_UNORM,
    R8G8B8_SNORM,
    R8G8B8_USCALED,
    R8G8B8_SSCALED,
    R8G8B8_UINT,
    R8G8B8_SINT,
    R8G8B8_SRGB,
    B8G8R8_UNORM,
    B8G8R8_SNORM,
    B8G8R8_USCALED,
    B8G8R8_SSCALED,
    B8G8R8_UINT,
    B8G8R8_SINT,
    B8G8R8_SRGB,
    R8G8B8A8_UNORM,
    R8G8B8A8_SNORM,
    R8G8B8A8_USCALED,
    R8G8B8A8_SSCALED,
    R8G8B8A8_UINT,
    R8G8B8A8_SINT,
    R8G8B8A8_SRGB,
    B8G8R8A8_UNORM,
    B8G8R8A8_SNORM,
    B8G8R8A8_USCALED,
    B8G8R8A8_SSCALED,
    B8G8R8A8_UINT,
    B8G8R8A8_SINT,
    B8G8R8A8_SRGB,
    A8B8G8R8_UNORM_PACK32,
    A8B8G8R8_SNORM_PACK32,
    A8B8G8R8_USCALED_PACK32,
    A8B8G8R8_SSCALED_PACK32,
    A8B8G8R8_UINT_PACK32,
    A8B8G8R8_SINT_PACK32,
    A8B8G8R8_SRGB_PACK32,
    A2R10G10B10_UNORM_PACK32,
    A2R10G10B10_SNORM_PACK32,
    A2R10G10B10_USCALED_PACK32,
    A2R10G10B10_SSCALED_PACK32,
    A2R10G10B10_UINT_PACK32,
    A2R10G10B10_SINT_PACK32,
    A2B10G10R10_UNORM_PACK32,
    A2B10G10R10_SNORM_PACK32,
    A2B10G10R10_USCALED_PACK32,
    A2B10G10R10_SSCALED_PACK32,
    A2B10G10R10_UINT_PACK32,
    A2B10G10R10_SINT_PACK32,
    R16_UNORM,
    R16_SNORM,
    R16_USCALED,
    R16_SSCALED,
    R16_UINT,
    R16_SINT,
    R16_SFLOAT,
    R16G16_UNORM,
    R16G16_SNORM,
    R16G16_USCALED,
    R16G16_SSCALED,
    R16G16_UINT,
    R16G16_SINT,
    R16G16_SFLOAT,
    R16G16B16_UNORM,
    R16G16B16_SNORM,
    R16G16B16_USCALED,
    R16G16B16_SSCALED,
    R16G16B16_UINT,
    R16G16B16_SINT,
    R16G16B16_SFLOAT,
    R16G16B16A16_UNORM,
    R16G16B16A16_SNORM,
    R16G16B16A16_USCALED,
    R16G16B16A16_SSCALED,
    R16G16B16A16_UINT,
    R16G16B16A16_SINT,
    R16G16B16A16_SFLOAT,
    R32_UINT,
    R32_SINT,
    R32_SFLOAT,
    R32G32_UINT,
    R32G32_SINT,
    R32G32_SFLOAT,
    R32G32B32_UINT,
    R32G32B32_SINT,
    R32G32B32_SFLOAT,
    R32G32B32A32_UINT,
    R32G32B32A32_SINT,
    R32G32B32A32_SFLOAT,
    R64_UINT,
    R64_SINT,
    R64_SFLOAT,
    R64G64_UINT,
    R64G64_SINT,
    R64G64_SFLOAT,
    R64G64B64_UINT,
    R64G64B64_SINT,
    R64G64B64_SFLOAT,
    R64G64B64A64_UINT,
    R64G64B64A64_SINT,
    R64G64B64A64_SFLOAT,
    B10G11R11_UFLOAT_PACK32,
    E5B9G9R9_UFLOAT_PACK32,
    D16_UNORM,
    X8_D24_UNORM_PACK32,
    D32_SFLOAT,
    S8_UINT,
    D16_UNORM_S8_UINT,
    D24_UNORM_S8_UINT,
    D32_SFLOAT_S8_UINT,
    BC1_RGB_UNORM_BLOCK,
    BC1_RGB_SRGB_BLOCK,
    BC1_RGBA_UNORM_BLOCK,
    BC1_RGBA_SRGB_BLOCK,
    BC2_UNORM_BLOCK,
    BC2_SRGB_BLOCK,
    BC3_UNORM_BLOCK,
    BC3_SRGB_BLOCK,
    BC4_UNORM_BLOCK,
    BC4_SNORM_BLOCK,
    BC5_UNORM_BLOCK,
    BC5_SNORM_BLOCK,
    BC6H_UFLOAT_BLOCK,
    BC6H_SFLOAT_BLOCK,
    BC7_UNORM_BLOCK,
    BC7_SRGB_BLOCK,
    ETC2_R8G8B8_UNORM_BLOCK,
    ETC2_R8G8B8_SRGB_BLOCK,
    ETC2_R8G8B8A1_UNORM_BLOCK,
    ETC2_R8G8B8A1_SRGB_BLOCK,
    ETC2_R8G8B8A8_UNORM_BLOCK,
    ETC2_R8G8B8A8_SRGB_BLOCK,
    EAC_R11_UNORM_BLOCK,
    EAC_R11_SNORM_BLOCK,
    EAC_R11G11_UNORM_BLOCK,
    EAC_R11G11_SNORM_BLOCK,
    ASTC_4X4_UNORM_BLOCK,
    ASTC_4X4_SRGB_BLOCK,
    ASTC_5X4_UNORM_BLOCK,
    ASTC_5X4_SRGB_BLOCK,
    ASTC_5X5_UNORM_BLOCK,
    ASTC_5X5_SRGB_BLOCK,
    ASTC_6X5_UNORM_BLOCK,
    ASTC_6X5_SRGB_BLOCK,
    ASTC_6X6_UNORM_BLOCK,
    ASTC_6X6_SRGB_BLOCK,
    ASTC_8X5_UNORM_BLOCK,
    ASTC_8X5_SRGB_BLOCK,
    ASTC_8X6_UNORM_BLOCK,
    ASTC_8X6_SRGB_BLOCK,
    ASTC_8X8_UNORM_BLOCK,
    ASTC_8X8_SRGB_BLOCK,
    ASTC_10X5_UNORM_BLOCK,
    ASTC_10X5_SRGB_BLOCK,
    ASTC_10X6_UNORM_BLOCK,
    ASTC_10X6_SRGB_BLOCK,
    ASTC_10X8_UNORM_BLOCK,
    ASTC_10X8_SRGB_BLOCK,
    ASTC_10X10_UNORM_BLOCK,
    ASTC_10X10_SRGB_BLOCK,
    ASTC_12X10_UNORM_BLOCK,
    ASTC_12X10_SRGB_BLOCK,
    ASTC_12X12_UNORM_BLOCK,
    ASTC_12X12_SRGB_BLOCK,
}

/// Resolves a `VK_FORMAT_*` name. ASTC block sizes match in either case
/// (`ASTC_4x4` and `ASTC_4X4`).
pub fn format_from_name(name: &str) -> Option<vk::Format> {
    FORMATS
        .iter()
        .find(|&&(format_name, _)| format_name.eq_ignore_ascii_case(name))
        .map(|&(_, format)| format)
}

pub fn format_name(format: vk::Format) -> Option<&'static str> {
    FORMATS
        .iter()
        .find(|&&(_, f)| f == format)
        .map(|&(name, _)| name)
}
