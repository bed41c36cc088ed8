/*! Types shared by every layer of the Vulkan profiles simulation engine.
 *
 *  This crate holds plain data only: the struct registry with its field tables,
 *  capability block values, Vulkan name tables and the small structures the
 *  native layer reports (formats, queue families, extensions).
 */

#![allow(
    // We don't use syntax sugar where it's not necessary.
    clippy::match_like_matches_macro,
)]
#![warn(unsafe_op_in_unsafe_fn)]

use ash::vk;
use serde::Deserialize;
use std::fmt;

mod block;
pub mod names;
pub mod registry;
mod value;

pub use block::{CapabilityBlock, FieldError};
pub use registry::{
    Autoness, Bound, Category, FieldDescriptor, FieldKind, Promotion, Registry, Related,
    StructDescriptor,
};
pub use value::{Scalar, ScalarKind, Value, MAX_ARRAY_LEN, MAX_BYTES_LEN};

/// How the declared values of several profiles combine with each other and
/// with the native device.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeMode {
    /// Only what every declaring profile allows.
    Intersect,
    /// Everything any declaring profile or the native device allows.
    Union,
    /// The first declaring profile wins.
    Replace,
    /// Report the native device unchanged.
    Passthrough,
}

impl MergeMode {
    /// Parses either the document spelling (`intersect`) or the option
    /// spelling (`MERGE_MODE_INTERSECT`).
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.strip_prefix("MERGE_MODE_").unwrap_or(name);
        match name.to_ascii_lowercase().as_str() {
            "intersect" => Some(Self::Intersect),
            "union" => Some(Self::Union),
            "replace" => Some(Self::Replace),
            "passthrough" => Some(Self::Passthrough),
            _ => None,
        }
    }
}

impl fmt::Display for MergeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match *self {
            Self::Intersect => "intersect",
            Self::Union => "union",
            Self::Replace => "replace",
            Self::Passthrough => "passthrough",
        })
    }
}

bitflags::bitflags! {
    /// Capability categories the simulation rewrites. A cleared bit leaves
    /// that category native.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct SimulateCapabilities: u32 {
        const FEATURES = 1 << 0;
        const PROPERTIES = 1 << 1;
        const EXTENSIONS = 1 << 2;
        const FORMATS = 1 << 3;
        const QUEUE_FAMILY_PROPERTIES = 1 << 4;
    }
}

impl SimulateCapabilities {
    /// Parses one `SIMULATE_*_BIT` option value.
    pub fn from_option_name(name: &str) -> Option<Self> {
        Some(match name {
            "SIMULATE_FEATURES_BIT" => Self::FEATURES,
            "SIMULATE_PROPERTIES_BIT" => Self::PROPERTIES,
            "SIMULATE_EXTENSIONS_BIT" => Self::EXTENSIONS,
            "SIMULATE_FORMATS_BIT" => Self::FORMATS,
            "SIMULATE_QUEUE_FAMILY_PROPERTIES_BIT" => Self::QUEUE_FAMILY_PROPERTIES,
            "SIMULATE_MAX_ENUM" => Self::all(),
            _ => return None,
        })
    }
}

impl Default for SimulateCapabilities {
    fn default() -> Self {
        Self::all()
    }
}

/// An entry of the device extension list.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExtensionProperties {
    pub name: String,
    pub spec_version: u32,
}

impl ExtensionProperties {
    pub fn new(name: impl Into<String>, spec_version: u32) -> Self {
        Self {
            name: name.into(),
            spec_version,
        }
    }
}

/// Format support, split the way the API reports it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FormatProperties {
    pub linear_tiling_features: vk::FormatFeatureFlags,
    pub optimal_tiling_features: vk::FormatFeatureFlags,
    pub buffer_features: vk::FormatFeatureFlags,
}

impl FormatProperties {
    /// True when every bit of `other` is present in `self`.
    pub fn contains(&self, other: &Self) -> bool {
        self.linear_tiling_features
            .contains(other.linear_tiling_features)
            && self
                .optimal_tiling_features
                .contains(other.optimal_tiling_features)
            && self.buffer_features.contains(other.buffer_features)
    }

    pub fn union(&self, other: &Self) -> Self {
        Self {
            linear_tiling_features: self.linear_tiling_features | other.linear_tiling_features,
            optimal_tiling_features: self.optimal_tiling_features
                | other.optimal_tiling_features,
            buffer_features: self.buffer_features | other.buffer_features,
        }
    }

    pub fn intersection(&self, other: &Self) -> Self {
        Self {
            linear_tiling_features: self.linear_tiling_features & other.linear_tiling_features,
            optimal_tiling_features: self.optimal_tiling_features
                & other.optimal_tiling_features,
            buffer_features: self.buffer_features & other.buffer_features,
        }
    }

    /// Bits of `self` missing from `native`.
    pub fn missing_from(&self, native: &Self) -> Self {
        Self {
            linear_tiling_features: self.linear_tiling_features
                & !native.linear_tiling_features,
            optimal_tiling_features: self.optimal_tiling_features
                & !native.optimal_tiling_features,
            buffer_features: self.buffer_features & !native.buffer_features,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.linear_tiling_features.is_empty()
            && self.optimal_tiling_features.is_empty()
            && self.buffer_features.is_empty()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Extent3d {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
}

impl Extent3d {
    pub const fn new(width: u32, height: u32, depth: u32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }
}

/// One queue family as reported by the native device, or as required by a
/// profile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct QueueFamilyProperties {
    pub queue_flags: vk::QueueFlags,
    pub queue_count: u32,
    pub timestamp_valid_bits: u32,
    pub min_image_transfer_granularity: Extent3d,
}

/// What the device selector looks at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeviceIdentity {
    pub name: String,
    pub uuid: [u8; vk::UUID_SIZE],
    pub vendor_id: u32,
    pub device_id: u32,
    pub device_type: vk::PhysicalDeviceType,
}

/// Parses `"major.minor.patch"` (patch optional) into a packed API version.
pub fn parse_api_version(text: &str) -> Option<u32> {
    let mut parts = text.trim().split('.');
    let major = parts.next()?.parse::<u32>().ok()?;
    let minor = parts.next()?.parse::<u32>().ok()?;
    let patch = match parts.next() {
        Some(part) => part.parse::<u32>().ok()?,
        None => 0,
    };
    if parts.next().is_some() || major > 0x7f || minor > 0x3ff || patch > 0xfff {
        return None;
    }
    Some(vk::make_api_version(0, major, minor, patch))
}

/// Formats a packed API version as `"major.minor.patch"`.
pub fn format_api_version(version: u32) -> String {
    format!(
        "{}.{}.{}",
        vk::api_version_major(version),
        vk::api_version_minor(version),
        vk::api_version_patch(version)
    )
}

/// The same version with the patch component cleared.
pub fn api_version_without_patch(version: u32) -> u32 {
    vk::make_api_version(
        vk::api_version_variant(version),
        vk::api_version_major(version),
        vk::api_version_minor(version),
        0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_versions() {
        assert_eq!(
            parse_api_version("1.2.198"),
            Some(vk::make_api_version(0, 1, 2, 198))
        );
        assert_eq!(parse_api_version("1.3"), Some(vk::API_VERSION_1_3));
        assert_eq!(parse_api_version("1.x.0"), None);
        assert_eq!(parse_api_version("1.2.3.4"), None);
        assert_eq!(format_api_version(vk::API_VERSION_1_1), "1.1.0");
        assert_eq!(
            api_version_without_patch(vk::make_api_version(0, 1, 2, 198)),
            vk::API_VERSION_1_2
        );
    }

    #[test]
    fn merge_mode_names() {
        assert_eq!(MergeMode::from_name("union"), Some(MergeMode::Union));
        assert_eq!(
            MergeMode::from_name("MERGE_MODE_INTERSECT"),
            Some(MergeMode::Intersect)
        );
        assert_eq!(MergeMode::from_name("merge"), None);
        let mode: MergeMode = serde::Deserialize::deserialize(
            serde::de::value::StrDeserializer::<serde::de::value::Error>::new("passthrough"),
        )
        .unwrap();
        assert_eq!(mode, MergeMode::Passthrough);
    }

    #[test]
    fn simulate_bit_names() {
        assert_eq!(
            SimulateCapabilities::from_option_name("SIMULATE_FORMATS_BIT"),
            Some(SimulateCapabilities::FORMATS)
        );
        assert_eq!(
            SimulateCapabilities::from_option_name("SIMULATE_MAX_ENUM"),
            Some(SimulateCapabilities::all())
        );
        assert_eq!(SimulateCapabilities::from_option_name("FORMATS"), None);
    }

    #[test]
    fn format_bits() {
        let native = FormatProperties {
            optimal_tiling_features: vk::FormatFeatureFlags::SAMPLED_IMAGE
                | vk::FormatFeatureFlags::COLOR_ATTACHMENT,
            ..Default::default()
        };
        let wanted = FormatProperties {
            optimal_tiling_features: vk::FormatFeatureFlags::SAMPLED_IMAGE,
            ..Default::default()
        };
        assert!(native.contains(&wanted));
        assert!(!wanted.contains(&native));
        assert!(wanted.missing_from(&native).is_empty());
        assert_eq!(
            wanted.missing_from(&FormatProperties::default()),
            wanted
        );
    }
}
