/*! Lower-bound matching of formats, queue families and profile
 *  prerequisites against what the native device reports.
 */

use crate::document::{FormatRequirement, Profile, QueueFamilyRequirement};
use thiserror::Error;
use vpt::{ExtensionProperties, FormatProperties, MergeMode, QueueFamilyProperties};

/// Why a profile cannot be simulated on top of a device.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Unsupported {
    #[error("device api version {} is below the required {}", version(.available), version(.required))]
    ApiVersion { required: u32, available: u32 },
    #[error("device does not expose extension `{0}`")]
    MissingExtension(String),
}

fn version(packed: &u32) -> String {
    vpt::format_api_version(*packed)
}

/// True when `native` has every feature bit `requirement` asks for, in each
/// of the three tiling/buffer masks.
pub fn matches_format(native: &FormatProperties, requirement: &FormatRequirement) -> bool {
    native.contains(&requirement.properties)
}

/// A granularity component of `0` only allows whole-extent transfers, the
/// least capable value.
fn granularity_fits(native: u32, required: u32) -> bool {
    required == 0 || (native != 0 && native <= required)
}

/// Index of the first native family at least as capable as `requirement`.
pub fn matches_queue_family(
    native: &[QueueFamilyProperties],
    requirement: &QueueFamilyRequirement,
) -> Option<usize> {
    native.iter().position(|family| {
        let granularity = &family.min_image_transfer_granularity;
        let required = &requirement.min_image_transfer_granularity;
        family.queue_flags.contains(requirement.queue_flags)
            && family.queue_count >= requirement.queue_count
            && family.timestamp_valid_bits >= requirement.timestamp_valid_bits
            && granularity_fits(granularity.width, required.width)
            && granularity_fits(granularity.height, required.height)
            && granularity_fits(granularity.depth, required.depth)
    })
}

/// Checks the prerequisites of `profile`: its API version floor and its
/// extension list.
///
/// Only major and minor take part in the version comparison; a lower patch
/// level is logged.
pub fn supports_profile(
    profile: &Profile,
    api_version: u32,
    extensions: &[ExtensionProperties],
) -> Result<(), Unsupported> {
    let required = vpt::api_version_without_patch(profile.api_version);
    let available = vpt::api_version_without_patch(api_version);
    if available < required {
        return Err(Unsupported::ApiVersion {
            required: profile.api_version,
            available: api_version,
        });
    }
    if available == required && api_version < profile.api_version {
        log::warn!(
            "Profile {} targets api version {}, device reports {}",
            profile.name,
            vpt::format_api_version(profile.api_version),
            vpt::format_api_version(api_version)
        );
    }
    for ext in profile.extensions.iter() {
        if !extensions.iter().any(|native| native.name == ext.name) {
            return Err(Unsupported::MissingExtension(ext.name.clone()));
        }
    }
    Ok(())
}

/// Folds the requirements several profiles declare for one format.
///
/// Returns `None` when nothing should be added to the native bits.
pub fn combine_format_requirements(
    requirements: &[&FormatRequirement],
    mode: MergeMode,
) -> Option<FormatProperties> {
    let (first, rest) = requirements.split_first()?;
    let combined = match mode {
        MergeMode::Passthrough => return None,
        MergeMode::Replace => first.properties,
        MergeMode::Intersect => rest
            .iter()
            .fold(first.properties, |acc, req| acc.intersection(&req.properties)),
        MergeMode::Union => rest
            .iter()
            .fold(first.properties, |acc, req| acc.union(&req.properties)),
    };
    Some(combined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ash::vk;
    use vpt::Extent3d;

    fn family(flags: vk::QueueFlags, count: u32, bits: u32, granularity: Extent3d) -> QueueFamilyProperties {
        QueueFamilyProperties {
            queue_flags: flags,
            queue_count: count,
            timestamp_valid_bits: bits,
            min_image_transfer_granularity: granularity,
        }
    }

    #[test]
    fn format_superset() {
        let native = FormatProperties {
            optimal_tiling_features: vk::FormatFeatureFlags::SAMPLED_IMAGE
                | vk::FormatFeatureFlags::BLIT_SRC,
            buffer_features: vk::FormatFeatureFlags::VERTEX_BUFFER,
            ..Default::default()
        };
        let mut requirement = FormatRequirement {
            format: vk::Format::R8G8B8A8_UNORM,
            properties: FormatProperties {
                optimal_tiling_features: vk::FormatFeatureFlags::SAMPLED_IMAGE,
                ..Default::default()
            },
        };
        assert!(matches_format(&native, &requirement));
        requirement.properties.linear_tiling_features = vk::FormatFeatureFlags::SAMPLED_IMAGE;
        assert!(!matches_format(&native, &requirement));
    }

    #[test]
    fn picks_first_capable_family() {
        let native = [
            family(vk::QueueFlags::TRANSFER, 2, 64, Extent3d::new(1, 1, 1)),
            family(
                vk::QueueFlags::GRAPHICS | vk::QueueFlags::COMPUTE,
                16,
                64,
                Extent3d::new(1, 1, 1),
            ),
        ];
        let requirement = family(vk::QueueFlags::GRAPHICS, 1, 0, Extent3d::default());
        assert_eq!(matches_queue_family(&native, &requirement), Some(1));

        let too_many = family(vk::QueueFlags::GRAPHICS, 17, 0, Extent3d::default());
        assert_eq!(matches_queue_family(&native, &too_many), None);
    }

    #[test]
    fn zero_granularity_is_least_capable() {
        let whole_extent = [family(vk::QueueFlags::TRANSFER, 1, 0, Extent3d::default())];
        let fine = family(vk::QueueFlags::TRANSFER, 1, 0, Extent3d::new(1, 1, 1));
        assert_eq!(matches_queue_family(&whole_extent, &fine), None);

        let coarse_native = [family(vk::QueueFlags::TRANSFER, 1, 0, Extent3d::new(8, 8, 8))];
        assert_eq!(matches_queue_family(&coarse_native, &fine), None);
        let coarse = family(vk::QueueFlags::TRANSFER, 1, 0, Extent3d::new(8, 8, 8));
        assert_eq!(matches_queue_family(&coarse_native, &coarse), Some(0));
        let anything = family(vk::QueueFlags::TRANSFER, 1, 0, Extent3d::default());
        assert_eq!(matches_queue_family(&whole_extent, &anything), Some(0));
    }

    #[test]
    fn format_requirement_folding() {
        let a = FormatRequirement {
            format: vk::Format::R8_UNORM,
            properties: FormatProperties {
                optimal_tiling_features: vk::FormatFeatureFlags::SAMPLED_IMAGE
                    | vk::FormatFeatureFlags::STORAGE_IMAGE,
                ..Default::default()
            },
        };
        let b = FormatRequirement {
            format: vk::Format::R8_UNORM,
            properties: FormatProperties {
                optimal_tiling_features: vk::FormatFeatureFlags::SAMPLED_IMAGE
                    | vk::FormatFeatureFlags::BLIT_DST,
                ..Default::default()
            },
        };
        let both = [&a, &b];
        assert_eq!(
            combine_format_requirements(&both, MergeMode::Intersect)
                .unwrap()
                .optimal_tiling_features,
            vk::FormatFeatureFlags::SAMPLED_IMAGE
        );
        assert_eq!(
            combine_format_requirements(&both, MergeMode::Union)
                .unwrap()
                .optimal_tiling_features,
            vk::FormatFeatureFlags::SAMPLED_IMAGE
                | vk::FormatFeatureFlags::STORAGE_IMAGE
                | vk::FormatFeatureFlags::BLIT_DST
        );
        assert_eq!(
            combine_format_requirements(&both, MergeMode::Replace),
            Some(a.properties)
        );
        assert_eq!(combine_format_requirements(&both, MergeMode::Passthrough), None);
        assert_eq!(combine_format_requirements(&[], MergeMode::Union), None);
    }
}
