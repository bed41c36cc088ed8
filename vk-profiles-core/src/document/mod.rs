/*! The in-memory form of a profiles document.
 *
 *  A document defines named capability sets and named profiles built from
 *  them. Loading resolves every name against the struct registry, so that a
 *  loaded [`Profile`] only holds blocks and values the engine understands.
 */

use crate::{error::SimulationError, matcher};
use ash::vk;
use fxhash::{FxHashMap, FxHashSet};
use thiserror::Error;
use vpt::{CapabilityBlock, ExtensionProperties, FormatProperties, MergeMode, QueueFamilyProperties};

mod load;

/// A format together with the feature bits a profile requires for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatRequirement {
    pub format: vk::Format,
    pub properties: FormatProperties,
}

/// Lower bounds on one queue family: at least `queue_count` queues and
/// `timestamp_valid_bits`, all of `queue_flags`, and a transfer granularity no
/// coarser than `min_image_transfer_granularity`.
pub type QueueFamilyRequirement = QueueFamilyProperties;

/// A capability block a profile declares, with its explicit merge mode.
#[derive(Clone, Debug, PartialEq)]
pub struct DeclaredBlock {
    pub block: CapabilityBlock,
    pub merge_mode: Option<MergeMode>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Profile {
    pub name: String,
    pub version: u32,
    pub label: Option<String>,
    pub description: Option<String>,
    /// Packed API version floor.
    pub api_version: u32,
    pub fallback: Vec<String>,
    pub extensions: Vec<ExtensionProperties>,
    pub blocks: Vec<DeclaredBlock>,
    pub formats: Vec<FormatRequirement>,
    pub queue_families: Vec<QueueFamilyRequirement>,
    pub extensions_merge_mode: Option<MergeMode>,
    pub formats_merge_mode: Option<MergeMode>,
}

impl Profile {
    pub fn block(&self, ty: vk::StructureType) -> Option<&CapabilityBlock> {
        self.declared(ty).map(|declared| &declared.block)
    }

    pub fn declared(&self, ty: vk::StructureType) -> Option<&DeclaredBlock> {
        self.blocks.iter().find(|declared| declared.block.ty() == ty)
    }

    pub fn format(&self, format: vk::Format) -> Option<&FormatRequirement> {
        self.formats.iter().find(|req| req.format == format)
    }

    pub fn has_extension(&self, name: &str) -> bool {
        self.extensions.iter().any(|ext| ext.name == name)
    }
}

/// Load-time problems with a document. Documents are schema-valid by the time
/// they get here, so these are all about names and values that don't resolve.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SchemaViolation {
    #[error("capability set `{set}` declares unknown block `{block}`")]
    UnknownBlock { set: String, block: String },
    #[error("block `{block}` in capability set `{set}` has no field `{field}`")]
    UnknownField {
        set: String,
        block: String,
        field: String,
    },
    #[error("field `{block}.{field}` in capability set `{set}` has a value of the wrong kind")]
    FieldKind {
        set: String,
        block: String,
        field: String,
    },
    #[error("profile `{profile}` falls back to unknown profile `{fallback}`")]
    UnknownFallback { profile: String, fallback: String },
    #[error("profile `{profile}` uses unknown capability set `{set}`")]
    UnknownCapabilitySet { profile: String, set: String },
    #[error("capability set `{set}` lists malformed extension name `{name}`")]
    MalformedExtension { set: String, name: String },
    #[error("capability set `{set}` lists unknown format `{format}`")]
    UnknownFormat { set: String, format: String },
    #[error("field `{block}.{field}` in capability set `{set}` names unknown flag `{flag}`")]
    UnknownFlag {
        set: String,
        block: String,
        field: String,
        flag: String,
    },
    #[error("profile `{profile}` has invalid api-version `{version}`")]
    ApiVersion { profile: String, version: String },
    #[error("{context}: {reason}")]
    Malformed { context: String, reason: String },
}

/// What the device offers for profile resolution.
#[derive(Clone, Copy, Debug)]
pub struct DeviceSupport<'a> {
    pub api_version: u32,
    pub extensions: &'a [ExtensionProperties],
}

#[derive(Debug, Default)]
pub struct ProfileDocument {
    profiles: Vec<Profile>,
    by_name: FxHashMap<String, usize>,
}

impl ProfileDocument {
    pub(crate) fn from_profiles(profiles: Vec<Profile>) -> Self {
        let by_name = profiles
            .iter()
            .enumerate()
            .map(|(index, profile)| (profile.name.clone(), index))
            .collect();
        Self { profiles, by_name }
    }

    pub fn profile(&self, name: &str) -> Option<&Profile> {
        self.by_name.get(name).map(|&index| &self.profiles[index])
    }

    pub fn profiles(&self) -> impl Iterator<Item = &Profile> {
        self.profiles.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Resolves the requested profile names to the profiles to simulate, in
    /// request order.
    ///
    /// A profile the device cannot support is replaced by the first supported
    /// profile found walking its fallback list depth first.
    pub fn resolve_active<S: AsRef<str>>(
        &self,
        requested: &[S],
        device: DeviceSupport<'_>,
    ) -> Result<Vec<&Profile>, SimulationError> {
        let mut active: Vec<&Profile> = Vec::with_capacity(requested.len());
        for name in requested {
            let name = name.as_ref();
            let profile = self
                .profile(name)
                .ok_or_else(|| SimulationError::UnknownProfile(name.to_owned()))?;
            let resolved = match matcher::supports_profile(
                profile,
                device.api_version,
                device.extensions,
            ) {
                Ok(()) => profile,
                Err(reason) => {
                    let mut visited = FxHashSet::default();
                    visited.insert(profile.name.as_str());
                    match self.find_fallback(profile, device, &mut visited)? {
                        Some(fallback) => {
                            log::info!(
                                "Profile {} is not supported ({}), using fallback {}",
                                profile.name,
                                reason,
                                fallback.name
                            );
                            fallback
                        }
                        None => {
                            return Err(SimulationError::ProfileUnsupported {
                                profile: profile.name.clone(),
                                reason,
                            })
                        }
                    }
                }
            };
            if !active.iter().any(|p| p.name == resolved.name) {
                active.push(resolved);
            }
        }
        Ok(active)
    }

    fn find_fallback<'a>(
        &'a self,
        profile: &'a Profile,
        device: DeviceSupport<'_>,
        visited: &mut FxHashSet<&'a str>,
    ) -> Result<Option<&'a Profile>, SimulationError> {
        for name in profile.fallback.iter() {
            let fallback = self
                .profile(name)
                .ok_or_else(|| SimulationError::UnknownProfile(name.clone()))?;
            if !visited.insert(fallback.name.as_str()) {
                continue;
            }
            if matcher::supports_profile(fallback, device.api_version, device.extensions).is_ok()
            {
                return Ok(Some(fallback));
            }
            if let Some(found) = self.find_fallback(fallback, device, visited)? {
                return Ok(Some(found));
            }
        }
        Ok(None)
    }
}
