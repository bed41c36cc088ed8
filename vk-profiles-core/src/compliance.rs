//! Reports which requirements of a profile the native device fails to meet.

use crate::{
    device::NativeDevice,
    document::Profile,
    matcher::{self, Unsupported},
    Chain,
};
use ash::vk;
use std::{cmp::Ordering, fmt};
use vpt::{Bound, CapabilityBlock, Category, FieldKind, FormatProperties, QueueFamilyProperties, Value};

#[derive(Clone, Debug, PartialEq)]
pub enum Incompatibility {
    ApiVersion { required: u32, available: u32 },
    MissingExtension(String),
    /// Declared `true`, not supported natively.
    Feature {
        block: &'static str,
        field: &'static str,
    },
    /// The native value is less capable than the declared one.
    Limit {
        block: &'static str,
        field: &'static str,
        required: Value,
        available: Option<Value>,
    },
    /// Declared bits the native mask lacks.
    Flags {
        block: &'static str,
        field: &'static str,
        missing: u64,
    },
    Format {
        format: vk::Format,
        missing: FormatProperties,
    },
    QueueFamily {
        index: usize,
        requirement: QueueFamilyProperties,
    },
}

impl fmt::Display for Incompatibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::ApiVersion {
                required,
                available,
            } => write!(
                f,
                "api version {} is below {}",
                vpt::format_api_version(available),
                vpt::format_api_version(required)
            ),
            Self::MissingExtension(ref name) => write!(f, "extension {name} is missing"),
            Self::Feature { block, field } => write!(f, "{block}.{field} is not supported"),
            Self::Limit {
                block,
                field,
                ref required,
                ref available,
            } => match *available {
                Some(ref available) => {
                    write!(f, "{block}.{field} is {available}, profile requires {required}")
                }
                None => write!(f, "{block}.{field} is not reported, profile requires {required}"),
            },
            Self::Flags {
                block,
                field,
                missing,
            } => write!(f, "{block}.{field} lacks bits {missing:#x}"),
            Self::Format { format, missing } => write!(
                f,
                "{} lacks linear {:?}, optimal {:?}, buffer {:?}",
                vpt::names::format_name(format).unwrap_or("unknown format"),
                missing.linear_tiling_features,
                missing.optimal_tiling_features,
                missing.buffer_features
            ),
            Self::QueueFamily { index, .. } => {
                write!(f, "queue family requirement {index} has no matching family")
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ComplianceReport {
    pub profile: String,
    pub incompatibilities: Vec<Incompatibility>,
}

impl ComplianceReport {
    pub fn is_compatible(&self) -> bool {
        self.incompatibilities.is_empty()
    }
}

/// Whether `native` is less capable than `required` for a field bound in
/// direction `bound`.
fn falls_short(bound: Bound, native: &vpt::Scalar, required: &vpt::Scalar) -> bool {
    match native.compare(required) {
        Some(Ordering::Less) => bound != Bound::Min,
        Some(Ordering::Greater) => bound != Bound::Max,
        Some(Ordering::Equal) => false,
        None => true,
    }
}

fn check_block(declared: &CapabilityBlock, native: &CapabilityBlock, out: &mut Vec<Incompatibility>) {
    let desc = match declared.descriptor() {
        Some(desc) => desc,
        None => return,
    };
    for (index, field, required) in declared.iter() {
        if !field.is_auto() {
            continue;
        }
        let available = native.get_index(index);
        let short = match field.kind {
            FieldKind::Bool => {
                if required.as_bool() == Some(true) && available.and_then(Value::as_bool) != Some(true) {
                    out.push(Incompatibility::Feature {
                        block: desc.name,
                        field: field.name,
                    });
                }
                continue;
            }
            FieldKind::Bitmask32(_) | FieldKind::Bitmask64(_) => {
                let required = required.as_bitmask().unwrap_or_default();
                let native = available.and_then(Value::as_bitmask).unwrap_or_default();
                let missing = required & !native;
                if missing != 0 {
                    out.push(Incompatibility::Flags {
                        block: desc.name,
                        field: field.name,
                        missing,
                    });
                }
                continue;
            }
            FieldKind::Scalar(_, bound) => match (available.and_then(Value::as_scalar), required.as_scalar()) {
                (Some(native), Some(required)) => falls_short(bound, &native, &required),
                _ => true,
            },
            FieldKind::Array(..) | FieldKind::Range(_) => {
                match (available.and_then(Value::as_array), required.as_array()) {
                    (Some(native), Some(required)) if native.len() == required.len() => native
                        .iter()
                        .zip(required.iter())
                        .enumerate()
                        .any(|(i, (n, r))| falls_short(field.kind.element_bound(i), n, r)),
                    _ => true,
                }
            }
            FieldKind::String(_) | FieldKind::Bytes(_) => false,
        };
        if short {
            out.push(Incompatibility::Limit {
                block: desc.name,
                field: field.name,
                required: required.clone(),
                available: available.cloned(),
            });
        }
    }
}

/// Compares everything `profile` declares against `native`.
///
/// Fields that always report the native value are not checked.
pub fn check_profile<D: NativeDevice + ?Sized>(profile: &Profile, native: &D) -> ComplianceReport {
    let mut incompatibilities = Vec::new();
    let extensions = native.extensions();

    if let Err(Unsupported::ApiVersion {
        required,
        available,
    }) = matcher::supports_profile(profile, native.api_version(), &[])
    {
        incompatibilities.push(Incompatibility::ApiVersion {
            required,
            available,
        });
    }
    for ext in profile.extensions.iter() {
        if !extensions.iter().any(|e| e.name == ext.name) {
            incompatibilities.push(Incompatibility::MissingExtension(ext.name.clone()));
        }
    }

    for category in [Category::Features, Category::Properties] {
        let mut chain: Chain = profile
            .blocks
            .iter()
            .filter_map(|declared| declared.block.descriptor())
            .filter(|desc| desc.category == category)
            .map(CapabilityBlock::new)
            .collect();
        if chain.is_empty() {
            continue;
        }
        match category {
            Category::Features => native.fill_features(&mut chain),
            _ => native.fill_properties(&mut chain),
        }
        for declared in profile.blocks.iter() {
            if let Some(native_block) = chain.find(declared.block.ty()) {
                check_block(&declared.block, native_block, &mut incompatibilities);
            }
        }
    }

    for req in profile.formats.iter() {
        let properties = native.format_properties(req.format);
        if !matcher::matches_format(&properties, req) {
            incompatibilities.push(Incompatibility::Format {
                format: req.format,
                missing: req.properties.missing_from(&properties),
            });
        }
    }

    let families = native.queue_family_properties();
    for (index, req) in profile.queue_families.iter().enumerate() {
        if matcher::matches_queue_family(&families, req).is_none() {
            incompatibilities.push(Incompatibility::QueueFamily {
                index,
                requirement: *req,
            });
        }
    }

    ComplianceReport {
        profile: profile.name.clone(),
        incompatibilities,
    }
}
