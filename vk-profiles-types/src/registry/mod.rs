//! The struct registry: which capability blocks exist, which fields they
//! carry, and how extension blocks map onto the core aggregates they were
//! promoted into.

use crate::{names::FlagSet, ScalarKind};
use ash::vk;
use fxhash::FxHashMap;

mod promoted;
mod structures;

/// Direction in which a numeric field becomes more capable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Bound {
    /// Larger is more capable (`maxImageDimension2D`).
    Max,
    /// Smaller is more capable (`minUniformBufferOffsetAlignment`).
    Min,
    /// Not ordered.
    Exact,
}

/// Whether a field may be simulated or always reports the native value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Autoness {
    Auto,
    NoAuto,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldKind {
    Bool,
    Bitmask32(&'static FlagSet),
    Bitmask64(&'static FlagSet),
    Scalar(ScalarKind, Bound),
    /// Fixed-size numeric array, one bound per element.
    Array(ScalarKind, &'static [Bound]),
    /// `{min, max}` pair: element 0 is `Min`-bound, element 1 is `Max`-bound.
    Range(ScalarKind),
    /// Character array with its capacity in bytes, terminator included.
    String(usize),
    Bytes(usize),
}

impl FieldKind {
    /// Bound of the array element at `index`.
    pub fn element_bound(&self, index: usize) -> Bound {
        match *self {
            Self::Scalar(_, bound) => bound,
            Self::Array(_, bounds) => bounds.get(index).copied().unwrap_or(Bound::Exact),
            Self::Range(_) => match index {
                0 => Bound::Min,
                _ => Bound::Max,
            },
            _ => Bound::Exact,
        }
    }

    /// Number of elements for arrays and ranges.
    pub fn len(&self) -> Option<usize> {
        match *self {
            Self::Array(_, bounds) => Some(bounds.len()),
            Self::Range(_) => Some(2),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldDescriptor {
    /// API member name; nested structures are flattened with dots.
    pub name: &'static str,
    pub kind: FieldKind,
    pub autoness: Autoness,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            autoness: Autoness::Auto,
        }
    }

    pub const fn no_auto(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            autoness: Autoness::NoAuto,
        }
    }

    pub fn is_auto(&self) -> bool {
        self.autoness == Autoness::Auto
    }
}

/// Which query a block answers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Features,
    Properties,
    Format,
    QueueFamily,
}

#[derive(Debug, PartialEq)]
pub struct StructDescriptor {
    /// API structure name, e.g. `VkPhysicalDeviceVulkan12Features`.
    pub name: &'static str,
    pub ty: vk::StructureType,
    pub category: Category,
    /// Extension that introduced the structure, if it is not core.
    pub extension: Option<&'static str>,
    pub fields: &'static [FieldDescriptor],
}

impl StructDescriptor {
    pub fn field(&self, name: &str) -> Option<(usize, &'static FieldDescriptor)> {
        self.fields
            .iter()
            .enumerate()
            .find(|&(_, field)| field.name == name)
    }
}

/// An extension block whose fields were folded into a core aggregate.
///
/// `renames` lists `(core name, extension name)` pairs where the two
/// structures disagree; every other field of the extension block appears
/// under the same name in the core block.
#[derive(Debug)]
pub struct Promotion {
    pub core: vk::StructureType,
    pub member: vk::StructureType,
    pub renames: &'static [(&'static str, &'static str)],
}

/// A block that can supply fields to another one, see [`Registry::related`].
#[derive(Clone, Copy, Debug)]
pub struct Related {
    pub source: vk::StructureType,
    renames: &'static [(&'static str, &'static str)],
    /// The source is the core aggregate and the target the extension block.
    reversed: bool,
}

impl Related {
    /// Name under which `target_field` appears in the source block.
    pub fn source_field<'a>(&self, target_field: &'a str) -> &'a str {
        for &(core, member) in self.renames {
            let (target, source) = if self.reversed {
                (member, core)
            } else {
                (core, member)
            };
            if target == target_field {
                return source;
            }
        }
        target_field
    }
}

#[derive(Debug)]
pub struct Registry {
    structures: &'static [StructDescriptor],
    by_type: FxHashMap<vk::StructureType, &'static StructDescriptor>,
    by_name: FxHashMap<&'static str, &'static StructDescriptor>,
    promotions: &'static [Promotion],
}

impl Registry {
    /// The registry built from the shipped tables.
    pub fn builtin() -> Self {
        Self::from_tables(structures::STRUCTURES, promoted::PROMOTIONS)
    }

    pub fn from_tables(
        structures: &'static [StructDescriptor],
        promotions: &'static [Promotion],
    ) -> Self {
        let mut by_type = FxHashMap::default();
        let mut by_name = FxHashMap::default();
        for desc in structures {
            by_type.entry(desc.ty).or_insert(desc);
            by_name.entry(desc.name).or_insert(desc);
        }
        Self {
            structures,
            by_type,
            by_name,
            promotions,
        }
    }

    pub fn lookup(&self, ty: vk::StructureType) -> Option<&'static StructDescriptor> {
        self.by_type.get(&ty).copied()
    }

    pub fn lookup_by_name(&self, name: &str) -> Option<&'static StructDescriptor> {
        self.by_name.get(name).copied()
    }

    pub fn structures(&self) -> impl Iterator<Item = &'static StructDescriptor> {
        self.structures.iter()
    }

    /// Extension blocks promoted into the core aggregate `core`.
    pub fn promotions_into(
        &self,
        core: vk::StructureType,
    ) -> impl Iterator<Item = &'static Promotion> + '_ {
        self.promotions.iter().filter(move |p| p.core == core)
    }

    /// Blocks that carry some of the fields of `ty` under the promotion
    /// table: the extension blocks of a core aggregate, or the core aggregate
    /// of an extension block.
    pub fn related(&self, ty: vk::StructureType) -> Vec<Related> {
        let mut related: Vec<Related> = self
            .promotions_into(ty)
            .map(|p| Related {
                source: p.member,
                renames: p.renames,
                reversed: false,
            })
            .collect();
        related.extend(
            self.promotions
                .iter()
                .filter(|p| p.member == ty)
                .map(|p| Related {
                    source: p.core,
                    renames: p.renames,
                    reversed: true,
                }),
        );
        related
    }
}
