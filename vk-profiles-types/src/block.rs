use crate::{FieldDescriptor, FieldKind, StructDescriptor, Value};
use ash::vk;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum FieldError {
    #[error("block {0:?} is not in the registry and has no fields")]
    Opaque(vk::StructureType),
    #[error("`{block}` has no field `{field}`")]
    UnknownField {
        block: &'static str,
        field: String,
    },
    #[error("field `{block}.{field}` expects {expected:?}, got {value}")]
    Kind {
        block: &'static str,
        field: &'static str,
        expected: FieldKind,
        value: Value,
    },
}

impl FieldKind {
    /// True when `value` has the shape this field stores.
    pub fn accepts(&self, value: &Value) -> bool {
        match (*self, value) {
            (Self::Bool, &Value::Bool(_)) => true,
            (Self::Bitmask32(_), &Value::Bitmask(bits)) => bits <= u32::MAX as u64,
            (Self::Bitmask64(_), &Value::Bitmask(_)) => true,
            (Self::Scalar(kind, _), &Value::Scalar(ref s)) => s.kind() == kind,
            (Self::Array(kind, bounds), &Value::Array(ref items)) => {
                items.len() == bounds.len() && items.iter().all(|s| s.kind() == kind)
            }
            (Self::Range(kind), &Value::Array(ref items)) => {
                items.len() == 2 && items.iter().all(|s| s.kind() == kind)
            }
            // The capacity includes the terminating nul.
            (Self::String(capacity), &Value::String(ref s)) => s.len() < capacity,
            (Self::Bytes(len), &Value::Bytes(ref bytes)) => bytes.len() == len,
            _ => false,
        }
    }
}

/// One typed capability block: a type tag plus the fields that have a value.
///
/// Fields are kept in registry order. A block built with [`Self::opaque`] has
/// a tag the registry does not know; it never holds fields.
#[derive(Clone, Debug, PartialEq)]
pub struct CapabilityBlock {
    ty: vk::StructureType,
    desc: Option<&'static StructDescriptor>,
    values: BTreeMap<usize, Value>,
}

impl CapabilityBlock {
    pub fn new(desc: &'static StructDescriptor) -> Self {
        Self {
            ty: desc.ty,
            desc: Some(desc),
            values: BTreeMap::new(),
        }
    }

    pub fn opaque(ty: vk::StructureType) -> Self {
        Self {
            ty,
            desc: None,
            values: BTreeMap::new(),
        }
    }

    pub fn ty(&self) -> vk::StructureType {
        self.ty
    }

    pub fn descriptor(&self) -> Option<&'static StructDescriptor> {
        self.desc
    }

    pub fn is_opaque(&self) -> bool {
        self.desc.is_none()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    fn desc(&self) -> Result<&'static StructDescriptor, FieldError> {
        self.desc.ok_or(FieldError::Opaque(self.ty))
    }

    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<(), FieldError> {
        let desc = self.desc()?;
        let (index, _) = desc.field(name).ok_or_else(|| FieldError::UnknownField {
            block: desc.name,
            field: name.to_owned(),
        })?;
        self.set_index(index, value.into())
    }

    /// Sets the field at registry position `index`.
    pub fn set_index(&mut self, index: usize, value: Value) -> Result<(), FieldError> {
        let desc = self.desc()?;
        let field = desc
            .fields
            .get(index)
            .ok_or_else(|| FieldError::UnknownField {
                block: desc.name,
                field: format!("#{index}"),
            })?;
        if !field.kind.accepts(&value) {
            return Err(FieldError::Kind {
                block: desc.name,
                field: field.name,
                expected: field.kind,
                value,
            });
        }
        self.values.insert(index, value);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        let (index, _) = self.desc?.field(name)?;
        self.values.get(&index)
    }

    pub fn get_index(&self, index: usize) -> Option<&Value> {
        self.values.get(&index)
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        let (index, _) = self.desc?.field(name)?;
        self.values.remove(&index)
    }

    /// Fields that have a value, in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &'static FieldDescriptor, &Value)> + '_ {
        let fields = self.desc.map_or(&[][..], |desc| desc.fields);
        self.values
            .iter()
            .filter_map(move |(&index, value)| Some((index, fields.get(index)?, value)))
    }

    /// Copies every field `other` has into `self`, overwriting.
    pub fn overlay(&mut self, other: &Self) {
        if self.ty != other.ty {
            return;
        }
        for (&index, value) in other.values.iter() {
            self.values.insert(index, value.clone());
        }
    }
}
