use arrayvec::ArrayVec;
use std::{cmp::Ordering, fmt};

/// Longest numeric array found in a capability structure (`maxComputeWorkGroupCount`).
pub const MAX_ARRAY_LEN: usize = 3;
/// Longest byte field found in a capability structure (UUIDs).
pub const MAX_BYTES_LEN: usize = 16;

/// Element type of a numeric field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    U32,
    U64,
    I32,
    F32,
}

/// A single numeric value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Scalar {
    U32(u32),
    U64(u64),
    I32(i32),
    F32(f32),
}

impl Scalar {
    pub fn kind(&self) -> ScalarKind {
        match *self {
            Self::U32(_) => ScalarKind::U32,
            Self::U64(_) => ScalarKind::U64,
            Self::I32(_) => ScalarKind::I32,
            Self::F32(_) => ScalarKind::F32,
        }
    }

    /// Compares two scalars of the same kind.
    ///
    /// Returns `None` for mismatched kinds or a NaN operand.
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        match (*self, *other) {
            (Self::U32(a), Self::U32(b)) => Some(a.cmp(&b)),
            (Self::U64(a), Self::U64(b)) => Some(a.cmp(&b)),
            (Self::I32(a), Self::I32(b)) => Some(a.cmp(&b)),
            (Self::F32(a), Self::F32(b)) => a.partial_cmp(&b),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::U32(v) => fmt::Display::fmt(&v, f),
            Self::U64(v) => fmt::Display::fmt(&v, f),
            Self::I32(v) => fmt::Display::fmt(&v, f),
            Self::F32(v) => fmt::Display::fmt(&v, f),
        }
    }
}

/// The value of one field of a capability block.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Bool(bool),
    /// Both 32 and 64 bit masks; the field kind tells the width.
    Bitmask(u64),
    Scalar(Scalar),
    /// Fixed arrays and `{min, max}` ranges.
    Array(ArrayVec<Scalar, MAX_ARRAY_LEN>),
    String(String),
    Bytes(ArrayVec<u8, MAX_BYTES_LEN>),
}

impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Self::Bool(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_bitmask(&self) -> Option<u64> {
        match *self {
            Self::Bitmask(bits) => Some(bits),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<Scalar> {
        match *self {
            Self::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_u32(&self) -> Option<u32> {
        match *self {
            Self::Scalar(Scalar::U32(v)) => Some(v),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Scalar]> {
        match *self {
            Self::Array(ref items) => Some(items),
            _ => None,
        }
    }

    pub fn array<I: IntoIterator<Item = Scalar>>(items: I) -> Self {
        Self::Array(items.into_iter().take(MAX_ARRAY_LEN).collect())
    }

    pub fn bytes(data: &[u8]) -> Self {
        Self::Bytes(data.iter().copied().take(MAX_BYTES_LEN).collect())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Scalar(Scalar::U32(value))
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Self::Scalar(Scalar::U64(value))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Scalar(Scalar::I32(value))
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Scalar(Scalar::F32(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Bool(b) => fmt::Display::fmt(&b, f),
            Self::Bitmask(bits) => write!(f, "{bits:#x}"),
            Self::Scalar(ref s) => fmt::Display::fmt(s, f),
            Self::Array(ref items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i != 0 {
                        write!(f, ", ")?;
                    }
                    fmt::Display::fmt(item, f)?;
                }
                write!(f, "]")
            }
            Self::String(ref s) => write!(f, "{s:?}"),
            Self::Bytes(ref b) => {
                for byte in b.iter() {
                    write!(f, "{byte:02x}")?;
                }
                Ok(())
            }
        }
    }
}
