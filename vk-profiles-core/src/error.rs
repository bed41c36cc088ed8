use crate::{document::SchemaViolation, matcher::Unsupported};
use ash::vk;
use thiserror::Error;

#[derive(Clone, Debug, Error)]
pub enum SimulationError {
    #[error("profile `{profile}` is not supported by the device and has no supported fallback")]
    ProfileUnsupported {
        profile: String,
        #[source]
        reason: Unsupported,
    },
    #[error("profile `{0}` is not defined in the document")]
    UnknownProfile(String),
    #[error("queue family requirement {index} of profile `{profile}` matches no device queue family")]
    QueueFamilyUnsatisfiable { profile: String, index: usize },
    #[error("structure type {0:?} is not known to the registry")]
    UnknownCapabilityTag(vk::StructureType),
    #[error("no physical device matches the forced device selection")]
    NoMatchingDevice,
    #[error(transparent)]
    Schema(#[from] SchemaViolation),
}
