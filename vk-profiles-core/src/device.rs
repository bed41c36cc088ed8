use crate::Chain;
use ash::vk;
use vpt::{DeviceIdentity, ExtensionProperties, FormatProperties, QueueFamilyProperties};

/// The native implementation underneath the simulation.
///
/// The `fill_*` methods write every field the device knows into each block of
/// the chain whose tag it supports, and leave the other blocks untouched.
pub trait NativeDevice {
    fn identity(&self) -> &DeviceIdentity;
    fn api_version(&self) -> u32;
    fn fill_features(&self, chain: &mut Chain);
    fn fill_properties(&self, chain: &mut Chain);
    fn extensions(&self) -> Vec<ExtensionProperties>;
    fn format_properties(&self, format: vk::Format) -> FormatProperties;
    fn queue_family_properties(&self) -> Vec<QueueFamilyProperties>;
}

impl<T: NativeDevice + ?Sized> NativeDevice for &T {
    fn identity(&self) -> &DeviceIdentity {
        (**self).identity()
    }
    fn api_version(&self) -> u32 {
        (**self).api_version()
    }
    fn fill_features(&self, chain: &mut Chain) {
        (**self).fill_features(chain)
    }
    fn fill_properties(&self, chain: &mut Chain) {
        (**self).fill_properties(chain)
    }
    fn extensions(&self) -> Vec<ExtensionProperties> {
        (**self).extensions()
    }
    fn format_properties(&self, format: vk::Format) -> FormatProperties {
        (**self).format_properties(format)
    }
    fn queue_family_properties(&self) -> Vec<QueueFamilyProperties> {
        (**self).queue_family_properties()
    }
}
