use crate::device::NativeDevice;
use ash::vk;

/// Which physical devices stay visible to the application.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ForceDevice {
    #[default]
    Off,
    /// Devices whose name contains the substring.
    ByName(String),
    ByUuid([u8; vk::UUID_SIZE]),
}

/// Filters `devices` by `policy`, keeping their order.
pub fn select<'a, D: NativeDevice>(devices: &'a [D], policy: &ForceDevice) -> Vec<&'a D> {
    let selected: Vec<&D> = devices
        .iter()
        .filter(|device| {
            let identity = device.identity();
            match *policy {
                ForceDevice::Off => true,
                ForceDevice::ByName(ref name) => identity.name.contains(name.as_str()),
                ForceDevice::ByUuid(ref uuid) => identity.uuid == *uuid,
            }
        })
        .collect();
    if *policy != ForceDevice::Off {
        for device in selected.iter() {
            log::info!("Forcing device {}", device.identity().name);
        }
    }
    selected
}
