//! Helpers shared by the integration tests: a scripted native device and
//! profile document fixtures.

#![allow(dead_code)]

use ash::vk;
use serde_json::{json, Value as Json};
use vk_profiles_core::{
    vpt::{
        CapabilityBlock, Category, DeviceIdentity, ExtensionProperties, Extent3d,
        FormatProperties, QueueFamilyProperties, Registry, Value,
    },
    Chain, NativeDevice, Simulation, SimulationConfig,
};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A device whose answers are fixed up front.
#[derive(Clone, Debug)]
pub struct MockDevice {
    identity: DeviceIdentity,
    api_version: u32,
    blocks: Vec<CapabilityBlock>,
    extensions: Vec<ExtensionProperties>,
    formats: Vec<(vk::Format, FormatProperties)>,
    queue_families: Vec<QueueFamilyProperties>,
}

impl MockDevice {
    pub fn new(name: &str) -> Self {
        Self {
            identity: DeviceIdentity {
                name: name.to_owned(),
                uuid: [0; vk::UUID_SIZE],
                vendor_id: 0,
                device_id: 0,
                device_type: vk::PhysicalDeviceType::DISCRETE_GPU,
            },
            api_version: vk::API_VERSION_1_3,
            blocks: Vec::new(),
            extensions: Vec::new(),
            formats: Vec::new(),
            queue_families: Vec::new(),
        }
    }

    pub fn with_uuid(mut self, uuid: [u8; vk::UUID_SIZE]) -> Self {
        self.identity.uuid = uuid;
        self
    }

    pub fn with_api_version(mut self, api_version: u32) -> Self {
        self.api_version = api_version;
        self
    }

    /// Sets a field of block `ty`, creating the block on first use.
    pub fn with_field(mut self, ty: vk::StructureType, field: &str, value: impl Into<Value>) -> Self {
        let index = match self.blocks.iter().position(|block| block.ty() == ty) {
            Some(index) => index,
            None => {
                let desc = Registry::builtin().lookup(ty).unwrap();
                self.blocks.push(CapabilityBlock::new(desc));
                self.blocks.len() - 1
            }
        };
        self.blocks[index].set(field, value).unwrap();
        self
    }

    pub fn with_feature(self, field: &str, value: bool) -> Self {
        self.with_field(vk::StructureType::PHYSICAL_DEVICE_FEATURES_2, field, value)
    }

    pub fn with_property(self, field: &str, value: impl Into<Value>) -> Self {
        self.with_field(vk::StructureType::PHYSICAL_DEVICE_PROPERTIES_2, field, value)
    }

    pub fn with_extension(mut self, name: &str, spec_version: u32) -> Self {
        self.extensions
            .push(ExtensionProperties::new(name, spec_version));
        self
    }

    pub fn with_format(mut self, format: vk::Format, properties: FormatProperties) -> Self {
        self.formats.push((format, properties));
        self
    }

    pub fn with_queue_family(
        mut self,
        queue_flags: vk::QueueFlags,
        queue_count: u32,
        granularity: Extent3d,
    ) -> Self {
        self.queue_families.push(QueueFamilyProperties {
            queue_flags,
            queue_count,
            timestamp_valid_bits: 64,
            min_image_transfer_granularity: granularity,
        });
        self
    }

    fn fill(&self, chain: &mut Chain, category: Category) {
        for block in chain.iter_mut() {
            let native = self.blocks.iter().find(|native| {
                native.ty() == block.ty()
                    && native.descriptor().map(|desc| desc.category) == Some(category)
            });
            if let Some(native) = native {
                block.overlay(native);
            }
        }
    }
}

impl NativeDevice for MockDevice {
    fn identity(&self) -> &DeviceIdentity {
        &self.identity
    }

    fn api_version(&self) -> u32 {
        self.api_version
    }

    fn fill_features(&self, chain: &mut Chain) {
        self.fill(chain, Category::Features);
    }

    fn fill_properties(&self, chain: &mut Chain) {
        self.fill(chain, Category::Properties);
    }

    fn extensions(&self) -> Vec<ExtensionProperties> {
        self.extensions.clone()
    }

    fn format_properties(&self, format: vk::Format) -> FormatProperties {
        self.formats
            .iter()
            .find(|&&(f, _)| f == format)
            .map(|&(_, properties)| properties)
            .unwrap_or_default()
    }

    fn queue_family_properties(&self) -> Vec<QueueFamilyProperties> {
        self.queue_families.clone()
    }
}

/// A chain holding one empty block per tag.
pub fn chain(types: &[vk::StructureType]) -> Chain {
    Chain::for_types(&Registry::builtin(), types)
}

pub fn simulation(document: Json, config: SimulationConfig) -> Simulation {
    init_logger();
    Simulation::from_json(Registry::builtin(), &document, config).unwrap()
}

/// Two feature/limit profiles and one built only from promoted blocks.
pub fn document() -> Json {
    json!({
        "capabilities": {
            "features_a": {
                "features": {
                    "VkPhysicalDeviceFeatures": {
                        "geometryShader": true,
                        "tessellationShader": true,
                        "wideLines": true
                    }
                },
                "properties": {
                    "VkPhysicalDeviceProperties": {
                        "deviceName": "Profile A",
                        "limits": {
                            "maxImageDimension1D": 4096,
                            "maxImageDimension2D": 4096,
                            "minUniformBufferOffsetAlignment": 256,
                            "framebufferColorSampleCounts": [
                                "VK_SAMPLE_COUNT_1_BIT",
                                "VK_SAMPLE_COUNT_4_BIT"
                            ]
                        }
                    }
                }
            },
            "features_b": {
                "features": {
                    "VkPhysicalDeviceFeatures": {
                        "geometryShader": true,
                        "tessellationShader": false
                    }
                },
                "properties": {
                    "VkPhysicalDeviceProperties": {
                        "limits": {
                            "maxImageDimension1D": 8192,
                            "minUniformBufferOffsetAlignment": 64,
                            "framebufferColorSampleCounts": [
                                "VK_SAMPLE_COUNT_1_BIT",
                                "VK_SAMPLE_COUNT_8_BIT"
                            ]
                        }
                    }
                }
            },
            "extensions_a": {
                "extensions": {
                    "VK_KHR_swapchain": 70,
                    "VK_KHR_maintenance1": 2
                },
                "formats": {
                    "VK_FORMAT_R8G8B8A8_UNORM": {
                        "VkFormatProperties": {
                            "optimalTilingFeatures": [
                                "VK_FORMAT_FEATURE_SAMPLED_IMAGE_BIT",
                                "VK_FORMAT_FEATURE_STORAGE_IMAGE_BIT"
                            ]
                        }
                    }
                }
            },
            "extensions_b": {
                "extensions": {
                    "VK_KHR_swapchain": 70,
                    "VK_EXT_robustness2": 1
                },
                "formats": {
                    "VK_FORMAT_R8G8B8A8_UNORM": {
                        "VkFormatProperties": {
                            "optimalTilingFeatures": ["VK_FORMAT_FEATURE_SAMPLED_IMAGE_BIT"],
                            "bufferFeatures": ["VK_FORMAT_FEATURE_VERTEX_BUFFER_BIT"]
                        }
                    }
                }
            },
            "queues": {
                "queueFamiliesProperties": [
                    { "VkQueueFamilyProperties": {
                        "queueFlags": ["VK_QUEUE_GRAPHICS_BIT"],
                        "queueCount": 2
                    } }
                ]
            },
            "promoted": {
                "features": {
                    "VkPhysicalDeviceTimelineSemaphoreFeatures": { "timelineSemaphore": true }
                },
                "properties": {
                    "VkPhysicalDeviceSubgroupProperties": {
                        "subgroupSize": 32,
                        "supportedStages": ["VK_SHADER_STAGE_COMPUTE_BIT"]
                    }
                }
            }
        },
        "profiles": {
            "VP_TEST_A": {
                "version": 1,
                "api-version": "1.1.0",
                "capabilities": ["features_a", "extensions_a"]
            },
            "VP_TEST_B": {
                "version": 1,
                "api-version": "1.2.0",
                "capabilities": ["features_b", "extensions_b"]
            },
            "VP_TEST_QUEUES": {
                "version": 1,
                "api-version": "1.0.0",
                "capabilities": ["queues"]
            },
            "VP_TEST_PROMOTED": {
                "version": 1,
                "api-version": "1.2.0",
                "capabilities": ["promoted"]
            },
            "VP_TEST_FUTURE": {
                "version": 1,
                "api-version": "1.4.0",
                "capabilities": ["features_a"],
                "fallback": ["VP_TEST_B"]
            }
        }
    })
}

/// The native side used by most tests: more capable than either profile on
/// limits, missing some features.
pub fn native_device() -> MockDevice {
    MockDevice::new("Mock GPU")
        .with_feature("geometryShader", true)
        .with_feature("tessellationShader", true)
        .with_feature("wideLines", false)
        .with_feature("robustBufferAccess", true)
        .with_property("deviceName", "Mock GPU")
        .with_property("vendorID", 0x1234u32)
        .with_property("limits.maxImageDimension1D", 16384u32)
        .with_property("limits.maxImageDimension2D", 16384u32)
        .with_property("limits.minUniformBufferOffsetAlignment", 16u64)
        .with_property("limits.framebufferColorSampleCounts", Value::Bitmask(0x1 | 0x2 | 0x4))
        .with_extension("VK_KHR_swapchain", 70)
        .with_extension("VK_KHR_maintenance1", 3)
        .with_extension("VK_EXT_robustness2", 1)
        .with_extension("VK_KHR_timeline_semaphore", 2)
        .with_format(
            vk::Format::R8G8B8A8_UNORM,
            FormatProperties {
                optimal_tiling_features: vk::FormatFeatureFlags::SAMPLED_IMAGE
                    | vk::FormatFeatureFlags::BLIT_SRC,
                ..Default::default()
            },
        )
        .with_queue_family(
            vk::QueueFlags::GRAPHICS | vk::QueueFlags::COMPUTE,
            1,
            Extent3d::new(1, 1, 1),
        )
        .with_queue_family(vk::QueueFlags::GRAPHICS, 4, Extent3d::new(1, 1, 1))
}

pub fn config<const N: usize>(
    merge_mode: vk_profiles_core::vpt::MergeMode,
    profiles: [&str; N],
) -> SimulationConfig {
    SimulationConfig::new(merge_mode).with_profiles(profiles)
}
