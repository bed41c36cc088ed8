use super::Promotion;
use ash::vk::StructureType as St;

const fn promoted(core: St, member: St) -> Promotion {
    Promotion {
        core,
        member,
        renames: &[],
    }
}

pub(super) static PROMOTIONS: &[Promotion] = &[
    // 1.1
    promoted(
        St::PHYSICAL_DEVICE_VULKAN_1_1_FEATURES,
        St::PHYSICAL_DEVICE_16BIT_STORAGE_FEATURES,
    ),
    promoted(
        St::PHYSICAL_DEVICE_VULKAN_1_1_FEATURES,
        St::PHYSICAL_DEVICE_MULTIVIEW_FEATURES,
    ),
    promoted(
        St::PHYSICAL_DEVICE_VULKAN_1_1_FEATURES,
        St::PHYSICAL_DEVICE_VARIABLE_POINTERS_FEATURES,
    ),
    promoted(
        St::PHYSICAL_DEVICE_VULKAN_1_1_FEATURES,
        St::PHYSICAL_DEVICE_SAMPLER_YCBCR_CONVERSION_FEATURES,
    ),
    promoted(
        St::PHYSICAL_DEVICE_VULKAN_1_1_FEATURES,
        St::PHYSICAL_DEVICE_SHADER_DRAW_PARAMETERS_FEATURES,
    ),
    promoted(
        St::PHYSICAL_DEVICE_VULKAN_1_1_PROPERTIES,
        St::PHYSICAL_DEVICE_ID_PROPERTIES,
    ),
    Promotion {
        core: St::PHYSICAL_DEVICE_VULKAN_1_1_PROPERTIES,
        member: St::PHYSICAL_DEVICE_SUBGROUP_PROPERTIES,
        renames: &[
            ("subgroupSupportedStages", "supportedStages"),
            ("subgroupSupportedOperations", "supportedOperations"),
            ("subgroupQuadOperationsInAllStages", "quadOperationsInAllStages"),
        ],
    },
    promoted(
        St::PHYSICAL_DEVICE_VULKAN_1_1_PROPERTIES,
        St::PHYSICAL_DEVICE_MULTIVIEW_PROPERTIES,
    ),
    promoted(
        St::PHYSICAL_DEVICE_VULKAN_1_1_PROPERTIES,
        St::PHYSICAL_DEVICE_MAINTENANCE_3_PROPERTIES,
    ),
    // 1.2
    promoted(
        St::PHYSICAL_DEVICE_VULKAN_1_2_FEATURES,
        St::PHYSICAL_DEVICE_8BIT_STORAGE_FEATURES,
    ),
    promoted(
        St::PHYSICAL_DEVICE_VULKAN_1_2_FEATURES,
        St::PHYSICAL_DEVICE_SHADER_FLOAT16_INT8_FEATURES,
    ),
    promoted(
        St::PHYSICAL_DEVICE_VULKAN_1_2_FEATURES,
        St::PHYSICAL_DEVICE_DESCRIPTOR_INDEXING_FEATURES,
    ),
    promoted(
        St::PHYSICAL_DEVICE_VULKAN_1_2_FEATURES,
        St::PHYSICAL_DEVICE_SCALAR_BLOCK_LAYOUT_FEATURES,
    ),
    promoted(
        St::PHYSICAL_DEVICE_VULKAN_1_2_FEATURES,
        St::PHYSICAL_DEVICE_IMAGELESS_FRAMEBUFFER_FEATURES,
    ),
    promoted(
        St::PHYSICAL_DEVICE_VULKAN_1_2_FEATURES,
        St::PHYSICAL_DEVICE_HOST_QUERY_RESET_FEATURES,
    ),
    promoted(
        St::PHYSICAL_DEVICE_VULKAN_1_2_FEATURES,
        St::PHYSICAL_DEVICE_TIMELINE_SEMAPHORE_FEATURES,
    ),
    promoted(
        St::PHYSICAL_DEVICE_VULKAN_1_2_FEATURES,
        St::PHYSICAL_DEVICE_BUFFER_DEVICE_ADDRESS_FEATURES,
    ),
    promoted(
        St::PHYSICAL_DEVICE_VULKAN_1_2_FEATURES,
        St::PHYSICAL_DEVICE_VULKAN_MEMORY_MODEL_FEATURES,
    ),
    promoted(
        St::PHYSICAL_DEVICE_VULKAN_1_2_PROPERTIES,
        St::PHYSICAL_DEVICE_DRIVER_PROPERTIES,
    ),
    promoted(
        St::PHYSICAL_DEVICE_VULKAN_1_2_PROPERTIES,
        St::PHYSICAL_DEVICE_TIMELINE_SEMAPHORE_PROPERTIES,
    ),
    promoted(
        St::PHYSICAL_DEVICE_VULKAN_1_2_PROPERTIES,
        St::PHYSICAL_DEVICE_DESCRIPTOR_INDEXING_PROPERTIES,
    ),
    // 1.3
    promoted(
        St::PHYSICAL_DEVICE_VULKAN_1_3_FEATURES,
        St::PHYSICAL_DEVICE_IMAGE_ROBUSTNESS_FEATURES,
    ),
    promoted(
        St::PHYSICAL_DEVICE_VULKAN_1_3_FEATURES,
        St::PHYSICAL_DEVICE_SYNCHRONIZATION_2_FEATURES,
    ),
    promoted(
        St::PHYSICAL_DEVICE_VULKAN_1_3_FEATURES,
        St::PHYSICAL_DEVICE_DYNAMIC_RENDERING_FEATURES,
    ),
    promoted(
        St::PHYSICAL_DEVICE_VULKAN_1_3_FEATURES,
        St::PHYSICAL_DEVICE_MAINTENANCE_4_FEATURES,
    ),
    promoted(
        St::PHYSICAL_DEVICE_VULKAN_1_3_PROPERTIES,
        St::PHYSICAL_DEVICE_MAINTENANCE_4_PROPERTIES,
    ),
];
