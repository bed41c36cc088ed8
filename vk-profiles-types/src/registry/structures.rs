//! Field tables of the capability structures the engine understands.
//!
//! Fields are listed in API declaration order. Nested structures are
//! flattened with dotted names.

use super::{Bound, Category, FieldDescriptor as F, FieldKind, StructDescriptor};
use crate::{
    names::{
        FlagSet, FORMAT_FEATURE_FLAGS, QUEUE_FLAGS, RESOLVE_MODE_FLAGS, SAMPLE_COUNT_FLAGS,
        SHADER_STAGE_FLAGS, SUBGROUP_FEATURE_FLAGS,
    },
    ScalarKind,
};
use ash::vk;

const fn b(name: &'static str) -> F {
    F::new(name, FieldKind::Bool)
}
const fn max32(name: &'static str) -> F {
    F::new(name, FieldKind::Scalar(ScalarKind::U32, Bound::Max))
}
const fn min32(name: &'static str) -> F {
    F::new(name, FieldKind::Scalar(ScalarKind::U32, Bound::Min))
}
const fn exact32(name: &'static str) -> F {
    F::new(name, FieldKind::Scalar(ScalarKind::U32, Bound::Exact))
}
const fn max64(name: &'static str) -> F {
    F::new(name, FieldKind::Scalar(ScalarKind::U64, Bound::Max))
}
const fn min64(name: &'static str) -> F {
    F::new(name, FieldKind::Scalar(ScalarKind::U64, Bound::Min))
}
const fn min_i32(name: &'static str) -> F {
    F::new(name, FieldKind::Scalar(ScalarKind::I32, Bound::Min))
}
const fn max_f32(name: &'static str) -> F {
    F::new(name, FieldKind::Scalar(ScalarKind::F32, Bound::Max))
}
const fn min_f32(name: &'static str) -> F {
    F::new(name, FieldKind::Scalar(ScalarKind::F32, Bound::Min))
}
const fn range_f32(name: &'static str) -> F {
    F::new(name, FieldKind::Range(ScalarKind::F32))
}
const fn max32x(name: &'static str, bounds: &'static [Bound]) -> F {
    F::new(name, FieldKind::Array(ScalarKind::U32, bounds))
}
const fn flags(name: &'static str, names: &'static FlagSet) -> F {
    F::new(name, FieldKind::Bitmask32(names))
}
const fn id32(name: &'static str) -> F {
    F::no_auto(name, FieldKind::Scalar(ScalarKind::U32, Bound::Exact))
}
const fn id_bytes(name: &'static str, len: usize) -> F {
    F::no_auto(name, FieldKind::Bytes(len))
}
const fn id_string(name: &'static str) -> F {
    F::no_auto(name, FieldKind::String(256))
}

const MAX_3: &[Bound] = &[Bound::Max, Bound::Max, Bound::Max];
const MAX_2: &[Bound] = &[Bound::Max, Bound::Max];

const FEATURES: &[F] = &[
    b("robustBufferAccess"),
    b("fullDrawIndexUint32"),
    b("imageCubeArray"),
    b("independentBlend"),
    b("geometryShader"),
    b("tessellationShader"),
    b("sampleRateShading"),
    b("dualSrcBlend"),
    b("logicOp"),
    b("multiDrawIndirect"),
    b("drawIndirectFirstInstance"),
    b("depthClamp"),
    b("depthBiasClamp"),
    b("fillModeNonSolid"),
    b("depthBounds"),
    b("wideLines"),
    b("largePoints"),
    b("alphaToOne"),
    b("multiViewport"),
    b("samplerAnisotropy"),
    b("textureCompressionETC2"),
    b("textureCompressionASTC_LDR"),
    b("textureCompressionBC"),
    b("occlusionQueryPrecise"),
    b("pipelineStatisticsQuery"),
    b("vertexPipelineStoresAndAtomics"),
    b("fragmentStoresAndAtomics"),
    b("shaderTessellationAndGeometryPointSize"),
    b("shaderImageGatherExtended"),
    b("shaderStorageImageExtendedFormats"),
    b("shaderStorageImageMultisample"),
    b("shaderStorageImageReadWithoutFormat"),
    b("shaderStorageImageWriteWithoutFormat"),
    b("shaderUniformBufferArrayDynamicIndexing"),
    b("shaderSampledImageArrayDynamicIndexing"),
    b("shaderStorageBufferArrayDynamicIndexing"),
    b("shaderStorageImageArrayDynamicIndexing"),
    b("shaderClipDistance"),
    b("shaderCullDistance"),
    b("shaderFloat64"),
    b("shaderInt64"),
    b("shaderInt16"),
    b("shaderResourceResidency"),
    b("shaderResourceMinLod"),
    b("sparseBinding"),
    b("sparseResidencyBuffer"),
    b("sparseResidencyImage2D"),
    b("sparseResidencyImage3D"),
    b("sparseResidency2Samples"),
    b("sparseResidency4Samples"),
    b("sparseResidency8Samples"),
    b("sparseResidency16Samples"),
    b("sparseResidencyAliased"),
    b("variableMultisampleRate"),
    b("inheritedQueries"),
];

const PROPERTIES: &[F] = &[
    id32("apiVersion"),
    id32("driverVersion"),
    id32("vendorID"),
    id32("deviceID"),
    id32("deviceType"),
    id_string("deviceName"),
    id_bytes("pipelineCacheUUID", vk::UUID_SIZE),
    max32("limits.maxImageDimension1D"),
    max32("limits.maxImageDimension2D"),
    max32("limits.maxImageDimension3D"),
    max32("limits.maxImageDimensionCube"),
    max32("limits.maxImageArrayLayers"),
    max32("limits.maxTexelBufferElements"),
    max32("limits.maxUniformBufferRange"),
    max32("limits.maxStorageBufferRange"),
    max32("limits.maxPushConstantsSize"),
    max32("limits.maxMemoryAllocationCount"),
    max32("limits.maxSamplerAllocationCount"),
    min64("limits.bufferImageGranularity"),
    max64("limits.sparseAddressSpaceSize"),
    max32("limits.maxBoundDescriptorSets"),
    max32("limits.maxPerStageDescriptorSamplers"),
    max32("limits.maxPerStageDescriptorUniformBuffers"),
    max32("limits.maxPerStageDescriptorStorageBuffers"),
    max32("limits.maxPerStageDescriptorSampledImages"),
    max32("limits.maxPerStageDescriptorStorageImages"),
    max32("limits.maxPerStageDescriptorInputAttachments"),
    max32("limits.maxPerStageResources"),
    max32("limits.maxDescriptorSetSamplers"),
    max32("limits.maxDescriptorSetUniformBuffers"),
    max32("limits.maxDescriptorSetUniformBuffersDynamic"),
    max32("limits.maxDescriptorSetStorageBuffers"),
    max32("limits.maxDescriptorSetStorageBuffersDynamic"),
    max32("limits.maxDescriptorSetSampledImages"),
    max32("limits.maxDescriptorSetStorageImages"),
    max32("limits.maxDescriptorSetInputAttachments"),
    max32("limits.maxVertexInputAttributes"),
    max32("limits.maxVertexInputBindings"),
    max32("limits.maxVertexInputAttributeOffset"),
    max32("limits.maxVertexInputBindingStride"),
    max32("limits.maxVertexOutputComponents"),
    max32("limits.maxTessellationGenerationLevel"),
    max32("limits.maxTessellationPatchSize"),
    max32("limits.maxTessellationControlPerVertexInputComponents"),
    max32("limits.maxTessellationControlPerVertexOutputComponents"),
    max32("limits.maxTessellationControlPerPatchOutputComponents"),
    max32("limits.maxTessellationControlTotalOutputComponents"),
    max32("limits.maxTessellationEvaluationInputComponents"),
    max32("limits.maxTessellationEvaluationOutputComponents"),
    max32("limits.maxGeometryShaderInvocations"),
    max32("limits.maxGeometryInputComponents"),
    max32("limits.maxGeometryOutputComponents"),
    max32("limits.maxGeometryOutputVertices"),
    max32("limits.maxGeometryTotalOutputComponents"),
    max32("limits.maxFragmentInputComponents"),
    max32("limits.maxFragmentOutputAttachments"),
    max32("limits.maxFragmentDualSrcAttachments"),
    max32("limits.maxFragmentCombinedOutputResources"),
    max32("limits.maxComputeSharedMemorySize"),
    max32x("limits.maxComputeWorkGroupCount", MAX_3),
    max32("limits.maxComputeWorkGroupInvocations"),
    max32x("limits.maxComputeWorkGroupSize", MAX_3),
    max32("limits.subPixelPrecisionBits"),
    max32("limits.subTexelPrecisionBits"),
    max32("limits.mipmapPrecisionBits"),
    max32("limits.maxDrawIndexedIndexValue"),
    max32("limits.maxDrawIndirectCount"),
    max_f32("limits.maxSamplerLodBias"),
    max_f32("limits.maxSamplerAnisotropy"),
    max32("limits.maxViewports"),
    max32x("limits.maxViewportDimensions", MAX_2),
    range_f32("limits.viewportBoundsRange"),
    max32("limits.viewportSubPixelBits"),
    min64("limits.minMemoryMapAlignment"),
    min64("limits.minTexelBufferOffsetAlignment"),
    min64("limits.minUniformBufferOffsetAlignment"),
    min64("limits.minStorageBufferOffsetAlignment"),
    min_i32("limits.minTexelOffset"),
    max32("limits.maxTexelOffset"),
    min_i32("limits.minTexelGatherOffset"),
    max32("limits.maxTexelGatherOffset"),
    min_f32("limits.minInterpolationOffset"),
    max_f32("limits.maxInterpolationOffset"),
    max32("limits.subPixelInterpolationOffsetBits"),
    max32("limits.maxFramebufferWidth"),
    max32("limits.maxFramebufferHeight"),
    max32("limits.maxFramebufferLayers"),
    flags("limits.framebufferColorSampleCounts", &SAMPLE_COUNT_FLAGS),
    flags("limits.framebufferDepthSampleCounts", &SAMPLE_COUNT_FLAGS),
    flags("limits.framebufferStencilSampleCounts", &SAMPLE_COUNT_FLAGS),
    flags("limits.framebufferNoAttachmentsSampleCounts", &SAMPLE_COUNT_FLAGS),
    max32("limits.maxColorAttachments"),
    flags("limits.sampledImageColorSampleCounts", &SAMPLE_COUNT_FLAGS),
    flags("limits.sampledImageIntegerSampleCounts", &SAMPLE_COUNT_FLAGS),
    flags("limits.sampledImageDepthSampleCounts", &SAMPLE_COUNT_FLAGS),
    flags("limits.sampledImageStencilSampleCounts", &SAMPLE_COUNT_FLAGS),
    flags("limits.storageImageSampleCounts", &SAMPLE_COUNT_FLAGS),
    max32("limits.maxSampleMaskWords"),
    b("limits.timestampComputeAndGraphics"),
    min_f32("limits.timestampPeriod"),
    max32("limits.maxClipDistances"),
    max32("limits.maxCullDistances"),
    max32("limits.maxCombinedClipAndCullDistances"),
    max32("limits.discreteQueuePriorities"),
    range_f32("limits.pointSizeRange"),
    range_f32("limits.lineWidthRange"),
    min_f32("limits.pointSizeGranularity"),
    min_f32("limits.lineWidthGranularity"),
    b("limits.strictLines"),
    b("limits.standardSampleLocations"),
    min64("limits.optimalBufferCopyOffsetAlignment"),
    min64("limits.optimalBufferCopyRowPitchAlignment"),
    min64("limits.nonCoherentAtomSize"),
    b("sparseProperties.residencyStandard2DBlockShape"),
    b("sparseProperties.residencyStandard2DMultisampleBlockShape"),
    b("sparseProperties.residencyStandard3DBlockShape"),
    b("sparseProperties.residencyAlignedMipSize"),
    b("sparseProperties.residencyNonResidentStrict"),
];

const VULKAN_11_FEATURES: &[F] = &[
    b("storageBuffer16BitAccess"),
    b("uniformAndStorageBuffer16BitAccess"),
    b("storagePushConstant16"),
    b("storageInputOutput16"),
    b("multiview"),
    b("multiviewGeometryShader"),
    b("multiviewTessellationShader"),
    b("variablePointersStorageBuffer"),
    b("variablePointers"),
    b("protectedMemory"),
    b("samplerYcbcrConversion"),
    b("shaderDrawParameters"),
];

const VULKAN_12_FEATURES: &[F] = &[
    b("samplerMirrorClampToEdge"),
    b("drawIndirectCount"),
    b("storageBuffer8BitAccess"),
    b("uniformAndStorageBuffer8BitAccess"),
    b("storagePushConstant8"),
    b("shaderBufferInt64Atomics"),
    b("shaderSharedInt64Atomics"),
    b("shaderFloat16"),
    b("shaderInt8"),
    b("descriptorIndexing"),
    b("shaderInputAttachmentArrayDynamicIndexing"),
    b("shaderUniformTexelBufferArrayDynamicIndexing"),
    b("shaderStorageTexelBufferArrayDynamicIndexing"),
    b("shaderUniformBufferArrayNonUniformIndexing"),
    b("shaderSampledImageArrayNonUniformIndexing"),
    b("shaderStorageBufferArrayNonUniformIndexing"),
    b("shaderStorageImageArrayNonUniformIndexing"),
    b("shaderInputAttachmentArrayNonUniformIndexing"),
    b("shaderUniformTexelBufferArrayNonUniformIndexing"),
    b("shaderStorageTexelBufferArrayNonUniformIndexing"),
    b("descriptorBindingUniformBufferUpdateAfterBind"),
    b("descriptorBindingSampledImageUpdateAfterBind"),
    b("descriptorBindingStorageImageUpdateAfterBind"),
    b("descriptorBindingStorageBufferUpdateAfterBind"),
    b("descriptorBindingUniformTexelBufferUpdateAfterBind"),
    b("descriptorBindingStorageTexelBufferUpdateAfterBind"),
    b("descriptorBindingUpdateUnusedWhilePending"),
    b("descriptorBindingPartiallyBound"),
    b("descriptorBindingVariableDescriptorCount"),
    b("runtimeDescriptorArray"),
    b("samplerFilterMinmax"),
    b("scalarBlockLayout"),
    b("imagelessFramebuffer"),
    b("uniformBufferStandardLayout"),
    b("shaderSubgroupExtendedTypes"),
    b("separateDepthStencilLayouts"),
    b("hostQueryReset"),
    b("timelineSemaphore"),
    b("bufferDeviceAddress"),
    b("bufferDeviceAddressCaptureReplay"),
    b("bufferDeviceAddressMultiDevice"),
    b("vulkanMemoryModel"),
    b("vulkanMemoryModelDeviceScope"),
    b("vulkanMemoryModelAvailabilityVisibilityChains"),
    b("shaderOutputViewportIndex"),
    b("shaderOutputLayer"),
    b("subgroupBroadcastDynamicId"),
];

const VULKAN_13_FEATURES: &[F] = &[
    b("robustImageAccess"),
    b("inlineUniformBlock"),
    b("descriptorBindingInlineUniformBlockUpdateAfterBind"),
    b("pipelineCreationCacheControl"),
    b("privateData"),
    b("shaderDemoteToHelperInvocation"),
    b("shaderTerminateInvocation"),
    b("subgroupSizeControl"),
    b("computeFullSubgroups"),
    b("synchronization2"),
    b("textureCompressionASTC_HDR"),
    b("shaderZeroInitializeWorkgroupMemory"),
    b("dynamicRendering"),
    b("shaderIntegerDotProduct"),
    b("maintenance4"),
];

const VULKAN_11_PROPERTIES: &[F] = &[
    id_bytes("deviceUUID", vk::UUID_SIZE),
    id_bytes("driverUUID", vk::UUID_SIZE),
    id_bytes("deviceLUID", vk::LUID_SIZE),
    id32("deviceNodeMask"),
    F::no_auto("deviceLUIDValid", FieldKind::Bool),
    exact32("subgroupSize"),
    flags("subgroupSupportedStages", &SHADER_STAGE_FLAGS),
    flags("subgroupSupportedOperations", &SUBGROUP_FEATURE_FLAGS),
    b("subgroupQuadOperationsInAllStages"),
    exact32("pointClippingBehavior"),
    max32("maxMultiviewViewCount"),
    max32("maxMultiviewInstanceIndex"),
    b("protectedNoFault"),
    max32("maxPerSetDescriptors"),
    max64("maxMemoryAllocationSize"),
];

const VULKAN_12_PROPERTIES: &[F] = &[
    id32("driverID"),
    id_string("driverName"),
    id_string("driverInfo"),
    id32("conformanceVersion.major"),
    id32("conformanceVersion.minor"),
    id32("conformanceVersion.subminor"),
    id32("conformanceVersion.patch"),
    exact32("denormBehaviorIndependence"),
    exact32("roundingModeIndependence"),
    b("shaderSignedZeroInfNanPreserveFloat16"),
    b("shaderSignedZeroInfNanPreserveFloat32"),
    b("shaderSignedZeroInfNanPreserveFloat64"),
    b("shaderDenormPreserveFloat16"),
    b("shaderDenormPreserveFloat32"),
    b("shaderDenormPreserveFloat64"),
    b("shaderDenormFlushToZeroFloat16"),
    b("shaderDenormFlushToZeroFloat32"),
    b("shaderDenormFlushToZeroFloat64"),
    b("shaderRoundingModeRTEFloat16"),
    b("shaderRoundingModeRTEFloat32"),
    b("shaderRoundingModeRTEFloat64"),
    b("shaderRoundingModeRTZFloat16"),
    b("shaderRoundingModeRTZFloat32"),
    b("shaderRoundingModeRTZFloat64"),
    max32("maxUpdateAfterBindDescriptorsInAllPools"),
    b("shaderUniformBufferArrayNonUniformIndexingNative"),
    b("shaderSampledImageArrayNonUniformIndexingNative"),
    b("shaderStorageBufferArrayNonUniformIndexingNative"),
    b("shaderStorageImageArrayNonUniformIndexingNative"),
    b("shaderInputAttachmentArrayNonUniformIndexingNative"),
    b("robustBufferAccessUpdateAfterBind"),
    b("quadDivergentImplicitLod"),
    max32("maxPerStageDescriptorUpdateAfterBindSamplers"),
    max32("maxPerStageDescriptorUpdateAfterBindUniformBuffers"),
    max32("maxPerStageDescriptorUpdateAfterBindStorageBuffers"),
    max32("maxPerStageDescriptorUpdateAfterBindSampledImages"),
    max32("maxPerStageDescriptorUpdateAfterBindStorageImages"),
    max32("maxPerStageDescriptorUpdateAfterBindInputAttachments"),
    max32("maxPerStageUpdateAfterBindResources"),
    max32("maxDescriptorSetUpdateAfterBindSamplers"),
    max32("maxDescriptorSetUpdateAfterBindUniformBuffers"),
    max32("maxDescriptorSetUpdateAfterBindUniformBuffersDynamic"),
    max32("maxDescriptorSetUpdateAfterBindStorageBuffers"),
    max32("maxDescriptorSetUpdateAfterBindStorageBuffersDynamic"),
    max32("maxDescriptorSetUpdateAfterBindSampledImages"),
    max32("maxDescriptorSetUpdateAfterBindStorageImages"),
    max32("maxDescriptorSetUpdateAfterBindInputAttachments"),
    flags("supportedDepthResolveModes", &RESOLVE_MODE_FLAGS),
    flags("supportedStencilResolveModes", &RESOLVE_MODE_FLAGS),
    b("independentResolveNone"),
    b("independentResolve"),
    b("filterMinmaxSingleComponentFormats"),
    b("filterMinmaxImageComponentMapping"),
    max64("maxTimelineSemaphoreValueDifference"),
    flags("framebufferIntegerColorSampleCounts", &SAMPLE_COUNT_FLAGS),
];

const VULKAN_13_PROPERTIES: &[F] = &[
    min32("minSubgroupSize"),
    max32("maxSubgroupSize"),
    max32("maxComputeWorkgroupSubgroups"),
    flags("requiredSubgroupSizeStages", &SHADER_STAGE_FLAGS),
    max32("maxInlineUniformBlockSize"),
    max32("maxPerStageDescriptorInlineUniformBlocks"),
    max32("maxPerStageDescriptorUpdateAfterBindInlineUniformBlocks"),
    max32("maxDescriptorSetInlineUniformBlocks"),
    max32("maxDescriptorSetUpdateAfterBindInlineUniformBlocks"),
    max32("maxInlineUniformTotalSize"),
    min64("storageTexelBufferOffsetAlignmentBytes"),
    b("storageTexelBufferOffsetSingleTexelAlignment"),
    min64("uniformTexelBufferOffsetAlignmentBytes"),
    b("uniformTexelBufferOffsetSingleTexelAlignment"),
    max64("maxBufferSize"),
];

const STORAGE_16BIT_FEATURES: &[F] = &[
    b("storageBuffer16BitAccess"),
    b("uniformAndStorageBuffer16BitAccess"),
    b("storagePushConstant16"),
    b("storageInputOutput16"),
];

const MULTIVIEW_FEATURES: &[F] = &[
    b("multiview"),
    b("multiviewGeometryShader"),
    b("multiviewTessellationShader"),
];

const VARIABLE_POINTERS_FEATURES: &[F] =
    &[b("variablePointersStorageBuffer"), b("variablePointers")];

const SAMPLER_YCBCR_CONVERSION_FEATURES: &[F] = &[b("samplerYcbcrConversion")];

const SHADER_DRAW_PARAMETERS_FEATURES: &[F] = &[b("shaderDrawParameters")];

const STORAGE_8BIT_FEATURES: &[F] = &[
    b("storageBuffer8BitAccess"),
    b("uniformAndStorageBuffer8BitAccess"),
    b("storagePushConstant8"),
];

const SHADER_FLOAT16_INT8_FEATURES: &[F] = &[b("shaderFloat16"), b("shaderInt8")];

const DESCRIPTOR_INDEXING_FEATURES: &[F] = &[
    b("shaderInputAttachmentArrayDynamicIndexing"),
    b("shaderUniformTexelBufferArrayDynamicIndexing"),
    b("shaderStorageTexelBufferArrayDynamicIndexing"),
    b("shaderUniformBufferArrayNonUniformIndexing"),
    b("shaderSampledImageArrayNonUniformIndexing"),
    b("shaderStorageBufferArrayNonUniformIndexing"),
    b("shaderStorageImageArrayNonUniformIndexing"),
    b("shaderInputAttachmentArrayNonUniformIndexing"),
    b("shaderUniformTexelBufferArrayNonUniformIndexing"),
    b("shaderStorageTexelBufferArrayNonUniformIndexing"),
    b("descriptorBindingUniformBufferUpdateAfterBind"),
    b("descriptorBindingSampledImageUpdateAfterBind"),
    b("descriptorBindingStorageImageUpdateAfterBind"),
    b("descriptorBindingStorageBufferUpdateAfterBind"),
    b("descriptorBindingUniformTexelBufferUpdateAfterBind"),
    b("descriptorBindingStorageTexelBufferUpdateAfterBind"),
    b("descriptorBindingUpdateUnusedWhilePending"),
    b("descriptorBindingPartiallyBound"),
    b("descriptorBindingVariableDescriptorCount"),
    b("runtimeDescriptorArray"),
];

const SCALAR_BLOCK_LAYOUT_FEATURES: &[F] = &[b("scalarBlockLayout")];

const IMAGELESS_FRAMEBUFFER_FEATURES: &[F] = &[b("imagelessFramebuffer")];

const HOST_QUERY_RESET_FEATURES: &[F] = &[b("hostQueryReset")];

const TIMELINE_SEMAPHORE_FEATURES: &[F] = &[b("timelineSemaphore")];

const BUFFER_DEVICE_ADDRESS_FEATURES: &[F] = &[
    b("bufferDeviceAddress"),
    b("bufferDeviceAddressCaptureReplay"),
    b("bufferDeviceAddressMultiDevice"),
];

const VULKAN_MEMORY_MODEL_FEATURES: &[F] = &[
    b("vulkanMemoryModel"),
    b("vulkanMemoryModelDeviceScope"),
    b("vulkanMemoryModelAvailabilityVisibilityChains"),
];

const IMAGE_ROBUSTNESS_FEATURES: &[F] = &[b("robustImageAccess")];

const SYNCHRONIZATION_2_FEATURES: &[F] = &[b("synchronization2")];

const DYNAMIC_RENDERING_FEATURES: &[F] = &[b("dynamicRendering")];

const MAINTENANCE_4_FEATURES: &[F] = &[b("maintenance4")];

const ROBUSTNESS_2_FEATURES: &[F] = &[
    b("robustBufferAccess2"),
    b("robustImageAccess2"),
    b("nullDescriptor"),
];

const ID_PROPERTIES: &[F] = &[
    id_bytes("deviceUUID", vk::UUID_SIZE),
    id_bytes("driverUUID", vk::UUID_SIZE),
    id_bytes("deviceLUID", vk::LUID_SIZE),
    id32("deviceNodeMask"),
    F::no_auto("deviceLUIDValid", FieldKind::Bool),
];

const SUBGROUP_PROPERTIES: &[F] = &[
    exact32("subgroupSize"),
    flags("supportedStages", &SHADER_STAGE_FLAGS),
    flags("supportedOperations", &SUBGROUP_FEATURE_FLAGS),
    b("quadOperationsInAllStages"),
];

const MULTIVIEW_PROPERTIES: &[F] = &[
    max32("maxMultiviewViewCount"),
    max32("maxMultiviewInstanceIndex"),
];

const MAINTENANCE_3_PROPERTIES: &[F] = &[
    max32("maxPerSetDescriptors"),
    max64("maxMemoryAllocationSize"),
];

const DRIVER_PROPERTIES: &[F] = &[
    id32("driverID"),
    id_string("driverName"),
    id_string("driverInfo"),
    id32("conformanceVersion.major"),
    id32("conformanceVersion.minor"),
    id32("conformanceVersion.subminor"),
    id32("conformanceVersion.patch"),
];

const TIMELINE_SEMAPHORE_PROPERTIES: &[F] = &[max64("maxTimelineSemaphoreValueDifference")];

const DESCRIPTOR_INDEXING_PROPERTIES: &[F] = &[
    max32("maxUpdateAfterBindDescriptorsInAllPools"),
    b("shaderUniformBufferArrayNonUniformIndexingNative"),
    b("shaderSampledImageArrayNonUniformIndexingNative"),
    b("shaderStorageBufferArrayNonUniformIndexingNative"),
    b("shaderStorageImageArrayNonUniformIndexingNative"),
    b("shaderInputAttachmentArrayNonUniformIndexingNative"),
    b("robustBufferAccessUpdateAfterBind"),
    b("quadDivergentImplicitLod"),
    max32("maxPerStageDescriptorUpdateAfterBindSamplers"),
    max32("maxPerStageDescriptorUpdateAfterBindUniformBuffers"),
    max32("maxPerStageDescriptorUpdateAfterBindStorageBuffers"),
    max32("maxPerStageDescriptorUpdateAfterBindSampledImages"),
    max32("maxPerStageDescriptorUpdateAfterBindStorageImages"),
    max32("maxPerStageDescriptorUpdateAfterBindInputAttachments"),
    max32("maxPerStageUpdateAfterBindResources"),
    max32("maxDescriptorSetUpdateAfterBindSamplers"),
    max32("maxDescriptorSetUpdateAfterBindUniformBuffers"),
    max32("maxDescriptorSetUpdateAfterBindUniformBuffersDynamic"),
    max32("maxDescriptorSetUpdateAfterBindStorageBuffers"),
    max32("maxDescriptorSetUpdateAfterBindStorageBuffersDynamic"),
    max32("maxDescriptorSetUpdateAfterBindSampledImages"),
    max32("maxDescriptorSetUpdateAfterBindStorageImages"),
    max32("maxDescriptorSetUpdateAfterBindInputAttachments"),
];

const MAINTENANCE_4_PROPERTIES: &[F] = &[max64("maxBufferSize")];

const FORMAT_PROPERTIES: &[F] = &[
    flags("linearTilingFeatures", &FORMAT_FEATURE_FLAGS),
    flags("optimalTilingFeatures", &FORMAT_FEATURE_FLAGS),
    flags("bufferFeatures", &FORMAT_FEATURE_FLAGS),
];

const QUEUE_FAMILY_PROPERTIES: &[F] = &[
    flags("queueFlags", &QUEUE_FLAGS),
    max32("queueCount"),
    max32("timestampValidBits"),
    min32("minImageTransferGranularity.width"),
    min32("minImageTransferGranularity.height"),
    min32("minImageTransferGranularity.depth"),
];

const fn api(
    name: &'static str,
    ty: vk::StructureType,
    category: Category,
    fields: &'static [F],
) -> StructDescriptor {
    StructDescriptor {
        name,
        ty,
        category,
        extension: None,
        fields,
    }
}

const fn ext(
    name: &'static str,
    ty: vk::StructureType,
    category: Category,
    extension: &'static str,
    fields: &'static [F],
) -> StructDescriptor {
    StructDescriptor {
        name,
        ty,
        category,
        extension: Some(extension),
        fields,
    }
}

use super::Category::{Features as Feat, Properties as Prop};
type St = vk::StructureType;

pub(super) static STRUCTURES: &[StructDescriptor] = &[
    api("VkPhysicalDeviceFeatures", St::PHYSICAL_DEVICE_FEATURES_2, Feat, FEATURES),
    api("VkPhysicalDeviceProperties", St::PHYSICAL_DEVICE_PROPERTIES_2, Prop, PROPERTIES),
    api(
        "VkPhysicalDeviceVulkan11Features",
        St::PHYSICAL_DEVICE_VULKAN_1_1_FEATURES,
        Feat,
        VULKAN_11_FEATURES,
    ),
    api(
        "VkPhysicalDeviceVulkan12Features",
        St::PHYSICAL_DEVICE_VULKAN_1_2_FEATURES,
        Feat,
        VULKAN_12_FEATURES,
    ),
    api(
        "VkPhysicalDeviceVulkan13Features",
        St::PHYSICAL_DEVICE_VULKAN_1_3_FEATURES,
        Feat,
        VULKAN_13_FEATURES,
    ),
    api(
        "VkPhysicalDeviceVulkan11Properties",
        St::PHYSICAL_DEVICE_VULKAN_1_1_PROPERTIES,
        Prop,
        VULKAN_11_PROPERTIES,
    ),
    api(
        "VkPhysicalDeviceVulkan12Properties",
        St::PHYSICAL_DEVICE_VULKAN_1_2_PROPERTIES,
        Prop,
        VULKAN_12_PROPERTIES,
    ),
    api(
        "VkPhysicalDeviceVulkan13Properties",
        St::PHYSICAL_DEVICE_VULKAN_1_3_PROPERTIES,
        Prop,
        VULKAN_13_PROPERTIES,
    ),
    ext(
        "VkPhysicalDevice16BitStorageFeatures",
        St::PHYSICAL_DEVICE_16BIT_STORAGE_FEATURES,
        Feat,
        "VK_KHR_16bit_storage",
        STORAGE_16BIT_FEATURES,
    ),
    ext(
        "VkPhysicalDeviceMultiviewFeatures",
        St::PHYSICAL_DEVICE_MULTIVIEW_FEATURES,
        Feat,
        "VK_KHR_multiview",
        MULTIVIEW_FEATURES,
    ),
    ext(
        "VkPhysicalDeviceVariablePointersFeatures",
        St::PHYSICAL_DEVICE_VARIABLE_POINTERS_FEATURES,
        Feat,
        "VK_KHR_variable_pointers",
        VARIABLE_POINTERS_FEATURES,
    ),
    ext(
        "VkPhysicalDeviceSamplerYcbcrConversionFeatures",
        St::PHYSICAL_DEVICE_SAMPLER_YCBCR_CONVERSION_FEATURES,
        Feat,
        "VK_KHR_sampler_ycbcr_conversion",
        SAMPLER_YCBCR_CONVERSION_FEATURES,
    ),
    ext(
        "VkPhysicalDeviceShaderDrawParametersFeatures",
        St::PHYSICAL_DEVICE_SHADER_DRAW_PARAMETERS_FEATURES,
        Feat,
        "VK_KHR_shader_draw_parameters",
        SHADER_DRAW_PARAMETERS_FEATURES,
    ),
    ext(
        "VkPhysicalDevice8BitStorageFeatures",
        St::PHYSICAL_DEVICE_8BIT_STORAGE_FEATURES,
        Feat,
        "VK_KHR_8bit_storage",
        STORAGE_8BIT_FEATURES,
    ),
    ext(
        "VkPhysicalDeviceShaderFloat16Int8Features",
        St::PHYSICAL_DEVICE_SHADER_FLOAT16_INT8_FEATURES,
        Feat,
        "VK_KHR_shader_float16_int8",
        SHADER_FLOAT16_INT8_FEATURES,
    ),
    ext(
        "VkPhysicalDeviceDescriptorIndexingFeatures",
        St::PHYSICAL_DEVICE_DESCRIPTOR_INDEXING_FEATURES,
        Feat,
        "VK_EXT_descriptor_indexing",
        DESCRIPTOR_INDEXING_FEATURES,
    ),
    ext(
        "VkPhysicalDeviceScalarBlockLayoutFeatures",
        St::PHYSICAL_DEVICE_SCALAR_BLOCK_LAYOUT_FEATURES,
        Feat,
        "VK_EXT_scalar_block_layout",
        SCALAR_BLOCK_LAYOUT_FEATURES,
    ),
    ext(
        "VkPhysicalDeviceImagelessFramebufferFeatures",
        St::PHYSICAL_DEVICE_IMAGELESS_FRAMEBUFFER_FEATURES,
        Feat,
        "VK_KHR_imageless_framebuffer",
        IMAGELESS_FRAMEBUFFER_FEATURES,
    ),
    ext(
        "VkPhysicalDeviceHostQueryResetFeatures",
        St::PHYSICAL_DEVICE_HOST_QUERY_RESET_FEATURES,
        Feat,
        "VK_EXT_host_query_reset",
        HOST_QUERY_RESET_FEATURES,
    ),
    ext(
        "VkPhysicalDeviceTimelineSemaphoreFeatures",
        St::PHYSICAL_DEVICE_TIMELINE_SEMAPHORE_FEATURES,
        Feat,
        "VK_KHR_timeline_semaphore",
        TIMELINE_SEMAPHORE_FEATURES,
    ),
    ext(
        "VkPhysicalDeviceBufferDeviceAddressFeatures",
        St::PHYSICAL_DEVICE_BUFFER_DEVICE_ADDRESS_FEATURES,
        Feat,
        "VK_KHR_buffer_device_address",
        BUFFER_DEVICE_ADDRESS_FEATURES,
    ),
    ext(
        "VkPhysicalDeviceVulkanMemoryModelFeatures",
        St::PHYSICAL_DEVICE_VULKAN_MEMORY_MODEL_FEATURES,
        Feat,
        "VK_KHR_vulkan_memory_model",
        VULKAN_MEMORY_MODEL_FEATURES,
    ),
    ext(
        "VkPhysicalDeviceImageRobustnessFeatures",
        St::PHYSICAL_DEVICE_IMAGE_ROBUSTNESS_FEATURES,
        Feat,
        "VK_EXT_image_robustness",
        IMAGE_ROBUSTNESS_FEATURES,
    ),
    ext(
        "VkPhysicalDeviceSynchronization2Features",
        St::PHYSICAL_DEVICE_SYNCHRONIZATION_2_FEATURES,
        Feat,
        "VK_KHR_synchronization2",
        SYNCHRONIZATION_2_FEATURES,
    ),
    ext(
        "VkPhysicalDeviceDynamicRenderingFeatures",
        St::PHYSICAL_DEVICE_DYNAMIC_RENDERING_FEATURES,
        Feat,
        "VK_KHR_dynamic_rendering",
        DYNAMIC_RENDERING_FEATURES,
    ),
    ext(
        "VkPhysicalDeviceMaintenance4Features",
        St::PHYSICAL_DEVICE_MAINTENANCE_4_FEATURES,
        Feat,
        "VK_KHR_maintenance4",
        MAINTENANCE_4_FEATURES,
    ),
    ext(
        "VkPhysicalDeviceRobustness2FeaturesEXT",
        St::PHYSICAL_DEVICE_ROBUSTNESS_2_FEATURES_EXT,
        Feat,
        "VK_EXT_robustness2",
        ROBUSTNESS_2_FEATURES,
    ),
    ext(
        "VkPhysicalDeviceIDProperties",
        St::PHYSICAL_DEVICE_ID_PROPERTIES,
        Prop,
        "VK_KHR_external_memory_capabilities",
        ID_PROPERTIES,
    ),
    api(
        "VkPhysicalDeviceSubgroupProperties",
        St::PHYSICAL_DEVICE_SUBGROUP_PROPERTIES,
        Prop,
        SUBGROUP_PROPERTIES,
    ),
    ext(
        "VkPhysicalDeviceMultiviewProperties",
        St::PHYSICAL_DEVICE_MULTIVIEW_PROPERTIES,
        Prop,
        "VK_KHR_multiview",
        MULTIVIEW_PROPERTIES,
    ),
    ext(
        "VkPhysicalDeviceMaintenance3Properties",
        St::PHYSICAL_DEVICE_MAINTENANCE_3_PROPERTIES,
        Prop,
        "VK_KHR_maintenance3",
        MAINTENANCE_3_PROPERTIES,
    ),
    ext(
        "VkPhysicalDeviceDriverProperties",
        St::PHYSICAL_DEVICE_DRIVER_PROPERTIES,
        Prop,
        "VK_KHR_driver_properties",
        DRIVER_PROPERTIES,
    ),
    ext(
        "VkPhysicalDeviceTimelineSemaphoreProperties",
        St::PHYSICAL_DEVICE_TIMELINE_SEMAPHORE_PROPERTIES,
        Prop,
        "VK_KHR_timeline_semaphore",
        TIMELINE_SEMAPHORE_PROPERTIES,
    ),
    ext(
        "VkPhysicalDeviceDescriptorIndexingProperties",
        St::PHYSICAL_DEVICE_DESCRIPTOR_INDEXING_PROPERTIES,
        Prop,
        "VK_EXT_descriptor_indexing",
        DESCRIPTOR_INDEXING_PROPERTIES,
    ),
    ext(
        "VkPhysicalDeviceMaintenance4Properties",
        St::PHYSICAL_DEVICE_MAINTENANCE_4_PROPERTIES,
        Prop,
        "VK_KHR_maintenance4",
        MAINTENANCE_4_PROPERTIES,
    ),
    api(
        "VkFormatProperties",
        St::FORMAT_PROPERTIES_2,
        Category::Format,
        FORMAT_PROPERTIES,
    ),
    api(
        "VkQueueFamilyProperties",
        St::QUEUE_FAMILY_PROPERTIES_2,
        Category::QueueFamily,
        QUEUE_FAMILY_PROPERTIES,
    ),
];
