use crate::common::{config, document, native_device, simulation};
use ash::vk;
use vk_profiles_core::{
    vpt::{FormatProperties, MergeMode},
    ComplianceReport, Incompatibility,
};

fn reports(profiles: [&str; 4]) -> Vec<ComplianceReport> {
    simulation(document(), config(MergeMode::Intersect, profiles)).check_device(&native_device())
}

#[test]
fn reports_per_requested_profile() {
    let reports = reports(["VP_TEST_A", "VP_TEST_B", "VP_UNKNOWN", "VP_TEST_QUEUES"]);
    let names: Vec<&str> = reports.iter().map(|r| r.profile.as_str()).collect();
    assert_eq!(names, ["VP_TEST_A", "VP_TEST_B", "VP_TEST_QUEUES"]);

    assert_eq!(
        reports[0].incompatibilities,
        [
            Incompatibility::Feature {
                block: "VkPhysicalDeviceFeatures",
                field: "wideLines",
            },
            Incompatibility::Format {
                format: vk::Format::R8G8B8A8_UNORM,
                missing: FormatProperties {
                    optimal_tiling_features: vk::FormatFeatureFlags::STORAGE_IMAGE,
                    ..Default::default()
                },
            },
        ]
    );
    assert_eq!(
        reports[1].incompatibilities,
        [
            Incompatibility::Flags {
                block: "VkPhysicalDeviceProperties",
                field: "limits.framebufferColorSampleCounts",
                missing: 0x8,
            },
            Incompatibility::Format {
                format: vk::Format::R8G8B8A8_UNORM,
                missing: FormatProperties {
                    buffer_features: vk::FormatFeatureFlags::VERTEX_BUFFER,
                    ..Default::default()
                },
            },
        ]
    );
    assert!(reports[2].is_compatible());
}

#[test]
fn api_version_and_fallback_are_not_applied() {
    let sim = simulation(document(), config(MergeMode::Intersect, ["VP_TEST_FUTURE"]));
    let reports = sim.check_device(&native_device());
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].profile, "VP_TEST_FUTURE");
    assert_eq!(
        reports[0].incompatibilities[0],
        Incompatibility::ApiVersion {
            required: vk::make_api_version(0, 1, 4, 0),
            available: vk::API_VERSION_1_3,
        }
    );
    assert!(reports[0]
        .incompatibilities
        .iter()
        .any(|i| i.to_string() == "VkPhysicalDeviceFeatures.wideLines is not supported"));
}
