use crate::common::{config, document, native_device, simulation, MockDevice};
use ash::vk;
use vk_profiles_core::{
    matcher,
    vpt::{Extent3d, MergeMode, QueueFamilyProperties},
    NativeDevice, SimulationError,
};

#[test]
fn first_capable_family() {
    // Family 0 has too few queues, family 1 is enough.
    let native = native_device().queue_family_properties();
    let requirement = QueueFamilyProperties {
        queue_flags: vk::QueueFlags::GRAPHICS,
        queue_count: 2,
        ..Default::default()
    };
    assert_eq!(matcher::matches_queue_family(&native, &requirement), Some(1));
}

#[test]
fn transfer_granularity() {
    let native = MockDevice::new("Granular")
        .with_queue_family(vk::QueueFlags::TRANSFER, 1, Extent3d::new(0, 0, 0))
        .with_queue_family(vk::QueueFlags::TRANSFER, 1, Extent3d::new(8, 8, 8))
        .queue_family_properties();
    let mut requirement = QueueFamilyProperties {
        queue_flags: vk::QueueFlags::TRANSFER,
        queue_count: 1,
        min_image_transfer_granularity: Extent3d::new(16, 16, 16),
        ..Default::default()
    };
    assert_eq!(matcher::matches_queue_family(&native, &requirement), Some(1));
    requirement.min_image_transfer_granularity = Extent3d::new(4, 4, 4);
    assert_eq!(matcher::matches_queue_family(&native, &requirement), None);
    requirement.min_image_transfer_granularity = Extent3d::new(0, 0, 0);
    assert_eq!(matcher::matches_queue_family(&native, &requirement), Some(0));
}

#[test]
fn satisfied_requirements_report_native_families() {
    let sim = simulation(document(), config(MergeMode::Intersect, ["VP_TEST_QUEUES"]));
    let device = native_device();
    assert_eq!(
        sim.queue_family_properties(&device).unwrap(),
        device.queue_family_properties()
    );
}

#[test]
fn unsatisfiable_requirements() {
    let device = MockDevice::new("Small").with_queue_family(
        vk::QueueFlags::GRAPHICS,
        1,
        Extent3d::new(1, 1, 1),
    );

    let sim = simulation(document(), config(MergeMode::Intersect, ["VP_TEST_QUEUES"]));
    assert_eq!(
        sim.queue_family_properties(&device).unwrap(),
        device.queue_family_properties()
    );

    let mut cfg = config(MergeMode::Intersect, ["VP_TEST_QUEUES"]);
    cfg.fail_on_error = true;
    let sim = simulation(document(), cfg);
    match sim.queue_family_properties(&device) {
        Err(SimulationError::QueueFamilyUnsatisfiable { profile, index }) => {
            assert_eq!(profile, "VP_TEST_QUEUES");
            assert_eq!(index, 0);
        }
        other => panic!("unexpected {other:?}"),
    }
}
