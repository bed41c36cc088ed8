use crate::common::{chain, config, document, native_device, simulation};
use ash::vk;
use vk_profiles_core::{
    vpt::{MergeMode, Value},
    Chain, Simulation,
};

const PROPERTIES: vk::StructureType = vk::StructureType::PHYSICAL_DEVICE_PROPERTIES_2;

fn query(sim: &Simulation) -> Chain {
    let mut out = chain(&[PROPERTIES]);
    sim.physical_device_properties(&native_device(), &mut out);
    out
}

fn merged(mode: MergeMode) -> Chain {
    query(&simulation(
        document(),
        config(mode, ["VP_TEST_A", "VP_TEST_B"]),
    ))
}

fn field<'a>(chain: &'a Chain, name: &str) -> &'a Value {
    chain.find(PROPERTIES).unwrap().get(name).unwrap()
}

#[test]
fn upper_bound_limits() {
    // A declares 4096, B 8192 and the device reports 16384.
    let out = merged(MergeMode::Intersect);
    assert_eq!(field(&out, "limits.maxImageDimension1D"), &Value::from(4096u32));
    assert_eq!(field(&out, "limits.maxImageDimension2D"), &Value::from(4096u32));

    let out = merged(MergeMode::Union);
    assert_eq!(field(&out, "limits.maxImageDimension1D"), &Value::from(16384u32));
}

#[test]
fn lower_bound_limits() {
    let out = merged(MergeMode::Intersect);
    assert_eq!(
        field(&out, "limits.minUniformBufferOffsetAlignment"),
        &Value::from(256u64)
    );
    let out = merged(MergeMode::Union);
    assert_eq!(
        field(&out, "limits.minUniformBufferOffsetAlignment"),
        &Value::from(16u64)
    );
}

#[test]
fn bitmask_monotonicity() {
    let contributions = [0x1 | 0x4, 0x1 | 0x8];

    let intersect = field(&merged(MergeMode::Intersect), "limits.framebufferColorSampleCounts")
        .as_bitmask()
        .unwrap();
    assert_eq!(intersect, 0x1);
    for bits in contributions {
        assert_eq!(intersect & !bits, 0);
    }

    let union = field(&merged(MergeMode::Union), "limits.framebufferColorSampleCounts")
        .as_bitmask()
        .unwrap();
    assert_eq!(union, 0xf);
    for bits in contributions {
        assert_eq!(bits & !union, 0);
    }
}

#[test]
fn upper_bound_monotonicity() {
    let intersect = field(&merged(MergeMode::Intersect), "limits.maxImageDimension1D")
        .as_u32()
        .unwrap();
    let union = field(&merged(MergeMode::Union), "limits.maxImageDimension1D")
        .as_u32()
        .unwrap();
    for declared in [4096, 8192] {
        assert!(intersect <= declared);
        assert!(union >= declared);
    }
}

#[test]
fn identity_fields_are_native() {
    for mode in [
        MergeMode::Intersect,
        MergeMode::Union,
        MergeMode::Replace,
        MergeMode::Passthrough,
    ] {
        let out = merged(mode);
        assert_eq!(field(&out, "deviceName"), &Value::from("Mock GPU"));
        assert_eq!(field(&out, "vendorID"), &Value::from(0x1234u32));
    }
}

#[test]
fn api_version_emulation() {
    let mut cfg = config(MergeMode::Intersect, ["VP_TEST_A", "VP_TEST_B"]);
    let out = query(&simulation(document(), cfg.clone()));
    assert_eq!(out.find(PROPERTIES).unwrap().get("apiVersion"), None);

    cfg.emulate_api_version = true;
    let out = query(&simulation(document(), cfg));
    assert_eq!(
        field(&out, "apiVersion"),
        &Value::from(vk::API_VERSION_1_2)
    );
}

#[test]
fn merge_mode_precedence() {
    let mut doc = document();
    doc["profiles"]["VP_TEST_B"]["merge"] = serde_json::json!({
        "VkPhysicalDeviceProperties": "union"
    });

    // The directive of the first profile declaring the block wins over the
    // configured default. VP_TEST_A declares it without a directive.
    let out = query(&simulation(
        doc.clone(),
        config(MergeMode::Intersect, ["VP_TEST_A", "VP_TEST_B"]),
    ));
    assert_eq!(field(&out, "limits.maxImageDimension1D"), &Value::from(4096u32));

    let out = query(&simulation(
        doc.clone(),
        config(MergeMode::Intersect, ["VP_TEST_B", "VP_TEST_A"]),
    ));
    assert_eq!(field(&out, "limits.maxImageDimension1D"), &Value::from(16384u32));

    let mut cfg = config(MergeMode::Intersect, ["VP_TEST_B", "VP_TEST_A"]);
    cfg.merge_mode_override = Some(MergeMode::Intersect);
    let out = query(&simulation(doc, cfg));
    assert_eq!(field(&out, "limits.maxImageDimension1D"), &Value::from(4096u32));
}

#[test]
fn simulation_is_shared() {
    let sim = simulation(document(), config(MergeMode::Intersect, ["VP_TEST_A"]));
    let expected = query(&sim);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let sim = sim.clone();
            std::thread::spawn(move || query(&sim))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
