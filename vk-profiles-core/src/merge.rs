/*! Per-field combination of declared capability blocks with the native
 *  baseline.
 *
 *  The combination rule is picked by the field kind and its bound direction:
 *
 *  | kind                 | intersect | union (with native) |
 *  |----------------------|-----------|---------------------|
 *  | bool                 | AND       | OR                  |
 *  | bitmask              | AND       | OR                  |
 *  | numeric, `Max` bound | minimum   | maximum             |
 *  | numeric, `Min` bound | maximum   | minimum             |
 *
 *  Strings, byte arrays and `Exact` numerics are only taken when every
 *  declared value agrees. `Replace` takes the first declared value and
 *  `Passthrough` keeps the native block.
 */

use crate::document::Profile;
use arrayvec::ArrayVec;
use ash::vk;
use std::cmp::Ordering;
use vpt::{Bound, CapabilityBlock, FieldKind, MergeMode, Registry, Scalar, Value, MAX_ARRAY_LEN};

fn fold_scalars(
    mut items: impl Iterator<Item = Scalar>,
    bound: Bound,
    mode: MergeMode,
) -> Option<Scalar> {
    let first = items.next()?;
    items.try_fold(first, |acc, item| {
        let ordering = acc.compare(&item)?;
        // `keep_acc` is true when `acc` is the value the rule selects.
        let keep_acc = match (bound, mode) {
            (Bound::Exact, _) => return (ordering == Ordering::Equal).then_some(acc),
            (Bound::Max, MergeMode::Intersect) | (Bound::Min, MergeMode::Union) => {
                ordering != Ordering::Greater
            }
            (Bound::Min, MergeMode::Intersect) | (Bound::Max, MergeMode::Union) => {
                ordering != Ordering::Less
            }
            (_, MergeMode::Replace) | (_, MergeMode::Passthrough) => true,
        };
        Some(if keep_acc { acc } else { item })
    })
}

fn all_equal<'a>(values: &[&'a Value]) -> Option<&'a Value> {
    let (&first, rest) = values.split_first()?;
    rest.iter().all(|&v| v == first).then_some(first)
}

/// Combines the declared values of one field. `baseline` is the native value
/// and only takes part in `Union` for ordered kinds.
fn combine(
    kind: FieldKind,
    declared: &[&Value],
    baseline: Option<&Value>,
    mode: MergeMode,
) -> Option<Value> {
    match mode {
        MergeMode::Passthrough => return baseline.cloned(),
        MergeMode::Replace => return declared.first().map(|&v| v.clone()),
        MergeMode::Intersect | MergeMode::Union => {}
    }
    let union_baseline = match mode {
        MergeMode::Union => baseline,
        _ => None,
    };
    let ordered = || declared.iter().copied().chain(union_baseline);

    match kind {
        FieldKind::Bool => {
            let mut values = ordered().map(Value::as_bool);
            let first = values.next()??;
            values
                .try_fold(first, |acc, v| {
                    let v = v?;
                    Some(match mode {
                        MergeMode::Union => acc || v,
                        _ => acc && v,
                    })
                })
                .map(Value::Bool)
        }
        FieldKind::Bitmask32(_) | FieldKind::Bitmask64(_) => {
            let mut values = ordered().map(Value::as_bitmask);
            let first = values.next()??;
            values
                .try_fold(first, |acc, v| {
                    let v = v?;
                    Some(match mode {
                        MergeMode::Union => acc | v,
                        _ => acc & v,
                    })
                })
                .map(Value::Bitmask)
        }
        FieldKind::Scalar(_, Bound::Exact) | FieldKind::String(_) | FieldKind::Bytes(_) => {
            all_equal(declared).cloned()
        }
        FieldKind::Scalar(_, bound) => fold_scalars(
            ordered().map(Value::as_scalar).collect::<Option<Vec<_>>>()?.into_iter(),
            bound,
            mode,
        )
        .map(Value::Scalar),
        FieldKind::Array(..) | FieldKind::Range(_) => {
            let len = kind.len()?;
            let mut out = ArrayVec::<Scalar, MAX_ARRAY_LEN>::new();
            for index in 0..len {
                let bound = kind.element_bound(index);
                let element = |value: &Value| value.as_array().and_then(|items| items.get(index).copied());
                let items = match bound {
                    Bound::Exact => declared.iter().map(|&v| element(v)).collect::<Option<Vec<_>>>()?,
                    _ => ordered().map(element).collect::<Option<Vec<_>>>()?,
                };
                out.try_push(fold_scalars(items.into_iter(), bound, mode)?).ok()?;
            }
            Some(Value::Array(out))
        }
    }
}

/// Merges the blocks declared for one tag into the native block.
///
/// `contributions` holds one block per active profile that declares the tag,
/// in request order. With no contributions the native block comes back
/// unchanged.
pub fn merge_block(
    native: &CapabilityBlock,
    contributions: &[&CapabilityBlock],
    mode: MergeMode,
) -> CapabilityBlock {
    let mut merged = native.clone();
    let desc = match native.descriptor() {
        Some(desc) => desc,
        None => return merged,
    };
    if mode == MergeMode::Passthrough || contributions.is_empty() {
        return merged;
    }

    let mut declared = Vec::with_capacity(contributions.len());
    for (index, field) in desc.fields.iter().enumerate() {
        if !field.is_auto() {
            continue;
        }
        declared.clear();
        declared.extend(
            contributions
                .iter()
                .filter(|block| block.ty() == native.ty())
                .filter_map(|block| block.get_index(index)),
        );
        if declared.is_empty() {
            continue;
        }
        let baseline = native.get_index(index);
        match combine(field.kind, &declared, baseline, mode) {
            Some(value) => {
                if let Err(e) = merged.set_index(index, value) {
                    log::debug!("Keeping native {}.{}: {}", desc.name, field.name, e);
                }
            }
            None => log::debug!(
                "Declared values of {}.{} disagree, keeping native",
                desc.name,
                field.name
            ),
        }
    }
    merged
}

/// The view `profile` declares of the block `ty`.
///
/// Fields come from the block itself and from blocks the registry relates to
/// it through promotion (core aggregates and the extension blocks folded
/// into them). Fields declared on the block itself win.
pub fn declared_view(
    registry: &Registry,
    profile: &Profile,
    ty: vk::StructureType,
) -> Option<CapabilityBlock> {
    let desc = registry.lookup(ty)?;
    let direct = profile.block(ty);
    let mut view = CapabilityBlock::new(desc);
    let mut declared = direct.is_some();

    for related in registry.related(ty) {
        let source = match profile.block(related.source) {
            Some(source) => source,
            None => continue,
        };
        for (index, field) in desc.fields.iter().enumerate() {
            if let Some(value) = source.get(related.source_field(field.name)) {
                if view.set_index(index, value.clone()).is_ok() {
                    declared = true;
                }
            }
        }
    }
    if let Some(direct) = direct {
        view.overlay(direct);
    }
    declared.then_some(view)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(ty: vk::StructureType) -> CapabilityBlock {
        CapabilityBlock::new(Registry::builtin().lookup(ty).unwrap())
    }

    fn features() -> CapabilityBlock {
        block(vk::StructureType::PHYSICAL_DEVICE_FEATURES_2)
    }

    fn properties() -> CapabilityBlock {
        block(vk::StructureType::PHYSICAL_DEVICE_PROPERTIES_2)
    }

    #[test]
    fn bools() {
        let mut native = features();
        native.set("geometryShader", true).unwrap();
        native.set("wideLines", false).unwrap();
        let mut a = features();
        a.set("geometryShader", true).unwrap();
        a.set("wideLines", true).unwrap();
        let mut b = features();
        b.set("geometryShader", false).unwrap();

        let merged = merge_block(&native, &[&a, &b], MergeMode::Intersect);
        assert_eq!(merged.get("geometryShader"), Some(&Value::Bool(false)));
        assert_eq!(merged.get("wideLines"), Some(&Value::Bool(true)));

        let merged = merge_block(&native, &[&a, &b], MergeMode::Union);
        assert_eq!(merged.get("geometryShader"), Some(&Value::Bool(true)));

        let merged = merge_block(&native, &[&b, &a], MergeMode::Replace);
        assert_eq!(merged.get("geometryShader"), Some(&Value::Bool(false)));
        assert_eq!(merged.get("wideLines"), Some(&Value::Bool(true)));
    }

    #[test]
    fn bounds() {
        let mut native = properties();
        native.set("limits.maxImageDimension2D", 16384u32).unwrap();
        native
            .set("limits.minUniformBufferOffsetAlignment", 64u64)
            .unwrap();
        let mut a = properties();
        a.set("limits.maxImageDimension2D", 4096u32).unwrap();
        a.set("limits.minUniformBufferOffsetAlignment", 256u64).unwrap();
        let mut b = properties();
        b.set("limits.maxImageDimension2D", 8192u32).unwrap();
        b.set("limits.minUniformBufferOffsetAlignment", 128u64).unwrap();

        let merged = merge_block(&native, &[&a, &b], MergeMode::Intersect);
        assert_eq!(
            merged.get("limits.maxImageDimension2D"),
            Some(&Value::from(4096u32))
        );
        assert_eq!(
            merged.get("limits.minUniformBufferOffsetAlignment"),
            Some(&Value::from(256u64))
        );

        let merged = merge_block(&native, &[&a, &b], MergeMode::Union);
        assert_eq!(
            merged.get("limits.maxImageDimension2D"),
            Some(&Value::from(16384u32))
        );
        assert_eq!(
            merged.get("limits.minUniformBufferOffsetAlignment"),
            Some(&Value::from(64u64))
        );
    }

    #[test]
    fn arrays_and_ranges() {
        let mut native = properties();
        native
            .set(
                "limits.pointSizeRange",
                Value::array([Scalar::F32(1.0), Scalar::F32(256.0)]),
            )
            .unwrap();
        let mut a = properties();
        a.set(
            "limits.pointSizeRange",
            Value::array([Scalar::F32(2.0), Scalar::F32(64.0)]),
        )
        .unwrap();
        a.set(
            "limits.maxComputeWorkGroupSize",
            Value::array([Scalar::U32(128), Scalar::U32(128), Scalar::U32(64)]),
        )
        .unwrap();
        let mut b = properties();
        b.set(
            "limits.pointSizeRange",
            Value::array([Scalar::F32(1.0), Scalar::F32(128.0)]),
        )
        .unwrap();
        b.set(
            "limits.maxComputeWorkGroupSize",
            Value::array([Scalar::U32(256), Scalar::U32(64), Scalar::U32(64)]),
        )
        .unwrap();

        let merged = merge_block(&native, &[&a, &b], MergeMode::Intersect);
        assert_eq!(
            merged.get("limits.pointSizeRange"),
            Some(&Value::array([Scalar::F32(2.0), Scalar::F32(64.0)]))
        );
        assert_eq!(
            merged.get("limits.maxComputeWorkGroupSize"),
            Some(&Value::array([
                Scalar::U32(128),
                Scalar::U32(64),
                Scalar::U32(64)
            ]))
        );

        let merged = merge_block(&native, &[&a, &b], MergeMode::Union);
        assert_eq!(
            merged.get("limits.pointSizeRange"),
            Some(&Value::array([Scalar::F32(1.0), Scalar::F32(256.0)]))
        );
    }

    #[test]
    fn exact_values_need_agreement() {
        let mut native = block(vk::StructureType::PHYSICAL_DEVICE_VULKAN_1_1_PROPERTIES);
        native.set("subgroupSize", 32u32).unwrap();
        let mut a = block(vk::StructureType::PHYSICAL_DEVICE_VULKAN_1_1_PROPERTIES);
        a.set("subgroupSize", 64u32).unwrap();
        let mut b = a.clone();

        let merged = merge_block(&native, &[&a, &b], MergeMode::Intersect);
        assert_eq!(merged.get("subgroupSize"), Some(&Value::from(64u32)));

        b.set("subgroupSize", 16u32).unwrap();
        for mode in [MergeMode::Intersect, MergeMode::Union] {
            let merged = merge_block(&native, &[&a, &b], mode);
            assert_eq!(merged.get("subgroupSize"), Some(&Value::from(32u32)));
        }
    }

    #[test]
    fn native_only_fields() {
        let mut native = properties();
        native.set("deviceName", "Native GPU").unwrap();
        native.set("vendorID", 0x10de_u32).unwrap();
        let mut a = properties();
        a.set("deviceName", "Profile GPU").unwrap();
        a.set("vendorID", 0x1002_u32).unwrap();

        for mode in [
            MergeMode::Intersect,
            MergeMode::Union,
            MergeMode::Replace,
            MergeMode::Passthrough,
        ] {
            assert_eq!(merge_block(&native, &[&a], mode), native);
        }
    }

    #[test]
    fn absence_and_passthrough() {
        let mut native = features();
        native.set("robustBufferAccess", true).unwrap();
        assert_eq!(merge_block(&native, &[], MergeMode::Intersect), native);

        let mut a = features();
        a.set("robustBufferAccess", false).unwrap();
        assert_eq!(merge_block(&native, &[&a], MergeMode::Passthrough), native);

        let opaque = CapabilityBlock::opaque(vk::StructureType::APPLICATION_INFO);
        assert_eq!(merge_block(&opaque, &[&a], MergeMode::Replace), opaque);
    }
}
