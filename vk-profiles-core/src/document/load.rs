use super::{DeclaredBlock, FormatRequirement, Profile, ProfileDocument, SchemaViolation};
use ash::vk;
use serde::Deserialize;
use serde_json::{Map, Value as Json};
use std::collections::BTreeMap;
use vpt::{
    names, Category, CapabilityBlock, ExtensionProperties, Extent3d, FieldKind, FormatProperties,
    MergeMode, QueueFamilyProperties, Registry, Scalar, ScalarKind, StructDescriptor, Value,
};

#[derive(Deserialize)]
struct ProfileHeader {
    #[serde(default)]
    version: u32,
    #[serde(rename = "api-version")]
    api_version: String,
    label: Option<String>,
    description: Option<String>,
    #[serde(default)]
    capabilities: Vec<String>,
    #[serde(default)]
    fallback: Vec<String>,
    #[serde(default)]
    merge: BTreeMap<String, MergeMode>,
}

#[derive(Default, Deserialize)]
struct CapabilitySetHeader {
    #[serde(default)]
    extensions: BTreeMap<String, u32>,
    #[serde(default)]
    features: Map<String, Json>,
    #[serde(default)]
    properties: Map<String, Json>,
    #[serde(default)]
    formats: Map<String, Json>,
    #[serde(default, rename = "queueFamiliesProperties")]
    queue_families: Vec<Json>,
}

/// A capability set after name resolution.
#[derive(Default)]
struct CapabilitySet {
    extensions: Vec<ExtensionProperties>,
    blocks: Vec<CapabilityBlock>,
    formats: Vec<FormatRequirement>,
    queue_families: Vec<QueueFamilyProperties>,
}

fn malformed(context: impl Into<String>, reason: impl ToString) -> SchemaViolation {
    SchemaViolation::Malformed {
        context: context.into(),
        reason: reason.to_string(),
    }
}

/// `VK_<AUTHOR>_<name>`: an uppercase author tag and a non-empty name, ASCII
/// alphanumerics and underscores only.
fn is_extension_name(name: &str) -> bool {
    let Some(rest) = name.strip_prefix("VK_") else {
        return false;
    };
    let Some((author, ext)) = rest.split_once('_') else {
        return false;
    };
    !author.is_empty()
        && author.bytes().all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
        && !ext.is_empty()
        && ext.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

/// Field context while converting one block.
struct BlockContext<'a> {
    set: &'a str,
    desc: &'static StructDescriptor,
}

impl BlockContext<'_> {
    fn unknown_field(&self, field: &str) -> SchemaViolation {
        SchemaViolation::UnknownField {
            set: self.set.to_owned(),
            block: self.desc.name.to_owned(),
            field: field.to_owned(),
        }
    }

    fn field_kind(&self, field: &str) -> SchemaViolation {
        SchemaViolation::FieldKind {
            set: self.set.to_owned(),
            block: self.desc.name.to_owned(),
            field: field.to_owned(),
        }
    }

    fn unknown_flag(&self, field: &str, flag: &str) -> SchemaViolation {
        SchemaViolation::UnknownFlag {
            set: self.set.to_owned(),
            block: self.desc.name.to_owned(),
            field: field.to_owned(),
            flag: flag.to_owned(),
        }
    }

    /// Fills `block` from a JSON object, descending into nested structures
    /// with a dotted prefix.
    fn fill(
        &self,
        block: &mut CapabilityBlock,
        prefix: &str,
        object: &Map<String, Json>,
    ) -> Result<(), SchemaViolation> {
        for (key, json) in object.iter() {
            let name = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{prefix}.{key}")
            };
            if let Some((index, field)) = self.desc.field(&name) {
                let value = self.value(&name, field.kind, json)?;
                block
                    .set_index(index, value)
                    .map_err(|_| self.field_kind(&name))?;
                continue;
            }
            match *json {
                Json::Object(ref nested) if self.has_prefix(&name) => {
                    self.fill(block, &name, nested)?;
                }
                _ => return Err(self.unknown_field(&name)),
            }
        }
        Ok(())
    }

    fn has_prefix(&self, name: &str) -> bool {
        self.desc.fields.iter().any(|field| {
            field
                .name
                .strip_prefix(name)
                .map_or(false, |rest| rest.starts_with('.'))
        })
    }

    fn value(&self, name: &str, kind: FieldKind, json: &Json) -> Result<Value, SchemaViolation> {
        let value = match kind {
            FieldKind::Bool => json.as_bool().map(Value::Bool),
            FieldKind::Bitmask32(flags) | FieldKind::Bitmask64(flags) => {
                Some(Value::Bitmask(self.bitmask(name, flags, json)?))
            }
            FieldKind::Scalar(scalar, _) => scalar_from_json(scalar, json).map(Value::Scalar),
            FieldKind::Array(scalar, _) | FieldKind::Range(scalar) => {
                json.as_array().and_then(|items| {
                    items
                        .iter()
                        .map(|item| scalar_from_json(scalar, item))
                        .collect::<Option<Vec<_>>>()
                        .filter(|items| Some(items.len()) == kind.len())
                        .map(Value::array)
                })
            }
            FieldKind::String(_) => json.as_str().map(Value::from),
            FieldKind::Bytes(_) => json.as_array().and_then(|items| {
                items
                    .iter()
                    .map(|item| item.as_u64().and_then(|b| u8::try_from(b).ok()))
                    .collect::<Option<Vec<u8>>>()
                    .map(|bytes| Value::bytes(&bytes))
            }),
        };
        value.ok_or_else(|| self.field_kind(name))
    }

    fn bitmask(
        &self,
        name: &str,
        flags: &names::FlagSet,
        json: &Json,
    ) -> Result<u64, SchemaViolation> {
        let bit = |flag: &str| flags.bit(flag).ok_or_else(|| self.unknown_flag(name, flag));
        match *json {
            Json::Number(ref n) => n.as_u64().ok_or_else(|| self.field_kind(name)),
            Json::String(ref flag) => bit(flag),
            Json::Array(ref items) => items.iter().try_fold(0u64, |acc, item| {
                let flag = item.as_str().ok_or_else(|| self.field_kind(name))?;
                Ok(acc | bit(flag)?)
            }),
            _ => Err(self.field_kind(name)),
        }
    }
}

fn scalar_from_json(kind: ScalarKind, json: &Json) -> Option<Scalar> {
    Some(match kind {
        ScalarKind::U32 => Scalar::U32(u32::try_from(json.as_u64()?).ok()?),
        ScalarKind::U64 => Scalar::U64(json.as_u64()?),
        ScalarKind::I32 => Scalar::I32(i32::try_from(json.as_i64()?).ok()?),
        ScalarKind::F32 => Scalar::F32(json.as_f64()? as f32),
    })
}

fn load_block(
    registry: &Registry,
    set: &str,
    name: &str,
    json: &Json,
    category: Category,
) -> Result<CapabilityBlock, SchemaViolation> {
    let desc = registry
        .lookup_by_name(name)
        .filter(|desc| desc.category == category)
        .ok_or_else(|| SchemaViolation::UnknownBlock {
            set: set.to_owned(),
            block: name.to_owned(),
        })?;
    let object = json
        .as_object()
        .ok_or_else(|| malformed(format!("{set}.{name}"), "expected an object"))?;
    let mut block = CapabilityBlock::new(desc);
    BlockContext { set, desc }.fill(&mut block, "", object)?;
    Ok(block)
}

fn format_properties(block: &CapabilityBlock) -> FormatProperties {
    let bits = |name: &str| {
        let raw = block
            .get(name)
            .and_then(Value::as_bitmask)
            .unwrap_or_default();
        vk::FormatFeatureFlags::from_raw(raw as vk::Flags)
    };
    FormatProperties {
        linear_tiling_features: bits("linearTilingFeatures"),
        optimal_tiling_features: bits("optimalTilingFeatures"),
        buffer_features: bits("bufferFeatures"),
    }
}

fn queue_family_properties(block: &CapabilityBlock) -> QueueFamilyProperties {
    let number = |name: &str| block.get(name).and_then(Value::as_u32).unwrap_or_default();
    QueueFamilyProperties {
        queue_flags: vk::QueueFlags::from_raw(
            block
                .get("queueFlags")
                .and_then(Value::as_bitmask)
                .unwrap_or_default() as vk::Flags,
        ),
        queue_count: number("queueCount"),
        timestamp_valid_bits: number("timestampValidBits"),
        min_image_transfer_granularity: Extent3d::new(
            number("minImageTransferGranularity.width"),
            number("minImageTransferGranularity.height"),
            number("minImageTransferGranularity.depth"),
        ),
    }
}

fn load_capability_set(
    registry: &Registry,
    set: &str,
    json: &Json,
) -> Result<CapabilitySet, SchemaViolation> {
    let header = CapabilitySetHeader::deserialize(json).map_err(|e| malformed(set, e))?;
    let mut out = CapabilitySet::default();

    for (name, &spec_version) in header.extensions.iter() {
        if !is_extension_name(name) {
            return Err(SchemaViolation::MalformedExtension {
                set: set.to_owned(),
                name: name.clone(),
            });
        }
        out.extensions
            .push(ExtensionProperties::new(name.as_str(), spec_version));
    }

    for (name, json) in header.features.iter() {
        out.blocks
            .push(load_block(registry, set, name, json, Category::Features)?);
    }
    for (name, json) in header.properties.iter() {
        out.blocks
            .push(load_block(registry, set, name, json, Category::Properties)?);
    }

    for (format_name, json) in header.formats.iter() {
        let format =
            names::format_from_name(format_name).ok_or_else(|| SchemaViolation::UnknownFormat {
                set: set.to_owned(),
                format: format_name.clone(),
            })?;
        let blocks = json
            .as_object()
            .ok_or_else(|| malformed(format!("{set}.{format_name}"), "expected an object"))?;
        let mut properties = FormatProperties::default();
        for (block_name, json) in blocks.iter() {
            let block = load_block(registry, set, block_name, json, Category::Format)?;
            properties = properties.union(&format_properties(&block));
        }
        out.formats.push(FormatRequirement { format, properties });
    }

    for (index, json) in header.queue_families.iter().enumerate() {
        let blocks = json.as_object().ok_or_else(|| {
            malformed(
                format!("{set}.queueFamiliesProperties[{index}]"),
                "expected an object",
            )
        })?;
        for (block_name, json) in blocks.iter() {
            let block = load_block(registry, set, block_name, json, Category::QueueFamily)?;
            out.queue_families.push(queue_family_properties(&block));
        }
    }

    Ok(out)
}

/// Merges a capability set into the profile under construction. Later sets
/// override fields of earlier ones.
fn apply_capability_set(profile: &mut Profile, set: &CapabilitySet) {
    for ext in set.extensions.iter() {
        match profile.extensions.iter_mut().find(|e| e.name == ext.name) {
            Some(existing) => existing.spec_version = existing.spec_version.max(ext.spec_version),
            None => profile.extensions.push(ext.clone()),
        }
    }
    for block in set.blocks.iter() {
        match profile
            .blocks
            .iter_mut()
            .find(|declared| declared.block.ty() == block.ty())
        {
            Some(declared) => declared.block.overlay(block),
            None => profile.blocks.push(DeclaredBlock {
                block: block.clone(),
                merge_mode: None,
            }),
        }
    }
    for req in set.formats.iter() {
        match profile.formats.iter_mut().find(|f| f.format == req.format) {
            Some(existing) => existing.properties = existing.properties.union(&req.properties),
            None => profile.formats.push(*req),
        }
    }
    profile
        .queue_families
        .extend(set.queue_families.iter().copied());
}

fn load_profile(
    registry: &Registry,
    name: &str,
    json: &Json,
    sets: &BTreeMap<&str, CapabilitySet>,
) -> Result<Profile, SchemaViolation> {
    let header = ProfileHeader::deserialize(json).map_err(|e| malformed(name, e))?;
    let api_version =
        vpt::parse_api_version(&header.api_version).ok_or_else(|| SchemaViolation::ApiVersion {
            profile: name.to_owned(),
            version: header.api_version.clone(),
        })?;

    let mut profile = Profile {
        name: name.to_owned(),
        version: header.version,
        label: header.label,
        description: header.description,
        api_version,
        fallback: header.fallback,
        extensions: Vec::new(),
        blocks: Vec::new(),
        formats: Vec::new(),
        queue_families: Vec::new(),
        extensions_merge_mode: None,
        formats_merge_mode: None,
    };

    for set_name in header.capabilities.iter() {
        let set = sets.get(set_name.as_str()).ok_or_else(|| {
            SchemaViolation::UnknownCapabilitySet {
                profile: name.to_owned(),
                set: set_name.clone(),
            }
        })?;
        apply_capability_set(&mut profile, set);
    }

    for (target, &mode) in header.merge.iter() {
        match target.as_str() {
            "extensions" => profile.extensions_merge_mode = Some(mode),
            "formats" => profile.formats_merge_mode = Some(mode),
            block_name => {
                let desc = registry.lookup_by_name(block_name).ok_or_else(|| {
                    SchemaViolation::UnknownBlock {
                        set: name.to_owned(),
                        block: block_name.to_owned(),
                    }
                })?;
                match profile.blocks.iter_mut().find(|d| d.block.ty() == desc.ty) {
                    Some(declared) => declared.merge_mode = Some(mode),
                    // A directive for a block the profile only declares through
                    // promoted blocks still selects the mode for that tag.
                    None => profile.blocks.push(DeclaredBlock {
                        block: CapabilityBlock::new(desc),
                        merge_mode: Some(mode),
                    }),
                }
            }
        }
    }

    Ok(profile)
}

impl ProfileDocument {
    /// Builds the document model from an already parsed, schema-valid JSON
    /// document, resolving every name against `registry`.
    pub fn load(registry: &Registry, document: &Json) -> Result<Self, SchemaViolation> {
        let root = document
            .as_object()
            .ok_or_else(|| malformed("document", "expected an object"))?;
        let empty = Map::new();
        let set_objects = match root.get("capabilities") {
            Some(Json::Object(sets)) => sets,
            Some(_) => return Err(malformed("capabilities", "expected an object")),
            None => &empty,
        };
        let profile_objects = match root.get("profiles") {
            Some(Json::Object(profiles)) => profiles,
            Some(_) => return Err(malformed("profiles", "expected an object")),
            None => &empty,
        };

        let mut sets = BTreeMap::new();
        for (set_name, json) in set_objects.iter() {
            sets.insert(
                set_name.as_str(),
                load_capability_set(registry, set_name, json)?,
            );
        }

        let mut profiles = Vec::with_capacity(profile_objects.len());
        for (name, json) in profile_objects.iter() {
            profiles.push(load_profile(registry, name, json, &sets)?);
        }

        for profile in profiles.iter() {
            for fallback in profile.fallback.iter() {
                if !profile_objects.contains_key(fallback) {
                    return Err(SchemaViolation::UnknownFallback {
                        profile: profile.name.clone(),
                        fallback: fallback.clone(),
                    });
                }
            }
        }

        log::info!(
            "Loaded {} profile(s) from {} capability set(s)",
            profiles.len(),
            sets.len()
        );
        Ok(Self::from_profiles(profiles))
    }
}
