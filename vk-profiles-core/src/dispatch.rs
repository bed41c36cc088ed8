/*! The simulation entry points.
 *
 *  Every query first asks the native device, then resolves the active
 *  profiles and merges what they declare on top of the native answer. When
 *  the profiles cannot be resolved the native answer is returned as is.
 */

use crate::{
    compliance::{self, ComplianceReport},
    config::SimulationConfig,
    device::NativeDevice,
    document::{DeviceSupport, FormatRequirement, Profile, ProfileDocument, SchemaViolation},
    error::SimulationError,
    matcher,
    merge::{declared_view, merge_block},
    selector::{self, ForceDevice},
    Chain,
};
use ash::vk;
use std::{fs, sync::Arc};
use vpt::{
    CapabilityBlock, Category, ExtensionProperties, FormatProperties, MergeMode,
    QueueFamilyProperties, Registry, SimulateCapabilities,
};

#[derive(Debug)]
struct Inner {
    registry: Registry,
    document: ProfileDocument,
    config: SimulationConfig,
}

/// A loaded profile document together with the settings it is simulated
/// under. Cloning is cheap.
#[derive(Clone, Debug)]
pub struct Simulation {
    inner: Arc<Inner>,
}

impl Simulation {
    pub fn new(registry: Registry, document: ProfileDocument, config: SimulationConfig) -> Self {
        log::info!(
            "Simulating {:?} with {} merge mode",
            config.profile_names,
            config.merge_mode_override.unwrap_or(config.merge_mode)
        );
        Self {
            inner: Arc::new(Inner {
                registry,
                document,
                config,
            }),
        }
    }

    pub fn from_json(
        registry: Registry,
        document: &serde_json::Value,
        config: SimulationConfig,
    ) -> Result<Self, SimulationError> {
        let document = ProfileDocument::load(&registry, document)?;
        Ok(Self::new(registry, document, config))
    }

    /// Loads the document named by `config.profile_file`. Without a file the
    /// document is empty and every query reports the native device.
    pub fn load(registry: Registry, config: SimulationConfig) -> Result<Self, SimulationError> {
        let path = match (config.enabled, config.profile_file.clone()) {
            (true, Some(path)) => path,
            _ => return Ok(Self::new(registry, ProfileDocument::default(), config)),
        };
        let context = path.display().to_string();
        let text = fs::read_to_string(&path).map_err(|e| SchemaViolation::Malformed {
            context: context.clone(),
            reason: e.to_string(),
        })?;
        let json: serde_json::Value =
            serde_json::from_str(&text).map_err(|e| SchemaViolation::Malformed {
                context,
                reason: e.to_string(),
            })?;
        Self::from_json(registry, &json, config)
    }

    pub fn registry(&self) -> &Registry {
        &self.inner.registry
    }

    pub fn document(&self) -> &ProfileDocument {
        &self.inner.document
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.inner.config
    }

    fn simulates(&self, category: SimulateCapabilities) -> bool {
        self.inner.config.enabled && self.inner.config.simulate.contains(category)
    }

    /// The profiles to simulate on `device`, or `None` when the native answer
    /// should be returned untouched.
    fn active_profiles<D: NativeDevice + ?Sized>(&self, device: &D) -> Option<Vec<&Profile>> {
        let config = &self.inner.config;
        if !config.enabled {
            return None;
        }
        if config.profile_names.is_empty() {
            log::debug!("No profile requested, reporting the native device");
            return None;
        }
        let extensions = device.extensions();
        let support = DeviceSupport {
            api_version: device.api_version(),
            extensions: &extensions,
        };
        match self
            .inner
            .document
            .resolve_active(&config.profile_names, support)
        {
            Ok(active) if active.is_empty() => None,
            Ok(active) => Some(active),
            Err(e) => {
                log::warn!(
                    "Reporting the native device {}: {}",
                    device.identity().name,
                    e
                );
                None
            }
        }
    }

    /// `merge_mode_override`, else the directive of the first profile that
    /// gives one through `directive`, else the configured default.
    fn mode_for(
        &self,
        active: &[&Profile],
        directive: impl Fn(&Profile) -> Option<MergeMode>,
    ) -> MergeMode {
        let config = &self.inner.config;
        config
            .merge_mode_override
            .or_else(|| active.iter().find_map(|&profile| directive(profile)))
            .unwrap_or(config.merge_mode)
    }

    fn block_mode(&self, active: &[&Profile], ty: vk::StructureType) -> MergeMode {
        let config = &self.inner.config;
        if let Some(mode) = config.merge_mode_override {
            return mode;
        }
        active
            .iter()
            .find_map(|profile| profile.declared(ty))
            .and_then(|declared| declared.merge_mode)
            .unwrap_or(config.merge_mode)
    }

    fn merge_chain(&self, active: &[&Profile], chain: &mut Chain, category: Category) {
        let registry = &self.inner.registry;
        for block in chain.iter_mut() {
            let desc = match block.descriptor() {
                Some(desc) => desc,
                None => {
                    log::debug!("{}", SimulationError::UnknownCapabilityTag(block.ty()));
                    continue;
                }
            };
            if desc.category != category {
                continue;
            }
            let views: Vec<CapabilityBlock> = active
                .iter()
                .filter_map(|profile| declared_view(registry, profile, desc.ty))
                .collect();
            if views.is_empty() {
                continue;
            }
            let contributions: Vec<&CapabilityBlock> = views.iter().collect();
            let mode = self.block_mode(active, desc.ty);
            log::debug!(
                "Merging {} from {} profile(s) with {} mode",
                desc.name,
                contributions.len(),
                mode
            );
            *block = merge_block(block, &contributions, mode);
        }
    }

    pub fn physical_device_features<D: NativeDevice + ?Sized>(&self, device: &D, chain: &mut Chain) {
        profiling::scope!("Simulation::physical_device_features");
        device.fill_features(chain);
        if !self.simulates(SimulateCapabilities::FEATURES) {
            return;
        }
        if let Some(active) = self.active_profiles(device) {
            self.merge_chain(&active, chain, Category::Features);
        }
    }

    pub fn physical_device_properties<D: NativeDevice + ?Sized>(
        &self,
        device: &D,
        chain: &mut Chain,
    ) {
        profiling::scope!("Simulation::physical_device_properties");
        device.fill_properties(chain);
        if !self.simulates(SimulateCapabilities::PROPERTIES) {
            return;
        }
        let active = match self.active_profiles(device) {
            Some(active) => active,
            None => return,
        };
        self.merge_chain(&active, chain, Category::Properties);

        if self.inner.config.emulate_api_version {
            let floor = active.iter().map(|profile| profile.api_version).max();
            let properties = chain.find_mut(vk::StructureType::PHYSICAL_DEVICE_PROPERTIES_2);
            if let (Some(floor), Some(properties)) = (floor, properties) {
                log::info!("Reporting api version {}", vpt::format_api_version(floor));
                // `apiVersion` stays NOAUTO for merging; only this option writes it.
                if let Err(e) = properties.set("apiVersion", floor) {
                    log::warn!("Unable to emulate the api version: {}", e);
                }
            }
        }
    }

    pub fn enumerate_device_extensions<D: NativeDevice + ?Sized>(
        &self,
        device: &D,
    ) -> Vec<ExtensionProperties> {
        profiling::scope!("Simulation::enumerate_device_extensions");
        let config = &self.inner.config;
        let mut native = device.extensions();
        if !config.enabled {
            return native;
        }
        let excluded = |ext: &ExtensionProperties| {
            config
                .exclude_device_extensions
                .iter()
                .any(|name| *name == ext.name)
        };
        native.retain(|ext| !excluded(ext));
        if !self.simulates(SimulateCapabilities::EXTENSIONS) {
            return native;
        }
        let active = match self.active_profiles(device) {
            Some(active) => active,
            None => return native,
        };

        let declaring: Vec<&Profile> = active
            .iter()
            .copied()
            .filter(|profile| !profile.extensions.is_empty())
            .collect();
        let (first, rest) = match declaring.split_first() {
            Some(split) => split,
            None => return native,
        };
        let mode = self.mode_for(&active, |profile| profile.extensions_merge_mode);
        if mode == MergeMode::Passthrough {
            return native;
        }
        let native_version = |ext: &ExtensionProperties| {
            native
                .iter()
                .find(|n| n.name == ext.name)
                .cloned()
                .unwrap_or_else(|| ext.clone())
        };

        let mut result: Vec<ExtensionProperties> = match mode {
            MergeMode::Passthrough | MergeMode::Replace => {
                first.extensions.iter().map(native_version).collect()
            }
            MergeMode::Intersect => first
                .extensions
                .iter()
                .filter(|ext| rest.iter().all(|profile| profile.has_extension(&ext.name)))
                .map(native_version)
                .collect(),
            MergeMode::Union => {
                let mut union = native.clone();
                for ext in declaring.iter().flat_map(|profile| profile.extensions.iter()) {
                    if !union.iter().any(|u| u.name == ext.name) {
                        union.push(ext.clone());
                    }
                }
                union
            }
        };
        result.retain(|ext| !excluded(ext));
        result
    }

    pub fn format_properties<D: NativeDevice + ?Sized>(
        &self,
        device: &D,
        format: vk::Format,
    ) -> FormatProperties {
        profiling::scope!("Simulation::format_properties");
        let native = device.format_properties(format);
        let config = &self.inner.config;
        if config.enabled && config.exclude_formats.contains(&format) {
            log::debug!("Format {:?} is excluded", format);
            return FormatProperties::default();
        }
        if !self.simulates(SimulateCapabilities::FORMATS) {
            return native;
        }
        let active = match self.active_profiles(device) {
            Some(active) => active,
            None => return native,
        };
        let requirements: Vec<&FormatRequirement> = active
            .iter()
            .filter_map(|profile| profile.format(format))
            .collect();
        let mode = self.mode_for(&active, |profile| profile.formats_merge_mode);
        match matcher::combine_format_requirements(&requirements, mode) {
            Some(declared) => native.union(&declared),
            None => native,
        }
    }

    /// The native queue families, after checking that every queue family a
    /// profile requires has a match among them.
    pub fn queue_family_properties<D: NativeDevice + ?Sized>(
        &self,
        device: &D,
    ) -> Result<Vec<QueueFamilyProperties>, SimulationError> {
        profiling::scope!("Simulation::queue_family_properties");
        let native = device.queue_family_properties();
        if !self.simulates(SimulateCapabilities::QUEUE_FAMILY_PROPERTIES) {
            return Ok(native);
        }
        let active = match self.active_profiles(device) {
            Some(active) => active,
            None => return Ok(native),
        };
        for profile in active {
            for (index, requirement) in profile.queue_families.iter().enumerate() {
                if matcher::matches_queue_family(&native, requirement).is_some() {
                    continue;
                }
                let error = SimulationError::QueueFamilyUnsatisfiable {
                    profile: profile.name.clone(),
                    index,
                };
                log::error!("{}", error);
                if self.inner.config.fail_on_error {
                    return Err(error);
                }
            }
        }
        Ok(native)
    }

    /// The devices the application gets to see.
    pub fn enumerate_physical_devices<'a, D: NativeDevice>(
        &self,
        devices: &'a [D],
    ) -> Result<Vec<&'a D>, SimulationError> {
        profiling::scope!("Simulation::enumerate_physical_devices");
        let config = &self.inner.config;
        if !config.enabled {
            return Ok(devices.iter().collect());
        }
        let selected = selector::select(devices, &config.force_device);
        if selected.is_empty() && config.force_device != ForceDevice::Off {
            log::error!("No physical device matches {:?}", config.force_device);
            return Err(SimulationError::NoMatchingDevice);
        }
        Ok(selected)
    }

    /// Checks `device` against each requested profile, without fallbacks.
    pub fn check_device<D: NativeDevice + ?Sized>(&self, device: &D) -> Vec<ComplianceReport> {
        profiling::scope!("Simulation::check_device");
        let document = &self.inner.document;
        self.inner
            .config
            .profile_names
            .iter()
            .filter_map(|name| {
                let profile = document.profile(name);
                if profile.is_none() {
                    log::warn!("Profile {} is not defined in the document", name);
                }
                profile
            })
            .map(|profile| {
                let report = compliance::check_profile(profile, device);
                for incompatibility in report.incompatibilities.iter() {
                    log::info!("{}: {}", profile.name, incompatibility);
                }
                report
            })
            .collect()
    }
}
