/*! Simulation settings.
 *
 *  Settings are named options, given as key/value pairs or as
 *  `VK_PROFILES_<OPTION>` environment variables. Option parsing fails closed:
 *  anything it doesn't understand disables the simulation rather than
 *  simulating something the user didn't ask for.
 */

use crate::selector::ForceDevice;
use ash::vk;
use std::path::PathBuf;
use thiserror::Error;
use vpt::{MergeMode, SimulateCapabilities};

pub const ENV_PREFIX: &str = "VK_PROFILES_";

/// Every option key understood by [`SimulationConfig::try_from_options`].
pub const OPTIONS: &[&str] = &[
    "profile_file",
    "profile_name",
    "merge_mode",
    "merge_mode_override",
    "emulate_api_version",
    "simulate_capabilities",
    "force_device",
    "force_device_name",
    "force_device_uuid",
    "exclude_device_extensions",
    "exclude_formats",
    "debug_fail_on_error",
];

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown option `{0}`")]
    UnknownOption(String),
    #[error("invalid value `{value}` for option `{option}`")]
    InvalidValue { option: &'static str, value: String },
    #[error("option `{0}` is required")]
    Missing(&'static str),
}

#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Cleared when option parsing failed; every query then reports the
    /// native device.
    pub enabled: bool,
    pub profile_file: Option<PathBuf>,
    pub profile_names: Vec<String>,
    pub merge_mode: MergeMode,
    pub merge_mode_override: Option<MergeMode>,
    pub emulate_api_version: bool,
    pub simulate: SimulateCapabilities,
    pub force_device: ForceDevice,
    pub exclude_device_extensions: Vec<String>,
    pub exclude_formats: Vec<vk::Format>,
    pub fail_on_error: bool,
}

fn parse_bool(value: &str) -> Option<bool> {
    let v = value.trim();
    if v == "1"
        || v.eq_ignore_ascii_case("true")
        || v.eq_ignore_ascii_case("yes")
        || v.eq_ignore_ascii_case("on")
    {
        Some(true)
    } else if v == "0"
        || v.eq_ignore_ascii_case("false")
        || v.eq_ignore_ascii_case("no")
        || v.eq_ignore_ascii_case("off")
    {
        Some(false)
    } else {
        None
    }
}

fn parse_list(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(str::trim).filter(|item| !item.is_empty())
}

fn parse_uuid(value: &str) -> Option<[u8; vk::UUID_SIZE]> {
    let hex: Vec<u8> = value.bytes().filter(|&b| b != b'-').collect();
    if hex.len() != vk::UUID_SIZE * 2 || !hex.iter().all(u8::is_ascii_hexdigit) {
        return None;
    }
    let mut uuid = [0u8; vk::UUID_SIZE];
    for (byte, pair) in uuid.iter_mut().zip(hex.chunks(2)) {
        let text = std::str::from_utf8(pair).ok()?;
        *byte = u8::from_str_radix(text, 16).ok()?;
    }
    Some(uuid)
}

enum ForcePolicy {
    Off,
    WithName,
    WithUuid,
}

impl SimulationConfig {
    /// Simulation enabled with `merge_mode` as the default merge mode and no
    /// profiles requested yet.
    pub fn new(merge_mode: MergeMode) -> Self {
        Self {
            enabled: true,
            profile_file: None,
            profile_names: Vec::new(),
            merge_mode,
            merge_mode_override: None,
            emulate_api_version: false,
            simulate: SimulateCapabilities::all(),
            force_device: ForceDevice::Off,
            exclude_device_extensions: Vec::new(),
            exclude_formats: Vec::new(),
            fail_on_error: false,
        }
    }

    /// A configuration under which every query reports the native device.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::new(MergeMode::Passthrough)
        }
    }

    pub fn with_profiles<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.profile_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Parses key/value options. `merge_mode` must be present.
    pub fn try_from_options<I, K, V>(options: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Self::new(MergeMode::Passthrough);
        let mut merge_mode = None;
        let mut force = ForcePolicy::Off;
        let mut force_name = None;
        let mut force_uuid = None;

        for (key, value) in options {
            let (key, value) = (key.as_ref(), value.as_ref());
            let option = OPTIONS
                .iter()
                .copied()
                .find(|&option| option == key)
                .ok_or_else(|| ConfigError::UnknownOption(key.to_owned()))?;
            let invalid = || ConfigError::InvalidValue {
                option,
                value: value.to_owned(),
            };
            match option {
                "profile_file" => config.profile_file = Some(PathBuf::from(value)),
                "profile_name" => {
                    config.profile_names = parse_list(value).map(str::to_owned).collect()
                }
                "merge_mode" => merge_mode = Some(MergeMode::from_name(value).ok_or_else(invalid)?),
                "merge_mode_override" => {
                    config.merge_mode_override = Some(MergeMode::from_name(value).ok_or_else(invalid)?)
                }
                "emulate_api_version" => {
                    config.emulate_api_version = parse_bool(value).ok_or_else(invalid)?
                }
                "simulate_capabilities" => {
                    config.simulate = parse_list(value).try_fold(
                        SimulateCapabilities::empty(),
                        |acc, name| SimulateCapabilities::from_option_name(name).map(|bit| acc | bit),
                    )
                    .ok_or_else(invalid)?;
                }
                "force_device" => {
                    force = match value.trim() {
                        "FORCE_DEVICE_OFF" => ForcePolicy::Off,
                        "FORCE_DEVICE_WITH_NAME" => ForcePolicy::WithName,
                        "FORCE_DEVICE_WITH_UUID" => ForcePolicy::WithUuid,
                        _ => return Err(invalid()),
                    }
                }
                "force_device_name" => force_name = Some(value.to_owned()),
                "force_device_uuid" => force_uuid = Some(parse_uuid(value.trim()).ok_or_else(invalid)?),
                "exclude_device_extensions" => {
                    config.exclude_device_extensions = parse_list(value).map(str::to_owned).collect()
                }
                "exclude_formats" => {
                    config.exclude_formats = parse_list(value)
                        .map(vpt::names::format_from_name)
                        .collect::<Option<Vec<_>>>()
                        .ok_or_else(invalid)?
                }
                "debug_fail_on_error" => config.fail_on_error = parse_bool(value).ok_or_else(invalid)?,
                _ => return Err(ConfigError::UnknownOption(key.to_owned())),
            }
        }

        config.merge_mode = merge_mode.ok_or(ConfigError::Missing("merge_mode"))?;
        config.force_device = match force {
            ForcePolicy::Off => ForceDevice::Off,
            ForcePolicy::WithName => {
                ForceDevice::ByName(force_name.ok_or(ConfigError::Missing("force_device_name"))?)
            }
            ForcePolicy::WithUuid => {
                ForceDevice::ByUuid(force_uuid.ok_or(ConfigError::Missing("force_device_uuid"))?)
            }
        };
        Ok(config)
    }

    /// Like [`Self::try_from_options`], but an error yields a disabled
    /// configuration.
    pub fn from_options<I, K, V>(options: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        match Self::try_from_options(options) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Profile simulation disabled: {}", e);
                Self::disabled()
            }
        }
    }

    /// Reads every option from `VK_PROFILES_<OPTION>` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads every option through `lookup`, which maps a variable name such
    /// as `VK_PROFILES_MERGE_MODE` to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let options = OPTIONS.iter().filter_map(|&option| {
            let var = format!("{ENV_PREFIX}{}", option.to_ascii_uppercase());
            lookup(&var).map(|value| (option, value))
        });
        Self::from_options(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_option_set() {
        let config = SimulationConfig::try_from_options([
            ("profile_file", "/tmp/profiles.json"),
            ("profile_name", "VP_A, VP_B"),
            ("merge_mode", "MERGE_MODE_INTERSECT"),
            ("merge_mode_override", "union"),
            ("emulate_api_version", "true"),
            ("simulate_capabilities", "SIMULATE_FEATURES_BIT,SIMULATE_FORMATS_BIT"),
            ("force_device", "FORCE_DEVICE_WITH_UUID"),
            ("force_device_uuid", "00112233-4455-6677-8899-aabbccddeeff"),
            ("exclude_device_extensions", "VK_KHR_a,VK_KHR_b"),
            ("exclude_formats", "VK_FORMAT_R8_UNORM"),
            ("debug_fail_on_error", "1"),
        ])
        .unwrap();
        assert!(config.enabled);
        assert_eq!(config.profile_file, Some(PathBuf::from("/tmp/profiles.json")));
        assert_eq!(config.profile_names, ["VP_A", "VP_B"]);
        assert_eq!(config.merge_mode, MergeMode::Intersect);
        assert_eq!(config.merge_mode_override, Some(MergeMode::Union));
        assert!(config.emulate_api_version);
        assert_eq!(
            config.simulate,
            SimulateCapabilities::FEATURES | SimulateCapabilities::FORMATS
        );
        assert_eq!(
            config.force_device,
            ForceDevice::ByUuid([
                0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc,
                0xdd, 0xee, 0xff
            ])
        );
        assert_eq!(config.exclude_device_extensions, ["VK_KHR_a", "VK_KHR_b"]);
        assert_eq!(config.exclude_formats, [vk::Format::R8_UNORM]);
        assert!(config.fail_on_error);
    }

    #[test]
    fn errors() {
        assert_eq!(
            SimulationConfig::try_from_options([("profile_name", "VP_A")]),
            Err(ConfigError::Missing("merge_mode"))
        );
        assert_eq!(
            SimulationConfig::try_from_options([("merge_mode", "union"), ("colour", "red")]),
            Err(ConfigError::UnknownOption("colour".into()))
        );
        assert_eq!(
            SimulationConfig::try_from_options([("merge_mode", "sometimes")]),
            Err(ConfigError::InvalidValue {
                option: "merge_mode",
                value: "sometimes".into()
            })
        );
        assert_eq!(
            SimulationConfig::try_from_options([
                ("merge_mode", "union"),
                ("force_device", "FORCE_DEVICE_WITH_NAME")
            ]),
            Err(ConfigError::Missing("force_device_name"))
        );
        assert!(SimulationConfig::try_from_options([
            ("merge_mode", "union"),
            ("exclude_formats", "VK_FORMAT_NOPE")
        ])
        .is_err());
        let signed = "+f".repeat(vk::UUID_SIZE);
        assert_eq!(
            SimulationConfig::try_from_options([
                ("merge_mode", "union"),
                ("force_device", "FORCE_DEVICE_WITH_UUID"),
                ("force_device_uuid", signed.as_str()),
            ]),
            Err(ConfigError::InvalidValue {
                option: "force_device_uuid",
                value: signed.clone()
            })
        );
    }

    #[test]
    fn fails_closed() {
        let config = SimulationConfig::from_options([("merge_mode", "union"), ("bogus", "1")]);
        assert!(!config.enabled);
        assert_eq!(config, SimulationConfig::disabled());
    }

    #[test]
    fn environment_names() {
        let config = SimulationConfig::from_lookup(|name| match name {
            "VK_PROFILES_MERGE_MODE" => Some("replace".to_owned()),
            "VK_PROFILES_PROFILE_NAME" => Some("VP_X".to_owned()),
            "VK_PROFILES_FORCE_DEVICE" => Some("FORCE_DEVICE_WITH_NAME".to_owned()),
            "VK_PROFILES_FORCE_DEVICE_NAME" => Some("Radeon".to_owned()),
            _ => None,
        });
        assert!(config.enabled);
        assert_eq!(config.merge_mode, MergeMode::Replace);
        assert_eq!(config.profile_names, ["VP_X"]);
        assert_eq!(config.force_device, ForceDevice::ByName("Radeon".into()));

        assert!(!SimulationConfig::from_lookup(|_| None).enabled);
    }
}
