use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Return the keys of the default configuration that are absent from the
/// given YAML document, in declaration order.
pub fn missing_fields(content: &str) -> AppResult<Vec<String>> {
    let current: Value = serde_yaml::from_str(content)?;
    let defaults = serde_yaml::to_value(Config::default())?;

    let empty = Mapping::new();
    let current_map = current.as_mapping().unwrap_or(&empty);

    let missing = defaults
        .as_mapping()
        .map(|m| {
            m.keys()
                .filter(|k| !current_map.contains_key(*k))
                .filter_map(|k| k.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();

    Ok(missing)
}

/// Add every missing key (with its default value) to the configuration file.
/// Existing values are never touched.
///   Returns:
///   Ok(true)  → config updated
///   Ok(false) → no change needed
pub fn migrate_config_file(path: &Path) -> AppResult<bool> {
    if !path.exists() {
        info(format!("No configuration file at {}", path.display()));
        return Ok(false);
    }

    let content = fs::read_to_string(path)?;
    let missing = missing_fields(&content)?;
    if missing.is_empty() {
        return Ok(false);
    }

    let mut current: Value = serde_yaml::from_str(&content)?;
    let defaults = serde_yaml::to_value(Config::default())?;

    if current.as_mapping().is_none() {
        current = Value::Mapping(Mapping::new());
    }

    if let (Some(map), Some(def)) = (current.as_mapping_mut(), defaults.as_mapping()) {
        for key in &missing {
            let k = Value::String(key.clone());
            if let Some(v) = def.get(&k) {
                map.insert(k, v.clone());
            }
        }
    }

    fs::write(path, serde_yaml::to_string(&current)?)?;
    success(format!(
        "Configuration updated, added: {}",
        missing.join(", ")
    ));

    Ok(true)
}
