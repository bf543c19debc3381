use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys present in the default configuration but missing from the YAML at
/// `path`.
pub fn missing_keys(path: &Path) -> AppResult<Vec<String>> {
    let current = read_mapping(path)?;
    let defaults = default_mapping()?;

    Ok(defaults
        .keys()
        .filter(|k| !current.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Fill in missing keys with their defaults, keeping every existing value
/// (unknown keys included). Returns the keys that were added.
pub fn fill_missing_keys(path: &Path) -> AppResult<Vec<String>> {
    let mut current = read_mapping(path)?;
    let defaults = default_mapping()?;

    let mut added = Vec::new();
    for (k, v) in defaults {
        if !current.contains_key(&k) {
            if let Some(name) = k.as_str() {
                added.push(name.to_string());
            }
            current.insert(k, v);
        }
    }

    if added.is_empty() {
        info("Configuration file is up to date.");
        return Ok(added);
    }

    let yaml = serde_yaml::to_string(&Value::Mapping(current))?;
    fs::write(path, yaml)?;

    success(format!("Added missing configuration keys: {}", added.join(", ")));
    Ok(added)
}

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path)?;
    match serde_yaml::from_str::<Value>(&content)? {
        Value::Mapping(m) => Ok(m),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        ))),
    }
}

fn default_mapping() -> AppResult<Mapping> {
    match serde_yaml::to_value(Config::default())? {
        Value::Mapping(m) => Ok(m),
        _ => Err(AppError::Config("default configuration is not a mapping".into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn fills_only_missing_keys() {
        let mut path = env::temp_dir();
        path.push("rpunchclock_config_migrate_test.conf");
        fs::write(&path, "database: /tmp/keep.sqlite\ncustom: 1\n").unwrap();

        let missing = missing_keys(&path).unwrap();
        assert!(missing.contains(&"default_department".to_string()));
        assert!(!missing.contains(&"database".to_string()));

        let added = fill_missing_keys(&path).unwrap();
        assert_eq!(added.len(), missing.len());

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("/tmp/keep.sqlite"));
        assert!(content.contains("custom: 1"));
        assert!(missing_keys(&path).unwrap().is_empty());

        fs::remove_file(&path).ok();
    }
}
