use crate::api::{CmdMessage, MemexApi, MemexPaths};
use crate::clock::{Clock, TZ_ENV_VAR, Zone};
use crate::config::{CONFIG_FILENAME, MemexConfig};
use crate::error::{MemexError, Result};
use crate::store::fs::FileTaxonomyStore;
use directories::BaseDirs;
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable naming the repository root.
pub const ROOT_ENV_VAR: &str = "MEMEX_ROOT";

pub struct MemexContext {
    pub api: MemexApi<FileTaxonomyStore>,
    /// Problems found while loading settings, shown before the command output.
    pub warnings: Vec<CmdMessage>,
}

/// Walk up from `cwd` to the nearest directory holding `.memex.yml`.
/// Gives up at the home directory or the filesystem root.
pub fn find_repo_root(cwd: &Path) -> Option<PathBuf> {
    let home_dir = BaseDirs::new().map(|bd| bd.home_dir().to_path_buf());
    let mut current = cwd.to_path_buf();

    loop {
        if current.join(CONFIG_FILENAME).is_file() {
            return Some(current);
        }

        if let Some(ref home) = home_dir
            && &current == home
        {
            return None;
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => return None,
        }
    }
}

/// Root precedence: explicit flag, then `MEMEX_ROOT`, then discovery, then `cwd`.
pub fn resolve_root(cwd: &Path, explicit: Option<&Path>, env_root: Option<&Path>) -> PathBuf {
    let given = explicit
        .or(env_root)
        .filter(|p| !p.as_os_str().is_empty())
        .map(|p| if p.is_absolute() { p.to_path_buf() } else { cwd.join(p) });

    given
        .or_else(|| find_repo_root(cwd))
        .unwrap_or_else(|| cwd.to_path_buf())
}

/// Load settings, downgrading a parse failure to a warning.
fn load_config(path: &Path, warnings: &mut Vec<CmdMessage>) -> Result<MemexConfig> {
    match MemexConfig::load(path) {
        Ok(config) => Ok(config),
        Err(e @ MemexError::ConfigParse { .. }) => {
            warnings.push(CmdMessage::warning(format!("{}; using defaults", e)));
            Ok(MemexConfig::default())
        }
        Err(e) => Err(e),
    }
}

/// An explicit zone must be valid. A bad zone from the environment or settings
/// is reported and the system zone is used, so commands that never stamp a
/// time still run.
fn resolve_zone(
    explicit: Option<&str>,
    env: Option<&str>,
    configured: Option<&str>,
    warnings: &mut Vec<CmdMessage>,
) -> Result<Zone> {
    if explicit.is_some_and(|name| !name.trim().is_empty()) {
        return Zone::resolve(explicit, None, None);
    }
    match Zone::resolve(None, env, configured) {
        Ok(zone) => Ok(zone),
        Err(e @ MemexError::InvalidTimezone(_)) => {
            warnings.push(CmdMessage::warning(format!("{}; using the system zone", e)));
            Ok(Zone::Local)
        }
        Err(e) => Err(e),
    }
}

pub fn initialize(
    cwd: &Path,
    root_override: Option<&Path>,
    tz_override: Option<&str>,
) -> Result<MemexContext> {
    let env_root = env::var_os(ROOT_ENV_VAR).map(PathBuf::from);
    let root = resolve_root(cwd, root_override, env_root.as_deref());
    log::debug!("repository root: {}", root.display());

    let paths = MemexPaths::new(root);
    let mut warnings = Vec::new();
    let config = load_config(&paths.config_file(), &mut warnings)?;

    let env_tz = env::var(TZ_ENV_VAR).ok();
    let zone = resolve_zone(
        tz_override,
        env_tz.as_deref(),
        config.timezone.as_deref(),
        &mut warnings,
    )?;

    let store = FileTaxonomyStore::new(paths.taxonomy_file());
    let api = MemexApi::new(store, paths, config, Clock::system(zone));

    Ok(MemexContext { api, warnings })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn finds_root_in_current_dir() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), "").unwrap();
        assert_eq!(find_repo_root(temp.path()), Some(temp.path().to_path_buf()));
    }

    #[test]
    fn finds_root_from_nested_folder() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("docs").join("linux");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), "").unwrap();

        assert_eq!(find_repo_root(&nested), Some(temp.path().to_path_buf()));
    }

    #[test]
    fn nearest_settings_file_wins() {
        let temp = TempDir::new().unwrap();
        let child = temp.path().join("child");
        fs::create_dir_all(&child).unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), "").unwrap();
        fs::write(child.join(CONFIG_FILENAME), "").unwrap();

        assert_eq!(find_repo_root(&child), Some(child.clone()));
    }

    #[test]
    fn settings_directory_is_not_a_marker() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(CONFIG_FILENAME)).unwrap();
        assert_eq!(find_repo_root(temp.path()), None);
    }

    #[test]
    fn root_precedence() {
        let temp = TempDir::new().unwrap();
        let cwd = temp.path();
        let flag = cwd.join("flag");
        let env_root = cwd.join("env");

        assert_eq!(resolve_root(cwd, Some(&flag), Some(&env_root)), flag);
        assert_eq!(resolve_root(cwd, None, Some(&env_root)), env_root);
        assert_eq!(
            resolve_root(cwd, Some(Path::new("rel")), None),
            cwd.join("rel")
        );
        assert_eq!(resolve_root(cwd, None, None), cwd.to_path_buf());

        fs::write(cwd.join(CONFIG_FILENAME), "").unwrap();
        let nested = cwd.join("docs");
        fs::create_dir(&nested).unwrap();
        assert_eq!(resolve_root(&nested, None, None), cwd.to_path_buf());
    }

    #[test]
    fn broken_settings_become_a_warning() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        fs::write(&path, "timezone: [oops").unwrap();

        let mut warnings = Vec::new();
        let config = load_config(&path, &mut warnings).unwrap();
        assert_eq!(config, MemexConfig::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].content.contains("using defaults"));
    }

    #[test]
    fn bad_configured_or_env_zone_falls_back_with_a_warning() {
        let mut warnings = Vec::new();
        let zone = resolve_zone(None, None, Some("Bogus/Zone"), &mut warnings).unwrap();
        assert_eq!(zone, Zone::Local);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].content.contains("Unknown timezone: Bogus/Zone"));

        let mut warnings = Vec::new();
        let zone = resolve_zone(None, Some("Nope"), Some("UTC"), &mut warnings).unwrap();
        assert_eq!(zone, Zone::Local);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn explicit_zone_overrides_a_bad_configured_one() {
        let mut warnings = Vec::new();
        let zone = resolve_zone(Some("UTC"), Some("Nope"), Some("Bogus/Zone"), &mut warnings).unwrap();
        assert_eq!(zone, Zone::Named(chrono_tz::UTC));
        assert!(warnings.is_empty());
    }

    #[test]
    fn bad_settings_zone_still_initializes() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), "timezone: Bogus/Zone\n").unwrap();
        let ctx = initialize(temp.path(), Some(temp.path()), Some("UTC")).unwrap();
        assert!(ctx.warnings.is_empty());
    }

    #[test]
    fn explicit_bad_timezone_is_fatal() {
        let temp = TempDir::new().unwrap();
        let result = initialize(temp.path(), Some(temp.path()), Some("Mars/Olympus"));
        assert!(matches!(result, Err(MemexError::InvalidTimezone(_))));
    }
}
