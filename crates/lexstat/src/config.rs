use std::path::{Path, PathBuf};

use lexstat_config as cli;
use lexstat_core::ScanSettings;
use tracing::warn;

const DEFAULT_STORE: &str = ".lexstat/store.json";

pub(crate) fn load_config() -> Option<cli::UserConfig> {
    let config_dir = dirs::config_dir()?.join("lexstat");
    let config_path = config_dir.join("config.json");

    if config_path.exists() {
        let content = std::fs::read_to_string(&config_path).ok()?;
        match serde_json::from_str(&content) {
            Ok(config) => Some(config),
            Err(err) => {
                warn!(path = %config_path.display(), "ignoring invalid config: {err}");
                None
            }
        }
    } else {
        None
    }
}

pub fn resolve_profile<'a>(
    config: &'a Option<cli::UserConfig>,
    name: Option<&String>,
) -> Option<&'a cli::Profile> {
    config
        .as_ref()
        .and_then(|c| c.profile(name.map(|s| s.as_str())))
}

/// CLI flag, then profile, then built-in default.
pub fn resolve_scan(args: &cli::ScanArgs, profile: Option<&cli::Profile>) -> ScanSettings {
    let defaults = ScanSettings::default();
    ScanSettings {
        root: args
            .path
            .as_deref()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or(defaults.root),
        extensions: if args.extensions.is_empty() {
            profile
                .and_then(|p| p.extensions.clone())
                .unwrap_or(defaults.extensions)
        } else {
            args.extensions.clone()
        },
        include_hidden: !args.no_hidden
            && profile
                .and_then(|p| p.include_hidden)
                .unwrap_or(defaults.include_hidden),
        respect_ignore: args.respect_ignore
            || profile
                .and_then(|p| p.respect_ignore)
                .unwrap_or(defaults.respect_ignore),
        follow_links: args.follow_links
            || profile
                .and_then(|p| p.follow_links)
                .unwrap_or(defaults.follow_links),
        max_file_bytes: args
            .max_file_bytes
            .or_else(|| profile.and_then(|p| p.max_file_bytes)),
        force: args.force,
    }
}

pub fn resolve_format(
    global: &cli::GlobalArgs,
    profile: Option<&cli::Profile>,
) -> cli::OutputFormat {
    global
        .format
        .or_else(|| profile.and_then(|p| p.format))
        .unwrap_or_default()
}

pub fn resolve_store_path(global: &cli::GlobalArgs, profile: Option<&cli::Profile>) -> PathBuf {
    global
        .store
        .clone()
        .or_else(|| profile.and_then(|p| p.store.as_deref()).map(PathBuf::from))
        .unwrap_or_else(|| Path::new(DEFAULT_STORE).to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cli::{GlobalArgs, OutputFormat, Profile, ScanArgs, UserConfig};

    fn profile() -> Profile {
        Profile {
            format: Some(OutputFormat::Json),
            store: Some("/var/lib/lexstat.json".into()),
            extensions: Some(vec![".md".into()]),
            include_hidden: Some(false),
            respect_ignore: Some(true),
            follow_links: None,
            max_file_bytes: Some(1024),
        }
    }

    #[test]
    fn scan_defaults_without_profile() {
        let settings = resolve_scan(&ScanArgs::default(), None);
        assert_eq!(settings, ScanSettings::default());
    }

    #[test]
    fn profile_fills_unset_flags() {
        let p = profile();
        let settings = resolve_scan(&ScanArgs::default(), Some(&p));
        assert_eq!(settings.extensions, vec![".md"]);
        assert!(!settings.include_hidden);
        assert!(settings.respect_ignore);
        assert!(!settings.follow_links);
        assert_eq!(settings.max_file_bytes, Some(1024));
    }

    #[test]
    fn cli_flags_win_over_profile() {
        let p = profile();
        let args = ScanArgs {
            path: Some(PathBuf::from("corpus")),
            extensions: vec!["txt".into()],
            max_file_bytes: Some(10),
            force: true,
            ..ScanArgs::default()
        };
        let settings = resolve_scan(&args, Some(&p));
        assert_eq!(settings.root, "corpus");
        assert_eq!(settings.extensions, vec!["txt"]);
        assert_eq!(settings.max_file_bytes, Some(10));
        assert!(settings.force);
    }

    #[test]
    fn format_and_store_resolution_order() {
        let p = profile();
        let mut global = GlobalArgs::default();
        assert_eq!(resolve_format(&global, None), OutputFormat::Md);
        assert_eq!(resolve_format(&global, Some(&p)), OutputFormat::Json);
        assert_eq!(
            resolve_store_path(&global, None),
            PathBuf::from(".lexstat/store.json")
        );
        assert_eq!(
            resolve_store_path(&global, Some(&p)),
            PathBuf::from("/var/lib/lexstat.json")
        );

        global.format = Some(OutputFormat::Md);
        global.store = Some(PathBuf::from("here.json"));
        assert_eq!(resolve_format(&global, Some(&p)), OutputFormat::Md);
        assert_eq!(resolve_store_path(&global, Some(&p)), PathBuf::from("here.json"));
    }

    #[test]
    fn resolve_profile_uses_default_key() {
        let mut config = UserConfig::default();
        config.profiles.insert("default".into(), profile());
        let config = Some(config);
        assert!(resolve_profile(&config, None).is_some());
        assert!(resolve_profile(&config, Some(&"other".to_string())).is_none());
        assert!(resolve_profile(&None, None).is_none());
    }
}
