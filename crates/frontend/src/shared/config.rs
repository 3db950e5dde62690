use contracts::shared::config::{load_config, Config};

/// localStorage key holding an optional TOML override of the timings
const CONFIG_OVERRIDE_KEY: &str = "talentsync_config";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Embedded defaults, optionally overridden from localStorage
pub fn load_app_config() -> Config {
    let override_toml = storage().and_then(|s| s.get_item(CONFIG_OVERRIDE_KEY).ok().flatten());
    load_config(override_toml.as_deref())
}
