use serde::{Deserialize, Serialize};

const DEFAULT_BRAND: &str = "Leadline CRM";
const DEFAULT_STALE_AFTER_DAYS: u32 = 45;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppProfile {
    Dev,
    Prod,
}

impl AppProfile {
    pub fn from_env(value: Option<String>) -> Self {
        match value.as_deref() {
            Some("prod") | Some("production") => Self::Prod,
            _ => Self::Dev,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub brand: String,
    pub profile: AppProfile,
    /// Leads estimated beyond this many days get the "stalled" tile accent.
    pub stale_after_days: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            brand: DEFAULT_BRAND.to_string(),
            profile: AppProfile::Dev,
            stale_after_days: DEFAULT_STALE_AFTER_DAYS,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        crate::config::load_dotenv();

        let mut config = Self::default();

        if let Some(brand) = read_env("LEADLINE_BRAND") {
            config.brand = brand;
        }

        config.profile = AppProfile::from_env(read_env("LEADLINE_PROFILE"));

        if let Some(days) =
            read_env("LEADLINE_STALE_AFTER_DAYS").and_then(|value| value.parse::<u32>().ok())
        {
            config.stale_after_days = days.max(1);
        }

        config
    }

    pub fn is_stalled(&self, time_to_close: Option<u32>) -> bool {
        time_to_close.is_some_and(|days| days > self.stale_after_days)
    }
}

fn read_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .or_else(|| option_env_from_build(key).map(|s| s.to_string()))
}

// wasm builds have no runtime environment; these are baked in at compile time.
fn option_env_from_build(key: &str) -> Option<&'static str> {
    match key {
        "LEADLINE_BRAND" => option_env!("LEADLINE_BRAND"),
        "LEADLINE_PROFILE" => option_env!("LEADLINE_PROFILE"),
        "LEADLINE_STALE_AFTER_DAYS" => option_env!("LEADLINE_STALE_AFTER_DAYS"),
        _ => None,
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_dotenv() {
    if let Err(err) = dotenvy::dotenv() {
        if !matches!(err, dotenvy::Error::Io(ref io_err) if io_err.kind() == std::io::ErrorKind::NotFound)
        {
            tracing::warn!("failed to load .env: {err}");
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[inline]
pub fn load_dotenv() {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_parses_prod_aliases() {
        assert_eq!(AppProfile::from_env(Some("prod".into())), AppProfile::Prod);
        assert_eq!(AppProfile::from_env(Some("production".into())), AppProfile::Prod);
        assert_eq!(AppProfile::from_env(Some("staging".into())), AppProfile::Dev);
        assert_eq!(AppProfile::from_env(None), AppProfile::Dev);
    }

    #[test]
    fn stalled_threshold_is_exclusive_and_skips_undated() {
        let config = AppConfig::default();
        assert!(!config.is_stalled(Some(DEFAULT_STALE_AFTER_DAYS)));
        assert!(config.is_stalled(Some(DEFAULT_STALE_AFTER_DAYS + 1)));
        assert!(!config.is_stalled(None));
    }
}
