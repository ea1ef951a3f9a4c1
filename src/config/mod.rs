use crate::core::daily::{DateMatch, PickupPolicy};
use crate::errors::{AppError, AppResult};
use crate::image::ImageHost;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Root directory of the CSV workbook store
    #[serde(default = "default_store")]
    pub store: String,
    /// Workbook id inside the store (the spreadsheet key)
    #[serde(default = "default_table_id")]
    pub table_id: String,

    #[serde(default = "default_catalog_sheet")]
    pub catalog_sheet: String,
    #[serde(default = "default_inbound_sheet")]
    pub inbound_sheet: String,
    #[serde(default = "default_scorecard_sheet")]
    pub scorecard_sheet: String,

    // 1-based column indices, spreadsheet style
    #[serde(default = "default_order_column")]
    pub order_column: usize,
    #[serde(default = "default_vendor_column")]
    pub vendor_column: usize,
    #[serde(default = "default_category_column")]
    pub category_column: usize,
    #[serde(default = "default_scorecard_date_column")]
    pub scorecard_date_column: usize,
    #[serde(default = "default_scorecard_order_column")]
    pub scorecard_order_column: usize,

    #[serde(default)]
    pub date_match: DateMatch,
    #[serde(default)]
    pub pickup_policy: PickupPolicy,

    #[serde(default = "default_lookup_ttl")]
    pub lookup_ttl_secs: u64,
    #[serde(default = "default_counter_ttl")]
    pub counter_ttl_secs: u64,

    #[serde(default)]
    pub image_host: ImageHost,
    #[serde(default)]
    pub imgbb_key: String,
    #[serde(default)]
    pub imgur_client_id: String,
    /// Destination of the `folder` image host (defaults to `<store>/images`)
    #[serde(default)]
    pub image_folder: String,
    #[serde(default = "default_upload_timeout")]
    pub upload_timeout_secs: u64,
}

fn default_store() -> String {
    Config::config_dir()
        .join("store")
        .to_string_lossy()
        .to_string()
}
fn default_table_id() -> String {
    "inbound".to_string()
}
fn default_catalog_sheet() -> String {
    "Dump".to_string()
}
fn default_inbound_sheet() -> String {
    "inbound".to_string()
}
fn default_scorecard_sheet() -> String {
    "Score Card".to_string()
}
fn default_order_column() -> usize {
    5
}
fn default_vendor_column() -> usize {
    54
}
fn default_category_column() -> usize {
    90
}
fn default_scorecard_date_column() -> usize {
    1
}
fn default_scorecard_order_column() -> usize {
    2
}
fn default_lookup_ttl() -> u64 {
    300
}
fn default_counter_ttl() -> u64 {
    60
}
fn default_upload_timeout() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: default_store(),
            table_id: default_table_id(),
            catalog_sheet: default_catalog_sheet(),
            inbound_sheet: default_inbound_sheet(),
            scorecard_sheet: default_scorecard_sheet(),
            order_column: default_order_column(),
            vendor_column: default_vendor_column(),
            category_column: default_category_column(),
            scorecard_date_column: default_scorecard_date_column(),
            scorecard_order_column: default_scorecard_order_column(),
            date_match: DateMatch::default(),
            pickup_policy: PickupPolicy::default(),
            lookup_ttl_secs: default_lookup_ttl(),
            counter_ttl_secs: default_counter_ttl(),
            image_host: ImageHost::default(),
            imgbb_key: String::new(),
            imgur_client_id: String::new(),
            image_folder: String::new(),
            upload_timeout_secs: default_upload_timeout(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".stockinbound")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("stockinbound.conf")
    }

    /// Load configuration from file, or return defaults if not found.
    /// API keys left empty in the file are taken from the environment.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        let mut cfg = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content)?
        } else {
            Config::default()
        };

        if cfg.imgbb_key.is_empty()
            && let Ok(key) = std::env::var("IMGBB_API_KEY")
        {
            cfg.imgbb_key = key;
        }
        if cfg.imgur_client_id.is_empty()
            && let Ok(id) = std::env::var("IMGUR_CLIENT_ID")
        {
            cfg.imgur_client_id = id;
        }

        Ok(cfg)
    }

    pub fn lookup_ttl(&self) -> Duration {
        Duration::from_secs(self.lookup_ttl_secs)
    }

    pub fn counter_ttl(&self) -> Duration {
        Duration::from_secs(self.counter_ttl_secs)
    }

    pub fn upload_timeout(&self) -> Duration {
        Duration::from_secs(self.upload_timeout_secs)
    }

    /// Folder used by the `folder` image host
    pub fn image_folder_path(&self) -> PathBuf {
        if self.image_folder.trim().is_empty() {
            crate::utils::path::expand_tilde(&self.store).join("images")
        } else {
            crate::utils::path::expand_tilde(&self.image_folder)
        }
    }

    /// Write the configuration file (unless in test mode) and create the
    /// store directory.
    pub fn init_all(custom_store: Option<String>, is_test: bool) -> AppResult<Self> {
        let mut config = Config::default();
        if let Some(store) = custom_store {
            config.store = store;
        }

        if !is_test {
            fs::create_dir_all(Self::config_dir())?;
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        let store = crate::utils::path::expand_tilde(&config.store);
        fs::create_dir_all(&store).map_err(|e| {
            AppError::Config(format!("cannot create store {}: {e}", store.display()))
        })?;

        println!("✅ Store:       {:?}", store);

        Ok(config)
    }
}
