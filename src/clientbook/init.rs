//! Startup wiring: config, preferences and both books, with fallbacks.
//!
//! - Logging starts at the config's level, or the default level if that is
//!   not a known one.
//! - A missing config or preferences file gives defaults.
//! - An unreadable preferences file gives defaults and a warning.
//! - A missing book file gives the sample data.
//! - An unreadable book file gives an empty book and a warning, so a bad
//!   file never prevents startup. It is overwritten on the next save.

use crate::book::{AddressBook, SellerAddressBook};
use crate::config::AppConfig;
use crate::error::Result;
use crate::logging;
use crate::manager::ModelManager;
use crate::prefs::UserPrefs;
use crate::store::fs::{read_json, JsonStorage};
use crate::store::{sample, Storage};
use std::path::Path;
use tracing::{info, warn};

pub struct ClientbookContext {
    pub config: AppConfig,
    pub storage: JsonStorage,
    pub model: ModelManager,
}

/// Loads everything named by the config file at `config_path`.
pub fn initialize(config_path: &Path) -> Result<ClientbookContext> {
    let (config, config_error) = match AppConfig::load(config_path) {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    let level_error = logging::init_logging(&config.log_level).err();
    if level_error.is_some() {
        logging::init_logging(&AppConfig::default().log_level)?;
    }

    if let Some(e) = config_error {
        warn!(path = %config_path.display(), error = %e, "config file unreadable, using defaults");
    }
    if let Some(e) = level_error {
        warn!(level = %config.log_level, error = %e, "unknown log level, using the default");
    }
    info!(path = %config_path.display(), "using config file");

    let user_prefs = match read_json::<UserPrefs>(&config.user_prefs_file_path) {
        Ok(Some(prefs)) => prefs,
        Ok(None) => UserPrefs::default(),
        Err(e) => {
            warn!(error = %e, "preferences file unreadable, using defaults");
            UserPrefs::default()
        }
    };

    let storage = JsonStorage::from_prefs(&user_prefs, &config.user_prefs_file_path);
    let model = init_model(&storage, &user_prefs)?;

    Ok(ClientbookContext {
        config,
        storage,
        model,
    })
}

/// Builds the model from `storage`, falling back to sample data or empty
/// books as described in the module docs.
pub fn init_model<S: Storage>(storage: &S, user_prefs: &UserPrefs) -> Result<ModelManager> {
    let address_book = match storage.read_address_book() {
        Ok(Some(book)) => book,
        Ok(None) => {
            info!("address book not found, starting with sample data");
            sample::sample_address_book()?
        }
        Err(e) => {
            warn!(error = %e, "address book unreadable, starting with an empty one");
            AddressBook::new()
        }
    };

    let seller_address_book = match storage.read_seller_address_book() {
        Ok(Some(book)) => book,
        Ok(None) => {
            info!("seller address book not found, starting with sample data");
            sample::sample_seller_address_book()?
        }
        Err(e) => {
            warn!(error = %e, "seller address book unreadable, starting with an empty one");
            SellerAddressBook::new()
        }
    };

    ModelManager::new(&address_book, user_prefs, &seller_address_book)
}
