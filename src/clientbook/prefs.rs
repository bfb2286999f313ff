use crate::error::{ClientbookError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

const DEFAULT_WINDOW_WIDTH: f64 = 740.0;
const DEFAULT_WINDOW_HEIGHT: f64 = 600.0;

/// Window geometry remembered between sessions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuiSettings {
    pub window_width: f64,
    pub window_height: f64,
    /// Top-left corner; `None` lets the window manager decide.
    #[serde(default)]
    pub window_coordinates: Option<(i32, i32)>,
}

impl Default for GuiSettings {
    fn default() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            window_coordinates: None,
        }
    }
}

impl GuiSettings {
    pub fn new(window_width: f64, window_height: f64, x: i32, y: i32) -> Self {
        Self {
            window_width,
            window_height,
            window_coordinates: Some((x, y)),
        }
    }
}

impl fmt::Display for GuiSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.window_width, self.window_height)?;
        if let Some((x, y)) = self.window_coordinates {
            write!(f, " at ({}, {})", x, y)?;
        }
        Ok(())
    }
}

/// Read access to user preferences.
pub trait ReadOnlyUserPrefs {
    fn gui_settings(&self) -> GuiSettings;
    fn address_book_file_path(&self) -> &Path;
    fn seller_address_book_file_path(&self) -> &Path;
}

/// User preferences, stored as camelCase JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPrefs {
    #[serde(default)]
    gui_settings: GuiSettings,

    #[serde(
        default = "default_address_book_path",
        deserialize_with = "deserialize_path"
    )]
    address_book_file_path: PathBuf,

    #[serde(
        default = "default_seller_address_book_path",
        deserialize_with = "deserialize_path"
    )]
    seller_address_book_file_path: PathBuf,
}

fn default_address_book_path() -> PathBuf {
    ["data", "addressbook.json"].iter().collect()
}

fn default_seller_address_book_path() -> PathBuf {
    ["data", "sellerbook.json"].iter().collect()
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self {
            gui_settings: GuiSettings::default(),
            address_book_file_path: default_address_book_path(),
            seller_address_book_file_path: default_seller_address_book_path(),
        }
    }
}

impl UserPrefs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies every field out of `source`.
    pub fn from_read_only(source: &dyn ReadOnlyUserPrefs) -> Result<Self> {
        let mut prefs = Self::default();
        prefs.reset_data(source)?;
        Ok(prefs)
    }

    /// Replaces every field with `source`'s. Nothing changes if either path
    /// is empty.
    pub fn reset_data(&mut self, source: &dyn ReadOnlyUserPrefs) -> Result<()> {
        let address_book_file_path = non_empty(source.address_book_file_path().to_path_buf())?;
        let seller_address_book_file_path =
            non_empty(source.seller_address_book_file_path().to_path_buf())?;

        self.gui_settings = source.gui_settings();
        self.address_book_file_path = address_book_file_path;
        self.seller_address_book_file_path = seller_address_book_file_path;
        Ok(())
    }

    pub fn set_gui_settings(&mut self, gui_settings: GuiSettings) {
        self.gui_settings = gui_settings;
    }

    pub fn set_address_book_file_path(&mut self, path: impl Into<PathBuf>) -> Result<()> {
        self.address_book_file_path = non_empty(path.into())?;
        Ok(())
    }

    pub fn set_seller_address_book_file_path(&mut self, path: impl Into<PathBuf>) -> Result<()> {
        self.seller_address_book_file_path = non_empty(path.into())?;
        Ok(())
    }
}

fn non_empty(path: PathBuf) -> Result<PathBuf> {
    if path.as_os_str().is_empty() {
        return Err(ClientbookError::InvalidArgument(
            "file path cannot be empty".to_string(),
        ));
    }
    Ok(path)
}

fn deserialize_path<'de, D>(deserializer: D) -> std::result::Result<PathBuf, D::Error>
where
    D: Deserializer<'de>,
{
    let path = PathBuf::deserialize(deserializer)?;
    non_empty(path).map_err(serde::de::Error::custom)
}

impl ReadOnlyUserPrefs for UserPrefs {
    fn gui_settings(&self) -> GuiSettings {
        self.gui_settings
    }

    fn address_book_file_path(&self) -> &Path {
        &self.address_book_file_path
    }

    fn seller_address_book_file_path(&self) -> &Path {
        &self.seller_address_book_file_path
    }
}

impl fmt::Display for UserPrefs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Gui Settings: {}; Local data file location: {}; Seller data file location: {}",
            self.gui_settings,
            self.address_book_file_path.display(),
            self.seller_address_book_file_path.display()
        )
    }
}
