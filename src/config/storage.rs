//! Storage configuration

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::ValidationError;

/// Where the profile and chat history live on disk
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding both files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_profile_file")]
    pub profile_file: String,

    #[serde(default = "default_messages_file")]
    pub messages_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            profile_file: default_profile_file(),
            messages_file: default_messages_file(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./sakhi-data")
}

fn default_profile_file() -> String {
    "profile.json".to_string()
}

fn default_messages_file() -> String {
    "messages.json".to_string()
}

impl StorageConfig {
    pub fn profile_path(&self) -> PathBuf {
        self.data_dir.join(&self.profile_file)
    }

    pub fn messages_path(&self) -> PathBuf {
        self.data_dir.join(&self.messages_file)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("storage.data_dir"));
        }
        check_file_name(&self.profile_file, "storage.profile_file")?;
        check_file_name(&self.messages_file, "storage.messages_file")?;
        if self.profile_file == self.messages_file {
            return Err(ValidationError::StorageFilesCollide);
        }
        Ok(())
    }
}

fn check_file_name(name: &str, key: &'static str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::MissingRequired(key));
    }
    if Path::new(name).components().count() != 1 {
        return Err(ValidationError::FileNameHasPath(name.to_string()));
    }
    Ok(())
}
