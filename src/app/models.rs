use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::path::PathBuf;

/// Contents of the configuration file. Loaded once, never mutated.
///
/// Missing fields and explicit `null`s both fall back to the default.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Directories walked recursively, in order.
    #[serde(rename = "dir", deserialize_with = "null_as_default")]
    pub dirs: Vec<PathBuf>,
    /// Individual files, processed before any directory.
    #[serde(rename = "file", deserialize_with = "null_as_default")]
    pub files: Vec<PathBuf>,
    #[serde(deserialize_with = "null_as_default")]
    pub output: PathBuf,
    #[serde(deserialize_with = "null_as_default")]
    pub cut_comments: bool,
    /// File name -> language tag, checked before the extension.
    #[serde(deserialize_with = "null_as_default")]
    pub exceptions: HashMap<String, String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
