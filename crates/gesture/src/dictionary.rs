use std::collections::BTreeMap;
use std::path::Path;

use sign_hand_interface::Sign;

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Read-only mapping from sign id to display text, loaded once at startup.
///
/// The file is a JSON object with stringified numeric keys
/// (`{"0": "Hello", ...}`). A missing file is not an error; the classifier
/// then falls back to each sign's intrinsic name.
#[derive(Debug, Clone, Default)]
pub struct SignDictionary {
    entries: BTreeMap<u8, String>,
}

impl SignDictionary {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let path = path.as_ref();

        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(
                    path = %path.display(),
                    "sign dictionary not found, falling back to intrinsic names"
                );
                return Ok(Self::default());
            }
            Err(err) => return Err(err.into()),
        };

        let parsed: BTreeMap<String, String> = serde_json::from_str(&raw)?;

        let mut entries = BTreeMap::new();
        for (key, text) in parsed {
            match key.parse::<u8>() {
                Ok(id) => {
                    entries.insert(id, text);
                }
                Err(_) => {
                    tracing::warn!(%key, "skipping sign dictionary entry with non-numeric id");
                }
            }
        }

        Ok(Self { entries })
    }

    pub fn from_entries(entries: impl IntoIterator<Item = (u8, String)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn get(&self, sign: Sign) -> Option<&str> {
        self.entries.get(&sign.id()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
