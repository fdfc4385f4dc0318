use serde_json::{Map, Value};
use std::path::PathBuf;
use tracing::debug;

const SETTING_PREFIX: &str = "chronos.";
const SAVE_IN_PROJECT_FOLDER: &str = "saveInProjectFolder";

/// Editor `settings.json` files in precedence order; the first file that
/// defines a key wins.
#[derive(Debug, Default)]
pub struct EditorSettings {
    layers: Vec<Map<String, Value>>,
}

impl EditorSettings {
    /// Missing or malformed files contribute nothing.
    pub fn load(paths: &[PathBuf]) -> Self {
        let layers = paths
            .iter()
            .filter_map(|path| {
                let content = std::fs::read_to_string(path).ok()?;
                match serde_json::from_str::<Map<String, Value>>(&content) {
                    Ok(layer) => Some(layer),
                    Err(e) => {
                        debug!(path = %path.display(), error = %e, "ignoring unreadable settings file");
                        None
                    }
                }
            })
            .collect();

        EditorSettings { layers }
    }

    pub fn from_layers(layers: Vec<Map<String, Value>>) -> Self {
        EditorSettings { layers }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        let key = format!("{SETTING_PREFIX}{name}");
        self.layers.iter().find_map(|layer| layer.get(&key))
    }

    pub fn save_in_project_folder(&self) -> Option<bool> {
        self.get(SAVE_IN_PROJECT_FOLDER).and_then(Value::as_bool)
    }
}
