//! Xbox Live editor plugin.

use super::{EditorPlugin, PluginDescription, PluginVersion};

/// Editor plugin advertising the Xbox Live online platform.
#[derive(Debug, Clone)]
pub struct XboxLivePlugin {
    description: PluginDescription,
}

impl XboxLivePlugin {
    /// Create the plugin with its fixed description record.
    pub fn new() -> Self {
        XboxLivePlugin {
            description: PluginDescription {
                name: "Xbox Live".to_string(),
                category: "Online".to_string(),
                description: "Online platform implementation for Xbox Live.".to_string(),
                author: "Ember Engine Team".to_string(),
                repository_url: "https://github.com/ember-engine/online-xboxlive".to_string(),
                version: PluginVersion::new(1, 0),
            },
        }
    }
}

impl Default for XboxLivePlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorPlugin for XboxLivePlugin {
    fn description(&self) -> &PluginDescription {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_literals() {
        let plugin = XboxLivePlugin::new();
        let desc = plugin.description();

        assert_eq!(desc.name, "Xbox Live");
        assert_eq!(desc.category, "Online");
        assert_eq!(desc.version, PluginVersion::new(1, 0));
    }

    #[test]
    fn test_description_is_stable_across_calls() {
        let plugin = XboxLivePlugin::new();
        let first = plugin.description().clone();

        assert_eq!(plugin.description(), &first);
        assert_eq!(XboxLivePlugin::new().description(), &first);
    }

    #[test]
    fn test_description_string_fields_are_non_empty() {
        let plugin = XboxLivePlugin::new();
        let desc = plugin.description();

        assert!(!desc.name.is_empty());
        assert!(!desc.category.is_empty());
        assert!(!desc.description.is_empty());
        assert!(!desc.author.is_empty());
        assert!(!desc.repository_url.is_empty());
    }

    #[test]
    fn test_description_serializes_for_discovery() {
        let plugin = XboxLivePlugin::new();
        let value = serde_json::to_value(plugin.description()).unwrap();

        assert_eq!(value["name"], "Xbox Live");
        assert_eq!(value["category"], "Online");
        assert_eq!(value["version"]["major"], 1);
        assert_eq!(value["version"]["minor"], 0);
    }
}
