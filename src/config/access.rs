use indexmap::IndexMap;

use super::*;
use crate::query;

impl HarnessConfig {
    /// Resolve a dotted path against the root mapping.
    ///
    /// Returns `None` when the path is absent. A present-but-null value
    /// resolves to `Some(&Value::Null)`; whether to conflate the two is a
    /// caller decision, not one made here.
    ///
    /// # Example
    /// ```
    /// use harness_cfg::HarnessConfig;
    ///
    /// let config = HarnessConfig::from_str("timeouts:\n  build: 600\n");
    /// let build = config.get("timeouts.build").and_then(|v| v.as_i64());
    /// assert_eq!(build, Some(600));
    /// ```
    pub fn get(&self, path: &str) -> Option<&Value> {
        query::query(&self.root, path)
    }

    /// Keys of the mapping at `path`, in declaration order.
    pub fn keys(&self, path: &str) -> Option<Vec<String>> {
        self.get(path)?
            .as_map()
            .map(|fields| fields.keys().cloned().collect())
    }

    /// Names of platforms not explicitly disabled, in source order.
    pub fn enabled_platforms(&self) -> Vec<String> {
        let Some(platforms) = self.get("platforms").and_then(Value::as_seq) else {
            return Vec::new();
        };
        platforms
            .iter()
            .filter(|p| helpers::is_enabled(p))
            .filter_map(|p| p.as_map()?.get("name")?.as_str())
            .map(str::to_string)
            .collect()
    }

    /// Names of test suites not explicitly disabled, in source order.
    pub fn enabled_test_suites(&self) -> Vec<String> {
        let Some(suites) = self.get("test_suites").and_then(Value::as_map) else {
            return Vec::new();
        };
        suites
            .iter()
            .filter(|(_, suite)| helpers::is_enabled(suite))
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Architectures declared for one platform; empty when the platform is
    /// unknown or declares none.
    pub fn platform_architectures(&self, name: &str) -> Vec<String> {
        let Some(platform) = self.platform(name) else {
            return Vec::new();
        };
        let Some(archs) = platform.get("architectures").and_then(Value::as_seq) else {
            return Vec::new();
        };
        archs
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect()
    }

    /// The Zig target triple mapped for a platform/architecture pair.
    ///
    /// Absent when the platform is unknown, the platform has no target
    /// map, or the architecture is not mapped; an architecture that is
    /// listed but unmapped is a validation diagnostic, never a failure
    /// here.
    pub fn zig_target(&self, platform: &str, arch: &str) -> Option<&str> {
        self.platform(platform)?
            .get("zig_target_map")?
            .as_map()?
            .get(arch)?
            .as_str()
    }

    fn platform(&self, name: &str) -> Option<&IndexMap<String, Value>> {
        self.get("platforms")?
            .as_seq()?
            .iter()
            .filter_map(Value::as_map)
            .find(|p| p.get("name").and_then(Value::as_str) == Some(name))
    }
}
