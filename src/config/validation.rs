use super::*;

impl HarnessConfig {
    /// Check the parsed tree against the harness schema.
    ///
    /// Every rule runs; each violation contributes one human-readable
    /// diagnostic. The traversal order (platforms, then test suites, then
    /// timeouts) is part of the contract: callers print the collection
    /// verbatim. An empty result means the configuration is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        self.validate_platforms(&mut errors);
        self.validate_test_suites(&mut errors);
        self.validate_timeouts(&mut errors);
        errors
    }

    fn validate_platforms(&self, errors: &mut Vec<String>) {
        let platforms = match self.get("platforms").and_then(Value::as_seq) {
            Some(seq) if !seq.is_empty() => seq,
            _ => {
                errors.push("No platforms defined".to_string());
                return;
            }
        };

        for platform in platforms {
            let Some(fields) = platform.as_map() else {
                errors.push("Platform missing name".to_string());
                continue;
            };
            let name = fields
                .get("name")
                .filter(|v| v.is_truthy())
                .and_then(Value::as_str);
            let Some(name) = name else {
                // without a name the remaining checks have nothing to
                // report against
                errors.push("Platform missing name".to_string());
                continue;
            };

            if !fields.get("base_image").is_some_and(Value::is_truthy) {
                errors.push(format!("Platform {} missing base_image", name));
            }
            if !fields.get("dockerfile").is_some_and(Value::is_truthy) {
                errors.push(format!("Platform {} missing dockerfile", name));
            }

            match fields.get("architectures").and_then(Value::as_seq) {
                Some(archs) if !archs.is_empty() => {
                    let targets = fields.get("zig_target_map").and_then(Value::as_map);
                    for arch in archs.iter().filter_map(Value::as_str) {
                        let mapped = targets.is_some_and(|map| map.contains_key(arch));
                        if !mapped {
                            errors.push(format!(
                                "Platform {} missing Zig target for architecture {}",
                                name, arch
                            ));
                        }
                    }
                }
                _ => errors.push(format!("Platform {} has no architectures", name)),
            }
        }
    }

    fn validate_test_suites(&self, errors: &mut Vec<String>) {
        let suites = match self.get("test_suites").and_then(Value::as_map) {
            Some(map) if !map.is_empty() => map,
            _ => {
                errors.push("No test suites defined".to_string());
                return;
            }
        };

        for (name, suite) in suites {
            let fields = suite.as_map();
            let timeout = fields.and_then(|m| m.get("timeout"));
            if !timeout.is_some_and(Value::is_truthy) {
                errors.push(format!("Test suite {} missing timeout", name));
            }
            let tests = fields.and_then(|m| m.get("tests"));
            if !tests.is_some_and(Value::is_truthy) {
                errors.push(format!("Test suite {} has no tests", name));
            }
        }
    }

    fn validate_timeouts(&self, errors: &mut Vec<String>) {
        let timeouts = self.get("timeouts").and_then(Value::as_map);
        for name in ["global", "build", "test", "cleanup"] {
            match timeouts.and_then(|map| map.get(name)) {
                None => errors.push(format!("Missing timeout: {}", name)),
                Some(value) => {
                    if !value.as_i64().is_some_and(|n| n > 0) {
                        errors.push(format!("Invalid timeout value for {}", name));
                    }
                }
            }
        }
    }
}
