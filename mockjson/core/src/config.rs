/// Environment variable overriding [MockConfig::default_marker].
pub const DEFAULT_MARKER_ENV: &str = "MOCKJSON_DEFAULT_MARKER";
/// Environment variable overriding [MockConfig::generator_prefix].
pub const GENERATOR_PREFIX_ENV: &str = "MOCKJSON_GENERATOR_PREFIX";
/// Environment variable overriding [MockConfig::extension].
pub const EXTENSION_ENV: &str = "MOCKJSON_EXTENSION";

/// Settings shared by the loader, the builder and the renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockConfig {
	/// Reserved submodule (and function) name whose entries attach to the parent directly.
	pub default_marker: String,
	/// Namespace prefix that rewritten generator expressions start with.
	pub generator_prefix: String,
	/// Fixture file extension, without the dot.
	pub extension: String,
}

impl MockConfig {
	pub fn new(default_marker: String, generator_prefix: String, extension: String) -> Self {
		Self { default_marker, generator_prefix, extension }
	}

	/// Load the defaults, then apply any `MOCKJSON_*` environment overrides.
	pub fn from_env() -> Self {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
		let defaults = Self::default();
		Self {
			default_marker: lookup(DEFAULT_MARKER_ENV).unwrap_or(defaults.default_marker),
			generator_prefix: lookup(GENERATOR_PREFIX_ENV).unwrap_or(defaults.generator_prefix),
			extension: lookup(EXTENSION_ENV).unwrap_or(defaults.extension),
		}
	}

	pub fn with_default_marker(mut self, marker: impl Into<String>) -> Self {
		self.default_marker = marker.into();
		self
	}

	pub fn with_generator_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.generator_prefix = prefix.into();
		self
	}

	pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
		self.extension = extension.into();
		self
	}

	pub fn is_default_marker(&self, name: &str) -> bool {
		name == self.default_marker
	}
}

impl Default for MockConfig {
	fn default() -> Self {
		Self::new("_".to_string(), "faker.".to_string(), "json".to_string())
	}
}
