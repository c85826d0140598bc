//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Backdrop Configuration
# Only override what you want to change -- missing fields use defaults.

[pexels]
# Without a key no remote call is made and the fallback is always used.
# The PEXELS_API_KEY environment variable takes precedence.
# api_key = ""
# Search terms drawn at random per request. Empty uses the built-in list.
# queries = ["ocean", "mountains", "nebula"]
# max_page = 10          # 1-100
# max_per_page = 15      # 1-80
# timeout_secs = 15      # 1-120
# base_url = "https://api.pexels.com/v1"

[logging]
# level = "INFO"         # DEBUG, INFO, WARNING, ERROR
"##
}
