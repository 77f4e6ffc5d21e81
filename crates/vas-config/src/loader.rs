use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::parse(&raw)
    }

    /// Parse configuration from TOML text
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`], minus the file read
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let expanded = crate::env::expand_env(raw)
            .map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded)
            .map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if a route path is malformed, two routes collide,
    /// or the log filter is blank
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_routes()?;
        self.validate_telemetry()?;
        Ok(())
    }

    fn validate_routes(&self) -> anyhow::Result<()> {
        let health = &self.server.health;
        let echo = &self.server.echo;

        if health.enabled && !health.path.starts_with('/') {
            anyhow::bail!("server.health.path must start with '/': `{}`", health.path);
        }

        if echo.enabled && !echo.path.starts_with('/') {
            anyhow::bail!("server.echo.path must start with '/': `{}`", echo.path);
        }

        if health.enabled && echo.enabled && health.path == echo.path {
            anyhow::bail!("server.health.path and server.echo.path must differ: `{}`", health.path);
        }

        Ok(())
    }

    fn validate_telemetry(&self) -> anyhow::Result<()> {
        if let Some(ref telemetry) = self.telemetry
            && let Some(ref filter) = telemetry.log_filter
            && filter.trim().is_empty()
        {
            anyhow::bail!("telemetry.log_filter must not be blank");
        }

        Ok(())
    }
}
