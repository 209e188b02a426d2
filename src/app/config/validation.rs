use super::{Config, ConfigError};

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chain_order.is_empty() {
            return Err(ConfigError::InvalidConfig(
                "Chain order must name at least one severity".to_string(),
            ));
        }

        // A repeated severity can never be reached past its first occurrence.
        for (index, severity) in self.chain_order.iter().enumerate() {
            if self.chain_order[..index].contains(severity) {
                return Err(ConfigError::InvalidConfig(format!(
                    "Severity {severity} appears more than once in chain order"
                )));
            }
        }

        Ok(())
    }
}
