use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use fairkick::generator::{LocalGenerator, TeamGenerator};
use serde::{Deserialize, Serialize};

use crate::remote_generator::RemoteGenerator;


pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_REMOTE_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeneratorOptions {
    // Run the balancing algorithm in-process. A seed makes runs reproducible.
    Local { seed: Option<u64> },

    // Forward every request to another fairkick server.
    Remote {
        base_url: String,
        #[serde(with = "humantime_serde")]
        timeout: Duration,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AllowedOrigin {
    Any,
    ThisSite(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    pub generator: GeneratorOptions,
    pub allowed_origin: AllowedOrigin,
}

fn default_port() -> u16 { DEFAULT_PORT }

impl GeneratorOptions {
    pub fn make_generator(&self) -> anyhow::Result<Arc<dyn TeamGenerator>> {
        let generator: Arc<dyn TeamGenerator> = match self {
            GeneratorOptions::Local { seed: None } => Arc::new(LocalGenerator::new()),
            GeneratorOptions::Local { seed: Some(seed) } => Arc::new(LocalGenerator::seeded(*seed)),
            GeneratorOptions::Remote { base_url, timeout } => {
                Arc::new(RemoteGenerator::new(base_url, *timeout)?)
            }
        };
        Ok(generator)
    }
}

pub fn read_config_file(filename: &str) -> anyhow::Result<ServerConfig> {
    let contents = std::fs::read_to_string(filename)
        .with_context(|| format!("Failed to read config file '{filename}'."))?;
    parse_config(&contents).with_context(|| format!("Failed to parse config file '{filename}'."))
}

pub fn parse_config(contents: &str) -> anyhow::Result<ServerConfig> {
    Ok(serde_yaml::from_str(contents)?)
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn sample_config_parses() {
        let config = parse_config(include_str!("../samples/server.yaml")).unwrap();
        assert_eq!(config, ServerConfig {
            port: 8000,
            generator: GeneratorOptions::Local { seed: None },
            allowed_origin: AllowedOrigin::Any,
        });
    }

    #[test]
    fn remote_config_parses() {
        let config = parse_config(
            "
generator: !Remote
  base_url: http://teams.example.com
  timeout: 5s
allowed_origin: !ThisSite https://example.com
",
        )
        .unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.generator, GeneratorOptions::Remote {
            base_url: "http://teams.example.com".to_owned(),
            timeout: Duration::from_secs(5),
        });
        assert_eq!(config.allowed_origin, AllowedOrigin::ThisSite("https://example.com".to_owned()));
    }

    #[test]
    fn bad_config_is_an_error() {
        assert!(parse_config("port: 80\n").is_err());
    }
}
