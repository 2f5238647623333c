use anyhow::{anyhow, Result};
use std::{env, fs, io::ErrorKind, net::IpAddr, path::Path};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "wordfreq.toml";

const ENV_NAME_PORT: &str = "WORDFREQ_PORT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub webserver: WebServer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WebServer {
    pub address: IpAddr,
    pub port: u16,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        cfg.apply_port_env(env::var(ENV_NAME_PORT).ok())?;
        Ok(cfg)
    }

    /// Overrides the port with the value of `WORDFREQ_PORT`.
    fn apply_port_env(&mut self, port: Option<String>) -> Result<()> {
        if let Some(port) = port {
            self.webserver.port = port
                .parse()
                .map_err(|err| anyhow!("Invalid {ENV_NAME_PORT} '{port}': {err}"))?;
        }
        Ok(())
    }

    /// Command line arguments take precedence over
    /// the configuration file and the environment.
    pub fn apply_overrides(&mut self, address: Option<IpAddr>, port: Option<u16>) {
        if let Some(address) = address {
            self.webserver.address = address;
        }
        if let Some(port) = port {
            self.webserver.port = port;
        }
    }
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config { webserver } = from;

        let raw::WebServer { address, port } = webserver.unwrap_or_default();
        let default = raw::WebServer::default();

        let address = address
            .or(default.address)
            .ok_or_else(|| anyhow!("Missing webserver address"))?;
        let address = address
            .parse()
            .map_err(|err| anyhow!("Invalid webserver address '{address}': {err}"))?;
        let port = port
            .or(default.port)
            .ok_or_else(|| anyhow!("Missing webserver port"))?;

        let webserver = WebServer { address, port };

        Ok(Self { webserver })
    }
}
