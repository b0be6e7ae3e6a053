use std::path::PathBuf;

use clap::Parser;
use herald_config::ServerConfig;

/// Command-line flags for the `heraldd` binary.
#[derive(Debug, Parser)]
#[command(name = "heraldd", version, about = "Herald - announcement webhook fulfillment")]
pub struct Cli {
    /// Config file (defaults to ./herald.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Interface to bind, overriding the config
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind, overriding the config
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Apply listener overrides on top of the loaded configuration.
    pub fn apply(&self, server: &mut ServerConfig) {
        if let Some(host) = &self.host {
            server.host.clone_from(host);
        }
        if let Some(port) = self.port {
            server.port = port;
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::Cli;
    use herald_config::ServerConfig;

    #[test]
    fn clap_command_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn overrides_replace_listener_settings() {
        let cli = Cli::try_parse_from(["heraldd", "--host", "127.0.0.1", "-p", "8080", "-v"])
            .expect("cli should parse");
        let mut server = ServerConfig::default();
        cli.apply(&mut server);

        assert!(cli.verbose);
        assert_eq!(server.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn no_overrides_keep_config() {
        let cli = Cli::try_parse_from(["heraldd"]).expect("cli should parse");
        let mut server = ServerConfig::default();
        cli.apply(&mut server);

        assert!(cli.config.is_none());
        assert_eq!(server.bind_addr(), "0.0.0.0:3000");
    }
}
