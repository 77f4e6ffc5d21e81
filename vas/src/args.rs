use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// VAS service
#[derive(Debug, Parser)]
#[command(name = "vas", about = "HTTP service with uniform JSON error responses")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "vas.toml", env = "VAS_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "VAS_LISTEN")]
    pub listen: Option<SocketAddr>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_is_well_formed() {
        use clap::CommandFactory;

        Args::command().debug_assert();
    }

    #[test]
    fn listen_override_parses() {
        let args = Args::try_parse_from([
            "vas",
            "--config",
            "/etc/vas.toml",
            "--listen",
            "127.0.0.1:9000",
        ])
        .unwrap();

        assert_eq!(args.config, PathBuf::from("/etc/vas.toml"));
        assert_eq!(args.listen, Some(SocketAddr::from(([127, 0, 0, 1], 9000))));
    }

    #[test]
    fn invalid_listen_is_rejected() {
        assert!(Args::try_parse_from(["vas", "--listen", "not-an-address"]).is_err());
    }
}
