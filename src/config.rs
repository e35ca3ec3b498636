const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            debug: false,
        }
    }
}

impl Config {
    /// Bind address covering all interfaces.
    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

pub fn load_config() -> anyhow::Result<Config> {
    let port = parse_port(std::env::var("PORT").ok());

    let debug = std::env::var("DEBUG").is_ok();

    Ok(Config { port, debug })
}

fn parse_port(value: Option<String>) -> u16 {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(DEFAULT_PORT)
}
