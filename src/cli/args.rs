use clap::Parser;

/// Serve the bank API over HTTP
#[derive(Parser, Debug)]
#[command(name = "bank-api")]
#[command(about = "In-memory bank account API over HTTP", long_about = None)]
pub struct ServerArgs {
    /// Host name or IP address to listen on
    #[arg(long = "host", value_name = "HOST", default_value = "localhost")]
    pub host: String,

    /// TCP port to listen on
    #[arg(long = "port", value_name = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Log filter used when RUST_LOG is not set
    #[arg(
        long = "log-level",
        value_name = "FILTER",
        default_value = "info",
        help = "Log filter directive, e.g. 'info' or 'bank_api=debug' (RUST_LOG takes precedence)"
    )]
    pub log_level: String,
}

impl ServerArgs {
    /// Address string handed to the TCP listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
