use clap::{Parser, ValueEnum};
use coupon_cli::DEFAULT_CONFIG_FILE;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const CONFIG_PATH_ENV: &str = "COUPONGEN_CONFIG";
pub const LOG_FORMAT_ENV: &str = "COUPONGEN_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    #[value(name = "text")]
    Text,
    #[value(name = "json")]
    Json,
}

impl Display for LogFormatArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormatArg::Text => write!(f, "text"),
            LogFormatArg::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "coupongen", about = "Generate a list of unique coupon codes")]
pub struct CLI {
    /// INI file with `algorithm`, `quantity` and `length` keys.
    #[arg(long, env = CONFIG_PATH_ENV, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    #[arg(
        long,
        env = LOG_FORMAT_ENV,
        value_enum,
        default_value_t = LogFormatArg::Text
    )]
    pub log_format: LogFormatArg,
}
