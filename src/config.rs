use std::env;
use std::time::Duration;

use thiserror::Error;

/// Startup-time configuration failure. Fatal: binaries log it and exit.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no value provided for environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value provided for environment variable {0}: {1}")]
    Invalid(&'static str, String),
    #[error("error occurred attempting to read from symbols file: {0}")]
    SymbolsFile(String),
}

#[derive(Debug, Clone)]
pub struct TickerSettings {
    pub port: u16,
    pub quote_api_uri: String,
}

#[derive(Debug, Clone)]
pub struct RatingsSettings {
    pub port: u16,
    pub ratings_request_url: String,
}

#[derive(Debug, Clone)]
pub struct HistorySettings {
    pub port: u16,
    pub db_uri: String,
    pub db_name: String,
    pub db_collection: String,
    pub db_connect_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct RealtimeSettings {
    pub port: u16,
    pub ticker_uri: String,
    pub ratings_uri: String,
    pub ratings_history_uri: String,
}

#[derive(Debug, Clone)]
pub struct RefresherSettings {
    pub realtime_uri: String,
    pub bot_uri: String,
    pub ratings_history_uri: String,
    pub symbols: Vec<String>,
    pub pacing: Duration,
}

#[derive(Debug, Clone)]
pub struct BotSettings {
    pub port: u16,
    pub webhook_url: String,
}

pub fn ticker() -> Result<TickerSettings, ConfigError> {
    dotenvy::dotenv().ok();

    Ok(TickerSettings {
        port: required_port("TICKER_SERVER_PORT")?,
        quote_api_uri: env::var("QUOTE_API_URI")
            .unwrap_or_else(|_| "https://query1.finance.yahoo.com".to_string()),
    })
}

pub fn ratings() -> Result<RatingsSettings, ConfigError> {
    dotenvy::dotenv().ok();

    Ok(RatingsSettings {
        port: required_port("RATINGS_SERVER_PORT")?,
        ratings_request_url: required("RATINGS_REQUEST_URL")?,
    })
}

pub fn ratings_history() -> Result<HistorySettings, ConfigError> {
    dotenvy::dotenv().ok();

    let timeout = required("DATABASE_CONNECT_TIMEOUT")?;
    let seconds: u64 = timeout
        .parse()
        .map_err(|_| ConfigError::Invalid("DATABASE_CONNECT_TIMEOUT", timeout.clone()))?;

    Ok(HistorySettings {
        port: required_port("RATINGS_HISTORY_SERVER_PORT")?,
        db_uri: required("DATABASE_URI")?,
        db_name: required("DATABASE_NAME")?,
        db_collection: required("DATABASE_COLLECTION_NAME")?,
        db_connect_timeout: Duration::from_secs(seconds),
    })
}

pub fn realtime() -> Result<RealtimeSettings, ConfigError> {
    dotenvy::dotenv().ok();

    Ok(RealtimeSettings {
        port: required_port("REALTIME_SERVER_PORT")?,
        ticker_uri: required("TICKER_SERVICE_URI")?,
        ratings_uri: required("RATINGS_SERVICE_URI")?,
        ratings_history_uri: required("RATINGS_HISTORY_SERVICE_URI")?,
    })
}

pub fn refresher() -> Result<RefresherSettings, ConfigError> {
    dotenvy::dotenv().ok();

    let symbols_path = required("REFRESHER_SYMBOLS_PATH")?;
    let content = std::fs::read_to_string(&symbols_path)
        .map_err(|e| ConfigError::SymbolsFile(e.to_string()))?;

    let pacing = match env::var("REFRESHER_PACING_SECONDS") {
        Ok(raw) => {
            let seconds: u64 = raw
                .parse()
                .map_err(|_| ConfigError::Invalid("REFRESHER_PACING_SECONDS", raw.clone()))?;
            Duration::from_secs(seconds)
        }
        Err(_) => Duration::from_secs(1),
    };

    Ok(RefresherSettings {
        realtime_uri: required("REALTIME_SERVICE_URI")?,
        bot_uri: required("BOT_SERVICE_URI")?,
        ratings_history_uri: required("RATINGS_HISTORY_SERVICE_URI")?,
        symbols: parse_symbols(&content)?,
        pacing,
    })
}

pub fn bot() -> Result<BotSettings, ConfigError> {
    dotenvy::dotenv().ok();

    Ok(BotSettings {
        port: required_port("BOT_SERVER_PORT")?,
        webhook_url: required("DISCORD_WEBHOOK_URL")?,
    })
}

/// The symbols file carries a header line; the second line is the
/// comma-separated list of tracked symbols. Entries are trimmed, blanks
/// dropped, duplicates and order kept.
pub fn parse_symbols(content: &str) -> Result<Vec<String>, ConfigError> {
    let line = content
        .lines()
        .nth(1)
        .ok_or_else(|| ConfigError::SymbolsFile("file has no symbols line".to_string()))?;

    Ok(line
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect())
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(name)),
    }
}

fn required_port(name: &'static str) -> Result<u16, ConfigError> {
    let raw = required(name)?;
    raw.parse::<u16>()
        .map_err(|_| ConfigError::Invalid(name, raw.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_symbols_reads_second_line() {
        let content = "tracked symbols\nAAPL,MSFT,GME\n";
        let symbols = parse_symbols(content).unwrap();
        assert_eq!(symbols, vec!["AAPL", "MSFT", "GME"]);
    }

    #[test]
    fn parse_symbols_trims_and_drops_blanks_keeps_duplicates() {
        let content = "header\n AAPL , ,MSFT,AAPL,\n";
        let symbols = parse_symbols(content).unwrap();
        assert_eq!(symbols, vec!["AAPL", "MSFT", "AAPL"]);
    }

    #[test]
    fn parse_symbols_missing_second_line_is_an_error() {
        let err = parse_symbols("only a header").unwrap_err();
        assert!(err.to_string().contains("symbols file"));
    }

    #[test]
    fn parse_symbols_empty_list_is_allowed() {
        let symbols = parse_symbols("header\n\n").unwrap();
        assert!(symbols.is_empty());
    }
}
