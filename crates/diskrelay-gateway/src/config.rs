use clap::Parser;
use url::Url;

/// Process configuration, taken from flags or the environment.
#[derive(Debug, Clone, Parser)]
#[command(name = "diskrelay", about = "Relay public-share tokens to direct download links")]
pub struct Config {
    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Provider domain used to synthesize public-share URLs.
    #[arg(long, env = "PUBLIC_BASE_URL", default_value = "https://disk.yandex.com")]
    pub public_base_url: Url,

    /// Base URL of the provider's public resources API.
    #[arg(
        long,
        env = "API_BASE_URL",
        default_value = "https://cloud-api.yandex.net/v1/disk/public"
    )]
    pub api_base_url: Url,

    /// Freshness window for cached upstream responses, in seconds.
    #[arg(long, env = "CACHE_TTL_SECS", default_value_t = 60)]
    pub cache_ttl_secs: u64,

    /// Maximum number of cached upstream responses.
    #[arg(long, env = "CACHE_CAPACITY", default_value_t = 10_000)]
    pub cache_capacity: u64,

    /// Timeout for upstream resolution calls, in seconds.
    #[arg(long, env = "UPSTREAM_TIMEOUT_SECS", default_value_t = 10)]
    pub upstream_timeout_secs: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_flags_parse() {
        let config = Config::try_parse_from([
            "diskrelay",
            "--port",
            "8080",
            "--cache-ttl-secs",
            "30",
            "--public-base-url",
            "https://disk.yandex.ru",
        ])
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.cache_ttl_secs, 30);
        assert_eq!(config.public_base_url.as_str(), "https://disk.yandex.ru/");
    }

    #[test]
    fn malformed_base_url_is_rejected() {
        let result = Config::try_parse_from(["diskrelay", "--public-base-url", "not a url"]);
        assert!(result.is_err());
    }
}
