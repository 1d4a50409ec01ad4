use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::env;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Dev,
    Staging,
    Prod,
}

impl Environment {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "prod" | "production" => Self::Prod,
            "staging" => Self::Staging,
            _ => Self::Dev,
        }
    }

    pub fn is_dev(&self) -> bool {
        matches!(self, Self::Dev)
    }

    pub fn is_prod(&self) -> bool {
        matches!(self, Self::Prod)
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub env: Environment,
    pub server_addr: String,

    // CORS
    pub cors_allow_origins: Vec<String>,

    // Search
    pub search_page_increment: usize,
    pub default_price_ceiling: Decimal,

    // Pricing
    pub service_fee_percent: Decimal,

    // Payments
    pub payment_delay_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            env: Environment::Dev,
            server_addr: "0.0.0.0:8080".to_string(),
            cors_allow_origins: vec!["http://localhost:3000".to_string()],
            search_page_increment: 6,
            default_price_ceiling: Decimal::from(200),
            service_fee_percent: Decimal::from(10),
            payment_delay_ms: 2000,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let env = Environment::from_str(&env::var("ENV").unwrap_or_else(|_| "dev".to_string()));
        let server_addr = env::var("SERVER_ADDR").unwrap_or(defaults.server_addr);

        // CORS
        let cors_allow_origins = env::var("CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        // Search
        let search_page_increment: usize = env::var("SEARCH_PAGE_INCREMENT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.search_page_increment);
        if search_page_increment == 0 {
            anyhow::bail!("SEARCH_PAGE_INCREMENT must be greater than zero");
        }

        let default_price_ceiling = match env::var("DEFAULT_PRICE_CEILING") {
            Ok(raw) => raw
                .parse::<Decimal>()
                .context("DEFAULT_PRICE_CEILING must be a decimal number")?,
            Err(_) => defaults.default_price_ceiling,
        };

        // Pricing
        let service_fee_percent = match env::var("SERVICE_FEE_PERCENT") {
            Ok(raw) => raw
                .parse::<Decimal>()
                .context("SERVICE_FEE_PERCENT must be a decimal number")?,
            Err(_) => defaults.service_fee_percent,
        };
        if service_fee_percent.is_sign_negative() {
            anyhow::bail!("SERVICE_FEE_PERCENT must not be negative");
        }

        // Payments
        let payment_delay_ms = env::var("PAYMENT_DELAY_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.payment_delay_ms); // mimics a processor round-trip

        Ok(Settings {
            env,
            server_addr,
            cors_allow_origins,
            search_page_increment,
            default_price_ceiling,
            service_fee_percent,
            payment_delay_ms,
        })
    }
}
