//! Carrier configuration and credential selection
//!
//! Options come from a TOML file and/or `MONDIAL_RELAY_*` environment variables.
//! Outside production the injected credentials are ignored in favour of the
//! carrier's public sandbox account.

use serde::Deserialize;
use std::path::Path;

use crate::types::Context;
use crate::{MondialRelayError, Result};

pub const SANDBOX_API_URL: &str = "https://connect-api-sandbox.mondialrelay.com/api/shipment";
pub const SANDBOX_LOGIN: &str = "BDTEST@business-api.mondialrelay.com";
pub const SANDBOX_PASSWORD: &str = "'2crtPDo0ZL7Q*3kLumB";
pub const SANDBOX_CUSTOMER_ID: &str = "BDTEST";
pub const SANDBOX_BUSINESS_EMAIL: &str = "test@business.com";
pub const SANDBOX_BUSINESS_PHONE: &str = "0606060606";

pub const DEFAULT_CULTURE: &str = "fr-FR";
pub const DEFAULT_VERSION_API: &str = "1.0";

/// Variable selecting the environment; `production` is the only value that
/// enables injected credentials
pub const ENVIRONMENT_VAR: &str = "MONDIAL_RELAY_ENV";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    Production,
    #[default]
    Sandbox,
}

impl Environment {
    pub fn parse(s: &str) -> Self {
        if s == "production" {
            Self::Production
        } else {
            Self::Sandbox
        }
    }

    pub fn from_env() -> Self {
        std::env::var(ENVIRONMENT_VAR)
            .map(|v| Self::parse(&v))
            .unwrap_or_default()
    }
}

/// Which optional delivery signals are honoured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Features {
    pub locker: bool,
    pub print_in_store: bool,
    /// Send from the fulfillment's stock location instead of the business address
    pub stock_location: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            locker: true,
            print_in_store: true,
            stock_location: false,
        }
    }
}

/// Business postal address, used as sender of shipments and recipient of returns
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BusinessAddress {
    pub title: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub streetname: Option<String>,
    pub address_add1: Option<String>,
    pub address_add2: Option<String>,
    pub country_code: Option<String>,
    pub post_code: Option<String>,
    pub city: Option<String>,
    pub mobile_no: Option<String>,
    pub email: Option<String>,
    /// Relay point that receives customer returns
    pub return_location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CarrierOptions {
    pub api_base_url: Option<String>,
    pub login: Option<String>,
    pub password: Option<String>,
    pub customer_id: Option<String>,
    pub business_email: Option<String>,
    pub business_phone: Option<String>,
    pub culture: String,
    pub version_api: String,
    pub business_address: BusinessAddress,
    pub features: Features,
}

impl Default for CarrierOptions {
    fn default() -> Self {
        Self {
            api_base_url: None,
            login: None,
            password: None,
            customer_id: None,
            business_email: None,
            business_phone: None,
            culture: DEFAULT_CULTURE.to_string(),
            version_api: DEFAULT_VERSION_API.to_string(),
            business_address: BusinessAddress::default(),
            features: Features::default(),
        }
    }
}

impl CarrierOptions {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| MondialRelayError::Config(e.to_string()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            MondialRelayError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&contents)
    }

    /// Options built only from the process environment
    pub fn from_env() -> Self {
        let mut options = Self::default();
        options.apply_env(|key| std::env::var(key).ok());
        options
    }

    /// Overlay `MONDIAL_RELAY_*` values on top of the current options.
    ///
    /// Secrets usually live in the environment while the business address lives in
    /// the TOML file; `lookup` is injected so callers control where values come from.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let set = |field: &mut Option<String>, key: &str| {
            if let Some(value) = lookup(key).filter(|v| !v.is_empty()) {
                *field = Some(value);
            }
        };
        set(&mut self.api_base_url, "MONDIAL_RELAY_API_URL");
        set(&mut self.login, "MONDIAL_RELAY_LOGIN");
        set(&mut self.password, "MONDIAL_RELAY_PASSWORD");
        set(&mut self.customer_id, "MONDIAL_RELAY_CUSTOMER_ID");
        set(&mut self.business_email, "MONDIAL_RELAY_BUSINESS_EMAIL");
        set(&mut self.business_phone, "MONDIAL_RELAY_BUSINESS_PHONE");
        set(
            &mut self.business_address.return_location,
            "MONDIAL_RELAY_RETURN_LOCATION",
        );
    }
}

/// Endpoint, account and business contact fixed for the lifetime of a client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_base_url: String,
    pub login: String,
    pub password: String,
    pub customer_id: String,
    pub business_email: String,
    pub business_phone: String,
}

impl Credentials {
    pub fn resolve(options: &CarrierOptions, environment: Environment) -> Result<Self> {
        match environment {
            Environment::Production => Ok(Self {
                api_base_url: required(&options.api_base_url, "api_base_url")?,
                login: required(&options.login, "login")?,
                password: required(&options.password, "password")?,
                customer_id: required(&options.customer_id, "customer_id")?,
                business_email: options.business_email.clone().unwrap_or_default(),
                business_phone: options.business_phone.clone().unwrap_or_default(),
            }),
            Environment::Sandbox => Ok(Self::sandbox()),
        }
    }

    pub fn sandbox() -> Self {
        Self {
            api_base_url: SANDBOX_API_URL.to_string(),
            login: SANDBOX_LOGIN.to_string(),
            password: SANDBOX_PASSWORD.to_string(),
            customer_id: SANDBOX_CUSTOMER_ID.to_string(),
            business_email: SANDBOX_BUSINESS_EMAIL.to_string(),
            business_phone: SANDBOX_BUSINESS_PHONE.to_string(),
        }
    }

    pub fn context(&self, culture: &str, version_api: &str) -> Context {
        Context {
            login: self.login.clone(),
            password: self.password.clone(),
            customer_id: self.customer_id.clone(),
            culture: culture.to_string(),
            version_api: version_api.to_string(),
        }
    }
}

fn required(value: &Option<String>, name: &str) -> Result<String> {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            MondialRelayError::Config(format!("`{name}` is required in production"))
        })
}
