use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

use serde::Deserialize;
use serde_json::Value;
use tracing::{error, info, warn};

use crate::error::{AppError, Result};

/// Key of the annotation service inside `VCAP_SERVICES`.
pub const SERVICE_NAME: &str = "concept_insights";

const PLACEHOLDER_URL: &str = "<url>";
const PLACEHOLDER_USERNAME: &str = "<username>";
const PLACEHOLDER_PASSWORD: &str = "<password>";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;

/// Endpoint and credentials of the remote annotation service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceConfig {
    pub endpoint: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
struct ServiceBinding {
    credentials: Credentials,
}

#[derive(Debug, Deserialize)]
struct Credentials {
    url: String,
    username: String,
    password: String,
}

impl ServiceConfig {
    /// Values that let the server start but fail every remote call.
    pub fn placeholder() -> Self {
        Self {
            endpoint: PLACEHOLDER_URL.to_string(),
            username: PLACEHOLDER_USERNAME.to_string(),
            password: PLACEHOLDER_PASSWORD.to_string(),
        }
    }

    /// Resolve credentials from an optional `VCAP_SERVICES` blob.
    ///
    /// Never fails: configuration problems are logged and the placeholder
    /// values are returned instead.
    pub fn from_vcap(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::placeholder();
        };

        info!("Parsing VCAP_SERVICES");
        match Self::try_from_vcap(raw) {
            Ok(config) => {
                info!(endpoint = %config.endpoint, "{} service found", SERVICE_NAME);
                config
            }
            Err(e) => {
                error!("{}", e);
                Self::placeholder()
            }
        }
    }

    pub fn try_from_vcap(raw: &str) -> Result<Self> {
        let services: HashMap<String, Value> = serde_json::from_str(raw)
            .map_err(|e| AppError::Configuration(format!("VCAP_SERVICES is not valid JSON: {}", e)))?;

        let bindings = services.get(SERVICE_NAME).ok_or_else(|| {
            AppError::Configuration(format!("the {} service was not found", SERVICE_NAME))
        })?;

        let mut bindings: Vec<ServiceBinding> = serde_json::from_value(bindings.clone())
            .map_err(|e| AppError::Configuration(format!("malformed {} binding: {}", SERVICE_NAME, e)))?;

        if bindings.is_empty() {
            return Err(AppError::Configuration(format!(
                "the {} service has no bindings",
                SERVICE_NAME
            )));
        }

        let credentials = bindings.swap_remove(0).credentials;
        Ok(Self {
            endpoint: credentials.url,
            username: credentials.username,
            password: credentials.password,
        })
    }
}

/// Everything the process reads from its environment at startup.
#[derive(Clone, Debug)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub service: ServiceConfig,
    pub default_content_path: PathBuf,
    pub static_dir: PathBuf,
}

impl Settings {
    pub fn from_env() -> Self {
        let host = env::var("VCAP_APP_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = parse_port(env::var("VCAP_APP_PORT").ok().as_deref());
        let service = ServiceConfig::from_vcap(env::var("VCAP_SERVICES").ok().as_deref());

        Self {
            host,
            port,
            service,
            default_content_path: env::var("DEFAULT_CONTENT_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("public/text/en.txt")),
            static_dir: env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("public")),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_port(raw: Option<&str>) -> u16 {
    match raw {
        None => DEFAULT_PORT,
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            warn!(value, "invalid VCAP_APP_PORT, using {}", DEFAULT_PORT);
            DEFAULT_PORT
        }),
    }
}
