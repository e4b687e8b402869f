use serde::Deserialize;
use std::env;
use std::fs::{File, metadata};
use std::io::Read;
use serde_yaml;

// ---------------------------------------------- Upstream Config ----------------------------------------------
// Google Imagen API
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ImagenConfig {
    pub endpoint: String,
    pub model: String,
    // Secret credential for the upstream API. Sourced from the environment
    // only; never read from the config file, never serialized back out.
    #[serde(skip)]
    pub api_key: String,
}

impl Default for ImagenConfig {
    fn default() -> Self {
        ImagenConfig {
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "imagen-4.0-generate-001".to_string(),
            api_key: String::new(),
        }
    }
}

// ---------------------------------------------- Config ----------------------------------------------
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub imagen: ImagenConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "0.0.0.0".to_string(),
            port: 8080,
            imagen: ImagenConfig::default(),
        }
    }
}

impl Config {
    pub fn load_config() -> Config {
        let config_path = if metadata("/etc/imagig/configs.yaml").is_ok() {
            "/etc/imagig/configs.yaml"
        } else {
            "src/configs/configs.yaml"
        };
        let mut file = File::open(config_path).expect("Failed to open config file");
        let mut contents = String::new();
        file.read_to_string(&mut contents).expect("Failed to read config file");
        let mut config: Config = serde_yaml::from_str(&contents).expect("Failed to parse config file");

        // A missing key is reported per request, not fatal at startup.
        config.imagen.api_key = env::var("GOOGLE_IMAGEN_API_KEY").unwrap_or_default();
        config
    }
}
