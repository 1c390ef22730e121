use config::{Config, Environment, File};
use domain::playback::DEDUP_RADIUS_DEGREES;
use dotenvy::dotenv;
use serde::Deserialize;
use std::error::Error;
use std::sync::Arc;
use std::sync::RwLock;

#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawConfig {
    database_url: String,
    /// 服务器配置
    server: RawServerConfig,
    /// 位置去重配置
    dedup: RawDedupConfig,
}

/// 服务器配置（原始配置）
#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawServerConfig {
    /// 监听地址
    host: String,
    /// 监听端口
    port: u16,
}

impl Default for RawServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 4000,
        }
    }
}

/// 位置去重配置（原始配置）
#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawDedupConfig {
    /// 去重半径（十进制度）
    radius_degrees: f64,
}

impl Default for RawDedupConfig {
    fn default() -> Self {
        Self {
            radius_degrees: DEDUP_RADIUS_DEGREES,
        }
    }
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            database_url: "".to_string(),
            server: RawServerConfig::default(),
            dedup: RawDedupConfig::default(),
        }
    }
}

/// 服务器配置
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// 监听地址
    pub host: String,
    /// 监听端口
    pub port: u16,
}

/// 位置去重配置
#[derive(Debug, Clone)]
pub struct DedupConfig {
    /// 去重半径（十进制度）
    pub radius_degrees: f64,
}

#[derive(Debug, Clone)]
pub struct AppConfigImpl {
    pub database_url: Arc<RwLock<String>>,
    pub server: Arc<RwLock<ServerConfig>>,
    pub dedup: Arc<RwLock<DedupConfig>>,
}

impl AppConfigImpl {
    fn new(data: RawConfig) -> Self {
        let server_config = ServerConfig {
            host: data.server.host,
            port: data.server.port,
        };
        let dedup_config = DedupConfig {
            radius_degrees: data.dedup.radius_degrees,
        };
        AppConfigImpl {
            database_url: Arc::new(RwLock::new(data.database_url)),
            server: Arc::new(RwLock::new(server_config)),
            dedup: Arc::new(RwLock::new(dedup_config)),
        }
    }

    pub fn server(&self) -> ServerConfig {
        let cfg_val = self.server.read().unwrap();
        cfg_val.clone()
    }

    pub fn dedup(&self) -> DedupConfig {
        let cfg_val = self.dedup.read().unwrap();
        cfg_val.clone()
    }

    pub fn database_url(&self) -> String {
        let cfg_val = self.database_url.read().unwrap();
        (*cfg_val).clone()
    }

    pub fn load() -> Result<AppConfigImpl, Box<dyn Error>> {
        dotenv().ok();

        let config = Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?;

        let raw: RawConfig = config.try_deserialize()?; // serde 自动填充默认值
        let app_config = AppConfigImpl::new(raw);
        Ok(app_config)
    }
}
