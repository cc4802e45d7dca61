use serde::Deserialize;

fn default_server_port() -> u16 {
    3000
}

fn default_db_max_connections() -> u32 {
    5
}

/// 環境変数（と`.env`）から読み込む実行時設定
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// 未設定ならインメモリアダプターとデモデータで動作する
    pub database_url: Option<String>,
    #[serde(default = "default_server_port")]
    pub server_port: u16,
    #[serde(default = "default_db_max_connections")]
    pub db_max_connections: u32,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// 明示的なキー/値の組から構築する（キーは環境変数と同じ大文字）
    pub fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> anyhow::Result<Self> {
        envy::from_iter::<_, Self>(vars)
            .map_err(|e| anyhow::anyhow!("Invalid or missing environment variable: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_apply_without_variables() {
        let config = Config::from_vars(Vec::new()).unwrap();
        assert_eq!(config.database_url, None);
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.db_max_connections, 5);
    }

    #[test]
    fn test_reads_upper_case_variables() {
        let config = Config::from_vars(vars(&[
            ("DATABASE_URL", "postgres://localhost/returns"),
            ("SERVER_PORT", "8080"),
        ]))
        .unwrap();
        assert_eq!(
            config.database_url.as_deref(),
            Some("postgres://localhost/returns")
        );
        assert_eq!(config.server_port, 8080);
    }

    #[test]
    fn test_rejects_malformed_port() {
        let result = Config::from_vars(vars(&[("SERVER_PORT", "http")]));
        assert!(result.is_err());
    }
}
