use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub model: String,
    pub siliconflow_api_key: Option<String>,
    pub siliconflow_url: String,
    pub port: u16,
    pub debug: bool,
}

impl Config {
    pub fn new() -> Self {
        // 默认配置
        let mut config = Config {
            model: "deepseek-ai/DeepSeek-V3".to_string(),
            siliconflow_api_key: None,
            siliconflow_url: "https://api.siliconflow.cn/v1/chat/completions".to_string(),
            port: 8080,
            debug: false,
        };

        // 加载配置文件
        #[cfg(not(test))]
        config.load_from_env_file();
        // 加载环境变量（覆盖配置文件）
        config.load_from_env();

        config
    }

    pub fn load_from_env_file(&mut self) {
        // 尝试从用户主目录加载
        if let Ok(home) = env::var("HOME") {
            let user_env_path = PathBuf::from(format!("{}/.news-review/.env", home));
            if user_env_path.exists() {
                dotenvy::from_path(user_env_path).ok();
            }
        }

        // 尝试从当前目录加载
        dotenvy::dotenv().ok();
    }

    pub fn load_from_env(&mut self) {
        if let Ok(model) = env::var("NEWS_REVIEW_MODEL") {
            self.model = model;
        }
        if let Ok(api_key) = env::var("NEWS_REVIEW_SILICONFLOW_API_KEY") {
            self.siliconflow_api_key = Some(api_key);
        }
        if let Ok(url) = env::var("NEWS_REVIEW_SILICONFLOW_URL") {
            self.siliconflow_url = url;
        }
        if let Ok(port) = env::var("NEWS_REVIEW_PORT") {
            if let Ok(port) = port.parse() {
                self.port = port;
            }
        }
    }

    pub fn update_from_args(&mut self, args: &crate::cli::args::Args) {
        // 命令行参数优先级最高
        if args.port != 0 {
            self.port = args.port;
        }
        if !args.model.is_empty() {
            self.model = args.model.clone();
        }
        if args.debug {
            self.debug = true;
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.port == 0 {
            anyhow::bail!("监听端口不能为 0");
        }
        if self.model.is_empty() {
            anyhow::bail!("模型名称不能为空");
        }
        url::Url::parse(&self.siliconflow_url).map_err(|e| {
            anyhow::anyhow!("SiliconFlow 地址无效 ({}): {}", self.siliconflow_url, e)
        })?;
        // API key 不在这里强制校验：服务允许无凭证启动，调用时返回配置错误，
        // 便于先行验证路由与页面联调
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn clear_env() {
        env::remove_var("NEWS_REVIEW_MODEL");
        env::remove_var("NEWS_REVIEW_SILICONFLOW_API_KEY");
        env::remove_var("NEWS_REVIEW_SILICONFLOW_URL");
        env::remove_var("NEWS_REVIEW_PORT");
    }

    fn base_config() -> Config {
        Config {
            model: "deepseek-ai/DeepSeek-V3".to_string(),
            siliconflow_api_key: None,
            siliconflow_url: "https://api.siliconflow.cn/v1/chat/completions".to_string(),
            port: 8080,
            debug: false,
        }
    }

    // 环境变量相关断言合并在一个用例里顺序执行，避免并行测试互相干扰
    #[test]
    fn test_config_env_layering() {
        clear_env();

        // 1. 默认配置
        let config = Config::new();
        assert_eq!(config.model, "deepseek-ai/DeepSeek-V3");
        assert!(config.siliconflow_api_key.is_none());
        assert_eq!(
            config.siliconflow_url,
            "https://api.siliconflow.cn/v1/chat/completions"
        );
        assert_eq!(config.port, 8080);
        assert!(!config.debug);

        // 2. 环境变量覆盖默认值
        env::set_var("NEWS_REVIEW_MODEL", "Qwen/Qwen2.5-72B-Instruct");
        env::set_var("NEWS_REVIEW_SILICONFLOW_API_KEY", "test-key");
        env::set_var(
            "NEWS_REVIEW_SILICONFLOW_URL",
            "https://test.api.siliconflow.cn/v1/chat/completions",
        );
        env::set_var("NEWS_REVIEW_PORT", "9000");

        let config = Config::new();
        assert_eq!(config.model, "Qwen/Qwen2.5-72B-Instruct");
        assert_eq!(config.siliconflow_api_key, Some("test-key".to_string()));
        assert_eq!(
            config.siliconflow_url,
            "https://test.api.siliconflow.cn/v1/chat/completions"
        );
        assert_eq!(config.port, 9000);

        // 3. 无法解析的端口保持默认值
        clear_env();
        env::set_var("NEWS_REVIEW_PORT", "not-a-port");
        let config = Config::new();
        assert_eq!(config.port, 8080);

        clear_env();
    }

    #[test]
    fn test_config_update_from_args() {
        let mut args = crate::cli::args::Args::default();
        args.port = 3000;
        args.model = "test-model".to_string();
        args.debug = true;

        let mut config = base_config();
        config.update_from_args(&args);

        assert_eq!(config.port, 3000);
        assert_eq!(config.model, "test-model");
        assert!(config.debug);
    }

    #[test]
    fn test_config_args_sentinels_keep_existing() {
        // 未指定的命令行参数不覆盖既有配置
        let args = crate::cli::args::Args::default();

        let mut config = base_config();
        config.update_from_args(&args);

        assert_eq!(config.port, 8080);
        assert_eq!(config.model, "deepseek-ai/DeepSeek-V3");
        assert!(!config.debug);
    }

    #[test]
    fn test_config_validation() {
        let mut config = base_config();

        // 默认配置无需 API key 也应通过校验
        assert!(config.validate().is_ok());

        // 端口为 0 非法
        config.port = 0;
        assert!(config.validate().is_err());
        config.port = 8080;

        // 无效的 URL 非法
        config.siliconflow_url = "not a url".to_string();
        assert!(config.validate().is_err());
        config.siliconflow_url = "https://api.siliconflow.cn/v1/chat/completions".to_string();

        // 模型为空非法
        config.model = String::new();
        assert!(config.validate().is_err());
    }
}
