use once_cell::sync::Lazy;
use std::env;
use std::fs;
use std::sync::RwLock;

// 系统提示词缓存
static PROMPT_CACHE: Lazy<RwLock<Option<String>>> = Lazy::new(|| RwLock::new(None));

// 加载评审提示词（仅执行一次）
fn load_prompt_template() -> String {
    let default_path = "review-prompt.txt";
    let prompt_path = if std::path::Path::new(default_path).exists() {
        default_path.to_owned()
    } else {
        // 如果项目中不存在，则检查环境变量配置
        env::var("NEWS_REVIEW_PROMPT_PATH").unwrap_or_else(|_| default_path.to_owned())
    };

    // 尝试读取外部文件，失败则使用内置模板
    if std::path::Path::new(&prompt_path).exists() {
        match fs::read_to_string(&prompt_path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("无法读取提示词文件 {}: {}，使用内置模板", prompt_path, e);
                include_str!("../../review-prompt.txt").to_owned()
            }
        }
    } else {
        // 内置默认模板，编译时读取 review-prompt.txt
        include_str!("../../review-prompt.txt").to_owned()
    }
}

/// 评审系统提示词：描述五个评分维度与期望的 JSON 返回格式
pub fn system_prompt() -> String {
    // 检查缓存
    {
        let cache = PROMPT_CACHE.read().unwrap();
        if let Some(ref template) = *cache {
            return template.clone();
        }
    }

    // 加载并缓存模板
    let template = load_prompt_template();
    *PROMPT_CACHE.write().unwrap() = Some(template.clone());

    template
}

/// 用户消息：原样嵌入待评审的新闻稿
pub fn user_prompt(article: &str) -> String {
    format!("请评审以下新闻稿：\n\n{}", article)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_shape() {
        let prompt = system_prompt();

        // 五个评分维度都必须出现在提示词中
        for key in ["objectivity", "density", "readability", "headline", "structure"] {
            assert!(prompt.contains(key), "提示词缺少维度: {}", key);
        }
        assert!(prompt.contains("suggestions"));
        assert!(prompt.contains("JSON"));
    }

    #[test]
    fn test_user_prompt_embeds_article() {
        let article = "新华社北京电 记者从住建部获悉……";
        let prompt = user_prompt(article);

        assert!(prompt.starts_with("请评审以下新闻稿："));
        assert!(prompt.contains(article));
    }

    #[test]
    fn test_load_prompt_template_with_custom_file() {
        use std::io::Write;
        use tempfile::NamedTempFile;

        // 创建临时提示词文件
        let mut temp_file = NamedTempFile::new().unwrap();
        let custom_content = "自定义评审提示词，包含 objectivity 等维度说明";
        temp_file.write_all(custom_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let original_path = std::env::var("NEWS_REVIEW_PROMPT_PATH").ok();
        std::env::set_var("NEWS_REVIEW_PROMPT_PATH", temp_file.path());

        // 清除缓存以便重新加载
        *PROMPT_CACHE.write().unwrap() = None;

        let template = load_prompt_template();

        // 项目根目录存在 review-prompt.txt 时优先使用本地文件，
        // 否则使用环境变量指定的文件
        if std::path::Path::new("review-prompt.txt").exists() {
            assert!(template.contains("objectivity"));
        } else {
            assert_eq!(template, custom_content);
        }

        // 恢复原始环境变量
        match original_path {
            Some(path) => std::env::set_var("NEWS_REVIEW_PROMPT_PATH", path),
            None => std::env::remove_var("NEWS_REVIEW_PROMPT_PATH"),
        }

        // 清除缓存
        *PROMPT_CACHE.write().unwrap() = None;
    }

    #[test]
    fn test_system_prompt_cached() {
        let first = system_prompt();
        let second = system_prompt();

        // 两次调用应返回相同内容
        assert_eq!(first, second);
    }
}
