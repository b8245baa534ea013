use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(
    name = "news-review",
    version,
    about = "新闻稿智能评审服务 - 调用 AI 对新闻稿进行多维度评分",
    long_about = "news-review 是一个无状态的 HTTP 服务：接收新闻稿文本，调用 SiliconFlow 的对话补全接口进行专业评审，返回五个维度的评分、改进建议以及可选的语病修正。"
)]
pub struct Args {
    /// 监听端口（默认 8080）
    #[arg(short, long, default_value_t = 0)] // 0 表示未指定
    pub port: u16,

    /// Model to use (default: deepseek-ai/DeepSeek-V3)
    #[arg(short, long, default_value = "")] // 空字符串表示未指定
    pub model: String,

    /// 开启调试日志
    #[arg(short, long, default_value_t = false)]
    pub debug: bool,
}
