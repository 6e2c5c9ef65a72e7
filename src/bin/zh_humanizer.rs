use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use tracing::debug;
use zh_humanizer_lib::{
    compare, generate_report, init_logging, AppConfig, ConfigStore, Detector, Humanizer,
    Intensity, RngSource,
};

const RULE: &str = "==================================================";

#[derive(Parser)]
#[command(
    name = "zh-humanizer",
    about = "中文AI文本检测与人性化工具",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// 检测文本的AI特征
    Detect {
        #[command(flatten)]
        input: InputArgs,
        /// 显示详细报告
        #[arg(short, long)]
        report: bool,
        /// 以 JSON 输出检测结果
        #[arg(long)]
        json: bool,
    },
    /// 将文本人性化处理
    Humanize {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        rewrite: RewriteArgs,
        /// 显示对比报告
        #[arg(short, long)]
        compare: bool,
        /// 以 JSON 输出处理结果
        #[arg(long)]
        json: bool,
    },
    /// 一键处理：检测、人性化、再检测
    Process {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        rewrite: RewriteArgs,
    },
    /// 查看或初始化配置文件
    Config {
        /// 写入默认配置
        #[arg(long)]
        init: bool,
    },
}

#[derive(Args)]
struct InputArgs {
    /// 要处理的文本；传 "-" 从标准输入读取
    text: Option<String>,
    /// 从文件读取文本
    #[arg(short, long)]
    file: Option<PathBuf>,
}

#[derive(Args)]
struct RewriteArgs {
    /// 输出到文件
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// 处理强度（light/medium/heavy），默认取配置
    #[arg(short, long)]
    intensity: Option<String>,
    /// 固定随机种子
    #[arg(long)]
    seed: Option<u64>,
}

impl InputArgs {
    fn read(&self) -> anyhow::Result<String> {
        let raw = match (&self.file, self.text.as_deref()) {
            (Some(path), _) => std::fs::read_to_string(path)
                .with_context(|| format!("无法读取文件 {}", path.display()))?,
            (None, Some("-")) => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("无法读取标准输入")?;
                buf
            }
            (None, Some(text)) => text.to_string(),
            (None, None) => bail!("请提供要处理的文本或使用 --file 指定文件"),
        };
        let text = zh_humanizer_lib::services::text_processor::normalize_input(&raw);
        if text.trim().is_empty() {
            bail!("文本内容为空");
        }
        Ok(text)
    }
}

impl RewriteArgs {
    fn intensity(&self, config: &AppConfig) -> anyhow::Result<Intensity> {
        match self.intensity.as_deref() {
            Some(value) => Ok(value.parse()?),
            None => Ok(config.humanize.default_intensity),
        }
    }

    fn humanizer(&self, config: &AppConfig) -> Humanizer<'static, RngSource<rand::rngs::StdRng>> {
        match self.seed.or(config.humanize.seed) {
            Some(seed) => Humanizer::seeded(seed),
            None => Humanizer::new(),
        }
    }

    fn write_output(&self, text: &str) -> anyhow::Result<bool> {
        match &self.output {
            Some(path) => {
                std::fs::write(path, text)
                    .with_context(|| format!("无法写入文件 {}", path.display()))?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

fn config_store() -> anyhow::Result<ConfigStore> {
    let dir = ConfigStore::default_config_dir().context("无法确定配置目录")?;
    Ok(ConfigStore::new(dir))
}

fn load_config() -> AppConfig {
    match config_store().and_then(|store| Ok(store.load()?)) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("[config] using defaults: {:#}", e);
            AppConfig::default()
        }
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "是"
    } else {
        "否"
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Detect { input, report, json } => {
            let text = input.read()?;
            let config = load_config();
            let detector = Detector::new().with_config(config.detection);
            let result = detector.detect(&text);

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else if report {
                println!("{}", generate_report(&result));
            } else {
                println!("{}", RULE);
                println!("检测结果");
                println!("{}", RULE);
                println!("是否为AI生成: {}", yes_no(result.is_ai));
                println!("置信度: {:.2}%", result.confidence * 100.0);
                println!("综合得分: {:.2}/100", result.score);
                println!("文本长度: {}字", result.text_length);
                println!();
                println!("{}", result.summary.conclusion);
                println!("{}", result.summary.main_issue);
                println!("{}", RULE);
            }
        }
        Command::Humanize {
            input,
            rewrite,
            compare: show_compare,
            json,
        } => {
            let config = load_config();
            let intensity = rewrite.intensity(&config)?;
            let text = input.read()?;
            let mut humanizer = rewrite.humanizer(&config);
            let result = humanizer.humanize(&text, intensity);

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
                rewrite.write_output(&result.text)?;
                return Ok(());
            }

            if let Some(path) = &rewrite.output {
                rewrite.write_output(&result.text)?;
                println!("处理完成！结果已保存到: {}", path.display());
            } else {
                println!("{}", RULE);
                println!("处理结果");
                println!("{}", RULE);
                println!("{}", result.text);
                println!("{}", RULE);
            }

            if show_compare {
                println!();
                println!("{}", compare(&text, &result));
            } else {
                println!();
                println!("处理强度: {}", intensity);
                println!("修改次数: {}处", result.change_count);
                println!("原文长度: {}字", result.original_length);
                println!("处理后长度: {}字", result.modified_length);
            }
        }
        Command::Process { input, rewrite } => {
            let config = load_config();
            let intensity = rewrite.intensity(&config)?;
            let text = input.read()?;
            let detector = Detector::new().with_config(config.detection.clone());

            let before = detector.detect(&text);
            println!("步骤 1/3: 检测完成 - AI得分: {:.2}/100", before.score);

            let mut humanizer = rewrite.humanizer(&config);
            let result = humanizer.humanize(&text, intensity);
            println!("步骤 2/3: 以 {} 强度处理完成 - 修改了 {} 处", intensity, result.change_count);

            let after = detector.detect(&result.text);
            println!("步骤 3/3: 复检完成 - AI得分: {:.2}/100", after.score);

            if let Some(path) = &rewrite.output {
                rewrite.write_output(&result.text)?;
                println!("结果已保存到: {}", path.display());
            } else {
                println!("{}", RULE);
                println!("处理后的文本");
                println!("{}", RULE);
                println!("{}", result.text);
            }

            println!("{}", RULE);
            println!("处理摘要");
            println!("{}", RULE);
            println!("原始文本AI得分: {:.2}/100 ({})", before.score, before.summary.level);
            println!("处理后AI得分: {:.2}/100 ({})", after.score, after.summary.level);
            println!("处理强度: {}", intensity);
            println!("修改次数: {}处", result.change_count);
            println!("{}", RULE);
        }
        Command::Config { init } => {
            let store = config_store()?;
            if init {
                store.save(&AppConfig::default())?;
                println!("已写入默认配置: {}", store.config_file().display());
            }
            let config = store.load()?;
            println!("配置文件: {}", store.config_file().display());
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }
    Ok(())
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    debug!("[cli] parsed arguments");

    if let Err(e) = run(cli) {
        eprintln!("错误：{:#}", e);
        std::process::exit(1);
    }
}
