use std::path::PathBuf;

use clap::Parser;
use quiz_maker::config::{DEFAULT_API_URL, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
use quiz_maker::{logging, GeneratorConfig, QuestionCount, QuizMaker, SetupForm};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// API key for the completion service (can also be typed in the UI)
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true, default_value = "")]
    api_key: String,

    /// Base URL of the OpenAI-compatible API
    #[arg(long, env = "QUIZ_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Model used to generate the quiz
    #[arg(long, env = "QUIZ_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// Upper bound on the length of the model's reply
    #[arg(long, default_value_t = DEFAULT_MAX_TOKENS)]
    max_tokens: u32,

    /// Sampling temperature
    #[arg(long, default_value_t = DEFAULT_TEMPERATURE)]
    temperature: f32,

    /// Topic to prefill
    #[arg(short, long, default_value = "")]
    topic: String,

    /// Number of questions to prefill (3, 5 or 10)
    #[arg(short, long, default_value_t = 3)]
    count: u32,

    /// Write logs to this file (filtered by RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        if let Err(e) = logging::init(path) {
            eprintln!("Failed to open log file {}: {}", path.display(), e);
            std::process::exit(1);
        }
    }

    let count = match QuestionCount::try_from(args.count) {
        Ok(count) => count,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    let config = GeneratorConfig {
        api_url: args.api_url,
        model: args.model,
        max_tokens: args.max_tokens,
        temperature: args.temperature,
    };
    let form = SetupForm {
        api_key: args.api_key,
        topic: args.topic,
        count,
        ..SetupForm::default()
    };

    if let Err(e) = QuizMaker::new(config, form).run().await {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
