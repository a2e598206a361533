use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use autoresponder::llm::LlmConfig;
use autoresponder::prompts::SAMPLE_REPLIES;
use autoresponder::{Autoresponder, AutoresponderConfig, ResponseRecord};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = AutoresponderConfig::from_env()?;

    let llm_config = LlmConfig::from_env(&config.model).unwrap_or_else(|_| {
        eprintln!("Error: OPENAI_API_KEY not set");
        eprintln!("  export OPENAI_API_KEY=sk-...");
        std::process::exit(1);
    });

    eprintln!("Autoresponder v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Model: {}", config.model);
    eprintln!("   Calendar: {}", config.calendar_link);
    eprintln!("   Paste a prospect reply and press Enter. /examples for samples, /quit to exit.\n");

    let responder = Arc::new(Autoresponder::from_llm_config(&llm_config, &config)?);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    eprint!("> ");

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        let reply = match line {
            "" => {
                eprint!("> ");
                continue;
            }
            "/quit" | "/exit" => break,
            "/examples" => {
                for (i, (label, reply)) in SAMPLE_REPLIES.iter().enumerate() {
                    eprintln!("  /{} {:<14} {}", i + 1, label, reply);
                }
                eprint!("> ");
                continue;
            }
            cmd if cmd.starts_with('/') => {
                match sample_reply(cmd) {
                    Some(reply) => {
                        eprintln!("   \"{reply}\"");
                        reply
                    }
                    None => {
                        eprintln!("Unknown command: {cmd}");
                        eprint!("> ");
                        continue;
                    }
                }
            }
            text => text,
        };

        match responder.process(reply).await {
            Ok(record) => print_record(&record),
            Err(e) => eprintln!("Error: {e}"),
        }
        eprint!("> ");
    }

    Ok(())
}

/// `/1` .. `/5` pick a sample reply.
fn sample_reply(cmd: &str) -> Option<&'static str> {
    let index: usize = cmd.strip_prefix('/')?.parse().ok()?;
    SAMPLE_REPLIES
        .get(index.checked_sub(1)?)
        .map(|(_, reply)| *reply)
}

fn print_record(record: &ResponseRecord) {
    let review = if record.manual_required {
        "  [manual review needed]"
    } else {
        ""
    };
    println!(
        "\nCategory: {}  Confidence: {}{}\n\n{}\n",
        record.category, record.confidence, review, record.response
    );
}
