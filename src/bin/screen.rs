//! Terminal client for the screening service
//!
//! Walks one Network Member through lookup, screening and review against a
//! running API server, printing each stage as it is reported.
//!
//! Run with: cargo run --bin screen -- 6023085 --queries --ask "Any lawsuits?"

use std::time::Duration;

use anyhow::{bail, Context};
use clap::Parser;

use negative_news_screening::config::ClientConfig;
use negative_news_screening::domain::models::ChatRole;
use negative_news_screening::domain::workflow::{PollStep, WorkflowController};
use negative_news_screening::shared::services::{ApiService, IntervalTicker};

#[derive(Debug, Parser)]
#[command(name = "screen", about = "Run a negative news screening for a Network Member")]
struct Args {
    /// Network Member identifier
    nm_id: String,

    /// Origin of the screening API
    #[arg(long, env = "SCREENING_API_URL")]
    base_url: Option<String>,

    /// Delay between status polls
    #[arg(long, default_value_t = 3000)]
    poll_interval_ms: u64,

    /// Print the generated search queries after the results
    #[arg(long)]
    queries: bool,

    /// Follow-up question to ask once results are in (repeatable)
    #[arg(long)]
    ask: Vec<String>,
}

impl Args {
    fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig {
            poll_interval: Duration::from_millis(self.poll_interval_ms),
            ..ClientConfig::default()
        };
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        config
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = args.client_config();

    let mut controller = WorkflowController::new(ApiService::with_base_url(&config.base_url));
    let mut ticker = IntervalTicker::new(config.poll_interval);

    let member = controller
        .lookup_member(&args.nm_id)
        .await
        .context("Lookup failed")?;
    println!("{} ({})", member.name, member.practice_area);
    println!("  {} | {}", member.council_name, member.country);
    for entry in &member.work_history {
        println!("  {} - {} ({})", entry.company, entry.title, entry.period);
    }
    println!();

    let ticket = controller
        .start_screening()
        .await
        .context("Failed to start screening")?;
    println!("Screening {}", ticket.nm_id);

    let mut last_label = String::new();
    let step = controller
        .poll_observed(&ticket, &mut ticker, |state| {
            if let Some(status) = state.status() {
                if status.status != last_label {
                    println!("  {}", status.status);
                    last_label = status.status.clone();
                }
            }
        })
        .await;
    if step != PollStep::Completed {
        bail!("Screening stopped before completion");
    }

    let Some(results) = controller.state().results() else {
        bail!("Screening completed without results");
    };
    println!();
    println!("{}", strip_tags(&results.summary));
    println!();
    println!("Citations ({}):", results.citations.len());
    for citation in &results.citations {
        println!("  {}", citation);
    }

    if args.queries {
        let queries = controller
            .load_queries(&ticket.nm_id)
            .await
            .context("Failed to load queries")?;
        println!();
        println!("Queries ({}):", queries.len());
        for query in queries {
            println!("  {}", query);
        }
    }

    for question in &args.ask {
        // a failed answer still leaves an agent note in the transcript
        let outcome = controller.send_chat_message(question).await;
        println!();
        println!("> {}", question);
        if let Some(reply) = controller.state().chat().last() {
            if reply.role == ChatRole::Agent {
                println!("{}", reply.text);
            }
        }
        if let Err(e) = outcome {
            tracing::warn!("Follow-up question failed: {}", e);
        }
    }

    Ok(())
}

/// Plain text of an HTML fragment, keeping its non-empty source lines
fn strip_tags(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }

    text.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
