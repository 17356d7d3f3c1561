use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use cli::{BackendClient, CliError, SubmitInput, run_submit};
use form::{Backend, DEFAULT_BACKEND_URL, DeltaGap, NumberParsing, SubmitPolicy};
use serde_json::Value;

#[derive(Parser, Debug)]
#[command(name = "taudelta-cli", about = "Tau/delta backend CLI")]
struct Cli {
    #[arg(long, env = "BACKEND_URL", default_value = DEFAULT_BACKEND_URL)]
    base_url: String,

    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the backend answers its health probe.
    Ping,
    /// Print the member → consumers map.
    Members,
    /// Print the consumers of one member.
    Consumers { member: String },
    /// Validate and post one tau/delta record.
    Submit(SubmitArgs),
}

#[derive(Args, Debug)]
struct SubmitArgs {
    #[arg(long)]
    member: String,

    #[arg(long)]
    consumer: String,

    #[arg(long, allow_hyphen_values = true)]
    tau: String,

    #[arg(long, allow_hyphen_values = true)]
    delta: String,

    #[arg(long, env = "TAUDELTA_NUMBER_PARSING", default_value_t = NumberParsing::Strict)]
    number_parsing: NumberParsing,

    #[arg(long, env = "TAUDELTA_DELTA_GAP", default_value_t = DeltaGap::Enforce)]
    delta_gap: DeltaGap,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let client = BackendClient::new(Backend::new(&cli.base_url), Duration::from_secs(cli.timeout_secs))?;

    match cli.command {
        Command::Ping => run_ping(&client).await,
        Command::Members => run_members(&client).await,
        Command::Consumers { member } => run_consumers(&client, &member).await,
        Command::Submit(args) => run_submit_command(&client, args).await,
    }
}

async fn run_ping(client: &BackendClient) -> Result<(), CliError> {
    let body = client.health().await?;
    tracing::debug!(%body, "health probe");
    println!("ok");
    Ok(())
}

async fn run_members(client: &BackendClient) -> Result<(), CliError> {
    let members = client.fetch_members().await?;
    print_json(&serde_json::to_value(&members)?)
}

async fn run_consumers(client: &BackendClient, member: &str) -> Result<(), CliError> {
    let members = client.fetch_members().await?;
    if !members.contains(member) {
        tracing::warn!(%member, "member is not listed by the backend");
    }
    for consumer in members.consumers_of(member) {
        println!("{consumer}");
    }
    Ok(())
}

async fn run_submit_command(client: &BackendClient, args: SubmitArgs) -> Result<(), CliError> {
    let policy = SubmitPolicy { numbers: args.number_parsing, delta_gap: args.delta_gap };
    let input = SubmitInput { member: args.member, consumer: args.consumer, tau: args.tau, delta: args.delta };
    let ack = run_submit(client, policy, &input).await?;
    print_json(ack.body())
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
