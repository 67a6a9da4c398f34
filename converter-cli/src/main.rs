//! Converter CLI
//!
//! Command-line front end for the currency converter. Plays the part of the
//! form: collects three fields, triggers one conversion, renders the result
//! or the error message.

mod config;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use converter_core::ConversionService;
use converter_core::input::{filter_amount_input, filter_currency_input};
use converter_types::{ConversionRequest, ConversionResult};
use rates_client::FreeCurrencyClient;

#[derive(Parser)]
#[command(name = "converter")]
#[command(author, version, about = "Currency converter CLI", long_about = None)]
struct Cli {
    /// Latest-rates endpoint
    #[arg(long, env = "CONVERTER_API_URL", global = true)]
    api_url: Option<String>,

    /// API key for the rates service
    #[arg(long, env = "CONVERTER_API_KEY", global = true, hide_env_values = true)]
    api_key: Option<String>,

    /// Request timeout in seconds (unbounded when unset)
    #[arg(long, env = "CONVERTER_TIMEOUT_SECS", global = true)]
    timeout_secs: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an amount from one currency to another
    Convert {
        #[command(flatten)]
        form: FormArgs,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check the inputs without contacting the rates service
    Validate {
        #[command(flatten)]
        form: FormArgs,
    },
}

/// The three form fields. Defaults match the form's initial state.
#[derive(Args)]
struct FormArgs {
    /// Base currency code
    #[arg(long, default_value = "CAD")]
    from: String,
    /// Destination currency code
    #[arg(long, default_value = "USD")]
    to: String,
    /// Amount in the base currency
    #[arg(long, default_value = "1")]
    amount: String,
}

impl FormArgs {
    /// Runs each field through the keystroke filters, as if it had been typed.
    fn into_request(self) -> ConversionRequest {
        ConversionRequest::new(
            filter_currency_input(&self.from),
            filter_currency_input(&self.to),
            filter_amount_input(&self.amount),
        )
    }
}

fn render(req: &ConversionRequest, result: &ConversionResult) -> String {
    format!(
        "{} {} = {} {}\nExchange Rate: {}",
        req.amount, req.base_currency, result.converted_amount, req.dest_currency, result.exchange_rate
    )
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "error".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Runs one conversion and returns the text to print. The form is
/// validated before any setting is read.
async fn run_convert(
    form: FormArgs,
    api_url: Option<String>,
    api_key: Option<String>,
    timeout_secs: Option<&str>,
    json: bool,
) -> Result<String> {
    let req = form.into_request();
    converter_core::validate(&req)?;

    let config = config::Config::from_values(api_url, api_key, timeout_secs)?;
    tracing::debug!(endpoint = %config.api_url, "using rates endpoint");

    let mut client = FreeCurrencyClient::new(config.api_key).with_endpoint(config.api_url);
    if let Some(timeout) = config.timeout {
        client = client.with_timeout(timeout)?;
    }
    let service = ConversionService::new(client);

    let result = service.convert(&req).await?;

    if json {
        Ok(serde_json::to_string_pretty(&result)?)
    } else {
        Ok(render(&req, &result))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { form } => {
            let req = form.into_request();
            converter_core::validate(&req)?;
            println!(
                "✓ {} {} → {} is valid",
                req.amount, req.base_currency, req.dest_currency
            );
        }

        Commands::Convert { form, json } => {
            let output = run_convert(
                form,
                cli.api_url,
                cli.api_key,
                cli.timeout_secs.as_deref(),
                json,
            )
            .await?;
            println!("{}", output);
        }
    }

    Ok(())
}
