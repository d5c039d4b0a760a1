//! Interactive contact form client.
//!
//! Drives the same form state machine as the site from a terminal and posts
//! the result to a running server.
//!
//! # Usage
//!
//! ```bash
//! # Fill in the form against a local server
//! cargo run --bin contact
//!
//! # Against a deployed site, skipping the review prompt
//! cargo run --bin contact -- --url https://snappymcp.com --yes
//! ```
//!
//! # Environment Variables
//!
//! - `CONTACT_URL` (optional): default for `--url`

use snappy_site::client::{ContactForm, FormState, HttpTransport, SubmitError};
use snappy_site::domain::entities::{Budget, CompanySize, ContactField, ProjectTimeline};

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use dialoguer::{Confirm, Input, Select};
use std::time::Duration;

/// Fill in and send the Snappy MCP contact form.
#[derive(Parser)]
#[command(name = "contact")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the site
    #[arg(short, long, env = "CONTACT_URL", default_value = "http://localhost:3000")]
    url: String,

    /// Request timeout in seconds
    #[arg(short, long, default_value_t = 15)]
    timeout: u64,

    /// Skip the review prompt before sending
    #[arg(short = 'y', long)]
    yes: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let transport = HttpTransport::new(&cli.url, Duration::from_secs(cli.timeout))
        .context("Failed to build HTTP client")?;

    println!("{}", "✉️  Snappy MCP — Contact us".bright_blue().bold());
    println!("  Sending to {}", transport.endpoint().bright_black());
    println!();

    let mut form = ContactForm::new();

    loop {
        prompt_fields(&mut form, None)?;

        loop {
            if !cli.yes && !review(&form)? {
                println!("{}", "❌ Cancelled".red());
                return Ok(());
            }

            match form.submit(&transport).await {
                Ok(()) => break,
                Err(SubmitError::Invalid(errors)) => {
                    println!();
                    println!("{}", "Please fix the following:".yellow().bold());
                    for (field, message) in errors.iter() {
                        println!("  {} {}", format!("{}:", field.label()).cyan(), message);
                    }
                    println!();
                    let failing: Vec<ContactField> = errors.fields().collect();
                    prompt_fields(&mut form, Some(&failing))?;
                }
                Err(e @ SubmitError::Failed(_)) => {
                    println!();
                    println!("{}", format!("⚠️  {e}").red());
                    let retry = Confirm::new()
                        .with_prompt("Try again?")
                        .default(true)
                        .interact()?;
                    if !retry {
                        return Ok(());
                    }
                }
                Err(e) => return Err(e).context("Unexpected form state"),
            }
        }

        if let FormState::Submitted { acknowledgement } = form.state() {
            println!();
            println!("{}", "✅ Message sent!".green().bold());
            println!("  {}", acknowledgement);
            println!();
        }

        let again = Confirm::new()
            .with_prompt("Send another message?")
            .default(false)
            .interact()?;

        if !again {
            return Ok(());
        }

        form.reset();
        println!();
    }
}

/// Prompts for `only` fields (or all of them), pre-filled with current values.
fn prompt_fields(form: &mut ContactForm, only: Option<&[ContactField]>) -> Result<()> {
    for field in ContactField::ALL {
        if let Some(only) = only
            && !only.contains(&field)
        {
            continue;
        }

        let value = if field.is_choice() {
            prompt_choice(form, field)?
        } else {
            prompt_text(form, field)?
        };

        form.set(field, value);
    }

    Ok(())
}

fn prompt_text(form: &ContactForm, field: ContactField) -> Result<String> {
    let current = form.value(field).to_string();

    let value: String = Input::new()
        .with_prompt(field.label())
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;

    Ok(value)
}

/// Shows a select for an enumerated field and returns the chosen wire value.
fn prompt_choice(form: &ContactForm, field: ContactField) -> Result<String> {
    let options: Vec<(&'static str, &'static str)> = match field {
        ContactField::CompanySize => CompanySize::ALL
            .iter()
            .map(|c| (c.as_str(), c.label()))
            .collect(),
        ContactField::ProjectTimeline => ProjectTimeline::ALL
            .iter()
            .map(|t| (t.as_str(), t.label()))
            .collect(),
        ContactField::Budget => Budget::ALL
            .iter()
            .map(|b| (b.as_str(), b.label()))
            .collect(),
        _ => anyhow::bail!("{} is not a select field", field),
    };

    let labels: Vec<&str> = options.iter().map(|(_, label)| *label).collect();
    let current = form.value(field);
    let default = options
        .iter()
        .position(|(value, _)| *value == current)
        .unwrap_or(0);

    let index = Select::new()
        .with_prompt(field.label())
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(options[index].0.to_string())
}

/// Prints the filled form and asks for confirmation.
fn review(form: &ContactForm) -> Result<bool> {
    println!();
    println!("{}", "Review:".bright_white().bold());
    for field in ContactField::ALL {
        println!(
            "  {:<18} {}",
            format!("{}:", field.label()).cyan(),
            form.value(field)
        );
    }
    println!();

    let confirmed = Confirm::new()
        .with_prompt("Send this message?")
        .default(true)
        .interact()?;

    Ok(confirmed)
}
