//! Cardforge CLI
//!
//! Thin wrapper around cardforge-core for command-line usage.
//!
//! ## Usage
//!
//! ```bash
//! # Render the preview fragment
//! cardforge preview --fname Ada --title Analyst --logo ./logo.png
//!
//! # Create the card on the server and print its URL
//! cardforge --server https://cards.example submit --fname Ada --lname Lovelace
//!
//! # Export a vCard
//! cardforge vcard --fname Ada --lname Lovelace > ada.vcf
//!
//! # Ask which positioning a window width gets
//! cardforge layout 1024
//!
//! # Show the effective configuration
//! cardforge config
//! ```

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use cardforge_core::{
    logging, render_preview, to_vcard, CardClient, CardConfig, FormSnapshot, ImageField,
    ImageSlots, Positioning, SelectedFile, SubmissionOutcome, TextField,
};

/// Cardforge - digital business cards
#[derive(Parser)]
#[command(name = "cardforge")]
#[command(version = "0.1.0")]
#[command(about = "Cardforge - preview, export and publish digital business cards")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file (default: <config dir>/cardforge/config.json if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Card server base URL (overrides config and CARDFORGE_SERVER)
    #[arg(short, long, global = true)]
    server: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the live preview markup for a card
    Preview {
        #[command(flatten)]
        card: CardArgs,
    },

    /// Create the card on the server and print its URL
    Submit {
        #[command(flatten)]
        card: CardArgs,
    },

    /// Print the card as a vCard
    Vcard {
        #[command(flatten)]
        card: CardArgs,
    },

    /// Print the preview positioning for a window width
    Layout {
        /// Window width in logical pixels
        width: f64,
        /// Breakpoint (defaults to the configured one)
        #[arg(long)]
        breakpoint: Option<f64>,
    },

    /// Print the effective configuration as JSON
    Config,
}

/// Card form fields
#[derive(Args, Debug, Default)]
struct CardArgs {
    #[arg(long, default_value = "")]
    fname: String,
    #[arg(long, default_value = "")]
    lname: String,
    #[arg(long, default_value = "")]
    pronouns: String,
    #[arg(long, default_value = "")]
    title: String,
    /// Business name
    #[arg(long, default_value = "")]
    biz: String,
    /// Business address
    #[arg(long, default_value = "")]
    addr: String,
    /// Business description
    #[arg(long, default_value = "")]
    desc: String,
    /// OpenPGP public key block
    #[arg(long, default_value = "")]
    key: String,
    /// Tracking code snippet
    #[arg(long, default_value = "")]
    tracker: String,
    /// Web font embed code
    #[arg(long, default_value = "")]
    font_link: String,
    /// Web font CSS rule
    #[arg(long, default_value = "")]
    font_css: String,
    /// Hosted card URL
    #[arg(long, default_value = "")]
    hosted_url: String,
    /// Enable footer credit
    #[arg(long)]
    footer_credit: bool,
    /// Logo image file
    #[arg(long)]
    logo: Option<PathBuf>,
    /// Cover image file
    #[arg(long)]
    cover: Option<PathBuf>,
    /// Profile photo file
    #[arg(long)]
    photo: Option<PathBuf>,
}

impl CardArgs {
    fn into_snapshot(self) -> FormSnapshot {
        let text = [
            (TextField::Fname, self.fname),
            (TextField::Lname, self.lname),
            (TextField::Pronouns, self.pronouns),
            (TextField::Title, self.title),
            (TextField::Biz, self.biz),
            (TextField::Addr, self.addr),
            (TextField::Desc, self.desc),
            (TextField::Key, self.key),
            (TextField::Tracker, self.tracker),
            (TextField::FontLink, self.font_link),
            (TextField::FontCss, self.font_css),
            (TextField::HostedUrl, self.hosted_url),
        ];
        let mut snapshot = FormSnapshot::new();
        for (field, value) in text {
            snapshot.set_text(field, value);
        }
        for (field, path) in [
            (ImageField::Logo, self.logo),
            (ImageField::Cover, self.cover),
            (ImageField::Photo, self.photo),
        ] {
            snapshot.set_image(field, path.map(SelectedFile::new));
        }
        snapshot.footer_credit = self.footer_credit;
        snapshot
    }
}

fn load_config(cli: &Cli) -> Result<CardConfig> {
    let mut config = CardConfig::load(cli.config.as_deref())?;
    if let Some(ref server) = cli.server {
        config.server_url = server.clone();
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    let config = load_config(&cli)?;
    tracing::debug!(?config, "effective configuration");

    match cli.command {
        Commands::Preview { card } => {
            let snapshot = card.into_snapshot();
            let mut images = ImageSlots::new();
            let report = images.resolve(&snapshot).await;
            for (field, err) in &report.failed {
                eprintln!("warning: no preview for {}: {}", field, err);
            }
            print!("{}", render_preview(&snapshot, &images).to_html());
        }

        Commands::Submit { card } => {
            let snapshot = card.into_snapshot();
            let client = CardClient::new(&config)?;
            match client.submit(&snapshot).await? {
                SubmissionOutcome::Created { url } => println!("{}", url),
                SubmissionOutcome::Rejected { errors } => {
                    if errors.is_empty() {
                        bail!("server rejected the card");
                    }
                    for (field, messages) in &errors {
                        for message in messages {
                            eprintln!("{}: {}", field, message);
                        }
                    }
                    bail!("server rejected the card ({} field(s) invalid)", errors.len());
                }
            }
        }

        Commands::Vcard { card } => {
            print!("{}", to_vcard(&card.into_snapshot()));
        }

        Commands::Layout { width, breakpoint } => {
            let breakpoint = breakpoint.unwrap_or(config.breakpoint);
            println!("{}", Positioning::for_width(width, breakpoint).as_css());
        }

        Commands::Config => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
