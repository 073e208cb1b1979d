use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::tty::IsTty;

use vegur_config::Config;
use vegur_core::Rgb;
use vegur_tui::menu::{self, MenuAction, MenuItem, MenuState};

#[derive(Parser)]
#[command(name = "vegur", about = "Personal whoami card for the terminal", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override the detected terminal width
    #[arg(short, long)]
    width: Option<u16>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the card without the interactive prompt
    Print,
    /// Show current configuration
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("vegur=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let width = cli.width.map(usize::from).unwrap_or_else(term_width);

    match cli.command {
        Some(Commands::Print) => {
            println!("{}", vegur_tui::card::compose(&config, width)?);
        }
        Some(Commands::Config) => {
            let path = Config::config_path();
            println!("Config path: {}", path.display());
            println!("{}", toml::to_string_pretty(&config)?);
        }
        None => {
            println!("{}", vegur_tui::card::compose(&config, width)?);
            // The prompt only makes sense on a real terminal; piped
            // output gets the card alone.
            if std::io::stdin().is_tty() && std::io::stdout().is_tty() {
                navigate(&config)?;
            }
        }
    }

    Ok(())
}

/// Current terminal columns, defaulting to 80 when detection fails
/// (pipes, dumb terminals).
fn term_width() -> usize {
    crossterm::terminal::size()
        .map(|(cols, _)| cols as usize)
        .unwrap_or(80)
}

fn navigate(config: &Config) -> Result<()> {
    let mut items = Vec::with_capacity(config.links.len() + 1);
    for link in &config.links {
        items.push(MenuItem::new(
            format!("{}  {} ({})", link.icon, link.label, link.hint),
            Rgb::from_hex(&link.color)?,
            MenuAction::Open(link.url.clone()),
        ));
    }
    items.push(MenuItem::new(
        format!("👋  {}", config.profile.farewell),
        Rgb::from_hex(&config.palette.accent)?,
        MenuAction::Quit,
    ));

    match menu::run(MenuState::new("Navigate me?", items))? {
        Some(MenuAction::Open(url)) => {
            tracing::debug!(%url, "opening in browser");
            open::that(&url).with_context(|| format!("Failed to open {url}"))?;
        }
        Some(MenuAction::Quit) | None => {}
    }
    Ok(())
}
