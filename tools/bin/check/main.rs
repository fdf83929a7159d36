use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{Level, info};

use content::{
    Registry, config::SiteConfig, tag::resolve_variant, theme::ThemeTokens, validate::validate,
};

#[derive(Parser)]
#[command(version, about = "pre-deployment checks for the portfolio content", long_about = None)]
struct Cli {
    /// log at debug level
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// validate the content registry and site config
    Validate {
        /// check this site config instead of the embedded one
        #[arg(short, long)]
        site: Option<PathBuf>,
    },

    /// print the content registry as json
    Dump {
        /// pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// show the display variant each tech label resolves to
    Tag {
        /// labels to resolve, matched exactly
        #[arg(required = true)]
        labels: Vec<String>,
    },

    /// print the resolved design tokens
    Theme {
        /// print the :root css block instead of json
        #[arg(long)]
        css: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Validate { site } => {
            let site = match site {
                Some(path) => {
                    let doc = std::fs::read_to_string(&path)
                        .with_context(|| format!("failed to read {}", path.display()))?;
                    SiteConfig::from_toml(&doc)?
                }
                None => SiteConfig::load_embedded()?,
            };

            validate(&Registry::builtin())?;

            info!(owner = %site.owner, "content and site config are valid");
        }
        Commands::Dump { pretty } => {
            println!("{}", Registry::builtin().to_json(pretty)?);
        }
        Commands::Tag { labels } => {
            for label in labels {
                println!("{label}: {}", resolve_variant(&label));
            }
        }
        Commands::Theme { css } => {
            let theme = ThemeTokens::dark();

            if css {
                print!("{}", theme.css_variables());
            } else {
                println!("{}", serde_json::to_string_pretty(&theme)?);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn tag_requires_a_label() {
        assert!(Cli::try_parse_from(["portfolio-check", "tag"]).is_err());

        let cli = Cli::try_parse_from(["portfolio-check", "tag", "React", "COBOL"])
            .expect("tag with labels");
        match cli.command {
            Commands::Tag { labels } => assert_eq!(labels, vec!["React", "COBOL"]),
            _ => panic!("expected tag command"),
        }
    }

    #[test]
    fn validate_takes_an_optional_site_path() {
        let cli = Cli::try_parse_from(["portfolio-check", "-v", "validate", "--site", "site.toml"])
            .expect("validate with site");
        assert!(cli.verbose);
        match cli.command {
            Commands::Validate { site } => assert_eq!(site, Some(PathBuf::from("site.toml"))),
            _ => panic!("expected validate command"),
        }
    }
}
