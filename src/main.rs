use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context as _;
use clap::{ArgAction, Args, Parser, Subcommand};

use portfolio_cms::auth::AdminGate;
use portfolio_cms::commands::{self, Action, Context, FieldFile, FormInput};
use portfolio_cms::config::Config;
use portfolio_cms::http::{ApiClient, Transport};
use portfolio_cms::interact::{AssumeYes, Confirm, TerminalConfirm};
use portfolio_cms::logging::init_tracing;
use portfolio_cms::sections::Section;

/// Environment variable holding the signed-in user's email.
const USER_ENV: &str = "PORTFOLIO_CMS_USER";

#[derive(Debug, Parser)]
#[command(
    name = "portfolio-cms",
    version,
    about = "Manage portfolio site content through its REST API"
)]
struct Cli {
    /// Config file (default: ~/.config/portfolio-cms/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, global = true, value_name = "URL")]
    api_endpoint: Option<String>,

    /// Email of the signed-in user (default: $PORTFOLIO_CMS_USER)
    #[arg(long, global = true, value_name = "EMAIL")]
    user: Option<String>,

    /// Delete without asking for confirmation
    #[arg(short = 'y', long, global = true)]
    yes: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the admin sections and their API endpoints
    Sections,
    /// List the entries of a section
    List { section: Section },
    /// Print an entry as JSON (the singleton, or the whole list, without an id)
    Show { section: Section, id: Option<String> },
    /// Create an entry
    Create {
        section: Section,
        #[command(flatten)]
        form: FormArgs,
    },
    /// Update an entry
    Update {
        section: Section,
        id: String,
        #[command(flatten)]
        form: FormArgs,
    },
    /// Delete an entry
    Delete { section: Section, id: String },
}

#[derive(Debug, Args)]
struct FormArgs {
    /// JSON object with the fields to send
    #[arg(long, value_name = "JSON")]
    data: Option<String>,

    /// Embed an image file into a field
    #[arg(long = "image", value_name = "FIELD=PATH")]
    images: Vec<FieldFile>,

    /// Append an image file to a gallery field
    #[arg(long = "gallery", value_name = "FIELD=PATH")]
    gallery: Vec<FieldFile>,
}

impl From<FormArgs> for FormInput {
    fn from(args: FormArgs) -> Self {
        FormInput {
            data: args.data,
            images: args.images,
            gallery: args.gallery,
        }
    }
}

impl Command {
    fn into_action(self) -> Option<(Section, Action)> {
        match self {
            Command::Sections => None,
            Command::List { section } => Some((section, Action::List)),
            Command::Show { section, id } => Some((section, Action::Show { id })),
            Command::Create { section, form } => Some((section, Action::Create { form: form.into() })),
            Command::Update { section, id, form } => Some((
                section,
                Action::Update {
                    id,
                    form: form.into(),
                },
            )),
            Command::Delete { section, id } => Some((section, Action::Delete { id })),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let Some((section, action)) = cli.command.into_action() else {
        commands::print_sections(&mut out)?;
        return Ok(());
    };

    let path = cli.config.unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&path)?.with_env_overrides();
    if let Some(url) = cli.api_endpoint {
        config.api.base_url = url;
    }
    config.validate()?;

    let user = cli.user.or_else(|| std::env::var(USER_ENV).ok());
    AdminGate::from_config(&config.auth).check(user.as_deref())?;

    let client = ApiClient::new(&config.api).context("Failed to create API client")?;
    tracing::info!(base_url = %client.base_url(), section = %section, "Using content API");

    let transport: Arc<dyn Transport> = Arc::new(client);
    let confirm: Arc<dyn Confirm> = if cli.yes {
        Arc::new(AssumeYes)
    } else {
        Arc::new(TerminalConfirm)
    };
    let ctx = Context {
        transport,
        confirm,
        delete_policy: config.resources.delete_policy,
    };

    commands::run(section, action, &ctx, &mut out).await?;
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
    fn parses_update_with_images() {
        let cli = Cli::try_parse_from([
            "portfolio-cms",
            "update",
            "projects",
            "p1",
            "--data",
            r#"{"title":"Site"}"#,
            "--image",
            "imgMain=/tmp/main.png",
            "--gallery",
            "img=/tmp/a.png",
            "-y",
        ])
        .unwrap();

        assert!(cli.yes);
        let (section, action) = cli.command.into_action().unwrap();
        assert_eq!(section, Section::Projects);
        match action {
            Action::Update { id, form } => {
                assert_eq!(id, "p1");
                assert_eq!(form.images[0].field, "imgMain");
                assert_eq!(form.gallery[0].path, PathBuf::from("/tmp/a.png"));
            }
            other => panic!("expected update, got {:?}", other),
        }
    }

    #[test]
    fn sections_has_no_action() {
        let cli = Cli::try_parse_from(["portfolio-cms", "sections"]).unwrap();
        assert!(cli.command.into_action().is_none());
    }

    #[test]
    fn unknown_section_is_rejected() {
        assert!(Cli::try_parse_from(["portfolio-cms", "list", "blog"]).is_err());
    }
}
