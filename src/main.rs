use anyhow::{anyhow, Context};
use clap::Parser;
use curation_client::core::controller::SAVED_ARTICLES_PATH;
use curation_client::domain::ports::Page;
use curation_client::utils::logger;
use curation_client::{
    CliConfig, Command, Controller, Credentials, Event, HttpBackend, Outcome, PreferenceCatalog,
    Region, Settings, TerminalPage, TomlConfig,
};

type Client = Controller<HttpBackend, TerminalPage>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let file = match &cli.config {
        Some(path) => Some(
            TomlConfig::from_file(path)
                .with_context(|| format!("reading config {}", path.display()))?,
        ),
        None => None,
    };
    let settings = match Settings::resolve(file, cli.overrides()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    logger::init_cli_logger(settings.verbose, settings.log_format);
    tracing::info!("Starting curate against {}", settings.base_url);
    tracing::debug!("command: {:?}", cli.command);

    let backend = HttpBackend::with_timeout(&settings.base_url, settings.timeout)?;
    let page = TerminalPage::new(cli.command.start_path(), cli.command.wants_html());
    let mut client = Controller::new(backend, page)?;

    let outcome = run(&mut client, &cli.command, settings.credentials).await?;

    // Done 0, refused 1, transport failure 2
    let exit_code = match outcome {
        Outcome::Done | Outcome::Skipped => 0,
        Outcome::Rejected => 1,
        Outcome::Failed => 2,
    };
    if exit_code > 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}

async fn run(
    client: &mut Client,
    command: &Command,
    credentials: Option<Credentials>,
) -> anyhow::Result<Outcome> {
    let catalog = PreferenceCatalog::default();

    if let Command::Signup { preferences } = command {
        let credentials = credentials.ok_or_else(missing_credentials)?;
        let checked = catalog
            .checked_values(preferences)
            .map_err(|e| anyhow!(e.alert_message()))?;
        return Ok(client
            .dispatch(Event::SubmitSignup {
                credentials,
                checked,
            })
            .await);
    }

    let credentials = credentials.ok_or_else(missing_credentials)?;
    let login = client.dispatch(Event::SubmitLogin(credentials)).await;
    if !login.is_done() || matches!(command, Command::Login) {
        return Ok(login);
    }

    let outcome = match command {
        Command::Preferences { preferences } if preferences.is_empty() => {
            println!("Current preferences:");
            client.load_user_preferences().await
        }
        Command::Preferences { preferences } => {
            let checked = catalog
                .checked_values(preferences)
                .map_err(|e| anyhow!(e.alert_message()))?;
            client.dispatch(Event::SubmitPreferences { checked }).await
        }
        Command::Feed { .. } => client.dispatch(Event::FetchArticles).await,
        Command::Save { position } => {
            let fetched = client.dispatch(Event::FetchArticles).await;
            if !fetched.is_done() {
                return Ok(fetched);
            }
            let event = position
                .checked_sub(1)
                .and_then(|index| client.page().document().click(Region::Articles, index))
                .ok_or_else(|| anyhow!("No article at position {}", position))?;
            client.dispatch(event).await
        }
        Command::Saved { .. } => {
            client.page_mut().navigate(SAVED_ARTICLES_PATH);
            client.load_saved_articles().await
        }
        Command::Delete { url } => {
            client.page_mut().navigate(SAVED_ARTICLES_PATH);
            let reloads = client.page().document().reloads();
            let outcome = client
                .dispatch(Event::DeleteArticle { url: url.clone() })
                .await;
            if client.page().document().reloads() > reloads {
                client.load_saved_articles().await;
            }
            outcome
        }
        Command::Logout => client.dispatch(Event::Logout).await,
        Command::Signup { .. } | Command::Login => login,
    };

    Ok(outcome)
}

fn missing_credentials() -> anyhow::Error {
    anyhow!("Credentials required: pass --username/--password or set [account] in the config file")
}
