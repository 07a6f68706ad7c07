use clap::Parser;
use std::sync::Arc;
use site_content::utils::{logger, validation::Validate};
use site_content::{
    CliConfig, Command, ContentLoader, ContentOrigin, DocumentRoot, FileStorage, FixedColorScheme,
    HttpContentApi, SiteConfig, ThemeAction, ThemePreference,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let config = cli.site_config()?;
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    match cli.command {
        Command::Content => run_content(&config).await,
        Command::Theme {
            action,
            prefers_dark,
        } => run_theme(&config, action, prefers_dark),
    }
}

async fn run_content(config: &SiteConfig) -> anyhow::Result<()> {
    let api = HttpContentApi::from_config(&config.api)?;
    let loader = ContentLoader::new(api);

    tracing::info!("Loading content from {}", config.api.base_url);
    if loader.initialize().await == ContentOrigin::Fallback {
        tracing::info!("Serving fallback content");
    }

    println!("{}", serde_json::to_string_pretty(&loader.snapshot())?);
    Ok(())
}

fn run_theme(config: &SiteConfig, action: ThemeAction, prefers_dark: bool) -> anyhow::Result<()> {
    let storage = FileStorage::new(&config.theme.storage_path);
    let document = Arc::new(DocumentRoot::with_marker(&config.theme.marker_class));
    let theme = ThemePreference::new(storage, document.clone(), FixedColorScheme(prefers_dark));

    let mut mode = theme.initialize();
    if action == ThemeAction::Toggle {
        mode = theme.toggle();
    }

    println!("theme: {}", mode);
    println!("root classes: {:?}", document.class_list());
    Ok(())
}
