use audiotube_core::error::ConvertError;
use audiotube_engine::engine::ConverterEngine;
use audiotube_engine::session::Session;
use audiotube_engine::traits::LinkOpener;
use audiotube_providers::convert::ConversionApiConfig;
use audiotube_runtime::config_store::ConfigStore;
use audiotube_runtime::defaults::{default_app_config, default_service_settings};
use audiotube_runtime::opener::SystemOpener;
use audiotube_runtime::secrets::{SecretKey, delete_secret, get_secret, set_secret};
use audiotube_runtime::service::HttpConversionService;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
usage: audiotube-cli <youtube-url> [--open]
       audiotube-cli set-key <api-key>
       audiotube-cli clear-key

environment:
  AUDIOTUBE_API_KEY    conversion service API key (falls back to the OS keyring)
  AUDIOTUBE_BASE_URL   override the conversion service endpoint
  AUDIOTUBE_API_HOST   override the service-host header value
  AUDIOTUBE_CONFIG     path to a JSON config file with service settings";

#[derive(Debug, Clone, PartialEq, Eq)]
enum CliCommand {
    Help,
    SetKey(String),
    ClearKey,
    Convert { url: String, open_link: bool },
}

/// `None` means the invocation was malformed.
fn parse_args(args: &[String]) -> Option<CliCommand> {
    match args.first().map(String::as_str) {
        None => return None,
        Some("--help") | Some("-h") => return Some(CliCommand::Help),
        Some("set-key") => {
            return match args {
                [_, value] => Some(CliCommand::SetKey(value.clone())),
                _ => None,
            };
        }
        Some("clear-key") => {
            return match args {
                [_] => Some(CliCommand::ClearKey),
                _ => None,
            };
        }
        Some(_) => {}
    }

    let mut url = None;
    let mut open_link = false;
    for arg in args {
        match arg.as_str() {
            "--open" => open_link = true,
            _ if url.is_none() => url = Some(arg.clone()),
            _ => return None,
        }
    }
    url.map(|url| CliCommand::Convert { url, open_link })
}

fn config_store_from_env() -> Option<ConfigStore> {
    std::env::var("AUDIOTUBE_CONFIG").ok().map(ConfigStore::at_path)
}

/// Keeps the config file's `api_key_present` marker in step with the keyring.
fn update_key_marker(store: &ConfigStore, present: bool) -> anyhow::Result<()> {
    let mut cfg = store.load().unwrap_or_else(|_| default_app_config());
    cfg.api_key_present = present;
    store.save(&cfg)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = parse_args(&args) else {
        eprintln!("{USAGE}");
        std::process::exit(2);
    };

    let (url, open_link) = match command {
        CliCommand::Help => {
            println!("{USAGE}");
            return Ok(());
        }
        CliCommand::SetKey(value) => {
            set_secret(SecretKey::ConversionApiKey, &value)?;
            if let Some(store) = config_store_from_env() {
                update_key_marker(&store, true)?;
            }
            eprintln!("API key stored in the OS keyring");
            return Ok(());
        }
        CliCommand::ClearKey => {
            delete_secret(SecretKey::ConversionApiKey)?;
            if let Some(store) = config_store_from_env() {
                update_key_marker(&store, false)?;
            }
            eprintln!("API key removed from the OS keyring");
            return Ok(());
        }
        CliCommand::Convert { url, open_link } => (url, open_link),
    };

    let api_key = match std::env::var("AUDIOTUBE_API_KEY") {
        Ok(k) if !k.trim().is_empty() => k,
        _ => get_secret(SecretKey::ConversionApiKey)?.unwrap_or_default(),
    };
    if api_key.trim().is_empty() {
        anyhow::bail!(
            "no API key configured; set AUDIOTUBE_API_KEY or run `audiotube-cli set-key <api-key>`"
        );
    }

    let settings = match config_store_from_env() {
        Some(store) => store.load()?.service,
        None => default_service_settings(),
    };
    let cfg = ConversionApiConfig {
        base_url: std::env::var("AUDIOTUBE_BASE_URL").unwrap_or(settings.base_url),
        api_host: std::env::var("AUDIOTUBE_API_HOST").unwrap_or(settings.api_host),
        api_key,
    };

    let opener: Arc<dyn LinkOpener> = Arc::new(SystemOpener);
    let engine = ConverterEngine::new(Arc::new(HttpConversionService::new(cfg)), opener);

    let mut session = Session::new();
    let outcome = engine
        .submit_with_hook(&mut session, &url, |stage| async move {
            eprintln!("[{stage}]");
        })
        .await;

    match outcome {
        Ok(result) => {
            println!("{}", result.title);
            println!("{}", result.link);
            if open_link {
                engine.open_result(&session).await?;
            }
            Ok(())
        }
        Err(e) if e.is_input_error() => {
            eprintln!("{e}");
            std::process::exit(2);
        }
        Err(ConvertError::ConversionFailed(msg)) => {
            eprintln!("conversion failed: {msg}");
            eprintln!("the service gives no further detail; edit the URL or try again later");
            std::process::exit(1);
        }
        // Unreachable with one submission per invocation.
        Err(e) => Err(e.into()),
    }
}
