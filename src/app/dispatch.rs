use crate::app::overrides::apply_overrides;
use crate::cli::{Cli, Commands, ConfigCommands, HistoryCommands, SettingOverrides};
use crate::config::{Config, SettingKey, SummarizeSettings};
use crate::core::api::{HistoryEntry, HistoryId, HttpSummaryApi, SplitRequest, SummaryApi};
use crate::core::document::load_document;
use crate::core::export::{
    CopyOutcome, ExportOutcome, FsBlobStore, SystemClipboard, copy_to_clipboard, export_as_file,
    today_file_name,
};
use crate::core::history::{AssumeYes, Confirmer, DialoguerConfirmer, HistoryStore, RemoveOutcome};
use crate::core::session::{SessionController, SkipReason, SubmitOutcome};
use crate::error::SummaryError;
use crate::ui;
use anyhow::{Context, anyhow};
use std::path::Path;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

type DispatchResult = Result<(), SummaryError>;

const SPLIT_PREVIEW_CHARS: usize = 60;

pub async fn dispatch(cli: Cli, mut config: Config) -> DispatchResult {
    match cli.command {
        Commands::Summarize {
            file,
            overrides,
            copy,
            export,
        } => run_summarize(&config, &file, &overrides, copy, export).await,
        Commands::History { history_command } => run_history(&config, history_command).await,
        Commands::Config { config_command } => run_config(&mut config, config_command),
        Commands::Split {
            file,
            chunk_size,
            overlap,
        } => run_split(&config, &file, chunk_size, overlap).await,
        Commands::Ping => run_ping(&config).await,
    }
}

fn connect(config: &Config) -> Result<Arc<dyn SummaryApi>, SummaryError> {
    Ok(Arc::new(HttpSummaryApi::new(&config.server)?))
}

fn notice(text: impl std::fmt::Display) {
    println!("{} {text}", ui::success("✓"));
}

fn warn_notice(text: impl std::fmt::Display) {
    println!("{} {text}", ui::warning("!"));
}

fn export_prefix(config: &Config) -> String {
    let configured = config.export.file_prefix.trim();
    if configured.is_empty() {
        t!("export.default_prefix").into_owned()
    } else {
        configured.to_string()
    }
}

fn export_summary(dir: &Path, prefix: &str, text: &str) -> DispatchResult {
    let store = FsBlobStore::new(dir);
    match export_as_file(&store, text, &today_file_name(prefix))? {
        ExportOutcome::Saved(path) => notice(t!(
            "export.saved",
            path = ui::value(path.display())
        )),
        ExportOutcome::Skipped => warn_notice(t!("export.nothing")),
    }
    Ok(())
}

// ── summarize ────────────────────────────────────────────────────

async fn run_summarize(
    config: &Config,
    file: &Path,
    overrides: &SettingOverrides,
    copy: bool,
    export: bool,
) -> DispatchResult {
    let settings = apply_overrides(&config.summarize, overrides)?;
    let scope = CancellationToken::new();
    let session = SessionController::with_scope(connect(config)?, scope.clone());

    let document = load_document(file).await?;
    eprintln!(
        "{}",
        ui::dim(t!("summarize.loaded", file = document.file_name.as_str()))
    );
    session.load_input(document);

    if settings.test_mode {
        warn_notice(t!("summarize.test_mode"));
    }
    eprintln!(
        "{}",
        ui::dim(t!("summarize.working", model = settings.model.as_str()))
    );

    let outcome = submit_until_interrupted(&session, &settings, tokio::signal::ctrl_c()).await;

    match outcome {
        SubmitOutcome::Completed(result) => {
            println!("{}", ui::render_summary(&result));
            if copy {
                copy_with_notice(&result.summary).await;
            }
            if export {
                export_summary(
                    &config.export.resolved_directory(),
                    &export_prefix(config),
                    &result.summary,
                )?;
            }
            Ok(())
        }
        SubmitOutcome::Failed(err) => Err(err.into()),
        SubmitOutcome::Skipped(SkipReason::NoInput) => {
            warn_notice(t!("summarize.empty_input"));
            Ok(())
        }
        SubmitOutcome::Skipped(reason) => {
            warn_notice(t!("summarize.skipped", reason = reason.to_string()));
            Ok(())
        }
        SubmitOutcome::Discarded => Err(anyhow!(t!("summarize.interrupted").into_owned()).into()),
    }
}

/// Race one submit against `interrupt`. An interrupt deactivates the session
/// and discards the response; a failure to listen for one lets the request
/// run to completion.
pub async fn submit_until_interrupted<F>(
    session: &SessionController,
    settings: &SummarizeSettings,
    interrupt: F,
) -> SubmitOutcome
where
    F: Future<Output = std::io::Result<()>>,
{
    let interrupted = async {
        if let Err(err) = interrupt.await {
            tracing::warn!(error = %err, "cannot listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        outcome = session.submit(settings) => outcome,
        () = interrupted => {
            session.deactivate();
            SubmitOutcome::Discarded
        }
    }
}

/// Clipboard trouble after a successful summary is reported but does not
/// fail the command.
async fn copy_with_notice(text: &str) {
    match copy_to_clipboard(&SystemClipboard, text).await {
        Ok(CopyOutcome::Copied) => notice(t!("clipboard.copied")),
        Ok(CopyOutcome::Skipped) => warn_notice(t!("clipboard.nothing")),
        Err(err) => warn_notice(t!("clipboard.failed", error = err.to_string())),
    }
}

// ── history ──────────────────────────────────────────────────────

async fn run_history(config: &Config, command: HistoryCommands) -> DispatchResult {
    let store = HistoryStore::new(connect(config)?);
    store.refresh().await?;

    match command {
        HistoryCommands::List { expand } => {
            if let Some(id) = expand {
                let id = HistoryId::from(id.as_str());
                find_entry(&store, &id)?;
                store.toggle_expanded(&id);
            }
            let entries = store.entries();
            if entries.is_empty() {
                println!("{}", ui::dim(t!("history.empty")));
                return Ok(());
            }
            println!("{}\n", ui::header(t!("history.title", count = entries.len())));
            for entry in &entries {
                println!(
                    "{}",
                    ui::render_history_entry(entry, store.is_expanded(&entry.id))
                );
            }
            Ok(())
        }
        HistoryCommands::Show { id } => {
            let entry = find_entry(&store, &HistoryId::from(id.as_str()))?;
            println!("{}", ui::render_history_entry(&entry, true));
            Ok(())
        }
        HistoryCommands::Delete { id, yes } => {
            let id = HistoryId::from(id.as_str());
            find_entry(&store, &id)?;
            let confirmer: &dyn Confirmer = if yes { &AssumeYes } else { &DialoguerConfirmer };
            match store.remove(&id, confirmer).await {
                RemoveOutcome::Removed => {
                    notice(t!("history.deleted", id = id.as_str()));
                    Ok(())
                }
                RemoveOutcome::Cancelled => {
                    warn_notice(t!("history.delete_cancelled"));
                    Ok(())
                }
                RemoveOutcome::Failed(err) => Err(err.into()),
            }
        }
        HistoryCommands::Copy { id } => {
            let entry = find_entry(&store, &HistoryId::from(id.as_str()))?;
            match copy_to_clipboard(&SystemClipboard, &entry.summary).await? {
                CopyOutcome::Copied => notice(t!("clipboard.copied")),
                CopyOutcome::Skipped => warn_notice(t!("clipboard.nothing")),
            }
            Ok(())
        }
        HistoryCommands::Export { id, dir } => {
            let entry = find_entry(&store, &HistoryId::from(id.as_str()))?;
            let dir = dir.unwrap_or_else(|| config.export.resolved_directory());
            export_summary(&dir, &export_prefix(config), &entry.summary)
        }
    }
}

fn find_entry(store: &HistoryStore, id: &HistoryId) -> Result<HistoryEntry, SummaryError> {
    store
        .get(id)
        .ok_or_else(|| anyhow!(t!("history.not_found", id = id.as_str()).into_owned()).into())
}

// ── config ───────────────────────────────────────────────────────

fn run_config(config: &mut Config, command: ConfigCommands) -> DispatchResult {
    match command {
        ConfigCommands::Show => {
            print_settings(config);
            Ok(())
        }
        ConfigCommands::Set { key, value } => {
            let key = SettingKey::parse(&key)?;
            config.summarize = config.summarize.with_value(key, &value)?;
            config.save().context("Failed to save settings")?;
            notice(t!(
                "config.updated",
                key = ui::cyan(key),
                value = ui::value(config.summarize.value_of(key))
            ));
            Ok(())
        }
        ConfigCommands::Reset => {
            config.summarize = SummarizeSettings::default();
            config.save().context("Failed to save settings")?;
            notice(t!("config.reset"));
            Ok(())
        }
    }
}

fn print_settings(config: &Config) {
    println!(
        "{} {}",
        ui::header(t!("config.file")),
        ui::value(config.config_path.display())
    );
    println!(
        "{} {}\n",
        ui::header(t!("config.server")),
        ui::url(&config.server.base_url)
    );
    for key in SettingKey::ALL {
        let value = config.summarize.value_of(key);
        let shown = if value.is_empty() {
            ui::dim(t!("config.unset"))
        } else {
            ui::value(value)
        };
        println!("  {} {shown}", ui::cyan(format!("{:<20}", key.to_string())));
    }
}

// ── split / ping ─────────────────────────────────────────────────

async fn run_split(config: &Config, file: &Path, chunk_size: u32, overlap: u32) -> DispatchResult {
    let api = connect(config)?;
    let document = load_document(file).await?;
    let response = api
        .split_text(&SplitRequest {
            text: document.text,
            chunk_size,
            chunk_overlap: overlap,
        })
        .await?;

    println!(
        "{}",
        ui::header(t!(
            "split.summary",
            file = document.file_name.as_str(),
            count = response.total_chunks
        ))
    );
    for (index, chunk) in response.chunks.iter().enumerate() {
        let flat = chunk.split_whitespace().collect::<Vec<_>>().join(" ");
        let preview: String = flat.chars().take(SPLIT_PREVIEW_CHARS).collect();
        println!(
            "  {} {} {}",
            ui::accent(format!("{:>3}.", index + 1)),
            ui::dim(format!("[{}]", chunk.chars().count())),
            preview
        );
    }
    Ok(())
}

async fn run_ping(config: &Config) -> DispatchResult {
    let api = connect(config)?;
    let response = api.ping().await?;
    notice(t!(
        "ping.ok",
        url = ui::url(&config.server.base_url),
        message = response.message.as_str()
    ));
    Ok(())
}

