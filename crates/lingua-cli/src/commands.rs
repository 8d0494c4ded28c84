//! Subcommand implementations.

use crate::cli::Command;
use anyhow::{Context, Result};
use lingua_config::I18nSettings;
use lingua_i18n::{ErrorMap, HandledErrors, TranslationArgs, Translator};
use std::io::Write;
use tracing::debug;

/// Build a translator from `settings` and run `command`, writing results to `out`.
pub fn execute(command: &Command, settings: &I18nSettings, out: &mut dyn Write) -> Result<()> {
    let translator = Translator::new(settings).context("Failed to load translations")?;

    match command {
        Command::Translate {
            path,
            args,
            locale,
            fallback,
        } => translate(&translator, path, args, locale.as_deref(), fallback.as_deref(), out),
        Command::Keys { prefix } => keys(&translator, prefix.as_deref(), out),
        Command::Errors { file, json } => {
            let content = std::fs::read_to_string(file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let errors = ErrorMap::from_json(&content)
                .with_context(|| format!("Invalid error file {}", file.display()))?;
            errors_command(&translator, &errors, *json, out)
        }
    }
}

fn translate(
    translator: &Translator,
    path: &str,
    args: &[(String, String)],
    locale: Option<&str>,
    fallback: Option<&str>,
    out: &mut dyn Write,
) -> Result<()> {
    if locale.is_some() || fallback.is_some() {
        let active = translator.active();
        // An omitted flag keeps the configured value; `--fallback ""` clears it.
        translator.set_locale(
            locale.unwrap_or_else(|| active.locale()),
            fallback.or_else(|| active.fallback()),
        )?;
    }
    debug!("Resolving {} with locale {}", path, translator.active());

    let args: TranslationArgs = args.iter().map(|(k, v)| (k.as_str(), v)).collect();
    writeln!(out, "{}", translator.translate(path, &args))?;
    Ok(())
}

fn keys(translator: &Translator, prefix: Option<&str>, out: &mut dyn Write) -> Result<()> {
    let catalog = translator.catalog();
    for key in catalog.keys() {
        if prefix.map_or(true, |p| key.starts_with(p)) {
            writeln!(out, "{key} = {}", catalog.get(key).unwrap_or_default())?;
        }
    }
    Ok(())
}

fn errors_command(
    translator: &Translator,
    errors: &ErrorMap,
    as_json: bool,
    out: &mut dyn Write,
) -> Result<()> {
    match translator.handle_errors(Some(errors), as_json)? {
        HandledErrors::Json(json) => writeln!(out, "{json}")?,
        HandledErrors::Map(fields) => {
            for (field, messages) in fields {
                for message in messages {
                    writeln!(out, "{field}: {message}")?;
                }
            }
        }
    }
    Ok(())
}
