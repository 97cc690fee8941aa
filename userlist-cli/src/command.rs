pub mod list;
pub mod search;

use anyhow::Context;
use std::io::Write;
use url::Url;
use userlist::Config;
use userlist::DisplayRecord;
use userlist::FilterMode;
use userlist::LoadError;
use userlist::View;

/// Load the config from the environment, then apply overrides from the command line.
fn load_config(users_url: Option<Url>, posts_url: Option<Url>) -> anyhow::Result<Config> {
    let mut config = Config::from_env().context("failed to load config")?;
    if let Some(users_url) = users_url {
        config.users_url = users_url;
    }
    if let Some(posts_url) = posts_url {
        config.posts_url = posts_url;
    }

    Ok(config)
}

fn filter_mode(legacy_filter: bool) -> FilterMode {
    if legacy_filter {
        FilterMode::LowercaseNameOnly
    } else {
        FilterMode::CaseInsensitive
    }
}

fn load_errors(view: &View) -> impl Iterator<Item = &LoadError> {
    view.users_state
        .error()
        .into_iter()
        .chain(view.posts_state.error())
}

/// Print a message for every collection that failed to load.
fn print_load_errors(view: &View) {
    for error in load_errors(view) {
        eprintln!("{error}: {}", error.error);
    }
}

/// Render records as plain text.
fn write_records<W>(mut writer: W, records: &[DisplayRecord]) -> std::io::Result<()>
where
    W: Write,
{
    for record in records {
        writeln!(writer, "{}", record.name)?;
        if let Some(title) = record.last_post_title.as_deref() {
            writeln!(writer, "  {title}")?;
        }
        if let Some(body) = record.last_post_body.as_deref() {
            for line in body.lines() {
                writeln!(writer, "    {line}")?;
            }
        }
        writeln!(writer)?;
    }

    Ok(())
}
