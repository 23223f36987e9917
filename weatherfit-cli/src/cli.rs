use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use weatherfit_core::{
    Clock, Config, FixedClock, Formatter, Locale, MessagePicker, RandomPicker, SystemClock,
    WeatherSnapshot, classify, condition_name, load_store_file, read_snapshot,
};

use crate::render::render_text;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weatherfit", version, about = "WeatherFit widget preview")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Choose the default locale and store dump location.
    Configure,

    /// Run one widget refresh against a store dump and print the result.
    Render {
        /// JSON object dump of the shared widget store.
        #[arg(long)]
        store: Option<PathBuf>,

        /// Locale tag overriding `selected_language`, e.g. "uk".
        #[arg(long)]
        locale: Option<String>,

        /// Date treated as today, YYYY-MM-DD.
        #[arg(long)]
        today: Option<NaiveDate>,

        /// Seed for the default-message picker.
        #[arg(long)]
        seed: Option<u64>,

        /// Print the presentation model as JSON.
        #[arg(long)]
        json: bool,

        /// Use the built-in sample snapshot instead of a store.
        #[arg(long, conflicts_with = "store")]
        placeholder: bool,
    },

    /// Show how a WMO weather code is presented.
    Classify {
        #[arg(allow_negative_numbers = true)]
        code: i32,
    },
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure()?,
            Command::Render {
                store,
                locale,
                today,
                seed,
                json,
                placeholder,
            } => {
                let mut config = LazyConfig::new(Config::load);
                let snapshot = build_snapshot(store, locale.as_deref(), placeholder, &mut config)?;

                let picker = match seed {
                    Some(seed) => RandomPicker::seeded(seed),
                    None => RandomPicker::from_entropy(),
                };
                let model = match today {
                    Some(date) => format_once(FixedClock(date), picker, &snapshot),
                    None => format_once(SystemClock, picker, &snapshot),
                };

                if json {
                    println!("{}", serde_json::to_string_pretty(&model)?);
                } else {
                    println!("{}", render_text(&model));
                }
            }
            Command::Classify { code } => {
                let c = classify(code);
                println!("code:       {code}");
                println!("background: {}", c.kind);
                println!("emoji:      {}", c.emoji);
                println!("condition:  {}", condition_name(code));
            }
        }

        Ok(())
    }
}

fn format_once<C: Clock, P: MessagePicker>(
    clock: C,
    picker: P,
    snapshot: &WeatherSnapshot,
) -> weatherfit_core::PresentationModel {
    Formatter::with_parts(clock, picker).format(snapshot)
}

/// Reads the config file on first use only, so a fully specified `render`
/// never touches it.
struct LazyConfig<F> {
    load: F,
    loaded: Option<Config>,
}

impl<F: FnMut() -> anyhow::Result<Config>> LazyConfig<F> {
    fn new(load: F) -> Self {
        Self { load, loaded: None }
    }

    fn get(&mut self) -> anyhow::Result<&Config> {
        if self.loaded.is_none() {
            let config = (self.load)()?;
            self.loaded = Some(config);
        }
        Ok(self.loaded.get_or_insert_with(Config::default))
    }
}

fn build_snapshot<F: FnMut() -> anyhow::Result<Config>>(
    store: Option<PathBuf>,
    locale: Option<&str>,
    placeholder: bool,
    config: &mut LazyConfig<F>,
) -> anyhow::Result<WeatherSnapshot> {
    let mut snapshot = if placeholder {
        WeatherSnapshot::placeholder()
    } else {
        load_snapshot(store, config)?
    };
    snapshot.locale_code = effective_locale(locale, &snapshot, config)?;
    Ok(snapshot)
}

fn load_snapshot<F: FnMut() -> anyhow::Result<Config>>(
    store: Option<PathBuf>,
    config: &mut LazyConfig<F>,
) -> anyhow::Result<WeatherSnapshot> {
    let path = match store {
        Some(path) => path,
        None => config.get()?.store_path()?.to_path_buf(),
    };

    if !path.exists() {
        tracing::warn!(path = %path.display(), "store dump not found, showing placeholder");
        return Ok(WeatherSnapshot::placeholder());
    }

    let store = load_store_file(&path)?;
    Ok(read_snapshot(&store))
}

/// `--locale` wins, then the store's own language, then the configured default.
fn effective_locale<F: FnMut() -> anyhow::Result<Config>>(
    flag: Option<&str>,
    snapshot: &WeatherSnapshot,
    config: &mut LazyConfig<F>,
) -> anyhow::Result<String> {
    if let Some(tag) = flag {
        return Ok(tag.to_string());
    }
    if snapshot.locale_code.is_empty() || snapshot.locale_code == Locale::default().code() {
        return Ok(config.get()?.locale().code().to_string());
    }
    Ok(snapshot.locale_code.clone())
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let locale = inquire::Select::new("Default locale:", Locale::all().to_vec())
        .prompt()
        .context("Locale selection cancelled")?;
    config.set_default_locale(locale);

    let mut prompt = inquire::Text::new("Path to the widget store JSON dump:");
    let current = config
        .store_path
        .as_ref()
        .map(|p| p.display().to_string());
    if let Some(current) = current.as_deref() {
        prompt = prompt.with_default(current);
    }
    let store_path = prompt.prompt().context("Store path input cancelled")?;
    if !store_path.trim().is_empty() {
        config.set_store_path(PathBuf::from(store_path.trim()));
    }

    config.save()?;
    println!(
        "Saved configuration to {}",
        Config::config_file_path()?.display()
    );

    Ok(())
}
