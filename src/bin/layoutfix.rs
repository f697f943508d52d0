// Layoutfix CLI
// Re-types text that was entered under the wrong keyboard layout

use std::borrow::Cow;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{anyhow, Context};
use clap::Parser;

use layoutfix_core::{Converter, Language, MapKey, PersianLayout, Settings};

/// Keyboard layout transliterator
#[derive(Parser, Debug)]
#[command(name = "layoutfix")]
#[command(version)]
#[command(about = "Convert text typed under the wrong keyboard layout", long_about = None)]
struct Args {
    /// Text to convert (read from stdin when omitted)
    text: Vec<String>,

    /// Layout the text was typed under (e.g. EN)
    #[arg(short, long, value_name = "LANG")]
    from: Option<String>,

    /// Layout the text was meant for (e.g. FA)
    #[arg(short, long, value_name = "LANG")]
    to: Option<String>,

    /// TOML settings file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Persian layout variant: auto, standard or legacy
    #[arg(long, value_name = "LAYOUT")]
    layout: Option<String>,

    /// Do not fall back to the opposite direction
    #[arg(long)]
    no_reverse: bool,

    /// List supported languages and exit
    #[arg(long)]
    list_languages: bool,

    /// Print one layout table (e.g. EN_FA_STD) and exit
    #[arg(long, value_name = "KEY")]
    dump: Option<String>,

    /// Validate settings and exit
    #[arg(long)]
    check_config: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Main application state
struct Application {
    args: Args,
    settings: Settings,
    converter: Converter,
}

impl Application {
    /// Load settings and apply command-line overrides
    fn new(args: Args) -> anyhow::Result<Self> {
        let mut settings = match &args.config {
            Some(path) => Settings::from_file(path)
                .with_context(|| format!("failed to load settings from {}", path.display()))?,
            None => Settings::load_default().context("failed to load default settings")?,
        };

        if let Some(from) = &args.from {
            settings.set_from(parse_language(from)?);
        }
        if let Some(to) = &args.to {
            settings.set_to(parse_language(to)?);
        }
        if let Some(layout) = &args.layout {
            let layout: PersianLayout = layout
                .parse()
                .map_err(|_| anyhow!("unknown Persian layout '{}'", layout))?;
            settings.set_persian_layout(layout);
        }
        if args.no_reverse {
            settings.set_try_reverse(false);
        }

        let converter = Converter::new().with_persian_layout(settings.persian_layout());

        Ok(Self {
            args,
            settings,
            converter,
        })
    }

    /// Print supported languages
    fn list_languages(&self) {
        for lang in self.converter.supported_languages() {
            println!("{}  {}", lang.code(), lang.name());
        }
    }

    /// Print one table as `key -> value` lines
    fn dump(&self, key: &str) -> anyhow::Result<()> {
        let key: MapKey = key.parse()?;
        let tables = self.converter.registry().ensure_built();
        let map = tables
            .get(&key)
            .ok_or_else(|| anyhow!("no table named {}", key))?;

        println!("{} ({} entries)", key, map.len());
        for (from, to) in map.iter() {
            println!(
                "  {:?} U+{:04X} -> {:?} U+{:04X}",
                from, from as u32, to, to as u32
            );
        }
        Ok(())
    }

    /// Describe the effective settings
    fn check_config(&self) {
        match self.settings.source_path() {
            Some(path) => println!("Settings: {}", path.display()),
            None => println!("Settings: built-in defaults"),
        }
        println!("  from = {}", self.settings.from());
        println!("  to = {}", self.settings.to());
        println!("  try_reverse = {}", self.settings.try_reverse());
        println!("  persian = {}", self.settings.persian_layout());
        println!("Configuration is valid");
    }

    /// Convert the input text and print it
    fn run(&self) -> anyhow::Result<()> {
        let text = self.input()?;
        let output = self.convert_text(&text);

        if output == text.as_str() {
            log::info!("nothing to convert");
        }
        println!("{}", output);
        Ok(())
    }

    /// Convert with the configured pair, falling back to the reverse
    /// direction when allowed. Pairs without a table return `text` unchanged.
    fn convert_text<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let (from, to) = (self.settings.from(), self.settings.to());

        let direction = if self.settings.try_reverse() {
            self.converter.resolve_direction(from.code(), to.code())
        } else if self.converter.has_mapping_between(from, to) {
            Some((from, to))
        } else {
            None
        };

        match direction {
            Some((from, to)) => {
                log::debug!("converting {}->{}", from, to);
                self.converter.convert_between(text, from, to)
            }
            None => {
                log::warn!("no layout table for {}->{}, printing text unchanged", from, to);
                Cow::Borrowed(text)
            }
        }
    }

    /// Text from the arguments, or stdin without its trailing newline
    fn input(&self) -> anyhow::Result<String> {
        if !self.args.text.is_empty() {
            return Ok(self.args.text.join(" "));
        }

        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read stdin")?;
        let trimmed = buffer.trim_end_matches(['\r', '\n']).len();
        buffer.truncate(trimmed);
        Ok(buffer)
    }
}

fn parse_language(input: &str) -> anyhow::Result<Language> {
    Language::from_name_or_code(input).ok_or_else(|| anyhow!("unsupported language '{}'", input))
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let app = Application::new(args)?;

    if app.args.list_languages {
        app.list_languages();
        return Ok(());
    }

    if let Some(key) = app.args.dump.clone() {
        return app.dump(&key);
    }

    if app.args.check_config {
        app.check_config();
        return Ok(());
    }

    app.run()
}
