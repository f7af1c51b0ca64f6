use std::{error::Error, io, path::PathBuf};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use trivia::{
    catalog::{Catalog, Category, Difficulty},
    config::{Config, ConfigStore, FileConfigStore},
    console::{read_choice, read_non_empty, Console, FixedPacer, TerminalConsole},
    provider::HttpQuestionSource,
    quiz::{offer_save, Quiz},
    session::SessionConfig,
    ui, QuizError,
};

/// multiple-choice trivia in your terminal
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A terminal trivia quiz: pick a category and difficulty, answer a batch of multiple-choice questions fetched from the-trivia-api, and optionally save your results."
)]
pub struct Cli {
    /// player name (asked for when omitted)
    #[clap(short = 'n', long)]
    name: Option<String>,

    /// category to draw questions from
    #[clap(short = 'c', long, value_enum, conflicts_with = "any_category")]
    category: Option<Category>,

    /// draw questions from every category
    #[clap(long)]
    any_category: bool,

    /// question difficulty
    #[clap(short = 'd', long, value_enum, conflicts_with = "any_difficulty")]
    difficulty: Option<Difficulty>,

    /// mix questions of every difficulty
    #[clap(long)]
    any_difficulty: bool,

    /// number of questions to request
    #[clap(short = 'q', long, value_parser = clap::value_parser!(u64).range(1..))]
    number_of_questions: Option<u64>,

    /// skip the pause between questions
    #[clap(long)]
    no_pacing: bool,

    /// shuffle the question order once before play
    #[clap(long)]
    shuffle_questions: bool,

    /// directory results files are written to
    #[clap(long)]
    results_dir: Option<PathBuf>,

    /// question endpoint of the trivia provider
    #[clap(long)]
    api_url: Option<String>,

    /// seconds to wait for the provider before giving up
    #[clap(long, value_parser = clap::value_parser!(u64).range(1..))]
    timeout_secs: Option<u64>,

    /// config file to use instead of the platform default
    #[clap(long)]
    config: Option<PathBuf>,

    /// store the effective settings as the new defaults
    #[clap(long)]
    save_config: bool,
}

impl Cli {
    /// Layers command line overrides on top of the stored config
    fn apply(&self, mut config: Config) -> Config {
        if let Some(n) = self.number_of_questions {
            config.number_of_questions = n as usize;
        }
        if self.no_pacing {
            config.pacing_ms = 0;
        }
        if self.shuffle_questions {
            config.shuffle_questions = true;
        }
        if let Some(dir) = &self.results_dir {
            config.results_dir = Some(dir.clone());
        }
        if let Some(url) = &self.api_url {
            config.api_url = url.clone();
        }
        if let Some(secs) = self.timeout_secs {
            config.timeout_secs = secs;
        }
        config
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();
    let cli = Cli::parse();

    let store = cli
        .config
        .as_ref()
        .map(|p| FileConfigStore::with_path(p))
        .unwrap_or_default();
    let config = cli.apply(store.load());

    let mut console = TerminalConsole::new();
    if cli.save_config {
        store.save(&config)?;
        console.show(&format!("Saved settings to {}", store.path().display()))?;
    }
    match play(&cli, &config, &Catalog::standard(), &mut console) {
        Err(QuizError::Acquisition(err)) => {
            eprintln!("Sorry, the quiz could not start: {err}");
            std::process::exit(1);
        }
        result => result.map_err(Into::into),
    }
}

fn play<C: Console + ?Sized>(
    cli: &Cli,
    config: &Config,
    catalog: &Catalog,
    console: &mut C,
) -> Result<(), QuizError> {
    console.clear()?;
    console.show(&ui::banner("Welcome to Trivia!"))?;

    let player = match cli.name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => read_non_empty(console, "What is your name?: ")?,
    };
    console.show(&format!("\nHello, {player}!"))?;

    let category = choose_category(cli, catalog, console)?;
    let difficulty = choose_difficulty(cli, catalog, console)?;

    let session = SessionConfig {
        player_name: player,
        category: category.map(|c| c.slug().to_string()),
        difficulty: difficulty.map(|d| d.as_param()),
        number_of_questions: config.number_of_questions,
        shuffle_questions: config.shuffle_questions,
    };
    let source = HttpQuestionSource::new(&config.api_url, &config.region, config.timeout())?;

    console.show("\nFetching questions...")?;
    let mut quiz = Quiz::populate(session, &source)?;
    console.clear()?;
    let report = quiz.run(console, &FixedPacer::new(config.pacing()))?;

    console.show(&ui::results(&report))?;
    offer_save(&report, console, &config.results_dir())?;
    Ok(())
}

fn choose_category<C: Console + ?Sized>(
    cli: &Cli,
    catalog: &Catalog,
    console: &mut C,
) -> Result<Option<Category>, QuizError> {
    if cli.any_category {
        return Ok(None);
    }
    if let Some(category) = cli.category {
        return Ok(Some(category));
    }

    console.clear()?;
    console.show("What kind of quiz would you like to take today?\n")?;
    console.show(&ui::category_menu(catalog))?;
    let choice = read_choice(
        console,
        "\nPlease enter the number of the category you'd like to play: ",
        catalog.category_choices(),
    )?;
    let category = catalog.category(choice);
    console.show(&format!(
        "\nYou have chosen: {}.\n",
        category.map_or_else(|| "Any category".to_string(), |c| c.to_string())
    ))?;
    Ok(category)
}

fn choose_difficulty<C: Console + ?Sized>(
    cli: &Cli,
    catalog: &Catalog,
    console: &mut C,
) -> Result<Option<Difficulty>, QuizError> {
    if cli.any_difficulty {
        return Ok(None);
    }
    if let Some(difficulty) = cli.difficulty {
        return Ok(Some(difficulty));
    }

    console.clear()?;
    console.show(&ui::difficulty_menu(catalog))?;
    let choice = read_choice(
        console,
        "Please choose a difficulty: ",
        catalog.difficulty_choices(),
    )?;
    Ok(catalog.difficulty(choice))
}
