use chrono::{Local, NaiveDate, Utc};
use clap::Parser;
use emotiq::application::{
    init::init, ConfigService, EntryStore, SessionService, TerminalNotifier,
};
use emotiq::cli::{
    format_calendar, format_emotion_list, format_entry, format_entry_list, format_weekly_series,
    Cli, Commands,
};
use emotiq::domain::{preview_tone, DateRange, EmotionFilter, JournalDraft};
use emotiq::error::{EmotiqError, Result};
use emotiq::infrastructure::{Config, FileSystemStorage};
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Log to stderr, filtered by RUST_LOG (default: warnings and errors)
fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("emotiq=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Discover the journal and load its entries
fn open_store() -> Result<(EntryStore<FileSystemStorage>, Config)> {
    let storage = FileSystemStorage::discover()?;
    let config = storage.load_config()?;

    let mut store = EntryStore::new(storage)
        .with_seed_demo(config.seed_demo)
        .with_notifier(TerminalNotifier::new(config.notifications));
    store.initialize()?;

    Ok((store, config))
}

fn open_session() -> Result<SessionService<FileSystemStorage>> {
    let storage = FileSystemStorage::discover()?;
    let config = storage.load_config()?;
    Ok(SessionService::new(storage).with_notifier(TerminalNotifier::new(config.notifications)))
}

fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        println!("emotiq - Mood journal for the terminal");
        println!("Use --help for usage information");
        return Ok(());
    };

    match command {
        Commands::Init { path, no_demo } => init(&path, !no_demo),
        Commands::Log {
            mood,
            text,
            emotions,
            context,
        } => {
            let mut draft = JournalDraft::new(None);
            if let Some(mood) = mood {
                draft.set_mood(mood)?;
            }
            draft.set_text(text);
            for emotion in &emotions {
                draft.add_emotion(emotion);
            }
            for tag in &context {
                draft.add_context(tag);
            }
            if let Some(tone) = draft.tone() {
                println!("{}", tone.message());
            }

            let input = draft.into_entry()?;
            let (mut store, _) = open_store()?;
            let entry = store.append(input)?;
            print!("{}", format_entry(&entry));
            Ok(())
        }
        Commands::Quick { mood } => {
            let (mut store, _) = open_store()?;
            let entry = store.quick_check_in(mood)?;
            print!("{}", format_entry(&entry));
            Ok(())
        }
        Commands::Recent { count } => {
            let (store, config) = open_store()?;
            let count = count.unwrap_or(config.recent_count);
            println!("{}", format_entry_list(store.recent_entries(count)));
            Ok(())
        }
        Commands::History { emotion, range } => {
            let range: DateRange = range.parse()?;
            let (store, _) = open_store()?;
            let entries = store.filter(&EmotionFilter::parse(&emotion), range, Utc::now());
            println!("{}", format_entry_list(&entries));
            Ok(())
        }
        Commands::Week => {
            let (store, _) = open_store()?;
            print!(
                "{}",
                format_weekly_series(&store.weekly_series(Local::now().date_naive()))
            );
            Ok(())
        }
        Commands::Month { date } => {
            let reference = match date {
                Some(d) => NaiveDate::parse_from_str(&d, "%Y-%m-%d").map_err(|_| {
                    EmotiqError::Validation(format!(
                        "Invalid date: '{}'. Expected YYYY-MM-DD",
                        d
                    ))
                })?,
                None => Local::now().date_naive(),
            };
            let (store, _) = open_store()?;
            print!("{}", format_calendar(&store.monthly_calendar(reference)));
            Ok(())
        }
        Commands::Emotions => {
            let (store, _) = open_store()?;
            print!("{}", format_emotion_list(&store.emotion_index()));
            Ok(())
        }
        Commands::Preview { text } => {
            match preview_tone(&text) {
                Some(tone) => println!("{}", tone.message()),
                None => println!("Keep writing to see a tone hint"),
            }
            Ok(())
        }
        Commands::Dashboard => {
            let session = open_session()?;
            match session.current()? {
                Some(user) => println!("Hi {}", user.first_name()),
                None => println!("Hi there"),
            }

            let (store, config) = open_store()?;
            println!("\nThis week");
            print!(
                "{}",
                format_weekly_series(&store.weekly_series(Local::now().date_naive()))
            );
            println!("\nRecent entries");
            println!(
                "{}",
                format_entry_list(store.recent_entries(config.recent_count))
            );
            Ok(())
        }
        Commands::Signup {
            name,
            email,
            password,
        } => {
            open_session()?.signup(&name, &email, &password)?;
            Ok(())
        }
        Commands::Login { email, password } => {
            open_session()?.login(&email, &password)?;
            Ok(())
        }
        Commands::Logout => open_session()?.logout(),
        Commands::Whoami => {
            match open_session()?.current()? {
                Some(user) => println!("{} <{}>", user.name, user.email),
                None => println!("Not signed in"),
            }
            Ok(())
        }
        Commands::Profile { name, email } => {
            open_session()?.update_profile(&name, &email)?;
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(FileSystemStorage::discover()?);

            if list {
                let config = service.list()?;
                println!("recent_count = {}", config.recent_count);
                println!("seed_demo = {}", config.seed_demo);
                println!("notifications = {}", config.notifications);
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: emotiq config [--list | <key> [<value>]]");
                println!("Valid keys: recent_count, seed_demo, notifications");
                Ok(())
            }
        }
    }
}
