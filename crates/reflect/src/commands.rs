use std::io::BufRead;
use std::path::Path;
use std::sync::Arc;

use clap::ArgMatches;
use serde::Serialize;
use tracing::{error, info, warn};

use reflect_core::collage::{PostJournal, SLOT_COUNT};
use reflect_core::config::ReflectConfig;
use reflect_core::errors::ReflectError;
use reflect_core::events;
use reflect_core::state::{Command, Event, Store};
use reflect_core::throw::UploadBin;
use reflect_core::{
    Catalog, CollageSession, ImageRef, LandingView, NavigationSink, Router, Screen, Settlement,
    SubmissionState, ThrowSession,
};

/// Load configuration with warning on errors.
///
/// Falls back to defaults if config loading fails, but notifies the user via:
/// - stderr message for immediate visibility
/// - structured log event `cli.config.load_failed` for debugging
fn load_config_with_warning() -> ReflectConfig {
    match ReflectConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.reflect/config.toml and ./.reflect/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            ReflectConfig::default()
        }
    }
}

pub async fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    let result = match matches.subcommand() {
        Some(("landing", sub_matches)) => handle_landing_command(sub_matches),
        Some(("catalog", sub_matches)) => handle_catalog_command(sub_matches),
        Some(("collage", sub_matches)) => handle_collage_command(sub_matches).await,
        Some(("replay", sub_matches)) => handle_replay_command(sub_matches).await,
        Some(("throw", sub_matches)) => handle_throw_command(sub_matches).await,
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    };

    if let Err(e) = &result {
        events::log_app_error(e.as_ref());
    }
    events::log_app_shutdown();
    result
}

fn handle_landing_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let view = LandingView::today();

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("{}", view.date_label);
    println!();
    println!("{}", view.headline);
    println!("{}", view.tagline);
    println!();
    for action in &view.actions {
        println!("  {:<16} reflect {}", action.label, command_for(action.destination));
    }
    Ok(())
}

fn command_for(screen: Screen) -> &'static str {
    match screen {
        Screen::Landing => "landing",
        Screen::Throw => "throw <PATH>",
        Screen::Collage => "collage --slot 1=1",
    }
}

#[derive(Serialize)]
struct CatalogEntry<'a> {
    number: usize,
    label: &'a str,
    image: &'a ImageRef,
}

fn handle_catalog_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_with_warning();
    let catalog = config.catalog()?;

    let entries: Vec<CatalogEntry> = catalog
        .images()
        .iter()
        .enumerate()
        .map(|(position, image)| CatalogEntry {
            number: position + 1,
            label: Catalog::label(image),
            image,
        })
        .collect();

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for entry in &entries {
        println!("{:>3}  {:<12} {}", entry.number, entry.label, entry.image);
    }
    Ok(())
}

/// One `--slot SLOT=IMAGE` argument, parsed.
#[derive(Debug, PartialEq, Eq)]
enum SlotChoice {
    /// 0-based catalog position, picked through the picker.
    Catalog { slot: usize, position: usize },
    /// Image reference used verbatim.
    Image { slot: usize, image: String },
}

fn parse_slot_choice(value: &str) -> Result<SlotChoice, String> {
    let (slot, image) = value
        .split_once('=')
        .ok_or_else(|| format!("Invalid --slot '{}': expected SLOT=IMAGE", value))?;

    let slot = match slot.trim().parse::<usize>() {
        Ok(n) if (1..=SLOT_COUNT).contains(&n) => n - 1,
        _ => {
            return Err(format!(
                "Invalid slot '{}': expected a number from 1 to {}",
                slot, SLOT_COUNT
            ));
        }
    };

    match image.trim().parse::<usize>() {
        Ok(0) => Err("Catalog numbers start at 1".to_string()),
        Ok(number) => Ok(SlotChoice::Catalog {
            slot,
            position: number - 1,
        }),
        Err(_) => Ok(SlotChoice::Image {
            slot,
            image: image.to_string(),
        }),
    }
}

fn new_collage_session(
    config: &ReflectConfig,
    router: Arc<Router>,
) -> Result<CollageSession, Box<dyn std::error::Error>> {
    let journal = PostJournal::with_delay(config.simulated_post_delay());
    router.navigate(Screen::Collage);
    Ok(CollageSession::new(
        config.catalog()?,
        Arc::new(journal),
        router,
    ))
}

/// Wait for the outstanding post, bounded by `[submission] settle_timeout_secs`.
async fn settle(
    session: &mut CollageSession,
    config: &ReflectConfig,
) -> Result<Settlement, Box<dyn std::error::Error>> {
    let settlement = match config.settle_timeout() {
        Some(timeout) => session.settle_within(timeout).await,
        None => session.settle().await,
    };

    if settlement == Settlement::Pending {
        return Err(format!(
            "Timed out after {}s waiting for the collage to be saved",
            config.submission.settle_timeout_secs.unwrap_or_default()
        )
        .into());
    }
    Ok(settlement)
}

#[derive(Serialize)]
struct CollageReport {
    view: reflect_core::CollageView,
    events: Vec<Event>,
    screen: Screen,
}

async fn handle_collage_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_with_warning();
    let router = Arc::new(Router::new());
    let mut session = new_collage_session(&config, router.clone())?;
    let mut events = Vec::new();

    let choices = matches
        .get_many::<String>("slot")
        .into_iter()
        .flatten()
        .map(|value| parse_slot_choice(value))
        .collect::<Result<Vec<_>, _>>()?;

    for choice in choices {
        match choice {
            SlotChoice::Catalog { slot, position } => {
                events.extend(session.open_picker(slot)?);
                events.extend(session.choose_catalog_image(position)?);
            }
            SlotChoice::Image { slot, image } => {
                events.extend(session.select_slot_image(slot, ImageRef::new(image)?)?);
            }
        }
    }

    if let Some(note) = matches.get_one::<String>("note") {
        events.extend(session.set_note(note.as_str()));
    }

    events.extend(session.submit());
    if session.submission_state() == &SubmissionState::InFlight {
        let settlement = settle(&mut session, &config).await?;
        events.extend(Event::from_settlement(&settlement));
    }

    let view = session.view();
    let saved = matches!(session.submission_state(), SubmissionState::Succeeded(_));
    events.extend(session.acknowledge());

    info!(
        event = "cli.collage_completed",
        saved = saved,
        screen = %router.current()
    );

    if matches.get_flag("json") {
        let report = CollageReport {
            view,
            events,
            screen: router.current(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_collage(&view);
        if let Some(dialog) = &view.status_dialog {
            println!();
            println!("{}", dialog.title);
            println!("{}", dialog.description);
        }
        if saved {
            println!("Returned to: {}", router.current());
        }
    }

    if saved {
        Ok(())
    } else {
        Err("Collage was not saved".into())
    }
}

fn print_collage(view: &reflect_core::CollageView) {
    for slot in &view.slots {
        println!("Slot {}: {}", slot.index + 1, slot.label());
    }
    if !view.note.is_empty() {
        println!("Note: {}", view.note);
    }
}

#[derive(Serialize)]
struct ReplayError<'a> {
    line: usize,
    error: &'a str,
    message: String,
}

async fn handle_replay_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let file = matches
        .get_one::<String>("file")
        .ok_or("File argument is required")?;

    let reader: Box<dyn BufRead> = if file == "-" {
        Box::new(std::io::stdin().lock())
    } else {
        Box::new(std::io::BufReader::new(std::fs::File::open(Path::new(
            file,
        ))?))
    };

    let config = load_config_with_warning();
    let router = Arc::new(Router::new());
    let mut session = new_collage_session(&config, router)?;
    let mut failures = 0;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        let cmd: Command = serde_json::from_str(&line)
            .map_err(|e| format!("Line {}: invalid command: {}", line_number, e))?;
        let submitted = cmd == Command::Submit;

        match session.dispatch(cmd) {
            Ok(events) => print_events(&events)?,
            Err(e) => {
                failures += 1;
                warn!(
                    event = "cli.replay.command_failed",
                    line = line_number,
                    error = %e
                );
                let report = ReplayError {
                    line: line_number,
                    error: e.error_code(),
                    message: e.to_string(),
                };
                println!("{}", serde_json::to_string(&report)?);
            }
        }

        if submitted && session.submission_state() == &SubmissionState::InFlight {
            let settlement = settle(&mut session, &config).await?;
            print_events(&Event::from_settlement(&settlement))?;
        }
    }

    info!(event = "cli.replay_completed", failures = failures);

    if failures > 0 {
        return Err(format!("{} command(s) failed", failures).into());
    }
    Ok(())
}

fn print_events(events: &[Event]) -> Result<(), serde_json::Error> {
    for event in events {
        println!("{}", serde_json::to_string(event)?);
    }
    Ok(())
}

async fn handle_throw_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let path = matches
        .get_one::<String>("path")
        .ok_or("Path argument is required")?;

    let config = load_config_with_warning();
    let router = Arc::new(Router::new());
    router.navigate(Screen::Throw);

    let bin = UploadBin::with_delay(config.simulated_post_delay());
    let mut throw = ThrowSession::new(Arc::new(bin), router.clone());

    throw.select_file(path)?;
    let receipt = throw.upload().await?;

    println!("Photo thrown away. Let others embrace it.");
    println!("Upload: {}", receipt.upload_id);
    println!("Returned to: {}", router.current());
    Ok(())
}
