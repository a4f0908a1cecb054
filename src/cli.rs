use clap::{Parser, Subcommand};
use inquire::{Select, Text};

use crate::models::event::EventDraft;
use crate::models::location::locations;
use crate::service::display_service::render_schedule;
use crate::service::events_service::{EventsApi, HttpEventsService};
use crate::service::schedule_service::LocationFilter;
use crate::service::submit_flow::{refresh_events, submit_event};
use crate::state::ScheduleState;

#[derive(Parser)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the schedule, optionally restricted to one location id.
    Events {
        #[arg(long)]
        location: Option<i64>,
    },
    /// List the known venues.
    Locations {},
    /// Create an event from arguments.
    Create {
        location_id: i64,
        name: String,
        date: String,
        start_time: String,
        end_time: String,
        #[arg(default_value = "")]
        notes: String,
    },
    /// Create an event through interactive prompts.
    CreatePrompt {},
}

pub async fn cli(base_url: String) {
    // Fine to panic here
    let cli = Cli::parse();
    let api = HttpEventsService::new(base_url);
    match &cli.command {
        Commands::Events { location } => {
            let filter = match location {
                Some(id) => LocationFilter::Location(*id),
                None => LocationFilter::All,
            };
            show_schedule(&api, filter).await;
        }
        Commands::Locations {} => {
            for location in locations() {
                println!("{:>3}  {:<30} {}", location.id, location.name, location.address);
            }
        }
        Commands::Create {
            location_id,
            name,
            date,
            start_time,
            end_time,
            notes,
        } => {
            let draft = EventDraft {
                location_id: *location_id,
                event_name: name.clone(),
                date: date.clone(),
                start_time: start_time.clone(),
                end_time: end_time.clone(),
                notes: notes.clone(),
            };
            create_and_show(&api, draft).await;
        }
        Commands::CreatePrompt {} => match prompt_event_draft() {
            Ok(draft) => create_and_show(&api, draft).await,
            Err(e) => println!("Failed to read event details: {}", e),
        },
    }
}

async fn show_schedule<A: EventsApi + ?Sized>(api: &A, filter: LocationFilter) {
    let mut state = ScheduleState::new();
    state.filter = filter;
    let state = refresh_events(api, &state).await;
    println!("{}", render_schedule(&state.visible_groups()));
}

async fn create_and_show<A: EventsApi + ?Sized>(api: &A, draft: EventDraft) {
    let location_id = draft.location_id;
    let mut state = submit_event(api, &ScheduleState::new(), draft).await;
    state.filter = LocationFilter::Location(location_id);
    println!("{}", render_schedule(&state.visible_groups()));
}

/// Interactive version of the create-event form: pick a venue from the
/// static table, then fill in the remaining fields.
pub fn prompt_event_draft() -> Result<EventDraft, Box<dyn std::error::Error>> {
    let venue = Select::new("Location", locations()).prompt()?;
    let name = Text::new("Event name").prompt()?;
    let date = Text::new("Date (YYYY-MM-DD)").prompt()?;
    let start_time = Text::new("Start time").prompt()?;
    let end_time = Text::new("End time").prompt()?;
    let notes = Text::new("Notes").with_default("").prompt()?;

    Ok(EventDraft {
        location_id: venue.id,
        event_name: name,
        date,
        start_time,
        end_time,
        notes,
    })
}
