use inquire::Select;

use crate::service::display_service::render_schedule;
use crate::service::events_service::HttpEventsService;
use crate::service::schedule_service::LocationFilter;
use crate::service::submit_flow::{refresh_events, submit_event};
use crate::state::{reduce, ScheduleMsg, ScheduleState};

const ACTION_FILTER: &str = "Filter by location";
const ACTION_ADD: &str = "Add event";
const ACTION_REFRESH: &str = "Refresh";
const ACTION_QUIT: &str = "Quit";

const ALL_LOCATIONS: &str = "All Locations";

/// Interactive schedule screen: show the projected groups, let the user
/// change the location filter, add events, or re-fetch. All state lives in
/// this loop and only changes through the reducer and the flow helpers.
pub async fn run_ui(base_url: String) {
    let api = HttpEventsService::new(base_url);
    let mut state = refresh_events(&api, &ScheduleState::new()).await;

    loop {
        println!("{}", render_schedule(&state.visible_groups()));

        let actions = vec![ACTION_FILTER, ACTION_ADD, ACTION_REFRESH, ACTION_QUIT];
        let picked = match Select::new("Action", actions).prompt() {
            Ok(action) => action,
            Err(_) => break,
        };

        if picked == ACTION_FILTER {
            if let Some(filter) = prompt_filter() {
                state = reduce(&state, ScheduleMsg::FilterChanged(filter));
            }
        } else if picked == ACTION_ADD {
            match crate::cli::prompt_event_draft() {
                Ok(draft) => {
                    state = submit_event(&api, &state, draft).await;
                }
                Err(_) => continue,
            }
        } else if picked == ACTION_REFRESH {
            state = refresh_events(&api, &state).await;
        } else {
            break;
        }
    }
}

fn prompt_filter() -> Option<LocationFilter> {
    let mut choices = vec![ALL_LOCATIONS.to_string()];
    let venues = crate::models::location::locations();
    choices.extend(venues.iter().map(|l| l.name.clone()));

    let picked = Select::new("Location", choices).prompt().ok()?;
    if picked == ALL_LOCATIONS {
        return Some(LocationFilter::All);
    }
    venues
        .iter()
        .find(|l| l.name == picked)
        .map(|l| LocationFilter::Location(l.id))
}
