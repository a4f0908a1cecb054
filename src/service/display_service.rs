use chrono::NaiveDate;

use crate::service::schedule_service::DayGroup;

/// "2025-08-09" becomes "Sat, Aug 9, 2025". Anything that does not parse as
/// an ISO date is shown as-is.
pub fn format_date_label(iso_date: &str) -> String {
    match NaiveDate::parse_from_str(iso_date, "%Y-%m-%d") {
        Ok(date) => date.format("%a, %b %-d, %Y").to_string(),
        Err(_) => iso_date.to_string(),
    }
}

/// Plain-text rendering of the projected schedule, one uppercased date
/// heading per group, events listed underneath.
pub fn render_schedule(groups: &[DayGroup]) -> String {
    if groups.is_empty() {
        return "No events.".to_string();
    }

    let mut out = String::new();
    for group in groups {
        out.push_str(&format_date_label(&group.date).to_uppercase());
        out.push('\n');
        for event in &group.events {
            out.push_str(&format!("  {}\n", event.name));
            out.push_str(&format!("    {} - {}\n", event.start_time, event.end_time));
            if !event.notes.is_empty() {
                out.push_str(&format!("    {}\n", event.notes));
            }
        }
        out.push('\n');
    }
    out
}
