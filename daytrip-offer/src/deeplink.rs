use chrono::NaiveDate;

/// Google Flights round-trip search for the same day in both directions.
pub fn google_flights_link(origin: &str, destination: &str, date: NaiveDate) -> String {
    let day = date.format("%Y-%m-%d");
    format!(
        "https://www.google.com/travel/flights?hl=en#flt={o}.{d}.{day}*{d}.{o}.{day}",
        o = origin,
        d = destination,
        day = day,
    )
}
