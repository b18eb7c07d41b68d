//! Server-side HTML for the search form, the results list and the shared
//! page chrome.

use chrono::NaiveDate;
use daytrip_core::{FlightSegment, SearchParams, TripOption};

use crate::app_config::BrandConfig;

/// Escapes text for use in element content and quoted attribute values.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn format_duration(minutes: i64) -> String {
    format!("{}h {:02}m", minutes / 60, minutes % 60)
}

/// Wraps `body` in the site chrome. `body` must already be escaped.
pub fn layout(brand: &BrandConfig, title: &str, body: &str) -> String {
    format!(
        r##"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <meta name="theme-color" content="#0f4c81">
  <title>{title} · {name}</title>
  <link rel="manifest" href="/manifest.webmanifest">
  <link rel="icon" href="/logo.svg" type="image/svg+xml">
</head>
<body>
  <header>
    <a href="/" class="brand"><img src="/logo.svg" alt="" width="32" height="32"> {name}</a>
    <p class="tagline">{tagline}</p>
    <nav>
      <a href="/how-it-works">How it works</a>
      <a href="/pricing">Pricing</a>
      <a href="/faq">FAQ</a>
      <a href="/about">About</a>
      <a href="/contact">Contact</a>
    </nav>
  </header>
  <main>
{body}
  </main>
  <footer>
    <p>&copy; {name} · <a href="mailto:{email}">{email}</a></p>
  </footer>
  <script>
    if ("serviceWorker" in navigator) {{
      navigator.serviceWorker.register("/sw.js");
    }}
  </script>
</body>
</html>
"##,
        title = escape(title),
        name = escape(&brand.name),
        tagline = escape(&brand.tagline),
        email = escape(&brand.email),
        body = body,
    )
}

pub fn index_page(brand: &BrandConfig, default_date: NaiveDate) -> String {
    let body = format!(
        r#"    <h1>Fly there in the morning, home by night</h1>
    <form action="/search" method="get" class="search">
      <label>From <input name="origin" maxlength="3" placeholder="SFO" required></label>
      <label>To <input name="destination" maxlength="3" placeholder="DTW" required></label>
      <label>Date <input type="date" name="trip_date" value="{date}"></label>
      <label><input type="checkbox" name="morning_arrival" value="true" checked> Arrive in the morning</label>
      <label><input type="checkbox" name="evening_departure" value="true" checked> Leave in the evening</label>
      <label>Max price <input type="number" name="max_price" min="0" step="1"></label>
      <button type="submit">Find day trips</button>
    </form>"#,
        date = default_date.format("%Y-%m-%d"),
    );
    layout(brand, "Day-trip flight search", &body)
}

pub fn results_page(brand: &BrandConfig, params: &SearchParams, flights: &[TripOption]) -> String {
    let mut body = format!(
        "    <h1>{origin} &rarr; {destination} on {date}</h1>\n",
        origin = escape(&params.origin),
        destination = escape(&params.destination),
        date = params.trip_date.format("%Y-%m-%d"),
    );
    body.push_str(&filter_summary(params));

    if flights.is_empty() {
        body.push_str("    <p class=\"empty\">No day trips match your search. Try another date or loosen the filters.</p>\n");
    } else {
        body.push_str("    <ol class=\"results\">\n");
        for flight in flights {
            body.push_str(&trip_card(flight));
        }
        body.push_str("    </ol>\n");
    }
    body.push_str("    <p><a href=\"/\">New search</a></p>");

    layout(brand, "Results", &body)
}

pub fn not_found_page(brand: &BrandConfig) -> String {
    layout(
        brand,
        "Not found",
        "    <h1>Page not found</h1>\n    <p>That page took an earlier flight. <a href=\"/\">Back to search</a></p>",
    )
}

fn filter_summary(params: &SearchParams) -> String {
    let mut filters = Vec::new();
    if params.morning_arrival {
        filters.push("morning arrival".to_string());
    }
    if params.evening_departure {
        filters.push("evening departure".to_string());
    }
    if let Some(max_price) = params.max_price {
        filters.push(format!("at most {}", max_price));
    }
    if filters.is_empty() {
        "    <p class=\"filters\">No filters applied.</p>\n".to_string()
    } else {
        format!("    <p class=\"filters\">Filters: {}.</p>\n", filters.join(", "))
    }
}

fn trip_card(option: &TripOption) -> String {
    let tags: String = option
        .tags
        .iter()
        .map(|tag| format!("<span class=\"tag\">{}</span>", escape(tag)))
        .collect();

    format!(
        r#"      <li class="trip">
        <p class="price">{currency} {price} · {duration} in the air</p>
{outbound}
{inbound}
        <p class="tags">{tags}</p>
        <a href="{deeplink}" rel="noopener" target="_blank">Check on Google Flights</a>
      </li>
"#,
        currency = escape(&option.currency),
        price = option.price_total,
        duration = format_duration(option.total_duration_minutes),
        outbound = segment_line("Out", &option.outbound),
        inbound = segment_line("Back", &option.return_leg),
        tags = tags,
        deeplink = escape(&option.deeplink),
    )
}

fn segment_line(label: &str, segment: &FlightSegment) -> String {
    format!(
        "        <p class=\"segment\">{label}: {airline} {number} · {origin} {departs} &rarr; {destination} {arrives} ({duration})</p>",
        label = label,
        airline = escape(&segment.airline),
        number = escape(&segment.flight_number),
        origin = escape(&segment.origin),
        departs = segment.departs_at.format("%H:%M"),
        destination = escape(&segment.destination),
        arrives = segment.arrives_at.format("%H:%M"),
        duration = format_duration(segment.duration_minutes),
    )
}
