/// Trims and uppercases an airport code, keeping at most three characters.
pub fn normalize_iata(code: &str) -> String {
    code.trim().to_uppercase().chars().take(3).collect()
}

/// A route is searchable when both ends are distinct three-letter codes.
pub fn airports_sane(origin: &str, destination: &str) -> bool {
    origin != destination && origin.chars().count() == 3 && destination.chars().count() == 3
}
