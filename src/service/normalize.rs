//! Identifier normalization
//!
//! Maps freeform airline codes, aircraft types and routes onto the canonical
//! keys used by the rule catalog. Every function is total and idempotent:
//! unrecognised input comes back cleaned rather than rejected.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::{CanonicalIdentifiers, RawIdentifiers};

/// Canonical aircraft families
pub const KNOWN_AIRCRAFT: &[&str] = &[
    "A330-200",
    "A330-300",
    "A330-900",
    "A350-900",
    "A350-1000",
    "A380",
    "777-200ER",
    "777-300ER",
    "787-8",
    "787-9",
    "787-10",
];

/// Short type codes that denote exactly one family. Checked before any rewrite.
const AIRCRAFT_ALIASES: &[(&str, &str)] = &[
    ("359", "A350-900"),
    ("A359", "A350-900"),
    ("351", "A350-1000"),
    ("A351", "A350-1000"),
    ("35K", "A350-1000"),
    ("A35K", "A350-1000"),
    ("77W", "777-300ER"),
    ("773", "777-300ER"),
    ("789", "787-9"),
    ("7810", "787-10"),
    ("339", "A330-900"),
    ("A339", "A330-900"),
    ("380", "A380"),
    ("388", "A380"),
];

static MANUFACTURER_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:AIRBUS|BOEING)\s+").expect("valid manufacturer regex"));

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_-]+").expect("valid separator regex"));

// "B787-9" and "B77W" carry a stray Boeing letter in front of the numeric code
static BOEING_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^B-?(7)").expect("valid boeing prefix regex"));

static ROUTE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{3}-[A-Z]{3}$").expect("valid route regex"));

// One anchored pattern per family accepting a hyphen (or none) between any two
// characters, so "A350900", "A3509-00" and "A350-900" all converge
static FAMILY_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    KNOWN_AIRCRAFT
        .iter()
        .map(|family| {
            let body = family
                .chars()
                .filter(|c| *c != '-')
                .map(|c| regex::escape(&c.to_string()))
                .collect::<Vec<_>>()
                .join("-?");
            let pattern = Regex::new(&format!("^{body}$")).expect("valid family regex");
            (pattern, *family)
        })
        .collect()
});

/// Trim and uppercase an airline code. Names are never folded into codes.
pub fn normalize_airline_code(text: &str) -> String {
    text.trim().to_uppercase()
}

/// Trim, uppercase and strip all whitespace. Shape is not checked here.
pub fn normalize_route(text: &str) -> String {
    text.trim()
        .to_uppercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// True iff the route is exactly three letters, a hyphen, three letters
pub fn is_valid_route(route: &str) -> bool {
    ROUTE_SHAPE.is_match(route)
}

/// True iff the label is one of the canonical families
pub fn is_known_aircraft(label: &str) -> bool {
    KNOWN_AIRCRAFT.contains(&label)
}

/// Canonicalize an aircraft type string
pub fn normalize_aircraft(text: &str) -> String {
    let upper = text.trim().to_uppercase();
    let stripped = MANUFACTURER_PREFIX.replace(&upper, "");
    let cleaned = SEPARATORS.replace_all(&stripped, "-").into_owned();

    if let Some(family) = lookup_alias(&cleaned) {
        return family.to_string();
    }

    let cleaned = BOEING_LETTER.replace(&cleaned, "$1").into_owned();
    if let Some(family) = lookup_alias(&cleaned) {
        return family.to_string();
    }

    if let Some((_, family)) = FAMILY_PATTERNS
        .iter()
        .find(|(pattern, _)| pattern.is_match(&cleaned))
    {
        return family.to_string();
    }

    if cleaned.starts_with("A380") {
        return "A380".to_string();
    }

    cleaned
}

fn lookup_alias(code: &str) -> Option<&'static str> {
    AIRCRAFT_ALIASES
        .iter()
        .find(|(alias, _)| *alias == code)
        .map(|(_, family)| *family)
}

/// Normalize a set of raw identifiers in one call
pub fn normalize_identifiers(raw: &RawIdentifiers) -> CanonicalIdentifiers {
    let airline = normalize_airline_code(&raw.airline);
    let aircraft = normalize_aircraft(&raw.aircraft);
    let route = normalize_route(&raw.route);

    CanonicalIdentifiers {
        route_valid: is_valid_route(&route),
        aircraft_known: is_known_aircraft(&aircraft),
        airline,
        aircraft,
        route,
    }
}
