// crates/eventgeo-core/src/normalize.rs

//! # Location String Normalizer
//!
//! Turns scraped location text into a canonical `(city, state code)` pair.
//! The rules run in a fixed order and the first decisive rule wins:
//!
//! 1. [`venue_override`]: venues known only by name.
//! 2. [`parenthetical`]: `"Venue (City, ST)"` keeps the parenthesized part.
//! 3. [`strip_venue_suffix`]: `"City, ST / Venue"` keeps the part before `/`.
//! 4. [`split_city_state`]: split on commas into city and state token.
//! 5. [`expand_state`]: AP-style abbreviations and full names to codes.
//!
//! Every rule is pure; normalization does no I/O and no coordinate lookup.

use crate::model::NormalizedPlace;

/// Venues that never carry a city or state in the scraped text.
pub const VENUE_OVERRIDES: &[(&str, &str, &str)] = &[
    ("Boise State Esports Arena", "Boise", "ID"),
    ("ExtraMile Arena", "Boise", "ID"),
    ("Albertsons Stadium", "Boise", "ID"),
    ("Dona Larsen Park", "Boise", "ID"),
];

/// AP-style state abbreviations and full state names.
#[rustfmt::skip]
pub const STATE_ABBREVIATIONS: &[(&str, &str)] = &[
    ("Ala.", "AL"), ("Alabama", "AL"),
    ("Alaska", "AK"),
    ("Ariz.", "AZ"), ("Arizona", "AZ"),
    ("Ark.", "AR"), ("Arkansas", "AR"),
    ("Calif.", "CA"), ("California", "CA"),
    ("Colo.", "CO"), ("Colorado", "CO"),
    ("Conn.", "CT"), ("Connecticut", "CT"),
    ("Del.", "DE"), ("Delaware", "DE"),
    ("Fla.", "FL"), ("Florida", "FL"),
    ("Ga.", "GA"), ("Georgia", "GA"),
    ("Hawaii", "HI"),
    ("Idaho", "ID"),
    ("Ill.", "IL"), ("Illinois", "IL"),
    ("Ind.", "IN"), ("Indiana", "IN"),
    ("Iowa", "IA"),
    ("Kan.", "KS"), ("Kansas", "KS"),
    ("Ky.", "KY"), ("Kentucky", "KY"),
    ("La.", "LA"), ("Louisiana", "LA"),
    ("Maine", "ME"),
    ("Md.", "MD"), ("Maryland", "MD"),
    ("Mass.", "MA"), ("Massachusetts", "MA"),
    ("Mich.", "MI"), ("Michigan", "MI"),
    ("Minn.", "MN"), ("Minnesota", "MN"),
    ("Miss.", "MS"), ("Mississippi", "MS"),
    ("Mo.", "MO"), ("Missouri", "MO"),
    ("Mont.", "MT"), ("Montana", "MT"),
    ("Neb.", "NE"), ("Nebraska", "NE"),
    ("Nev.", "NV"), ("Nevada", "NV"),
    ("N.H.", "NH"), ("New Hampshire", "NH"),
    ("N.J.", "NJ"), ("New Jersey", "NJ"),
    ("N.M.", "NM"), ("New Mexico", "NM"),
    ("N.Y.", "NY"), ("New York", "NY"),
    ("N.C.", "NC"), ("North Carolina", "NC"),
    ("N.D.", "ND"), ("North Dakota", "ND"),
    ("Ohio", "OH"),
    ("Okla.", "OK"), ("Oklahoma", "OK"),
    ("Ore.", "OR"), ("Oregon", "OR"),
    ("Pa.", "PA"), ("Pennsylvania", "PA"),
    ("R.I.", "RI"), ("Rhode Island", "RI"),
    ("S.C.", "SC"), ("South Carolina", "SC"),
    ("S.D.", "SD"), ("South Dakota", "SD"),
    ("Tenn.", "TN"), ("Tennessee", "TN"),
    ("Texas", "TX"),
    ("Utah", "UT"),
    ("Vt.", "VT"), ("Vermont", "VT"),
    ("Va.", "VA"), ("Virginia", "VA"),
    ("Wash.", "WA"), ("Washington", "WA"),
    ("W.Va.", "WV"), ("West Virginia", "WV"),
    ("Wis.", "WI"), ("Wisconsin", "WI"),
    ("Wyo.", "WY"), ("Wyoming", "WY"),
];

/// Normalizes a raw location string.
///
/// Returns `None` when no city/state pair can be extracted.
///
/// ```rust
/// use eventgeo_core::normalize::normalize;
///
/// let p = normalize("Hinkle Fieldhouse (Indianapolis, Ind.)").unwrap();
/// assert_eq!((p.city.as_str(), p.state_code.as_str()), ("Indianapolis", "IN"));
///
/// let p = normalize("Boston, Mass. / Conte Forum").unwrap();
/// assert_eq!(p.to_string(), "Boston, MA");
///
/// assert!(normalize("TBA").is_none());
/// ```
pub fn normalize(raw: &str) -> Option<NormalizedPlace> {
    let location = raw.trim();
    if location.is_empty() {
        return None;
    }

    if let Some(place) = venue_override(location) {
        return Some(place);
    }

    let location = parenthetical(location).unwrap_or(location);
    let location = strip_venue_suffix(location);
    let (city, state_token) = split_city_state(location)?;
    let state = expand_state(state_token.split('/').next().unwrap_or("").trim());

    let city = city.trim();
    if city.is_empty() || state.is_empty() {
        return None;
    }
    Some(NormalizedPlace::new(city, state))
}

/// Exact-string venue lookup.
pub fn venue_override(location: &str) -> Option<NormalizedPlace> {
    VENUE_OVERRIDES
        .iter()
        .find(|(venue, _, _)| *venue == location)
        .map(|&(_, city, state)| NormalizedPlace::new(city, state))
}

/// Contents of the first non-empty `( ... )` group, trimmed.
pub fn parenthetical(location: &str) -> Option<&str> {
    let mut rest = location;
    while let Some(open) = rest.find('(') {
        let after = &rest[open + 1..];
        let close = after.find(')')?;
        if close > 0 {
            return Some(after[..close].trim());
        }
        rest = &after[close + 1..];
    }
    None
}

/// Keeps the first `/`-separated segment that still has a comma in it.
///
/// Text without any such segment is returned unchanged.
pub fn strip_venue_suffix(location: &str) -> &str {
    location
        .split('/')
        .find(|segment| segment.contains(','))
        .map(str::trim)
        .unwrap_or(location)
}

/// Splits `"City, State[, ...]"` into city and the second comma part.
pub fn split_city_state(location: &str) -> Option<(&str, &str)> {
    let mut parts = location.split(',');
    let city = parts.next()?.trim();
    let state = parts.next()?.trim();
    Some((city, state))
}

/// Maps a state token to its two-letter code. Unknown tokens pass through.
pub fn expand_state(token: &str) -> &str {
    STATE_ABBREVIATIONS
        .iter()
        .find(|(abbr, _)| *abbr == token)
        .map(|&(_, code)| code)
        .unwrap_or(token)
}
