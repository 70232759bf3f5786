//! Display metadata for sport tags.

/// How a renderer should present a sport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SportInfo {
    pub symbol: &'static str,
    /// Hex color, e.g. "#10B981"
    pub color: &'static str,
    pub name: String,
}

static KNOWN: [(&str, &str, &str, &str); 5] = [
    ("football", "⚽", "#10B981", "Football"),
    ("basketball", "🏀", "#F97316", "Basketball"),
    ("hockey", "🏒", "#3B82F6", "Hockey"),
    ("volleyball", "🏐", "#EC4899", "Volleyball"),
    ("tennis", "🎾", "#EAB308", "Tennis"),
];

const FALLBACK_SYMBOL: &str = "•";
const FALLBACK_COLOR: &str = "#6B7280";

/// Sports offered when adding an event.
pub fn known_sports() -> impl Iterator<Item = &'static str> {
    KNOWN.iter().map(|(tag, ..)| *tag)
}

pub fn is_known(sport: &str) -> bool {
    KNOWN.iter().any(|(tag, ..)| *tag == sport)
}

/// Metadata for `sport`. Unknown tags get a neutral symbol and color and a
/// capitalized name rather than being hidden.
pub fn sport_info(sport: &str) -> SportInfo {
    match KNOWN.iter().find(|(tag, ..)| *tag == sport) {
        Some(&(_, symbol, color, name)) => SportInfo {
            symbol,
            color,
            name: name.to_string(),
        },
        None => SportInfo {
            symbol: FALLBACK_SYMBOL,
            color: FALLBACK_COLOR,
            name: capitalize(sport),
        },
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
