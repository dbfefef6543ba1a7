// --- File: crates/agendly_slots/src/weekday.rs ---
//! Weekday-name resolution over a fixed bidirectional table.
//!
//! Availability records name their weekday in whatever spelling the editor
//! used: English or Spanish, full or abbreviated, with or without accents
//! ("Tuesday", "Martes", "Mié", "mie"). Matching is exact against this table
//! after case and accent folding; there is deliberately no substring or
//! prefix matching.

use chrono::Weekday;

struct WeekdayNames {
    day: Weekday,
    names: &'static [&'static str],
}

const WEEKDAY_NAMES: [WeekdayNames; 7] = [
    WeekdayNames {
        day: Weekday::Mon,
        names: &["monday", "mon", "lunes", "lun"],
    },
    WeekdayNames {
        day: Weekday::Tue,
        names: &["tuesday", "tue", "martes", "mar"],
    },
    WeekdayNames {
        day: Weekday::Wed,
        names: &["wednesday", "wed", "miercoles", "mie"],
    },
    WeekdayNames {
        day: Weekday::Thu,
        names: &["thursday", "thu", "jueves", "jue"],
    },
    WeekdayNames {
        day: Weekday::Fri,
        names: &["friday", "fri", "viernes", "vie"],
    },
    WeekdayNames {
        day: Weekday::Sat,
        names: &["saturday", "sat", "sabado", "sab"],
    },
    WeekdayNames {
        day: Weekday::Sun,
        names: &["sunday", "sun", "domingo", "dom"],
    },
];

/// Lowercase and strip the accents that occur in Spanish weekday names, so
/// "Mié" and "mie" fold to the same key.
fn fold(name: &str) -> String {
    name.trim()
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' => 'a',
            'é' => 'e',
            'í' => 'i',
            'ó' => 'o',
            'ú' => 'u',
            other => other,
        })
        .collect()
}

/// Resolve a localized or canonical weekday spelling. `None` for anything not
/// in the table.
pub fn parse_weekday(name: &str) -> Option<Weekday> {
    let needle = fold(name);
    WEEKDAY_NAMES
        .iter()
        .find(|entry| entry.names.contains(&needle.as_str()))
        .map(|entry| entry.day)
}

/// Canonical English name, capitalized.
pub fn english_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Canonical Spanish name, capitalized and accented.
pub fn spanish_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Lunes",
        Weekday::Tue => "Martes",
        Weekday::Wed => "Miércoles",
        Weekday::Thu => "Jueves",
        Weekday::Fri => "Viernes",
        Weekday::Sat => "Sábado",
        Weekday::Sun => "Domingo",
    }
}
