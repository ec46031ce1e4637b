//! Built-in seed data: well-known computing terms and when they appeared.

/// A seed entry: term, year introduced, period-appropriate replacement.
pub type EraTerm = (&'static str, i32, Option<&'static str>);

/// Well-known technology terms with their introduction years.
pub static ERA_TERMS: &[EraTerm] = &[
    // Components
    ("transistor", 1947, Some("vacuum tube")),
    ("integrated circuit", 1958, Some("discrete circuit")),
    ("microprocessor", 1971, Some("logic board")),
    ("hard drive", 1956, Some("magnetic drum")),
    ("floppy disk", 1971, Some("punched card")),
    ("compact disc", 1982, Some("magnetic tape")),
    ("DVD", 1995, Some("videotape")),
    ("USB", 1996, Some("serial port")),
    // Machines
    ("personal computer", 1975, Some("minicomputer")),
    ("laptop", 1981, Some("portable terminal")),
    ("smartphone", 2007, Some("telephone")),
    ("smartwatch", 2013, Some("wristwatch")),
    ("touchscreen", 1965, None),
    // Software
    ("artificial intelligence", 1956, Some("thinking machine")),
    ("spreadsheet", 1979, Some("ledger")),
    ("word processor", 1976, Some("typewriter")),
    ("web browser", 1990, Some("terminal")),
    ("search engine", 1993, Some("card catalog")),
    ("app store", 2008, None),
    ("cloud computing", 2006, Some("time-sharing")),
    // Networks
    ("modem", 1958, None),
    ("email", 1971, Some("memo")),
    ("internet", 1990, Some("ARPANET")),
    ("world wide web", 1991, Some("ARPANET")),
    ("Wi-Fi", 1997, Some("cable")),
    ("Bluetooth", 1999, None),
    ("GPS", 1995, Some("compass")),
    ("text message", 1992, Some("telegram")),
    ("social media", 2004, Some("bulletin board")),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_terms_are_unique() {
        let keys: HashSet<_> = ERA_TERMS.iter().map(|(t, _, _)| t.to_lowercase()).collect();
        assert_eq!(keys.len(), ERA_TERMS.len());
    }

    #[test]
    fn test_seed_terms_are_not_blank() {
        for (term, _, replacement) in ERA_TERMS {
            assert!(!term.trim().is_empty());
            if let Some(r) = replacement {
                assert!(!r.trim().is_empty(), "blank replacement for {}", term);
            }
        }
    }
}
