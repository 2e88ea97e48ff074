//! Distribution extension: one record per taxon and location, plus an
//! "after last observation" record for extinct taxa.

use serde::Serialize;

use super::vocab::Location;
use crate::parser::{Checklist, ChecklistRow};

const COUNTRY_CODE: &str = "BE";
const ESTABLISHMENT_MEANS: &str = "introduced";

/// Raw presence code meaning "present"
const PRESENT: &str = "X";
/// Raw presence code meaning "uncertain"
const UNCERTAIN: &str = "?";

/// Markers stripped from free-text years
const YEAR_MARKERS: [&str; 4] = ["?", "ca. ", "<", ">"];
/// Most-recent-record tokens meaning "still observed"
const ONGOING: [&str; 2] = ["Ann.", "N"];

/// Presence of a taxon at one location
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Present, and dates can be attributed to this location
    Single,
    /// Present in more than one region; dates are not attributable
    Multiple,
    Uncertain,
    Absent,
}

impl Presence {
    pub fn code(&self) -> &'static str {
        match self {
            Presence::Single => "S",
            Presence::Multiple => "M",
            Presence::Uncertain => "?",
            Presence::Absent => "NA",
        }
    }

    /// Occurrence status of the observed window; `None` for absent
    fn occurrence_status(&self) -> Option<OccurrenceStatus> {
        match self {
            Presence::Single | Presence::Multiple => Some(OccurrenceStatus::Present),
            Presence::Uncertain => Some(OccurrenceStatus::Uncertain),
            Presence::Absent => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OccurrenceStatus {
    Present,
    Absent,
    Uncertain,
}

impl OccurrenceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OccurrenceStatus::Present => "present",
            OccurrenceStatus::Absent => "absent",
            OccurrenceStatus::Uncertain => "presence uncertain",
        }
    }
}

/// Distribution extension record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionRecord {
    #[serde(rename = "taxonID")]
    pub taxon_id: String,
    #[serde(rename = "locationID")]
    pub location_id: &'static str,
    pub locality: &'static str,
    #[serde(rename = "countryCode")]
    pub country_code: &'static str,
    #[serde(rename = "occurrenceStatus")]
    pub occurrence_status: &'static str,
    #[serde(rename = "establishmentMeans")]
    pub establishment_means: &'static str,
    #[serde(rename = "eventDate")]
    pub event_date: String,
}

/// Classify one region given its own raw code and the codes of the two
/// other regions. Branch order matters: a lone `X` wins over everything.
pub fn classify_region(own: &str, others: [&str; 2]) -> Presence {
    if own == PRESENT && others.iter().all(|o| o.is_empty() || *o == UNCERTAIN) {
        Presence::Single
    } else if own == UNCERTAIN {
        Presence::Uncertain
    } else if own.is_empty() {
        Presence::Absent
    } else {
        Presence::Multiple
    }
}

/// National presence: any `X` wins, then any `?`
pub fn classify_belgium(codes: [&str; 3]) -> Presence {
    if codes.contains(&PRESENT) {
        Presence::Single
    } else if codes.contains(&UNCERTAIN) {
        Presence::Uncertain
    } else {
        Presence::Absent
    }
}

/// Presence at every location, in output order
pub fn classify(row: &ChecklistRow) -> [(Location, Presence); 4] {
    let fl = row.presence_flanders.as_str();
    let wa = row.presence_wallonia.as_str();
    let br = row.presence_brussels.as_str();

    [
        (Location::Belgium, classify_belgium([fl, wa, br])),
        (Location::Flanders, classify_region(fl, [wa, br])),
        (Location::Wallonia, classify_region(wa, [fl, br])),
        (Location::Brussels, classify_region(br, [fl, wa])),
    ]
}

/// Strip uncertainty markers from a free-text year
pub fn clean_year(raw: &str) -> String {
    let mut year = raw.to_string();
    for marker in YEAR_MARKERS {
        year = year.replace(marker, "");
    }
    year.trim().to_string()
}

/// Replace "still observed" tokens with the current year
pub fn resolve_end_year(cleaned: &str, current_year: i32) -> String {
    if ONGOING.iter().any(|token| *token == cleaned) {
        current_year.to_string()
    } else {
        cleaned.to_string()
    }
}

/// Combine first and most recent year into a single year or `start/end` interval
pub fn event_date(start: &str, end: &str) -> String {
    match (start.is_empty(), end.is_empty()) {
        (true, true) => String::new(),
        (true, false) => end.to_string(),
        (false, true) => start.to_string(),
        (false, false) if start == end => start.to_string(),
        (false, false) => format!("{}/{}", start, end),
    }
}

/// Status after the last observation, for extinct taxa only
fn after_last_observation_status(degree_of_naturalisation: &str) -> Option<OccurrenceStatus> {
    match degree_of_naturalisation {
        "Ext." => Some(OccurrenceStatus::Absent),
        "Ext./Cas." => Some(OccurrenceStatus::Present),
        _ => None,
    }
}

fn record(
    row: &ChecklistRow,
    location: Location,
    status: OccurrenceStatus,
    event_date: String,
) -> DistributionRecord {
    DistributionRecord {
        taxon_id: row.taxon_id.clone(),
        location_id: location.location_id(),
        locality: location.locality(),
        country_code: COUNTRY_CODE,
        occurrence_status: status.as_str(),
        establishment_means: ESTABLISHMENT_MEANS,
        event_date,
    }
}

/// Map the checklist to distribution records, sorted by `taxonID`.
/// Observed-window records come before after-last-observation records
/// of the same taxon.
pub fn map_distribution(checklist: &Checklist, current_year: i32) -> Vec<DistributionRecord> {
    let mut observed = Vec::new();
    let mut after_last = Vec::new();

    for row in &checklist.rows {
        let start = clean_year(&row.first_record);
        let end = resolve_end_year(&clean_year(&row.most_recent_record), current_year);
        let date = event_date(&start, &end);
        let extinct_status = after_last_observation_status(&row.degree_of_naturalisation);

        for (location, presence) in classify(row) {
            let Some(status) = presence.occurrence_status() else {
                continue;
            };
            let narrowed = presence == Presence::Single;

            let observed_date = if narrowed { date.clone() } else { String::new() };
            observed.push(record(row, location, status, observed_date));

            if let Some(after_status) = extinct_status {
                let after_date = if narrowed && !end.is_empty() {
                    format!("{}/{}", end, current_year)
                } else {
                    String::new()
                };
                after_last.push(record(row, location, after_status, after_date));
            }
        }
    }

    observed.extend(after_last);
    observed.sort_by(|a, b| a.taxon_id.cmp(&b.taxon_id));
    observed
}

#[cfg(test)]
mod tests {
    use super::*;

    const YEAR: i32 = 2024;

    fn row(name: &str, fl: &str, wa: &str, br: &str) -> ChecklistRow {
        ChecklistRow {
            taxon_id: format!("t:{}", name),
            scientific_name: name.to_string(),
            presence_flanders: fl.to_string(),
            presence_wallonia: wa.to_string(),
            presence_brussels: br.to_string(),
            ..Default::default()
        }
    }

    fn codes(row: &ChecklistRow) -> Vec<&'static str> {
        classify(row).iter().map(|(_, p)| p.code()).collect()
    }

    fn checklist(rows: Vec<ChecklistRow>) -> Checklist {
        Checklist {
            columns: vec![],
            rows,
        }
    }

    #[test]
    fn test_single_region() {
        // Belgium, Flanders, Wallonia, Brussels
        assert_eq!(codes(&row("a", "X", "", "")), vec!["S", "S", "NA", "NA"]);
    }

    #[test]
    fn test_multiple_regions() {
        assert_eq!(codes(&row("a", "X", "X", "")), vec!["S", "M", "M", "NA"]);
    }

    #[test]
    fn test_no_presence() {
        assert_eq!(codes(&row("a", "", "", "")), vec!["NA", "NA", "NA", "NA"]);
    }

    #[test]
    fn test_present_with_uncertain_elsewhere() {
        assert_eq!(codes(&row("a", "X", "?", "")), vec!["S", "S", "?", "NA"]);
    }

    #[test]
    fn test_only_uncertain() {
        assert_eq!(codes(&row("a", "?", "", "?")), vec!["?", "?", "NA", "?"]);
    }

    #[test]
    fn test_unknown_code_falls_through_to_multiple() {
        // Not X, not ?, not empty: last branch applies; Belgium sees no X or ?
        assert_eq!(codes(&row("a", "x", "", "")), vec!["NA", "M", "NA", "NA"]);
    }

    #[test]
    fn test_clean_year() {
        assert_eq!(clean_year("ca. 1850"), "1850");
        assert_eq!(clean_year("<1900"), "1900");
        assert_eq!(clean_year(">1950?"), "1950");
        assert_eq!(clean_year("Ann.?"), "Ann.");
        assert_eq!(clean_year(""), "");
    }

    #[test]
    fn test_resolve_end_year() {
        assert_eq!(resolve_end_year("Ann.", YEAR), "2024");
        assert_eq!(resolve_end_year("N", YEAR), "2024");
        assert_eq!(resolve_end_year("1999", YEAR), "1999");
        assert_eq!(resolve_end_year("", YEAR), "");
    }

    #[test]
    fn test_event_date() {
        assert_eq!(event_date("1950", "1950"), "1950");
        assert_eq!(event_date("1900", "1950"), "1900/1950");
        assert_eq!(event_date("", "2020"), "2020");
        assert_eq!(event_date("1890", ""), "1890");
        assert_eq!(event_date("", ""), "");
    }

    #[test]
    fn test_dates_only_on_single_presence() {
        let mut r = row("a", "X", "X", "");
        r.first_record = "1900".to_string();
        r.most_recent_record = "1950".to_string();

        let records = map_distribution(&checklist(vec![r]), YEAR);
        assert_eq!(records.len(), 3);

        assert_eq!(records[0].location_id, "ISO_3166-2:BE");
        assert_eq!(records[0].event_date, "1900/1950");
        assert_eq!(records[1].locality, "Flemish Region");
        assert_eq!(records[1].occurrence_status, "present");
        assert_eq!(records[1].event_date, "");
        assert_eq!(records[2].locality, "Walloon Region");
        assert_eq!(records[2].event_date, "");
    }

    #[test]
    fn test_uncertain_status() {
        let records = map_distribution(&checklist(vec![row("a", "", "", "?")]), YEAR);
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.occurrence_status == "presence uncertain"));
        assert!(records.iter().all(|r| r.event_date.is_empty()));
    }

    #[test]
    fn test_ongoing_end_year_uses_current_year() {
        let mut r = row("a", "", "X", "");
        r.first_record = "1998".to_string();
        r.most_recent_record = "Ann.".to_string();

        let records = map_distribution(&checklist(vec![r]), YEAR);
        assert_eq!(records[0].event_date, "1998/2024");
        assert_eq!(records[1].location_id, "ISO_3166-2:BE-WAL");
        assert_eq!(records[1].event_date, "1998/2024");
    }

    #[test]
    fn test_extinct_taxon_gets_after_last_observation_records() {
        let mut r = row("a", "X", "", "");
        r.first_record = "1880".to_string();
        r.most_recent_record = "1930".to_string();
        r.degree_of_naturalisation = "Ext.".to_string();

        let records = map_distribution(&checklist(vec![r]), YEAR);
        assert_eq!(records.len(), 4);

        let flanders: Vec<_> = records
            .iter()
            .filter(|r| r.location_id == "ISO_3166-2:BE-VLG")
            .collect();
        assert_eq!(flanders.len(), 2);
        assert_eq!(flanders[0].occurrence_status, "present");
        assert_eq!(flanders[0].event_date, "1880/1930");
        assert_eq!(flanders[1].occurrence_status, "absent");
        assert_eq!(flanders[1].event_date, "1930/2024");
    }

    #[test]
    fn test_extinct_casual_is_present_after_last_observation() {
        let mut r = row("a", "X", "X", "");
        r.most_recent_record = "1960".to_string();
        r.degree_of_naturalisation = "Ext./Cas.".to_string();

        let records = map_distribution(&checklist(vec![r]), YEAR);
        assert_eq!(records.len(), 6);

        let after: Vec<_> = records[3..].iter().collect();
        assert!(after.iter().all(|r| r.occurrence_status == "present"));
        // Only the national record is narrowed to a single location
        assert_eq!(after[0].event_date, "1960/2024");
        assert_eq!(after[1].event_date, "");
        assert_eq!(after[2].event_date, "");
    }

    #[test]
    fn test_extinct_without_end_year_has_no_after_date() {
        let mut r = row("a", "X", "", "");
        r.degree_of_naturalisation = "Ext.".to_string();

        let records = map_distribution(&checklist(vec![r]), YEAR);
        assert_eq!(records.len(), 4);
        assert!(records.iter().all(|r| r.event_date.is_empty()));
    }

    #[test]
    fn test_extinct_with_question_mark_is_not_split() {
        let mut r = row("a", "X", "", "");
        r.degree_of_naturalisation = "Ext.?".to_string();
        assert_eq!(map_distribution(&checklist(vec![r]), YEAR).len(), 2);
    }

    #[test]
    fn test_sorted_by_taxon_id_and_constants() {
        let records = map_distribution(
            &checklist(vec![row("b", "X", "", ""), row("a", "", "X", "")]),
            YEAR,
        );
        let ids: Vec<_> = records.iter().map(|r| r.taxon_id.as_str()).collect();
        assert_eq!(ids, vec!["t:a", "t:a", "t:b", "t:b"]);
        assert!(records.iter().all(|r| r.country_code == "BE"));
        assert!(records.iter().all(|r| r.establishment_means == "introduced"));
    }
}
