//! Description extension: native range, pathway and invasion stage

use serde::Serialize;

use super::vocab::{lookup, INVASION_STAGE, NATIVE_RANGE, PATHWAY, PATHWAY_PREFIX};
use crate::parser::{Checklist, ChecklistRow};

/// Multi-value fields are split into at most this many components;
/// anything beyond stays merged in the last one.
const MAX_COMPONENTS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptionType {
    NativeRange,
    Pathway,
    InvasionStage,
}

impl DescriptionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DescriptionType::NativeRange => "native range",
            DescriptionType::Pathway => "pathway",
            DescriptionType::InvasionStage => "invasion stage",
        }
    }
}

/// Description extension record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescriptionRecord {
    #[serde(rename = "taxonID")]
    pub taxon_id: String,
    pub description: String,
    #[serde(rename = "type")]
    pub description_type: &'static str,
    pub language: &'static str,
}

/// Split on whitespace into at most `MAX_COMPONENTS` parts
pub fn split_whitespace_components(value: &str) -> Vec<String> {
    let collapsed = value.split_whitespace().collect::<Vec<_>>().join(" ");
    split_components(&collapsed, ' ')
}

/// Split on `delimiter` into at most `MAX_COMPONENTS` parts, dropping empty ones
pub fn split_components(value: &str, delimiter: char) -> Vec<String> {
    value
        .splitn(MAX_COMPONENTS, delimiter)
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn clean_native_range(token: &str) -> String {
    token.replace('?', "").trim().to_string()
}

pub fn clean_pathway(token: &str) -> String {
    token
        .replace('?', "")
        .replace('…', "")
        .replace("...", "")
        .to_lowercase()
        .trim()
        .to_string()
}

pub fn clean_invasion_stage(value: &str) -> String {
    value.trim().trim_end_matches('?').trim_end().to_string()
}

/// Map one origin token to its native range term, empty when unknown
pub fn map_native_range(token: &str) -> String {
    lookup(NATIVE_RANGE, &clean_native_range(token)).to_string()
}

/// Map one pathway token to a prefixed CBD pathway, empty when unknown or unclassified
pub fn map_pathway(token: &str) -> String {
    match lookup(PATHWAY, &clean_pathway(token)) {
        "" => String::new(),
        code => format!("{}{}", PATHWAY_PREFIX, code),
    }
}

pub fn map_invasion_stage(value: &str) -> String {
    lookup(INVASION_STAGE, &clean_invasion_stage(value)).to_string()
}

fn records_for(
    row: &ChecklistRow,
    components: Vec<String>,
    description_type: DescriptionType,
    map: fn(&str) -> String,
) -> Vec<DescriptionRecord> {
    components
        .into_iter()
        .filter_map(|token| {
            let description = map(&token);
            if description.is_empty() {
                tracing::debug!(
                    row = %row.id,
                    taxon_id = %row.taxon_id,
                    token = %token,
                    kind = description_type.as_str(),
                    "dropping unmapped token"
                );
                return None;
            }
            Some(DescriptionRecord {
                taxon_id: row.taxon_id.clone(),
                description,
                description_type: description_type.as_str(),
                language: "en",
            })
        })
        .collect()
}

pub fn native_range_records(row: &ChecklistRow) -> Vec<DescriptionRecord> {
    records_for(
        row,
        split_whitespace_components(&row.origin),
        DescriptionType::NativeRange,
        map_native_range,
    )
}

pub fn pathway_records(row: &ChecklistRow) -> Vec<DescriptionRecord> {
    records_for(
        row,
        split_components(&row.pathway, ','),
        DescriptionType::Pathway,
        map_pathway,
    )
}

pub fn invasion_stage_records(row: &ChecklistRow) -> Vec<DescriptionRecord> {
    let value = row.degree_of_naturalisation.trim();
    let components = if value.is_empty() {
        vec![]
    } else {
        vec![value.to_string()]
    };
    records_for(row, components, DescriptionType::InvasionStage, map_invasion_stage)
}

/// Union of native range, pathway and invasion stage records, sorted by `taxonID`
pub fn map_descriptions(checklist: &Checklist) -> Vec<DescriptionRecord> {
    let mut records: Vec<DescriptionRecord> = checklist
        .rows
        .iter()
        .flat_map(native_range_records)
        .collect();
    records.extend(checklist.rows.iter().flat_map(pathway_records));
    records.extend(checklist.rows.iter().flat_map(invasion_stage_records));

    records.sort_by(|a, b| a.taxon_id.cmp(&b.taxon_id));
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str) -> ChecklistRow {
        ChecklistRow {
            taxon_id: format!("t:{}", name),
            scientific_name: name.to_string(),
            ..Default::default()
        }
    }

    fn descriptions(records: &[DescriptionRecord]) -> Vec<&str> {
        records.iter().map(|r| r.description.as_str()).collect()
    }

    #[test]
    fn test_split_components_merges_extras() {
        assert_eq!(split_components("a,b", ','), vec!["a", "b"]);
        assert_eq!(split_components("a, b,c,d,e", ','), vec!["a", "b", "c", "d,e"]);
        assert_eq!(split_components("a,,b", ','), vec!["a", "b"]);
        assert!(split_components("", ',').is_empty());
    }

    #[test]
    fn test_split_whitespace_components() {
        assert_eq!(
            split_whitespace_components("E  AS-Te NAM"),
            vec!["E", "AS-Te", "NAM"]
        );
        assert_eq!(
            split_whitespace_components("E AS AF NAM SAM"),
            vec!["E", "AS", "AF", "NAM SAM"]
        );
    }

    #[test]
    fn test_native_range() {
        let mut r = row("a");
        r.origin = "E AS-Te NAM".to_string();

        let records = native_range_records(&r);
        assert_eq!(
            descriptions(&records),
            vec![
                "Europe (WGSRPD:1)",
                "temperate Asia (WGSRPD:3)",
                "Northern America (WGSRPD:7)"
            ]
        );
        assert!(records.iter().all(|r| r.description_type == "native range"));
    }

    #[test]
    fn test_native_range_strips_question_marks_and_drops_unknown() {
        let mut r = row("a");
        r.origin = "AF? Xyz Cult.".to_string();
        assert_eq!(
            descriptions(&native_range_records(&r)),
            vec!["Africa (WGSRPD:2)", "cultivated origin"]
        );
    }

    #[test]
    fn test_native_range_overflow_component_is_dropped() {
        let mut r = row("a");
        r.origin = "E AS AF NAM SAM".to_string();
        assert_eq!(native_range_records(&r).len(), 3);
    }

    #[test]
    fn test_pathway() {
        assert_eq!(map_pathway("Hort."), "cbd_2014_pathway:escape_horticulture");
        assert_eq!(map_pathway(" HORT.? "), "cbd_2014_pathway:escape_horticulture");
        assert_eq!(map_pathway("Wool…"), "cbd_2014_pathway:contaminant_on_animals");
        assert_eq!(map_pathway("grain..."), "cbd_2014_pathway:contaminant_seed");
        assert_eq!(map_pathway("Traffic"), "");
        assert_eq!(map_pathway("spaceships"), "");
    }

    #[test]
    fn test_pathway_records() {
        let mut r = row("a");
        r.pathway = "Hort., Traffic, Wool".to_string();

        let records = pathway_records(&r);
        assert_eq!(
            descriptions(&records),
            vec![
                "cbd_2014_pathway:escape_horticulture",
                "cbd_2014_pathway:contaminant_on_animals"
            ]
        );
        assert!(records.iter().all(|r| r.description_type == "pathway"));
    }

    #[test]
    fn test_invasion_stage() {
        assert_eq!(map_invasion_stage("Cas."), "casual");
        assert_eq!(map_invasion_stage("Nat.?"), "established");
        assert_eq!(map_invasion_stage("Inv."), "established");
        assert_eq!(map_invasion_stage("Ext."), "extinct");
        assert_eq!(map_invasion_stage("Ext./Cas."), "casual");
        assert_eq!(map_invasion_stage("Ext./Cas.?"), "casual");
        assert_eq!(map_invasion_stage("?"), "");
    }

    #[test]
    fn test_missing_attributes_produce_no_records() {
        let r = row("a");
        assert!(native_range_records(&r).is_empty());
        assert!(pathway_records(&r).is_empty());
        assert!(invasion_stage_records(&r).is_empty());
    }

    #[test]
    fn test_map_descriptions_union_sorted() {
        let mut b = row("b");
        b.origin = "E".to_string();
        b.degree_of_naturalisation = "Cas.".to_string();
        let mut a = row("a");
        a.pathway = "Seeds".to_string();
        a.origin = "NAM".to_string();

        let checklist = Checklist {
            columns: vec![],
            rows: vec![b, a],
        };
        let records = map_descriptions(&checklist);

        let summary: Vec<_> = records
            .iter()
            .map(|r| (r.taxon_id.as_str(), r.description_type))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("t:a", "native range"),
                ("t:a", "pathway"),
                ("t:b", "native range"),
                ("t:b", "invasion stage"),
            ]
        );
        assert!(records.iter().all(|r| r.language == "en"));
    }
}
