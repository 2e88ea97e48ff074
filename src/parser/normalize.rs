//! Input normalizer: column-name cleanup, blank-row removal and `taxonID` derivation

use anyhow::{bail, Result};
use md5::{Digest, Md5};

use super::source::RawTable;

/// Marker prefixed to every input column so raw fields never collide with output terms
pub const RAW_PREFIX: &str = "raw_";

/// Logical input fields and the normalized column names accepted for each
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field {
    Id,
    ScientificName,
    ScientificNameId,
    Family,
    TaxonRank,
    PresenceFlanders,
    PresenceWallonia,
    PresenceBrussels,
    FirstRecord,
    MostRecentRecord,
    DegreeOfNaturalisation,
    Origin,
    Pathway,
}

impl Field {
    pub const ALL: [Field; 13] = [
        Field::Id,
        Field::ScientificName,
        Field::ScientificNameId,
        Field::Family,
        Field::TaxonRank,
        Field::PresenceFlanders,
        Field::PresenceWallonia,
        Field::PresenceBrussels,
        Field::FirstRecord,
        Field::MostRecentRecord,
        Field::DegreeOfNaturalisation,
        Field::Origin,
        Field::Pathway,
    ];

    /// Accepted column names, already normalized and prefixed
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Field::Id => &["raw_id"],
            Field::ScientificName => &["raw_taxon", "raw_scientific_name", "raw_scientificname"],
            Field::ScientificNameId => &["raw_scientificnameid", "raw_scientific_name_id"],
            Field::Family => &["raw_family"],
            Field::TaxonRank => &["raw_taxonrank", "raw_taxon_rank", "raw_rank"],
            Field::PresenceFlanders => &["raw_presence_fl", "raw_fl", "raw_flanders"],
            Field::PresenceWallonia => &["raw_presence_wa", "raw_wa", "raw_wallonia"],
            Field::PresenceBrussels => &["raw_presence_br", "raw_br", "raw_brussels"],
            Field::FirstRecord => &["raw_fr", "raw_first_record", "raw_first_observation"],
            Field::MostRecentRecord => &["raw_mrr", "raw_most_recent_record", "raw_last_observation"],
            Field::DegreeOfNaturalisation => &[
                "raw_d_n",
                "raw_degree_of_naturalisation",
                "raw_degree_of_naturalization",
            ],
            Field::Origin => &["raw_origin", "raw_native_range"],
            Field::Pathway => &["raw_v_i", "raw_pathway", "raw_introduction_pathway"],
        }
    }
}

/// One taxon of the checklist. Empty strings mean "absent".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChecklistRow {
    pub taxon_id: String,
    pub id: String,
    pub scientific_name: String,
    pub scientific_name_id: String,
    pub family: String,
    pub taxon_rank: String,
    pub presence_flanders: String,
    pub presence_wallonia: String,
    pub presence_brussels: String,
    pub first_record: String,
    pub most_recent_record: String,
    pub degree_of_naturalisation: String,
    pub origin: String,
    pub pathway: String,
}

/// The cleaned input table shared by all mappers
#[derive(Debug, Clone, Default)]
pub struct Checklist {
    /// Normalized, prefixed column names in source order
    pub columns: Vec<String>,
    pub rows: Vec<ChecklistRow>,
}

/// Lowercase a header and collapse every run of non-alphanumerics into `_`
pub fn normalize_column_name(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut pending_sep = false;

    for c in name.trim().chars() {
        if c.is_alphanumeric() {
            if pending_sep && !result.is_empty() {
                result.push('_');
            }
            pending_sep = false;
            result.extend(c.to_lowercase());
        } else {
            pending_sep = true;
        }
    }

    result
}

/// `<slug>:taxon:<md5 of the scientific name>`
pub fn taxon_id(slug: &str, scientific_name: &str) -> String {
    let digest = Md5::digest(scientific_name.as_bytes());
    format!("{}:taxon:{}", slug, hex::encode(digest))
}

/// Normalize a raw table into checklist rows
pub fn normalize(raw: &RawTable, slug: &str) -> Result<Checklist> {
    let columns: Vec<String> = raw
        .headers
        .iter()
        .map(|h| format!("{}{}", RAW_PREFIX, normalize_column_name(h)))
        .collect();

    let index = |field: Field| -> Option<usize> {
        field
            .aliases()
            .iter()
            .find_map(|alias| columns.iter().position(|c| c == alias))
    };

    let positions: Vec<(Field, Option<usize>)> =
        Field::ALL.iter().map(|f| (*f, index(*f))).collect();

    if index(Field::ScientificName).is_none() {
        bail!(
            "No scientific name column found (expected one of {:?}, got {:?})",
            Field::ScientificName.aliases(),
            columns
        );
    }

    for (field, pos) in &positions {
        if pos.is_none() {
            tracing::warn!(?field, "input column not found, values will be empty");
        }
    }

    let mut rows = Vec::with_capacity(raw.rows.len());
    for cells in &raw.rows {
        if cells.iter().all(|c| c.trim().is_empty()) {
            continue;
        }

        let mut row = ChecklistRow::default();
        for (field, pos) in &positions {
            let value = pos
                .and_then(|i| cells.get(i))
                .map(|c| c.trim().to_string())
                .unwrap_or_default();
            row.set(*field, value);
        }
        row.taxon_id = taxon_id(slug, &row.scientific_name);
        rows.push(row);
    }

    Ok(Checklist { columns, rows })
}

impl ChecklistRow {
    fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Id => &mut self.id,
            Field::ScientificName => &mut self.scientific_name,
            Field::ScientificNameId => &mut self.scientific_name_id,
            Field::Family => &mut self.family,
            Field::TaxonRank => &mut self.taxon_rank,
            Field::PresenceFlanders => &mut self.presence_flanders,
            Field::PresenceWallonia => &mut self.presence_wallonia,
            Field::PresenceBrussels => &mut self.presence_brussels,
            Field::FirstRecord => &mut self.first_record,
            Field::MostRecentRecord => &mut self.most_recent_record,
            Field::DegreeOfNaturalisation => &mut self.degree_of_naturalisation,
            Field::Origin => &mut self.origin,
            Field::Pathway => &mut self.pathway,
        };
        *slot = value;
    }
}
