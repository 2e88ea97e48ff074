use serde::Serialize;

use crate::config::DatasetMetadata;
use crate::parser::Checklist;

/// Taxon core record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaxonRecord {
    #[serde(rename = "taxonID")]
    pub taxon_id: String,
    pub language: &'static str,
    pub license: String,
    #[serde(rename = "rightsHolder")]
    pub rights_holder: String,
    #[serde(rename = "datasetID")]
    pub dataset_id: String,
    #[serde(rename = "datasetName")]
    pub dataset_name: String,
    #[serde(rename = "scientificNameID")]
    pub scientific_name_id: String,
    #[serde(rename = "scientificName")]
    pub scientific_name: String,
    pub kingdom: &'static str,
    pub family: String,
    #[serde(rename = "taxonRank")]
    pub taxon_rank: String,
    #[serde(rename = "nomenclaturalCode")]
    pub nomenclatural_code: &'static str,
}

/// One taxon record per checklist row, in input order
pub fn map_taxa(checklist: &Checklist, metadata: &DatasetMetadata) -> Vec<TaxonRecord> {
    checklist
        .rows
        .iter()
        .map(|row| TaxonRecord {
            taxon_id: row.taxon_id.clone(),
            language: "en",
            license: metadata.license.clone(),
            rights_holder: metadata.rights_holder.clone(),
            dataset_id: metadata.dataset_id.clone(),
            dataset_name: metadata.dataset_name.clone(),
            scientific_name_id: row.scientific_name_id.clone(),
            scientific_name: row.scientific_name.clone(),
            kingdom: "Plantae",
            family: row.family.clone(),
            taxon_rank: row.taxon_rank.clone(),
            nomenclatural_code: "ICBN",
        })
        .collect()
}
