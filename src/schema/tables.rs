//! Output table definitions for the Darwin Core checklist

use super::types::*;

pub static TAXON: TableSchema = TableSchema {
    name: "taxon",
    file_name: "taxon.csv",
    kind: TableKind::Taxon,
    row_type: "http://rs.tdwg.org/dwc/terms/Taxon",
    columns: &[
        Column::dwc("taxonID"),
        Column::dcterms("language"),
        Column::dcterms("license"),
        Column::dcterms("rightsHolder"),
        Column::dwc("datasetID"),
        Column::dwc("datasetName"),
        Column::dwc("scientificNameID"),
        Column::dwc("scientificName"),
        Column::dwc("kingdom"),
        Column::dwc("family"),
        Column::dwc("taxonRank"),
        Column::dwc("nomenclaturalCode"),
    ],
};

pub static DISTRIBUTION: TableSchema = TableSchema {
    name: "distribution",
    file_name: "distribution.csv",
    kind: TableKind::Distribution,
    row_type: "http://rs.gbif.org/terms/1.0/Distribution",
    columns: &[
        Column::dwc("taxonID"),
        Column::dwc("locationID"),
        Column::dwc("locality"),
        Column::dwc("countryCode"),
        Column::dwc("occurrenceStatus"),
        Column::dwc("establishmentMeans"),
        Column::dwc("eventDate"),
    ],
};

pub static DESCRIPTION: TableSchema = TableSchema {
    name: "description",
    file_name: "description.csv",
    kind: TableKind::Description,
    row_type: "http://rs.gbif.org/terms/1.0/Description",
    columns: &[
        Column::dwc("taxonID"),
        Column::dcterms("description"),
        Column::dcterms("type"),
        Column::dcterms("language"),
    ],
};

/// All output tables, core first
pub static ALL_TABLES: &[&TableSchema] = &[&TAXON, &DISTRIBUTION, &DESCRIPTION];

/// Look up a table by name
pub fn get_table(name: &str) -> Option<&'static TableSchema> {
    ALL_TABLES.iter().find(|t| t.name == name).copied()
}
