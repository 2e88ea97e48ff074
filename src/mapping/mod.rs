//! Darwin Core mapping of the normalized checklist.
//!
//! The three branches read the same checklist and never feed each other:
//! - taxon: constant and copied fields
//! - distribution: presence per location, dates, extinct-taxon split
//! - description: native range, pathway and invasion stage

pub mod description;
pub mod distribution;
pub mod taxon;
pub mod vocab;

pub use description::{map_descriptions, DescriptionRecord};
pub use distribution::{map_distribution, DistributionRecord};
pub use taxon::{map_taxa, TaxonRecord};

use crate::config::DatasetMetadata;
use crate::parser::Checklist;

/// All output tables of one run
#[derive(Debug, Clone, Default)]
pub struct MappedTables {
    pub taxa: Vec<TaxonRecord>,
    pub distributions: Vec<DistributionRecord>,
    pub descriptions: Vec<DescriptionRecord>,
}

impl MappedTables {
    pub fn record_count(&self) -> usize {
        self.taxa.len() + self.distributions.len() + self.descriptions.len()
    }
}

/// Run every mapper. `current_year` closes open-ended date ranges.
pub fn map_checklist(
    checklist: &Checklist,
    metadata: &DatasetMetadata,
    current_year: i32,
) -> MappedTables {
    let tables = MappedTables {
        taxa: map_taxa(checklist, metadata),
        distributions: map_distribution(checklist, current_year),
        descriptions: map_descriptions(checklist),
    };

    tracing::debug!(
        taxa = tables.taxa.len(),
        distributions = tables.distributions.len(),
        descriptions = tables.descriptions.len(),
        "mapped checklist"
    );

    tables
}
