//! Controlled vocabularies. Each table maps a raw token to its canonical
//! value; tokens not listed map to an empty string.

/// Native range codes to WGSRPD regions
pub static NATIVE_RANGE: &[(&str, &str)] = &[
    ("AF", "Africa (WGSRPD:2)"),
    ("AM", "pan-American"),
    ("AS", "Asia"),
    ("AS-Te", "temperate Asia (WGSRPD:3)"),
    ("AS-Tr", "tropical Asia (WGSRPD:4)"),
    ("AUS", "Australasia (WGSRPD:5)"),
    ("Cult.", "cultivated origin"),
    ("E", "Europe (WGSRPD:1)"),
    ("Hybr.", "hybrid origin"),
    ("NAM", "Northern America (WGSRPD:7)"),
    ("SAM", "Southern America (WGSRPD:8)"),
    ("Trop.", "Pantropical"),
];

pub const PATHWAY_PREFIX: &str = "cbd_2014_pathway:";

/// Lowercased pathway tokens to CBD 2014 pathway codes.
/// Empty values are known tokens with no CBD equivalent.
pub static PATHWAY: &[(&str, &str)] = &[
    ("agric.", "escape_agriculture"),
    ("bird seed", "contaminant_seed"),
    ("birdseed", "contaminant_seed"),
    ("bulbs", ""),
    ("coconut mats", "contaminant_seed"),
    ("fish", ""),
    ("food refuse", "escape_food_bait"),
    ("grain", "contaminant_seed"),
    ("grain (rice)", "contaminant_seed"),
    ("grass seed", "contaminant_seed"),
    ("hay", ""),
    ("hort", "escape_horticulture"),
    ("hort.", "escape_horticulture"),
    ("hybridization", ""),
    ("military troops", ""),
    ("nurseries", "contaminant_nursery"),
    ("oil seed", "contaminant_seed"),
    ("oilseed", "contaminant_seed"),
    ("ore", "contaminant_habitat_material"),
    ("pines", "contaminant_on_plants"),
    ("rice", ""),
    ("salt", ""),
    ("seeds", "contaminant_seed"),
    ("tourists", "stowaway_people_luggage"),
    ("traffic", ""),
    ("unknown", "unknown"),
    ("wool", "contaminant_on_animals"),
    ("wool alien", "contaminant_on_animals"),
];

/// Degree of naturalisation to invasion stage
pub static INVASION_STAGE: &[(&str, &str)] = &[
    ("Cas.", "casual"),
    ("Inv.", "established"),
    ("Nat.", "established"),
    ("Ext.", "extinct"),
    ("Ext./Cas.", "casual"),
];

/// Look up a token, defaulting to an empty string
pub fn lookup(table: &[(&str, &'static str)], token: &str) -> &'static str {
    table
        .iter()
        .find(|(key, _)| *key == token)
        .map(|(_, value)| *value)
        .unwrap_or("")
}

/// Distribution locations, in output order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Belgium,
    Flanders,
    Wallonia,
    Brussels,
}

impl Location {
    pub const ALL: [Location; 4] = [
        Location::Belgium,
        Location::Flanders,
        Location::Wallonia,
        Location::Brussels,
    ];

    pub fn location_id(&self) -> &'static str {
        match self {
            Location::Belgium => "ISO_3166-2:BE",
            Location::Flanders => "ISO_3166-2:BE-VLG",
            Location::Wallonia => "ISO_3166-2:BE-WAL",
            Location::Brussels => "ISO_3166-2:BE-BRU",
        }
    }

    pub fn locality(&self) -> &'static str {
        match self {
            Location::Belgium => "Belgium",
            Location::Flanders => "Flemish Region",
            Location::Wallonia => "Walloon Region",
            Location::Brussels => "Brussels-Capital Region",
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Location::Belgium => write!(f, "Belgium"),
            Location::Flanders => write!(f, "Flanders"),
            Location::Wallonia => write!(f, "Wallonia"),
            Location::Brussels => write!(f, "Brussels"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(lookup(NATIVE_RANGE, "AS-Te"), "temperate Asia (WGSRPD:3)");
        assert_eq!(lookup(NATIVE_RANGE, "as-te"), "");
        assert_eq!(lookup(PATHWAY, "hort."), "escape_horticulture");
        assert_eq!(lookup(PATHWAY, "traffic"), "");
        assert_eq!(lookup(INVASION_STAGE, "Ext./Cas."), "casual");
    }

    #[test]
    fn test_native_range_has_twelve_codes() {
        assert_eq!(NATIVE_RANGE.len(), 12);
    }

    #[test]
    fn test_pathway_keys_are_lowercase() {
        for (key, _) in PATHWAY {
            assert_eq!(*key, key.to_lowercase());
        }
    }
}
