/// Vocabulary a column's term belongs to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Namespace {
    /// Darwin Core terms
    Dwc,
    /// Dublin Core terms
    Dcterms,
}

impl Namespace {
    pub fn base_iri(&self) -> &'static str {
        match self {
            Namespace::Dwc => "http://rs.tdwg.org/dwc/terms/",
            Namespace::Dcterms => "http://purl.org/dc/terms/",
        }
    }
}

/// Column definition
#[derive(Debug, Clone)]
pub struct Column {
    pub name: &'static str,
    pub namespace: Namespace,
}

impl Column {
    /// Create a Darwin Core column
    pub const fn dwc(name: &'static str) -> Self {
        Self {
            name,
            namespace: Namespace::Dwc,
        }
    }

    /// Create a Dublin Core column
    pub const fn dcterms(name: &'static str) -> Self {
        Self {
            name,
            namespace: Namespace::Dcterms,
        }
    }

    /// Full term IRI, e.g. `http://rs.tdwg.org/dwc/terms/taxonID`
    pub fn term(&self) -> String {
        format!("{}{}", self.namespace.base_iri(), self.name)
    }
}

/// Which mapper produces the rows of a table
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TableKind {
    Taxon,
    Distribution,
    Description,
}

/// Output table definition
#[derive(Debug, Clone)]
pub struct TableSchema {
    pub name: &'static str,
    pub file_name: &'static str,
    pub kind: TableKind,
    /// Core or extension row type IRI
    pub row_type: &'static str,
    pub columns: &'static [Column],
}

impl TableSchema {
    /// Column names in output order
    pub fn column_names(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_term() {
        assert_eq!(
            Column::dwc("taxonID").term(),
            "http://rs.tdwg.org/dwc/terms/taxonID"
        );
        assert_eq!(
            Column::dcterms("language").term(),
            "http://purl.org/dc/terms/language"
        );
    }
}
