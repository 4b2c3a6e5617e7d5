//! Vocabulary constants used by the cleaning pass.

/// XSD vocabulary constants
pub mod xsd {
    /// xsd:string IRI — default datatype appended to bare quoted literals
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
}

/// Name assigned to a graph with no text before its opening delimiter.
pub const DEFAULT_GRAPH_NAME: &str = "Default";
