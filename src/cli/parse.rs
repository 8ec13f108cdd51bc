use graphpath_core::format::OutputFormat;

use super::graph::EdgeSpec;

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse an edge spec of the form `U-V` or `U-V:W`
pub fn parse_edge_spec(s: &str) -> std::result::Result<EdgeSpec, String> {
    s.parse::<EdgeSpec>().map_err(|e| e.to_string())
}
