//! Snapshot wire format: `[[subject, object, relation], ...]`

use relgraph_domain::Triplet;

pub(crate) fn decode(json: &str) -> Result<Vec<Triplet>, serde_json::Error> {
    let rows: Vec<(String, String, String)> = serde_json::from_str(json)?;
    Ok(rows.into_iter().map(Triplet::from).collect())
}

pub(crate) fn encode(triplets: &[Triplet]) -> Result<String, serde_json::Error> {
    let rows: Vec<(&str, &str, &str)> = triplets.iter().map(Triplet::as_tuple).collect();
    serde_json::to_string_pretty(&rows)
}
