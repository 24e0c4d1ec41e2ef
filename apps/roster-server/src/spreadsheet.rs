use roster_core::RawRow;

/// Decodes an uploaded sheet into raw rows: CSV when the request says
/// `text/csv`, otherwise a JSON array of row objects. Both spell the columns
/// the way the sheet does ("Player Name", "Class"). Missing or empty cells
/// become absent fields here and are reported per row by the importer, so
/// only an undecodable source is an error.
pub(crate) fn decode_rows(content_type: Option<&str>, body: &[u8]) -> Result<Vec<RawRow>, String> {
    if content_type.is_some_and(|ct| ct.starts_with("text/csv")) {
        decode_csv(body)
    } else {
        serde_json::from_slice::<Vec<RawRow>>(body)
            .map_err(|err| format!("invalid JSON row array: {err}"))
    }
}

fn decode_csv(body: &[u8]) -> Result<Vec<RawRow>, String> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(body);
    let mut rows = Vec::new();
    for record in reader.deserialize::<RawRow>() {
        rows.push(record.map_err(|err| format!("invalid CSV: {err}"))?);
    }
    Ok(rows)
}
