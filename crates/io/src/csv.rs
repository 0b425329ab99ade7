// CSV import/export for the cleaned film table

use std::io::Read;
use std::path::Path;

use cinegraph_core::FilmRow;

use crate::atomic::write_atomic;

/// Read file and convert to UTF-8 if needed (handles Windows-1252, Latin-1, etc.)
pub fn read_file_as_utf8(path: &Path) -> Result<String, String> {
    let mut file =
        std::fs::File::open(path).map_err(|e| format!("{}: {e}", path.display()))?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|e| format!("{}: {e}", path.display()))?;

    // Try UTF-8 first; on failure, recover the buffer from the error
    match String::from_utf8(bytes) {
        Ok(s) => Ok(s),
        Err(e) => {
            let bytes = e.into_bytes();
            // Fall back to Windows-1252 (common for spreadsheet-exported CSVs)
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes);
            Ok(decoded.into_owned())
        }
    }
}

/// Load a cleaned table written by [`write_table`]. Empty fields come
/// back as `None`.
pub fn read_table(path: &Path) -> Result<Vec<FilmRow>, String> {
    let content = read_file_as_utf8(path)?;
    let mut reader = csv::Reader::from_reader(content.as_bytes());
    let mut rows = Vec::new();
    for result in reader.deserialize::<FilmRow>() {
        rows.push(result.map_err(|e| format!("{}: {e}", path.display()))?);
    }
    Ok(rows)
}

/// Write the cleaned table as comma-separated UTF-8 with a header row,
/// atomically. Row order is preserved as given.
pub fn write_table(path: &Path, rows: &[FilmRow]) -> Result<(), String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| format!("{}: {e}", path.display()))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| format!("{}: {e}", path.display()))?;
    write_atomic(path, &bytes)
}
