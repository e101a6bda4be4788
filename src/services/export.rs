// src/services/export.rs
use csv::Writer;

use crate::models::Series;
use crate::BoxError;

/// Render a series as the dashboard's CSV download: a `Year,Value` header,
/// one row per sample, values in their shortest form (`1`, not `1.0`), and
/// no trailing newline.
pub fn series_to_csv(series: &Series) -> Result<String, BoxError> {
    let mut buf = Vec::new();
    {
        let mut writer = Writer::from_writer(&mut buf);
        writer.write_record(["Year", "Value"])?;
        for sample in series {
            // Fields are formatted by hand; serializing the f64 directly
            // would render whole numbers as "1.0".
            let value = sample.value.to_string();
            writer.write_record([sample.year.as_str(), value.as_str()])?;
        }
        writer.flush()?;
    }
    let text = String::from_utf8(buf)?;
    Ok(text.trim_end_matches('\n').to_string())
}
