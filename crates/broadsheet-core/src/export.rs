// File: crates/broadsheet-core/src/export.rs
// Summary: File export; a vega-embed HTML shell or the bare spec JSON.

use std::path::Path;

use log::debug;

use crate::chart::Chart;
use crate::error::ChartError;

const VEGA_JS: &str = "https://cdn.jsdelivr.net/npm/vega@5";
const VEGA_LITE_JS: &str = "https://cdn.jsdelivr.net/npm/vega-lite@5";
const VEGA_EMBED_JS: &str = "https://cdn.jsdelivr.net/npm/vega-embed@6";

impl Chart {
    /// Write a self-contained HTML document. Rendering happens in the
    /// browser; the document only carries the spec and the engine tags.
    pub fn save_html(&self, path: impl AsRef<Path>) -> Result<(), ChartError> {
        let spec = serde_json::to_string(&self.to_spec()?)?;
        write_output(path.as_ref(), html_document(&spec).as_bytes())
    }

    /// Write the bare spec, pretty-printed.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<(), ChartError> {
        let json = self.to_json()?;
        write_output(path.as_ref(), json.as_bytes())
    }
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<(), ChartError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    debug!("wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

fn html_document(spec_json: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8"/>
  <script src="{VEGA_JS}"></script>
  <script src="{VEGA_LITE_JS}"></script>
  <script src="{VEGA_EMBED_JS}"></script>
</head>
<body>
  <div id="vis"></div>
  <script>
    const spec = {spec_json};
    vegaEmbed("#vis", spec).catch(console.error);
  </script>
</body>
</html>
"##
    )
}
