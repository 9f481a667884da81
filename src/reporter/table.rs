//! Plain text table generator.

use crate::config::Config;
use crate::types::ModuleRecord;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};

/// Fixed column headers, in display order.
pub const HEADERS: [&str; 4] = ["Resource Name", "Module Name", "GitHub Repo", "Version"];

/// Table renderer for CLI output.
pub struct TableReporter {
    /// Whether to style headers
    use_colors: bool,
}

impl TableReporter {
    /// Create a new table reporter.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            use_colors: config.output.colored,
        }
    }

    /// Render one row per record, in input order.
    ///
    /// Content arrangement is disabled so the layout never depends on the
    /// terminal width.
    #[must_use]
    pub fn render(&self, modules: &[ModuleRecord]) -> String {
        let mut table = Table::new();
        table
            .load_preset(comfy_table::presets::ASCII_FULL_CONDENSED)
            .set_content_arrangement(ContentArrangement::Disabled)
            .set_header(HEADERS.iter().map(|h| self.header_cell(h)).collect::<Vec<_>>());

        for module in modules {
            table.add_row(vec![
                Cell::new(&module.resource_name),
                Cell::new(&module.module_name),
                Cell::new(&module.repository),
                Cell::new(&module.version),
            ]);
        }

        table.to_string()
    }

    fn header_cell(&self, title: &str) -> Cell {
        if self.use_colors {
            Cell::new(title).add_attribute(Attribute::Bold)
        } else {
            Cell::new(title)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn plain_reporter() -> TableReporter {
        let mut config = Config::default();
        config.output.colored = false;
        TableReporter::new(&config)
    }

    fn record(resource: &str, version: &str) -> ModuleRecord {
        ModuleRecord {
            resource_name: resource.to_string(),
            module_name: format!("org/{resource}"),
            repository: format!("github.com/org/{resource}"),
            version: version.to_string(),
        }
    }

    #[test]
    fn test_headers_and_rows() {
        let text = plain_reporter().render(&[record("vpc", "v1.0.0"), record("eks", "")]);

        for header in HEADERS {
            assert!(text.contains(header), "missing header {header}");
        }
        assert!(text.contains("github.com/org/vpc"));
        assert!(text.contains("v1.0.0"));
        assert!(text.find("vpc").unwrap() < text.find("eks").unwrap());
    }

    #[test]
    fn test_rows_are_aligned() {
        let text = plain_reporter().render(&[record("a", "v1"), record("much-longer-name", "")]);
        let widths: Vec<_> = text.lines().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{text}");
    }

    #[test]
    fn test_render_is_deterministic() {
        let records = vec![record("vpc", "v1.0.0"), record("vpc", "v1.0.0")];
        let reporter = plain_reporter();
        assert_eq!(reporter.render(&records), reporter.render(&records));
    }

    #[test]
    fn test_one_line_per_record() {
        let reporter = plain_reporter();
        let one = reporter.render(&[record("vpc", "")]);
        let two = reporter.render(&[record("vpc", ""), record("eks", "")]);
        assert_eq!(two.lines().count(), one.lines().count() + 1);
    }
}
