//! Report writers. One writer per output format, all behind a common
//! trait so the command layer does not care where the report goes.

use crate::core::errors::Result;
use crate::report::AssessmentReport;
use colored::Colorize;
use std::fmt::Write as _;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait ReportWriter {
    fn write_report(&mut self, report: &AssessmentReport) -> Result<()>;
}

/// Open a writer for the chosen format, to a file when `output` is given
/// and to stdout otherwise.
pub fn create_writer(
    format: ReportFormat,
    output: Option<&Path>,
) -> Result<Box<dyn ReportWriter>> {
    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(File::create(path).map_err(|e| {
            crate::core::errors::Error::file_system(
                "failed to create output file",
                path.to_path_buf(),
                e,
            )
        })?),
        None => Box::new(io::stdout()),
    };

    Ok(match format {
        ReportFormat::Json => Box::new(JsonWriter::new(sink)),
        ReportFormat::Markdown => Box::new(MarkdownWriter::new(sink)),
        ReportFormat::Terminal => Box::new(TerminalWriter::new(sink)),
    })
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &AssessmentReport) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, report)?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &AssessmentReport) -> Result<()> {
        self.writer.write_all(render_markdown(report).as_bytes())?;
        Ok(())
    }
}

/// Markdown body shared by the writer and its tests.
pub fn render_markdown(report: &AssessmentReport) -> String {
    let mut out = String::new();
    let s = &report.summary;

    let _ = writeln!(out, "# Assessment Report");
    let _ = writeln!(out);
    let _ = writeln!(out, "Generated: {}", report.generated_at.format("%Y-%m-%d %H:%M UTC"));
    let _ = writeln!(out);
    let _ = writeln!(out, "## Summary");
    let _ = writeln!(out);
    let _ = writeln!(out, "| Metric | Value |");
    let _ = writeln!(out, "|--------|-------|");
    let _ = writeln!(out, "| Project type | {} |", s.project_type);
    let _ = writeln!(out, "| Controllers | {} |", s.total_controllers);
    let _ = writeln!(out, "| Routes | {} |", s.total_routes);
    let _ = writeln!(out, "| Models | {} |", s.total_models);
    let _ = writeln!(out, "| Views | {} |", s.total_views);
    let _ = writeln!(out, "| Services | {} |", s.total_services);
    let _ = writeln!(out, "| Authentication | {} |", s.authentication);
    let _ = writeln!(out);

    let _ = writeln!(out, "## Recommendations");
    let _ = writeln!(out);
    for rec in &report.recommendations {
        let _ = writeln!(out, "- **{}**: {} ({})", rec.category, rec.recommendation, rec.reason);
    }
    let _ = writeln!(out);

    if !report.manual_review.is_empty() {
        let _ = writeln!(out, "## Manual Review");
        let _ = writeln!(out);
        for item in &report.manual_review {
            let _ = writeln!(out, "- {item}");
        }
        let _ = writeln!(out);
    }

    if !report.details.controllers.is_empty() {
        let _ = writeln!(out, "## Routes");
        let _ = writeln!(out);
        for controller in &report.details.controllers {
            let _ = writeln!(out, "### {}", controller.name);
            let _ = writeln!(out);
            for route in &controller.routes {
                let _ = writeln!(out, "- `{} {}` -> {}", route.verb, route.action, route.return_type);
            }
            let _ = writeln!(out);
        }
    }

    if !report.details.entities.is_empty() {
        let _ = writeln!(out, "## Models");
        let _ = writeln!(out);
        for entity in &report.details.entities {
            let _ = writeln!(
                out,
                "- {}.{} ({} fields, {} relationships)",
                entity.namespace,
                entity.name,
                entity.fields.len(),
                entity.relationships.len()
            );
        }
        let _ = writeln!(out);
    }

    if !report.details.packages.is_empty() {
        let _ = writeln!(out, "## Packages");
        let _ = writeln!(out);
        let _ = writeln!(out, "| NuGet package | Version | Python equivalent |");
        let _ = writeln!(out, "|---------------|---------|-------------------|");
        for package in &report.details.packages {
            let _ = writeln!(
                out,
                "| {} | {} | {} |",
                package.name, package.version, package.python_equivalent
            );
        }
        let _ = writeln!(out);
    }

    out
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &AssessmentReport) -> Result<()> {
        let s = &report.summary;
        writeln!(self.writer, "{}", "Assessment".bold().underline())?;
        writeln!(self.writer)?;
        writeln!(self.writer, "  Project type:   {}", s.project_type.to_string().cyan())?;
        writeln!(self.writer, "  Controllers:    {}", s.total_controllers)?;
        writeln!(self.writer, "  Routes:         {}", s.total_routes)?;
        writeln!(self.writer, "  Models:         {}", s.total_models)?;
        writeln!(self.writer, "  Views:          {}", s.total_views)?;
        writeln!(self.writer, "  Services:       {}", s.total_services)?;
        writeln!(self.writer, "  Authentication: {}", s.authentication.to_string().cyan())?;
        writeln!(self.writer)?;

        writeln!(self.writer, "{}", "Recommendations".bold())?;
        for rec in &report.recommendations {
            writeln!(
                self.writer,
                "  {} {} {}",
                format!("[{}]", rec.category).green(),
                rec.recommendation.bold(),
                format!("({})", rec.reason).dimmed()
            )?;
        }

        if !report.manual_review.is_empty() {
            writeln!(self.writer)?;
            writeln!(self.writer, "{}", "Manual review".bold())?;
            for item in &report.manual_review {
                writeln!(self.writer, "  {} {}", "!".yellow(), item)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AuthScheme, Inventory, ProjectType};

    fn report() -> AssessmentReport {
        AssessmentReport::from_inventory(Inventory {
            project_type: ProjectType::AspNetMvc,
            controllers: vec![],
            entities: vec![],
            views: vec![],
            services: vec![],
            contexts: vec![],
            packages: vec![],
            authentication: AuthScheme::NotDetected,
            skipped_files: 0,
        })
    }

    #[test]
    fn json_writer_emits_parseable_output() {
        let mut buf = Vec::new();
        JsonWriter::new(&mut buf).write_report(&report()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["summary"]["total_controllers"], 0);
        assert!(value["recommendations"].is_array());
    }

    #[test]
    fn markdown_has_summary_table_and_recommendations() {
        let md = render_markdown(&report());
        assert!(md.contains("# Assessment Report"));
        assert!(md.contains("| Project type | ASP.NET MVC |"));
        assert!(md.contains("## Recommendations"));
        assert!(md.contains("FastAPI"));
    }

    #[test]
    fn terminal_writer_includes_counts() {
        let mut buf = Vec::new();
        TerminalWriter::new(&mut buf).write_report(&report()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Controllers:    0"));
        assert!(text.contains("Recommendations"));
    }
}
