use crate::domain::model::{LintReport, ReportFormat};
use crate::utils::error::{LintError, Result};

pub const CLEAN_MESSAGE: &str = "✅ All naming conventions passed!";

pub fn render(report: &LintReport, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(render_text(report)),
        ReportFormat::Json => render_json(report),
        ReportFormat::Csv => render_csv(report),
    }
}

pub fn render_text(report: &LintReport) -> String {
    if report.is_clean() {
        return format!("{}\n", CLEAN_MESSAGE);
    }

    let mut out = String::new();
    for violation in &report.violations {
        out.push_str(&violation.to_string());
        out.push('\n');
    }
    out.push_str(&format!(
        "\n❌ Found {} naming errors.\n",
        report.error_count()
    ));
    out
}

pub fn render_json(report: &LintReport) -> Result<String> {
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    Ok(json)
}

pub fn render_csv(report: &LintReport) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["path", "line", "rule", "name", "message"])?;

    for v in &report.violations {
        writer.write_record([
            v.path.display().to_string(),
            v.line.to_string(),
            v.rule.to_string(),
            v.name.clone(),
            v.message.clone(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| LintError::ReportError {
        message: e.to_string(),
    })?;
    String::from_utf8(bytes).map_err(|e| LintError::ReportError {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{RuleKind, Violation};
    use std::path::PathBuf;

    fn sample_report() -> LintReport {
        LintReport::new(
            2,
            0,
            vec![
                Violation {
                    path: PathBuf::from("Source/BadActor.cpp"),
                    line: 5,
                    rule: RuleKind::ClassPrefix,
                    name: "MyBadActor".to_string(),
                    message: "❌ Class 'MyBadActor' should start with [A, U, F, E, I]".to_string(),
                },
                Violation {
                    path: PathBuf::from("Source/BadActor.cpp"),
                    line: 9,
                    rule: RuleKind::MemberCase,
                    name: "health_points".to_string(),
                    message: "❌ Member variable 'health_points' should be PascalCase".to_string(),
                },
            ],
        )
    }

    #[test]
    fn test_text_report_lists_violations_and_total() {
        let text = render_text(&sample_report());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "Source/BadActor.cpp:5 ❌ Class 'MyBadActor' should start with [A, U, F, E, I]"
        );
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "❌ Found 2 naming errors.");
    }

    #[test]
    fn test_text_report_for_clean_run() {
        let report = LintReport::new(3, 0, Vec::new());
        assert_eq!(render_text(&report), "✅ All naming conventions passed!\n");
    }

    #[test]
    fn test_json_report() {
        let json = render(&sample_report(), ReportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["files_scanned"], 2);
        assert_eq!(value["violations"][1]["rule"], "member_case");
        assert!(value["generated_at"].is_string());
    }

    #[test]
    fn test_csv_report() {
        let csv_text = render(&sample_report(), ReportFormat::Csv).unwrap();
        let mut lines = csv_text.lines();
        assert_eq!(lines.next(), Some("path,line,rule,name,message"));
        let first = lines.next().unwrap();
        assert!(first.starts_with("Source/BadActor.cpp,5,class_prefix,MyBadActor,"));
        assert_eq!(lines.count(), 1);
    }
}
