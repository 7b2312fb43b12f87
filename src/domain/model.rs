use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    ClassPrefix,
    ClassCase,
    FunctionCase,
    BoolPrefix,
    MemberCase,
    LocalCase,
}

impl RuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::ClassPrefix => "class_prefix",
            RuleKind::ClassCase => "class_case",
            RuleKind::FunctionCase => "function_case",
            RuleKind::BoolPrefix => "bool_prefix",
            RuleKind::MemberCase => "member_case",
            RuleKind::LocalCase => "local_case",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a variable declaration lives, as far as brace tracking can tell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VarScope {
    Member,
    Local,
    Global,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclKind {
    Class,
    Function,
    Variable {
        type_name: String,
        scope: VarScope,
        /// `bool` values and one-bit bitfields (`uint8 bFlag : 1;`).
        is_bool: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub kind: DeclKind,
    pub name: String,
    /// 1-based line number.
    pub line: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    Csv,
}

#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub contents: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub path: PathBuf,
    pub line: usize,
    pub rule: RuleKind,
    pub name: String,
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} {}", self.path.display(), self.line, self.message)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LintReport {
    pub files_scanned: usize,
    pub files_skipped: usize,
    pub violations: Vec<Violation>,
    pub generated_at: DateTime<Utc>,
}

impl LintReport {
    pub fn new(files_scanned: usize, files_skipped: usize, violations: Vec<Violation>) -> Self {
        Self {
            files_scanned,
            files_skipped,
            violations,
            generated_at: Utc::now(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.violations.len()
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_clean() {
            0
        } else {
            1
        }
    }
}

/// Files gathered by the extract stage, plus how many could not be read.
#[derive(Debug, Clone, Default)]
pub struct ExtractResult {
    pub sources: Vec<SourceFile>,
    pub skipped: usize,
}
