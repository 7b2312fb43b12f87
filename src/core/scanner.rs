//! Line-oriented declaration scanner for Unreal-style C++ sources.
//!
//! The scanner does not parse C++. Each line is matched against three
//! anchored patterns (class, function, variable) and a brace stack
//! decides whether a variable is a class member or a local.

use crate::domain::model::{DeclKind, Declaration, VarScope};
use crate::utils::error::Result;
use regex::Regex;

/// Lines carrying this marker are not checked.
pub const SUPPRESS_MARKER: &str = "NOLINT";

const TYPE: &str = r"[\w:]+(?:<[^;=(){}]*>)?[*&]*";
const FN_QUALIFIERS: &str = r"virtual|static|inline|constexpr|FORCEINLINE|FORCENOINLINE|extern";
const VAR_QUALIFIERS: &str =
    r"static|const|constexpr|mutable|inline|volatile|unsigned|signed|long|short|thread_local|extern";

/// Words that can open a line shaped like a declaration without being one.
const KEYWORDS: &[&str] = &[
    "return", "new", "delete", "throw", "goto", "case", "default", "if", "else", "for", "while",
    "do", "switch", "catch", "sizeof", "alignof", "decltype", "typeid", "static_assert", "using",
    "typedef", "namespace", "class", "struct", "enum", "union", "friend", "template", "operator",
    "public", "private", "protected", "break", "continue", "co_return", "co_await", "co_yield",
];

/// Unreal reflection macros that may prefix a declaration on the same line.
const REFLECTION_MACROS: &[&str] = &[
    "UPROPERTY",
    "UFUNCTION",
    "UCLASS",
    "USTRUCT",
    "UENUM",
    "UINTERFACE",
    "UPARAM",
    "UMETA",
    "GENERATED_BODY",
    "GENERATED_UCLASS_BODY",
    "GENERATED_USTRUCT_BODY",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame {
    Class,
    Function,
    Block,
}

#[derive(Debug, Default)]
struct ScanState {
    in_block_comment: bool,
    stack: Vec<Frame>,
    /// Kind of scope the next `{` opens.
    pending: Option<Frame>,
    /// Parens left open by earlier lines, e.g. a wrapped parameter list.
    paren_depth: usize,
}

impl ScanState {
    fn scope(&self) -> VarScope {
        for frame in self.stack.iter().rev() {
            match frame {
                Frame::Class => return VarScope::Member,
                Frame::Function => return VarScope::Local,
                Frame::Block => {}
            }
        }
        VarScope::Global
    }

    fn apply_delimiters(&mut self, code: &str) {
        for c in code.chars() {
            match c {
                '(' => self.paren_depth += 1,
                ')' => self.paren_depth = self.paren_depth.saturating_sub(1),
                '{' => {
                    let frame = self.pending.take().unwrap_or(Frame::Block);
                    self.stack.push(frame);
                }
                '}' => {
                    self.stack.pop();
                }
                _ => {}
            }
        }
    }
}

pub struct Scanner {
    class_re: Regex,
    function_re: Regex,
    variable_re: Regex,
}

impl Scanner {
    pub fn new() -> Result<Self> {
        let class_re = Regex::new(r"^(?:class|struct)\s+(?:[A-Z][A-Z0-9_]*_API\s+)?(\w+)")?;
        let function_re = Regex::new(&format!(
            r"^(?:(?:{FN_QUALIFIERS})\s+)*((?:{TYPE}\s+)+?)[*&]*([\w:~]+)\s*\("
        ))?;
        let variable_re = Regex::new(&format!(
            r"^(?:(?:{VAR_QUALIFIERS})\s+)*({TYPE})\s+([*&]*)(\w+)\s*(?:\[[^\]]*\]\s*)?(?::\s*(\d+)\s*)?(?:=[^;]*|\{{[^}}]*\}})?;"
        ))?;

        Ok(Self {
            class_re,
            function_re,
            variable_re,
        })
    }

    /// Extract the checkable declarations from one file, in line order.
    /// At most one declaration is reported per line.
    pub fn scan(&self, contents: &str) -> Vec<Declaration> {
        let mut state = ScanState::default();
        let mut declarations = Vec::new();

        for (idx, raw) in contents.lines().enumerate() {
            let code = strip_comments_and_literals(raw, &mut state.in_block_comment);
            let trimmed = code.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let line = strip_reflection_macro(trimmed);
            // Inside an argument list opened on an earlier line.
            let continuation = state.paren_depth > 0;

            if !continuation && !raw.contains(SUPPRESS_MARKER) {
                if let Some(decl) = self.match_declaration(line, idx + 1, state.scope()) {
                    declarations.push(decl);
                }
            }

            if !continuation && !keeps_pending(line) {
                state.pending = self.classify_scope(line);
            }
            state.apply_delimiters(trimmed);
        }

        declarations
    }

    fn match_declaration(&self, line: &str, line_no: usize, scope: VarScope) -> Option<Declaration> {
        // Initializer lists and other continuations start with punctuation.
        if !line.starts_with(|c: char| c.is_alphabetic() || c == '_') {
            return None;
        }

        if let Some(caps) = self.class_re.captures(line) {
            return Some(Declaration {
                kind: DeclKind::Class,
                name: caps[1].to_string(),
                line: line_no,
            });
        }

        if let Some(caps) = self.function_re.captures(line) {
            if is_keyword(first_word(line)) {
                return None;
            }
            let qualified = &caps[2];
            let name = qualified.rsplit("::").next().unwrap_or(qualified);
            // Destructors mirror the class name, which is checked on its own.
            if name.is_empty() || name.starts_with('~') || is_keyword(name) {
                return None;
            }

            // `FVector location(0, 0, 0);` inside a body is a local with
            // constructor arguments, not a prototype.
            if scope == VarScope::Local && line.ends_with(';') {
                let type_name = caps[1].trim().to_string();
                let is_bool = type_name == "bool";
                return Some(Declaration {
                    kind: DeclKind::Variable {
                        type_name,
                        scope,
                        is_bool,
                    },
                    name: name.to_string(),
                    line: line_no,
                });
            }

            return Some(Declaration {
                kind: DeclKind::Function,
                name: name.to_string(),
                line: line_no,
            });
        }

        if let Some(caps) = self.variable_re.captures(line) {
            let type_name = caps[1].to_string();
            let name = &caps[3];
            if is_keyword(first_word(line)) || is_keyword(&type_name) || is_keyword(name) {
                return None;
            }
            let is_pointer = !caps[2].is_empty();
            let one_bit = caps.get(4).is_some_and(|width| width.as_str() == "1");
            let is_bool = !is_pointer && (type_name == "bool" || one_bit);

            return Some(Declaration {
                kind: DeclKind::Variable {
                    type_name,
                    scope,
                    is_bool,
                },
                name: name.to_string(),
                line: line_no,
            });
        }

        None
    }

    fn classify_scope(&self, line: &str) -> Option<Frame> {
        if line.ends_with(';') {
            return None;
        }
        if self.class_re.is_match(line) {
            return Some(Frame::Class);
        }
        if line.contains('(') && !is_keyword(first_word(line)) {
            return Some(Frame::Function);
        }
        None
    }
}

/// Lines that continue a declaration head keep the pending scope:
/// a lone `{`, constructor initializer lists, and wrapped parameter lists.
fn keeps_pending(line: &str) -> bool {
    line.is_empty()
        || line == "{"
        || line.starts_with(':')
        || line.starts_with(',')
        || (line.contains(')') && !line.contains('('))
}

fn first_word(line: &str) -> &str {
    line.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .next()
        .unwrap_or("")
}

fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

/// Remove a leading `UPROPERTY(...)`-style macro, honouring nested parens.
fn strip_reflection_macro(line: &str) -> &str {
    let Some(name) = REFLECTION_MACROS
        .iter()
        .find(|name| line.starts_with(*name))
    else {
        return line;
    };

    let rest = line[name.len()..].trim_start();
    if !rest.starts_with('(') {
        return line;
    }

    let mut depth = 0usize;
    for (i, c) in rest.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return rest[i + 1..].trim();
                }
            }
            _ => {}
        }
    }
    // Arguments continue on the next line.
    ""
}

/// Drop comments and blank out string/char literal contents so that braces
/// and keywords inside them are not seen.
fn strip_comments_and_literals(line: &str, in_block_comment: &mut bool) -> String {
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if *in_block_comment {
            if c == '*' && chars.peek() == Some(&'/') {
                chars.next();
                *in_block_comment = false;
            }
            continue;
        }

        match c {
            '/' if chars.peek() == Some(&'/') => break,
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                *in_block_comment = true;
                out.push(' ');
            }
            '"' | '\'' => {
                out.push(c);
                while let Some(inner) = chars.next() {
                    if inner == '\\' {
                        chars.next();
                        continue;
                    }
                    if inner == c {
                        break;
                    }
                }
                out.push(c);
            }
            _ => out.push(c),
        }
    }

    out
}
