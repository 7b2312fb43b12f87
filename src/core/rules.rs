use crate::domain::model::{DeclKind, Declaration, RuleKind, VarScope, Violation};
use crate::domain::ports::{ConfigProvider, EnabledRules};
use std::collections::HashSet;
use std::path::Path;

pub const DEFAULT_CLASS_PREFIXES: &[&str] = &["A", "U", "F", "E", "I"];
pub const DEFAULT_BOOL_PREFIX: &str = "b";

/// First char uppercase, no underscores.
pub fn is_pascal_case(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_uppercase()) && !name.contains('_')
}

/// First char lowercase, no underscores.
pub fn is_camel_case(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_lowercase()) && !name.contains('_')
}

pub fn check_class(name: &str, prefixes: &[String]) -> Option<(RuleKind, String)> {
    let matching: Vec<&String> = prefixes.iter().filter(|p| name.starts_with(p.as_str())).collect();

    if matching.is_empty() {
        return Some((
            RuleKind::ClassPrefix,
            format!("Class '{}' should start with [{}]", name, prefixes.join(", ")),
        ));
    }

    // `Actor` starts with `A` but the prefix is not followed by a word.
    let well_formed = !name.contains('_')
        && matching
            .iter()
            .any(|prefix| is_pascal_case(&name[prefix.len()..]));
    if !well_formed {
        return Some((
            RuleKind::ClassCase,
            format!("Class '{}' should be PascalCase", name),
        ));
    }

    None
}

pub fn check_function(name: &str) -> Option<(RuleKind, String)> {
    if !is_pascal_case(name) {
        return Some((
            RuleKind::FunctionCase,
            format!("Function '{}' should be PascalCase", name),
        ));
    }
    None
}

pub fn check_variable(
    name: &str,
    is_bool: bool,
    scope: VarScope,
    bool_prefix: &str,
) -> Option<(RuleKind, String)> {
    if is_bool {
        let prefixed = name
            .strip_prefix(bool_prefix)
            .is_some_and(is_pascal_case);
        if !prefixed {
            return Some((
                RuleKind::BoolPrefix,
                format!("Boolean variable '{}' should start with '{}'", name, bool_prefix),
            ));
        }
        return None;
    }

    let treat_as_member = match scope {
        VarScope::Member => true,
        VarScope::Local => false,
        // Without an enclosing scope, guess from the first letter.
        VarScope::Global => name.chars().next().is_some_and(|c| c.is_uppercase()),
    };

    if treat_as_member {
        if !is_pascal_case(name) {
            return Some((
                RuleKind::MemberCase,
                format!("Member variable '{}' should be PascalCase", name),
            ));
        }
    } else if !is_camel_case(name) {
        return Some((
            RuleKind::LocalCase,
            format!("Local variable '{}' should be camelCase", name),
        ));
    }

    None
}

/// Applies the naming rules to scanned declarations under one configuration.
#[derive(Debug, Clone)]
pub struct Checker {
    class_prefixes: Vec<String>,
    bool_prefix: String,
    ignore_names: HashSet<String>,
    enabled: EnabledRules,
}

impl Checker {
    pub fn new(
        class_prefixes: Vec<String>,
        bool_prefix: String,
        ignore_names: &[String],
        enabled: EnabledRules,
    ) -> Self {
        Self {
            class_prefixes,
            bool_prefix,
            ignore_names: ignore_names.iter().cloned().collect(),
            enabled,
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(
            config.class_prefixes().to_vec(),
            config.bool_prefix().to_string(),
            config.ignore_names(),
            config.enabled_rules(),
        )
    }

    pub fn check(&self, path: &Path, decl: &Declaration) -> Option<Violation> {
        if self.ignore_names.contains(&decl.name) {
            return None;
        }

        let (rule, message) = match &decl.kind {
            DeclKind::Class if self.enabled.classes => {
                check_class(&decl.name, &self.class_prefixes)?
            }
            DeclKind::Function if self.enabled.functions => check_function(&decl.name)?,
            DeclKind::Variable { scope, is_bool, .. } if self.enabled.variables => {
                check_variable(&decl.name, *is_bool, *scope, &self.bool_prefix)?
            }
            _ => return None,
        };

        Some(Violation {
            path: path.to_path_buf(),
            line: decl.line,
            rule,
            name: decl.name.clone(),
            message: format!("❌ {}", message),
        })
    }
}

impl Default for Checker {
    fn default() -> Self {
        Self::new(
            DEFAULT_CLASS_PREFIXES.iter().map(|p| p.to_string()).collect(),
            DEFAULT_BOOL_PREFIX.to_string(),
            &[],
            EnabledRules::default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefixes() -> Vec<String> {
        DEFAULT_CLASS_PREFIXES.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_class_prefix() {
        assert!(check_class("AMyGoodActor", &prefixes()).is_none());
        assert!(check_class("UHealthComponent", &prefixes()).is_none());
        assert!(check_class("FDamageEvent", &prefixes()).is_none());

        let (rule, message) = check_class("MyBadActor", &prefixes()).unwrap();
        assert_eq!(rule, RuleKind::ClassPrefix);
        assert_eq!(message, "Class 'MyBadActor' should start with [A, U, F, E, I]");
    }

    #[test]
    fn test_class_prefix_must_be_followed_by_word() {
        let (rule, _) = check_class("Actor", &prefixes()).unwrap();
        assert_eq!(rule, RuleKind::ClassCase);

        let (rule, _) = check_class("AMy_Actor", &prefixes()).unwrap();
        assert_eq!(rule, RuleKind::ClassCase);
    }

    #[test]
    fn test_function_case() {
        assert!(check_function("TakeDamage").is_none());
        let (rule, message) = check_function("take_damage").unwrap();
        assert_eq!(rule, RuleKind::FunctionCase);
        assert_eq!(message, "Function 'take_damage' should be PascalCase");
    }

    #[test]
    fn test_bool_prefix_applies_in_every_scope() {
        assert!(check_variable("bIsAlive", true, VarScope::Member, "b").is_none());
        assert!(check_variable("bShouldDie", true, VarScope::Local, "b").is_none());

        let (rule, _) = check_variable("IsAlive", true, VarScope::Member, "b").unwrap();
        assert_eq!(rule, RuleKind::BoolPrefix);
        let (rule, _) = check_variable("isAlive", true, VarScope::Local, "b").unwrap();
        assert_eq!(rule, RuleKind::BoolPrefix);
        let (rule, _) = check_variable("balive", true, VarScope::Local, "b").unwrap();
        assert_eq!(rule, RuleKind::BoolPrefix);
    }

    #[test]
    fn test_member_and_local_case() {
        assert!(check_variable("HealthPoints", false, VarScope::Member, "b").is_none());
        assert!(check_variable("newHealth", false, VarScope::Local, "b").is_none());

        let (rule, message) =
            check_variable("health_points", false, VarScope::Member, "b").unwrap();
        assert_eq!(rule, RuleKind::MemberCase);
        assert_eq!(message, "Member variable 'health_points' should be PascalCase");

        let (rule, _) = check_variable("NewHealth", false, VarScope::Local, "b").unwrap();
        assert_eq!(rule, RuleKind::LocalCase);
    }

    #[test]
    fn test_global_scope_guesses_from_first_letter() {
        assert!(check_variable("GWorldCount", false, VarScope::Global, "b").is_none());
        assert!(check_variable("counter", false, VarScope::Global, "b").is_none());
        let (rule, _) = check_variable("G_Count", false, VarScope::Global, "b").unwrap();
        assert_eq!(rule, RuleKind::MemberCase);
    }

    #[test]
    fn test_checker_ignores_names_and_disabled_rules() {
        let decl = Declaration {
            kind: DeclKind::Function,
            name: "main".to_string(),
            line: 3,
        };
        let path = Path::new("Source/Main.cpp");

        let violation = Checker::default().check(path, &decl).unwrap();
        assert_eq!(violation.line, 3);
        assert_eq!(violation.message, "❌ Function 'main' should be PascalCase");

        let ignoring = Checker::new(prefixes(), "b".to_string(), &["main".to_string()], EnabledRules::default());
        assert!(ignoring.check(path, &decl).is_none());

        let no_functions = Checker::new(
            prefixes(),
            "b".to_string(),
            &[],
            EnabledRules {
                functions: false,
                ..EnabledRules::default()
            },
        );
        assert!(no_functions.check(path, &decl).is_none());
    }
}
