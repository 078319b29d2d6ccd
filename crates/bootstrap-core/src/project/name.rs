//! Package naming rules for the derived app name
//!
//! Mirrors the npm registry restrictions for new packages. `check` collects
//! every violation so the operator sees the full list at once instead of
//! fixing them one re-run at a time.

const MAX_LENGTH: usize = 214;
const SPECIAL_CHARACTERS: &[char] = &['~', '\'', '!', '(', ')', '*'];

/// Collect all naming violations for `name`. Empty result means valid.
pub fn check(name: &str) -> Vec<String> {
    let mut violations = Vec::new();

    if name.is_empty() {
        violations.push("name length must be greater than zero".to_string());
        return violations;
    }

    if name.trim() != name {
        violations.push("name cannot contain leading or trailing spaces".to_string());
    }
    if name.starts_with('.') {
        violations.push("name cannot start with a period".to_string());
    }
    if name.starts_with('_') {
        violations.push("name cannot start with an underscore".to_string());
    }
    if name.len() > MAX_LENGTH {
        violations.push(format!(
            "name can no longer contain more than {} characters",
            MAX_LENGTH
        ));
    }
    if name.chars().any(|c| c.is_ascii_uppercase()) {
        violations.push("name can no longer contain capital letters".to_string());
    }
    if name.chars().any(|c| SPECIAL_CHARACTERS.contains(&c)) {
        violations.push("name can no longer contain special characters (\"~'!()*\")".to_string());
    }
    if !name.chars().all(is_url_friendly) {
        violations.push("name can only contain URL-friendly characters".to_string());
    }

    violations
}

// The unreserved set that survives URL encoding, plus the npm specials
// which are reported separately above.
fn is_url_friendly(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(c, '-' | '_' | '.')
        || SPECIAL_CHARACTERS.contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_typical_names() {
        assert!(check("my-app").is_empty());
        assert!(check("app2").is_empty());
        assert!(check("some.project").is_empty());
    }

    #[test]
    fn rejects_empty_name() {
        assert_eq!(check(""), vec!["name length must be greater than zero"]);
    }

    #[test]
    fn rejects_leading_period_and_underscore() {
        assert_eq!(check(".hidden"), vec!["name cannot start with a period"]);
        assert_eq!(check("_private"), vec!["name cannot start with an underscore"]);
    }

    #[test]
    fn rejects_capital_letters() {
        assert_eq!(check("MyApp"), vec!["name can no longer contain capital letters"]);
    }

    #[test]
    fn rejects_overlong_names() {
        let name = "a".repeat(MAX_LENGTH + 1);
        assert_eq!(
            check(&name),
            vec!["name can no longer contain more than 214 characters"]
        );
    }

    #[test]
    fn collects_every_violation() {
        let violations = check("My App!");
        assert!(violations.contains(&"name can no longer contain capital letters".to_string()));
        assert!(violations
            .contains(&"name can no longer contain special characters (\"~'!()*\")".to_string()));
        assert!(violations.contains(&"name can only contain URL-friendly characters".to_string()));
    }
}
