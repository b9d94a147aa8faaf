//! Route access rules, evaluated before any handler runs.
//!
//! An ordered list of (pattern, requirement) pairs; the first matching
//! pattern wins, and anything unmatched requires an authenticated caller.

/// What a matched path demands of the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Public,
    Authenticated,
}

/// The outcome of an access check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    RequireLogin,
}

#[derive(Debug, Clone)]
enum PathPattern {
    Exact(String),
    /// Written as `/prefix/**`; matches the prefix itself and everything
    /// below it.
    Prefix(String),
}

impl PathPattern {
    fn parse(pattern: &str) -> Self {
        match pattern.strip_suffix("/**") {
            Some(base) => PathPattern::Prefix(base.to_string()),
            None => PathPattern::Exact(pattern.to_string()),
        }
    }

    fn matches(&self, path: &str) -> bool {
        match self {
            PathPattern::Exact(exact) => path == exact,
            PathPattern::Prefix(base) => {
                path == base
                    || path
                        .strip_prefix(base.as_str())
                        .is_some_and(|rest| rest.starts_with('/'))
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct AccessPolicy {
    rules: Vec<(PathPattern, Requirement)>,
}

impl AccessPolicy {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn permit(mut self, pattern: &str) -> Self {
        self.rules
            .push((PathPattern::parse(pattern), Requirement::Public));
        self
    }

    pub fn require_auth(mut self, pattern: &str) -> Self {
        self.rules
            .push((PathPattern::parse(pattern), Requirement::Authenticated));
        self
    }

    /// The routes anyone may reach; everything else needs a session.
    pub fn default_policy() -> Self {
        Self::new()
            .permit("/login")
            .permit("/signup")
            .permit("/health")
            .permit("/static/**")
    }

    pub fn decide(&self, path: &str, authenticated: bool) -> Decision {
        let requirement = self
            .rules
            .iter()
            .find(|(pattern, _)| pattern.matches(path))
            .map(|(_, requirement)| *requirement)
            .unwrap_or(Requirement::Authenticated);

        match requirement {
            Requirement::Public => Decision::Allow,
            Requirement::Authenticated if authenticated => Decision::Allow,
            Requirement::Authenticated => Decision::RequireLogin,
        }
    }
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_paths_allow_anonymous_callers() {
        let policy = AccessPolicy::default_policy();
        assert_eq!(policy.decide("/login", false), Decision::Allow);
        assert_eq!(policy.decide("/signup", false), Decision::Allow);
        assert_eq!(policy.decide("/health", false), Decision::Allow);
    }

    #[test]
    fn unmatched_paths_require_a_session() {
        let policy = AccessPolicy::default_policy();
        assert_eq!(policy.decide("/home", false), Decision::RequireLogin);
        assert_eq!(policy.decide("/profile", false), Decision::RequireLogin);
        assert_eq!(policy.decide("/", false), Decision::RequireLogin);
        assert_eq!(policy.decide("/home", true), Decision::Allow);
    }

    #[test]
    fn prefix_pattern_covers_nested_paths() {
        let policy = AccessPolicy::default_policy();
        assert_eq!(policy.decide("/static", false), Decision::Allow);
        assert_eq!(policy.decide("/static/css/app.css", false), Decision::Allow);
        // A sibling path that merely shares the leading characters is not
        // under the prefix.
        assert_eq!(policy.decide("/staticfiles", false), Decision::RequireLogin);
    }

    #[test]
    fn exact_pattern_does_not_cover_children() {
        let policy = AccessPolicy::default_policy();
        assert_eq!(policy.decide("/login/help", false), Decision::RequireLogin);
    }

    #[test]
    fn first_matching_rule_wins() {
        let policy = AccessPolicy::new()
            .permit("/admin/login")
            .require_auth("/admin/**");
        assert_eq!(policy.decide("/admin/login", false), Decision::Allow);
        assert_eq!(policy.decide("/admin/users", false), Decision::RequireLogin);

        let reversed = AccessPolicy::new()
            .require_auth("/admin/**")
            .permit("/admin/login");
        assert_eq!(reversed.decide("/admin/login", false), Decision::RequireLogin);
    }
}
