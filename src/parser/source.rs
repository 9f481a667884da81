//! Module source parsing utilities.
//!
//! Only GitHub-hosted sources are understood, in the forms Terraform accepts
//! for generic Git fetches:
//!
//! - `git::https://github.com/org/repo.git?ref=v1.0.0`
//! - `github.com/org/repo?ref=main`
//!
//! Parsing is plain string manipulation. Nothing is resolved or validated.

/// Substring a source must contain to be reported.
pub const GITHUB_HOST: &str = "github.com";

/// Prefix forcing Terraform's generic Git getter.
const GIT_FORCE_PREFIX: &str = "git::";

/// Query key carrying the revision.
const REF_KEY: &str = "ref";

/// Check whether a source string points at GitHub.
#[must_use]
pub fn is_github_source(source: &str) -> bool {
    source.contains(GITHUB_HOST)
}

/// Split a module source into its repository location and ref.
///
/// The first `ref=` query token wins; a missing ref yields an empty string.
///
/// # Examples
///
/// ```rust
/// use tfmodscan::parser::parse_github_source;
///
/// let (repo, version) = parse_github_source("git::https://github.com/org/repo.git?ref=v1.2.0");
/// assert_eq!(repo, "https://github.com/org/repo");
/// assert_eq!(version, "v1.2.0");
/// ```
#[must_use]
pub fn parse_github_source(source: &str) -> (String, String) {
    let source = source.strip_prefix(GIT_FORCE_PREFIX).unwrap_or(source);

    let (base, query) = match source.split_once('?') {
        Some((base, query)) => (base, Some(query)),
        None => (source, None),
    };

    let version = query
        .and_then(|q| {
            q.split('&').find_map(|token| match token.split_once('=') {
                Some((key, value)) if key == REF_KEY => Some(value),
                _ => None,
            })
        })
        .unwrap_or_default();

    let repository = base.strip_suffix(".git").unwrap_or(base);

    (repository.to_string(), version.to_string())
}

/// Derive a display name from a repository location.
///
/// Drops the first `/`-separated segment. For scheme-qualified URLs that
/// segment is the scheme itself (`https:`), so the empty segment between
/// `//` survives and the name keeps a leading `/`. Inputs without a `/`
/// come back unchanged.
#[must_use]
pub fn module_name_from_repository(repository: &str) -> String {
    match repository.split_once('/') {
        Some((_, rest)) => rest.to_string(),
        None => repository.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("git::https://github.com/org/repo.git?ref=v1.2.0", "https://github.com/org/repo", "v1.2.0" ; "git prefix with ref")]
    #[test_case("github.com/org/repo", "github.com/org/repo", "" ; "shorthand without ref")]
    #[test_case("git::https://github.com/org/repo.git", "https://github.com/org/repo", "" ; "no query")]
    #[test_case("github.com/org/repo.git?depth=1&ref=main", "github.com/org/repo", "main" ; "ref after other key")]
    #[test_case("github.com/org/repo?ref=v1&ref=v2", "github.com/org/repo", "v1" ; "first ref wins")]
    #[test_case("github.com/org/repo?depth=1", "github.com/org/repo", "" ; "query without ref")]
    #[test_case("github.com/org/repo?reference=x", "github.com/org/repo", "" ; "key must be exactly ref")]
    #[test_case("github.com/org/repo?ref=", "github.com/org/repo", "" ; "empty ref")]
    #[test_case("git::git@github.com:org/repo.git?ref=abc123", "git@github.com:org/repo", "abc123" ; "scp style")]
    fn test_parse_github_source(source: &str, repository: &str, version: &str) {
        let (r, v) = parse_github_source(source);
        assert_eq!(r, repository);
        assert_eq!(v, version);
    }

    #[test]
    fn test_git_suffix_only_stripped_at_end() {
        let (repo, _) = parse_github_source("github.com/org/repo.github.io");
        assert_eq!(repo, "github.com/org/repo.github.io");
    }

    #[test]
    fn test_ref_keeps_subdirectory_suffix() {
        let source = "git::https://github.com/org/repo.git?ref=v1.0.0//modules/vpc";
        let (repo, version) = parse_github_source(source);
        assert_eq!(repo, "https://github.com/org/repo");
        assert_eq!(version, "v1.0.0//modules/vpc");
    }

    #[test_case("github.com/org/repo", "org/repo" ; "shorthand")]
    #[test_case("https://github.com/org/repo", "/github.com/org/repo" ; "scheme keeps empty segment")]
    #[test_case("github.com", "github.com" ; "single segment falls back")]
    #[test_case("github.com/", "" ; "trailing slash")]
    fn test_module_name_from_repository(repository: &str, expected: &str) {
        assert_eq!(module_name_from_repository(repository), expected);
    }

    #[test]
    fn test_is_github_source() {
        assert!(is_github_source("git::https://github.com/org/repo.git"));
        assert!(is_github_source("github.com/org/repo"));
        assert!(!is_github_source("terraform-aws-modules/vpc/aws"));
        assert!(!is_github_source("../modules/vpc"));
        assert!(!is_github_source("git::https://gitlab.com/org/repo.git"));
    }
}
