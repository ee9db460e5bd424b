//! GitHub repository reference parsing.

use regex::Regex;

/// A GitHub repository identified by owner and name.
///
/// Parsed from the manifest's repository URL. Both segments are guaranteed
/// non-empty by the parse.
///
/// # Example
///
/// ```rust
/// use pm_shim::RepoRef;
///
/// let repo = RepoRef::parse("git@github.com:acme/tool.git").unwrap();
/// assert_eq!(repo.owner, "acme");
/// assert_eq!(repo.repo, "tool");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    /// Repository owner (user or organization).
    pub owner: String,
    /// Repository name, without the `.git` suffix.
    pub repo: String,
}

impl RepoRef {
    /// Parse a GitHub repository URL into owner and repo.
    ///
    /// Accepts HTTPS form (`https://github.com/owner/repo`) and SSH form
    /// (`git@github.com:owner/repo`), each with or without a trailing
    /// `.git`. Returns `None` for anything that does not end in a GitHub
    /// owner/repo pair.
    pub fn parse(url: &str) -> Option<Self> {
        // The `?` keeps the repo segment from swallowing the .git suffix.
        let re = Regex::new(r"github\.com[/:]([^/]+)/([^/]+?)(?:\.git)?$")
            .expect("Invalid regex pattern");

        let caps = re.captures(url)?;
        Some(Self {
            owner: caps[1].to_string(),
            repo: caps[2].to_string(),
        })
    }
}
