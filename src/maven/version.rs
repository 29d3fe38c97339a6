// Parsing of `mvn --version` reports

use regex::Regex;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::path::PathBuf;
use std::sync::LazyLock;

static ANSI_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*[A-Za-z]").expect("valid ANSI regex"));

static VERSION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Apache Maven (\d+)\.(\d+)(?:\.(\d+))?(?:-(\S+))?").expect("valid version regex")
});

/// Maven release number, e.g. `3.9.6` or `4.0.0-rc-2`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MavenVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub qualifier: Option<String>,
}

impl MavenVersion {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
            qualifier: None,
        }
    }

    /// Parse an `Apache Maven ...` line
    pub fn parse_line(line: &str) -> Option<Self> {
        let caps = VERSION_LINE.captures(line.trim())?;
        let number =
            |i: usize| -> Option<u32> { caps.get(i).and_then(|m| m.as_str().parse().ok()) };

        Some(Self {
            major: number(1)?,
            minor: number(2)?,
            patch: number(3).unwrap_or(0),
            qualifier: caps.get(4).map(|m| m.as_str().to_string()),
        })
    }
}

impl fmt::Display for MavenVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(q) = &self.qualifier {
            write!(f, "-{q}")?;
        }
        Ok(())
    }
}

impl Ord for MavenVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| match (&self.qualifier, &other.qualifier) {
                (None, None) => Ordering::Equal,
                // a release sorts after its pre-releases
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => a.cmp(b),
            })
    }
}

impl PartialOrd for MavenVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Facts reported by `mvn --version`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MavenInfo {
    pub version: MavenVersion,
    pub maven_home: Option<PathBuf>,
    pub java_version: Option<String>,
}

impl MavenInfo {
    /// Parse the report; `None` if no version line is present
    pub fn parse(output: &str) -> Option<Self> {
        let plain = ANSI_ESCAPE.replace_all(output, "");

        let mut version = None;
        let mut maven_home = None;
        let mut java_version = None;

        for line in plain.lines().map(str::trim) {
            if version.is_none()
                && let Some(v) = MavenVersion::parse_line(line)
            {
                version = Some(v);
                continue;
            }
            if let Some(home) = line.strip_prefix("Maven home:") {
                maven_home = Some(PathBuf::from(home.trim()));
            } else if let Some(rest) = line.strip_prefix("Java version:") {
                // "17.0.9, vendor: Eclipse Adoptium, runtime: ..."
                let value = rest.split(',').next().unwrap_or_default().trim();
                if !value.is_empty() {
                    java_version = Some(value.to_string());
                }
            }
        }

        Some(Self {
            version: version?,
            maven_home,
            java_version,
        })
    }
}
