use std::path::{Path, PathBuf};

/// Literal directories zsh searches when `$FPATH` is not exported.
const FPATH_DIRS: &[&str] = &[
    "/usr/local/share/zsh/site-functions",
    "/opt/homebrew/share/zsh/site-functions",
];

/// Parent directory containing versioned zsh function dirs.
const ZSH_SHARE_DIR: &str = "/usr/share/zsh";

pub fn resolve_fpath_dirs() -> Vec<PathBuf> {
    if let Ok(fpath) = std::env::var("FPATH") {
        if !fpath.is_empty() {
            return parse_fpath(&fpath);
        }
    }

    fallback_fpath_dirs()
}

fn parse_fpath(fpath: &str) -> Vec<PathBuf> {
    fpath
        .split(':')
        .filter(|entry| !entry.is_empty())
        .map(PathBuf::from)
        .collect()
}

fn fallback_fpath_dirs() -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = FPATH_DIRS.iter().map(PathBuf::from).collect();
    if let Ok(entries) = std::fs::read_dir(ZSH_SHARE_DIR) {
        for entry in entries.flatten() {
            dirs.push(entry.path().join("functions"));
        }
    }
    dirs
}

pub fn is_on_fpath(dir: &Path) -> bool {
    is_listed(dir, &resolve_fpath_dirs())
}

fn is_listed(dir: &Path, fpath_dirs: &[PathBuf]) -> bool {
    let target = normalize(dir);
    fpath_dirs.iter().any(|entry| normalize(entry) == target)
}

fn normalize(path: &Path) -> PathBuf {
    path.canonicalize()
        .unwrap_or_else(|_| path.components().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fpath_skips_empty_entries() {
        let dirs = parse_fpath("/a/b::/c/");
        assert_eq!(dirs, vec![PathBuf::from("/a/b"), PathBuf::from("/c/")]);
    }

    #[test]
    fn test_is_listed_matches_trailing_slash() {
        let dirs = vec![PathBuf::from("/nonexistent/zsh/site-functions/")];
        assert!(is_listed(Path::new("/nonexistent/zsh/site-functions"), &dirs));
        assert!(!is_listed(Path::new("/nonexistent/zsh"), &dirs));
    }

    #[test]
    fn test_is_listed_canonicalizes_existing_dirs() {
        let dir = tempfile::TempDir::new().unwrap();
        let nested = dir.path().join("functions");
        std::fs::create_dir_all(&nested).unwrap();

        let dotted = dir.path().join(".").join("functions");
        assert!(is_listed(&dotted, &[nested.clone()]));
        assert!(!is_listed(dir.path(), &[nested]));
    }
}
