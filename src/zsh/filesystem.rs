use std::io;
use std::path::{Path, PathBuf};

use crate::spec::CommandNode;

use super::Generator;

pub(super) fn write_completion_file(
    generator: &Generator,
    root: &CommandNode,
    program_name: &str,
    dir: &Path,
) -> io::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let filename = format!("_{program_name}");
    let path = dir.join(filename);
    let content = generator.render(root, program_name);
    std::fs::write(&path, content)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_creates_dir_and_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let target = dir.path().join("nested").join("completions");
        let node = CommandNode::new("tool").help("A tool");

        let path = write_completion_file(&Generator::default(), &node, "tool", &target).unwrap();

        assert_eq!(path, target.join("_tool"));
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("#compdef tool\n"));
        assert!(content.contains("_tool() {"));
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("_tool"), "stale").unwrap();

        let node = CommandNode::new("tool");
        let path = write_completion_file(&Generator::default(), &node, "tool", dir.path()).unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        assert!(!content.contains("stale"));
    }
}
