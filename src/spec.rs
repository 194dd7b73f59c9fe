use serde::{Deserialize, Serialize};

/// A node in a CLI's command tree: the program itself or one of its
/// (nested) subcommands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CommandNode {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub help: String,
    #[serde(skip_serializing_if = "is_false")]
    pub hidden: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub flags: Vec<Flag>,
    #[serde(alias = "subcommands", skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<CommandNode>,
}

/// Option/flag definition
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Flag {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short: Option<char>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub help: String,
    /// Flag takes no value (`--force` rather than `--color=red`).
    #[serde(rename = "bool", alias = "is_bool", skip_serializing_if = "is_false")]
    pub is_bool: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub hidden: bool,
    /// Closed set of accepted values. Empty means free-form input.
    #[serde(
        rename = "values",
        alias = "enum_values",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub enum_values: Vec<String>,
}

fn is_false(v: &bool) -> bool {
    !v
}

impl CommandNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn flag(mut self, flag: Flag) -> Self {
        self.flags.push(flag);
        self
    }

    pub fn child(mut self, child: CommandNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn visible_children(&self) -> impl Iterator<Item = &CommandNode> {
        self.children.iter().filter(|c| !c.hidden)
    }

    pub fn visible_flags(&self) -> impl Iterator<Item = &Flag> {
        self.flags.iter().filter(|f| !f.hidden)
    }

    pub fn has_visible_children(&self) -> bool {
        self.visible_children().next().is_some()
    }

    /// Number of nodes in this subtree, hidden ones included.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(CommandNode::count).sum::<usize>()
    }
}

impl Flag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    pub fn boolean(mut self) -> Self {
        self.is_bool = true;
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enum_values = values.into_iter().map(Into::into).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_filters() {
        let node = CommandNode::new("git")
            .flag(Flag::new("verbose").boolean())
            .flag(Flag::new("debug").boolean().hidden(true))
            .child(CommandNode::new("commit"))
            .child(CommandNode::new("internal").hidden(true));

        let flags: Vec<_> = node.visible_flags().map(|f| f.name.as_str()).collect();
        let children: Vec<_> = node.visible_children().map(|c| c.name.as_str()).collect();
        assert_eq!(flags, vec!["verbose"]);
        assert_eq!(children, vec!["commit"]);
        assert!(node.has_visible_children());
    }

    #[test]
    fn test_only_hidden_children() {
        let node = CommandNode::new("tool").child(CommandNode::new("secret").hidden(true));
        assert!(!node.has_visible_children());
        assert_eq!(node.count(), 2);
    }

    #[test]
    fn test_count_nested() {
        let node = CommandNode::new("a")
            .child(CommandNode::new("b").child(CommandNode::new("c")))
            .child(CommandNode::new("d"));
        assert_eq!(node.count(), 4);
    }
}
