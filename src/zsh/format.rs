use crate::spec::{CommandNode, Flag};

/// Render one `_arguments` spec for a flag, e.g.
/// `'(-c --color=)'{-c,--color=}"[Color]:color:(red green blue)"`.
pub(super) fn format_flag(flag: &Flag) -> String {
    let eq = if flag.is_bool { "" } else { "=" };
    let long = &flag.name;

    let mut spec = match flag.short {
        Some(short) => format!("'(-{short} --{long}{eq})'{{-{short},--{long}{eq}}}\""),
        None => format!("\"--{long}{eq}"),
    };

    spec.push_str(&format!("[{}]", escape_description(&flag.help)));

    if !flag.is_bool {
        spec.push_str(&format!(":{}:", escape_message(&flag.help.to_lowercase())));
    }

    if !flag.enum_values.is_empty() {
        let values = flag
            .enum_values
            .iter()
            .map(|v| escape_value(v))
            .collect::<Vec<_>>()
            .join(" ");
        spec.push_str(&format!("({values})"));
    }

    spec.push('"');
    spec
}

/// Render a `_values` candidate for a subcommand: `"name[help]"`.
pub(super) fn format_command_value(cmd: &CommandNode) -> String {
    format!(
        "\"{}[{}]\"",
        escape_double_quoted(&cmd.name),
        escape_description(&cmd.help)
    )
}

fn escape_double_quoted(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('$', "\\$")
        .replace('`', "\\`")
}

/// Text inside `[...]`.
pub(super) fn escape_description(value: &str) -> String {
    escape_double_quoted(value)
        .replace('[', "\\[")
        .replace(']', "\\]")
}

/// Text between the `:` separators of an argument message.
fn escape_message(value: &str) -> String {
    escape_description(value).replace(':', "\\:")
}

fn escape_value(value: &str) -> String {
    escape_message(value)
        .replace(' ', "\\ ")
        .replace('(', "\\(")
        .replace(')', "\\)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolean_flag_with_short() {
        let flag = Flag::new("force").short('f').help("Force it").boolean();
        assert_eq!(
            format_flag(&flag),
            r#"'(-f --force)'{-f,--force}"[Force it]""#
        );
    }

    #[test]
    fn test_value_flag_with_short() {
        let flag = Flag::new("limit").short('l').help("Maximum Count");
        assert_eq!(
            format_flag(&flag),
            r#"'(-l --limit=)'{-l,--limit=}"[Maximum Count]:maximum count:""#
        );
    }

    #[test]
    fn test_enum_flag_without_short() {
        let flag = Flag::new("color")
            .help("Color")
            .values(["red", "green", "blue"]);
        assert_eq!(
            format_flag(&flag),
            r#""--color=[Color]:color:(red green blue)""#
        );
    }

    #[test]
    fn test_boolean_flag_without_short() {
        let flag = Flag::new("quiet").help("Be quiet").boolean();
        assert_eq!(format_flag(&flag), r#""--quiet[Be quiet]""#);
    }

    #[test]
    fn test_empty_help() {
        let flag = Flag::new("name");
        assert_eq!(format_flag(&flag), r#""--name=[]::""#);
    }

    #[test]
    fn test_escape_description() {
        assert_eq!(
            escape_description(r#"Use "$HOME" [default]"#),
            r#"Use \"\$HOME\" \[default\]"#
        );
        assert_eq!(escape_description("plain text"), "plain text");
    }

    #[test]
    fn test_escape_message_and_values() {
        let flag = Flag::new("sep")
            .help("Separator: char")
            .values(["a b", "(x)"]);
        assert_eq!(
            format_flag(&flag),
            r#""--sep=[Separator: char]:separator\: char:(a\ b \(x\))""#
        );
    }

    #[test]
    fn test_command_value() {
        let cmd = CommandNode::new("choose").help("Choose an option");
        assert_eq!(format_command_value(&cmd), r#""choose[Choose an option]""#);
    }
}
