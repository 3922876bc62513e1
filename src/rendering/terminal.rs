use owo_colors::OwoColorize;

use super::{Render, Syntax};

/// Embellish fragments with ANSI escapes for display in a terminal.
pub struct Terminal;

impl Render for Terminal {
    fn style(&self, syntax: Syntax, content: &str) -> String {
        match syntax {
            Syntax::Neutral => content.to_string(),
            Syntax::Error => content
                .bright_red()
                .to_string(),
            Syntax::Problem => content
                .bold()
                .to_string(),
            Syntax::Gutter => content
                .bright_blue()
                .to_string(),
            Syntax::Caret => content
                .bright_red()
                .to_string(),
            Syntax::Keyword => content // entity.name.function - #3465a4 (blue) bold
                .color(owo_colors::Rgb(0x34, 0x65, 0xa4))
                .bold()
                .to_string(),
            Syntax::String => content // string - #4e9a06 (green) bold
                .color(owo_colors::Rgb(0x4e, 0x9a, 0x06))
                .bold()
                .to_string(),
        }
    }
}

#[cfg(test)]
mod check {
    use super::Terminal;
    use crate::rendering::{Identity, Render, Syntax};

    #[test]
    fn identity_is_plain() {
        assert_eq!(Identity.style(Syntax::Error, "error"), "error");
    }

    #[test]
    fn terminal_adds_escapes() {
        let styled = Terminal.style(Syntax::Error, "error");
        assert!(styled.contains("error"));
        assert!(styled.starts_with("\u{1b}["));

        assert_eq!(Terminal.style(Syntax::Neutral, "plain"), "plain");
    }
}
