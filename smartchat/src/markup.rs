//! Chatbox text markup.
//!
//! The game renders widget text with inline tags such as `<col=ff0000>`.
//! Typed text must be escaped before it is wrapped, otherwise a player typing
//! `<` would open a tag.

use chatcolor_core::Rgb;

/// Suffix of the chat input while chat is locked by key remapping.
pub const LOCKED_CHAT_SUFFIX: &str = "Press Enter to Chat...";

/// Marker the game appends to text that has not been sent yet.
pub const UNSENT_MARKER: char = '*';

/// Escape characters that would otherwise be read as markup.
pub fn escape_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '<' => out.push_str("<lt>"),
            '>' => out.push_str("<gt>"),
            '\n' => out.push_str("<br>"),
            '\r' => {}
            _ => out.push(ch),
        }
    }
    out
}

/// Wrap `text` in a color tag.
pub fn wrap_with_color_tag(text: &str, color: Rgb) -> String {
    format!("<col={}>{}</col>", color.hex_code(), text)
}

/// Full input line: speaker name followed by the colored, unsent text.
pub fn input_line(name: &str, typed_text: &str, color: Rgb) -> String {
    let mut body = escape_tags(typed_text);
    body.push(UNSENT_MARKER);
    format!("{}: {}", name, wrap_with_color_tag(&body, color))
}

/// Speaker name shown in front of the input, if the widget text has one.
pub fn speaker_name(input: &str) -> Option<&str> {
    input.split_once(':').map(|(name, _)| name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_tag_characters() {
        assert_eq!(escape_tags("a<b>c"), "a<lt>b<gt>c");
        assert_eq!(escape_tags("line\r\nnext"), "line<br>next");
        assert_eq!(escape_tags("plain"), "plain");
    }

    #[test]
    fn builds_input_line() {
        let line = input_line("Zezima", "/c <hi>", Rgb::new(0x7F0000));
        assert_eq!(line, "Zezima: <col=7f0000>/c <lt>hi<gt>*</col>");
    }

    #[test]
    fn speaker_name_is_text_before_first_colon() {
        assert_eq!(speaker_name("Zezima: hello: there*"), Some("Zezima"));
        assert_eq!(speaker_name("no colon"), None);
    }
}
