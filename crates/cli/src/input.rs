//! Interpretation of raw terminal input lines.

/// What a single line typed at the prompt asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Text to hand to the responder, already trimmed.
    Message(String),
    /// Blank line; prompt again.
    Skip,
    /// `/quit` or `/exit`.
    Quit,
}

/// Decode one line read from the terminal.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, so a
/// stray byte from a mis-set locale costs one character, not the session.
pub fn parse_line(raw: &[u8]) -> Input {
    let text = String::from_utf8_lossy(raw);
    let text = text.trim();

    match text {
        "" => Input::Skip,
        "/quit" | "/exit" => Input::Quit,
        _ => Input::Message(text.to_string()),
    }
}
