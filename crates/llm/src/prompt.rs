/// Wrap the raw user text in the assistant's instruction template.
///
/// The text is inserted verbatim; the template includes a leading and a
/// trailing newline.
pub fn build_prompt(user_text: &str) -> String {
    format!(
        "\nYou are a calm, supportive wellness assistant.\n\n\
         Rules:\n\
         - No medical diagnosis\n\
         - No self-harm encouragement\n\
         - Be empathetic, practical, and clear\n\
         - Answer like ChatGPT\n\n\
         User message:\n\
         {user_text}\n"
    )
}
