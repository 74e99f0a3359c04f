//! Input validation for messages and chat names
//!
//! Every field ends up on its own line in the export file, so line breaks
//! are rejected everywhere.

/// Separator between author and body on a log line.
pub const AUTHOR_SEPARATOR: &str = ": ";

fn has_line_break(s: &str) -> bool {
    s.contains('\r') || s.contains('\n')
}

/// Validates a message author
pub fn validate_author(author: &str) -> Result<(), String> {
    if author.trim().is_empty() {
        return Err("Author cannot be empty".to_string());
    }

    if has_line_break(author) {
        return Err("Author cannot contain newline characters".to_string());
    }

    // "alice: x" would be read back as author "alice"
    if author.contains(AUTHOR_SEPARATOR) {
        return Err(format!("Author cannot contain '{}'", AUTHOR_SEPARATOR));
    }

    Ok(())
}

/// Validates a chat name
pub fn validate_chat_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("Chat name cannot be empty".to_string());
    }

    if has_line_break(name) {
        return Err("Chat name cannot contain newline characters".to_string());
    }

    Ok(())
}

/// Validates an image or audio URL
pub fn validate_url(url: &str) -> Result<(), String> {
    if url.trim().is_empty() {
        return Err("URL cannot be empty".to_string());
    }

    if has_line_break(url) {
        return Err("URL cannot contain newline characters".to_string());
    }

    Ok(())
}

/// Validates text message content. Empty content is allowed.
pub fn validate_text(content: &str) -> Result<(), String> {
    if has_line_break(content) {
        return Err("Message cannot contain newline characters".to_string());
    }

    Ok(())
}

/// Sanitizes a single-line input by removing line breaks and NULs
pub fn sanitize_line(input: &str) -> String {
    input
        .chars()
        .filter(|&c| c != '\r' && c != '\n' && c != '\0')
        .collect()
}
