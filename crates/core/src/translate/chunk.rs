/// Default ceiling for a single translation request, in characters.
pub const MAX_CHUNK_CHARS: usize = 4500;

/// Splits `text` into pieces of at most `max_chars` characters made of
/// whole lines. A single line longer than the limit becomes its own chunk.
///
/// Joining the result with `'\n'` gives back `text`.
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<String> {
    if text.chars().count() <= max_chars {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current: Option<(String, usize)> = None;

    for line in text.split('\n') {
        let line_len = line.chars().count();

        match current.as_mut() {
            Some((chunk, len)) if *len + 1 + line_len <= max_chars => {
                chunk.push('\n');
                chunk.push_str(line);
                *len += 1 + line_len;
            }
            _ => {
                if let Some((chunk, _)) = current.take() {
                    chunks.push(chunk);
                }
                current = Some((line.to_string(), line_len));
            }
        }
    }

    if let Some((chunk, _)) = current {
        chunks.push(chunk);
    }

    chunks
}
