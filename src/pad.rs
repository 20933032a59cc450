/// Left-pad `text` with `'0'` up to `width` characters.
///
/// Never truncates, and pads character-for-character without looking at
/// whether `text` is numeric.
pub fn pad_left(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }

    let mut padded = String::with_capacity(text.len() + width - len);
    padded.extend(std::iter::repeat('0').take(width - len));
    padded.push_str(text);
    padded
}
