/// Whole-line image type: a line that is only an image URL, optionally
/// wrapped in one pair of brackets.
pub struct BlockImage;

impl BlockImage {
    pub const OPEN: char = '[';
    pub const CLOSE: char = ']';

    /// Recognized image extensions, compared case-insensitively.
    pub const EXTENSIONS: [&'static str; 5] = [".png", ".jpg", ".jpeg", ".gif", ".webp"];

    /// Returns the image URL if the trimmed line is nothing but one.
    pub fn parse(line: &str) -> Option<&str> {
        let trimmed = line.trim();
        let url = trimmed
            .strip_prefix(Self::OPEN)
            .and_then(|rest| rest.strip_suffix(Self::CLOSE))
            .unwrap_or(trimmed);

        let is_url = is_web_url(url)
            && !url.contains(|c: char| c.is_whitespace() || c == Self::OPEN || c == Self::CLOSE);
        (is_url && has_image_extension(url)).then_some(url)
    }
}

pub fn is_web_url(s: &str) -> bool {
    ["http://", "https://"]
        .iter()
        .any(|&scheme| s.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty()))
}

pub fn has_image_extension(s: &str) -> bool {
    let lower = s.to_ascii_lowercase();
    BlockImage::EXTENSIONS.iter().any(|&ext| lower.ends_with(ext))
}
