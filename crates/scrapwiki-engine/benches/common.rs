// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_page_lines(sections: usize) -> Vec<String> {
    let base = [
        "[* Section]",
        "https://scrapbox.io/files/0a1b2c.jpg",
        "Caption under the photo",
        "Paragraph with [Oxalis] and [tomo.icon] and https://example.com/a #note",
        "> quoted line",
        "> another quoted line",
        "\tindented item [unknown link]",
        "\t\tdeeper item with a#b and C#",
        "",
    ];
    let mut lines: Vec<String> = (0..sections)
        .flat_map(|_| base.iter().map(|l| l.to_string()))
        .collect();
    lines.push("#seedling [winter-growing]".to_string());
    lines
}
