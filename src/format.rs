/// Escapes text for insertion into HTML markup.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escaped HTML that keeps the text's line breaks.
pub fn multiline_html(text: &str) -> String {
    text.trim()
        .lines()
        .map(escape_html)
        .collect::<Vec<_>>()
        .join("<br>")
}

pub fn format_file_size(size: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size_f = size as f64;
    let mut unit_index = 0;

    while size_f >= 1024.0 && unit_index < UNITS.len() - 1 {
        size_f /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", size, UNITS[unit_index])
    } else {
        format!("{:.1} {}", size_f, UNITS[unit_index])
    }
}

/// Five stars, filled up to the rating rounded to the nearest whole star.
pub fn stars(rating: Option<f64>) -> String {
    let filled = rating.unwrap_or(0.0).round().clamp(0.0, 5.0) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

pub fn rating_label(rating: Option<f64>, count: u64) -> String {
    match rating {
        Some(avg) if count > 0 => format!("{:.1} ({} ratings)", avg, count),
        Some(avg) => format!("{:.1}", avg),
        None => "No ratings yet".to_string(),
    }
}

/// Badge colour for a file type as reported by the server.
pub fn file_type_color(file_type: &str) -> &'static str {
    match file_type.to_lowercase().as_str() {
        "pdf" => "#fab387",
        "doc" | "docx" | "odt" => "#89b4fa",
        "ppt" | "pptx" | "odp" => "#f38ba8",
        "xls" | "xlsx" | "csv" => "#a6e3a1",
        "jpg" | "jpeg" | "png" | "image" => "#cba6f7",
        "zip" | "rar" | "7z" => "#f9e2af",
        _ => "#6c7086",
    }
}

/// Short type label derived from a file name's extension.
pub fn file_type_from_name(filename: &str) -> String {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .filter(|ext| !ext.is_empty())
        .unwrap_or_else(|| "file".to_string())
}

pub fn semester_label(semester: Option<u8>) -> String {
    match semester {
        Some(s) => format!("Semester {}", s),
        None => "Any semester".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<script>alert("x") & 'y'</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;) &amp; &#39;y&#39;&lt;/script&gt;"
        );
        assert_eq!(escape_html("plain text"), "plain text");
    }

    #[test]
    fn test_multiline_html() {
        assert_eq!(multiline_html("a < b\nc & d\n"), "a &lt; b<br>c &amp; d");
        assert_eq!(multiline_html(""), "");
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(50 * 1024 * 1024), "50.0 MB");
    }

    #[test]
    fn test_stars() {
        assert_eq!(stars(None), "☆☆☆☆☆");
        assert_eq!(stars(Some(3.6)), "★★★★☆");
        assert_eq!(stars(Some(9.0)), "★★★★★");
    }

    #[test]
    fn test_rating_label() {
        assert_eq!(rating_label(Some(4.3), 8), "4.3 (8 ratings)");
        assert_eq!(rating_label(None, 0), "No ratings yet");
    }

    #[test]
    fn test_file_type_from_name() {
        assert_eq!(file_type_from_name("Unit1.PDF"), "pdf");
        assert_eq!(file_type_from_name("notes"), "file");
        assert_eq!(file_type_from_name("trailing."), "file");
    }
}
