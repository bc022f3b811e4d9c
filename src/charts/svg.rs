pub const WIDTH: f64 = 800.0;
pub const HEIGHT: f64 = 500.0;

pub const PALETTE: &[&str] = &[
    "#636efa", "#EF553B", "#00cc96", "#ab63fa", "#FFA15A", "#19d3f3", "#FF6692", "#B6E880",
    "#FF97FF", "#FECB52",
];

pub fn color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

pub fn escape(text: &str) -> String {
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

pub fn open(width: f64, height: f64, title: &str) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width:.0}" height="{height:.0}" viewBox="0 0 {width:.0} {height:.0}" role="img" aria-label="{label}">
<text x="{x:.2}" y="32" font-size="20" text-anchor="middle">{label}</text>
"#,
        x = width / 2.0,
        label = escape(title),
    )
}

pub fn close() -> &'static str {
    "</svg>"
}

pub fn no_data(width: f64, height: f64) -> String {
    format!(
        r#"<text x="{:.2}" y="{:.2}" font-size="16" text-anchor="middle">No data</text>
"#,
        width / 2.0,
        height / 2.0
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
        assert_eq!(escape("Rock 'n' Roll"), "Rock &#39;n&#39; Roll");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_color_wraps() {
        assert_eq!(color(0), color(PALETTE.len()));
    }
}
