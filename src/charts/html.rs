use super::svg::escape;

/// Wraps an inline SVG into a self-contained page: no scripts, no external resources.
pub fn document(title: &str, svg: &str) -> String {
    let title = escape(title);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
body {{ margin: 0; padding: 24px; font-family: "Open Sans", Verdana, Arial, sans-serif; color: #2a3f5f; background: #ffffff; }}
figure {{ margin: 0; }}
svg text {{ fill: #2a3f5f; }}
</style>
</head>
<body>
<figure>
{svg}
</figure>
</body>
</html>
"#
    )
}
