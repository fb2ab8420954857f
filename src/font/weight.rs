/// Determine the weight value from a style or subfamily name
///
/// Works on run-together PostScript styles too ("SemiBoldItalic", "AvianoSansThin").
pub fn determine_weight(style: &str) -> u16 {
    let s = style.to_lowercase().replace(|c: char| matches!(c, ' ' | '-' | '_'), "");

    match s.as_str() {
        s if s.contains("hairline") || s.contains("thin") => 100,
        s if s.contains("extralight") || s.contains("ultralight") => 200,
        s if s.contains("semilight") || s.contains("demilight") => 350,
        s if s.contains("light") => 300,
        s if s.contains("medium") => 500,
        s if s.contains("semibold") || s.contains("demibold") => 600,
        s if s.contains("extrabold") || s.contains("ultrabold") => 800,
        s if s.contains("bold") => 700,
        s if s.contains("extrablack") || s.contains("ultrablack") => 950,
        s if s.contains("black") || s.contains("heavy") => 900,
        _ => 400, // regular, normal, book and anything unrecognised
    }
}

/// Check if a font is italic based on its style name
pub fn is_italic_font(style: &str) -> bool {
    let style = style.to_lowercase();
    style.contains("italic") || style.contains("oblique")
}
