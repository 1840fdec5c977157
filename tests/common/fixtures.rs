//! Test fixtures and constants.

/// Reference colors used across tests
pub mod colors {
    /// Brand blue searched for in most tests
    pub const BRAND: &str = "#336699";

    /// One step off in the blue channel, ΔE00 ≈ 0.18
    pub const BRAND_NEAR: &str = "#336698";

    /// Same hue family but clearly lighter, ΔE00 ≈ 19.5
    pub const BRAND_LIGHT: &str = "#6699CC";

    pub const RED: &str = "#FF0000";
}

/// A stylesheet with one exact, one near and one distant brand color
pub const STYLESHEET: &str = "\
.header {
  background: #336699;
  color: #ffffff;
}
.button {
  border: 1px solid #336698;
}
.link:hover {
  color: #6699CC;
}
";

/// Markup with an inline near match and a token that must not match
pub const MARKUP: &str = "\
<div style=\"color: #336698\">hi</div>
<span data-id=\"#3366990\">not a color</span>
";

/// Script without any brand color
pub const SCRIPT: &str = "const accent = '#FF0000';\n";

/// Config that widens epsilon and adds red as a reference
pub const WIDE_CONFIG: &str = "\
epsilon: 25.0
colors:
  - \"#FF0000\"
extensions: [css]
";
