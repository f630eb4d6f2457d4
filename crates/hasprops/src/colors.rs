//! Color literal detection and CSS color string rendering.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::collections::HashSet;

/// The CSS/SVG named colors, lowercase.
pub const NAMED_COLORS: &[&str] = &[
    "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure", "beige", "bisque", "black",
    "blanchedalmond", "blue", "blueviolet", "brown", "burlywood", "cadetblue", "chartreuse",
    "chocolate", "coral", "cornflowerblue", "cornsilk", "crimson", "cyan", "darkblue", "darkcyan",
    "darkgoldenrod", "darkgray", "darkgreen", "darkgrey", "darkkhaki", "darkmagenta",
    "darkolivegreen", "darkorange", "darkorchid", "darkred", "darksalmon", "darkseagreen",
    "darkslateblue", "darkslategray", "darkslategrey", "darkturquoise", "darkviolet", "deeppink",
    "deepskyblue", "dimgray", "dimgrey", "dodgerblue", "firebrick", "floralwhite", "forestgreen",
    "fuchsia", "gainsboro", "ghostwhite", "gold", "goldenrod", "gray", "green", "greenyellow",
    "grey", "honeydew", "hotpink", "indianred", "indigo", "ivory", "khaki", "lavender",
    "lavenderblush", "lawngreen", "lemonchiffon", "lightblue", "lightcoral", "lightcyan",
    "lightgoldenrodyellow", "lightgray", "lightgreen", "lightgrey", "lightpink", "lightsalmon",
    "lightseagreen", "lightskyblue", "lightslategray", "lightslategrey", "lightsteelblue",
    "lightyellow", "lime", "limegreen", "linen", "magenta", "maroon", "mediumaquamarine",
    "mediumblue", "mediumorchid", "mediumpurple", "mediumseagreen", "mediumslateblue",
    "mediumspringgreen", "mediumturquoise", "mediumvioletred", "midnightblue", "mintcream",
    "mistyrose", "moccasin", "navajowhite", "navy", "oldlace", "olive", "olivedrab", "orange",
    "orangered", "orchid", "palegoldenrod", "palegreen", "paleturquoise", "palevioletred",
    "papayawhip", "peachpuff", "peru", "pink", "plum", "powderblue", "purple", "red", "rosybrown",
    "royalblue", "saddlebrown", "salmon", "sandybrown", "seagreen", "seashell", "sienna", "silver",
    "skyblue", "slateblue", "slategray", "slategrey", "snow", "springgreen", "steelblue", "tan",
    "teal", "thistle", "tomato", "turquoise", "violet", "wheat", "white", "whitesmoke", "yellow",
    "yellowgreen",
];

static NAMED_COLOR_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| NAMED_COLORS.iter().copied().collect());

static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("valid hex color pattern"));

/// Returns `true` if `name` is in the named color table.
///
/// Matching is case-sensitive: `"Red"` is not a color, it is a field name.
pub fn is_named_color(name: &str) -> bool {
    NAMED_COLOR_SET.contains(name)
}

/// Returns `true` for `#` followed by exactly six hex digits.
pub fn is_hex_color(s: &str) -> bool {
    HEX_COLOR.is_match(s)
}

/// Returns `true` if the string is a color literal rather than a field name.
pub fn is_color_string(s: &str) -> bool {
    is_named_color(s) || is_hex_color(s)
}

/// Returns the channels of a 3- or 4-element all-numeric array.
pub fn color_channels(value: &Value) -> Option<&[Value]> {
    match value {
        Value::Array(items) if (items.len() == 3 || items.len() == 4)
            && items.iter().all(Value::is_number) =>
        {
            Some(items)
        }
        _ => None,
    }
}

/// Renders numeric channels as a CSS `rgb(...)` or `rgba(...)` string.
///
/// Channels are written as given, so integers carry no decimal point.
///
/// # Example
///
/// ```rust
/// use hasprops::colors::css_color;
/// use serde_json::json;
///
/// assert_eq!(css_color(&json!([128, 200, 255])).unwrap(), "rgb(128, 200, 255)");
/// assert_eq!(css_color(&json!([100, 150, 200, 0.5])).unwrap(), "rgba(100, 150, 200, 0.5)");
/// assert!(css_color(&json!("red")).is_none());
/// ```
pub fn css_color(value: &Value) -> Option<String> {
    let channels = color_channels(value)?;
    let rendered: Vec<String> = channels.iter().map(Value::to_string).collect();
    let func = if channels.len() == 3 { "rgb" } else { "rgba" };
    Some(format!("{}({})", func, rendered.join(", ")))
}

/// Renders a color value for the wire: channel arrays become CSS strings,
/// anything else is returned unchanged.
pub fn render_color(value: &Value) -> Value {
    match css_color(value) {
        Some(css) => Value::String(css),
        None => value.clone(),
    }
}
