//! Document Transforms
//!
//! Text-level passes applied to an extracted document before it is handed
//! to the sandboxed rendering surface. Both passes are total: when their
//! target pattern is absent they leave the document unchanged, and neither
//! touches anything outside its exact match.

use regex::{Captures, Regex};

/// Default factor applied to generated camera distances. Generated scenes
/// are statistically over-zoomed-out.
pub const DEFAULT_CAMERA_FACTOR: f64 = 0.8;

/// Overlay elements generated documents tend to include for standalone
/// viewing: banners, loading indicators, instructions, captions. All
/// irrelevant once the document is embedded in the studio.
const OVERLAY_SELECTORS: &[&str] = &[
    "#info",
    "#instructions",
    "#loading",
    "#overlay",
    "#title",
    "#ui",
    ".info",
    ".instructions",
    ".label",
    ".caption",
];

/// Build the suppression style block injected into every document.
fn suppression_style_block() -> String {
    format!(
        "<style data-host-injected=\"overlay-suppression\">\n\
         {} {{\n\
         display: none !important;\n\
         visibility: hidden !important;\n\
         opacity: 0 !important;\n\
         pointer-events: none !important;\n\
         }}\n\
         body {{\n\
         -webkit-user-select: none !important;\n\
         user-select: none !important;\n\
         }}\n\
         </style>\n",
        OVERLAY_SELECTORS.join(", ")
    )
}

/// Inject the overlay-suppression style block.
///
/// Insertion point priority: before `</head>` if present, else before
/// `</body>`, else appended at the very end. Re-application inserts a
/// second valid block rather than corrupting the first.
pub fn suppress_overlays(doc: &str) -> String {
    let style = suppression_style_block();
    let head_close = Regex::new(r"(?i)</head\s*>").unwrap();
    let body_close = Regex::new(r"(?i)</body\s*>").unwrap();

    let insert_at = head_close
        .find(doc)
        .or_else(|| body_close.find(doc))
        .map(|m| m.start());

    match insert_at {
        Some(pos) => {
            let mut out = String::with_capacity(doc.len() + style.len());
            out.push_str(&doc[..pos]);
            out.push_str(&style);
            out.push_str(&doc[pos..]);
            out
        }
        None => {
            let mut out = doc.to_string();
            out.push_str(&style);
            out
        }
    }
}

/// Rescale every three-argument `camera.position.set(x, y, z)` call by
/// `factor`, leaving all other numeric literals untouched.
pub fn rescale_camera_distance(doc: &str, factor: f64) -> String {
    let pattern = Regex::new(
        r"camera\.position\.set\(\s*(-?\d+(?:\.\d+)?)\s*,\s*(-?\d+(?:\.\d+)?)\s*,\s*(-?\d+(?:\.\d+)?)\s*\)",
    )
    .unwrap();

    pattern
        .replace_all(doc, |caps: &Captures| {
            let scaled: Option<Vec<f64>> = (1..=3)
                .map(|i| caps[i].parse::<f64>().ok().map(|v| v * factor))
                .collect();
            match scaled {
                Some(values) => format!(
                    "camera.position.set({}, {}, {})",
                    format_coordinate(values[0]),
                    format_coordinate(values[1]),
                    format_coordinate(values[2])
                ),
                // Literal out of f64 range: leave the call alone
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Format a scaled coordinate without float noise (4 decimal places is
/// far beyond camera precision).
fn format_coordinate(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    format!("{}", rounded)
}
