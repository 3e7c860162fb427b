//! Generation Prompts
//!
//! Prompt templates for the three remote generation calls.

/// Instruction template for the concept-image call.
const IMAGE_PROMPT_TEMPLATE: &str = "\
Create a photorealistic architectural concept rendering of the following \
design brief. Show the full building in context, from a three-quarter \
aerial perspective, with clear massing and realistic materials and \
lighting. No text, labels, watermarks, or people in the foreground.\n\n\
Design brief: {BRIEF}";

/// Instruction for the interactive 3D document call.
///
/// The contract matters more than the prose: one complete HTML document,
/// and the optional control hooks on the global scope. A document that
/// omits a hook still loads; the studio degrades that feature.
const DOCUMENT_PROMPT: &str = "\
You are given a concept image of a building. Recreate the structure it \
shows as an interactive 3D scene.\n\n\
Respond with a SINGLE complete HTML document and nothing else: no \
commentary, no markdown fences. The document must start with <!DOCTYPE \
html> and be fully self-contained, loading three.js from a CDN and \
rendering the scene with an orbitable camera.\n\n\
Expose these functions on the window object so the host application can \
drive the scene:\n\
- updateParams(scale, height, levels): rebuild the structure with the \
given footprint scale, storey height multiplier, and number of levels\n\
- setLightingPreset(name): one of \"day\", \"sunset\", \"night\", \
\"overcast\"\n\
- updateFog(color, density): set scene fog; density ranges 0 to 0.1\n\
- getSurfaceArea(): return the total exterior surface area in square \
meters\n\
- getFloorArea(): return the summed floor-plate area in square meters\n\
- getOBJ(): return the scene geometry as Wavefront OBJ text\n\
- getScreenshot(): return a PNG data URI of the current canvas\n\n\
Build the geometry procedurally so updateParams can rebuild it. Keep \
materials simple and fast.";

/// Style template for the realistic-render call.
const RENDER_PROMPT_TEMPLATE: &str = "\
Re-render this 3D viewport capture as a photorealistic architectural \
visualization. Preserve the exact camera angle, building massing, and \
composition. {STYLE} Add realistic materials, entourage, vegetation, and \
atmosphere. No text or watermarks.";

/// Build the concept-image prompt from a design brief.
pub fn image_prompt(brief: &str) -> String {
    IMAGE_PROMPT_TEMPLATE.replace("{BRIEF}", brief.trim())
}

/// The document-generation prompt.
pub fn document_prompt() -> String {
    DOCUMENT_PROMPT.to_string()
}

/// Build the realistic-render prompt with an optional style direction.
pub fn render_prompt(style: &str) -> String {
    let style = style.trim();
    if style.is_empty() {
        RENDER_PROMPT_TEMPLATE.replace("{STYLE} ", "")
    } else {
        RENDER_PROMPT_TEMPLATE.replace("{STYLE}", style)
    }
}
