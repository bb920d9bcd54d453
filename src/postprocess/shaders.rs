//! Fixed shader override files for scoreboard cosmetics.
//!
//! These are pre-built files injected verbatim into the pack's unknown-file
//! bucket; nothing in this crate interprets their contents.

/// Core text shader definition that routes scoreboard number rendering
/// through the deferred vertex stage below.
pub const SCOREBOARD_NUMBERS_JSON_PATH: &str = "assets/minecraft/shaders/core/rendertype_text.json";

/// Vertex stage that collapses scoreboard sidebar numbers to zero area.
pub const SCOREBOARD_NUMBERS_VSH_PATH: &str = "assets/minecraft/shaders/post/deferred_text.vsh";

/// Background override for clients at or above the threshold version.
pub const SCOREBOARD_BACKGROUND_MODERN_PATH: &str =
    "assets/minecraft/shaders/core/rendertype_gui.vsh";

/// Background override for clients below the threshold version.
pub const SCOREBOARD_BACKGROUND_LEGACY_PATH: &str =
    "assets/minecraft/shaders/core/position_color.fsh";

pub(super) const SCOREBOARD_NUMBERS_JSON: &str = r#"{
    "blend": {
        "func": "add",
        "srcrgb": "srcalpha",
        "dstrgb": "1-srcalpha"
    },
    "vertex": "rendertype_text",
    "fragment": "rendertype_text",
    "attributes": ["Position", "Color", "UV0", "UV2"],
    "samplers": [
        {"name": "Sampler0"},
        {"name": "Sampler2"}
    ],
    "uniforms": [
        {"name": "ModelViewMat", "type": "matrix4x4", "count": 16, "values": [1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0]},
        {"name": "ProjMat", "type": "matrix4x4", "count": 16, "values": [1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0]},
        {"name": "ColorModulator", "type": "float", "count": 4, "values": [1.0, 1.0, 1.0, 1.0]},
        {"name": "FogStart", "type": "float", "count": 1, "values": [0.0]},
        {"name": "FogEnd", "type": "float", "count": 1, "values": [1.0]},
        {"name": "GameTime", "type": "float", "count": 1, "values": [0.0]}
    ]
}
"#;

pub(super) const SCOREBOARD_NUMBERS_VSH: &str = r#"#version 150

in vec3 Position;
in vec4 Color;
in vec2 UV0;
in ivec2 UV2;

uniform sampler2D Sampler2;
uniform mat4 ModelViewMat;
uniform mat4 ProjMat;

out float vertexDistance;
out vec4 vertexColor;
out vec2 texCoord0;

void main() {
    vec3 position = Position;
    // Sidebar score numbers render with the fixed red text color; collapse
    // those vertices so the numbers never rasterize.
    if (Color.r == 1.0 && Color.g == 84.0 / 255.0 && Color.b == 84.0 / 255.0) {
        position = vec3(0.0);
    }
    gl_Position = ProjMat * ModelViewMat * vec4(position, 1.0);

    vertexDistance = length((ModelViewMat * vec4(position, 1.0)).xyz);
    vertexColor = Color * texelFetch(Sampler2, UV2 / 16, 0);
    texCoord0 = UV0;
}
"#;

pub(super) const SCOREBOARD_BACKGROUND_MODERN: &str = r#"#version 150

in vec3 Position;
in vec4 Color;

uniform mat4 ModelViewMat;
uniform mat4 ProjMat;

out vec4 vertexColor;

void main() {
    gl_Position = ProjMat * ModelViewMat * vec4(Position, 1.0);
    vec4 color = Color;
    // The sidebar background quad is the only gui geometry drawn with this
    // exact translucent black; make it fully transparent.
    if (color.a > 0.29 && color.a < 0.31 && color.rgb == vec3(0.0)) {
        color.a = 0.0;
    }
    vertexColor = color;
}
"#;

pub(super) const SCOREBOARD_BACKGROUND_LEGACY: &str = r#"#version 150

in vec4 vertexColor;

uniform vec4 ColorModulator;

out vec4 fragColor;

void main() {
    vec4 color = vertexColor;
    if (color.a > 0.29 && color.a < 0.31 && color.rgb == vec3(0.0)) {
        discard;
    }
    fragColor = color * ColorModulator;
}
"#;
