//! Configuration handed to the `particles.js` background when the page loads it.

use serde_json::{Value, json};

pub const PARTICLES_CONTAINER_ID: &str = "particles-js";
pub const PARTICLE_COLOR: &str = "#00abf0";

#[cfg(test)]
#[path = "particles_test.rs"]
mod particles_test;

/// Fixed particle field: 80 linked circles that repulse on hover and spawn on click.
#[must_use]
pub fn particles_config() -> Value {
    json!({
        "particles": {
            "number": { "value": 80, "density": { "enable": true, "value_area": 800 } },
            "color": { "value": PARTICLE_COLOR },
            "shape": { "type": "circle" },
            "opacity": { "value": 0.5, "random": false },
            "size": { "value": 3, "random": true },
            "line_linked": {
                "enable": true,
                "distance": 150,
                "color": PARTICLE_COLOR,
                "opacity": 0.4,
                "width": 1
            },
            "move": {
                "enable": true,
                "speed": 6,
                "direction": "none",
                "random": false,
                "straight": false,
                "out_mode": "out",
                "bounce": false
            }
        },
        "interactivity": {
            "detect_on": "canvas",
            "events": {
                "onhover": { "enable": true, "mode": "repulse" },
                "onclick": { "enable": true, "mode": "push" }
            }
        },
        "retina_detect": true
    })
}
