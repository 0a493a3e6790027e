//! Material table
//!
//! Physical tuning data for each ball material lives in one lookup,
//! keyed by a closed enum, so the resolvers never branch on material
//! identity themselves.

use serde::{Deserialize, Serialize};

/// Ball material kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Material {
    Rubber,
    Chrome,
    Glass,
    Plasma,
}

/// All materials, in cycling order
pub const ALL_MATERIALS: [Material; 4] = [
    Material::Rubber,
    Material::Chrome,
    Material::Glass,
    Material::Plasma,
];

/// Per-material physical constants (immutable, fixed at compile time)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialProps {
    /// "Weight feel" knob: mass = radius^2 * density, so higher means
    /// heavier at the same radius
    pub density: f32,
    /// Bounciness (0.0 - 1.0)
    pub restitution: f32,
    /// Surface friction (0.0 - 1.0)
    pub friction: f32,
    /// Base tint, 0xAARRGGBB
    pub base_color: u32,
}

impl Material {
    /// Look up this material's physical constants
    pub const fn props(self) -> MaterialProps {
        match self {
            // Very bouncy, grippy
            Material::Rubber => MaterialProps {
                density: 1.00,
                restitution: 0.85,
                friction: 0.92,
                base_color: 0xFFC8_3232,
            },
            // Heavy metal: loses energy, slippery
            Material::Chrome => MaterialProps {
                density: 2.40,
                restitution: 0.55,
                friction: 0.985,
                base_color: 0xFFC8_C8DC,
            },
            // Hard bounce but not springy, smooth
            Material::Glass => MaterialProps {
                density: 1.60,
                restitution: 0.65,
                friction: 0.97,
                base_color: 0x8096_C8FF,
            },
            // Floaty, lively, near frictionless
            Material::Plasma => MaterialProps {
                density: 0.65,
                restitution: 0.80,
                friction: 0.99,
                base_color: 0xFF64_FFC8,
            },
        }
    }

    /// How much this material deforms on impact (feeds squash targets,
    /// not the physics)
    pub const fn squash_factor(self) -> f32 {
        match self {
            Material::Rubber => 1.5,
            Material::Chrome => 0.5,
            Material::Glass => 0.3,
            Material::Plasma => 1.2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Material::Rubber => "RUBBER",
            Material::Chrome => "CHROME",
            Material::Glass => "GLASS",
            Material::Plasma => "PLASMA",
        }
    }

    /// Next material in cycling order (wraps)
    pub fn next(self) -> Self {
        match self {
            Material::Rubber => Material::Chrome,
            Material::Chrome => Material::Glass,
            Material::Glass => Material::Plasma,
            Material::Plasma => Material::Rubber,
        }
    }
}
