//! Generation parameters forwarded to the remote 3D service.
//!
//! The options are a flat bag that the application never interprets: the UI
//! edits them and [`GenerationOptions::form_fields`] flattens them into the
//! text fields of the multipart submission. The wire names (`TAPose`,
//! `extra-low`, `PBR`, ...) are the ones the remote API expects.

use serde::{Deserialize, Serialize};

use crate::i18n::Text;

macro_rules! option_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => ($wire:literal, $label:ident)),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $wire)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Value sent to the remote service.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }

            pub fn parse(value: &str) -> Option<Self> {
                match value {
                    $($wire => Some($name::$variant),)+
                    _ => None,
                }
            }

            pub fn label(self) -> Text {
                match self {
                    $($name::$variant => Text::$label),+
                }
            }
        }
    };
}

option_enum! {
    /// Polygon budget of the generated mesh.
    Quality {
        High => ("high", QualityHigh),
        Medium => ("medium", QualityMedium),
        Low => ("low", QualityLow),
        ExtraLow => ("extra-low", QualityExtraLow),
    }
}

option_enum! {
    /// Requested geometry file format. The viewer only ever displays GLB.
    GeometryFormat {
        Glb => ("glb", OptionsFormat),
        Usdz => ("usdz", OptionsFormat),
        Fbx => ("fbx", OptionsFormat),
        Obj => ("obj", OptionsFormat),
        Stl => ("stl", OptionsFormat),
    }
}

option_enum! {
    /// How multiple input images are interpreted.
    ConditionMode {
        Concat => ("concat", ConditionConcat),
        Fuse => ("fuse", ConditionFuse),
    }
}

option_enum! {
    Material {
        Pbr => ("PBR", OptionsMaterial),
        Shaded => ("Shaded", OptionsMaterial),
    }
}

option_enum! {
    Tier {
        Regular => ("Regular", TierRegular),
        Sketch => ("Sketch", TierSketch),
    }
}

/// Fixed mesh settings sent with every submission.
pub const MESH_FIELDS: [(&str, &str); 3] = [
    ("mesh_mode", "Quad"),
    ("mesh_simplify", "true"),
    ("mesh_smooth", "true"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub condition_mode: ConditionMode,
    pub quality: Quality,
    pub geometry_file_format: GeometryFormat,
    pub use_hyper: bool,
    pub tier: Tier,
    #[serde(rename = "TAPose")]
    pub ta_pose: bool,
    pub material: Material,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            condition_mode: ConditionMode::Concat,
            quality: Quality::Medium,
            geometry_file_format: GeometryFormat::Glb,
            use_hyper: false,
            tier: Tier::Regular,
            ta_pose: false,
            material: Material::Pbr,
        }
    }
}

impl GenerationOptions {
    /// Text fields of the multipart submission, in the order the remote
    /// service documents them, followed by [`MESH_FIELDS`].
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("condition_mode", self.condition_mode.as_str().to_string()),
            ("geometry_file_format", self.geometry_file_format.as_str().to_string()),
            ("material", self.material.as_str().to_string()),
            ("quality", self.quality.as_str().to_string()),
            ("use_hyper", self.use_hyper.to_string()),
            ("tier", self.tier.as_str().to_string()),
            ("TAPose", self.ta_pose.to_string()),
        ];
        fields.extend(MESH_FIELDS.iter().map(|(k, v)| (*k, v.to_string())));
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field<'a>(fields: &'a [(&'static str, String)], name: &str) -> Option<&'a str> {
        fields.iter().find(|(k, _)| *k == name).map(|(_, v)| v.as_str())
    }

    #[test]
    fn defaults_match_the_form_defaults() {
        let fields = GenerationOptions::default().form_fields();
        assert_eq!(field(&fields, "quality"), Some("medium"));
        assert_eq!(field(&fields, "geometry_file_format"), Some("glb"));
        assert_eq!(field(&fields, "material"), Some("PBR"));
        assert_eq!(field(&fields, "TAPose"), Some("false"));
        assert_eq!(field(&fields, "mesh_mode"), Some("Quad"));
        assert_eq!(fields.len(), 10);
    }

    #[test]
    fn wire_names_are_the_remote_ones() {
        let options = GenerationOptions {
            quality: Quality::ExtraLow,
            ta_pose: true,
            tier: Tier::Sketch,
            ..GenerationOptions::default()
        };
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json["quality"], "extra-low");
        assert_eq!(json["TAPose"], true);
        assert_eq!(json["tier"], "Sketch");
        assert_eq!(Quality::parse("extra-low"), Some(Quality::ExtraLow));
        assert_eq!(Material::parse("pbr"), None);
    }
}
