//! Material table: static physical properties per base material.
//!
//! Dense array indexed by `Material` ordinal. Names are only used at the
//! brush/palette boundary.

use super::cell::{Material, MATERIAL_COUNT};

pub type Rgb = [u8; 3];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaterialProps {
    pub name: &'static str,
    pub color: Rgb,
    /// Flicker colours used while the cell is burning (90% first, 10% second).
    pub burn_colors: Option<(Rgb, Rgb)>,
    /// `None` marks an immovable/inert material. Negative densities rise.
    pub density: Option<f32>,
    /// Enables skim (lateral spreading).
    pub liquid: bool,
    /// Advisory only; movement does not read it.
    pub friction: f32,
}

const fn props_of(
    name: &'static str,
    color: Rgb,
    burn_colors: Option<(Rgb, Rgb)>,
    density: Option<f32>,
    liquid: bool,
    friction: f32,
) -> MaterialProps {
    MaterialProps {
        name,
        color,
        burn_colors,
        density,
        liquid,
        friction,
    }
}

const OIL_FLAMES: Option<(Rgb, Rgb)> = Some(([255, 102, 26], [204, 102, 26]));

pub static MATERIALS: [MaterialProps; MATERIAL_COUNT] = [
    props_of("space", [0, 0, 0], None, Some(0.0), false, 0.0),
    props_of("sand", [230, 179, 51], None, Some(10.0), false, 0.99),
    props_of("oil", [128, 102, 26], OIL_FLAMES, Some(5.0), true, 1.0),
    props_of("fire", [255, 128, 0], Some(([255, 128, 0], [230, 153, 26])), Some(-1.0), false, 1.0),
    props_of("lava", [255, 77, 0], None, Some(10.0), true, 0.0),
    props_of("water", [0, 128, 255], None, Some(6.0), true, 1.0),
    props_of("steam", [153, 153, 153], None, Some(-1.0), true, 1.0),
    props_of("solid", [0, 0, 0], None, None, false, 0.99),
    props_of("life", [0, 255, 51], Some(([255, 179, 26], [179, 153, 26])), Some(-1.0), false, 1.0),
    props_of("C4", [51, 230, 26], Some(([230, 179, 51], [255, 255, 77])), None, false, 0.0),
    props_of("fuse", [255, 255, 255], OIL_FLAMES, Some(-1.0), false, 1.0),
    props_of("spring", [0, 128, 255], None, None, false, 0.99),
    props_of("volcanic", [255, 77, 0], None, None, false, 0.99),
    props_of("oil well", [128, 102, 26], None, None, false, 0.99),
];

#[inline]
pub fn props(material: Material) -> &'static MaterialProps {
    &MATERIALS[material.index()]
}

#[inline]
pub fn density(material: Material) -> Option<f32> {
    props(material).density
}

/// Resolve a palette/brush name. Accepts the legacy spellings
/// (`"C4"`, `"oil well"`) case-insensitively, plus `"eraser"` for space.
pub fn material_by_name(name: &str) -> Option<Material> {
    let key = name.trim().to_ascii_lowercase();
    match key.as_str() {
        "space" | "eraser" | "empty" => Some(Material::Space),
        "oil well" | "oil_well" | "oilwell" => Some(Material::OilWell),
        _ => Material::ALL
            .iter()
            .copied()
            .find(|m| props(*m).name.eq_ignore_ascii_case(&key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_indexed_by_ordinal() {
        for m in Material::ALL {
            assert_eq!(material_by_name(props(m).name), Some(m));
        }
    }

    #[test]
    fn legacy_names_resolve() {
        assert_eq!(material_by_name("C4"), Some(Material::C4));
        assert_eq!(material_by_name("c4"), Some(Material::C4));
        assert_eq!(material_by_name("oil well"), Some(Material::OilWell));
        assert_eq!(material_by_name("eraser"), Some(Material::Space));
        assert_eq!(material_by_name("plutonium"), None);
    }

    #[test]
    fn densities_order_the_liquids() {
        assert!(density(Material::Oil) < density(Material::Water));
        assert!(density(Material::Water) < density(Material::Sand));
        assert_eq!(density(Material::Solid), None);
        assert!(density(Material::Steam).unwrap_or(0.0) < 0.0);
    }
}
