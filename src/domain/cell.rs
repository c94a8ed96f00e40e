//! Cell values: one base material plus orthogonal modifier flags.
//!
//! The JS side and saved levels still speak the legacy bitmask (one bit per
//! material, flags ORed on top). Inside the engine a cell is a `Material` tag
//! and a `Flags` set, so a cell can never hold two base materials at once.

use std::fmt;

/// Legacy bit values, kept stable for saved levels and the JS palette.
pub mod bits {
    pub const SPACE: u32 = 0;
    pub const SAND: u32 = 1;
    pub const OIL: u32 = 2;
    pub const FIRE: u32 = 4;
    pub const LAVA: u32 = 8;
    pub const WATER: u32 = 16;
    pub const STEAM: u32 = 32;
    pub const SOLID: u32 = 64;
    /// Retired "resting" optimisation bit; ignored on load.
    pub const RESTING: u32 = 128;
    pub const BURNING: u32 = 256;
    pub const LIFE: u32 = 512;
    pub const INFECTANT: u32 = 1024;
    pub const C4: u32 = 2048;
    pub const FUSE: u32 = 4096;
    pub const SPRING: u32 = SOLID | WATER;
    pub const VOLCANIC: u32 = SOLID | LAVA;
    pub const OIL_WELL: u32 = SOLID | OIL;

    pub const FLAG_MASK: u32 = BURNING | INFECTANT;
}

/// Base material of a cell. Discriminants index the material table.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Material {
    #[default]
    Space = 0,
    Sand = 1,
    Oil = 2,
    Fire = 3,
    Lava = 4,
    Water = 5,
    Steam = 6,
    Solid = 7,
    Life = 8,
    C4 = 9,
    Fuse = 10,
    /// Solid source that leaks water.
    Spring = 11,
    /// Solid source that leaks lava.
    Volcanic = 12,
    /// Solid source that leaks oil.
    OilWell = 13,
}

pub const MATERIAL_COUNT: usize = 14;

impl Material {
    pub const ALL: [Material; MATERIAL_COUNT] = [
        Material::Space,
        Material::Sand,
        Material::Oil,
        Material::Fire,
        Material::Lava,
        Material::Water,
        Material::Steam,
        Material::Solid,
        Material::Life,
        Material::C4,
        Material::Fuse,
        Material::Spring,
        Material::Volcanic,
        Material::OilWell,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Immovable materials: plain solid and the three liquid sources.
    #[inline]
    pub fn is_solid(self) -> bool {
        matches!(
            self,
            Material::Solid | Material::Spring | Material::Volcanic | Material::OilWell
        )
    }

    /// Liquid emitted by a composite source.
    #[inline]
    pub fn leak(self) -> Option<Material> {
        match self {
            Material::Spring => Some(Material::Water),
            Material::Volcanic => Some(Material::Lava),
            Material::OilWell => Some(Material::Oil),
            _ => None,
        }
    }

    /// Legacy bitmask value.
    pub fn bits(self) -> u32 {
        match self {
            Material::Space => bits::SPACE,
            Material::Sand => bits::SAND,
            Material::Oil => bits::OIL,
            Material::Fire => bits::FIRE,
            Material::Lava => bits::LAVA,
            Material::Water => bits::WATER,
            Material::Steam => bits::STEAM,
            Material::Solid => bits::SOLID,
            Material::Life => bits::LIFE,
            Material::C4 => bits::C4,
            Material::Fuse => bits::FUSE,
            Material::Spring => bits::SPRING,
            Material::Volcanic => bits::VOLCANIC,
            Material::OilWell => bits::OIL_WELL,
        }
    }

    /// Inverse of [`Material::bits`]. Combinations that are not a single
    /// material or a known composite yield `None`.
    pub fn from_bits(value: u32) -> Option<Material> {
        Material::ALL.iter().copied().find(|m| m.bits() == value)
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(crate::domain::materials::props(*self).name)
    }
}

/// Modifier flags that combine freely with any base material.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Flags(u8);

impl Flags {
    pub const NONE: Flags = Flags(0);
    pub const BURNING: Flags = Flags(1 << 0);
    pub const INFECTANT: Flags = Flags(1 << 1);

    #[inline]
    pub const fn empty() -> Self {
        Flags::NONE
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub fn intersects(self, other: Flags) -> bool {
        self.0 & other.0 != 0
    }

    #[inline]
    pub fn union(self, other: Flags) -> Flags {
        Flags(self.0 | other.0)
    }

    #[inline]
    pub fn difference(self, other: Flags) -> Flags {
        Flags(self.0 & !other.0)
    }

    pub fn bits(self) -> u32 {
        let mut out = 0;
        if self.contains(Flags::BURNING) {
            out |= bits::BURNING;
        }
        if self.contains(Flags::INFECTANT) {
            out |= bits::INFECTANT;
        }
        out
    }

    pub fn from_bits(value: u32) -> Flags {
        let mut out = Flags::NONE;
        if value & bits::BURNING != 0 {
            out = out.union(Flags::BURNING);
        }
        if value & bits::INFECTANT != 0 {
            out = out.union(Flags::INFECTANT);
        }
        out
    }
}

impl fmt::Debug for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = f.debug_set();
        if self.contains(Flags::BURNING) {
            set.entry(&"Burning");
        }
        if self.contains(Flags::INFECTANT) {
            set.entry(&"Infectant");
        }
        set.finish()
    }
}

/// A grid cell. `Space` with no flags is the empty cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Cell {
    pub material: Material,
    pub flags: Flags,
}

impl Cell {
    pub const EMPTY: Cell = Cell {
        material: Material::Space,
        flags: Flags::NONE,
    };

    /// Out-of-bounds sentinel: reads past the edge behave like a wall.
    pub const SOLID: Cell = Cell {
        material: Material::Solid,
        flags: Flags::NONE,
    };

    #[inline]
    pub const fn new(material: Material) -> Self {
        Cell {
            material,
            flags: Flags::NONE,
        }
    }

    #[inline]
    pub const fn with_flags(material: Material, flags: Flags) -> Self {
        Cell { material, flags }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.material == Material::Space
    }

    #[inline]
    pub fn is(self, material: Material) -> bool {
        self.material == material
    }

    #[inline]
    pub fn has(self, flags: Flags) -> bool {
        self.flags.contains(flags)
    }

    #[inline]
    pub fn burning(self) -> bool {
        self.flags.contains(Flags::BURNING)
    }

    #[inline]
    pub fn infectant(self) -> bool {
        self.flags.contains(Flags::INFECTANT)
    }

    /// True when this cell already carries everything `kind` would write:
    /// same material and a superset of its flags. Spawning such a kind is a no-op.
    #[inline]
    pub fn contains(self, kind: Cell) -> bool {
        self.material == kind.material && self.flags.contains(kind.flags)
    }

    #[inline]
    pub fn add_flags(self, flags: Flags) -> Cell {
        Cell {
            material: self.material,
            flags: self.flags.union(flags),
        }
    }

    #[inline]
    pub fn remove_flags(self, flags: Flags) -> Cell {
        Cell {
            material: self.material,
            flags: self.flags.difference(flags),
        }
    }

    pub fn to_bits(self) -> u32 {
        if self.is_empty() {
            return bits::SPACE;
        }
        self.material.bits() | self.flags.bits()
    }

    /// Decode a legacy value. Anything that is not one material (or composite)
    /// plus known flags decodes to `Cell::EMPTY`.
    pub fn from_bits(value: u32) -> Cell {
        let flags = Flags::from_bits(value);
        let base = value & !(bits::FLAG_MASK | bits::RESTING);
        match Material::from_bits(base) {
            Some(Material::Space) | None => Cell::EMPTY,
            Some(material) => Cell { material, flags },
        }
    }
}

impl From<Material> for Cell {
    fn from(material: Material) -> Self {
        Cell::new(material)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.material)?;
        if self.burning() {
            f.write_str("+burning")?;
        }
        if self.infectant() {
            f.write_str("+infectant")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_bits_round_trip_for_every_material() {
        for m in Material::ALL {
            assert_eq!(Material::from_bits(m.bits()), Some(m));
        }
    }

    #[test]
    fn flags_survive_the_legacy_codec() {
        let c4 = Cell::with_flags(Material::C4, Flags::BURNING.union(Flags::INFECTANT));
        assert_eq!(c4.to_bits(), bits::C4 | bits::BURNING | bits::INFECTANT);
        assert_eq!(Cell::from_bits(c4.to_bits()), c4);
    }

    #[test]
    fn two_base_materials_decode_to_empty() {
        assert_eq!(Cell::from_bits(bits::SAND | bits::WATER), Cell::EMPTY);
        assert_eq!(Cell::from_bits(1 << 20), Cell::EMPTY);
        // Flags alone are not a cell.
        assert_eq!(Cell::from_bits(bits::BURNING), Cell::EMPTY);
    }

    #[test]
    fn resting_bit_is_ignored() {
        assert_eq!(Cell::from_bits(bits::SAND | bits::RESTING), Cell::new(Material::Sand));
    }

    #[test]
    fn composites_are_solid_and_leak() {
        assert_eq!(Cell::from_bits(bits::SPRING).material, Material::Spring);
        assert!(Material::Volcanic.is_solid());
        assert_eq!(Material::OilWell.leak(), Some(Material::Oil));
        assert_eq!(Material::Water.leak(), None);
        assert!(!Material::C4.is_solid());
    }

    #[test]
    fn contains_checks_material_and_flag_superset() {
        let burning_oil = Cell::with_flags(Material::Oil, Flags::BURNING);
        assert!(burning_oil.contains(Cell::new(Material::Oil)));
        assert!(!Cell::new(Material::Oil).contains(burning_oil));
        assert!(!burning_oil.contains(Cell::new(Material::Water)));
    }
}
