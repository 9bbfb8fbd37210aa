/// CellType is the material stored in a single grid cell.
/// No other state is attached to a cell; colour is a render-time lookup.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
#[repr(u8)]
pub enum CellType {
    #[default]
    Empty = 0,
    Sand = 1,
    Water = 2,
    Stone = 3,
}

impl CellType {
    /// All cell types in id order
    pub const ALL: [CellType; 4] = [
        CellType::Empty,
        CellType::Sand,
        CellType::Water,
        CellType::Stone,
    ];

    /// Stable numeric id (matches palette order)
    pub const fn id(self) -> u8 {
        self as u8
    }

    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(CellType::Empty),
            1 => Some(CellType::Sand),
            2 => Some(CellType::Water),
            3 => Some(CellType::Stone),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            CellType::Empty => "Empty",
            CellType::Sand => "Sand",
            CellType::Water => "Water",
            CellType::Stone => "Stone",
        }
    }

    /// Inert cells are skipped by the update sweep
    pub const fn is_inert(self) -> bool {
        matches!(self, CellType::Empty | CellType::Stone)
    }

    /// Whether a moving cell of this type may swap into `target`.
    /// Sand sinks through water; water only flows into empty space.
    pub const fn displaces(self, target: CellType) -> bool {
        match (self, target) {
            (CellType::Sand, CellType::Empty | CellType::Water) => true,
            (CellType::Water, CellType::Empty) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip_in_order() {
        for (i, cell) in CellType::ALL.iter().enumerate() {
            assert_eq!(cell.id() as usize, i);
            assert_eq!(CellType::from_id(i as u8), Some(*cell));
        }
        assert_eq!(CellType::from_id(4), None);
    }

    #[test]
    fn test_inert_types() {
        assert!(CellType::Empty.is_inert());
        assert!(CellType::Stone.is_inert());
        assert!(!CellType::Sand.is_inert());
        assert!(!CellType::Water.is_inert());
    }

    #[test]
    fn test_sand_displaces_empty_and_water() {
        assert!(CellType::Sand.displaces(CellType::Empty));
        assert!(CellType::Sand.displaces(CellType::Water));
        assert!(!CellType::Sand.displaces(CellType::Sand));
        assert!(!CellType::Sand.displaces(CellType::Stone));
    }

    #[test]
    fn test_water_only_displaces_empty() {
        assert!(CellType::Water.displaces(CellType::Empty));
        assert!(!CellType::Water.displaces(CellType::Water));
        assert!(!CellType::Water.displaces(CellType::Sand));
        assert!(!CellType::Water.displaces(CellType::Stone));
    }

    #[test]
    fn test_inert_types_never_displace() {
        for target in CellType::ALL {
            assert!(!CellType::Empty.displaces(target));
            assert!(!CellType::Stone.displaces(target));
        }
    }
}
