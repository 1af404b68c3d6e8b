/// Number of records in the catalog (generation one).
pub const ROSTER_SIZE: u32 = 151;

/// Highest possible base stat, used to scale stat bars.
pub const STAT_MAX: u32 = 255;

/// Type tags offered by the gallery filter bar, in display order.
pub const TYPE_TAGS: [&str; 18] = [
    "normal", "fire", "water", "electric", "grass", "ice", "fighting", "poison", "ground",
    "flying", "psychic", "bug", "rock", "ghost", "dragon", "dark", "steel", "fairy",
];
