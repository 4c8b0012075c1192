//! Vanilla biome constants.
//!
//! Ids follow the vanilla registry order (alphabetical by path).

use std::sync::LazyLock;

use basalt_utils::Identifier;
use rustc_hash::FxHashMap;

use crate::biome::{Biome, BiomeRef};

macro_rules! vanilla_biomes {
    ($($id:literal => $name:ident = $path:literal),* $(,)?) => {
        $(
            #[doc = concat!("`minecraft:", $path, "`")]
            pub static $name: Biome = Biome::vanilla($id, $path);
        )*

        /// Every vanilla biome, in id order.
        pub static ALL: &[BiomeRef] = &[$(&$name),*];
    };
}

vanilla_biomes! {
    0 => BADLANDS = "badlands",
    1 => BAMBOO_JUNGLE = "bamboo_jungle",
    2 => BASALT_DELTAS = "basalt_deltas",
    3 => BEACH = "beach",
    4 => BIRCH_FOREST = "birch_forest",
    5 => COLD_OCEAN = "cold_ocean",
    6 => CRIMSON_FOREST = "crimson_forest",
    7 => DARK_FOREST = "dark_forest",
    8 => DEEP_COLD_OCEAN = "deep_cold_ocean",
    9 => DEEP_DARK = "deep_dark",
    10 => DEEP_FROZEN_OCEAN = "deep_frozen_ocean",
    11 => DEEP_LUKEWARM_OCEAN = "deep_lukewarm_ocean",
    12 => DEEP_OCEAN = "deep_ocean",
    13 => DESERT = "desert",
    14 => DRIPSTONE_CAVES = "dripstone_caves",
    15 => END_BARRENS = "end_barrens",
    16 => END_HIGHLANDS = "end_highlands",
    17 => END_MIDLANDS = "end_midlands",
    18 => ERODED_BADLANDS = "eroded_badlands",
    19 => FLOWER_FOREST = "flower_forest",
    20 => FOREST = "forest",
    21 => FROZEN_OCEAN = "frozen_ocean",
    22 => FROZEN_PEAKS = "frozen_peaks",
    23 => FROZEN_RIVER = "frozen_river",
    24 => GROVE = "grove",
    25 => ICE_SPIKES = "ice_spikes",
    26 => JAGGED_PEAKS = "jagged_peaks",
    27 => JUNGLE = "jungle",
    28 => LUKEWARM_OCEAN = "lukewarm_ocean",
    29 => LUSH_CAVES = "lush_caves",
    30 => MANGROVE_SWAMP = "mangrove_swamp",
    31 => MEADOW = "meadow",
    32 => MUSHROOM_FIELDS = "mushroom_fields",
    33 => NETHER_WASTES = "nether_wastes",
    34 => OCEAN = "ocean",
    35 => OLD_GROWTH_BIRCH_FOREST = "old_growth_birch_forest",
    36 => OLD_GROWTH_PINE_TAIGA = "old_growth_pine_taiga",
    37 => OLD_GROWTH_SPRUCE_TAIGA = "old_growth_spruce_taiga",
    38 => PLAINS = "plains",
    39 => RIVER = "river",
    40 => SAVANNA = "savanna",
    41 => SAVANNA_PLATEAU = "savanna_plateau",
    42 => SMALL_END_ISLANDS = "small_end_islands",
    43 => SNOWY_BEACH = "snowy_beach",
    44 => SNOWY_PLAINS = "snowy_plains",
    45 => SNOWY_SLOPES = "snowy_slopes",
    46 => SNOWY_TAIGA = "snowy_taiga",
    47 => SOUL_SAND_VALLEY = "soul_sand_valley",
    48 => SPARSE_JUNGLE = "sparse_jungle",
    49 => STONY_PEAKS = "stony_peaks",
    50 => STONY_SHORE = "stony_shore",
    51 => SUNFLOWER_PLAINS = "sunflower_plains",
    52 => SWAMP = "swamp",
    53 => TAIGA = "taiga",
    54 => THE_END = "the_end",
    55 => THE_VOID = "the_void",
    56 => WARM_OCEAN = "warm_ocean",
    57 => WARPED_FOREST = "warped_forest",
    58 => WINDSWEPT_FOREST = "windswept_forest",
    59 => WINDSWEPT_GRAVELLY_HILLS = "windswept_gravelly_hills",
    60 => WINDSWEPT_HILLS = "windswept_hills",
    61 => WINDSWEPT_SAVANNA = "windswept_savanna",
    62 => WOODED_BADLANDS = "wooded_badlands",
}

static BY_PATH: LazyLock<FxHashMap<&'static str, BiomeRef>> =
    LazyLock::new(|| ALL.iter().map(|biome| (&*biome.key.path, *biome)).collect());

/// Look up a vanilla biome by key, with or without the `minecraft:` namespace.
#[must_use]
pub fn by_key(key: &str) -> Option<BiomeRef> {
    let key: Identifier = key.parse().ok()?;
    if key.namespace != Identifier::VANILLA_NAMESPACE {
        return None;
    }
    BY_PATH.get(&*key.path).copied()
}

/// Look up a vanilla biome by network id.
#[must_use]
pub fn by_id(id: u16) -> Option<BiomeRef> {
    ALL.get(usize::from(id)).copied()
}
