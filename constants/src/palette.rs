/// Block colour palette used for nearest-colour voxel labelling
pub struct BlockColour {
    pub id: &'static str,
    pub rgb: [u8; 3],
}

/// Returned by lookups when no palette entry can be chosen
pub const FALLBACK_BLOCK: &str = "minecraft:stone";

/// Default palette, in matching order. Earlier entries win colour ties.
pub const BLOCK_PALETTE: &[BlockColour] = &[
    // Logs and woods
    BlockColour {
        id: "minecraft:acacia_log",
        rgb: [103, 96, 86],
    },
    BlockColour {
        id: "minecraft:acacia_planks",
        rgb: [169, 91, 50],
    },
    BlockColour {
        id: "minecraft:stripped_acacia_wood",
        rgb: [174, 92, 59],
    },
    BlockColour {
        id: "minecraft:birch_wood",
        rgb: [214, 214, 210],
    },
    BlockColour {
        id: "minecraft:birch_planks",
        rgb: [192, 175, 121],
    },
    BlockColour {
        id: "minecraft:stripped_birch_wood",
        rgb: [196, 176, 118],
    },
    BlockColour {
        id: "minecraft:cherry_wood",
        rgb: [62, 34, 39],
    },
    BlockColour {
        id: "minecraft:cherry_planks",
        rgb: [224, 172, 189],
    },
    BlockColour {
        id: "minecraft:stripped_cherry_wood",
        rgb: [229, 179, 195],
    },
    BlockColour {
        id: "minecraft:dark_oak_wood",
        rgb: [60, 47, 26],
    },
    BlockColour {
        id: "minecraft:dark_oak_planks",
        rgb: [66, 43, 20],
    },
    BlockColour {
        id: "minecraft:stripped_dark_oak_wood",
        rgb: [67, 49, 30],
    },
    BlockColour {
        id: "minecraft:jungle_wood",
        rgb: [85, 68, 25],
    },
    BlockColour {
        id: "minecraft:jungle_planks",
        rgb: [160, 115, 80],
    },
    BlockColour {
        id: "minecraft:stripped_jungle_wood",
        rgb: [172, 128, 86],
    },
    BlockColour {
        id: "minecraft:mangrove_wood",
        rgb: [82, 57, 47],
    },
    BlockColour {
        id: "minecraft:mangrove_planks",
        rgb: [118, 54, 49],
    },
    BlockColour {
        id: "minecraft:stripped_mangrove_wood",
        rgb: [118, 54, 49],
    },
    BlockColour {
        id: "minecraft:oak_wood",
        rgb: [115, 89, 52],
    },
    BlockColour {
        id: "minecraft:oak_planks",
        rgb: [162, 130, 78],
    },
    BlockColour {
        id: "minecraft:stripped_oak_wood",
        rgb: [177, 144, 86],
    },
    BlockColour {
        id: "minecraft:spruce_wood",
        rgb: [58, 37, 16],
    },
    BlockColour {
        id: "minecraft:spruce_planks",
        rgb: [114, 84, 56],
    },
    BlockColour {
        id: "minecraft:stripped_spruce_wood",
        rgb: [114, 86, 51],
    },
    BlockColour {
        id: "minecraft:pale_oak_wood",
        rgb: [118, 118, 118],
    },
    BlockColour {
        id: "minecraft:pale_oak_planks",
        rgb: [227, 222, 212],
    },
    BlockColour {
        id: "minecraft:stripped_pale_oak_wood",
        rgb: [220, 218, 210],
    },
    BlockColour {
        id: "minecraft:bamboo_planks",
        rgb: [198, 179, 74],
    },
    BlockColour {
        id: "minecraft:stripped_bamboo_block",
        rgb: [198, 185, 88],
    },
    // Concrete
    BlockColour {
        id: "minecraft:white_concrete",
        rgb: [207, 213, 214],
    },
    BlockColour {
        id: "minecraft:orange_concrete",
        rgb: [224, 97, 1],
    },
    BlockColour {
        id: "minecraft:magenta_concrete",
        rgb: [169, 48, 159],
    },
    BlockColour {
        id: "minecraft:light_blue_concrete",
        rgb: [35, 137, 198],
    },
    BlockColour {
        id: "minecraft:yellow_concrete",
        rgb: [240, 175, 21],
    },
    BlockColour {
        id: "minecraft:lime_concrete",
        rgb: [94, 169, 24],
    },
    BlockColour {
        id: "minecraft:pink_concrete",
        rgb: [213, 101, 142],
    },
    BlockColour {
        id: "minecraft:gray_concrete",
        rgb: [54, 57, 61],
    },
    BlockColour {
        id: "minecraft:light_gray_concrete",
        rgb: [125, 125, 115],
    },
    BlockColour {
        id: "minecraft:cyan_concrete",
        rgb: [21, 119, 136],
    },
    BlockColour {
        id: "minecraft:purple_concrete",
        rgb: [100, 31, 156],
    },
    BlockColour {
        id: "minecraft:blue_concrete",
        rgb: [44, 46, 143],
    },
    BlockColour {
        id: "minecraft:brown_concrete",
        rgb: [96, 59, 31],
    },
    BlockColour {
        id: "minecraft:green_concrete",
        rgb: [73, 91, 36],
    },
    BlockColour {
        id: "minecraft:red_concrete",
        rgb: [142, 32, 32],
    },
    BlockColour {
        id: "minecraft:black_concrete",
        rgb: [8, 10, 15],
    },
    // Terracotta
    BlockColour {
        id: "minecraft:terracotta",
        rgb: [152, 94, 67],
    },
    BlockColour {
        id: "minecraft:white_terracotta",
        rgb: [209, 177, 161],
    },
    BlockColour {
        id: "minecraft:orange_terracotta",
        rgb: [161, 83, 37],
    },
    BlockColour {
        id: "minecraft:magenta_terracotta",
        rgb: [149, 88, 108],
    },
    BlockColour {
        id: "minecraft:light_blue_terracotta",
        rgb: [113, 108, 137],
    },
    BlockColour {
        id: "minecraft:yellow_terracotta",
        rgb: [186, 133, 35],
    },
    BlockColour {
        id: "minecraft:lime_terracotta",
        rgb: [103, 117, 52],
    },
    BlockColour {
        id: "minecraft:pink_terracotta",
        rgb: [161, 78, 78],
    },
    BlockColour {
        id: "minecraft:gray_terracotta",
        rgb: [57, 42, 35],
    },
    BlockColour {
        id: "minecraft:light_gray_terracotta",
        rgb: [135, 107, 98],
    },
    BlockColour {
        id: "minecraft:cyan_terracotta",
        rgb: [86, 91, 91],
    },
    BlockColour {
        id: "minecraft:purple_terracotta",
        rgb: [118, 69, 86],
    },
    BlockColour {
        id: "minecraft:blue_terracotta",
        rgb: [74, 59, 91],
    },
    BlockColour {
        id: "minecraft:brown_terracotta",
        rgb: [77, 51, 35],
    },
    BlockColour {
        id: "minecraft:green_terracotta",
        rgb: [76, 83, 42],
    },
    BlockColour {
        id: "minecraft:red_terracotta",
        rgb: [142, 60, 46],
    },
    BlockColour {
        id: "minecraft:black_terracotta",
        rgb: [37, 22, 16],
    },
    // Stone and natural blocks
    BlockColour {
        id: "minecraft:stone",
        rgb: [125, 125, 125],
    },
    BlockColour {
        id: "minecraft:cobblestone",
        rgb: [80, 80, 80],
    },
    BlockColour {
        id: "minecraft:smooth_stone",
        rgb: [158, 158, 158],
    },
    BlockColour {
        id: "minecraft:andesite",
        rgb: [134, 134, 134],
    },
    BlockColour {
        id: "minecraft:polished_andesite",
        rgb: [134, 134, 134],
    },
    BlockColour {
        id: "minecraft:diorite",
        rgb: [188, 188, 188],
    },
    BlockColour {
        id: "minecraft:polished_diorite",
        rgb: [188, 188, 188],
    },
    BlockColour {
        id: "minecraft:blackstone",
        rgb: [45, 37, 43],
    },
    BlockColour {
        id: "minecraft:polished_blackstone",
        rgb: [45, 37, 43],
    },
    BlockColour {
        id: "minecraft:polished_blackstone_bricks",
        rgb: [39, 33, 38],
    },
    BlockColour {
        id: "minecraft:calcite",
        rgb: [224, 224, 220],
    },
    BlockColour {
        id: "minecraft:quartz_block",
        rgb: [235, 229, 222],
    },
    BlockColour {
        id: "minecraft:sandstone",
        rgb: [218, 210, 158],
    },
    BlockColour {
        id: "minecraft:smooth_sandstone",
        rgb: [218, 210, 158],
    },
    BlockColour {
        id: "minecraft:red_sandstone",
        rgb: [191, 103, 33],
    },
    BlockColour {
        id: "minecraft:dirt",
        rgb: [134, 96, 67],
    },
    BlockColour {
        id: "minecraft:end_stone",
        rgb: [221, 223, 165],
    },
];
