use serde::{Deserialize, Serialize};

/// Number of satoshis in one bitcoin.
pub const SATS_PER_BTC: u64 = 100_000_000;

/// Last day covered by the published lookup table.
pub const TABLE_MAX: i64 = 364;

/// From this day on the daily reward no longer grows.
pub const SATURATION_DAY: i64 = 1000;

/// Daily reward once the streak has saturated.
pub const SATURATION_SATS: u64 = 1000;

// Published per-day rewards for days 1..=364, indexed by `day - 1`.
// https://legal.shakepay.com/master/rewards
const REWARDS_TABLE: [u64; TABLE_MAX as usize] = [
    21, 29, 34, 38, 41, 45, 48, 51, 54, 56,
    59, 62, 64, 67, 69, 71, 74, 76, 78, 80,
    82, 85, 87, 89, 91, 93, 95, 97, 99, 100,
    105, 108, 110, 112, 114, 116, 118, 120, 122, 123,
    125, 126, 128, 129, 131, 132, 133, 135, 136, 137,
    139, 140, 141, 142, 144, 145, 146, 147, 148, 150,
    151, 152, 153, 154, 155, 156, 157, 158, 159, 160,
    162, 163, 164, 165, 166, 167, 168, 169, 170, 171,
    172, 173, 174, 175, 175, 176, 177, 178, 179, 180,
    181, 182, 183, 184, 185, 186, 187, 187, 188, 189,
    190, 191, 192, 193, 194, 195, 195, 196, 197, 198,
    199, 200, 200, 201, 202, 203, 204, 205, 206, 206,
    207, 208, 209, 210, 210, 211, 212, 213, 214, 214,
    215, 216, 217, 218, 218, 219, 220, 221, 222, 222,
    223, 224, 225, 225, 226, 227, 228, 228, 229, 230,
    231, 231, 232, 233, 234, 234, 235, 236, 237, 237,
    238, 239, 240, 240, 241, 242, 243, 243, 244, 245,
    245, 246, 247, 248, 248, 249, 250, 250, 251, 252,
    253, 253, 254, 255, 255, 256, 257, 257, 258, 259,
    260, 260, 261, 262, 262, 263, 264, 264, 265, 266,
    266, 267, 268, 268, 269, 270, 270, 271, 272, 272,
    273, 274, 274, 275, 276, 276, 277, 278, 278, 279,
    280, 280, 281, 282, 282, 283, 284, 284, 285, 286,
    286, 287, 288, 288, 289, 289, 290, 291, 291, 292,
    293, 293, 294, 295, 295, 296, 296, 297, 298, 298,
    299, 300, 300, 301, 301, 302, 303, 303, 304, 305,
    305, 306, 306, 307, 308, 308, 309, 310, 310, 311,
    311, 312, 313, 313, 314, 314, 315, 316, 316, 317,
    317, 318, 319, 319, 320, 320, 321, 322, 322, 323,
    323, 324, 325, 325, 326, 326, 327, 328, 328, 329,
    329, 330, 331, 331, 332, 332, 333, 334, 334, 335,
    335, 336, 336, 337, 338, 338, 339, 339, 340, 341,
    341, 342, 342, 343, 343, 344, 345, 345, 345, 346,
    346, 347, 347, 348, 349, 349, 350, 350, 351, 351,
    352, 352, 352, 353, 353, 354, 355, 355, 356, 357,
    357, 358, 358, 359, 359, 360, 360, 361, 362, 362,
    363, 363, 364, 364,
];

/// Which part of the reward curve a day falls into.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewardRegion {
    /// Day zero or before the streak started.
    Inactive,
    /// Days 1..=364, read from the published table.
    Table,
    /// Days 365..=999, where the reward equals the day number.
    Linear,
    /// Day 1000 onwards.
    Saturated,
}

impl RewardRegion {
    pub fn label(&self) -> &'static str {
        match self {
            RewardRegion::Inactive => "inactive",
            RewardRegion::Table => "table",
            RewardRegion::Linear => "linear",
            RewardRegion::Saturated => "saturated",
        }
    }
}

pub fn region_for(day: i64) -> RewardRegion {
    if day <= 0 {
        RewardRegion::Inactive
    } else if day >= SATURATION_DAY {
        RewardRegion::Saturated
    } else if day <= TABLE_MAX {
        RewardRegion::Table
    } else {
        RewardRegion::Linear
    }
}

/// Satoshis earned on exactly `day` of a streak.
///
/// Total over all integers: non-positive days earn nothing, days past
/// saturation earn [`SATURATION_SATS`].
pub fn daily_accrual(day: i64) -> u64 {
    match region_for(day) {
        RewardRegion::Inactive => 0,
        RewardRegion::Saturated => SATURATION_SATS,
        RewardRegion::Table => REWARDS_TABLE[(day - 1) as usize],
        RewardRegion::Linear => day as u64,
    }
}
