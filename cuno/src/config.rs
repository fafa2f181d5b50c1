use strum_macros::{Display, EnumString};

/// What happens to a forced color when a player accepts a pending-draw penalty
/// instead of continuing the chain.
#[derive(Clone, Copy, Debug, Default, Display, EnumString, PartialEq, Eq)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ForcedColorAfterPenalty {
    /// The color chosen with the last wild stays in force.
    #[default]
    Keep,
    /// The color is dropped and any card may follow the wild.
    Clear,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RuleConfig {
    pub forced_color_after_penalty: ForcedColorAfterPenalty,
}
