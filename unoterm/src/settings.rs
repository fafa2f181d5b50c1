use std::{env, str::FromStr};

use color_eyre::{eyre::WrapErr, Result};
use cuno::config::{ForcedColorAfterPenalty, RuleConfig};
use rand::{rngs::StdRng, SeedableRng};

pub const SEED_VAR: &str = "UNOTERM_SEED";
pub const PENALTY_COLOR_VAR: &str = "UNOTERM_PENALTY_COLOR";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Fixed shuffle seed; a fresh one is taken from the OS when unset.
    pub seed: Option<u64>,
    pub rules: RuleConfig,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let seed = lookup(SEED_VAR)
            .map(|value| {
                value
                    .trim()
                    .parse::<u64>()
                    .wrap_err_with(|| format!("{SEED_VAR} must be an unsigned integer, got {value:?}"))
            })
            .transpose()?;

        let forced_color_after_penalty = lookup(PENALTY_COLOR_VAR)
            .map(|value| {
                ForcedColorAfterPenalty::from_str(value.trim()).wrap_err_with(|| {
                    format!("{PENALTY_COLOR_VAR} must be `keep` or `clear`, got {value:?}")
                })
            })
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            seed,
            rules: RuleConfig {
                forced_color_after_penalty,
            },
        })
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
