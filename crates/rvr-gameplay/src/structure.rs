/// Betting structure of a table.
///
/// - `NoLimit` — any raise-to between the min-raise and all-in; never capped
/// - `Limit` — the min-raise is the only legal size; capped after
///   [`rvr_core::LIMIT_BET_CAP`] aggressive actions in a round
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Structure {
    Limit,
    #[default]
    NoLimit,
}

impl Structure {
    pub fn is_limit(&self) -> bool {
        matches!(self, Self::Limit)
    }
    /// True once no further bet or raise is allowed this round.
    pub fn is_capped(&self, bet_count: usize) -> bool {
        match self {
            Self::Limit => bet_count >= rvr_core::LIMIT_BET_CAP,
            Self::NoLimit => false,
        }
    }
}

impl TryFrom<&str> for Structure {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "limit" | "fl" => Ok(Self::Limit),
            "nolimit" | "no-limit" | "nl" => Ok(Self::NoLimit),
            _ => Err(anyhow::anyhow!("invalid betting structure: {}", s)),
        }
    }
}

impl std::fmt::Display for Structure {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Limit => write!(f, "limit"),
            Self::NoLimit => write!(f, "no-limit"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_caps_at_four() {
        assert!(!Structure::Limit.is_capped(3));
        assert!(Structure::Limit.is_capped(4));
        assert!(!Structure::NoLimit.is_capped(400));
    }

    #[test]
    fn parse() {
        assert_eq!(Structure::try_from("NL").unwrap(), Structure::NoLimit);
        assert_eq!(Structure::try_from("limit").unwrap(), Structure::Limit);
        assert!(Structure::try_from("pot-limit").is_err());
    }
}
