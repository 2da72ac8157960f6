use std::fmt::{Display, Formatter};

use crate::core::mode::OperatingMode;

/// Command to the training node.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum NodeCommand {
    Start,
    Stop,
    Claim,
}

impl NodeCommand {
    /// Keep the node mining exactly while the simulator says so.
    #[must_use]
    pub fn decide(mode: OperatingMode, is_node_mining: bool) -> Option<Self> {
        match (mode, is_node_mining) {
            (OperatingMode::Mining, false) => Some(Self::Start),
            (OperatingMode::Idle | OperatingMode::Charging | OperatingMode::Draining, true) => {
                Some(Self::Stop)
            }
            _ => None,
        }
    }

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Claim => "claim",
        }
    }
}

impl Display for NodeCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_when_mining_is_due() {
        assert_eq!(NodeCommand::decide(OperatingMode::Mining, false), Some(NodeCommand::Start));
    }

    #[test]
    fn keeps_mining() {
        assert_eq!(NodeCommand::decide(OperatingMode::Mining, true), None);
    }

    #[test]
    fn stops_otherwise() {
        for mode in [OperatingMode::Idle, OperatingMode::Charging, OperatingMode::Draining] {
            assert_eq!(NodeCommand::decide(mode, true), Some(NodeCommand::Stop), "{mode}");
            assert_eq!(NodeCommand::decide(mode, false), None, "{mode}");
        }
    }
}
