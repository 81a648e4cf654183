/// One of the two seats at the table.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Player {
    #[default]
    P0 = 0,
    P1 = 1,
}

impl Player {
    pub const fn both() -> [Self; 2] {
        [Player::P0, Player::P1]
    }
    pub const fn other(&self) -> Self {
        match self {
            Player::P0 => Player::P1,
            Player::P1 => Player::P0,
        }
    }
}

/// usize isomorphism, for indexing per-player arrays
impl From<Player> for usize {
    fn from(p: Player) -> usize {
        p as usize
    }
}
impl From<usize> for Player {
    fn from(n: usize) -> Self {
        match n {
            0 => Player::P0,
            1 => Player::P1,
            _ => panic!("heads up only: {}", n),
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{}", usize::from(*self))
    }
}

impl TryFrom<&str> for Player {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "P0" => Ok(Player::P0),
            "P1" => Ok(Player::P1),
            _ => Err(anyhow::anyhow!("invalid player: {}", s)),
        }
    }
}
