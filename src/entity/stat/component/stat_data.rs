use std::fmt;

/// Results of one player over all finished matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayerStats {
    played: u32,
    won: u32,
    lost: u32,
    stale: u32,
}
impl PlayerStats {
    pub fn played(&self) -> u32 {
        self.played
    }
    pub fn won(&self) -> u32 {
        self.won
    }
    pub fn lost(&self) -> u32 {
        self.lost
    }
    pub fn stale(&self) -> u32 {
        self.stale
    }
    pub fn inc_won(&mut self) {
        self.played += 1;
        self.won += 1;
    }
    pub fn inc_lost(&mut self) {
        self.played += 1;
        self.lost += 1;
    }
    pub fn inc_stale(&mut self) {
        self.played += 1;
        self.stale += 1;
    }
}

impl fmt::Display for PlayerStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "played: {} won: {} lost: {} stale: {}",
            self.played, self.won, self.lost, self.stale
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_result_counts_as_played() {
        let mut stats = PlayerStats::default();
        stats.inc_won();
        stats.inc_lost();
        stats.inc_stale();
        assert_eq!(stats.played(), 3);
        assert_eq!(stats.won(), 1);
        assert_eq!(stats.lost(), 1);
        assert_eq!(stats.stale(), 1);
        assert_eq!(stats.to_string(), "played: 3 won: 1 lost: 1 stale: 1");
    }
}
