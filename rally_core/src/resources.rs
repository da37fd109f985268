/// Seeded random number generator; every random draw in the simulation
/// goes through this so a fixed seed reproduces trajectories exactly.
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events raised during the current tick, cleared at the start of each
/// `advance`.
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub ball_hit_player: bool,
    pub ball_hit_ai: bool,
    pub round_reset: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ball_hit_wall = false;
        self.ball_hit_player = false;
        self.ball_hit_ai = false;
        self.round_reset = false;
    }
}
