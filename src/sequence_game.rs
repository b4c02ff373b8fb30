use std::fmt;

use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::{
    color::ALPHABET_SIZE,
    config::Config,
    error::{check_range, check_size, Error, Result},
    game_listener::GameListener,
    logger,
    state_machine::PrefixMachine,
};

/// One of the four Simon Says colors, `0..4`.
pub type Symbol = u8;

pub trait SolutionSource {
    fn generate(&mut self, length: usize) -> Vec<Symbol>;
}

/// Every symbol is drawn independently and uniformly, repeats included.
pub struct RandomSolution<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomSolution<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSolution<SmallRng> {
    pub fn from_entropy() -> Self {
        Self::new(SmallRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    pub fn from_config(cfg: &Config) -> Self {
        match cfg.seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> SolutionSource for RandomSolution<R> {
    fn generate(&mut self, length: usize) -> Vec<Symbol> {
        (0..length)
            .map(|_| self.rng.gen_range(0..ALPHABET_SIZE as Symbol))
            .collect()
    }
}

/// Always hands out the same solution.
pub struct FixedSolution(pub Vec<Symbol>);

impl SolutionSource for FixedSolution {
    fn generate(&mut self, _length: usize) -> Vec<Symbol> {
        self.0.clone()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    NotStarted,
    /// Waiting for the player to repeat the current round.
    Hearing,
    /// A wrong symbol was entered, input is ignored until the next restart.
    Abandoned,
    Solved,
}

/// Simon Says: the player repeats a growing prefix of a random solution until the whole
/// solution has been repeated.
pub struct SequenceGame<L: GameListener, G: SolutionSource> {
    target_length: usize,
    solution: Vec<Symbol>,
    machine: PrefixMachine,
    status: GameStatus,
    listener: L,
    source: G,
}

impl<L: GameListener, G: SolutionSource> SequenceGame<L, G> {
    pub fn new(cfg: &Config, listener: L, source: G) -> Self {
        logger::init_from_config(cfg);
        if cfg.target_length == 0 {
            warn!("target length 0 is not playable, using 1");
        }

        Self {
            target_length: cfg.target_length.max(1),
            solution: vec![],
            machine: PrefixMachine::new(),
            status: GameStatus::NotStarted,
            listener,
            source,
        }
    }

    pub fn target_length(&self) -> usize {
        self.target_length
    }

    pub fn solution(&self) -> &[Symbol] {
        &self.solution
    }

    /// Length of the prefix the player has to repeat in this round.
    pub fn current_length(&self) -> usize {
        self.machine.terminal()
    }

    /// Symbols of the current round repeated correctly so far.
    pub fn match_position(&self) -> usize {
        self.machine.state()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    /// Starts a new game with a fresh solution and says the first round.
    pub fn restart(&mut self) -> Result<()> {
        let solution = self.source.generate(self.target_length);
        check_size("solution", self.target_length, solution.len())?;
        for &symbol in &solution {
            check_range("symbol", symbol as usize, ALPHABET_SIZE)?;
        }

        debug!("solution is {:?}", solution);
        self.solution = solution;
        self.machine = PrefixMachine::new();
        self.status = GameStatus::Hearing;

        self.listener.on_restart();
        self.next_round();
        Ok(())
    }

    /// Feeds one symbol entered by the player. Returns whether it was the expected one.
    pub fn receive_input(&mut self, symbol: Symbol) -> Result<bool> {
        if self.status == GameStatus::NotStarted {
            return Err(Error::NotStarted);
        }
        check_range("symbol", symbol as usize, ALPHABET_SIZE)?;

        if self.status != GameStatus::Hearing {
            debug!("ignoring symbol {}: game is {:?}", symbol, self.status);
            return Ok(false);
        }

        if !self.machine.trigger(symbol) {
            warn!(
                "wrong symbol {} in {}, expected {}",
                symbol,
                self.machine.state_name(),
                self.solution[self.match_position()]
            );
            self.status = GameStatus::Abandoned;
            self.listener.wrong_color();
            return Ok(false);
        }

        if self.machine.is_terminal() {
            self.round_solved();
        }
        Ok(true)
    }

    fn next_round(&mut self) {
        let length = self.current_length();
        self.machine.push(self.solution[length]);
        info!("round {} of {}", length + 1, self.target_length);
        self.say();
    }

    fn say(&mut self) {
        self.listener.before_saying_colors();
        for &symbol in &self.solution[..self.current_length()] {
            self.listener.say_color(symbol);
        }
        self.listener.before_hearing_colors();
    }

    fn round_solved(&mut self) {
        self.listener.round_solved();
        if self.current_length() < self.target_length {
            self.next_round();
        } else {
            info!("game solved");
            self.status = GameStatus::Solved;
            self.listener.game_solved();
        }
    }
}

impl<L: GameListener, G: SolutionSource> fmt::Display for SequenceGame<L, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SequenceGame (final length {}, current length {}, solution {:?})",
            self.target_length,
            self.current_length(),
            self.solution
        )
    }
}
