use std::{cell::RefCell, rc::Rc};

use crate::sequence_game::Symbol;

/// Notifications sent by the Simon Says game. Showing colors or playing sounds is up to
/// the implementor.
pub trait GameListener {
    fn on_restart(&mut self) {}
    fn before_saying_colors(&mut self) {}
    fn say_color(&mut self, _symbol: Symbol) {}
    fn before_hearing_colors(&mut self) {}
    fn round_solved(&mut self) {}
    fn wrong_color(&mut self) {}
    fn game_solved(&mut self) {}
}

pub struct Fake;

impl GameListener for Fake {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Restart,
    BeforeSaying,
    Say(Symbol),
    BeforeHearing,
    RoundSolved,
    WrongColor,
    GameSolved,
}

pub struct Recorder {
    events: Rc<RefCell<Vec<GameEvent>>>,
}

impl Recorder {
    pub fn new(events: Rc<RefCell<Vec<GameEvent>>>) -> Self {
        Self { events }
    }

    fn push(&self, event: GameEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl GameListener for Recorder {
    fn on_restart(&mut self) {
        self.push(GameEvent::Restart);
    }

    fn before_saying_colors(&mut self) {
        self.push(GameEvent::BeforeSaying);
    }

    fn say_color(&mut self, symbol: Symbol) {
        self.push(GameEvent::Say(symbol));
    }

    fn before_hearing_colors(&mut self) {
        self.push(GameEvent::BeforeHearing);
    }

    fn round_solved(&mut self) {
        self.push(GameEvent::RoundSolved);
    }

    fn wrong_color(&mut self) {
        self.push(GameEvent::WrongColor);
    }

    fn game_solved(&mut self) {
        self.push(GameEvent::GameSolved);
    }
}

/// Writes every notification to the log.
pub struct Logging;

impl GameListener for Logging {
    fn on_restart(&mut self) {
        info!("new solution ready");
    }

    fn before_saying_colors(&mut self) {
        info!("watch out, here it comes:");
    }

    fn say_color(&mut self, symbol: Symbol) {
        info!("- {}", symbol);
    }

    fn before_hearing_colors(&mut self) {
        info!("your turn");
    }

    fn round_solved(&mut self) {
        info!("correct");
    }

    fn wrong_color(&mut self) {
        info!("wrong");
    }

    fn game_solved(&mut self) {
        info!("game solved");
    }
}
