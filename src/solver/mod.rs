//! Candidate elimination and guess selection

mod eliminator;
pub mod minimax;
pub mod strategy;

pub use eliminator::Eliminator;
pub use strategy::{
    FirstSurvivor, LastSurvivor, MinimaxStrategy, RandomSurvivor, Strategy, StrategyType,
};
