pub mod mocks;

pub use mocks::{test_helpers, MockPredictClient};
