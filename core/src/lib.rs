pub mod journal;
pub mod network;
pub mod preflight;
pub mod probe;
pub mod system;
