mod journal;
mod probe;
mod utils;
