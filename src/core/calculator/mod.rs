pub mod balance;
pub mod grouping;
pub mod lateness;
pub mod pairing;
