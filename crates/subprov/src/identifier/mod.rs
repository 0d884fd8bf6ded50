mod imsi;
#[cfg(test)]
mod tests;

pub use imsi::*;
