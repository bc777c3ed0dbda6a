pub mod structs;

pub const GALACTIC_MARKET_COPYRIGHT: &str = "© 2023 Galactic Market Inc.";
