// Not comparison based, so it doesn't fit the `Sort` interface.
pub mod radix;
