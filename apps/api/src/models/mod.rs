// Typed views over third-party provider payloads.

pub mod careeronestop;
