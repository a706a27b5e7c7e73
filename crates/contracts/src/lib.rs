//! Shared contracts for the inventory board: wire DTOs and the pure
//! merge/filter/sort pipeline. No wasm dependencies — everything here
//! runs identically on native and wasm32 and is unit-tested natively.

pub mod collation;
pub mod format;
pub mod inventory;
pub mod pipeline;
pub mod snapshot;
pub mod vendor;
