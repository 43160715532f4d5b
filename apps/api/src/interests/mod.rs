// Preferences collector boundary: validation and local key-value storage of
// submitted interests. The matching engine itself never validates input.

pub mod handlers;
pub mod store;
pub mod validation;
