//! Session-related types.

/// Session keys for per-client state.
///
/// Both values are optional: a session may hold neither, either, or both.
pub mod keys {
    /// Key for the logged-in user's [`byte_shop_core::UserId`].
    pub const USER_ID: &str = "user_id";

    /// Key for the cart, a `Vec<CartLine>` in insertion order.
    pub const CART: &str = "cart";
}
