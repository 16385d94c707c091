/*!
 * Caller identity extractor
 *
 * Responsibility:
 * - Hand the identity resolved by the access middleware to handlers
 * - Reject anonymous callers unless the request is marked public
 */

mod extract;

pub use extract::RequireCaller;
