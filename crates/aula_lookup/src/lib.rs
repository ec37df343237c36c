//! Async clients for two public REST catalogues.
//!
//! - **Characters**: `GET {base}/character/?name={query}`, first result wins
//! - **Creatures**: `GET {base}/pokemon/{query}` by name or number
//!
//! Queries are trimmed and lower-cased. Every failure, from an empty query
//! to a 404 or an undecodable body, surfaces as a [`LookupError`] whose
//! [`LookupError::user_message`] is the single line shown to people.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod error;
mod models;

pub use client::{Catalog, Endpoints, LookupClient, normalize_query};
pub use error::{ClientError, LookupError, LookupErrorKind, Subject};
pub use models::{
    AbilitySlot, Character, CharacterPage, Creature, DreamWorld, NamedLink, NamedResource,
    OtherSprites, PageInfo, Sprites, TypeSlot,
};
