//! Customer typeahead resolver.
//!
//! # Purpose
//!
//! * Owns the query text of a customer-picker input.
//! * Issues trailing-edge debounced lookups against a [`CustomerSearch`] capability.
//! * Publishes a single resolved selection (or none) to its owner through a [`SelectionObserver`].
//!
//! # Mental model
//!
//! * [`Typeahead`] lives on the owner's task and holds the authoritative [`QueryState`].
//! * Every scheduled search is tagged with a generation. The generation increments on each
//!   `set_query`, selection, and clear.
//! * Search tasks run detached and push [`TypeaheadEvent`]s back over a channel; the owner drains
//!   them with [`Typeahead::pump`] or [`Typeahead::next_event`].
//! * Only a settlement whose generation equals the current generation may touch results.
//!
//! # Invariants
//!
//! * `is_open` implies `results` is non-empty.
//! * A selection and an open suggestion list never coexist; `set_query` is ignored while a
//!   customer is selected.
//! * A settlement for a superseded generation never overwrites results.
//! * `text` is empty immediately after selection or clear.
//! * At most one debounce timer is pending per instance.
//!
//! # Concurrency & ordering
//!
//! * A new `set_query` cancels the pending timer outright.
//! * An already-fired search is not aborted when superseded; its settlement is discarded on arrival.
//! * Dropping the resolver cancels every task it spawned and closes the channel, so late
//!   settlements are no-ops.
//!
//! # Failure modes
//!
//! * Search failure: applied as an empty result set when current, logged, never surfaced.
//! * Panicking capability: the call runs in its own task, so the panic settles as
//!   [`SearchError::Panicked`] instead of leaving [`Typeahead::settle`] waiting.
//! * Stale settlement: dropped silently (logged at debug).

mod controller;
mod search;
mod state;
mod view;

pub use controller::{Typeahead, TypeaheadEvent};
pub use search::{CustomerSearch, SearchError, SelectionObserver};
pub use state::{Phase, QueryState, TypeaheadConfig};
pub use view::{CustomerCard, Hint, TypeaheadView};
