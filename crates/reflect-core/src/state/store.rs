use super::events::Event;
use super::types::Command;

/// Trait for dispatching collage commands.
///
/// # Semantics
///
/// - **Ordering**: Commands execute in the order received. No implicit batching.
/// - **Errors**: Invalid input (a slot out of range, a blank image reference,
///   choosing with no picker open) is an `Err` and leaves state untouched.
/// - **Events**: On success, dispatch returns the events describing what
///   changed, in order. A command that was accepted but had no effect yields
///   `Event::MutationIgnored`. Dispatch never blocks on the post sink; settle
///   the outstanding post separately.
pub trait Store {
    type Error;
    fn dispatch(&mut self, cmd: Command) -> Result<Vec<Event>, Self::Error>;
}
