//! Events consumed by the reducer.

/// Input to `update::update`. Terminal input, timing ticks, and async
/// results from the runtime's inbox all arrive through this enum.
#[derive(Debug)]
pub enum UiEvent {
    /// Animation heartbeat; the only event that triggers a render.
    Tick,
    /// Emitted before other events each loop with the terminal size.
    Frame { width: u16, height: u16 },
    /// Raw terminal input.
    Terminal(crossterm::event::Event),
    /// A slide art load finished (successfully or not).
    ArtLoaded {
        generation: u64,
        index: usize,
        result: Result<String, String>,
    },
}
