/// Seam to the host's text-to-speech. Calls are fire-and-forget; the
/// runner only narrates when the session's audio flag is set.
pub trait Narrator {
    fn speak(&mut self, text: &str);
}

/// Narrator for silent runs
#[derive(Debug, Default)]
pub struct NullNarrator;

impl Narrator for NullNarrator {
    fn speak(&mut self, _text: &str) {}
}
