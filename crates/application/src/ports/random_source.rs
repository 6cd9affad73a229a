/// Shared randomness for commands that pick or drop answers.
///
/// Implementations are used from many query tasks at once and must not need
/// `&mut self`. Sequences need not be reproducible across tasks.
pub trait RandomSource: Send + Sync {
    /// Uniform value in `[0, upper)`. `upper` is always greater than zero.
    fn below(&self, upper: usize) -> usize;
}
